use std::fmt;

use super::family::MetricName;
use super::labels::Labels;

pub type SampleValue = f64;

/// One observed value line. The name is kept exactly as it appeared on the
/// line, so a histogram sample retains its `_bucket`/`_count`/`_sum` suffix
/// even though its owning family does not.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    name: MetricName,
    labels: Labels,
    value: SampleValue,
}

impl Sample {
    pub(crate) fn new(name: MetricName, labels: Labels, value: SampleValue) -> Self {
        Self {
            name,
            labels,
            value,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    #[inline]
    pub fn value(&self) -> SampleValue {
        self.value
    }
}

// Renders as `name{k="v",...} value` plus a line terminator. The value uses
// Rust's default f64 formatting (shortest text that round-trips), so whole
// numbers come out without a fractional part.
impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}{} {}", self.name, self.labels, self.value)
    }
}
