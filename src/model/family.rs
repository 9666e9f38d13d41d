use std::convert::TryFrom;
use std::fmt;

use super::labels::LabelName;
use super::sample::Sample;
use crate::error::{Error, Result};

pub type MetricName = String;

/// The closed set of family types. Extending the exposition format with a
/// new type means adding a variant here and to [`MetricType::ALL`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MetricType {
    Counter,
    Gauge,
    Histogram,
    Summary,
}

impl MetricType {
    /// Every valid type token, in declaration order.
    pub const ALL: [MetricType; 4] = [
        MetricType::Counter,
        MetricType::Gauge,
        MetricType::Histogram,
        MetricType::Summary,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MetricType::Counter => "counter",
            MetricType::Gauge => "gauge",
            MetricType::Histogram => "histogram",
            MetricType::Summary => "summary",
        }
    }
}

impl fmt::Display for MetricType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for MetricType {
    type Error = Error;

    fn try_from(token: &str) -> Result<Self> {
        MetricType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == token)
            .ok_or_else(|| {
                let valid = MetricType::ALL
                    .iter()
                    .map(|t| t.as_str())
                    .collect::<Vec<_>>()
                    .join("', '");
                Error::from(format!(
                    "metric type '{}' is not valid; try one of ('{}')",
                    token, valid
                ))
            })
    }
}

/// One metric family: a canonical name, a type, help text, the declared
/// label schema, and the samples it owns.
///
/// The schema is presentational metadata derived from the samples that were
/// seen; it never constrains which labels a sample may carry.
#[derive(Debug)]
pub struct Family {
    name: MetricName,
    family_type: MetricType,
    help: String,
    labels: Vec<LabelName>,
    samples: Vec<Sample>,
}

impl Family {
    pub(crate) fn new(
        name: MetricName,
        family_type: MetricType,
        help: String,
        labels: Vec<LabelName>,
    ) -> Self {
        Self {
            name,
            family_type,
            help,
            labels,
            samples: Vec::new(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn family_type(&self) -> MetricType {
        self.family_type
    }

    #[inline]
    pub fn help(&self) -> &str {
        &self.help
    }

    #[inline]
    pub fn labels(&self) -> &[LabelName] {
        &self.labels
    }

    #[inline]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// The single assignment that finalizes a family.
    pub fn set_samples(&mut self, samples: Vec<Sample>) {
        self.samples = samples;
    }
}

// Renders the family back to exposition text: a help line, a type line,
// then each sample in order.
impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "# HELP {} {}", self.name, self.help)?;
        writeln!(f, "# TYPE {} {}", self.name, self.family_type)?;
        for sample in &self.samples {
            write!(f, "{}", sample)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Labels;

    #[test]
    fn test_metric_type_from_token() {
        for (token, expected) in &[
            ("counter", MetricType::Counter),
            ("gauge", MetricType::Gauge),
            ("histogram", MetricType::Histogram),
            ("summary", MetricType::Summary),
        ] {
            assert_eq!(MetricType::try_from(*token).unwrap(), *expected);
        }
    }

    #[test]
    fn test_metric_type_from_unknown_token() {
        for token in &["", "Counter", "untyped", "histogramm"] {
            let err = MetricType::try_from(*token).expect_err("token should have been rejected");
            assert!(err.message().contains(token), "got: {}", err.message());
            assert!(
                err.message()
                    .contains("('counter', 'gauge', 'histogram', 'summary')"),
                "got: {}",
                err.message()
            );
        }
    }

    #[test]
    fn test_display() {
        let mut family = Family::new(
            "http_requests_total".into(),
            MetricType::Counter,
            "Total requests".into(),
            vec!["method".into()],
        );
        family.set_samples(vec![Sample::new(
            "http_requests_total".into(),
            vec![("method", "get")].into_iter().collect::<Labels>(),
            10.0,
        )]);

        assert_eq!(
            family.to_string(),
            "# HELP http_requests_total Total requests\n\
             # TYPE http_requests_total counter\n\
             http_requests_total{method=\"get\"} 10\n",
        );
    }
}
