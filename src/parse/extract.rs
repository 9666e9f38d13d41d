//! The extraction operations: pure functions from text to data, one per
//! construct of the exposition format. No I/O, no shared mutable state;
//! concurrent calls on independent inputs need no coordination.

use std::convert::TryFrom;

use lazy_static::lazy_static;
use regex::Regex;

use crate::grammar;
use crate::model::{LabelName, Labels, MetricType, SampleValue};

/// Finds every maximal family block in the payload: an optional help line,
/// a required type line, then one or more consecutive sample lines. Blocks
/// cannot overlap because each one consumes its own type line and sample
/// run.
pub fn extract_family_blocks(text: &str) -> Vec<&str> {
    lazy_static! {
        static ref RE: Regex = Regex::new(&grammar::family_block()).unwrap();
    }
    RE.find_iter(text).map(|m| m.as_str()).collect()
}

/// The trailing text of the block's first help line, if any.
pub fn extract_help(block: &str) -> Option<&str> {
    lazy_static! {
        static ref RE: Regex = Regex::new(&format!(
            r"{}{}[ \t]+(?P<help>[^\n]*)",
            grammar::HELP_PREFIX,
            grammar::metric_name()
        ))
        .unwrap();
    }
    RE.captures(block)?.name("help").map(|m| m.as_str())
}

/// The block's type token, constrained to the enumerated type set.
pub fn extract_type(block: &str) -> Option<MetricType> {
    lazy_static! {
        static ref RE: Regex = Regex::new(&format!(
            r"{}(?:{}[ \t]+)?(?P<type>{})",
            grammar::TYPE_PREFIX,
            grammar::metric_name(),
            grammar::type_tokens()
        ))
        .unwrap();
    }
    let caps = RE.captures(block)?;
    let token = caps
        .name("type")
        .expect("a type capture is always present in a matching type line")
        .as_str();
    MetricType::try_from(token).ok()
}

/// The contiguous run of sample lines following the type line, split into
/// individual lines with blanks discarded.
pub fn extract_sample_lines(block: &str) -> Vec<&str> {
    lazy_static! {
        static ref RE: Regex = Regex::new(&format!(
            r"{}\n(?P<run>{})",
            grammar::type_line(),
            grammar::sample_run()
        ))
        .unwrap();
    }
    let caps = match RE.captures(block) {
        Some(caps) => caps,
        None => return Vec::new(),
    };
    caps.name("run")
        .expect("a run capture is always present in a matching block")
        .as_str()
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect()
}

/// The union of label names over the block's sample lines, in first-seen
/// order. Presentational metadata only: a sample's actual labels are never
/// filtered against it, so e.g. a histogram's `le` stays in both.
pub fn extract_label_schema(lines: &[&str]) -> Vec<LabelName> {
    let mut schema: Vec<LabelName> = Vec::new();
    for line in lines {
        for (name, _) in label_clauses(line) {
            if !schema.iter().any(|n| n == name) {
                schema.push(name.to_string());
            }
        }
    }
    schema
}

/// The leading metric name of a sample line.
pub fn extract_metric_name(line: &str) -> Option<&str> {
    lazy_static! {
        static ref RE: Regex =
            Regex::new(&format!("^{}", grammar::metric_name())).unwrap();
    }
    RE.find(line).map(|m| m.as_str())
}

/// The family-level name derived from the first sample line. For histogram
/// blocks exactly one trailing `_bucket`, `_count`, or `_sum` comes off,
/// longest first, case-sensitively; per-sample names keep their suffix.
pub fn extract_canonical_name(lines: &[&str], family_type: MetricType) -> Option<String> {
    let name = lines.iter().find_map(|line| extract_metric_name(line))?;
    if family_type == MetricType::Histogram {
        return Some(strip_histogram_suffix(name).to_string());
    }
    Some(name.to_string())
}

fn strip_histogram_suffix(name: &str) -> &str {
    for suffix in &["_bucket", "_count", "_sum"] {
        if let Some(stripped) = name.strip_suffix(suffix) {
            return stripped;
        }
    }
    name
}

/// The label pairs of one sample line, in encounter order; a duplicate name
/// collapses to its last-seen value.
pub fn extract_sample_labels(line: &str) -> Labels {
    let mut labels = Labels::new();
    for (name, value) in label_clauses(line) {
        labels.insert(name, value);
    }
    labels
}

/// The line's trailing numeric token parsed to a double, or `None` when the
/// trailing token is not a valid numeric literal.
pub fn extract_sample_value(line: &str) -> Option<SampleValue> {
    lazy_static! {
        static ref RE: Regex =
            Regex::new(&format!("(?P<value>{})$", grammar::metric_value())).unwrap();
    }
    RE.captures(line)?
        .name("value")
        .expect("a value capture is always present in a matching line")
        .as_str()
        .parse::<SampleValue>()
        .ok()
}

fn label_clauses<'a>(line: &'a str) -> impl Iterator<Item = (&'a str, &'a str)> {
    lazy_static! {
        static ref RE: Regex = Regex::new(&format!(
            "(?P<name>{})=\"(?P<value>{})\"",
            grammar::label_name(),
            grammar::LABEL_VALUE_BODY
        ))
        .unwrap();
    }
    RE.captures_iter(line).map(|caps| {
        (
            caps.name("name")
                .expect("a name capture is always present in a matching clause")
                .as_str(),
            caps.name("value")
                .expect("a value capture is always present in a matching clause")
                .as_str(),
        )
    })
}
