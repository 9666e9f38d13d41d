//! Composable pattern fragments for the exposition-text grammar.
//!
//! Each fragment is a pure function returning a piece of `regex` syntax with
//! no capture groups, so larger fragments are built left-to-right from
//! smaller ones without re-parsing. Extraction code wraps the pieces it needs
//! in its own named captures.
//!
//! The `regex` engine runs in time linear in the input, so hostile label text
//! (long runs of quote characters and the like) cannot make a scan
//! superlinear even though `label_group` nests quantifiers.

use crate::model::MetricType;

pub(crate) const HELP_PREFIX: &str = r"#\sHELP[ \t]+";
pub(crate) const TYPE_PREFIX: &str = r"#\sTYPE[ \t]+";
pub(crate) const LABEL_VALUE_BODY: &str = r#"[^"]*"#;

/// `[a-zA-Z_:][a-zA-Z0-9_:]*`
pub fn metric_name() -> &'static str {
    "[a-zA-Z_:][a-zA-Z0-9_:]*"
}

/// Optional sign, digits with an optional fractional part, optional
/// exponent. Anything else in value position is not numeric.
pub fn metric_value() -> &'static str {
    r"[-+]?(?:[0-9]*\.)?[0-9]+(?:[eE][-+]?[0-9]+)?"
}

/// `[a-zA-Z_][a-zA-Z0-9_]*`
pub fn label_name() -> &'static str {
    "[a-zA-Z_][a-zA-Z0-9_]*"
}

/// A double-quoted string with no embedded quotes.
pub fn label_value() -> String {
    format!("\"{}\"", LABEL_VALUE_BODY)
}

/// `name="value"`
pub fn label_clause() -> String {
    format!("{}={}", label_name(), label_value())
}

/// `{clause,clause,...}`, where an absent group means no labels. A trailing
/// comma before the closing brace is tolerated, an empty group is not.
pub fn label_group() -> String {
    format!(r"(?:\{{(?:{},?)+\}})?", label_clause())
}

/// One sample line: name, optional label group, required whitespace, value.
/// The separator is horizontal whitespace only, so a multiline scan can
/// never fuse two lines into one sample.
pub fn sample_line() -> String {
    format!(r"{}{}[ \t]+{}", metric_name(), label_group(), metric_value())
}

/// A contiguous run of sample lines.
pub fn sample_run() -> String {
    format!(r"(?:{}\n?)+", sample_line())
}

/// `# HELP <name> <free text up to end of line>`
pub fn help_line() -> String {
    format!(r"{}{}[ \t]+[^\n]*", HELP_PREFIX, metric_name())
}

/// The alternation of valid type tokens, built from [`MetricType::ALL`].
pub fn type_tokens() -> String {
    MetricType::ALL
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join("|")
}

/// `# TYPE <name> <token>`, the metric name being optional.
pub fn type_line() -> String {
    format!(
        r"{}(?:{}[ \t]+)?(?:{})",
        TYPE_PREFIX,
        metric_name(),
        type_tokens()
    )
}

/// A whole family block: an optional help line, a required type line, then
/// one or more consecutive sample lines.
pub fn family_block() -> String {
    format!(r"(?:{}\n)?{}\n{}", help_line(), type_line(), sample_run())
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn whole_match(pattern: &str, input: &str) -> bool {
        Regex::new(&format!("^(?:{})$", pattern))
            .unwrap()
            .is_match(input)
    }

    #[test]
    fn test_fragments_compile() {
        for pattern in &[
            metric_name().to_string(),
            metric_value().to_string(),
            label_name().to_string(),
            label_value(),
            label_clause(),
            label_group(),
            sample_line(),
            sample_run(),
            help_line(),
            type_line(),
            family_block(),
        ] {
            assert!(Regex::new(pattern).is_ok(), "bad pattern: {}", pattern);
        }
    }

    #[test]
    fn test_metric_value() {
        for value in &["0", "10", "-5", "+3", "1.25", ".5", "2e-5", "1.2E+10"] {
            assert!(whole_match(metric_value(), value), "should match: {}", value);
        }
        for value in &["", "five", "0x1f", "5.", "1e", "NaN", "+Inf"] {
            assert!(
                !whole_match(metric_value(), value),
                "should not match: {}",
                value
            );
        }
    }

    #[test]
    fn test_sample_line() {
        for line in &[
            "http_requests_total 10",
            "http_requests_total{method=\"get\"} 10",
            "latency_bucket{le=\"0.1\",} 5",
            "up\t1",
        ] {
            assert!(whole_match(&sample_line(), line), "should match: {}", line);
        }
        for line in &[
            "http_requests_total",
            "http_requests_total{} 10",
            "http_requests_total{method=get} 10",
            "# HELP x y",
            "1_starts_with_digit 5",
        ] {
            assert!(
                !whole_match(&sample_line(), line),
                "should not match: {}",
                line
            );
        }
    }

    #[test]
    fn test_type_line_tokens_come_from_the_type_set() {
        for token in &["counter", "gauge", "histogram", "summary"] {
            assert!(whole_match(
                &type_line(),
                &format!("# TYPE x {}", token)
            ));
        }
        assert!(whole_match(&type_line(), "# TYPE gauge"));
        assert!(!whole_match(&type_line(), "# TYPE x untyped"));
        assert!(!whole_match(&type_line(), "# TYPE x"));
    }

    #[test]
    fn test_family_block() {
        let block = "# HELP http_requests_total Total requests\n\
                     # TYPE http_requests_total counter\n\
                     http_requests_total{method=\"get\"} 10\n\
                     http_requests_total{method=\"post\"} 3";
        assert!(whole_match(&family_block(), block));

        let no_help = "# TYPE x gauge\nx 1";
        assert!(whole_match(&family_block(), no_help));

        let no_type = "# HELP x About x\nx 1";
        assert!(!whole_match(&family_block(), no_type));

        let no_samples = "# HELP x About x\n# TYPE x gauge";
        assert!(!whole_match(&family_block(), no_samples));
    }

    #[test]
    fn test_hostile_label_text_terminates_quickly() {
        // A long unterminated quote run used to be the classic way to blow
        // up backtracking matchers on this grammar.
        let line = format!("m{{l=\"{}", "\"".repeat(10_000));
        assert!(!whole_match(&sample_line(), &line));
    }
}
