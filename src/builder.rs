//! Validated construction of model entities from explicit field structs.
//! Absent fields take their defaults (`""`, empty labels, `0.0`). This is
//! the one place an invalid type token becomes a caught error.

use std::convert::TryFrom;

use crate::error::Result;
use crate::model::{Family, LabelName, Labels, MetricType, Sample, SampleValue};

/// Field set for [`Family`] construction.
#[derive(Debug, Default)]
pub struct FamilyFields {
    pub name: String,
    pub type_token: String,
    pub help: String,
    pub labels: Vec<LabelName>,
}

/// Builds a validated family. The type token is checked against the
/// enumerated type set; duplicate declared label names collapse to their
/// first occurrence.
pub fn build_family(fields: FamilyFields) -> Result<Family> {
    let family_type = MetricType::try_from(fields.type_token.as_str())?;
    let mut labels: Vec<LabelName> = Vec::with_capacity(fields.labels.len());
    for name in fields.labels {
        if !labels.contains(&name) {
            labels.push(name);
        }
    }
    Ok(Family::new(fields.name, family_type, fields.help, labels))
}

/// Field set for [`Sample`] construction.
#[derive(Debug, Default)]
pub struct SampleFields {
    pub name: String,
    pub labels: Labels,
    pub value: SampleValue,
}

/// Builds a sample. The value is already a parsed double here; lines whose
/// value token never parsed are skipped upstream and reach no builder.
pub fn build_sample(fields: SampleFields) -> Sample {
    Sample::new(fields.name, fields.labels, fields.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_family() -> std::result::Result<(), String> {
        let family = build_family(FamilyFields {
            name: "http_requests_total".into(),
            type_token: "counter".into(),
            help: "Total requests".into(),
            labels: vec!["method".into(), "code".into(), "method".into()],
        })?;

        assert_eq!(family.name(), "http_requests_total");
        assert_eq!(family.family_type(), MetricType::Counter);
        assert_eq!(family.help(), "Total requests");
        assert_eq!(family.labels(), &["method".to_string(), "code".to_string()][..]);
        assert!(family.samples().is_empty());
        Ok(())
    }

    #[test]
    fn test_build_family_rejects_unknown_type_token() {
        let err = build_family(FamilyFields {
            name: "x".into(),
            type_token: "unknown".into(),
            ..Default::default()
        })
        .expect_err("construction should have failed");

        assert!(err.message().contains("'unknown'"), "got: {}", err.message());
        assert!(
            err.message()
                .contains("('counter', 'gauge', 'histogram', 'summary')"),
            "got: {}",
            err.message()
        );
    }

    #[test]
    fn test_build_family_rejects_default_type_token() {
        // An all-default field set still fails: the empty token is not in
        // the type set.
        assert!(build_family(FamilyFields::default()).is_err());
    }

    #[test]
    fn test_build_sample_defaults() {
        let sample = build_sample(SampleFields::default());
        assert_eq!(sample.name(), "");
        assert!(sample.labels().is_empty());
        assert_eq!(sample.value(), 0.0);
    }
}
