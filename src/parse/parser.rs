use log::debug;

use super::extract;
use crate::builder::{self, FamilyFields, SampleFields};
use crate::error::{Error, Result};
use crate::model::{Family, LabelName, Labels, MetricName};

/// Parses a whole exposition payload into metric families.
///
/// Anomalies are absorbed per unit: a sample line whose value is not numeric
/// is skipped, and a block missing its help line, type line, or a derivable
/// name produces no family. One malformed unit never aborts the rest of the
/// payload.
pub fn parse(text: &str) -> Result<Vec<Family>> {
    parse_with(text, "", &[], &[])
}

/// The extended variant of [`parse`]. A non-empty `prefix` replaces every
/// family and sample name with `prefix_name`, and the added label pairs are
/// merged into every sample's label set between the family-schema labels
/// and the sample-specific ones. The added name and value slices must be
/// the same size or the call fails before any extraction.
pub fn parse_with(
    text: &str,
    prefix: &str,
    added_label_names: &[String],
    added_label_values: &[String],
) -> Result<Vec<Family>> {
    if added_label_names.len() != added_label_values.len() {
        return Err(Error::new(
            "added label names and added label values must be the same size",
        ));
    }

    let mut families = Vec::new();
    for block in extract::extract_family_blocks(text) {
        match assemble_family(block, prefix, added_label_names, added_label_values)? {
            Some(family) => families.push(family),
            None => debug!(
                "skipping incomplete exposition block starting with {:?}",
                block.lines().next().unwrap_or("")
            ),
        }
    }
    Ok(families)
}

fn assemble_family(
    block: &str,
    prefix: &str,
    added_label_names: &[String],
    added_label_values: &[String],
) -> Result<Option<Family>> {
    let help = extract::extract_help(block);
    let family_type = extract::extract_type(block);
    let lines = extract::extract_sample_lines(block);
    let schema = extract::extract_label_schema(&lines);
    let canonical = family_type.and_then(|t| extract::extract_canonical_name(&lines, t));

    // All three or nothing. Blocks without a help line are dropped too,
    // even though the grammar treats help as optional.
    let (help, family_type, canonical) = match (help, family_type, canonical) {
        (Some(help), Some(family_type), Some(canonical)) => (help, family_type, canonical),
        _ => return Ok(None),
    };

    let mut family = builder::build_family(FamilyFields {
        name: prefixed(prefix, &canonical),
        type_token: family_type.to_string(),
        help: help.to_string(),
        labels: schema,
    })?;

    let mut samples = Vec::new();
    for line in &lines {
        let value = match extract::extract_sample_value(line) {
            Some(value) => value,
            None => {
                debug!("skipping sample line with non-numeric value: {:?}", line);
                continue;
            }
        };
        let name = match extract::extract_metric_name(line) {
            Some(name) => name,
            None => continue,
        };
        samples.push(builder::build_sample(SampleFields {
            name: prefixed(prefix, name),
            labels: merge_labels(
                family.labels(),
                &extract::extract_sample_labels(line),
                added_label_names,
                added_label_values,
            ),
            value,
        }));
    }
    family.set_samples(samples);
    Ok(Some(family))
}

// Merge order: family-schema labels, then injected labels, then
// sample-specific labels. A later entry wins a name collision while the
// name keeps its first-seen position.
fn merge_labels(
    schema: &[LabelName],
    own: &Labels,
    added_label_names: &[String],
    added_label_values: &[String],
) -> Labels {
    let mut merged = Labels::new();
    for (name, value) in own.iter() {
        if schema.iter().any(|s| s == name) {
            merged.insert(name, value);
        }
    }
    for (name, value) in added_label_names.iter().zip(added_label_values) {
        merged.insert(name.as_str(), value.as_str());
    }
    for (name, value) in own.iter() {
        if !schema.iter().any(|s| s == name) {
            merged.insert(name, value);
        }
    }
    merged
}

fn prefixed(prefix: &str, name: &str) -> MetricName {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}_{}", prefix, name)
    }
}
