use std::collections::BTreeMap;

use serde::Serialize;
use serde_json;

use crate::error::Result;
use crate::model::{Family, Sample};

// [
//   {
//     "name": "http_requests_total",
//     "type": "counter",
//     "help": "Total requests",
//     "labels": ["method"],
//     "samples": [
//       {"name": "http_requests_total", "labels": {"method": "get"}, "value": 10.0}
//     ]
//   }
// ]
#[derive(Serialize)]
struct SampleRepr<'a> {
    name: &'a str,
    labels: BTreeMap<&'a str, &'a str>,
    value: f64,
}

#[derive(Serialize)]
struct FamilyRepr<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    family_type: &'a str,
    help: &'a str,
    labels: &'a [String],
    samples: Vec<SampleRepr<'a>>,
}

impl<'a> From<&'a Sample> for SampleRepr<'a> {
    fn from(sample: &'a Sample) -> Self {
        Self {
            name: sample.name(),
            labels: sample.labels().iter().collect(),
            value: sample.value(),
        }
    }
}

impl<'a> From<&'a Family> for FamilyRepr<'a> {
    fn from(family: &'a Family) -> Self {
        Self {
            name: family.name(),
            family_type: family.family_type().as_str(),
            help: family.help(),
            labels: family.labels(),
            samples: family.samples().iter().map(SampleRepr::from).collect(),
        }
    }
}

pub fn to_json(families: &[Family]) -> Result<String> {
    let reprs: Vec<FamilyRepr> = families.iter().map(FamilyRepr::from).collect();
    serde_json::to_string_pretty(&reprs).map_err(|e| ("JSON serialization failed", e).into())
}
