mod family;
mod labels;
mod sample;

pub use family::{Family, MetricName, MetricType};
pub use labels::{LabelName, LabelValue, Labels};
pub use sample::{Sample, SampleValue};
