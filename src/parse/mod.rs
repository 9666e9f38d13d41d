mod extract;
mod parser;

pub use extract::{
    extract_canonical_name, extract_family_blocks, extract_help, extract_label_schema,
    extract_metric_name, extract_sample_labels, extract_sample_lines, extract_sample_value,
    extract_type,
};
pub use parser::{parse, parse_with};
