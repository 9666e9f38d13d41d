//! Parse Prometheus exposition text into metric families.
//!
//! The pipeline turns a scraped payload into [`model::Family`] values, each
//! owning its [`model::Sample`]s:
//!
//! ```
//! let text = "# HELP up Instance is up\n# TYPE up gauge\nup{job=\"api\"} 1\n";
//!
//! let families = promfam::parse::parse(text).unwrap();
//! assert_eq!(families[0].name(), "up");
//! assert_eq!(families[0].samples()[0].value(), 1.0);
//! ```

pub mod builder;
pub mod cliopt;
pub mod error;
pub mod format;
pub mod grammar;
pub mod model;
pub mod parse;
pub mod source;
