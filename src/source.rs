//! Byte-supply collaborators. Each one hands the core a complete in-memory
//! string before parsing begins; no I/O happens inside the pipeline itself.

use std::fs;

use crate::error::Result;
use crate::model::Family;
use crate::parse;

/// Reads a whole file into memory.
pub fn fetch_file(path: &str) -> Result<String> {
    fs::read_to_string(path).map_err(|e| (format!("couldn't read file '{}'", path), e).into())
}

/// Performs a blocking GET, following redirects, and returns the body.
pub fn fetch_url(url: &str) -> Result<String> {
    let response = reqwest::blocking::get(url)
        .and_then(|response| response.error_for_status())
        .map_err(|e| (format!("GET '{}' failed", url), e))?;
    response
        .text()
        .map_err(|e| (format!("couldn't read response body from '{}'", url), e).into())
}

/// Parses the contents of a metrics text file.
pub fn parse_file(path: &str) -> Result<Vec<Family>> {
    parse::parse(&fetch_file(path)?)
}

/// Scrapes a metrics endpoint once and parses the payload.
pub fn parse_url(url: &str) -> Result<Vec<Family>> {
    parse::parse(&fetch_url(url)?)
}
