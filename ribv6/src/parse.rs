//! Route file parser.
//!
//! One route per line, `address/mask-length,metric`. Lines that don't parse
//! are skipped. Fields past the metric are ignored.

use std::fs;
use std::path::Path;

use ipnet::Ipv6Net;
use tracing::debug;

use crate::{Error, Route};

pub fn parse_line(line: &str) -> Option<Route> {
    let mut fields = line.split(',');
    let prefix: Ipv6Net = fields.next()?.trim().parse().ok()?;
    let metric: u32 = fields.next()?.trim().parse().ok()?;
    Some(Route::from_prefix(prefix, metric))
}

pub fn parse_str(input: &str) -> Vec<Route> {
    let mut routes = Vec::new();
    for (num, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line) {
            Some(route) => routes.push(route),
            None => debug!(line = num + 1, text = line, "skipping unparsable route"),
        }
    }
    routes
}

pub fn parse_file(path: impl AsRef<Path>) -> Result<Vec<Route>, Error> {
    let path = path.as_ref();
    let input = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_str(&input))
}
