//! Sum the integers in a line-oriented text file.
//!
//! Lines that do not parse are logged at warning and skipped. Only failing to
//! open or read the file is fatal.

use crate::error::DrillError;
use crate::traits::EventLog;
use malachite::Integer;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use std::str::FromStr;

pub const NON_INTEGER_WARNING: &str = "Received non-integer input";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SumReport {
    /// Accepted values, in input order.
    pub values: Vec<Integer>,
    /// Raw lines that failed to parse, in input order.
    pub rejected: Vec<String>,
    pub total: Integer,
}

/// Parse one base-10 integer token of any size.
///
/// Surrounding whitespace is ignored. The token is an optional `+` or `-`
/// followed by ASCII digits `0-9`, with single underscores allowed between
/// digit groups. Digits from other scripts (e.g. `٣`) are not accepted.
pub fn parse_integer(raw: &str) -> Option<Integer> {
    let token = raw.trim();
    let (sign, body) = match token.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", token.strip_prefix('+').unwrap_or(token)),
    };

    if body.is_empty()
        || !body
            .split('_')
            .all(|group| !group.is_empty() && group.bytes().all(|b| b.is_ascii_digit()))
    {
        return None;
    }

    let digits: String = body.chars().filter(|c| *c != '_').collect();
    Integer::from_str(&format!("{sign}{digits}")).ok()
}

/// Sum every parseable line of `reader`, warning about the rest.
pub fn sum_lines<R: BufRead>(reader: R, log: &dyn EventLog) -> io::Result<SumReport> {
    let mut values = Vec::new();
    let mut rejected = Vec::new();

    for line in reader.lines() {
        let line = line?;
        match parse_integer(&line) {
            Some(value) => values.push(value),
            None => {
                log.warning(NON_INTEGER_WARNING);
                log.warning(&line);
                rejected.push(line);
            }
        }
    }

    let total = values.iter().fold(Integer::from(0), |acc, v| acc + v);
    Ok(SumReport {
        values,
        rejected,
        total,
    })
}

/// Open `path` and sum its lines. The file is closed before returning.
pub fn sum_file(path: &Path, log: &dyn EventLog) -> Result<SumReport, DrillError> {
    let file = File::open(path).map_err(|source| DrillError::OpenInput {
        path: path.to_path_buf(),
        source,
    })?;

    sum_lines(BufReader::new(file), log).map_err(|source| DrillError::ReadInput {
        path: path.to_path_buf(),
        source,
    })
}

pub fn write_total<W: Write>(out: &mut W, total: &Integer) -> io::Result<()> {
    writeln!(out, "The sum is {total}")
}
