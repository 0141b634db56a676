//! Part name parsing.
//!
//! Two grammars exist, selected by [`FormatVersion`]:
//!
//! ```text
//! legacy:  {min_date}_{max_date}_{min_block}_{max_block}_{level}
//! custom:  {partition_id}_{min_block}_{max_block}_{level}[_{mutation}]
//! ```
//!
//! Legacy names are partitioned by month; the partition id is the `YYYYMM`
//! prefix shared by both dates.

use super::PartInfo;
use crate::error::{CoreError, CoreResult, ParseErrorKind};
use crate::types::FormatVersion;
use std::str::FromStr;

impl PartInfo {
    /// Parses a part name under the given format version.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MalformedPartName`] if the name does not follow
    /// the grammar for `format_version`.
    pub fn parse(name: &str, format_version: FormatVersion) -> CoreResult<Self> {
        parse_fields(name, format_version)
            .map_err(|reason| CoreError::malformed(name, format_version, reason))
    }
}

fn parse_fields(name: &str, format_version: FormatVersion) -> Result<PartInfo, ParseErrorKind> {
    let fields: Vec<&str> = name.split('_').collect();

    if format_version.has_custom_partitioning() {
        let (partition_id, rest) = match fields.as_slice() {
            [partition_id, rest @ ..] if rest.len() == 3 || rest.len() == 4 => (*partition_id, rest),
            _ => {
                return Err(ParseErrorKind::FieldCount {
                    expected: "4 or 5",
                    found: fields.len(),
                })
            }
        };
        validate_partition_id(partition_id)?;
        parse_blocks(partition_id, rest)
    } else {
        let [min_date, max_date, rest @ ..] = fields.as_slice() else {
            return Err(ParseErrorKind::FieldCount {
                expected: "5",
                found: fields.len(),
            });
        };
        if rest.len() != 3 {
            return Err(ParseErrorKind::FieldCount {
                expected: "5",
                found: fields.len(),
            });
        }
        let partition_id = month_partition(min_date, max_date)?;
        parse_blocks(partition_id, rest)
    }
}

/// Parses `min_block`, `max_block`, `level` and an optional `mutation`.
fn parse_blocks(partition_id: &str, fields: &[&str]) -> Result<PartInfo, ParseErrorKind> {
    let min_block: i64 = parse_number("min block", fields[0])?;
    let max_block: i64 = parse_number("max block", fields[1])?;
    let level: u32 = parse_number("level", fields[2])?;
    let mutation: i64 = match fields.get(3) {
        Some(field) => parse_number("mutation", field)?,
        None => 0,
    };

    if min_block > max_block {
        return Err(ParseErrorKind::InvertedRange {
            min: min_block,
            max: max_block,
        });
    }

    Ok(PartInfo::new(partition_id, min_block, max_block, level).with_mutation(mutation))
}

/// Accepts `-?[0-9]+`; `FromStr` alone would also take a leading `+`.
fn parse_number<T: FromStr>(field: &'static str, value: &str) -> Result<T, ParseErrorKind> {
    let digits = value.strip_prefix('-').unwrap_or(value);
    let invalid = || ParseErrorKind::Number {
        field,
        value: value.to_string(),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    value.parse().map_err(|_| invalid())
}

fn validate_partition_id(partition_id: &str) -> Result<(), ParseErrorKind> {
    let valid = !partition_id.is_empty()
        && partition_id
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-');
    if valid {
        Ok(())
    } else {
        Err(ParseErrorKind::PartitionId(partition_id.to_string()))
    }
}

/// Returns the shared `YYYYMM` prefix of two `YYYYMMDD` dates.
fn month_partition<'a>(min_date: &'a str, max_date: &str) -> Result<&'a str, ParseErrorKind> {
    validate_date(min_date)?;
    validate_date(max_date)?;

    if min_date[..6] != max_date[..6] {
        return Err(ParseErrorKind::DateMonthMismatch {
            min: min_date.to_string(),
            max: max_date.to_string(),
        });
    }
    Ok(&min_date[..6])
}

fn validate_date(date: &str) -> Result<(), ParseErrorKind> {
    let invalid = || ParseErrorKind::Date(date.to_string());

    if date.len() != 8 || !date.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let month: u32 = date[4..6].parse().map_err(|_| invalid())?;
    let day: u32 = date[6..8].parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return Err(invalid());
    }
    Ok(())
}
