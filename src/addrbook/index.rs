//! Display index parsing.
//!
//! Users address contacts by their 1-based position in the last shown list.
//! This module only turns text into positions; whether a position exists is
//! decided when the session resolves it, so `0` parses fine here and is
//! rejected later as out of range.

use crate::error::{AddrBookError, Result};
use std::collections::HashSet;
use std::ops::RangeInclusive;

/// Offset between what the user types and the position in the shown list.
pub const DISPLAYED_INDEX_OFFSET: usize = 1;

pub fn parse_index(s: &str) -> Result<usize> {
    s.trim()
        .parse()
        .map_err(|_| AddrBookError::InvalidCommand(format!("Invalid index format: {}", s)))
}

/// An inclusive span of display indexes, as typed ("3" or "3-5").
pub type IndexRange = RangeInclusive<usize>;

/// Parses a single input string that may be either a single index or a range.
///
/// Supports formats:
/// - Single index: "3" (the span 3..=3)
/// - Range: "3-5" (the span 3..=5)
///
/// Start must be <= end ("3-3" is valid, "3-2" is an error). Spans are not
/// expanded here; their ends are unbounded until checked against a listing.
pub fn parse_index_or_range(s: &str) -> Result<IndexRange> {
    if let Some((start, end)) = s.split_once('-') {
        if start.is_empty() {
            return Err(AddrBookError::InvalidCommand(format!(
                "Invalid index format: {}",
                s
            )));
        }
        let start = parse_index(start)?;
        let end = parse_index(end)?;
        if start > end {
            return Err(AddrBookError::InvalidCommand(format!(
                "Invalid range: start ({}) must be <= end ({})",
                start, end
            )));
        }
        return Ok(start..=end);
    }

    parse_index(s).map(|idx| idx..=idx)
}

/// Parses every argument into a span, in the order given.
pub fn parse_indexes<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<IndexRange>> {
    inputs
        .iter()
        .map(|input| parse_index_or_range(input.as_ref()))
        .collect()
}

/// Expands spans into single indexes, dropping repeats while keeping
/// first-seen order. Only call this on spans already bounded by a listing.
pub fn expand_indexes(ranges: &[IndexRange]) -> Vec<usize> {
    let mut seen = HashSet::new();
    ranges
        .iter()
        .flat_map(|range| range.clone())
        .filter(|idx| seen.insert(*idx))
        .collect()
}
