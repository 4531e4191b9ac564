//! Parsing of the three kinds of user input.

use crate::release::{NormalizedRecord, ResultSet};

use super::SelectionError;

/// Trim a search term, or `None` if nothing is left.
pub fn parse_search_term(input: &str) -> Option<String> {
    let term = input.trim();
    if term.is_empty() {
        None
    } else {
        Some(term.to_string())
    }
}

/// `y`/`yes` -> true, `n`/`no`/empty -> false, anything else -> `None`.
pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" | "" => Some(false),
        _ => None,
    }
}

/// Resolve a typed ID against the result set.
pub fn parse_selection<'a>(
    input: &str,
    results: &'a ResultSet,
) -> Result<&'a NormalizedRecord, SelectionError> {
    let input = input.trim();
    let id: i64 = input
        .parse()
        .map_err(|_| SelectionError::NotANumber(input.to_string()))?;
    results.get(id).ok_or(SelectionError::NotFound(id))
}
