use calamine::Data;
use lazy_static::lazy_static;
use regex::Regex;

use crate::utils::{cell_to_string, is_blank_cell, normalize_code};

lazy_static! {
    // Three hyphen-separated groups of 3, 2 and 2 digits or wildcards
    static ref STRICT_PATTERN: Regex =
        Regex::new(r"^[0-9*?]{3}-[0-9*?]{2}-[0-9*?]{2}$").unwrap();
}

/// Decides which spec-sheet cell values count as required code patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PatternFilter {
    /// Anything with a hyphen and at least one ASCII digit.
    /// Admits notes such as "see page 3-4".
    #[default]
    Loose,
    /// Exactly `DDD-DD-DD`, each `D` a digit, `*` or `?`
    Strict,
}

impl PatternFilter {
    /// `value` must already be normalized (trimmed, upper-cased)
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            PatternFilter::Loose => {
                value.contains('-') && value.chars().any(|c| c.is_ascii_digit())
            }
            PatternFilter::Strict => STRICT_PATTERN.is_match(value),
        }
    }
}

/// Normalize the vehicle column's cells and keep those `filter` accepts.
/// Row order and duplicates are preserved.
pub fn extract_patterns<'a, I>(cells: I, filter: PatternFilter) -> Vec<String>
where
    I: IntoIterator<Item = &'a Data>,
{
    cells
        .into_iter()
        .filter(|cell| !is_blank_cell(cell))
        .map(|cell| normalize_code(&cell_to_string(cell)))
        .filter(|value| filter.accepts(value))
        .collect()
}
