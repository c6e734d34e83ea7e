//! Instruction sources: collaborators that turn a category into lines of drawing directions.

mod fallback;
mod lines;

pub use fallback::FallbackSource;
pub use lines::LinesSource;

use crate::foundation::error::CharadeResult;

/// Words the game draws and guesses.
pub const CATEGORIES: [&str; 10] = [
    "cat", "dog", "house", "tree", "car", "bird", "fish", "chair", "apple", "boat",
];

/// Produces natural-language drawing directions for a category.
///
/// Errors are soft failures for the session: they end it without shapes, never crash it.
pub trait InstructionSource {
    /// Fetch the raw instruction lines for `category`.
    fn fetch(&self, category: &str) -> CharadeResult<Vec<String>>;
}

impl<T: InstructionSource + ?Sized> InstructionSource for &T {
    fn fetch(&self, category: &str) -> CharadeResult<Vec<String>> {
        (**self).fetch(category)
    }
}

/// Deterministically pick a category not present in `used`.
///
/// Matching is case-insensitive. Returns `None` once every category has been used.
pub fn pick_category(used: &[String], seed: u64) -> Option<&'static str> {
    let available: Vec<&'static str> = CATEGORIES
        .iter()
        .copied()
        .filter(|c| !used.iter().any(|u| u.eq_ignore_ascii_case(c)))
        .collect();
    if available.is_empty() {
        return None;
    }
    let i = (seed % available.len() as u64) as usize;
    Some(available[i])
}

#[cfg(test)]
#[path = "../../tests/unit/source/mod.rs"]
mod tests;
