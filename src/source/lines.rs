use std::path::PathBuf;

use crate::foundation::error::{CharadeError, CharadeResult};
use crate::source::InstructionSource;

/// Reads instruction lines from a text file, one instruction per line.
///
/// The category is ignored; blank lines are dropped.
#[derive(Clone, Debug)]
pub struct LinesSource {
    path: PathBuf,
}

impl LinesSource {
    /// Source backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl InstructionSource for LinesSource {
    fn fetch(&self, _category: &str) -> CharadeResult<Vec<String>> {
        let text = std::fs::read_to_string(&self.path).map_err(|e| {
            CharadeError::fetch(format!(
                "failed to read instructions '{}': {e}",
                self.path.display()
            ))
        })?;
        Ok(text
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(str::to_owned)
            .collect())
    }
}
