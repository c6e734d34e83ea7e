use std::fmt;

/// An instruction line that passed the draw filter and was stripped of list markers.
///
/// Order in a sequence of cleaned instructions is render order.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct CleanedInstruction(String);

impl CleanedInstruction {
    /// Borrow the cleaned text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CleanedInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether a raw line is a draw directive: non-blank and mentions "draw" in any case.
pub fn is_draw_directive(line: &str) -> bool {
    let t = line.trim();
    !t.is_empty() && t.to_ascii_lowercase().contains("draw")
}

/// Strip a leading `"<digits>. -"` enumeration marker and one trailing period, then trim.
pub fn clean_line(line: &str) -> String {
    let body = strip_enumeration(line);
    let body = body.trim_end();
    let body = body.strip_suffix('.').unwrap_or(body);
    body.trim().to_owned()
}

/// Filter and clean raw lines, preserving order.
pub fn parse_instructions<S: AsRef<str>>(raw: &[S]) -> Vec<CleanedInstruction> {
    raw.iter()
        .map(AsRef::as_ref)
        .filter(|line| is_draw_directive(line))
        .map(|line| CleanedInstruction(clean_line(line)))
        .collect()
}

// `\s* \d* \. \s* - \s*` anchored at the start; the whole marker must be present.
fn strip_enumeration(line: &str) -> &str {
    let s = line.trim_start();
    let s = s.trim_start_matches(|c: char| c.is_ascii_digit());
    let Some(s) = s.strip_prefix('.') else {
        return line;
    };
    let Some(s) = s.trim_start().strip_prefix('-') else {
        return line;
    };
    s.trim_start()
}

#[cfg(test)]
#[path = "../../tests/unit/instructions/parse.rs"]
mod tests;
