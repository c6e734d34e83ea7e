//! Turning raw instruction text into shape descriptors.

/// Fallback sizes for omitted clauses.
pub mod defaults;
/// Rule-based shape extraction.
pub mod grammar;
pub(crate) mod lexer;
/// Instruction line cleaning.
pub mod parse;
