//! Shape extraction from cleaned instruction lines.
//!
//! The grammar is an ordered list of named rules evaluated first-match-wins over a token stream.
//! A line that no rule accepts is a parse miss: it yields `None` and is never an error.

use crate::instructions::defaults::ShapeDefaults;
use crate::instructions::lexer::{Token, lex};
use crate::instructions::parse::CleanedInstruction;
use crate::scene::shape::{Coord, LineSpan, ShapeDescriptor, ShapeKind};

const ARTICLES: &[&str] = &["a", "an", "two"];
const ADJECTIVES: &[&str] = &[
    "small",
    "large",
    "upside-down",
    "half",
    "brown",
    "green",
];

/// A named grammar rule.
#[derive(Clone, Copy)]
pub struct Rule {
    /// Stable name, reported in trace logs.
    pub name: &'static str,
    matcher: fn(&[Token], &ShapeDefaults) -> Option<ShapeDescriptor>,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

/// Rules in priority order.
pub const RULES: &[Rule] = &[
    Rule {
        name: "triangle_vertices",
        matcher: match_triangle,
    },
    Rule {
        name: "single_anchor",
        matcher: match_single_anchor,
    },
];

/// Shape extractor bound to a defaults table.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShapeGrammar {
    defaults: ShapeDefaults,
}

impl ShapeGrammar {
    /// Build an extractor using `defaults` for omitted size clauses.
    pub fn new(defaults: ShapeDefaults) -> Self {
        Self { defaults }
    }

    /// Extract one shape from a cleaned instruction, or `None` on a parse miss.
    pub fn extract(&self, instruction: &CleanedInstruction) -> Option<ShapeDescriptor> {
        self.extract_str(instruction.as_str())
    }

    /// Same as [`ShapeGrammar::extract`] over raw text.
    pub fn extract_str(&self, text: &str) -> Option<ShapeDescriptor> {
        let tokens = lex(text);
        for rule in RULES {
            if let Some(shape) = (rule.matcher)(&tokens, &self.defaults) {
                tracing::trace!(rule = rule.name, ?shape, "instruction matched");
                return Some(shape);
            }
        }
        tracing::trace!(instruction = text, "no shape rule matched");
        None
    }
}

/// Forward-only cursor over a token slice.
#[derive(Clone, Copy)]
struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn at(tokens: &'a [Token], pos: usize) -> Self {
        Self { tokens, pos }
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn word(&mut self) -> Option<&'a str> {
        match self.peek() {
            Some(Token::Word(w)) => {
                self.pos += 1;
                Some(w.as_str())
            }
            _ => None,
        }
    }

    fn eat_word(&mut self, expected: &str) -> bool {
        match self.peek() {
            Some(Token::Word(w)) if w == expected => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    fn eat_any(&mut self, options: &[&str]) -> bool {
        options.iter().any(|w| self.eat_word(w))
    }

    fn eat(&mut self, tok: &Token) -> bool {
        if self.peek() == Some(tok) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn int(&mut self) -> Option<u32> {
        match self.peek() {
            Some(Token::Int(v)) => {
                self.pos += 1;
                Some(*v)
            }
            _ => None,
        }
    }

    /// `( x , y )`; the closing paren is optional.
    fn coord(&mut self) -> Option<Coord> {
        self.coord_closed_if(false)
    }

    /// `( x , y )` with a mandatory closing paren.
    fn closed_coord(&mut self) -> Option<Coord> {
        self.coord_closed_if(true)
    }

    fn coord_closed_if(&mut self, require_close: bool) -> Option<Coord> {
        let mut c = *self;
        if !c.eat(&Token::LParen) {
            return None;
        }
        let x = c.int()?;
        if !c.eat(&Token::Comma) {
            return None;
        }
        let y = c.int()?;
        if !c.eat(&Token::RParen) && require_close {
            return None;
        }
        *self = c;
        Some(Coord::new(x, y))
    }

    /// Run `f` on a copy; commit the copy only when `f` succeeds.
    fn attempt<T>(&mut self, f: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let mut c = *self;
        let out = f(&mut c)?;
        *self = c;
        Some(out)
    }
}

/// Positions directly after each "draw" word, in order.
fn draw_starts(tokens: &[Token]) -> impl Iterator<Item = usize> + '_ {
    tokens
        .iter()
        .enumerate()
        .filter(|(_, t)| matches!(t, Token::Word(w) if w == "draw"))
        .map(|(i, _)| i + 1)
}

/// `[article] [adjective] <word>`
fn shape_word<'a>(c: &mut Cursor<'a>) -> Option<&'a str> {
    c.eat_any(ARTICLES);
    c.eat_any(ADJECTIVES);
    c.word()
}

fn match_triangle(tokens: &[Token], _defaults: &ShapeDefaults) -> Option<ShapeDescriptor> {
    if !tokens
        .iter()
        .any(|t| matches!(t, Token::Word(w) if w.contains("triangle")))
    {
        return None;
    }

    draw_starts(tokens).find_map(|start| {
        let mut c = Cursor::at(tokens, start);
        if shape_word(&mut c)? != "triangle" {
            return None;
        }
        let vertices = c
            .attempt(listed_vertices)
            .or_else(|| c.attempt(chained_vertices))?;
        Some(ShapeDescriptor::Triangle { vertices })
    })
}

/// `with vertices at (x1,y1), (x2,y2), (x3,y3)`
fn listed_vertices(c: &mut Cursor<'_>) -> Option<[Coord; 3]> {
    if !(c.eat_word("with") && c.eat_word("vertices") && c.eat_word("at")) {
        return None;
    }
    let a = c.closed_coord()?;
    if !c.eat(&Token::Comma) {
        return None;
    }
    let b = c.closed_coord()?;
    if !c.eat(&Token::Comma) {
        return None;
    }
    let d = c.closed_coord()?;
    Some([a, b, d])
}

/// `from (x1,y1) to (x2,y2) to (x3,y3)`
fn chained_vertices(c: &mut Cursor<'_>) -> Option<[Coord; 3]> {
    if !c.eat_word("from") {
        return None;
    }
    let a = c.closed_coord()?;
    if !c.eat_word("to") {
        return None;
    }
    let b = c.closed_coord()?;
    if !c.eat_word("to") {
        return None;
    }
    let d = c.closed_coord()?;
    Some([a, b, d])
}

/// Optional size clause following the anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct SizeClause {
    width: Option<u32>,
    height: Option<u32>,
    radius: Option<u32>,
}

/// `with (width W and height H | radius R | width W | height H)`
fn size_clause(c: &mut Cursor<'_>) -> Option<SizeClause> {
    if !c.eat_word("with") {
        return None;
    }
    if let Some(both) = c.attempt(|c| {
        if !c.eat_word("width") {
            return None;
        }
        let width = c.int()?;
        if !(c.eat_word("and") && c.eat_word("height")) {
            return None;
        }
        let height = c.int()?;
        Some(SizeClause {
            width: Some(width),
            height: Some(height),
            radius: None,
        })
    }) {
        return Some(both);
    }
    if c.eat_word("radius") {
        return c.int().map(|r| SizeClause {
            radius: Some(r),
            ..SizeClause::default()
        });
    }
    if c.eat_word("width") {
        return c.int().map(|w| SizeClause {
            width: Some(w),
            ..SizeClause::default()
        });
    }
    if c.eat_word("height") {
        return c.int().map(|h| SizeClause {
            height: Some(h),
            ..SizeClause::default()
        });
    }
    None
}

/// `(to | end at) (x2, y2)`
fn end_point(c: &mut Cursor<'_>) -> Option<Coord> {
    if !(c.eat_word("to") || (c.eat_word("end") && c.eat_word("at"))) {
        return None;
    }
    c.closed_coord()
}

fn match_single_anchor(tokens: &[Token], defaults: &ShapeDefaults) -> Option<ShapeDescriptor> {
    draw_starts(tokens).find_map(|start| {
        let mut c = Cursor::at(tokens, start);
        let kind = ShapeKind::from_word(shape_word(&mut c)?)?;
        c.eat_any(&["at", "from"]);
        let anchor = c.coord()?;
        let size = c.attempt(size_clause).unwrap_or_default();
        let end = c.attempt(end_point);
        build_single_anchor(kind, anchor, size, end, defaults)
    })
}

fn build_single_anchor(
    kind: ShapeKind,
    anchor: Coord,
    size: SizeClause,
    end: Option<Coord>,
    defaults: &ShapeDefaults,
) -> Option<ShapeDescriptor> {
    match kind {
        ShapeKind::Rectangle => Some(ShapeDescriptor::Rectangle {
            anchor,
            width: size.width.unwrap_or(defaults.rect_width),
            height: size.height.unwrap_or(defaults.rect_height),
        }),
        ShapeKind::Circle => Some(ShapeDescriptor::Circle {
            anchor,
            radius: size.radius.unwrap_or(defaults.circle_radius),
        }),
        ShapeKind::Oval => Some(ShapeDescriptor::Oval {
            anchor,
            width: size.width.unwrap_or(defaults.oval_width),
            height: size.height.unwrap_or(defaults.oval_height),
        }),
        // Triangles only render through the vertex rule.
        ShapeKind::Triangle => None,
        ShapeKind::Line => {
            let span = match (end, size.height) {
                (Some(end), _) => LineSpan::Segment { end },
                (None, Some(height)) => LineSpan::Vertical { height },
                (None, None) => return None,
            };
            Some(ShapeDescriptor::Line { anchor, span })
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/instructions/grammar.rs"]
mod tests;
