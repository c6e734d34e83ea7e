#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    /// Lowercased alphabetic word; inner hyphens are kept ("upside-down").
    Word(String),
    /// Unsigned integer literal.
    Int(u32),
    LParen,
    RParen,
    Comma,
    /// Anything else, including digit runs that overflow `u32`.
    Other,
}

/// Split an instruction into tokens. Never fails: unknown characters become [`Token::Other`].
pub(crate) fn lex(input: &str) -> Vec<Token> {
    let mut out = Vec::new();
    let chars: Vec<char> = input.chars().collect();
    let mut i = 0usize;

    while i < chars.len() {
        let c = chars[i];
        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let start = i;

        if c.is_ascii_digit() {
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            let s: String = chars[start..i].iter().collect();
            out.push(s.parse::<u32>().map(Token::Int).unwrap_or(Token::Other));
            continue;
        }

        if c.is_alphabetic() {
            i += 1;
            while i < chars.len() {
                let ch = chars[i];
                let inner_hyphen = ch == '-'
                    && i + 1 < chars.len()
                    && chars[i + 1].is_alphabetic();
                if ch.is_alphanumeric() || ch == '_' || inner_hyphen {
                    i += 1;
                } else {
                    break;
                }
            }
            let s: String = chars[start..i].iter().collect();
            out.push(Token::Word(s.to_lowercase()));
            continue;
        }

        out.push(match c {
            '(' => Token::LParen,
            ')' => Token::RParen,
            ',' => Token::Comma,
            _ => Token::Other,
        });
        i += 1;
    }

    out
}

#[cfg(test)]
#[path = "../../tests/unit/instructions/lexer.rs"]
mod tests;
