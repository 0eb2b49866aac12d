use crate::math::error::MathError;
use std::fmt;

/// Upper bound on tokens per expression; keeps every later recursion shallow
pub const MAX_TOKENS: usize = 512;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind<'a> {
    Number(f64),
    /// `<number>%` with no space before the sign: the number divided by 100
    Percentage(f64),
    Ident(&'a str),
    Plus,
    Minus,
    Star,
    DoubleStar,
    Slash,
    DoubleSlash,
    Caret,
    Percent,
    LParen,
    RParen,
    Comma,
}

impl fmt::Display for TokenKind<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number(n) => write!(f, "{}", n),
            TokenKind::Percentage(n) => write!(f, "{}%", n),
            TokenKind::Ident(name) => f.write_str(name),
            TokenKind::Plus => f.write_str("+"),
            TokenKind::Minus => f.write_str("-"),
            TokenKind::Star => f.write_str("*"),
            TokenKind::DoubleStar => f.write_str("**"),
            TokenKind::Slash => f.write_str("/"),
            TokenKind::DoubleSlash => f.write_str("//"),
            TokenKind::Caret => f.write_str("^"),
            TokenKind::Percent => f.write_str("%"),
            TokenKind::LParen => f.write_str("("),
            TokenKind::RParen => f.write_str(")"),
            TokenKind::Comma => f.write_str(","),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'a> {
    pub kind: TokenKind<'a>,
    /// Byte offset into the source
    pub pos: usize,
}

/// Split a lowercased expression into tokens. Identifiers borrow from the
/// input.
pub fn tokenize(input: &str) -> Result<Vec<Token<'_>>, MathError> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let byte = bytes[pos];
        let start = pos;

        if byte.is_ascii_whitespace() {
            pos += 1;
            continue;
        }

        let kind = match byte {
            b'0'..=b'9' | b'.' => {
                let (kind, end) = scan_number(input, start)?;
                pos = end;
                kind
            }
            b'a'..=b'z' => {
                pos += 1;
                while pos < bytes.len()
                    && (bytes[pos].is_ascii_lowercase() || bytes[pos].is_ascii_digit())
                {
                    pos += 1;
                }
                TokenKind::Ident(&input[start..pos])
            }
            b'*' if bytes.get(pos + 1) == Some(&b'*') => {
                pos += 2;
                TokenKind::DoubleStar
            }
            b'/' if bytes.get(pos + 1) == Some(&b'/') => {
                pos += 2;
                TokenKind::DoubleSlash
            }
            _ => {
                pos += 1;
                match byte {
                    b'+' => TokenKind::Plus,
                    b'-' => TokenKind::Minus,
                    b'*' => TokenKind::Star,
                    b'/' => TokenKind::Slash,
                    b'^' => TokenKind::Caret,
                    b'%' => TokenKind::Percent,
                    b'(' => TokenKind::LParen,
                    b')' => TokenKind::RParen,
                    b',' => TokenKind::Comma,
                    _ => {
                        let c = input[start..].chars().next().unwrap_or('\u{fffd}');
                        return Err(MathError::DisallowedCharacter(c, start));
                    }
                }
            }
        };

        tokens.push(Token { kind, pos: start });
        if tokens.len() > MAX_TOKENS {
            return Err(MathError::TooLong(tokens.len()));
        }
    }

    Ok(tokens)
}

/// Scan `digits[.digits][e[+-]digits]`, allowing a bare leading or trailing
/// dot, and fold a directly attached `%` into a percentage literal.
fn scan_number(input: &str, start: usize) -> Result<(TokenKind<'static>, usize), MathError> {
    let bytes = input.as_bytes();
    let mut pos = start;
    let mut digits = 0;

    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
        digits += 1;
    }
    if pos < bytes.len() && bytes[pos] == b'.' {
        pos += 1;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return Err(MathError::UnexpectedToken(".".to_string(), start));
    }

    // exponent only when digits follow; otherwise `e` starts an identifier
    if pos < bytes.len() && bytes[pos] == b'e' {
        let mut exp = pos + 1;
        if exp < bytes.len() && (bytes[exp] == b'+' || bytes[exp] == b'-') {
            exp += 1;
        }
        if exp < bytes.len() && bytes[exp].is_ascii_digit() {
            while exp < bytes.len() && bytes[exp].is_ascii_digit() {
                exp += 1;
            }
            pos = exp;
        }
    }

    let text = &input[start..pos];
    let value = text
        .parse::<f64>()
        .map_err(|_| MathError::InvalidNumber(text.to_string()))?;

    if pos < bytes.len() && bytes[pos] == b'%' {
        return Ok((TokenKind::Percentage(value), pos + 1));
    }
    Ok((TokenKind::Number(value), pos))
}
