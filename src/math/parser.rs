use crate::math::ast::{BinaryOp, Constant, Expr, Function, UnaryOp};
use crate::math::error::MathError;
use crate::math::lexer::{tokenize, Token, TokenKind};

/// Maximum nesting of parentheses, calls and prefix operators
pub const MAX_DEPTH: usize = 64;

/// Recursive-descent parser. Precedence, lowest first:
///
/// ```text
/// input   := sum (',' sum)*
/// sum     := product (('+' | '-') product)*
/// product := unary (('*' | '/' | '//' | '%') unary)*
/// unary   := ('-' | '+') unary | power
/// power   := primary (('^' | '**') unary)?
/// primary := number | number'%' | '(' sum ')' | name '(' args ')' | name
/// ```
///
/// `power` recursing into `unary` makes exponentiation right-associative and
/// lets the exponent carry a sign (`2^-1`), while `-2^2` stays `-(2^2)`.
pub struct Parser<'a> {
    tokens: Vec<Token<'a>>,
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Result<Self, MathError> {
        Ok(Self {
            tokens: tokenize(input)?,
            pos: 0,
            depth: 0,
        })
    }

    /// Parse the whole input; trailing tokens are an error
    pub fn parse(mut self) -> Result<Expr, MathError> {
        let first = self.parse_sum()?;
        let expr = if self.eat(|kind| matches!(kind, TokenKind::Comma)) {
            let mut items = vec![first];
            loop {
                items.push(self.parse_sum()?);
                if !self.eat(|kind| matches!(kind, TokenKind::Comma)) {
                    break;
                }
            }
            Expr::Tuple(items)
        } else {
            first
        };

        match self.peek() {
            None => Ok(expr),
            Some(token) => Err(unexpected(token)),
        }
    }

    fn parse_sum(&mut self) -> Result<Expr, MathError> {
        let mut lhs = self.parse_product()?;
        while let Some(op) = self.peek().and_then(|token| match token.kind {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            _ => None,
        }) {
            self.pos += 1;
            let rhs = self.parse_product()?;
            lhs = Expr::binary(op, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_product(&mut self) -> Result<Expr, MathError> {
        let mut lhs = self.parse_unary()?;
        while let Some(op) = self.peek().and_then(|token| match token.kind {
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            TokenKind::DoubleSlash => Some(BinaryOp::FloorDiv),
            TokenKind::Percent => Some(BinaryOp::Mod),
            _ => None,
        }) {
            self.pos += 1;
            let rhs = self.parse_unary()?;
            lhs = Expr::binary(op, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_unary(&mut self) -> Result<Expr, MathError> {
        let op = match self.peek().map(|token| token.kind) {
            Some(TokenKind::Minus) => UnaryOp::Neg,
            Some(TokenKind::Plus) => UnaryOp::Plus,
            _ => return self.parse_power(),
        };
        self.pos += 1;
        self.descend()?;
        let operand = self.parse_unary()?;
        self.ascend();
        Ok(Expr::unary(op, operand))
    }

    fn parse_power(&mut self) -> Result<Expr, MathError> {
        let base = self.parse_primary()?;
        if !self.eat(|kind| matches!(kind, TokenKind::Caret | TokenKind::DoubleStar)) {
            return Ok(base);
        }
        self.descend()?;
        let exponent = self.parse_unary()?;
        self.ascend();
        Ok(Expr::binary(BinaryOp::Pow, base, exponent))
    }

    fn parse_primary(&mut self) -> Result<Expr, MathError> {
        let token = self.next().ok_or(MathError::UnexpectedEnd)?;
        match token.kind {
            TokenKind::Number(value) => Ok(Expr::Number(value)),
            TokenKind::Percentage(value) => Ok(Expr::percentage(value)),
            TokenKind::LParen => {
                self.descend()?;
                let inner = self.parse_sum()?;
                self.expect_rparen()?;
                self.ascend();
                Ok(inner)
            }
            TokenKind::Ident(name) => {
                if self.eat(|kind| matches!(kind, TokenKind::LParen)) {
                    let function = Function::lookup(name)
                        .ok_or_else(|| MathError::UnknownIdentifier(name.to_string()))?;
                    self.descend()?;
                    let args = self.parse_args()?;
                    self.ascend();
                    if args.len() != function.arity() {
                        return Err(MathError::Arity {
                            function: function.name(),
                            expected: function.arity(),
                            found: args.len(),
                        });
                    }
                    Ok(Expr::Call(function, args))
                } else {
                    Constant::lookup(name)
                        .map(Expr::Constant)
                        .ok_or_else(|| MathError::UnknownIdentifier(name.to_string()))
                }
            }
            _ => Err(unexpected(token)),
        }
    }

    // Opening paren already consumed
    fn parse_args(&mut self) -> Result<Vec<Expr>, MathError> {
        let mut args = Vec::new();
        if self.eat(|kind| matches!(kind, TokenKind::RParen)) {
            return Ok(args);
        }
        loop {
            args.push(self.parse_sum()?);
            if !self.eat(|kind| matches!(kind, TokenKind::Comma)) {
                break;
            }
        }
        self.expect_rparen()?;
        Ok(args)
    }

    fn expect_rparen(&mut self) -> Result<(), MathError> {
        match self.next() {
            Some(Token {
                kind: TokenKind::RParen,
                ..
            }) => Ok(()),
            Some(token) => Err(unexpected(token)),
            None => Err(MathError::UnexpectedEnd),
        }
    }

    fn peek(&self) -> Option<Token<'a>> {
        self.tokens.get(self.pos).copied()
    }

    fn next(&mut self) -> Option<Token<'a>> {
        let token = self.peek()?;
        self.pos += 1;
        Some(token)
    }

    fn eat(&mut self, matches: impl Fn(&TokenKind<'a>) -> bool) -> bool {
        match self.peek() {
            Some(token) if matches(&token.kind) => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    fn descend(&mut self) -> Result<(), MathError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(MathError::NestingTooDeep);
        }
        Ok(())
    }

    fn ascend(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

fn unexpected(token: Token<'_>) -> MathError {
    MathError::UnexpectedToken(token.kind.to_string(), token.pos)
}

/// Tokenize and parse a lowercased expression
pub fn parse_expression(input: &str) -> Result<Expr, MathError> {
    Parser::new(input)?.parse()
}
