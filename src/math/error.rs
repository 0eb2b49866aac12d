use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum MathError {
    DisallowedCharacter(char, usize),
    NoOperator,
    InvalidNumber(String),
    UnexpectedToken(String, usize),
    UnexpectedEnd,
    UnknownIdentifier(String),
    Arity {
        function: &'static str,
        expected: usize,
        found: usize,
    },
    DivisionByZero,
    Domain(&'static str),
    NonFinite,
    TupleOperand,
    TooLong(usize),
    NestingTooDeep,
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::DisallowedCharacter(c, pos) => {
                write!(f, "Disallowed character '{}' at position {}", c, pos)
            }
            MathError::NoOperator => write!(f, "Expression has no operator or function"),
            MathError::InvalidNumber(s) => write!(f, "Invalid number: {}", s),
            MathError::UnexpectedToken(token, pos) => {
                write!(f, "Unexpected '{}' at position {}", token, pos)
            }
            MathError::UnexpectedEnd => write!(f, "Unexpected end of expression"),
            MathError::UnknownIdentifier(name) => write!(f, "Unknown identifier: {}", name),
            MathError::Arity {
                function,
                expected,
                found,
            } => write!(
                f,
                "{}() takes {} argument(s), {} given",
                function, expected, found
            ),
            MathError::DivisionByZero => write!(f, "Division by zero"),
            MathError::Domain(function) => write!(f, "Math domain error in {}", function),
            MathError::NonFinite => write!(f, "Result is not a finite number"),
            MathError::TupleOperand => write!(f, "Tuples cannot be used as operands"),
            MathError::TooLong(count) => write!(f, "Expression too long ({} tokens)", count),
            MathError::NestingTooDeep => write!(f, "Expression nested too deeply"),
        }
    }
}

impl std::error::Error for MathError {}
