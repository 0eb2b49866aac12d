use crate::math::ast::{BinaryOp, Expr, Function, UnaryOp};
use crate::math::error::MathError;

/// Digits kept after the decimal point for non-integral results
pub const RESULT_DECIMALS: i32 = 10;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Tuple(Vec<f64>),
}

/// Walk the tree. Only top-level tuples are accepted; every intermediate
/// result must stay finite.
pub fn execute(expr: &Expr) -> Result<Value, MathError> {
    match expr {
        Expr::Tuple(items) => items
            .iter()
            .map(eval)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Tuple),
        _ => eval(expr).map(Value::Number),
    }
}

fn eval(expr: &Expr) -> Result<f64, MathError> {
    let value = match expr {
        Expr::Number(value) => *value,
        Expr::Constant(constant) => constant.value(),
        Expr::Unary(op, operand) => {
            let operand = eval(operand)?;
            match op {
                UnaryOp::Neg => -operand,
                UnaryOp::Plus => operand,
            }
        }
        Expr::Binary(op, lhs, rhs) => apply_binary(*op, eval(lhs)?, eval(rhs)?)?,
        Expr::Call(function, args) => {
            let args = args.iter().map(eval).collect::<Result<Vec<_>, _>>()?;
            apply_function(*function, &args)?
        }
        Expr::Tuple(_) => return Err(MathError::TupleOperand),
    };

    if value.is_finite() {
        Ok(value)
    } else {
        Err(MathError::NonFinite)
    }
}

fn apply_binary(op: BinaryOp, lhs: f64, rhs: f64) -> Result<f64, MathError> {
    let value = match op {
        BinaryOp::Add => lhs + rhs,
        BinaryOp::Sub => lhs - rhs,
        BinaryOp::Mul => lhs * rhs,
        BinaryOp::Div => lhs / nonzero(rhs)?,
        BinaryOp::FloorDiv => (lhs / nonzero(rhs)?).floor(),
        BinaryOp::Mod => floored_mod(lhs, nonzero(rhs)?),
        BinaryOp::Pow => {
            if lhs == 0.0 && rhs < 0.0 {
                return Err(MathError::DivisionByZero);
            }
            lhs.powf(rhs)
        }
    };
    Ok(value)
}

fn nonzero(divisor: f64) -> Result<f64, MathError> {
    if divisor == 0.0 {
        Err(MathError::DivisionByZero)
    } else {
        Ok(divisor)
    }
}

/// Remainder whose sign follows the divisor
fn floored_mod(lhs: f64, rhs: f64) -> f64 {
    let rem = lhs % rhs;
    if rem != 0.0 && (rem < 0.0) != (rhs < 0.0) {
        rem + rhs
    } else {
        rem
    }
}

fn apply_function(function: Function, args: &[f64]) -> Result<f64, MathError> {
    let arg = |index: usize| {
        args.get(index).copied().ok_or(MathError::Arity {
            function: function.name(),
            expected: function.arity(),
            found: args.len(),
        })
    };

    let value = match function {
        Function::Sqrt => {
            let x = arg(0)?;
            if x < 0.0 {
                return Err(MathError::Domain("sqrt"));
            }
            x.sqrt()
        }
        Function::Abs => arg(0)?.abs(),
        Function::Ceil => arg(0)?.ceil(),
        Function::Floor => arg(0)?.floor(),
        Function::Round => arg(0)?.round_ties_even(),
        Function::Sin => arg(0)?.sin(),
        Function::Cos => arg(0)?.cos(),
        Function::Tan => arg(0)?.tan(),
        Function::Log => {
            let x = arg(0)?;
            if x <= 0.0 {
                return Err(MathError::Domain("log"));
            }
            x.ln()
        }
        Function::Pow => apply_binary(BinaryOp::Pow, arg(0)?, arg(1)?)?,
    };
    Ok(value)
}

/// Render a result: integral numbers without a fraction, others rounded to
/// ten decimals, tuples as `(a, b)`.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Number(number) => format_number(*number),
        Value::Tuple(items) => {
            let items: Vec<String> = items.iter().map(|item| format_number(*item)).collect();
            format!("({})", items.join(", "))
        }
    }
}

pub fn format_number(number: f64) -> String {
    if number.fract() == 0.0 {
        return format_integral(number);
    }
    format_integral_or_float(round_decimals(number, RESULT_DECIMALS))
}

fn format_integral(number: f64) -> String {
    if number == 0.0 {
        // no "-0"
        "0".to_string()
    } else {
        format!("{:.0}", number)
    }
}

fn format_integral_or_float(number: f64) -> String {
    if number.fract() == 0.0 {
        format_integral(number)
    } else {
        number.to_string()
    }
}

fn round_decimals(number: f64, decimals: i32) -> f64 {
    // beyond 1e15 an f64 has no fractional digits left to round
    if number.abs() >= 1e15 {
        return number;
    }
    let scale = 10f64.powi(decimals);
    let rounded = (number * scale).round() / scale;
    if rounded.is_finite() {
        rounded
    } else {
        number
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::parser::parse_expression;

    fn run(input: &str) -> Result<Value, MathError> {
        execute(&parse_expression(input)?)
    }

    fn number(input: &str) -> f64 {
        match run(input).unwrap() {
            Value::Number(value) => value,
            other => panic!("expected a number, got {:?}", other),
        }
    }

    #[test]
    fn test_operators() {
        assert_eq!(number("7 // 2"), 3.0);
        assert_eq!(number("-7 // 2"), -4.0);
        assert_eq!(number("-7 % 3"), 2.0);
        assert_eq!(number("7 % -3"), -2.0);
        assert_eq!(number("2 ** -1"), 0.5);
        assert_eq!(number("+5"), 5.0);
    }

    #[test]
    fn test_functions() {
        assert_eq!(number("round(2.5)"), 2.0);
        assert_eq!(number("round(3.5)"), 4.0);
        assert_eq!(number("ceil(1.2) + floor(1.8)"), 3.0);
        assert_eq!(number("abs(-3)"), 3.0);
        assert!((number("log(e)") - 1.0).abs() < 1e-12);
        assert_eq!(number("pow(2, 10)"), 1024.0);
        assert_eq!(number("cos(0)"), 1.0);
    }

    #[test]
    fn test_runtime_errors() {
        assert_eq!(run("10 / 0"), Err(MathError::DivisionByZero));
        assert_eq!(run("1 // 0"), Err(MathError::DivisionByZero));
        assert_eq!(run("5 % 0"), Err(MathError::DivisionByZero));
        assert_eq!(run("0 ^ -1"), Err(MathError::DivisionByZero));
        assert_eq!(run("sqrt(-1)"), Err(MathError::Domain("sqrt")));
        assert_eq!(run("log(0)"), Err(MathError::Domain("log")));
        assert_eq!(run("10 ^ 400"), Err(MathError::NonFinite));
        assert_eq!(run("(-8) ^ 0.5"), Err(MathError::NonFinite));
    }

    #[test]
    fn test_formatting() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(0.1 + 0.2), "0.3");
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333");
        assert_eq!(format_number(2f64.powi(70)), "1180591620717411303424");
        assert_eq!(
            format_value(&Value::Tuple(vec![1.0, 2.5])),
            "(1, 2.5)"
        );
    }
}
