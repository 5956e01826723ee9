//! Postfix plot equations.
//!
//! Equations use PostScript operand order: `x 2 exp 3 mul` is `3·x²`.
//! Trigonometric operators work in degrees, as in PostScript.

use serde::{Deserialize, Serialize};
use vectorkit_core::GeometryError;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Neg,
    Abs,
    Sqrt,
    Exp,
    Ln,
    Log,
    Sin,
    Cos,
    Atan,
    Dup,
    Exch,
    Pop,
}

impl Operator {
    fn parse(word: &str) -> Option<Self> {
        let op = match word {
            "add" => Operator::Add,
            "sub" => Operator::Sub,
            "mul" => Operator::Mul,
            "div" => Operator::Div,
            "neg" => Operator::Neg,
            "abs" => Operator::Abs,
            "sqrt" => Operator::Sqrt,
            "exp" => Operator::Exp,
            "ln" => Operator::Ln,
            "log" => Operator::Log,
            "sin" => Operator::Sin,
            "cos" => Operator::Cos,
            "atan" => Operator::Atan,
            "dup" => Operator::Dup,
            "exch" => Operator::Exch,
            "pop" => Operator::Pop,
            _ => return None,
        };
        Some(op)
    }

    /// (operands consumed, results produced)
    fn arity(self) -> (usize, usize) {
        match self {
            Operator::Add
            | Operator::Sub
            | Operator::Mul
            | Operator::Div
            | Operator::Exp
            | Operator::Atan => (2, 1),
            Operator::Neg
            | Operator::Abs
            | Operator::Sqrt
            | Operator::Ln
            | Operator::Log
            | Operator::Sin
            | Operator::Cos => (1, 1),
            Operator::Dup => (1, 2),
            Operator::Exch => (2, 2),
            Operator::Pop => (1, 0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Number(f64),
    X,
    Op(Operator),
}

/// A parsed postfix expression of one variable `x`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Equation {
    source: String,
    tokens: Vec<Token>,
}

impl Equation {
    pub fn parse(source: &str) -> Result<Self, GeometryError> {
        let invalid = |reason: String| GeometryError::InvalidEquation {
            equation: source.to_string(),
            reason,
        };

        let mut tokens = Vec::new();
        let mut depth = 0usize;
        for word in source.split_whitespace() {
            let token = if word == "x" {
                Token::X
            } else if let Some(op) = Operator::parse(word) {
                Token::Op(op)
            } else {
                match word.parse::<f64>() {
                    Ok(n) if n.is_finite() => Token::Number(n),
                    _ => return Err(invalid(format!("unknown token '{}'", word))),
                }
            };

            match token {
                Token::Op(op) => {
                    let (consumed, produced) = op.arity();
                    if depth < consumed {
                        return Err(invalid(format!("stack underflow at '{}'", word)));
                    }
                    depth = depth - consumed + produced;
                }
                _ => depth += 1,
            }
            tokens.push(token);
        }

        match depth {
            1 => Ok(Self {
                source: source.split_whitespace().collect::<Vec<_>>().join(" "),
                tokens,
            }),
            0 => Err(invalid("empty expression".to_string())),
            n => Err(invalid(format!("{} values left on the stack", n))),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Evaluate at `x`. The result may be non-finite; callers validate it.
    pub fn eval(&self, x: f64) -> Result<f64, GeometryError> {
        let mut stack: Vec<f64> = Vec::with_capacity(self.tokens.len());
        for token in &self.tokens {
            match *token {
                Token::Number(n) => stack.push(n),
                Token::X => stack.push(x),
                Token::Op(op) => self.apply(op, &mut stack)?,
            }
        }
        self.pop(&mut stack)
    }

    fn pop(&self, stack: &mut Vec<f64>) -> Result<f64, GeometryError> {
        stack.pop().ok_or_else(|| GeometryError::InvalidEquation {
            equation: self.source.clone(),
            reason: "stack underflow".to_string(),
        })
    }

    fn pop_pair(&self, stack: &mut Vec<f64>) -> Result<(f64, f64), GeometryError> {
        let b = self.pop(stack)?;
        let a = self.pop(stack)?;
        Ok((a, b))
    }

    fn apply(&self, op: Operator, stack: &mut Vec<f64>) -> Result<(), GeometryError> {
        match op {
            Operator::Add => {
                let (a, b) = self.pop_pair(stack)?;
                stack.push(a + b);
            }
            Operator::Sub => {
                let (a, b) = self.pop_pair(stack)?;
                stack.push(a - b);
            }
            Operator::Mul => {
                let (a, b) = self.pop_pair(stack)?;
                stack.push(a * b);
            }
            Operator::Div => {
                let (a, b) = self.pop_pair(stack)?;
                stack.push(a / b);
            }
            Operator::Exp => {
                let (a, b) = self.pop_pair(stack)?;
                stack.push(a.powf(b));
            }
            Operator::Atan => {
                let (a, b) = self.pop_pair(stack)?;
                stack.push(a.atan2(b).to_degrees().rem_euclid(360.0));
            }
            Operator::Exch => {
                let (a, b) = self.pop_pair(stack)?;
                stack.push(b);
                stack.push(a);
            }
            Operator::Neg => {
                let a = self.pop(stack)?;
                stack.push(-a);
            }
            Operator::Abs => {
                let a = self.pop(stack)?;
                stack.push(a.abs());
            }
            Operator::Sqrt => {
                let a = self.pop(stack)?;
                stack.push(a.sqrt());
            }
            Operator::Ln => {
                let a = self.pop(stack)?;
                stack.push(a.ln());
            }
            Operator::Log => {
                let a = self.pop(stack)?;
                stack.push(a.log10());
            }
            Operator::Sin => {
                let a = self.pop(stack)?;
                stack.push(a.to_radians().sin());
            }
            Operator::Cos => {
                let a = self.pop(stack)?;
                stack.push(a.to_radians().cos());
            }
            Operator::Dup => {
                let a = self.pop(stack)?;
                stack.push(a);
                stack.push(a);
            }
            Operator::Pop => {
                self.pop(stack)?;
            }
        }
        Ok(())
    }
}

impl Default for Equation {
    fn default() -> Self {
        Self {
            source: "x".to_string(),
            tokens: vec![Token::X],
        }
    }
}

impl TryFrom<String> for Equation {
    type Error = GeometryError;

    fn try_from(source: String) -> Result<Self, Self::Error> {
        Equation::parse(&source)
    }
}

impl From<Equation> for String {
    fn from(equation: Equation) -> Self {
        equation.source
    }
}

impl std::fmt::Display for Equation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(source: &str, x: f64) -> f64 {
        Equation::parse(source)
            .and_then(|e| e.eval(x))
            .expect("valid equation")
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(eval("x", 4.0), 4.0);
        assert_eq!(eval("x 2 exp 3 mul", 2.0), 12.0);
        assert_eq!(eval("10 x sub", 4.0), 6.0);
        assert_eq!(eval("x x mul x add", 3.0), 12.0);
        assert_eq!(eval("1 x exch div", 4.0), 4.0);
        assert_eq!(eval("x dup mul 5 pop", 3.0), 9.0);
    }

    #[test]
    fn test_trigonometry_in_degrees() {
        assert!((eval("x sin", 90.0) - 1.0).abs() < 1e-12);
        assert!((eval("x cos", 180.0) + 1.0).abs() < 1e-12);
        assert!((eval("1 1 atan", 0.0) - 45.0).abs() < 1e-12);
        assert!((eval("0 -1 atan", 0.0) - 180.0).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_malformed_expressions() {
        assert!(Equation::parse("").is_err());
        assert!(Equation::parse("add").is_err());
        assert!(Equation::parse("x x").is_err());
        assert!(Equation::parse("x foo").is_err());
        assert!(Equation::parse("x nan add").is_err());
    }

    #[test]
    fn test_non_finite_result_is_reported_not_rejected() {
        let eq = Equation::parse("1 x div").expect("valid equation");
        assert!(eq.eval(0.0).expect("evaluates").is_infinite());
    }

    #[test]
    fn test_source_is_normalised() {
        let eq = Equation::parse("  x   2  mul ").expect("valid equation");
        assert_eq!(eq.source(), "x 2 mul");
        assert_eq!(Equation::default().source(), "x");
    }
}
