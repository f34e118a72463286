//! # Equation Rendering
//!
//! Builds the LaTeX representation of an evaluated formula.
//!
//! A formula describes its right-hand side once, as an [`Expr`] tree whose
//! variables are bound to their input values. The tree is rendered twice:
//! in [`RenderMode::Symbolic`] every variable prints its symbol, in
//! [`RenderMode::Numeric`] it prints its value. [`Expr::Sum`] expands to one
//! term per sequence element in numeric mode, so summations over inputs of
//! any length need no hand-written template.
//!
//! ## Example
//!
//! ```rust
//! use formula_core::latex::{Expr, LatexFormula};
//!
//! let equation = Expr::spaced([
//!     Expr::var("a", 2.0),
//!     Expr::lit(r"\cdot"),
//!     Expr::var("b", 3.0),
//! ]);
//! let latex = LatexFormula::new("c", &equation, "6.000");
//!
//! assert_eq!(latex.complete(), r"c = a \cdot b = 2.000 \cdot 3.000 = 6.000");
//! assert_eq!(latex.short(), "c = 6.000");
//! ```

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Decimal places used for substituted values and results
pub const DEFAULT_PRECISION: usize = 3;

/// Which text an expression renders to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Variables print as their symbols
    Symbolic,
    /// Variables print as their formatted values
    Numeric,
}

/// Right-hand side of a formula as a small expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Text printed identically in both modes (operators, constants, brackets)
    Lit(Cow<'static, str>),
    /// A bound input: symbol in symbolic mode, value in numeric mode
    Var {
        symbol: Cow<'static, str>,
        value: f64,
        precision: usize,
    },
    /// `\frac{numerator}{denominator}`
    Frac(Box<Expr>, Box<Expr>),
    /// `\sqrt{radicand}`
    Sqrt(Box<Expr>),
    /// Parts joined without separator
    Cat(Vec<Expr>),
    /// Parts joined by single spaces
    Spaced(Vec<Expr>),
    /// Summation: `notation` in symbolic mode, `terms` joined by " + " in numeric mode
    Sum { notation: Box<Expr>, terms: Vec<Expr> },
}

impl Expr {
    /// Literal text
    pub fn lit(text: impl Into<Cow<'static, str>>) -> Self {
        Expr::Lit(text.into())
    }

    /// Variable with the default precision
    pub fn var(symbol: impl Into<Cow<'static, str>>, value: f64) -> Self {
        Expr::Var {
            symbol: symbol.into(),
            value,
            precision: DEFAULT_PRECISION,
        }
    }

    /// Variable with a custom number of decimals
    pub fn var_with_precision(symbol: impl Into<Cow<'static, str>>, value: f64, precision: usize) -> Self {
        Expr::Var {
            symbol: symbol.into(),
            value,
            precision,
        }
    }

    pub fn frac(numerator: Expr, denominator: Expr) -> Self {
        Expr::Frac(Box::new(numerator), Box::new(denominator))
    }

    pub fn sqrt(radicand: Expr) -> Self {
        Expr::Sqrt(Box::new(radicand))
    }

    pub fn cat(parts: impl IntoIterator<Item = Expr>) -> Self {
        Expr::Cat(parts.into_iter().collect())
    }

    pub fn spaced(parts: impl IntoIterator<Item = Expr>) -> Self {
        Expr::Spaced(parts.into_iter().collect())
    }

    pub fn sum(notation: Expr, terms: impl IntoIterator<Item = Expr>) -> Self {
        Expr::Sum {
            notation: Box::new(notation),
            terms: terms.into_iter().collect(),
        }
    }

    /// Render the expression in the given mode
    pub fn render(&self, mode: RenderMode) -> String {
        let mut out = String::new();
        self.write_to(&mut out, mode);
        out
    }

    fn write_to(&self, out: &mut String, mode: RenderMode) {
        match self {
            Expr::Lit(text) => out.push_str(text),
            Expr::Var { symbol, value, precision } => match mode {
                RenderMode::Symbolic => out.push_str(symbol),
                RenderMode::Numeric => out.push_str(&format!("{:.*}", *precision, value)),
            },
            Expr::Frac(numerator, denominator) => {
                out.push_str(r"\frac{");
                numerator.write_to(out, mode);
                out.push_str("}{");
                denominator.write_to(out, mode);
                out.push('}');
            }
            Expr::Sqrt(radicand) => {
                out.push_str(r"\sqrt{");
                radicand.write_to(out, mode);
                out.push('}');
            }
            Expr::Cat(parts) => {
                for part in parts {
                    part.write_to(out, mode);
                }
            }
            Expr::Spaced(parts) => write_joined(out, parts, " ", mode),
            Expr::Sum { notation, terms } => match mode {
                RenderMode::Symbolic => notation.write_to(out, mode),
                RenderMode::Numeric => write_joined(out, terms, " + ", mode),
            },
        }
    }
}

fn write_joined(out: &mut String, parts: &[Expr], separator: &str, mode: RenderMode) {
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        part.write_to(out, mode);
    }
}

/// The rendered equation of an evaluated formula.
///
/// `equation` is the symbolic right-hand side, `numeric_equation` the same
/// with values substituted, `result` the formatted final value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatexFormula {
    pub return_symbol: String,
    pub result: String,
    pub equation: String,
    pub numeric_equation: String,
    pub comparison_operator_label: String,
}

impl LatexFormula {
    /// Render `equation` in both modes with "=" as comparison operator
    pub fn new(return_symbol: impl Into<String>, equation: &Expr, result: impl Into<String>) -> Self {
        Self::with_operator(return_symbol, equation, result, "=")
    }

    pub fn with_operator(
        return_symbol: impl Into<String>,
        equation: &Expr,
        result: impl Into<String>,
        comparison_operator_label: impl Into<String>,
    ) -> Self {
        Self {
            return_symbol: return_symbol.into(),
            result: result.into(),
            equation: equation.render(RenderMode::Symbolic),
            numeric_equation: equation.render(RenderMode::Numeric),
            comparison_operator_label: comparison_operator_label.into(),
        }
    }

    /// Symbolic derivation, numeric substitution and result
    pub fn complete(&self) -> String {
        let op = &self.comparison_operator_label;
        format!(
            "{} {op} {} {op} {} {op} {}",
            self.return_symbol, self.equation, self.numeric_equation, self.result
        )
    }

    /// Return symbol and result only
    pub fn short(&self) -> String {
        format!("{} {} {}", self.return_symbol, self.comparison_operator_label, self.result)
    }
}

impl fmt::Display for LatexFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.complete())
    }
}
