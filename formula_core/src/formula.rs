//! # Formula Base Abstraction
//!
//! Every normative formula follows the same life cycle:
//!
//! ```text
//! Draft ──build()──▶ validate ──▶ evaluate ──▶ Evaluated<F> (immutable)
//!                        │
//!                        └── Err(FormulaError) ── no instance exists
//! ```
//!
//! A draft is a plain struct whose public fields are the formula's named
//! inputs. It implements [`Formula`], which supplies the clause identity, the
//! guards, the closed-form expression and the equation template.
//! [`Formula::build`] consumes the draft and returns an [`Evaluated`] value
//! that exposes no mutators. An `Evaluated<F>` behaves as its numeric result:
//! it compares against and combines with `f64` and other evaluated formulas,
//! and converts into `f64`, so one result feeds the next formula directly.
//!
//! ## Example
//!
//! ```rust
//! use formula_core::codes::nen_9997_1::chapter_2::{
//!     Form2Dot1ADesignValueLoad, Form2Dot1BRepresentativeValue,
//! };
//!
//! let f_rep = Form2Dot1BRepresentativeValue::new(2.0, 50.0)?;
//! let f_d = Form2Dot1ADesignValueLoad::new(1.35, &f_rep)?;
//!
//! assert!((&f_d - 135.0).abs() < 1e-9);
//! assert_eq!(f_d.latex().short(), "F_{d} = 135.000");
//! # Ok::<(), formula_core::FormulaError>(())
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::errors::{FormulaError, FormulaResult};
use crate::latex::{Expr, LatexFormula, DEFAULT_PRECISION};
use crate::source_document::SourceDocument;
use crate::units::Unit;

// ============================================================================
// Metadata
// ============================================================================

/// Definition of an input or result symbol of a formula.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Variable {
    /// Parameter name as used by the constructor (e.g., "sigma_sd")
    pub name: &'static str,
    /// LaTeX symbol (e.g., r"\sigma_{sd}")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    pub unit: Unit,
    /// Takes one value per band instead of a single scalar
    pub sequence: bool,
}

impl Variable {
    pub const fn new(name: &'static str, symbol: &'static str, description: &'static str, unit: Unit) -> Self {
        Self {
            name,
            symbol,
            description,
            unit,
            sequence: false,
        }
    }

    /// A sequence input (e.g. cycle counts per stress range band).
    pub const fn sequence(name: &'static str, symbol: &'static str, description: &'static str, unit: Unit) -> Self {
        Self {
            sequence: true,
            ..Self::new(name, symbol, description, unit)
        }
    }
}

/// Static description of a formula variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormulaMetadata {
    /// Human-readable name (e.g., "Basic required anchorage length")
    pub name: &'static str,
    /// Article the formula appears in (e.g., "8.4.3(2)")
    pub article: &'static str,
    /// Unit of the result
    pub unit: Unit,
    /// Input variables, in constructor order
    pub variables: Vec<Variable>,
}

// ============================================================================
// Named inputs
// ============================================================================

/// Value of a named input: a scalar or a sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputValue {
    Scalar(f64),
    List(Vec<f64>),
}

impl fmt::Display for InputValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputValue::Scalar(value) => write!(f, "{}", value),
            InputValue::List(values) => {
                let parts: Vec<String> = values.iter().map(|v| v.to_string()).collect();
                write!(f, "[{}]", parts.join(", "))
            }
        }
    }
}

impl From<f64> for InputValue {
    fn from(value: f64) -> Self {
        InputValue::Scalar(value)
    }
}

impl From<&[f64]> for InputValue {
    fn from(values: &[f64]) -> Self {
        InputValue::List(values.to_vec())
    }
}

impl From<&Vec<f64>> for InputValue {
    fn from(values: &Vec<f64>) -> Self {
        InputValue::List(values.clone())
    }
}

/// An input name paired with the value a formula was evaluated with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedInput {
    pub name: String,
    pub value: InputValue,
}

impl NamedInput {
    pub fn new(name: impl Into<String>, value: impl Into<InputValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

// ============================================================================
// Formula trait
// ============================================================================

/// A normative formula, implemented by its draft input struct.
///
/// Implementors supply identity, guards, the closed-form expression and the
/// equation template; [`Formula::build`] ties them together.
pub trait Formula: Sized {
    /// Clause label within the source document (e.g., "5.15")
    const LABEL: &'static str;
    const SOURCE_DOCUMENT: SourceDocument;
    /// LaTeX symbol of the result (e.g., "l_{0}")
    const RETURN_SYMBOL: &'static str;
    /// Decimals of the rendered result
    const PRECISION: usize = DEFAULT_PRECISION;
    const COMPARISON_OPERATOR: &'static str = "=";

    fn metadata() -> FormulaMetadata;

    /// Run the guards for this formula. Called before `evaluate`.
    fn validate(&self) -> FormulaResult<()>;

    /// Closed-form expression. Only meaningful for validated inputs.
    fn evaluate(&self) -> f64;

    /// Input names and values, in constructor order
    fn inputs(&self) -> Vec<NamedInput>;

    /// Right-hand side of the equation with inputs bound
    fn equation(&self) -> Expr;

    /// Validate, evaluate and freeze.
    fn build(self) -> FormulaResult<Evaluated<Self>> {
        tracing::trace!(label = Self::LABEL, document = %Self::SOURCE_DOCUMENT, "validating formula inputs");
        if let Err(error) = self.validate() {
            tracing::debug!(label = Self::LABEL, %error, "formula rejected inputs");
            return Err(error);
        }
        let result = self.evaluate();
        tracing::debug!(label = Self::LABEL, result, "formula evaluated");
        Ok(Evaluated { draft: self, result })
    }
}

// ============================================================================
// Evaluated formula
// ============================================================================

/// An evaluated, immutable formula.
///
/// Only obtainable through [`Formula::build`]. The draft is kept for
/// provenance and rendering and is exposed by shared reference only.
#[derive(Debug, Clone)]
pub struct Evaluated<F> {
    draft: F,
    result: f64,
}

impl<F: Formula> Evaluated<F> {
    /// The numeric result
    pub fn value(&self) -> f64 {
        self.result
    }

    pub fn label(&self) -> &'static str {
        F::LABEL
    }

    pub fn source_document(&self) -> SourceDocument {
        F::SOURCE_DOCUMENT
    }

    /// The inputs this result was evaluated with
    pub fn inputs(&self) -> &F {
        &self.draft
    }

    pub fn named_inputs(&self) -> Vec<NamedInput> {
        self.draft.inputs()
    }

    /// Look up an input by name, or the result as "result"
    pub fn attribute(&self, name: &str) -> Option<InputValue> {
        if name == "result" {
            return Some(InputValue::Scalar(self.result));
        }
        self.draft
            .inputs()
            .into_iter()
            .find(|input| input.name == name)
            .map(|input| input.value)
    }

    /// Name-addressed write. An evaluated formula is frozen, so this always
    /// fails and leaves the instance untouched.
    pub fn set_attribute(&mut self, name: &str, value: impl Into<InputValue>) -> FormulaResult<()> {
        let attempted: InputValue = value.into();
        tracing::debug!(label = F::LABEL, attribute = name, %attempted, "write rejected on evaluated formula");
        Err(FormulaError::immutability_violation(F::LABEL, name))
    }

    /// Build the LaTeX representation. Not cached; every call renders anew.
    pub fn latex(&self) -> LatexFormula {
        LatexFormula::with_operator(
            F::RETURN_SYMBOL,
            &self.draft.equation(),
            format!("{:.*}", F::PRECISION, self.result),
            F::COMPARISON_OPERATOR,
        )
    }
}

impl<F: Formula> fmt::Display for Evaluated<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.result, f)
    }
}

// ----------------------------------------------------------------------------
// Numeric transparency
// ----------------------------------------------------------------------------

impl<F> From<Evaluated<F>> for f64 {
    fn from(evaluated: Evaluated<F>) -> Self {
        evaluated.result
    }
}

impl<F> From<&Evaluated<F>> for f64 {
    fn from(evaluated: &Evaluated<F>) -> Self {
        evaluated.result
    }
}

// Comparisons look at the result only; inputs never take part.

impl<F, G> PartialEq<Evaluated<G>> for Evaluated<F> {
    fn eq(&self, other: &Evaluated<G>) -> bool {
        self.result == other.result
    }
}

impl<F, G> PartialOrd<Evaluated<G>> for Evaluated<F> {
    fn partial_cmp(&self, other: &Evaluated<G>) -> Option<Ordering> {
        self.result.partial_cmp(&other.result)
    }
}

impl<F> PartialEq<f64> for Evaluated<F> {
    fn eq(&self, other: &f64) -> bool {
        self.result == *other
    }
}

impl<F> PartialEq<Evaluated<F>> for f64 {
    fn eq(&self, other: &Evaluated<F>) -> bool {
        *self == other.result
    }
}

impl<F> PartialOrd<f64> for Evaluated<F> {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.result.partial_cmp(other)
    }
}

impl<F> PartialOrd<Evaluated<F>> for f64 {
    fn partial_cmp(&self, other: &Evaluated<F>) -> Option<Ordering> {
        self.partial_cmp(&other.result)
    }
}

impl<F> Neg for &Evaluated<F> {
    type Output = f64;
    fn neg(self) -> f64 {
        -self.result
    }
}

impl<F> Neg for Evaluated<F> {
    type Output = f64;
    fn neg(self) -> f64 {
        -self.result
    }
}

macro_rules! impl_arithmetic {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<F> $trait<f64> for Evaluated<F> {
            type Output = f64;
            fn $method(self, rhs: f64) -> f64 {
                self.result $op rhs
            }
        }

        impl<F> $trait<f64> for &Evaluated<F> {
            type Output = f64;
            fn $method(self, rhs: f64) -> f64 {
                self.result $op rhs
            }
        }

        impl<F> $trait<Evaluated<F>> for f64 {
            type Output = f64;
            fn $method(self, rhs: Evaluated<F>) -> f64 {
                self $op rhs.result
            }
        }

        impl<F> $trait<&Evaluated<F>> for f64 {
            type Output = f64;
            fn $method(self, rhs: &Evaluated<F>) -> f64 {
                self $op rhs.result
            }
        }

        impl<F, G> $trait<Evaluated<G>> for Evaluated<F> {
            type Output = f64;
            fn $method(self, rhs: Evaluated<G>) -> f64 {
                self.result $op rhs.result
            }
        }

        impl<F, G> $trait<&Evaluated<G>> for &Evaluated<F> {
            type Output = f64;
            fn $method(self, rhs: &Evaluated<G>) -> f64 {
                self.result $op rhs.result
            }
        }
    };
}

impl_arithmetic!(Add, add, +);
impl_arithmetic!(Sub, sub, -);
impl_arithmetic!(Mul, mul, *);
impl_arithmetic!(Div, div, /);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::named;
    use crate::validations::reject_negative;

    /// y = 2·x, x >= 0
    #[derive(Debug, Clone, PartialEq)]
    struct Doubling {
        x: f64,
    }

    impl Formula for Doubling {
        const LABEL: &'static str = "T.1";
        const SOURCE_DOCUMENT: SourceDocument = SourceDocument::NenEn1992_1_1C2_2011;
        const RETURN_SYMBOL: &'static str = "y";

        fn metadata() -> FormulaMetadata {
            FormulaMetadata {
                name: "Doubling",
                article: "-",
                unit: Unit::Dimensionless,
                variables: vec![Variable::new("x", "x", "Input", Unit::Dimensionless)],
            }
        }

        fn validate(&self) -> FormulaResult<()> {
            reject_negative(&named![x: self.x])
        }

        fn evaluate(&self) -> f64 {
            2.0 * self.x
        }

        fn inputs(&self) -> Vec<NamedInput> {
            vec![NamedInput::new("x", self.x)]
        }

        fn equation(&self) -> Expr {
            Expr::spaced([Expr::lit(r"2 \cdot"), Expr::var("x", self.x)])
        }
    }

    #[test]
    fn test_build_evaluates() {
        let y = Doubling { x: 1.5 }.build().unwrap();
        assert_eq!(y.value(), 3.0);
        assert_eq!(y.label(), "T.1");
        assert_eq!(y.inputs().x, 1.5);
    }

    #[test]
    fn test_build_rejects_invalid_draft() {
        let err = Doubling { x: -1.0 }.build().unwrap_err();
        assert_eq!(err, FormulaError::negative_value("x", -1.0));
    }

    #[test]
    fn test_numeric_transparency() {
        let y = Doubling { x: 2.0 }.build().unwrap();
        let z = Doubling { x: 3.0 }.build().unwrap();

        assert!(y == 4.0);
        assert!(4.0 == y);
        assert!(y < 5.0);
        assert!(3.0 < y);
        assert_eq!(&y + 1.0, 5.0);
        assert_eq!(10.0 - &y, 6.0);
        assert_eq!(&y * &z, 24.0);
        assert_eq!(&z / &y, 1.5);
        assert_eq!(-&y, -4.0);
        assert_eq!(format!("{:.3}", y), "4.000");
        assert_eq!(format!("{}", z), "6");
        let raw: f64 = y.clone().into();
        assert_eq!(raw, 4.0);
        assert!(y != z);
        assert!(y < z);
    }

    #[test]
    fn test_equality_ignores_inputs() {
        let a = Doubling { x: 2.0 }.build().unwrap();
        let b = Doubling { x: 2.0 }.build().unwrap();
        assert!(a == b);
        assert_eq!(a.value().to_bits(), b.value().to_bits());
    }

    #[test]
    fn test_set_attribute_is_rejected() {
        let mut y = Doubling { x: 2.0 }.build().unwrap();
        let err = y.set_attribute("x", 5.0).unwrap_err();
        assert_eq!(err, FormulaError::immutability_violation("T.1", "x"));

        let err = y.set_attribute("result", 0.0).unwrap_err();
        assert_eq!(err.error_code(), "IMMUTABILITY_VIOLATION");

        assert_eq!(y.value(), 4.0);
        assert_eq!(y.attribute("x"), Some(InputValue::Scalar(2.0)));
        assert_eq!(y.attribute("result"), Some(InputValue::Scalar(4.0)));
        assert_eq!(y.attribute("missing"), None);
    }

    #[test]
    fn test_latex_is_regenerated_identically() {
        let y = Doubling { x: 2.0 }.build().unwrap();
        let first = y.latex();
        let second = y.latex();
        assert_eq!(first, second);
        assert_eq!(first.complete(), r"y = 2 \cdot x = 2 \cdot 2.000 = 4.000");
        assert_eq!(first.short(), "y = 4.000");
    }

    #[test]
    fn test_input_value_display() {
        assert_eq!(InputValue::from(2.5).to_string(), "2.5");
        assert_eq!(InputValue::from(&[1.0, 2.0][..]).to_string(), "[1, 2]");
    }
}
