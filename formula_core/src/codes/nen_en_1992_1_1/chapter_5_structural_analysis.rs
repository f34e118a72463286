//! # NEN-EN 1992-1-1+C2:2011 Chapter 5 - Structural Analysis
//!
//! Reduction factors for geometric imperfections (5.1) and the effective
//! length of braced compression members (5.15).

use serde::{Deserialize, Serialize};

use crate::errors::FormulaResult;
use crate::formula::{Evaluated, Formula, FormulaMetadata, NamedInput, Variable};
use crate::latex::Expr;
use crate::named;
use crate::source_document::SourceDocument;
use crate::units::{Unit, DIMENSIONLESS, M};
use crate::validations::{reject_negative, reject_zero_or_negative};

// =============================================================================
// SUB-FORMULAS 5.1 - Imperfection reduction factors
// =============================================================================

/// Reduction factor α_h for length or height.
///
/// # Formula (art. 5.2(5))
/// α_h = 2 / √l, with 2/3 ≤ α_h ≤ 1
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubForm5Dot1ReductionFactorLengthOrHeight {
    /// Length or height [m], see art. 5.2(6)
    pub l: M,
}

impl SubForm5Dot1ReductionFactorLengthOrHeight {
    pub fn new(l: impl Into<f64>) -> FormulaResult<Evaluated<Self>> {
        Self { l: l.into() }.build()
    }
}

impl Formula for SubForm5Dot1ReductionFactorLengthOrHeight {
    const LABEL: &'static str = "5.1";
    const SOURCE_DOCUMENT: SourceDocument = SourceDocument::NenEn1992_1_1C2_2011;
    const RETURN_SYMBOL: &'static str = r"\alpha_{h}";

    fn metadata() -> FormulaMetadata {
        FormulaMetadata {
            name: "Reduction factor for length or height",
            article: "5.2(5)",
            unit: Unit::Dimensionless,
            variables: vec![Variable::new("l", "l", "Length or height", Unit::M)],
        }
    }

    fn validate(&self) -> FormulaResult<()> {
        reject_negative(&named![l: self.l])?;
        reject_zero_or_negative(&named![l: self.l])
    }

    fn evaluate(&self) -> f64 {
        (2.0 / self.l.sqrt()).clamp(2.0 / 3.0, 1.0)
    }

    fn inputs(&self) -> Vec<NamedInput> {
        vec![NamedInput::new("l", self.l)]
    }

    fn equation(&self) -> Expr {
        Expr::cat([
            Expr::lit(r"\min\left(\max\left("),
            Expr::frac(Expr::lit("2"), Expr::sqrt(Expr::var("l", self.l))),
            Expr::lit(r"; \frac{2}{3}\right); 1\right)"),
        ])
    }
}

/// Reduction factor α_m for the number of members.
///
/// # Formula (art. 5.2(5))
/// α_m = √(0.5 · (1 + 1/m))
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubForm5Dot1ReductionFactorNumberOfMembers {
    /// Number of vertical members contributing to the total effect [-]
    pub m: DIMENSIONLESS,
}

impl SubForm5Dot1ReductionFactorNumberOfMembers {
    pub fn new(m: impl Into<f64>) -> FormulaResult<Evaluated<Self>> {
        Self { m: m.into() }.build()
    }
}

impl Formula for SubForm5Dot1ReductionFactorNumberOfMembers {
    const LABEL: &'static str = "5.1";
    const SOURCE_DOCUMENT: SourceDocument = SourceDocument::NenEn1992_1_1C2_2011;
    const RETURN_SYMBOL: &'static str = r"\alpha_{m}";

    fn metadata() -> FormulaMetadata {
        FormulaMetadata {
            name: "Reduction factor for number of members",
            article: "5.2(5)",
            unit: Unit::Dimensionless,
            variables: vec![Variable::new("m", "m", "Number of vertical members contributing to the total effect", Unit::Dimensionless)],
        }
    }

    fn validate(&self) -> FormulaResult<()> {
        reject_negative(&named![m: self.m])?;
        reject_zero_or_negative(&named![m: self.m])
    }

    fn evaluate(&self) -> f64 {
        (0.5 * (1.0 + 1.0 / self.m)).sqrt()
    }

    fn inputs(&self) -> Vec<NamedInput> {
        vec![NamedInput::new("m", self.m)]
    }

    // m is a member count, printed without decimals
    fn equation(&self) -> Expr {
        Expr::sqrt(Expr::cat([
            Expr::lit(r"0.5 \cdot \left(1 + "),
            Expr::frac(Expr::lit("1"), Expr::var_with_precision("m", self.m, 0)),
            Expr::lit(r"\right)"),
        ]))
    }
}

// =============================================================================
// FORMULA 5.15 - Effective length of braced members
// =============================================================================

/// Effective length l_0 of a braced compression member.
///
/// ```text
///      ┬  k_1 (rotational flexibility at end 1)
///      │
///      │  l = clear height between end restraints
///      │
///      ┴  k_2 (rotational flexibility at end 2)
/// ```
///
/// # Formula (art. 5.8.3.2(3))
/// l_0 = 0.5 · l · √((1 + k_1/(0.45 + k_1)) · (1 + k_2/(0.45 + k_2)))
///
/// k = 0 is a fully rigid restraint, k → ∞ no restraint at all. In the
/// limit both ends pinned, l_0 → l.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Form5Dot15EffectiveLengthBraced {
    /// Relative flexibility of rotational constraint at end 1 [-]
    pub k_1: DIMENSIONLESS,
    /// Relative flexibility of rotational constraint at end 2 [-]
    pub k_2: DIMENSIONLESS,
    /// Clear height of compression member between end restraints [m]
    pub height: M,
}

impl Form5Dot15EffectiveLengthBraced {
    pub fn new(k_1: impl Into<f64>, k_2: impl Into<f64>, height: impl Into<f64>) -> FormulaResult<Evaluated<Self>> {
        Self {
            k_1: k_1.into(),
            k_2: k_2.into(),
            height: height.into(),
        }
        .build()
    }
}

impl Formula for Form5Dot15EffectiveLengthBraced {
    const LABEL: &'static str = "5.15";
    const SOURCE_DOCUMENT: SourceDocument = SourceDocument::NenEn1992_1_1C2_2011;
    const RETURN_SYMBOL: &'static str = r"l_{0}";

    fn metadata() -> FormulaMetadata {
        FormulaMetadata {
            name: "Effective length for braced members",
            article: "5.8.3.2(3)",
            unit: Unit::M,
            variables: vec![
                Variable::new("k_1", r"k_{1}", "Relative flexibility of rotational constraint at end 1", Unit::Dimensionless),
                Variable::new("k_2", r"k_{2}", "Relative flexibility of rotational constraint at end 2", Unit::Dimensionless),
                Variable::new("height", "l", "Clear height of compression member between end restraints", Unit::M),
            ],
        }
    }

    fn validate(&self) -> FormulaResult<()> {
        reject_negative(&named![k_1: self.k_1, k_2: self.k_2, height: self.height])
    }

    fn evaluate(&self) -> f64 {
        let end_1 = 1.0 + self.k_1 / (0.45 + self.k_1);
        let end_2 = 1.0 + self.k_2 / (0.45 + self.k_2);
        0.5 * self.height * (end_1 * end_2).sqrt()
    }

    fn inputs(&self) -> Vec<NamedInput> {
        vec![
            NamedInput::new("k_1", self.k_1),
            NamedInput::new("k_2", self.k_2),
            NamedInput::new("height", self.height),
        ]
    }

    fn equation(&self) -> Expr {
        let end = |symbol: &'static str, k: f64| {
            Expr::cat([
                Expr::lit("1 + "),
                Expr::frac(Expr::var(symbol, k), Expr::cat([Expr::lit("0.45 + "), Expr::var(symbol, k)])),
            ])
        };
        Expr::cat([
            Expr::lit(r"0.5 \cdot "),
            Expr::var("l", self.height),
            Expr::lit(r" \cdot "),
            Expr::sqrt(Expr::cat([
                Expr::lit(r"\left("),
                end(r"k_{1}", self.k_1),
                Expr::lit(r"\right) \cdot \left("),
                end(r"k_{2}", self.k_2),
                Expr::lit(r"\right)"),
            ])),
        ])
    }
}
