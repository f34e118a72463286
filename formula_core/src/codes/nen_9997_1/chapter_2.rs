//! # NEN 9997-1+C2:2017 Chapter 2 - Basis of geotechnical design
//!
//! Design values of actions. 2.1b gives the representative value, which is
//! usually fed straight into 2.1a:
//!
//! ```rust
//! use formula_core::codes::nen_9997_1::chapter_2::{
//!     Form2Dot1ADesignValueLoad, Form2Dot1BRepresentativeValue,
//! };
//!
//! let f_rep = Form2Dot1BRepresentativeValue::new(0.7, 80.0)?;
//! let f_d = Form2Dot1ADesignValueLoad::new(1.35, &f_rep)?;
//! assert!((f_d.value() - 1.35 * 0.7 * 80.0).abs() < 1e-9);
//! # Ok::<(), formula_core::FormulaError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::FormulaResult;
use crate::formula::{Evaluated, Formula, FormulaMetadata, NamedInput, Variable};
use crate::latex::Expr;
use crate::named;
use crate::source_document::SourceDocument;
use crate::units::{Unit, DIMENSIONLESS, KN};
use crate::validations::reject_negative;

/// Design value of an action.
///
/// # Formula (art. 2.4.6.1(1))
/// F_d = γ_F · F_rep
///
/// Only the partial factor must be non-negative; the action itself may act
/// in either direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Form2Dot1ADesignValueLoad {
    pub gamma_f: DIMENSIONLESS,
    pub f_rep: KN,
}

impl Form2Dot1ADesignValueLoad {
    pub fn new(gamma_f: impl Into<f64>, f_rep: impl Into<f64>) -> FormulaResult<Evaluated<Self>> {
        Self {
            gamma_f: gamma_f.into(),
            f_rep: f_rep.into(),
        }
        .build()
    }
}

impl Formula for Form2Dot1ADesignValueLoad {
    const LABEL: &'static str = "2.1a";
    const SOURCE_DOCUMENT: SourceDocument = SourceDocument::Nen9997_1C2_2017;
    const RETURN_SYMBOL: &'static str = r"F_{d}";

    fn metadata() -> FormulaMetadata {
        FormulaMetadata {
            name: "Design value of an action",
            article: "2.4.6.1(1)",
            unit: Unit::Kn,
            variables: vec![
                Variable::new("gamma_f", r"\gamma_{F}", "Partial factor for the action", Unit::Dimensionless),
                Variable::new("f_rep", r"F_{rep}", "Representative value of the action", Unit::Kn),
            ],
        }
    }

    fn validate(&self) -> FormulaResult<()> {
        reject_negative(&named![gamma_f: self.gamma_f])
    }

    fn evaluate(&self) -> f64 {
        self.gamma_f * self.f_rep
    }

    fn inputs(&self) -> Vec<NamedInput> {
        vec![NamedInput::new("gamma_f", self.gamma_f), NamedInput::new("f_rep", self.f_rep)]
    }

    fn equation(&self) -> Expr {
        Expr::spaced([
            Expr::var(r"\gamma_{F}", self.gamma_f),
            Expr::lit(r"\cdot"),
            Expr::var(r"F_{rep}", self.f_rep),
        ])
    }
}

/// Representative value of an action.
///
/// # Formula (art. 2.4.6.1(2))
/// F_rep = ψ · F_k
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Form2Dot1BRepresentativeValue {
    /// Combination factor ψ (1.0, ψ_0, ψ_1 or ψ_2) [-]
    pub psi: DIMENSIONLESS,
    /// Characteristic value of the action [kN]
    pub f_k: KN,
}

impl Form2Dot1BRepresentativeValue {
    pub fn new(psi: impl Into<f64>, f_k: impl Into<f64>) -> FormulaResult<Evaluated<Self>> {
        Self {
            psi: psi.into(),
            f_k: f_k.into(),
        }
        .build()
    }
}

impl Formula for Form2Dot1BRepresentativeValue {
    const LABEL: &'static str = "2.1b";
    const SOURCE_DOCUMENT: SourceDocument = SourceDocument::Nen9997_1C2_2017;
    const RETURN_SYMBOL: &'static str = r"F_{rep}";

    fn metadata() -> FormulaMetadata {
        FormulaMetadata {
            name: "Representative value of an action",
            article: "2.4.6.1(2)",
            unit: Unit::Kn,
            variables: vec![
                Variable::new("psi", r"\psi", "Factor converting the characteristic value to the representative value", Unit::Dimensionless),
                Variable::new("f_k", r"F_{k}", "Characteristic value of the action", Unit::Kn),
            ],
        }
    }

    fn validate(&self) -> FormulaResult<()> {
        reject_negative(&named![psi: self.psi])
    }

    fn evaluate(&self) -> f64 {
        self.psi * self.f_k
    }

    fn inputs(&self) -> Vec<NamedInput> {
        vec![NamedInput::new("psi", self.psi), NamedInput::new("f_k", self.f_k)]
    }

    fn equation(&self) -> Expr {
        Expr::spaced([
            Expr::var(r"\psi", self.psi),
            Expr::lit(r"\cdot"),
            Expr::var(r"F_{k}", self.f_k),
        ])
    }
}
