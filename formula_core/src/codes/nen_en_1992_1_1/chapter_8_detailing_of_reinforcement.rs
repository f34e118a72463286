//! # NEN-EN 1992-1-1+C2:2011 Chapter 8 - Detailing of reinforcement and prestressing tendons

use serde::{Deserialize, Serialize};

use crate::errors::FormulaResult;
use crate::formula::{Evaluated, Formula, FormulaMetadata, NamedInput, Variable};
use crate::latex::Expr;
use crate::named;
use crate::source_document::SourceDocument;
use crate::units::{Unit, DIMENSIONLESS, MM, MM2, MPA};
use crate::validations::{reject_negative, reject_zero_or_negative};

// =============================================================================
// FORMULA 8.2 - Ultimate bond stress
// =============================================================================

/// Design value of the ultimate bond stress for ribbed bars.
///
/// # Formula (art. 8.4.2(2))
/// f_bd = 2.25 · η_1 · η_2 · f_ctd
///
/// # Arguments
/// * `eta_1` - Bond quality coefficient (1.0 good, 0.7 other conditions)
/// * `eta_2` - Bar diameter coefficient (1.0 for Ø ≤ 32 mm)
/// * `f_ctd` - Design tensile strength, see [`Form3Dot16DesignTensileStrength`]
///
/// [`Form3Dot16DesignTensileStrength`]: super::chapter_3_materials::Form3Dot16DesignTensileStrength
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Form8Dot2UltimateBondStress {
    pub eta_1: DIMENSIONLESS,
    pub eta_2: DIMENSIONLESS,
    pub f_ctd: MPA,
}

impl Form8Dot2UltimateBondStress {
    pub fn new(eta_1: impl Into<f64>, eta_2: impl Into<f64>, f_ctd: impl Into<f64>) -> FormulaResult<Evaluated<Self>> {
        Self {
            eta_1: eta_1.into(),
            eta_2: eta_2.into(),
            f_ctd: f_ctd.into(),
        }
        .build()
    }
}

impl Formula for Form8Dot2UltimateBondStress {
    const LABEL: &'static str = "8.2";
    const SOURCE_DOCUMENT: SourceDocument = SourceDocument::NenEn1992_1_1C2_2011;
    const RETURN_SYMBOL: &'static str = r"f_{bd}";

    fn metadata() -> FormulaMetadata {
        FormulaMetadata {
            name: "Design value of the ultimate bond stress",
            article: "8.4.2(2)",
            unit: Unit::Mpa,
            variables: vec![
                Variable::new("eta_1", r"\eta_{1}", "Coefficient related to the quality of the bond condition", Unit::Dimensionless),
                Variable::new("eta_2", r"\eta_{2}", "Coefficient related to the bar diameter", Unit::Dimensionless),
                Variable::new("f_ctd", r"f_{ctd}", "Design value of concrete tensile strength", Unit::Mpa),
            ],
        }
    }

    fn validate(&self) -> FormulaResult<()> {
        reject_negative(&named![eta_1: self.eta_1, eta_2: self.eta_2, f_ctd: self.f_ctd])
    }

    fn evaluate(&self) -> f64 {
        2.25 * self.eta_1 * self.eta_2 * self.f_ctd
    }

    fn inputs(&self) -> Vec<NamedInput> {
        vec![
            NamedInput::new("eta_1", self.eta_1),
            NamedInput::new("eta_2", self.eta_2),
            NamedInput::new("f_ctd", self.f_ctd),
        ]
    }

    fn equation(&self) -> Expr {
        Expr::spaced([
            Expr::lit(r"2.25 \cdot"),
            Expr::var(r"\eta_{1}", self.eta_1),
            Expr::lit(r"\cdot"),
            Expr::var(r"\eta_{2}", self.eta_2),
            Expr::lit(r"\cdot"),
            Expr::var(r"f_{ctd}", self.f_ctd),
        ])
    }
}

// =============================================================================
// FORMULA 8.3 - Basic required anchorage length
// =============================================================================

/// Basic required anchorage length l_b,rqd for anchoring the force A_s·σ_sd
/// in a straight bar, assuming constant bond stress f_bd.
///
/// # Formula (art. 8.4.3(2))
/// l_b,rqd = (Ø / 4) · (σ_sd / f_bd)
///
/// # Arguments
/// * `phi` - Diameter of the bar [mm]
/// * `sigma_sd` - Design stress of the bar at the position from where the
///   anchorage is measured [MPa]
/// * `f_bd` - Design value of the ultimate bond stress [MPa]. Use your own
///   value or the result of [`Form8Dot2UltimateBondStress`].
///
/// # Example
/// ```rust
/// use formula_core::codes::nen_en_1992_1_1::chapter_8_detailing_of_reinforcement::{
///     Form8Dot2UltimateBondStress, Form8Dot3RequiredAnchorageLength,
/// };
///
/// let f_bd = Form8Dot2UltimateBondStress::new(1.0, 1.0, 1.333)?;
/// let l_b_rqd = Form8Dot3RequiredAnchorageLength::new(12.0, 435.0, &f_bd)?;
/// assert!(l_b_rqd > 400.0);
/// # Ok::<(), formula_core::FormulaError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Form8Dot3RequiredAnchorageLength {
    pub phi: MM,
    pub sigma_sd: MPA,
    pub f_bd: MPA,
}

impl Form8Dot3RequiredAnchorageLength {
    pub fn new(phi: impl Into<f64>, sigma_sd: impl Into<f64>, f_bd: impl Into<f64>) -> FormulaResult<Evaluated<Self>> {
        Self {
            phi: phi.into(),
            sigma_sd: sigma_sd.into(),
            f_bd: f_bd.into(),
        }
        .build()
    }
}

impl Formula for Form8Dot3RequiredAnchorageLength {
    const LABEL: &'static str = "8.3";
    const SOURCE_DOCUMENT: SourceDocument = SourceDocument::NenEn1992_1_1C2_2011;
    const RETURN_SYMBOL: &'static str = r"l_{b,rqd}";

    fn metadata() -> FormulaMetadata {
        FormulaMetadata {
            name: "Basic required anchorage length",
            article: "8.4.3(2)",
            unit: Unit::Mm,
            variables: vec![
                Variable::new("phi", r"\phi", "Diameter of the bar", Unit::Mm),
                Variable::new("sigma_sd", r"\sigma_{sd}", "Design stress of the bar where the anchorage is measured from", Unit::Mpa),
                Variable::new("f_bd", r"f_{bd}", "Design value of the ultimate bond stress", Unit::Mpa),
            ],
        }
    }

    fn validate(&self) -> FormulaResult<()> {
        reject_negative(&named![phi: self.phi, sigma_sd: self.sigma_sd, f_bd: self.f_bd])?;
        reject_zero_or_negative(&named![f_bd: self.f_bd])
    }

    fn evaluate(&self) -> f64 {
        (self.phi / 4.0) * (self.sigma_sd / self.f_bd)
    }

    fn inputs(&self) -> Vec<NamedInput> {
        vec![
            NamedInput::new("phi", self.phi),
            NamedInput::new("sigma_sd", self.sigma_sd),
            NamedInput::new("f_bd", self.f_bd),
        ]
    }

    fn equation(&self) -> Expr {
        Expr::spaced([
            Expr::lit(r"\left("),
            Expr::frac(Expr::var(r"\phi", self.phi), Expr::lit("4")),
            Expr::lit(r"\right) \cdot \left("),
            Expr::frac(Expr::var(r"\sigma_{sd}", self.sigma_sd), Expr::var(r"f_{bd}", self.f_bd)),
            Expr::lit(r"\right)"),
        ])
    }
}

// =============================================================================
// FORMULA 8.12 - Additional surface reinforcement for large bars
// =============================================================================

/// Area of additional transverse reinforcement parallel to the beam's
/// tension face, for anchorages of large diameter bars (Ø > 32 mm).
///
/// # Formula (art. 8.8(6))
/// A_sh = 0.25 · A_s · n_1
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Form8Dot12AdditionalShearReinforcement {
    /// Cross-sectional area of an anchored bar [mm²]
    pub a_s: MM2,
    /// Number of layers with bars anchored at the same point [-]
    pub n_1: DIMENSIONLESS,
}

impl Form8Dot12AdditionalShearReinforcement {
    pub fn new(a_s: impl Into<f64>, n_1: impl Into<f64>) -> FormulaResult<Evaluated<Self>> {
        Self {
            a_s: a_s.into(),
            n_1: n_1.into(),
        }
        .build()
    }
}

impl Formula for Form8Dot12AdditionalShearReinforcement {
    const LABEL: &'static str = "8.12";
    const SOURCE_DOCUMENT: SourceDocument = SourceDocument::NenEn1992_1_1C2_2011;
    const RETURN_SYMBOL: &'static str = r"A_{sh}";

    fn metadata() -> FormulaMetadata {
        FormulaMetadata {
            name: "Additional reinforcement parallel to the tension face",
            article: "8.8(6)",
            unit: Unit::Mm2,
            variables: vec![
                Variable::new("a_s", r"A_{s}", "Cross-sectional area of an anchored bar", Unit::Mm2),
                Variable::new("n_1", r"n_{1}", "Number of layers with bars anchored at the same point", Unit::Dimensionless),
            ],
        }
    }

    fn validate(&self) -> FormulaResult<()> {
        reject_negative(&named![a_s: self.a_s, n_1: self.n_1])
    }

    fn evaluate(&self) -> f64 {
        0.25 * self.a_s * self.n_1
    }

    fn inputs(&self) -> Vec<NamedInput> {
        vec![NamedInput::new("a_s", self.a_s), NamedInput::new("n_1", self.n_1)]
    }

    fn equation(&self) -> Expr {
        Expr::spaced([
            Expr::lit(r"0.25 \cdot"),
            Expr::var(r"A_{s}", self.a_s),
            Expr::lit(r"\cdot"),
            Expr::var(r"n_{1}", self.n_1),
        ])
    }
}
