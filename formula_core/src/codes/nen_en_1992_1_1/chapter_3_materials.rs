//! # NEN-EN 1992-1-1+C2:2011 Chapter 3 - Materials
//!
//! Concrete strength development, elastic modulus and creep, design
//! strengths, and the prestress ratio used by the relaxation formulas.

use serde::{Deserialize, Serialize};

use crate::errors::FormulaResult;
use crate::formula::{Evaluated, Formula, FormulaMetadata, NamedInput, Variable};
use crate::latex::Expr;
use crate::named;
use crate::source_document::SourceDocument;
use crate::units::{Unit, DAYS, DIMENSIONLESS, MM, MPA};
use crate::validations::{reject_negative, reject_zero_or_negative};

// =============================================================================
// FORMULA 3.1 - Strength development coefficient
// =============================================================================

/// Coefficient β_cc(t) for the development of compressive strength with age.
///
/// # Formula (art. 3.1.2(6))
/// β_cc(t) = exp(s · (1 − √(28 / t)))
///
/// # Arguments
/// * `s` - Cement class coefficient (0.20, 0.25 or 0.38)
/// * `t` - Age of the concrete in days, must be > 0
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Form3Dot1CoefficientDependentOfConcreteAge {
    pub s: DIMENSIONLESS,
    pub t: DAYS,
}

impl Form3Dot1CoefficientDependentOfConcreteAge {
    pub fn new(s: impl Into<f64>, t: impl Into<f64>) -> FormulaResult<Evaluated<Self>> {
        Self {
            s: s.into(),
            t: t.into(),
        }
        .build()
    }
}

impl Formula for Form3Dot1CoefficientDependentOfConcreteAge {
    const LABEL: &'static str = "3.1";
    const SOURCE_DOCUMENT: SourceDocument = SourceDocument::NenEn1992_1_1C2_2011;
    const RETURN_SYMBOL: &'static str = r"\beta_{cc}(t)";

    fn metadata() -> FormulaMetadata {
        FormulaMetadata {
            name: "Coefficient dependent on the age of concrete",
            article: "3.1.2(6)",
            unit: Unit::Dimensionless,
            variables: vec![
                Variable::new("s", "s", "Coefficient depending on the type of cement", Unit::Dimensionless),
                Variable::new("t", "t", "Age of the concrete", Unit::Days),
            ],
        }
    }

    fn validate(&self) -> FormulaResult<()> {
        reject_negative(&named![s: self.s, t: self.t])?;
        reject_zero_or_negative(&named![t: self.t])
    }

    fn evaluate(&self) -> f64 {
        (self.s * (1.0 - (28.0 / self.t).sqrt())).exp()
    }

    fn inputs(&self) -> Vec<NamedInput> {
        vec![NamedInput::new("s", self.s), NamedInput::new("t", self.t)]
    }

    fn equation(&self) -> Expr {
        Expr::cat([
            Expr::lit(r"\exp\left("),
            Expr::var("s", self.s),
            Expr::lit(r" \cdot \left(1 - "),
            Expr::sqrt(Expr::frac(Expr::lit("28"), Expr::var("t", self.t))),
            Expr::lit(r"\right)\right)"),
        ])
    }
}

// =============================================================================
// FORMULA 3.5 - Elastic modulus over time
// =============================================================================

/// Approximation of the modulus of elasticity at age t.
///
/// # Formula (art. 3.1.3(3))
/// E_cm(t) = (f_cm(t) / f_cm)^0.3 · E_cm
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Form3Dot5ApproximationVarianceElasticModulusOverTime {
    /// Mean compressive strength at age t [MPa]
    pub f_cm_t: MPA,
    /// Mean compressive strength at 28 days [MPa]
    pub f_cm: MPA,
    /// Secant modulus of elasticity at 28 days [MPa]
    pub e_cm: MPA,
}

impl Form3Dot5ApproximationVarianceElasticModulusOverTime {
    pub fn new(f_cm_t: impl Into<f64>, f_cm: impl Into<f64>, e_cm: impl Into<f64>) -> FormulaResult<Evaluated<Self>> {
        Self {
            f_cm_t: f_cm_t.into(),
            f_cm: f_cm.into(),
            e_cm: e_cm.into(),
        }
        .build()
    }
}

impl Formula for Form3Dot5ApproximationVarianceElasticModulusOverTime {
    const LABEL: &'static str = "3.5";
    const SOURCE_DOCUMENT: SourceDocument = SourceDocument::NenEn1992_1_1C2_2011;
    const RETURN_SYMBOL: &'static str = r"E_{cm}(t)";

    fn metadata() -> FormulaMetadata {
        FormulaMetadata {
            name: "Variation of the modulus of elasticity with time",
            article: "3.1.3(3)",
            unit: Unit::Mpa,
            variables: vec![
                Variable::new("f_cm_t", r"f_{cm}(t)", "Mean compressive strength at age t", Unit::Mpa),
                Variable::new("f_cm", r"f_{cm}", "Mean compressive strength at 28 days", Unit::Mpa),
                Variable::new("e_cm", r"E_{cm}", "Secant modulus of elasticity at 28 days", Unit::Mpa),
            ],
        }
    }

    fn validate(&self) -> FormulaResult<()> {
        reject_negative(&named![f_cm_t: self.f_cm_t, f_cm: self.f_cm, e_cm: self.e_cm])?;
        reject_zero_or_negative(&named![f_cm: self.f_cm])
    }

    fn evaluate(&self) -> f64 {
        (self.f_cm_t / self.f_cm).powf(0.3) * self.e_cm
    }

    fn inputs(&self) -> Vec<NamedInput> {
        vec![
            NamedInput::new("f_cm_t", self.f_cm_t),
            NamedInput::new("f_cm", self.f_cm),
            NamedInput::new("e_cm", self.e_cm),
        ]
    }

    fn equation(&self) -> Expr {
        Expr::spaced([
            Expr::lit(r"\left("),
            Expr::frac(Expr::var(r"f_{cm}(t)", self.f_cm_t), Expr::var(r"f_{cm}", self.f_cm)),
            Expr::lit(r"\right)^{0.3} \cdot"),
            Expr::var(r"E_{cm}", self.e_cm),
        ])
    }
}

// =============================================================================
// FORMULA 3.7 - Non-linear creep coefficient
// =============================================================================

/// Non-linear notional creep coefficient, used when the compressive stress
/// exceeds 0.45·f_ck(t0) at loading.
///
/// # Formula (art. 3.1.4(4))
/// φ_nl(∞, t0) = φ(∞, t0) · exp(1.5 · (k_σ − 0.45))
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Form3Dot7NonLinearCreepCoefficient {
    /// Linear creep coefficient φ(∞, t0) [-]
    pub phi_inf_t0: DIMENSIONLESS,
    /// Stress-strength ratio σ_c / f_ck(t0) [-]
    pub k_sigma: DIMENSIONLESS,
}

impl Form3Dot7NonLinearCreepCoefficient {
    pub fn new(phi_inf_t0: impl Into<f64>, k_sigma: impl Into<f64>) -> FormulaResult<Evaluated<Self>> {
        Self {
            phi_inf_t0: phi_inf_t0.into(),
            k_sigma: k_sigma.into(),
        }
        .build()
    }
}

impl Formula for Form3Dot7NonLinearCreepCoefficient {
    const LABEL: &'static str = "3.7";
    const SOURCE_DOCUMENT: SourceDocument = SourceDocument::NenEn1992_1_1C2_2011;
    const RETURN_SYMBOL: &'static str = r"\varphi_{nl}(\infty, t_0)";

    fn metadata() -> FormulaMetadata {
        FormulaMetadata {
            name: "Non-linear notional creep coefficient",
            article: "3.1.4(4)",
            unit: Unit::Dimensionless,
            variables: vec![
                Variable::new("phi_inf_t0", r"\varphi(\infty, t_0)", "Linear notional creep coefficient", Unit::Dimensionless),
                Variable::new("k_sigma", r"k_{\sigma}", "Stress-strength ratio", Unit::Dimensionless),
            ],
        }
    }

    fn validate(&self) -> FormulaResult<()> {
        reject_negative(&named![phi_inf_t0: self.phi_inf_t0, k_sigma: self.k_sigma])
    }

    fn evaluate(&self) -> f64 {
        self.phi_inf_t0 * (1.5 * (self.k_sigma - 0.45)).exp()
    }

    fn inputs(&self) -> Vec<NamedInput> {
        vec![
            NamedInput::new("phi_inf_t0", self.phi_inf_t0),
            NamedInput::new("k_sigma", self.k_sigma),
        ]
    }

    fn equation(&self) -> Expr {
        Expr::spaced([
            Expr::var(r"\varphi(\infty, t_0)", self.phi_inf_t0),
            Expr::lit(r"\cdot \exp(1.5 \cdot ("),
            Expr::var(r"k_{\sigma}", self.k_sigma),
            Expr::lit("- 0.45))"),
        ])
    }
}

// =============================================================================
// FORMULA 3.15 / 3.16 - Design strengths
// =============================================================================

/// Design compressive strength.
///
/// # Formula (art. 3.1.6(1))
/// f_cd = α_cc · f_ck / γ_C
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Form3Dot15DesignCompressiveStrength {
    pub alpha_cc: DIMENSIONLESS,
    pub f_ck: MPA,
    pub gamma_c: DIMENSIONLESS,
}

impl Form3Dot15DesignCompressiveStrength {
    pub fn new(alpha_cc: impl Into<f64>, f_ck: impl Into<f64>, gamma_c: impl Into<f64>) -> FormulaResult<Evaluated<Self>> {
        Self {
            alpha_cc: alpha_cc.into(),
            f_ck: f_ck.into(),
            gamma_c: gamma_c.into(),
        }
        .build()
    }
}

impl Formula for Form3Dot15DesignCompressiveStrength {
    const LABEL: &'static str = "3.15";
    const SOURCE_DOCUMENT: SourceDocument = SourceDocument::NenEn1992_1_1C2_2011;
    const RETURN_SYMBOL: &'static str = r"f_{cd}";

    fn metadata() -> FormulaMetadata {
        FormulaMetadata {
            name: "Design compressive strength",
            article: "3.1.6(1)",
            unit: Unit::Mpa,
            variables: vec![
                Variable::new("alpha_cc", r"\alpha_{cc}", "Coefficient for long term effects on compressive strength", Unit::Dimensionless),
                Variable::new("f_ck", r"f_{ck}", "Characteristic compressive cylinder strength at 28 days", Unit::Mpa),
                Variable::new("gamma_c", r"\gamma_{C}", "Partial safety factor for concrete", Unit::Dimensionless),
            ],
        }
    }

    fn validate(&self) -> FormulaResult<()> {
        reject_negative(&named![alpha_cc: self.alpha_cc, f_ck: self.f_ck, gamma_c: self.gamma_c])?;
        reject_zero_or_negative(&named![gamma_c: self.gamma_c])
    }

    fn evaluate(&self) -> f64 {
        self.alpha_cc * self.f_ck / self.gamma_c
    }

    fn inputs(&self) -> Vec<NamedInput> {
        vec![
            NamedInput::new("alpha_cc", self.alpha_cc),
            NamedInput::new("f_ck", self.f_ck),
            NamedInput::new("gamma_c", self.gamma_c),
        ]
    }

    fn equation(&self) -> Expr {
        Expr::frac(
            Expr::spaced([
                Expr::var(r"\alpha_{cc}", self.alpha_cc),
                Expr::lit(r"\cdot"),
                Expr::var(r"f_{ck}", self.f_ck),
            ]),
            Expr::var(r"\gamma_{C}", self.gamma_c),
        )
    }
}

/// Design tensile strength.
///
/// # Formula (art. 3.1.6(2))
/// f_ctd = α_ct · f_ctk,0.05 / γ_C
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Form3Dot16DesignTensileStrength {
    pub alpha_ct: DIMENSIONLESS,
    pub f_ctk_0_05: MPA,
    pub gamma_c: DIMENSIONLESS,
}

impl Form3Dot16DesignTensileStrength {
    pub fn new(alpha_ct: impl Into<f64>, f_ctk_0_05: impl Into<f64>, gamma_c: impl Into<f64>) -> FormulaResult<Evaluated<Self>> {
        Self {
            alpha_ct: alpha_ct.into(),
            f_ctk_0_05: f_ctk_0_05.into(),
            gamma_c: gamma_c.into(),
        }
        .build()
    }
}

impl Formula for Form3Dot16DesignTensileStrength {
    const LABEL: &'static str = "3.16";
    const SOURCE_DOCUMENT: SourceDocument = SourceDocument::NenEn1992_1_1C2_2011;
    const RETURN_SYMBOL: &'static str = r"f_{ctd}";

    fn metadata() -> FormulaMetadata {
        FormulaMetadata {
            name: "Design tensile strength",
            article: "3.1.6(2)",
            unit: Unit::Mpa,
            variables: vec![
                Variable::new("alpha_ct", r"\alpha_{ct}", "Coefficient for long term effects on tensile strength", Unit::Dimensionless),
                Variable::new("f_ctk_0_05", r"f_{ctk,0.05}", "Characteristic axial tensile strength (5% fractile)", Unit::Mpa),
                Variable::new("gamma_c", r"\gamma_{C}", "Partial safety factor for concrete", Unit::Dimensionless),
            ],
        }
    }

    fn validate(&self) -> FormulaResult<()> {
        reject_negative(&named![alpha_ct: self.alpha_ct, f_ctk_0_05: self.f_ctk_0_05, gamma_c: self.gamma_c])?;
        reject_zero_or_negative(&named![gamma_c: self.gamma_c])
    }

    fn evaluate(&self) -> f64 {
        self.alpha_ct * self.f_ctk_0_05 / self.gamma_c
    }

    fn inputs(&self) -> Vec<NamedInput> {
        vec![
            NamedInput::new("alpha_ct", self.alpha_ct),
            NamedInput::new("f_ctk_0_05", self.f_ctk_0_05),
            NamedInput::new("gamma_c", self.gamma_c),
        ]
    }

    fn equation(&self) -> Expr {
        Expr::frac(
            Expr::spaced([
                Expr::var(r"\alpha_{ct}", self.alpha_ct),
                Expr::lit(r"\cdot"),
                Expr::var(r"f_{ctk,0.05}", self.f_ctk_0_05),
            ]),
            Expr::var(r"\gamma_{C}", self.gamma_c),
        )
    }
}

// =============================================================================
// FORMULA 3.23 - Flexural tensile strength
// =============================================================================

/// Mean flexural tensile strength of reinforced concrete members.
///
/// # Formula (art. 3.1.8(1))
/// f_ctm,fl = max((1.6 − h/1000) · f_ctm; f_ctm)
///
/// The member depth `h` is in mm; for h >= 600 mm the result is f_ctm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Form3Dot23FlexuralTensileStrength {
    pub h: MM,
    pub f_ctm: MPA,
}

impl Form3Dot23FlexuralTensileStrength {
    pub fn new(h: impl Into<f64>, f_ctm: impl Into<f64>) -> FormulaResult<Evaluated<Self>> {
        Self {
            h: h.into(),
            f_ctm: f_ctm.into(),
        }
        .build()
    }
}

impl Formula for Form3Dot23FlexuralTensileStrength {
    const LABEL: &'static str = "3.23";
    const SOURCE_DOCUMENT: SourceDocument = SourceDocument::NenEn1992_1_1C2_2011;
    const RETURN_SYMBOL: &'static str = r"f_{ctm,fl}";

    fn metadata() -> FormulaMetadata {
        FormulaMetadata {
            name: "Mean flexural tensile strength",
            article: "3.1.8(1)",
            unit: Unit::Mpa,
            variables: vec![
                Variable::new("h", "h", "Total member depth", Unit::Mm),
                Variable::new("f_ctm", r"f_{ctm}", "Mean axial tensile strength", Unit::Mpa),
            ],
        }
    }

    fn validate(&self) -> FormulaResult<()> {
        reject_negative(&named![h: self.h, f_ctm: self.f_ctm])
    }

    fn evaluate(&self) -> f64 {
        ((1.6 - self.h / 1000.0) * self.f_ctm).max(self.f_ctm)
    }

    fn inputs(&self) -> Vec<NamedInput> {
        vec![NamedInput::new("h", self.h), NamedInput::new("f_ctm", self.f_ctm)]
    }

    fn equation(&self) -> Expr {
        Expr::cat([
            Expr::lit(r"\max\left(\left(1.6 - "),
            Expr::frac(Expr::var("h", self.h), Expr::lit("1000")),
            Expr::lit(r"\right) \cdot "),
            Expr::var(r"f_{ctm}", self.f_ctm),
            Expr::lit("; "),
            Expr::var(r"f_{ctm}", self.f_ctm),
            Expr::lit(r"\right)"),
        ])
    }
}

// =============================================================================
// SUB-FORMULA 3.28 - 3.30 - Prestress ratio μ
// =============================================================================

/// Ratio μ = σ_pi / f_pk used in the relaxation loss formulas 3.28 to 3.30.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubForm3Dot282930Mu {
    /// Absolute value of the initial prestress [MPa]
    pub sigma_pi: MPA,
    /// Characteristic tensile strength of prestressing steel [MPa]
    pub f_pk: MPA,
}

impl SubForm3Dot282930Mu {
    pub fn new(sigma_pi: impl Into<f64>, f_pk: impl Into<f64>) -> FormulaResult<Evaluated<Self>> {
        Self {
            sigma_pi: sigma_pi.into(),
            f_pk: f_pk.into(),
        }
        .build()
    }
}

impl Formula for SubForm3Dot282930Mu {
    const LABEL: &'static str = "3.28-3.30";
    const SOURCE_DOCUMENT: SourceDocument = SourceDocument::NenEn1992_1_1C2_2011;
    const RETURN_SYMBOL: &'static str = r"\mu";

    fn metadata() -> FormulaMetadata {
        FormulaMetadata {
            name: "Ratio of initial prestress to characteristic tensile strength",
            article: "3.3.2(7)",
            unit: Unit::Dimensionless,
            variables: vec![
                Variable::new("sigma_pi", r"\sigma_{pi}", "Absolute value of the initial prestress", Unit::Mpa),
                Variable::new("f_pk", r"f_{pk}", "Characteristic tensile strength of prestressing steel", Unit::Mpa),
            ],
        }
    }

    fn validate(&self) -> FormulaResult<()> {
        reject_negative(&named![sigma_pi: self.sigma_pi, f_pk: self.f_pk])?;
        reject_zero_or_negative(&named![f_pk: self.f_pk])
    }

    fn evaluate(&self) -> f64 {
        self.sigma_pi / self.f_pk
    }

    fn inputs(&self) -> Vec<NamedInput> {
        vec![
            NamedInput::new("sigma_pi", self.sigma_pi),
            NamedInput::new("f_pk", self.f_pk),
        ]
    }

    fn equation(&self) -> Expr {
        Expr::frac(Expr::var(r"\sigma_{pi}", self.sigma_pi), Expr::var(r"f_{pk}", self.f_pk))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FormulaError;

    fn approx_eq(a: f64, b: f64, rel: f64) -> bool {
        (a - b).abs() <= rel * b.abs().max(1e-12)
    }

    // Formula 3.1
    #[test]
    fn test_3_1_evaluation() {
        // t = 7 days: sqrt(28/7) = 2, exp(0.25 * (1 - 2)) = exp(-0.25)
        let beta = Form3Dot1CoefficientDependentOfConcreteAge::new(0.25, 7.0).unwrap();
        assert!(approx_eq(beta.value(), 0.778_800_8, 1e-6), "beta_cc = {}", beta);
    }

    #[test]
    fn test_3_1_is_one_at_28_days() {
        let beta = Form3Dot1CoefficientDependentOfConcreteAge::new(0.38, 28.0).unwrap();
        assert!(approx_eq(beta.value(), 1.0, 1e-12), "beta_cc = {}", beta);
    }

    #[test]
    fn test_3_1_rejects_zero_age() {
        let err = Form3Dot1CoefficientDependentOfConcreteAge::new(0.25, 0.0).unwrap_err();
        assert_eq!(err, FormulaError::less_or_equal_to_zero("t", 0.0));
    }

    #[test]
    fn test_3_1_rejects_negative_age() {
        let err = Form3Dot1CoefficientDependentOfConcreteAge::new(0.25, -7.0).unwrap_err();
        assert_eq!(err, FormulaError::negative_value("t", -7.0));
    }

    #[test]
    fn test_3_1_latex() {
        let latex = Form3Dot1CoefficientDependentOfConcreteAge::new(0.25, 7.0).unwrap().latex();
        assert_eq!(
            latex.complete(),
            r"\beta_{cc}(t) = \exp\left(s \cdot \left(1 - \sqrt{\frac{28}{t}}\right)\right) = \exp\left(0.250 \cdot \left(1 - \sqrt{\frac{28}{7.000}}\right)\right) = 0.779"
        );
    }

    // Formula 3.5
    #[test]
    fn test_3_5_evaluation() {
        let e_cm_t = Form3Dot5ApproximationVarianceElasticModulusOverTime::new(2.34, 3.4, 2.9).unwrap();
        assert!(approx_eq(e_cm_t.value(), 2.592502, 1e-4), "E_cm(t) = {}", e_cm_t);
    }

    #[test]
    fn test_3_5_rejects_negative_and_zero() {
        assert!(matches!(
            Form3Dot5ApproximationVarianceElasticModulusOverTime::new(-2.34, 3.4, 2.9),
            Err(FormulaError::NegativeValue { .. })
        ));
        assert!(matches!(
            Form3Dot5ApproximationVarianceElasticModulusOverTime::new(2.34, 0.0, 2.9),
            Err(FormulaError::LessOrEqualToZero { .. })
        ));
        assert_eq!(
            Form3Dot5ApproximationVarianceElasticModulusOverTime::new(2.34, -3.4, 2.9).unwrap_err(),
            FormulaError::negative_value("f_cm", -3.4)
        );
    }

    #[test]
    fn test_3_5_cannot_change_value_after_initialization() {
        let mut e_cm_t = Form3Dot5ApproximationVarianceElasticModulusOverTime::new(2.34, 3.4, 2.9).unwrap();
        let before = e_cm_t.value();

        let err = e_cm_t.set_attribute("e_cm", 2.0).unwrap_err();
        assert!(matches!(err, FormulaError::ImmutabilityViolation { .. }));
        assert_eq!(e_cm_t.value(), before);
        assert_eq!(e_cm_t.inputs().e_cm, 2.9);
    }

    #[test]
    fn test_3_5_latex() {
        let latex = Form3Dot5ApproximationVarianceElasticModulusOverTime::new(2.34, 3.4, 2.9).unwrap().latex();
        assert_eq!(
            latex.complete(),
            r"E_{cm}(t) = \left( \frac{f_{cm}(t)}{f_{cm}} \right)^{0.3} \cdot E_{cm} = \left( \frac{2.340}{3.400} \right)^{0.3} \cdot 2.900 = 2.593"
        );
        assert_eq!(latex.short(), r"E_{cm}(t) = 2.593");
    }

    // Formula 3.7
    #[test]
    fn test_3_7_evaluation() {
        let phi_nl = Form3Dot7NonLinearCreepCoefficient::new(0.25, 2.47).unwrap();
        assert!(approx_eq(phi_nl.value(), 5.174308, 1e-4), "phi_nl = {}", phi_nl);
    }

    #[test]
    fn test_3_7_rejects_negative_inputs() {
        assert_eq!(
            Form3Dot7NonLinearCreepCoefficient::new(-0.25, 2.47).unwrap_err(),
            FormulaError::negative_value("phi_inf_t0", -0.25)
        );
        assert_eq!(
            Form3Dot7NonLinearCreepCoefficient::new(0.25, -2.47).unwrap_err(),
            FormulaError::negative_value("k_sigma", -2.47)
        );
    }

    // Formula 3.15 / 3.16
    #[test]
    fn test_3_15_evaluation() {
        // C30/37, alpha_cc = 1.0, gamma_c = 1.5
        let f_cd = Form3Dot15DesignCompressiveStrength::new(1.0, 30.0, 1.5).unwrap();
        assert!(approx_eq(f_cd.value(), 20.0, 1e-12), "f_cd = {}", f_cd);
        assert_eq!(
            f_cd.latex().complete(),
            r"f_{cd} = \frac{\alpha_{cc} \cdot f_{ck}}{\gamma_{C}} = \frac{1.000 \cdot 30.000}{1.500} = 20.000"
        );
    }

    #[test]
    fn test_3_15_rejects_zero_gamma_c() {
        assert_eq!(
            Form3Dot15DesignCompressiveStrength::new(1.0, 30.0, 0.0).unwrap_err(),
            FormulaError::less_or_equal_to_zero("gamma_c", 0.0)
        );
        assert_eq!(
            Form3Dot15DesignCompressiveStrength::new(1.0, 30.0, -1.5).unwrap_err(),
            FormulaError::negative_value("gamma_c", -1.5)
        );
    }

    #[test]
    fn test_3_16_evaluation() {
        // C30/37: f_ctk,0.05 = 2.0 MPa
        let f_ctd = Form3Dot16DesignTensileStrength::new(1.0, 2.0, 1.5).unwrap();
        assert!(approx_eq(f_ctd.value(), 1.333_333, 1e-6), "f_ctd = {}", f_ctd);
        assert_eq!(f_ctd.latex().short(), r"f_{ctd} = 1.333");
    }

    #[test]
    fn test_3_16_rejects_invalid_inputs() {
        assert_eq!(
            Form3Dot16DesignTensileStrength::new(-1.0, 2.0, 1.5).unwrap_err(),
            FormulaError::negative_value("alpha_ct", -1.0)
        );
        assert_eq!(
            Form3Dot16DesignTensileStrength::new(1.0, -2.0, 1.5).unwrap_err(),
            FormulaError::negative_value("f_ctk_0_05", -2.0)
        );
        assert_eq!(
            Form3Dot16DesignTensileStrength::new(1.0, 2.0, -1.5).unwrap_err(),
            FormulaError::negative_value("gamma_c", -1.5)
        );
        assert_eq!(
            Form3Dot16DesignTensileStrength::new(1.0, 2.0, 0.0).unwrap_err(),
            FormulaError::less_or_equal_to_zero("gamma_c", 0.0)
        );
    }

    // Formula 3.23
    #[test]
    fn test_3_23_evaluation_shallow_member() {
        let f = Form3Dot23FlexuralTensileStrength::new(305.3, 23.8).unwrap();
        assert!(approx_eq(f.value(), 30.81386, 1e-5), "f_ctm,fl = {}", f);
    }

    #[test]
    fn test_3_23_evaluation_deep_member_falls_back_to_f_ctm() {
        let f = Form3Dot23FlexuralTensileStrength::new(1000.0, 23.8).unwrap();
        assert!(approx_eq(f.value(), 23.8, 1e-4), "f_ctm,fl = {}", f);
    }

    #[test]
    fn test_3_23_rejects_negative_inputs() {
        assert!(matches!(
            Form3Dot23FlexuralTensileStrength::new(-1000.0, 23.8),
            Err(FormulaError::NegativeValue { .. })
        ));
        assert!(matches!(
            Form3Dot23FlexuralTensileStrength::new(1000.0, -23.8),
            Err(FormulaError::NegativeValue { .. })
        ));
    }

    // Sub-formula 3.28 - 3.30
    #[test]
    fn test_mu_evaluation() {
        let mu = SubForm3Dot282930Mu::new(2.4, 8.5).unwrap();
        assert!(approx_eq(mu.value(), 0.282353, 1e-4), "mu = {}", mu);
        assert_eq!(mu.latex().complete(), r"\mu = \frac{\sigma_{pi}}{f_{pk}} = \frac{2.400}{8.500} = 0.282");
    }

    #[test]
    fn test_mu_rejects_negative_f_pk() {
        assert_eq!(
            SubForm3Dot282930Mu::new(2.4, -8.5).unwrap_err(),
            FormulaError::negative_value("f_pk", -8.5)
        );
    }

    #[test]
    fn test_mu_rejects_zero_f_pk() {
        assert_eq!(
            SubForm3Dot282930Mu::new(2.4, 0.0).unwrap_err(),
            FormulaError::less_or_equal_to_zero("f_pk", 0.0)
        );
    }
}
