//! # NEN-EN 1992-1-1+C2:2011 Chapter 9 - Detailing of members and particular rules

use serde::{Deserialize, Serialize};

use crate::errors::FormulaResult;
use crate::formula::{Evaluated, Formula, FormulaMetadata, NamedInput, Variable};
use crate::latex::Expr;
use crate::named;
use crate::source_document::SourceDocument;
use crate::units::{Unit, KN, MM};
use crate::validations::{reject_negative, reject_zero_or_negative};

/// Splitting force in a pad footing on rock.
///
/// ```text
///          N_Ed
///           ↓
///        ┌─────┐
///   ─────┘  c  └─────   h = footing width
///   ←──────── h ──────→
/// ```
///
/// # Formula (art. 9.8.4(2))
/// F_s = 0.25 · (1 − c/h) · N_Ed
///
/// # Arguments
/// * `c` - Width of the column [mm]
/// * `h` - Width of the footing [mm], must be > 0
/// * `n_ed` - Design axial force in the column [kN]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Form9Dot14SplittingForceColumnOnRock {
    pub c: MM,
    pub h: MM,
    pub n_ed: KN,
}

impl Form9Dot14SplittingForceColumnOnRock {
    pub fn new(c: impl Into<f64>, h: impl Into<f64>, n_ed: impl Into<f64>) -> FormulaResult<Evaluated<Self>> {
        Self {
            c: c.into(),
            h: h.into(),
            n_ed: n_ed.into(),
        }
        .build()
    }
}

impl Formula for Form9Dot14SplittingForceColumnOnRock {
    const LABEL: &'static str = "9.14";
    const SOURCE_DOCUMENT: SourceDocument = SourceDocument::NenEn1992_1_1C2_2011;
    const RETURN_SYMBOL: &'static str = r"F_s";

    fn metadata() -> FormulaMetadata {
        FormulaMetadata {
            name: "Splitting force for a column on rock",
            article: "9.8.4(2)",
            unit: Unit::Kn,
            variables: vec![
                Variable::new("c", "c", "Width of the column", Unit::Mm),
                Variable::new("h", "h", "Width of the footing", Unit::Mm),
                Variable::new("n_ed", r"N_{Ed}", "Design axial force in the column", Unit::Kn),
            ],
        }
    }

    // negative check first so a negative h reports NegativeValue
    fn validate(&self) -> FormulaResult<()> {
        reject_negative(&named![c: self.c, h: self.h, n_ed: self.n_ed])?;
        reject_zero_or_negative(&named![h: self.h])
    }

    fn evaluate(&self) -> f64 {
        0.25 * (1.0 - self.c / self.h) * self.n_ed
    }

    fn inputs(&self) -> Vec<NamedInput> {
        vec![
            NamedInput::new("c", self.c),
            NamedInput::new("h", self.h),
            NamedInput::new("n_ed", self.n_ed),
        ]
    }

    fn equation(&self) -> Expr {
        Expr::spaced([
            Expr::lit(r"0.25 \cdot ( 1 -"),
            Expr::var("c", self.c),
            Expr::lit("/"),
            Expr::var("h", self.h),
            Expr::lit(r") \cdot"),
            Expr::var(r"N_{Ed}", self.n_ed),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FormulaError;

    #[test]
    fn test_evaluation() {
        let f_s = Form9Dot14SplittingForceColumnOnRock::new(50.0, 100.0, 200.0).unwrap();
        assert!((f_s.value() - 25.0).abs() < 1e-9, "F_s = {} (expected 25)", f_s);
    }

    #[test]
    fn test_rejects_negative_inputs() {
        assert!(matches!(
            Form9Dot14SplittingForceColumnOnRock::new(-50.0, 100.0, 200.0),
            Err(FormulaError::NegativeValue { .. })
        ));
        assert!(matches!(
            Form9Dot14SplittingForceColumnOnRock::new(50.0, -100.0, 200.0),
            Err(FormulaError::NegativeValue { .. })
        ));
        assert!(matches!(
            Form9Dot14SplittingForceColumnOnRock::new(50.0, 100.0, -200.0),
            Err(FormulaError::NegativeValue { .. })
        ));
    }

    #[test]
    fn test_rejects_zero_footing_width() {
        assert_eq!(
            Form9Dot14SplittingForceColumnOnRock::new(50.0, 0.0, 200.0).unwrap_err(),
            FormulaError::less_or_equal_to_zero("h", 0.0)
        );
    }

    #[test]
    fn test_latex_complete() {
        let latex = Form9Dot14SplittingForceColumnOnRock::new(50.0, 100.0, 200.0).unwrap().latex();
        assert_eq!(
            latex.complete(),
            r"F_s = 0.25 \cdot ( 1 - c / h ) \cdot N_{Ed} = 0.25 \cdot ( 1 - 50.000 / 100.000 ) \cdot 200.000 = 25.000"
        );
    }

    #[test]
    fn test_latex_short() {
        let latex = Form9Dot14SplittingForceColumnOnRock::new(50.0, 100.0, 200.0).unwrap().latex();
        assert_eq!(latex.short(), r"F_s = 25.000");
    }
}
