//! # NEN-EN 1993-1-9+C2:2012 Annex A - Fatigue load parameters and verification formats

use serde::{Deserialize, Serialize};

use crate::errors::FormulaResult;
use crate::formula::{Evaluated, Formula, FormulaMetadata, InputValue, NamedInput, Variable};
use crate::latex::Expr;
use crate::source_document::SourceDocument;
use crate::units::{Unit, DIMENSIONLESS};
use crate::validations::{
    reject_empty, reject_mismatched_lengths, reject_negative_elements, reject_zero_or_negative_elements,
};

/// Fatigue damage accumulated during the design life (Palmgren-Miner).
///
/// # Formula (art. A.5(1))
/// D_d = Σ n_Ei / N_Ri
///
/// # Arguments
/// * `n_e` - Number of cycles per stress range band, each >= 0 [-]
/// * `n_r` - Endurance for each band, each > 0 [-]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormADot1DamageDuringDesignLife {
    pub n_e: Vec<DIMENSIONLESS>,
    pub n_r: Vec<DIMENSIONLESS>,
}

impl FormADot1DamageDuringDesignLife {
    pub fn new(n_e: impl Into<Vec<f64>>, n_r: impl Into<Vec<f64>>) -> FormulaResult<Evaluated<Self>> {
        Self {
            n_e: n_e.into(),
            n_r: n_r.into(),
        }
        .build()
    }
}

impl Formula for FormADot1DamageDuringDesignLife {
    const LABEL: &'static str = "A.1";
    const SOURCE_DOCUMENT: SourceDocument = SourceDocument::NenEn1993_1_9C2_2012;
    const RETURN_SYMBOL: &'static str = r"d_d";

    fn metadata() -> FormulaMetadata {
        FormulaMetadata {
            name: "Damage during design life",
            article: "A.5(1)",
            unit: Unit::Dimensionless,
            variables: vec![
                Variable::sequence("n_e", r"n_{Ei}", "Number of cycles associated with stress range band i", Unit::Dimensionless),
                Variable::sequence("n_r", r"N_{Ri}", "Endurance in cycles for stress range band i", Unit::Dimensionless),
            ],
        }
    }

    fn validate(&self) -> FormulaResult<()> {
        reject_mismatched_lengths(&[("n_e", self.n_e.as_slice()), ("n_r", self.n_r.as_slice())])?;
        reject_empty("n_e", &self.n_e)?;
        reject_negative_elements("n_e", &self.n_e)?;
        reject_zero_or_negative_elements("n_r", &self.n_r)
    }

    fn evaluate(&self) -> f64 {
        self.n_e.iter().zip(&self.n_r).map(|(n_e, n_r)| n_e / n_r).sum()
    }

    fn inputs(&self) -> Vec<NamedInput> {
        vec![
            NamedInput::new("n_e", InputValue::List(self.n_e.clone())),
            NamedInput::new("n_r", InputValue::List(self.n_r.clone())),
        ]
    }

    fn equation(&self) -> Expr {
        let terms = self
            .n_e
            .iter()
            .zip(&self.n_r)
            .map(|(&n_e, &n_r)| Expr::frac(Expr::var(r"n_{Ei}", n_e), Expr::var(r"n_ri", n_r)));
        Expr::sum(Expr::lit(r"\sum_{i}^{n} \frac{n_{Ei}}{n_ri}"), terms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FormulaError;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * b.abs().max(1.0)
    }

    #[test]
    fn test_evaluation() {
        let d_d = FormADot1DamageDuringDesignLife::new(vec![5.0, 4.0, 3.0], vec![10.0, 20.0, 30.0]).unwrap();
        let expected = 5.0 / 10.0 + 4.0 / 20.0 + 3.0 / 30.0;
        assert!(approx_eq(d_d.value(), expected), "D_d = {} (expected {})", d_d, expected);
    }

    #[test]
    fn test_rejects_negative_cycles() {
        let err = FormADot1DamageDuringDesignLife::new(vec![-5.0, 4.0, 3.0], vec![10.0, 20.0, 30.0]).unwrap_err();
        assert_eq!(err, FormulaError::negative_value("n_e", -5.0));
    }

    #[test]
    fn test_rejects_zero_or_negative_endurance() {
        for n_r in [vec![10.0, -20.0, 30.0], vec![10.0, 20.0, 0.0]] {
            let result = FormADot1DamageDuringDesignLife::new(vec![5.0, 4.0, 3.0], n_r);
            assert!(
                matches!(result, Err(FormulaError::LessOrEqualToZero { .. })),
                "expected LessOrEqualToZero, got {:?}",
                result
            );
        }
    }

    #[test]
    fn test_rejects_mismatched_lengths() {
        let err = FormADot1DamageDuringDesignLife::new(vec![5.0, 4.0], vec![10.0, 20.0, 30.0]).unwrap_err();
        assert_eq!(
            err,
            FormulaError::lists_not_same_length(vec!["n_e".into(), "n_r".into()], vec![2, 3])
        );
    }

    #[test]
    fn test_rejects_empty_lists() {
        let err = FormADot1DamageDuringDesignLife::new(Vec::<f64>::new(), Vec::<f64>::new()).unwrap_err();
        assert_eq!(err, FormulaError::empty_list("n_e"));
    }

    #[test]
    fn test_single_band() {
        let d_d = FormADot1DamageDuringDesignLife::new(vec![1.0], vec![4.0]).unwrap();
        assert!(approx_eq(d_d.value(), 0.25));
        assert_eq!(
            d_d.latex().complete(),
            r"d_d = \sum_{i}^{n} \frac{n_{Ei}}{n_ri} = \frac{1.000}{4.000} = 0.250"
        );
    }

    #[test]
    fn test_latex() {
        let latex = FormADot1DamageDuringDesignLife::new(vec![5.0, 4.0, 3.0], vec![10.0, 20.0, 30.0])
            .unwrap()
            .latex();
        assert_eq!(
            latex.complete(),
            r"d_d = \sum_{i}^{n} \frac{n_{Ei}}{n_ri} = \frac{5.000}{10.000} + \frac{4.000}{20.000} + \frac{3.000}{30.000} = 0.800"
        );
        assert_eq!(latex.short(), r"d_d = 0.800");
    }

    #[test]
    fn test_inputs_are_lists() {
        let d_d = FormADot1DamageDuringDesignLife::new(vec![5.0], vec![10.0]).unwrap();
        assert_eq!(d_d.attribute("n_e"), Some(InputValue::List(vec![5.0])));
        assert_eq!(d_d.inputs().n_r, vec![10.0]);
    }
}
