//! Property tests: construction, evaluation and rendering hold for arbitrary
//! valid inputs, and guards reject arbitrary invalid ones.

use formula_core::codes::nen_9997_1::{Form2Dot1ADesignValueLoad, Form2Dot1BRepresentativeValue};
use formula_core::codes::nen_en_1992_1_1::{
    Form3Dot23FlexuralTensileStrength, Form5Dot15EffectiveLengthBraced, Form8Dot3RequiredAnchorageLength,
    Form9Dot14SplittingForceColumnOnRock, SubForm5Dot1ReductionFactorLengthOrHeight,
};
use formula_core::codes::nen_en_1993_1_9::FormADot1DamageDuringDesignLife;
use formula_core::{CatalogEntry, FormulaError, FormulaId, InputValue};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn positive() -> impl Strategy<Value = f64> {
    1e-3..1e6f64
}

fn non_negative() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), 0.0..1e6f64]
}

fn negative() -> impl Strategy<Value = f64> {
    -1e6..-1e-9f64
}

/// Equal-length cycle and endurance sequences
fn damage_bands() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    (1usize..12).prop_flat_map(|n| {
        (
            prop::collection::vec(non_negative(), n),
            prop::collection::vec(positive(), n),
        )
    })
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// Equal inputs give bit-identical results and identical renderings.
    #[test]
    fn evaluation_is_deterministic(phi in non_negative(), sigma_sd in non_negative(), f_bd in positive()) {
        let a = Form8Dot3RequiredAnchorageLength::new(phi, sigma_sd, f_bd).unwrap();
        let b = Form8Dot3RequiredAnchorageLength::new(phi, sigma_sd, f_bd).unwrap();

        prop_assert_eq!(a.value().to_bits(), b.value().to_bits());
        prop_assert_eq!(a.latex(), b.latex());
    }

    /// Rendering the same instance twice gives the same text.
    #[test]
    fn rendering_is_idempotent(c in non_negative(), h in positive(), n_ed in non_negative()) {
        let f_s = Form9Dot14SplittingForceColumnOnRock::new(c, h, n_ed).unwrap();
        prop_assert_eq!(f_s.latex().complete(), f_s.latex().complete());
        prop_assert_eq!(f_s.latex().short(), format!("F_s = {:.3}", f_s.value()));
    }

    /// A negative input is reported by name and no instance is created.
    #[test]
    fn negative_inputs_are_rejected(c in negative(), h in positive(), n_ed in non_negative()) {
        let err = Form9Dot14SplittingForceColumnOnRock::new(c, h, n_ed).unwrap_err();
        prop_assert_eq!(err, FormulaError::negative_value("c", c));
    }

    /// Every scalar input of every catalog formula rejects a negative value by
    /// name, whatever the other inputs are. Actions (2.1a `f_rep`, 2.1b `f_k`)
    /// may be negative; sequence inputs are guarded element-wise.
    #[test]
    fn every_scalar_input_rejects_negative_values(fill in positive(), bad in negative()) {
        let signed_actions = [(FormulaId::Form2Dot1A, "f_rep"), (FormulaId::Form2Dot1B, "f_k")];

        for &id in FormulaId::all() {
            let variables = id.metadata().variables;
            for target in variables.iter().filter(|var| !var.sequence) {
                let inputs = variables.iter().map(|var| {
                    let value = if var.name == target.name {
                        InputValue::Scalar(bad)
                    } else if var.sequence {
                        InputValue::List(vec![fill])
                    } else {
                        InputValue::Scalar(fill)
                    };
                    (var.name.to_string(), value)
                });
                let result = CatalogEntry::from_inputs(id, inputs).and_then(|entry| entry.evaluate());

                if signed_actions.contains(&(id, target.name)) {
                    prop_assert!(result.is_ok(), "{} rejected negative {}", id, target.name);
                } else {
                    prop_assert_eq!(
                        result.unwrap_err(),
                        FormulaError::negative_value(target.name, bad),
                        "formula {}", id
                    );
                }
            }
        }
    }

    /// Sequences of different lengths are rejected before anything else.
    #[test]
    fn mismatched_lengths_are_rejected(
        n_e in prop::collection::vec(-10.0..10.0f64, 0..8),
        n_r in prop::collection::vec(-10.0..10.0f64, 0..8),
    ) {
        prop_assume!(n_e.len() != n_r.len());
        let (len_e, len_r) = (n_e.len(), n_r.len());

        let err = FormADot1DamageDuringDesignLife::new(n_e, n_r).unwrap_err();
        prop_assert_eq!(
            err,
            FormulaError::lists_not_same_length(vec!["n_e".into(), "n_r".into()], vec![len_e, len_r])
        );
    }

    /// The damage sum renders one fraction per band.
    #[test]
    fn damage_sum_expands_every_band((n_e, n_r) in damage_bands()) {
        let expected: f64 = n_e.iter().zip(&n_r).map(|(e, r)| e / r).sum();
        let bands = n_e.len();

        let d_d = FormADot1DamageDuringDesignLife::new(n_e, n_r).unwrap();
        prop_assert_eq!(d_d.value().to_bits(), expected.to_bits());

        let latex = d_d.latex();
        prop_assert_eq!(latex.numeric_equation.matches(r"\frac{").count(), bands);
        prop_assert_eq!(latex.numeric_equation.matches(" + ").count(), bands - 1);
    }

    /// Feeding an evaluated formula into another equals feeding its raw value.
    #[test]
    fn composition_equals_raw_value(psi in non_negative(), f_k in -1e6..1e6f64, gamma_f in non_negative()) {
        let f_rep = Form2Dot1BRepresentativeValue::new(psi, f_k).unwrap();
        let composed = Form2Dot1ADesignValueLoad::new(gamma_f, &f_rep).unwrap();
        let raw = Form2Dot1ADesignValueLoad::new(gamma_f, f_rep.value()).unwrap();

        prop_assert_eq!(composed.value().to_bits(), raw.value().to_bits());
        prop_assert!(composed == raw);
    }

    /// Writes never change an evaluated formula.
    #[test]
    fn writes_are_always_rejected(psi in non_negative(), f_k in non_negative(), attempted in any::<f64>()) {
        let mut f_rep = Form2Dot1BRepresentativeValue::new(psi, f_k).unwrap();
        let before = f_rep.value();

        for name in ["psi", "f_k", "result", "unknown"] {
            let err = f_rep.set_attribute(name, attempted).unwrap_err();
            prop_assert_eq!(err.error_code(), "IMMUTABILITY_VIOLATION");
        }
        prop_assert_eq!(f_rep.value().to_bits(), before.to_bits());
    }

    /// α_h stays within [2/3, 1] for any positive length.
    #[test]
    fn alpha_h_is_clamped(l in positive()) {
        let alpha_h = SubForm5Dot1ReductionFactorLengthOrHeight::new(l).unwrap();
        prop_assert!(alpha_h >= 2.0 / 3.0 && alpha_h <= 1.0, "alpha_h = {}", alpha_h);
    }

    /// The flexural tensile strength never drops below the axial one.
    #[test]
    fn flexural_strength_at_least_axial(h in non_negative(), f_ctm in non_negative()) {
        let f_ctm_fl = Form3Dot23FlexuralTensileStrength::new(h, f_ctm).unwrap();
        prop_assert!(f_ctm_fl >= f_ctm);
    }

    /// Effective length of a braced member lies between 0.5·l and l.
    #[test]
    fn braced_effective_length_is_bounded(k_1 in non_negative(), k_2 in non_negative(), height in non_negative()) {
        let l_0 = Form5Dot15EffectiveLengthBraced::new(k_1, k_2, height).unwrap();
        prop_assert!(l_0 >= 0.5 * height * (1.0 - 1e-12), "l_0 = {}", l_0);
        prop_assert!(l_0 <= height * (1.0 + 1e-12), "l_0 = {}", l_0);
    }

    /// A tagged entry evaluates exactly like the typed constructor.
    #[test]
    fn catalog_matches_typed_constructor(phi in non_negative(), sigma_sd in non_negative(), f_bd in positive()) {
        let json = serde_json::json!({
            "formula": "en1992-1-1:8.3",
            "phi": phi,
            "sigma_sd": sigma_sd,
            "f_bd": f_bd,
        });

        let entry: CatalogEntry = serde_json::from_value(json).unwrap();
        let dynamic = entry.evaluate().unwrap();
        let typed = Form8Dot3RequiredAnchorageLength::new(phi, sigma_sd, f_bd).unwrap();

        prop_assert_eq!(dynamic.value().to_bits(), typed.value().to_bits());
        prop_assert_eq!(dynamic.latex(), typed.latex());
    }
}
