//! # Validation Guards
//!
//! Pure checks run by every formula before it is evaluated. A guard returns
//! `Ok(())` or the first violation it finds, naming the offending input.
//! Guards hold no state and can be chained with `?` in any order.
//!
//! ## Example
//!
//! ```rust
//! use formula_core::named;
//! use formula_core::validations::{reject_negative, reject_zero_or_negative};
//!
//! let phi = 20.0;
//! let sigma_sd = 400.0;
//! let f_bd = 0.0;
//!
//! assert!(reject_negative(&named![phi, sigma_sd]).is_ok());
//! assert!(reject_zero_or_negative(&named![f_bd]).is_err());
//! ```

use crate::errors::{FormulaError, FormulaResult};

/// Build a list of `(name, value)` pairs for the guards.
///
/// Identifiers are named after themselves, `name: expr` pairs use the given
/// name. Values are converted with `f64::from`.
///
/// ```rust
/// use formula_core::named;
///
/// let c = 50.0;
/// let pairs = named![c, h: 100.0];
/// assert_eq!(pairs, [("c", 50.0), ("h", 100.0)]);
/// ```
#[macro_export]
macro_rules! named {
    (@pair $name:ident : $value:expr) => {
        (stringify!($name), f64::from($value))
    };
    (@pair $name:ident) => {
        (stringify!($name), f64::from($name))
    };
    ($($name:ident $(: $value:expr)?),* $(,)?) => {
        [$($crate::named!(@pair $name $(: $value)?)),*]
    };
}

/// Fail with `NegativeValue` for the first value below zero.
pub fn reject_negative(values: &[(&str, f64)]) -> FormulaResult<()> {
    match values.iter().find(|(_, value)| *value < 0.0) {
        Some((name, value)) => Err(FormulaError::negative_value(*name, *value)),
        None => Ok(()),
    }
}

/// Fail with `LessOrEqualToZero` for the first value that is zero or below.
pub fn reject_zero_or_negative(values: &[(&str, f64)]) -> FormulaResult<()> {
    match values.iter().find(|(_, value)| *value <= 0.0) {
        Some((name, value)) => Err(FormulaError::less_or_equal_to_zero(*name, *value)),
        None => Ok(()),
    }
}

/// Fail with `NegativeValue` if any element of the sequence is below zero.
///
/// The error carries the sequence name, not the element index, so callers
/// see the input they actually passed.
pub fn reject_negative_elements(name: &str, values: &[f64]) -> FormulaResult<()> {
    match values.iter().find(|value| **value < 0.0) {
        Some(value) => Err(FormulaError::negative_value(name, *value)),
        None => Ok(()),
    }
}

/// Fail with `LessOrEqualToZero` if any element of the sequence is zero or below.
pub fn reject_zero_or_negative_elements(name: &str, values: &[f64]) -> FormulaResult<()> {
    match values.iter().find(|value| **value <= 0.0) {
        Some(value) => Err(FormulaError::less_or_equal_to_zero(name, *value)),
        None => Ok(()),
    }
}

/// Fail with `ListsNotSameLength` unless every sequence has the same length.
pub fn reject_mismatched_lengths(sequences: &[(&str, &[f64])]) -> FormulaResult<()> {
    let Some((_, first)) = sequences.first() else {
        return Ok(());
    };

    if sequences.iter().all(|(_, seq)| seq.len() == first.len()) {
        return Ok(());
    }

    Err(FormulaError::lists_not_same_length(
        sequences.iter().map(|(name, _)| name.to_string()).collect(),
        sequences.iter().map(|(_, seq)| seq.len()).collect(),
    ))
}

/// Fail with `EmptyList` for a zero-length sequence.
pub fn reject_empty(name: &str, values: &[f64]) -> FormulaResult<()> {
    if values.is_empty() {
        return Err(FormulaError::empty_list(name));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reject_negative_names_first_offender() {
        let k_1 = 1.0;
        let k_2 = -2.0;
        let height = -8.0;
        let err = reject_negative(&named![k_1, k_2, height]).unwrap_err();
        assert_eq!(err, FormulaError::negative_value("k_2", -2.0));
    }

    #[test]
    fn test_reject_negative_accepts_zero() {
        assert!(reject_negative(&named![a: 0.0, b: 3.0]).is_ok());
    }

    #[test]
    fn test_reject_zero_or_negative() {
        assert!(reject_zero_or_negative(&named![h: 100.0]).is_ok());
        assert_eq!(
            reject_zero_or_negative(&named![h: 0.0]).unwrap_err(),
            FormulaError::less_or_equal_to_zero("h", 0.0)
        );
        assert!(matches!(
            reject_zero_or_negative(&named![h: -1.0]),
            Err(FormulaError::LessOrEqualToZero { .. })
        ));
    }

    #[test]
    fn test_nan_passes_sign_guards() {
        // IEEE comparisons with NaN are false, so NaN is neither negative nor <= 0
        assert!(reject_negative(&named![x: f64::NAN]).is_ok());
        assert!(reject_zero_or_negative(&named![x: f64::NAN]).is_ok());
    }

    #[test]
    fn test_element_guards() {
        assert!(reject_negative_elements("n_e", &[5.0, 0.0, 3.0]).is_ok());
        assert_eq!(
            reject_negative_elements("n_e", &[5.0, -4.0]).unwrap_err(),
            FormulaError::negative_value("n_e", -4.0)
        );
        assert_eq!(
            reject_zero_or_negative_elements("n_r", &[10.0, 0.0]).unwrap_err(),
            FormulaError::less_or_equal_to_zero("n_r", 0.0)
        );
    }

    #[test]
    fn test_reject_mismatched_lengths() {
        let n_e = [5.0, 4.0];
        let n_r = [10.0, 20.0, 30.0];
        assert!(reject_mismatched_lengths(&[("n_e", &n_e[..]), ("n_e", &n_e[..])]).is_ok());
        assert_eq!(
            reject_mismatched_lengths(&[("n_e", &n_e[..]), ("n_r", &n_r[..])]).unwrap_err(),
            FormulaError::lists_not_same_length(vec!["n_e".into(), "n_r".into()], vec![2, 3])
        );
        assert!(reject_mismatched_lengths(&[]).is_ok());
    }

    #[test]
    fn test_reject_empty() {
        assert!(reject_empty("n_e", &[1.0]).is_ok());
        assert_eq!(reject_empty("n_e", &[]).unwrap_err(), FormulaError::empty_list("n_e"));
    }

    #[test]
    fn test_guards_compose() {
        let check = |h: f64| -> FormulaResult<()> {
            reject_negative(&named![h])?;
            reject_zero_or_negative(&named![h])
        };
        assert!(matches!(check(-1.0), Err(FormulaError::NegativeValue { .. })));
        assert!(matches!(check(0.0), Err(FormulaError::LessOrEqualToZero { .. })));
        assert!(check(1.0).is_ok());
    }
}
