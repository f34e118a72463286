//! # Unit Tags
//!
//! Documentation-only unit tags for formula inputs and results.
//!
//! ## Design Philosophy
//!
//! Formula inputs are plain `f64` values. The aliases below only tell the
//! reader which unit a parameter is expressed in; nothing converts or checks
//! units at runtime. The [`Unit`] enum carries the same information as data,
//! so metadata tables and generated documentation can print it.
//!
//! Eurocode formulas use SI units with these conventions:
//! - Length: millimetres (mm) for sections, metres (m) for members
//! - Force: kilonewtons (kN)
//! - Stress: megapascals (MPa = N/mm²)
//! - Time: days
//!
//! ## Example
//!
//! ```rust
//! use formula_core::units::{Unit, MM, MPA};
//!
//! let phi: MM = 20.0;
//! let sigma_sd: MPA = 400.0;
//! assert_eq!(Unit::Mm.symbol(), "mm");
//! # let _ = (phi, sigma_sd);
//! ```

use serde::{Deserialize, Serialize};

/// Length in millimetres
pub type MM = f64;

/// Length in metres
pub type M = f64;

/// Area in square millimetres
pub type MM2 = f64;

/// Stress in megapascals (N/mm²)
pub type MPA = f64;

/// Force in kilonewtons
pub type KN = f64;

/// Time in days
pub type DAYS = f64;

/// Ratio, factor or count without unit
pub type DIMENSIONLESS = f64;

/// Unit of an input or result, for metadata tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    Mm,
    M,
    Mm2,
    Mpa,
    Kn,
    Days,
    Dimensionless,
}

impl Unit {
    /// Plain-text unit symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Mm => "mm",
            Unit::M => "m",
            Unit::Mm2 => "mm²",
            Unit::Mpa => "MPa",
            Unit::Kn => "kN",
            Unit::Days => "days",
            Unit::Dimensionless => "-",
        }
    }

    /// Unit symbol in LaTeX math notation
    pub fn latex(&self) -> &'static str {
        match self {
            Unit::Mm => r"mm",
            Unit::M => r"m",
            Unit::Mm2 => r"mm^2",
            Unit::Mpa => r"MPa",
            Unit::Kn => r"kN",
            Unit::Days => r"days",
            Unit::Dimensionless => r"-",
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
