//! # Normative Codes
//!
//! Formulas grouped by source document, then by chapter or annex.
//!
//! - [`nen_en_1992_1_1`] - Concrete structures
//! - [`nen_en_1993_1_9`] - Steel structures, fatigue
//! - [`nen_9997_1`] - Geotechnical design

pub mod nen_9997_1;
pub mod nen_en_1992_1_1;
pub mod nen_en_1993_1_9;
