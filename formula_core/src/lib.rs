//! # formula_core - Normative Formula Engine
//!
//! `formula_core` implements formulas from structural design codes as typed,
//! self-documenting values. Each formula validates its inputs on construction,
//! evaluates once, and can render itself as LaTeX with both the symbolic
//! derivation and the substituted numbers, ready to paste into a calculation
//! report.
//!
//! ## Design Philosophy
//!
//! - **Fail Early**: Invalid inputs are rejected at construction; no half-built formula exists
//! - **Immutable**: An evaluated formula never changes after construction
//! - **Numeric**: Evaluated formulas compare and combine like plain `f64`
//! - **JSON-First**: Drafts, errors and reports implement Serialize/Deserialize
//!
//! ## Quick Start
//!
//! ```rust
//! use formula_core::codes::nen_en_1992_1_1::{
//!     Form3Dot16DesignTensileStrength, Form8Dot2UltimateBondStress, Form8Dot3RequiredAnchorageLength,
//! };
//!
//! let f_ctd = Form3Dot16DesignTensileStrength::new(1.0, 2.0, 1.5)?;
//! let f_bd = Form8Dot2UltimateBondStress::new(1.0, 1.0, &f_ctd)?;
//! let l_b_rqd = Form8Dot3RequiredAnchorageLength::new(12.0, 435.0, &f_bd)?;
//!
//! println!("{}", l_b_rqd.latex().complete());
//! # Ok::<(), formula_core::FormulaError>(())
//! ```
//!
//! ## Modules
//!
//! - [`formula`] - The `Formula` trait and the immutable `Evaluated` wrapper
//! - [`latex`] - Equation expression trees and LaTeX output
//! - [`codes`] - Formulas grouped by source document
//! - [`catalog`] - Lookup and evaluation by id, JSON input, markdown reference
//! - [`validations`] - Shared input guards
//! - [`source_document`] - Design code metadata
//! - [`units`] - Unit aliases and unit labels
//! - [`errors`] - Structured error types

pub mod validations;

pub mod catalog;
pub mod codes;
pub mod errors;
pub mod formula;
pub mod latex;
pub mod source_document;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use catalog::{generate_catalog_markdown, CatalogEntry, EvaluatedFormula, FormulaId, FormulaReport};
pub use errors::{FormulaError, FormulaResult};
pub use formula::{Evaluated, Formula, FormulaMetadata, InputValue, NamedInput, Variable};
pub use latex::{Expr, LatexFormula};
pub use source_document::SourceDocument;
