//! # Formula Catalog
//!
//! Runtime access to every formula in the crate, for callers that only know
//! a formula by name (the CLI, JSON requests, documentation generation).
//!
//! Each formula has a catalog id of the form `<document key>:<clause key>`,
//! e.g. `en1992-1-1:8.3`. Clause keys equal the clause label except where a
//! document has several sub-formulas under one label (`5.1-alpha_h`).
//!
//! ## Example
//!
//! ```rust
//! use formula_core::catalog::CatalogEntry;
//!
//! let entry = CatalogEntry::from_json(
//!     r#"{"formula": "en1992-1-1:8.3", "phi": 20, "sigma_sd": 400, "f_bd": 3}"#,
//! )?;
//! let evaluated = entry.evaluate()?;
//!
//! assert_eq!(evaluated.latex().short(), r"l_{b,rqd} = 666.667");
//! # Ok::<(), formula_core::FormulaError>(())
//! ```

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::codes::nen_9997_1::chapter_2::*;
use crate::codes::nen_en_1992_1_1::chapter_3_materials::*;
use crate::codes::nen_en_1992_1_1::chapter_5_structural_analysis::*;
use crate::codes::nen_en_1992_1_1::chapter_8_detailing_of_reinforcement::*;
use crate::codes::nen_en_1992_1_1::chapter_9_detailing_rules::*;
use crate::codes::nen_en_1993_1_9::annex_a::*;
use crate::errors::{FormulaError, FormulaResult};
use crate::formula::{Evaluated, Formula, FormulaMetadata, InputValue, NamedInput};
use crate::latex::LatexFormula;
use crate::source_document::SourceDocument;
use crate::units::Unit;

// ============================================================================
// Catalog definition
// ============================================================================

macro_rules! catalog {
    ($( $variant:ident => $formula:ty, $id:literal; )*) => {
        /// Identifier of a formula in the catalog.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum FormulaId {
            $( #[serde(rename = $id)] $variant, )*
        }

        impl FormulaId {
            /// Every formula, in catalog order
            pub const ALL: &'static [FormulaId] = &[$( FormulaId::$variant, )*];

            /// Catalog id (e.g. "en1992-1-1:8.3")
            pub fn id(&self) -> &'static str {
                match self {
                    $( FormulaId::$variant => $id, )*
                }
            }

            pub fn document(&self) -> SourceDocument {
                match self {
                    $( FormulaId::$variant => <$formula as Formula>::SOURCE_DOCUMENT, )*
                }
            }

            /// Clause label as printed in the document (not unique per document)
            pub fn label(&self) -> &'static str {
                match self {
                    $( FormulaId::$variant => <$formula as Formula>::LABEL, )*
                }
            }

            pub fn return_symbol(&self) -> &'static str {
                match self {
                    $( FormulaId::$variant => <$formula as Formula>::RETURN_SYMBOL, )*
                }
            }

            pub fn metadata(&self) -> FormulaMetadata {
                match self {
                    $( FormulaId::$variant => <$formula as Formula>::metadata(), )*
                }
            }
        }

        /// A formula draft tagged with its catalog id.
        ///
        /// Deserializes from `{"formula": "<id>", <input>: <value>, ...}`.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(tag = "formula")]
        pub enum CatalogEntry {
            $( #[serde(rename = $id)] $variant($formula), )*
        }

        impl CatalogEntry {
            pub fn id(&self) -> FormulaId {
                match self {
                    $( CatalogEntry::$variant(_) => FormulaId::$variant, )*
                }
            }

            /// Validate and evaluate the draft
            pub fn evaluate(self) -> FormulaResult<EvaluatedFormula> {
                match self {
                    $( CatalogEntry::$variant(draft) => draft.build().map(EvaluatedFormula::$variant), )*
                }
            }
        }

        /// An evaluated formula of any catalog type.
        #[derive(Debug, Clone)]
        pub enum EvaluatedFormula {
            $( $variant(Evaluated<$formula>), )*
        }

        impl EvaluatedFormula {
            pub fn id(&self) -> FormulaId {
                match self {
                    $( EvaluatedFormula::$variant(_) => FormulaId::$variant, )*
                }
            }

            pub fn value(&self) -> f64 {
                match self {
                    $( EvaluatedFormula::$variant(evaluated) => evaluated.value(), )*
                }
            }

            pub fn latex(&self) -> LatexFormula {
                match self {
                    $( EvaluatedFormula::$variant(evaluated) => evaluated.latex(), )*
                }
            }

            pub fn named_inputs(&self) -> Vec<NamedInput> {
                match self {
                    $( EvaluatedFormula::$variant(evaluated) => evaluated.named_inputs(), )*
                }
            }

            fn lookup(&self, name: &str) -> Option<InputValue> {
                match self {
                    $( EvaluatedFormula::$variant(evaluated) => evaluated.attribute(name), )*
                }
            }

            fn reject_write(&mut self, name: &str, value: InputValue) -> FormulaResult<()> {
                match self {
                    $( EvaluatedFormula::$variant(evaluated) => evaluated.set_attribute(name, value), )*
                }
            }
        }
    };
}

catalog! {
    Form3Dot1 => Form3Dot1CoefficientDependentOfConcreteAge, "en1992-1-1:3.1";
    Form3Dot5 => Form3Dot5ApproximationVarianceElasticModulusOverTime, "en1992-1-1:3.5";
    Form3Dot7 => Form3Dot7NonLinearCreepCoefficient, "en1992-1-1:3.7";
    Form3Dot15 => Form3Dot15DesignCompressiveStrength, "en1992-1-1:3.15";
    Form3Dot16 => Form3Dot16DesignTensileStrength, "en1992-1-1:3.16";
    Form3Dot23 => Form3Dot23FlexuralTensileStrength, "en1992-1-1:3.23";
    SubForm3Dot282930Mu => SubForm3Dot282930Mu, "en1992-1-1:3.28-3.30";
    SubForm5Dot1AlphaH => SubForm5Dot1ReductionFactorLengthOrHeight, "en1992-1-1:5.1-alpha_h";
    SubForm5Dot1AlphaM => SubForm5Dot1ReductionFactorNumberOfMembers, "en1992-1-1:5.1-alpha_m";
    Form5Dot15 => Form5Dot15EffectiveLengthBraced, "en1992-1-1:5.15";
    Form8Dot2 => Form8Dot2UltimateBondStress, "en1992-1-1:8.2";
    Form8Dot3 => Form8Dot3RequiredAnchorageLength, "en1992-1-1:8.3";
    Form8Dot12 => Form8Dot12AdditionalShearReinforcement, "en1992-1-1:8.12";
    Form9Dot14 => Form9Dot14SplittingForceColumnOnRock, "en1992-1-1:9.14";
    FormADot1 => FormADot1DamageDuringDesignLife, "en1993-1-9:A.1";
    Form2Dot1A => Form2Dot1ADesignValueLoad, "nen9997-1:2.1a";
    Form2Dot1B => Form2Dot1BRepresentativeValue, "nen9997-1:2.1b";
}

/// (document, lower-cased clause key) -> id
static INDEX: Lazy<HashMap<(SourceDocument, String), FormulaId>> = Lazy::new(|| {
    FormulaId::ALL
        .iter()
        .map(|id| ((id.document(), id.key().to_ascii_lowercase()), *id))
        .collect()
});

// ============================================================================
// Lookup
// ============================================================================

impl FormulaId {
    pub fn all() -> &'static [FormulaId] {
        FormulaId::ALL
    }

    /// Clause key within the document (the part of the id after ':')
    pub fn key(&self) -> &'static str {
        let id = self.id();
        id.split_once(':').map_or(id, |(_, key)| key)
    }

    /// Formulas taken from one document, in catalog order
    pub fn in_document(document: SourceDocument) -> Vec<FormulaId> {
        FormulaId::ALL.iter().copied().filter(|id| id.document() == document).collect()
    }

    /// Find a formula by document and clause key (case-insensitive).
    pub fn find(document: SourceDocument, key: &str) -> FormulaResult<FormulaId> {
        INDEX
            .get(&(document, key.to_ascii_lowercase()))
            .copied()
            .ok_or_else(|| FormulaError::unknown_formula(document.code(), key))
    }
}

impl fmt::Display for FormulaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for FormulaId {
    type Err = FormulaError;

    /// Parses `<document>:<clause>`, where document is a key ("en1992-1-1")
    /// or a full code name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (document, key) = s
            .rsplit_once(':')
            .ok_or_else(|| FormulaError::unknown_formula("", s))?;
        let document = SourceDocument::from_key(document.trim())
            .ok_or_else(|| FormulaError::unknown_formula(document, key))?;
        FormulaId::find(document, key.trim())
    }
}

// ============================================================================
// Dynamic construction
// ============================================================================

impl CatalogEntry {
    /// Build a draft from name/value pairs.
    ///
    /// Every variable of the formula must be given exactly once; unknown names
    /// are rejected with `InvalidInput`. A scalar given for a sequence input
    /// becomes a one-element sequence.
    pub fn from_inputs<I>(id: FormulaId, inputs: I) -> FormulaResult<CatalogEntry>
    where
        I: IntoIterator<Item = (String, InputValue)>,
    {
        let metadata = id.metadata();
        let mut object = serde_json::Map::new();
        object.insert("formula".to_string(), serde_json::Value::from(id.id()));

        for (name, value) in inputs {
            let Some(variable) = metadata.variables.iter().find(|var| var.name == name) else {
                return Err(FormulaError::invalid_input(
                    &name,
                    value.to_string(),
                    format!("not an input of formula {}", id),
                ));
            };
            let value = match value {
                InputValue::Scalar(v) if variable.sequence => InputValue::List(vec![v]),
                other => other,
            };
            let json = serde_json::to_value(&value)
                .map_err(|e| FormulaError::invalid_input(&name, value.to_string(), e.to_string()))?;
            if object.insert(name.clone(), json).is_some() {
                return Err(FormulaError::invalid_input(name, value.to_string(), "given more than once"));
            }
        }

        if let Some(missing) = metadata.variables.iter().find(|var| !object.contains_key(var.name)) {
            return Err(FormulaError::invalid_input(missing.name, "", "missing"));
        }

        serde_json::from_value(serde_json::Value::Object(object))
            .map_err(|e| FormulaError::invalid_input(id.id(), "", e.to_string()))
    }

    /// Parse a JSON object tagged with `"formula"`.
    ///
    /// Fields other than `"formula"` and the formula's own inputs are rejected,
    /// so a misspelled input name is reported instead of silently dropped.
    pub fn from_json(json: &str) -> FormulaResult<CatalogEntry> {
        let invalid = |e: serde_json::Error| FormulaError::invalid_input("formula", json, e.to_string());
        let value: serde_json::Value = serde_json::from_str(json).map_err(invalid)?;

        if let Some(object) = value.as_object() {
            let id = object
                .get("formula")
                .and_then(serde_json::Value::as_str)
                .and_then(|key| key.parse::<FormulaId>().ok());
            if let Some(id) = id {
                let metadata = id.metadata();
                let unknown = object
                    .keys()
                    .find(|key| *key != "formula" && !metadata.variables.iter().any(|var| var.name == key.as_str()));
                if let Some(key) = unknown {
                    return Err(FormulaError::invalid_input(
                        key,
                        object[key.as_str()].to_string(),
                        format!("not an input of formula {}", id),
                    ));
                }
            }
        }

        serde_json::from_value(value).map_err(invalid)
    }
}

// ============================================================================
// Evaluated formulas
// ============================================================================

/// Serializable summary of an evaluated formula.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormulaReport {
    pub id: FormulaId,
    pub document: SourceDocument,
    pub label: String,
    pub name: String,
    pub citation: String,
    pub unit: Unit,
    pub inputs: Vec<NamedInput>,
    pub result: f64,
    pub latex: LatexFormula,
    pub complete: String,
    pub short: String,
}

impl EvaluatedFormula {
    pub fn document(&self) -> SourceDocument {
        self.id().document()
    }

    pub fn label(&self) -> &'static str {
        self.id().label()
    }

    /// Input by name, or the result as "result"
    pub fn attribute(&self, name: &str) -> FormulaResult<InputValue> {
        self.lookup(name)
            .ok_or_else(|| FormulaError::unknown_attribute(self.label(), name))
    }

    /// Always fails with `ImmutabilityViolation`; the value is left unchanged.
    pub fn set_attribute(&mut self, name: &str, value: impl Into<InputValue>) -> FormulaResult<()> {
        self.reject_write(name, value.into())
    }

    pub fn report(&self) -> FormulaReport {
        let id = self.id();
        let metadata = id.metadata();
        let latex = self.latex();
        FormulaReport {
            id,
            document: id.document(),
            label: id.label().to_string(),
            name: metadata.name.to_string(),
            citation: id.document().citation(id.label()),
            unit: metadata.unit,
            inputs: self.named_inputs(),
            result: self.value(),
            complete: latex.complete(),
            short: latex.short(),
            latex,
        }
    }
}

impl fmt::Display for EvaluatedFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value(), f)
    }
}

impl From<&EvaluatedFormula> for f64 {
    fn from(evaluated: &EvaluatedFormula) -> Self {
        evaluated.value()
    }
}

impl Serialize for EvaluatedFormula {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.report().serialize(serializer)
    }
}

// ============================================================================
// Markdown generation
// ============================================================================

/// Generate the formula reference document.
pub fn generate_catalog_markdown() -> String {
    let mut output = String::with_capacity(16_000);

    output.push_str(
        r#"# Formula Catalog

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-catalog`

Every formula available in formula_core, grouped by source document.
Each entry lists its catalog id, the article it is taken from, the result
symbol and the input variables in constructor order.

---

"#,
    );

    let mut documents = 0;
    for document in SourceDocument::ALL {
        let ids = FormulaId::in_document(document);
        if ids.is_empty() {
            continue;
        }
        documents += 1;

        output.push_str(&format!("## {}\n\n", document.code()));
        output.push_str(&format!("*{}*\n\n", document.title()));

        for id in ids {
            let meta = id.metadata();

            output.push_str(&format!("### Formula ({}) - {}\n\n", id.label(), meta.name));
            output.push_str(&format!("**Id:** `{}`\n\n", id));
            output.push_str(&format!("**Article:** {}\n\n", meta.article));
            output.push_str(&format!("**Result:** `{}` [{}]\n\n", id.return_symbol(), meta.unit));

            if !meta.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Name | Symbol | Description | Units |\n");
                output.push_str("|------|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!(
                        "| `{}` | `{}` | {} | {} |\n",
                        var.name, var.symbol, var.description, var.unit
                    ));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}\n\n", document.citation(id.label())));
            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Formulas:** {}\n- **Source Documents:** {}\n",
        FormulaId::ALL.len(),
        documents
    ));

    output
}

// ============================================================================
// Tests
// ============================================================================
