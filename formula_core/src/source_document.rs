//! # Source Documents
//!
//! Static metadata for the design codes that formulas are taken from.
//! Every formula cites exactly one source document; the document together
//! with the clause label identifies the formula.

use serde::{Deserialize, Serialize};

/// A design code in a specific edition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SourceDocument {
    /// Eurocode 2: Design of concrete structures - General rules and rules for buildings
    #[serde(rename = "NEN-EN 1992-1-1+C2:2011")]
    NenEn1992_1_1C2_2011,
    /// Eurocode 3: Design of steel structures - Fatigue
    #[serde(rename = "NEN-EN 1993-1-9+C2:2012")]
    NenEn1993_1_9C2_2012,
    /// Eurocode 7: Geotechnical design - General rules (Dutch edition)
    #[serde(rename = "NEN 9997-1+C2:2017")]
    Nen9997_1C2_2017,
}

impl SourceDocument {
    /// All registered source documents, in catalog order
    pub const ALL: [SourceDocument; 3] = [
        SourceDocument::NenEn1992_1_1C2_2011,
        SourceDocument::NenEn1993_1_9C2_2012,
        SourceDocument::Nen9997_1C2_2017,
    ];

    /// Code name including amendments and year (e.g. "NEN-EN 1992-1-1+C2:2011")
    pub fn code(&self) -> &'static str {
        match self {
            SourceDocument::NenEn1992_1_1C2_2011 => "NEN-EN 1992-1-1+C2:2011",
            SourceDocument::NenEn1993_1_9C2_2012 => "NEN-EN 1993-1-9+C2:2012",
            SourceDocument::Nen9997_1C2_2017 => "NEN 9997-1+C2:2017",
        }
    }

    /// Full title of the document
    pub fn title(&self) -> &'static str {
        match self {
            SourceDocument::NenEn1992_1_1C2_2011 => {
                "Eurocode 2: Design of concrete structures - Part 1-1: General rules and rules for buildings"
            }
            SourceDocument::NenEn1993_1_9C2_2012 => "Eurocode 3: Design of steel structures - Part 1-9: Fatigue",
            SourceDocument::Nen9997_1C2_2017 => "Geotechnical design of structures - Part 1: General rules",
        }
    }

    /// Short identifier used on the command line (e.g. "en1992-1-1")
    pub fn key(&self) -> &'static str {
        match self {
            SourceDocument::NenEn1992_1_1C2_2011 => "en1992-1-1",
            SourceDocument::NenEn1993_1_9C2_2012 => "en1993-1-9",
            SourceDocument::Nen9997_1C2_2017 => "nen9997-1",
        }
    }

    /// Look up a document by its short key or full code name
    pub fn from_key(key: &str) -> Option<SourceDocument> {
        SourceDocument::ALL
            .into_iter()
            .find(|doc| doc.key().eq_ignore_ascii_case(key) || doc.code() == key)
    }

    /// Format a citation for a clause in this document
    pub fn citation(&self, clause: &str) -> String {
        format!("{} - Formula ({})", self.code(), clause)
    }
}

impl std::fmt::Display for SourceDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
