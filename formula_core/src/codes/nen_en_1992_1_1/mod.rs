//! # NEN-EN 1992-1-1+C2:2011
//!
//! Eurocode 2: Design of concrete structures - Part 1-1: General rules and
//! rules for buildings (Dutch edition including corrigendum C2).
//!
//! ## Modules
//!
//! - [`chapter_3_materials`] - Concrete and prestressing steel properties
//! - [`chapter_5_structural_analysis`] - Imperfections and effective lengths
//! - [`chapter_8_detailing_of_reinforcement`] - Bond, anchorage, large bars
//! - [`chapter_9_detailing_rules`] - Member detailing

pub mod chapter_3_materials;
pub mod chapter_5_structural_analysis;
pub mod chapter_8_detailing_of_reinforcement;
pub mod chapter_9_detailing_rules;

pub use chapter_3_materials::{
    Form3Dot15DesignCompressiveStrength,
    Form3Dot16DesignTensileStrength,
    Form3Dot1CoefficientDependentOfConcreteAge,
    Form3Dot23FlexuralTensileStrength,
    Form3Dot5ApproximationVarianceElasticModulusOverTime,
    Form3Dot7NonLinearCreepCoefficient,
    SubForm3Dot282930Mu,
};

pub use chapter_5_structural_analysis::{
    Form5Dot15EffectiveLengthBraced,
    SubForm5Dot1ReductionFactorLengthOrHeight,
    SubForm5Dot1ReductionFactorNumberOfMembers,
};

pub use chapter_8_detailing_of_reinforcement::{
    Form8Dot12AdditionalShearReinforcement,
    Form8Dot2UltimateBondStress,
    Form8Dot3RequiredAnchorageLength,
};

pub use chapter_9_detailing_rules::Form9Dot14SplittingForceColumnOnRock;
