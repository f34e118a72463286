//! # NEN-EN 1993-1-9+C2:2012
//!
//! Eurocode 3: Design of steel structures - Part 1-9: Fatigue.

pub mod annex_a;

pub use annex_a::FormADot1DamageDuringDesignLife;
