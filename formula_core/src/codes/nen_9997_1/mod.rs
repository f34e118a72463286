//! # NEN 9997-1+C2:2017
//!
//! Geotechnical design of structures - Part 1: General rules (Dutch
//! implementation of Eurocode 7).

pub mod chapter_2;

pub use chapter_2::{Form2Dot1ADesignValueLoad, Form2Dot1BRepresentativeValue};
