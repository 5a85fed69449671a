//! Tax calculation modules.
//!
//! The bracket evaluator is shared by the federal rule and every
//! jurisdiction rule.

pub mod brackets;
pub mod common;
pub mod federal;
pub mod jurisdiction;

pub use brackets::evaluate;
pub use federal::FederalCalculator;
pub use jurisdiction::JurisdictionWorksheet;
