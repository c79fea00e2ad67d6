//! Pricing calculation modules for the tailoring order workflow.
//!
//! The engine is a pure calculator over an injected price table; every
//! computation is total and deterministic. Fallback handling for malformed
//! input lives in [`common`] so the same normalization rules apply at every
//! entry point.

pub mod common;
pub mod engine;
pub mod validation;

pub use engine::{PricingConfig, PricingConfigError, PricingEngine};
pub use validation::PricingValidation;
