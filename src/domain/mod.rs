//! Domain types shared across the CLI, derivation core, and API client.
//!
//! This module defines:
//!
//! - raw form inputs (`MonthlySeries`, `FertilizerQuery`)
//! - derived statistics (`StabilityStats`)
//! - the wire-ready scoring payload (`CreditFeatureRecord`)

pub mod types;

pub use types::*;
