//! `agro-dash` library crate.
//!
//! The binary (`agro`) is a thin wrapper around this library so that:
//!
//! - the feature-derivation core is testable without spawning processes
//! - modules are reusable (e.g., future GUI/daemon, notebooks, etc.)
//! - code stays easy to navigate as the project grows

pub mod api;
pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod features;
pub mod report;
