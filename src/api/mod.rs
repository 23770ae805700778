//! HTTP client for the farm backend.
//!
//! - credit-score prediction (`/predict`)
//! - fertilizer recommendation (`/fertilizer_recommendation`)
//! - question answering (`/ask`)

pub mod client;

pub use client::*;
