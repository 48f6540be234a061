//! Mikoko Guardian
//!
//! Mangrove conservation tools for coastal Kenya: species and site lookups,
//! carbon and restoration estimates, and a free-text fallback backed by a
//! generative model, packaged as an agent definition for a hosted runtime.

pub mod agent;
pub mod config;
pub mod knowledge;
pub mod tools;
pub mod utils;
