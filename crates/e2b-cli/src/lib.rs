//! CLI library components for the E2B(R2) transpiler.

pub mod logging;
pub mod output;
