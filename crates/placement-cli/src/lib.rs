//! CLI library components for the Placement Operations Copilot.

pub mod logging;
