//! UI-to-network bridge: command queue and worker runtime.

pub mod commands;
pub mod runtime;
