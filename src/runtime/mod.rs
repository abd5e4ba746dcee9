//! Application lifecycle and execution modes
//!
//! - `lifetime`: startup wiring and graceful shutdown
//! - `modes`: server / migrate entry points

pub mod lifetime;
pub mod modes;
