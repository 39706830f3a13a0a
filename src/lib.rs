//! rosterd server library.
//!
//! The binary in `main.rs` stays a thin orchestrator; configuration,
//! logging, middleware, and lifecycle wiring live here.

pub mod config;
pub mod lifecycle;
pub mod logging;
pub mod middleware;
