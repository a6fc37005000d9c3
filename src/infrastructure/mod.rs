//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Config: command line configuration
//! - Dice: rand-backed adapter for the dice port
//! - Loader: YAML record decoding
//! - Renderer: LaTeX template substitution

pub mod config;
pub mod dice;
pub mod loader;
pub mod renderer;
