//! Configuration management
//!
//! Simulator tuning with environment-variable overrides. The config is
//! constructed explicitly and passed to whoever needs it; there is no
//! global instance.

pub mod settings;

pub use settings::SimulatorConfig;
