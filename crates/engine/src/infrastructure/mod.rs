//! Infrastructure - External dependency implementations (ports + adapters)

pub mod ports;
pub mod random;
pub mod settings;
