//! Dicecalc Engine library.
//!
//! Wires the pure dice calculations of `dicecalc-domain` to their
//! collaborators.
//!
//! ## Structure
//!
//! - `use_cases/` - Rolling dice and calculating probabilities
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
