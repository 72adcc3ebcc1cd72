//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the one
//! high-level use case: "scaffold a component pair".

pub mod scaffold_service;

pub use scaffold_service::{ScaffoldOutcome, ScaffoldService};
