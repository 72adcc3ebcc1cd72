//! Halgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the halgen
//! component scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           halgen-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (ScaffoldService)             │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │         (Driven: Filesystem)            │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    halgen-adapters (Infrastructure)     │
//! │   (LocalFilesystem, MemoryFilesystem)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Domain Layer (Pure Logic)         │
//! │  (ComponentTag, Registry, Signatures,   │
//! │   Rendering, Composition)               │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use halgen_core::{
//!     application::ScaffoldService,
//!     domain::{Dialect, ScaffoldRequest, Stamp},
//! };
//! # let filesystem: Box<dyn halgen_core::application::ports::Filesystem> = unimplemented!();
//!
//! // 1. Collect and validate the raw inputs
//! let request =
//!     ScaffoldRequest::new(Dialect::Cpp, "MEM", "Flash", "Flash storage driver", Stamp::none())
//!         .unwrap();
//!
//! // 2. Use the application service (with an injected filesystem adapter)
//! let service = ScaffoldService::new(filesystem);
//! service.scaffold(&request, "./output".as_ref(), false).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{ScaffoldOutcome, ScaffoldService, ports::Filesystem};
    pub use crate::domain::{
        Artifact, ArtifactPair, Brief, ComponentTag, ComponentTypeDescriptor, Dialect,
        OperationSignature, Parameter, ScaffoldRequest, Stamp, TypeName, TypeToken, registry,
    };
    pub use crate::error::{HalgenError, HalgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
