// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for halgen.
//!
//! This module contains pure scaffold logic with ZERO I/O. It turns validated
//! input into finished document text; putting that text on disk is the
//! application layer's job, reached through ports.
//!
//! ## Pipeline
//!
//! ```text
//! ScaffoldRequest ─▶ registry::descriptor ─▶ render::render_operations
//!                                                      │
//!                            compose::compose_pair ◀───┘
//!                                      │
//!                                 ArtifactPair
//! ```
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: composition is synchronous string assembly
//! - **No I/O**: artifacts are values; nothing here touches a disk or clock
//! - **Minimal dependencies**: std plus `thiserror` and `serde` derives
//! - **Immutable values**: every domain object is `Clone + PartialEq`
//!
// Public API - what the world sees
pub mod compose;
pub mod error;
pub mod registry;
pub mod render;
pub mod request;
pub mod signature;
pub mod value_objects;

// Re-exports for convenience
pub use compose::{Artifact, ArtifactPair, compose_pair};
pub use error::{DomainError, ErrorCategory};
pub use registry::{COMPONENT_REGISTRY, ComponentTypeDescriptor, InterfaceIdentity};
pub use render::RenderedOperation;
pub use request::ScaffoldRequest;
pub use signature::{OperationSignature, Parameter};
pub use value_objects::{Brief, ComponentTag, Dialect, Stamp, TypeName, TypeToken};

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Whole-pipeline tests (request in, artifact pair out)
    // ========================================================================

    fn compose(tag: &str, name: &str) -> ArtifactPair {
        let request =
            ScaffoldRequest::new(Dialect::Cpp, tag, name, "A component", Stamp::none()).unwrap();
        compose_pair(&request)
    }

    #[test]
    fn same_inputs_compose_byte_identical_pairs() {
        let first = compose("MEM", "Flash");
        let second = compose("MEM", "Flash");

        assert_eq!(first.header, second.header);
        assert_eq!(first.source, second.source);
    }

    #[test]
    fn tag_spelling_does_not_change_the_output() {
        let upper = compose("MEM", "Flash");
        for spelling in ["mem", "Mem", "  MEM  "] {
            let variant = compose(spelling, "Flash");
            assert_eq!(variant.header, upper.header);
            assert_eq!(variant.source, upper.source);
        }
    }

    #[test]
    fn every_known_tag_composes_a_matched_pair() {
        for tag in ["IO", "COM", "MEM", "CPX", "PROC", "GENERIC"] {
            let pair = compose(tag, "Probe");
            let stem = pair.header.file_name.trim_end_matches(".hpp").to_string();

            assert_eq!(pair.source.file_name, format!("{stem}.cpp"));
            assert!(pair.header.content.contains(&format!("class {stem}")));
            assert!(pair.source.content.contains(&format!("#include \"{stem}.hpp\"")));
        }
    }

    #[test]
    fn unknown_tag_scaffolds_a_standalone_class() {
        let pair = compose("QRS", "Gearbox");

        assert_eq!(pair.header.file_name, "Gearbox.hpp");
        assert!(pair.header.content.contains("class Gearbox\n"));
        assert!(!pair.header.content.contains("override"));
    }

    #[test]
    fn bad_input_is_stopped_at_the_request_boundary() {
        assert!(matches!(
            ScaffoldRequest::new(Dialect::Cpp, "MEM", "bad name", "x", Stamp::none()),
            Err(DomainError::InvalidName { .. })
        ));
        assert!(matches!(
            ScaffoldRequest::new(Dialect::Cpp, "MEM", "Flash", "", Stamp::none()),
            Err(DomainError::InvalidBrief { .. })
        ));
    }
}
