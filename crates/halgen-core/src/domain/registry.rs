//! Component-type registry.
//!
//! # Design Rationale
//!
//! The previous generation scripts selected operations with a chain of
//! `if/elif` branches over the tag string, each branch string-concatenating
//! its own signature text. This module replaces that with a single static
//! registry: each component type is described exactly once by its
//! [`ComponentTypeDescriptor`]. Lookup is an O(n) table scan over six
//! entries, and adding a component type is a data addition, not new
//! conditional code.
//!
//! # Adding a New Component Type
//!
//! 1. Add a variant to `ComponentTag` in `value_objects.rs`
//! 2. Add one [`ComponentTypeDescriptor`] entry to [`COMPONENT_REGISTRY`]
//! 3. That's it — rendering and composition derive from the descriptor
//!
//! Descriptors are process-wide constants: no mutation, no teardown, safe to
//! share across threads.

use crate::domain::signature::{OperationSignature, Parameter};
use crate::domain::value_objects::{ComponentTag, TypeToken};
use serde::Serialize;

// ── Interface identity ────────────────────────────────────────────────────────

/// The reference header and base type a generated class inherits from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InterfaceIdentity {
    /// Header named in the generated include directive, e.g. `IHal.h`.
    pub header: &'static str,
    /// Abstract base class named in the inheritance clause, e.g. `IHAL_MEM`.
    pub base_type: &'static str,
}

// ── Descriptor ────────────────────────────────────────────────────────────────

/// Everything the pipeline needs to know about one component type.
///
/// Invariants (enforced by `assert_registry_integrity`):
/// - `Generic` carries no interface and no operations;
/// - every other tag carries an interface and its full, fixed operation
///   sequence — never a partial one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComponentTypeDescriptor {
    pub tag: ComponentTag,
    pub interface: Option<InterfaceIdentity>,
    pub operations: &'static [OperationSignature],
}

// ── The registry ──────────────────────────────────────────────────────────────

/// Single source of truth for all component types.
///
/// Operation order within each entry is the canonical generation order; the
/// header and source documents both consume it as-is.
pub static COMPONENT_REGISTRY: &[ComponentTypeDescriptor] = &[
    ComponentTypeDescriptor {
        tag: ComponentTag::Io,
        interface: Some(InterfaceIdentity {
            header: "IHal.h",
            base_type: "IHAL_IO",
        }),
        operations: &[
            OperationSignature::overriding(
                "get",
                TypeToken::Void,
                &[Parameter::value(TypeToken::VoidPointer, "data")],
            ),
            OperationSignature::overriding(
                "set",
                TypeToken::SysError,
                &[Parameter::value(TypeToken::VoidPointer, "data")],
            ),
        ],
    },
    ComponentTypeDescriptor {
        tag: ComponentTag::Com,
        interface: Some(InterfaceIdentity {
            header: "IHal.h",
            base_type: "IHAL_COM",
        }),
        operations: &[
            OperationSignature::overriding("connect", TypeToken::SysError, &[]),
            OperationSignature::overriding("disconnect", TypeToken::Void, &[]),
            OperationSignature::overriding(
                "sendData",
                TypeToken::SysError,
                &[
                    Parameter::constant(TypeToken::BytePointer, "data"),
                    Parameter::value(TypeToken::Size, "length"),
                ],
            ),
            OperationSignature::overriding(
                "receiveData",
                TypeToken::SysError,
                &[
                    Parameter::value(TypeToken::BytePointer, "data"),
                    Parameter::value(TypeToken::Size, "maxLength"),
                    Parameter::reference(TypeToken::Size, "receivedLength"),
                ],
            ),
        ],
    },
    ComponentTypeDescriptor {
        tag: ComponentTag::Mem,
        interface: Some(InterfaceIdentity {
            header: "IHal.h",
            base_type: "IHAL_MEM",
        }),
        operations: &[
            OperationSignature::overriding("initialize", TypeToken::Bool, &[]),
            OperationSignature::overriding(
                "readData",
                TypeToken::Bool,
                &[
                    Parameter::value(TypeToken::Uint32, "address"),
                    Parameter::value(TypeToken::BytePointer, "data"),
                    Parameter::value(TypeToken::Size, "length"),
                ],
            ),
            OperationSignature::overriding(
                "writeData",
                TypeToken::Bool,
                &[
                    Parameter::value(TypeToken::Uint32, "address"),
                    Parameter::constant(TypeToken::BytePointer, "data"),
                    Parameter::value(TypeToken::Size, "length"),
                ],
            ),
            OperationSignature::overriding("erase", TypeToken::Bool, &[]),
            OperationSignature::overriding("getSize", TypeToken::Size, &[]),
        ],
    },
    ComponentTypeDescriptor {
        tag: ComponentTag::Cpx,
        interface: Some(InterfaceIdentity {
            header: "IHal.h",
            base_type: "IHAL_CPX",
        }),
        operations: &[
            OperationSignature::overriding("start", TypeToken::SysError, &[]),
            OperationSignature::overriding("get", TypeToken::VoidPointer, &[]),
            OperationSignature::overriding(
                "set",
                TypeToken::SysError,
                &[Parameter::value(TypeToken::VoidPointer, "data")],
            ),
            OperationSignature::overriding("stop", TypeToken::SysError, &[]),
        ],
    },
    ComponentTypeDescriptor {
        tag: ComponentTag::Proc,
        interface: Some(InterfaceIdentity {
            header: "Process/Process.hpp",
            base_type: "IProcess",
        }),
        operations: &[
            OperationSignature::overriding("start", TypeToken::SysError, &[]),
            OperationSignature::overriding("stop", TypeToken::SysError, &[]),
            OperationSignature::overriding("pause", TypeToken::SysError, &[]),
            OperationSignature::overriding("resume", TypeToken::SysError, &[]),
        ],
    },
    ComponentTypeDescriptor {
        tag: ComponentTag::Generic,
        interface: None,
        operations: &[],
    },
];

// ── Registry lookup API ───────────────────────────────────────────────────────
//
// These functions are the ONLY entry points for descriptor queries.
// Do not write `match` arms over tags elsewhere.

/// Resolve free-text input to its descriptor.
///
/// Case-normalized; anything outside the recognized set (including the empty
/// string) resolves to the `Generic` descriptor. Deliberate fallback, not an
/// error.
pub fn lookup(input: &str) -> &'static ComponentTypeDescriptor {
    descriptor(ComponentTag::resolve(input))
}

/// The descriptor for an already-resolved tag.
pub fn descriptor(tag: ComponentTag) -> &'static ComponentTypeDescriptor {
    COMPONENT_REGISTRY
        .iter()
        .find(|desc| desc.tag == tag)
        .expect("every ComponentTag variant has a registry entry")
}

/// All registered descriptors, in canonical listing order.
pub fn descriptors() -> &'static [ComponentTypeDescriptor] {
    COMPONENT_REGISTRY
}

// ── Registry integrity (checked in tests) ────────────────────────────────────

/// Assert that the registry is internally consistent.
///
/// Call this in a test; it panics with a clear message on any violation.
/// Catches registration errors at development time, not at user runtime.
#[doc(hidden)]
pub fn assert_registry_integrity() {
    // Every tag has exactly one entry.
    for tag in [
        ComponentTag::Io,
        ComponentTag::Com,
        ComponentTag::Mem,
        ComponentTag::Cpx,
        ComponentTag::Proc,
        ComponentTag::Generic,
    ] {
        let entries: Vec<_> = COMPONENT_REGISTRY
            .iter()
            .filter(|d| d.tag == tag)
            .collect();
        assert!(
            entries.len() == 1,
            "Tag {:?} has {} registry entries, expected exactly 1",
            tag,
            entries.len()
        );
    }

    for desc in COMPONENT_REGISTRY {
        match desc.tag {
            // Generic is the bare scaffold: no interface, no operations.
            ComponentTag::Generic => {
                assert!(
                    desc.interface.is_none(),
                    "Generic descriptor must not carry an interface identity"
                );
                assert!(
                    desc.operations.is_empty(),
                    "Generic descriptor must not carry operations"
                );
            }
            // Every interface tag is fully specified.
            _ => {
                assert!(
                    desc.interface.is_some(),
                    "{:?} descriptor is missing its interface identity",
                    desc.tag
                );
                assert!(
                    !desc.operations.is_empty(),
                    "{:?} descriptor has an empty operation sequence",
                    desc.tag
                );
                for op in desc.operations {
                    assert!(
                        op.is_override,
                        "{:?}::{} must carry the interface-binding flag",
                        desc.tag, op.name
                    );
                }
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
