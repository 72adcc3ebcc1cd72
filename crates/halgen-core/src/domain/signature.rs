//! Canonical operation signatures.
//!
//! # Design Rationale
//!
//! Each operation is authored exactly once, as structured data. Declaration
//! text (for the header) and definition text (for the source) are *derived*
//! views produced by `render.rs` — they can never drift apart because there
//! is no second authoring site. The previous generation scripts built the
//! definition string first and then carved the declaration out of it with
//! substring replacement, which corrupted output whenever the class name or
//! the word `override` appeared anywhere else in the text.

use crate::domain::value_objects::TypeToken;
use serde::Serialize;

// ── Parameter ─────────────────────────────────────────────────────────────────

/// One formal parameter: type token, optional const/reference qualifiers,
/// and a name.
///
/// Qualifiers are modelled as data, not baked into the type token, so the
/// renderer can place them structurally (`const uint8_t* data`,
/// `size_t& receivedLength`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub ty: TypeToken,
    pub is_const: bool,
    pub by_ref: bool,
    pub name: &'static str,
}

impl Parameter {
    /// Unqualified parameter: `uint32_t address`.
    pub const fn value(ty: TypeToken, name: &'static str) -> Self {
        Self {
            ty,
            is_const: false,
            by_ref: false,
            name,
        }
    }

    /// Const-qualified parameter: `const uint8_t* data`.
    pub const fn constant(ty: TypeToken, name: &'static str) -> Self {
        Self {
            ty,
            is_const: true,
            by_ref: false,
            name,
        }
    }

    /// Reference parameter: `size_t& receivedLength`.
    pub const fn reference(ty: TypeToken, name: &'static str) -> Self {
        Self {
            ty,
            is_const: false,
            by_ref: true,
            name,
        }
    }
}

// ── OperationSignature ────────────────────────────────────────────────────────

/// The single authoritative description of one operation.
///
/// `is_override` is the interface-binding flag: true when the operation
/// overrides a virtual of the descriptor's base type. It controls the
/// ` override` marker in declaration form and nothing else — definition form
/// drops it entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OperationSignature {
    pub name: &'static str,
    pub returns: TypeToken,
    pub params: &'static [Parameter],
    pub is_override: bool,
}

impl OperationSignature {
    /// An interface-bound operation (every tabled operation is one).
    pub const fn overriding(
        name: &'static str,
        returns: TypeToken,
        params: &'static [Parameter],
    ) -> Self {
        Self {
            name,
            returns,
            params,
            is_override: true,
        }
    }
}
