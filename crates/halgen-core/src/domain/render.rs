//! Signature rendering: declaration form and definition form.
//!
//! Both forms are produced from the structured [`OperationSignature`] fields.
//! Nothing in this module searches or replaces inside already-rendered text,
//! so an owning type name that collides with an operation name, a parameter
//! name, or the word `override` cannot corrupt the output.
//!
//! The correctness contract: for one signature, the name, return type, and
//! parameter list are byte-identical across the two forms. The declaration
//! differs only by the ` override` marker; the definition differs only by the
//! `Owner::` qualification.

use crate::domain::registry::ComponentTypeDescriptor;
use crate::domain::signature::{OperationSignature, Parameter};
use crate::domain::value_objects::TypeName;

/// One operation rendered in both forms.
///
/// Produced once per pipeline run and consumed by both document composers,
/// which is what keeps header and source order identical by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedOperation {
    pub declaration: String,
    pub definition: String,
}

/// Declaration form: `<return> <name>(<params>) override;`
///
/// No qualification prefix — the owning type name never appears here.
pub fn declaration(op: &OperationSignature) -> String {
    let marker = if op.is_override { " override" } else { "" };
    format!(
        "{} {}({}){};",
        op.returns.as_str(),
        op.name,
        parameter_list(op.params),
        marker
    )
}

/// Definition form: `<return> <Owner>::<name>(<params>);`
///
/// The interface-binding marker is absent by construction.
pub fn definition(op: &OperationSignature, owner: &TypeName) -> String {
    format!(
        "{} {}::{}({});",
        op.returns.as_str(),
        owner.as_str(),
        op.name,
        parameter_list(op.params)
    )
}

/// Render every operation of a descriptor, in descriptor order.
pub fn render_operations(
    descriptor: &ComponentTypeDescriptor,
    owner: &TypeName,
) -> Vec<RenderedOperation> {
    descriptor
        .operations
        .iter()
        .map(|op| RenderedOperation {
            declaration: declaration(op),
            definition: definition(op, owner),
        })
        .collect()
}

fn parameter_list(params: &[Parameter]) -> String {
    params
        .iter()
        .map(render_parameter)
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_parameter(param: &Parameter) -> String {
    let mut text = String::new();
    if param.is_const {
        text.push_str("const ");
    }
    text.push_str(param.ty.as_str());
    if param.by_ref {
        text.push('&');
    }
    text.push(' ');
    text.push_str(param.name);
    text
}

// ── Tests ─────────────────────────────────────────────────────────────────────
