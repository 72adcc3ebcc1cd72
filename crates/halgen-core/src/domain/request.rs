//! The validated input aggregate for one scaffold run.
//!
//! [`ScaffoldRequest::new`] is the single chokepoint where raw user input
//! (tag text, component name, brief) becomes domain values. Everything past
//! this point works with already-validated types and cannot fail on input.

use std::fmt;

use crate::domain::error::DomainError;
use crate::domain::value_objects::{Brief, ComponentTag, Dialect, Stamp, TypeName};

/// Everything composition needs, validated once up front.
#[derive(Debug, Clone)]
pub struct ScaffoldRequest {
    dialect: Dialect,
    tag: ComponentTag,
    type_name: TypeName,
    brief: Brief,
    stamp: Stamp,
}

impl ScaffoldRequest {
    /// Validate raw inputs into a request.
    ///
    /// The tag is resolved with the generic fallback, so any `tag_input` text
    /// is acceptable. The name and brief are validated strictly. C output has
    /// no interface scaffolding, so combining it with a recognized tag is
    /// rejected rather than silently ignored.
    pub fn new(
        dialect: Dialect,
        tag_input: &str,
        name: &str,
        brief: &str,
        stamp: Stamp,
    ) -> Result<Self, DomainError> {
        let tag = ComponentTag::resolve(tag_input);
        if dialect == Dialect::C && tag != ComponentTag::Generic {
            return Err(DomainError::TagNotApplicable {
                tag: tag.to_string(),
            });
        }

        Ok(Self {
            dialect,
            tag,
            type_name: TypeName::derive(tag, name)?,
            brief: Brief::new(brief)?,
            stamp,
        })
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn tag(&self) -> ComponentTag {
        self.tag
    }

    pub fn type_name(&self) -> &TypeName {
        &self.type_name
    }

    pub fn brief(&self) -> &Brief {
        &self.brief
    }

    pub fn stamp(&self) -> &Stamp {
        &self.stamp
    }

    /// File name the header artifact will carry, e.g. `mem_flash.hpp`.
    pub fn header_file_name(&self) -> String {
        self.type_name.header_file_name(self.dialect)
    }

    /// File name the source artifact will carry, e.g. `mem_flash.cpp`.
    pub fn source_file_name(&self) -> String {
        self.type_name.source_file_name(self.dialect)
    }
}

impl fmt::Display for ScaffoldRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}/{}]", self.type_name.as_str(), self.tag, self.dialect)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized_tag_shapes_the_name() {
        let request =
            ScaffoldRequest::new(Dialect::Cpp, "MEM", "Flash", "Flash driver", Stamp::none())
                .unwrap();

        assert_eq!(request.tag(), ComponentTag::Mem);
        assert_eq!(request.type_name().as_str(), "mem_flash");
        assert_eq!(request.header_file_name(), "mem_flash.hpp");
        assert_eq!(request.source_file_name(), "mem_flash.cpp");
    }

    #[test]
    fn unrecognized_tag_falls_back_to_generic() {
        let request =
            ScaffoldRequest::new(Dialect::Cpp, "XYZ", "Widget", "A widget", Stamp::none())
                .unwrap();

        assert_eq!(request.tag(), ComponentTag::Generic);
        assert_eq!(request.type_name().as_str(), "Widget");
    }

    #[test]
    fn c_dialect_rejects_recognized_tags() {
        let err = ScaffoldRequest::new(Dialect::C, "IO", "Gpio", "GPIO driver", Stamp::none())
            .unwrap_err();

        assert!(matches!(err, DomainError::TagNotApplicable { ref tag } if tag == "IO"));
    }

    #[test]
    fn c_dialect_accepts_untagged_components() {
        let request =
            ScaffoldRequest::new(Dialect::C, "", "io_gpio", "GPIO driver", Stamp::none()).unwrap();

        assert_eq!(request.header_file_name(), "io_gpio.h");
        assert_eq!(request.source_file_name(), "io_gpio.c");
    }

    #[test]
    fn invalid_name_is_rejected_before_composition() {
        let err = ScaffoldRequest::new(Dialect::Cpp, "MEM", "flash storage", "x", Stamp::none())
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidName { .. }));
    }

    #[test]
    fn blank_brief_is_rejected() {
        let err =
            ScaffoldRequest::new(Dialect::Cpp, "MEM", "Flash", "   ", Stamp::none()).unwrap_err();
        assert!(matches!(err, DomainError::InvalidBrief { .. }));
    }

    #[test]
    fn display_names_the_component_and_selection() {
        let request =
            ScaffoldRequest::new(Dialect::Cpp, "COM", "Uart", "UART link", Stamp::none()).unwrap();
        assert_eq!(request.to_string(), "com_uart [COM/cpp]");
    }
}
