//! Domain value objects: ComponentTag, Dialect, TypeToken, TypeName, Brief, Stamp.
//!
//! # Design
//!
//! These are pure value types — equality-by-value, no identity. They hold NO
//! signature or document knowledge. The operation tables live in
//! `registry.rs`; document assembly lives in `compose.rs`. This file's only
//! job is to define the types, their string representations, and their
//! parsers/derivations.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str` arm (and parser arm where one exists) here
//! 3. Add a descriptor entry in `registry.rs`
//! 4. Done — nothing else changes

use crate::domain::error::DomainError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

// ── ComponentTag ──────────────────────────────────────────────────────────────

/// A component-type tag from the closed recognized set.
///
/// Resolution is total: any input that is not one of the five interface tags
/// resolves to `Generic`. That fallback is deliberate behavior, not an error —
/// an unadorned class scaffold is always a valid answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ComponentTag {
    Io,
    Com,
    Mem,
    Cpx,
    Proc,
    Generic,
}

impl ComponentTag {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Io => "IO",
            Self::Com => "COM",
            Self::Mem => "MEM",
            Self::Cpx => "CPX",
            Self::Proc => "PROC",
            Self::Generic => "GENERIC",
        }
    }

    /// Strict resolution: `None` when the input names no recognized tag.
    ///
    /// Callers that want to report the fallback (rather than silently taking
    /// it) check this first.
    pub fn try_resolve(input: &str) -> Option<Self> {
        match input.trim().to_ascii_uppercase().as_str() {
            "IO" => Some(Self::Io),
            "COM" => Some(Self::Com),
            "MEM" => Some(Self::Mem),
            "CPX" => Some(Self::Cpx),
            "PROC" => Some(Self::Proc),
            "GENERIC" => Some(Self::Generic),
            _ => None,
        }
    }

    /// Total resolution with the `Generic` fallback.
    ///
    /// Case-insensitive; surrounding whitespace is ignored. Empty input and
    /// unrecognized input both resolve to `Generic`.
    pub fn resolve(input: &str) -> Self {
        Self::try_resolve(input).unwrap_or(Self::Generic)
    }
}

impl fmt::Display for ComponentTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Dialect ───────────────────────────────────────────────────────────────────

/// Output language dialect for a scaffold pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// Class scaffolds: `.hpp`/`.cpp`, interface-backed or standalone.
    Cpp,
    /// Banner-sectioned module scaffolds: `.h`/`.c`, `INTERFACE` macro block.
    C,
}

impl Dialect {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cpp => "cpp",
            Self::C => "c",
        }
    }

    pub const fn header_extension(&self) -> &'static str {
        match self {
            Self::Cpp => "hpp",
            Self::C => "h",
        }
    }

    pub const fn source_extension(&self) -> &'static str {
        match self {
            Self::Cpp => "cpp",
            Self::C => "c",
        }
    }

    /// Include-guard suffix (`_HPP` / `_H` without the underscore).
    pub const fn guard_suffix(&self) -> &'static str {
        match self {
            Self::Cpp => "HPP",
            Self::C => "H",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cpp" | "c++" | "cxx" => Ok(Self::Cpp),
            "c" => Ok(Self::C),
            other => Err(DomainError::UnknownDialect(other.to_string())),
        }
    }
}

// ── TypeToken ─────────────────────────────────────────────────────────────────

/// The closed vocabulary of C/C++ type tokens used in generated signatures.
///
/// Serialized as the literal C token so machine-readable registry listings
/// read like source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TypeToken {
    #[serde(rename = "void")]
    Void,
    #[serde(rename = "void*")]
    VoidPointer,
    #[serde(rename = "bool")]
    Bool,
    #[serde(rename = "size_t")]
    Size,
    #[serde(rename = "uint32_t")]
    Uint32,
    #[serde(rename = "uint8_t*")]
    BytePointer,
    #[serde(rename = "sys_error_t")]
    SysError,
}

impl TypeToken {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Void => "void",
            Self::VoidPointer => "void*",
            Self::Bool => "bool",
            Self::Size => "size_t",
            Self::Uint32 => "uint32_t",
            Self::BytePointer => "uint8_t*",
            Self::SysError => "sys_error_t",
        }
    }
}

impl fmt::Display for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── TypeName ──────────────────────────────────────────────────────────────────

/// The derived type name: class name, file stem, and guard base in one.
///
/// Derivation is the canonical naming convention:
/// - interface tags prefix the lower-cased tag (`MEM` + `Flash` → `mem_flash`),
///   matching the components shipped with the target framework (`io_gpio`,
///   `cpx_wifi`, `mem_nvs`);
/// - `Generic` keeps the name verbatim (`Widget` stays `Widget`).
///
/// The raw name must be identifier-shaped; the stem inherits that property by
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeName(String);

impl TypeName {
    pub fn derive(tag: ComponentTag, name: &str) -> Result<Self, DomainError> {
        validate_identifier(name)?;
        let stem = match tag {
            ComponentTag::Generic => name.to_string(),
            _ => format!(
                "{}_{}",
                tag.as_str().to_ascii_lowercase(),
                name.to_ascii_lowercase()
            ),
        };
        Ok(Self(stem))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn header_file_name(&self, dialect: Dialect) -> String {
        format!("{}.{}", self.0, dialect.header_extension())
    }

    pub fn source_file_name(&self, dialect: Dialect) -> String {
        format!("{}.{}", self.0, dialect.source_extension())
    }

    /// Include-guard symbol, e.g. `MEM_FLASH_HPP`.
    pub fn include_guard(&self, dialect: Dialect) -> String {
        format!("{}_{}", self.0.to_ascii_uppercase(), dialect.guard_suffix())
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── Brief ─────────────────────────────────────────────────────────────────────

/// One-line description placed in the generated header banner.
///
/// Never blank — a blank brief would punch an empty `@brief` line into every
/// generated file, so construction rejects it up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Brief(String);

impl Brief {
    pub fn new(text: &str) -> Result<Self, DomainError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidBrief {
                reason: "must not be empty or blank".into(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Brief {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── Stamp ─────────────────────────────────────────────────────────────────────

/// Author/date attribution interpolated into C banner comments.
///
/// The values arrive preformatted from the caller (date stamping is an outer
/// concern); the domain only places them. C++ scaffolds ignore the stamp.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Stamp {
    author: String,
    date: String,
    year: String,
}

impl Stamp {
    pub fn new(
        author: impl Into<String>,
        date: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self {
            author: author.into(),
            date: date.into(),
            year: year.into(),
        }
    }

    /// Empty stamp for scaffolds that carry no attribution.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn year(&self) -> &str {
        &self.year
    }
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// C-identifier check: `[A-Za-z_][A-Za-z0-9_]*`.
fn validate_identifier(name: &str) -> Result<(), DomainError> {
    let mut chars = name.chars();
    match chars.next() {
        None => {
            return Err(DomainError::InvalidName {
                name: name.to_string(),
                reason: "must not be empty".into(),
            });
        }
        Some(c) if !(c.is_ascii_alphabetic() || c == '_') => {
            return Err(DomainError::InvalidName {
                name: name.to_string(),
                reason: format!("must start with a letter or underscore, found '{c}'"),
            });
        }
        Some(_) => {}
    }
    if let Some(c) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
        return Err(DomainError::InvalidName {
            name: name.to_string(),
            reason: format!("contains invalid character '{c}'"),
        });
    }
    Ok(())
}
