//! Document composition: complete header and source texts from one request.
//!
//! Composition is pure. Operation fragments are rendered once (see
//! [`crate::domain::render`]) and the same slice feeds both documents, which
//! makes header/source pairing and ordering identical by construction rather
//! than by discipline.
//!
//! Two document families exist. C++ scaffolds are class skeletons: doc banner,
//! include guard, interface include and base class when the component is
//! tagged, constructor/destructor stubs, then the operation fragments. C
//! scaffolds are banner-sectioned modules with the `INTERFACE` linkage macro
//! block and no class at all.

use crate::domain::registry::{self, ComponentTypeDescriptor};
use crate::domain::render::{self, RenderedOperation};
use crate::domain::request::ScaffoldRequest;
use crate::domain::value_objects::{Brief, Dialect, Stamp, TypeName};

// ── Artifacts ─────────────────────────────────────────────────────────────────

/// A generated file: bare name plus full content.
///
/// Placement under an output directory is the application layer's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// e.g. `mem_flash.hpp`
    pub file_name: String,
    /// Complete file text, trailing newline included.
    pub content: String,
}

/// The matched header/source pair every scaffold run produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPair {
    pub header: Artifact,
    pub source: Artifact,
}

/// Compose both documents for a validated request.
pub fn compose_pair(request: &ScaffoldRequest) -> ArtifactPair {
    match request.dialect() {
        Dialect::Cpp => {
            let descriptor = registry::descriptor(request.tag());
            let fragments = render::render_operations(descriptor, request.type_name());
            ArtifactPair {
                header: Artifact {
                    file_name: request.header_file_name(),
                    content: compose_header(
                        descriptor,
                        request.type_name(),
                        request.brief(),
                        &fragments,
                    ),
                },
                source: Artifact {
                    file_name: request.source_file_name(),
                    content: compose_source(request.type_name(), &fragments),
                },
            }
        }
        Dialect::C => ArtifactPair {
            header: Artifact {
                file_name: request.header_file_name(),
                content: compose_c_header(request.type_name(), request.brief(), request.stamp()),
            },
            source: Artifact {
                file_name: request.source_file_name(),
                content: compose_c_source(request.type_name(), request.brief(), request.stamp()),
            },
        },
    }
}

// ── C++ documents ─────────────────────────────────────────────────────────────

/// Header document: banner, guard, optional interface include and base class,
/// member stubs, then one declaration per operation.
pub fn compose_header(
    descriptor: &ComponentTypeDescriptor,
    type_name: &TypeName,
    brief: &Brief,
    fragments: &[RenderedOperation],
) -> String {
    let stem = type_name.as_str();
    let guard = type_name.include_guard(Dialect::Cpp);
    let brief = brief.as_str();

    let mut doc = format!(
        "\
/**
 * @file {stem}.hpp
 * @brief {brief}
 *
 * This file contains declarations for the {stem} class and related data types and functions.
 */

#ifndef {guard}
#define {guard}

"
    );

    if let Some(interface) = &descriptor.interface {
        doc.push_str(&format!("#include \"{}\"\n\n", interface.header));
        doc.push_str(&format!("class {stem} : public {}\n", interface.base_type));
    } else {
        doc.push_str(&format!("class {stem}\n"));
    }

    doc.push_str(&format!(
        "\
{{
private:
    // private members

public:
    {stem}();
    ~{stem}();
"
    ));

    for fragment in fragments {
        doc.push_str(&format!("\n    {}\n", fragment.declaration));
    }

    doc.push_str(&format!(
        "\
}};

#endif /* {guard} */
"
    ));

    doc
}

/// Source document: banner, include of the generated header,
/// constructor/destructor stubs, then one definition per operation.
///
/// The descriptor is not needed here: the fragments already carry everything
/// the source renders, so pairing with [`compose_header`] cannot drift.
pub fn compose_source(type_name: &TypeName, fragments: &[RenderedOperation]) -> String {
    let stem = type_name.as_str();

    let mut doc = format!(
        "\
/**
 * @file {stem}.cpp
 * @brief Source file for {stem}
 *
 * This file contains definitions for the {stem} class and related data types and functions.
 */

#include \"{stem}.hpp\"

{stem}::{stem}()
{{
    // constructor implementation
}}

{stem}::~{stem}()
{{
    // destructor implementation
}}
"
    );

    for fragment in fragments {
        doc.push_str(&format!("\n{}\n", fragment.definition));
    }

    doc
}

// ── C documents ───────────────────────────────────────────────────────────────

const SECTION_INCLUDES: &str =
    "/** INCLUDES ******************************************************************/";
const SECTION_CONSTANTS: &str =
    "/** CONSTANTS *****************************************************************/";
const SECTION_TYPEDEFS: &str =
    "/** TYPEDEFS ******************************************************************/";
const SECTION_MACROS: &str =
    "/** MACROS ********************************************************************/";
const SECTION_VARIABLES: &str =
    "/** VARIABLES *****************************************************************/";
const SECTION_LOCAL_DECLS: &str =
    "/** LOCAL FUNCTION DECLARATIONS ***********************************************/";
const SECTION_INTERFACE_DECLS: &str =
    "/** INTERFACE FUNCTION DECLARATIONS ******************************************/";
const SECTION_INTERFACE_DEFS: &str =
    "/** INTERFACE FUNCTION DEFINITIONS ********************************************/";
const SECTION_LOCAL_DEFS: &str =
    "/** LOCAL FUNCTION DEFINITIONS ************************************************/";

fn c_banner(file_name: &str, brief: &str, stamp: &Stamp) -> String {
    let author = stamp.author();
    let date = stamp.date();
    let year = stamp.year();
    format!(
        "\
/** @file       {file_name}
 *  @brief      {brief}
 *  @copyright  (c) {year}- {author} - All Rights Reserved
 *              Permission to use, reproduce, copy, prepare derivative works,
 *              modify, distribute, perform, display or sell this software and/or
 *              its documentation for any purpose is prohibited without the express
 *              written consent of {author}.
 *  @author     {author}
 *  @date       {date}
 */
"
    )
}

/// C header document: stamped banner, include guard, empty layout sections,
/// and the `INTERFACE` linkage macro gated on `<STEM>_C`.
pub fn compose_c_header(type_name: &TypeName, brief: &Brief, stamp: &Stamp) -> String {
    let stem = type_name.as_str();
    let guard = type_name.include_guard(Dialect::C);
    let gate = format!("{}_C", stem.to_uppercase());

    let mut doc = c_banner(&format!("{stem}.h"), brief.as_str(), stamp);
    doc.push_str(&format!(
        "
#ifndef {guard}
#define {guard}

{SECTION_INCLUDES}

{SECTION_CONSTANTS}

{SECTION_TYPEDEFS}

{SECTION_MACROS}

#ifndef {gate}
#define INTERFACE extern
#else
#define INTERFACE
#endif
{SECTION_VARIABLES}

{SECTION_LOCAL_DECLS}

{SECTION_INTERFACE_DECLS}

{SECTION_LOCAL_DEFS}


#undef INTERFACE // Should not let this roam free

#endif /* {guard} */
"
    ));
    doc
}

/// C source document: stamped banner, include of the generated header, empty
/// layout sections. No guard and no linkage gate on the source side.
pub fn compose_c_source(type_name: &TypeName, brief: &Brief, stamp: &Stamp) -> String {
    let stem = type_name.as_str();

    let mut doc = c_banner(&format!("{stem}.c"), brief.as_str(), stamp);
    doc.push_str(&format!(
        "
{SECTION_INCLUDES}

#include \"{stem}.h\"

{SECTION_CONSTANTS}

{SECTION_TYPEDEFS}

{SECTION_MACROS}

{SECTION_VARIABLES}

{SECTION_LOCAL_DECLS}

{SECTION_INTERFACE_DEFS}

{SECTION_LOCAL_DEFS}
"
    ));
    doc
}

// ── Tests ─────────────────────────────────────────────────────────────────────
