//! Implementation of the `halgen list` command.
//!
//! Prints the component-type registry: tag, interface binding, and the
//! operations each scaffold receives.

use halgen_core::domain::{ComponentTypeDescriptor, registry};

use crate::{
    cli::{ListArgs, ListFormat, global::GlobalArgs},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let descriptors = registry::descriptors();

    match args.format {
        ListFormat::Table => {
            output.header("Component types:")?;
            for descriptor in descriptors {
                output.print(&format!(
                    "  {:<8} {:<10} {}",
                    descriptor.tag,
                    interface_name(descriptor),
                    describe_operations(descriptor)
                ))?;
            }
        }

        ListFormat::List => {
            for descriptor in descriptors {
                println!("{}", descriptor.tag);
            }
        }

        ListFormat::Json => {
            // Serialise as a JSON array to stdout (bypasses OutputManager
            // because JSON output must be parseable even in non-TTY pipes).
            let json = serde_json::to_string_pretty(descriptors).unwrap_or_else(|_| "[]".into());
            println!("{json}");
        }

        ListFormat::Csv => {
            println!("tag,interface,operations");
            for descriptor in descriptors {
                let operations: Vec<&str> =
                    descriptor.operations.iter().map(|op| op.name).collect();
                println!(
                    "{},{},{}",
                    descriptor.tag,
                    interface_name(descriptor),
                    operations.join(";")
                );
            }
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn interface_name(descriptor: &ComponentTypeDescriptor) -> &'static str {
    descriptor.interface.map(|i| i.base_type).unwrap_or("-")
}

fn describe_operations(descriptor: &ComponentTypeDescriptor) -> String {
    if descriptor.operations.is_empty() {
        return "constructor/destructor only".into();
    }
    let names: Vec<&str> = descriptor.operations.iter().map(|op| op.name).collect();
    names.join(", ")
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    use halgen_core::domain::ComponentTag;

    fn descriptor_for(tag: ComponentTag) -> &'static ComponentTypeDescriptor {
        registry::descriptors()
            .iter()
            .find(|d| d.tag == tag)
            .expect("tag is registered")
    }

    #[test]
    fn generic_has_no_interface() {
        assert_eq!(interface_name(descriptor_for(ComponentTag::Generic)), "-");
    }

    #[test]
    fn mem_interface_and_operations_are_described() {
        let descriptor = descriptor_for(ComponentTag::Mem);
        assert_eq!(interface_name(descriptor), "IHAL_MEM");

        let described = describe_operations(descriptor);
        assert!(described.contains("readData"));
        assert!(described.contains("writeData"));
    }

    #[test]
    fn generic_operations_fall_back_to_ctor_dtor_note() {
        let described = describe_operations(descriptor_for(ComponentTag::Generic));
        assert!(described.contains("constructor"));
    }

    #[test]
    fn registry_serialises_to_json() {
        let json = serde_json::to_string_pretty(registry::descriptors()).unwrap();
        assert!(json.contains("\"MEM\""));
        assert!(json.contains("IHAL_MEM"));
    }
}
