//! Implementation of the `halgen new` command.
//!
//! Responsibility: translate CLI arguments into a `ScaffoldRequest`, call the
//! core scaffold service, and display results. No composition logic lives
//! here.

use std::path::PathBuf;

use chrono::Local;
use tracing::{debug, info, instrument};

use halgen_adapters::LocalFilesystem;
use halgen_core::{
    application::ScaffoldService,
    domain::{ComponentTag, Dialect, ScaffoldRequest, Stamp},
};

use crate::{
    cli::{Lang, NewArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `halgen new` command.
///
/// Dispatch sequence:
/// 1. Resolve the output dialect (flag, then config, both validated)
/// 2. Warn when an explicit `--type` is not a recognised tag
/// 3. Build the banner stamp (author + date)
/// 4. Validate everything into a core `ScaffoldRequest`
/// 5. Early-exit if `--dry-run`
/// 6. Execute scaffolding via `ScaffoldService`
/// 7. Print next-steps guidance
#[instrument(skip_all, fields(component = %args.name))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Resolve dialect
    let dialect = resolve_dialect(args.lang, &config)?;

    // 2. Unrecognised tags fall back to a standalone class; say so up front
    let tag_input = args.component_type.clone().unwrap_or_default();
    if let Some(tag) = args.component_type.as_deref() {
        if ComponentTag::try_resolve(tag).is_none() {
            output.warning(&format!(
                "Unknown component type '{tag}', scaffolding a standalone class"
            ))?;
        }
    }

    // 3. Banner stamp
    let stamp = build_stamp(args.author.as_deref(), &config);

    // 4. Build request (validation happens in one place, inside the core)
    let request = ScaffoldRequest::new(dialect, &tag_input, &args.name, &args.brief, stamp)
        .map_err(|e| CliError::Core(e.into()))?;

    debug!(
        dialect = %request.dialect(),
        tag = %request.tag(),
        stem = %request.type_name().as_str(),
        "Request resolved"
    );

    let output_dir = args.output.clone().unwrap_or_else(|| PathBuf::from("."));
    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()));

    // 5. Dry run: compose in memory, describe, write nothing.
    if args.dry_run {
        let pair = service.compose(&request);
        output.info(&format!(
            "Dry run: would write 2 files to '{}'",
            output_dir.display()
        ))?;
        output.print(&format!(
            "  {} ({} lines)",
            pair.header.file_name,
            pair.header.content.lines().count()
        ))?;
        output.print(&format!(
            "  {} ({} lines)",
            pair.source.file_name,
            pair.source.content.lines().count()
        ))?;
        return Ok(());
    }

    // 6. Scaffold
    output.header(&format!(
        "Scaffolding '{}'...",
        request.type_name().as_str()
    ))?;
    info!(stem = %request.type_name().as_str(), path = %output_dir.display(), "Scaffold started");

    let outcome = service
        .scaffold(&request, &output_dir, args.force)
        .map_err(CliError::Core)?;

    info!(stem = %request.type_name().as_str(), "Scaffold completed");

    // 7. Success + next steps
    output.success(&format!("Created {}", outcome.header_path.display()))?;
    output.success(&format!("Created {}", outcome.source_path.display()))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  $EDITOR {}", outcome.source_path.display()))?;
        output.print("  # Fill in the generated stubs")?;
    }

    Ok(())
}

// ── Dialect resolution ────────────────────────────────────────────────────────

/// `--lang` wins; otherwise `defaults.lang` from config, which is free text
/// and therefore validated here.
fn resolve_dialect(flag: Option<Lang>, config: &AppConfig) -> CliResult<Dialect> {
    if let Some(lang) = flag {
        return Ok(convert_lang(lang));
    }

    config
        .defaults
        .lang
        .parse::<Dialect>()
        .map_err(|e| CliError::ConfigError {
            message: format!("invalid defaults.lang '{}': {}", config.defaults.lang, e),
            source: Some(Box::new(e)),
        })
}

// ── Type conversions CLI → core ───────────────────────────────────────────────

fn convert_lang(lang: Lang) -> Dialect {
    match lang {
        Lang::Cpp => Dialect::Cpp,
        Lang::C => Dialect::C,
    }
}

// ── Stamp construction ────────────────────────────────────────────────────────

/// Author precedence: `--author`, then `defaults.author`, then "Unknown".
/// Date and year always come from the local clock.
fn build_stamp(author_flag: Option<&str>, config: &AppConfig) -> Stamp {
    let author = author_flag
        .map(str::to_owned)
        .or_else(|| config.defaults.author.clone())
        .unwrap_or_else(|| "Unknown".into());

    let now = Local::now();
    Stamp::new(
        author,
        now.format("%d %B %Y").to_string(),
        now.format("%Y").to_string(),
    )
}

// ── Tests ─────────────────────────────────────────────────────────────────────
