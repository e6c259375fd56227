//! `quire show` and `quire plan`: emit the descriptor or the build plan.

use std::fs;
use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::{Format, OutputArgs};
use crate::compose::SiteConfig;
use crate::log;
use crate::plugin::BuildContext;

/// Print the composed descriptor.
pub fn show_descriptor(site: &SiteConfig, format: Format, args: &OutputArgs) -> Result<()> {
    let formatted = render(site, format, args.pretty)?;
    write_output(&formatted, args)
}

/// Apply the plugins and print the resulting plan as JSON.
pub fn show_plan(site: &SiteConfig, args: &OutputArgs) -> Result<()> {
    let plan = BuildContext::prepare(site)?;
    let formatted = render(&plan, Format::Json, args.pretty)?;
    write_output(&formatted, args)
}

fn render<T: Serialize>(value: &T, format: Format, pretty: bool) -> Result<String> {
    let formatted = match (format, pretty) {
        (Format::Json, true) => serde_json::to_string_pretty(value)?,
        (Format::Json, false) => serde_json::to_string(value)?,
        // TOML has no compact form
        (Format::Toml, _) => toml::to_string_pretty(value).context("descriptor is not TOML-representable")?,
    };
    Ok(formatted)
}

/// Output to file or stdout.
fn write_output(formatted: &str, args: &OutputArgs) -> Result<()> {
    if let Some(ref output_path) = args.write {
        let mut file = fs::File::create(output_path)
            .with_context(|| format!("Failed to create '{}'", output_path.display()))?;
        writeln!(file, "{}", formatted)?;
        log!("show"; "wrote output to {}", output_path.display());
    } else {
        println!("{}", formatted);
    }
    Ok(())
}
