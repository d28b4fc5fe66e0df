use std::fmt::Display;

use clap::Parser;
use ini::Ini;
use miette::{Context, IntoDiagnostic, Result, miette};
use tracing::info;

use crate::cli::{CliArgs, ValueKind};

mod cli;
mod logging;

fn main() -> Result<()> {
    let args = CliArgs::parse();
    logging::init(args.log_level.as_deref())?;

    let ini = Ini::load_with(&args.path, args.relative_to.resolver())
        .into_diagnostic()
        .wrap_err_with(|| miette!("Failed to load {}.", args.path.display()))?;

    if let Some(path) = ini.path() {
        info!(path = %path.display(), "configuration loaded");
    }

    match (args.section.as_deref(), args.key.as_deref()) {
        (Some(section), Some(key)) => print_value(&ini, section, key, args.kind)?,
        (Some(section), None) => print_section(&ini, section)?,
        _ => print_section_names(&ini),
    }

    Ok(())
}

fn print_section_names(ini: &Ini) {
    println!("Sections:");
    for name in ini.section_names() {
        println!(" - {name}");
    }
}

fn print_section(ini: &Ini, name: &str) -> Result<()> {
    let section = ini.section(name).into_diagnostic()?;

    // HashMap order is unstable; sort for repeatable output.
    let mut keys = section.iter().collect::<Vec<_>>();
    keys.sort_unstable();

    println!("[{}]", section.name());
    for (key, value) in keys {
        println!("{key}={value}");
    }

    Ok(())
}

fn print_value(ini: &Ini, section: &str, key: &str, kind: ValueKind) -> Result<()> {
    fn show<T: Display>(value: ini::Result<T>) -> Result<()> {
        println!("{}", value.into_diagnostic()?);
        Ok(())
    }

    match kind {
        ValueKind::String => show(ini.get_string(section, key)),
        ValueKind::Bool => show(ini.get_bool(section, key)),
        ValueKind::Int => show(ini.get_int(section, key)),
        ValueKind::Int64 => show(ini.get_int64(section, key)),
        ValueKind::Float64 => show(ini.get_float64(section, key)),
    }
}
