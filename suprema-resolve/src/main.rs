use std::path::Path;

use anyhow::{bail, Result};
use clap::Parser;
use mac_range_core::MacAddr;
use suprema_resolve::catalog::{Catalog, Generation};
use suprema_resolve::catalog_file::load_catalog;
use suprema_resolve::pair::check_pair;
use suprema_resolve::report::{render_id_table, render_mac_table, render_pair, render_resolution};
use suprema_resolve::resolve::resolve;

mod cli;

use cli::{CheckArgs, Cli, Command, OutputFormat, RangesArgs, ResolveArgs};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Resolve(args) => run_resolve(args),
        Command::Check(args) => run_check(args),
        Command::Ranges(args) => run_ranges(args),
    }
}

fn run_resolve(args: ResolveArgs) -> Result<()> {
    let catalog = load_or_builtin(args.catalog.as_deref());
    let resolution = resolve(&catalog, &args.input);

    match args.format {
        OutputFormat::Text => println!("{}", render_resolution(&resolution)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&resolution)?),
    }
    Ok(())
}

fn run_check(args: CheckArgs) -> Result<()> {
    let catalog = load_or_builtin(args.catalog.as_deref());

    let mac: MacAddr = match args.mac.parse() {
        Ok(mac) => mac,
        Err(err) => bail!("invalid MAC address '{}': {err}", args.mac),
    };
    let serial: u32 = match args.serial.trim().parse() {
        Ok(value) => value,
        Err(_) => bail!("invalid serial number '{}': expected a decimal value", args.serial),
    };

    let result = check_pair(&catalog, mac, serial);
    match args.format {
        OutputFormat::Text => println!("{}", render_pair(&result)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }
    Ok(())
}

fn run_ranges(args: RangesArgs) -> Result<()> {
    let catalog = load_or_builtin(args.catalog.as_deref());

    let highlight_byte = args.highlight.as_deref().and_then(|input| {
        let resolution = resolve(&catalog, input);
        match resolution.normalized_mac.parse::<MacAddr>() {
            Ok(mac) => Some(mac.model_byte()),
            Err(_) => {
                eprintln!("warning: could not resolve '{input}' to a MAC; nothing highlighted");
                None
            }
        }
    });

    let catalog = match args.generation {
        None => catalog,
        Some(number) => {
            let Some(generation) = Generation::from_number(number) else {
                bail!("unknown generation {number}: expected 1 or 2");
            };
            Catalog::new(
                catalog
                    .models()
                    .iter()
                    .filter(|m| m.generation == generation)
                    .cloned()
                    .collect(),
            )
        }
    };

    match args.format {
        OutputFormat::Text => {
            println!("{}", render_mac_table(&catalog, highlight_byte));
            println!();
            println!("{}", render_id_table(&catalog, highlight_byte));
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(catalog.models())?),
    }
    Ok(())
}

fn load_or_builtin(path: Option<&Path>) -> Catalog {
    let Some(path) = path else {
        return Catalog::builtin();
    };

    match load_catalog(path) {
        Ok(catalog) => catalog,
        Err(err) => {
            eprintln!(
                "warning: failed to load catalog from {} ({err}); using builtin table",
                path.display()
            );
            Catalog::builtin()
        }
    }
}
