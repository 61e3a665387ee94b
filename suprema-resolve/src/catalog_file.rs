use std::fs;
use std::path::Path;

use mac_range_core::{MacAddr, Span};
use serde::Deserialize;
use thiserror::Error;

use crate::catalog::{Catalog, DeviceModel, Generation};

/// Errors returned when loading a catalog override file.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse catalog file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[error("model '{model}' has unsupported generation {value}")]
    Generation { model: String, value: u8 },
    #[error("model '{model}' declares no {kind} range")]
    EmptyRanges { model: String, kind: &'static str },
    #[error("model '{model}' has an inverted range {start}-{end}")]
    Inverted {
        model: String,
        start: String,
        end: String,
    },
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    model: Vec<ModelEntry>,
}

#[derive(Debug, Deserialize)]
struct ModelEntry {
    name: String,
    generation: u8,
    mac: Vec<MacRangeEntry>,
    id: Vec<IdRangeEntry>,
}

#[derive(Debug, Deserialize)]
struct MacRangeEntry {
    start: MacAddr,
    end: MacAddr,
}

#[derive(Debug, Deserialize)]
struct IdRangeEntry {
    start: u32,
    end: u32,
}

/// Load an alternate catalog from a TOML file.
///
/// Lets field engineers trial range corrections without rebuilding;
/// the file carries the same records as the builtin table, with MAC
/// bounds written as address strings.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogLoadError> {
    let raw = fs::read_to_string(path).map_err(|source| CatalogLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    parse_catalog(&raw, path.display().to_string())
}

fn parse_catalog(raw: &str, path: String) -> Result<Catalog, CatalogLoadError> {
    let parsed: CatalogFile =
        toml::from_str(raw).map_err(|source| CatalogLoadError::Parse { path, source })?;

    let mut models = Vec::with_capacity(parsed.model.len());
    for entry in parsed.model {
        models.push(convert_entry(entry)?);
    }
    Ok(Catalog::new(models))
}

fn convert_entry(entry: ModelEntry) -> Result<DeviceModel, CatalogLoadError> {
    let generation =
        Generation::from_number(entry.generation).ok_or_else(|| CatalogLoadError::Generation {
            model: entry.name.clone(),
            value: entry.generation,
        })?;

    if entry.mac.is_empty() {
        return Err(CatalogLoadError::EmptyRanges {
            model: entry.name,
            kind: "MAC",
        });
    }
    if entry.id.is_empty() {
        return Err(CatalogLoadError::EmptyRanges {
            model: entry.name,
            kind: "Device-ID",
        });
    }

    let mut mac_spans = Vec::with_capacity(entry.mac.len());
    for range in &entry.mac {
        if range.start.value() > range.end.value() {
            return Err(CatalogLoadError::Inverted {
                model: entry.name,
                start: range.start.to_string(),
                end: range.end.to_string(),
            });
        }
        mac_spans.push(Span::new(range.start.value(), range.end.value()));
    }

    let mut id_spans = Vec::with_capacity(entry.id.len());
    for range in &entry.id {
        if range.start > range.end {
            return Err(CatalogLoadError::Inverted {
                model: entry.name,
                start: range.start.to_string(),
                end: range.end.to_string(),
            });
        }
        id_spans.push(Span::new(range.start, range.end));
    }

    Ok(DeviceModel {
        name: entry.name,
        generation,
        mac_spans,
        id_spans,
    })
}
