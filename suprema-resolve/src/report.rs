use colored::Colorize;
use mac_range_core::{group_id_digits, id_span_display, mac_span_display};

use crate::catalog::{Catalog, DeviceModel};
use crate::pair::{PairAgreement, PairMatch};
use crate::resolve::{Resolution, Validity};

/// Render one resolution for terminal output.
pub fn render_resolution(res: &Resolution) -> String {
    let mut out = Vec::new();

    let validity = match res.validity {
        Validity::Valid if res.ambiguous => "valid (ambiguous)".yellow().to_string(),
        Validity::Valid => "valid".green().to_string(),
        Validity::InvalidFormat => "invalid_format".red().to_string(),
        Validity::NotSupremaDevice => "not_suprema_device".red().to_string(),
        Validity::ModelNotFound => "model_not_found".red().to_string(),
    };
    out.push(format!("input={} validity={}", res.raw_input, validity));

    if let Some(error) = &res.error {
        out.push(format!("error: {error}"));
    }
    if !res.description.is_empty() {
        out.push(format!("description: {}", res.description));
    }

    if let Some(model) = &res.primary {
        out.push(format!("model: {} (Generation {})", model.name, model.generation));
    }
    if !res.normalized_mac.is_empty() {
        out.push(format!("mac: {}", res.normalized_mac));
    }
    if let Some(id) = res.device_id {
        let approx = if res.approximate { " approximate" } else { "" };
        out.push(format!(
            "device_id: {id} ({}){approx}",
            group_id_digits(&id.to_string())
        ));
    }

    if res.candidates.len() > 1 {
        out.push("candidates:".to_string());
        for model in &res.candidates {
            out.push(format!("- {}", candidate_line(model)));
        }
    }

    out.join("\n")
}

/// Render a pair cross-check for terminal output.
pub fn render_pair(result: &PairMatch) -> String {
    let mut out = Vec::new();

    let agreement = match result.agreement {
        PairAgreement::Exact => "exact".green().to_string(),
        PairAgreement::MostSpecific => "most_specific".yellow().to_string(),
        PairAgreement::SerialOnly => "serial_only".yellow().to_string(),
        PairAgreement::MacOnly => "mac_only".yellow().to_string(),
        PairAgreement::NoMatch => "no_match".red().to_string(),
    };
    out.push(format!("agreement={agreement}"));

    if let Some(model) = &result.model {
        out.push(format!("model: {} (Generation {})", model.name, model.generation));
    }

    out.push("mac_matches".to_string());
    for model in &result.mac_matches {
        out.push(format!("- {}", candidate_line(model)));
    }
    out.push("serial_matches".to_string());
    for model in &result.serial_matches {
        out.push(format!("- {}", candidate_line(model)));
    }

    out.join("\n")
}

/// Reference table of per-model MAC ranges, optionally highlighting
/// the rows containing a resolved model byte.
pub fn render_mac_table(catalog: &Catalog, highlight_byte: Option<u8>) -> String {
    let mut out = Vec::new();
    out.push("mac_ranges".to_string());
    for model in catalog.models() {
        let spans = model
            .mac_spans
            .iter()
            .map(mac_span_display)
            .collect::<Vec<_>>()
            .join(", ");
        let line = format!("- {} (Gen {}): {}", model.name, model.generation, spans);
        out.push(mark_row(line, highlight_byte, model));
    }
    out.join("\n")
}

/// Reference table of per-model Device-ID ranges.
pub fn render_id_table(catalog: &Catalog, highlight_byte: Option<u8>) -> String {
    let mut out = Vec::new();
    out.push("id_ranges".to_string());
    for model in catalog.models() {
        let spans = model
            .id_spans
            .iter()
            .map(id_span_display)
            .collect::<Vec<_>>()
            .join(", ");
        let line = format!("- {} (Gen {}): {}", model.name, model.generation, spans);
        out.push(mark_row(line, highlight_byte, model));
    }
    out.join("\n")
}

fn mark_row(line: String, highlight_byte: Option<u8>, model: &DeviceModel) -> String {
    match highlight_byte {
        Some(byte) if model.contains_model_byte(byte) => format!("{} *", line.cyan()),
        _ => line,
    }
}

fn candidate_line(model: &DeviceModel) -> String {
    let spans = model
        .id_spans
        .iter()
        .map(id_span_display)
        .collect::<Vec<_>>()
        .join(", ");
    format!("{} (Generation {}) ids={}", model.name, model.generation, spans)
}
