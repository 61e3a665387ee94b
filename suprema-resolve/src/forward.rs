use mac_range_core::{normalize, MacAddr};

use crate::catalog::Catalog;
use crate::resolve::{Resolution, Validity};

/// Resolve a 9-digit serial number to its MAC address and model.
///
/// The last two MAC octets come straight from the serial's low 16
/// bits; the prefix and model byte come from the matched record's
/// canonical MAC range.
pub fn resolve_serial(catalog: &Catalog, input: &str) -> Resolution {
    let clean = normalize(input);
    if clean.len() != 9 || !clean.chars().all(|c| c.is_ascii_digit()) {
        return Resolution::failure(
            input,
            Validity::InvalidFormat,
            "serial numbers must be exactly 9 digits",
        );
    }

    let id: u32 = match clean.parse() {
        Ok(value) if value > 0 => value,
        _ => {
            return Resolution::failure(
                input,
                Validity::InvalidFormat,
                "serial number must be a positive decimal value",
            )
        }
    };

    let candidates = catalog.matching_id(id);
    if candidates.is_empty() {
        let mut res = Resolution::failure(
            input,
            Validity::ModelNotFound,
            "device model not found in catalog",
        );
        res.normalized_mac = format!("Unknown-{:04X}", id & 0xFFFF);
        res.device_id = Some(id);
        res.description = "device model not recognized".to_string();
        return res;
    }

    let primary = candidates[0];
    let prefix = primary.mac_prefix();
    let mac = MacAddr::new([
        prefix[0],
        prefix[1],
        prefix[2],
        primary.model_byte(),
        (id >> 8) as u8,
        id as u8,
    ]);

    Resolution {
        raw_input: input.to_string(),
        normalized_mac: mac.to_string(),
        device_id: Some(id),
        primary: Some(primary.clone()),
        candidates: candidates.iter().map(|m| (*m).clone()).collect(),
        ambiguous: candidates.len() > 1,
        approximate: false,
        validity: Validity::Valid,
        description: format!("{} - Generation {}", primary.name, primary.generation),
        error: None,
    }
}
