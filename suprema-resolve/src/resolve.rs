use mac_range_core::{classify, InputKind};
use serde::Serialize;

use crate::catalog::{Catalog, DeviceModel};
use crate::{forward, reverse};

/// Outcome class of one resolution call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Validity {
    /// At least one catalog match; may still be ambiguous.
    Valid,
    /// Input normalizes to neither 9 digits nor 12 hex characters.
    InvalidFormat,
    /// Well-formed MAC without a recognized manufacturer prefix.
    NotSupremaDevice,
    /// Well-formed input matching no catalog range.
    ModelNotFound,
}

/// Result of resolving one serial number or MAC address.
///
/// Every failure mode is data; resolution never panics or returns
/// `Err` for malformed input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution {
    pub raw_input: String,
    /// Canonical colon-delimited MAC, the `Unknown-XXXX` placeholder,
    /// or empty when no MAC can be stated.
    pub normalized_mac: String,
    /// Numeric Device ID when derivable from the input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<u32>,
    /// Best-match model, `None` when nothing matched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<DeviceModel>,
    /// All matching models in catalog order.
    pub candidates: Vec<DeviceModel>,
    /// Derived at construction: more than one candidate matched.
    pub ambiguous: bool,
    /// Reverse reconstruction fell back to the bare low 16 bits.
    pub approximate: bool,
    pub validity: Validity,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Resolution {
    pub(crate) fn failure(raw_input: &str, validity: Validity, error: &str) -> Self {
        Self {
            raw_input: raw_input.to_string(),
            normalized_mac: String::new(),
            device_id: None,
            primary: None,
            candidates: Vec::new(),
            ambiguous: false,
            approximate: false,
            validity,
            description: String::new(),
            error: Some(error.to_string()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validity == Validity::Valid
    }
}

/// Single entry point: classify the input and dispatch to the forward
/// or reverse resolver.
pub fn resolve(catalog: &Catalog, input: &str) -> Resolution {
    match classify(input) {
        InputKind::Serial => forward::resolve_serial(catalog, input),
        InputKind::Mac => reverse::resolve_mac(catalog, input),
        InputKind::Unknown => Resolution::failure(
            input,
            Validity::InvalidFormat,
            "expected a 9-digit serial number or a MAC address (XX:XX:XX:XX:XX:XX)",
        ),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{resolve, Validity};
    use crate::catalog::Catalog;

    #[test]
    fn unclassifiable_input_fails_before_either_resolver() {
        let catalog = Catalog::builtin();
        let res = resolve(&catalog, "abc");
        assert_eq!(res.validity, Validity::InvalidFormat);
        assert!(res.candidates.is_empty());
        assert!(res.normalized_mac.is_empty());
        assert!(res.error.is_some());
    }

    #[test]
    fn dispatches_serials_and_macs() {
        let catalog = Catalog::builtin();

        let by_serial = resolve(&catalog, "544426672");
        assert_eq!(by_serial.validity, Validity::Valid);
        assert_eq!(by_serial.device_id, Some(544_426_672));

        let by_mac = resolve(&catalog, "00:17:FC:73:4A:B0");
        assert_eq!(by_mac.validity, Validity::Valid);
        assert_eq!(by_mac.normalized_mac, "00:17:FC:73:4A:B0");
    }
}
