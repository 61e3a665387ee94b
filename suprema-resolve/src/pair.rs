use mac_range_core::{most_specific, MacAddr};
use serde::Serialize;

use crate::catalog::{Catalog, DeviceModel};

/// How the MAC and serial evidence was combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PairAgreement {
    /// Exactly one model matched both inputs.
    Exact,
    /// Several models matched both; the narrowest ID span won.
    MostSpecific,
    /// No common match; fell back to the serial's first match.
    SerialOnly,
    /// No common match and no serial match; fell back to the MAC.
    MacOnly,
    /// Neither input matched anything.
    NoMatch,
}

/// Outcome of cross-checking a MAC address against a serial number,
/// as printed together on a device label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairMatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<DeviceModel>,
    pub agreement: PairAgreement,
    pub mac_matches: Vec<DeviceModel>,
    pub serial_matches: Vec<DeviceModel>,
}

/// Disambiguate overlapping ranges using both identifiers at once.
///
/// The intersection of MAC-range and ID-range matches decides; when it
/// is still plural the smallest total ID span wins, and when it is
/// empty the serial evidence outranks the MAC evidence.
pub fn check_pair(catalog: &Catalog, mac: MacAddr, id: u32) -> PairMatch {
    let by_mac = catalog.matching_mac(mac);
    let by_id = catalog.matching_id(id);

    let intersection: Vec<&DeviceModel> = by_mac
        .iter()
        .copied()
        .filter(|model| by_id.contains(model))
        .collect();

    let (model, agreement) = if intersection.len() == 1 {
        (Some(intersection[0].clone()), PairAgreement::Exact)
    } else if intersection.len() > 1 {
        let winner = most_specific(&intersection, DeviceModel::total_id_width)
            .map(|model| model.clone());
        (winner, PairAgreement::MostSpecific)
    } else if let Some(first) = by_id.first() {
        (Some((*first).clone()), PairAgreement::SerialOnly)
    } else if let Some(first) = by_mac.first() {
        (Some((*first).clone()), PairAgreement::MacOnly)
    } else {
        (None, PairAgreement::NoMatch)
    };

    PairMatch {
        model,
        agreement,
        mac_matches: by_mac.iter().map(|m| (*m).clone()).collect(),
        serial_matches: by_id.iter().map(|m| (*m).clone()).collect(),
    }
}
