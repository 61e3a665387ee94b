use std::fmt::{self, Display, Formatter};

use mac_range_core::{all_matching, MacAddr, Span};
use serde::Serialize;

/// The two OUI prefixes Suprema ships devices under.
pub const MANUFACTURER_PREFIXES: [[u8; 3]; 2] = [[0x00, 0x17, 0xFC], [0x00, 0x17, 0xFB]];

/// True when the MAC carries one of the recognized manufacturer prefixes.
pub fn is_manufacturer_mac(mac: MacAddr) -> bool {
    MANUFACTURER_PREFIXES.contains(&mac.oui())
}

/// Hardware generation of a model family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Generation {
    First,
    Second,
}

impl Generation {
    pub fn number(self) -> u8 {
        match self {
            Generation::First => 1,
            Generation::Second => 2,
        }
    }

    pub fn from_number(value: u8) -> Option<Self> {
        match value {
            1 => Some(Generation::First),
            2 => Some(Generation::Second),
            _ => None,
        }
    }
}

impl Display for Generation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// One hardware model family with its declared MAC and Device-ID ranges.
///
/// Ranges of different records may overlap; that overlap is the source
/// of ambiguity the resolvers report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceModel {
    pub name: String,
    pub generation: Generation,
    pub mac_spans: Vec<Span<u64>>,
    pub id_spans: Vec<Span<u32>>,
}

impl DeviceModel {
    /// Summed width of all Device-ID spans, the "specificity" metric.
    pub fn total_id_width(&self) -> u64 {
        self.id_spans.iter().map(Span::width).sum()
    }

    /// First three octets of the model's canonical MAC range start.
    pub fn mac_prefix(&self) -> [u8; 3] {
        MacAddr::from_value(self.mac_spans[0].start).oui()
    }

    /// Fourth octet of the model's canonical MAC range start.
    ///
    /// Read off the declared range rather than derived from the ID,
    /// because ID ranges do not bit-align with MAC ranges for every
    /// model.
    pub fn model_byte(&self) -> u8 {
        MacAddr::from_value(self.mac_spans[0].start).model_byte()
    }

    /// Fourth-octet intervals covered by this model's MAC ranges.
    pub fn model_byte_spans(&self) -> Vec<Span<u8>> {
        self.mac_spans
            .iter()
            .map(|span| {
                Span::new(
                    MacAddr::from_value(span.start).model_byte(),
                    MacAddr::from_value(span.end).model_byte(),
                )
            })
            .collect()
    }

    /// Row-highlight predicate for the reference tables.
    pub fn contains_model_byte(&self, byte: u8) -> bool {
        self.model_byte_spans().iter().any(|span| span.contains(byte))
    }
}

/// Immutable table of known device models, in published-table order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    models: Vec<DeviceModel>,
}

impl Catalog {
    pub fn new(models: Vec<DeviceModel>) -> Self {
        Self { models }
    }

    pub fn models(&self) -> &[DeviceModel] {
        &self.models
    }

    /// Every model whose Device-ID ranges contain `id`, catalog order.
    pub fn matching_id(&self, id: u32) -> Vec<&DeviceModel> {
        all_matching(&self.models, id, |m| m.id_spans.as_slice())
    }

    /// Every model whose MAC ranges contain `mac`, catalog order.
    pub fn matching_mac(&self, mac: MacAddr) -> Vec<&DeviceModel> {
        all_matching(&self.models, mac.value(), |m| m.mac_spans.as_slice())
    }

    /// Transcribed from the manufacturer's published range table.
    /// Do not adjust bounds without consulting that table.
    pub fn builtin() -> Self {
        Self::new(vec![
            // 1st generation
            model(
                "BioStation",
                Generation::First,
                &[(0x0017_FC34_0000, 0x0017_FC3F_FFFF)],
                &[(540_278_784, 541_065_215)],
            ),
            model(
                "BioEntry Plus",
                Generation::First,
                &[(0x0017_FC25_0000, 0x0017_FC2F_FFFF)],
                &[(539_295_744, 540_016_639)],
            ),
            model(
                "BioLite Net",
                Generation::First,
                &[(0x0017_FC11_0000, 0x0017_FC1F_FFFF)],
                &[(537_985_024, 538_968_063)],
            ),
            model(
                "XPass",
                Generation::First,
                &[(0x0017_FC72_0000, 0x0017_FC7F_FFFF)],
                &[(544_342_016, 545_259_519)],
            ),
            model(
                "XPass Slim/S2",
                Generation::First,
                &[(0x0017_FC80_0000, 0x0017_FC8F_FFFF)],
                &[(545_259_520, 546_308_095)],
            ),
            model(
                "D-Station",
                Generation::First,
                &[(0x0017_FC31_0000, 0x0017_FC32_FFFF)],
                &[(540_082_176, 540_213_274)],
            ),
            model(
                "X-Station",
                Generation::First,
                &[(0x0017_FC90_0000, 0x0017_FC97_FFFF)],
                &[(546_308_096, 546_832_383)],
            ),
            model(
                "BioStation T2",
                Generation::First,
                &[(0x0017_FC41_0000, 0x0017_FC4F_FFFF)],
                &[(541_130_752, 542_113_791)],
            ),
            model(
                "FaceStation",
                Generation::First,
                &[(0x0017_FC51_0000, 0x0017_FC5F_FFFF)],
                &[(542_179_328, 543_162_367)],
            ),
            model(
                "BioEntry Plus W",
                Generation::First,
                &[(0x0017_FC61_0000, 0x0017_FC6F_FFFF)],
                &[(543_227_904, 544_210_943)],
            ),
            // 2nd generation
            model(
                "BioStation A2 (OMPW)",
                Generation::Second,
                &[(0x0017_FC98_0000, 0x0017_FC9E_0000)],
                &[(546_832_384, 547_232_383)],
            ),
            model(
                "BioStation A2 (OEPW)",
                Generation::Second,
                &[(0x0017_FC9E_0000, 0x0017_FCA4_0000)],
                &[(547_232_384, 547_632_383)],
            ),
            model(
                "BioStation A2 (OIPW)",
                Generation::Second,
                &[(0x0017_FCA4_0000, 0x0017_FCA5_0000)],
                &[(547_632_384, 547_732_383)],
            ),
            model(
                "BioStation A2 (OHPW)",
                Generation::Second,
                &[(0x0017_FCA5_0000, 0x0017_FCA7_0000)],
                &[(547_732_384, 547_832_383)],
            ),
            model(
                "BioStation L2",
                Generation::Second,
                &[(0x0017_FC55_0000, 0x0017_FC5F_0000)],
                &[(542_500_000, 543_159_999)],
            ),
            model(
                "BioEntry W2 (OAP)",
                Generation::Second,
                &[(0x0017_FC6E_0000, 0x0017_FC6F_0000)],
                &[(544_108_000, 544_157_999)],
            ),
            model(
                "BioEntry W2 (ODP)",
                Generation::Second,
                &[(0x0017_FC6E_0000, 0x0017_FC6F_0000)],
                &[(544_158_000, 544_207_999)],
            ),
            model(
                "BioEntry W2 (OHP)",
                Generation::Second,
                &[(0x0017_FC6F_0000, 0x0017_FC70_0000)],
                &[(544_208_000, 544_257_999)],
            ),
            // A2 series ships under the second OUI and carries a legacy
            // alias ID range alongside the hex-aligned one.
            model(
                "BioStation A2",
                Generation::Second,
                &[(0x0017_FB00_0000, 0x0017_FBFF_FFFF)],
                &[(939_254_096, 939_254_096), (553_378_128, 553_648_127)],
            ),
            model(
                "CoreStation",
                Generation::Second,
                &[(0x0017_FC4F_0000, 0x0017_FC50_0000)],
                &[(542_070_001, 542_170_000)],
            ),
            model(
                "FaceStation 2 (AWB)",
                Generation::Second,
                &[(0x0017_FC51_0000, 0x0017_FC51_0000)],
                &[(542_189_330, 542_219_329)],
            ),
            model(
                "FaceStation 2 (D)",
                Generation::Second,
                &[(0x0017_FC53_0000, 0x0017_FC55_0000)],
                &[(542_393_930, 542_499_329)],
            ),
            model(
                "BioEntry P2 (OA)",
                Generation::Second,
                &[(0x0017_FC48_0000, 0x0017_FC48_0000)],
                &[(541_150_001, 541_610_000)],
            ),
            model(
                "BioEntry P2 (OD)",
                Generation::Second,
                &[(0x0017_FC48_0000, 0x0017_FC4F_0000)],
                &[(541_610_001, 542_070_000)],
            ),
        ])
    }
}

fn model(
    name: &str,
    generation: Generation,
    mac_spans: &[(u64, u64)],
    id_spans: &[(u32, u32)],
) -> DeviceModel {
    DeviceModel {
        name: name.to_string(),
        generation,
        mac_spans: mac_spans
            .iter()
            .map(|&(start, end)| Span::new(start, end))
            .collect(),
        id_spans: id_spans
            .iter()
            .map(|&(start, end)| Span::new(start, end))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use mac_range_core::MacAddr;
    use pretty_assertions::assert_eq;

    use super::{is_manufacturer_mac, Catalog, Generation};

    #[test]
    fn builtin_table_is_well_formed() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.models().len(), 24);

        for model in catalog.models() {
            assert!(!model.name.is_empty());
            assert!(!model.mac_spans.is_empty(), "{} has no MAC span", model.name);
            assert!(!model.id_spans.is_empty(), "{} has no ID span", model.name);
            for span in &model.mac_spans {
                assert!(span.start <= span.end, "{} MAC span inverted", model.name);
            }
            for span in &model.id_spans {
                assert!(span.start <= span.end, "{} ID span inverted", model.name);
            }
        }
    }

    #[test]
    fn every_builtin_mac_span_sits_under_a_known_prefix() {
        for model in Catalog::builtin().models() {
            for span in &model.mac_spans {
                assert!(is_manufacturer_mac(MacAddr::from_value(span.start)));
                assert!(is_manufacturer_mac(MacAddr::from_value(span.end)));
            }
        }
    }

    #[test]
    fn matching_id_returns_overlaps_in_catalog_order() {
        let catalog = Catalog::builtin();
        // 544150000 sits inside both BioEntry Plus W (gen 1) and
        // BioEntry W2 (OAP).
        let hits = catalog.matching_id(544_150_000);
        let names: Vec<&str> = hits.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["BioEntry Plus W", "BioEntry W2 (OAP)"]);
    }

    #[test]
    fn matching_mac_handles_both_prefixes() {
        let catalog = Catalog::builtin();

        let xpass: MacAddr = "00:17:FC:73:4A:B0".parse().expect("mac");
        let names: Vec<&str> = catalog
            .matching_mac(xpass)
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(names, vec!["XPass"]);

        let a2: MacAddr = "00:17:FB:12:34:56".parse().expect("mac");
        let names: Vec<&str> = catalog
            .matching_mac(a2)
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(names, vec!["BioStation A2"]);
    }

    #[test]
    fn model_byte_reads_the_fourth_octet_of_the_first_span() {
        let catalog = Catalog::builtin();
        let xpass = catalog
            .models()
            .iter()
            .find(|m| m.name == "XPass")
            .expect("XPass record");
        assert_eq!(xpass.model_byte(), 0x72);
        assert_eq!(xpass.mac_prefix(), [0x00, 0x17, 0xFC]);
        assert!(xpass.contains_model_byte(0x73));
        assert!(!xpass.contains_model_byte(0x80));
    }

    #[test]
    fn generation_round_trips_through_numbers() {
        assert_eq!(Generation::from_number(1), Some(Generation::First));
        assert_eq!(Generation::from_number(2), Some(Generation::Second));
        assert_eq!(Generation::from_number(3), None);
        assert_eq!(Generation::Second.to_string(), "2");
    }
}
