use crate::model::{AnalogueSettings, ChannelKind, ChannelRow, DigitalSettings, RepeaterRecord, NONE};
use log::{debug, warn};

pub const DEFAULT_TALKGROUP: &str = "Brandmeister";

const MODE_FM: &str = "FM";
const MODE_MOTOTRBO: &str = "MOTOTRBO";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RadioMode {
    Analogue,
    Digital,
}

impl RadioMode {
    /// Directory mode tags the radio can use; anything else is not exported.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            MODE_FM => Some(RadioMode::Analogue),
            MODE_MOTOTRBO => Some(RadioMode::Digital),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ChannelConfig {
    pub callsigns: Vec<String>,
    pub talkgroup: String,
}

impl ChannelConfig {
    pub fn accept(&self, r: &RepeaterRecord) -> bool {
        self.callsigns.iter().any(|c| *c == r.callsign)
    }
}

/// Channel rows for one repeater, one per recognised mode, in the order the
/// directory lists the modes. Rows come back unnumbered.
pub fn expand_repeater(r: &RepeaterRecord, talkgroup: &str) -> Vec<ChannelRow> {
    // The radio listens on the repeater's output and transmits on its input.
    let (Some(rx_freq), Some(tx_freq)) = (r.frequency("tx"), r.frequency("rx")) else {
        warn!("{}: missing rx/tx frequency, skipped", r.callsign);
        return Vec::new();
    };
    let tx_tone = r.tone("rx").unwrap_or(NONE);

    let mut modes: Vec<RadioMode> = Vec::new();
    for m in r.modes.iter().filter_map(|m| RadioMode::from_tag(m)) {
        if !modes.contains(&m) {
            modes.push(m);
        }
    }

    modes
        .into_iter()
        .map(|m| {
            let kind = match m {
                RadioMode::Digital => ChannelKind::Digital(DigitalSettings::new(talkgroup)),
                RadioMode::Analogue => ChannelKind::Analogue(AnalogueSettings::new(tx_tone)),
            };
            ChannelRow::new(&r.callsign, &r.band, rx_freq, tx_freq, kind)
        })
        .collect()
}

pub fn build_channels(records: &[RepeaterRecord], cfg: &ChannelConfig) -> Vec<ChannelRow> {
    let matched: Vec<&RepeaterRecord> = records.iter().filter(|r| cfg.accept(r)).collect();
    debug!("{} of {} repeaters match the requested callsigns", matched.len(), records.len());

    matched
        .into_iter()
        .flat_map(|r| expand_repeater(r, &cfg.talkgroup))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Tagged;

    fn tagged(tag: &str, value: &str) -> Tagged {
        Tagged { tag: tag.into(), value: value.into() }
    }

    fn repeater(callsign: &str, modes: &[&str]) -> RepeaterRecord {
        RepeaterRecord {
            callsign: callsign.into(),
            band: "2m".into(),
            frequencies: vec![tagged("tx", "145.600"), tagged("rx", "145.000")],
            modes: modes.iter().map(|m| m.to_string()).collect(),
            tones: vec![tagged("tx", "71.9"), tagged("rx", "88.5")],
        }
    }

    fn config(callsigns: &[&str]) -> ChannelConfig {
        ChannelConfig {
            callsigns: callsigns.iter().map(|c| c.to_string()).collect(),
            talkgroup: DEFAULT_TALKGROUP.into(),
        }
    }

    #[test]
    fn test_dual_mode_repeater() {
        let rows = build_channels(&[repeater("SR1ABC", &["FM", "MOTOTRBO"])], &config(&["SR1ABC"]));
        assert_eq!(rows.len(), 2);

        let analogue = &rows[0];
        assert_eq!(analogue.kind.label(), "Analogue");
        assert_eq!(analogue.name, "SR1ABC");
        assert_eq!(analogue.rx_freq, "145.600");
        assert_eq!(analogue.tx_freq, "145.000");
        match &analogue.kind {
            ChannelKind::Analogue(a) => {
                assert_eq!(a.bandwidth_khz, 12.5);
                assert_eq!(a.tx_tone, "88.5");
                assert_eq!(a.rx_tone, "None");
                assert_eq!(a.squelch, "Disabled");
            }
            other => panic!("expected analogue, got {:?}", other),
        }

        let digital = &rows[1];
        assert_eq!(digital.name, analogue.name);
        assert_eq!(digital.rx_freq, analogue.rx_freq);
        assert_eq!(digital.tx_freq, analogue.tx_freq);
        match &digital.kind {
            ChannelKind::Digital(d) => {
                assert_eq!(d.colour_code, 1);
                assert_eq!(d.timeslot, 1);
                assert_eq!(d.contact, "None");
                assert_eq!(d.tg_list, "Brandmeister");
                assert_eq!(d.dmr_id, "None");
                assert_eq!(d.ts1_ta_tx, "Off");
                assert_eq!(d.ts2_ta_tx_id, "Off");
            }
            other => panic!("expected digital, got {:?}", other),
        }
        assert_eq!(digital.shared, analogue.shared);
        assert_eq!(digital.number, 0);
    }

    #[test]
    fn test_filter_is_exact_and_case_sensitive() {
        let records = vec![
            repeater("SR1ABC", &["FM"]),
            repeater("SR2XYZ", &["FM"]),
            repeater("sr3low", &["FM"]),
        ];
        let rows = build_channels(&records, &config(&["SR1ABC", "SR3LOW", "SR9NOPE"]));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "SR1ABC");
    }

    #[test]
    fn test_unknown_modes_ignored() {
        let rows = build_channels(
            &[repeater("SR1ABC", &["D-STAR", "C4FM", "MOTOTRBO"])],
            &config(&["SR1ABC"]),
        );
        assert_eq!(rows.len(), 1);
        assert!(rows[0].is_digital());
    }

    #[test]
    fn test_repeated_mode_emitted_once() {
        let rows = expand_repeater(&repeater("SR1ABC", &["FM", "FM"]), DEFAULT_TALKGROUP);
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_missing_ctcss_gives_none() {
        let mut r = repeater("SR1ABC", &["FM"]);
        r.tones.clear();
        let rows = expand_repeater(&r, DEFAULT_TALKGROUP);
        match &rows[0].kind {
            ChannelKind::Analogue(a) => assert_eq!(a.tx_tone, "None"),
            other => panic!("expected analogue, got {:?}", other),
        }
    }

    #[test]
    fn test_only_tx_tagged_ctcss_gives_none() {
        let mut r = repeater("SR1ABC", &["FM"]);
        r.tones = vec![tagged("tx", "71.9")];
        let rows = expand_repeater(&r, DEFAULT_TALKGROUP);
        match &rows[0].kind {
            ChannelKind::Analogue(a) => assert_eq!(a.tx_tone, "None"),
            other => panic!("expected analogue, got {:?}", other),
        }
    }

    #[test]
    fn test_custom_talkgroup() {
        let rows = expand_repeater(&repeater("SR1ABC", &["MOTOTRBO"]), "TG Polska");
        match &rows[0].kind {
            ChannelKind::Digital(d) => assert_eq!(d.tg_list, "TG Polska"),
            other => panic!("expected digital, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_frequency_skips_repeater() {
        let mut r = repeater("SR1ABC", &["FM", "MOTOTRBO"]);
        r.frequencies.retain(|f| f.tag != "rx");
        assert!(expand_repeater(&r, DEFAULT_TALKGROUP).is_empty());
    }
}
