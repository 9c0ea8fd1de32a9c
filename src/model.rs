/// Placeholder used by the radio for "no value" in tone, contact and ID columns.
pub const NONE: &str = "None";

/// A `type`-attributed value from the directory, e.g. `<qrg type="rx">145.000</qrg>`.
#[derive(Clone, Debug, PartialEq)]
pub struct Tagged {
    pub tag: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RepeaterRecord {
    pub callsign: String,
    pub band: String,
    pub frequencies: Vec<Tagged>,
    pub modes: Vec<String>,
    pub tones: Vec<Tagged>,
}

impl RepeaterRecord {
    /// First frequency carrying `tag` ("rx" or "tx"), kept as the directory wrote it.
    pub fn frequency(&self, tag: &str) -> Option<&str> {
        first_tagged(&self.frequencies, tag)
    }

    /// First CTCSS tone carrying `tag`.
    pub fn tone(&self, tag: &str) -> Option<&str> {
        first_tagged(&self.tones, tag)
    }
}

fn first_tagged<'a>(entries: &'a [Tagged], tag: &str) -> Option<&'a str> {
    entries
        .iter()
        .find(|e| e.tag == tag)
        .map(|e| e.value.as_str())
        .filter(|v| !v.is_empty())
}

#[derive(Clone, Debug, PartialEq)]
pub struct DigitalSettings {
    pub colour_code: u8,
    pub timeslot: u8,
    pub contact: String,
    pub tg_list: String,
    pub dmr_id: String,
    pub ts1_ta_tx: String,
    pub ts2_ta_tx_id: String,
}

impl DigitalSettings {
    pub fn new(tg_list: &str) -> Self {
        Self {
            colour_code: 1,
            timeslot: 1,
            contact: NONE.into(),
            tg_list: tg_list.to_string(),
            dmr_id: NONE.into(),
            ts1_ta_tx: "Off".into(),
            ts2_ta_tx_id: "Off".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnalogueSettings {
    pub bandwidth_khz: f64,
    pub rx_tone: String,
    pub tx_tone: String,
    pub squelch: String,
}

impl AnalogueSettings {
    pub fn new(tx_tone: &str) -> Self {
        Self {
            bandwidth_khz: 12.5,
            rx_tone: NONE.into(),
            tx_tone: tx_tone.to_string(),
            squelch: "Disabled".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ChannelKind {
    Digital(DigitalSettings),
    Analogue(AnalogueSettings),
}

impl ChannelKind {
    pub fn label(&self) -> &'static str {
        match self {
            ChannelKind::Digital(_) => "Digital",
            ChannelKind::Analogue(_) => "Analogue",
        }
    }
}

/// Radio behaviour fields every exported channel carries, whatever its mode.
#[derive(Clone, Debug, PartialEq)]
pub struct SharedSettings {
    pub power: String,
    pub rx_only: String,
    pub zone_skip: String,
    pub all_skip: String,
    pub tot: u32,
    pub vox: String,
    pub no_beep: String,
    pub no_eco: String,
}

impl Default for SharedSettings {
    fn default() -> Self {
        Self {
            power: "Master".into(),
            rx_only: "No".into(),
            zone_skip: "No".into(),
            all_skip: "No".into(),
            tot: 0,
            vox: "Off".into(),
            no_beep: "No".into(),
            no_eco: "No".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChannelRow {
    /// 1-based position in the export; 0 until the rows are numbered.
    pub number: usize,
    pub name: String,
    pub band: String,
    pub rx_freq: String,
    pub tx_freq: String,
    pub kind: ChannelKind,
    pub shared: SharedSettings,
}

impl ChannelRow {
    pub fn new(name: &str, band: &str, rx_freq: &str, tx_freq: &str, kind: ChannelKind) -> Self {
        Self {
            number: 0,
            name: name.to_string(),
            band: band.to_string(),
            rx_freq: rx_freq.to_string(),
            tx_freq: tx_freq.to_string(),
            kind,
            shared: SharedSettings::default(),
        }
    }

    pub fn is_digital(&self) -> bool {
        matches!(self.kind, ChannelKind::Digital(_))
    }
}
