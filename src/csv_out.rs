use crate::errors::AppError;
use crate::model::{ChannelKind, ChannelRow};
use csv::Writer;
use log::info;
use std::path::Path;

/// OpenGD77 channel CSV columns, in file order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Column {
    Nr,
    Name,
    Type,
    RxFreq,
    TxFreq,
    Bandwidth,
    Cc,
    Ts,
    Contact,
    TgList,
    DmrId,
    Ts1TaTx,
    Ts2TaTxId,
    RxTone,
    TxTone,
    Squelch,
    Power,
    RxOnly,
    ZoneSkip,
    AllSkip,
    Tot,
    Vox,
    NoBeep,
    NoEco,
}

pub const COLUMNS: [Column; 24] = [
    Column::Nr,
    Column::Name,
    Column::Type,
    Column::RxFreq,
    Column::TxFreq,
    Column::Bandwidth,
    Column::Cc,
    Column::Ts,
    Column::Contact,
    Column::TgList,
    Column::DmrId,
    Column::Ts1TaTx,
    Column::Ts2TaTxId,
    Column::RxTone,
    Column::TxTone,
    Column::Squelch,
    Column::Power,
    Column::RxOnly,
    Column::ZoneSkip,
    Column::AllSkip,
    Column::Tot,
    Column::Vox,
    Column::NoBeep,
    Column::NoEco,
];

impl Column {
    pub fn header(self) -> &'static str {
        match self {
            Column::Nr => "Channel Number",
            Column::Name => "Channel Name",
            Column::Type => "Channel Type",
            Column::RxFreq => "Rx Frequency",
            Column::TxFreq => "Tx Frequency",
            Column::Bandwidth => "Bandwidth",
            Column::Cc => "Colour Code",
            Column::Ts => "Timeslot",
            Column::Contact => "Contact",
            Column::TgList => "TG List",
            Column::DmrId => "DMR ID",
            Column::Ts1TaTx => "TS1_TA_Tx",
            Column::Ts2TaTxId => "TS2_TA_Tx ID",
            Column::RxTone => "RX Tone",
            Column::TxTone => "TX Tone",
            Column::Squelch => "Squelch",
            Column::Power => "Power",
            Column::RxOnly => "Rx Only",
            Column::ZoneSkip => "Zone Skip",
            Column::AllSkip => "All Skip",
            Column::Tot => "TOT",
            Column::Vox => "VOX",
            Column::NoBeep => "No Beep",
            Column::NoEco => "No Eco",
        }
    }
}

impl ChannelRow {
    /// Value for `col`, or `None` when the column belongs to the other channel type.
    pub fn field(&self, col: Column) -> Option<String> {
        let s = &self.shared;
        let value = match (col, &self.kind) {
            (Column::Nr, _) => self.number.to_string(),
            (Column::Name, _) => self.name.clone(),
            (Column::Type, k) => k.label().to_string(),
            (Column::RxFreq, _) => self.rx_freq.clone(),
            (Column::TxFreq, _) => self.tx_freq.clone(),

            (Column::Cc, ChannelKind::Digital(d)) => d.colour_code.to_string(),
            (Column::Ts, ChannelKind::Digital(d)) => d.timeslot.to_string(),
            (Column::Contact, ChannelKind::Digital(d)) => d.contact.clone(),
            (Column::TgList, ChannelKind::Digital(d)) => d.tg_list.clone(),
            (Column::DmrId, ChannelKind::Digital(d)) => d.dmr_id.clone(),
            (Column::Ts1TaTx, ChannelKind::Digital(d)) => d.ts1_ta_tx.clone(),
            (Column::Ts2TaTxId, ChannelKind::Digital(d)) => d.ts2_ta_tx_id.clone(),

            (Column::Bandwidth, ChannelKind::Analogue(a)) => a.bandwidth_khz.to_string(),
            (Column::RxTone, ChannelKind::Analogue(a)) => a.rx_tone.clone(),
            (Column::TxTone, ChannelKind::Analogue(a)) => a.tx_tone.clone(),
            (Column::Squelch, ChannelKind::Analogue(a)) => a.squelch.clone(),

            (Column::Power, _) => s.power.clone(),
            (Column::RxOnly, _) => s.rx_only.clone(),
            (Column::ZoneSkip, _) => s.zone_skip.clone(),
            (Column::AllSkip, _) => s.all_skip.clone(),
            (Column::Tot, _) => s.tot.to_string(),
            (Column::Vox, _) => s.vox.clone(),
            (Column::NoBeep, _) => s.no_beep.clone(),
            (Column::NoEco, _) => s.no_eco.clone(),

            _ => return None,
        };
        Some(value)
    }
}

/// Render the whole channel table, header included.
pub fn render_csv(rows: &[ChannelRow]) -> Result<String, AppError> {
    let mut wtr = Writer::from_writer(Vec::new());

    wtr.write_record(COLUMNS.iter().map(|c| c.header()))
        .map_err(|e| AppError::FileWrite(format!("csv write header: {}", e)))?;

    for r in rows {
        wtr.write_record(COLUMNS.iter().map(|c| r.field(*c).unwrap_or_default()))
            .map_err(|e| AppError::FileWrite(format!("csv write row: {}", e)))?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::FileWrite(format!("csv flush: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| AppError::FileWrite(format!("csv encoding: {}", e)))
}

/// Render first, then write in one go, so a failed render never leaves a partial file.
pub fn write_csv_file(rows: &[ChannelRow], out_path: &Path) -> Result<(), AppError> {
    let text = render_csv(rows)?;
    std::fs::write(out_path, text)
        .map_err(|e| AppError::FileWrite(format!("write '{}': {}", out_path.display(), e)))?;
    info!("CSV wrote {} rows to {}", rows.len(), out_path.display());
    Ok(())
}
