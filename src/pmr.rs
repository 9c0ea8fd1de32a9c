use crate::model::{AnalogueSettings, ChannelKind, ChannelRow, NONE};

pub const PMR_CHANNELS: usize = 16;

const PMR1_HZ: u64 = 446_006_250;
const PMR_SPACING_HZ: u64 = 12_500;

/// Frequency of PMR channel `channel` (1-based) in MHz, 9 significant digits.
pub fn pmr_frequency(channel: usize) -> String {
    let hz = PMR1_HZ + (channel as u64 - 1) * PMR_SPACING_HZ;
    format!("{}.{:06}", hz / 1_000_000, hz % 1_000_000)
}

pub fn pmr_channels() -> Vec<ChannelRow> {
    (1..=PMR_CHANNELS)
        .map(|i| {
            let freq = pmr_frequency(i);
            let kind = ChannelKind::Analogue(AnalogueSettings::new(NONE));
            ChannelRow::new(&format!("PMR{}", i), "", &freq, &freq, kind)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pmr_frequencies() {
        assert_eq!(pmr_frequency(1), "446.006250");
        assert_eq!(pmr_frequency(2), "446.018750");
        assert_eq!(pmr_frequency(8), "446.093750");
        assert_eq!(pmr_frequency(9), "446.106250");
        assert_eq!(pmr_frequency(16), "446.193750");
    }

    #[test]
    fn test_pmr_channels() {
        let rows = pmr_channels();
        assert_eq!(rows.len(), 16);
        for (i, r) in rows.iter().enumerate() {
            assert_eq!(r.name, format!("PMR{}", i + 1));
            assert_eq!(r.band, "");
            assert_eq!(r.rx_freq, r.tx_freq);
            assert_eq!(r.rx_freq.chars().filter(|c| c.is_ascii_digit()).count(), 9);
            match &r.kind {
                ChannelKind::Analogue(a) => {
                    assert_eq!(a.tx_tone, "None");
                    assert_eq!(a.rx_tone, "None");
                    assert_eq!(a.squelch, "Disabled");
                }
                other => panic!("expected analogue, got {:?}", other),
            }
        }
    }
}
