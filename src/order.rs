use crate::model::ChannelRow;
use std::cmp::Ordering;

/// Digital before Analogue, then band, then name. Plain byte-wise string
/// comparison throughout, so "" sorts before any band and "PMR10" before "PMR2".
pub fn channel_order(a: &ChannelRow, b: &ChannelRow) -> Ordering {
    b.kind
        .label()
        .cmp(a.kind.label())
        .then_with(|| a.band.cmp(&b.band))
        .then_with(|| a.name.cmp(&b.name))
}

/// Stable sort by [`channel_order`], then number the rows from 1.
pub fn sort_and_number(rows: &mut [ChannelRow]) {
    rows.sort_by(channel_order);
    for (i, r) in rows.iter_mut().enumerate() {
        r.number = i + 1;
    }
}
