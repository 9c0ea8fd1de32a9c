use crate::errors::AppError;
use crate::model::{RepeaterRecord, Tagged};
use log::{debug, trace};
use quick_xml::events::Event;
use quick_xml::Reader;
use serde::Deserialize;

const ROOT_ELEMENT: &str = "rxf";

// The directory wraps every child in a list, singular or not, so the raw
// shapes below keep everything as a Vec and the record builder collapses them.

#[derive(Debug, Deserialize)]
struct RawDirectory {
    #[serde(default)]
    repeaters: Vec<RawRepeaterList>,
}

#[derive(Debug, Deserialize)]
struct RawRepeaterList {
    #[serde(default)]
    repeater: Vec<RawRepeater>,
}

#[derive(Debug, Deserialize)]
struct RawRepeater {
    #[serde(default)]
    qra: Vec<String>,
    #[serde(default)]
    band: Vec<String>,
    #[serde(default)]
    qrg: Vec<RawTagged>,
    #[serde(default)]
    ctcss: Vec<RawTagged>,
    #[serde(default)]
    mode: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawTagged {
    #[serde(rename = "@type", default)]
    kind: String,
    #[serde(rename = "$text", default)]
    text: String,
}

#[inline]
fn first_or_default(values: &[String]) -> String {
    values.first().map(|s| s.trim().to_string()).unwrap_or_default()
}

fn tagged(raw: Vec<RawTagged>) -> Vec<Tagged> {
    raw.into_iter()
        .map(|t| Tagged { tag: t.kind.trim().to_string(), value: t.text.trim().to_string() })
        .collect()
}

impl From<RawRepeater> for RepeaterRecord {
    fn from(r: RawRepeater) -> Self {
        RepeaterRecord {
            callsign: first_or_default(&r.qra),
            band: first_or_default(&r.band),
            frequencies: tagged(r.qrg),
            modes: r.mode.iter().map(|m| m.trim().to_string()).collect(),
            tones: tagged(r.ctcss),
        }
    }
}

fn root_element(xml: &str) -> Result<String, AppError> {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                return Ok(String::from_utf8_lossy(e.name().as_ref()).into_owned());
            }
            Ok(Event::Eof) => return Err(AppError::Parse("document has no root element".into())),
            Ok(_) => {}
            Err(e) => {
                return Err(AppError::Parse(format!(
                    "malformed XML at byte {}: {}",
                    reader.error_position(),
                    e
                )))
            }
        }
    }
}

/// Decode a przemienniki.net `rxf` export into repeater records, in document order.
pub fn parse_directory(xml: &str) -> Result<Vec<RepeaterRecord>, AppError> {
    let root = root_element(xml)?;
    if root != ROOT_ELEMENT {
        return Err(AppError::Parse(format!(
            "expected <{}> root element, found <{}>",
            ROOT_ELEMENT, root
        )));
    }

    let raw: RawDirectory = quick_xml::de::from_str(xml)
        .map_err(|e| AppError::Parse(format!("decode repeater directory: {}", e)))?;

    let Some(list) = raw.repeaters.into_iter().next() else {
        return Err(AppError::Parse("no <repeaters> collection under <rxf>".into()));
    };

    let records: Vec<RepeaterRecord> = list
        .repeater
        .into_iter()
        .map(RepeaterRecord::from)
        .inspect(|r| trace!("repeater {} band={} modes={:?}", r.callsign, r.band, r.modes))
        .collect();

    debug!("directory holds {} repeaters", records.len());
    Ok(records)
}
