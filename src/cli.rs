use crate::channels::{ChannelConfig, DEFAULT_TALKGROUP};
use crate::source::{DirectorySource, DIRECTORY_URL};
use argparse::{ArgumentParser, List, Store, StoreOption, StoreTrue};
use std::path::PathBuf;

pub struct CliArgs {
    pub callsigns: Vec<String>,
    pub output: PathBuf,
    pub talkgroup: String,
    pub pmr: bool,
    pub xml: Option<PathBuf>,
    pub url: String,
    pub log_level: String,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            callsigns: vec![],
            output: PathBuf::from("Channels.csv"),
            talkgroup: DEFAULT_TALKGROUP.into(),
            pmr: false,
            xml: None,
            url: DIRECTORY_URL.into(),
            log_level: "essential".into(),
        }
    }
}

impl CliArgs {
    pub fn source(&self) -> DirectorySource {
        match &self.xml {
            Some(path) => DirectorySource::File(path.clone()),
            None => DirectorySource::Url(self.url.clone()),
        }
    }

    pub fn channel_config(&self) -> ChannelConfig {
        ChannelConfig {
            callsigns: self.callsigns.clone(),
            talkgroup: self.talkgroup.clone(),
        }
    }
}

pub fn parse_cli() -> CliArgs {
    let mut args = CliArgs::default();
    {
        let mut ap = ArgumentParser::new();
        ap.set_description(
            "Fetches specified repeaters from przemienniki.net and exports them to a OpenGD77 compatible CSV",
        );
        ap.refer(&mut args.callsigns)
            .add_argument("callsigns", List, "Callsigns of repeaters to export")
            .required();
        ap.refer(&mut args.output)
            .add_option(&["-o", "--output"], Store, "File that the CSV will be saved in, default is Channels.csv");
        ap.refer(&mut args.talkgroup)
            .add_option(&["-t", "--talkgroup"], Store, "Talkgroup list to set in DMR channels, default is 'Brandmeister'");
        ap.refer(&mut args.pmr)
            .add_option(&["-p", "--pmr"], StoreTrue, "Add PMR channels 1-16 to export");
        ap.refer(&mut args.xml)
            .add_option(&["--xml"], StoreOption, "Read the repeater directory from a local rxf XML file");
        ap.refer(&mut args.url)
            .add_option(&["--url"], Store, "Repeater directory URL");
        ap.refer(&mut args.log_level)
            .add_option(&["--log"], Store, "Log level (essential|debug|trace|warn|error)");
        ap.parse_args_or_exit();
    }
    args
}
