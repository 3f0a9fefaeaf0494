use super::Arguments;

use std::fmt::Display;

/// The tokens a label template may contain, in the order they are replaced.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Placeholder {
    DeviceName,
    Storage,
    ModelNumber,
    ICloudState,
    FmiState,
    SimState,
    MdmState,
    Color,
    IosVersion,
    Battery,
    Port,
    Imei,
    Date,
}

impl Placeholder {
    pub const ALL: [Placeholder; 13] = [
        Placeholder::DeviceName,
        Placeholder::Storage,
        Placeholder::ModelNumber,
        Placeholder::ICloudState,
        Placeholder::FmiState,
        Placeholder::SimState,
        Placeholder::MdmState,
        Placeholder::Color,
        Placeholder::IosVersion,
        Placeholder::Battery,
        Placeholder::Port,
        Placeholder::Imei,
        Placeholder::Date,
    ];

    /// The literal text in the template.
    pub fn token(&self) -> &'static str {
        use Placeholder::*;

        match self {
            DeviceName => "{DEVICE_NAME}",
            Storage => "{STORAGE}",
            ModelNumber => "{MODEL_NUMBER}",
            ICloudState => "{ICLOUD_STATE}",
            FmiState => "{FMI_STATE}",
            SimState => "{SIM_STATE}",
            MdmState => "{MDM_STATE}",
            Color => "{COLOR}",
            IosVersion => "{IOS_VERSION}",
            Battery => "{BATTERY}",
            Port => "{PORT}",
            Imei => "{IMEI}",
            Date => "{DATE}",
        }
    }

    /// The command line option that feeds this placeholder.
    pub fn option(&self) -> &'static str {
        use Placeholder::*;

        match self {
            DeviceName => "devicename",
            Storage => "storage",
            ModelNumber => "modelnumber",
            ICloudState => "icloudstate",
            FmiState => "fmistate",
            SimState => "simstate",
            MdmState => "mdmstate",
            Color => "color",
            IosVersion => "iosversion",
            Battery => "battery",
            Port => "port",
            Imei => "imei",
            Date => "date",
        }
    }
}

impl Display for Placeholder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Every placeholder paired with the value it is replaced by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderSet {
    values: Vec<(Placeholder, String)>,
}

impl PlaceholderSet {
    /// Look up each placeholder's option. Missing options become empty strings,
    /// except for the date, which falls back to `default_date`.
    pub fn resolve(args: &Arguments, default_date: &str) -> Self {
        let values = Placeholder::ALL
            .iter()
            .map(|&placeholder| {
                let default = match placeholder {
                    Placeholder::Date => default_date,
                    _ => "",
                };

                (placeholder, String::from(args.get_or(placeholder.option(), default)))
            })
            .collect();

        Self { values }
    }

    pub fn get(&self, placeholder: Placeholder) -> &str {
        self.values
            .iter()
            .find(|(p, _)| *p == placeholder)
            .map_or("", |(_, value)| value.as_str())
    }

    /// Replace every occurrence of every token in `text`.
    pub fn apply(&self, text: &str) -> String {
        self.values
            .iter()
            .fold(String::from(text), |text, (placeholder, value)| {
                text.replace(placeholder.token(), value)
            })
    }
}
