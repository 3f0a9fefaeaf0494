use std::fmt::Display;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Model {
    G500,
    G530,
    EZ1100Plus,
    EZ1300Plus,
    EZ2250i,
    RT200,
    RT230,
    ZX420,
}

impl Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use Model::*;

        let model_name = match self {
            G500 => "G500",
            G530 => "G530",
            EZ1100Plus => "EZ-1100 Plus",
            EZ1300Plus => "EZ-1300 Plus",
            EZ2250i => "EZ-2250i",
            RT200 => "RT200",
            RT230 => "RT230",
            ZX420 => "ZX420",
        };

        write!(f, "Godex {}", model_name)
    }
}

impl TryFrom<&str> for Model {
    type Error = String;

    /// Map the USB product string to a model.
    /// Vendor prefix, case, spaces and dashes do not matter.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        use Model::*;

        let normalized: String = value
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect::<String>()
            .to_uppercase();

        let normalized = normalized.strip_prefix("GODEX").unwrap_or(&normalized);

        Ok(match normalized {
            "G500" => G500,
            "G530" => G530,
            "EZ1100PLUS" => EZ1100Plus,
            "EZ1300PLUS" => EZ1300Plus,
            "EZ2250I" => EZ2250i,
            "RT200" => RT200,
            "RT230" => RT230,
            "ZX420" => ZX420,

            _ => return Err(format!("Unknown product name: {}", value)),
        })
    }
}
