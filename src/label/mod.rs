use crate::config::Config;

use std::fmt::Display;

/// Turn `--key=value` command line tokens into a case-insensitive lookup.
mod args;
pub use args::Arguments;

/// Issues arrive as a (more or less) JSON list and are printed two per line.
mod issues;
pub use issues::{build_issue_lines, ParsedIssues};

/// The named tokens in the template and the options that feed them.
mod placeholder;
pub use placeholder::{Placeholder, PlaceholderSet};

/// Load the EZPL template and splice the issue lines into it.
mod template;
pub use template::{
    splice_issue_lines, Error as TemplateError, Template, ISSUE_MARKER, LEGACY_ISSUE_MARKER,
    NOTES_ANCHOR,
};

/// Option that carries the issue list.
pub const ISSUES_OPTION: &str = "issues";

/// The finished label, ready to be sent to the printer as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelDocument {
    text: String,
}

impl LabelDocument {
    /// Fill `template` from `args`, using `default_date` when no `--date` is given.
    pub fn fill(template: &Template, args: &Arguments, default_date: &str) -> Self {
        let parsed = ParsedIssues::parse(args.get(ISSUES_OPTION));

        if let ParsedIssues::Fallback(list) = &parsed {
            log::debug!("Recovered {} issue(s) from a non-JSON list.", list.len());
        }

        let issue_lines = build_issue_lines(&parsed.into_issues());
        let text = PlaceholderSet::resolve(args, default_date).apply(template.as_str());

        Self {
            text: splice_issue_lines(&text, &issue_lines),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split(issues::CRLF)
    }
}

impl Display for LabelDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Load the template named by `config` and fill it from `args`.
/// The template is read fresh on every call.
pub fn render(config: &Config, args: &Arguments) -> Result<LabelDocument, TemplateError> {
    let path = config.template_path();
    log::info!("Using label template {}", path.display());

    if args.is_empty() {
        log::warn!("No options given, the label is printed with empty fields.");
    } else {
        log::debug!("{} option(s) given.", args.len());
    }

    let template = Template::load(&path)?;
    Ok(LabelDocument::fill(&template, args, &config.default_date()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_device_and_issues() {
        let template = Template::from_text("Device: {DEVICE_NAME}\r\nNotes :");
        let args = Arguments::parse([
            "--devicename=iPhone13",
            r#"--issues=["Cracked screen","No charger"]"#,
        ]);

        let document = LabelDocument::fill(&template, &args, "01/01/2024");

        assert_eq!(
            document.as_str(),
            "Device: iPhone13\r\nNotes :\r\nAC,33,510,1,1,0,0E,Cracked screen, No charger"
        );
    }

    #[test]
    fn non_issue_lines_are_kept_one_to_one() {
        let template = Template::from_text(
            "N\n{DEVICE_NAME} {STORAGE}\nDate {DATE}\nNotes :\n{MESSAGES}\nE",
        );
        let args = Arguments::parse(["--Storage=64GB", "--issues=a,b,c"]);

        let document = LabelDocument::fill(&template, &args, "05/06/2024");
        let lines: Vec<_> = document.lines().collect();

        assert_eq!(
            lines,
            [
                "N",
                " 64GB",
                "Date 05/06/2024",
                "Notes :",
                "AC,33,510,1,1,0,0E,a, b",
                "AC,33,542,1,1,0,0E,c",
                "E",
            ]
        );
    }

    #[test]
    fn no_issues_just_drops_marker() {
        let template = Template::from_text("Notes :\n{MESSAGES}\nE");
        let document = LabelDocument::fill(&template, &Arguments::default(), "");

        assert_eq!(document.to_string(), "Notes :\r\nE");
    }
}
