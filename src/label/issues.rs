/// Vertical position of the first issue line, in printer dots.
const FIRST_LINE_Y: u32 = 510;

/// Distance between two consecutive issue lines, in printer dots.
const LINE_STEP_Y: u32 = 32;

/// How many issues share one printed line.
const ISSUES_PER_LINE: usize = 2;

pub(crate) const CRLF: &str = "\r\n";

/// The outcome of reading the `issues` option, tagged with the way it was understood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedIssues {
    /// No `issues` option was given.
    Missing,
    /// The value was a proper JSON array of strings.
    Json(Vec<String>),
    /// The value was not valid JSON and had to be split by commas.
    Fallback(Vec<String>),
}

impl ParsedIssues {
    /// Shells are inconsistent about preserving quotes, so anything that is not a
    /// JSON string array is recovered as a comma-separated list.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return ParsedIssues::Missing;
        };

        // `null` is valid JSON for an absent list.
        match serde_json::from_str::<Option<Vec<String>>>(raw) {
            Ok(issues) => ParsedIssues::Json(issues.unwrap_or_default()),
            Err(err) => {
                log::debug!("Issues are not a JSON string array ({}), splitting by comma.", err);
                ParsedIssues::Fallback(split_fallback(raw))
            }
        }
    }

    pub fn issues(&self) -> &[String] {
        match self {
            ParsedIssues::Missing => &[],
            ParsedIssues::Json(issues) | ParsedIssues::Fallback(issues) => issues,
        }
    }

    pub fn into_issues(self) -> Vec<String> {
        match self {
            ParsedIssues::Missing => Vec::new(),
            ParsedIssues::Json(issues) | ParsedIssues::Fallback(issues) => issues,
        }
    }
}

fn split_fallback(raw: &str) -> Vec<String> {
    let inner = if raw.len() >= 2 && raw.starts_with('[') && raw.ends_with(']') {
        &raw[1..raw.len() - 1]
    } else {
        raw
    };

    inner
        .split(',')
        .map(|piece| piece.trim().trim_matches('"'))
        .filter(|piece| !piece.trim().is_empty())
        .map(String::from)
        .collect()
}

/// Render the issues as EZPL text records, two issues per record.
/// Returns an empty string if there are no issues.
pub fn build_issue_lines(issues: &[String]) -> String {
    issues
        .chunks(ISSUES_PER_LINE)
        .zip((FIRST_LINE_Y..).step_by(LINE_STEP_Y as usize))
        .map(|(pair, y)| format!("AC,33,{},1,1,0,0E,{}", y, pair.join(", ")))
        .collect::<Vec<_>>()
        .join(CRLF)
}
