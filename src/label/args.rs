use std::collections::HashMap;

/// Prefix every option token has to carry.
const OPTION_PREFIX: &str = "--";

/// Options given as `--key=value`, looked up case-insensitively.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Arguments {
    values: HashMap<String, String>,
}

impl Arguments {
    /// Collect all `--key=value` tokens. Anything else is dropped without complaint.
    /// The program name must not be part of `tokens`.
    pub fn parse<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut values = HashMap::new();

        for token in tokens {
            let token = token.as_ref();

            let Some(option) = token.strip_prefix(OPTION_PREFIX) else {
                log::debug!("Ignoring argument without option prefix: {:?}", token);
                continue;
            };

            // Only the first `=` separates, the value may contain more of them.
            let Some((name, value)) = option.split_once('=') else {
                log::debug!("Ignoring option without value: {:?}", token);
                continue;
            };

            // Later occurrences overwrite earlier ones.
            values.insert(name.to_lowercase(), String::from(value));
        }

        Self { values }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(&name.to_lowercase()).map(String::as_str)
    }

    pub fn get_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.get(name).unwrap_or(default)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
