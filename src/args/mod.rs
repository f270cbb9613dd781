//! Command-line argument parser
//!
//! Classifies every raw token as a positional argument, an option key, or
//! the value consumed by the option key before it:
//!
//! - `--key=value` sets `key` to `value` verbatim (the value may be empty)
//! - `--key value` consumes the next token when it does not start with `-`
//! - `--key` alone is a flag
//! - `-k=value` sets the single-character key `k`
//! - `-abc` sets `a`, `b` and `c` as flags
//! - `-k value` consumes the next token for a single short key
//! - anything else is positional
//!
//! A key that is given again without a value keeps what it already holds.
//! A value-taking form at the end of input falls back to a flag.

use crate::types::{InstallerError, OptionValue, ParsedArguments};
use std::collections::BTreeMap;
use std::ffi::OsString;

/// Parse OS-level arguments, rejecting any that are not valid UTF-8
pub fn parse_os<I>(tokens: I) -> Result<ParsedArguments, InstallerError>
where
    I: IntoIterator<Item = OsString>,
{
    let tokens = tokens
        .into_iter()
        .map(|token| {
            token.into_string().map_err(|raw| {
                InstallerError::Config(format!(
                    "Argument is not valid UTF-8: {:?}",
                    raw.to_string_lossy()
                ))
            })
        })
        .collect::<Result<Vec<String>, _>>()?;
    Ok(parse(tokens))
}

/// Parse raw tokens (without the program name) into arguments and options
///
/// # Example
/// ```
/// use ide_config_installer::args::parse;
/// use ide_config_installer::OptionValue;
///
/// let parsed = parse(["install", "-i", "9"]);
/// assert_eq!(parsed.positional, vec!["install".to_string()]);
/// assert_eq!(parsed.option("i"), Some(&OptionValue::Value("9".to_string())));
/// ```
pub fn parse<I, S>(tokens: I) -> ParsedArguments
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
    let mut positional = Vec::new();
    let mut options: BTreeMap<String, OptionValue> = BTreeMap::new();

    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        let next_value = tokens.get(i + 1).filter(|next| !next.starts_with('-'));

        if let Some(long) = token.strip_prefix("--") {
            match long.split_once('=') {
                Some((key, value)) => {
                    options.insert(key.to_string(), OptionValue::Value(value.to_string()));
                }
                None => {
                    let value = match next_value {
                        Some(next) => {
                            i += 1;
                            OptionValue::Value(next.clone())
                        }
                        None => previous_or_flag(&options, long),
                    };
                    options.insert(long.to_string(), value);
                }
            }
        } else if let Some(short) = token.strip_prefix('-') {
            let chars: Vec<char> = short.chars().collect();

            if chars.len() >= 2 && chars[1] == '=' {
                let value: String = chars[2..].iter().collect();
                options.insert(chars[0].to_string(), OptionValue::Value(value));
            } else {
                for ch in &chars {
                    let key = ch.to_string();
                    let value = previous_or_flag(&options, &key);
                    options.insert(key, value);
                }

                if let ([ch], Some(next)) = (chars.as_slice(), next_value) {
                    options.insert(ch.to_string(), OptionValue::Value(next.clone()));
                    i += 1;
                }
            }
        } else {
            positional.push(token.clone());
        }

        i += 1;
    }

    ParsedArguments {
        positional,
        options,
    }
}

fn previous_or_flag(options: &BTreeMap<String, OptionValue>, key: &str) -> OptionValue {
    options.get(key).cloned().unwrap_or(OptionValue::Flag)
}
