//! Parsed command-line arguments

use std::collections::BTreeMap;

/// Value attached to an option key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// Option given without a value (`-v`, `--force`)
    Flag,

    /// Option carrying a string value, possibly empty (`--ide-version=10`, `-i 9`)
    Value(String),
}

impl OptionValue {
    /// String value, if this option carries one
    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::Flag => None,
            OptionValue::Value(value) => Some(value),
        }
    }

    /// Whether the option counts as "set" (a flag, or a non-empty value)
    pub fn is_truthy(&self) -> bool {
        match self {
            OptionValue::Flag => true,
            OptionValue::Value(value) => !value.is_empty() && value != "0",
        }
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Value(value.to_string())
    }
}

/// Positional arguments and options of one invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArguments {
    /// Plain arguments in encounter order
    pub positional: Vec<String>,

    /// Options by key; the last occurrence wins
    pub options: BTreeMap<String, OptionValue>,
}

impl ParsedArguments {
    /// Look up an option by key
    pub fn option(&self, key: &str) -> Option<&OptionValue> {
        self.options.get(key)
    }

    /// Look up an option under its long key, then under its short key
    pub fn option_either(&self, long: &str, short: &str) -> Option<&OptionValue> {
        self.option(long).or_else(|| self.option(short))
    }

    /// Positional argument at `index`
    pub fn argument(&self, index: usize) -> Option<&str> {
        self.positional.get(index).map(String::as_str)
    }

    /// Whether a flag-like option is set
    pub fn flag(&self, key: &str) -> bool {
        self.option(key).is_some_and(OptionValue::is_truthy)
    }
}
