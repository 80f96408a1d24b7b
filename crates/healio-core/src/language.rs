//! Supported interface languages.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::{Error, Result};

/// The closed set of interface languages.
///
/// [`Language::English`] is the default: every template key must resolve in
/// it, while the other languages may cover only part of the table.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  AsRefStr,
  Display,
  EnumIter,
  EnumString,
)]
#[serde(try_from = "String")]
#[strum(ascii_case_insensitive)]
pub enum Language {
  #[default]
  English,
  Hindi,
  Marathi,
  Telugu,
  Tamil,
  Kannada,
  Malayalam,
  Bengali,
  Gujarati,
  Punjabi,
  Odia,
  Assamese,
  Urdu,
}

impl Language {
  pub const DEFAULT: Language = Language::English;

  pub fn is_default(self) -> bool { self == Self::DEFAULT }
}

/// Deserialization accepts any letter case, like [`FromStr`](std::str::FromStr).
impl TryFrom<String> for Language {
  type Error = Error;

  fn try_from(value: String) -> Result<Self> {
    value.parse().map_err(|_| Error::UnknownLanguage(value))
  }
}

#[cfg(test)]
mod tests {
  use std::str::FromStr;

  use strum::IntoEnumIterator;

  use super::*;

  #[test]
  fn parses_case_insensitively() {
    assert_eq!(Language::from_str("telugu").unwrap(), Language::Telugu);
    assert_eq!(Language::from_str("HINDI").unwrap(), Language::Hindi);
    assert!(Language::from_str("Klingon").is_err());
  }

  #[test]
  fn thirteen_languages_with_english_first() {
    let all: Vec<_> = Language::iter().collect();
    assert_eq!(all.len(), 13);
    assert_eq!(all[0], Language::DEFAULT);
  }

  #[test]
  fn serializes_as_english_name() {
    let json = serde_json::to_string(&Language::Malayalam).unwrap();
    assert_eq!(json, "\"Malayalam\"");
  }

  #[test]
  fn deserializes_any_case() {
    let lang: Language = serde_json::from_str("\"tamil\"").unwrap();
    assert_eq!(lang, Language::Tamil);
    assert!(serde_json::from_str::<Language>("\"Elvish\"").is_err());
  }
}
