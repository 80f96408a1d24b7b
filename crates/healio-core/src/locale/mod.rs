//! Localization: `(language, key) → display string` with English fallback.
//!
//! The English table must define every [`TemplateKey`]; this is checked once
//! when the [`Localizer`] is built, so [`Localizer::resolve`] itself cannot
//! fail. Other languages may define any subset of keys.

mod tables;

use std::{collections::HashMap, str::FromStr};

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString, IntoEnumIterator};

use crate::{Error, Result, language::Language};

/// Every user-facing string the server composes.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  AsRefStr,
  EnumIter,
  EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TemplateKey {
  Welcome,
  Tagline,
  Disclaimer,
  EmergencyWarning,
  EmergencyAction,
  WhoLabel,
  SymptomsLabel,
  PrecautionsLabel,
  HomeCareLabel,
  WhenToConsultLabel,
  /// Contains a `{topics}` placeholder.
  OfflineFallback,
  RemoteFallback,
  OnlineMode,
  OfflineMode,
  HealthTipFallback,
  MonsoonAlertTitle,
  MonsoonAlertBody,
  WinterAlertTitle,
  WinterAlertBody,
}

/// A key → string table for one language.
pub type Table = HashMap<TemplateKey, String>;

/// Raw operator overrides as read from configuration: language name → key
/// name → text. Names are parsed case-insensitively.
pub type Overrides = HashMap<String, HashMap<String, String>>;

#[derive(Debug, Clone)]
pub struct Localizer {
  /// Default-language strings indexed by `TemplateKey as usize`.
  fallback: Vec<String>,
  tables:   HashMap<Language, Table>,
}

impl Localizer {
  /// Build a localizer from per-language tables.
  ///
  /// Returns [`Error::MissingTemplate`] for the first key absent from the
  /// default-language table.
  pub fn new(mut tables: HashMap<Language, Table>) -> Result<Self> {
    let default = tables.remove(&Language::DEFAULT).unwrap_or_default();
    let fallback = TemplateKey::iter()
      .map(|key| default.get(&key).cloned().ok_or(Error::MissingTemplate(key)))
      .collect::<Result<Vec<_>>>()?;
    Ok(Self { fallback, tables })
  }

  /// The built-in English and Hindi tables.
  pub fn builtin() -> Result<Self> { Self::new(tables::builtin()) }

  /// Layer operator-supplied strings over the current tables.
  pub fn with_overrides(mut self, overrides: &Overrides) -> Result<Self> {
    for (language_name, entries) in overrides {
      let language = Language::from_str(language_name)
        .map_err(|_| Error::UnknownLanguage(language_name.clone()))?;
      for (key_name, text) in entries {
        let key = TemplateKey::from_str(key_name)
          .map_err(|_| Error::UnknownTemplateKey(key_name.clone()))?;
        if language.is_default() {
          self.fallback[key as usize] = text.clone();
        } else {
          self.tables.entry(language).or_default().insert(key, text.clone());
        }
      }
    }
    Ok(self)
  }

  /// Resolve `key` in `language`, falling back to the default language.
  pub fn resolve(&self, language: Language, key: TemplateKey) -> &str {
    self
      .tables
      .get(&language)
      .and_then(|table| table.get(&key))
      .unwrap_or(&self.fallback[key as usize])
  }

  /// Resolve `key` and substitute `{name}` placeholders.
  pub fn render(
    &self,
    language: Language,
    key: TemplateKey,
    vars: &[(&str, &str)],
  ) -> String {
    vars.iter().fold(
      self.resolve(language, key).to_owned(),
      |text, (name, value)| text.replace(&format!("{{{name}}}"), value),
    )
  }
}
