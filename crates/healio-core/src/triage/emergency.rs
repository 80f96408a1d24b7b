//! Keyword-based emergency detection.

/// Phrases that mark an utterance as a possible medical emergency.
pub const EMERGENCY_PHRASES: &[&str] = &[
  "chest pain",
  "breathing difficulty",
  "stroke",
  "unconscious",
  "seizure",
  "heavy bleeding",
];

/// Case-insensitive phrase membership test. No severity scoring.
#[derive(Debug, Clone)]
pub struct EmergencyDetector {
  phrases: Vec<String>,
}

impl Default for EmergencyDetector {
  fn default() -> Self { Self::new(EMERGENCY_PHRASES.iter().copied()) }
}

impl EmergencyDetector {
  pub fn new<'a>(phrases: impl IntoIterator<Item = &'a str>) -> Self {
    Self {
      phrases: phrases
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_lowercase)
        .collect(),
    }
  }

  /// The first phrase (in list order) contained in `utterance`.
  pub fn matched(&self, utterance: &str) -> Option<&str> {
    let haystack = utterance.to_lowercase();
    self
      .phrases
      .iter()
      .find(|phrase| haystack.contains(phrase.as_str()))
      .map(String::as_str)
  }

  pub fn detect(&self, utterance: &str) -> bool { self.matched(utterance).is_some() }
}
