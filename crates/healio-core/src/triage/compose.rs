//! Reply text for each classification outcome.

use std::sync::Arc;

use crate::{
  disease::DiseaseRecord,
  language::Language,
  locale::{Localizer, TemplateKey},
  triage::Outcome,
};

#[derive(Debug, Clone)]
pub struct Composer {
  localizer: Arc<Localizer>,
  /// Known condition names, pre-joined for the offline fallback.
  topics:    String,
}

impl Composer {
  pub fn new(localizer: Arc<Localizer>, records: &[DiseaseRecord]) -> Self {
    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    Self { localizer, topics: join_topics(&names) }
  }

  pub fn localizer(&self) -> &Localizer { &self.localizer }

  pub fn compose(&self, outcome: &Outcome, language: Language) -> String {
    let loc = &self.localizer;
    match outcome {
      Outcome::Emergency => {
        loc.resolve(language, TemplateKey::EmergencyAction).to_owned()
      }
      Outcome::LocalMatch(record) => self.local_match(record, language),
      Outcome::RemoteAnswer(text) => text.clone(),
      Outcome::OfflineUnknown => loc.render(
        language,
        TemplateKey::OfflineFallback,
        &[("topics", self.topics.as_str())],
      ),
      Outcome::RemoteFailure => {
        loc.resolve(language, TemplateKey::RemoteFallback).to_owned()
      }
    }
  }

  /// Fixed field order: name, description, symptoms, precautions, home care,
  /// when to consult, attribution. `emergency_signs` is never included.
  fn local_match(&self, record: &DiseaseRecord, language: Language) -> String {
    let loc = &*self.localizer;
    format!(
      "**{name}**\n\n\
       {description}\n\n\
       **{symptoms_label}:** {symptoms}\n\n\
       **{precautions_label}:** {precautions}\n\n\
       **{home_care_label}:** {home_care}\n\n\
       **{consult_label}:** {when_to_consult}\n\n\
       *{attribution}*",
      name = record.name,
      description = record.description,
      symptoms_label = loc.resolve(language, TemplateKey::SymptomsLabel),
      symptoms = record.symptoms,
      precautions_label = loc.resolve(language, TemplateKey::PrecautionsLabel),
      precautions = record.precautions,
      home_care_label = loc.resolve(language, TemplateKey::HomeCareLabel),
      home_care = record.home_care,
      consult_label = loc.resolve(language, TemplateKey::WhenToConsultLabel),
      when_to_consult = record.when_to_consult,
      attribution = loc.resolve(language, TemplateKey::WhoLabel),
    )
  }
}

/// `["A"]` → `A`, `["A", "B"]` → `A or B`, `["A", "B", "C"]` → `A, B, or C`.
fn join_topics(names: &[&str]) -> String {
  match names {
    [] => String::new(),
    [one] => (*one).to_owned(),
    [a, b] => format!("{a} or {b}"),
    [rest @ .., last] => format!("{}, or {last}", rest.join(", ")),
  }
}
