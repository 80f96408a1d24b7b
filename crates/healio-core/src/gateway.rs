//! The remote reasoning boundary.
//!
//! [`ReasoningGateway`] is the capability the orchestrator calls when neither
//! the emergency detector nor the local knowledge base can answer. Adapters
//! (`healio-gemini`) build their request text with [`Instructions`] so every
//! backend receives the same language and safety rules.

use std::future::Future;

use crate::{
  GatewayError,
  language::Language,
  locale::{Localizer, TemplateKey},
};

/// A single request/response call to an external language model.
///
/// No conversation state is carried between calls. Implementations must not
/// retry on their own; a failed call is reported once.
pub trait ReasoningGateway: Send + Sync {
  fn ask<'a>(
    &'a self,
    utterance: &'a str,
    language: Language,
  ) -> impl Future<Output = Result<String, GatewayError>> + Send + 'a;
}

/// Builds the instruction text sent to the model.
///
/// The safety sentences are taken from the default-language table; the model
/// is told to translate them into whatever language it replies in.
#[derive(Debug, Clone)]
pub struct Instructions {
  disclaimer: String,
  warning:    String,
}

impl Instructions {
  pub fn new(disclaimer: impl Into<String>, warning: impl Into<String>) -> Self {
    Self { disclaimer: disclaimer.into(), warning: warning.into() }
  }

  pub fn from_localizer(localizer: &Localizer) -> Self {
    Self::new(
      localizer.resolve(Language::DEFAULT, TemplateKey::Disclaimer),
      localizer.resolve(Language::DEFAULT, TemplateKey::EmergencyWarning),
    )
  }

  /// The full instruction for one utterance.
  pub fn build(&self, utterance: &str, language: Language) -> String {
    let mut out = String::from(
      "You are Healio, a health awareness assistant.\n\n",
    );
    out.push_str(&format!("USER INPUT: \"{utterance}\"\n\n"));

    out.push_str(
      "LANGUAGE:\n\
       1. Detect the language and script of the user input.\n\
       2. If the input is an Indian language written in English letters \
       (Romanized or transliterated), you MUST reply in that same language \
       using English letters.\n\
       3. If the input uses a native script (such as Devanagari or Telugu \
       script), reply in that script.\n\
       4. If the input is English, reply in English.\n",
    );
    if !language.is_default() {
      out.push_str(&format!(
        "5. The user's selected interface language is {language}; use it \
         only when the input's language is ambiguous.\n",
      ));
    }

    out.push_str(&format!(
      "\nMEDICAL RULES:\n\
       1. Follow WHO guidelines strictly.\n\
       2. DO NOT diagnose or prescribe medicines.\n\
       3. Provide precautions, symptoms, and home care.\n\
       4. Always include this disclaimer, written in the reply language: \
       \"{disclaimer}\"\n\
       5. If the symptoms sound serious, include this warning, written in the \
       reply language: \"{warning}\"\n",
      disclaimer = self.disclaimer,
      warning = self.warning,
    ));

    out.push_str(
      "\nRESPONSE STYLE:\n\
       - Friendly, calm, and responsible.\n\
       - Match the user's language style EXACTLY (e.g. \"naku jwaram ga \
       undi\" must be answered in Romanized Telugu).\n",
    );
    out
  }
}
