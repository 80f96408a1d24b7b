//! Built-in translation tables.

use std::collections::HashMap;

use super::{Table, TemplateKey};
use crate::language::Language;

use super::TemplateKey::*;

const ENGLISH: &[(TemplateKey, &str)] = &[
  (Welcome, "Welcome to Healio"),
  (Tagline, "Your Smart Health Awareness Companion"),
  (
    Disclaimer,
    "Healio provides general educational information based on WHO guidelines \
     and is not a substitute for professional medical advice.",
  ),
  (
    EmergencyWarning,
    "This condition may be serious. Please consult a qualified doctor \
     immediately.",
  ),
  (
    EmergencyAction,
    "This may be a medical emergency. Please contact emergency services or \
     visit the nearest hospital immediately.",
  ),
  (WhoLabel, "Precautions based on WHO public health recommendations."),
  (SymptomsLabel, "Symptoms"),
  (PrecautionsLabel, "WHO Precautions"),
  (HomeCareLabel, "Home Care"),
  (WhenToConsultLabel, "When to consult"),
  (
    OfflineFallback,
    "I'm currently offline and don't have information about this specific \
     condition in my local database. Please check your internet connection \
     or ask about common diseases like {topics}.",
  ),
  (RemoteFallback, "Sorry, I encountered an error. Please try again later."),
  (OnlineMode, "Online Mode Active"),
  (OfflineMode, "Offline Mode Active"),
  (HealthTipFallback, "Stay hydrated and wash your hands frequently."),
  (MonsoonAlertTitle, "Monsoon Alert"),
  (
    MonsoonAlertBody,
    "Rise in Dengue and Malaria cases. Use mosquito nets and clear stagnant \
     water.",
  ),
  (WinterAlertTitle, "Winter Health"),
  (
    WinterAlertBody,
    "Flu and Cold cases are rising. Keep warm and maintain hygiene.",
  ),
];

const HINDI: &[(TemplateKey, &str)] = &[
  (Welcome, "हीलियो में आपका स्वागत है"),
  (Tagline, "आपका स्मार्ट स्वास्थ्य जागरूकता साथी"),
  (
    Disclaimer,
    "हीलियो WHO दिशानिर्देशों के आधार पर सामान्य शैक्षिक जानकारी प्रदान करता है \
     और पेशेवर चिकित्सा सलाह का विकल्प नहीं है।",
  ),
  (
    EmergencyWarning,
    "यह स्थिति गंभीर हो सकती है। कृपया तुरंत एक योग्य डॉक्टर से परामर्श करें।",
  ),
  (
    EmergencyAction,
    "यह एक चिकित्सा आपात स्थिति हो सकती है। कृपया तुरंत आपातकालीन सेवाओं से \
     संपर्क करें या निकटतम अस्पताल जाएं।",
  ),
  (WhoLabel, "WHO सार्वजनिक स्वास्थ्य सिफारिशों पर आधारित सावधानियां।"),
  (SymptomsLabel, "लक्षण"),
  (PrecautionsLabel, "WHO सावधानियां"),
  (HomeCareLabel, "घरेलू देखभाल"),
  (OnlineMode, "ऑनलाइन मोड सक्रिय"),
  (OfflineMode, "ऑफलाइन मोड सक्रिय"),
];

fn table(entries: &[(TemplateKey, &str)]) -> Table {
  entries
    .iter()
    .map(|(key, text)| (*key, (*text).to_owned()))
    .collect()
}

pub(super) fn builtin() -> HashMap<Language, Table> {
  HashMap::from([
    (Language::English, table(ENGLISH)),
    (Language::Hindi, table(HINDI)),
  ])
}
