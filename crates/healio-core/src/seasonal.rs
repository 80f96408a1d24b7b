//! Month-based public-health alerts for the Indian subcontinent.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::{
  language::Language,
  locale::{Localizer, TemplateKey},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
  /// June through September.
  Monsoon,
  /// November through February.
  Winter,
}

impl Season {
  /// The alert season for `date`, if any.
  pub fn for_date(date: NaiveDate) -> Option<Self> {
    match date.month() {
      6..=9 => Some(Self::Monsoon),
      11 | 12 | 1 | 2 => Some(Self::Winter),
      _ => None,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeasonalAlert {
  pub title:       String,
  pub description: String,
}

impl SeasonalAlert {
  pub fn localized(season: Season, localizer: &Localizer, language: Language) -> Self {
    let (title, body) = match season {
      Season::Monsoon => {
        (TemplateKey::MonsoonAlertTitle, TemplateKey::MonsoonAlertBody)
      }
      Season::Winter => {
        (TemplateKey::WinterAlertTitle, TemplateKey::WinterAlertBody)
      }
    };
    Self {
      title:       localizer.resolve(language, title).to_owned(),
      description: localizer.resolve(language, body).to_owned(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn month(m: u32) -> NaiveDate { NaiveDate::from_ymd_opt(2026, m, 15).unwrap() }

  #[test]
  fn seasons_by_month() {
    assert_eq!(Season::for_date(month(7)), Some(Season::Monsoon));
    assert_eq!(Season::for_date(month(6)), Some(Season::Monsoon));
    assert_eq!(Season::for_date(month(9)), Some(Season::Monsoon));
    assert_eq!(Season::for_date(month(12)), Some(Season::Winter));
    assert_eq!(Season::for_date(month(2)), Some(Season::Winter));
    assert_eq!(Season::for_date(month(4)), None);
    assert_eq!(Season::for_date(month(10)), None);
  }

  #[test]
  fn monsoon_alert_mentions_dengue() {
    let loc = Localizer::builtin().unwrap();
    let alert = SeasonalAlert::localized(Season::Monsoon, &loc, Language::English);
    assert_eq!(alert.title, "Monsoon Alert");
    assert!(alert.description.contains("Dengue"));
  }
}
