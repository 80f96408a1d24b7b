//! Local knowledge lookup by disease name.
//!
//! The first record whose lower-cased name occurs anywhere in the lower-cased
//! utterance wins. There is no longest-match ranking, so a short name that
//! happens to appear inside unrelated text can shadow a later record.

use crate::disease::DiseaseRecord;

pub fn find_match<'r>(
  utterance: &str,
  records: &'r [DiseaseRecord],
) -> Option<&'r DiseaseRecord> {
  if utterance.trim().is_empty() {
    return None;
  }
  let haystack = utterance.to_lowercase();
  records.iter().find(|record| {
    let name = record.name.trim().to_lowercase();
    !name.is_empty() && haystack.contains(&name)
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  fn record(name: &str) -> DiseaseRecord {
    DiseaseRecord {
      name:            name.to_string(),
      description:     format!("{name} description"),
      causes:          String::new(),
      symptoms:        String::new(),
      precautions:     String::new(),
      home_care:       String::new(),
      when_to_consult: String::new(),
      emergency_signs: String::new(),
    }
  }

  #[test]
  fn matches_name_inside_utterance() {
    let records = vec![record("Fever"), record("Dengue"), record("COVID-19")];
    let hit = find_match("I have high fever and chills", &records).unwrap();
    assert_eq!(hit.name, "Fever");

    let hit = find_match("is covid-19 still around?", &records).unwrap();
    assert_eq!(hit.name, "COVID-19");
  }

  #[test]
  fn first_record_in_store_order_wins() {
    let records = vec![record("Fever"), record("Dengue")];
    let hit = find_match("dengue fever", &records).unwrap();
    assert_eq!(hit.name, "Fever");
  }

  #[test]
  fn shorter_name_can_shadow_longer_one() {
    let records = vec![record("Flu"), record("Bird Flu")];
    let hit = find_match("what about bird flu?", &records).unwrap();
    assert_eq!(hit.name, "Flu");
  }

  #[test]
  fn blank_utterance_never_matches() {
    let records = vec![record("Fever")];
    assert!(find_match("", &records).is_none());
    assert!(find_match("   \t", &records).is_none());
  }

  #[test]
  fn empty_name_never_matches() {
    let records = vec![record(""), record("Dengue")];
    assert_eq!(find_match("dengue", &records).unwrap().name, "Dengue");
    assert!(find_match("anything", &records[..1]).is_none());
  }

  #[test]
  fn no_match_returns_none() {
    let records = vec![record("Fever")];
    assert!(find_match("random gibberish xyz", &records).is_none());
  }
}
