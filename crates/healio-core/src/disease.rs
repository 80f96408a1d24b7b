//! Disease records: the read-only entries of the local knowledge base.

use serde::{Deserialize, Serialize};

/// A WHO-aligned summary of a common condition.
///
/// Identity is the `name` field, unique case-insensitively within a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseRecord {
  pub name:            String,
  pub description:     String,
  pub causes:          String,
  pub symptoms:        String,
  pub precautions:     String,
  pub home_care:       String,
  pub when_to_consult: String,
  /// Warning signs that need urgent care. Served by the catalog API but
  /// never interpolated into chat replies.
  pub emergency_signs: String,
}
