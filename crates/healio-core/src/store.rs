//! The `KnowledgeStore` trait.
//!
//! Implemented by storage backends (e.g. `healio-store-sqlite`). The triage
//! pipeline never talks to a store directly: the server loads the disease
//! list once at startup and hands the snapshot to the
//! [`TriageEngine`](crate::triage::TriageEngine), so classification stays a
//! pure function of the utterance.

use std::future::Future;

use crate::disease::DiseaseRecord;

/// Read-only access to the disease catalog and the health-tip pool.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait KnowledgeStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Every disease record, in store order.
  fn list_diseases(
    &self,
  ) -> impl Future<Output = Result<Vec<DiseaseRecord>, Self::Error>> + Send + '_;

  /// The first record (in store order) whose name contains `fragment`,
  /// compared case-insensitively. `None` if nothing matches.
  fn find_by_name_fragment<'a>(
    &'a self,
    fragment: &'a str,
  ) -> impl Future<Output = Result<Option<DiseaseRecord>, Self::Error>> + Send + 'a;

  /// One tip picked at random. `None` if the pool is empty.
  fn random_tip(
    &self,
  ) -> impl Future<Output = Result<Option<String>, Self::Error>> + Send + '_;
}
