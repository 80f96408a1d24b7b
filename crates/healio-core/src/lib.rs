//! Core types and the triage pipeline for the Healio health assistant.
//!
//! This crate is deliberately free of HTTP and database dependencies. The
//! knowledge store and the remote reasoning service are traits implemented
//! by sibling crates (`healio-store-sqlite`, `healio-gemini`).

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod connectivity;
pub mod conversation;
pub mod disease;
pub mod error;
pub mod gateway;
pub mod language;
pub mod locale;
pub mod message;
pub mod seasonal;
pub mod store;
pub mod triage;

pub use error::{Error, GatewayError, Result};
