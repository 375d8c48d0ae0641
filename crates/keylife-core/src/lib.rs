//! Core types and analysis passes for DNSSEC key-lifecycle data.
//!
//! This crate provides two independent, pure transformations:
//!
//! - **Classification**: [`TransitionClassifier`] labels each observed key
//!   transition by its overlap pattern.
//! - **Lifetimes**: [`LifetimeBuilder`] merges timestamped DNSKEY
//!   observations into continuous per-session lifetime intervals.
//!
//! Input arrives either as validated records ([`TransitionRecord`],
//! [`Observation`]) or as loosely-typed boundary records
//! ([`RawTransitionRecord`], [`RawObservation`]) that are checked before any
//! work is done. Invalid input is reported as a [`KeylifeError`].
//!
//! # Example
//!
//! ```rust
//! use keylife_core::{Classification, LifetimeBuilder, Observation, TransitionClassifier, TransitionRecord};
//!
//! let results = TransitionClassifier::classify_all(&[
//!     TransitionRecord::new("ksk-2023", 2, false),
//!     TransitionRecord::new("zsk-2024", 0, true),
//! ]);
//! assert_eq!(results[0].classification, Classification::MultiSignature);
//! assert_eq!(results[1].classification, Classification::Cutover);
//!
//! let ts = "2024-01-01T00:00:00Z".parse().unwrap();
//! let intervals = LifetimeBuilder::build(&[Observation::new("key1", ts)]);
//! assert_eq!(intervals[0].start_time, intervals[0].end_time);
//! ```

#![doc(html_root_url = "https://docs.rs/keylife-core/0.1.0")]

pub mod classify;
mod error;
pub mod lifetime;
pub mod types;

pub use classify::{classify, ClassificationSummary, TransitionClassifier};
pub use error::{KeylifeError, RecordError, Result};
pub use lifetime::{LifetimeBuilder, LifetimeSummary};
pub use types::*;
