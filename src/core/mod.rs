//! Core modules for Wardbreak

pub mod stemmer;
pub mod synonyms;
pub mod filter;
pub mod detector;
pub mod secret;
pub mod engine;
pub mod composer;
pub mod api;

pub use stemmer::{stem, stem_phrase};
pub use synonyms::{is_synonym, synonyms_of};
pub use filter::classify;
pub use detector::SignalDetector;
pub use secret::SecretVault;
pub use engine::ResistanceEngine;
pub use composer::ResponseComposer;
pub use api::{create_router, run_server};
