//! Core types for Wardbreak

mod band;
mod filter;
mod signals;
mod output;

pub use band::ResistanceBand;
pub use filter::{FilterSpec, FilterStrategy, FilterVerdict, IntentReason};
pub use signals::{FractionPrecision, NegativeCounts, SignalBag, TacticCounts};
pub use output::SubmitOutput;
