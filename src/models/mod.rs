//! Core data models for the receipt processor.
//!
//! This module contains the receipt documents, the cent helpers used for
//! currency comparisons, and the score types produced by the rule engine.

mod money;
mod receipt;
mod score;

pub use money::{format_amount, round_to_cents, to_cents};
pub use receipt::{Item, Receipt, ValidatedReceipt};
pub use score::{ScoreCard, ScoreEntry, ScoringRule};
