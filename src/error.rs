//! Error types for round operations.

use thiserror::Error;

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The round is already finished; only `restart` is valid.
    #[error("round is already finished")]
    RoundFinished,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    NoCards,
}

/// Errors that can occur when resolving the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OutcomeError {
    /// The round is still in progress and has no outcome yet.
    #[error("round is still in progress")]
    RoundInProgress,
}
