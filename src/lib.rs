//! A single-player blackjack round engine with a narrated dealer.
//!
//! The crate provides a [`Round`] type that owns the deck and both hands
//! and manages the full round flow: the opening deal, hit/stand, dealer
//! auto-play, and outcome resolution. A [`RoundSummary`] turns the final
//! scores into the dealer's spoken line, which a presentation layer can
//! hand to a [`SpeechSynthesizer`].
//!
//! # Example
//!
//! ```
//! use croupier::{Round, RoundPhase};
//!
//! let mut round = Round::new(42);
//! while round.phase() == RoundPhase::InProgress && round.player_score() < 17 {
//!     round.hit().unwrap();
//! }
//! if round.phase() == RoundPhase::InProgress {
//!     round.stand().unwrap();
//! }
//! println!("{}", round.outcome().unwrap().narration());
//! ```

pub mod card;
pub mod deck;
pub mod error;
pub mod hand;
pub mod present;
pub mod result;
pub mod round;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::Deck;
pub use error::{ActionError, OutcomeError};
pub use hand::Hand;
pub use present::{CardArt, CardArtResolver, DirArtResolver, SpeechError, SpeechSynthesizer};
pub use result::{Outcome, RoundSummary};
pub use round::{Round, RoundPhase, dealer_must_draw};
