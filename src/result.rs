//! Outcome types and dealer narration.

/// Outcome of a finished round.
///
/// Derived from the two final hand values; never stored by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player went over 21; dealer wins.
    PlayerBust,
    /// Dealer went over 21; player wins.
    DealerBust,
    /// Player has the higher value.
    PlayerWin,
    /// Dealer has the higher value.
    DealerWin,
    /// Tie.
    Push,
}

/// Summary of a finished round: the outcome and both final scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    /// The outcome of the round.
    pub outcome: Outcome,
    /// The player's final hand value.
    pub player_score: u8,
    /// The dealer's final hand value.
    pub dealer_score: u8,
}

impl RoundSummary {
    /// Produces the dealer's spoken line for this outcome.
    ///
    /// One of five fixed templates, chosen by the same comparison that
    /// resolved the outcome. The text is handed to a speech synthesizer by
    /// the presentation layer; nothing here depends on whether that
    /// succeeds.
    ///
    /// # Example
    ///
    /// ```
    /// use croupier::{Outcome, RoundSummary};
    ///
    /// let summary = RoundSummary {
    ///     outcome: Outcome::PlayerWin,
    ///     player_score: 19,
    ///     dealer_score: 18,
    /// };
    /// assert_eq!(summary.narration(), "You win with 19 against dealer's 18!");
    /// ```
    #[must_use]
    pub fn narration(&self) -> String {
        let player = self.player_score;
        let dealer = self.dealer_score;
        match self.outcome {
            Outcome::PlayerBust => format!("You busted with {player}. Dealer wins."),
            Outcome::DealerBust => format!("Dealer busted with {dealer}. You win!"),
            Outcome::PlayerWin => format!("You win with {player} against dealer's {dealer}!"),
            Outcome::DealerWin => format!("Dealer wins with {dealer} against your {player}."),
            Outcome::Push => "It's a tie!".to_string(),
        }
    }
}
