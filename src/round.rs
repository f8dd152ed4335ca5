//! Round engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::{ActionError, OutcomeError};
use crate::hand::Hand;
use crate::result::{Outcome, RoundSummary};

/// Round phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// The player may still hit or stand.
    InProgress,
    /// The round has ended and the outcome can be resolved.
    Finished,
}

/// Returns whether the dealer must draw another card.
///
/// House rule: the dealer draws below 17 and stands at 17 or higher. There
/// is no soft-17 exception.
#[must_use]
pub fn dealer_must_draw(dealer: &Hand) -> bool {
    dealer.value() < 17
}

/// A single-player blackjack round against an automated dealer.
///
/// The round exclusively owns its deck, both hands, and the RNG. Each
/// session should own its own `Round`; there is no shared state and no
/// locking. Presentation layers only read through the query methods.
///
/// # Example
///
/// ```
/// use croupier::{Round, RoundPhase};
///
/// let mut round = Round::new(42);
/// assert_eq!(round.phase(), RoundPhase::InProgress);
/// assert_eq!(round.player_cards().len(), 2);
///
/// round.stand().unwrap();
/// let summary = round.outcome().unwrap();
/// println!("{}", summary.narration());
/// ```
#[derive(Debug)]
pub struct Round {
    /// Cards remaining in the deck.
    deck: Deck,
    /// The player's hand.
    player: Hand,
    /// The dealer's hand. The hole card stays hidden until the round ends.
    dealer: Hand,
    /// Current phase.
    phase: RoundPhase,
    /// Random number generator, retained for reshuffles on restart.
    rng: ChaCha8Rng,
}

impl Round {
    /// Creates a new round with the given seed.
    ///
    /// The deck is shuffled, two cards are dealt to the player and then two
    /// to the dealer, and the round starts in [`RoundPhase::InProgress`].
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let deck = Deck::shuffled(&mut rng);
        Self::start(deck, rng)
    }

    /// Creates a round dealing from a fixed deck, top card last.
    ///
    /// Intended for deterministic setups in tests and replays. The deck
    /// should hold at least the four cards of the opening deal. A restart
    /// abandons the scripted order and reshuffles.
    #[must_use]
    pub fn from_deck(cards: Vec<Card>) -> Self {
        Self::start(Deck::from(cards), ChaCha8Rng::seed_from_u64(0))
    }

    fn start(deck: Deck, rng: ChaCha8Rng) -> Self {
        let mut round = Self {
            deck,
            player: Hand::new(),
            dealer: Hand::new(),
            phase: RoundPhase::InProgress,
            rng,
        };
        round.deal_initial();
        round
    }

    /// Deals the opening hands: two cards to the player, then two to the
    /// dealer.
    fn deal_initial(&mut self) {
        for _ in 0..2 {
            if let Some(card) = self.deck.draw() {
                self.player.add_card(card);
            }
        }
        for _ in 0..2 {
            if let Some(card) = self.deck.draw() {
                self.dealer.add_card(card);
            }
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// If the drawn card busts the player, the round finishes immediately
    /// and the dealer does not draw.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is already finished or the deck is
    /// empty. The round state is untouched in both cases.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        if self.phase == RoundPhase::Finished {
            return Err(ActionError::RoundFinished);
        }

        let card = self.deck.draw().ok_or(ActionError::NoCards)?;
        self.player.add_card(card);

        if self.player.is_bust() {
            self.phase = RoundPhase::Finished;
        }

        Ok(card)
    }

    /// Player action: Stand (end the player's turn and play out the dealer).
    ///
    /// The dealer draws until reaching 17 or higher. If the deck runs out
    /// mid-draw the dealer stops with whatever they hold. The round finishes
    /// unconditionally.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is already finished.
    pub fn stand(&mut self) -> Result<Vec<Card>, ActionError> {
        if self.phase == RoundPhase::Finished {
            return Err(ActionError::RoundFinished);
        }

        let mut drawn = Vec::new();
        while dealer_must_draw(&self.dealer) {
            let Some(card) = self.deck.draw() else {
                break;
            };
            self.dealer.add_card(card);
            drawn.push(card);
        }

        self.phase = RoundPhase::Finished;

        Ok(drawn)
    }

    /// Resolves the outcome of a finished round.
    ///
    /// Pure computation over the two final hand values; the round state is
    /// not mutated and the method can be called repeatedly.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is still in progress.
    pub fn outcome(&self) -> Result<RoundSummary, OutcomeError> {
        if self.phase != RoundPhase::Finished {
            return Err(OutcomeError::RoundInProgress);
        }

        let player_score = self.player.value();
        let dealer_score = self.dealer.value();

        let outcome = if player_score > 21 {
            Outcome::PlayerBust
        } else if dealer_score > 21 {
            Outcome::DealerBust
        } else if player_score > dealer_score {
            Outcome::PlayerWin
        } else if player_score < dealer_score {
            Outcome::DealerWin
        } else {
            Outcome::Push
        };

        Ok(RoundSummary {
            outcome,
            player_score,
            dealer_score,
        })
    }

    /// Discards the current deck and hands and starts a fresh round.
    ///
    /// A new shuffled deck is built from the retained RNG stream, opening
    /// hands are dealt, and the phase returns to
    /// [`RoundPhase::InProgress`]. Any narration text or audio produced for
    /// the previous round no longer describes this round; callers caching
    /// such artifacts should discard them here.
    pub fn restart(&mut self) {
        self.deck = Deck::shuffled(&mut self.rng);
        self.player = Hand::new();
        self.dealer = Hand::new();
        self.phase = RoundPhase::InProgress;
        self.deal_initial();
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Returns the player's cards, in deal order.
    #[must_use]
    pub fn player_cards(&self) -> &[Card] {
        self.player.cards()
    }

    /// Returns the player's current hand value.
    #[must_use]
    pub fn player_score(&self) -> u8 {
        self.player.value()
    }

    /// Returns the dealer's face-up card.
    #[must_use]
    pub fn dealer_upcard(&self) -> Option<&Card> {
        self.dealer.cards().first()
    }

    /// Returns the dealer's cards visible at this point: only the up card
    /// while the round is in progress, the full hand once it has finished.
    #[must_use]
    pub fn visible_dealer_cards(&self) -> &[Card] {
        let cards = self.dealer.cards();
        match self.phase {
            RoundPhase::InProgress => &cards[..cards.len().min(1)],
            RoundPhase::Finished => cards,
        }
    }

    /// Returns the dealer's hand value, available only once the round has
    /// finished.
    #[must_use]
    pub fn dealer_score(&self) -> Option<u8> {
        match self.phase {
            RoundPhase::InProgress => None,
            RoundPhase::Finished => Some(self.dealer.value()),
        }
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }
}
