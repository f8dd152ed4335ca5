//! Presentation seams: card artwork lookup and speech synthesis.
//!
//! Nothing here touches game state. Both collaborators are best-effort: a
//! missing image falls back to a text label, and a failed speech synthesis
//! leaves the narration text perfectly displayable.

use std::path::PathBuf;

use thiserror::Error;

use crate::card::Card;

/// Returns the conventional asset file name for a card, e.g.
/// `"ace_of_hearts.png"`.
#[must_use]
pub fn image_file_name(card: Card) -> String {
    format!("{}_of_{}.png", card.rank_name(), card.suit_name())
}

/// Display artwork for a single card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardArt {
    /// Path to an image asset.
    Image(PathBuf),
    /// Text label used when no image asset is available.
    Label(String),
}

/// Maps a card to display artwork.
///
/// Resolution never fails: implementations fall back to a text label when
/// the asset is missing.
pub trait CardArtResolver {
    /// Resolves the artwork for a card.
    fn resolve(&self, card: Card) -> CardArt;
}

/// Resolves card images from a directory of `<rank>_of_<suit>.png` files.
#[derive(Debug, Clone)]
pub struct DirArtResolver {
    dir: PathBuf,
}

impl DirArtResolver {
    /// Creates a resolver rooted at the given directory.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl CardArtResolver for DirArtResolver {
    fn resolve(&self, card: Card) -> CardArt {
        let path = self.dir.join(image_file_name(card));
        if path.is_file() {
            CardArt::Image(path)
        } else {
            CardArt::Label(format!("{} of {}", card.rank_name(), card.suit_name()))
        }
    }
}

/// Error produced by a speech synthesizer.
#[derive(Debug, Error)]
#[error("speech synthesis failed")]
pub struct SpeechError {
    #[source]
    source: Box<dyn std::error::Error + Send + Sync>,
}

impl SpeechError {
    /// Wraps the underlying cause.
    #[must_use]
    pub fn new(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

/// Turns narration text into an audio artifact.
///
/// The engine never calls this; the presentation layer does, after
/// resolving the outcome. A failure is non-fatal: the round result stands
/// and the text is shown regardless. Audio produced for one round should be
/// discarded when the round restarts.
pub trait SpeechSynthesizer {
    /// Synthesizes the text and returns the path of the produced audio.
    ///
    /// # Errors
    ///
    /// Returns an error when synthesis fails; callers fall back to text.
    fn speak(&self, text: &str) -> Result<PathBuf, SpeechError>;
}
