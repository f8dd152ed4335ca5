//! CLI blackjack demo.
//!
//! Plays narrated rounds in the terminal. If `espeak` is installed the
//! dealer's line is spoken out loud; otherwise the text alone is shown.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

use croupier::{
    Card, CardArt, CardArtResolver, DirArtResolver, Round, RoundPhase, SpeechError,
    SpeechSynthesizer, Suit,
};

/// Speaks narration through the `espeak` command-line tool.
struct EspeakSynthesizer;

impl SpeechSynthesizer for EspeakSynthesizer {
    fn speak(&self, text: &str) -> Result<PathBuf, SpeechError> {
        let path = PathBuf::from("dealer_voice.wav");
        let status = Command::new("espeak")
            .arg("-w")
            .arg(&path)
            .arg(text)
            .status()
            .map_err(SpeechError::new)?;

        if status.success() {
            Ok(path)
        } else {
            Err(SpeechError::new(format!("espeak exited with {status}")))
        }
    }
}

fn main() {
    println!("Blackjack CLI demo (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut round = Round::new(seed);

    let art = DirArtResolver::new("cards");
    let speech = EspeakSynthesizer;

    loop {
        print_table(&round);

        if round.phase() == RoundPhase::InProgress {
            match prompt_line("Action ([h]it [s]tand [q]uit): ").as_str() {
                "h" | "hit" => {
                    if let Err(err) = round.hit() {
                        println!("Action error: {err}");
                    }
                }
                "s" | "stand" => match round.stand() {
                    Ok(drawn) => {
                        if !drawn.is_empty() {
                            println!("Dealer draws {} card(s).", drawn.len());
                        }
                    }
                    Err(err) => println!("Action error: {err}"),
                },
                "q" | "quit" => return,
                _ => println!("Unknown action."),
            }
            continue;
        }

        // Round finished: narrate the result, best-effort voice.
        match round.outcome() {
            Ok(summary) => {
                let line = summary.narration();
                println!("Dealer says: {line}");
                match speech.speak(&line) {
                    Ok(path) => println!("(voice saved to {})", path.display()),
                    Err(_) => println!("(voice unavailable, text only)"),
                }
            }
            Err(err) => println!("Outcome error: {err}"),
        }

        print_art(&art, round.player_cards());

        match prompt_line("Play again? ([r]estart [q]uit): ").as_str() {
            "r" | "restart" => {
                // Fresh round: any saved narration audio describes the old one.
                let _ = std::fs::remove_file("dealer_voice.wav");
                round.restart();
            }
            _ => return,
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_table(round: &Round) {
    println!("\nDeck: {} cards remaining", round.cards_remaining());

    let dealer_view = format_dealer(round);
    match round.dealer_score() {
        Some(score) => println!("Dealer: {dealer_view} (value {score})"),
        None => println!("Dealer: {dealer_view}"),
    }

    println!(
        "You:    {} (value {})",
        format_cards(round.player_cards()),
        round.player_score()
    );
    println!();
}

fn print_art(art: &DirArtResolver, cards: &[Card]) {
    for card in cards {
        match art.resolve(*card) {
            CardArt::Image(path) => println!("  {}", path.display()),
            CardArt::Label(label) => println!("  [{label}]"),
        }
    }
}

fn format_dealer(round: &Round) -> String {
    let mut parts: Vec<String> = round
        .visible_dealer_cards()
        .iter()
        .map(format_card)
        .collect();
    if round.phase() == RoundPhase::InProgress {
        parts.push("??".to_string());
    }
    parts.join(" ")
}

fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = match card.rank {
        1 => "A".to_string(),
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        _ => card.rank.to_string(),
    };

    format!("{rank}{}", colorize(suit, color_code))
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
