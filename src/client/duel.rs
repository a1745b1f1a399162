//! Two players sharing one terminal, taking turns against the same room

use super::{ArenaClient, ClientError, GuessOutcome};
use crate::core::WORD_LENGTH;
use crate::output::formatters::{FEEDBACK_LEGEND, feedback_line};
use std::io::{BufRead, Write};
use uuid::Uuid;

/// How a duel ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DuelOutcome {
    /// The named player guessed the word
    Winner(String),
    /// Both players ran out of turns
    Tie,
    /// Input ended before the duel finished
    Quit,
}

const PLAYERS: [&str; 2] = ["A", "B"];

/// Play a duel: create a room, join players A and B, alternate their guesses
///
/// # Errors
/// Returns an error on I/O failure, a failed request, or any refusal other
/// than a rejected guess.
pub async fn run_duel<R: BufRead, W: Write>(
    client: &ArenaClient,
    input: &mut R,
    output: &mut W,
) -> Result<DuelOutcome, ClientError> {
    let game_id = client.create_game().await?;
    writeln!(output, "New game started. Game ID: {game_id}")?;
    writeln!(output, "{FEEDBACK_LEGEND}")?;

    let mut player_ids = Vec::with_capacity(PLAYERS.len());
    for label in PLAYERS {
        let player_id = client.join_game(game_id).await?;
        writeln!(output, "Player {label} joined with ID: {player_id}")?;
        player_ids.push(player_id);
    }
    writeln!(output)?;

    let mut current = 0;
    loop {
        let label = PLAYERS[current];
        let player_id = player_ids[current];

        let progress = client.progress(game_id).await?;
        let finished = |id: Uuid| progress.iter().any(|s| s.player_id == Some(id) && s.is_over);
        if player_ids.iter().all(|&id| finished(id)) {
            writeln!(output, "Both players have no turns left. It's a tie.")?;
            return Ok(DuelOutcome::Tie);
        }
        if finished(player_id) {
            writeln!(output, "Player {label} has no turns left.")?;
            current = (current + 1) % PLAYERS.len();
            continue;
        }

        write!(output, "Player {label}, enter your 5-letter guess: ")?;
        output.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(DuelOutcome::Quit);
        }
        let guess = line.trim().to_lowercase();
        if guess.chars().count() != WORD_LENGTH {
            writeln!(output, "Please enter exactly {WORD_LENGTH} letters.")?;
            continue;
        }

        let response = match client.submit_guess(game_id, player_id, &guess).await? {
            GuessOutcome::Accepted(response) => response,
            GuessOutcome::Rejected(message) => {
                writeln!(output, "Invalid guess: {message}")?;
                continue;
            }
        };

        writeln!(output, "{}", feedback_line(&guess, &response.marks))?;
        if response.has_won {
            let answer = response.answer.as_deref().unwrap_or(&guess);
            writeln!(output, "Player {label} WINS! The word was: {answer}")?;
            return Ok(DuelOutcome::Winner(label.to_string()));
        }
        if response.is_over {
            writeln!(output, "Player {label} has used all turns.")?;
        }

        current = (current + 1) % PLAYERS.len();
    }
}
