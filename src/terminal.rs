//! Synchronous terminal table: countdown, prompt loop, result.
//!
//! Input and output are generic so the loop can be driven from any reader and
//! writer. The countdown tick is a plain duration; the only places the loop
//! blocks are the tick sleep and the line read.

use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use tracing::info;

use crate::error::TerminalError;
use crate::game::{Game, PlayerAction};
use crate::render::render_table;
use crate::result::{Outcome, Verdict};

const LOG_TARGET: &str = "blackjack_duel::terminal";

/// Prompt shown before each decision.
pub const PROMPT: &str = "Would you like to hit or stay? >> ";

/// Shown after input that is neither action.
pub const REPROMPT: &str = "Please type either \"hit\" or \"stay\".";

/// A terminal session around one game.
pub struct Terminal<R, W> {
    game: Game,
    input: R,
    output: W,
    tick: Duration,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Creates a terminal table that counts down one second per tick.
    ///
    /// # Errors
    ///
    /// Returns [`TerminalError::Config`] if the game's options are invalid,
    /// such as a negative countdown.
    pub fn new(game: Game, input: R, output: W) -> Result<Self, TerminalError> {
        game.options().validate()?;
        Ok(Self {
            game,
            input,
            output,
            tick: Duration::from_secs(1),
        })
    }

    /// Sets the delay between countdown lines.
    #[must_use]
    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    /// Returns the game being played.
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// Plays the round to the end and returns its outcome.
    ///
    /// # Errors
    ///
    /// Returns [`TerminalError::ShoeExhausted`] if the shoe runs out,
    /// [`TerminalError::InputClosed`] if input ends before the round does, and
    /// [`TerminalError::Io`] on read or write failures.
    pub fn play_round(&mut self) -> Result<Outcome, TerminalError> {
        self.countdown()?;
        self.game.deal_initial()?;

        while !self.game.is_over() {
            let view = self.game.concealed_view();
            write!(
                self.output,
                "{}",
                render_table(&self.game.options().player_name, &view)
            )?;

            let action = self.read_action()?;
            info!(target: LOG_TARGET, %action, "player decided");
            self.game.apply(action)?;
        }

        let view = self.game.full_view();
        write!(
            self.output,
            "{}",
            render_table(&self.game.options().player_name, &view)
        )?;

        let outcome = self.game.determine_winner();
        writeln!(
            self.output,
            "{} ({} vs dealer {})",
            describe(&outcome),
            self.game.player_hand().value(),
            self.game.dealer_hand().value()
        )?;
        self.output.flush()?;
        Ok(outcome)
    }

    fn countdown(&mut self) -> Result<(), TerminalError> {
        let countdown = self.game.options().countdown;
        for remaining in (0..=countdown).rev() {
            writeln!(self.output, "{remaining}...")?;
            self.output.flush()?;
            if !self.tick.is_zero() {
                thread::sleep(self.tick);
            }
        }
        Ok(())
    }

    /// Prompts until the player types a recognized action.
    fn read_action(&mut self) -> Result<PlayerAction, TerminalError> {
        loop {
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(TerminalError::InputClosed);
            }

            match line.trim_end_matches(['\r', '\n']).parse() {
                Ok(action) => return Ok(action),
                Err(_) => writeln!(self.output, "{REPROMPT}")?,
            }
        }
    }
}

fn describe(outcome: &Outcome) -> &'static str {
    match outcome.verdict() {
        Verdict::PlayerWins => "You win!",
        Verdict::DealerWins => "Dealer wins.",
        Verdict::Draw => "It's a draw.",
    }
}
