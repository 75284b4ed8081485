//! Game session service
//!
//! Plays guessing games against the player and grows the tree whenever a
//! guess is wrong.

use tracing::{debug, info, instrument};

use crate::application::{ApplicationResult, IoResultExt};
use crate::domain::Node;
use crate::infrastructure::traits::Prompter;

/// How a single game ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    /// The guessed animal was right.
    Guessed { animal: String },
    /// The guess was wrong and `animal` was learned in place of `replaced`.
    Learned { animal: String, replaced: String },
}

/// Counters over one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub games: usize,
    pub guessed: usize,
    pub learned: usize,
}

impl SessionSummary {
    fn record(&mut self, outcome: &GameOutcome) {
        self.games += 1;
        match outcome {
            GameOutcome::Guessed { .. } => self.guessed += 1,
            GameOutcome::Learned { .. } => self.learned += 1,
        }
    }
}

/// Service driving games through a [`Prompter`].
pub struct SessionService<P> {
    prompter: P,
}

impl<P: Prompter> SessionService<P> {
    /// Create a new session service.
    pub fn new(prompter: P) -> Self {
        Self { prompter }
    }

    /// Play games until the player declines another one.
    ///
    /// The tree is handed back together with the session counters. Any failure
    /// to read an answer aborts the session; the caller must not persist in
    /// that case.
    #[instrument(level = "debug", skip_all)]
    pub fn play_session(&mut self, mut tree: Node) -> ApplicationResult<(Node, SessionSummary)> {
        let mut summary = SessionSummary::default();
        loop {
            let outcome = self.play_game(&mut tree)?;
            summary.record(&outcome);
            if !self.prompter.ask_yes_no("Play another game?").on_input()? {
                break;
            }
        }
        info!(
            "session over: {} games, {} guessed, {} learned",
            summary.games, summary.guessed, summary.learned
        );
        Ok((tree, summary))
    }

    /// Play exactly one game on `tree`.
    pub fn play_game(&mut self, tree: &mut Node) -> ApplicationResult<GameOutcome> {
        let prompter = &mut self.prompter;
        let leaf = tree.traverse(|question| prompter.ask_yes_no(question)).on_input()?;

        let guess = leaf.to_string();
        if prompter
            .ask_yes_no(&format!("Is it a {guess}?"))
            .on_input()?
        {
            debug!("guessed {}", guess);
            return Ok(GameOutcome::Guessed { animal: guess });
        }

        let animal = prompter
            .ask("What is the animal I failed to find?")
            .on_input()?;
        let question = prompter
            .ask(&format!(
                "What question can distinguish a {animal} from a {guess}?"
            ))
            .on_input()?;
        let is_yes = prompter
            .ask_yes_no(&format!("What answer is expected for a {animal}?"))
            .on_input()?;

        leaf.learn(animal.clone(), question, is_yes)?;
        debug!("learned {} next to {}", animal, guess);
        Ok(GameOutcome::Learned {
            animal,
            replaced: guess,
        })
    }

    /// Give back the prompter.
    pub fn into_prompter(self) -> P {
        self.prompter
    }
}
