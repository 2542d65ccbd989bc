use std::{mem, num::ParseFloatError};

const SCORES_MARKER: &str = "AllScores";
const STEPS_MARKER: &str = "AllGameSteps";
const LOSSES_MARKER: &str = "AllLosses";
const BLOCK_DELIMITER: &str = "~~~~~~~~~~";

/// Width of the running-average window over scores and steps.
pub const RUNNING_AVG_WINDOW: usize = 50;

/// Scalar hyperparameters reported in the training log. Kept as raw strings;
/// the most recent matching line wins, and values persist across blocks.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Hyperparams {
    pub discount_rate: String,
    pub tau: String,
    pub learning_rounds: String,
    pub mini_batch_number: String,
    pub ppo_clip: String,
    pub minimum_rollout_size: String,
    pub learning_rate: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserState {
    Idle,
    Scores,
    Steps,
}

/// One reporting interval's worth of series, handed out when the delimiter
/// line closes a block.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Block {
    pub scores: Vec<f64>,
    pub steps: Vec<f64>,
}

/// Line-prefix state machine over the training log. Pure with respect to its
/// input: feeding the same lines to a fresh parser yields the same values.
pub struct LogParser {
    pub state: ParserState,
    pub params: Hyperparams,
    pub scores: Vec<f64>,
    pub steps: Vec<f64>,
}

impl LogParser {
    pub fn new() -> Self {
        LogParser {
            state: ParserState::Idle,
            params: Hyperparams::default(),
            scores: Vec::new(),
            steps: Vec::new(),
        }
    }

    /// Advances the machine by one line. Returns the finished block on a
    /// delimiter line (resetting both series; hyperparameters persist), and
    /// the parse error of the first malformed numeric line otherwise.
    pub fn feed_line(&mut self, line: &str) -> Result<Option<Block>, ParseFloatError> {
        if let Some(slot) = self.hyperparam_slot(line) {
            *slot = line.splitn(2, ':').nth(1).unwrap_or("").trim().to_string();
            return Ok(None);
        }

        if self.state == ParserState::Scores && !line.starts_with(STEPS_MARKER) {
            self.scores.push(line.trim().parse()?);
        } else if self.state == ParserState::Steps && !line.starts_with(LOSSES_MARKER) {
            self.steps.push(line.trim().parse()?);
        } else if line.starts_with(SCORES_MARKER) {
            self.state = ParserState::Scores;
        } else if line.starts_with(STEPS_MARKER) {
            self.state = ParserState::Steps;
        } else if line.starts_with(LOSSES_MARKER) {
            // loss values are not charted, skip until the next marker
            self.state = ParserState::Idle;
        } else if line.starts_with(BLOCK_DELIMITER) {
            return Ok(Some(Block {
                scores: mem::take(&mut self.scores),
                steps: mem::take(&mut self.steps),
            }));
        }

        Ok(None)
    }

    /// Hyperparameter labels take priority over every other line class, so a
    /// labelled line inside a series section still updates the parameter.
    fn hyperparam_slot(&mut self, line: &str) -> Option<&mut String> {
        let p = &mut self.params;
        let slots: Vec<(&str, &mut String)> = vec![
            ("discount", &mut p.discount_rate),
            ("tau", &mut p.tau),
            ("learning_rounds", &mut p.learning_rounds),
            ("mini_batch_number", &mut p.mini_batch_number),
            ("ppo_clip", &mut p.ppo_clip),
            ("minimum_rollout_size", &mut p.minimum_rollout_size),
            ("learning_rate", &mut p.learning_rate),
        ];
        slots
            .into_iter()
            .find(|(label, _)| line.starts_with(label))
            .map(|(_, slot)| slot)
    }
}

impl Default for LogParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Valid-mode running average: only fully-overlapping windows, so the output
/// has `len - window + 1` points and is empty for series shorter than the
/// window.
pub fn moving_average(series: &[f64], window: usize) -> Vec<f64> {
    if window == 0 || series.len() < window {
        return Vec::new();
    }
    series
        .windows(window)
        .map(|w| w.iter().sum::<f64>() / window as f64)
        .collect()
}
