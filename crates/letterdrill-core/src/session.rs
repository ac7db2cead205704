//! Quiz session state.
//!
//! A [`Session`] owns one generated [`QuestionSet`], a cursor, and the
//! running score. It has a single owner and no shared state.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::generator::generate;
use crate::grader::{grade, grade_grid, GridVerdict, Verdict};
use crate::model::{Configuration, Mode, QuestionSet, Task};
use crate::random::RandomSource;

/// What happened to one task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Correct,
    Incorrect,
    Skipped,
    /// Never reached before the session was finalized.
    Unanswered,
}

/// One line of the end-of-session review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewEntry {
    pub prompt: String,
    pub answer: String,
    pub outcome: Outcome,
}

/// Snapshot of a session, built by [`Session::finalize`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResult {
    /// Generated question count, or the cell count for a grid.
    pub total_questions: usize,
    pub num_correct: usize,
    pub mode: Mode,
    /// Review entries that received a graded answer; grid cells count
    /// individually, like `total_questions`.
    pub answered: usize,
    /// Review entries that were skipped, counted the same way.
    pub skipped: usize,
    pub review: Vec<ReviewEntry>,
}

impl SessionResult {
    pub fn num_wrong(&self) -> usize {
        self.total_questions.saturating_sub(self.num_correct)
    }

    /// Fraction correct in `[0, 1]`; 0 for an empty session.
    pub fn accuracy(&self) -> f64 {
        if self.total_questions == 0 {
            0.0
        } else {
            self.num_correct as f64 / self.total_questions as f64
        }
    }
}

/// An in-progress drill.
#[derive(Debug, Clone)]
pub struct Session {
    config: Configuration,
    set: QuestionSet,
    cursor: usize,
    num_correct: usize,
    outcomes: Vec<Option<Outcome>>,
    /// Per-cell results of the latest grid submission, by task.
    grid_cells: Vec<Option<Vec<bool>>>,
}

impl Session {
    /// Validate `config` and generate its tasks.
    pub fn start(config: Configuration, rng: &mut dyn RandomSource) -> Result<Self, ConfigError> {
        let set = generate(&config, rng)?;
        Ok(Self::from_set(config, set))
    }

    /// Wrap an already generated set.
    pub fn from_set(config: Configuration, set: QuestionSet) -> Self {
        let outcomes = vec![None; set.len()];
        let grid_cells = vec![None; set.len()];
        Self {
            config,
            set,
            cursor: 0,
            num_correct: 0,
            outcomes,
            grid_cells,
        }
    }

    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    pub fn question_set(&self) -> &QuestionSet {
        &self.set
    }

    /// Zero-based position of the current task.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    pub fn num_correct(&self) -> usize {
        self.num_correct
    }

    /// The task awaiting an answer, or `None` once finished.
    pub fn current(&self) -> Option<&Task> {
        self.set.tasks.get(self.cursor)
    }

    /// True once the cursor has passed the last task.
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.set.len()
    }

    /// Grade `raw` against the current question and advance.
    ///
    /// Blank input, a finished session, or a grid as the current task leave
    /// the session untouched and return `None`.
    pub fn submit(&mut self, raw: &str) -> Option<Verdict> {
        let question = match self.current()? {
            Task::Question(q) => q,
            Task::Grid(_) => {
                tracing::warn!(cursor = self.cursor, "text answer submitted to a grid task");
                return None;
            }
        };
        let verdict = grade(question, raw)?;
        if verdict.correct {
            self.num_correct += 1;
        }
        self.record(if verdict.correct {
            Outcome::Correct
        } else {
            Outcome::Incorrect
        });
        Some(verdict)
    }

    /// Grade the current grid.
    ///
    /// When every cell is correct the score becomes the cell count and the
    /// cursor advances. Otherwise the cursor stays so the grid can be
    /// corrected and resubmitted.
    pub fn submit_grid<S: AsRef<str>>(&mut self, answers: &[S]) -> Option<GridVerdict> {
        let task = match self.current()? {
            Task::Grid(g) => g,
            Task::Question(_) => {
                tracing::warn!(cursor = self.cursor, "grid answers submitted to a question");
                return None;
            }
        };
        let verdict = grade_grid(task, answers);
        self.grid_cells[self.cursor] = Some(verdict.cells.iter().map(|c| c.correct).collect());
        if verdict.correct {
            self.num_correct = verdict.total;
            self.record(Outcome::Correct);
        } else {
            self.outcomes[self.cursor] = Some(Outcome::Incorrect);
        }
        Some(verdict)
    }

    /// Move past the current task without grading it.
    ///
    /// A grid that already failed keeps its incorrect outcome.
    pub fn skip(&mut self) {
        if self.is_finished() {
            return;
        }
        self.outcomes[self.cursor].get_or_insert(Outcome::Skipped);
        self.cursor += 1;
    }

    /// Stop early; remaining tasks stay unanswered.
    pub fn end(&mut self) {
        self.cursor = self.set.len();
    }

    fn record(&mut self, outcome: Outcome) {
        self.outcomes[self.cursor] = Some(outcome);
        self.cursor += 1;
    }

    /// Summarize the session as it stands. Idempotent; works mid-session.
    pub fn finalize(&self) -> SessionResult {
        let mut review = Vec::new();
        let mut total_questions = 0;

        let tasks = self.set.tasks.iter().zip(&self.outcomes).zip(&self.grid_cells);
        for ((task, outcome), cells) in tasks {
            let outcome = outcome.unwrap_or(Outcome::Unanswered);
            match task {
                Task::Question(q) => {
                    total_questions += 1;
                    review.push(ReviewEntry {
                        prompt: q.prompt.clone(),
                        answer: q.answer.clone(),
                        outcome,
                    });
                }
                Task::Grid(g) => {
                    total_questions += g.cells.len();
                    // A failed grid still credits the cells that were right.
                    review.extend(g.cells.iter().enumerate().map(|(i, cell)| {
                        let cell_correct = cells.as_ref().and_then(|c| c.get(i)).copied();
                        ReviewEntry {
                            prompt: cell.label(),
                            answer: cell.expected(),
                            outcome: match (outcome, cell_correct) {
                                (Outcome::Incorrect, Some(true)) => Outcome::Correct,
                                _ => outcome,
                            },
                        }
                    }));
                }
            }
        }

        let count = |wanted: &[Outcome]| {
            review
                .iter()
                .filter(|e| wanted.contains(&e.outcome))
                .count()
        };

        SessionResult {
            total_questions,
            num_correct: self.num_correct,
            mode: self.set.mode,
            answered: count(&[Outcome::Correct, Outcome::Incorrect]),
            skipped: count(&[Outcome::Skipped]),
            review,
        }
    }
}
