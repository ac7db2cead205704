//! Question generation.
//!
//! Validates a [`Configuration`] and samples a [`QuestionSet`] from it.

use crate::alphabet::{letter_to_index, LetterIndex};
use crate::error::ConfigError;
use crate::model::{
    Configuration, Direction, GridCell, GridOrder, GridTask, Mode, Question, QuestionSet, Task,
    Unit, QUESTION_COUNT_MAX,
};
use crate::random::{pick, pick_unique, shuffle, RandomSource};

/// A configuration that passed validation, with its range resolved.
#[derive(Debug, Clone)]
pub struct ValidatedRange {
    pub start: LetterIndex,
    pub end: LetterIndex,
}

impl ValidatedRange {
    /// Every index from `start` to `end` inclusive, ascending.
    pub fn indices(&self) -> Vec<LetterIndex> {
        LetterIndex::range(self.start, self.end).collect()
    }
}

/// Check a configuration without generating anything.
///
/// The range is checked first, then its order, then (outside grid mode)
/// the question count.
pub fn validate(config: &Configuration) -> Result<ValidatedRange, ConfigError> {
    let (Some(start), Some(end)) = (
        letter_to_index(&config.range_start),
        letter_to_index(&config.range_end),
    ) else {
        return Err(ConfigError::InvalidRange {
            start: config.range_start.clone(),
            end: config.range_end.clone(),
        });
    };

    if start > end {
        return Err(ConfigError::StartAfterEnd {
            start: start.letter(),
            end: end.letter(),
        });
    }

    if config.mode != Mode::Grid {
        if config.question_count < 1 {
            return Err(ConfigError::InvalidQuestionCount(config.question_count));
        }
        if config.question_count > QUESTION_COUNT_MAX {
            return Err(ConfigError::TooManyQuestions {
                count: config.question_count,
                max: QUESTION_COUNT_MAX,
            });
        }
    }

    Ok(ValidatedRange { start, end })
}

/// Generate the tasks for a drill.
pub fn generate(
    config: &Configuration,
    rng: &mut dyn RandomSource,
) -> Result<QuestionSet, ConfigError> {
    let range = validate(config)?;
    let indices = range.indices();

    let tasks = match config.mode {
        Mode::Grid => vec![Task::Grid(grid_task(
            &indices,
            config.grid_order,
            config.grid_ask,
            rng,
        ))],
        mode => {
            let sequence_length = config.effective_sequence_length();
            (0..config.question_count)
                .map(|_| {
                    let kind = match mode.direction() {
                        Some(direction) => direction,
                        None if rng.coin() => Direction::LetterToNumber,
                        None => Direction::NumberToLetter,
                    };
                    let question = match config.unit {
                        Unit::Single => single_question(&indices, kind, rng),
                        Unit::Sequence => sequence_question(&indices, sequence_length, kind, rng),
                    };
                    Task::Question(question)
                })
                .collect()
        }
    };

    tracing::debug!(
        mode = %config.mode,
        start = %range.start.letter(),
        end = %range.end.letter(),
        tasks = tasks.len(),
        "generated question set"
    );

    Ok(QuestionSet {
        mode: config.mode,
        tasks,
    })
}

fn grid_task(
    indices: &[LetterIndex],
    order: GridOrder,
    ask: Direction,
    rng: &mut dyn RandomSource,
) -> GridTask {
    let mut list = indices.to_vec();
    if order == GridOrder::Shuffled {
        shuffle(&mut list, rng);
    }
    GridTask {
        ask,
        cells: list.into_iter().map(|i| GridCell::new(i, ask)).collect(),
    }
}

fn single_question(
    indices: &[LetterIndex],
    kind: Direction,
    rng: &mut dyn RandomSource,
) -> Question {
    // `validate` guarantees a non-empty range.
    let index = pick(indices, rng).copied().unwrap_or(LetterIndex::FIRST);
    let (prompt, answer) = match kind {
        Direction::LetterToNumber => (index.letter().to_string(), index.to_string()),
        Direction::NumberToLetter => (index.to_string(), index.letter().to_string()),
    };
    Question {
        kind,
        unit: Unit::Single,
        prompt,
        answer,
        alternate_answer: None,
    }
}

fn sequence_question(
    indices: &[LetterIndex],
    length: usize,
    kind: Direction,
    rng: &mut dyn RandomSource,
) -> Question {
    let picked = pick_unique(indices, length, rng);
    let letters: String = picked.iter().map(|i| i.letter()).collect();
    let numbers: Vec<String> = picked.iter().map(|i| i.to_string()).collect();
    let joined = numbers.concat();
    let separated = numbers.join("-");

    match kind {
        Direction::LetterToNumber => Question {
            kind,
            unit: Unit::Sequence,
            prompt: letters,
            answer: joined,
            alternate_answer: Some(separated),
        },
        Direction::NumberToLetter => Question {
            kind,
            unit: Unit::Sequence,
            prompt: separated,
            answer: letters,
            alternate_answer: None,
        },
    }
}
