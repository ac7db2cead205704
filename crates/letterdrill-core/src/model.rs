//! Core data model types for letterdrill.
//!
//! A [`Configuration`] describes a drill; the generator turns it into a
//! [`QuestionSet`] of [`Task`]s that a session then consumes one by one.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::alphabet::LetterIndex;

/// Top-level quiz mode chosen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    #[serde(rename = "l2n")]
    LetterToNumber,
    #[serde(rename = "n2l")]
    NumberToLetter,
    #[serde(rename = "mix")]
    Mixed,
    #[serde(rename = "grid")]
    Grid,
}

impl Mode {
    /// The direction this mode fixes, or `None` for mixed and grid.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Mode::LetterToNumber => Some(Direction::LetterToNumber),
            Mode::NumberToLetter => Some(Direction::NumberToLetter),
            Mode::Mixed | Mode::Grid => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::LetterToNumber => write!(f, "l2n"),
            Mode::NumberToLetter => write!(f, "n2l"),
            Mode::Mixed => write!(f, "mix"),
            Mode::Grid => write!(f, "grid"),
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "l2n" | "letter-to-number" => Ok(Mode::LetterToNumber),
            "n2l" | "number-to-letter" => Ok(Mode::NumberToLetter),
            "mix" | "mixed" => Ok(Mode::Mixed),
            "grid" => Ok(Mode::Grid),
            other => Err(format!("unknown mode: {other}")),
        }
    }
}

/// Which way a single question (or grid cell) asks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Shown a letter, answer with its number.
    #[serde(rename = "l2n")]
    LetterToNumber,
    /// Shown a number, answer with its letter.
    #[serde(rename = "n2l")]
    NumberToLetter,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::LetterToNumber => write!(f, "l2n"),
            Direction::NumberToLetter => write!(f, "n2l"),
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "l2n" | "letter-to-number" => Ok(Direction::LetterToNumber),
            "n2l" | "number-to-letter" => Ok(Direction::NumberToLetter),
            other => Err(format!("unknown direction: {other}")),
        }
    }
}

/// Whether a question asks about one letter or a run of letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Single,
    Sequence,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Single => write!(f, "single"),
            Unit::Sequence => write!(f, "sequence"),
        }
    }
}

impl FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "single" => Ok(Unit::Single),
            "sequence" | "seq" => Ok(Unit::Sequence),
            other => Err(format!("unknown unit: {other}")),
        }
    }
}

/// Cell order of a grid task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridOrder {
    Ordered,
    Shuffled,
}

impl fmt::Display for GridOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridOrder::Ordered => write!(f, "ordered"),
            GridOrder::Shuffled => write!(f, "shuffled"),
        }
    }
}

impl FromStr for GridOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ordered" | "sorted" => Ok(GridOrder::Ordered),
            "shuffled" | "random" => Ok(GridOrder::Shuffled),
            other => Err(format!("unknown grid order: {other}")),
        }
    }
}

/// Shortest and longest allowed sequence length.
pub const SEQUENCE_LENGTH_MIN: u32 = 2;
pub const SEQUENCE_LENGTH_MAX: u32 = 12;

/// Most questions a single non-grid drill may ask for.
pub const QUESTION_COUNT_MAX: u32 = 1000;

/// Everything needed to generate a drill.
///
/// Range endpoints are kept as raw strings: they come straight from user
/// input and are only resolved to [`LetterIndex`] during validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    pub mode: Mode,
    pub range_start: String,
    pub range_end: String,
    /// Ignored in grid mode. At most [`QUESTION_COUNT_MAX`].
    pub question_count: u32,
    /// Ignored in grid mode.
    pub unit: Unit,
    /// Used when `unit` is [`Unit::Sequence`]. Clamped, never rejected.
    pub sequence_length: u32,
    /// Grid mode only.
    pub grid_order: GridOrder,
    /// Grid mode only.
    pub grid_ask: Direction,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            mode: Mode::LetterToNumber,
            range_start: "A".into(),
            range_end: "Z".into(),
            question_count: 10,
            unit: Unit::Single,
            sequence_length: 4,
            grid_order: GridOrder::Ordered,
            grid_ask: Direction::LetterToNumber,
        }
    }
}

impl Configuration {
    /// `sequence_length` clamped to `[2, 12]`.
    pub fn effective_sequence_length(&self) -> usize {
        self.sequence_length
            .clamp(SEQUENCE_LENGTH_MIN, SEQUENCE_LENGTH_MAX) as usize
    }
}

/// One generated non-grid question. Immutable once generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub kind: Direction,
    pub unit: Unit,
    /// What the user is shown.
    pub prompt: String,
    /// The canonical correct answer, also used for display.
    pub answer: String,
    /// A second accepted spelling (hyphen-separated digits for
    /// letter-to-number sequences).
    #[serde(default)]
    pub alternate_answer: Option<String>,
}

/// One cell of a grid task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    pub letter: char,
    pub index: LetterIndex,
    pub ask: Direction,
}

impl GridCell {
    pub fn new(index: LetterIndex, ask: Direction) -> Self {
        Self {
            letter: index.letter(),
            index,
            ask,
        }
    }

    /// The value printed on the cell.
    pub fn label(&self) -> String {
        match self.ask {
            Direction::LetterToNumber => self.letter.to_string(),
            Direction::NumberToLetter => self.index.to_string(),
        }
    }

    /// The value the user must fill in.
    pub fn expected(&self) -> String {
        match self.ask {
            Direction::LetterToNumber => self.index.to_string(),
            Direction::NumberToLetter => self.letter.to_string(),
        }
    }

    /// The cell viewed as a single-unit question.
    pub fn as_question(&self) -> Question {
        Question {
            kind: self.ask,
            unit: Unit::Single,
            prompt: self.label(),
            answer: self.expected(),
            alternate_answer: None,
        }
    }
}

/// The whole letter range presented at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridTask {
    pub ask: Direction,
    pub cells: Vec<GridCell>,
}

/// One unit of work in a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Task {
    Question(Question),
    Grid(GridTask),
}

/// The generator's output, in generation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSet {
    /// The mode the set was generated for (mixed stays mixed).
    pub mode: Mode,
    pub tasks: Vec<Task>,
}

impl QuestionSet {
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Iterate over the non-grid questions.
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.tasks.iter().filter_map(|t| match t {
            Task::Question(q) => Some(q),
            Task::Grid(_) => None,
        })
    }

    /// The grid task, if this set was generated in grid mode.
    pub fn grid(&self) -> Option<&GridTask> {
        self.tasks.iter().find_map(|t| match t {
            Task::Grid(g) => Some(g),
            Task::Question(_) => None,
        })
    }
}
