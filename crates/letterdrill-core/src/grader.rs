//! Answer grading.
//!
//! Grading is pure: it normalizes the raw answer according to the question's
//! direction and unit and compares it to the canonical answer.

use serde::{Deserialize, Serialize};

use crate::model::{Direction, GridTask, Question, Unit};

/// Outcome of grading one answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub correct: bool,
    /// Canonical answer, for display after a miss.
    pub correct_answer: String,
}

/// Outcome of grading one grid cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellVerdict {
    pub label: String,
    pub expected: String,
    pub correct: bool,
}

/// Aggregate outcome of grading a whole grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridVerdict {
    /// True only when every cell is correct.
    pub correct: bool,
    pub correct_count: usize,
    pub total: usize,
    /// Labels shown on the incorrect cells, in cell order.
    pub wrong_labels: Vec<String>,
    pub cells: Vec<CellVerdict>,
}

impl GridVerdict {
    pub fn wrong_count(&self) -> usize {
        self.total - self.correct_count
    }
}

/// Grade a raw answer.
///
/// Returns `None` when the answer is blank: that is "not answered yet",
/// not a wrong answer.
pub fn grade(question: &Question, raw: &str) -> Option<Verdict> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    Some(Verdict {
        correct: is_correct(question, raw),
        correct_answer: question.answer.clone(),
    })
}

fn is_correct(question: &Question, raw: &str) -> bool {
    match (question.kind, question.unit) {
        (Direction::LetterToNumber, Unit::Single) => {
            match (whole_number(raw), whole_number(&question.answer)) {
                (Some(given), Some(expected)) => given == expected,
                _ => false,
            }
        }
        (Direction::LetterToNumber, Unit::Sequence) => {
            let given = digits_only(raw);
            given == digits_only(&question.answer)
                || question
                    .alternate_answer
                    .as_deref()
                    .is_some_and(|alt| given == digits_only(alt))
        }
        (Direction::NumberToLetter, Unit::Single) => raw.to_uppercase() == question.answer,
        (Direction::NumberToLetter, Unit::Sequence) => {
            letters_only(&raw.to_uppercase()) == question.answer
        }
    }
}

/// Numeric value of `s` when it is a finite whole number (`7`, `07`, `7.0`, `7e0`).
fn whole_number(s: &str) -> Option<f64> {
    s.parse::<f64>()
        .ok()
        .filter(|n| n.is_finite() && n.fract() == 0.0)
}

fn digits_only(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}

fn letters_only(s: &str) -> String {
    s.chars().filter(char::is_ascii_uppercase).collect()
}

/// Grade every cell of a grid.
///
/// Cells are graded as single-unit questions; a blank or missing answer
/// counts as incorrect for that cell.
pub fn grade_grid<S: AsRef<str>>(task: &GridTask, answers: &[S]) -> GridVerdict {
    let cells: Vec<CellVerdict> = task
        .cells
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            let raw = answers.get(i).map(|s| s.as_ref()).unwrap_or("");
            let correct = grade(&cell.as_question(), raw).is_some_and(|v| v.correct);
            CellVerdict {
                label: cell.label(),
                expected: cell.expected(),
                correct,
            }
        })
        .collect();

    let correct_count = cells.iter().filter(|c| c.correct).count();
    let wrong_labels = cells
        .iter()
        .filter(|c| !c.correct)
        .map(|c| c.label.clone())
        .collect();

    GridVerdict {
        correct: correct_count == cells.len(),
        correct_count,
        total: cells.len(),
        wrong_labels,
        cells,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::LetterIndex;
    use crate::model::GridCell;

    fn question(kind: Direction, unit: Unit, answer: &str, alt: Option<&str>) -> Question {
        Question {
            kind,
            unit,
            prompt: String::new(),
            answer: answer.into(),
            alternate_answer: alt.map(Into::into),
        }
    }

    fn correct(q: &Question, raw: &str) -> bool {
        grade(q, raw).unwrap().correct
    }

    #[test]
    fn letter_to_number_single_is_numeric() {
        let q = question(Direction::LetterToNumber, Unit::Single, "7", None);
        assert!(correct(&q, "7"));
        assert!(correct(&q, " 07 "));
        assert!(correct(&q, "+7"));
        assert!(correct(&q, "7.0"));
        assert!(correct(&q, "7e0"));
        assert!(!correct(&q, "8"));
        assert!(!correct(&q, "7.5"));
        assert!(!correct(&q, "G"));
        assert!(!correct(&q, "inf"));
        assert!(!correct(&q, "NaN"));
    }

    #[test]
    fn letter_to_number_sequence_ignores_separators() {
        let q = question(
            Direction::LetterToNumber,
            Unit::Sequence,
            "1938",
            Some("1-9-3-8"),
        );
        assert!(correct(&q, "1938"));
        assert!(correct(&q, "1-9-3-8"));
        assert!(correct(&q, "19 38"));
        assert!(correct(&q, "1, 9, 3, 8"));
        assert!(!correct(&q, "1-9-3"));
        assert!(!correct(&q, "8391"));
    }

    #[test]
    fn number_to_letter_single_trims_and_uppercases() {
        let q = question(Direction::NumberToLetter, Unit::Single, "D", None);
        assert!(correct(&q, "d"));
        assert!(correct(&q, " D "));
        assert!(correct(&q, "D"));
        assert!(!correct(&q, "E"));
        assert!(!correct(&q, "DD"));
    }

    #[test]
    fn number_to_letter_sequence_strips_non_letters() {
        let q = question(Direction::NumberToLetter, Unit::Sequence, "DEGH", None);
        assert!(correct(&q, "degh"));
        assert!(correct(&q, "D-E-G-H"));
        assert!(correct(&q, "d e g h"));
        assert!(!correct(&q, "DEHG"));
    }

    #[test]
    fn blank_answer_is_not_graded() {
        let q = question(Direction::NumberToLetter, Unit::Single, "D", None);
        assert_eq!(grade(&q, ""), None);
        assert_eq!(grade(&q, "   \t"), None);
    }

    #[test]
    fn verdict_carries_canonical_answer() {
        let q = question(Direction::LetterToNumber, Unit::Sequence, "12", Some("1-2"));
        let verdict = grade(&q, "21").unwrap();
        assert!(!verdict.correct);
        assert_eq!(verdict.correct_answer, "12");
    }

    fn grid(ask: Direction, letters: &[i64]) -> GridTask {
        GridTask {
            ask,
            cells: letters
                .iter()
                .map(|&n| GridCell::new(LetterIndex::new(n).unwrap(), ask))
                .collect(),
        }
    }

    #[test]
    fn grid_all_correct() {
        let task = grid(Direction::LetterToNumber, &[1, 2, 3]);
        let verdict = grade_grid(&task, &["1", "2", " 3"]);
        assert!(verdict.correct);
        assert_eq!(verdict.correct_count, 3);
        assert!(verdict.wrong_labels.is_empty());
    }

    #[test]
    fn grid_reports_wrong_labels_not_expected_values() {
        let task = grid(Direction::NumberToLetter, &[1, 2, 3]);
        let verdict = grade_grid(&task, &["a", "x", ""]);
        assert!(!verdict.correct);
        assert_eq!(verdict.correct_count, 1);
        assert_eq!(verdict.wrong_count(), 2);
        assert_eq!(verdict.wrong_labels, vec!["2", "3"]);
        assert_eq!(verdict.cells[1].expected, "B");
    }

    #[test]
    fn grid_number_cells_accept_whole_number_forms() {
        let task = grid(Direction::LetterToNumber, &[3, 4]);
        assert!(grade_grid(&task, &["3.0", "4e0"]).correct);
    }

    #[test]
    fn grid_missing_answers_are_wrong() {
        let task = grid(Direction::LetterToNumber, &[4, 5]);
        let verdict = grade_grid(&task, &["4"]);
        assert_eq!(verdict.correct_count, 1);
        assert_eq!(verdict.wrong_labels, vec!["E"]);
    }
}
