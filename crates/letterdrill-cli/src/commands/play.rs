//! The `letterdrill play` command.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;

use letterdrill_core::alphabet::phonetic_name;
use letterdrill_core::config::load_config_from;
use letterdrill_core::model::{
    Configuration, Direction, GridOrder, GridTask, Mode, Question, Task, Unit,
};
use letterdrill_core::random::RngSource;
use letterdrill_core::report::SessionReport;
use letterdrill_core::session::{Outcome, Session, SessionResult};
use letterdrill_core::settings::{load_settings, save_settings, FileStore};

/// Command-line values that replace the remembered settings.
#[derive(Debug, Default)]
pub struct Overrides {
    pub mode: Option<Mode>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub count: Option<u32>,
    pub unit: Option<Unit>,
    pub sequence_length: Option<u32>,
    pub grid_order: Option<GridOrder>,
    pub grid_ask: Option<Direction>,
}

impl Overrides {
    fn apply(self, config: &mut Configuration) {
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(start) = self.start {
            config.range_start = start.trim().to_uppercase();
        }
        if let Some(end) = self.end {
            config.range_end = end.trim().to_uppercase();
        }
        if let Some(count) = self.count {
            config.question_count = count;
        }
        if let Some(unit) = self.unit {
            config.unit = unit;
        }
        if let Some(length) = self.sequence_length {
            config.sequence_length = length;
        }
        if let Some(order) = self.grid_order {
            config.grid_order = order;
        }
        if let Some(ask) = self.grid_ask {
            config.grid_ask = ask;
        }
    }
}

pub struct PlayArgs {
    pub overrides: Overrides,
    pub seed: Option<u64>,
    pub report: Option<PathBuf>,
    pub no_save: bool,
    pub config: Option<PathBuf>,
}

/// Presentation switches for the interactive loop.
#[derive(Debug, Clone, Copy)]
pub struct PlayOptions {
    pub show_phonetic: bool,
    pub reveal_answers: bool,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let app = load_config_from(args.config.as_deref())?;
    let mut store = FileStore::new(&app.settings_path);

    let mut drill = load_settings(&store);
    args.overrides.apply(&mut drill);

    let mut rng = match args.seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_entropy(),
    };
    let mut session = Session::start(drill.clone(), &mut rng)?;

    if !args.no_save {
        save_settings(&mut store, &drill);
    }

    let options = PlayOptions {
        show_phonetic: app.show_phonetic,
        reveal_answers: app.reveal_answers,
    };
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut out = stdout.lock();

    run_session(&mut session, &mut input, &mut out, options)?;
    let result = session.finalize();
    write_summary(&result, &mut out)?;

    let report = SessionReport::new(drill, result);
    if let Some(path) = &args.report {
        report.save_json(path)?;
        eprintln!("Report saved to: {}", path.display());
    }
    if let Some(dir) = &app.report_dir {
        let path = report.save_in_dir(dir)?;
        eprintln!("Report saved to: {}", path.display());
    }

    Ok(())
}

/// Drive a session from line-based input until it finishes or input ends.
///
/// A blank line re-prompts, `:skip` skips the current task, and `:end` or
/// end of input stops early.
pub fn run_session<R: BufRead, W: Write>(
    session: &mut Session,
    input: &mut R,
    out: &mut W,
    options: PlayOptions,
) -> Result<()> {
    writeln!(out, "Type :skip to skip a question, :end to finish early.")?;

    let mut line = String::new();
    while let Some(task) = session.current().cloned() {
        writeln!(
            out,
            "\nQuestion {}/{} · correct: {}",
            session.cursor() + 1,
            session.len(),
            session.num_correct()
        )?;
        write_prompt(&task, out)?;
        write!(out, "> ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            session.end();
            break;
        }
        let answer = line.trim();
        match answer {
            "" => continue,
            ":end" | ":quit" => {
                session.end();
                break;
            }
            ":skip" => {
                writeln!(out, "Skipped.")?;
                session.skip();
                continue;
            }
            _ => {}
        }

        match &task {
            Task::Question(question) => {
                let Some(verdict) = session.submit(answer) else {
                    continue;
                };
                if verdict.correct {
                    writeln!(out, "Correct!")?;
                } else if options.reveal_answers {
                    write!(out, "Wrong. Correct answer: {}", verdict.correct_answer)?;
                    if options.show_phonetic {
                        if let Some(hint) = phonetic_hint(question) {
                            write!(out, " ({hint})")?;
                        }
                    }
                    writeln!(out)?;
                } else {
                    writeln!(out, "Wrong.")?;
                }
            }
            Task::Grid(_) => {
                let answers = split_grid_answers(answer);
                let Some(verdict) = session.submit_grid(&answers) else {
                    continue;
                };
                if verdict.correct {
                    writeln!(out, "All correct!")?;
                } else {
                    writeln!(
                        out,
                        "Wrong: {} ({})",
                        verdict.wrong_count(),
                        verdict.wrong_labels.join(", ")
                    )?;
                }
            }
        }
    }

    Ok(())
}

fn write_prompt<W: Write>(task: &Task, out: &mut W) -> io::Result<()> {
    match task {
        Task::Question(q) => {
            let (label, hint) = match (q.kind, q.unit) {
                (Direction::LetterToNumber, Unit::Single) => ("Letter", "number 1-26"),
                (Direction::LetterToNumber, Unit::Sequence) => {
                    ("Letters", "numbers, e.g. 1-9-3-8 or 1938")
                }
                (Direction::NumberToLetter, Unit::Single) => ("Number", "letter A-Z"),
                (Direction::NumberToLetter, Unit::Sequence) => {
                    ("Numbers", "letters without spaces, e.g. DEGH")
                }
            };
            writeln!(out, "{label}: {}  ({hint})", q.prompt)
        }
        Task::Grid(grid) => write_grid_prompt(grid, out),
    }
}

fn write_grid_prompt<W: Write>(grid: &GridTask, out: &mut W) -> io::Result<()> {
    let wanted = match grid.ask {
        Direction::LetterToNumber => "the number for each letter",
        Direction::NumberToLetter => "the letter for each number",
    };
    writeln!(out, "Grid: enter {wanted}, in order, separated by spaces or commas")?;
    let labels: Vec<String> = grid.cells.iter().map(|c| format!("{:>3}", c.label())).collect();
    writeln!(out, "{}", labels.concat())
}

fn split_grid_answers(line: &str) -> Vec<&str> {
    line.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .collect()
}

/// "B = Bravo" for single-letter questions.
fn phonetic_hint(question: &Question) -> Option<String> {
    if question.unit != Unit::Single {
        return None;
    }
    let letter_text = match question.kind {
        Direction::LetterToNumber => &question.prompt,
        Direction::NumberToLetter => &question.answer,
    };
    let letter = letter_text.chars().next()?;
    phonetic_name(letter).map(|word| format!("{letter} = {word}"))
}

/// Print the end-of-session summary table and review list.
pub fn write_summary<W: Write>(result: &SessionResult, out: &mut W) -> Result<()> {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["Total", "Correct", "Wrong", "Skipped", "Mode"]);
    table.add_row(vec![
        Cell::new(result.total_questions),
        Cell::new(result.num_correct),
        Cell::new(result.num_wrong()),
        Cell::new(result.skipped),
        Cell::new(result.mode.to_string().to_uppercase()),
    ]);

    writeln!(out, "\n{table}")?;
    writeln!(
        out,
        "Score: {}/{} ({:.0}%)",
        result.num_correct,
        result.total_questions,
        result.accuracy() * 100.0
    )?;

    writeln!(out, "\nReview:")?;
    for (i, entry) in result.review.iter().enumerate() {
        let mark = match entry.outcome {
            Outcome::Correct => "✓",
            Outcome::Incorrect => "✗",
            Outcome::Skipped | Outcome::Unanswered => "·",
        };
        writeln!(out, "{:>3}. {mark} {} → {}", i + 1, entry.prompt, entry.answer)?;
    }
    Ok(())
}
