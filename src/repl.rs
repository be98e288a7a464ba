// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Interactive REPL for stepping through pipelines one item at a time.
//!
//! Typing a pipeline loads it; dot commands pull from it.

use owo_colors::OwoColorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Editor, Helper};
use std::borrow::Cow;
use std::path::PathBuf;
use stepwise_core::{Sequence, Step};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{Result, StepwiseError};
use crate::pipeline::{BoxedSequence, Pipeline, Value, KEYWORDS};
use crate::style::Style;

const HISTORY_FILE: &str = "history";

/// REPL commands that can be executed with a dot prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Exit,
    Next,
    Drain,
    Reset,
    Version,
    Clear,
}

impl ReplCommand {
    /// Parse a REPL command from input string
    pub fn parse(input: &str) -> Option<(Self, Option<&str>)> {
        let input = input.trim();
        let rest = input.strip_prefix('.')?;

        let mut parts = rest.splitn(2, char::is_whitespace);
        let cmd = parts.next()?.to_lowercase();
        let arg = parts.next().map(str::trim).filter(|arg| !arg.is_empty());

        match cmd.as_str() {
            "help" | "h" | "?" => Some((ReplCommand::Help, arg)),
            "exit" | "quit" | "q" => Some((ReplCommand::Exit, arg)),
            "next" | "n" => Some((ReplCommand::Next, arg)),
            "drain" | "d" => Some((ReplCommand::Drain, arg)),
            "reset" | "r" => Some((ReplCommand::Reset, arg)),
            "version" | "v" => Some((ReplCommand::Version, arg)),
            "clear" | "cls" => Some((ReplCommand::Clear, arg)),
            _ => None,
        }
    }

    /// Get all available commands for help/completion
    pub fn all_commands() -> &'static [(&'static str, &'static str)] {
        &[
            (".help", "Show this help message"),
            (".exit", "Exit the REPL"),
            (".next [n]", "Pull the next n items (default 1)"),
            (".drain", "Pull every remaining item"),
            (".reset", "Rebuild the current pipeline from the start"),
            (".version", "Show version information"),
            (".clear", "Clear the screen"),
        ]
    }
}

/// Items pulled by one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pulled {
    /// Each item with its 1-based position in the run
    pub items: Vec<(usize, Value)>,
    /// Whether the sequence reported finished during this pull
    pub finished: bool,
}

/// The loaded pipeline and the live sequence built from it.
#[derive(Default)]
pub struct Session {
    pipeline: Option<Pipeline>,
    sequence: Option<BoxedSequence>,
    produced: usize,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `text` and make it the current pipeline. On error the previous
    /// pipeline stays loaded.
    pub fn load(&mut self, text: &str) -> Result<&Pipeline> {
        let pipeline: Pipeline = text.parse()?;
        self.sequence = Some(pipeline.build());
        self.produced = 0;
        Ok(self.pipeline.insert(pipeline))
    }

    /// Pull up to `count` items.
    pub fn next(&mut self, count: usize) -> Result<Pulled> {
        let sequence = self.sequence.as_mut().ok_or(StepwiseError::NoPipeline)?;
        let mut items = Vec::new();
        let mut finished = false;
        while items.len() < count {
            match sequence.step() {
                Step::Yielded(value) => {
                    self.produced += 1;
                    items.push((self.produced, value));
                }
                Step::Finished => {
                    finished = true;
                    break;
                }
            }
        }
        Ok(Pulled { items, finished })
    }

    /// Pull everything left.
    pub fn drain(&mut self) -> Result<Pulled> {
        self.next(usize::MAX)
    }

    /// Start the current pipeline over with a fresh sequence.
    pub fn reset(&mut self) -> Result<()> {
        let pipeline = self.pipeline.as_ref().ok_or(StepwiseError::NoPipeline)?;
        self.sequence = Some(pipeline.build());
        self.produced = 0;
        Ok(())
    }

    /// Items produced since the last load or reset.
    pub fn produced(&self) -> usize {
        self.produced
    }
}

/// Helper struct for rustyline that provides completion, hints, and validation
struct StepwiseHelper {
    /// Pipeline words and dot commands for completion
    keywords: Vec<String>,
    color: bool,
}

impl StepwiseHelper {
    fn new(color: bool) -> Self {
        let keywords = KEYWORDS
            .iter()
            .map(|kw| kw.to_string())
            .chain(
                ReplCommand::all_commands()
                    .iter()
                    .filter_map(|(cmd, _)| cmd.split_whitespace().next())
                    .map(String::from),
            )
            .collect();

        Self { keywords, color }
    }
}

/// Byte offset where the word under the cursor starts. Always a char
/// boundary.
fn word_start(line: &str) -> usize {
    line.char_indices()
        .rev()
        .find(|&(_, c)| !c.is_alphanumeric() && c != '-' && c != '.')
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0)
}

impl Completer for StepwiseHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let word = &line[word_start(&line[..pos])..pos];
        if word.is_empty() {
            return Ok((pos, vec![]));
        }

        let matches: Vec<Pair> = self
            .keywords
            .iter()
            .filter(|kw| kw.starts_with(word))
            .map(|kw| Pair {
                display: kw.clone(),
                replacement: kw[word.len()..].to_string(),
            })
            .collect();

        Ok((pos, matches))
    }
}

impl Hinter for StepwiseHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>) -> Option<Self::Hint> {
        if pos < line.len() {
            return None;
        }

        let word = &line[word_start(line)..];
        if word.len() < 2 {
            return None;
        }

        self.keywords
            .iter()
            .find(|kw| kw.starts_with(word) && kw.len() > word.len())
            .map(|kw| {
                let rest = &kw[word.len()..];
                if self.color {
                    rest.dimmed().to_string()
                } else {
                    rest.to_string()
                }
            })
    }
}

impl Highlighter for StepwiseHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if !self.color {
            return Cow::Borrowed(line);
        }
        if line.trim_start().starts_with('.') {
            return Cow::Owned(line.magenta().to_string());
        }

        let mut result = String::with_capacity(line.len() * 2);
        let mut current_word = String::new();

        for c in line.chars() {
            if c.is_whitespace() || c == '|' {
                if !current_word.is_empty() {
                    result.push_str(&highlight_word(&current_word));
                    current_word.clear();
                }
                if c == '|' {
                    result.push_str(&"|".cyan().bold().to_string());
                } else {
                    result.push(c);
                }
            } else {
                current_word.push(c);
            }
        }

        if !current_word.is_empty() {
            result.push_str(&highlight_word(&current_word));
        }

        Cow::Owned(result)
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        self.color
    }
}

fn highlight_word(word: &str) -> String {
    if KEYWORDS.contains(&word) {
        word.magenta().bold().to_string()
    } else if word.parse::<i64>().is_ok() {
        word.yellow().to_string()
    } else {
        word.green().to_string()
    }
}

impl Validator for StepwiseHelper {
    fn validate(&self, ctx: &mut ValidationContext<'_>) -> rustyline::Result<ValidationResult> {
        // a trailing pipe means another stage follows on the next line
        if ctx.input().trim_end().ends_with('|') {
            return Ok(ValidationResult::Incomplete);
        }
        Ok(ValidationResult::Valid(None))
    }
}

impl Helper for StepwiseHelper {}

/// The interactive pipeline stepper
pub struct Repl {
    session: Session,
    editor: Editor<StepwiseHelper, DefaultHistory>,
    history_path: PathBuf,
    style: Style,
}

impl Repl {
    /// Create a new REPL instance
    pub fn new(config: &Config) -> Result<Self> {
        let editor_config = rustyline::Config::builder()
            .history_ignore_dups(true)?
            .history_ignore_space(true)
            .max_history_size(config.history_size)?
            .auto_add_history(true)
            .build();

        let mut editor = Editor::with_config(editor_config)?;
        editor.set_helper(Some(StepwiseHelper::new(config.color)));

        let history_path = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("stepwise")
            .join(HISTORY_FILE);

        if let Some(parent) = history_path.parent() {
            if let Err(err) = std::fs::create_dir_all(parent) {
                warn!("Cannot create history directory {}: {}", parent.display(), err);
            }
        }

        // missing on first run
        if editor.load_history(&history_path).is_err() {
            debug!("No history at {}", history_path.display());
        }

        Ok(Self {
            session: Session::new(),
            editor,
            history_path,
            style: Style::new(config.color),
        })
    }

    /// Run the REPL main loop
    pub fn run(&mut self) -> Result<()> {
        self.print_banner();

        loop {
            let prompt = format!("{} ", self.style.pass("stepwise>"));

            match self.editor.readline(&prompt) {
                Ok(line) => {
                    let trimmed = line.trim();

                    if trimmed.is_empty() {
                        continue;
                    }

                    if let Some((cmd, arg)) = ReplCommand::parse(trimmed) {
                        match self.execute_command(cmd, arg) {
                            CommandResult::Continue => continue,
                            CommandResult::Exit => break,
                        }
                    }

                    if trimmed.starts_with('.') {
                        self.print_error(&format!("unknown command '{}', try .help", trimmed));
                        continue;
                    }

                    self.load(trimmed);
                }
                Err(ReadlineError::Interrupted) => {
                    println!("{}", self.style.dim("^C"));
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("{}", self.style.dim("^D"));
                    break;
                }
                Err(err) => {
                    self.save_history();
                    return Err(err.into());
                }
            }
        }

        self.save_history();
        println!();
        Ok(())
    }

    fn save_history(&mut self) {
        if let Err(err) = self.editor.save_history(&self.history_path) {
            warn!("Cannot save history to {}: {}", self.history_path.display(), err);
        }
    }

    fn print_banner(&self) {
        println!();
        println!(
            "  {} {}",
            self.style.heading("stepwise"),
            self.style.number(env!("CARGO_PKG_VERSION"))
        );
        println!(
            "  {}",
            self.style.dim("Enter a pipeline, then pull from it with .next")
        );
        println!(
            "  {} {} {}",
            self.style.dim("Type"),
            self.style.accent(".help"),
            self.style.dim("for available commands")
        );
        println!();
    }

    fn execute_command(&mut self, cmd: ReplCommand, arg: Option<&str>) -> CommandResult {
        match cmd {
            ReplCommand::Help => self.print_help(),
            ReplCommand::Exit => return CommandResult::Exit,
            ReplCommand::Next => match parse_count(arg) {
                Ok(count) => {
                    let pulled = self.session.next(count);
                    self.print_pulled(pulled);
                }
                Err(message) => self.print_error(&message),
            },
            ReplCommand::Drain => {
                let pulled = self.session.drain();
                self.print_pulled(pulled);
            }
            ReplCommand::Reset => match self.session.reset() {
                Ok(()) => println!("{}", self.style.dim("pipeline reset")),
                Err(err) => self.print_error(&err.to_string()),
            },
            ReplCommand::Version => {
                println!(
                    "{}: {}",
                    self.style.accent("stepwise"),
                    self.style.number(env!("CARGO_PKG_VERSION"))
                );
            }
            ReplCommand::Clear => print!("\x1B[2J\x1B[H"),
        }
        CommandResult::Continue
    }

    fn load(&mut self, text: &str) {
        match self.session.load(text) {
            Ok(pipeline) => {
                let stages = pipeline.stage_count();
                println!(
                    "{} {}",
                    self.style.pass("loaded"),
                    self.style.dim(&format!(
                        "({} stage{})",
                        stages,
                        if stages == 1 { "" } else { "s" }
                    ))
                );
            }
            Err(err) => self.print_error(&err.to_string()),
        }
    }

    fn print_pulled(&self, pulled: Result<Pulled>) {
        let pulled = match pulled {
            Ok(pulled) => pulled,
            Err(err) => return self.print_error(&err.to_string()),
        };
        for (index, value) in &pulled.items {
            println!(
                "{} {}",
                self.style.dim(&format!("{:>4}", index)),
                format_value(value, self.style)
            );
        }
        if pulled.finished {
            println!(
                "{}",
                self.style
                    .dim(&format!("finished after {} items", self.session.produced()))
            );
        }
    }

    fn print_help(&self) {
        println!();
        println!("{}", self.style.heading("REPL Commands:"));
        println!();
        for (cmd, desc) in ReplCommand::all_commands() {
            println!("  {:16} {}", self.style.accent(cmd), self.style.dim(desc));
        }
        println!();
        println!("{}", self.style.heading("Pipelines:"));
        println!();
        println!("  {}", self.style.dim("list <item>... | range <start> <end> [by <delta>]"));
        println!(
            "  {}",
            self.style
                .dim("then any of: | filter even|odd|gt n|lt n|starts-with p | take n")
        );
        println!(
            "  {}",
            self.style.dim("             | map double|negate|upper | enumerate")
        );
        println!();
    }

    fn print_error(&self, message: &str) {
        eprintln!("{}: {}", self.style.fail("Error"), message);
    }
}

/// Result of executing a REPL command
enum CommandResult {
    Continue,
    Exit,
}

/// Parse the optional count given to `.next`.
fn parse_count(arg: Option<&str>) -> std::result::Result<usize, String> {
    match arg {
        None => Ok(1),
        Some(text) => match text.parse::<usize>() {
            Ok(0) | Err(_) => Err(format!(".next expects a positive count, got '{}'", text)),
            Ok(count) => Ok(count),
        },
    }
}

/// Format a pipeline value with colouring by kind
pub fn format_value(value: &Value, style: Style) -> String {
    match value {
        Value::Int(n) => style.number(&n.to_string()),
        Value::Text(_) => style.text(&value.to_string()),
        Value::Entry(index, inner) => format!(
            "[{}, {}]",
            style.number(&index.to_string()),
            format_value(inner, style)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stepwise_macros::{assert_err, assert_matches, assert_ok};

    #[test]
    fn test_repl_command_parse() {
        assert_matches!(ReplCommand::parse(".help"), Some((ReplCommand::Help, None)));
        assert_matches!(ReplCommand::parse(".exit"), Some((ReplCommand::Exit, None)));
        assert_matches!(ReplCommand::parse(".next 3"), Some((ReplCommand::Next, Some("3"))));
        assert_matches!(ReplCommand::parse(" .n "), Some((ReplCommand::Next, None)));
        assert_matches!(ReplCommand::parse(".DRAIN"), Some((ReplCommand::Drain, None)));
        assert!(ReplCommand::parse(".load file").is_none());
        assert!(ReplCommand::parse("range 1 5").is_none());
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count(None), Ok(1));
        assert_eq!(parse_count(Some("4")), Ok(4));
        assert!(parse_count(Some("0")).is_err());
        assert!(parse_count(Some("-2")).is_err());
    }

    #[test]
    fn test_session_steps_one_at_a_time() {
        let mut session = Session::new();
        let pipeline = assert_ok!(session.load("range 1 10 by 2 | map double"));
        assert_eq!(pipeline.stage_count(), 1);

        let pulled = assert_ok!(session.next(2));
        assert_eq!(pulled.items, vec![(1, Value::Int(2)), (2, Value::Int(6))]);
        assert!(!pulled.finished);

        let rest = assert_ok!(session.drain());
        assert_eq!(rest.items.len(), 3);
        assert!(rest.finished);
        assert_eq!(session.produced(), 5);

        // finished stays finished
        let after = assert_ok!(session.next(1));
        assert!(after.items.is_empty());
        assert!(after.finished);
    }

    #[test]
    fn test_session_reset_starts_over() {
        let mut session = Session::new();
        assert_ok!(session.load("list a b"));
        assert_ok!(session.drain());
        assert_ok!(session.reset());
        assert_eq!(session.produced(), 0);
        let pulled = assert_ok!(session.next(1));
        assert_eq!(pulled.items, vec![(1, Value::Text("a".to_string()))]);
    }

    #[test]
    fn test_session_without_pipeline() {
        let mut session = Session::new();
        assert_matches!(assert_err!(session.next(1)), StepwiseError::NoPipeline);
        assert_matches!(assert_err!(session.reset()), StepwiseError::NoPipeline);
    }

    #[test]
    fn test_bad_pipeline_keeps_previous() {
        let mut session = Session::new();
        assert_ok!(session.load("list x"));
        let err = assert_err!(session.load("list x | take -1"));
        assert!(err.to_string().contains("InvalidBound"));
        let pulled = assert_ok!(session.next(1));
        assert_eq!(pulled.items, vec![(1, Value::Text("x".to_string()))]);
    }

    #[test]
    fn test_format_value_plain() {
        let style = Style::new(false);
        let entry = Value::Entry(0, Box::new(Value::Text("Purple".to_string())));
        assert_eq!(format_value(&entry, style), "[0, 'Purple']");
        assert_eq!(format_value(&Value::Int(-3), style), "-3");
    }

    #[test]
    fn test_word_start() {
        assert_eq!(word_start("list a | fil"), 9);
        assert_eq!(word_start("starts-wi"), 0);
        assert_eq!(word_start(".ne"), 0);
    }

    #[test]
    fn test_word_start_after_multibyte_char() {
        let line = "list 5€x";
        let start = word_start(line);
        assert_eq!(start, 9);
        assert!(line.is_char_boundary(start));
        assert_eq!(&line[start..], "x");
        assert_eq!(word_start("a→"), "a→".len());
    }

    #[test]
    fn test_helper_handles_multibyte_input() {
        let helper = StepwiseHelper::new(false);
        let history = DefaultHistory::new();
        let ctx = rustyline::Context::new(&history);
        assert_eq!(helper.hint("range 1 5 → fi", 16, &ctx), Some("lter".to_string()));
        let (start, matches) = assert_ok!(helper.complete("list €ta", 10, &ctx));
        assert_eq!(start, 10);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].replacement, "ke");
    }
}
