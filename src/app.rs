// Interactive loop: a `dialoguer` prompt picks an action, follow-up prompts
// collect its fields, and the user collection does the rest.

use anyhow::{Context, Result};
use crossterm::tty::IsTty;
use dialoguer::Input;
use std::io::{self, BufRead, Write};

use crate::console::Console;
use crate::message::{Message, MessageVariant};
use crate::users::{User, UsersData};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    List,
    Add,
    Remove,
    Quit,
}

impl Action {
    /// Exact, case-sensitive match against the four menu keywords.
    pub fn parse(input: &str) -> Option<Action> {
        match input {
            "list" => Some(Action::List),
            "add" => Some(Action::Add),
            "remove" => Some(Action::Remove),
            "quit" => Some(Action::Quit),
            _ => None,
        }
    }
}

/// Whether the session keeps asking after each action or stops after one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopMode {
    Continuous,
    SingleShot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Source of operator answers.
pub trait Prompt {
    fn action(&mut self) -> io::Result<String>;
    fn name(&mut self) -> io::Result<String>;
    fn age(&mut self) -> io::Result<i64>;
}

/// Terminal prompts backed by `dialoguer::Input`. Empty answers are let
/// through so that validation stays in one place.
///
/// dialoguer answers `""` without reading when the session is not
/// attended, so piped or closed stdin goes through [`LinePrompt`] instead.
pub struct TerminalPrompt;

impl TerminalPrompt {
    fn attended() -> bool {
        io::stdin().is_tty() && io::stdout().is_tty()
    }

    fn lines() -> LinePrompt<io::StdinLock<'static>, io::Stdout> {
        LinePrompt::new(io::stdin().lock(), io::stdout())
    }
}

impl Prompt for TerminalPrompt {
    fn action(&mut self) -> io::Result<String> {
        if !Self::attended() {
            return Self::lines().action();
        }
        Input::<String>::new()
            .with_prompt(ACTION_PROMPT)
            .allow_empty(true)
            .interact_text()
    }

    fn name(&mut self) -> io::Result<String> {
        if !Self::attended() {
            return Self::lines().name();
        }
        Input::<String>::new()
            .with_prompt(NAME_PROMPT)
            .allow_empty(true)
            .interact_text()
    }

    fn age(&mut self) -> io::Result<i64> {
        if !Self::attended() {
            return Self::lines().age();
        }
        // dialoguer re-asks until the answer parses as a number.
        Input::<i64>::new().with_prompt(AGE_PROMPT).interact_text()
    }
}

const ACTION_PROMPT: &str = "How can I help you?";
const NAME_PROMPT: &str = "Enter name";
const AGE_PROMPT: &str = "Enter age";

/// Line-at-a-time prompts over any reader. A closed input surfaces as
/// `UnexpectedEof`.
pub struct LinePrompt<R: BufRead, W: Write> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, out: W) -> Self {
        LinePrompt { input, out }
    }

    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.out, "{}: ", prompt)?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out)?;
            return Err(io::Error::from(io::ErrorKind::UnexpectedEof));
        }
        let trimmed = line.strip_suffix('\n').unwrap_or(&line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(trimmed.to_string())
    }

    pub fn into_output(self) -> W {
        self.out
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn action(&mut self) -> io::Result<String> {
        self.ask(ACTION_PROMPT)
    }

    fn name(&mut self) -> io::Result<String> {
        self.ask(NAME_PROMPT)
    }

    fn age(&mut self) -> io::Result<i64> {
        loop {
            let answer = self.ask(AGE_PROMPT)?;
            match answer.trim().parse() {
                Ok(age) => return Ok(age),
                Err(e) => {
                    let line = Message::styled(MessageVariant::Error, &e.to_string(), false);
                    writeln!(self.out, "{}", line)?;
                }
            }
        }
    }
}

const MENU: [&str; 4] = [
    "list - show all users",
    "add - add new user to the list",
    "remove - remove user from the list",
    "quit - quit the app",
];

/// Banner and action menu, printed once per session.
pub fn print_welcome<W: Write>(console: &mut Console<W>) -> io::Result<()> {
    console.blank()?;
    Message::new("Welcome to the UsersApp!").show_to(console)?;
    Message::new("=".repeat(36)).show_to(console)?;
    console.emit(MessageVariant::Info, "Available actions")?;
    console.blank()?;
    for entry in MENU {
        console.line(entry)?;
    }
    console.blank()
}

/// Handle a single action, asking for whatever fields it needs.
pub fn dispatch<P, W>(action: Action, prompt: &mut P, users: &mut UsersData<W>) -> Result<Flow>
where
    P: Prompt + ?Sized,
    W: Write,
{
    log::debug!("dispatching {:?}", action);
    let outcome = match action {
        Action::List => users.show_all(),
        Action::Add => {
            let name = prompt.name().context("Failed to read name")?;
            let age = prompt.age().context("Failed to read age")?;
            users.add(User::new(name, age))
        }
        Action::Remove => {
            let name = prompt.name().context("Failed to read name")?;
            users.remove(&name)
        }
        Action::Quit => {
            users
                .console_mut()
                .emit(MessageVariant::Info, "Goodbye.")
                .context("Failed to write goodbye")?;
            return Ok(Flow::Quit);
        }
    };
    match outcome {
        Err(e) if e.is_reported() => log::debug!("{:?} reported: {}", action, e),
        other => other.with_context(|| format!("{:?} failed", action))?,
    }
    Ok(Flow::Continue)
}

/// Print the welcome banner, then serve actions until `quit`, end of
/// input, or (in single-shot mode) after the first answer.
pub fn run<P, W>(prompt: &mut P, users: &mut UsersData<W>, mode: LoopMode) -> Result<()>
where
    P: Prompt + ?Sized,
    W: Write,
{
    print_welcome(users.console_mut()).context("Failed to print welcome")?;
    loop {
        let answer = match prompt.action() {
            Ok(answer) => answer,
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                log::info!("input closed, ending session");
                return Ok(());
            }
            Err(e) => return Err(e).context("Failed to read action"),
        };
        let flow = match Action::parse(&answer) {
            Some(action) => match dispatch(action, prompt, users) {
                Err(e) if is_eof(&e) => {
                    log::info!("input closed, ending session");
                    return Ok(());
                }
                other => other?,
            },
            None => {
                log::trace!("ignoring unrecognised action {:?}", answer);
                Flow::Continue
            }
        };
        if flow == Flow::Quit || mode == LoopMode::SingleShot {
            return Ok(());
        }
    }
}

fn is_eof(err: &anyhow::Error) -> bool {
    err.downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == io::ErrorKind::UnexpectedEof)
}
