use chrono::{DateTime, Local};
use common::GameKind;
use common::session::SessionSnapshot;
use ringbuffer::{AllocRingBuffer, RingBuffer};

pub const HISTORY_CAPACITY: usize = 200;

const HELP: &str = "COMMANDS LIST:
  ---------------------------
  > help        Show this list
  > games       List available games
  > play <game> Start a game (snake, memory, whack)
  > scores      Show saved records
  > clear       Clear terminal buffer
  > date        Display local time
  > whoami      Identify current user
  > ls          List files
  > exit        Close terminal session";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    Input,
    Output,
    System,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TerminalLine {
    pub kind: LineKind,
    pub content: String,
}

impl TerminalLine {
    fn new(kind: LineKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
        }
    }
}

/// What the app should do after a command ran.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TerminalAction {
    None,
    Play(GameKind),
}

pub struct Terminal {
    open: bool,
    pub input: String,
    history: AllocRingBuffer<TerminalLine>,
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Terminal {
    pub fn new() -> Self {
        let mut history = AllocRingBuffer::new(HISTORY_CAPACITY);
        history.enqueue(TerminalLine::new(
            LineKind::System,
            format!("Welcome to Arcade Playground v{}", env!("CARGO_PKG_VERSION")),
        ));
        history.enqueue(TerminalLine::new(
            LineKind::System,
            "Type \"help\" to view available commands.",
        ));
        Self {
            open: false,
            input: String::new(),
            history,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn history(&self) -> &AllocRingBuffer<TerminalLine> {
        &self.history
    }

    /// Runs whatever is in the input field and clears it.
    pub fn submit(&mut self, snapshot: &SessionSnapshot) -> TerminalAction {
        let raw = std::mem::take(&mut self.input);
        self.execute(&raw, snapshot, Local::now())
    }

    pub fn execute(&mut self, raw: &str, snapshot: &SessionSnapshot, now: DateTime<Local>) -> TerminalAction {
        let command = raw.trim().to_lowercase();
        if command.is_empty() {
            return TerminalAction::None;
        }
        self.history
            .enqueue(TerminalLine::new(LineKind::Input, raw.trim()));

        let mut words = command.split_whitespace();
        let name = words.next().unwrap_or_default();
        let argument = words.next();

        let (response, action) = match (name, argument) {
            ("help", None) => (HELP.to_string(), TerminalAction::None),
            ("clear", None) => {
                self.history.clear();
                return TerminalAction::None;
            }
            ("games", None) => (list_games(), TerminalAction::None),
            ("play", Some(game)) => match GameKind::from_name(game) {
                Some(kind) => (
                    format!("Launching {}...", kind.label()),
                    TerminalAction::Play(kind),
                ),
                None => (
                    format!("Unknown game '{}'. Try: snake, memory, whack", game),
                    TerminalAction::None,
                ),
            },
            ("play", None) => (
                "Usage: play <snake|memory|whack>".to_string(),
                TerminalAction::None,
            ),
            ("scores", None) => (list_scores(snapshot), TerminalAction::None),
            ("date", None) => (
                now.format("%Y-%m-%d %H:%M:%S").to_string(),
                TerminalAction::None,
            ),
            ("whoami", None) => (
                "User: GUEST\nRole: PLAYER\nPermissions: READ_ONLY".to_string(),
                TerminalAction::None,
            ),
            ("ls", None) => (
                "snake.bin  memory.bin  bug_hunter.bin  trivia.db  scores.yaml".to_string(),
                TerminalAction::None,
            ),
            ("sudo", _) => (
                "Access Denied: You do not have root privileges in this sector.".to_string(),
                TerminalAction::None,
            ),
            ("exit", None) => {
                self.open = false;
                ("Session terminated.".to_string(), TerminalAction::None)
            }
            _ => (
                format!(
                    "Error: Command '{}' not recognized. Type \"help\" for assistance.",
                    command
                ),
                TerminalAction::None,
            ),
        };

        self.history
            .enqueue(TerminalLine::new(LineKind::Output, response));
        action
    }
}

fn list_games() -> String {
    GameKind::ALL
        .iter()
        .map(|kind| format!("> {:<8} {}", format!("{:?}", kind).to_lowercase(), kind.label()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn list_scores(snapshot: &SessionSnapshot) -> String {
    GameKind::ALL
        .iter()
        .map(|kind| {
            let value = match (snapshot.record(*kind), kind) {
                (None, _) => "none".to_string(),
                (Some(moves), GameKind::Memory) => format!("{} moves", moves),
                (Some(score), _) => format!("{} points", score),
            };
            format!("{}: {}", kind.label(), value)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
