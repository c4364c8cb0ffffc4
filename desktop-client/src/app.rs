use std::time::Duration;

use common::GameKind;
use common::games::{GameSnapshot, Intent};
use common::session::{SessionCommand, SessionSnapshot};
use common::trivia::TriviaRound;
use eframe::egui;
use tokio::sync::watch;

use crate::command_sender::CommandSender;
use crate::terminal::{Terminal, TerminalAction};
use crate::ui::{MemoryGameUi, SnakeGameUi, TriviaUi, WhackGameUi, render_terminal};

const KEY_NAMES: [(egui::Key, &str); 11] = [
    (egui::Key::ArrowUp, "ArrowUp"),
    (egui::Key::ArrowDown, "ArrowDown"),
    (egui::Key::ArrowLeft, "ArrowLeft"),
    (egui::Key::ArrowRight, "ArrowRight"),
    (egui::Key::W, "w"),
    (egui::Key::S, "s"),
    (egui::Key::A, "a"),
    (egui::Key::D, "d"),
    (egui::Key::Space, "Space"),
    (egui::Key::R, "r"),
    (egui::Key::Enter, "Enter"),
];

const ACTIVE_REPAINT: Duration = Duration::from_millis(16);
const IDLE_REPAINT: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Game(GameKind),
    Trivia,
}

pub struct PlaygroundApp {
    commands: CommandSender,
    session: watch::Receiver<SessionSnapshot>,
    trivia: watch::Receiver<TriviaRound>,
    tab: Tab,
    terminal: Terminal,
    snake_ui: SnakeGameUi,
    memory_ui: MemoryGameUi,
    whack_ui: WhackGameUi,
    trivia_ui: TriviaUi,
}

impl PlaygroundApp {
    pub fn new(
        commands: CommandSender,
        session: watch::Receiver<SessionSnapshot>,
        trivia: watch::Receiver<TriviaRound>,
        grid_size: u32,
    ) -> Self {
        commands.session(SessionCommand::Select(GameKind::Snake));
        Self {
            commands,
            session,
            trivia,
            tab: Tab::Game(GameKind::Snake),
            terminal: Terminal::new(),
            snake_ui: SnakeGameUi::new(grid_size),
            memory_ui: MemoryGameUi::new(),
            whack_ui: WhackGameUi::new(),
            trivia_ui: TriviaUi::new(),
        }
    }

    fn open_tab(&mut self, tab: Tab) {
        if self.tab == tab {
            return;
        }
        self.tab = tab;
        match tab {
            Tab::Game(kind) => self.commands.session(SessionCommand::Select(kind)),
            Tab::Trivia => self.commands.session(SessionCommand::Reset),
        }
    }

    fn handle_keys(&self, ctx: &egui::Context) {
        if !matches!(self.tab, Tab::Game(_)) || ctx.wants_keyboard_input() {
            return;
        }
        let intents: Vec<Intent> = ctx.input(|i| {
            KEY_NAMES
                .iter()
                .filter(|(key, _)| i.key_pressed(*key))
                .filter_map(|(_, name)| Intent::from_key(name))
                .collect()
        });
        for intent in intents {
            self.commands.session(SessionCommand::Input(intent));
        }
    }

    fn render_tabs(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for kind in GameKind::ALL {
                if ui
                    .selectable_label(self.tab == Tab::Game(kind), kind.label())
                    .clicked()
                {
                    self.open_tab(Tab::Game(kind));
                }
            }
            if ui.selectable_label(self.tab == Tab::Trivia, "Trivia").clicked() {
                self.open_tab(Tab::Trivia);
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(egui::RichText::new("Press ` for terminal").weak());
            });
        });
    }

    fn render_game(&mut self, ui: &mut egui::Ui, kind: GameKind, snapshot: &SessionSnapshot) {
        let Some(game) = snapshot.game.as_ref().filter(|g| g.kind() == kind) else {
            ui.centered_and_justified(|ui| {
                ui.label("Loading...");
            });
            return;
        };

        if snapshot.finished
            && let Some(value) = snapshot.fresh_record
        {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(format!("New record: {}!", value))
                        .color(egui::Color32::GOLD)
                        .size(20.0),
                );
            });
        }

        let best = snapshot.record(kind);
        match game {
            GameSnapshot::Snake(state) => self.snake_ui.render(ui, state, best, &self.commands),
            GameSnapshot::Memory(state) => {
                self.memory_ui
                    .render(ui, state, best, snapshot.paused, &self.commands)
            }
            GameSnapshot::Whack(state) => {
                self.whack_ui
                    .render(ui, state, best, snapshot.paused, &self.commands)
            }
        }
    }
}

impl eframe::App for PlaygroundApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let snapshot = self.session.borrow_and_update().clone();
        let round = self.trivia.borrow_and_update().clone();

        if ctx.input(|i| i.key_pressed(egui::Key::Backtick)) {
            self.terminal.toggle();
            self.terminal.input.retain(|c| c != '`');
        }

        if self.terminal.is_open() {
            if render_terminal(ctx, &mut self.terminal)
                && let TerminalAction::Play(kind) = self.terminal.submit(&snapshot)
            {
                self.open_tab(Tab::Game(kind));
                self.commands.session(SessionCommand::Start);
            }
        } else {
            self.handle_keys(ctx);
        }

        egui::TopBottomPanel::top("tabs").show(ctx, |ui| {
            self.render_tabs(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.tab {
            Tab::Game(kind) => self.render_game(ui, kind, &snapshot),
            Tab::Trivia => self.trivia_ui.render(ui, &round, &self.commands),
        });

        let running = snapshot.game.is_some() && !snapshot.paused && !snapshot.finished;
        let busy = self.tab == Tab::Trivia && round.phase().is_busy();
        ctx.request_repaint_after(if running || busy {
            ACTIVE_REPAINT
        } else {
            IDLE_REPAINT
        });
    }
}
