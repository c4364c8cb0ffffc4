mod memory;
mod snake;
mod terminal;
mod trivia;
mod whack;

pub use memory::MemoryGameUi;
pub use snake::SnakeGameUi;
pub use terminal::render_terminal;
pub use trivia::TriviaUi;
pub use whack::WhackGameUi;

use crate::command_sender::CommandSender;
use common::session::SessionCommand;

/// Start/Restart and Pause/Resume row shared by every game. Buttons give up focus
/// after a click so Space and Enter keep reaching the game.
fn render_controls(ui: &mut egui::Ui, commands: &CommandSender, started: bool, finished: bool, paused: bool) {
    ui.horizontal(|ui| {
        let label = if started { "Restart" } else { "Start" };
        let response = ui.button(label);
        if response.clicked() {
            commands.session(SessionCommand::Start);
            response.surrender_focus();
        }
        if started && !finished {
            let label = if paused { "Resume" } else { "Pause" };
            let response = ui.button(label);
            if response.clicked() {
                commands.session(SessionCommand::TogglePause);
                response.surrender_focus();
            }
        }
    });
}

fn render_banner(ui: &mut egui::Ui, text: &str, color: egui::Color32) {
    ui.label(egui::RichText::new(text).color(color).size(24.0));
}
