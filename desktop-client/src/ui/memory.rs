use common::games::memory::{MemoryCard, MemoryState, MemoryStatus};
use common::games::Intent;
use common::session::SessionCommand;

use super::{render_banner, render_controls};
use crate::command_sender::CommandSender;

const TOKEN_LABELS: [&str; 8] = ["Atom", "Database", "Server", "Cpu", "Globe", "Wifi", "Lock", "Code"];
const COLUMNS: usize = 4;
const CARD_SIZE: egui::Vec2 = egui::vec2(96.0, 72.0);

pub struct MemoryGameUi;

impl MemoryGameUi {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        ui: &mut egui::Ui,
        state: &MemoryState,
        best: Option<u32>,
        paused: bool,
        commands: &CommandSender,
    ) {
        ui.vertical_centered(|ui| {
            ui.horizontal(|ui| {
                ui.heading(format!("Moves: {}", state.move_count));
                ui.separator();
                ui.label(format!(
                    "Pairs: {}/{}",
                    state.matched_count() / 2,
                    state.cards.len() / 2
                ));
                ui.separator();
                match best {
                    Some(best) => ui.label(format!("Best: {} moves", best)),
                    None => ui.label("Best: -"),
                };
            });
            ui.add_space(8.0);

            if state.status == MemoryStatus::Dealing {
                ui.label("Press Start to deal the cards");
            } else {
                egui::Grid::new("memory_board")
                    .spacing(egui::vec2(8.0, 8.0))
                    .show(ui, |ui| {
                        for (i, card) in state.cards.iter().enumerate() {
                            self.render_card(ui, card, paused, commands);
                            if (i + 1) % COLUMNS == 0 {
                                ui.end_row();
                            }
                        }
                    });
            }

            ui.add_space(8.0);
            if state.status == MemoryStatus::Won {
                render_banner(
                    ui,
                    &format!("You Win! {} moves", state.move_count),
                    egui::Color32::GREEN,
                );
            } else if paused {
                render_banner(ui, "Paused", egui::Color32::YELLOW);
            }

            let started = state.status != MemoryStatus::Dealing;
            render_controls(ui, commands, started, state.status == MemoryStatus::Won, paused);
        });
    }

    fn render_card(&self, ui: &mut egui::Ui, card: &MemoryCard, paused: bool, commands: &CommandSender) {
        let revealed = card.face_up || card.matched;
        let text = if revealed {
            token_label(card.token_index)
        } else {
            "?".to_string()
        };
        let fill = if card.matched {
            egui::Color32::from_rgb(0x16, 0x65, 0x34)
        } else if card.face_up {
            egui::Color32::from_rgb(0x1e, 0x40, 0xaf)
        } else {
            egui::Color32::from_rgb(0x37, 0x41, 0x51)
        };

        let button = egui::Button::new(egui::RichText::new(text).size(16.0))
            .fill(fill)
            .min_size(CARD_SIZE);
        let clickable = !revealed && !paused;
        if ui.add_enabled(clickable, button).clicked() {
            commands.session(SessionCommand::Input(Intent::Cell(card.id)));
        }
    }
}

fn token_label(token_index: usize) -> String {
    match TOKEN_LABELS.get(token_index) {
        Some(label) => label.to_string(),
        None => format!("#{}", token_index + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_labels_fall_back_past_the_set() {
        assert_eq!(token_label(0), "Atom");
        assert_eq!(token_label(7), "Code");
        assert_eq!(token_label(8), "#9");
    }
}
