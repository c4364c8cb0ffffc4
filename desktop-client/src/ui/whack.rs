use common::games::whack::{WhackState, WhackStatus};
use common::games::Intent;
use common::session::SessionCommand;

use super::{render_banner, render_controls};
use crate::command_sender::CommandSender;

const HOLE_SIZE: egui::Vec2 = egui::vec2(90.0, 90.0);

pub struct WhackGameUi;

impl WhackGameUi {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        ui: &mut egui::Ui,
        state: &WhackState,
        best: Option<u32>,
        paused: bool,
        commands: &CommandSender,
    ) {
        ui.vertical_centered(|ui| {
            ui.horizontal(|ui| {
                ui.heading(format!("Score: {}", state.score));
                ui.separator();
                ui.label(format!("Time: {}s", state.time_remaining_sec));
                ui.separator();
                ui.label(format!("High Score: {}", best.unwrap_or(0)));
            });
            ui.add_space(8.0);

            let columns = (state.cell_count as f64).sqrt().ceil().max(1.0) as usize;
            egui::Grid::new("whack_board")
                .spacing(egui::vec2(8.0, 8.0))
                .show(ui, |ui| {
                    for cell in 0..state.cell_count {
                        let has_bug = state.active_cell == Some(cell);
                        let text = if has_bug { "BUG" } else { "" };
                        let fill = if has_bug {
                            egui::Color32::from_rgb(0xdc, 0x26, 0x26)
                        } else {
                            egui::Color32::from_rgb(0x1f, 0x29, 0x37)
                        };
                        let button = egui::Button::new(egui::RichText::new(text).size(18.0))
                            .fill(fill)
                            .min_size(HOLE_SIZE);
                        let live = state.status == WhackStatus::Running && !paused;
                        if ui.add_enabled(live, button).clicked() {
                            commands.session(SessionCommand::Input(Intent::Cell(cell)));
                        }
                        if (cell + 1) % columns == 0 {
                            ui.end_row();
                        }
                    }
                });

            ui.add_space(8.0);
            match state.status {
                WhackStatus::Idle => {
                    ui.label("Squash bugs before the clock runs out. Misses cost a point.");
                }
                WhackStatus::Running if paused => render_banner(ui, "Paused", egui::Color32::YELLOW),
                WhackStatus::Running => {}
                WhackStatus::Ended => render_banner(
                    ui,
                    &format!("Time's up! Final score: {}", state.score),
                    egui::Color32::LIGHT_BLUE,
                ),
            }

            let started = state.status != WhackStatus::Idle;
            render_controls(ui, commands, started, state.status == WhackStatus::Ended, paused);
        });
    }
}
