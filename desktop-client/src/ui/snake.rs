use common::games::snake::{SnakeState, SnakeStatus};

use super::{render_banner, render_controls};
use crate::command_sender::CommandSender;

const BOARD_COLOR: egui::Color32 = egui::Color32::from_rgb(0x1a, 0x1a, 0x2e);
const HEAD_COLOR: egui::Color32 = egui::Color32::from_rgb(0x4a, 0xde, 0x80);
const BODY_COLOR: egui::Color32 = egui::Color32::from_rgb(0x22, 0xc5, 0x5e);
const FOOD_COLOR: egui::Color32 = egui::Color32::from_rgb(0xef, 0x44, 0x44);

pub struct SnakeGameUi {
    grid_size: u32,
}

impl SnakeGameUi {
    pub fn new(grid_size: u32) -> Self {
        Self { grid_size }
    }

    pub fn render(&self, ui: &mut egui::Ui, state: &SnakeState, best: Option<u32>, commands: &CommandSender) {
        ui.vertical_centered(|ui| {
            ui.horizontal(|ui| {
                ui.heading(format!("Score: {}", state.score));
                ui.separator();
                ui.label(format!("Level: {}", state.level));
                ui.separator();
                ui.label(format!("High Score: {}", best.unwrap_or(0)));
            });
            ui.add_space(8.0);

            self.render_board(ui, state);
            ui.add_space(8.0);

            match state.status {
                SnakeStatus::NotStarted => {
                    ui.label("Press Start, then steer with Arrow Keys or WASD");
                }
                SnakeStatus::Running => {
                    ui.label("Space pauses");
                }
                SnakeStatus::Paused => render_banner(ui, "Paused", egui::Color32::YELLOW),
                SnakeStatus::LevelingUp => render_banner(
                    ui,
                    &format!("Level {}!", state.level),
                    egui::Color32::LIGHT_GREEN,
                ),
                SnakeStatus::GameOver => render_banner(ui, "Game Over", egui::Color32::RED),
            }

            let started = state.status != SnakeStatus::NotStarted;
            let finished = state.status == SnakeStatus::GameOver;
            render_controls(ui, commands, started, finished, state.status == SnakeStatus::Paused);
        });
    }

    fn render_board(&self, ui: &mut egui::Ui, state: &SnakeState) {
        let available = ui.available_size();
        let board_size = available.x.min(available.y - 80.0).clamp(200.0, 600.0);
        let cell = board_size / self.grid_size as f32;

        let (response, painter) =
            ui.allocate_painter(egui::vec2(board_size, board_size), egui::Sense::hover());
        let origin = response.rect.min;
        painter.rect_filled(response.rect, 4.0, BOARD_COLOR);

        let cell_rect = |x: i32, y: i32| {
            egui::Rect::from_min_size(
                origin + egui::vec2(x as f32 * cell, y as f32 * cell),
                egui::vec2(cell, cell),
            )
            .shrink(1.0)
        };

        painter.circle_filled(
            cell_rect(state.food.x, state.food.y).center(),
            cell * 0.4,
            FOOD_COLOR,
        );

        for (i, segment) in state.body.iter().enumerate() {
            let color = if i == 0 { HEAD_COLOR } else { BODY_COLOR };
            painter.rect_filled(cell_rect(segment.x, segment.y), 2.0, color);
        }
    }
}
