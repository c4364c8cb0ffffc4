use crate::terminal::{LineKind, Terminal};

const TERMINAL_GREEN: egui::Color32 = egui::Color32::from_rgb(0x22, 0xc5, 0x5e);

/// Draws the drop-down terminal. Returns true when the user submitted a line.
pub fn render_terminal(ctx: &egui::Context, terminal: &mut Terminal) -> bool {
    let mut submitted = false;
    egui::TopBottomPanel::top("terminal")
        .resizable(true)
        .default_height(360.0)
        .frame(egui::Frame::new().fill(egui::Color32::from_rgb(0x0a, 0x0a, 0x0a)).inner_margin(8.0))
        .show(ctx, |ui| {
            ui.label(egui::RichText::new("guest@arcade:~").monospace().color(TERMINAL_GREEN));
            ui.separator();

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .stick_to_bottom(true)
                .max_height(ui.available_height() - 32.0)
                .show(ui, |ui| {
                    for line in terminal.history() {
                        let (prefix, color) = match line.kind {
                            LineKind::Input => ("> ", egui::Color32::WHITE),
                            LineKind::Output => ("", TERMINAL_GREEN),
                            LineKind::System => ("", egui::Color32::GRAY),
                        };
                        ui.label(
                            egui::RichText::new(format!("{}{}", prefix, line.content))
                                .monospace()
                                .color(color),
                        );
                    }
                });

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(">").monospace().color(TERMINAL_GREEN));
                let response = ui.add(
                    egui::TextEdit::singleline(&mut terminal.input)
                        .font(egui::TextStyle::Monospace)
                        .desired_width(f32::INFINITY)
                        .frame(false),
                );
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    submitted = true;
                    response.request_focus();
                } else if !response.has_focus() {
                    response.request_focus();
                }
            });
        });
    submitted
}
