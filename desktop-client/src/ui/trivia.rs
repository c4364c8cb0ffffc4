use common::trivia::{TOPICS, TriviaCommand, TriviaPhase, TriviaRound};

use crate::command_sender::CommandSender;

#[derive(Default)]
pub struct TriviaUi {
    answer: String,
}

impl TriviaUi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, ui: &mut egui::Ui, round: &TriviaRound, commands: &CommandSender) {
        let phase = round.phase();
        ui.vertical_centered(|ui| {
            ui.heading("Neural Trivia");
            ui.label("Test your knowledge. Pick a topic and ask for a question.");
            ui.add_space(10.0);

            ui.horizontal_wrapped(|ui| {
                ui.label("Choose a topic:");
                for topic in TOPICS {
                    let selected = round.topic() == topic;
                    if ui
                        .add_enabled(!phase.is_busy(), egui::Button::selectable(selected, topic))
                        .clicked()
                    {
                        commands.trivia(TriviaCommand::SetTopic(topic.to_string()));
                    }
                }
            });
            ui.add_space(10.0);

            match phase {
                TriviaPhase::Idle => {
                    if ui.button("Generate Question").clicked() {
                        commands.trivia(TriviaCommand::Ask);
                    }
                }
                TriviaPhase::Loading => {
                    ui.spinner();
                    ui.label("Thinking...");
                }
                TriviaPhase::AwaitingAnswer { question } => {
                    ui.label(egui::RichText::new(question).size(18.0));
                    ui.add_space(6.0);
                    let response = ui.text_edit_singleline(&mut self.answer);
                    let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if submitted || ui.button("Submit").clicked() {
                        commands.trivia(TriviaCommand::Answer(std::mem::take(&mut self.answer)));
                    }
                }
                TriviaPhase::Checking { question, .. } => {
                    ui.label(egui::RichText::new(question).size(18.0));
                    ui.spinner();
                }
                TriviaPhase::Answered { question, verdict } => {
                    ui.label(egui::RichText::new(question).size(18.0));
                    let color = if verdict.correct {
                        egui::Color32::GREEN
                    } else {
                        egui::Color32::RED
                    };
                    ui.label(egui::RichText::new(&verdict.feedback).color(color));
                    if ui.button("Next Question").clicked() {
                        commands.trivia(TriviaCommand::Ask);
                    }
                }
                TriviaPhase::Failed(message) => {
                    ui.label(egui::RichText::new(message).color(egui::Color32::RED));
                    if ui.button("Try Again").clicked() {
                        commands.trivia(TriviaCommand::Ask);
                    }
                }
            }
        });
    }
}
