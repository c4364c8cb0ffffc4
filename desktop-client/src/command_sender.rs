use common::log_warn;
use common::session::SessionCommand;
use common::trivia::TriviaCommand;
use tokio::sync::mpsc;

/// Non-blocking handle the UI thread uses to reach the runtime thread.
#[derive(Clone)]
pub struct CommandSender {
    session: mpsc::Sender<SessionCommand>,
    trivia: mpsc::Sender<TriviaCommand>,
}

impl CommandSender {
    pub fn new(session: mpsc::Sender<SessionCommand>, trivia: mpsc::Sender<TriviaCommand>) -> Self {
        Self { session, trivia }
    }

    pub fn session(&self, command: SessionCommand) {
        if let Err(e) = self.session.try_send(command) {
            log_warn!("Dropped session command: {}", e);
        }
    }

    pub fn trivia(&self, command: TriviaCommand) {
        if let Err(e) = self.trivia.try_send(command) {
            log_warn!("Dropped trivia command: {}", e);
        }
    }
}
