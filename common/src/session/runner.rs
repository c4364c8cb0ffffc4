use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::time::{Instant, sleep_until};

use super::controller::{SessionController, SessionSnapshot};
use crate::feedback::FeedbackHook;
use crate::games::{GameEvent, Intent};
use crate::identifiers::GameKind;
use crate::storage::KeyValueStore;
use crate::{log, log_debug};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    Select(GameKind),
    Start,
    Pause,
    Resume,
    TogglePause,
    Reset,
    Input(Intent),
    Shutdown,
}

/// Drives a controller in real time: sleeps until the next game deadline or
/// until a command arrives, whichever is first, and publishes a snapshot after each.
pub struct SessionRunner<S: KeyValueStore, F: FeedbackHook> {
    controller: SessionController<S, F>,
    commands: mpsc::Receiver<SessionCommand>,
    snapshots: watch::Sender<SessionSnapshot>,
    origin: Instant,
}

impl<S: KeyValueStore, F: FeedbackHook> SessionRunner<S, F> {
    pub fn new(
        controller: SessionController<S, F>,
        commands: mpsc::Receiver<SessionCommand>,
    ) -> (Self, watch::Receiver<SessionSnapshot>) {
        let (snapshots, receiver) = watch::channel(controller.snapshot());
        let runner = Self {
            controller,
            commands,
            snapshots,
            origin: Instant::now(),
        };
        (runner, receiver)
    }

    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    /// Runs until `Shutdown` or until every command sender is dropped, then hands the controller back.
    pub async fn run(mut self) -> SessionController<S, F> {
        log!("Session runner started");
        loop {
            let deadline = self.controller.next_deadline().map(|d| self.origin + d);
            tokio::select! {
                _ = wait_for(deadline) => {
                    let now = self.now();
                    let events = self.controller.advance(now);
                    self.publish(&events);
                }
                command = self.commands.recv() => match command {
                    None | Some(SessionCommand::Shutdown) => break,
                    Some(command) => {
                        let events = self.apply(command);
                        self.publish(&events);
                    }
                }
            }
        }
        log!("Session runner stopped");
        self.controller
    }

    fn apply(&mut self, command: SessionCommand) -> Vec<GameEvent> {
        let now = self.now();
        log_debug!("Command {:?} at {:?}", command, now);
        match command {
            SessionCommand::Select(kind) => {
                self.controller.select(kind);
                Vec::new()
            }
            SessionCommand::Start => self.controller.start(now),
            SessionCommand::Pause => self.controller.pause(now),
            SessionCommand::Resume => {
                self.controller.resume(now);
                Vec::new()
            }
            SessionCommand::TogglePause => self.controller.toggle_pause(now),
            SessionCommand::Reset => {
                self.controller.reset();
                Vec::new()
            }
            SessionCommand::Input(intent) => self.controller.handle_input(intent, now),
            SessionCommand::Shutdown => Vec::new(),
        }
    }

    fn publish(&self, events: &[GameEvent]) {
        for event in events {
            log_debug!("Event {:?}", event);
        }
        self.snapshots.send_replace(self.controller.snapshot());
    }
}

async fn wait_for(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlaygroundConfig;
    use crate::feedback::NoFeedback;
    use crate::games::GameSnapshot;
    use crate::ledger::ScoreLedger;
    use crate::storage::MemoryStore;

    type TestRunner = SessionRunner<MemoryStore, NoFeedback>;

    fn runner() -> (TestRunner, mpsc::Sender<SessionCommand>, watch::Receiver<SessionSnapshot>) {
        let controller = SessionController::new(
            PlaygroundConfig::default(),
            ScoreLedger::new(MemoryStore::new()),
            NoFeedback,
            Some(11),
        );
        let (tx, rx) = mpsc::channel(16);
        let (runner, snapshots) = SessionRunner::new(controller, rx);
        (runner, tx, snapshots)
    }

    async fn wait_until<P>(snapshots: &mut watch::Receiver<SessionSnapshot>, predicate: P) -> SessionSnapshot
    where
        P: Fn(&SessionSnapshot) -> bool,
    {
        let waiting = async {
            loop {
                {
                    let current = snapshots.borrow_and_update();
                    if predicate(&current) {
                        return current.clone();
                    }
                }
                snapshots.changed().await.unwrap();
            }
        };
        tokio::time::timeout(Duration::from_secs(5), waiting)
            .await
            .expect("snapshot condition not reached")
    }

    #[tokio::test]
    async fn test_commands_publish_snapshots() {
        let (runner, tx, mut snapshots) = runner();
        let handle = tokio::spawn(runner.run());

        tx.send(SessionCommand::Select(GameKind::Memory)).await.unwrap();
        let snapshot = wait_until(&mut snapshots, |s| s.kind() == Some(GameKind::Memory)).await;
        assert!(!snapshot.paused);

        tx.send(SessionCommand::Shutdown).await.unwrap();
        let controller = handle.await.unwrap();
        assert_eq!(controller.active_kind(), Some(GameKind::Memory));
    }

    #[tokio::test]
    async fn test_deadlines_fire_in_real_time() {
        let (runner, tx, mut snapshots) = runner();
        let handle = tokio::spawn(runner.run());

        tx.send(SessionCommand::Select(GameKind::Whack)).await.unwrap();
        tx.send(SessionCommand::Start).await.unwrap();
        let snapshot = wait_until(&mut snapshots, |s| {
            matches!(&s.game, Some(GameSnapshot::Whack(state)) if state.active_cell.is_some())
        })
        .await;
        assert!(!snapshot.finished);

        drop(tx);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_paused_session_does_not_tick() {
        let (runner, tx, mut snapshots) = runner();
        let handle = tokio::spawn(runner.run());

        tx.send(SessionCommand::Select(GameKind::Whack)).await.unwrap();
        tx.send(SessionCommand::Start).await.unwrap();
        tx.send(SessionCommand::Pause).await.unwrap();
        wait_until(&mut snapshots, |s| s.paused).await;

        tokio::time::sleep(Duration::from_millis(1_200)).await;
        let remaining = match &snapshots.borrow().game {
            Some(GameSnapshot::Whack(state)) => state.time_remaining_sec,
            _ => unreachable!(),
        };
        assert_eq!(remaining, 30);

        tx.send(SessionCommand::Shutdown).await.unwrap();
        let controller = handle.await.unwrap();
        assert!(controller.is_paused());
    }
}
