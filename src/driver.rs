//! Async glue between presentation events and the session core.
//!
//! A single spawned task owns the [`ChatSession`] and multiplexes user
//! commands with the two timers the session needs: the periodic activity
//! tick (only while a reply is in flight) and the one-shot reply delay armed
//! per send. After every handled event the task publishes a fresh
//! [`SessionSnapshot`] on a watch channel for the rendering layer.
//!
//! Both timers are cancellable: a reset disarms the pending reply delivery
//! and the tick is gated on `is_replying`, so nothing ever fires into a
//! discarded conversation.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::time::{interval, sleep_until, Instant, MissedTickBehavior};
use tracing::debug;
use uuid::Uuid;

use crate::models::FileBlob;
use crate::state::session::{ChatSession, ReplyCycle};
use crate::view_state::SessionSnapshot;

/// Timing knobs for the simulated assistant.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Cadence of the activity indicator animation.
    pub tick_interval: Duration,
    /// Simulated latency between a send and its assistant reply.
    pub reply_delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(900),
            reply_delay: Duration::from_millis(2000),
        }
    }
}

/// User intents accepted from the presentation layer.
#[derive(Debug, Clone)]
pub enum SessionCommand {
    /// Submit the composer text together with whatever is staged.
    Send { text: String },
    /// Stage raw files for the next send.
    StageFiles(Vec<FileBlob>),
    /// Remove the staged file at `index` (out of range: no-op).
    UnstageFile(usize),
    /// Drop all staged files.
    ClearStaged,
    /// Show an attachment of a logged message in the preview panel.
    OpenPreview { message_id: u64, attachment_id: Uuid },
    /// Close the preview panel.
    ClosePreview,
    /// Start a new conversation, abandoning any in-flight reply.
    Reset,
}

/// Handle held by the presentation layer: commands in, snapshots out.
///
/// Dropping every handle tears the driver task down.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    commands: mpsc::Sender<SessionCommand>,
    snapshots: watch::Receiver<SessionSnapshot>,
}

impl SessionHandle {
    /// Submit a command. Silently dropped if the driver has shut down -
    /// failures are local and nothing here is fatal.
    pub async fn dispatch(&self, command: SessionCommand) {
        if self.commands.send(command).await.is_err() {
            debug!("session driver is gone; command dropped");
        }
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Subscribe to snapshot updates.
    pub fn watch(&self) -> watch::Receiver<SessionSnapshot> {
        self.snapshots.clone()
    }
}

/// Spawn the driver task for `session` and return its handle.
pub fn spawn_session(session: ChatSession, config: SessionConfig) -> SessionHandle {
    let (commands, command_rx) = mpsc::channel(32);
    let (snapshot_tx, snapshots) = watch::channel(SessionSnapshot::capture(&session));
    tokio::spawn(run(session, config, command_rx, snapshot_tx));
    SessionHandle { commands, snapshots }
}

async fn run(
    mut session: ChatSession,
    config: SessionConfig,
    mut commands: mpsc::Receiver<SessionCommand>,
    snapshots: watch::Sender<SessionSnapshot>,
) {
    let mut ticker = interval(config.tick_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    // Armed while a reply is in flight; disarmed on delivery and on reset.
    let mut pending_reply: Option<(Instant, ReplyCycle)> = None;

    loop {
        let reply_deadline = pending_reply.map(|(deadline, _)| deadline);

        tokio::select! {
            maybe_command = commands.recv() => {
                let Some(command) = maybe_command else {
                    debug!("all session handles dropped; driver stopping");
                    break;
                };
                match command {
                    SessionCommand::Send { text } => match session.send(&text) {
                        Ok(cycle) => {
                            pending_reply = Some((Instant::now() + config.reply_delay, cycle));
                            ticker.reset();
                        }
                        Err(err) => debug!(%err, "send rejected"),
                    },
                    SessionCommand::StageFiles(files) => session.stage_files(files),
                    SessionCommand::UnstageFile(index) => session.unstage_file(index),
                    SessionCommand::ClearStaged => session.clear_staged(),
                    SessionCommand::OpenPreview { message_id, attachment_id } => {
                        session.open_preview(message_id, attachment_id);
                    }
                    SessionCommand::ClosePreview => session.close_preview(),
                    SessionCommand::Reset => {
                        pending_reply = None;
                        session.reset();
                    }
                }
            }

            _ = ticker.tick(), if session.is_replying() => {
                session.handle_tick();
            }

            _ = async move {
                match reply_deadline {
                    Some(deadline) => sleep_until(deadline).await,
                    None => std::future::pending().await,
                }
            }, if reply_deadline.is_some() => {
                if let Some((_, cycle)) = pending_reply.take() {
                    session.deliver_reply(cycle);
                }
            }
        }

        if snapshots.send(SessionSnapshot::capture(&session)).is_err() {
            debug!("no snapshot subscribers left; driver stopping");
            break;
        }
    }
}
