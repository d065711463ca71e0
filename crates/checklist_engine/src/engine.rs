use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use checklist_logging::{checklist_debug, checklist_error, checklist_warn};

use crate::{ChecklistClient, EngineEvent};

enum EngineCommand {
    Fetch,
}

/// Sends work to the engine worker thread.
///
/// Each `fetch` runs as its own task on the worker's tokio runtime. Nothing
/// is de-duplicated or cancelled; dropping the handle stops the worker.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

/// Receiving end for results produced by an `EngineHandle`.
pub struct EngineEvents {
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn spawn(client: Arc<dyn ChecklistClient>) -> (Self, EngineEvents) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    checklist_error!("Failed to start engine runtime: {}", err);
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(client.as_ref(), command, event_tx).await;
                });
            }
            checklist_debug!("Engine command channel closed; worker exiting");
        });

        (Self { cmd_tx }, EngineEvents { event_rx })
    }

    pub fn fetch(&self) {
        if self.cmd_tx.send(EngineCommand::Fetch).is_err() {
            checklist_warn!("Engine worker is gone; fetch request dropped");
        }
    }
}

impl EngineEvents {
    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Blocks until an event arrives. `None` once the worker has exited.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

async fn handle_command(
    client: &dyn ChecklistClient,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Fetch => {
            let result = client.fetch().await;
            let _ = event_tx.send(EngineEvent::ChecklistFetched(result));
        }
    }
}
