use std::sync::{mpsc, Arc};
use std::thread;

use checklist_core::{Effect, Msg, ProviderError};
use checklist_engine::{ChecklistClient, EngineEvent, EngineEvents, EngineHandle};
use checklist_logging::{checklist_debug, checklist_info, checklist_warn};

/// Executes effects and turns engine results back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
    msg_tx: mpsc::Sender<Msg>,
}

impl EffectRunner {
    pub fn new(client: Arc<dyn ChecklistClient>, msg_tx: mpsc::Sender<Msg>) -> Self {
        let (engine, events) = EngineHandle::spawn(client);
        spawn_event_loop(events, msg_tx.clone());
        Self { engine, msg_tx }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchChecklist => {
                    checklist_info!("FetchChecklist requested");
                    self.engine.fetch();
                }
                Effect::Dispatch(msg) => {
                    checklist_debug!("Dispatch follow-up {:?}", msg);
                    let _ = self.msg_tx.send(msg);
                }
            }
        }
    }
}

fn spawn_event_loop(events: EngineEvents, msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || {
        while let Some(event) = events.recv() {
            let msg = match event {
                EngineEvent::ChecklistFetched(Ok(checks)) => {
                    checklist_info!("Checklist fetched: {} checks", checks.len());
                    Msg::FetchSucceeded(checks)
                }
                EngineEvent::ChecklistFetched(Err(err)) => {
                    checklist_warn!("Checklist fetch failed: {}", err);
                    Msg::FetchFailed(ProviderError::new(err.to_string()))
                }
            };
            if msg_tx.send(msg).is_err() {
                // Store is gone; nobody is left to observe results.
                break;
            }
        }
    });
}
