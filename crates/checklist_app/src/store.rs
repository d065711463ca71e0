use std::sync::{mpsc, Arc};
use std::time::{Duration, Instant};

use checklist_core::{update, ChecklistState, ChecklistViewModel, IdGenerator, Msg};
use checklist_engine::ChecklistClient;
use checklist_logging::checklist_trace;

use crate::effects::EffectRunner;

type Subscriber = Box<dyn FnMut(&ChecklistViewModel)>;

/// Owns the checklist state and is its only writer.
///
/// Views send messages through `sender()` and observe changes through
/// `subscribe`. Messages are applied one at a time on the thread that calls
/// `process_pending` or `process_next`; async results re-enter through the
/// same queue.
pub struct Store {
    state: ChecklistState,
    ids: Box<dyn IdGenerator>,
    runner: EffectRunner,
    msg_tx: mpsc::Sender<Msg>,
    msg_rx: mpsc::Receiver<Msg>,
    subscribers: Vec<Subscriber>,
}

impl Store {
    pub fn new(client: Arc<dyn ChecklistClient>, ids: Box<dyn IdGenerator>) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        let runner = EffectRunner::new(client, msg_tx.clone());
        Self {
            state: ChecklistState::new(),
            ids,
            runner,
            msg_tx,
            msg_rx,
            subscribers: Vec::new(),
        }
    }

    pub fn sender(&self) -> mpsc::Sender<Msg> {
        self.msg_tx.clone()
    }

    /// Queues a message; it is applied by the next `process_*` call.
    pub fn send(&self, msg: Msg) {
        let _ = self.msg_tx.send(msg);
    }

    /// Registers an observer called with the view model after every change.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&ChecklistViewModel) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    pub fn state(&self) -> &ChecklistState {
        &self.state
    }

    pub fn view(&self) -> ChecklistViewModel {
        self.state.view()
    }

    /// Applies every queued message, including follow-ups they queue.
    pub fn process_pending(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.dispatch_msg(msg);
            processed += 1;
        }
        processed
    }

    /// Waits up to `timeout` for a message, then drains the queue.
    pub fn process_next(&mut self, timeout: Duration) -> usize {
        match self.msg_rx.recv_timeout(timeout) {
            Ok(msg) => {
                self.dispatch_msg(msg);
                1 + self.process_pending()
            }
            Err(_) => 0,
        }
    }

    /// Processes messages until `done` holds for the state or `timeout` elapses.
    pub fn process_until(
        &mut self,
        timeout: Duration,
        mut done: impl FnMut(&ChecklistState) -> bool,
    ) -> bool {
        let deadline = Instant::now() + timeout;
        loop {
            self.process_pending();
            if done(&self.state) {
                return true;
            }
            let now = Instant::now();
            if now >= deadline {
                return false;
            }
            self.process_next(deadline - now);
        }
    }

    /// Processes messages until a fetch result has been applied.
    ///
    /// Returns `false` if no result arrived within `timeout`.
    pub fn process_until_fetched(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            let Ok(msg) = self.msg_rx.recv_timeout(remaining) else {
                return false;
            };
            let fetched = matches!(msg, Msg::FetchSucceeded(_) | Msg::FetchFailed(_));
            self.dispatch_msg(msg);
            if fetched {
                self.process_pending();
                return true;
            }
        }
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        checklist_trace!("dispatch {:?}", msg);
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg, self.ids.as_mut());
        let was_dirty = state.consume_dirty();
        self.state = state;
        self.runner.enqueue(effects);

        if was_dirty {
            let view = self.state.view();
            for subscriber in &mut self.subscribers {
                subscriber(&view);
            }
        }
    }
}
