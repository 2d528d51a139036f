use std::thread::{self, JoinHandle};

use crossbeam_channel::{bounded, Sender, TrySendError};

use crate::engine_warn;

const LOG_SOURCE: &str = "nebula3d::InputDispatcher";

/// Key transition carried by a [`KeyEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Released,
    Pressed,
    /// Auto-repeat while the key stays down.
    Held,
}

/// One key transition from whatever device feeds the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// Device-defined key code; the engine attaches no meaning to it.
    pub code: u32,
    pub state: KeyState,
}

/// Serializes key events into a single handler thread.
///
/// Events are queued on a bounded channel and delivered strictly in
/// push order, so a Released can never overtake the Pressed that
/// preceded it. Dropping the dispatcher drains the queue and joins
/// the handler thread.
pub struct InputDispatcher {
    sender: Option<Sender<KeyEvent>>,
    thread: Option<JoinHandle<()>>,
}

impl InputDispatcher {
    /// Spawn the handler thread behind a queue of `capacity` events.
    pub fn new<F>(capacity: usize, mut handler: F) -> Self
    where
        F: FnMut(KeyEvent) + Send + 'static,
    {
        let (sender, receiver) = bounded::<KeyEvent>(capacity.max(1));

        let thread = thread::spawn(move || {
            // runs until every sender is dropped
            for event in receiver {
                handler(event);
            }
        });

        Self {
            sender: Some(sender),
            thread: Some(thread),
        }
    }

    /// Queue an event. Returns `false` (with a warn log) when the queue
    /// is full or the dispatcher is shutting down; the event is dropped.
    pub fn push(&self, event: KeyEvent) -> bool {
        let Some(sender) = &self.sender else {
            return false;
        };
        match sender.try_send(event) {
            Ok(()) => true,
            Err(TrySendError::Full(event)) => {
                engine_warn!(
                    LOG_SOURCE,
                    "Input queue full, dropping event for key {}",
                    event.code
                );
                false
            }
            Err(TrySendError::Disconnected(_)) => false,
        }
    }

    /// Stop accepting events, drain the queue and join the handler
    /// thread. Idempotent; also runs on Drop.
    pub fn release(&mut self) {
        // closing the channel ends the receiver loop after the backlog
        drop(self.sender.take());
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for InputDispatcher {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod tests;
