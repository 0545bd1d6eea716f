use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

use eframe::egui;

// ---------------------------------------------------------------------------
// UI task queue
// ---------------------------------------------------------------------------

/// A unit of work that mutates UI-owned state.
pub type UiTask<S> = Box<dyn FnOnce(&mut S) + Send + 'static>;

/// Single-consumer queue of [`UiTask`]s owned by the UI thread.
///
/// Background threads get a [`UiHandle`] and `post` closures; only the owner
/// of the queue runs them, against the state it passes to [`UiQueue::drain`].
pub struct UiQueue<S> {
    sender: Sender<UiTask<S>>,
    receiver: Receiver<UiTask<S>>,
    repaint: Option<egui::Context>,
}

impl<S> UiQueue<S> {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            sender,
            receiver,
            repaint: None,
        }
    }

    /// Queue that wakes the egui event loop whenever a task is posted.
    pub fn with_repaint(ctx: egui::Context) -> Self {
        Self {
            repaint: Some(ctx),
            ..Self::new()
        }
    }

    pub fn handle(&self) -> UiHandle<S> {
        UiHandle {
            sender: self.sender.clone(),
            repaint: self.repaint.clone(),
        }
    }

    /// Run every task posted so far. Returns how many ran.
    pub fn drain(&self, state: &mut S) -> usize {
        let mut ran = 0;
        while let Ok(task) = self.receiver.try_recv() {
            task(state);
            ran += 1;
        }
        ran
    }

    /// Block until one task arrives (or `timeout` passes) and run it.
    pub fn run_next(&self, state: &mut S, timeout: Duration) -> bool {
        match self.receiver.recv_timeout(timeout) {
            Ok(task) => {
                task(state);
                true
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => false,
        }
    }
}

impl<S> Default for UiQueue<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Sending side of a [`UiQueue`]; cheap to clone and `Send`.
pub struct UiHandle<S> {
    sender: Sender<UiTask<S>>,
    repaint: Option<egui::Context>,
}

impl<S> Clone for UiHandle<S> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            repaint: self.repaint.clone(),
        }
    }
}

impl<S> UiHandle<S> {
    /// Schedule `task` to run on the UI thread.
    ///
    /// If the UI has already shut down the task is dropped.
    pub fn post(&self, task: impl FnOnce(&mut S) + Send + 'static) {
        if self.sender.send(Box::new(task)).is_err() {
            log::debug!("UI queue closed, dropping task");
            return;
        }
        if let Some(ctx) = &self.repaint {
            ctx.request_repaint();
        }
    }
}
