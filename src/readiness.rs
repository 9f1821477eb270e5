//! One-shot readiness latch for the computation engine
//!
//! The engine signals readiness exactly once. Submissions wait on a
//! [`ReadySignal`] before invoking the entry point; if the engine never
//! becomes ready the wait pends forever, so a submission stays in flight
//! until the caller drops it. There is deliberately no timeout here.

use tokio::sync::watch;

/// Sender half, held by the engine side. Firing it is idempotent.
#[derive(Debug)]
pub struct ReadyLatch {
    tx: watch::Sender<bool>,
}

/// Awaitable readiness handle. Cheap to clone; every clone resolves once
/// the latch fires.
#[derive(Debug, Clone)]
pub struct ReadySignal {
    rx: watch::Receiver<bool>,
}

impl ReadyLatch {
    pub fn new() -> (Self, ReadySignal) {
        let (tx, rx) = watch::channel(false);
        (Self { tx }, ReadySignal { rx })
    }

    /// Mark the engine ready, waking every waiting signal.
    pub fn set_ready(&self) {
        let _ = self.tx.send(true);
    }

    /// A fresh signal tied to this latch.
    pub fn signal(&self) -> ReadySignal {
        ReadySignal {
            rx: self.tx.subscribe(),
        }
    }
}

impl ReadySignal {
    pub fn is_ready(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolve once the latch has fired. A latch dropped before firing
    /// means the engine will never be ready, so the wait never resolves.
    pub async fn wait(mut self) {
        loop {
            if *self.rx.borrow_and_update() {
                return;
            }
            if self.rx.changed().await.is_err() {
                std::future::pending::<()>().await;
            }
        }
    }
}
