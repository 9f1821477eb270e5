//! Submit action for the inertial force panel

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use uuid::Uuid;

use crate::engine::LoadEngine;
use crate::error::GatewayError;
use crate::gateway::EngineGateway;
use crate::inputs::{snapshot, InputCells};
use crate::messages::MessageCatalog;
use crate::notify::{Notification, Notifier};
use crate::validator::validate;

/// Pause between the click and the pipeline, so the loading state gets a
/// chance to render first.
pub const RENDER_DELAY: Duration = Duration::from_millis(500);

/// The panel's submit action: snapshot, validate, dispatch.
///
/// The loading flag only drives UI disablement during the render delay;
/// it does not serialize overlapping submissions against the engine.
pub struct LoadPanel<E, N> {
    engine: E,
    notifier: N,
    messages: MessageCatalog,
    loading: AtomicBool,
}

impl<E: LoadEngine, N: Notifier> LoadPanel<E, N> {
    pub fn new(engine: E, notifier: N) -> Self {
        Self::with_messages(engine, notifier, MessageCatalog::new())
    }

    pub fn with_messages(engine: E, notifier: N, messages: MessageCatalog) -> Self {
        Self {
            engine,
            notifier,
            messages,
            loading: AtomicBool::new(false),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Run one submit attempt against the current input cells.
    ///
    /// Validation rejections surface as error notifications and end the
    /// attempt. Fatal failures (engine invocation errors, unparsable
    /// replies) are logged and otherwise swallowed; the user only sees the
    /// loading state clear. Known gap, kept for parity with the panel this
    /// backs.
    pub async fn submit(&self, cells: &impl InputCells) {
        let attempt = Uuid::new_v4();
        self.loading.store(true, Ordering::SeqCst);
        tokio::time::sleep(RENDER_DELAY).await;

        if let Err(err) = self.create_loads(cells, attempt).await {
            tracing::error!(%attempt, error = %err, "load creation failed unexpectedly");
        }
        self.loading.store(false, Ordering::SeqCst);
    }

    async fn create_loads(
        &self,
        cells: &impl InputCells,
        attempt: Uuid,
    ) -> Result<(), GatewayError> {
        let request = snapshot(cells);

        let validated = match validate(request) {
            Ok(validated) => validated,
            Err(reason) => {
                tracing::info!(%attempt, %reason, "submission rejected");
                self.notifier.notify(Notification::error(
                    self.messages.resolve(reason.message_key()),
                ));
                return Ok(());
            }
        };

        tracing::info!(%attempt, "request validated, dispatching to engine");
        let outcome = EngineGateway::new(&self.engine)
            .dispatch(&validated, &self.notifier, &self.messages)
            .await?;
        tracing::debug!(%attempt, ?outcome, "submit attempt resolved");
        Ok(())
    }
}
