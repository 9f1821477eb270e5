//! Engine gateway: readiness gate, serialization, invocation, classification

use serde_json::Value;

use crate::engine::LoadEngine;
use crate::error::GatewayError;
use crate::messages::{MessageCatalog, MessageKey};
use crate::notify::{Notification, Notifier};
use crate::payload::{EngineOutcome, ValidatedRequest};

/// One-shot dispatcher for a validated request.
///
/// Waits for the engine to become ready, encodes the request, invokes the
/// entry point, and classifies the reply into exactly one notification.
/// There are no retries; each submit attempt dispatches at most once.
pub struct EngineGateway<'a, E: LoadEngine> {
    engine: &'a E,
}

impl<'a, E: LoadEngine> EngineGateway<'a, E> {
    pub fn new(engine: &'a E) -> Self {
        Self { engine }
    }

    /// Dispatch a validated request and surface its terminal outcome.
    ///
    /// Engine invocation failures and unparsable replies are the fatal
    /// class and propagate as [`GatewayError`]; everything else resolves
    /// into a notification.
    pub async fn dispatch(
        &self,
        request: &ValidatedRequest,
        notifier: &impl Notifier,
        messages: &MessageCatalog,
    ) -> Result<EngineOutcome, GatewayError> {
        self.engine.readiness().wait().await;

        let payload = serde_json::to_string(request).map_err(GatewayError::Encode)?;
        tracing::debug!(bytes = payload.len(), "invoking load engine");

        let raw = self.engine.invoke(&payload)?;
        let reply: Value =
            serde_json::from_str(&raw).map_err(GatewayError::MalformedResponse)?;

        let outcome = EngineOutcome::classify(&reply);
        match &outcome {
            EngineOutcome::Error { message } => {
                tracing::warn!(%message, "engine reported an error");
                notifier.notify(Notification::error(message.clone()));
            }
            EngineOutcome::Success { message } => {
                notifier.notify(Notification::success(message.clone()));
            }
            EngineOutcome::Unrecognized => {
                tracing::warn!(reply = %raw, "engine reply had neither error nor success");
                notifier.notify(Notification::error(
                    messages.resolve(MessageKey::UnknownEngineError),
                ));
            }
        }

        Ok(outcome)
    }
}
