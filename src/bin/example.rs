//! Inertial Loads Example - drives one submit attempt end to end with an
//! in-process engine stub.

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use inertial_loads::prelude::*;

/// Engine stub that becomes ready when told to and answers every request
/// with a success reply.
struct DemoEngine {
    latch: Arc<ReadyLatch>,
}

impl DemoEngine {
    fn new() -> Self {
        let (latch, _) = ReadyLatch::new();
        Self {
            latch: Arc::new(latch),
        }
    }
}

impl LoadEngine for DemoEngine {
    fn readiness(&self) -> ReadySignal {
        self.latch.signal()
    }

    fn invoke(&self, payload: &str) -> Result<String, EngineError> {
        let request: SubmissionRequest =
            serde_json::from_str(payload).map_err(|e| EngineError::CallFailed(e.to_string()))?;
        Ok(format!(
            r#"{{"success":"Created {} inertial force load(s)"}}"#,
            request.rows.len()
        ))
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inertial_loads=debug,inertial_loads_example=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = PanelState::new();
    state.set_time_history_case(5);
    state.set_static_case(3);
    state.set_th_function(2);
    state.set_scale_factor("1.5");
    state.set_angle_rows(vec![
        AngleRow::new(0.0),
        AngleRow::new(90.0),
        AngleRow::new(180.0),
        AngleRow::new(270.0),
    ]);

    let engine = DemoEngine::new();
    let latch = engine.latch.clone();
    let panel = LoadPanel::new(engine, LogNotifier);

    // Simulate the engine runtime finishing its startup after the click.
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(200)).await;
        tracing::info!("engine ready");
        latch.set_ready();
    });

    tracing::info!("submitting inertial force load request");
    panel.submit(&state).await;
    tracing::info!("submit attempt finished");
}
