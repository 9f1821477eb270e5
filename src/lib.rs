//! Inertial Loads - validation and submission pipeline for inertial force
//! load generation
//!
//! This library implements the logic core of the inertial force panel:
//! it snapshots the panel inputs (time history and static load case
//! selections, a time history function, a scale factor, and a table of angle
//! rows), validates them with a fixed-order fail-fast rule sequence, and
//! forwards the payload as JSON to the embedded computation engine that
//! synthesizes the loads. The engine reply is classified into a success,
//! error, or unknown-outcome notification.
//!
//! The reactive input store, the computation engine, and the notification
//! subsystem are all modeled as traits so they can be substituted in tests.
//!
//! ## Example
//! ```rust
//! use inertial_loads::prelude::*;
//!
//! let request = SubmissionRequest {
//!     time_history_case: 5,
//!     static_case: 3,
//!     th_function: 2,
//!     scale_factor: ScaleFactor::from("1.5"),
//!     rows: vec![AngleRow::new(0.0), AngleRow::new(90.0)],
//! };
//!
//! let validated = validate(request).unwrap();
//! assert_eq!(
//!     serde_json::to_string(&validated).unwrap(),
//!     r#"{"TimeHistoryLC":5,"StaticLoadLC":3,"THfunction":2,"ScaleFactor":"1.5","RowData":[{"angle":0.0},{"angle":90.0}]}"#,
//! );
//! ```

pub mod engine;
pub mod error;
pub mod gateway;
pub mod inputs;
pub mod messages;
pub mod notify;
pub mod panel;
pub mod payload;
pub mod readiness;
pub mod validator;

// Re-export common types
pub mod prelude {
    pub use crate::engine::LoadEngine;
    pub use crate::error::{EngineError, GatewayError, SelectionField, ValidationError};
    pub use crate::gateway::EngineGateway;
    pub use crate::inputs::{snapshot, InputCells, PanelState};
    pub use crate::messages::{MessageCatalog, MessageKey};
    pub use crate::notify::{LogNotifier, Notification, Notifier, Severity, SUCCESS_DISMISS};
    pub use crate::panel::{LoadPanel, RENDER_DELAY};
    pub use crate::payload::{
        AngleRow, CaseId, EngineOutcome, FunctionId, ScaleFactor, SubmissionRequest,
        ValidatedRequest,
    };
    pub use crate::readiness::{ReadyLatch, ReadySignal};
    pub use crate::validator::validate;
}
