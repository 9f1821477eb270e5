//! Boundary to the embedded computation engine

use crate::error::EngineError;
use crate::readiness::ReadySignal;

/// Handle to the engine that synthesizes inertial force loads.
///
/// The entry point is a synchronous JSON-string call: one encoded request
/// in, one encoded reply out. Callers must wait on [`readiness`] before the
/// first invoke.
///
/// [`readiness`]: LoadEngine::readiness
pub trait LoadEngine {
    /// Signal that resolves once the engine accepts calls.
    fn readiness(&self) -> ReadySignal;

    /// Invoke the engine entry point with an encoded request.
    fn invoke(&self, payload: &str) -> Result<String, EngineError>;
}

impl<'a, E: LoadEngine + ?Sized> LoadEngine for &'a E {
    fn readiness(&self) -> ReadySignal {
        (**self).readiness()
    }

    fn invoke(&self, payload: &str) -> Result<String, EngineError> {
        (**self).invoke(payload)
    }
}
