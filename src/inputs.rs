//! Panel input cells and the snapshot aggregator

use std::sync::RwLock;

use crate::payload::{AngleRow, CaseId, FunctionId, ScaleFactor, SubmissionRequest};

/// Read-only view of the five panel input cells. The real panel backs this
/// with its reactive store; tests and the example bin use [`PanelState`].
pub trait InputCells {
    fn time_history_case(&self) -> CaseId;
    fn static_case(&self) -> CaseId;
    fn th_function(&self) -> FunctionId;
    fn scale_factor(&self) -> ScaleFactor;
    fn angle_rows(&self) -> Vec<AngleRow>;
}

/// Snapshot the current cell values into one candidate request. Pure read:
/// no validation, no mutation of the source cells.
pub fn snapshot(cells: &impl InputCells) -> SubmissionRequest {
    SubmissionRequest {
        time_history_case: cells.time_history_case(),
        static_case: cells.static_case(),
        th_function: cells.th_function(),
        scale_factor: cells.scale_factor(),
        rows: cells.angle_rows(),
    }
}

/// In-memory input store with interior mutability
#[derive(Debug, Default)]
pub struct PanelState {
    time_history_case: RwLock<CaseId>,
    static_case: RwLock<CaseId>,
    th_function: RwLock<FunctionId>,
    scale_factor: RwLock<ScaleFactor>,
    angle_rows: RwLock<Vec<AngleRow>>,
}

impl PanelState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_time_history_case(&self, id: CaseId) {
        *self.time_history_case.write().unwrap() = id;
    }

    pub fn set_static_case(&self, id: CaseId) {
        *self.static_case.write().unwrap() = id;
    }

    pub fn set_th_function(&self, id: FunctionId) {
        *self.th_function.write().unwrap() = id;
    }

    pub fn set_scale_factor(&self, scale: impl Into<ScaleFactor>) {
        *self.scale_factor.write().unwrap() = scale.into();
    }

    pub fn set_angle_rows(&self, rows: Vec<AngleRow>) {
        *self.angle_rows.write().unwrap() = rows;
    }
}

impl InputCells for PanelState {
    fn time_history_case(&self) -> CaseId {
        *self.time_history_case.read().unwrap()
    }

    fn static_case(&self) -> CaseId {
        *self.static_case.read().unwrap()
    }

    fn th_function(&self) -> FunctionId {
        *self.th_function.read().unwrap()
    }

    fn scale_factor(&self) -> ScaleFactor {
        self.scale_factor.read().unwrap().clone()
    }

    fn angle_rows(&self) -> Vec<AngleRow> {
        self.angle_rows.read().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_reflects_current_cells() {
        let state = PanelState::new();
        state.set_time_history_case(5);
        state.set_static_case(3);
        state.set_th_function(2);
        state.set_scale_factor("1.5");
        state.set_angle_rows(vec![AngleRow::new(0.0)]);

        let request = snapshot(&state);
        assert_eq!(request.time_history_case, 5);
        assert_eq!(request.static_case, 3);
        assert_eq!(request.th_function, 2);
        assert_eq!(request.scale_factor, ScaleFactor::from("1.5"));
        assert_eq!(request.rows.len(), 1);

        // A later snapshot picks up edits without the first one changing.
        state.set_static_case(7);
        assert_eq!(request.static_case, 3);
        assert_eq!(snapshot(&state).static_case, 7);
    }

    #[test]
    fn test_default_state_is_unselected() {
        let request = snapshot(&PanelState::new());
        assert_eq!(request.time_history_case, 0);
        assert_eq!(request.static_case, 0);
        assert_eq!(request.scale_factor.parse(), None);
        assert!(request.rows.is_empty());
    }
}
