//! Ordered validation rules for a candidate submission

use crate::error::{SelectionField, ValidationError};
use crate::payload::{SubmissionRequest, ValidatedRequest};

/// Check a candidate request against every rule, in order, stopping at the
/// first failure:
///
/// 1. a time history load case is selected
/// 2. a static load case is selected
/// 3. the scale factor parses to a finite number greater than zero
/// 4. the angle table has at least one row
/// 5. no angle value appears in more than one row
///
/// The time history function is passed through unvalidated.
pub fn validate(request: SubmissionRequest) -> Result<ValidatedRequest, ValidationError> {
    if request.time_history_case == 0 {
        return Err(ValidationError::MissingSelection(
            SelectionField::TimeHistoryLoadCase,
        ));
    }

    if request.static_case == 0 {
        return Err(ValidationError::MissingSelection(
            SelectionField::StaticLoadCase,
        ));
    }

    match request.scale_factor.parse() {
        Some(value) if value > 0.0 => {}
        _ => return Err(ValidationError::InvalidScaleFactor),
    }

    if request.rows.is_empty() {
        return Err(ValidationError::NoAngleRows);
    }

    let duplicated = |angle: f64| request.rows.iter().filter(|row| row.angle == angle).count() > 1;
    for row in &request.rows {
        if duplicated(row.angle) {
            return Err(ValidationError::DuplicateAngle(row.angle));
        }
    }

    Ok(ValidatedRequest::new(request))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::{AngleRow, ScaleFactor};

    fn valid_request() -> SubmissionRequest {
        SubmissionRequest {
            time_history_case: 5,
            static_case: 3,
            th_function: 2,
            scale_factor: ScaleFactor::from("1.5"),
            rows: vec![AngleRow::new(0.0), AngleRow::new(90.0)],
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(validate(valid_request()).is_ok());
    }

    #[test]
    fn test_missing_time_history_case() {
        let mut request = valid_request();
        request.time_history_case = 0;
        assert_eq!(
            validate(request),
            Err(ValidationError::MissingSelection(
                SelectionField::TimeHistoryLoadCase
            ))
        );
    }

    #[test]
    fn test_missing_static_case() {
        let mut request = valid_request();
        request.static_case = 0;
        assert_eq!(
            validate(request),
            Err(ValidationError::MissingSelection(
                SelectionField::StaticLoadCase
            ))
        );
    }

    #[test]
    fn test_scale_factor_rejections() {
        for bad in [
            ScaleFactor::from(""),
            ScaleFactor::from("abc"),
            ScaleFactor::from("0"),
            ScaleFactor::from("-1"),
            ScaleFactor::from(0.0),
            ScaleFactor::from(-2.5),
            ScaleFactor::from(f64::NAN),
        ] {
            let mut request = valid_request();
            request.scale_factor = bad.clone();
            assert_eq!(
                validate(request),
                Err(ValidationError::InvalidScaleFactor),
                "expected rejection for {bad:?}"
            );
        }
    }

    #[test]
    fn test_empty_angle_table() {
        let mut request = valid_request();
        request.rows.clear();
        assert_eq!(validate(request), Err(ValidationError::NoAngleRows));
    }

    #[test]
    fn test_duplicate_angle_reports_first_duplicate() {
        let mut request = valid_request();
        request.rows = vec![
            AngleRow::new(0.0),
            AngleRow::new(45.0),
            AngleRow::new(45.0),
            AngleRow::new(0.0),
        ];
        // Row iteration order decides which duplicate is reported.
        assert_eq!(validate(request), Err(ValidationError::DuplicateAngle(0.0)));
    }

    #[test]
    fn test_single_row_is_always_unique() {
        let mut request = valid_request();
        request.rows = vec![AngleRow::new(30.0)];
        assert!(validate(request).is_ok());
    }

    #[test]
    fn test_rules_short_circuit_in_order() {
        // Everything is wrong at once; the first rule wins.
        let request = SubmissionRequest {
            time_history_case: 0,
            static_case: 0,
            th_function: 0,
            scale_factor: ScaleFactor::from("-1"),
            rows: vec![],
        };
        assert_eq!(
            validate(request),
            Err(ValidationError::MissingSelection(
                SelectionField::TimeHistoryLoadCase
            ))
        );

        // Fix the selections and the scale factor is next in line.
        let request = SubmissionRequest {
            time_history_case: 1,
            static_case: 1,
            th_function: 0,
            scale_factor: ScaleFactor::from("-1"),
            rows: vec![],
        };
        assert_eq!(validate(request), Err(ValidationError::InvalidScaleFactor));
    }

    #[test]
    fn test_th_function_is_not_validated() {
        let mut request = valid_request();
        request.th_function = 0;
        assert!(validate(request).is_ok());
    }
}
