//! Validation of raw operator input
//!
//! Each check takes the raw token (absent when the operator typed too few
//! values), explains any rejection through the supplied [`Reporter`] and
//! returns the typed value on success. The `is_valid_*` / `validate_*`
//! wrappers answer the plain yes/no question.

use crate::constraints::ROOM_CONSTRAINTS;
use crate::orientation::Orientation;
use robonav_core::{Reporter, Result, Severity};
use tracing::debug;

/// Parse a round number. Fractions are rejected even when integral (`"3.0"`).
pub fn parse_whole_number(value: &str) -> Option<i32> {
    value.trim().parse::<i32>().ok()
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Check a room dimension for the axis named `axis_name`.
///
/// Fails only when `axis_name` is not `width` or `height`.
pub fn check_dimension(
    value: Option<&str>,
    axis_name: &str,
    reporter: &dyn Reporter,
) -> Result<Option<i32>> {
    let constraint = ROOM_CONSTRAINTS.for_axis_name(axis_name)?;

    let Some(raw) = present(value) else {
        reporter.report_one(&format!("Must provide a {}.", axis_name), Severity::Error);
        return Ok(None);
    };

    match parse_whole_number(raw) {
        Some(n) if constraint.contains(n) => Ok(Some(n)),
        _ => {
            debug!(subsystem = "validation", axis = axis_name, value = raw, "Rejected dimension");
            reporter.report(
                &[
                    format!("\"{}\" is not a valid {},", raw, axis_name),
                    format!(
                        "must be a round number between {} and {}.",
                        constraint.min, constraint.max
                    ),
                ],
                Severity::Error,
            );
            Ok(None)
        }
    }
}

/// Whether `value` is an acceptable dimension for `axis_name`
pub fn is_valid_dimension(value: Option<&str>, axis_name: &str, reporter: &dyn Reporter) -> Result<bool> {
    Ok(check_dimension(value, axis_name, reporter)?.is_some())
}

/// Check a starting coordinate within `[0, max]`
pub fn check_position(value: Option<&str>, max: i32, axis_name: &str, reporter: &dyn Reporter) -> Option<i32> {
    let Some(raw) = present(value) else {
        reporter.report_one(
            &format!("Must provide a starting position on the {}-axis.", axis_name),
            Severity::Error,
        );
        return None;
    };

    match parse_whole_number(raw) {
        Some(n) if (0..=max).contains(&n) => Some(n),
        _ => {
            debug!(subsystem = "validation", axis = axis_name, value = raw, max, "Rejected position");
            reporter.report(
                &[
                    format!("\"{}\" is not a valid starting position on the {}-axis", raw, axis_name),
                    format!("must be a round number between 0 and {}", max),
                ],
                Severity::Error,
            );
            None
        }
    }
}

/// Whether `value` is a coordinate within `[0, max]`
pub fn validate_position(value: Option<&str>, max: i32, axis_name: &str, reporter: &dyn Reporter) -> bool {
    check_position(value, max, axis_name, reporter).is_some()
}

/// Check an orientation symbol, case-insensitively
pub fn check_orientation(value: Option<&str>, reporter: &dyn Reporter) -> Option<Orientation> {
    let raw = present(value)?;
    let orientation = Orientation::from_input(raw.trim());
    if orientation.is_none() {
        debug!(subsystem = "validation", value = raw, "Rejected orientation");
        reporter.report(
            &[
                format!("\"{}\" is not a valid orientation.", raw),
                "must be one of N / E / S / W".to_string(),
            ],
            Severity::Error,
        );
    }
    orientation
}

/// Whether `value` is one of N/E/S/W in any case
pub fn validate_orientation(value: Option<&str>, reporter: &dyn Reporter) -> bool {
    check_orientation(value, reporter).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use robonav_core::report::{RecordingReporter, SilentReporter};
    use robonav_core::RobonavError;

    #[test]
    fn test_dimension_rejects_missing_and_empty() {
        let r = SilentReporter;
        assert!(!is_valid_dimension(None, "width", &r).unwrap());
        assert!(!is_valid_dimension(Some(""), "width", &r).unwrap());
        assert!(!is_valid_dimension(Some("   "), "height", &r).unwrap());
    }

    #[test]
    fn test_dimension_rejects_non_integers() {
        let r = SilentReporter;
        assert!(!is_valid_dimension(Some("abc"), "width", &r).unwrap());
        assert!(!is_valid_dimension(Some("3.5"), "width", &r).unwrap());
        assert!(!is_valid_dimension(Some("3.0"), "width", &r).unwrap());
        assert!(!is_valid_dimension(Some("3abc"), "width", &r).unwrap());
    }

    #[test]
    fn test_dimension_range_is_inclusive() {
        let r = SilentReporter;
        assert!(!is_valid_dimension(Some("1"), "width", &r).unwrap());
        assert!(is_valid_dimension(Some("2"), "width", &r).unwrap());
        assert!(is_valid_dimension(Some("3"), "width", &r).unwrap());
        assert!(is_valid_dimension(Some("20"), "height", &r).unwrap());
        assert!(!is_valid_dimension(Some("21"), "width", &r).unwrap());
        assert!(!is_valid_dimension(Some("1"), "height", &r).unwrap());
        assert!(!is_valid_dimension(Some("21"), "height", &r).unwrap());
    }

    #[test]
    fn test_dimension_unknown_axis_is_fatal() {
        let err = is_valid_dimension(Some("5"), "length", &SilentReporter).unwrap_err();
        assert!(matches!(err, RobonavError::UnknownAxis(name) if name == "length"));
    }

    #[test]
    fn test_dimension_diagnostics_name_value_axis_and_range() {
        let r = RecordingReporter::new();
        assert_eq!(check_dimension(Some("25"), "height", &r).unwrap(), None);
        let errors = r.messages(Severity::Error);
        assert_eq!(errors[0], "\"25\" is not a valid height,");
        assert_eq!(errors[1], "must be a round number between 2 and 20.");

        let r = RecordingReporter::new();
        check_dimension(None, "width", &r).unwrap();
        assert!(r.contains(Severity::Error, "Must provide a width."));
    }

    #[test]
    fn test_position() {
        let r = SilentReporter;
        assert!(!validate_position(None, 5, "x", &r));
        assert!(!validate_position(Some(""), 5, "x", &r));
        assert!(!validate_position(Some("abc"), 5, "x", &r));
        assert!(!validate_position(Some("3.5"), 5, "x", &r));
        assert!(!validate_position(Some("-1"), 5, "x", &r));
        assert!(!validate_position(Some("6"), 5, "x", &r));
        assert!(validate_position(Some("3"), 5, "x", &r));
        assert!(validate_position(Some("0"), 5, "y", &r));
        assert!(validate_position(Some("5"), 5, "y", &r));
        // Axis names are only used for messages
        assert!(validate_position(Some("2"), 5, "z", &r));
    }

    #[test]
    fn test_position_diagnostics() {
        let r = RecordingReporter::new();
        assert_eq!(check_position(Some("9"), 5, "x", &r), None);
        assert!(r.contains(Severity::Error, "\"9\" is not a valid starting position on the x-axis"));
        assert!(r.contains(Severity::Error, "between 0 and 5"));
    }

    #[test]
    fn test_orientation() {
        let r = SilentReporter;
        assert!(!validate_orientation(None, &r));
        assert!(!validate_orientation(Some(""), &r));
        assert!(!validate_orientation(Some("A"), &r));
        for valid in ["N", "E", "S", "W", "n", "e", "s", "w"] {
            assert!(validate_orientation(Some(valid), &r), "{valid} should be accepted");
        }
        assert_eq!(check_orientation(Some("s"), &r), Some(Orientation::S));
    }

    #[test]
    fn test_orientation_reports_only_non_empty_rejections() {
        let r = RecordingReporter::new();
        check_orientation(None, &r);
        assert!(r.entries().is_empty());

        check_orientation(Some("Q"), &r);
        assert!(r.contains(Severity::Error, "\"Q\" is not a valid orientation."));
    }

    #[test]
    fn test_reporting_does_not_change_outcomes() {
        let silent = SilentReporter;
        let recording = RecordingReporter::new();
        for input in ["", "1", "2", "7", "20", "21", "x", "4.5"] {
            assert_eq!(
                is_valid_dimension(Some(input), "width", &silent).unwrap(),
                is_valid_dimension(Some(input), "width", &recording).unwrap()
            );
            assert_eq!(
                validate_position(Some(input), 10, "y", &silent),
                validate_position(Some(input), 10, "y", &recording)
            );
        }
    }
}
