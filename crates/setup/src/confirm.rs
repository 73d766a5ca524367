//! Y/N confirmation prompts

use crate::input::InputPort;
use robonav_core::{Reporter, Result, Severity};
use tracing::debug;

/// Interpret a confirmation answer: `Y` or `N` in any case, surrounding
/// whitespace ignored. Anything else has no meaning.
pub fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.trim().to_uppercase().as_str() {
        "Y" => Some(true),
        "N" => Some(false),
        _ => None,
    }
}

/// Ask `question` until the operator answers Y or N.
///
/// Every other answer is explained with `retry_hint` and the same question is
/// asked again. There is no default answer.
pub async fn ask_yes_no<I: InputPort>(
    input: &mut I,
    reporter: &dyn Reporter,
    question: &str,
    retry_hint: &str,
) -> Result<bool> {
    loop {
        let answer = input.request_line(question).await?;
        if let Some(decision) = parse_yes_no(&answer) {
            return Ok(decision);
        }
        debug!(subsystem = "setup", answer = %answer, "Rejected confirmation answer");
        reporter.report_one(retry_hint, Severity::Error);
    }
}

/// Ask once whether the room and robot should be reviewed before acceptance
pub async fn should_confirm_before_continue<I: InputPort>(
    input: &mut I,
    reporter: &dyn Reporter,
) -> Result<bool> {
    ask_yes_no(
        input,
        reporter,
        "Would you like to confirm before moving forward when setting up the Room and the Robot? (Y / N): ",
        "Please enter Y or N to confirm or decline.",
    )
    .await
}
