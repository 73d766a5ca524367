//! Command session driving a placed robot

use robonav_core::{Reporter, Result, Severity};
use robonav_setup::InputPort;
use robonav_world::{Bounds, Command, Robot};
use tracing::{debug, instrument};

/// Prompt shown for each line of commands
pub const COMMAND_PROMPT: &str =
    "Enter commands (L = left, R = right, F = forward), empty line to finish: ";

/// Read lines of commands and execute them until an empty line.
///
/// Commands are case-insensitive and whitespace between them is ignored.
/// The position is reported after every line. Returns the final report; a
/// move out of the room ends the session with that error.
#[instrument(name = "command_session", skip_all)]
pub async fn run_commands<I: InputPort, B: Bounds>(
    input: &mut I,
    reporter: &dyn Reporter,
    robot: &mut Robot<B>,
) -> Result<String> {
    loop {
        let line = input.request_line(COMMAND_PROMPT).await?;
        let commands: Vec<char> = line
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_uppercase())
            .collect();

        if commands.is_empty() {
            debug!(subsystem = "session", report = %robot.report(), "Session finished");
            return Ok(robot.report());
        }

        for command in commands {
            if Command::parse(command).is_none() {
                debug!(subsystem = "session", command = %command, "Skipping unknown command");
            }
            robot.execute_command(command)?;
        }

        reporter.report_one(&format!("Report: {}", robot.report()), Severity::Success);
    }
}
