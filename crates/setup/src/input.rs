//! Input port contract and a scripted implementation

use robonav_core::{RobonavError, Result};
use std::collections::VecDeque;

/// Source of operator input, one line per request.
///
/// Each call is the flow's only suspension point. Implementations return
/// [`RobonavError::InputClosed`] once no more input can arrive.
#[allow(async_fn_in_trait)]
pub trait InputPort {
    /// Show `prompt` and wait for one line, without its line terminator
    async fn request_line(&mut self, prompt: &str) -> Result<String>;
}

/// Input port that replays a fixed list of lines
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedInput {
    /// Create a script from lines answered in order
    pub fn new<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Prompts shown so far, oldest first
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Lines not yet consumed
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputPort for ScriptedInput {
    async fn request_line(&mut self, prompt: &str) -> Result<String> {
        self.prompts.push(prompt.to_string());
        self.lines.pop_front().ok_or(RobonavError::InputClosed)
    }
}
