//! Run command implementation.
//!
//! Lists templates or prints the requested ones to the output stream.

use std::io::Write;

use crate::config::{Endpoints, RunMode};
use crate::error::Result;
use crate::registry::TemplateClient;

use super::dispatcher::{Command, CommandResult};

/// The run command implementation.
pub struct RunCommand {
    endpoints: Endpoints,
    mode: RunMode,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(endpoints: Endpoints, mode: RunMode) -> Self {
        Self { endpoints, mode }
    }
}

impl Command for RunCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let client = TemplateClient::new(self.endpoints.clone())?;
        let output = client.run(&self.mode)?;

        if output.is_empty() {
            tracing::warn!("output is empty (probably not what you wanted?)");
        }

        writeln!(out, "{}", output)?;
        out.flush()?;

        Ok(CommandResult::success())
    }
}
