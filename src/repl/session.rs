use super::parser::{parse_line, Input, Turn};
use crate::agents::AgentRegistry;
use crate::utils;
use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

pub const PROMPT: &str = ">> ";
pub const INVALID_FORMAT: &str = "Invalid format. Please use 'Agent: message'.";

pub fn unknown_agent_message(name: &str, available: &[&str]) -> String {
    format!(
        "Unknown agent '{}'. Available agents are: {}.",
        name,
        available.join(", ")
    )
}

/// Counts reported when the loop terminates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// Lines that reached an agent, whether or not it answered.
    pub turns: usize,
    pub failures: usize,
}

/// Prompting and dispatching over a line reader and an output writer.
///
/// Strictly one outstanding operation: each completion call is awaited
/// before the next line is read.
pub struct InteractiveSession<'a, R, W> {
    registry: &'a AgentRegistry,
    reader: R,
    writer: W,
    summary: SessionSummary,
}

impl<'a, R, W> InteractiveSession<'a, R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(registry: &'a AgentRegistry, reader: R, writer: W) -> Self {
        Self {
            registry,
            reader,
            writer,
            summary: SessionSummary::default(),
        }
    }

    /// Run until the exit sentinel or end of input.
    ///
    /// Only I/O errors on the reader or writer end the session early.
    pub async fn run(mut self) -> Result<SessionSummary> {
        self.banner().await?;

        let mut line = String::new();
        loop {
            self.write(&utils::prompt(PROMPT)).await?;
            self.writer.flush().await?;

            line.clear();
            if self.reader.read_line(&mut line).await? == 0 {
                tracing::debug!("Input closed, ending session");
                self.write("\n").await?;
                break;
            }

            match parse_line(&line) {
                Input::Exit => break,
                Input::MissingSeparator => {
                    self.write_line(&utils::warning(INVALID_FORMAT)).await?;
                }
                Input::Turn(turn) => self.dispatch(turn).await?,
            }
        }

        self.writer.flush().await?;
        tracing::info!(
            turns = self.summary.turns,
            failures = self.summary.failures,
            "Session ended"
        );
        Ok(self.summary)
    }

    async fn dispatch(&mut self, turn: Turn<'_>) -> Result<()> {
        let registry = self.registry;
        let Some(agent) = registry.resolve(turn.persona_name) else {
            let message = unknown_agent_message(turn.persona_name, &registry.names());
            return self.write_line(&utils::warning(&message)).await;
        };

        self.summary.turns += 1;
        match agent.respond(turn.message).await {
            Ok(response) => {
                self.write_line(&format!("{}: {}\n", agent.name(), response))
                    .await
            }
            Err(e) => {
                self.summary.failures += 1;
                tracing::error!("[Agent:{}] Completion failed: {}", agent.name(), e);
                let message = format!("{} could not respond: {}", agent.name(), e);
                self.write_line(&utils::error(&message)).await
            }
        }
    }

    async fn banner(&mut self) -> Result<()> {
        let names = self.registry.names().join(", ");
        self.write_line(&utils::header(
            "Interactive Mode: Enter commands in the format 'Agent: message'.",
        ))
        .await?;
        self.write_line(&utils::info(&format!("Available agents: {}", names)))
            .await?;
        self.write_line(&utils::info("Type 'exit' to quit.\n")).await
    }

    async fn write(&mut self, text: &str) -> Result<()> {
        self.writer.write_all(text.as_bytes()).await?;
        Ok(())
    }

    async fn write_line(&mut self, text: &str) -> Result<()> {
        self.write(text).await?;
        self.write("\n").await
    }
}
