use super::persona::Persona;
use crate::core::llm::{ChatCompletion, ChatMessage, CompletionRequest, LlmError};
use std::sync::Arc;

/// A persona bound to the client that answers on its behalf.
pub struct Agent {
    persona: Persona,
    client: Arc<dyn ChatCompletion>,
}

impl std::fmt::Debug for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Agent")
            .field("persona", &self.persona)
            .finish_non_exhaustive()
    }
}

impl Agent {
    pub fn new(persona: Persona, client: Arc<dyn ChatCompletion>) -> Self {
        Self { persona, client }
    }

    pub fn name(&self) -> &'static str {
        self.persona.name()
    }

    #[cfg(test)]
    pub(crate) fn persona(&self) -> &Persona {
        &self.persona
    }

    /// One completion call: the persona's prompt, then `message`.
    pub async fn respond(&self, message: &str) -> Result<String, LlmError> {
        let request = CompletionRequest {
            model: self.persona.model.clone(),
            temperature: self.persona.temperature,
            messages: vec![
                ChatMessage::system(self.persona.system_prompt.as_str()),
                ChatMessage::user(message),
            ],
        };

        tracing::debug!("[Agent:{}] Sending {} chars", self.name(), message.len());
        self.client.complete(&request).await
    }
}
