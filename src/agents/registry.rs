use super::agent::Agent;
use super::persona::{Persona, PersonaId};
use crate::config::{ApiKey, LLMConfig};
use crate::core::llm::{ChatCompletion, LLMClient, LlmError};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Read-only mapping from persona to agent, built once at startup.
///
/// Every `PersonaId` has exactly one agent, so the names offered to the
/// user are exactly the names that resolve.
#[derive(Debug)]
pub struct AgentRegistry {
    agents: BTreeMap<PersonaId, Agent>,
}

impl AgentRegistry {
    /// Give every persona its own HTTP client.
    pub fn from_config(api_key: &ApiKey, config: &LLMConfig) -> Result<Self, LlmError> {
        let mut agents = BTreeMap::new();
        for id in PersonaId::ALL {
            let client = LLMClient::new(api_key.clone(), config)?;
            agents.insert(id, Agent::new(Persona::new(id, config), Arc::new(client)));
        }

        tracing::info!("Registered {} agents", agents.len());
        Ok(Self { agents })
    }

    /// Every persona answered by the same client.
    pub fn with_client(config: &LLMConfig, client: Arc<dyn ChatCompletion>) -> Self {
        let agents = PersonaId::ALL
            .into_iter()
            .map(|id| (id, Agent::new(Persona::new(id, config), client.clone())))
            .collect();

        Self { agents }
    }

    #[cfg(test)]
    fn get(&self, id: PersonaId) -> &Agent {
        &self.agents[&id]
    }

    pub fn resolve(&self, name: &str) -> Option<&Agent> {
        let id = name.parse::<PersonaId>().ok()?;
        self.agents.get(&id)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.agents.keys().map(|id| id.name()).collect()
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.agents.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::llm::CompletionRequest;
    use async_trait::async_trait;

    struct Echo;

    #[async_trait]
    impl ChatCompletion for Echo {
        async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
            Ok(request.messages[1].content.clone())
        }
    }

    fn llm_config() -> LLMConfig {
        LLMConfig {
            model: "gpt-3.5-turbo".to_string(),
            temperature: 0.7,
            base_url: "https://api.openai.com/v1".to_string(),
            max_tokens: None,
            request_timeout_secs: None,
        }
    }

    #[test]
    fn test_names_in_display_order() {
        let registry = AgentRegistry::with_client(&llm_config(), Arc::new(Echo));
        assert_eq!(registry.names(), vec!["CEO", "Marketing"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_resolve_known_and_unknown() {
        let registry = AgentRegistry::with_client(&llm_config(), Arc::new(Echo));

        assert_eq!(registry.resolve("CEO").map(Agent::name), Some("CEO"));
        assert_eq!(registry.resolve("Marketing").map(Agent::name), Some("Marketing"));
        assert!(registry.resolve("Sales").is_none());
        assert!(registry.resolve("marketing").is_none());
        assert!(registry.resolve("").is_none());
    }

    #[test]
    fn test_from_config_builds_every_persona() {
        let key = ApiKey::from_sources(Some("sk-test".to_string()), std::path::Path::new("/nonexistent/.env")).unwrap();
        let registry = AgentRegistry::from_config(&key, &llm_config()).unwrap();

        for id in PersonaId::ALL {
            assert_eq!(registry.get(id).persona().system_prompt, id.system_prompt());
        }
    }
}
