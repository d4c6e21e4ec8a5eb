//! Executive personas and the agents that speak for them
//!
//! Information Hiding:
//! - Persona prompts are compile-time constants keyed by `PersonaId`
//! - Each agent owns its completion client handle
//! - The registry is the only place names are resolved to agents

pub mod agent;
pub mod persona;
pub mod registry;

pub use agent::Agent;
pub use persona::{Persona, PersonaId};
pub use registry::AgentRegistry;
