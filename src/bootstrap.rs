use dotenvy::dotenv;
use tracing::info;

use crate::{
    agent::{AgentRuntime, Memory, Plugin},
    config::{constants::DEFAULT_AGENT_NAME, PluginConfig},
};

/// Name of the environment variable holding the agent's display name.
pub const AGENT_NAME_VAR: &str = "AGENT_NAME";

/// A runtime that only knows its character's name.
#[derive(Debug, Clone)]
struct CliRuntime {
    character_name: String,
}

impl AgentRuntime for CliRuntime {
    fn character_name(&self) -> &str {
        &self.character_name
    }
}

/// Main entry point for the application.
///
/// Builds the plugin from the environment and prints what each of its
/// providers knows about the latest block.
pub async fn run() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let config = PluginConfig::from_env()?;
    let plugin = Plugin::from_config(&config)?;

    let runtime = CliRuntime {
        character_name: dotenvy::var(AGENT_NAME_VAR)
            .unwrap_or_else(|_| DEFAULT_AGENT_NAME.to_string()),
    };
    let message = Memory::default();

    info!(plugin = plugin.name, chain = %config.chain, "Running context providers");

    for provider in &plugin.providers {
        let context = provider.get(&runtime, &message, None).await?;
        println!("[{}] {context}", provider.name());
    }

    Ok(())
}
