use crate::config::constants::{ANTHROPIC_CLIENT, OPENAI_CLIENT};
use crate::types::AppConfig;
use std::collections::HashSet;

/// Validates the logical consistency of an AppConfig.
/// Returns Ok(()) if valid, or Err(Vec<String>) with a list of error messages if invalid.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let mut provider_keys: HashSet<&String> = HashSet::new();
    for provider in &config.providers {
        if !provider_keys.insert(&provider.key) {
            errors.push(format!("Duplicate provider key '{}'.", provider.key));
        }
        if provider.api_key.trim().is_empty() {
            errors.push(format!(
                "Provider '{}' ({}) has no API key configured.",
                provider.key, provider.r#type
            ));
        }
    }

    let mut client_names: HashSet<&String> = HashSet::new();
    for client in &config.clients {
        if !client_names.insert(&client.name) {
            errors.push(format!("Duplicate client name '{}'.", client.name));
        }
        if !provider_keys.contains(&client.provider) {
            errors.push(format!(
                "Client '{}' references non-existent provider '{}'.",
                client.name, client.provider
            ));
        }
        if client.model.trim().is_empty() {
            errors.push(format!("Client '{}' has an empty model name.", client.name));
        }
    }

    // Both fact routes resolve these names; start-up fails rather than serving 500s.
    for required in [OPENAI_CLIENT, ANTHROPIC_CLIENT] {
        if !config.clients.iter().any(|client| client.name == required) {
            errors.push(format!("Required client '{required}' is not configured."));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
