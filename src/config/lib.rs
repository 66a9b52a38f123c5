use std::env;

use serde_yaml::Value;
use thiserror::Error;
use tracing::debug;

use super::constants::{
    ANTHROPIC_CLIENT, DEFAULT_ANTHROPIC_MODEL, DEFAULT_OPENAI_MODEL, OPENAI_CLIENT,
};
use crate::types::{AppConfig, ChatClientConfig, Provider, ProviderType, ServerConfig};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Environment variable '{0}' not found")]
    MissingEnvVar(String),
    #[error("Unterminated environment variable reference starting at byte {0}")]
    UnterminatedReference(usize),
    #[error("Invalid value '{value}' for {name}")]
    InvalidValue { name: String, value: String },
}

/// Loads a YAML config file, expanding `${VAR}` references in string values from the environment.
pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_string(),
        source,
    })?;
    let mut document: Value = serde_yaml::from_str(&contents)?;
    expand_env_in_value(&mut document, &|name: &str| env::var(name).ok())?;
    let mut config: AppConfig = serde_yaml::from_value(document)?;
    apply_server_overrides(&mut config.server, |name| env::var(name).ok())?;
    debug!(
        "Loaded {} providers and {} clients from {}",
        config.providers.len(),
        config.clients.len(),
        path
    );
    Ok(config)
}

/// Builds the default two-client configuration from process environment variables.
pub fn config_from_env() -> Result<AppConfig, ConfigError> {
    config_from_lookup(|name| env::var(name).ok())
}

pub fn config_from_lookup<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let provider = |key: &str, r#type: ProviderType, prefix: &str| Provider {
        key: key.to_string(),
        r#type,
        api_key: lookup(&format!("{prefix}_API_KEY")).unwrap_or_default(),
        base_url: lookup(&format!("{prefix}_BASE_URL")),
        params: Default::default(),
    };
    let client = |name: &str, prefix: &str, default_model: &str| ChatClientConfig {
        name: name.to_string(),
        provider: name.to_string(),
        model: lookup(&format!("{prefix}_MODEL")).unwrap_or_else(|| default_model.to_string()),
        max_tokens: None,
        temperature: None,
    };

    let mut server = ServerConfig::default();
    apply_server_overrides(&mut server, &lookup)?;

    Ok(AppConfig {
        server,
        providers: vec![
            provider(OPENAI_CLIENT, ProviderType::OpenAI, "OPENAI"),
            provider(ANTHROPIC_CLIENT, ProviderType::Anthropic, "ANTHROPIC"),
        ],
        clients: vec![
            client(OPENAI_CLIENT, "OPENAI", DEFAULT_OPENAI_MODEL),
            client(ANTHROPIC_CLIENT, "ANTHROPIC", DEFAULT_ANTHROPIC_MODEL),
        ],
    })
}

fn apply_server_overrides<F>(server: &mut ServerConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(host) = lookup("HOST") {
        server.host = host;
    }
    if let Some(port) = lookup("PORT") {
        server.port = port.parse().map_err(|_| ConfigError::InvalidValue {
            name: "PORT".to_string(),
            value: port,
        })?;
    }
    Ok(())
}

/// Expands references inside every string scalar of an already parsed document.
/// Comments never reach this point, and substituted text is never re-read as YAML.
pub fn expand_env_in_value<F>(value: &mut Value, lookup: &F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match value {
        Value::String(text) if text.contains("${") => {
            *text = expand_env_vars(text, lookup)?;
        }
        Value::Sequence(items) => {
            for item in items {
                expand_env_in_value(item, lookup)?;
            }
        }
        Value::Mapping(mapping) => {
            for (_, item) in mapping.iter_mut() {
                expand_env_in_value(item, lookup)?;
            }
        }
        Value::Tagged(tagged) => expand_env_in_value(&mut tagged.value, lookup)?,
        _ => {}
    }
    Ok(())
}

/// Replaces every `${NAME}` in `input` with the value `lookup` returns for `NAME`.
pub fn expand_env_vars<F>(input: &str, lookup: F) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut output = String::with_capacity(input.len());
    let mut rest = input;
    let mut offset = 0;

    while let Some(start) = rest.find("${") {
        output.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let end = after
            .find('}')
            .ok_or(ConfigError::UnterminatedReference(offset + start))?;
        let name = &after[..end];
        let value = lookup(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))?;
        output.push_str(&value);

        let consumed = start + 2 + end + 1;
        offset += consumed;
        rest = &rest[consumed..];
    }
    output.push_str(rest);

    Ok(output)
}
