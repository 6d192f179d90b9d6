use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub llm: LlmConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LlmConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// OpenAI-compatible endpoint; the official API when absent.
    #[serde(default)]
    pub api_base: Option<String>,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: i32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            api_base: None,
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
        }
    }
}

fn default_port() -> u16 {
    3000
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_temperature() -> f64 {
    0.7
}

fn default_max_tokens() -> i32 {
    512
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000

[llm]
api_key = ""
model = "gpt-4o-mini"
temperature = 0.7
max_tokens = 512
"#;

pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable
/// 2. Falls back to embedded default config
///
/// An empty `llm.api_key` is then filled from `OPENAI_API_KEY`.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = read_config_file()?;
    apply_env_key(&mut config, std::env::var(API_KEY_ENV).ok());
    Ok(config)
}

fn read_config_file() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

fn apply_env_key(config: &mut Config, env_key: Option<String>) {
    if !config.llm.api_key.trim().is_empty() {
        return;
    }
    if let Some(key) = env_key.filter(|k| !k.trim().is_empty()) {
        tracing::info!("Using API key from {}", API_KEY_ENV);
        config.llm.api_key = key;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert!(config.llm.api_key.is_empty());
        assert!(config.llm.api_base.is_none());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config: Config = toml::from_str("[llm]\napi_base = \"http://localhost:11434/v1\"\n").unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.llm.max_tokens, 512);
        assert_eq!(config.llm.api_base.as_deref(), Some("http://localhost:11434/v1"));
    }

    #[test]
    fn test_env_key_fills_empty_key_only() {
        let mut config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        apply_env_key(&mut config, Some("sk-env".to_string()));
        assert_eq!(config.llm.api_key, "sk-env");

        apply_env_key(&mut config, Some("sk-other".to_string()));
        assert_eq!(config.llm.api_key, "sk-env");
    }

    #[test]
    fn test_blank_env_key_is_ignored() {
        let mut config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        apply_env_key(&mut config, Some("  ".to_string()));
        assert!(config.llm.api_key.is_empty());
    }
}
