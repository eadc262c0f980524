//! ScrumMate configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main ScrumMate configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// LLM provider configuration
    pub llm: LlmConfig,

    /// Notion destination configuration
    pub notion: NotionConfig,

    /// Journal storage configuration
    pub storage: StorageConfig,
}

impl Config {
    /// Validate configuration before use
    ///
    /// Checks that required credentials are present. Call this early in
    /// startup: a missing credential is fatal, with a clear message naming
    /// the variable to set.
    pub fn validate(&self) -> Result<()> {
        if std::env::var(&self.llm.api_key_env).is_err() {
            return Err(eyre::eyre!(
                "LLM API key not found. Set the {} environment variable.",
                self.llm.api_key_env
            ));
        }
        if std::env::var(&self.notion.api_key_env).is_err() {
            return Err(eyre::eyre!(
                "Notion API key not found. Set the {} environment variable.",
                self.notion.api_key_env
            ));
        }
        self.notion.resolve_page_id().map(|_| ())
    }

    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try project-local config: .scrummate.yml
        let local_config = PathBuf::from(".scrummate.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        // Try user config: ~/.config/scrummate/scrummate.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("scrummate").join("scrummate.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        // No config file found, use defaults
        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

/// LLM provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Provider name ("anthropic" or "openai")
    pub provider: String,

    /// Model identifier
    pub model: String,

    /// Environment variable containing the API key
    #[serde(rename = "api-key-env")]
    pub api_key_env: String,

    /// API base URL
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Maximum tokens per response
    #[serde(rename = "max-tokens")]
    pub max_tokens: u32,

    /// Request timeout in milliseconds
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,
}

impl LlmConfig {
    /// Read the API key from the configured environment variable
    pub fn get_api_key(&self) -> Result<String> {
        std::env::var(&self.api_key_env)
            .context(format!("LLM API key not found in {} environment variable", self.api_key_env))
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "anthropic".to_string(),
            model: "claude-sonnet-4-20250514".to_string(),
            api_key_env: "ANTHROPIC_API_KEY".to_string(),
            base_url: "https://api.anthropic.com".to_string(),
            max_tokens: 1024,
            timeout_ms: 60_000,
        }
    }
}

/// Notion destination configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotionConfig {
    /// Environment variable containing the integration token
    #[serde(rename = "api-key-env")]
    pub api_key_env: String,

    /// Environment variable containing the destination page id
    #[serde(rename = "page-id-env")]
    pub page_id_env: String,

    /// Destination page id; overrides the environment variable when set
    #[serde(rename = "page-id")]
    pub page_id: Option<String>,

    /// API base URL
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Notion-Version header value
    pub version: String,

    /// Request timeout in milliseconds
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,
}

impl NotionConfig {
    /// Read the integration token from the configured environment variable
    pub fn get_api_key(&self) -> Result<String> {
        std::env::var(&self.api_key_env).context(format!(
            "Notion API key not found in {} environment variable",
            self.api_key_env
        ))
    }

    /// Destination page id: explicit config value, else environment variable
    pub fn resolve_page_id(&self) -> Result<String> {
        if let Some(page_id) = &self.page_id {
            return Ok(page_id.clone());
        }
        std::env::var(&self.page_id_env).context(format!(
            "Notion page id not found. Set the {} environment variable or the notion.page-id config key.",
            self.page_id_env
        ))
    }
}

impl Default for NotionConfig {
    fn default() -> Self {
        Self {
            api_key_env: "NOTION_API_KEY".to_string(),
            page_id_env: "NOTION_PAGE_ID".to_string(),
            page_id: None,
            base_url: "https://api.notion.com".to_string(),
            version: "2022-06-28".to_string(),
            timeout_ms: 60_000,
        }
    }
}

/// Journal storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory for per-identity journal files
    #[serde(rename = "journal-dir")]
    pub journal_dir: PathBuf,

    /// Identity the session journals under
    pub identity: String,

    /// Turns of prior conversation included as model context
    #[serde(rename = "context-turns")]
    pub context_turns: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        // Use XDG data directory (~/.local/share/scrummate on Linux)
        let journal_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("scrummate")
            .join("journal");

        Self {
            journal_dir,
            identity: "user".to_string(),
            context_turns: chatjournal::DEFAULT_CONTEXT_TURNS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.llm.provider, "anthropic");
        assert_eq!(config.llm.timeout_ms, 60_000);
        assert_eq!(config.notion.version, "2022-06-28");
        assert_eq!(config.storage.identity, "user");
    }

    #[test]
    fn test_llm_config_defaults() {
        let config = LlmConfig::default();

        assert_eq!(config.provider, "anthropic");
        assert!(config.model.contains("sonnet"));
        assert_eq!(config.api_key_env, "ANTHROPIC_API_KEY");
        assert_eq!(config.base_url, "https://api.anthropic.com");
    }

    #[test]
    fn test_deserialize_config() {
        let yaml = r#"
llm:
  provider: openai
  model: gpt-4
  api-key-env: OPENAI_API_KEY
  base-url: https://api.openai.com
  max-tokens: 2048
  timeout-ms: 30000

notion:
  page-id: abc123
  timeout-ms: 30000

storage:
  identity: team
  context-turns: 3
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.llm.provider, "openai");
        assert_eq!(config.llm.model, "gpt-4");
        assert_eq!(config.llm.api_key_env, "OPENAI_API_KEY");
        assert_eq!(config.notion.page_id.as_deref(), Some("abc123"));
        assert_eq!(config.storage.identity, "team");
        assert_eq!(config.storage.context_turns, 3);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let yaml = r#"
llm:
  model: claude-haiku
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();

        // Specified value
        assert_eq!(config.llm.model, "claude-haiku");

        // Defaults for unspecified
        assert_eq!(config.llm.provider, "anthropic");
        assert_eq!(config.notion.api_key_env, "NOTION_API_KEY");
        assert_eq!(config.storage.context_turns, chatjournal::DEFAULT_CONTEXT_TURNS);
    }

    #[test]
    fn test_page_id_override_beats_env() {
        let config = NotionConfig {
            page_id: Some("from-config".to_string()),
            ..Default::default()
        };
        assert_eq!(config.resolve_page_id().unwrap(), "from-config");
    }
}
