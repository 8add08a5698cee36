//! Configuration for the navigator
//!
//! Handles configuration loading from environment variables and defaults.

// =============================================================================
// Constants
// =============================================================================

/// Environment variable for the input prompt
pub const ENV_PROMPT: &str = "NAVIGATOR_PROMPT";

/// Environment variable to disable the startup banner
pub const ENV_BANNER: &str = "NAVIGATOR_BANNER";

/// Environment variable for the tracing filter
pub const ENV_LOG: &str = "NAVIGATOR_LOG";

/// Default input prompt
pub const DEFAULT_PROMPT: &str = "> ";

/// Default tracing filter
pub const DEFAULT_LOG_FILTER: &str = "warn";

// =============================================================================
// Config Struct
// =============================================================================

/// Shell configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Prompt printed before reading each line
    pub prompt: String,

    /// Print the banner and command help on startup
    pub show_banner: bool,

    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            show_banner: true,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(prompt) = lookup(ENV_PROMPT) {
            config.prompt = prompt;
        }

        if let Some(banner) = lookup(ENV_BANNER) {
            config.show_banner = !is_disabled(&banner);
        }

        if let Some(filter) = lookup(ENV_LOG) {
            if !filter.trim().is_empty() {
                config.log_filter = filter;
            }
        }

        config
    }
}

fn is_disabled(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "0" | "false" | "off" | "no"
    )
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Load the global configuration
pub fn load_config() -> Config {
    Config::from_env()
}

// =============================================================================
// Tests
// =============================================================================
