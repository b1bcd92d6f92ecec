use std::path::PathBuf;
use std::time::Duration;

/// Default quiet period before an edit is written back.
pub const DEFAULT_SAVE_DELAY_SECS: u64 = 8;

/// Editor configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the spacing API (default: `http://localhost:12348`).
    pub api_url: String,
    /// JSON file holding the active `component_id` (default: `.spacing-editor.json`).
    pub state_file: PathBuf,
    /// Seconds of inactivity before a pending edit is saved (default: `8`).
    pub save_delay_secs: u64,
}

impl ClientConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                  |
    /// |---------------------------|--------------------------|
    /// | `SPACING_API_URL`         | `http://localhost:12348` |
    /// | `SPACING_STATE_FILE`      | `.spacing-editor.json`   |
    /// | `SPACING_SAVE_DELAY_SECS` | `8`                      |
    pub fn from_env() -> Self {
        let api_url =
            std::env::var("SPACING_API_URL").unwrap_or_else(|_| "http://localhost:12348".into());

        let state_file = std::env::var("SPACING_STATE_FILE")
            .unwrap_or_else(|_| ".spacing-editor.json".into())
            .into();

        let save_delay_secs: u64 = std::env::var("SPACING_SAVE_DELAY_SECS")
            .unwrap_or_else(|_| DEFAULT_SAVE_DELAY_SECS.to_string())
            .parse()
            .expect("SPACING_SAVE_DELAY_SECS must be a valid u64");

        Self {
            api_url,
            state_file,
            save_delay_secs,
        }
    }

    pub fn save_delay(&self) -> Duration {
        Duration::from_secs(self.save_delay_secs)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:12348".to_string(),
            state_file: PathBuf::from(".spacing-editor.json"),
            save_delay_secs: DEFAULT_SAVE_DELAY_SECS,
        }
    }
}
