use anyhow::{anyhow, Result};
use tracing::debug;

/// Contact handle shown on screens when `ADMIN_USERNAME` is not set
pub const DEFAULT_ADMIN_USERNAME: &str = "@kashsh00";

/// Tracing filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "promo_menu_bot=info";

/// Configuration for the promo menu bot loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub bot_token: String,
    pub admin_username: String,
}

impl Config {
    /// Load configuration from environment variables, reading `.env` first
    pub fn from_env() -> Result<Self> {
        Self::from_env_inner(true)
    }

    #[cfg(test)]
    pub fn from_env_no_dotenv() -> Result<Self> {
        Self::from_env_inner(false)
    }

    fn from_env_inner(load_dotenv: bool) -> Result<Self> {
        if load_dotenv {
            dotenvy::dotenv().ok();
        }

        let bot_token = std::env::var("BOT_TOKEN")
            .ok()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| anyhow!("BOT_TOKEN is required but not set"))?;

        let admin_username = std::env::var("ADMIN_USERNAME")
            .ok()
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_ADMIN_USERNAME.to_string());

        debug!(
            admin_username = %admin_username,
            "Config resolved from environment"
        );

        Ok(Config {
            bot_token,
            admin_username,
        })
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Config {{\n  bot_token: ***MASKED***,\n  admin_username: {},\n}}",
            self.admin_username
        )
    }
}
