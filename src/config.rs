// src/config.rs

use std::env;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

/// Which strategy the router uses to map a prompt to a tool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatcherStrategy {
    /// Deterministic first-match-wins scan over the static keyword table.
    Keyword,
    /// Single chat-completion call that proposes both tool and parameters.
    Model,
}

impl FromStr for MatcherStrategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "keyword" => Ok(MatcherStrategy::Keyword),
            "model" => Ok(MatcherStrategy::Model),
            other => bail!(
                "unknown matcher strategy '{}', expected 'keyword' or 'model'",
                other
            ),
        }
    }
}

// A struct to hold all configuration, loaded once at startup from the .env file.
#[derive(Clone, Debug)]
pub struct Config {
    // Server settings
    pub port: u16,

    // External credentials. Both are required; the process refuses to start
    // without them.
    pub openai_api_key: String,
    pub moralis_api_key: String,

    // Routing settings
    pub openai_model: String,
    pub matcher_strategy: MatcherStrategy,
    pub summary_enabled: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        // Load variables from the .env file into the environment
        dotenvy::dotenv().ok();

        let openai_api_key = env::var("OPENAI_API_KEY")
            .context("OPENAI_API_KEY must be set (chat-completions credential)")?;

        let moralis_api_key = env::var("MORALIS_API_KEY")
            .context("MORALIS_API_KEY must be set (blockchain data credential)")?;

        let matcher_strategy = env::var("MATCHER_STRATEGY")
            .unwrap_or_else(|_| "model".to_string())
            .parse::<MatcherStrategy>()
            .context("Invalid MATCHER_STRATEGY")?;

        let summary_enabled = env::var("SUMMARY_ENABLED")
            .map(|v| !matches!(v.trim().to_lowercase().as_str(), "0" | "false" | "no" | "off"))
            .unwrap_or(true);

        Ok(Config {
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            openai_api_key,
            moralis_api_key,
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            matcher_strategy,
            summary_enabled,
        })
    }
}
