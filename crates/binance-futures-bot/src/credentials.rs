/*
[INPUT]:  BINANCE_API_KEY / BINANCE_API_SECRET or interactive input
[OUTPUT]: Adapter Credentials ready for the HTTP client
[POS]:    CLI layer - credential acquisition
[UPDATE]: When adding credential sources
*/

use std::fmt;

use anyhow::{Context, Result};
use binance_futures_adapter::Credentials;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Password};

pub const API_KEY_ENV: &str = "BINANCE_API_KEY";
pub const API_SECRET_ENV: &str = "BINANCE_API_SECRET";

/// Key or secret was blank after every source was tried
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingCredentials;

impl fmt::Display for MissingCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("API key and secret are required.")
    }
}

impl std::error::Error for MissingCredentials {}

/// Source for values missing from the environment
pub trait CredentialPrompt {
    fn api_key(&mut self) -> Result<String>;
    fn api_secret(&mut self) -> Result<String>;
}

/// Terminal prompts; the secret is never echoed
pub struct TerminalPrompt {
    theme: ColorfulTheme,
}

impl TerminalPrompt {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialPrompt for TerminalPrompt {
    fn api_key(&mut self) -> Result<String> {
        let value = Input::<String>::with_theme(&self.theme)
            .with_prompt("Enter your Binance Testnet API Key")
            .allow_empty(true)
            .interact_text()
            .context("read API key")?;
        Ok(value)
    }

    fn api_secret(&mut self) -> Result<String> {
        let value = Password::with_theme(&self.theme)
            .with_prompt("Enter your Binance Testnet API Secret")
            .allow_empty_password(true)
            .interact()
            .context("read API secret")?;
        Ok(value)
    }
}

/// Environment first, then the terminal
pub fn acquire() -> Result<Credentials> {
    resolve(
        env_value(API_KEY_ENV),
        env_value(API_SECRET_ENV),
        &mut TerminalPrompt::new(),
    )
}

/// Prompt only for what the environment did not provide
pub fn resolve(
    api_key: Option<String>,
    api_secret: Option<String>,
    prompt: &mut dyn CredentialPrompt,
) -> Result<Credentials> {
    let api_key = match api_key {
        Some(value) => value,
        None => prompt.api_key()?,
    };
    let api_secret = match api_secret {
        Some(value) => value,
        None => prompt.api_secret()?,
    };
    Credentials::new(api_key, api_secret).map_err(|_| MissingCredentials.into())
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
