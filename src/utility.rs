//! Utilities
//!
//! The connection settings are taken from, in order:
//! - the command line option.
//! - the environment variable (which can be set in `.env`, read via `dotenv().ok()` in main).
//! - the default.
//!
//! Settings that were set by option or environment are collected in `changed_options`,
//! so they can be written to `.env` with `--write-dotenv`.
use log::*;
use std::{env, fs, io::Write, collections::HashMap, time::Duration};
use anyhow::{Context, Result};
use regex::Regex;
use crate::transport::DEFAULT_TIMEOUT_SECONDS;

pub const DEFAULT_API_URL: &str = "http://localhost:8002";

/// Resolve a setting from the option or the environment variable `env_name`.
/// A found setting is recorded in `changed_options`.
pub fn resolve_setting(
    option: &Option<String>,
    env_name: &'static str,
    changed_options: &mut HashMap<&str, String>,
) -> Option<String>
{
    if let Some(value) = option {
        info!("{} argument set: using: {}", env_name, value);
        changed_options.insert(env_name, value.to_string());
        return Some(value.to_string());
    }
    match env::var(env_name) {
        Ok(set_var) => {
            info!("argument not set: set via .env: {}: {}", env_name, set_var);
            changed_options.insert(env_name, set_var.to_owned());
            Some(set_var)
        }
        Err(_e) => None,
    }
}

pub fn set_api_url(
    option: &Option<String>,
    changed_options: &mut HashMap<&str, String>,
) -> String
{
    resolve_setting(option, "MLSTATS_API_URL", changed_options)
        .unwrap_or_else(|| {
            info!("api url not set: and not set via .env: using DEFAULT_API_URL: {}", DEFAULT_API_URL);
            DEFAULT_API_URL.to_string()
        })
}

pub fn set_username(
    option: &Option<String>,
    changed_options: &mut HashMap<&str, String>,
) -> Option<String>
{
    resolve_setting(option, "MLSTATS_USERNAME", changed_options)
}

/// The password is never recorded in `changed_options`, so it does not end up in `.env`.
pub fn set_password(
    option: &Option<String>,
) -> Option<String>
{
    option.clone().or_else(|| env::var("MLSTATS_PASSWORD").ok())
}

pub fn set_timeout(
    option: &Option<String>,
    changed_options: &mut HashMap<&str, String>,
) -> Result<Duration>
{
    let seconds = match resolve_setting(option, "MLSTATS_TIMEOUT", changed_options) {
        Some(timeout) => timeout.parse::<u64>()
            .with_context(|| format!("Invalid timeout (seconds): {}", timeout))?,
        None => {
            info!("timeout not set: and not set via .env: using DEFAULT_TIMEOUT_SECONDS: {}", DEFAULT_TIMEOUT_SECONDS);
            DEFAULT_TIMEOUT_SECONDS
        }
    };
    Ok(Duration::from_secs(seconds))
}

pub fn set_regex(
    regex: &Option<String>,
) -> Result<Regex>
{
    let regex = regex.as_deref().unwrap_or(".*");
    Regex::new(regex)
        .with_context(|| format!("Invalid regex: {}", regex))
}

pub fn dotenv_writer(
    write_dotenv: bool,
    changed_options: HashMap<&str, String>,
) -> Result<()>
{
    if !changed_options.is_empty() && write_dotenv {
        info!("Writing .env file");
        let mut file = fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(".env")
            .with_context(|| "Error writing .env file: .env")?;

        for (key, value) in changed_options {
            file.write_all(format!("{}={}\n", key, value).as_bytes())?;
            info!("{}={}", key, value);
        }
    }
    Ok(())
}
