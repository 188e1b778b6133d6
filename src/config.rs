use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use tracing::info;

use crate::Error;

pub const DEFAULT_SERVICE_URL: &str = "https://wordgpt.onrender.com/generate";
pub const DEFAULT_CONFIG_PATH: &str = "./wordgpt_config.json";

/// Process-level settings read from the environment
#[derive(Debug, Clone)]
pub struct Config {
    pub service_url: String,
    pub config_path: PathBuf,
}

pub fn load_config() -> miette::Result<Config> {
    info!("Loading configuration");

    // Load environment variables
    dotenv().ok();

    let service_url =
        env::var("WORDGPT_SERVICE_URL").unwrap_or_else(|_| DEFAULT_SERVICE_URL.to_string());

    if !(service_url.starts_with("http://") || service_url.starts_with("https://")) {
        return Err(Error::Env(format!(
            "Invalid WORDGPT_SERVICE_URL '{}': expected an http(s) URL",
            service_url
        ))
        .into());
    }

    let config_path = env::var("WORDGPT_CONFIG_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));

    Ok(Config {
        service_url,
        config_path,
    })
}
