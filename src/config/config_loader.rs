use anyhow::{Ok, Result};

use super::config_model::{DotEnvyConfig, Server};

pub fn load() -> Result<DotEnvyConfig> {
    dotenvy::dotenv().ok();

    let server = Server {
        port: std::env::var("SERVER_PORT")
            .unwrap_or_else(|_| "5001".to_string())
            .parse()?,
        body_limit: std::env::var("SERVER_BODY_LIMIT")
            .unwrap_or_else(|_| "10".to_string())
            .parse()?,
        timeout: std::env::var("SERVER_TIMEOUT")
            .unwrap_or_else(|_| "30".to_string())
            .parse()?,
    };

    Ok(DotEnvyConfig { server })
}
