use std::env;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const PORT: &str = "PORT";
    pub const BIND_ADDRESS: &str = "BIND_ADDRESS";
}

/// Default values
pub mod defaults {
    pub const PORT: u16 = 8080;
    pub const BIND_ADDRESS: &str = "0.0.0.0";
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub bind_address: String,
}

impl Config {
    pub fn from_env() -> Self {
        let port = match env::var(env_vars::PORT) {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                log::warn!("Invalid {} value '{}', using default", env_vars::PORT, raw);
                defaults::PORT
            }),
            Err(_) => defaults::PORT,
        };

        let bind_address = env::var(env_vars::BIND_ADDRESS)
            .unwrap_or_else(|_| defaults::BIND_ADDRESS.to_string());

        Self { port, bind_address }
    }
}
