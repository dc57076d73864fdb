use std::collections::HashMap;
use tracing::warn;

pub const HOST_KEY: &str = "redis.host";
pub const PORT_KEY: &str = "redis.port";
pub const PASSWORD_KEY: &str = "redis.password";

/// Source of string-keyed configuration values.
pub trait ConfigProvider {
    fn get(&self, key: &str) -> Option<String>;
}

/// Reads `redis.host` as `REDIS_HOST`, and so on.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvProvider;

impl EnvProvider {
    pub fn var_name(key: &str) -> String {
        key.replace('.', "_").to_uppercase()
    }
}

impl ConfigProvider for EnvProvider {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(Self::var_name(key)).ok()
    }
}

impl ConfigProvider for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub password: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "127.0.0.1".to_string(),
            port: 6379,
            password: None,
        }
    }
}

impl Config {
    /// Load from a provider, filling defaults for anything absent.
    pub fn from_provider<P: ConfigProvider + ?Sized>(provider: &P) -> Self {
        let mut config = Config::default();

        if let Some(host) = provider.get(HOST_KEY).filter(|h| !h.is_empty()) {
            config.host = host;
        }
        if let Some(port) = provider.get(PORT_KEY) {
            match port.trim().parse() {
                Ok(p) => config.port = p,
                Err(_) => warn!("Ignoring invalid {PORT_KEY} value {port:?}, using {}", config.port),
            }
        }
        config.password = provider.get(PASSWORD_KEY).filter(|p| !p.is_empty());

        config
    }

    pub fn from_env() -> Self {
        Self::from_provider(&EnvProvider)
    }

    /// Apply leading `--host`, `--port` and `--password` overrides.
    ///
    /// Flag parsing stops at the first word that is not a flag, or at a flag
    /// with no value. Everything from there on is returned untouched.
    pub fn apply_args(&mut self, args: &[String]) -> Vec<String> {
        let mut i = 0;
        while i + 1 < args.len() {
            let value = &args[i + 1];
            match args[i].as_str() {
                "--host" | "-h" => self.host = value.clone(),
                "--port" | "-p" => match value.parse() {
                    Ok(p) => self.port = p,
                    Err(_) => warn!("Ignoring invalid port {value:?}"),
                },
                "--password" | "-a" => {
                    self.password = Some(value.clone()).filter(|p| !p.is_empty());
                }
                _ => break,
            }
            i += 2;
        }
        args[i..].to_vec()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key.to_lowercase().as_str() {
            HOST_KEY => Some(self.host.clone()),
            PORT_KEY => Some(self.port.to_string()),
            PASSWORD_KEY => self.password.clone(),
            _ => None,
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
