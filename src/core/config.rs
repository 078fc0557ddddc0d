use dotenv::dotenv;
use std::env;
use tracing::info;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub max_connections: u32,
    pub enforce_foreign_keys: bool,
    pub cors_allowed_origin: Option<String>,
    pub app_env: String,
}

impl Config {
    /// Carica la configurazione dalle variabili d'ambiente
    /// Chiama dotenv() automaticamente
    pub fn from_env() -> Result<Self, String> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Every variable is optional; a value that is present but unparsable is an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .unwrap_or_else(|| "sqlite://movies.db".to_string());

        let server_host = lookup("SERVER_HOST")
            .unwrap_or_else(|| "127.0.0.1".to_string());

        let server_port = lookup("SERVER_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| "Invalid SERVER_PORT: must be a number between 0-65535".to_string())?;

        let max_connections = lookup("MAX_DB_CONNECTIONS")
            .unwrap_or_else(|| "5".to_string())
            .parse::<u32>()
            .map_err(|_| "Invalid MAX_DB_CONNECTIONS: must be a positive number".to_string())?;
        if max_connections == 0 {
            return Err("Invalid MAX_DB_CONNECTIONS: must be a positive number".to_string());
        }

        let enforce_foreign_keys = match lookup("ENFORCE_FOREIGN_KEYS") {
            Some(value) => parse_bool(&value).ok_or_else(|| {
                "Invalid ENFORCE_FOREIGN_KEYS: must be true or false".to_string()
            })?,
            None => false,
        };

        let cors_allowed_origin = lookup("CORS_ALLOWED_ORIGIN").filter(|s| !s.trim().is_empty());

        let app_env = lookup("APP_ENV")
            .unwrap_or_else(|| "development".to_string());

        Ok(Config {
            database_url,
            server_host,
            server_port,
            max_connections,
            enforce_foreign_keys,
            cors_allowed_origin,
            app_env,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Logga la configurazione effettiva
    pub fn print_info(&self) {
        info!("Server Configuration:");
        info!("   Environment: {}", self.app_env);
        info!("   Server Address: {}", self.bind_address());
        info!("   Database: {}", self.database_url);
        info!("   Max DB Connections: {}", self.max_connections);
        info!(
            "   Foreign Keys: {}",
            if self.enforce_foreign_keys { "enforced" } else { "not enforced" }
        );
        match &self.cors_allowed_origin {
            Some(origin) => info!("   CORS Origin: {}", origin),
            None => info!("   CORS: disabled"),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
