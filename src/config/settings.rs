use std::time::Duration;

#[derive(Clone)]
pub struct DatabaseSettings {
    pub path: String,
    pub pool_size: u32,
    pub busy_timeout_ms: u64,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: "league.db".to_string(),
            pool_size: 8,
            busy_timeout_ms: 5_000,
        }
    }
}

impl DatabaseSettings {
    /// Defaults, with the path overridden by `DATABASE_PATH` when set.
    pub fn from_env() -> Self {
        let mut settings = Self::default();
        if let Ok(path) = std::env::var("DATABASE_PATH") {
            settings.path = path;
        }
        settings
    }

    pub fn busy_timeout(&self) -> Duration {
        Duration::from_millis(self.busy_timeout_ms)
    }
}

#[derive(Clone)]
pub struct ServerSettings {
    pub bind_address: [u8; 4],
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_address: [0, 0, 0, 0],
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub database: DatabaseSettings,
    pub server: ServerSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            database: DatabaseSettings::from_env(),
            server: ServerSettings::default(),
        }
    }
}
