pub const DEFAULT_DATABASE_PATH: &str = "swiss_tournament.db";

#[derive(Debug, Clone)]
pub struct StoreSettings {
    pub database_path: String,
    pub pool_size: u32,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            database_path: DEFAULT_DATABASE_PATH.to_string(),
            pool_size: 4,
        }
    }
}

impl StoreSettings {
    /// Defaults, with the path taken from `DATABASE_PATH` when it is set.
    pub fn from_env() -> Self {
        let database_path = std::env::var("DATABASE_PATH")
            .unwrap_or_else(|_| DEFAULT_DATABASE_PATH.to_string());

        Self {
            database_path,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self { port: 3000 }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub store: StoreSettings,
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
            store: StoreSettings::from_env(),
            server: ServerSettings::default(),
        }
    }

    /// Overrides the database path, e.g. from a command line flag.
    pub fn with_database_path(mut self, path: Option<&str>) -> Self {
        if let Some(path) = path {
            self.store.database_path = path.to_string();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_path_override() {
        let config = AppConfig::new().with_database_path(Some("/tmp/league.db"));
        assert_eq!(config.store.database_path, "/tmp/league.db");
    }

    #[test]
    fn test_no_override_keeps_path() {
        let before = AppConfig::new();
        let after = before.clone().with_database_path(None);
        assert_eq!(before.store.database_path, after.store.database_path);
        assert_eq!(after.server.port, 3000);
    }
}
