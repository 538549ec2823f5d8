use std::env;

const DEFAULT_DATABASE_URL: &str = "sqlite://biblion.db?mode=rwc";
const DEFAULT_PORT: u16 = 3333;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Empty means any origin is allowed
    pub cors_allowed_origins: Vec<String>,
    pub seed_demo: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup (the process environment in production).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .map(|s| {
                    s.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            seed_demo: lookup("SEED_DEMO").is_some_and(|v| v != "false" && v != "0"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = config_from(&[]);
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.port, DEFAULT_PORT);
        assert!(config.cors_allowed_origins.is_empty());
        assert!(!config.seed_demo);
    }

    #[test]
    fn invalid_port_falls_back_to_default() {
        let config = config_from(&[("PORT", "not-a-port")]);
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn cors_origins_are_trimmed_and_split() {
        let config = config_from(&[(
            "CORS_ALLOWED_ORIGINS",
            "http://localhost:5173, https://biblion.example ,",
        )]);
        assert_eq!(
            config.cors_allowed_origins,
            vec!["http://localhost:5173", "https://biblion.example"]
        );
    }

    #[test]
    fn seed_flag_accepts_any_value_but_false_or_zero() {
        assert!(config_from(&[("SEED_DEMO", "1")]).seed_demo);
        assert!(config_from(&[("SEED_DEMO", "yes")]).seed_demo);
        assert!(!config_from(&[("SEED_DEMO", "0")]).seed_demo);
        assert!(!config_from(&[("SEED_DEMO", "false")]).seed_demo);
    }
}
