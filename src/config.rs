use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::LazyLock;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// SQLite URL backing the local key-value store.
    pub database_url: String,
    pub loglevel: String,
    /// Directory holding `clubs.json`, `vendors.json` and `requests.json` that
    /// replace the bundled seed collections.
    pub seed_dir: Option<PathBuf>,
    /// Number of discover chips sampled per session.
    pub discover_tag_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:clubhub.sqlite".to_string(),
            loglevel: "info".to_string(),
            seed_dir: None,
            discover_tag_count: 10,
        }
    }
}

impl Config {
    /// Defaults, then `config.toml`, then `CLUBHUB_*` environment variables.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("CLUBHUB_"))
    }

    pub fn load() -> Result<Self, crate::ClubHubError> {
        Ok(Self::figment().extract()?)
    }
}

pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::load().unwrap_or_else(|e| {
        eprintln!("invalid configuration, falling back to defaults: {e}");
        Config::default()
    })
});

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn env_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.set_env("CLUBHUB_DISCOVER_TAG_COUNT", "4");
            jail.set_env("CLUBHUB_DATABASE_URL", "sqlite:other.sqlite");
            let cfg = Config::load().expect("config should load");
            assert_eq!(cfg.discover_tag_count, 4);
            assert_eq!(cfg.database_url, "sqlite:other.sqlite");
            assert_eq!(cfg.loglevel, "info");
            assert!(cfg.seed_dir.is_none());
            Ok(())
        });
    }

    #[test]
    fn toml_file_is_read() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
                loglevel = "debug"
                seed_dir = "fixtures"
                "#,
            )?;
            let cfg = Config::load().expect("config should load");
            assert_eq!(cfg.loglevel, "debug");
            assert_eq!(cfg.seed_dir, Some(PathBuf::from("fixtures")));
            assert_eq!(cfg.discover_tag_count, 10);
            Ok(())
        });
    }
}
