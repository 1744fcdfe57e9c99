use anyhow::{Context, Result, anyhow};

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub run_migrations: bool,
    pub db_max_conn: u32,
}

impl Config {
    pub fn init() -> Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("Missing environment variable: DATABASE_URL")?;

        let port = std::env::var("PORT")
            .context("Missing environment variable: PORT")?
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let run_migrations_str =
            std::env::var("RUN_MIGRATIONS").unwrap_or_else(|_| "false".to_string());
        let run_migrations = match run_migrations_str.as_str() {
            "true" => true,
            "false" => false,
            other => {
                return Err(anyhow!(
                    "RUN_MIGRATIONS must be 'true' or 'false', got '{}'",
                    other
                ));
            }
        };

        let db_max_conn = std::env::var("DB_MAX_CONN")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<u32>()
            .context("DB_MAX_CONN must be a valid u32 integer")?;

        Ok(Self {
            database_url,
            port,
            run_migrations,
            db_max_conn,
        })
    }
}
