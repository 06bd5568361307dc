use anyhow::{bail, Context, Result};

pub struct AppConfig {
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let database = DatabaseConfig {
            host: std::env::var("DATABASE_HOST").context("DATABASE_HOST is not set")?,
            port: std::env::var("DATABASE_PORT")
                .context("DATABASE_PORT is not set")?
                .parse::<u16>()
                .context("DATABASE_PORT must be a port number")?,
            username: std::env::var("DATABASE_USERNAME").context("DATABASE_USERNAME is not set")?,
            password: std::env::var("DATABASE_PASSWORD").context("DATABASE_PASSWORD is not set")?,
            database: std::env::var("DATABASE_NAME").context("DATABASE_NAME is not set")?,
        };
        // 署名鍵は必須。デフォルト値へのフォールバックはしない。
        let jwt_secret = std::env::var("JWT_SECRET").context("JWT_SECRET is not set")?;
        if jwt_secret.is_empty() {
            bail!("JWT_SECRET must not be empty");
        }
        let ttl_hours = match std::env::var("TOKEN_TTL_HOURS") {
            Ok(v) => v
                .parse::<i64>()
                .context("TOKEN_TTL_HOURS must be an integer")?,
            Err(_) => 24,
        };
        let auth = AuthConfig {
            jwt_secret,
            ttl_hours,
        };
        Ok(Self { database, auth })
    }
}

pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

pub struct AuthConfig {
    pub jwt_secret: String,
    pub ttl_hours: i64,
}
