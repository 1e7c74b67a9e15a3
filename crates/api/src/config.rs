use std::path::PathBuf;

use shelf_core::variant::Variant;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for running from a checkout.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `4000`).
    pub port: u16,
    /// SQLite database URL (default: `sqlite://bookmark.db`).
    pub database_url: String,
    /// Upper bound on pooled SQLite connections (default: `5`).
    pub db_max_connections: u32,
    /// Which bookmark schema to serve (default: `catalog`).
    pub variant: Variant,
    /// Where uploaded images are written and served from (default: `./uploads`).
    pub upload_dir: PathBuf,
    /// Static assets served for any unmatched path (default: `./public`).
    pub public_dir: PathBuf,
    /// Request body limit for `/add`, in bytes (default: 10 MiB).
    pub max_upload_bytes: usize,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var              | Default                 |
    /// |----------------------|-------------------------|
    /// | `HOST`               | `0.0.0.0`               |
    /// | `PORT`               | `4000`                  |
    /// | `DATABASE_URL`       | `sqlite://bookmark.db`  |
    /// | `DB_MAX_CONNECTIONS` | `5`                     |
    /// | `SHELF_VARIANT`      | `catalog`               |
    /// | `UPLOAD_DIR`         | `./uploads`             |
    /// | `PUBLIC_DIR`         | `./public`              |
    /// | `MAX_UPLOAD_BYTES`   | `10485760`              |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "4000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://bookmark.db".into());

        let db_max_connections: u32 = std::env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".into())
            .parse()
            .expect("DB_MAX_CONNECTIONS must be a valid u32");

        let variant: Variant = std::env::var("SHELF_VARIANT")
            .unwrap_or_else(|_| "catalog".into())
            .parse()
            .expect("SHELF_VARIANT must be 'catalog' or 'websites'");

        let upload_dir = std::env::var("UPLOAD_DIR")
            .unwrap_or_else(|_| "./uploads".into())
            .into();

        let public_dir = std::env::var("PUBLIC_DIR")
            .unwrap_or_else(|_| "./public".into())
            .into();

        let max_upload_bytes: usize = std::env::var("MAX_UPLOAD_BYTES")
            .unwrap_or_else(|_| (10 * 1024 * 1024).to_string())
            .parse()
            .expect("MAX_UPLOAD_BYTES must be a valid usize");

        Self {
            host,
            port,
            database_url,
            db_max_connections,
            variant,
            upload_dir,
            public_dir,
            max_upload_bytes,
        }
    }
}
