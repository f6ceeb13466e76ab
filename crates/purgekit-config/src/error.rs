use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config directory not found")]
    ConfigDirNotFound,

    #[error(
        "Cloudflare API credentials not configured. Set CLOUDFLARE_API_TOKEN, or \
        CLOUDFLARE_API_EMAIL and CLOUDFLARE_API_KEY, or add them to purgekit.yaml"
    )]
    MissingCredentials,

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
