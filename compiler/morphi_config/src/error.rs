use std::io;
use std::path::PathBuf;

use morphi_lexer::ConfigError;

/// Error raised while loading a configuration document.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("cannot read configuration '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("delimiter `{tag}` must be exactly one character, got {value:?}")]
    MalformedDelimiter { tag: String, value: String },

    #[error("bulk_limit must be greater than zero")]
    InvalidBulkLimit,

    #[error(transparent)]
    Config(#[from] ConfigError),
}
