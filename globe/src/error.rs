use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("subdivision level {level} exceeds the maximum of {max}")]
    LevelTooHigh { level: u32, max: u32 },

    #[error("failed to read configuration file {path:?}: {source}")]
    ReadConfiguration {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse configuration file {path:?}: {source}")]
    ParseConfiguration {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
