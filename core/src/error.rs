use thiserror::Error;

/// Load-fatal failures. Anything that reaches the caller as a `ScoreError`
/// aborted the load before aggregation began.
#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("File '{path}' not found!")]
    FileNotFound { path: String },

    #[error("Cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML file is empty or invalid!")]
    EmptyDocument,

    #[error("Error parsing YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("YAML root must be a dictionary")]
    RootNotMapping,

    #[error("No 'innings' section found in YAML")]
    MissingInnings,

    #[error("'innings' must be a list")]
    InningsNotList,

    #[error("No innings data found")]
    NoInnings,
}

pub type ScoreResult<T> = Result<T, ScoreError>;
