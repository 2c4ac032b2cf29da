use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The host had no root node to give; nothing was produced.
    #[error("root node unavailable, no document produced")]
    RootUnavailable,

    /// Reading a tree dump or writing a document failed
    #[error("I/O error ({context}): {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error ({context}): {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("YAML error ({context}): {source}")]
    Yaml {
        context: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// Tree dump has no recognizable format
    #[error("unsupported tree dump '{0}' (expected .json, .yaml or .yml)")]
    UnsupportedDump(String),

    #[error("unknown query '{0}' (expected clickable, text, input, button, id, text-eq or description)")]
    UnknownQuery(String),

    #[error("query '{0}' needs a value")]
    MissingQueryValue(String),
}

impl SnapshotError {
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        SnapshotError::Io {
            context: context.into(),
            source,
        }
    }
}
