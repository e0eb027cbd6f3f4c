use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    /// HTTP request could not be completed (DNS, connect, timeout, body read)
    #[error("failed to fetch {url}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error("{url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    /// Reading the source document or writing the generated file failed
    #[error("I/O error on {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Class name or namespace is not a usable identifier
    #[error("invalid {what} '{value}': {reason}")]
    InvalidIdentifier {
        what: &'static str,
        value: String,
        reason: String,
    },

    #[error("JSON serialize error ({context})")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

impl GenError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        GenError::Io {
            path: path.into(),
            source,
        }
    }
}
