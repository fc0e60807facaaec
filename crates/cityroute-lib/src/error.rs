use thiserror::Error;

/// Convenient result alias for the cityroute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a query references a place that is not part of the graph.
    #[error("unknown place: {label}{}", format_suggestions(.suggestions))]
    NodeNotFound {
        label: String,
        suggestions: Vec<String>,
    },

    /// Raised when a weight lookup targets two places that share no street.
    #[error("no street connects {a} and {b}")]
    EdgeNotFound { a: String, b: String },

    /// Raised when the target cannot be reached from the source.
    #[error("no route found between {start} and {goal}")]
    NoPath { start: String, goal: String },

    /// Raised when a street carries a negative, non-finite or non-numeric time.
    #[error("invalid travel time {value} for street {a} - {b}")]
    InvalidWeight { a: String, b: String, value: String },

    /// Raised when a path enumeration is requested with a zero cap.
    #[error("path limit must be at least 1")]
    InvalidLimit,

    /// Raised when a map or graph document fails to parse or lacks required fields.
    #[error("malformed document: {message}")]
    MalformedDocument { message: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Raised when serializing a document fails.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn malformed(err: impl std::fmt::Display) -> Self {
        Error::MalformedDocument {
            message: err.to_string(),
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
