use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid time format: {0}")]
    InvalidTimeFormat(#[from] chrono::ParseError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_error() -> chrono::ParseError {
        chrono::DateTime::parse_from_rfc3339("not-a-date").unwrap_err()
    }

    #[test]
    fn error_invalid_time_format_message() {
        let err = Error::from(parse_error());
        let msg = err.to_string();
        assert!(msg.starts_with("invalid time format: "));
    }

    #[test]
    fn error_invalid_time_format_keeps_diagnostic() {
        let err = Error::from(parse_error());
        let msg = err.to_string();
        assert!(msg.len() > "invalid time format: ".len());
    }
}
