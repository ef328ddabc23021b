use thiserror::Error;

/// Errors that abort a run. Missing files (ignore file, cache file) are
/// empty state, not errors, and never show up here.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("no template found for {0}")]
    TemplateNotFound(String),

    #[error("failed to fetch template for {name}, {reason}")]
    TemplateFetchFailed { name: String, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CliError {
    pub fn fetch_failed(name: &str, reason: impl Into<String>) -> Self {
        Self::TemplateFetchFailed {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_template() {
        let err = CliError::TemplateNotFound("node".to_string());
        assert_eq!(err.to_string(), "no template found for node");
    }

    #[test]
    fn fetch_failed_carries_the_reason() {
        let err = CliError::fetch_failed("node", "the service returned 500");
        assert_eq!(
            err.to_string(),
            "failed to fetch template for node, the service returned 500"
        );
    }
}
