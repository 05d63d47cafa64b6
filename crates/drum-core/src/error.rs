use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("layout has no panels")]
    Empty,
    #[error("panel id {0} appears more than once")]
    DuplicatePanelId(u32),
    #[error("panel {0} has a non-finite centroid")]
    NonFiniteCentroid(u32),
}

/// Failure reported by a palette or layout provider.
#[derive(Debug, Error, PartialEq)]
#[error("{provider} provider failed: {message}")]
pub struct ProviderError {
    pub provider: &'static str,
    pub message: String,
}

impl ProviderError {
    pub fn new(provider: &'static str, message: impl Into<String>) -> Self {
        Self {
            provider,
            message: message.into(),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error("invalid engine config: {0}")]
    Config(String),
}
