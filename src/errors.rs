/// Errors fall in two buckets: the request never left the process
/// (`Construction`), or the network exchange itself failed (`Transport`).
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Failed to build request: {0}")]
    Construction(String),

    #[error("Transport error: {source}")]
    Transport {
        /// Status code, when one was received before the failure (e.g. the
        /// connection died while draining the body).
        status: Option<u16>,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    /// True when the failure was the request deadline elapsing.
    pub fn is_timeout(&self) -> bool {
        match self {
            FetchError::Transport { source, .. } => source.is_timeout(),
            FetchError::Construction(_) => false,
        }
    }

    /// Status code observed before the failure, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Transport { status, .. } => *status,
            FetchError::Construction(_) => None,
        }
    }
}
