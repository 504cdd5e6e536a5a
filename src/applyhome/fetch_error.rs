use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Credential or base URL missing. Nothing was sent.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network failure or a non-2xx answer.
    #[error("Transport error: {message}")]
    Transport {
        message: String,
        status: Option<u16>,
        payload: Option<String>,
    },

    /// A 2xx answer whose body could not be read as a listing.
    #[error("Malformed response: {message}")]
    Malformed {
        message: String,
        payload: Option<String>,
    },
}

impl FetchError {
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Transport { status, .. } => *status,
            _ => None,
        }
    }

    /// Raw upstream body, for logs only.
    pub fn payload(&self) -> Option<&str> {
        match self {
            FetchError::Transport { payload, .. } | FetchError::Malformed { payload, .. } => {
                payload.as_deref()
            }
            FetchError::Config(_) => None,
        }
    }

    /// What the board shows instead of the raw error.
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::Config(_) => "서비스 설정 오류로 분양 정보를 불러올 수 없습니다.",
            FetchError::Transport {
                status: Some(_), ..
            } => "분양 정보 조회에 실패했습니다.",
            FetchError::Transport { status: None, .. } | FetchError::Malformed { .. } => {
                "분양 정보를 가져오는 중 오류가 발생했습니다."
            }
        }
    }
}
