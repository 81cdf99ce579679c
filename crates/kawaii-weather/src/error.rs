use crate::model::ValidationError;
use crate::providers::FetchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    User,
    Runtime,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Runtime => "runtime",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppError {
    pub kind: ErrorKind,
    pub code: &'static str,
    pub message: String,
}

pub const CODE_USER_INVALID_INPUT: &str = "user.invalid_input";
pub const CODE_USER_OUTPUT_MODE_CONFLICT: &str = "user.output_mode_conflict";
pub const CODE_RUNTIME_PLACE_NOT_FOUND: &str = "runtime.place_not_found";
pub const CODE_RUNTIME_FETCH_FAILED: &str = "runtime.fetch_failed";
pub const CODE_RUNTIME_CLIENT_INIT: &str = "runtime.client_init_failed";
pub const CODE_RUNTIME_SERIALIZE: &str = "runtime.serialize_failed";
pub const CODE_RUNTIME_IO: &str = "runtime.io_failed";

impl AppError {
    pub fn user(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::User,
            code,
            message: message.into(),
        }
    }

    pub fn runtime(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::Runtime,
            code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.kind {
            ErrorKind::User => 2,
            ErrorKind::Runtime => 1,
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        Self::user(CODE_USER_INVALID_INPUT, error.to_string())
    }
}

impl From<FetchError> for AppError {
    fn from(error: FetchError) -> Self {
        let code = match error {
            FetchError::PlaceNotFound(_) => CODE_RUNTIME_PLACE_NOT_FOUND,
            FetchError::Transport(_) | FetchError::MalformedResponse(_) => {
                CODE_RUNTIME_FETCH_FAILED
            }
        };
        Self::runtime(code, error.to_string())
    }
}
