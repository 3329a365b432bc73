pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid request: {message}")]
	InvalidRequest { message: String },
	#[error("Not found: {message}")]
	NotFound { message: String },
	#[error("Storage error: {message}")]
	Storage { message: String },
}
impl From<sqlx::Error> for Error {
	fn from(err: sqlx::Error) -> Self {
		Self::Storage { message: err.to_string() }
	}
}

impl From<board_storage::Error> for Error {
	fn from(err: board_storage::Error) -> Self {
		match err {
			board_storage::Error::Sqlx(inner) => Self::Storage { message: inner.to_string() },
			board_storage::Error::InvalidArgument(message) => Self::InvalidRequest { message },
			board_storage::Error::NotFound(message) => Self::NotFound { message },
			board_storage::Error::Conflict(message) => Self::Storage { message },
		}
	}
}
