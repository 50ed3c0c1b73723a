use derive_more::Display;

/// Errors surfaced by the attendance engine.
///
/// A single malformed day entry is never an error: it is skipped and logged
/// where it is found, so the rest of the month still renders.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum AttendanceError {
    /// Caller supplied an out-of-range year or month.
    #[display(fmt = "invalid argument: {}", _0)]
    InvalidArgument(String),

    /// The service payload as a whole could not be used.
    #[display(fmt = "malformed payload: {}", _0)]
    MalformedPayload(String),
}

impl std::error::Error for AttendanceError {}

pub type Result<T> = std::result::Result<T, AttendanceError>;
