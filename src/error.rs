// src/error.rs
use mongodb::error::{Error as DriverError, ErrorKind as DriverErrorKind};

/// Server error codes that mean the credentials were rejected.
const AUTH_ERROR_CODES: [i32; 2] = [
    13, // Unauthorized
    18, // AuthenticationFailed
];

/// Step of the probe an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Connect,
    Ping,
    Find,
}

#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("invalid connection string: {0}")]
    InvalidUri(String),

    #[error("server unreachable: {0}")]
    Unreachable(String),

    #[error("authentication failed: {0}")]
    AuthFailed(String),

    #[error("timed out: {0}")]
    Timeout(String),

    #[error("query failed: {0}")]
    QueryFailed(String),
}

impl ProbeError {
    /// Classifies a driver error raised during `stage`.
    pub fn from_driver(stage: Stage, err: DriverError) -> Self {
        let message = err.to_string();

        match err.kind.as_ref() {
            DriverErrorKind::Authentication { .. } => ProbeError::AuthFailed(message),
            DriverErrorKind::Command(cmd) if AUTH_ERROR_CODES.contains(&cmd.code) => {
                ProbeError::AuthFailed(message)
            }
            DriverErrorKind::Io(io) if io.kind() == std::io::ErrorKind::TimedOut => {
                ProbeError::Timeout(message)
            }
            DriverErrorKind::InvalidArgument { .. } if stage == Stage::Connect => {
                ProbeError::InvalidUri(message)
            }
            DriverErrorKind::ServerSelection { .. }
            | DriverErrorKind::DnsResolve { .. }
            | DriverErrorKind::ConnectionPoolCleared { .. }
            | DriverErrorKind::Io(_) => ProbeError::Unreachable(message),
            _ if stage == Stage::Find => ProbeError::QueryFailed(message),
            _ => ProbeError::Unreachable(message),
        }
    }
}
