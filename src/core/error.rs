// src/core/error.rs

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The login name of the current session could not be determined.
    #[error("unable to resolve the session username: {reason}")]
    SessionResolution { reason: String },

    /// A platform-specific component was used on a host that does not support it.
    #[error("{component} is only available on {supported}, not on {current}")]
    PlatformMismatch {
        component: &'static str,
        supported: &'static str,
        current: &'static str,
    },

    /// An external command failed to run or produced output we could not read.
    #[error("`{command}` failed: {reason}")]
    Subprocess { command: String, reason: String },

    #[error("byte count must not be negative, got {0}")]
    NegativeSize(i128),
}

impl Error {
    pub(crate) fn session(reason: impl Into<String>) -> Self {
        Self::SessionResolution {
            reason: reason.into(),
        }
    }

    pub(crate) fn subprocess(command: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Subprocess {
            command: command.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failing_piece() {
        let err = Error::subprocess("pip freeze", "exit status 1");
        assert_eq!(err.to_string(), "`pip freeze` failed: exit status 1");

        let err = Error::PlatformMismatch {
            component: "drives",
            supported: "windows",
            current: "linux",
        };
        assert_eq!(
            err.to_string(),
            "drives is only available on windows, not on linux"
        );
    }
}
