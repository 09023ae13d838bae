//! Process-level error type for the `pond` binary.
//!
//! Per `spec.md` §7, only configuration/startup failures are fatal — a
//! failed dump or report write at run time is logged to stderr and the
//! simulation continues, so [`PondError`] is never constructed for those.

#![warn(missing_docs)]

pub use pond_config::ConfigError;

/// Top-level error returned by the `pond` binary's `run` entry point.
#[derive(Debug, thiserror::Error)]
pub enum PondError {
    /// The configuration file could not be loaded or failed validation.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A startup-time I/O operation (e.g. creating the dump directory) failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_config_error() {
        let cfg_err = ConfigError::ValidationError("bad".to_string());
        let err: PondError = cfg_err.into();
        assert!(matches!(err, PondError::Config(_)));
        assert!(format!("{err}").starts_with("configuration error:"));
    }

    #[test]
    fn wraps_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let err: PondError = io_err.into();
        assert!(matches!(err, PondError::Io(_)));
    }
}
