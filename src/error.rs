// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Notify(NotifyError),
    Trigger(String),
}

/// Reasons a contact submission or outbound notification can be rejected
/// before anything leaves the process.
///
/// Network failures are never represented here: delivery is detached and
/// its outcome is only logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifyError {
    /// The phone field was empty or whitespace only.
    EmptyPhone,

    /// The overlay the submission came from is not open.
    OverlayClosed,

    /// The configured endpoint could not be parsed as a URL.
    InvalidEndpoint(String),
}

impl NotifyError {
    /// Returns the i18n message key used when the form shows the rejection.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            NotifyError::EmptyPhone => "contact-error-phone-required",
            NotifyError::OverlayClosed => "contact-error-closed",
            NotifyError::InvalidEndpoint(_) => "contact-error-endpoint",
        }
    }
}

impl fmt::Display for NotifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotifyError::EmptyPhone => write!(f, "Phone number is required"),
            NotifyError::OverlayClosed => write!(f, "Submitting overlay is not open"),
            NotifyError::InvalidEndpoint(url) => write!(f, "Invalid endpoint: {}", url),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Notify(e) => write!(f, "Notify Error: {}", e),
            Error::Trigger(e) => write!(f, "Trigger Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<NotifyError> for Error {
    fn from(err: NotifyError) -> Self {
        Error::Notify(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn notify_error_wraps_into_crate_error() {
        let err: Error = NotifyError::EmptyPhone.into();
        assert_eq!(err, Error::Notify(NotifyError::EmptyPhone));
        assert_eq!(format!("{}", err), "Notify Error: Phone number is required");
    }

    #[test]
    fn notify_error_i18n_keys() {
        assert_eq!(
            NotifyError::EmptyPhone.i18n_key(),
            "contact-error-phone-required"
        );
        assert_eq!(NotifyError::OverlayClosed.i18n_key(), "contact-error-closed");
    }
}
