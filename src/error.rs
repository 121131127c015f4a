//! Common error types for interpreter operations

use core::fmt;

/// Error type for interpreter operations.
///
/// `E` is the error type of the underlying [`Serial`](crate::io::Serial)
/// transport. None of these errors is fatal: the interpreter keeps working
/// with its existing state after any of them.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error<E> {
    /// The interpreter was used before [`Cli::init`](crate::cli::Cli::init).
    NotInitialized,
    /// The command table is full; the command was not added.
    CapacityExceeded,
    /// The command name is empty, reserved, not printable ASCII, or longer
    /// than an argument buffer can hold.
    InvalidName,
    /// A `Display` implementation failed while formatting output.
    Format,
    /// The transport reported an error.
    Serial(E),
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotInitialized => f.write_str("interpreter not initialized"),
            Error::CapacityExceeded => f.write_str("command table full"),
            Error::InvalidName => f.write_str("invalid command name"),
            Error::Format => f.write_str("formatting error"),
            Error::Serial(e) => write!(f, "serial error: {:?}", e),
        }
    }
}

#[cfg(feature = "std")]
impl<E: fmt::Debug> std::error::Error for Error<E> {}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for Error<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::NotInitialized => defmt::write!(f, "NotInitialized"),
            Error::CapacityExceeded => defmt::write!(f, "CapacityExceeded"),
            Error::InvalidName => defmt::write!(f, "InvalidName"),
            Error::Format => defmt::write!(f, "Format"),
            Error::Serial(e) => defmt::write!(f, "Serial({})", e),
        }
    }
}

/// Registration errors reported by the [`Registry`](crate::registry::Registry).
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum RegistryError {
    /// The table already holds its maximum number of commands.
    CapacityExceeded,
    /// The name is empty, reserved or contains characters that can never
    /// appear in a token.
    InvalidName,
}

impl<E> From<RegistryError> for Error<E> {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::CapacityExceeded => Error::CapacityExceeded,
            RegistryError::InvalidName => Error::InvalidName,
        }
    }
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::CapacityExceeded => f.write_str("command table full"),
            RegistryError::InvalidName => f.write_str("invalid command name"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RegistryError {}

#[cfg(feature = "defmt")]
impl defmt::Format for RegistryError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            RegistryError::CapacityExceeded => defmt::write!(f, "CapacityExceeded"),
            RegistryError::InvalidName => defmt::write!(f, "InvalidName"),
        }
    }
}

/// Errors raised while loading or storing a [`Config`](crate::config::Config).
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ConfigError {
    /// The JSON document is malformed or has fields of the wrong type.
    Parse,
    /// The output buffer cannot hold the serialized configuration.
    BufferTooSmall,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse => f.write_str("malformed configuration"),
            ConfigError::BufferTooSmall => f.write_str("buffer too small"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            ConfigError::Parse => defmt::write!(f, "Parse"),
            ConfigError::BufferTooSmall => defmt::write!(f, "BufferTooSmall"),
        }
    }
}
