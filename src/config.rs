//! Construction-time configuration for the interpreter.
//!
//! Capacities (number of commands, arguments per line and characters per
//! argument) are const generics of [`Cli`](crate::cli::Cli) so that every
//! buffer has a size known at compile time. The remaining options live in
//! [`Config`], which can be persisted as JSON (for instance in flash or NVS)
//! and loaded back with [`Config::from_json`].
//!
//! ```rust
//! use libcli::config::Config;
//!
//! let config = Config::from_json(r#"{"echo":true}"#).unwrap();
//! assert!(config.echo);
//! assert_eq!(config.line_width, libcli::config::DEFAULT_LINE_WIDTH);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default maximum number of registered commands.
pub const DEFAULT_NUM_CMD: usize = 15;

/// Default maximum number of tokens per line, including the command name.
pub const DEFAULT_NUM_ARG: usize = 3;

/// Default size of one argument buffer.
///
/// One slot is reserved for the terminator, so a token keeps at most
/// `DEFAULT_ARG_LEN - 1` characters.
pub const DEFAULT_ARG_LEN: usize = 8;

/// Default maximum width of a help line, in display columns.
pub const DEFAULT_LINE_WIDTH: usize = 50;

/// Size of the scratch buffer used by [`Cli::print`](crate::cli::Cli::print).
///
/// Like `vsnprintf`, one byte is reserved for the terminator, so at most
/// `PRINTF_BUF_SIZE - 1` characters are emitted per call.
pub const PRINTF_BUF_SIZE: usize = 40;

/// Runtime options of the interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Mirror every consumed character back to the transport.
    ///
    /// CR and LF are echoed as a CR LF pair.
    pub echo: bool,

    /// Maximum width of a help line, in display columns.
    pub line_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            echo: false,
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

impl Config {
    /// Parse a configuration from a JSON document.
    ///
    /// Missing fields keep their default values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json_core::from_str::<Self>(json)
            .map(|(config, _)| config)
            .map_err(|_| ConfigError::Parse)
    }

    /// Serialize the configuration as JSON into `buf`.
    ///
    /// Returns the number of bytes written.
    pub fn to_json(&self, buf: &mut [u8]) -> Result<usize, ConfigError> {
        serde_json_core::to_slice(self, buf).map_err(|_| ConfigError::BufferTooSmall)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.echo);
        assert_eq!(config.line_width, 50);
    }

    #[test]
    fn test_from_json_full() {
        let config = Config::from_json(r#"{"echo":true,"line_width":72}"#).unwrap();
        assert!(config.echo);
        assert_eq!(config.line_width, 72);
    }

    #[test]
    fn test_from_json_partial() {
        let config = Config::from_json(r#"{"line_width":30}"#).unwrap();
        assert!(!config.echo);
        assert_eq!(config.line_width, 30);
    }

    #[test]
    fn test_from_json_invalid() {
        assert_eq!(Config::from_json("{echo"), Err(ConfigError::Parse));
        assert_eq!(
            Config::from_json(r#"{"echo":"yes"}"#),
            Err(ConfigError::Parse)
        );
    }

    #[test]
    fn test_to_json() {
        let config = Config {
            echo: true,
            line_width: 64,
        };
        let mut buf = [0u8; 64];
        let len = config.to_json(&mut buf).unwrap();
        let json = core::str::from_utf8(&buf[..len]).unwrap();
        assert_eq!(json, r#"{"echo":true,"line_width":64}"#);
        assert_eq!(Config::from_json(json).unwrap(), config);
    }

    #[test]
    fn test_to_json_buffer_too_small() {
        let mut buf = [0u8; 8];
        assert_eq!(
            Config::default().to_json(&mut buf),
            Err(ConfigError::BufferTooSmall)
        );
    }
}
