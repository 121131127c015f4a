//! # libcli - embedded command-line interpreter
//!
//! A non-blocking command-line interpreter for serial consoles on
//! microcontrollers. It consumes one character per call, splits lines into a
//! command name and arguments held in fixed-size buffers, and dispatches to
//! a registered handler by name. This library is designed for embedded
//! systems and supports `no_std` environments.
//!
//! ## Features
//!
//! - **Character-driven**: a five-state tokenizer fed one character at a time,
//!   never blocking and never buffering a whole line
//! - **Fixed memory**: command table, argument count and argument length are
//!   compile-time capacities; oversized input is truncated, never reallocated
//! - **Aliases**: several names bound to the same handler share one help row
//! - **Help screen**: aligned, word-wrapped descriptions in fixed-width rows
//! - **Transport-agnostic**: any UART or USB endpoint implementing [`io::Serial`]
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! libcli = "0.1.0"
//! ```
//!
//! ### Polling loop
//!
//! ```rust,no_run
//! use libcli::cli::Cli;
//! use libcli::config::Config;
//! # use libcli::io::Serial;
//! # struct Uart;
//! # impl Serial for Uart {
//! #     type Error = ();
//! #     fn read(&mut self) -> Result<Option<u8>, ()> { Ok(None) }
//! #     fn write(&mut self, _byte: u8) -> Result<(), ()> { Ok(()) }
//! # }
//!
//! fn led(argc: usize, argv: &[&str]) -> i32 {
//!     if argc > 1 && argv[1] == "on" { 0 } else { 1 }
//! }
//!
//! let mut cli: Cli<Uart> = Cli::with_serial(Uart, Config { echo: true, ..Config::default() });
//! cli.register("led", "Switch the status LED: led on|off", led).unwrap();
//! cli.register("l", "Switch the status LED: led on|off", led).unwrap();
//!
//! loop {
//!     let _ = cli.poll();
//!     // other cooperative tasks
//! }
//! ```
//!
//! ## Optional Features
//!
//! - `std`: Enable standard library support (default: disabled)
//! - `defmt`: Enable defmt logging support for embedded debugging

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

/// The interpreter: transport, command table, parser and help wired together.
pub mod cli;

/// Capacities and runtime options.
pub mod config;

/// Error types shared by the interpreter, the command table and the configuration.
pub mod error;

/// Help screen rendering with alias merging.
pub mod help;

/// Character transport abstraction and output helpers.
pub mod io;

/// Character-at-a-time tokenizer state machine.
pub mod parser;

/// Fixed-capacity command table with alias detection.
pub mod registry;

/// Word-wrapped text blocks.
pub mod text;

pub use cli::{Cli, Outcome};
pub use config::Config;
pub use error::Error;
pub use io::Serial;
pub use registry::{Command, CommandFn, EXIT_FAILURE, EXIT_SUCCESS};
