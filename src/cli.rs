//! Non-blocking command-line interpreter.
//!
//! [`Cli`] ties a [`Serial`] transport, a command [`Registry`], the line
//! [`Parser`] and the help screen together. The host calls [`Cli::poll`]
//! once per iteration of its main loop; each call consumes at most one
//! character and never blocks.
//!
//! # Usage
//!
//! ```rust
//! use std::collections::VecDeque;
//!
//! use libcli::cli::{Cli, Outcome};
//! use libcli::config::Config;
//! use libcli::io::Serial;
//! use libcli::registry::EXIT_SUCCESS;
//!
//! #[derive(Default)]
//! struct Uart {
//!     rx: VecDeque<u8>,
//!     tx: Vec<u8>,
//! }
//!
//! impl Serial for Uart {
//!     type Error = ();
//!     fn read(&mut self) -> Result<Option<u8>, ()> { Ok(self.rx.pop_front()) }
//!     fn write(&mut self, byte: u8) -> Result<(), ()> { self.tx.push(byte); Ok(()) }
//! }
//!
//! fn wpm(argc: usize, argv: &[&str]) -> i32 {
//!     if argc == 2 && argv[1] == "25" { EXIT_SUCCESS } else { 1 }
//! }
//!
//! let mut cli: Cli<Uart> = Cli::with_serial(Uart::default(), Config::default());
//! cli.register("wpm", "Set the keyer speed", wpm).unwrap();
//!
//! cli.serial_mut().unwrap().rx.extend(b"wpm 25\r");
//! let mut last = Outcome::NoAction;
//! for _ in 0..7 {
//!     last = cli.poll().unwrap();
//! }
//! assert_eq!(last, Outcome::Dispatched(EXIT_SUCCESS));
//! ```

use core::fmt::{self, Write};

use heapless::String;

use crate::config::{
    Config, DEFAULT_ARG_LEN, DEFAULT_NUM_ARG, DEFAULT_NUM_CMD, PRINTF_BUF_SIZE,
};
use crate::error::{Error, RegistryError};
use crate::help::{HELP_TOKEN, HelpFn, write_help};
use crate::io::{FmtBuffer, Serial, SerialWriter};
use crate::parser::{Parser, Step};
use crate::registry::{Command, CommandFn, EXIT_SUCCESS, Registry};

/// Result of feeding one character to the interpreter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<const ARG_LEN: usize = DEFAULT_ARG_LEN> {
    /// No line was completed.
    NoAction,
    /// A line was completed and handled; carries the handler's exit code,
    /// or [`EXIT_SUCCESS`] for the built-in help.
    Dispatched(i32),
    /// A line was completed but its first token names no command.
    UnknownCommand(String<ARG_LEN>),
}

#[cfg(feature = "defmt")]
impl<const ARG_LEN: usize> defmt::Format for Outcome<ARG_LEN> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Outcome::NoAction => defmt::write!(f, "NoAction"),
            Outcome::Dispatched(code) => defmt::write!(f, "Dispatched({=i32})", code),
            Outcome::UnknownCommand(name) => {
                defmt::write!(f, "UnknownCommand({=str})", name.as_str())
            }
        }
    }
}

/// Command-line interpreter over a serial transport.
///
/// Capacities are fixed at compile time:
///
/// * `NUM_CMD` - maximum number of registered commands
/// * `NUM_ARG` - maximum number of tokens per line, command name included
/// * `ARG_LEN` - bytes per token buffer, one of which is the terminator
///
/// An interpreter created with [`new`](Self::new) has no transport yet and
/// rejects every operation with [`Error::NotInitialized`] until
/// [`init`](Self::init) is called.
#[derive(Debug)]
pub struct Cli<
    S,
    const NUM_CMD: usize = DEFAULT_NUM_CMD,
    const NUM_ARG: usize = DEFAULT_NUM_ARG,
    const ARG_LEN: usize = DEFAULT_ARG_LEN,
> {
    serial: Option<S>,
    config: Config,
    help_callback: Option<HelpFn>,
    registry: Registry<NUM_CMD>,
    parser: Parser<NUM_ARG, ARG_LEN>,
}

impl<S, const NUM_CMD: usize, const NUM_ARG: usize, const ARG_LEN: usize> Default
    for Cli<S, NUM_CMD, NUM_ARG, ARG_LEN>
where
    S: Serial,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S, const NUM_CMD: usize, const NUM_ARG: usize, const ARG_LEN: usize>
    Cli<S, NUM_CMD, NUM_ARG, ARG_LEN>
where
    S: Serial,
{
    /// Create an interpreter without a transport.
    pub const fn new() -> Self {
        Self {
            serial: None,
            config: Config {
                echo: false,
                line_width: crate::config::DEFAULT_LINE_WIDTH,
            },
            help_callback: None,
            registry: Registry::new(),
            parser: Parser::new(),
        }
    }

    /// Create an interpreter and attach `serial` right away.
    pub fn with_serial(serial: S, config: Config) -> Self {
        let mut cli = Self::new();
        cli.init(serial, config, None);
        cli
    }

    /// Attach the transport and apply `config`.
    ///
    /// `help_callback` writes extra text at the top of the help screen.
    /// Registered commands are kept; the line being parsed is discarded.
    pub fn init(&mut self, serial: S, config: Config, help_callback: Option<HelpFn>) {
        self.serial = Some(serial);
        self.config = config;
        self.help_callback = help_callback;
        self.parser.reset();
    }

    /// Whether [`init`](Self::init) has been called.
    pub fn is_initialized(&self) -> bool {
        self.serial.is_some()
    }

    /// The attached transport.
    pub fn serial(&self) -> Option<&S> {
        self.serial.as_ref()
    }

    /// The attached transport, mutably.
    pub fn serial_mut(&mut self) -> Option<&mut S> {
        self.serial.as_mut()
    }

    /// Detach and return the transport, leaving the interpreter uninitialized.
    pub fn release(&mut self) -> Option<S> {
        self.serial.take()
    }

    /// Active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Enable or disable echo.
    pub fn set_echo(&mut self, enabled: bool) {
        self.config.echo = enabled;
    }

    /// The command table.
    pub fn registry(&self) -> &Registry<NUM_CMD> {
        &self.registry
    }

    /// The line parser.
    pub fn parser(&self) -> &Parser<NUM_ARG, ARG_LEN> {
        &self.parser
    }

    fn serial_or_err(&mut self) -> Result<&mut S, Error<S::Error>> {
        self.serial.as_mut().ok_or(Error::NotInitialized)
    }

    /// Register a command.
    ///
    /// Names longer than `ARG_LEN - 1` characters are rejected since the
    /// parser could never produce them. When the table is full, `"OVF!"` is
    /// written to the transport and [`Error::CapacityExceeded`] returned;
    /// the table is left as it was.
    pub fn register(
        &mut self,
        name: &'static str,
        description: &'static str,
        handler: CommandFn,
    ) -> Result<(), Error<S::Error>> {
        self.register_command(Command {
            name,
            description,
            handler,
        })
    }

    /// Register a prepared [`Command`].
    pub fn register_command(&mut self, command: Command) -> Result<(), Error<S::Error>> {
        let serial = self.serial.as_mut().ok_or(Error::NotInitialized)?;

        if command.name.len() >= ARG_LEN {
            return Err(Error::InvalidName);
        }

        match self.registry.register(command) {
            Ok(()) => Ok(()),
            Err(RegistryError::CapacityExceeded) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("command table full, '{=str}' not registered", command.name);

                serial.write_str("OVF!\r\n").map_err(Error::Serial)?;
                Err(Error::CapacityExceeded)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Register several commands, stopping at the first failure.
    ///
    /// Commands before the failing one stay registered.
    pub fn register_commands(&mut self, commands: &[Command]) -> Result<(), Error<S::Error>> {
        for command in commands {
            self.register_command(*command)?;
        }
        Ok(())
    }

    /// Sort the command table alphabetically.
    ///
    /// This also decides which alias of a handler is shown first in help.
    pub fn sort_commands(&mut self) {
        self.registry.sort_alphabetically();
    }

    /// Read one character from the transport, if any, and process it.
    ///
    /// Returns [`Outcome::NoAction`] without touching any state when no
    /// character is pending.
    pub fn poll(&mut self) -> Result<Outcome<ARG_LEN>, Error<S::Error>> {
        match self.getchar()? {
            Some(c) => self.process_char(c),
            None => Ok(Outcome::NoAction),
        }
    }

    /// Process one character.
    ///
    /// The character is echoed first when echo is enabled. A line ending
    /// that completes a non-empty line dispatches it immediately.
    ///
    /// A failed echo write does not stop the character from being parsed.
    /// Its error is returned only when no line was dispatched.
    pub fn process_char(&mut self, c: u8) -> Result<Outcome<ARG_LEN>, Error<S::Error>> {
        let echo = self.config.echo;
        let serial = self.serial_or_err()?;

        let echoed = if echo {
            match c {
                b'\r' | b'\n' => serial.write_str("\r\n"),
                _ => serial.write(c),
            }
        } else {
            Ok(())
        };

        match self.parser.feed(c) {
            Step::Pending => echoed.map(|()| Outcome::NoAction).map_err(Error::Serial),
            Step::Complete => {
                let outcome = self.dispatch();
                self.parser.finish();
                outcome
            }
        }
    }

    fn dispatch(&mut self) -> Result<Outcome<ARG_LEN>, Error<S::Error>> {
        let mut name = String::<ARG_LEN>::new();
        // tokens hold at most ARG_LEN - 1 characters
        let _ = name.push_str(self.parser.arg(0));

        if name.as_str() == HELP_TOKEN {
            #[cfg(feature = "defmt")]
            defmt::debug!("dispatch help");

            self.show_help()?;
            return Ok(Outcome::Dispatched(EXIT_SUCCESS));
        }

        if let Some(handler) = self.registry.find(&name).map(|cmd| cmd.handler) {
            let argc = self.parser.argc();

            #[cfg(feature = "defmt")]
            defmt::debug!("dispatch '{=str}' argc={=usize}", name.as_str(), argc);

            let argv = self.parser.argv();
            return Ok(Outcome::Dispatched(handler(argc, &argv)));
        }

        #[cfg(feature = "defmt")]
        defmt::warn!("unknown command '{=str}'", name.as_str());

        self.print(format_args!("Unknown '{}'\r\n\r\n", name))?;
        Ok(Outcome::UnknownCommand(name))
    }

    /// Write the help screen to the transport.
    pub fn show_help(&mut self) -> Result<(), Error<S::Error>> {
        let serial = self.serial.as_mut().ok_or(Error::NotInitialized)?;

        #[cfg(feature = "defmt")]
        defmt::trace!("help: {=usize} commands", self.registry.len());

        let mut writer = SerialWriter::new(serial);
        let result = write_help(
            &mut writer,
            &self.registry,
            self.config.line_width,
            self.help_callback,
        );
        writer.finish(result).map_err(|e| e.map_or(Error::Format, Error::Serial))
    }

    /// Write formatted text, truncated to `PRINTF_BUF_SIZE - 1` characters.
    ///
    /// See also the [`cli_printf!`](crate::cli_printf) macro.
    pub fn print(&mut self, args: fmt::Arguments<'_>) -> Result<(), Error<S::Error>> {
        let serial = self.serial_or_err()?;
        let mut buf = FmtBuffer::<{ PRINTF_BUF_SIZE - 1 }>::new();
        buf.write_fmt(args).map_err(|_| Error::Format)?;
        serial.write_str(buf.as_str()).map_err(Error::Serial)
    }

    /// Write `s` followed by CR LF.
    pub fn puts(&mut self, s: &str) -> Result<(), Error<S::Error>> {
        let serial = self.serial_or_err()?;
        serial.write_str(s).map_err(Error::Serial)?;
        serial.write_str("\r\n").map_err(Error::Serial)
    }

    /// Write one character.
    pub fn putchar(&mut self, c: u8) -> Result<(), Error<S::Error>> {
        self.serial_or_err()?.write(c).map_err(Error::Serial)
    }

    /// Read one pending character without parsing it.
    pub fn getchar(&mut self) -> Result<Option<u8>, Error<S::Error>> {
        self.serial_or_err()?.read().map_err(Error::Serial)
    }
}

/// Formatted output through [`Cli::print`].
///
/// ```rust,ignore
/// cli_printf!(cli, "wpm={}\r\n", wpm)?;
/// ```
#[macro_export]
macro_rules! cli_printf {
    ($cli:expr, $($arg:tt)*) => {
        $cli.print(::core::format_args!($($arg)*))
    };
}
