//! Fixed-capacity command table.
//!
//! Commands keep their registration order. Two entries bound to the same
//! handler are aliases of each other: the first one registered is the
//! primary entry shown in help, the later ones are listed next to it.

use heapless::Vec;

use crate::error::RegistryError;
use crate::help::HELP_TOKEN;
use crate::parser::is_token_char;

/// Exit code of a successful command.
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code of a failed command.
pub const EXIT_FAILURE: i32 = 1;

/// Columns added to the longest name to get the description column: two
/// for the row indent and three for the `" : "` gap.
pub const NAME_MARGIN: usize = 5;

/// Function signature for command handlers.
///
/// `argv[0]` is the command name. `argv` always holds one slot per
/// possible argument; slots at or beyond `argc` are empty strings.
///
/// ```rust
/// use libcli::registry::{CommandFn, EXIT_FAILURE, EXIT_SUCCESS};
///
/// let speed: CommandFn = |argc, argv| {
///     if argc < 2 || argv[1].parse::<u8>().is_err() {
///         return EXIT_FAILURE;
///     }
///     EXIT_SUCCESS
/// };
/// assert_eq!(speed(2, &["wpm", "25", ""]), EXIT_SUCCESS);
/// ```
pub type CommandFn = fn(argc: usize, argv: &[&str]) -> i32;

/// A registered command.
#[derive(Debug, Clone, Copy)]
pub struct Command {
    /// The command name as typed by the user. Matching is case-sensitive.
    pub name: &'static str,

    /// Free-form description shown in help output. It is word-wrapped,
    /// and may contain line breaks of its own.
    pub description: &'static str,

    /// The function run when the command is entered.
    pub handler: CommandFn,
}

impl Command {
    /// Whether `self` and `other` run the same handler.
    pub fn same_handler(&self, other: &Command) -> bool {
        core::ptr::fn_addr_eq(self.handler, other.handler)
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name != HELP_TOKEN && name.bytes().all(is_token_char)
}

/// Insertion-ordered table of up to `N` commands.
#[derive(Debug)]
pub struct Registry<const N: usize> {
    commands: Vec<Command, N>,
    width: usize,
}

impl<const N: usize> Default for Registry<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Registry<N> {
    /// Create an empty table.
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
            width: 0,
        }
    }

    /// Append a command.
    ///
    /// Fails without touching the table when it is full or when the name
    /// could never be typed as a token. Duplicate names are accepted;
    /// [`find`](Self::find) returns the first one.
    pub fn register(&mut self, command: Command) -> Result<(), RegistryError> {
        if !is_valid_name(command.name) {
            return Err(RegistryError::InvalidName);
        }

        self.commands
            .push(command)
            .map_err(|_| RegistryError::CapacityExceeded)?;

        self.width = self.width.max(command.name.len() + NAME_MARGIN);
        Ok(())
    }

    /// Look up a command by exact name.
    pub fn find(&self, name: &str) -> Option<&Command> {
        self.commands.iter().find(|cmd| cmd.name == name)
    }

    /// Sort the table by name, ascending.
    ///
    /// Exchange sort: the table is tiny and this runs at most once, on demand.
    /// Entries with equal names keep their relative order.
    pub fn sort_alphabetically(&mut self) {
        let mut sorted = false;
        while !sorted {
            sorted = true;
            for i in 1..self.commands.len() {
                if self.commands[i - 1].name > self.commands[i].name {
                    self.commands.swap(i - 1, i);
                    sorted = false;
                }
            }
        }
    }

    /// Description column needed by the longest registered name.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether the entry at `index` shares its handler with an earlier entry.
    pub fn is_alias(&self, index: usize) -> bool {
        match self.commands.get(index) {
            Some(cmd) => self.commands[..index].iter().any(|c| c.same_handler(cmd)),
            None => false,
        }
    }

    /// Entries that are not aliases of an earlier entry, in table order.
    pub fn primaries(&self) -> impl Iterator<Item = &Command> {
        self.commands
            .iter()
            .enumerate()
            .filter(|&(i, _)| !self.is_alias(i))
            .map(|(_, cmd)| cmd)
    }

    /// Other names bound to the same handler as `primary`, in table order.
    pub fn aliases<'a>(&'a self, primary: &'a Command) -> impl Iterator<Item = &'a Command> {
        self.commands
            .iter()
            .filter(move |cmd| cmd.same_handler(primary) && cmd.name != primary.name)
    }

    /// All entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter()
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether no command is registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Maximum number of commands.
    pub const fn capacity(&self) -> usize {
        N
    }
}
