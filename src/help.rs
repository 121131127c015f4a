//! Help screen rendering.
//!
//! One row per distinct handler, aliases in parentheses after the primary
//! name, descriptions aligned on a shared column and word-wrapped:
//!
//! ```text
//!
//! Commands:
//!   led         : Toggle the status LED
//!   reset (rst) : Reboot the device
//!   h           : Help
//!
//! ```

use core::fmt::{self, Write};

use crate::registry::{Command, Registry};
use crate::text::{pad, write_block};

/// Token that always shows the help screen instead of a registry lookup.
pub const HELP_TOKEN: &str = "h";

/// Description of the built-in help row.
pub const HELP_DESCRIPTION: &str = "Help";

/// Columns between the end of the longest row name and its description.
const ROW_GAP: usize = 3;

/// Callback writing extra text above the command list.
pub type HelpFn = fn(&mut dyn Write) -> fmt::Result;

fn row_len<const N: usize>(registry: &Registry<N>, primary: &Command) -> usize {
    let aliases = registry.aliases(primary).fold((0, 0), |(count, len), alias| {
        (count + 1, len + 2 + alias.name.len())
    });
    let parens = if aliases.0 > 0 { 1 } else { 0 };
    2 + primary.name.len() + aliases.1 + parens
}

/// Column at which every description starts.
///
/// Wide enough for the longest registered name and for the longest row
/// once its aliases are appended. An empty table has column 0 and the
/// `h` row is then written without padding.
pub fn description_column<const N: usize>(registry: &Registry<N>) -> usize {
    registry
        .primaries()
        .map(|primary| row_len(registry, primary) + ROW_GAP)
        .fold(registry.width(), usize::max)
}

fn write_description<W: Write>(
    w: &mut W,
    len: usize,
    column: usize,
    description: &str,
    line_width: usize,
) -> fmt::Result {
    pad(w, column.saturating_sub(len + 2))?;
    w.write_str(": ")?;
    write_block(w, description, line_width, column)
}

/// Write the full help screen.
///
/// `callback`, when given, writes free-form text between the leading blank
/// line and the `Commands:` header.
pub fn write_help<W: Write, const N: usize>(
    w: &mut W,
    registry: &Registry<N>,
    line_width: usize,
    callback: Option<HelpFn>,
) -> fmt::Result {
    let column = description_column(registry);

    w.write_str("\r\n")?;
    if let Some(callback) = callback {
        callback(w)?;
        w.write_str("\r\n")?;
    }
    w.write_str("Commands:\r\n")?;

    for primary in registry.primaries() {
        w.write_str("  ")?;
        w.write_str(primary.name)?;
        let mut len = 2 + primary.name.len();

        let mut has_aliases = false;
        for alias in registry.aliases(primary) {
            w.write_str(if has_aliases { ", " } else { " (" })?;
            w.write_str(alias.name)?;
            len += 2 + alias.name.len();
            has_aliases = true;
        }
        if has_aliases {
            w.write_char(')')?;
            len += 1;
        }

        write_description(w, len, column, primary.description, line_width)?;
    }

    w.write_str("  ")?;
    w.write_str(HELP_TOKEN)?;
    write_description(w, 2 + HELP_TOKEN.len(), column, HELP_DESCRIPTION, line_width)?;
    w.write_str("\r\n")
}
