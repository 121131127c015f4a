//! Character-at-a-time line tokenizer.
//!
//! The parser never sees a whole line. Each call to [`Parser::feed`] takes a
//! single character and advances a five-state machine:
//!
//! ```text
//! state              blank        CR/LF        token char
//! Start              ── reset, then handled as SkipLeadingSpace ──
//! SkipLeadingSpace   stay         stay         store  -> CaptureToken
//! CaptureToken       close token  close token  store (or close when full)
//!                    -> SkipTrailingSpace      -> Evaluate
//! SkipTrailingSpace  stay         -> Evaluate  store  -> CaptureToken
//!                                              (dropped when slots run out)
//! Evaluate           ── reset, then handled as SkipLeadingSpace ──
//! ```
//!
//! Tokens live in `NUM_ARG` fixed buffers of `ARG_LEN` bytes each, one byte
//! of which is reserved for the terminator. A token that fills its buffer is
//! closed as if a blank had been seen, and the character that overflowed it
//! is dropped. Once all `NUM_ARG` slots are used, further tokens are dropped
//! character by character until the line ends.

/// Tokenizer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// A new line begins; buffers are cleared on the next character.
    Start,
    /// Blanks before the first token.
    SkipLeadingSpace,
    /// Inside a token.
    CaptureToken,
    /// Blanks after a token.
    SkipTrailingSpace,
    /// A complete line is ready to be dispatched.
    Evaluate,
}

/// What a fed character did to the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The line is still incomplete (or empty).
    Pending,
    /// A line ending completed a non-empty line.
    Complete,
}

fn is_blank(c: u8) -> bool {
    c == b' ' || c == b'\t'
}

fn is_line_end(c: u8) -> bool {
    c == b'\r' || c == b'\n'
}

/// Bytes that can be part of a token: ASCII above the space, DEL included.
pub(crate) fn is_token_char(c: u8) -> bool {
    c > b' ' && c.is_ascii()
}

/// Line tokenizer with `NUM_ARG` argument slots of `ARG_LEN` bytes.
#[derive(Debug, Clone)]
pub struct Parser<const NUM_ARG: usize, const ARG_LEN: usize> {
    state: State,
    buf: [[u8; ARG_LEN]; NUM_ARG],
    lens: [usize; NUM_ARG],
    argc: usize,
    idx: usize,
}

impl<const NUM_ARG: usize, const ARG_LEN: usize> Default for Parser<NUM_ARG, ARG_LEN> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const NUM_ARG: usize, const ARG_LEN: usize> Parser<NUM_ARG, ARG_LEN> {
    /// Create a parser waiting for a new line.
    pub const fn new() -> Self {
        const {
            assert!(NUM_ARG > 0, "at least one argument slot is required");
            assert!(ARG_LEN > 1, "argument buffers need room for a character and a terminator");
        }

        Self {
            state: State::Start,
            buf: [[0; ARG_LEN]; NUM_ARG],
            lens: [0; NUM_ARG],
            argc: 0,
            idx: 0,
        }
    }

    /// Current state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Number of tokens captured on the current line.
    pub fn argc(&self) -> usize {
        self.argc
    }

    /// Token at `index`, or `""` when that slot is unused.
    pub fn arg(&self, index: usize) -> &str {
        match (self.buf.get(index), self.lens.get(index)) {
            // only ASCII is ever stored
            (Some(buf), Some(&len)) => core::str::from_utf8(&buf[..len]).unwrap_or(""),
            _ => "",
        }
    }

    /// All argument slots; slots at or beyond [`argc`](Self::argc) are `""`.
    pub fn argv(&self) -> [&str; NUM_ARG] {
        core::array::from_fn(|i| self.arg(i))
    }

    /// Clear every buffer and wait for a new line.
    pub fn reset(&mut self) {
        for buf in self.buf.iter_mut() {
            buf.fill(0);
        }
        self.lens.fill(0);
        self.argc = 0;
        self.idx = 0;
        self.state = State::Start;
    }

    /// Return to [`State::Start`] after a completed line has been handled.
    ///
    /// Buffers keep their contents until the next character arrives.
    pub fn finish(&mut self) {
        self.state = State::Start;
    }

    fn push(&mut self, c: u8) {
        self.buf[self.argc][self.idx] = c;
        self.idx += 1;
    }

    fn terminate(&mut self) {
        self.buf[self.argc][self.idx] = 0;
        self.lens[self.argc] = self.idx;
        self.argc += 1;
        self.idx = 0;
    }

    /// Feed one character.
    ///
    /// Returns [`Step::Complete`] when `c` ended a line holding at least one
    /// token; the parser then stays in [`State::Evaluate`] until
    /// [`finish`](Self::finish) is called or the next character arrives.
    pub fn feed(&mut self, c: u8) -> Step {
        if matches!(self.state, State::Start | State::Evaluate) {
            self.reset();
            self.state = State::SkipLeadingSpace;
        }

        match self.state {
            State::SkipLeadingSpace => {
                if is_token_char(c) {
                    self.push(c);
                    self.state = State::CaptureToken;
                }
            }
            State::CaptureToken => {
                if is_line_end(c) {
                    self.terminate();
                    self.state = State::Evaluate;
                } else if is_blank(c) || self.idx >= ARG_LEN - 1 {
                    self.terminate();
                    self.state = State::SkipTrailingSpace;
                } else if is_token_char(c) {
                    self.push(c);
                }
            }
            State::SkipTrailingSpace => {
                if is_line_end(c) {
                    self.state = State::Evaluate;
                } else if is_token_char(c) && self.argc < NUM_ARG {
                    self.push(c);
                    self.state = State::CaptureToken;
                }
            }
            State::Start | State::Evaluate => {}
        }

        if self.state == State::Evaluate {
            Step::Complete
        } else {
            Step::Pending
        }
    }
}

#[cfg(test)]
mod tests;
