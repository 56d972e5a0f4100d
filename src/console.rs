/*
 *   Copyright (c) 2025 Edin Omeragic
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

use std::io::{Result, Write};

use smallvec::{SmallVec, smallvec};

use crate::Style;

/// Spaces emitted per nesting level after each line feed.
pub const INDENT_WIDTH: usize = 4;

/// Field width of the [Console::notice] / [Console::warning] /
/// [Console::error] / [Console::success] block emitters.
pub const BLOCK_WIDTH: i32 = 80;

/// A [Write] decorator that reindents output at every line break.
///
/// The console owns an inner writer and a nesting level. Every line feed
/// forwarded to the inner writer is followed by `level × 4` spaces, so
/// multi-line output stays visually nested without the caller tracking
/// indentation. All other bytes pass through unmodified.
///
/// The level starts at 0 and only changes through [Self::enter_level],
/// [Self::exit_level], and [Self::reset_level]; no output operation resets it.
/// The level is per-instance state, so multiple consoles over different
/// writers stay independent. The console is not synchronized: sharing one
/// across threads requires external locking.
///
/// # Example usage:
///
/// ```rust
/// use std::io::Write;
/// use vtansi::{Console, Style};
///
/// let mut console = Console::new(Vec::new());
/// write!(console, "parent\n")?;
/// console.enter_level();
/// write!(console, "child\n")?;
/// console.exit_level();
/// write!(console, "{}", Style::new("done").green())?;
/// # Ok::<(), std::io::Error>(())
/// ```
///
/// If the inner writer fails, the console stops forwarding for that call and
/// surfaces the error; bytes already forwarded stay written. Callers needing
/// atomicity must buffer and write as one unit themselves.
#[derive(Debug)]
pub struct Console<W: Write> {
    inner: W,
    level: usize,
}

mod level_impl {
    use super::*;

    impl<W: Write> Console<W> {
        pub fn new(inner: W) -> Self { Self { inner, level: 0 } }

        /// Deepen nesting by one level. Uncapped.
        pub fn enter_level(&mut self) { self.level += 1; }

        /// Leave one nesting level. Saturates at 0; exiting at level 0 is a
        /// no-op, not an error.
        pub fn exit_level(&mut self) {
            self.level = self.level.saturating_sub(1);
        }

        pub fn reset_level(&mut self) { self.level = 0; }

        pub fn level(&self) -> usize { self.level }

        pub fn get_ref(&self) -> &W { &self.inner }

        pub fn get_mut(&mut self) -> &mut W { &mut self.inner }

        pub fn into_inner(self) -> W { self.inner }
    }
}

mod block_impl {
    use super::*;

    impl<W: Write> Console<W> {
        /// Informational banner: white on blue, width 80.
        pub fn notice(&mut self, text: &str) -> Result<()> {
            self.block(Style::new(text).bg_blue().white().width(BLOCK_WIDTH))
        }

        /// Warning banner: blue on yellow, width 80.
        pub fn warning(&mut self, text: &str) -> Result<()> {
            self.block(Style::new(text).bg_yellow().blue().width(BLOCK_WIDTH))
        }

        /// Error banner: white on red, width 80.
        pub fn error(&mut self, text: &str) -> Result<()> {
            self.block(Style::new(text).bg_red().white().width(BLOCK_WIDTH))
        }

        /// Success banner: white on green, width 80.
        pub fn success(&mut self, text: &str) -> Result<()> {
            self.block(Style::new(text).bg_green().white().width(BLOCK_WIDTH))
        }

        /// A banner flanked by line breaks, emitted through the indenting
        /// write path so nesting applies to it too.
        fn block(&mut self, style: Style<'_>) -> Result<()> {
            self.write_all(b"\n")?;
            self.write_all(style.to_small_str().as_bytes())?;
            self.write_all(b"\n")
        }
    }
}

mod write_impl {
    use super::*;

    impl<W: Write> Write for Console<W> {
        fn write(&mut self, buf: &[u8]) -> Result<usize> {
            for chunk in buf.split_inclusive(|&byte| byte == b'\n') {
                self.inner.write_all(chunk)?;
                if chunk.ends_with(b"\n") && self.level > 0 {
                    let indent: SmallVec<[u8; 32]> =
                        smallvec![b' '; self.level * INDENT_WIDTH];
                    self.inner.write_all(&indent)?;
                }
            }
            Ok(buf.len())
        }

        fn flush(&mut self) -> Result<()> { self.inner.flush() }
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Error, ErrorKind, Result, Write};

    use pretty_assertions::assert_eq;

    use super::Console;

    fn rendered(console: Console<Vec<u8>>) -> String {
        String::from_utf8(console.into_inner()).unwrap()
    }

    #[test]
    fn level_zero_passes_bytes_through() {
        let mut console = Console::new(Vec::new());
        write!(console, "a\nb").unwrap();
        assert_eq!(rendered(console), "a\nb");
    }

    #[test]
    fn line_feed_injects_level_times_four_spaces() {
        let mut console = Console::new(Vec::new());
        console.enter_level();
        console.enter_level();
        write!(console, "a\nb").unwrap();
        assert_eq!(rendered(console), "a\n        b");
    }

    #[test]
    fn every_line_feed_is_reindented() {
        let mut console = Console::new(Vec::new());
        console.enter_level();
        write!(console, "a\nb\n").unwrap();
        assert_eq!(rendered(console), "a\n    b\n    ");
    }

    #[test]
    fn exit_level_saturates_at_zero() {
        let mut console = Console::new(Vec::new());
        console.exit_level();
        console.exit_level();
        assert_eq!(console.level(), 0);

        console.enter_level();
        console.exit_level();
        console.exit_level();
        assert_eq!(console.level(), 0);
    }

    #[test]
    fn reset_level_returns_to_zero() {
        let mut console = Console::new(Vec::new());
        console.enter_level();
        console.enter_level();
        console.enter_level();
        console.reset_level();
        assert_eq!(console.level(), 0);

        write!(console, "a\nb").unwrap();
        assert_eq!(rendered(console), "a\nb");
    }

    #[test]
    fn notice_wraps_styled_banner_in_line_breaks() {
        let mut console = Console::new(Vec::new());
        console.notice("heads up").unwrap();
        let expected = format!("\n\x1b[37m\x1b[44m{:<80}\x1b[0m\n", "heads up");
        assert_eq!(rendered(console), expected);
    }

    #[test]
    fn warning_pairs_blue_on_yellow() {
        let mut console = Console::new(Vec::new());
        console.warning("careful").unwrap();
        let expected = format!("\n\x1b[34m\x1b[43m{:<80}\x1b[0m\n", "careful");
        assert_eq!(rendered(console), expected);
    }

    #[test]
    fn error_pairs_white_on_red() {
        let mut console = Console::new(Vec::new());
        console.error("broken").unwrap();
        let expected = format!("\n\x1b[37m\x1b[41m{:<80}\x1b[0m\n", "broken");
        assert_eq!(rendered(console), expected);
    }

    #[test]
    fn success_pairs_white_on_green() {
        let mut console = Console::new(Vec::new());
        console.success("shipped").unwrap();
        let expected = format!("\n\x1b[37m\x1b[42m{:<80}\x1b[0m\n", "shipped");
        assert_eq!(rendered(console), expected);
    }

    #[test]
    fn blocks_indent_at_depth() {
        let mut console = Console::new(Vec::new());
        console.enter_level();
        console.notice("nested").unwrap();
        let expected =
            format!("\n    \x1b[37m\x1b[44m{:<80}\x1b[0m\n    ", "nested");
        assert_eq!(rendered(console), expected);
    }

    /// Accepts `limit` bytes, then refuses everything.
    struct ClosedAfter {
        limit: usize,
        written: Vec<u8>,
    }

    impl Write for ClosedAfter {
        fn write(&mut self, buf: &[u8]) -> Result<usize> {
            if self.written.len() >= self.limit {
                return Err(Error::new(ErrorKind::BrokenPipe, "closed"));
            }
            let take = buf.len().min(self.limit - self.written.len());
            self.written.extend_from_slice(&buf[..take]);
            Ok(take)
        }

        fn flush(&mut self) -> Result<()> { Ok(()) }
    }

    #[test]
    fn inner_failure_stops_forwarding_and_surfaces() {
        let sink = ClosedAfter {
            limit: 4,
            written: Vec::new(),
        };
        let mut console = Console::new(sink);
        let result = console.write_all(b"abcdefgh");
        assert!(result.is_err());
        assert_eq!(console.get_ref().written, b"abcd");
    }
}
