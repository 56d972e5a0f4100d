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

//! # vtansi
//!
//! Compose ANSI/VT100 styled text and control sequences and write them to any
//! byte sink. Everything is emitted raw, with no terminal capability
//! negotiation: callers on terminals that do not speak ANSI get the escape
//! bytes verbatim.
//!
//! The crate has three parts:
//!
//! 1. [Style] - a fluent builder for one styled run of text: basic 8-color or
//!    24-bit truecolor foreground/background, bold, field width and alignment.
//!    Renders via [std::fmt::Display], always terminated by a reset.
//! 2. [Console] - a [std::io::Write] decorator that reindents after every
//!    line feed by a caller-controlled nesting level, with severity banner
//!    helpers ([Console::notice], [Console::warning], [Console::error],
//!    [Console::success]).
//! 3. The control-sequence catalog - [Cursor], [Scroll], [EraseText],
//!    [TabControl], [TerminalMode] - pure value objects rendering to literal
//!    escape sequences, plus the [Device] status stub.
//!
//! ## Example usage:
//!
//! ```rust
//! use std::io::Write;
//! use vtansi::{Console, Cursor, EraseText, Style};
//!
//! fn main() -> std::io::Result<()> {
//!     let mut console = Console::new(std::io::stdout());
//!
//!     write!(console, "{}", Style::new("deploy").bold().green())?;
//!     console.enter_level();
//!     write!(console, "\n{}", Style::new("step 1").width(20).center())?;
//!     console.exit_level();
//!
//!     console.success("[OK] deployed")?;
//!
//!     write!(console, "{}{}", EraseText::EraseLine, Cursor::up(1))?;
//!     Ok(())
//! }
//! ```
//!
//! More info:
//! - <http://www.termsys.demon.co.uk/vtansi.htm>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code>

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![warn(clippy::all)]
#![warn(clippy::unwrap_in_result)]
#![warn(rust_2018_idioms)]

pub mod ansi_escape_codes;
pub mod color;
pub mod console;
pub mod control;
pub mod cursor;
pub mod device_status;
pub mod scroll;
pub mod style;

pub use ansi_escape_codes::*;
pub use color::*;
pub use console::*;
pub use control::*;
pub use cursor::*;
pub use device_status::*;
pub use scroll::*;
pub use style::*;
