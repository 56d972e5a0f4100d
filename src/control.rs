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

//! Erase, tab-stop, and terminal-mode sequences. Pure data-to-string
//! mappings; rendering cannot fail.
//!
//! More info: <http://www.termsys.demon.co.uk/vtansi.htm>

use std::fmt::{Display, Formatter, Result};

use strum_macros::EnumCount;

use crate::{CSI, ESC};

/// Erase part of the current line, or part of the screen relative to the
/// cursor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumCount)]
pub enum EraseText {
    EraseEndOfLine,
    EraseStartOfLine,
    EraseLine,
    EraseDown,
    EraseUp,
    EraseScreen,
}

/// Tab stop management.
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumCount)]
pub enum TabControl {
    SetTab,
    ClearTab,
    ClearAllTab,
}

/// Whole-terminal setup sequences.
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumCount)]
pub enum TerminalMode {
    ResetDevice,
    EnableLineWrap,
    DisableLineWrap,
}

mod control_impl {
    use super::*;

    impl Display for EraseText {
        #[rustfmt::skip]
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            match self {
                EraseText::EraseEndOfLine   => write!(f, "{CSI}K"),
                EraseText::EraseStartOfLine => write!(f, "{CSI}1K"),
                EraseText::EraseLine        => write!(f, "{CSI}2K"),
                EraseText::EraseDown        => write!(f, "{CSI}J"),
                EraseText::EraseUp          => write!(f, "{CSI}1J"),
                EraseText::EraseScreen      => write!(f, "{CSI}2J"),
            }
        }
    }

    impl Display for TabControl {
        #[rustfmt::skip]
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            match self {
                TabControl::SetTab      => write!(f, "{ESC}H"),
                TabControl::ClearTab    => write!(f, "{CSI}g"),
                TabControl::ClearAllTab => write!(f, "{CSI}3g"),
            }
        }
    }

    impl Display for TerminalMode {
        #[rustfmt::skip]
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            match self {
                TerminalMode::ResetDevice     => write!(f, "{ESC}c"),
                TerminalMode::EnableLineWrap  => write!(f, "{CSI}7h"),
                TerminalMode::DisableLineWrap => write!(f, "{CSI}7l"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::{EraseText, TabControl, TerminalMode};

    #[test_case(EraseText::EraseEndOfLine, "\x1b[K"; "end of line")]
    #[test_case(EraseText::EraseStartOfLine, "\x1b[1K"; "start of line")]
    #[test_case(EraseText::EraseLine, "\x1b[2K"; "whole line")]
    #[test_case(EraseText::EraseDown, "\x1b[J"; "down")]
    #[test_case(EraseText::EraseUp, "\x1b[1J"; "up")]
    #[test_case(EraseText::EraseScreen, "\x1b[2J"; "screen")]
    fn erase_wire_format(erase: EraseText, expected: &str) {
        assert_eq!(erase.to_string(), expected);
    }

    #[test_case(TabControl::SetTab, "\x1bH"; "set")]
    #[test_case(TabControl::ClearTab, "\x1b[g"; "clear")]
    #[test_case(TabControl::ClearAllTab, "\x1b[3g"; "clear all")]
    fn tab_wire_format(tab: TabControl, expected: &str) {
        assert_eq!(tab.to_string(), expected);
    }

    #[test_case(TerminalMode::ResetDevice, "\x1bc"; "reset")]
    #[test_case(TerminalMode::EnableLineWrap, "\x1b[7h"; "wrap on")]
    #[test_case(TerminalMode::DisableLineWrap, "\x1b[7l"; "wrap off")]
    fn terminal_mode_wire_format(mode: TerminalMode, expected: &str) {
        assert_eq!(mode.to_string(), expected);
    }
}
