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

//! More info: <http://www.termsys.demon.co.uk/vtansi.htm> (Scrolling)

use std::fmt::{Display, Formatter, Result};

use strum_macros::EnumCount;

use crate::{CSI, ESC};

#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumCount)]
pub enum Scrolling {
    /// Enable scrolling for the entire display.
    ScrollScreen,
    /// Enable scrolling for rows `start` through `end`.
    ScrollFromPosition,
    /// Scroll the display down one line.
    ScrollDown,
    /// Scroll the display up one line.
    ScrollUp,
}

/// A scrolling command. Construct via the named factories; render via
/// [Display]. Row parameters are never validated.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Scroll {
    scrolling: Scrolling,
    start: i32,
    end: i32,
}

mod scroll_impl {
    use super::*;

    impl Scroll {
        pub fn scroll_screen() -> Self {
            Self {
                scrolling: Scrolling::ScrollScreen,
                start: 0,
                end: 0,
            }
        }

        pub fn scroll_region(start: i32, end: i32) -> Self {
            Self {
                scrolling: Scrolling::ScrollFromPosition,
                start,
                end,
            }
        }

        pub fn scroll_down() -> Self {
            Self {
                scrolling: Scrolling::ScrollDown,
                start: 0,
                end: 0,
            }
        }

        pub fn scroll_up() -> Self {
            Self {
                scrolling: Scrolling::ScrollUp,
                start: 0,
                end: 0,
            }
        }

        pub fn scroll_type(&self) -> Scrolling { self.scrolling }

        pub fn start(&self) -> i32 { self.start }

        pub fn end(&self) -> i32 { self.end }
    }

    impl Display for Scroll {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            match self.scrolling {
                Scrolling::ScrollScreen => write!(f, "{CSI}r"),
                Scrolling::ScrollFromPosition => {
                    write!(f, "{CSI}{};{}r", self.start, self.end)
                }
                Scrolling::ScrollUp => write!(f, "{ESC}M"),
                Scrolling::ScrollDown => write!(f, "{ESC}D"),
            }
        }
    }
}
