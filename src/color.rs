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

//! More info:
//! - <https://stackoverflow.com/questions/4842424/list-of-ansi-color-escape-sequences>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#3-bit_and_4-bit>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#24-bit>

use std::fmt::{Display, Formatter, Result};

use strum_macros::EnumCount;

use crate::{CSI, SGR};

/// Basic 8-color foreground palette. The discriminant is the SGR code emitted
/// verbatim: `CSI{code}m`. [TextColor::None] means "unset" and emits nothing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, EnumCount)]
pub enum TextColor {
    #[default]
    None = 0,
    Black = 30,
    Red = 31,
    Green = 32,
    Yellow = 33,
    Blue = 34,
    Magenta = 35,
    Cyan = 36,
    White = 37,
}

/// Basic 8-color background palette, codes 40-47. [BackgroundColor::None]
/// means "unset" and emits nothing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, EnumCount)]
pub enum BackgroundColor {
    #[default]
    None = 0,
    Black = 40,
    Red = 41,
    Green = 42,
    Yellow = 43,
    Blue = 44,
    Magenta = 45,
    Cyan = 46,
    White = 47,
}

/// 24-bit truecolor triple. The channels are `i32`, not `u8`: no range
/// validation is performed anywhere, and out-of-range values pass through to
/// the wire as decimal text. Presence of a truecolor in a [crate::Style] is
/// tracked by a separate flag, not by a sentinel value.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RgbColor {
    pub red: i32,
    pub green: i32,
    pub blue: i32,
}

mod color_impl {
    use super::*;

    impl TextColor {
        pub fn code(self) -> i32 { self as i32 }
    }

    impl BackgroundColor {
        pub fn code(self) -> i32 { self as i32 }
    }

    impl Display for TextColor {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            match self {
                TextColor::None => Ok(()),
                _ => write!(f, "{CSI}{code}{SGR}", code = self.code()),
            }
        }
    }

    impl Display for BackgroundColor {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            match self {
                BackgroundColor::None => Ok(()),
                _ => write!(f, "{CSI}{code}{SGR}", code = self.code()),
            }
        }
    }
}

mod rgb_color_impl {
    use super::RgbColor;

    impl RgbColor {
        pub fn new(red: i32, green: i32, blue: i32) -> Self {
            Self { red, green, blue }
        }
    }

    impl From<(i32, i32, i32)> for RgbColor {
        fn from((red, green, blue): (i32, i32, i32)) -> Self {
            Self { red, green, blue }
        }
    }
}
