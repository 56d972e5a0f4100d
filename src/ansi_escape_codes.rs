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
//! - <http://www.termsys.demon.co.uk/vtansi.htm>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code>

use std::fmt::{Display, Formatter, Result};

use strum_macros::EnumCount;

/// The escape byte that starts every sequence.
pub const ESC: &str = "\x1b";
/// Control Sequence Introducer.
pub const CSI: &str = "\x1b[";
/// Final byte of an SGR (set graphics rendition) sequence.
pub const SGR: &str = "m";

/// SGR text attributes. Each renders as `CSI{code}m`, eg: [Attribute::Bold] is
/// `ESC[1m`. [Attribute::Reset] clears all colors and attributes; it is emitted
/// unconditionally at the end of every rendered [crate::Style].
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumCount)]
pub enum Attribute {
    Reset = 0,
    Bold = 1,
    Dim = 2,
    Underscore = 4,
    Blink = 5,
    Reverse = 7,
    Hidden = 8,
}

mod attribute_impl {
    use super::*;

    impl Attribute {
        /// The integer used verbatim in the escape sequence.
        pub fn code(self) -> i32 { self as i32 }
    }

    impl Display for Attribute {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            write!(f, "{CSI}{code}{SGR}", code = self.code())
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::EnumCount as _;
    use test_case::test_case;

    use super::Attribute;

    #[test]
    fn attribute_set_is_closed() {
        assert_eq!(Attribute::COUNT, 7);
    }

    #[test_case(Attribute::Reset, "\x1b[0m")]
    #[test_case(Attribute::Bold, "\x1b[1m")]
    #[test_case(Attribute::Dim, "\x1b[2m")]
    #[test_case(Attribute::Underscore, "\x1b[4m")]
    #[test_case(Attribute::Blink, "\x1b[5m")]
    #[test_case(Attribute::Reverse, "\x1b[7m")]
    #[test_case(Attribute::Hidden, "\x1b[8m")]
    fn attribute_renders_sgr_sequence(attribute: Attribute, expected: &str) {
        assert_eq!(attribute.to_string(), expected);
    }
}
