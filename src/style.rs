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

use std::fmt::{Display, Formatter, Result};

use smallstr::SmallString;

use crate::{Attribute, BackgroundColor, CSI, RgbColor, SGR, TextColor};

/// Horizontal placement of the text payload inside a field of
/// [Style::width] columns. Has no effect while the width is unset.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Fluent builder for a single styled run of text.
///
/// Every configuration method consumes and returns the builder, so calls chain
/// without intermediate bindings. Configuration never validates and never
/// fails; whatever is set only affects the rendered output. The text payload
/// is borrowed, not owned, so a `Style` cannot outlive the string it styles.
///
/// Rendering happens through [Display] (or [Self::to_small_str]) and always
/// ends with [Attribute::Reset], whether or not any style was set. Rendering
/// never mutates the builder; the same `Style` renders to identical bytes
/// every time.
///
/// # Example usage:
///
/// ```rust
/// use vtansi::Style;
///
/// let styled = Style::new("Hello").red().bg_white().bold().width(10).center();
/// println!("{styled}");
/// assert_eq!(
///     styled.to_string(),
///     "\x1b[31m\x1b[47m\x1b[1m  Hello\x1b[0m"
/// );
///
/// // Builders are freely reusable: replace the payload, render again.
/// let label = Style::new("one").bg_blue().white();
/// println!("{}", label);
/// println!("{}", label.text("two"));
/// ```
///
/// Basic and truecolor may both be set; both are emitted, basic first. The
/// truecolor escape appears later in the sequence, so that is the one real
/// terminals honor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Style<'a> {
    text_color: TextColor,
    bg_color: BackgroundColor,
    true_text_color: RgbColor,
    true_bg_color: RgbColor,
    has_true_text_color: bool,
    has_true_bg_color: bool,
    bold: bool,
    width: i32,
    alignment: Alignment,
    text: &'a str,
}

pub mod sizing {
    /// Inline capacity of the buffer returned by [super::Style::to_small_str].
    /// Longer renders (eg: a width-80 console block) spill to the heap.
    pub const DEFAULT_STRING_STORAGE_SIZE: usize = 64;
}

mod style_builder_impl {
    use super::*;

    impl Default for Style<'_> {
        fn default() -> Self { Style::new("") }
    }

    impl<'a> Style<'a> {
        pub fn new(text: &'a str) -> Self {
            Self {
                text_color: TextColor::None,
                bg_color: BackgroundColor::None,
                true_text_color: RgbColor::default(),
                true_bg_color: RgbColor::default(),
                has_true_text_color: false,
                has_true_bg_color: false,
                bold: false,
                width: -1,
                alignment: Alignment::Left,
                text,
            }
        }

        pub fn black(self) -> Self { self.fg(TextColor::Black) }
        pub fn red(self) -> Self { self.fg(TextColor::Red) }
        pub fn green(self) -> Self { self.fg(TextColor::Green) }
        pub fn yellow(self) -> Self { self.fg(TextColor::Yellow) }
        pub fn blue(self) -> Self { self.fg(TextColor::Blue) }
        pub fn magenta(self) -> Self { self.fg(TextColor::Magenta) }
        pub fn cyan(self) -> Self { self.fg(TextColor::Cyan) }
        pub fn white(self) -> Self { self.fg(TextColor::White) }

        pub fn bg_black(self) -> Self { self.bg(BackgroundColor::Black) }
        pub fn bg_red(self) -> Self { self.bg(BackgroundColor::Red) }
        pub fn bg_green(self) -> Self { self.bg(BackgroundColor::Green) }
        pub fn bg_yellow(self) -> Self { self.bg(BackgroundColor::Yellow) }
        pub fn bg_blue(self) -> Self { self.bg(BackgroundColor::Blue) }
        pub fn bg_magenta(self) -> Self { self.bg(BackgroundColor::Magenta) }
        pub fn bg_cyan(self) -> Self { self.bg(BackgroundColor::Cyan) }
        pub fn bg_white(self) -> Self { self.bg(BackgroundColor::White) }

        /// Set the basic text color by enum value. Does not clear a truecolor
        /// set via [Self::fg_rgb_color]; both may be emitted.
        pub fn fg(mut self, color: TextColor) -> Self {
            self.text_color = color;
            self
        }

        /// Set the basic background color by enum value.
        pub fn bg(mut self, color: BackgroundColor) -> Self {
            self.bg_color = color;
            self
        }

        /// Set the 24-bit text color and mark it present.
        pub fn fg_rgb_color(mut self, arg_color: impl Into<RgbColor>) -> Self {
            self.true_text_color = arg_color.into();
            self.has_true_text_color = true;
            self
        }

        /// Set the 24-bit background color and mark it present.
        pub fn bg_rgb_color(mut self, arg_color: impl Into<RgbColor>) -> Self {
            self.true_bg_color = arg_color.into();
            self.has_true_bg_color = true;
            self
        }

        pub fn bold(mut self) -> Self {
            self.bold = true;
            self
        }

        /// Pad the payload to `value` columns using the current alignment.
        /// Any value ≤ -1 disables padding. Padding counts payload bytes, not
        /// display columns, so multi-byte UTF-8 text pads short.
        pub fn width(mut self, value: i32) -> Self {
            self.width = value;
            self
        }

        pub fn left(mut self) -> Self {
            self.alignment = Alignment::Left;
            self
        }

        pub fn center(mut self) -> Self {
            self.alignment = Alignment::Center;
            self
        }

        pub fn right(mut self) -> Self {
            self.alignment = Alignment::Right;
            self
        }

        /// Replace the text payload. Earlier payloads are discarded, never
        /// appended to.
        pub fn text(mut self, text: &'a str) -> Self {
            self.text = text;
            self
        }
    }
}

mod style_render_impl {
    use super::*;

    impl Style<'_> {
        pub fn println(&self) {
            println!("{}", self);
        }

        pub fn print(&self) {
            print!("{}", self);
        }

        /// Like the [Display] implementation, but renders into an inline
        /// stack-allocated buffer that only spills to the heap past
        /// [sizing::DEFAULT_STRING_STORAGE_SIZE] bytes.
        pub fn to_small_str(
            &self,
        ) -> SmallString<[u8; sizing::DEFAULT_STRING_STORAGE_SIZE]> {
            format!("{}", self).into()
        }
    }

    impl Display for Style<'_> {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            if self.text_color != TextColor::None {
                write!(f, "{}", self.text_color)?;
            }
            if self.bg_color != BackgroundColor::None {
                write!(f, "{}", self.bg_color)?;
            }
            // The trailing `;0` parameter deviates from the canonical 3-param
            // truecolor SGR form; it is part of this wire format.
            if self.has_true_text_color {
                let RgbColor { red, green, blue } = self.true_text_color;
                write!(f, "{CSI}38;2;{red};{green};{blue};0{SGR}")?;
            }
            if self.has_true_bg_color {
                let RgbColor { red, green, blue } = self.true_bg_color;
                write!(f, "{CSI}48;2;{red};{green};{blue};0{SGR}")?;
            }
            if self.bold {
                write!(f, "{}", Attribute::Bold)?;
            }

            if self.width >= 0 {
                let width = self.width as usize;
                match self.alignment {
                    Alignment::Left => write!(f, "{:<width$}", self.text)?,
                    Alignment::Right => write!(f, "{:>width$}", self.text)?,
                    Alignment::Center => {
                        // Leading padding only. The payload is left unpadded
                        // on the right, so odd leftovers (and overlong text)
                        // come up short of `width`.
                        let padding =
                            (self.width - self.text.len() as i32) / 2;
                        for _ in 0..padding {
                            write!(f, " ")?;
                        }
                        write!(f, "{}", self.text)?;
                    }
                }
            } else {
                write!(f, "{}", self.text)?;
            }

            write!(f, "{}", Attribute::Reset)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::{Alignment, Style};
    use crate::{BackgroundColor, TextColor};

    #[test]
    fn bare_style_is_text_plus_reset() {
        assert_eq!(Style::new("plain").to_string(), "plain\x1b[0m");
    }

    #[test]
    fn fg_and_bg_render_in_order() {
        let styled = Style::new("X").red().bg_blue();
        assert_eq!(styled.to_string(), "\x1b[31m\x1b[44mX\x1b[0m");
    }

    #[test]
    fn truecolor_renders_with_trailing_zero_param() {
        let styled = Style::new("X").fg_rgb_color((255, 128, 0));
        assert_eq!(styled.to_string(), "\x1b[38;2;255;128;0;0mX\x1b[0m");

        let styled = Style::new("X").bg_rgb_color((1, 2, 3));
        assert_eq!(styled.to_string(), "\x1b[48;2;1;2;3;0mX\x1b[0m");
    }

    #[test]
    fn out_of_range_channels_pass_through() {
        let styled = Style::new("X").fg_rgb_color((300, -1, 999));
        assert_eq!(styled.to_string(), "\x1b[38;2;300;-1;999;0mX\x1b[0m");
    }

    #[test]
    fn basic_and_truecolor_both_emit_basic_first() {
        let styled = Style::new("X").red().fg_rgb_color((0, 0, 0));
        assert_eq!(styled.to_string(), "\x1b[31m\x1b[38;2;0;0;0;0mX\x1b[0m");
    }

    #[test]
    fn bg_truecolor_flag_does_not_leak_into_fg() {
        let styled = Style::new("X").bg_rgb_color((9, 9, 9));
        assert!(!styled.to_string().contains("38;2"));
    }

    #[test]
    fn full_render_order() {
        let styled = Style::new("Hi")
            .white()
            .bg_black()
            .fg_rgb_color((10, 20, 30))
            .bg_rgb_color((40, 50, 60))
            .bold();
        assert_eq!(
            styled.to_string(),
            "\x1b[37m\x1b[40m\x1b[38;2;10;20;30;0m\x1b[48;2;40;50;60;0m\x1b[1mHi\x1b[0m"
        );
    }

    #[test_case(Alignment::Left, "ab   "; "left pads right")]
    #[test_case(Alignment::Right, "   ab"; "right pads left")]
    #[test_case(Alignment::Center, " ab"; "center pads left only")]
    fn alignment_within_width(alignment: Alignment, padded: &str) {
        let styled = match alignment {
            Alignment::Left => Style::new("ab").width(5).left(),
            Alignment::Center => Style::new("ab").width(5).center(),
            Alignment::Right => Style::new("ab").width(5).right(),
        };
        assert_eq!(styled.to_string(), format!("{padded}\x1b[0m"));
    }

    #[test]
    fn center_uses_truncating_division() {
        // (5 - 1) / 2 = 2 leading spaces, nothing trailing.
        let styled = Style::new("X").width(5).center();
        assert_eq!(styled.to_string(), "  X\x1b[0m");
    }

    #[test]
    fn center_with_overlong_text_emits_no_padding() {
        let styled = Style::new("abcdef").width(4).center();
        assert_eq!(styled.to_string(), "abcdef\x1b[0m");
    }

    #[test_case(-1)]
    #[test_case(-20)]
    fn negative_width_disables_padding(width: i32) {
        let styled = Style::new("ab").width(width).right();
        assert_eq!(styled.to_string(), "ab\x1b[0m");
    }

    #[test]
    fn zero_width_pads_nothing_but_still_applies() {
        let styled = Style::new("ab").width(0).left();
        assert_eq!(styled.to_string(), "ab\x1b[0m");
    }

    #[test]
    fn rendering_is_idempotent() {
        let styled = Style::new("same").bg_green().white().width(10).center();
        assert_eq!(styled.to_string(), styled.to_string());
    }

    #[test]
    fn text_replaces_payload() {
        let styled = Style::new("first").fg(TextColor::Red).text("second");
        assert_eq!(styled.to_string(), "\x1b[31msecond\x1b[0m");
    }

    #[test]
    fn builder_is_reusable_after_render() {
        let label = Style::new("one").bg(BackgroundColor::Blue).white();
        let first = label.to_string();
        let again = label.to_string();
        assert_eq!(first, again);
        assert_eq!(
            label.text("two").to_string(),
            "\x1b[37m\x1b[44mtwo\x1b[0m"
        );
    }

    #[test]
    fn to_small_str_matches_display() {
        let styled = Style::new("buf").bold().width(6).right();
        assert_eq!(styled.to_small_str().as_str(), styled.to_string());
    }
}
