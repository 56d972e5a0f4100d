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

//! More info: <http://www.termsys.demon.co.uk/vtansi.htm> (Cursor Control)

use std::fmt::{Display, Formatter, Result};

use strum_macros::EnumCount;

use crate::CSI;

/// Cursor operations and their final bytes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumCount)]
pub enum CursorMovement {
    Home,
    Up,
    Down,
    Forward,
    Backward,
    ForcePosition,
    SaveCursor,
    RestoreCursor,
}

/// A cursor command: an operation tag plus up to two integer parameters.
/// Construct via the named factories; render via [Display]. Parameters are
/// never validated, a zero or negative count passes through literally.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cursor {
    movement: CursorMovement,
    /// Row for positioning commands, repeat count for movement commands.
    count: i32,
    column: i32,
}

mod cursor_impl {
    use super::*;

    impl CursorMovement {
        pub fn final_byte(self) -> char {
            match self {
                CursorMovement::Home => 'H',
                CursorMovement::Up => 'A',
                CursorMovement::Down => 'B',
                CursorMovement::Forward => 'C',
                CursorMovement::Backward => 'D',
                CursorMovement::ForcePosition => 'f',
                CursorMovement::SaveCursor => 's',
                CursorMovement::RestoreCursor => 'u',
            }
        }
    }

    impl Cursor {
        fn new(movement: CursorMovement, count: i32, column: i32) -> Self {
            Self {
                movement,
                count,
                column,
            }
        }

        pub fn home(row: i32, column: i32) -> Self {
            Self::new(CursorMovement::Home, row, column)
        }

        pub fn up(count: i32) -> Self {
            Self::new(CursorMovement::Up, count, 0)
        }

        pub fn down(count: i32) -> Self {
            Self::new(CursorMovement::Down, count, 0)
        }

        pub fn forward(count: i32) -> Self {
            Self::new(CursorMovement::Forward, count, 0)
        }

        pub fn backward(count: i32) -> Self {
            Self::new(CursorMovement::Backward, count, 0)
        }

        /// Identical effect to [Self::home].
        pub fn force_position(row: i32, column: i32) -> Self {
            Self::new(CursorMovement::ForcePosition, row, column)
        }

        pub fn save_cursor() -> Self {
            Self::new(CursorMovement::SaveCursor, 0, 0)
        }

        pub fn restore_cursor() -> Self {
            Self::new(CursorMovement::RestoreCursor, 0, 0)
        }

        pub fn movement(&self) -> CursorMovement { self.movement }

        pub fn count(&self) -> i32 { self.count }

        pub fn row(&self) -> i32 { self.count }

        pub fn column(&self) -> i32 { self.column }
    }

    impl Display for Cursor {
        /// Emits `CSI` + `[` + parameters + final byte, eg: `ESC[[5;10H`.
        /// The doubled `[` does not match documented VT100 syntax
        /// (`ESC[5;10H`) and is almost certainly an upstream defect, but it is
        /// the wire format consumers of this catalog have seen so far, so it
        /// is kept byte-for-byte.
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            write!(f, "{CSI}")?;
            match self.movement {
                CursorMovement::Home | CursorMovement::ForcePosition => {
                    write!(f, "[{};{}", self.count, self.column)?;
                }
                CursorMovement::Up
                | CursorMovement::Down
                | CursorMovement::Forward
                | CursorMovement::Backward => {
                    write!(f, "[{}", self.count)?;
                }
                CursorMovement::SaveCursor | CursorMovement::RestoreCursor => {
                    write!(f, "[")?;
                }
            }
            write!(f, "{}", self.movement.final_byte())
        }
    }
}
