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

//! Device status queries and reports, as data holders only. Nothing here is
//! sent to or read from a terminal.
//!
//! More info: <http://www.termsys.demon.co.uk/vtansi.htm> (Device Status)

use strum_macros::EnumCount;

// TODO: parse device status and cursor position reports read back from the
// terminal, so `Device` round-trips with a real tty.

/// The status/query kinds a terminal exchanges:
///
/// | Variant              | Wire form             |
/// |----------------------|-----------------------|
/// | QueryDeviceCode      | `ESC[c`               |
/// | ReportDeviceCode     | `ESC[{code}0c`        |
/// | QueryDeviceStatus    | `ESC[5n`              |
/// | ReportDeviceOk       | `ESC[0n`              |
/// | ReportDeviceFailure  | `ESC[3n`              |
/// | QueryCursorPosition  | `ESC[6n`              |
/// | ReportCursorPosition | `ESC[{row};{column}R` |
#[derive(Copy, Clone, Debug, PartialEq, Eq, EnumCount)]
pub enum DeviceStatus {
    QueryDeviceCode,
    ReportDeviceCode,
    QueryDeviceStatus,
    ReportDeviceOk,
    ReportDeviceFailure,
    QueryCursorPosition,
    ReportCursorPosition,
}

/// A device status query or report. Pure value object: carries the status tag
/// and up to two integers, with named factories and getters.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Device {
    status: DeviceStatus,
    row: i32,
    column: i32,
}

mod device_impl {
    use super::*;

    impl Device {
        fn new(status: DeviceStatus, row: i32, column: i32) -> Self {
            Self {
                status,
                row,
                column,
            }
        }

        pub fn query_device_code() -> Self {
            Self::new(DeviceStatus::QueryDeviceCode, 0, 0)
        }

        pub fn query_device_status() -> Self {
            Self::new(DeviceStatus::QueryDeviceStatus, 0, 0)
        }

        pub fn query_cursor_position() -> Self {
            Self::new(DeviceStatus::QueryCursorPosition, 0, 0)
        }

        pub fn report_device_code(code: i32) -> Self {
            Self::new(DeviceStatus::ReportDeviceCode, code, 0)
        }

        pub fn report_device_ok() -> Self {
            Self::new(DeviceStatus::ReportDeviceOk, 0, 0)
        }

        pub fn report_device_failure() -> Self {
            Self::new(DeviceStatus::ReportDeviceFailure, 0, 0)
        }

        pub fn report_cursor_position(row: i32, column: i32) -> Self {
            Self::new(DeviceStatus::ReportCursorPosition, row, column)
        }

        pub fn status(&self) -> DeviceStatus { self.status }

        /// The device code for [DeviceStatus::ReportDeviceCode]; shares
        /// storage with [Self::row].
        pub fn count(&self) -> i32 { self.row }

        pub fn row(&self) -> i32 { self.row }

        pub fn column(&self) -> i32 { self.column }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{Device, DeviceStatus};

    #[test]
    fn factories_tag_their_status() {
        assert_eq!(
            Device::query_device_code().status(),
            DeviceStatus::QueryDeviceCode
        );
        assert_eq!(
            Device::query_device_status().status(),
            DeviceStatus::QueryDeviceStatus
        );
        assert_eq!(
            Device::report_device_ok().status(),
            DeviceStatus::ReportDeviceOk
        );
        assert_eq!(
            Device::report_device_failure().status(),
            DeviceStatus::ReportDeviceFailure
        );
    }

    #[test]
    fn report_device_code_carries_the_code() {
        let report = Device::report_device_code(62);
        assert_eq!(report.status(), DeviceStatus::ReportDeviceCode);
        assert_eq!(report.count(), 62);
    }

    #[test]
    fn report_cursor_position_carries_row_and_column() {
        let report = Device::report_cursor_position(12, 40);
        assert_eq!(report.row(), 12);
        assert_eq!(report.column(), 40);
    }
}
