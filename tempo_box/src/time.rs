// Copyright 2025 the Tempo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time values used on the temporal axis of spans and boxes.
//!
//! Both types count from the same epoch, 2000-01-01 00:00:00 UTC.

/// A point in time, in microseconds since 2000-01-01 00:00:00 UTC.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    /// The epoch itself.
    pub const EPOCH: Self = Self(0);

    /// Microseconds in one second.
    pub const MICROS_PER_SECOND: i64 = 1_000_000;

    /// Build a timestamp from microseconds since the epoch.
    pub const fn from_micros(micros: i64) -> Self {
        Self(micros)
    }

    /// Build a timestamp from whole seconds since the epoch, saturating on overflow.
    pub const fn from_seconds(seconds: i64) -> Self {
        Self(seconds.saturating_mul(Self::MICROS_PER_SECOND))
    }

    /// Microseconds since the epoch.
    pub const fn micros(self) -> i64 {
        self.0
    }
}

/// A calendar day, counted in days since 2000-01-01.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

impl Date {
    /// Build a date from days since the epoch.
    pub const fn from_days(days: i32) -> Self {
        Self(days)
    }

    /// Days since the epoch.
    pub const fn days(self) -> i32 {
        self.0
    }
}
