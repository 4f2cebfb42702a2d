// Copyright 2026 the Vello Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A timestamped list record.

pub use web_time::SystemTime;

/// A record stamped with its creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Item {
    timestamp: SystemTime,
}

impl Item {
    pub fn new(timestamp: SystemTime) -> Self {
        Self { timestamp }
    }

    /// An item stamped with the current time.
    pub fn now() -> Self {
        Self::new(SystemTime::now())
    }

    pub fn timestamp(&self) -> SystemTime {
        self.timestamp
    }
}
