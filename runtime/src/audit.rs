// Carbon Credit Registry
// Copyright (C) 2020 Monadic GmbH <radicle@monadic.xyz>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License version 3 as
// published by the Free Software Foundation.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! The append-only audit trail.
//!
//! # Storage
//!
//! A list of [AuditEntry] in submission order. Entries are never removed
//! and only successful measurement messages append to it.
//!
//! # Invariants
//!
//! * Entry timestamps are non-decreasing in list order. A host clock that
//!   steps backwards is clamped to the previous entry's timestamp.

use carbon_registry_core::state::{AuditCategory, AuditEntry};
use carbon_registry_core::{AccountId, Timestamp};

pub struct AuditLog {
    entries: Vec<AuditEntry>,
}

impl AuditLog {
    pub fn new() -> Self {
        AuditLog {
            entries: Vec::new(),
        }
    }

    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }

    pub fn append(
        &mut self,
        auditor: AccountId,
        target: AccountId,
        category: AuditCategory,
        value: u128,
        now: Timestamp,
    ) {
        let timestamp = match self.entries.last() {
            Some(previous) => now.max(previous.timestamp),
            None => now,
        };
        self.entries.push(AuditEntry {
            auditor,
            target,
            category,
            value,
            timestamp,
        });
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn timestamps_never_decrease() {
        let auditor = AccountId::random();
        let target = AccountId::random();
        let mut log = AuditLog::new();

        log.append(auditor, target, AuditCategory::Forestry, 100, 50);
        log.append(auditor, target, AuditCategory::Industrial, 1200, 40);
        log.append(auditor, target, AuditCategory::Forestry, 7, 60);

        let timestamps: Vec<_> = log.entries().iter().map(|e| e.timestamp).collect();
        assert_eq!(timestamps, vec![50, 50, 60]);
    }
}
