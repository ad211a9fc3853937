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

//! Role checks gating every privileged message.
//!
//! # Storage
//!
//! One administrator fixed at genesis and an append-only set of accredited
//! auditors. There is no revocation.

use std::collections::BTreeSet;

use carbon_registry_core::{AccountId, RegistryError};

pub struct Auth {
    admin: AccountId,
    auditors: BTreeSet<AccountId>,
}

impl Auth {
    pub fn new(admin: AccountId) -> Self {
        Auth {
            admin,
            auditors: BTreeSet::new(),
        }
    }

    pub fn admin(&self) -> AccountId {
        self.admin
    }

    pub fn is_auditor(&self, account: &AccountId) -> bool {
        self.auditors.contains(account)
    }

    pub fn ensure_admin(&self, origin: &AccountId) -> Result<(), RegistryError> {
        if *origin == self.admin {
            Ok(())
        } else {
            Err(RegistryError::Unauthorized)
        }
    }

    pub fn ensure_auditor(&self, origin: &AccountId) -> Result<(), RegistryError> {
        if self.is_auditor(origin) {
            Ok(())
        } else {
            Err(RegistryError::Unauthorized)
        }
    }

    /// Adds an identity to the auditor set. Accrediting an existing auditor
    /// again is a no-op.
    pub fn accredit(&mut self, auditor: AccountId) {
        self.auditors.insert(auditor);
    }
}
