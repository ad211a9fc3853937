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

//! The buy-request queue matching organizations with projects.
//!
//! # Storage
//!
//! Requests are stored as a map keyed by sequential [RequestId]s. A request
//! moves `Open → Fulfilled` exactly once and is never deleted or reopened.

use std::collections::BTreeMap;

use carbon_registry_core::state::MarketRequest;
use carbon_registry_core::{AccountId, Balance, RegistryError, RequestId};

pub struct Marketplace {
    requests: BTreeMap<RequestId, MarketRequest>,
    next_id: RequestId,
}

impl Marketplace {
    pub fn new() -> Self {
        Marketplace {
            requests: BTreeMap::new(),
            next_id: 0,
        }
    }

    pub fn request(&self, id: &RequestId) -> Option<&MarketRequest> {
        self.requests.get(id)
    }

    pub fn request_count(&self) -> u64 {
        self.next_id
    }

    /// Appends a new open request and returns its id.
    ///
    /// Fails with [RegistryError::InvalidAmount] on a zero amount.
    pub fn post(&mut self, buyer: AccountId, amount: Balance) -> Result<RequestId, RegistryError> {
        if amount == 0 {
            return Err(RegistryError::InvalidAmount);
        }
        let id = self.next_id;
        self.requests.insert(
            id,
            MarketRequest {
                buyer,
                amount,
                fulfilled: false,
            },
        );
        self.next_id += 1;
        Ok(id)
    }

    /// Checks that a request can be fulfilled and returns its buyer and
    /// amount without mutating it.
    ///
    /// Fails with [RegistryError::InexistentRequest] or
    /// [RegistryError::AlreadyFulfilled].
    pub fn checked_open_request(
        &self,
        id: &RequestId,
    ) -> Result<(AccountId, Balance), RegistryError> {
        let request = self
            .requests
            .get(id)
            .ok_or(RegistryError::InexistentRequest)?;
        if request.fulfilled {
            return Err(RegistryError::AlreadyFulfilled);
        }
        Ok((request.buyer, request.amount))
    }

    /// Flips an open request to fulfilled. Must only be called after
    /// [Marketplace::checked_open_request] succeeded and the transfer was
    /// applied, within the same message.
    pub fn mark_fulfilled(&mut self, id: &RequestId) {
        if let Some(request) = self.requests.get_mut(id) {
            request.fulfilled = true;
        }
    }
}
