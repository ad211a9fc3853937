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

//! Client for the Carbon Credit Registry.
//!
//! [Client::new_emulator] runs the registry in memory. The emulator applies
//! each submitted message to completion before the next one, standing in
//! for the host that serializes submissions in a deployment. This is what
//! development and the runtime tests run against.

mod error;
mod interface;
mod memory;
pub mod message;

pub use crate::interface::*;
pub use crate::message::EventExtractionError;

use crate::memory::Emulator;

/// Client to interact with the registry.
///
/// Implements [ClientT] for submitting messages and reading state.
#[derive(Clone)]
pub struct Client {
    emulator: Emulator,
}

impl Client {
    /// Create a client that runs the registry in memory, starting from the
    /// given genesis configuration.
    pub fn new_emulator(genesis: carbon_registry_runtime::GenesisConfig) -> Self {
        Client {
            emulator: Emulator::new(genesis),
        }
    }
}

#[async_trait::async_trait]
impl ClientT for Client {
    async fn submit_message<Message_: Message>(
        &self,
        author: &AccountId,
        message: Message_,
    ) -> Result<TransactionIncluded<Message_>, Error> {
        self.emulator.submit(author, message)
    }

    async fn balance_of(&self, account_id: &AccountId) -> Result<Balance, Error> {
        self.emulator
            .with_state(|runtime| runtime.balance_of(account_id))
    }

    async fn vintage_balances(
        &self,
        account_id: &AccountId,
    ) -> Result<Vec<(VintageYear, Balance)>, Error> {
        self.emulator
            .with_state(|runtime| runtime.vintage_balances(account_id))
    }

    async fn total_supply(&self) -> Result<Balance, Error> {
        self.emulator.with_state(|runtime| runtime.total_supply())
    }

    async fn get_project(&self, owner: &AccountId) -> Result<Option<state::Project>, Error> {
        self.emulator
            .with_state(|runtime| runtime.project(owner).cloned())
    }

    async fn get_org(&self, owner: &AccountId) -> Result<Option<state::Organization>, Error> {
        self.emulator
            .with_state(|runtime| runtime.org(owner).cloned())
    }

    async fn list_project_owners(&self) -> Result<Vec<AccountId>, Error> {
        self.emulator.with_state(|runtime| runtime.project_owners())
    }

    async fn list_orgs(&self) -> Result<Vec<AccountId>, Error> {
        self.emulator.with_state(|runtime| runtime.org_owners())
    }

    async fn get_market_request(
        &self,
        id: RequestId,
    ) -> Result<Option<state::MarketRequest>, Error> {
        self.emulator
            .with_state(|runtime| runtime.market_request(&id).cloned())
    }

    async fn market_request_count(&self) -> Result<u64, Error> {
        self.emulator
            .with_state(|runtime| runtime.market_request_count())
    }

    async fn get_sector_target(&self, sector: Sector) -> Result<Gei, Error> {
        self.emulator
            .with_state(|runtime| runtime.sector_target(sector))
    }

    async fn calculate_shortfall(&self, owner: &AccountId) -> Result<Option<Balance>, Error> {
        self.emulator
            .with_state(|runtime| runtime.shortfall_of(owner).ok())
    }

    async fn get_audit_history(&self) -> Result<Vec<state::AuditEntry>, Error> {
        self.emulator
            .with_state(|runtime| runtime.audit_history().to_vec())
    }

    async fn is_accredited_auditor(&self, account_id: &AccountId) -> Result<bool, Error> {
        self.emulator
            .with_state(|runtime| runtime.is_accredited_auditor(account_id))
    }

    async fn admin(&self) -> Result<AccountId, Error> {
        self.emulator.with_state(|runtime| runtime.admin())
    }
}
