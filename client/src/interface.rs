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

//! Provide an abstract trait for the registry client and the necessary
//! types.
//!
//! The [ClientT] trait defines one method to submit registry messages as
//! well as methods to read the registry state.

pub use carbon_registry_core::*;
pub use carbon_registry_runtime::Event;

pub use crate::error::Error;
pub use crate::message::Message;

/// Result of a message being applied by the registry.
///
/// Returned after submitting a message.
#[derive(Clone, Debug)]
pub struct TransactionIncluded<Message_: Message> {
    /// Events emitted by this message. Empty if the message was rejected.
    pub events: Vec<Event>,
    /// The result of the runtime message.
    ///
    /// A rejection carries the [RegistryError] the runtime refused the
    /// message with and implies no state change.
    pub result: Result<Message_::Output, RegistryError>,
}

/// Trait for registry clients submitting messages and looking up state.
///
/// Submissions are applied one at a time; reads observe committed state
/// only and never a partially applied message.
#[async_trait::async_trait]
pub trait ClientT {
    /// Submit a registry message on behalf of an account.
    ///
    /// Succeeds when the registry has processed the message. Whether the
    /// message was applied or rejected is reported in
    /// [TransactionIncluded::result].
    async fn submit_message<Message_: Message>(
        &self,
        author: &AccountId,
        message: Message_,
    ) -> Result<TransactionIncluded<Message_>, Error>;

    /// Total credit balance of an account across all vintages.
    async fn balance_of(&self, account_id: &AccountId) -> Result<Balance, Error>;

    /// Per-vintage balances of an account, oldest first.
    async fn vintage_balances(
        &self,
        account_id: &AccountId,
    ) -> Result<Vec<(VintageYear, Balance)>, Error>;

    /// Credits in circulation: total minted minus total burned.
    async fn total_supply(&self) -> Result<Balance, Error>;

    async fn get_project(&self, owner: &AccountId) -> Result<Option<state::Project>, Error>;

    async fn get_org(&self, owner: &AccountId) -> Result<Option<state::Organization>, Error>;

    async fn list_project_owners(&self) -> Result<Vec<AccountId>, Error>;

    async fn list_orgs(&self) -> Result<Vec<AccountId>, Error>;

    async fn get_market_request(
        &self,
        id: RequestId,
    ) -> Result<Option<state::MarketRequest>, Error>;

    async fn market_request_count(&self) -> Result<u64, Error>;

    async fn get_sector_target(&self, sector: Sector) -> Result<Gei, Error>;

    /// Credits the organization must burn to reach compliance. [None] if
    /// the account is not a registered organization.
    async fn calculate_shortfall(&self, owner: &AccountId) -> Result<Option<Balance>, Error>;

    /// The full audit trail in submission order.
    async fn get_audit_history(&self) -> Result<Vec<state::AuditEntry>, Error>;

    async fn is_accredited_auditor(&self, account_id: &AccountId) -> Result<bool, Error>;

    /// The administrator identity fixed at genesis.
    async fn admin(&self) -> Result<AccountId, Error>;
}
