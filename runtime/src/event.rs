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

//! Events emitted by successfully applied messages.
//!
//! Events describe the full effect set of a message. A burn or transfer
//! spanning several vintages emits one event per vintage drawn from, in
//! oldest-first order.

use codec::{Decode, Encode};

use carbon_registry_core::{
    AccountId, Balance, Gei, Location, RequestId, Sector, String32, VintageYear,
};

#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub enum Event {
    /// A forestry project was registered.
    ProjectRegistered {
        owner: AccountId,
        location: Location,
    },

    /// An industrial organization was registered.
    OrganizationRegistered {
        owner: AccountId,
        name: String32,
        sector: Sector,
    },

    /// An identity was added to the accredited auditor set.
    AuditorAccredited { auditor: AccountId },

    /// The target intensity of a sector was updated. Applies to future
    /// registrants only.
    SectorTargetSet {
        sector: Sector,
        target_intensity: Gei,
    },

    /// Credits were minted to an account at a vintage year.
    CreditsMinted {
        account: AccountId,
        amount: Balance,
        vintage_year: VintageYear,
    },

    /// Credits were burned from an account at a vintage year.
    CreditsBurned {
        account: AccountId,
        amount: Balance,
        vintage_year: VintageYear,
    },

    /// Credits of one vintage moved between two accounts.
    VintageTransfer {
        from: AccountId,
        to: AccountId,
        amount: Balance,
        vintage_year: VintageYear,
    },

    /// An organization's audited intensity was recorded. `reward_minted` is
    /// non-zero when the organization beat its target and was issued
    /// surplus credits.
    ComplianceUpdated {
        org: AccountId,
        actual_intensity: Gei,
        compliant: bool,
        reward_minted: Balance,
    },

    /// An organization settled its shortfall for a year.
    ComplianceSettled {
        org: AccountId,
        year: VintageYear,
        burned: Balance,
    },

    /// An organization posted an open buy request.
    BuyRequestCreated {
        request_id: RequestId,
        buyer: AccountId,
        amount: Balance,
    },

    /// A project fulfilled a buy request in full.
    RequestFulfilled {
        request_id: RequestId,
        seller: AccountId,
        buyer: AccountId,
        amount: Balance,
    },
}
