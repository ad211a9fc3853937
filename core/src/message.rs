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

//! Parameter types for all messages accepted by the registry.

use parity_scale_codec::{Decode, Encode};

use crate::measurement::{EmissionReport, ForestMeasurement};
use crate::{AccountId, Balance, Gei, Location, RequestId, Sector, String32, VintageYear};

/// Register the sender as a forestry project.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct RegisterProject {
    pub location: Location,
    pub species: String32,
    pub area_hectares: u64,
}

/// Register the sender as an industrial organization.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct RegisterOrg {
    pub name: String32,
    pub sector: Sector,
    pub annual_production_tonnes: u64,
}

/// Add an identity to the accredited auditor set. Administrator only.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct AccreditAuditor {
    pub auditor: AccountId,
}

/// Set the target intensity of a sector. Administrator only. Applies to
/// organizations registered after the update, not to existing ones.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct SetSectorTarget {
    pub sector: Sector,
    pub target_intensity: Gei,
}

/// Mint credits to a project against forestry field measurements.
/// Accredited auditors only.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct IssueCredits {
    pub project: AccountId,
    pub measurement: ForestMeasurement,
    pub vintage_year: VintageYear,
}

/// Record an organization's audited emission inputs for a period.
/// Accredited auditors only.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct UpdateEmissions {
    pub org: AccountId,
    pub report: EmissionReport,
    pub vintage_year: VintageYear,
}

/// Burn the sender organization's shortfall to reach compliance for a year.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct SettleCompliance {
    pub year: VintageYear,
}

/// Post an open offer to buy credits. Registered organizations only.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct PostBuyRequest {
    pub amount: Balance,
}

/// Transfer the full requested amount of an open buy request from the
/// sender project to the buyer. Registered projects only.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct FulfillRequest {
    pub request_id: RequestId,
}
