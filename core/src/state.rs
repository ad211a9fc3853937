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

//! Type definitions for all entities stored in the registry state.

use parity_scale_codec::{Decode, Encode};

use crate::{AccountId, Balance, Gei, Location, Sector, String32, Timestamp, VintageYear};

/// A registered forestry project that sequesters carbon and is issued
/// credits against audited field measurements.
///
/// # Storage
///
/// Projects are stored as a map keyed by the owner [crate::AccountId].
/// The owner can be extracted from the storage key. Presence in the map is
/// what makes an identity a registered project.
///
/// # Invariants
///
/// * `location` is globally unique among all projects.
/// * `cumulative_credits_issued` is monotonically non-decreasing.
/// * `last_audit` is [Some] iff credits have been issued at least once.
///
/// # Relevant messages
///
/// * [crate::message::RegisterProject]
/// * [crate::message::IssueCredits]
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct Project {
    /// GPS coordinates of the plantation. Never changes after registration.
    pub location: Location,

    /// Main tree species registered for the project.
    pub species: String32,

    /// Plantation area in hectares. Strictly positive.
    pub area_hectares: u64,

    /// Sum of all credits ever issued to this project, in ledger units.
    pub cumulative_credits_issued: Balance,

    /// Details of the most recent credit issuance, if any.
    pub last_audit: Option<ProjectAudit>,
}

impl Project {
    /// Creates a freshly registered project with no issuance history.
    pub fn new(location: Location, species: String32, area_hectares: u64) -> Self {
        Project {
            location,
            species,
            area_hectares,
            cumulative_credits_issued: 0,
            last_audit: None,
        }
    }

    /// Records a successful credit issuance against this project.
    /// Returns the updated project.
    pub fn record_issuance(mut self, credits: Balance, now: Timestamp) -> Self {
        self.cumulative_credits_issued += credits;
        self.last_audit = Some(ProjectAudit {
            timestamp: now,
            main_species: self.species.clone(),
        });
        self
    }
}

/// Snapshot taken when an auditor issues credits to a project.
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct ProjectAudit {
    /// When the issuance was applied.
    pub timestamp: Timestamp,
    /// Main species observed in the audited sample.
    pub main_species: String32,
}

/// A regulated industrial organization that must keep its emission
/// intensity at or below its sector target.
///
/// # Storage
///
/// Organizations are stored as a map keyed by the owner [crate::AccountId].
/// Presence in the map is what makes an identity a registered organization.
///
/// # Invariants
///
/// * `name` is unique among all organizations.
/// * `target_intensity` is captured from the sector target at registration
///   and never changes afterwards.
/// * `compliant` implies `shortfall == 0`.
///
/// # Relevant messages
///
/// * [crate::message::RegisterOrg]
/// * [crate::message::UpdateEmissions]
/// * [crate::message::SettleCompliance]
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct Organization {
    /// Display name. Unique among organizations. Never changes.
    pub name: String32,

    /// Industrial sector the organization is regulated under.
    pub sector: Sector,

    /// Target emission intensity, scaled ×1000. Captured from the sector
    /// target at registration time.
    pub target_intensity: Gei,

    /// Most recently audited emission intensity, scaled ×1000.
    /// [None] until the first emissions update.
    pub actual_intensity: Option<Gei>,

    /// Annual production in tonnes of finished product. Strictly positive.
    pub annual_production_tonnes: u64,

    /// Whether the organization currently meets its target, either by
    /// measurement or by settlement.
    pub compliant: bool,

    /// Year of the most recent successful settlement, if any.
    pub last_settlement_year: Option<VintageYear>,
}

impl Organization {
    /// Creates a freshly registered organization with no emissions record.
    pub fn new(name: String32, sector: Sector, target_intensity: Gei, production: u64) -> Self {
        Organization {
            name,
            sector,
            target_intensity,
            actual_intensity: None,
            annual_production_tonnes: production,
            compliant: false,
            last_settlement_year: None,
        }
    }

    /// Applies an audited intensity figure and recomputes the compliance
    /// flag. Returns the updated organization.
    pub fn record_emissions(mut self, actual_intensity: Gei) -> Self {
        self.compliant = actual_intensity <= self.target_intensity;
        self.actual_intensity = Some(actual_intensity);
        self
    }

    /// Marks a completed settlement for the given year. Returns the updated
    /// organization.
    pub fn record_settlement(mut self, year: VintageYear) -> Self {
        self.compliant = true;
        self.last_settlement_year = Some(year);
        self
    }
}

/// An open offer by an organization to buy credits from any project.
///
/// # Storage
///
/// Requests are stored as a map keyed by the sequential [crate::RequestId]
/// assigned at creation.
///
/// # Invariants
///
/// * `fulfilled` flips `false → true` exactly once and never reverts.
/// * Fulfillment transfers exactly `amount`, never a part of it.
///
/// # Relevant messages
///
/// * [crate::message::PostBuyRequest]
/// * [crate::message::FulfillRequest]
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct MarketRequest {
    /// Organization that posted the request and receives the credits.
    pub buyer: AccountId,

    /// Requested amount in ledger units. Strictly positive.
    pub amount: Balance,

    /// Whether the request has been matched by a project.
    pub fulfilled: bool,
}

/// One entry of the append-only audit trail.
///
/// # Storage
///
/// Entries are stored as an append-only list; the list order is the
/// submission order of the originating messages.
///
/// # Relevant messages
///
/// * [crate::message::IssueCredits]
/// * [crate::message::UpdateEmissions]
#[derive(Decode, Encode, Clone, Debug, Eq, PartialEq)]
pub struct AuditEntry {
    /// Accredited auditor that submitted the measurement.
    pub auditor: AccountId,

    /// Project or organization the measurement applies to.
    pub target: AccountId,

    /// Which measurement path produced the entry.
    pub category: AuditCategory,

    /// Credits minted (forestry) or intensity score ×1000 (industrial).
    pub value: u128,

    /// When the measurement was applied. Not earlier than the timestamp of
    /// the preceding entry.
    pub timestamp: Timestamp,
}

/// The measurement path that produced an [AuditEntry].
#[derive(Decode, Encode, Clone, Copy, Debug, Eq, PartialEq)]
pub enum AuditCategory {
    /// Credit issuance against forestry field measurements.
    Forestry,
    /// Emission-intensity update against industrial consumption figures.
    Industrial,
}

#[cfg(test)]
mod test {
    use super::*;
    use core::convert::TryFrom;

    fn test_project() -> Project {
        Project::new(
            Location::try_from("21.1458,79.0882").unwrap(),
            String32::from_string("Tectona grandis".to_string()).unwrap(),
            120,
        )
    }

    #[test]
    fn issuance_accumulates_credits() {
        let project = test_project()
            .record_issuance(100, 5)
            .record_issuance(50, 9);
        assert_eq!(project.cumulative_credits_issued, 150);
        let audit = project.last_audit.unwrap();
        assert_eq!(audit.timestamp, 9);
        assert_eq!(audit.main_species.as_str(), "Tectona grandis");
    }

    #[test]
    fn emissions_update_recomputes_compliance() {
        let org = Organization::new(
            String32::from_string("Deccan Cement Works".to_string()).unwrap(),
            Sector::Cement,
            900,
            50_000,
        );
        let over_target = org.clone().record_emissions(1200);
        assert!(!over_target.compliant);
        let under_target = org.record_emissions(850);
        assert!(under_target.compliant);
    }

    #[test]
    fn settlement_marks_compliant() {
        let org = Organization::new(
            String32::from_string("Deccan Cement Works".to_string()).unwrap(),
            Sector::Cement,
            900,
            50_000,
        )
        .record_emissions(1200)
        .record_settlement(2024);
        assert!(org.compliant);
        assert_eq!(org.last_settlement_year, Some(2024));
        // The measured figure stays on record after settlement.
        assert_eq!(org.actual_intensity, Some(1200));
    }
}
