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

//! The deterministic state-transition logic of the Carbon Credit Registry.
//!
//! [Runtime::apply] executes one message to completion before the next one
//! begins; the host is responsible for serializing submissions. Every
//! message either applies its full effect set (ledger delta, registry
//! update, audit append, events) or leaves the state untouched and returns
//! an error.

mod audit;
mod auth;
mod compliance;
mod event;
mod genesis;
mod ledger;
mod marketplace;
mod registry;

pub use event::Event;
pub use genesis::GenesisConfig;
pub use ledger::VintageDraws;

use audit::AuditLog;
use auth::Auth;
use compliance::SectorTargets;
use ledger::VintageLedger;
use marketplace::Marketplace;
use registry::Registry;

use carbon_registry_core::state::{AuditCategory, AuditEntry, MarketRequest, Organization, Project};
use carbon_registry_core::{
    message, AccountId, Balance, Gei, RegistryError, RequestId, Sector, Timestamp, VintageYear,
};

/// All messages the runtime accepts, parameterized by their payload.
///
/// The origin and the current time are not part of the call; the host
/// supplies them to [Runtime::apply].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Call {
    RegisterProject(message::RegisterProject),
    RegisterOrg(message::RegisterOrg),
    AccreditAuditor(message::AccreditAuditor),
    SetSectorTarget(message::SetSectorTarget),
    IssueCredits(message::IssueCredits),
    UpdateEmissions(message::UpdateEmissions),
    SettleCompliance(message::SettleCompliance),
    PostBuyRequest(message::PostBuyRequest),
    FulfillRequest(message::FulfillRequest),
}

macro_rules! impl_call_from {
    ($( $message:ident ),*) => {
        $(
            impl From<message::$message> for Call {
                fn from(message: message::$message) -> Self {
                    Call::$message(message)
                }
            }
        )*
    };
}

impl_call_from!(
    RegisterProject,
    RegisterOrg,
    AccreditAuditor,
    SetSectorTarget,
    IssueCredits,
    UpdateEmissions,
    SettleCompliance,
    PostBuyRequest,
    FulfillRequest
);

/// Outcome of applying one message.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AppliedCall {
    /// Whether the message was applied. On an error no state changed.
    pub result: Result<(), RegistryError>,
    /// Events describing the applied effect set. Empty on an error.
    pub events: Vec<Event>,
}

/// The registry state and the message dispatcher mutating it.
///
/// Each field is mutated only by the operations responsible for it; the
/// dispatch functions below orchestrate across fields but route every write
/// through the owning component.
pub struct Runtime {
    auth: Auth,
    registry: Registry,
    ledger: VintageLedger,
    sector_targets: SectorTargets,
    marketplace: Marketplace,
    audit_log: AuditLog,
}

impl Runtime {
    pub fn new(genesis: GenesisConfig) -> Self {
        Runtime {
            auth: Auth::new(genesis.admin),
            registry: Registry::new(),
            ledger: VintageLedger::new(),
            sector_targets: SectorTargets::new(genesis.sector_targets),
            marketplace: Marketplace::new(),
            audit_log: AuditLog::new(),
        }
    }

    /// Applies one message on behalf of `origin` at host time `now`.
    pub fn apply(&mut self, origin: AccountId, now: Timestamp, call: Call) -> AppliedCall {
        let outcome = match call {
            Call::RegisterProject(message) => self.register_project(origin, message),
            Call::RegisterOrg(message) => self.register_org(origin, message),
            Call::AccreditAuditor(message) => self.accredit_auditor(origin, message),
            Call::SetSectorTarget(message) => self.set_sector_target(origin, message),
            Call::IssueCredits(message) => self.issue_credits(origin, now, message),
            Call::UpdateEmissions(message) => self.update_emissions(origin, now, message),
            Call::SettleCompliance(message) => self.settle_compliance(origin, message),
            Call::PostBuyRequest(message) => self.post_buy_request(origin, message),
            Call::FulfillRequest(message) => self.fulfill_request(origin, message),
        };
        match outcome {
            Ok(events) => AppliedCall {
                result: Ok(()),
                events,
            },
            Err(error) => AppliedCall {
                result: Err(error),
                events: Vec::new(),
            },
        }
    }

    fn register_project(
        &mut self,
        origin: AccountId,
        message: message::RegisterProject,
    ) -> Result<Vec<Event>, RegistryError> {
        let location = message.location.clone();
        self.registry.register_project(
            origin,
            message.location,
            message.species,
            message.area_hectares,
        )?;
        Ok(vec![Event::ProjectRegistered {
            owner: origin,
            location,
        }])
    }

    fn register_org(
        &mut self,
        origin: AccountId,
        message: message::RegisterOrg,
    ) -> Result<Vec<Event>, RegistryError> {
        let name = message.name.clone();
        let target_intensity = self.sector_targets.target(message.sector);
        self.registry.register_org(
            origin,
            message.name,
            message.sector,
            target_intensity,
            message.annual_production_tonnes,
        )?;
        Ok(vec![Event::OrganizationRegistered {
            owner: origin,
            name,
            sector: message.sector,
        }])
    }

    fn accredit_auditor(
        &mut self,
        origin: AccountId,
        message: message::AccreditAuditor,
    ) -> Result<Vec<Event>, RegistryError> {
        self.auth.ensure_admin(&origin)?;
        self.auth.accredit(message.auditor);
        Ok(vec![Event::AuditorAccredited {
            auditor: message.auditor,
        }])
    }

    fn set_sector_target(
        &mut self,
        origin: AccountId,
        message: message::SetSectorTarget,
    ) -> Result<Vec<Event>, RegistryError> {
        self.auth.ensure_admin(&origin)?;
        self.sector_targets
            .set_target(message.sector, message.target_intensity);
        Ok(vec![Event::SectorTargetSet {
            sector: message.sector,
            target_intensity: message.target_intensity,
        }])
    }

    fn issue_credits(
        &mut self,
        origin: AccountId,
        now: Timestamp,
        message: message::IssueCredits,
    ) -> Result<Vec<Event>, RegistryError> {
        self.auth.ensure_auditor(&origin)?;
        let project = self
            .registry
            .project(&message.project)
            .ok_or(RegistryError::InexistentProject)?
            .clone();
        let credits = message.measurement.sequestered_credits()?;

        self.ledger
            .mint(message.project, credits, message.vintage_year)?;
        self.registry
            .update_project(&message.project, project.record_issuance(credits, now));
        self.audit_log.append(
            origin,
            message.project,
            AuditCategory::Forestry,
            credits,
            now,
        );

        Ok(vec![Event::CreditsMinted {
            account: message.project,
            amount: credits,
            vintage_year: message.vintage_year,
        }])
    }

    fn update_emissions(
        &mut self,
        origin: AccountId,
        now: Timestamp,
        message: message::UpdateEmissions,
    ) -> Result<Vec<Event>, RegistryError> {
        self.auth.ensure_auditor(&origin)?;
        let org = self
            .registry
            .org(&message.org)
            .ok_or(RegistryError::InexistentOrganization)?
            .clone();
        let actual_intensity = message.report.intensity()?;

        let updated = org.record_emissions(actual_intensity);
        let reward =
            compliance::surplus_reward(&updated, message.report.total_production_tonnes);
        let mut events = Vec::new();
        if reward > 0 {
            self.ledger
                .mint(message.org, reward, message.vintage_year)?;
            events.push(Event::CreditsMinted {
                account: message.org,
                amount: reward,
                vintage_year: message.vintage_year,
            });
        }
        events.push(Event::ComplianceUpdated {
            org: message.org,
            actual_intensity,
            compliant: updated.compliant,
            reward_minted: reward,
        });
        self.registry.update_org(&message.org, updated);
        self.audit_log.append(
            origin,
            message.org,
            AuditCategory::Industrial,
            actual_intensity as u128,
            now,
        );

        Ok(events)
    }

    fn settle_compliance(
        &mut self,
        origin: AccountId,
        message: message::SettleCompliance,
    ) -> Result<Vec<Event>, RegistryError> {
        let org = self
            .registry
            .org(&origin)
            .ok_or(RegistryError::InexistentOrganization)?
            .clone();
        if org.compliant {
            return Err(RegistryError::AlreadyCompliant);
        }

        let shortfall = compliance::shortfall(&org);
        let mut events = Vec::new();
        if shortfall > 0 {
            let draws = self.ledger.burn_oldest_first(&origin, shortfall)?;
            for (vintage_year, amount) in draws {
                events.push(Event::CreditsBurned {
                    account: origin,
                    amount,
                    vintage_year,
                });
            }
        }
        self.registry
            .update_org(&origin, org.record_settlement(message.year));
        events.push(Event::ComplianceSettled {
            org: origin,
            year: message.year,
            burned: shortfall,
        });

        Ok(events)
    }

    fn post_buy_request(
        &mut self,
        origin: AccountId,
        message: message::PostBuyRequest,
    ) -> Result<Vec<Event>, RegistryError> {
        if self.registry.org(&origin).is_none() {
            return Err(RegistryError::Unauthorized);
        }
        let request_id = self.marketplace.post(origin, message.amount)?;
        Ok(vec![Event::BuyRequestCreated {
            request_id,
            buyer: origin,
            amount: message.amount,
        }])
    }

    fn fulfill_request(
        &mut self,
        origin: AccountId,
        message: message::FulfillRequest,
    ) -> Result<Vec<Event>, RegistryError> {
        if self.registry.project(&origin).is_none() {
            return Err(RegistryError::Unauthorized);
        }
        let (buyer, amount) = self.marketplace.checked_open_request(&message.request_id)?;

        let draws = self.ledger.transfer_oldest_first(&origin, buyer, amount)?;
        self.marketplace.mark_fulfilled(&message.request_id);

        let mut events: Vec<Event> = draws
            .into_iter()
            .map(|(vintage_year, drawn)| Event::VintageTransfer {
                from: origin,
                to: buyer,
                amount: drawn,
                vintage_year,
            })
            .collect();
        events.push(Event::RequestFulfilled {
            request_id: message.request_id,
            seller: origin,
            buyer,
            amount,
        });
        Ok(events)
    }

    // Read-only snapshots. These observe committed state only; the host
    // must not interleave them with a mutating `apply`.

    pub fn admin(&self) -> AccountId {
        self.auth.admin()
    }

    pub fn is_accredited_auditor(&self, account: &AccountId) -> bool {
        self.auth.is_auditor(account)
    }

    pub fn balance_of(&self, account: &AccountId) -> Balance {
        self.ledger.balance_of(account)
    }

    pub fn vintage_balances(&self, account: &AccountId) -> Vec<(VintageYear, Balance)> {
        self.ledger.vintage_balances(account)
    }

    pub fn total_supply(&self) -> Balance {
        self.ledger.total_supply()
    }

    pub fn project(&self, owner: &AccountId) -> Option<&Project> {
        self.registry.project(owner)
    }

    pub fn org(&self, owner: &AccountId) -> Option<&Organization> {
        self.registry.org(owner)
    }

    pub fn project_owners(&self) -> Vec<AccountId> {
        self.registry.project_owners()
    }

    pub fn org_owners(&self) -> Vec<AccountId> {
        self.registry.org_owners()
    }

    pub fn sector_target(&self, sector: Sector) -> Gei {
        self.sector_targets.target(sector)
    }

    pub fn shortfall_of(&self, owner: &AccountId) -> Result<Balance, RegistryError> {
        let org = self
            .registry
            .org(owner)
            .ok_or(RegistryError::InexistentOrganization)?;
        Ok(compliance::shortfall(org))
    }

    pub fn market_request(&self, id: &RequestId) -> Option<&MarketRequest> {
        self.marketplace.request(id)
    }

    pub fn market_request_count(&self) -> u64 {
        self.marketplace.request_count()
    }

    pub fn audit_history(&self) -> &[AuditEntry] {
        self.audit_log.entries()
    }
}
