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

//! The participant registry: forestry projects and industrial
//! organizations.
//!
//! # Storage
//!
//! Two maps keyed by the owner [AccountId]. An identity holds at most one
//! role: it cannot be both a project and an organization, and neither
//! record is ever deleted.
//!
//! # Invariants
//!
//! * Project locations are globally unique.
//! * Organization names are globally unique.

use std::collections::BTreeMap;

use carbon_registry_core::state::{Organization, Project};
use carbon_registry_core::{AccountId, Gei, Location, RegistryError, Sector, String32};

pub struct Registry {
    projects: BTreeMap<AccountId, Project>,
    orgs: BTreeMap<AccountId, Organization>,
}

impl Registry {
    pub fn new() -> Self {
        Registry {
            projects: BTreeMap::new(),
            orgs: BTreeMap::new(),
        }
    }

    pub fn project(&self, owner: &AccountId) -> Option<&Project> {
        self.projects.get(owner)
    }

    pub fn org(&self, owner: &AccountId) -> Option<&Organization> {
        self.orgs.get(owner)
    }

    pub fn project_owners(&self) -> Vec<AccountId> {
        self.projects.keys().copied().collect()
    }

    pub fn org_owners(&self) -> Vec<AccountId> {
        self.orgs.keys().copied().collect()
    }

    pub fn is_registered(&self, account: &AccountId) -> bool {
        self.projects.contains_key(account) || self.orgs.contains_key(account)
    }

    /// Registers `owner` as a forestry project.
    ///
    /// Fails with [RegistryError::AlreadyRegistered] if the identity
    /// already holds either role, [RegistryError::InvalidAmount] on a zero
    /// area and [RegistryError::DuplicateLocation] if any project is
    /// registered at the location.
    pub fn register_project(
        &mut self,
        owner: AccountId,
        location: Location,
        species: String32,
        area_hectares: u64,
    ) -> Result<(), RegistryError> {
        if self.is_registered(&owner) {
            return Err(RegistryError::AlreadyRegistered);
        }
        if area_hectares == 0 {
            return Err(RegistryError::InvalidAmount);
        }
        if self
            .projects
            .values()
            .any(|project| project.location == location)
        {
            return Err(RegistryError::DuplicateLocation);
        }

        self.projects
            .insert(owner, Project::new(location, species, area_hectares));
        Ok(())
    }

    /// Registers `owner` as an industrial organization. The target
    /// intensity is captured from the sector target as of now; later target
    /// updates do not apply to this organization.
    ///
    /// Fails with [RegistryError::AlreadyRegistered],
    /// [RegistryError::InvalidAmount] on zero production, or
    /// [RegistryError::DuplicateName].
    pub fn register_org(
        &mut self,
        owner: AccountId,
        name: String32,
        sector: Sector,
        target_intensity: Gei,
        annual_production_tonnes: u64,
    ) -> Result<(), RegistryError> {
        if self.is_registered(&owner) {
            return Err(RegistryError::AlreadyRegistered);
        }
        if annual_production_tonnes == 0 {
            return Err(RegistryError::InvalidAmount);
        }
        if self.orgs.values().any(|org| org.name == name) {
            return Err(RegistryError::DuplicateName);
        }

        self.orgs.insert(
            owner,
            Organization::new(name, sector, target_intensity, annual_production_tonnes),
        );
        Ok(())
    }

    /// Replaces a project record after a successful issuance.
    /// The owner must be registered.
    pub fn update_project(&mut self, owner: &AccountId, project: Project) {
        self.projects.insert(*owner, project);
    }

    /// Replaces an organization record after an emissions update or
    /// settlement. The owner must be registered.
    pub fn update_org(&mut self, owner: &AccountId, org: Organization) {
        self.orgs.insert(*owner, org);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use core::convert::TryFrom;

    fn location(s: &str) -> Location {
        Location::try_from(s).unwrap()
    }

    fn name(s: &str) -> String32 {
        String32::from_string(s.to_string()).unwrap()
    }

    #[test]
    fn duplicate_location_rejected() {
        let mut registry = Registry::new();
        registry
            .register_project(
                AccountId::random(),
                location("21.1458,79.0882"),
                name("Tectona grandis"),
                120,
            )
            .unwrap();

        let result = registry.register_project(
            AccountId::random(),
            location("21.1458,79.0882"),
            name("Shorea robusta"),
            80,
        );
        assert_eq!(result, Err(RegistryError::DuplicateLocation));
    }

    #[test]
    fn one_role_per_identity() {
        let owner = AccountId::random();
        let mut registry = Registry::new();
        registry
            .register_project(owner, location("11.0,76.9"), name("Teak"), 40)
            .unwrap();

        let as_project =
            registry.register_project(owner, location("12.0,77.0"), name("Teak"), 40);
        assert_eq!(as_project, Err(RegistryError::AlreadyRegistered));

        let as_org = registry.register_org(owner, name("Mysore Mills"), Sector::Textiles, 800, 1000);
        assert_eq!(as_org, Err(RegistryError::AlreadyRegistered));
    }

    #[test]
    fn duplicate_name_rejected() {
        let mut registry = Registry::new();
        registry
            .register_org(
                AccountId::random(),
                name("Deccan Cement Works"),
                Sector::Cement,
                900,
                50_000,
            )
            .unwrap();

        let result = registry.register_org(
            AccountId::random(),
            name("Deccan Cement Works"),
            Sector::Cement,
            900,
            20_000,
        );
        assert_eq!(result, Err(RegistryError::DuplicateName));
    }

    #[test]
    fn zero_area_rejected() {
        let mut registry = Registry::new();
        let result = registry.register_project(
            AccountId::random(),
            location("11.0,76.9"),
            name("Teak"),
            0,
        );
        assert_eq!(result, Err(RegistryError::InvalidAmount));
    }
}
