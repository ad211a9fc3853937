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

//! Initial configuration of a registry instance.

use carbon_registry_core::{AccountId, Gei, Sector};

/// Configuration the registry is constructed with.
///
/// The administrator is fixed here and cannot be changed afterwards. Sector
/// targets may later be updated through
/// [carbon_registry_core::message::SetSectorTarget].
#[derive(Clone, Debug)]
pub struct GenesisConfig {
    /// The single administrator identity.
    pub admin: AccountId,
    /// Initial target intensity per sector. Sectors not listed start with a
    /// target of zero.
    pub sector_targets: Vec<(Sector, Gei)>,
}

impl GenesisConfig {
    pub fn new(admin: AccountId) -> Self {
        GenesisConfig {
            admin,
            sector_targets: Vec::new(),
        }
    }

    pub fn with_sector_target(mut self, sector: Sector, target_intensity: Gei) -> Self {
        self.sector_targets.push((sector, target_intensity));
        self
    }
}
