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

//! Sector targets and the compliance arithmetic built on them.
//!
//! # Storage
//!
//! A map `sector → target intensity (×1000)`, mutable by the administrator
//! only. Sectors with no entry have a target of zero. Updates apply to
//! organizations registered afterwards; every organization keeps the target
//! captured at its registration.

use std::collections::BTreeMap;

use carbon_registry_core::state::Organization;
use carbon_registry_core::{Balance, Gei, Sector, UNITS};

pub struct SectorTargets {
    targets: BTreeMap<Sector, Gei>,
}

impl SectorTargets {
    pub fn new(initial: Vec<(Sector, Gei)>) -> Self {
        SectorTargets {
            targets: initial.into_iter().collect(),
        }
    }

    pub fn target(&self, sector: Sector) -> Gei {
        self.targets.get(&sector).copied().unwrap_or(0)
    }

    pub fn set_target(&mut self, sector: Sector, target_intensity: Gei) {
        self.targets.insert(sector, target_intensity);
    }
}

/// Credits an organization must burn to reach compliance, in ledger units:
/// `(actual − target) · annualProduction / 1000` whole credits.
///
/// Compliant organizations and organizations without a measured intensity
/// report a shortfall of zero.
pub fn shortfall(org: &Organization) -> Balance {
    if org.compliant {
        return 0;
    }
    match org.actual_intensity {
        Some(actual) if actual > org.target_intensity => {
            excess_credits(actual - org.target_intensity, org.annual_production_tonnes)
        }
        _ => 0,
    }
}

/// Credits minted to an organization that beat its target, in ledger units:
/// `(target − actual) · production / 1000` whole credits. Zero when the
/// target was not beaten.
pub fn surplus_reward(org: &Organization, production_tonnes: u64) -> Balance {
    match org.actual_intensity {
        Some(actual) if actual < org.target_intensity => {
            excess_credits(org.target_intensity - actual, production_tonnes)
        }
        _ => 0,
    }
}

/// Converts an intensity gap (×1000) over a production volume into ledger
/// units. Saturates instead of overflowing; a saturated shortfall can never
/// be covered and a saturated reward can never be minted, so either way the
/// ledger stays sound.
fn excess_credits(intensity_gap: Gei, production_tonnes: u64) -> Balance {
    (intensity_gap as Balance)
        .saturating_mul(production_tonnes as Balance)
        .saturating_mul(UNITS / 1000)
}
