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

//! Measurement inputs submitted by accredited auditors and the pure
//! formulas converting them into credit amounts and intensity scores.
//!
//! The formulas are deterministic and free of side effects so that the
//! compliance engine and any UI preview arrive at the same figures.

use parity_scale_codec::{Decode, Encode};

use crate::{Balance, Gei, RegistryError, UNITS};

/// Wood density factor of the allometric biomass model.
pub const WOOD_DENSITY_FACTOR: u128 = 50;

/// Tonnes of CO2 equivalent bound per tonne of dry biomass, scaled ×100
/// (i.e. 3.67 tCO2e/t).
pub const CO2_EQUIVALENCE_FACTOR: u128 = 367;

/// Kilograms of CO2 equivalent per tonne of coal consumed, scaled ×100
/// (2.42 tCO2e/t).
pub const COAL_EMISSION_FACTOR: u128 = 242_000;

/// Grams of CO2 equivalent per kWh of grid electricity, scaled so that the
/// sum of all three terms shares a common ×100_000 scale (0.82 kgCO2e/kWh).
pub const ELECTRICITY_EMISSION_FACTOR: u128 = 82;

/// Kilograms of CO2 equivalent per tonne of limestone calcined, scaled ×100
/// (0.44 tCO2e/t).
pub const LIMESTONE_EMISSION_FACTOR: u128 = 44_000;

/// Field measurements of a forestry project sample plot.
///
/// Submitted with [crate::message::IssueCredits]. All inputs must be
/// strictly positive.
#[derive(Decode, Encode, Clone, Copy, Debug, Eq, PartialEq)]
pub struct ForestMeasurement {
    /// Average trunk diameter at breast height, in millimeters.
    pub avg_trunk_diameter_mm: u64,
    /// Average tree height, in centimeters.
    pub avg_height_cm: u64,
    /// Number of trees in the sample.
    pub sample_count: u64,
    /// Dry-biomass expansion factor as a fraction scaled ×100
    /// (0.60 is submitted as 60).
    pub biomass_factor: u64,
}

impl ForestMeasurement {
    /// Estimated sequestration of the sampled stand in ledger units.
    ///
    /// `diameter · height · count · factor · 50 · 367 / 10^12` whole
    /// credits; multiplying by [UNITS] instead of dividing keeps the result
    /// exact: `credits = diameter · height · count · factor · 50 · 367 · 10^6`.
    ///
    /// Fails with [RegistryError::InvalidMeasurement] if any input is zero
    /// or the product overflows.
    pub fn sequestered_credits(&self) -> Result<Balance, RegistryError> {
        if self.avg_trunk_diameter_mm == 0
            || self.avg_height_cm == 0
            || self.sample_count == 0
            || self.biomass_factor == 0
        {
            return Err(RegistryError::InvalidMeasurement);
        }

        (self.avg_trunk_diameter_mm as u128)
            .checked_mul(self.avg_height_cm as u128)
            .and_then(|product| product.checked_mul(self.sample_count as u128))
            .and_then(|product| product.checked_mul(self.biomass_factor as u128))
            .and_then(|product| product.checked_mul(WOOD_DENSITY_FACTOR))
            .and_then(|product| product.checked_mul(CO2_EQUIVALENCE_FACTOR))
            .and_then(|product| product.checked_mul(UNITS / 1_000_000_000_000))
            .ok_or(RegistryError::InvalidMeasurement)
    }
}

/// One reporting period of an organization's verified emission inputs.
///
/// Submitted with [crate::message::UpdateEmissions].
#[derive(Decode, Encode, Clone, Copy, Debug, Eq, PartialEq)]
pub struct EmissionReport {
    /// Coal consumed, in tonnes.
    pub coal_tonnes: u64,
    /// Grid electricity purchased, in kWh.
    pub electricity_kwh: u64,
    /// Limestone processed, in tonnes.
    pub limestone_tonnes: u64,
    /// Total finished product, in tonnes.
    pub total_production_tonnes: u64,
}

impl EmissionReport {
    /// Emission intensity of the period, scaled ×1000 (tCO2e per tonne of
    /// product).
    ///
    /// Fails with [RegistryError::InvalidMeasurement] if production is zero
    /// (division by zero) or the result does not fit the intensity range.
    pub fn intensity(&self) -> Result<Gei, RegistryError> {
        if self.total_production_tonnes == 0 {
            return Err(RegistryError::InvalidMeasurement);
        }

        let emissions = (self.coal_tonnes as u128)
            .checked_mul(COAL_EMISSION_FACTOR)
            .and_then(|coal| {
                (self.electricity_kwh as u128)
                    .checked_mul(ELECTRICITY_EMISSION_FACTOR)
                    .and_then(|electricity| coal.checked_add(electricity))
            })
            .and_then(|sum| {
                (self.limestone_tonnes as u128)
                    .checked_mul(LIMESTONE_EMISSION_FACTOR)
                    .and_then(|limestone| sum.checked_add(limestone))
            })
            .ok_or(RegistryError::InvalidMeasurement)?;

        let intensity = emissions / (100 * self.total_production_tonnes as u128);
        Gei::try_from_u128(intensity)
    }
}

trait TryFromU128: Sized {
    fn try_from_u128(value: u128) -> Result<Self, RegistryError>;
}

impl TryFromU128 for Gei {
    fn try_from_u128(value: u128) -> Result<Self, RegistryError> {
        core::convert::TryFrom::try_from(value).map_err(|_| RegistryError::InvalidMeasurement)
    }
}
