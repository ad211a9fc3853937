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

//! Basic types used in the Carbon Credit Registry.

pub mod measurement;
pub mod message;
pub mod state;

mod account_id;
pub use account_id::AccountId;

pub mod string32;
pub use string32::String32;

mod location;
pub use location::Location;

mod sector;
pub use sector::Sector;

mod error;
pub use error::RegistryError;

/// Balance of credits held by an account, in ledger units.
///
/// One whole credit (one tonne of CO2 equivalent) is [UNITS] ledger units.
pub type Balance = u128;

/// One whole credit in ledger units. Credit quantities carry 18 decimal
/// places to avoid fractional arithmetic.
pub const UNITS: Balance = 1_000_000_000_000_000_000;

/// Emission-intensity score (GEI) of an organization, scaled ×1000.
///
/// A GEI of 1.25 tCO2e per tonne of product is stored as `1250`.
pub type Gei = u64;

/// The year a batch of credits was issued or an emissions figure was
/// measured. Credits of different vintages are fungible in value but
/// retired oldest first.
pub type VintageYear = u32;

/// Milliseconds since the Unix epoch, injected by the host on every call.
pub type Timestamp = u64;

/// Identifier of a buy request in the marketplace queue. Sequential,
/// immutable once assigned.
pub type RequestId = u64;
