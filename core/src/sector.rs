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

//! The closed set of industrial sectors covered by the trading scheme.

use parity_scale_codec as codec;

use crate::RegistryError;

/// Industrial sector an organization is regulated under.
///
/// Each sector has a target emission intensity set by the administrator.
/// The set is closed: registration with an unknown sector index fails with
/// [RegistryError::InvalidSector].
#[derive(
    codec::Decode, codec::Encode, Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash,
)]
pub enum Sector {
    Cement,
    IronAndSteel,
    Fertilizer,
    Petrochemical,
    ChlorAlkali,
    Aluminium,
    Copper,
    PulpAndPaper,
    Textiles,
}

impl Sector {
    pub const ALL: [Sector; 9] = [
        Sector::Cement,
        Sector::IronAndSteel,
        Sector::Fertilizer,
        Sector::Petrochemical,
        Sector::ChlorAlkali,
        Sector::Aluminium,
        Sector::Copper,
        Sector::PulpAndPaper,
        Sector::Textiles,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Sector::Cement => "Cement",
            Sector::IronAndSteel => "Iron & Steel",
            Sector::Fertilizer => "Fertilizer",
            Sector::Petrochemical => "Petrochemical",
            Sector::ChlorAlkali => "Chlor-Alkali",
            Sector::Aluminium => "Aluminium",
            Sector::Copper => "Copper",
            Sector::PulpAndPaper => "Pulp & Paper",
            Sector::Textiles => "Textiles",
        }
    }
}

impl core::convert::TryFrom<u8> for Sector {
    type Error = RegistryError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Sector::ALL
            .get(index as usize)
            .copied()
            .ok_or(RegistryError::InvalidSector)
    }
}

impl core::fmt::Display for Sector {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use core::convert::TryFrom;
    use parity_scale_codec::{Decode, Encode};

    #[test]
    fn sector_from_index() {
        assert_eq!(Sector::try_from(0), Ok(Sector::Cement));
        assert_eq!(Sector::try_from(8), Ok(Sector::Textiles));
        assert_eq!(Sector::try_from(9), Err(RegistryError::InvalidSector));
    }

    #[test]
    fn encode_then_decode() {
        for sector in Sector::ALL.iter() {
            let encoded = sector.encode();
            let decoded = Sector::decode(&mut &encoded[..]).unwrap();
            assert_eq!(*sector, decoded);
        }
    }

    #[test]
    fn decode_out_of_range() {
        let invalid = 200u8.encode();
        assert!(Sector::decode(&mut &invalid[..]).is_err());
    }
}
