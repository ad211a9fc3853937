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

//! `AccountId` is the externally-owned identity every registry entity is
//! keyed by.
//!
//! Key generation, signing and signature verification belong to the wallet
//! and submission layer. The registry only ever compares and stores these
//! identifiers.

use parity_scale_codec as codec;

/// Opaque, globally unique identifier of an account.
///
/// Displayed and parsed as 64 hexadecimal characters.
#[derive(
    codec::Decode, codec::Encode, Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash,
)]
pub struct AccountId([u8; 32]);

impl AccountId {
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        AccountId(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Deterministically derive an account ID from a seed string by cycling
    /// its bytes. Intended for tests and genesis configuration.
    pub fn from_seed(seed: &str) -> Self {
        let mut bytes = [0u8; 32];
        for (i, byte) in seed.as_bytes().iter().cycle().take(32).enumerate() {
            bytes[i] = *byte;
        }
        AccountId(bytes)
    }

    pub fn random() -> Self {
        AccountId(rand::random())
    }
}

impl core::fmt::Display for AccountId {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl core::str::FromStr for AccountId {
    type Err = InvalidAccountIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let data = hex::decode(s)
            .map_err(|_| InvalidAccountIdError("must be valid hexadecimal"))?;
        if data.len() != 32 {
            return Err(InvalidAccountIdError("must be exactly 32 bytes"));
        }
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&data);
        Ok(AccountId(bytes))
    }
}

/// Error type when parsing an [AccountId] from a string failed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvalidAccountIdError(&'static str);

impl std::fmt::Display for InvalidAccountIdError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> std::fmt::Result {
        write!(f, "InvalidAccountIdError({})", self.0)
    }
}

impl std::error::Error for InvalidAccountIdError {}

#[cfg(test)]
mod test {
    use super::*;
    use parity_scale_codec::{Decode, Encode};

    #[test]
    fn display_then_parse() {
        let account_id = AccountId::random();
        let displayed = account_id.to_string();
        assert_eq!(displayed.parse::<AccountId>().unwrap(), account_id);
    }

    #[test]
    fn parse_wrong_length() {
        assert!("0011aabb".parse::<AccountId>().is_err());
    }

    #[test]
    fn parse_invalid_hex() {
        let not_hex = "zz".repeat(32);
        assert!(not_hex.parse::<AccountId>().is_err());
    }

    #[test]
    fn from_seed_is_deterministic() {
        assert_eq!(AccountId::from_seed("bee-admin"), AccountId::from_seed("bee-admin"));
        assert_ne!(AccountId::from_seed("bee-admin"), AccountId::from_seed("auditor"));
    }

    #[test]
    fn encode_then_decode() {
        let account_id = AccountId::random();
        let encoded = account_id.encode();
        let decoded = AccountId::decode(&mut &encoded[..]).unwrap();
        assert_eq!(account_id, decoded);
    }
}
