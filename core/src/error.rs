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

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
/// Errors describing rejected Registry messages.
///
/// Every check of an operation is evaluated before any mutation. A rejected
/// message leaves all state untouched and appends nothing to the audit
/// trail.
pub enum RegistryError {
    Unauthorized = 0,
    AlreadyRegistered,
    DuplicateLocation,
    DuplicateName,
    InvalidSector,
    InvalidMeasurement,
    InvalidAmount,
    InsufficientBalance,
    AlreadyFulfilled,
    AlreadyCompliant,
    InexistentProject,
    InexistentOrganization,
    InexistentRequest,
}

impl From<RegistryError> for &'static str {
    fn from(error: RegistryError) -> &'static str {
        match error {
            RegistryError::Unauthorized => "The sender is not authorized for this operation",
            RegistryError::AlreadyRegistered => {
                "The sender identity is already registered as a participant."
            }
            RegistryError::DuplicateLocation => {
                "A project is already registered at the provided location."
            }
            RegistryError::DuplicateName => {
                "An organization with the same name already exists."
            }
            RegistryError::InvalidSector => "The provided sector is not a known sector.",
            RegistryError::InvalidMeasurement => {
                "A measurement input is zero, negative or out of range."
            }
            RegistryError::InvalidAmount => "The provided amount must be greater than zero.",
            RegistryError::InsufficientBalance => {
                "The account balance does not cover the requested amount."
            }
            RegistryError::AlreadyFulfilled => "The buy request was already fulfilled.",
            RegistryError::AlreadyCompliant => {
                "The organization is already compliant for this period."
            }
            RegistryError::InexistentProject => "The provided project does not exist.",
            RegistryError::InexistentOrganization => {
                "The provided organization does not exist."
            }
            RegistryError::InexistentRequest => "The provided buy request does not exist.",
        }
    }
}

impl core::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let description: &'static str = (*self).into();
        write!(f, "{}", description)
    }
}

impl std::error::Error for RegistryError {}
