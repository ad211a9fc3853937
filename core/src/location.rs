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

//! `Location` is the GPS coordinate pair a forestry project is registered
//! at. It is globally unique: two projects can never share a location.

use parity_scale_codec as codec;

/// A validated `"latitude,longitude"` coordinate string in decimal form,
/// for example `"21.1458,79.0882"`.
#[derive(codec::Encode, Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub struct Location(String);

impl Location {
    fn from_string(input: String) -> Result<Self, InvalidLocationError> {
        if input.is_empty() {
            return Err(InvalidLocationError("must not be empty"));
        }
        if input.len() > 64 {
            return Err(InvalidLocationError("must not exceed 64 characters"));
        }

        let mut parts = input.split(',');
        let latitude = parts.next().unwrap_or("");
        let longitude = parts.next().unwrap_or("");
        if parts.next().is_some() {
            return Err(InvalidLocationError(
                "must contain exactly one ',' separating latitude and longitude",
            ));
        }
        validate_coordinate(latitude)?;
        validate_coordinate(longitude)?;

        Ok(Location(input))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A coordinate is an optional `-` followed by digits with at most one
/// decimal point.
fn validate_coordinate(coordinate: &str) -> Result<(), InvalidLocationError> {
    let digits = coordinate.strip_prefix('-').unwrap_or(coordinate);
    if digits.is_empty() {
        return Err(InvalidLocationError("coordinate must not be empty"));
    }
    if digits.chars().filter(|c| *c == '.').count() > 1 {
        return Err(InvalidLocationError(
            "coordinate must have at most one decimal point",
        ));
    }
    if digits.starts_with('.') || digits.ends_with('.') {
        return Err(InvalidLocationError(
            "coordinate must not start or end with a decimal point",
        ));
    }
    if !digits.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return Err(InvalidLocationError(
            "coordinate must only include digits, '.' and a leading '-'",
        ));
    }
    Ok(())
}

impl codec::Decode for Location {
    fn decode<I: codec::Input>(input: &mut I) -> Result<Self, codec::Error> {
        let decoded: String = String::decode(input)?;

        match Location::from_string(decoded) {
            Ok(location) => Ok(location),
            Err(err) => Err(codec::Error::from(err.what())),
        }
    }
}

impl Into<String> for Location {
    fn into(self) -> String {
        self.0
    }
}

impl core::convert::TryFrom<String> for Location {
    type Error = InvalidLocationError;

    fn try_from(input: String) -> Result<Self, Self::Error> {
        Self::from_string(input)
    }
}

impl core::convert::TryFrom<&str> for Location {
    type Error = InvalidLocationError;

    fn try_from(input: &str) -> Result<Self, Self::Error> {
        Self::from_string(input.into())
    }
}

impl core::str::FromStr for Location {
    type Err = InvalidLocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s.to_string())
    }
}

impl core::fmt::Display for Location {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type when conversion from an input failed.
#[derive(codec::Encode, Clone, Debug, Eq, PartialEq)]
pub struct InvalidLocationError(&'static str);

impl InvalidLocationError {
    /// Error description
    pub fn what(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for InvalidLocationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> std::fmt::Result {
        write!(f, "InvalidLocationError({})", self.0)
    }
}

impl std::error::Error for InvalidLocationError {}
