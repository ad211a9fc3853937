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

use parity_scale_codec::Error as CodecError;

use crate::message::EventExtractionError;

/// Error that may be returned by any of the [crate::ClientT] methods.
///
/// Message rejections by the registry itself are not client errors; they
/// are reported in [crate::TransactionIncluded::result].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Encoding or decoding a submitted message failed
    #[error("Encoding or decoding a submitted message failed")]
    Codec(#[from] CodecError),

    /// The in-memory registry state is poisoned by a panicked submission
    #[error("The in-memory registry state is poisoned by a panicked submission")]
    StateLockPoisoned,

    /// Failed to extract the required events for a submitted message
    #[error("Failed to extract the required events for a submitted message")]
    EventExtraction(#[from] EventExtractionError),
}
