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

//! Defines the [Message] trait and implementations for all messages in
//! `carbon_registry_core::message`.

use parity_scale_codec::{Decode, Encode};

pub use carbon_registry_core::message::*;
use carbon_registry_core::{message, Balance, RequestId};
use carbon_registry_runtime::{Call as RuntimeCall, Event};

#[derive(thiserror::Error, Debug)]
pub enum EventExtractionError {
    #[error("Required event is missing")]
    EventMissing,
}

/// Trait implemented for every runtime message.
///
/// For every [RuntimeCall] that is exposed to the user we implement
/// [Message] for the parameter struct of the runtime message.
pub trait Message: Encode + Decode + Send + 'static {
    /// Output of a successfully applied message.
    ///
    /// This value is extracted from the events emitted when the message was
    /// applied.
    type Output: Send + 'static;

    /// Parse the runtime events emitted by the message and extract the
    /// message output.
    ///
    /// Returns an error if the event list of a successful message is not
    /// well formed, i.e. the expected event is missing.
    fn output_from_events(events: &[Event]) -> Result<Self::Output, EventExtractionError>;

    fn into_runtime_call(self) -> RuntimeCall;
}

impl Message for message::RegisterProject {
    type Output = ();

    fn output_from_events(events: &[Event]) -> Result<Self::Output, EventExtractionError> {
        extract_output(events, |event| match event {
            Event::ProjectRegistered { .. } => Some(()),
            _ => None,
        })
    }

    fn into_runtime_call(self) -> RuntimeCall {
        self.into()
    }
}

impl Message for message::RegisterOrg {
    type Output = ();

    fn output_from_events(events: &[Event]) -> Result<Self::Output, EventExtractionError> {
        extract_output(events, |event| match event {
            Event::OrganizationRegistered { .. } => Some(()),
            _ => None,
        })
    }

    fn into_runtime_call(self) -> RuntimeCall {
        self.into()
    }
}

impl Message for message::AccreditAuditor {
    type Output = ();

    fn output_from_events(events: &[Event]) -> Result<Self::Output, EventExtractionError> {
        extract_output(events, |event| match event {
            Event::AuditorAccredited { .. } => Some(()),
            _ => None,
        })
    }

    fn into_runtime_call(self) -> RuntimeCall {
        self.into()
    }
}

impl Message for message::SetSectorTarget {
    type Output = ();

    fn output_from_events(events: &[Event]) -> Result<Self::Output, EventExtractionError> {
        extract_output(events, |event| match event {
            Event::SectorTargetSet { .. } => Some(()),
            _ => None,
        })
    }

    fn into_runtime_call(self) -> RuntimeCall {
        self.into()
    }
}

impl Message for message::IssueCredits {
    /// The amount of credits minted to the project, in ledger units.
    type Output = Balance;

    fn output_from_events(events: &[Event]) -> Result<Self::Output, EventExtractionError> {
        extract_output(events, |event| match event {
            Event::CreditsMinted { amount, .. } => Some(*amount),
            _ => None,
        })
    }

    fn into_runtime_call(self) -> RuntimeCall {
        self.into()
    }
}

impl Message for message::UpdateEmissions {
    /// The reward minted for beating the sector target, in ledger units.
    /// Zero when the organization did not beat its target.
    type Output = Balance;

    fn output_from_events(events: &[Event]) -> Result<Self::Output, EventExtractionError> {
        extract_output(events, |event| match event {
            Event::ComplianceUpdated { reward_minted, .. } => Some(*reward_minted),
            _ => None,
        })
    }

    fn into_runtime_call(self) -> RuntimeCall {
        self.into()
    }
}

impl Message for message::SettleCompliance {
    /// The amount of credits burned to settle, in ledger units.
    type Output = Balance;

    fn output_from_events(events: &[Event]) -> Result<Self::Output, EventExtractionError> {
        extract_output(events, |event| match event {
            Event::ComplianceSettled { burned, .. } => Some(*burned),
            _ => None,
        })
    }

    fn into_runtime_call(self) -> RuntimeCall {
        self.into()
    }
}

impl Message for message::PostBuyRequest {
    /// The id assigned to the new request.
    type Output = RequestId;

    fn output_from_events(events: &[Event]) -> Result<Self::Output, EventExtractionError> {
        extract_output(events, |event| match event {
            Event::BuyRequestCreated { request_id, .. } => Some(*request_id),
            _ => None,
        })
    }

    fn into_runtime_call(self) -> RuntimeCall {
        self.into()
    }
}

impl Message for message::FulfillRequest {
    type Output = ();

    fn output_from_events(events: &[Event]) -> Result<Self::Output, EventExtractionError> {
        extract_output(events, |event| match event {
            Event::RequestFulfilled { .. } => Some(()),
            _ => None,
        })
    }

    fn into_runtime_call(self) -> RuntimeCall {
        self.into()
    }
}

/// Run `f` on all events to extract the message output. If `f` returns
/// [None] for all events an [EventExtractionError::EventMissing] error is
/// returned.
fn extract_output<T>(
    events: &[Event],
    f: impl Fn(&Event) -> Option<T>,
) -> Result<T, EventExtractionError> {
    events
        .iter()
        .find_map(f)
        .ok_or(EventExtractionError::EventMissing)
}
