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

//! Provides the in-memory emulator behind [crate::Client::new_emulator].

use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use parity_scale_codec::{Decode, Encode};

use carbon_registry_core::{AccountId, Timestamp};
use carbon_registry_runtime::{GenesisConfig, Runtime};

use crate::error::Error;
use crate::interface::TransactionIncluded;
use crate::message::Message;

/// The native runtime and the host clock, applied to under a mutex so that
/// messages are serialized and each one runs to completion before the next.
pub(crate) struct Emulator {
    state: Arc<Mutex<EmulatorState>>,
}

struct EmulatorState {
    runtime: Runtime,
    /// The timestamp injected into the previous message. The host clock is
    /// clamped to it so injected time never steps backwards.
    last_timestamp: Timestamp,
}

impl Emulator {
    pub fn new(genesis: GenesisConfig) -> Self {
        Emulator {
            state: Arc::new(Mutex::new(EmulatorState {
                runtime: Runtime::new(genesis),
                last_timestamp: 0,
            })),
        }
    }

    /// Runs `f` on the locked state.
    pub fn with_state<T>(&self, f: impl FnOnce(&Runtime) -> T) -> Result<T, Error> {
        let state = self.state.lock().map_err(|_| Error::StateLockPoisoned)?;
        Ok(f(&state.runtime))
    }

    pub fn submit<Message_: Message>(
        &self,
        author: &AccountId,
        message: Message_,
    ) -> Result<TransactionIncluded<Message_>, Error> {
        // Round-trip the message through its wire encoding, the same way a
        // remote host would receive it.
        let encoded = message.encode();
        let message = Message_::decode(&mut encoded.as_slice())?;

        let mut state = self.state.lock().map_err(|_| Error::StateLockPoisoned)?;
        let now = host_time().max(state.last_timestamp);
        state.last_timestamp = now;

        let applied = state
            .runtime
            .apply(*author, now, message.into_runtime_call());
        log::debug!(
            "applied message from {}: result {:?}, {} event(s)",
            author,
            applied.result,
            applied.events.len()
        );

        let result = match applied.result {
            Ok(()) => Ok(Message_::output_from_events(&applied.events)?),
            Err(registry_error) => Err(registry_error),
        };
        Ok(TransactionIncluded {
            events: applied.events,
            result,
        })
    }
}

impl Clone for Emulator {
    fn clone(&self) -> Self {
        Emulator {
            state: Arc::clone(&self.state),
        }
    }
}

fn host_time() -> Timestamp {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as Timestamp)
        .unwrap_or(0)
}
