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

//! Miscellaneous helpers used throughout Registry tests.

use std::convert::TryFrom;

use rand::distributions::Alphanumeric;
use rand::Rng;

use carbon_registry_client::*;
use carbon_registry_core::measurement::ForestMeasurement;
use carbon_registry_runtime::GenesisConfig;

/// Target intensity every sector starts with in test genesis, ×1000.
pub const DEFAULT_SECTOR_TARGET: Gei = 900;

/// Create an emulator client with a random administrator and the
/// [DEFAULT_SECTOR_TARGET] for every sector. Returns the client and the
/// administrator account.
pub fn new_emulator() -> (Client, AccountId) {
    let _ = env_logger::builder().is_test(true).try_init();
    let admin = AccountId::random();
    let mut genesis = GenesisConfig::new(admin);
    for sector in Sector::ALL.iter() {
        genesis = genesis.with_sector_target(*sector, DEFAULT_SECTOR_TARGET);
    }
    (Client::new_emulator(genesis), admin)
}

/// Submit a message and wait for the registry to process it.
///
/// Panics if submission errors. Whether the message was applied is reported
/// in the returned [TransactionIncluded::result].
pub async fn submit_ok<Message_: Message>(
    client: &Client,
    author: &AccountId,
    message: Message_,
) -> TransactionIncluded<Message_> {
    client.submit_message(author, message).await.unwrap()
}

/// Register a random project and return its owner account.
pub async fn register_random_project(client: &Client) -> AccountId {
    let owner = AccountId::random();
    let tx_included = submit_ok(&client, &owner, random_register_project_message()).await;
    assert_eq!(tx_included.result, Ok(()), "Failed to register a project.");
    owner
}

/// Register a random organization in the given sector and return its owner
/// account.
pub async fn register_random_org(client: &Client, sector: Sector) -> AccountId {
    let owner = AccountId::random();
    let tx_included = submit_ok(&client, &owner, random_register_org_message(sector)).await;
    assert_eq!(
        tx_included.result,
        Ok(()),
        "Failed to register an organization."
    );
    owner
}

/// Accredit a fresh random auditor and return its account.
pub async fn accredit_random_auditor(client: &Client, admin: &AccountId) -> AccountId {
    let auditor = AccountId::random();
    let tx_included = submit_ok(&client, &admin, message::AccreditAuditor { auditor }).await;
    assert_eq!(tx_included.result, Ok(()), "Failed to accredit an auditor.");
    auditor
}

/// Create a [message::RegisterProject] with random parameters.
pub fn random_register_project_message() -> message::RegisterProject {
    message::RegisterProject {
        location: random_location(),
        species: random_species(),
        area_hectares: rand::thread_rng().gen_range(10, 500),
    }
}

/// Create a [message::RegisterOrg] with random parameters.
pub fn random_register_org_message(sector: Sector) -> message::RegisterOrg {
    message::RegisterOrg {
        name: random_org_name(),
        sector,
        annual_production_tonnes: rand::thread_rng().gen_range(1_000, 100_000),
    }
}

/// The field measurement used as the reference issuance in tests.
/// Yields 206.4375 credits.
pub fn reference_forest_measurement() -> ForestMeasurement {
    ForestMeasurement {
        avg_trunk_diameter_mm: 250,
        avg_height_cm: 1500,
        sample_count: 500,
        biomass_factor: 60,
    }
}

pub fn random_location() -> Location {
    let mut rng = rand::thread_rng();
    let coordinates = format!(
        "{}.{:04},{}.{:04}",
        rng.gen_range(-89i32, 90),
        rng.gen_range(0u32, 10_000),
        rng.gen_range(-179i32, 180),
        rng.gen_range(0u32, 10_000),
    );
    Location::try_from(coordinates).unwrap()
}

pub fn random_species() -> String32 {
    let species = [
        "Tectona grandis",
        "Shorea robusta",
        "Dalbergia sissoo",
        "Azadirachta indica",
        "Bambusa vulgaris",
    ];
    let pick = species[rand::thread_rng().gen_range(0, species.len())];
    String32::from_string(pick.to_string()).unwrap()
}

pub fn random_org_name() -> String32 {
    String32::from_string(format!("Org {}", random_alnum_string(12))).unwrap()
}

pub fn random_alnum_string(size: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(size)
        .collect::<String>()
}
