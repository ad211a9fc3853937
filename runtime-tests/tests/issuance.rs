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

//! The tests in this module concern credit issuance to forestry projects.

use carbon_registry_client::measurement::ForestMeasurement;
use carbon_registry_client::*;
use carbon_registry_test_utils::*;

/// The credits of [reference_forest_measurement], in ledger units.
const REFERENCE_CREDITS: Balance = 206_437_500_000_000_000_000;

#[async_std::test]
async fn issue_credits() {
    let (client, admin) = new_emulator();
    let auditor = accredit_random_auditor(&client, &admin).await;
    let project = register_random_project(&client).await;
    let species = client
        .get_project(&project)
        .await
        .unwrap()
        .unwrap()
        .species;

    let tx_included = submit_ok(
        &client,
        &auditor,
        message::IssueCredits {
            project,
            measurement: reference_forest_measurement(),
            vintage_year: 2024,
        },
    )
    .await;
    assert_eq!(tx_included.result, Ok(REFERENCE_CREDITS));
    assert!(tx_included.events.contains(&Event::CreditsMinted {
        account: project,
        amount: REFERENCE_CREDITS,
        vintage_year: 2024,
    }));

    assert_eq!(client.balance_of(&project).await.unwrap(), REFERENCE_CREDITS);
    assert_eq!(
        client.vintage_balances(&project).await.unwrap(),
        vec![(2024, REFERENCE_CREDITS)]
    );
    assert_eq!(client.total_supply().await.unwrap(), REFERENCE_CREDITS);

    let updated = client.get_project(&project).await.unwrap().unwrap();
    assert_eq!(updated.cumulative_credits_issued, REFERENCE_CREDITS);
    assert_eq!(updated.last_audit.unwrap().main_species, species);
}

#[async_std::test]
async fn issue_credits_accumulates_across_vintages() {
    let (client, admin) = new_emulator();
    let auditor = accredit_random_auditor(&client, &admin).await;
    let project = register_random_project(&client).await;

    for vintage_year in &[2023, 2024] {
        let tx_included = submit_ok(
            &client,
            &auditor,
            message::IssueCredits {
                project,
                measurement: reference_forest_measurement(),
                vintage_year: *vintage_year,
            },
        )
        .await;
        assert_eq!(tx_included.result, Ok(REFERENCE_CREDITS));
    }

    assert_eq!(
        client.balance_of(&project).await.unwrap(),
        2 * REFERENCE_CREDITS
    );
    assert_eq!(
        client.vintage_balances(&project).await.unwrap(),
        vec![(2023, REFERENCE_CREDITS), (2024, REFERENCE_CREDITS)]
    );
    let updated = client.get_project(&project).await.unwrap().unwrap();
    assert_eq!(updated.cumulative_credits_issued, 2 * REFERENCE_CREDITS);
}

#[async_std::test]
async fn issue_credits_unauthorized() {
    let (client, _admin) = new_emulator();
    let project = register_random_project(&client).await;

    let outsider = AccountId::random();
    let tx_included = submit_ok(
        &client,
        &outsider,
        message::IssueCredits {
            project,
            measurement: reference_forest_measurement(),
            vintage_year: 2024,
        },
    )
    .await;
    assert_eq!(tx_included.result, Err(RegistryError::Unauthorized));
    assert_eq!(client.balance_of(&project).await.unwrap(), 0);
    assert!(client.get_audit_history().await.unwrap().is_empty());
}

#[async_std::test]
async fn issue_credits_invalid_measurement() {
    let (client, admin) = new_emulator();
    let auditor = accredit_random_auditor(&client, &admin).await;
    let project = register_random_project(&client).await;

    let tx_included = submit_ok(
        &client,
        &auditor,
        message::IssueCredits {
            project,
            measurement: ForestMeasurement {
                sample_count: 0,
                ..reference_forest_measurement()
            },
            vintage_year: 2024,
        },
    )
    .await;
    assert_eq!(tx_included.result, Err(RegistryError::InvalidMeasurement));

    assert_eq!(client.balance_of(&project).await.unwrap(), 0);
    let untouched = client.get_project(&project).await.unwrap().unwrap();
    assert_eq!(untouched.cumulative_credits_issued, 0);
    assert_eq!(untouched.last_audit, None);
    assert!(client.get_audit_history().await.unwrap().is_empty());
}

#[async_std::test]
async fn issue_credits_to_unknown_project() {
    let (client, admin) = new_emulator();
    let auditor = accredit_random_auditor(&client, &admin).await;

    let tx_included = submit_ok(
        &client,
        &auditor,
        message::IssueCredits {
            project: AccountId::random(),
            measurement: reference_forest_measurement(),
            vintage_year: 2024,
        },
    )
    .await;
    assert_eq!(tx_included.result, Err(RegistryError::InexistentProject));
    assert_eq!(client.total_supply().await.unwrap(), 0);
}

#[async_std::test]
async fn accredit_auditor_requires_admin() {
    let (client, _admin) = new_emulator();
    let outsider = AccountId::random();
    let auditor = AccountId::random();

    let tx_included = submit_ok(
        &client,
        &outsider,
        message::AccreditAuditor { auditor },
    )
    .await;
    assert_eq!(tx_included.result, Err(RegistryError::Unauthorized));
    assert!(!client.is_accredited_auditor(&auditor).await.unwrap());
}
