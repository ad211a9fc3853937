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

//! The tests in this module concern emission updates, sector targets and
//! compliance settlement.

use carbon_registry_client::measurement::{EmissionReport, ForestMeasurement};
use carbon_registry_client::*;
use carbon_registry_test_utils::*;

/// Registers an organization with a production volume of 1,000t in the
/// Cement sector, so one intensity point (×1000) over or under the target
/// translates into exactly one credit.
async fn register_small_cement_org(client: &Client) -> AccountId {
    let owner = AccountId::random();
    let tx_included = submit_ok(
        &client,
        &owner,
        message::RegisterOrg {
            name: random_org_name(),
            sector: Sector::Cement,
            annual_production_tonnes: 1_000,
        },
    )
    .await;
    assert_eq!(tx_included.result, Ok(()));
    owner
}

/// 500t of coal over 1,000t of product: intensity 1.210, i.e. 0.310 over
/// the default target of 0.9.
fn over_target_report() -> EmissionReport {
    EmissionReport {
        coal_tonnes: 500,
        electricity_kwh: 0,
        limestone_tonnes: 0,
        total_production_tonnes: 1_000,
    }
}

#[async_std::test]
async fn update_emissions_over_target() {
    let (client, admin) = new_emulator();
    let auditor = accredit_random_auditor(&client, &admin).await;
    let org = register_small_cement_org(&client).await;

    let tx_included = submit_ok(
        &client,
        &auditor,
        message::UpdateEmissions {
            org,
            report: over_target_report(),
            vintage_year: 2024,
        },
    )
    .await;
    assert_eq!(tx_included.result, Ok(0), "No reward expected");
    assert!(tx_included.events.contains(&Event::ComplianceUpdated {
        org,
        actual_intensity: 1210,
        compliant: false,
        reward_minted: 0,
    }));

    let updated = client.get_org(&org).await.unwrap().unwrap();
    assert_eq!(updated.actual_intensity, Some(1210));
    assert!(!updated.compliant);
    assert_eq!(
        client.calculate_shortfall(&org).await.unwrap(),
        Some(310 * UNITS)
    );
}

#[async_std::test]
async fn update_emissions_below_target_mints_reward() {
    let (client, admin) = new_emulator();
    let auditor = accredit_random_auditor(&client, &admin).await;
    let org = register_small_cement_org(&client).await;

    // 100t of coal over 1,000t of product: intensity 0.242, beating the
    // target by 0.658 and earning 658 credits.
    let tx_included = submit_ok(
        &client,
        &auditor,
        message::UpdateEmissions {
            org,
            report: EmissionReport {
                coal_tonnes: 100,
                electricity_kwh: 0,
                limestone_tonnes: 0,
                total_production_tonnes: 1_000,
            },
            vintage_year: 2024,
        },
    )
    .await;
    assert_eq!(tx_included.result, Ok(658 * UNITS));
    assert!(tx_included.events.contains(&Event::ComplianceUpdated {
        org,
        actual_intensity: 242,
        compliant: true,
        reward_minted: 658 * UNITS,
    }));

    assert_eq!(client.balance_of(&org).await.unwrap(), 658 * UNITS);
    assert_eq!(
        client.vintage_balances(&org).await.unwrap(),
        vec![(2024, 658 * UNITS)]
    );
    assert_eq!(client.calculate_shortfall(&org).await.unwrap(), Some(0));
}

#[async_std::test]
async fn update_emissions_with_zero_production() {
    let (client, admin) = new_emulator();
    let auditor = accredit_random_auditor(&client, &admin).await;
    let org = register_small_cement_org(&client).await;

    let tx_included = submit_ok(
        &client,
        &auditor,
        message::UpdateEmissions {
            org,
            report: EmissionReport {
                coal_tonnes: 500,
                electricity_kwh: 0,
                limestone_tonnes: 0,
                total_production_tonnes: 0,
            },
            vintage_year: 2024,
        },
    )
    .await;
    assert_eq!(tx_included.result, Err(RegistryError::InvalidMeasurement));
    let untouched = client.get_org(&org).await.unwrap().unwrap();
    assert_eq!(untouched.actual_intensity, None);
    assert!(client.get_audit_history().await.unwrap().is_empty());
}

#[async_std::test]
async fn update_emissions_of_unknown_org() {
    let (client, admin) = new_emulator();
    let auditor = accredit_random_auditor(&client, &admin).await;

    let tx_included = submit_ok(
        &client,
        &auditor,
        message::UpdateEmissions {
            org: AccountId::random(),
            report: over_target_report(),
            vintage_year: 2024,
        },
    )
    .await;
    assert_eq!(
        tx_included.result,
        Err(RegistryError::InexistentOrganization)
    );
}

#[async_std::test]
async fn settle_compliance() {
    let (client, admin) = new_emulator();
    let auditor = accredit_random_auditor(&client, &admin).await;
    let org = register_small_cement_org(&client).await;
    let project = register_random_project(&client).await;

    // 412.875 credits issued to the project so it can cover the buy
    // request below.
    submit_ok(
        &client,
        &auditor,
        message::IssueCredits {
            project,
            measurement: ForestMeasurement {
                sample_count: 1_000,
                ..reference_forest_measurement()
            },
            vintage_year: 2023,
        },
    )
    .await;
    submit_ok(
        &client,
        &auditor,
        message::UpdateEmissions {
            org,
            report: over_target_report(),
            vintage_year: 2024,
        },
    )
    .await;
    assert_eq!(
        client.calculate_shortfall(&org).await.unwrap(),
        Some(310 * UNITS)
    );

    // The org covers its shortfall by buying 350 credits on the market.
    let request_id = submit_ok(
        &client,
        &org,
        message::PostBuyRequest {
            amount: 350 * UNITS,
        },
    )
    .await
    .result
    .unwrap();
    submit_ok(&client, &project, message::FulfillRequest { request_id }).await;
    assert_eq!(client.balance_of(&org).await.unwrap(), 350 * UNITS);

    let supply_before = client.total_supply().await.unwrap();
    let tx_included = submit_ok(
        &client,
        &org,
        message::SettleCompliance { year: 2024 },
    )
    .await;
    assert_eq!(tx_included.result, Ok(310 * UNITS));
    assert!(tx_included.events.contains(&Event::CreditsBurned {
        account: org,
        amount: 310 * UNITS,
        vintage_year: 2023,
    }));
    assert!(tx_included.events.contains(&Event::ComplianceSettled {
        org,
        year: 2024,
        burned: 310 * UNITS,
    }));

    let settled = client.get_org(&org).await.unwrap().unwrap();
    assert!(settled.compliant);
    assert_eq!(settled.last_settlement_year, Some(2024));
    assert_eq!(client.calculate_shortfall(&org).await.unwrap(), Some(0));
    assert_eq!(client.balance_of(&org).await.unwrap(), 40 * UNITS);
    assert_eq!(
        client.total_supply().await.unwrap(),
        supply_before - 310 * UNITS
    );

    // Settling again must fail loudly instead of silently burning zero.
    let tx_included = submit_ok(
        &client,
        &org,
        message::SettleCompliance { year: 2024 },
    )
    .await;
    assert_eq!(tx_included.result, Err(RegistryError::AlreadyCompliant));
}

#[async_std::test]
async fn settle_compliance_with_insufficient_balance() {
    let (client, admin) = new_emulator();
    let auditor = accredit_random_auditor(&client, &admin).await;
    let org = register_small_cement_org(&client).await;

    submit_ok(
        &client,
        &auditor,
        message::UpdateEmissions {
            org,
            report: over_target_report(),
            vintage_year: 2024,
        },
    )
    .await;

    let tx_included = submit_ok(
        &client,
        &org,
        message::SettleCompliance { year: 2024 },
    )
    .await;
    assert_eq!(tx_included.result, Err(RegistryError::InsufficientBalance));
    assert!(tx_included.events.is_empty());

    let untouched = client.get_org(&org).await.unwrap().unwrap();
    assert!(!untouched.compliant);
    assert_eq!(untouched.last_settlement_year, None);
    assert_eq!(client.balance_of(&org).await.unwrap(), 0);
}

#[async_std::test]
async fn sector_target_updates_apply_to_new_registrants_only() {
    let (client, admin) = new_emulator();
    let early = register_random_org(&client, Sector::Petrochemical).await;

    let tx_included = submit_ok(
        &client,
        &admin,
        message::SetSectorTarget {
            sector: Sector::Petrochemical,
            target_intensity: 700,
        },
    )
    .await;
    assert_eq!(tx_included.result, Ok(()));
    assert_eq!(
        client.get_sector_target(Sector::Petrochemical).await.unwrap(),
        700
    );

    let late = register_random_org(&client, Sector::Petrochemical).await;
    let early_org = client.get_org(&early).await.unwrap().unwrap();
    let late_org = client.get_org(&late).await.unwrap().unwrap();
    assert_eq!(early_org.target_intensity, DEFAULT_SECTOR_TARGET);
    assert_eq!(late_org.target_intensity, 700);
}

#[async_std::test]
async fn set_sector_target_requires_admin() {
    let (client, _admin) = new_emulator();
    let outsider = AccountId::random();

    let tx_included = submit_ok(
        &client,
        &outsider,
        message::SetSectorTarget {
            sector: Sector::Copper,
            target_intensity: 100,
        },
    )
    .await;
    assert_eq!(tx_included.result, Err(RegistryError::Unauthorized));
    assert_eq!(
        client.get_sector_target(Sector::Copper).await.unwrap(),
        DEFAULT_SECTOR_TARGET
    );
}
