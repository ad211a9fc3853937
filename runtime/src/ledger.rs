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

//! The vintage-partitioned credit ledger.
//!
//! # Storage
//!
//! Balances are stored as a map `account → (vintage year → balance)`. The
//! total balance of an account is always derived from its per-vintage
//! balances, never stored. Zero per-vintage balances are removed.
//!
//! # Invariants
//!
//! * Conservation: the sum of all balances equals total minted minus total
//!   burned, after every operation.
//! * Burns and transfers that span several vintages draw from the oldest
//!   vintage first.
//! * A failed operation leaves every balance unchanged.

use std::collections::BTreeMap;

use carbon_registry_core::{AccountId, Balance, RegistryError, VintageYear};

pub struct VintageLedger {
    balances: BTreeMap<AccountId, BTreeMap<VintageYear, Balance>>,
    total_minted: Balance,
    total_burned: Balance,
}

/// The per-vintage amounts a burn or transfer drew from, oldest first.
pub type VintageDraws = Vec<(VintageYear, Balance)>;

impl VintageLedger {
    pub fn new() -> Self {
        VintageLedger {
            balances: BTreeMap::new(),
            total_minted: 0,
            total_burned: 0,
        }
    }

    /// Total balance of an account across all vintages.
    pub fn balance_of(&self, account: &AccountId) -> Balance {
        self.balances
            .get(account)
            .map(|vintages| vintages.values().sum())
            .unwrap_or(0)
    }

    /// Per-vintage balances of an account, oldest first.
    pub fn vintage_balances(&self, account: &AccountId) -> Vec<(VintageYear, Balance)> {
        self.balances
            .get(account)
            .map(|vintages| vintages.iter().map(|(year, amount)| (*year, *amount)).collect())
            .unwrap_or_default()
    }

    /// Credits in circulation: total minted minus total burned.
    pub fn total_supply(&self) -> Balance {
        self.total_minted - self.total_burned
    }

    /// Increases an account's balance at the given vintage.
    ///
    /// Fails with [RegistryError::InvalidAmount] if `amount` is zero or the
    /// mint would overflow the total supply.
    pub fn mint(
        &mut self,
        account: AccountId,
        amount: Balance,
        vintage_year: VintageYear,
    ) -> Result<(), RegistryError> {
        if amount == 0 {
            return Err(RegistryError::InvalidAmount);
        }
        let total_minted = self
            .total_minted
            .checked_add(amount)
            .ok_or(RegistryError::InvalidAmount)?;

        let balance = self
            .balances
            .entry(account)
            .or_insert_with(BTreeMap::new)
            .entry(vintage_year)
            .or_insert(0);
        *balance += amount;
        self.total_minted = total_minted;

        debug_assert!(self.holds_conservation());
        Ok(())
    }

    /// Removes `amount` from an account, drawing from the oldest vintage
    /// first. Returns what was drawn from each vintage.
    ///
    /// Fails with [RegistryError::InsufficientBalance] if the account's
    /// total balance is less than `amount`, without touching any balance.
    pub fn burn_oldest_first(
        &mut self,
        account: &AccountId,
        amount: Balance,
    ) -> Result<VintageDraws, RegistryError> {
        if amount == 0 {
            return Err(RegistryError::InvalidAmount);
        }
        let draws = self.draw_oldest_first(account, amount)?;
        self.total_burned += amount;

        debug_assert!(self.holds_conservation());
        Ok(draws)
    }

    /// Moves `amount` from one account to another, drawing from the oldest
    /// vintage first and crediting the recipient at the same vintages.
    /// Returns what was moved from each vintage.
    ///
    /// The debit and credit are a single atomic step: on
    /// [RegistryError::InsufficientBalance] neither side changes. Total
    /// supply is unaffected.
    pub fn transfer_oldest_first(
        &mut self,
        from: &AccountId,
        to: AccountId,
        amount: Balance,
    ) -> Result<VintageDraws, RegistryError> {
        if amount == 0 {
            return Err(RegistryError::InvalidAmount);
        }
        let draws = self.draw_oldest_first(from, amount)?;
        let recipient = self.balances.entry(to).or_insert_with(BTreeMap::new);
        for (vintage_year, drawn) in &draws {
            *recipient.entry(*vintage_year).or_insert(0) += drawn;
        }

        debug_assert!(self.holds_conservation());
        Ok(draws)
    }

    /// Debits `amount` from the account, oldest vintage first. All checks
    /// happen before the first deduction.
    fn draw_oldest_first(
        &mut self,
        account: &AccountId,
        amount: Balance,
    ) -> Result<VintageDraws, RegistryError> {
        if self.balance_of(account) < amount {
            return Err(RegistryError::InsufficientBalance);
        }
        let vintages = self
            .balances
            .get_mut(account)
            .ok_or(RegistryError::InsufficientBalance)?;

        let mut draws = Vec::new();
        let mut remaining = amount;
        for (vintage_year, balance) in vintages.iter_mut() {
            if remaining == 0 {
                break;
            }
            let drawn = remaining.min(*balance);
            *balance -= drawn;
            remaining -= drawn;
            draws.push((*vintage_year, drawn));
        }
        vintages.retain(|_, balance| *balance > 0);
        if vintages.is_empty() {
            self.balances.remove(account);
        }
        Ok(draws)
    }

    /// Conservation invariant: Σ balances == minted − burned.
    pub fn holds_conservation(&self) -> bool {
        let sum: Balance = self
            .balances
            .values()
            .flat_map(|vintages| vintages.values())
            .sum();
        sum == self.total_minted - self.total_burned
    }
}
