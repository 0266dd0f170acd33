//! # Currency Ledger
//!
//! Non-negative counters over the fixed [`Currency`] set, plus the VIP
//! experience accumulator.
//!
//! Debits go through [`Ledger::try_spend`], which checks and debits against
//! the same read: there is no window between "can afford" and "spend".

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use summoner_content::{Cost, Currency};

use crate::error::{GachaError, GachaResult};

/// Currency balances of one player.
///
/// Zero balances are not stored, so two ledgers holding the same amounts
/// always compare equal.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    balances: BTreeMap<Currency, u64>,
    vip_exp: u64,
}

impl Ledger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the ledger with `amount` more of `currency`.
    #[must_use]
    pub fn with(mut self, currency: Currency, amount: u64) -> Self {
        self.add(currency, amount);
        self
    }

    /// Current balance of a currency.
    #[inline]
    #[must_use]
    pub fn balance(&self, currency: Currency) -> u64 {
        self.balances.get(&currency).copied().unwrap_or(0)
    }

    /// Current stamina. Always equal to the `Stamina` balance.
    #[inline]
    #[must_use]
    pub fn current_stamina(&self) -> u64 {
        self.balance(Currency::Stamina)
    }

    /// Overwrites the stamina counter (regeneration ticks, refills).
    pub fn set_current_stamina(&mut self, value: u64) {
        self.set(Currency::Stamina, value);
    }

    /// Accumulated VIP experience.
    #[inline]
    #[must_use]
    pub const fn vip_exp(&self) -> u64 {
        self.vip_exp
    }

    /// Credits a currency, saturating at `u64::MAX`.
    pub fn add(&mut self, currency: Currency, amount: u64) {
        let total = self.balance(currency).saturating_add(amount);
        self.set(currency, total);
    }

    /// Whether the ledger covers `cost`.
    #[inline]
    #[must_use]
    pub fn can_afford(&self, cost: Cost) -> bool {
        self.balance(cost.currency) >= cost.amount
    }

    /// Debits `cost` if the balance covers it.
    ///
    /// # Errors
    ///
    /// Returns `GachaError::InsufficientFunds` and leaves the ledger unchanged
    /// if the balance is too low.
    pub fn try_spend(&mut self, cost: Cost) -> GachaResult<()> {
        let available = self.balance(cost.currency);
        if available < cost.amount {
            return Err(GachaError::InsufficientFunds {
                currency: cost.currency,
                required: cost.amount,
                available,
            });
        }
        self.set(cost.currency, available - cost.amount);
        Ok(())
    }

    /// Adds VIP experience and returns the new total.
    pub fn add_vip_exp(&mut self, amount: u64) -> u64 {
        self.vip_exp = self.vip_exp.saturating_add(amount);
        self.vip_exp
    }

    /// Non-zero balances in currency order.
    pub fn balances(&self) -> impl Iterator<Item = (Currency, u64)> + '_ {
        self.balances.iter().map(|(&currency, &amount)| (currency, amount))
    }

    fn set(&mut self, currency: Currency, value: u64) {
        if value == 0 {
            self.balances.remove(&currency);
        } else {
            self.balances.insert(currency, value);
        }
    }
}
