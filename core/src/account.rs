//! Account rules — balance top-up, subscription and unsubscription.
//!
//! These methods only mutate the in-memory record. Persisting the
//! result is the session's job (see session.rs).

use crate::{
    catalog::Package,
    error::{TelcoError, TelcoResult},
    event::AccountEvent,
    phone::PhoneNumber,
    types::{Money, Quota, NO_PACKAGE},
};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub phone:   PhoneNumber,
    pub balance: Money,
    pub package: String,
    pub gb:      Quota,
    pub minutes: Quota,
    pub offnet:  Quota,
    pub sms:     Quota,
}

impl Account {
    /// A fresh account: zero balance, no package, no allowances.
    pub fn new(phone: PhoneNumber) -> Self {
        Self {
            phone,
            balance: 0.0,
            package: NO_PACKAGE.to_string(),
            gb:      0,
            minutes: 0,
            offnet:  0,
            sms:     0,
        }
    }

    pub fn has_package(&self) -> bool {
        self.package != NO_PACKAGE
    }

    /// Credit one of the allowed denominations.
    pub fn top_up(&mut self, amount: Money, denominations: &[Money]) -> TelcoResult<AccountEvent> {
        if !denominations.contains(&amount) {
            return Err(TelcoError::InvalidAmount {
                amount: amount.to_string(),
            });
        }
        self.balance += amount;
        Ok(AccountEvent::BalanceToppedUp {
            phone:       self.phone.clone(),
            amount,
            new_balance: self.balance,
        })
    }

    /// Buy `package`. Allowances are added to whatever is left from
    /// earlier purchases, not replaced.
    pub fn subscribe(&mut self, package: &Package) -> TelcoResult<AccountEvent> {
        if self.balance < package.cost {
            return Err(TelcoError::InsufficientBalance {
                balance: self.balance,
                cost:    package.cost,
            });
        }
        self.balance -= package.cost;
        self.package = package.name.clone();
        self.gb = self.gb.saturating_add(package.gb);
        self.minutes = self.minutes.saturating_add(package.minutes);
        self.offnet = self.offnet.saturating_add(package.offnet);
        self.sms = self.sms.saturating_add(package.sms);
        Ok(AccountEvent::PackageSubscribed {
            phone:       self.phone.clone(),
            package:     package.name.clone(),
            cost:        package.cost,
            new_balance: self.balance,
        })
    }

    /// Drop the active package and every remaining allowance. No refund.
    pub fn unsubscribe(&mut self) -> TelcoResult<AccountEvent> {
        if !self.has_package() {
            return Err(TelcoError::NoActivePackage);
        }
        let package = std::mem::replace(&mut self.package, NO_PACKAGE.to_string());
        let event = AccountEvent::PackageUnsubscribed {
            phone:             self.phone.clone(),
            package,
            forfeited_gb:      self.gb,
            forfeited_minutes: self.minutes,
            forfeited_offnet:  self.offnet,
            forfeited_sms:     self.sms,
        };
        self.gb = 0;
        self.minutes = 0;
        self.offnet = 0;
        self.sms = 0;
        Ok(event)
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "---- ACCOUNT INFO ----")?;
        writeln!(f, "Phone: {}", self.phone)?;
        writeln!(f, "Balance: {}", self.balance)?;
        writeln!(f, "Active Package: {}", self.package)?;
        writeln!(f, "GB: {}", self.gb)?;
        writeln!(f, "Minutes: {}", self.minutes)?;
        writeln!(f, "Offnet Minutes: {}", self.offnet)?;
        write!(f, "SMS: {}", self.sms)
    }
}
