//! Account events — the record of every change a session makes.
//!
//! RULE: Every persisted mutation emits exactly one event.
//! Rejected requests emit nothing.

use crate::{
    phone::PhoneNumber,
    types::{Money, Quota},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Variants are appended only, never removed or reordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AccountEvent {
    AccountOpened {
        phone: PhoneNumber,
    },
    AccountLoaded {
        phone:   PhoneNumber,
        balance: Money,
        package: String,
    },
    BalanceToppedUp {
        phone:       PhoneNumber,
        amount:      Money,
        new_balance: Money,
    },
    PackageSubscribed {
        phone:       PhoneNumber,
        package:     String,
        cost:        Money,
        new_balance: Money,
    },
    PackageUnsubscribed {
        phone:   PhoneNumber,
        package: String,
        forfeited_gb:      Quota,
        forfeited_minutes: Quota,
        forfeited_offnet:  Quota,
        forfeited_sms:     Quota,
    },
    ComplaintSubmitted {
        phone:   PhoneNumber,
        pending: usize,
    },
    ComplaintProcessed {
        phone:     PhoneNumber,
        message:   String,
        remaining: usize,
    },
}

impl AccountEvent {
    /// Stable name used as the log key for this event.
    pub fn kind(&self) -> &'static str {
        match self {
            AccountEvent::AccountOpened { .. }       => "account_opened",
            AccountEvent::AccountLoaded { .. }       => "account_loaded",
            AccountEvent::BalanceToppedUp { .. }     => "balance_topped_up",
            AccountEvent::PackageSubscribed { .. }   => "package_subscribed",
            AccountEvent::PackageUnsubscribed { .. } => "package_unsubscribed",
            AccountEvent::ComplaintSubmitted { .. }  => "complaint_submitted",
            AccountEvent::ComplaintProcessed { .. }  => "complaint_processed",
        }
    }
}

/// An event with the wall-clock time it was recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventLogEntry {
    pub at:    DateTime<Utc>,
    pub event: AccountEvent,
}

impl EventLogEntry {
    pub fn now(event: AccountEvent) -> Self {
        Self { at: Utc::now(), event }
    }
}
