//! The session — one customer's account, the catalog and the store.
//!
//! RULES:
//!   - Every mutation is applied to a copy, saved, then committed.
//!     A failed save leaves the in-memory account untouched.
//!   - Every committed mutation is recorded as an AccountEvent.
//!   - Rejections change nothing and record nothing.

use crate::{
    account::Account,
    catalog::{Catalog, Package},
    config::TelcoConfig,
    error::{TelcoError, TelcoResult},
    event::{AccountEvent, EventLogEntry},
    phone::PhoneNumber,
    store::AccountStore,
    types::Money,
};

/// How the current account came to be in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// An existing record was read.
    Loaded,
    /// No record existed; a fresh account was started.
    Created,
    /// The record could not be read or parsed; a fresh account was started.
    /// The file is left alone until the next save.
    Recovered { reason: String },
}

pub struct Session {
    config:      TelcoConfig,
    catalog:     Catalog,
    store:       AccountStore,
    account:     Account,
    load_status: LoadStatus,
    events:      Vec<EventLogEntry>,
}

impl Session {
    /// Build the catalog and load (or start) the account for `phone`.
    pub fn open(config: TelcoConfig, phone: PhoneNumber) -> TelcoResult<Self> {
        let catalog = Catalog::new(config.packages.clone());
        let store = AccountStore::open(config.data_dir.clone());
        let mut session = Self {
            account: Account::new(phone.clone()),
            load_status: LoadStatus::Created,
            events: Vec::new(),
            config,
            catalog,
            store,
        };
        session.switch_number(phone)?;
        Ok(session)
    }

    /// Discard the in-memory account and load (or start) `phone`.
    pub fn switch_number(&mut self, phone: PhoneNumber) -> TelcoResult<LoadStatus> {
        let (account, status) = match self.store.load_account(&phone) {
            Ok(Some(account)) => (account, LoadStatus::Loaded),
            Ok(None) => (Account::new(phone.clone()), LoadStatus::Created),
            Err(e) => {
                log::warn!("session: {e}; starting a new account for {phone}");
                (
                    Account::new(phone.clone()),
                    LoadStatus::Recovered { reason: e.to_string() },
                )
            }
        };

        let event = match status {
            LoadStatus::Loaded => AccountEvent::AccountLoaded {
                phone:   phone.clone(),
                balance: account.balance,
                package: account.package.clone(),
            },
            _ => AccountEvent::AccountOpened { phone: phone.clone() },
        };
        self.account = account;
        self.load_status = status.clone();
        self.record(event)?;
        Ok(status)
    }

    // ── Account operations ─────────────────────────────────────────

    /// Credit one of the configured denominations. Returns the new balance.
    pub fn top_up(&mut self, amount: Money) -> TelcoResult<Money> {
        let denominations = self.config.top_up_denominations.clone();
        self.apply(|acc| acc.top_up(amount, &denominations))?;
        Ok(self.account.balance)
    }

    /// Subscribe to the package at 1-based position `number` in the catalog.
    pub fn subscribe(&mut self, number: usize) -> TelcoResult<&Package> {
        let package = self
            .catalog
            .get(number)
            .cloned()
            .ok_or_else(|| TelcoError::InvalidPackage {
                choice: number.to_string(),
            })?;
        self.apply(|acc| acc.subscribe(&package))?;
        self.catalog.get(number).ok_or(TelcoError::InvalidPackage {
            choice: number.to_string(),
        })
    }

    pub fn unsubscribe(&mut self) -> TelcoResult<()> {
        self.apply(Account::unsubscribe)
    }

    // ── Customer support ───────────────────────────────────────────

    /// Queue a complaint. Returns how many are now pending.
    pub fn submit_complaint(&mut self, message: &str) -> TelcoResult<usize> {
        let phone = self.account.phone.clone();
        let mut queue = self.store.load_complaints(&phone)?;
        queue.enqueue(message)?;
        self.store.append_complaint(&phone, message)?;
        let pending = queue.len();
        self.record(AccountEvent::ComplaintSubmitted { phone, pending })?;
        Ok(pending)
    }

    /// Take the oldest pending complaint off the queue. `None` when
    /// nothing is pending; the file is not touched in that case.
    pub fn process_complaint(&mut self) -> TelcoResult<Option<String>> {
        let phone = self.account.phone.clone();
        let mut queue = self.store.load_complaints(&phone)?;
        let Some(message) = queue.dequeue() else {
            return Ok(None);
        };
        self.store.save_complaints(&phone, &queue)?;
        self.record(AccountEvent::ComplaintProcessed {
            phone,
            message:   message.clone(),
            remaining: queue.len(),
        })?;
        Ok(Some(message))
    }

    pub fn pending_complaints(&self) -> TelcoResult<usize> {
        Ok(self.store.load_complaints(&self.account.phone)?.len())
    }

    // ── Accessors ─────────────────────────────────────────────────

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &TelcoConfig {
        &self.config
    }

    pub fn load_status(&self) -> &LoadStatus {
        &self.load_status
    }

    /// Every event recorded since the session was opened, oldest first.
    pub fn events(&self) -> &[EventLogEntry] {
        &self.events
    }

    // ── Internals ─────────────────────────────────────────────────

    fn apply<F>(&mut self, op: F) -> TelcoResult<()>
    where
        F: FnOnce(&mut Account) -> TelcoResult<AccountEvent>,
    {
        let mut next = self.account.clone();
        let event = op(&mut next)?;
        self.store.save_account(&next)?;
        self.account = next;
        self.record(event)
    }

    fn record(&mut self, event: AccountEvent) -> TelcoResult<()> {
        log::info!("{} {}", event.kind(), serde_json::to_string(&event)?);
        self.events.push(EventLogEntry::now(event));
        Ok(())
    }
}
