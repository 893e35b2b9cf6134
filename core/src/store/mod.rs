//! Flat-file persistence layer.
//!
//! RULE: Only the store touches the data directory.
//! The session calls store methods; it never opens files directly.
//!
//! Layout, one pair of files per phone number:
//!   <phone>_account.txt     7-line account record, rewritten on every save
//!   <phone>_complaints.txt  one pending complaint per line, oldest first

use crate::phone::PhoneNumber;
use std::path::PathBuf;

mod account;
mod complaint;

pub use account::{parse_account_record, render_account_record};

pub struct AccountStore {
    data_dir: PathBuf,
}

impl AccountStore {
    /// Open a store rooted at `data_dir`. The directory is created on
    /// first write, not here.
    pub fn open(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn account_path(&self, phone: &PhoneNumber) -> PathBuf {
        self.data_dir.join(format!("{phone}_account.txt"))
    }

    pub fn complaints_path(&self, phone: &PhoneNumber) -> PathBuf {
        self.data_dir.join(format!("{phone}_complaints.txt"))
    }

    fn ensure_data_dir(&self) -> std::io::Result<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Ok(());
        }
        std::fs::create_dir_all(&self.data_dir)
    }
}
