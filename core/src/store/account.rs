use super::AccountStore;
use crate::{
    account::Account,
    error::{TelcoError, TelcoResult},
    phone::PhoneNumber,
    types::{Money, Quota},
};
use std::{io::ErrorKind, path::Path};

// Field order of the account record. Never reorder.
const FIELDS: [&str; 7] = ["Number", "Balance", "Package", "GB", "Minutes", "Offnet", "SMS"];

impl AccountStore {
    // ── Account ───────────────────────────────────────────────────

    /// Read the stored record for `phone`. `Ok(None)` when the number
    /// has never been saved.
    pub fn load_account(&self, phone: &PhoneNumber) -> TelcoResult<Option<Account>> {
        let path = self.account_path(phone);
        let bytes = match std::fs::read(&path) {
            Ok(b) => b,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("store: no account record at {}", path.display());
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        let content = String::from_utf8(bytes).map_err(|e| {
            let valid = e.utf8_error().valid_up_to();
            TelcoError::Corrupt {
                path:   path.clone(),
                line:   e.as_bytes()[..valid].iter().filter(|b| **b == b'\n').count() + 1,
                reason: "not valid UTF-8 text".to_string(),
            }
        })?;
        let account = parse_account_record(&path, phone, &content)?;
        log::debug!("store: loaded account {phone} from {}", path.display());
        Ok(Some(account))
    }

    /// Overwrite the record for `account.phone` with the current state.
    pub fn save_account(&self, account: &Account) -> TelcoResult<()> {
        self.ensure_data_dir()?;
        let path = self.account_path(&account.phone);
        std::fs::write(&path, render_account_record(account))?;
        log::debug!("store: saved account {} to {}", account.phone, path.display());
        Ok(())
    }
}

pub fn render_account_record(account: &Account) -> String {
    format!(
        "Number: {}\nBalance={}\nPackage={}\nGB={}\nMinutes={}\nOffnet={}\nSMS={}\n",
        account.phone,
        account.balance,
        account.package,
        account.gb,
        account.minutes,
        account.offnet,
        account.sms,
    )
}

/// Parse a 7-line account record. Each line may be `Key: value` or
/// `Key=value`. The record is always loaded under `phone`, whatever
/// number it carries.
pub fn parse_account_record(
    path: &Path,
    phone: &PhoneNumber,
    content: &str,
) -> TelcoResult<Account> {
    let corrupt = |line: usize, reason: String| TelcoError::Corrupt {
        path: path.to_path_buf(),
        line,
        reason,
    };

    let mut values: Vec<&str> = Vec::with_capacity(FIELDS.len());
    let mut lines = content.lines();
    for (i, field) in FIELDS.iter().enumerate() {
        let line = lines
            .next()
            .ok_or_else(|| corrupt(i + 1, format!("missing {field} line")))?;
        let (_, value) = line
            .split_once(|c: char| c == ':' || c == '=')
            .ok_or_else(|| corrupt(i + 1, format!("expected '{field}=value'")))?;
        values.push(value.trim());
    }

    if values[0] != phone.as_str() {
        log::warn!(
            "store: {} records number '{}', loading it as {phone}",
            path.display(),
            values[0]
        );
    }

    let balance: Money = values[1]
        .parse()
        .map_err(|_| corrupt(2, format!("balance '{}' is not a number", values[1])))?;
    if !balance.is_finite() || balance < 0.0 {
        return Err(corrupt(2, format!("balance {balance} is not a valid amount")));
    }

    let quota = |idx: usize| -> TelcoResult<Quota> {
        values[idx].parse().map_err(|_| {
            corrupt(
                idx + 1,
                format!("{} '{}' is not a whole number", FIELDS[idx], values[idx]),
            )
        })
    };

    Ok(Account {
        phone:   phone.clone(),
        balance,
        package: values[2].to_string(),
        gb:      quota(3)?,
        minutes: quota(4)?,
        offnet:  quota(5)?,
        sms:     quota(6)?,
    })
}
