//! Account record persistence.

use tempfile::TempDir;
use telco_core::{
    account::Account,
    phone::PhoneNumber,
    store::AccountStore,
    TelcoError,
};

fn phone() -> PhoneNumber {
    PhoneNumber::parse("03001234567").unwrap()
}

#[test]
fn missing_record_is_not_an_error() {
    let dir = TempDir::new().unwrap();
    let store = AccountStore::open(dir.path());
    assert!(store.load_account(&phone()).unwrap().is_none());
}

#[test]
fn save_then_load_reproduces_every_field() {
    let dir = TempDir::new().unwrap();
    let store = AccountStore::open(dir.path());

    let mut acc = Account::new(phone());
    acc.balance = 450.0;
    acc.package = "Rare Offer".into();
    acc.gb = 55;
    acc.minutes = 130;
    acc.offnet = 110;
    acc.sms = 750;
    store.save_account(&acc).unwrap();

    let loaded = store.load_account(&phone()).unwrap().unwrap();
    assert_eq!(loaded, acc);
}

#[test]
fn record_written_in_fixed_field_order() {
    let dir = TempDir::new().unwrap();
    let store = AccountStore::open(dir.path());
    let mut acc = Account::new(phone());
    acc.balance = 200.0;
    store.save_account(&acc).unwrap();

    let text = std::fs::read_to_string(dir.path().join("03001234567_account.txt")).unwrap();
    let keys: Vec<&str> = text
        .lines()
        .map(|l| l.split(|c: char| c == ':' || c == '=').next().unwrap())
        .collect();
    assert_eq!(keys, ["Number", "Balance", "Package", "GB", "Minutes", "Offnet", "SMS"]);
    assert!(text.starts_with("Number: 03001234567\nBalance=200\n"));
}

#[test]
fn save_creates_missing_data_dir() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("accounts").join("pk");
    let store = AccountStore::open(&nested);
    store.save_account(&Account::new(phone())).unwrap();
    assert!(nested.join("03001234567_account.txt").exists());
}

#[test]
fn unparsable_quota_reported_as_corrupt() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("03001234567_account.txt"),
        "Number: 03001234567\nBalance=100\nPackage=None\nGB=lots\nMinutes=0\nOffnet=0\nSMS=0\n",
    )
    .unwrap();
    let store = AccountStore::open(dir.path());
    let err = store.load_account(&phone()).unwrap_err();
    assert!(matches!(err, TelcoError::Corrupt { line: 4, .. }), "{err}");
}

#[test]
fn negative_balance_reported_as_corrupt() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("03001234567_account.txt"),
        "Number: 03001234567\nBalance=-5\nPackage=None\nGB=0\nMinutes=0\nOffnet=0\nSMS=0\n",
    )
    .unwrap();
    let store = AccountStore::open(dir.path());
    assert!(matches!(
        store.load_account(&phone()),
        Err(TelcoError::Corrupt { line: 2, .. })
    ));
}

#[test]
fn infinite_balance_reported_as_corrupt() {
    let dir = TempDir::new().unwrap();
    let store = AccountStore::open(dir.path());
    for balance in ["inf", "1e400", "NaN"] {
        std::fs::write(
            dir.path().join("03001234567_account.txt"),
            format!("Number: 03001234567\nBalance={balance}\nPackage=None\nGB=0\nMinutes=0\nOffnet=0\nSMS=0\n"),
        )
        .unwrap();
        assert!(
            matches!(store.load_account(&phone()), Err(TelcoError::Corrupt { line: 2, .. })),
            "balance {balance} accepted"
        );
    }
}

#[test]
fn invalid_utf8_reported_as_corrupt() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("03001234567_account.txt"),
        b"Number: 03001234567\nBalance=10\nPackage=Caf\xE9\n".as_slice(),
    )
    .unwrap();
    let store = AccountStore::open(dir.path());
    assert!(matches!(
        store.load_account(&phone()),
        Err(TelcoError::Corrupt { line: 3, .. })
    ));
}
