//! Scripted runs of the text menu.

use std::io::Cursor;
use tempfile::TempDir;
use telco_core::{
    config::TelcoConfig, console::Console, phone::PhoneNumber, store::AccountStore,
};

fn run(dir: &TempDir, script: &str) -> String {
    let config = TelcoConfig::default().with_data_dir(dir.path());
    let mut console = Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
    console.run(config).unwrap();
    String::from_utf8(console.into_output()).unwrap()
}

#[test]
fn reprompts_until_phone_number_valid() {
    let dir = TempDir::new().unwrap();
    let out = run(&dir, "1234567890\n12345678901\n03001234567\n7\n");

    assert_eq!(out.matches("Invalid phone number. Try again.").count(), 2);
    assert!(out.contains("No previous record found. Creating new account."));
}

#[test]
fn top_up_subscribe_and_view() {
    let dir = TempDir::new().unwrap();
    let out = run(&dir, "03001234567\n1\n500\n3\n3\n2\n7\n");

    assert!(out.contains("Balance updated to: 500"));
    assert!(out.contains("1. Night Offer - Rs.100 | 10GB, 10 min, 10 offnet, 100 SMS"));
    assert!(out.contains("Package subscribed successfully!"));
    assert!(out.contains("Phone: 03001234567"));
    assert!(out.contains("Balance: 200"));
    assert!(out.contains("Active Package: Common Offer"));
    assert!(out.contains("Offnet Minutes: 50"));
    assert!(out.contains("SMS: 250"));
}

#[test]
fn rejections_keep_the_menu_running() {
    let dir = TempDir::new().unwrap();
    let out = run(&dir, "03001234567\n1\n150\n1\nabc\n3\n9\n3\n6\n6\n9\nhello\n7\n");

    assert_eq!(out.matches("Invalid amount.").count(), 2);
    // Package 9 does not exist; package 6 costs more than the empty balance.
    assert!(out.contains("Invalid package."));
    assert!(out.contains("Insufficient balance."));
    assert!(out.contains("No active package."));
    assert_eq!(out.matches("Invalid option.").count(), 2);
    assert!(!dir.path().join("03001234567_account.txt").exists());
}

#[test]
fn support_menu_round_trip() {
    let dir = TempDir::new().unwrap();
    let out = run(
        &dir,
        "03001234567\n4\n1\nmy data stopped working\n4\n1\nwrong bill\n4\n2\n4\n3\n7\n",
    );

    assert_eq!(
        out.matches("Your message has been added to your support queue.").count(),
        2
    );
    assert!(out.contains("Processing: my data stopped working"));
    assert!(out.contains("Pending requests: 1"));
    assert!(out.contains("Invalid."));
    let left = std::fs::read_to_string(dir.path().join("03001234567_complaints.txt")).unwrap();
    assert_eq!(left, "wrong bill\n");
}

#[test]
fn change_number_loads_other_account() {
    let dir = TempDir::new().unwrap();
    run(&dir, "03001111111\n1\n1000\n7\n");

    let out = run(&dir, "03002222222\n5\n03001111111\n2\n7\n");
    assert!(out.contains("No previous record found. Creating new account."));
    assert!(out.contains("Account loaded successfully!"));
    assert!(out.contains("Balance: 1000"));
}

#[test]
fn unsubscribe_persists_reset() {
    let dir = TempDir::new().unwrap();
    let out = run(&dir, "03001234567\n1\n1000\n3\n6\n6\n7\n");
    assert!(out.contains("Unsubscribed."));

    let acc = AccountStore::open(dir.path())
        .load_account(&PhoneNumber::parse("03001234567").unwrap())
        .unwrap()
        .unwrap();
    assert_eq!(acc.balance, 0.0);
    assert_eq!(acc.package, "None");
    assert_eq!(acc.gb, 0);
}

#[test]
fn end_of_input_exits_cleanly() {
    let dir = TempDir::new().unwrap();
    assert!(run(&dir, "").contains("Enter phone number"));
    let out = run(&dir, "03001234567\n1\n");
    assert!(out.contains("Enter amount (100 / 200 / 500 / 1000): "));
}

#[test]
fn undecodable_account_file_does_not_stop_startup() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("03001234567_account.txt"),
        b"Number: 03001234567\nBalance=300\nPackage=Caf\xE9\nGB=0\nMinutes=0\nOffnet=0\nSMS=0\n"
            .as_slice(),
    )
    .unwrap();

    let out = run(&dir, "03001234567\n2\n7\n");
    assert!(out.contains("Could not read saved account"));
    assert!(out.contains("Creating new account."));
    assert!(out.contains("Balance: 0"));
}

#[test]
fn undecodable_complaint_file_keeps_support_menu_usable() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("03001234567_complaints.txt");
    std::fs::write(&path, b"o\xFF\n".as_slice()).unwrap();

    let out = run(&dir, "03001234567\n4\n1\nhello\n7\n");
    assert!(out.contains("Pending requests: 1"));
    assert!(out.contains("Your message has been added to your support queue."));
    assert!(!out.contains("Enter amount"));
    assert_eq!(std::fs::read(&path).unwrap(), b"o\xFF\nhello\n");
}

#[test]
fn exit_ends_session_without_further_prompts() {
    let dir = TempDir::new().unwrap();
    let out = run(&dir, "03001234567\n7\n2\n");
    assert_eq!(out.matches("---- MAIN MENU ----").count(), 1);
    assert!(!out.contains("ACCOUNT INFO"));
}
