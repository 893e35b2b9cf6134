use super::AccountStore;
use crate::{
    complaint::{validate_message, ComplaintQueue},
    error::TelcoResult,
    phone::PhoneNumber,
};
use std::{fs::OpenOptions, io::ErrorKind, io::Write};

impl AccountStore {
    // ── Complaint ──────────────────────────────────────────────────

    /// Append one message to the number's complaint file.
    pub fn append_complaint(&self, phone: &PhoneNumber, message: &str) -> TelcoResult<()> {
        validate_message(message)?;
        self.ensure_data_dir()?;
        let path = self.complaints_path(phone);
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        writeln!(file, "{message}")?;
        log::debug!("store: appended complaint to {}", path.display());
        Ok(())
    }

    /// Read every pending complaint, oldest first. A missing file is
    /// an empty queue; undecodable bytes become U+FFFD.
    pub fn load_complaints(&self, phone: &PhoneNumber) -> TelcoResult<ComplaintQueue> {
        match std::fs::read(self.complaints_path(phone)) {
            Ok(bytes) => Ok(ComplaintQueue::from_lines(&String::from_utf8_lossy(&bytes))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(ComplaintQueue::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Replace the number's complaint file with `queue`.
    pub fn save_complaints(&self, phone: &PhoneNumber, queue: &ComplaintQueue) -> TelcoResult<()> {
        self.ensure_data_dir()?;
        std::fs::write(self.complaints_path(phone), queue.to_lines())?;
        Ok(())
    }
}
