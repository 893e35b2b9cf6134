//! Interactive text menu over any line reader and writer.
//!
//! The runner wires this to stdin/stdout; tests drive it with a Cursor.
//! End of input at any prompt ends the session cleanly.

use crate::{
    command::{MenuChoice, SupportChoice},
    config::TelcoConfig,
    error::{TelcoError, TelcoResult},
    phone::PhoneNumber,
    session::{LoadStatus, Session},
    types::Money,
};
use std::io::{BufRead, Write};

pub struct Console<R, W> {
    input:  R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Prompt for a number, open its session and serve the main menu
    /// until the customer exits.
    pub fn run(&mut self, config: TelcoConfig) -> TelcoResult<()> {
        let Some(phone) = self.prompt_phone()? else {
            return Ok(());
        };
        let mut session = Session::open(config, phone)?;
        self.report_load(session.load_status())?;

        loop {
            writeln!(self.output, "\n---- MAIN MENU ----")?;
            for (i, choice) in MenuChoice::ALL.iter().enumerate() {
                writeln!(self.output, "{}. {}", i + 1, choice.label())?;
            }
            write!(self.output, "Choose: ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                break;
            };
            let Some(choice) = MenuChoice::parse(first_token(&line)) else {
                writeln!(self.output, "Invalid option.")?;
                continue;
            };
            match self.dispatch(&mut session, choice) {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => self.report_error(&e)?,
            }
        }
        self.output.flush()?;
        Ok(())
    }

    /// Repeatedly prompt until a valid number is entered.
    /// `None` if input ends first.
    pub fn prompt_phone(&mut self) -> TelcoResult<Option<PhoneNumber>> {
        loop {
            write!(self.output, "Enter phone number (11 digits, starts with 03): ")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match PhoneNumber::parse(first_token(&line)) {
                Ok(phone) => return Ok(Some(phone)),
                Err(_) => writeln!(self.output, "Invalid phone number. Try again.")?,
            }
        }
    }

    /// Run one menu action. `Ok(false)` ends the session: the customer
    /// chose Exit or input ran out mid-action.
    fn dispatch(&mut self, session: &mut Session, choice: MenuChoice) -> TelcoResult<bool> {
        match choice {
            MenuChoice::AddBalance   => self.add_balance(session),
            MenuChoice::ViewAccount  => {
                writeln!(self.output, "\n{}", session.account())?;
                Ok(true)
            }
            MenuChoice::Subscribe    => self.subscribe(session),
            MenuChoice::Support      => self.support(session),
            MenuChoice::ChangeNumber => {
                let Some(phone) = self.prompt_phone()? else {
                    return Ok(false);
                };
                let status = session.switch_number(phone)?;
                self.report_load(&status)?;
                Ok(true)
            }
            MenuChoice::Unsubscribe  => {
                session.unsubscribe()?;
                writeln!(self.output, "Unsubscribed.")?;
                Ok(true)
            }
            MenuChoice::Exit => Ok(false),
        }
    }

    fn add_balance(&mut self, session: &mut Session) -> TelcoResult<bool> {
        let options = session
            .config()
            .top_up_denominations
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(" / ");
        write!(self.output, "Enter amount ({options}): ")?;
        self.output.flush()?;
        let Some(line) = self.read_line()? else {
            return Ok(false);
        };
        let token = first_token(&line);
        let amount: Money = token.parse().map_err(|_| TelcoError::InvalidAmount {
            amount: token.to_string(),
        })?;
        let balance = session.top_up(amount)?;
        writeln!(self.output, "Balance updated to: {balance}")?;
        Ok(true)
    }

    fn subscribe(&mut self, session: &mut Session) -> TelcoResult<bool> {
        writeln!(self.output, "\n---- AVAILABLE PACKAGES ----")?;
        for (i, package) in session.catalog().iter().enumerate() {
            writeln!(self.output, "{}. {package}", i + 1)?;
        }
        write!(self.output, "Choose package number: ")?;
        self.output.flush()?;
        let Some(line) = self.read_line()? else {
            return Ok(false);
        };
        let token = first_token(&line);
        let number: usize = token.parse().map_err(|_| TelcoError::InvalidPackage {
            choice: token.to_string(),
        })?;
        session.subscribe(number)?;
        writeln!(self.output, "Package subscribed successfully!")?;
        Ok(true)
    }

    fn support(&mut self, session: &mut Session) -> TelcoResult<bool> {
        match session.pending_complaints() {
            Ok(pending) => writeln!(self.output, "\nPending requests: {pending}")?,
            Err(e) => log::warn!("console: cannot count pending requests: {e}"),
        }
        write!(self.output, "1. Submit Complaint\n2. Process Complaint\nChoose: ")?;
        self.output.flush()?;
        let Some(line) = self.read_line()? else {
            return Ok(false);
        };
        match SupportChoice::parse(first_token(&line)) {
            Some(SupportChoice::Submit) => {
                write!(self.output, "Enter your complaint/message: ")?;
                self.output.flush()?;
                let Some(message) = self.read_line()? else {
                    return Ok(false);
                };
                session.submit_complaint(&message)?;
                writeln!(self.output, "Your message has been added to your support queue.")?;
            }
            Some(SupportChoice::Process) => match session.process_complaint()? {
                Some(message) => writeln!(self.output, "Processing: {message}")?,
                None => writeln!(self.output, "No pending support requests.")?,
            },
            None => writeln!(self.output, "Invalid.")?,
        }
        Ok(true)
    }

    fn report_load(&mut self, status: &LoadStatus) -> TelcoResult<()> {
        match status {
            LoadStatus::Loaded => writeln!(self.output, "Account loaded successfully!")?,
            LoadStatus::Created => {
                writeln!(self.output, "No previous record found. Creating new account.")?
            }
            LoadStatus::Recovered { reason } => {
                writeln!(self.output, "Could not read saved account ({reason}).")?;
                writeln!(self.output, "Creating new account.")?;
            }
        }
        Ok(())
    }

    fn report_error(&mut self, err: &TelcoError) -> TelcoResult<()> {
        if err.is_rejection() {
            writeln!(self.output, "{err}")?;
        } else {
            log::warn!("console: action failed: {err}");
            writeln!(self.output, "Error: {err}")?;
        }
        Ok(())
    }

    /// Read one line without its terminator. `None` at end of input.
    fn read_line(&mut self) -> TelcoResult<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        let trimmed = buf.trim_end_matches(&['\n', '\r'][..]).len();
        buf.truncate(trimmed);
        Ok(Some(buf))
    }
}

/// First whitespace-delimited word of a line, or "" for a blank line.
fn first_token(line: &str) -> &str {
    line.split_whitespace().next().unwrap_or("")
}
