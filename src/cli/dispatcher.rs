//! Executes parsed commands against an address book.
//!
//! The dispatcher owns every user-facing message; the book and records only
//! return values or errors.

use super::command::{Command, PhoneEdit};
use crate::book::AddressBook;
use crate::error::{CommandError, CommandResult};
use crate::models::Record;
use chrono::{Local, NaiveDate};
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::{debug, info, warn};

const PROMPT: &str = "> ";
const PAGE_PROMPT: &str = "Press enter to continue or 'exit' to quit: ";

/// Whether the prompt loop should keep going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Runs prompt commands against a borrowed [`AddressBook`].
pub struct Dispatcher<'a> {
    book: &'a mut AddressBook,
    default_page_size: usize,
    today: Option<NaiveDate>,
}

impl<'a> Dispatcher<'a> {
    pub fn new(book: &'a mut AddressBook, default_page_size: usize) -> Self {
        Self {
            book,
            default_page_size,
            today: None,
        }
    }

    /// Pin the date used for days-to-birthday output.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Read commands from `input` until `exit` or end of input.
    ///
    /// Command failures are reported on `output` and the loop continues;
    /// only terminal I/O failures end it with an error.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<()> {
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            let Some(line) = read_input_line(&mut input)? else {
                debug!("End of input, leaving prompt loop");
                writeln!(output)?;
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            let result =
                Command::parse(&line).and_then(|cmd| self.execute(cmd, &mut input, &mut output));
            match result {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(CommandError::Terminal(e)) => return Err(e),
                Err(e) => {
                    warn!("Command failed: {}", e);
                    writeln!(output, "{}", e)?;
                }
            }
        }
        Ok(())
    }

    /// Execute one command, writing its result to `output`.
    ///
    /// `input` is only read by `pages`, which waits for the user between pages.
    pub fn execute<R: BufRead, W: Write>(
        &mut self,
        command: Command,
        input: &mut R,
        output: &mut W,
    ) -> CommandResult<Flow> {
        debug!(?command, "Executing command");

        match command {
            Command::Hello => {
                writeln!(output, "How can I help you?")?;
            }
            Command::Add {
                name,
                phones,
                birthday,
            } => self.add(name, phones, birthday, output)?,
            Command::Change {
                name,
                phone_edits,
                birthday,
            } => self.change(&name, phone_edits, birthday, output)?,
            Command::Phone { name } => self.show_phones(&name, output)?,
            Command::Birthday { name } => self.show_birthday(&name, output)?,
            Command::Delete { name } => {
                self.book
                    .remove_record(&name)
                    .ok_or_else(|| CommandError::ContactNotFound(name.clone()))?;
                writeln!(output, "Contact {} deleted.", name)?;
            }
            Command::Search { term } => self.search(&term, output)?,
            Command::Show => self.show_all(output)?,
            Command::Pages { size } => {
                let size = size.unwrap_or(self.default_page_size);
                self.pages(size, input, output)?;
            }
            Command::Save { path } => self.save(&path, output)?,
            Command::Load { path } => self.load(&path, output)?,
            Command::Exit => {
                writeln!(output, "Good bye!")?;
                return Ok(Flow::Exit);
            }
        }

        Ok(Flow::Continue)
    }

    fn add<W: Write>(
        &mut self,
        name: String,
        phones: Vec<String>,
        birthday: Option<String>,
        output: &mut W,
    ) -> CommandResult<()> {
        let mut record = match birthday {
            Some(birthday) => Record::with_birthday(name, birthday)?,
            None => Record::new(name),
        };
        for phone in phones {
            record.add_phone(phone)?;
        }

        let replaced = self.book.get(record.name()).is_some();
        self.book.add_record(record);
        if replaced {
            info!("Contact replaced by add");
            writeln!(output, "Contact replaced successfully!")?;
        } else {
            writeln!(output, "Contact added successfully!")?;
        }
        Ok(())
    }

    /// Applies every edit to a copy first so a bad value leaves the record untouched.
    fn change<W: Write>(
        &mut self,
        name: &str,
        phone_edits: Vec<PhoneEdit>,
        birthday: Option<String>,
        output: &mut W,
    ) -> CommandResult<()> {
        let record = self
            .book
            .get_mut(name)
            .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))?;

        let mut updated = record.clone();
        for edit in phone_edits {
            if !updated.phones().iter().any(|p| p.as_str() == edit.old) {
                debug!("No phone {} on record, edit skipped", edit.old);
            }
            updated.edit_phone(&edit.old, edit.new)?;
        }
        if let Some(birthday) = birthday {
            updated.set_birthday(birthday)?;
        }
        *record = updated;

        writeln!(output, "Contact updated successfully!")?;
        Ok(())
    }

    fn show_phones<W: Write>(&self, name: &str, output: &mut W) -> CommandResult<()> {
        let record = self.find(name)?;
        if record.phones().is_empty() {
            writeln!(output, "{} has no phone numbers.", record.name())?;
        }
        for phone in record.phones() {
            writeln!(output, "{}", phone)?;
        }
        Ok(())
    }

    fn show_birthday<W: Write>(&self, name: &str, output: &mut W) -> CommandResult<()> {
        let record = self.find(name)?;
        match (record.birthday(), record.days_to_birthday(self.today())) {
            (Some(birthday), Some(days)) => {
                writeln!(output, "Birthday: {}", birthday)?;
                writeln!(output, "Days to birthday: {}", days)?;
            }
            _ => writeln!(output, "{} has no birthday set.", record.name())?,
        }
        Ok(())
    }

    fn search<W: Write>(&self, term: &str, output: &mut W) -> CommandResult<()> {
        let results = self.book.search_records(term);
        debug!("Search '{}' matched {} records", term, results.len());

        if results.is_empty() {
            writeln!(output, "No matching records found.")?;
        }
        let today = self.today();
        for record in results {
            writeln!(output, "{}", record.describe(today))?;
        }
        Ok(())
    }

    fn show_all<W: Write>(&self, output: &mut W) -> CommandResult<()> {
        if self.book.is_empty() {
            writeln!(output, "No contacts found!")?;
        }
        let today = self.today();
        for record in self.book.records() {
            writeln!(output, "{}", record.describe(today))?;
        }
        Ok(())
    }

    fn pages<R: BufRead, W: Write>(
        &self,
        page_size: usize,
        input: &mut R,
        output: &mut W,
    ) -> CommandResult<()> {
        let mut pages = self.book.iterate_pages(page_size)?;
        if pages.len() == 0 {
            writeln!(output, "No contacts found!")?;
            return Ok(());
        }

        let today = self.today();
        let total = pages.len();
        for (index, page) in pages.by_ref().enumerate() {
            writeln!(output, "Page {} of {}", index + 1, total)?;
            for record in &page {
                writeln!(output, "{}", record.describe(today))?;
            }

            if index + 1 < total {
                write!(output, "{}", PAGE_PROMPT)?;
                output.flush()?;

                let answer = read_input_line(input)?;
                let stop = answer.map_or(true, |a| a.trim().eq_ignore_ascii_case("exit"));
                if stop {
                    writeln!(output)?;
                    return Ok(());
                }
            }
        }

        writeln!(output, "No more records to display")?;
        Ok(())
    }

    fn save<W: Write>(&self, path: &Path, output: &mut W) -> CommandResult<()> {
        self.book.save_to_file(path)?;
        writeln!(output, "Address book saved to {}", path.display())?;
        Ok(())
    }

    fn load<W: Write>(&mut self, path: &Path, output: &mut W) -> CommandResult<()> {
        self.book.load_from_file(path)?;
        writeln!(
            output,
            "Address book loaded from {} ({} contacts)",
            path.display(),
            self.book.len()
        )?;
        Ok(())
    }

    fn find(&self, name: &str) -> CommandResult<&Record> {
        self.book
            .get(name)
            .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
    }
}

/// Read one line, replacing bytes that are not UTF-8. `None` at end of input.
fn read_input_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}
