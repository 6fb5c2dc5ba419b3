//! Interactive menu loop and the operations it dispatches to.
//!
//! The controller owns an injected [`CountryStore`] plus the console input and
//! output. Each loop iteration renders the menu, reads one command, and runs
//! at most one operation. Operation failures are reported on the console and
//! the loop continues; only a failure to write to the console ends the
//! session early.

use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};

use crate::{
    analysis::analyze,
    country::{Country, CountryEdit},
    menu::{Command, Menu},
    persist::{CountryStore, StoreError},
    render::{format_percent, write_analysis, write_country_table, write_menu},
    types::{CountryCode, InvalidCountryCode, Percent},
};

/// Reasons an operation is abandoned.
#[derive(Debug, thiserror::Error)]
pub enum OperationError {
    #[error("Problem with input.")]
    Input(#[source] io::Error),
    #[error("Input ended.")]
    EndOfInput,
    #[error("Problem writing output: {0}")]
    Output(#[from] io::Error),
    #[error("{0}")]
    Validation(String),
    #[error("'{input}' is not a valid number for {field}.")]
    Parse { field: &'static str, input: String },
    #[error("No country with code '{0}' was found.")]
    NotFound(CountryCode),
    #[error("{0}")]
    Store(#[from] StoreError),
}

impl From<InvalidCountryCode> for OperationError {
    fn from(value: InvalidCountryCode) -> Self {
        Self::Validation(value.to_string())
    }
}

/// Outcome of one loop iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Running,
    Terminated,
}

pub struct Controller<S, R, W> {
    store: S,
    input: R,
    output: W,
    menu: Menu,
}

impl<S, R, W> Controller<S, R, W>
where
    S: CountryStore,
    R: BufRead,
    W: Write,
{
    pub fn new(store: S, input: R, output: W) -> Self {
        Self::with_menu(store, input, output, Menu::default())
    }

    pub fn with_menu(store: S, input: R, output: W, menu: Menu) -> Self {
        Self {
            store,
            input,
            output,
            menu,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_parts(self) -> (S, R, W) {
        (self.store, self.input, self.output)
    }

    /// Runs until `quit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        while self.step()? == Flow::Running {}
        Ok(())
    }

    /// Renders the menu, reads one command, and runs it.
    pub fn step(&mut self) -> io::Result<Flow> {
        write_menu(&mut self.output, &self.menu)?;
        write!(self.output, "Select an option: ")?;
        self.output.flush()?;

        let choice = match read_line(&mut self.input) {
            Ok(Some(line)) => line,
            Ok(None) => {
                info!("input closed, ending session");
                writeln!(self.output)?;
                writeln!(self.output, "End of Program")?;
                return Ok(Flow::Terminated);
            }
            Err(err) => {
                warn!(%err, "failed to read menu choice");
                writeln!(self.output, "Problem with input.")?;
                return Ok(Flow::Running);
            }
        };

        let Some(command) = self.menu.select(&choice) else {
            writeln!(self.output, "Unknown choice: '{choice}'. Try again.")?;
            writeln!(self.output)?;
            return Ok(Flow::Running);
        };

        debug!(?command, "dispatching menu command");
        if command == Command::Quit {
            writeln!(self.output, "End of Program")?;
            return Ok(Flow::Terminated);
        }

        match self.dispatch(command) {
            Ok(()) => {}
            Err(OperationError::Output(err)) => return Err(err),
            Err(err) => {
                warn!(?command, %err, "operation aborted");
                writeln!(self.output, "{err}")?;
            }
        }
        Ok(Flow::Running)
    }

    fn dispatch(&mut self, command: Command) -> Result<(), OperationError> {
        match command {
            Command::View => self.list(),
            Command::Analysis => self.analysis(),
            Command::Add => self.add(),
            Command::Edit => self.edit(),
            Command::Delete => self.delete(),
            Command::Quit => Ok(()),
        }
    }

    pub fn list(&mut self) -> Result<(), OperationError> {
        let countries = self.store.find_all()?;
        write_country_table(&mut self.output, &countries)?;
        Ok(())
    }

    pub fn analysis(&mut self) -> Result<(), OperationError> {
        let countries = self.store.find_all()?;
        write_analysis(&mut self.output, &analyze(&countries))?;
        Ok(())
    }

    pub fn add(&mut self) -> Result<(), OperationError> {
        let code = self.prompt("Enter the 3 letter country code: ")?;
        let name = self.prompt("Enter the country name: ")?;
        let internet_users =
            self.prompt("Enter the percentage of internet users (blank if unknown): ")?;
        let adult_literacy_rate =
            self.prompt("Enter the adult literacy rate (blank if unknown): ")?;

        // Every prompt is answered before any entry is checked.
        let code = CountryCode::parse(&code)?;
        let internet_users = parse_percent("internet users", &internet_users)?;
        let adult_literacy_rate = parse_percent("adult literacy rate", &adult_literacy_rate)?;

        let country = Country::builder(code, name.trim())
            .internet_users(internet_users)
            .adult_literacy_rate(adult_literacy_rate)
            .build();
        info!(%country, "adding country");
        let message = format!("Added {} ({}).", country.name, country.code);
        self.store.insert(country)?;
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    pub fn edit(&mut self) -> Result<(), OperationError> {
        let current = self.prompt_existing()?;
        writeln!(self.output, "Current name: {}", current.name)?;
        writeln!(
            self.output,
            "Current internet users: {}",
            format_percent(current.internet_users)
        )?;
        writeln!(
            self.output,
            "Current literacy rate: {}",
            format_percent(current.adult_literacy_rate)
        )?;

        let name = self.prompt("Enter the new name: ")?;
        let internet_users =
            self.prompt("Enter the new percentage of internet users (blank if unknown): ")?;
        let adult_literacy_rate =
            self.prompt("Enter the new adult literacy rate (blank if unknown): ")?;

        let internet_users = parse_percent("internet users", &internet_users)?;
        let adult_literacy_rate = parse_percent("adult literacy rate", &adult_literacy_rate)?;

        let updated = CountryEdit {
            name: name.trim().to_string(),
            internet_users,
            adult_literacy_rate,
        }
        .apply_to(&current);
        info!(%updated, "updating country");
        let message = format!("Updated {} ({}).", updated.name, updated.code);
        self.store.update(updated)?;
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    pub fn delete(&mut self) -> Result<(), OperationError> {
        let country = self.prompt_existing()?;
        info!(%country, "deleting country");
        self.store.delete(&country.code)?;
        writeln!(
            self.output,
            "Deleted {} ({}) from the list.",
            country.name, country.code
        )?;
        Ok(())
    }

    /// Lists every record, asks for a code, and returns the stored record.
    fn prompt_existing(&mut self) -> Result<Country, OperationError> {
        self.list()?;
        let code = CountryCode::parse(&self.prompt("Enter the 3 letter country code: ")?)?;
        self.store
            .find_by_code(&code)?
            .ok_or(OperationError::NotFound(code))
    }

    fn prompt(&mut self, text: &str) -> Result<String, OperationError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        read_line(&mut self.input)
            .map_err(OperationError::Input)?
            .ok_or(OperationError::EndOfInput)
    }
}

/// Parses a percentage entry. Blank text or `--` means "not available".
pub fn parse_percent(field: &'static str, text: &str) -> Result<Option<Percent>, OperationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed == crate::render::NOT_AVAILABLE {
        return Ok(None);
    }

    let parse_error = || OperationError::Parse {
        field,
        input: trimmed.to_string(),
    };
    let value: Percent = trimmed.parse().map_err(|_| parse_error())?;
    if !value.is_finite() {
        return Err(parse_error());
    }
    if !(0.0..=100.0).contains(&value) {
        return Err(OperationError::Validation(format!(
            "{field} must be between 0 and 100, got {value}"
        )));
    }
    Ok(Some(value))
}

/// Reads one line without its terminator. `Ok(None)` at end of input.
fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed_len);
    Ok(Some(line))
}
