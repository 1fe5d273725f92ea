//! Interactive demurrage prompt.
//!
//! Walks the user through container type, size and storage duration,
//! prints the charge, and offers another round. Bad input re-prompts;
//! closing the input ends the session.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use colored::Colorize;

use crate::calculation::calculate_demurrage;
use crate::config::Tariff;
use crate::models::{
    ContainerSize, ContainerType, DayPolicy, DemurrageCharge, StoragePeriod, parse_storage_date,
};

use super::render::render_charge;

/// How the user supplies the storage duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DurationInput {
    Days,
    Dates,
}

impl FromStr for DurationInput {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "days" => Ok(DurationInput::Days),
            "dates" => Ok(DurationInput::Dates),
            _ => Err(()),
        }
    }
}

/// A prompt session over any line reader and writer.
///
/// # Example
///
/// ```
/// use demurrage_engine::cli::Prompt;
/// use demurrage_engine::config::Tariff;
/// use std::io::Cursor;
///
/// let input = Cursor::new("1\n1\n1\n21\nn\n");
/// let mut output = Vec::new();
/// Prompt::new(input, &mut output, Tariff::standard()).run().unwrap();
///
/// assert!(String::from_utf8_lossy(&output).contains("35.000"));
/// ```
pub struct Prompt<'a, R, W> {
    input: R,
    output: W,
    tariff: &'a Tariff,
    day_policy: DayPolicy,
}

impl<'a, R: BufRead, W: Write> Prompt<'a, R, W> {
    /// Creates a prompt reading from `input` and writing to `output`.
    pub fn new(input: R, output: W, tariff: &'a Tariff) -> Self {
        Self {
            input,
            output,
            tariff,
            day_policy: DayPolicy::default(),
        }
    }

    /// Sets which raw day counts are accepted.
    pub fn with_day_policy(mut self, day_policy: DayPolicy) -> Self {
        self.day_policy = day_policy;
        self
    }

    /// Runs calculations until the user declines another or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", "Demurrage Calculator".bold().cyan())?;
        writeln!(self.output)?;

        match self.run_sessions() {
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                writeln!(self.output)?;
            }
            other => other?,
        }

        writeln!(self.output, "{}", "Goodbye!".cyan())?;
        Ok(())
    }

    fn run_sessions(&mut self) -> io::Result<()> {
        loop {
            let charge = self.collect_and_calculate()?;
            writeln!(self.output)?;
            render_charge(&mut self.output, &charge)?;
            writeln!(self.output)?;

            if !self.ask_yes_no("Calculate another? (y/n): ")? {
                return Ok(());
            }
            writeln!(self.output)?;
        }
    }

    fn collect_and_calculate(&mut self) -> io::Result<DemurrageCharge> {
        let container_type = self.ask_container_type()?;
        let container_size = self.ask_container_size()?;
        let days = self.ask_duration()?;
        Ok(calculate_demurrage(
            container_type,
            container_size,
            days,
            self.tariff,
        ))
    }

    fn ask_container_type(&mut self) -> io::Result<ContainerType> {
        writeln!(self.output, "{}", "Select container type:".bold())?;
        for (i, t) in ContainerType::ALL.iter().enumerate() {
            writeln!(
                self.output,
                "  {}. {} ({} free days)",
                i + 1,
                t,
                self.tariff.free_days(*t)
            )?;
        }
        self.ask("Enter choice (1-4): ", |input| {
            parse_choice(input, &ContainerType::ALL)
        })
    }

    fn ask_container_size(&mut self) -> io::Result<ContainerSize> {
        writeln!(self.output, "{}", "Select container size:".bold())?;
        for (i, s) in ContainerSize::ALL.iter().enumerate() {
            writeln!(self.output, "  {}. {}ft", i + 1, s)?;
        }
        self.ask("Enter choice (1-2): ", |input| {
            parse_choice(input, &ContainerSize::ALL)
        })
    }

    fn ask_duration(&mut self) -> io::Result<u32> {
        writeln!(self.output, "{}", "How do you want to enter the duration?".bold())?;
        writeln!(self.output, "  1. Number of days")?;
        writeln!(self.output, "  2. Start and end dates")?;
        let mode = self.ask("Enter choice (1-2): ", |input| {
            parse_choice(input, &[DurationInput::Days, DurationInput::Dates])
        })?;

        match mode {
            DurationInput::Days => {
                let policy = self.day_policy;
                self.ask("Number of days: ", |input| {
                    let days: i64 = input
                        .parse()
                        .map_err(|_| format!("'{}' is not a whole number of days.", input))?;
                    policy.validate(days).map_err(|e| e.to_string())
                })
            }
            DurationInput::Dates => {
                let start = self.ask("Start date (DD/MM/YYYY): ", |input| {
                    parse_storage_date(input).map_err(|e| e.to_string())
                })?;
                let period = self.ask("End date (DD/MM/YYYY): ", |input| {
                    parse_storage_date(input)
                        .and_then(|end| StoragePeriod::new(start, end))
                        .map_err(|e| e.to_string())
                })?;
                let days = period.days();
                writeln!(
                    self.output,
                    "Storage period: {} to {} ({} days)",
                    period.start_date.format("%d/%m/%Y"),
                    period.end_date.format("%d/%m/%Y"),
                    days
                )?;
                Ok(days)
            }
        }
    }

    fn ask_yes_no(&mut self, prompt: &str) -> io::Result<bool> {
        self.ask(prompt, |input| match input.to_ascii_lowercase().as_str() {
            "y" | "yes" => Ok(true),
            "n" | "no" => Ok(false),
            _ => Err("Please answer y or n.".to_string()),
        })
    }

    /// Prompts until `parse` accepts a line, printing each rejection.
    fn ask<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, String>,
    ) -> io::Result<T> {
        loop {
            write!(self.output, "{}", prompt.bold())?;
            self.output.flush()?;

            let line = self.read_line()?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(message) => writeln!(self.output, "{}", message.red())?,
            }
        }
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim().to_string())
    }
}

/// Accepts a 1-based menu number or anything the option type parses.
fn parse_choice<T: Copy + FromStr>(input: &str, options: &[T]) -> Result<T, String> {
    if let Ok(n) = input.parse::<usize>() {
        if (1..=options.len()).contains(&n) {
            return Ok(options[n - 1]);
        }
    }
    input.parse::<T>().map_err(|_| {
        format!(
            "Invalid choice '{}'. Enter a number from 1 to {}.",
            input,
            options.len()
        )
    })
}
