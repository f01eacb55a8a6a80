use std::{
    borrow::Cow,
    fs,
    io::{stdin, Read},
    path::PathBuf,
    process::exit,
};

use clap::{Args, Parser, Subcommand};
use console::style;
use phone_bill::{
    call::{self, CallRecord},
    explain::explain,
    pricer::{CallReport, Pricer, Report},
    tariff::{RatePeriod, Tariff},
};
use tabled::{settings::Style, Table, Tabled};

use crate::{error::Error, Result};

/// Calculate phone bills from call logs.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    #[clap(subcommand)]
    command: Command,
}

impl Cli {
    pub fn run(self) {
        if let Err(err) = self.command.run() {
            eprintln!("{err}");
            exit(1);
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the total cost of a call log.
    ///
    /// Only the amount is printed, without a currency.
    Total(Total),
    /// Analyze a call log.
    ///
    /// This command will show you a breakdown of the cost of every call, and which number was
    /// exempt for being called the most.
    Analyze(Analyze),
    /// Explain the tariff used for pricing calls.
    Explain,
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Self::Total(args) => args.run(),
            Self::Analyze(args) => args.run(),
            Self::Explain => {
                for line in explain(&Tariff::standard()).lines {
                    println!("- {line}");
                }

                Ok(())
            }
        }
    }
}

#[derive(Debug, Args)]
pub struct LogArgs {
    /// A path to the call log in csv format.
    ///
    /// Every line holds a number, a start time and an end time, e.g.
    /// `420774577453,13-01-2020 18:10:15,13-01-2020 18:12:57`.
    ///
    /// If no path is provided the log is read from standard in.
    #[arg(short = 'l', long)]
    log: Option<PathBuf>,
}

impl LogArgs {
    fn log_name(&self) -> Cow<'_, str> {
        self.log
            .as_ref()
            .map_or("<stdin>".into(), |path| path.to_string_lossy())
    }

    fn load_calls(&self) -> Result<Vec<CallRecord>> {
        let log = if let Some(path) = &self.log {
            fs::read_to_string(path).map_err(|e| Error::file(path.clone(), e))?
        } else {
            let mut log = String::new();
            stdin()
                .lock()
                .read_to_string(&mut log)
                .map_err(Error::Stdin)?;
            log
        };

        call::parse(&log).map_err(|e| Error::calculation(self.log_name(), e))
    }

    fn load_report(&self) -> Result<Report> {
        let calls = self.load_calls()?;

        Pricer::new(&calls)
            .build_report()
            .map_err(|e| Error::calculation(self.log_name(), e))
    }
}

#[derive(Debug, Parser)]
pub struct Total {
    #[command(flatten)]
    args: LogArgs,
}

impl Total {
    fn run(self) -> Result<()> {
        let report = self.args.load_report()?;
        println!("{}", report.total_cost);

        Ok(())
    }
}

#[derive(Debug, Parser)]
pub struct Analyze {
    #[command(flatten)]
    args: LogArgs,
    /// Print the report as json instead of a table.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Tabled)]
struct CallRow {
    line: usize,
    number: String,
    start: String,
    end: String,
    minutes: u64,
    period: &'static str,
    cost: String,
}

impl CallRow {
    fn new(call: &CallReport) -> Self {
        let period = match call.period {
            RatePeriod::Peak => "peak",
            RatePeriod::OffPeak => "off-peak",
        };

        Self {
            line: call.line,
            number: call.number.to_string(),
            start: call.start.to_string(),
            end: call.end.to_string(),
            minutes: call.minutes.count(),
            period,
            cost: call.cost.to_string(),
        }
    }

    fn exempt(self) -> Self {
        Self {
            number: style(self.number).green().to_string(),
            cost: style("free").green().to_string(),
            ..self
        }
    }
}

impl Analyze {
    fn run(self) -> Result<()> {
        let report = self.args.load_report()?;

        if self.json {
            let json = serde_json::to_string_pretty(&report).map_err(Error::Serialize)?;
            println!("{json}");
            return Ok(());
        }

        println!("{} `{}`", style("Analyzing").green(), self.args.log_name());

        let rows = report.calls.iter().map(|call| {
            let row = CallRow::new(call);

            if call.exempt {
                row.exempt()
            } else {
                row
            }
        });

        println!("{}", Table::new(rows).with(Style::modern()));

        match report.exempt_number {
            Some(number) => println!("Exempt number: {}", style(number).green()),
            None => println!("Exempt number: {}", style("<none>").dim()),
        }

        println!("Billed minutes: {}", report.total_minutes);
        println!("Total cost: {}", style(report.total_cost).bold());

        Ok(())
    }
}
