//! Minimal CLI: list | info | print | daycount
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;

use crate::daycount::Convention;
use crate::fixtures::registry::{self, Table, TypeEntry};
use crate::printer;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// inspect the metadata and default values of the registered fixture types
#[derive(Parser, Debug)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// list every registered type with its category and field count
    List(ListOut),
    /// print the attribute, selection or enumerator table of a type
    Info(InfoOut),
    /// print the default value of a type
    Print(PrintOut),
    /// day and year differences between two ISO dates
    Daycount(DaycountOut),
}

#[derive(Args, Debug, Clone)]
struct ListOut {
    /// only types from this family (ratsnest, basic_schema, nillable, encoder)
    #[arg(long)]
    family: Option<String>,
}

#[derive(Args, Debug, Clone)]
struct InfoOut {
    /// registered type name, e.g. Sequence4
    type_name: String,

    /// emit the entry as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Args, Debug, Clone)]
struct PrintOut {
    /// registered type name, e.g. BasicSchemaElement
    type_name: String,

    /// starting indentation level; negative suppresses the first indent
    #[arg(
        long,
        default_value_t = 0,
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i32).range(-1024..=1024)
    )]
    level: i32,

    /// spaces per level; negative prints everything on one line
    #[arg(
        long,
        default_value_t = 4,
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i32).range(-1024..=1024)
    )]
    spaces: i32,
}

#[derive(Args, Debug, Clone)]
struct DaycountOut {
    /// begin date (YYYY-MM-DD)
    begin: NaiveDate,

    /// end date (YYYY-MM-DD)
    end: NaiveDate,

    /// actual/365.25, actual/360 or actual/365-fixed
    #[arg(long, default_value = "actual/365.25")]
    convention: Convention,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn run(&self) -> anyhow::Result<()> {
        match &self.cmd {
            Command::List(target) => {
                let entries = registry::entries()
                    .filter(|entry| target.family.as_deref().is_none_or(|family| entry.family == family));
                for entry in entries {
                    println!(
                        "{:<52} {:<14} {:<12} {}",
                        entry.name.bold(),
                        entry.category.to_string(),
                        entry.family.dimmed(),
                        entry.table.len(),
                    );
                }
            }
            Command::Info(target) => {
                let entry = registry::lookup(&target.type_name)?;
                if target.json {
                    println!("{}", serde_json::to_string_pretty(entry)?);
                } else {
                    print_table(entry);
                }
            }
            Command::Print(target) => {
                let entry = registry::lookup(&target.type_name)?;
                let value = (entry.make)();
                let rendered = printer::render(value.as_ref(), target.level, target.spaces);
                if target.spaces < 0 {
                    println!("{rendered}");
                } else {
                    print!("{rendered}");
                }
            }
            Command::Daycount(target) => {
                let convention = target.convention;
                let days = convention.days_diff(target.begin, target.end);
                let years = convention.years_diff(target.begin, target.end);
                println!("{} {}", "convention:".dimmed(), convention);
                println!("{} {days}", "days:".dimmed());
                println!("{} {years}", "years:".dimmed());
            }
        }
        Ok(())
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn print_table(entry: &TypeEntry) {
    println!("{} ({}, {})", entry.name.bold(), entry.category, entry.family);
    match entry.table {
        Table::Attributes(fields) | Table::Selections(fields) => {
            for info in fields {
                println!("  {:>3}  {:<28} {}", info.id, info.name.green(), info.formatting_mode);
            }
        }
        Table::Enumerators(enumerators) => {
            for info in enumerators {
                println!("  {:>3}  {}", info.value, info.name.green());
            }
        }
        Table::Empty => println!("  {}", "(customized type, no table)".dimmed()),
    }
}

// ------------------------------- Tests ------------------------------------ //

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_negative_print_widths() {
        let cli = CommandLineInterface::try_parse_from([
            "schema-fixtures", "print", "Sequence3", "--level", "-1", "--spaces", "-1",
        ])
        .unwrap();
        match cli.cmd {
            Command::Print(target) => assert_eq!((target.level, target.spaces), (-1, -1)),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn rejects_out_of_range_print_widths() {
        for args in [["--level", "-2147483648"], ["--level", "70000"], ["--spaces", "70000"]] {
            let parsed = CommandLineInterface::try_parse_from(
                ["schema-fixtures", "print", "Sequence3"].into_iter().chain(args),
            );
            assert!(parsed.is_err(), "{args:?}");
        }
    }

    #[test]
    fn parses_daycount_arguments() {
        let cli = CommandLineInterface::try_parse_from([
            "schema-fixtures", "daycount", "2004-02-01", "2005-02-01", "--convention", "act/360",
        ])
        .unwrap();
        match cli.cmd {
            Command::Daycount(target) => {
                assert_eq!(target.convention, Convention::Actual360);
                assert_eq!(target.begin, NaiveDate::from_ymd_opt(2004, 2, 1).unwrap());
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn unknown_type_is_an_error() {
        let cli = CommandLineInterface::try_parse_from(["schema-fixtures", "info", "Nope"]).unwrap();
        assert!(cli.run().is_err());
    }
}
