//! Walks the fixture registry and checks the value-type contract of every
//! registered type: reset, clone equality, metadata lookup and visit order.
use std::process::ExitCode;

use clap::Parser;
use once_cell::sync::Lazy;
use regex::Regex;
use schema_fixtures::fixtures::registry::{self, Table, TypeEntry};
use schema_fixtures::info::FieldInfo;
use schema_fixtures::value::FieldValue;
use serde::Serialize;

/// Attribute, selection and enumerator names must be usable as XML names.
static FIELD_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_.\-]*$").unwrap());

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// run the registry contract checks and print a JSON summary
#[derive(Parser, Debug)]
struct Cli {
    /// only check types whose name matches this regex
    #[arg(long, short)]
    filter: Option<String>,

    /// pretty-print the summary
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

#[derive(Debug, Serialize)]
struct Failure {
    type_name: &'static str,
    check: &'static str,
    detail: String,
}

#[derive(Debug, Default, Serialize)]
struct Summary {
    checked: usize,
    failed: usize,
    failures: Vec<Failure>,
}

struct Checker<'a> {
    entry: &'static TypeEntry,
    failures: &'a mut Vec<Failure>,
}

// ————————————————————————————————————————————————————————————————————————————
// CHECKS
// ————————————————————————————————————————————————————————————————————————————

impl Checker<'_> {
    fn fail(&mut self, check: &'static str, detail: impl Into<String>) {
        self.failures.push(Failure { type_name: self.entry.name, check, detail: detail.into() });
    }

    fn run(&mut self) {
        self.check_names();
        self.check_reset();
        self.check_clone();
        match self.entry.table {
            Table::Attributes(table) => self.check_sequence(table),
            Table::Selections(table) => self.check_choice(table),
            Table::Enumerators(_) | Table::Empty => {}
        }
    }

    fn check_names(&mut self) {
        let names: Vec<&'static str> = match self.entry.table {
            Table::Attributes(t) | Table::Selections(t) => t.iter().map(|i| i.name).collect(),
            Table::Enumerators(t) => t.iter().map(|i| i.name).collect(),
            Table::Empty => Vec::new(),
        };
        for name in names {
            if !FIELD_NAME.is_match(name) {
                self.fail("names", format!("{name:?} is not a valid field name"));
            }
        }
    }

    fn check_reset(&mut self) {
        let fresh = (self.entry.make)();
        let mut value = (self.entry.make)();
        populate(value.as_mut());
        value.reset();
        if !value.equals(fresh.as_ref()) {
            self.fail("reset", format!("reset left {value:?}"));
        }
        value.reset();
        if !value.equals(fresh.as_ref()) {
            self.fail("reset", "second reset changed the value");
        }
    }

    fn check_clone(&mut self) {
        let mut value = (self.entry.make)();
        populate(value.as_mut());
        let copy = value.clone_value();
        if !copy.equals(value.as_ref()) || !value.equals(copy.as_ref()) {
            self.fail("clone", "copy does not compare equal to its source");
        }
    }

    fn check_sequence(&mut self, table: &'static [FieldInfo]) {
        let value = (self.entry.make)();
        let Some(sequence) = value.as_sequence() else {
            self.fail("lookup", "registered as a sequence but has no sequence view");
            return;
        };
        for info in table {
            if !sequence.has_attribute(info.id) {
                self.fail("lookup", format!("id {} not found", info.id));
            }
            match sequence.lookup_attribute(info.name) {
                Some(found) if found.id == info.id => {}
                other => self.fail("lookup", format!("{:?} resolved to {other:?}", info.name)),
            }
        }

        let mut visited = Vec::new();
        let ret = sequence.access_attributes(&mut |_: &dyn FieldValue, info: &FieldInfo| {
            visited.push(info.id);
            0
        });
        let expected: Vec<i32> = table.iter().map(|i| i.id).collect();
        if ret != 0 || visited != expected {
            self.fail("visit", format!("visited {visited:?} (ret {ret}), expected {expected:?}"));
        }
    }

    fn check_choice(&mut self, table: &'static [FieldInfo]) {
        let mut value = (self.entry.make)();
        let Some(choice) = value.as_choice_mut() else {
            self.fail("lookup", "registered as a choice but has no choice view");
            return;
        };
        if !choice.is_undefined() {
            self.fail("visit", "default value has an active selection");
        }
        for info in table {
            if !choice.has_selection(info.id) || choice.lookup_selection(info.name).map(|i| i.id) != Some(info.id) {
                self.fail("lookup", format!("selection {:?} does not resolve", info.name));
            }
            if let Err(err) = choice.make_selection(info.id) {
                self.fail("visit", err.to_string());
                continue;
            }
            let mut seen = None;
            let ret = choice.access_selection(&mut |_: &dyn FieldValue, found: &FieldInfo| {
                seen = Some(found.id);
                0
            });
            if ret != 0 || seen != Some(info.id) || choice.selection_name() != info.name {
                self.fail("visit", format!("selection {} visited as {seen:?}", info.id));
            }
        }
    }
}

/// Move a default value away from its default where the shape allows it.
fn populate(value: &mut dyn FieldValue) {
    if let Some(sequence) = value.as_sequence_mut() {
        sequence.manipulate_attributes(&mut |field: &mut dyn FieldValue, _: &FieldInfo| {
            populate_leaf(field);
            0
        });
    } else {
        populate_leaf(value);
    }
}

fn populate_leaf(value: &mut dyn FieldValue) {
    if let Some(array) = value.as_array_mut() {
        array.resize(1);
    } else if let Some(nullable) = value.as_nullable_mut() {
        nullable.make_value();
    } else if let Some(choice) = value.as_choice_mut() {
        let _ = choice.make_selection(0);
    } else if let Some(enumeration) = value.as_enumeration_mut() {
        if let Some(last) = enumeration.enumerator_info().last() {
            let _ = enumeration.assign_from_int(last.value);
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// ENTRY
// ————————————————————————————————————————————————————————————————————————————

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let filter = cli.filter.as_deref().map(Regex::new).transpose()?;

    let mut summary = Summary::default();
    for entry in registry::entries() {
        if filter.as_ref().is_some_and(|re| !re.is_match(entry.name)) {
            continue;
        }
        summary.checked += 1;
        let before = summary.failures.len();
        Checker { entry, failures: &mut summary.failures }.run();
        if summary.failures.len() > before {
            summary.failed += 1;
        }
    }

    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&summary)?
    } else {
        serde_json::to_string(&summary)?
    };
    println!("{rendered}");

    if summary.failed > 0 {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
