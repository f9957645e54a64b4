//! Indentation-aware printing shared by every fixture type.
//!
//! Two knobs drive the layout:
//! - `level`: nesting depth; a negative level suppresses the indentation of the
//!   first line only (used when a value follows `name = ` on the same line).
//! - `spaces_per_level`: indentation width; a negative width renders the whole
//!   value on one line with no line breaks.
//!
//! `Display` on every fixture type is `print(f, 0, -1)`.
use std::fmt::{self, Write};

use crate::info::{FieldInfo, FormattingMode};
use crate::value::FieldValue;

/// Indent by `level * spaces_per_level` spaces. A width that does not fit in
/// an `i32` is a formatting error.
pub fn indent(out: &mut dyn Write, level: i32, spaces_per_level: i32) -> fmt::Result {
    if level > 0 && spaces_per_level > 0 {
        let width = level.checked_mul(spaces_per_level).ok_or(fmt::Error)? as usize;
        write!(out, "{:width$}", "")?;
    }
    Ok(())
}

/// Print a scalar already formatted by the caller.
pub fn print_scalar(
    out: &mut dyn Write,
    level: i32,
    spaces_per_level: i32,
    value: fmt::Arguments<'_>,
) -> fmt::Result {
    indent(out, level, spaces_per_level)?;
    out.write_fmt(value)?;
    if spaces_per_level >= 0 {
        out.write_char('\n')?;
    }
    Ok(())
}

/// Render any field value into a `String`. Output stops at an indent too wide
/// to print and ends in ` ...`.
pub fn render(value: &dyn FieldValue, level: i32, spaces_per_level: i32) -> String {
    let mut out = String::new();
    if value.print_value(&mut out, level, spaces_per_level).is_err() {
        out.push_str(" ...");
    }
    out
}

/// Bracketed block printer: `start`, any number of entries, `end`.
pub struct Printer<'a> {
    out: &'a mut dyn Write,
    level: i32,
    spaces_per_level: i32,
    suppress_initial_indent: bool,
}

impl<'a> Printer<'a> {
    pub fn new(out: &'a mut dyn Write, level: i32, spaces_per_level: i32) -> Self {
        Self {
            out,
            level: level.saturating_abs(),
            spaces_per_level,
            suppress_initial_indent: level < 0,
        }
    }

    pub fn start(&mut self) -> fmt::Result {
        if !self.suppress_initial_indent {
            indent(self.out, self.level, self.spaces_per_level)?;
        }
        self.out.write_char('[')?;
        self.newline()
    }

    pub fn end(&mut self) -> fmt::Result {
        if self.spaces_per_level >= 0 {
            indent(self.out, self.level, self.spaces_per_level)?;
        } else {
            self.out.write_char(' ')?;
        }
        self.out.write_char(']')?;
        self.newline()
    }

    /// `name = value` on its own line (or after a space in one-line mode).
    pub fn print_attribute(&mut self, name: &str, value: &dyn FieldValue) -> fmt::Result {
        self.print_indentation()?;
        write!(self.out, "{name} = ")?;
        let level = -self.entry_level();
        value.print_value(self.out, level, self.spaces_per_level)
    }

    /// `print_attribute` under the field's table name. HEX byte arrays print
    /// as a single hex run, `name = [ 0AFF ]`.
    pub fn print_field(&mut self, info: &FieldInfo, value: &dyn FieldValue) -> fmt::Result {
        let bytes = value.as_any().downcast_ref::<Vec<u8>>();
        match bytes {
            Some(bytes) if info.formatting_mode.base() == FormattingMode::HEX => {
                self.print_indentation()?;
                write!(self.out, "{} = ", info.name)?;
                let level = -self.entry_level();
                print_scalar(self.out, level, self.spaces_per_level, format_args!("[ {} ]", HexDump(bytes)))
            }
            _ => self.print_attribute(info.name, value),
        }
    }

    /// An anonymous entry, used for array elements.
    pub fn print_value(&mut self, value: &dyn FieldValue) -> fmt::Result {
        self.print_indentation()?;
        let level = -self.entry_level();
        value.print_value(self.out, level, self.spaces_per_level)
    }

    /// A bare line of text at entry indentation.
    pub fn print_text(&mut self, text: &str) -> fmt::Result {
        self.print_indentation()?;
        self.out.write_str(text)?;
        self.newline()
    }

    fn print_indentation(&mut self) -> fmt::Result {
        if self.spaces_per_level < 0 {
            self.out.write_char(' ')
        } else {
            let level = self.entry_level();
            indent(self.out, level, self.spaces_per_level)
        }
    }

    fn entry_level(&self) -> i32 {
        self.level.saturating_add(1)
    }

    fn newline(&mut self) -> fmt::Result {
        if self.spaces_per_level >= 0 {
            self.out.write_char('\n')?;
        }
        Ok(())
    }
}

struct HexDump<'a>(&'a [u8]);

impl fmt::Display for HexDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|byte| write!(f, "{byte:02X}"))
    }
}

// ------------------------------- Tests ------------------------------------ //
