//! Interactive session
//!
//! A line-oriented stand-in for the web form. Each line is one command:
//!
//! ```text
//! length 10      set a field (also: l, width/w, depth/d)
//! calc           press Calculate
//! clear          press Clear
//! show           print the results area again
//! json           toggle JSON output
//! help | quit
//! ```

use std::io::{self, Write};

use calc_core::calculations::{ConcreteResult, DimensionField};
use calc_core::display::ResultsView;
use calc_core::EstimateForm;

/// One parsed input line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Replace a field's text (empty text empties the field)
    Set(DimensionField, String),
    Calculate,
    Clear,
    Show,
    ToggleJson,
    Help,
    Quit,
    /// Blank line
    Nothing,
    Unknown(String),
}

/// Parse a single line of input.
pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_lowercase().as_str() {
        "" => Command::Nothing,
        "l" | "length" => Command::Set(DimensionField::Length, rest.to_string()),
        "w" | "width" => Command::Set(DimensionField::Width, rest.to_string()),
        "d" | "depth" => Command::Set(DimensionField::Depth, rest.to_string()),
        "c" | "calc" | "calculate" => Command::Calculate,
        "clear" | "reset" => Command::Clear,
        "s" | "show" => Command::Show,
        "json" => Command::ToggleJson,
        "h" | "help" | "?" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    }
}

/// Form state plus output preferences for one interactive run
pub struct Session {
    pub form: EstimateForm,
    pub json: bool,
}

impl Session {
    pub fn new(json: bool) -> Self {
        Session {
            form: EstimateForm::new(),
            json,
        }
    }

    /// Apply a command, writing any feedback to `out`.
    ///
    /// Returns `Ok(false)` when the session should end.
    pub fn handle(&mut self, command: Command, out: &mut impl Write) -> io::Result<bool> {
        match command {
            Command::Set(field, text) => {
                self.form.set_field(field, text);
            }
            Command::Calculate => {
                if !self.form.can_calculate() {
                    writeln!(out, "Calculate is disabled until length, width and depth are all entered.")?;
                } else {
                    // A rejected calculation changes nothing; re-show what is held.
                    self.form.calculate();
                    write_results(out, self.form.result(), self.json)?;
                }
            }
            Command::Clear => {
                self.form.clear();
                write_results(out, None, false)?;
            }
            Command::Show => {
                write_fields(out, &self.form)?;
                write_results(out, self.form.result(), self.json)?;
            }
            Command::ToggleJson => {
                self.json = !self.json;
                writeln!(out, "JSON output {}", if self.json { "on" } else { "off" })?;
            }
            Command::Help => write_help(out)?,
            Command::Quit => return Ok(false),
            Command::Nothing => {}
            Command::Unknown(line) => {
                writeln!(out, "Unknown command: {} (type 'help')", line)?;
            }
        }
        Ok(true)
    }
}

/// Run a single estimate from flag values and print the results area.
///
/// Returns whether the dimensions were accepted.
pub fn run_once(out: &mut impl Write, length: &str, width: &str, depth: &str, json: bool) -> io::Result<bool> {
    let mut form = EstimateForm::new();
    form.set_field(DimensionField::Length, length);
    form.set_field(DimensionField::Width, width);
    form.set_field(DimensionField::Depth, depth);

    let accepted = form.calculate().is_some();
    write_results(out, form.result(), json)?;
    Ok(accepted)
}

/// Print the current field text
pub fn write_fields(out: &mut impl Write, form: &EstimateForm) -> io::Result<()> {
    for field in DimensionField::ALL {
        let text = form.field(field);
        writeln!(out, "  {:<14} {}", field.display_name(), if text.is_empty() { "-" } else { text })?;
    }
    Ok(())
}

/// Print the results area, and the raw result as JSON when asked
pub fn write_results(out: &mut impl Write, result: Option<&ConcreteResult>, json: bool) -> io::Result<()> {
    writeln!(out, "═══════════════════════════════════════")?;
    writeln!(out, "  RESULTS")?;
    writeln!(out, "═══════════════════════════════════════")?;
    for line in ResultsView::from_result(result).lines() {
        writeln!(out, "{}", line)?;
    }
    writeln!(out, "═══════════════════════════════════════")?;

    if let (true, Some(result)) = (json, result) {
        match serde_json::to_string_pretty(result) {
            Ok(text) => writeln!(out, "{}", text)?,
            Err(e) => tracing::warn!("could not serialize result: {}", e),
        }
    }
    Ok(())
}

fn write_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Commands:")?;
    writeln!(out, "  length <ft>   set length (alias: l)")?;
    writeln!(out, "  width <ft>    set width (alias: w)")?;
    writeln!(out, "  depth <ft>    set depth (alias: d)")?;
    writeln!(out, "  calc          calculate volume and bags")?;
    writeln!(out, "  clear         empty all fields and results")?;
    writeln!(out, "  show          show fields and results")?;
    writeln!(out, "  json          toggle JSON output")?;
    writeln!(out, "  quit          leave")
}
