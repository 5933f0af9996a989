//! Interactive quoting session
//!
//! Reads `field=value` lines, replaces that field on the session's form and
//! re-prices the job after every change.

use crate::config::{DisplayConfig, FormDefaults};
use crate::error::Result;
use crate::form::{FormField, JobForm};
use crate::pricing::PricingEngine;
use crate::render::{self, OutputFormat};
use colored::Colorize;
use std::fmt::Write as _;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// What the caller should do after a line was handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Continue(String),
    Quit,
}

/// One user's form plus the engine that prices it
pub struct Session {
    form: JobForm,
    defaults: FormDefaults,
    engine: PricingEngine,
    display: DisplayConfig,
    format: OutputFormat,
}

impl Session {
    pub fn new(
        engine: PricingEngine,
        defaults: FormDefaults,
        display: DisplayConfig,
        format: OutputFormat,
    ) -> Self {
        Self {
            form: JobForm::new(&defaults),
            defaults,
            engine,
            display,
            format,
        }
    }

    pub fn form(&self) -> &JobForm {
        &self.form
    }

    /// Price the current form contents
    pub fn quote(&self) -> Result<String> {
        let (input, warnings) = self.form.to_job_input();
        let breakdown = self.engine.compute(&input);

        match self.format {
            OutputFormat::Json => Ok(render::render_json(&input, &breakdown, &warnings)?),
            OutputFormat::Text => {
                let mut out = render::render_warnings(&warnings);
                out.push_str(&render::render_breakdown(&breakdown, &self.display));
                Ok(out)
            }
        }
    }

    /// Handle one input line
    pub fn handle_line(&mut self, line: &str) -> Result<Step> {
        let line = line.trim();

        match line {
            "" => Ok(Step::Continue(String::new())),
            "quit" | "exit" | "q" => Ok(Step::Quit),
            "help" | "?" => Ok(Step::Continue(help_text())),
            "show" => {
                let mut out = render::form_table(&self.form).to_string();
                out.push('\n');
                out.push_str(&self.quote()?);
                Ok(Step::Continue(out))
            }
            "reset" => {
                self.form = JobForm::new(&self.defaults);
                info!("Form reset to defaults");
                Ok(Step::Continue(self.quote()?))
            }
            _ => {
                let field = self.form.apply_assignment(line)?;
                debug!(field = field.name(), value = self.form.get(field), "Field updated");
                Ok(Step::Continue(self.quote()?))
            }
        }
    }

    /// Run until `quit` or end of input
    ///
    /// Bad lines are reported on `output` and the session carries on. Bytes
    /// that are not UTF-8 are replaced, so such a line is coerced like any
    /// other invalid text.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
    ) -> std::io::Result<()> {
        writeln!(output, "{}", "Print job cost calculator. Type 'help' for commands.".bold())?;

        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);

            match self.handle_line(&line) {
                Ok(Step::Quit) => break,
                Ok(Step::Continue(text)) => {
                    if !text.is_empty() {
                        writeln!(output, "{}", text)?;
                    }
                }
                Err(e) => writeln!(output, "{} {}", "error:".red().bold(), e)?,
            }
            output.flush()?;
        }

        Ok(())
    }
}

fn help_text() -> String {
    let mut out = String::from("Commands:\n");
    out.push_str("  <field>=<value>  replace a field and re-price\n");
    out.push_str("  show             print the form and the current quote\n");
    out.push_str("  reset            restore the default form\n");
    out.push_str("  quit             leave the session\n");
    out.push_str("Fields:\n");
    for field in FormField::ALL {
        let _ = writeln!(out, "  {:<26} {}", field.name(), field.label());
    }
    out
}
