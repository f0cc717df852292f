//! Line-driven navigator over the catalog
//!
//! Sections, then operations, then one prompt per parameter. Input is fed a
//! line at a time through [`Navigator::submit`]; the caller renders
//! [`Navigator::prompt`] and runs whatever [`Action::Run`] hands back.

use super::registry;
use super::types::{Args, OperationSpec, ParamDefault, Section};
use crate::error::{Error, Result};
use crate::settings::Settings;
use std::fmt::Write as _;

/// Where the navigator currently is
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Sections,
    Operations(Section),
    Arguments {
        op: &'static OperationSpec,
        index: usize,
        args: Args,
    },
}

/// What the caller should do after a line of input
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Show the next prompt
    Continue,
    /// All arguments collected
    Run(&'static OperationSpec, Args),
    Quit,
}

/// Interactive state machine
#[derive(Debug, Clone)]
pub struct Navigator<'a> {
    settings: &'a Settings,
    screen: Screen,
}

impl<'a> Navigator<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self {
            settings,
            screen: Screen::Sections,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Text to show before reading the next line
    pub fn prompt(&self) -> String {
        let mut out = String::new();
        match &self.screen {
            Screen::Sections => {
                for (i, section) in Section::ALL.iter().enumerate() {
                    let _ = writeln!(out, "{}) {section}", i + 1);
                }
                out.push_str("q) Quit\n> ");
            }
            Screen::Operations(section) => {
                let _ = writeln!(out, "[{section}]");
                for (i, op) in registry::in_section(*section).iter().enumerate() {
                    let _ = writeln!(out, "{}) {:<20} {}", i + 1, op.name, op.summary);
                }
                out.push_str("b) Back\n> ");
            }
            Screen::Arguments { op, index, .. } => {
                let param = &op.params[*index];
                let _ = write!(out, "{} {}", op.name, param.name);
                match (param.default, param.default_text(self.settings)) {
                    (ParamDefault::Required, _) => {}
                    (_, Some(text)) if !text.is_empty() => {
                        let _ = write!(out, " (Enter for {text})");
                    }
                    _ => out.push_str(" (optional)"),
                }
                out.push_str(": ");
            }
        }
        out
    }

    /// Go up one level
    pub fn back(&mut self) {
        self.screen = match &self.screen {
            Screen::Sections | Screen::Operations(_) => Screen::Sections,
            Screen::Arguments { op, .. } => Screen::Operations(op.section),
        };
    }

    /// Feed one line of input
    ///
    /// An invalid line returns an error and leaves the screen unchanged, so
    /// the same prompt can be shown again.
    pub fn submit(&mut self, line: &str) -> Result<Action> {
        let input = line.trim();

        if matches!(input, ":q" | ":quit") {
            return Ok(Action::Quit);
        }
        if input == ":back" {
            self.back();
            return Ok(Action::Continue);
        }

        match &mut self.screen {
            Screen::Sections => {
                if matches!(input, "q" | "quit") {
                    return Ok(Action::Quit);
                }
                let section = pick(input, &Section::ALL, |s| s.title())?;
                self.screen = Screen::Operations(section);
                Ok(Action::Continue)
            }
            Screen::Operations(section) => {
                if matches!(input, "b" | "back") {
                    self.back();
                    return Ok(Action::Continue);
                }
                let ops = registry::in_section(*section);
                let op = pick(input, &ops, |op| op.name)?;
                self.screen = Screen::Arguments {
                    op,
                    index: 0,
                    args: Args::new(),
                };
                Ok(self.advance())
            }
            Screen::Arguments { op, index, args } => {
                let param = &op.params[*index];
                let value = param.resolve(Some(input), self.settings)?;
                args.insert(param.name, value);
                *index += 1;
                Ok(self.advance())
            }
        }
    }

    /// Run the operation once every parameter has a value
    fn advance(&mut self) -> Action {
        if let Screen::Arguments { op, index, args } = &self.screen {
            if *index >= op.params.len() {
                let op = *op;
                let action = Action::Run(op, args.clone());
                self.screen = Screen::Operations(op.section);
                return action;
            }
        }
        Action::Continue
    }
}

/// Select by 1-based number or by name (case-insensitive)
fn pick<T: Copy>(input: &str, items: &[T], name: impl Fn(&T) -> &str) -> Result<T> {
    if let Ok(n) = input.parse::<usize>() {
        if let Some(item) = n.checked_sub(1).and_then(|i| items.get(i)) {
            return Ok(*item);
        }
    }
    items
        .iter()
        .find(|item| name(item).eq_ignore_ascii_case(input))
        .copied()
        .ok_or_else(|| Error::invalid_argument("selection", format!("no entry '{input}'")))
}
