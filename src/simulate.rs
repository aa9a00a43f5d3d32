//! Headless gesture scripts
//!
//! A script drives a `ScreenMachine` through the same entry points the TUI
//! uses, one command per line:
//!
//! ```text
//! # unlock with a finger, then open the control center with the mouse
//! touch-down 400
//! touch-move 340
//! touch-up
//! mouse-down 100
//! mouse-move 140
//! mouse-up
//! toggle wifi
//! brightness 150
//! ```

use crate::state::{
    AppId, ControlSwitch, ControlToggleSet, ScreenMachine, ScreenMode, ScrollLock, Transition,
};
use anyhow::{anyhow, bail, Context, Result};
use serde::Serialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// One script command.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptCommand {
    TouchDown(f32),
    TouchMove(f32),
    TouchUp,
    TouchCancel,
    MouseDown(f32),
    MouseMove(f32),
    MouseUp,
    MouseLeave,
    Open(AppId),
    Close,
    Toggle(ControlSwitch),
    Brightness(i32),
}

fn parse_arg<T: FromStr>(command: &str, arg: Option<&str>) -> Result<T>
where
    T::Err: fmt::Display,
{
    let arg = arg.ok_or_else(|| anyhow!("'{}' needs an argument", command))?;
    arg.parse::<T>()
        .map_err(|e| anyhow!("Invalid argument '{}' for '{}': {}", arg, command, e))
}

fn no_arg(command: &str, arg: Option<&str>, value: ScriptCommand) -> Result<ScriptCommand> {
    match arg {
        Some(extra) => bail!("'{}' takes no argument, got '{}'", command, extra),
        None => Ok(value),
    }
}

impl FromStr for ScriptCommand {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (command, arg) = match s.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, Some(rest.trim()).filter(|r| !r.is_empty())),
            None => (s, None),
        };

        match command.to_lowercase().as_str() {
            "touch-down" => Ok(ScriptCommand::TouchDown(parse_arg(command, arg)?)),
            "touch-move" => Ok(ScriptCommand::TouchMove(parse_arg(command, arg)?)),
            "touch-up" => no_arg(command, arg, ScriptCommand::TouchUp),
            "touch-cancel" => no_arg(command, arg, ScriptCommand::TouchCancel),
            "mouse-down" => Ok(ScriptCommand::MouseDown(parse_arg(command, arg)?)),
            "mouse-move" => Ok(ScriptCommand::MouseMove(parse_arg(command, arg)?)),
            "mouse-up" => no_arg(command, arg, ScriptCommand::MouseUp),
            "mouse-leave" => no_arg(command, arg, ScriptCommand::MouseLeave),
            "open" => {
                let name = arg.ok_or_else(|| anyhow!("'open' needs an app name"))?;
                Ok(ScriptCommand::Open(AppId::new(name)))
            }
            "close" => no_arg(command, arg, ScriptCommand::Close),
            "toggle" => Ok(ScriptCommand::Toggle(parse_arg(command, arg)?)),
            "brightness" => Ok(ScriptCommand::Brightness(parse_arg(command, arg)?)),
            _ => bail!("Unknown command '{}'", command),
        }
    }
}

/// A parsed command with its 1-based line number.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptLine {
    pub number: usize,
    pub command: ScriptCommand,
}

/// Parse a whole script. Blank lines and `#` comments are skipped.
pub fn parse_script(text: &str) -> Result<Vec<ScriptLine>> {
    text.lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(number, line)| {
            let command = line
                .parse::<ScriptCommand>()
                .with_context(|| format!("line {}: {}", number, line))?;
            Ok(ScriptLine { number, command })
        })
        .collect()
}

/// A transition and the script line that caused it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepReport {
    pub line: usize,
    #[serde(flatten)]
    pub transition: Transition,
}

/// Everything a script run produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    pub transitions: Vec<StepReport>,
    pub final_mode: ScreenMode,
    pub controls: ControlToggleSet,
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.transitions {
            writeln!(
                f,
                "line {}: {} -> {} ({})",
                step.line,
                step.transition.from,
                step.transition.to,
                describe_cause(&step.transition)
            )?;
        }
        let switches: Vec<String> = ControlSwitch::ALL
            .iter()
            .map(|s| format!("{} {}", s, if self.controls.get(*s) { "on" } else { "off" }))
            .collect();
        writeln!(f, "final: {}", self.final_mode)?;
        write!(
            f,
            "controls: {}, brightness {}",
            switches.join(", "),
            self.controls.brightness
        )
    }
}

fn describe_cause(transition: &Transition) -> String {
    use crate::state::TransitionCause;
    match transition.cause {
        TransitionCause::Swipe { source, direction } => {
            format!("{} swipe {:?}", source.name(), direction).to_lowercase()
        }
        TransitionCause::OpenApp => "open app".to_string(),
        TransitionCause::CloseApp => "close app".to_string(),
    }
}

/// Apply one command and return the transition it caused, if any.
pub fn apply_command<L: ScrollLock>(
    machine: &mut ScreenMachine<L>,
    command: &ScriptCommand,
) -> Option<Transition> {
    match command {
        ScriptCommand::TouchDown(y) => {
            machine.on_pointer_down(*y);
            None
        }
        ScriptCommand::TouchMove(y) => machine.on_pointer_move(*y),
        ScriptCommand::TouchUp => {
            machine.on_pointer_up();
            None
        }
        ScriptCommand::TouchCancel => {
            machine.on_pointer_cancel();
            None
        }
        ScriptCommand::MouseDown(y) => {
            machine.on_mouse_down(*y);
            None
        }
        ScriptCommand::MouseMove(y) => machine.on_mouse_move(*y),
        ScriptCommand::MouseUp => {
            machine.on_mouse_up();
            None
        }
        ScriptCommand::MouseLeave => {
            machine.on_mouse_leave();
            None
        }
        ScriptCommand::Open(app) => machine.open_app(app.clone()),
        ScriptCommand::Close => machine.close_app(),
        ScriptCommand::Toggle(switch) => {
            machine.toggle_switch(*switch);
            None
        }
        ScriptCommand::Brightness(value) => {
            machine.set_brightness(*value);
            None
        }
    }
}

/// Run parsed script lines against a machine.
pub fn run_script<L: ScrollLock>(
    machine: &mut ScreenMachine<L>,
    script: &[ScriptLine],
) -> SimulationReport {
    let transitions = script
        .iter()
        .filter_map(|line| {
            apply_command(machine, &line.command).map(|transition| StepReport {
                line: line.number,
                transition,
            })
        })
        .collect();

    SimulationReport {
        transitions,
        final_mode: machine.current_mode().clone(),
        controls: machine.controls().clone(),
    }
}

/// Read, parse and run a script file.
pub fn simulate_file<L: ScrollLock>(
    machine: &mut ScreenMachine<L>,
    path: &Path,
) -> Result<SimulationReport> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script: {:?}", path))?;
    let script = parse_script(&text).with_context(|| format!("Invalid script: {:?}", path))?;
    Ok(run_script(machine, &script))
}
