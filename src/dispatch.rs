//! Command: a remote control dispatching button presses to devices.
//!
//! Each command is bound to one receiver and one action when it is built and
//! never changes afterwards. The remote is a plain map from button token to
//! command; pressing an unbound button is a reported outcome, not an error.

use colored::Colorize;
use std::cell::Cell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

// =============================================================================
// Receivers
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Power {
    On,
    #[default]
    Off,
}

/// A device with two mutually exclusive states. Repeating an action simply
/// re-reports the same state; the device does not suppress redundant
/// transitions.
#[derive(Debug, Default)]
pub struct Light {
    state: Cell<Power>,
}

impl Light {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn turn_on(&self) -> String {
        self.state.set(Power::On);
        "The light is on".yellow().to_string()
    }

    pub fn turn_off(&self) -> String {
        self.state.set(Power::Off);
        "The light is off".yellow().to_string()
    }

    pub fn power(&self) -> Power {
        self.state.get()
    }
}

#[derive(Debug, Default)]
pub struct Fan {
    state: Cell<Power>,
}

impl Fan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(&self) -> String {
        self.state.set(Power::On);
        "The fan is on".green().to_string()
    }

    pub fn off(&self) -> String {
        self.state.set(Power::Off);
        "The fan is off".green().to_string()
    }

    pub fn power(&self) -> Power {
        self.state.get()
    }
}

// =============================================================================
// Commands
// =============================================================================

/// An operation bound to a fixed receiver/action pair. Executing returns the
/// receiver's report line.
pub trait Command {
    fn execute(&self) -> String;
}

pub struct LightOn {
    light: Rc<Light>,
}

impl LightOn {
    pub fn new(light: Rc<Light>) -> Self {
        Self { light }
    }
}

impl Command for LightOn {
    fn execute(&self) -> String {
        self.light.turn_on()
    }
}

pub struct LightOff {
    light: Rc<Light>,
}

impl LightOff {
    pub fn new(light: Rc<Light>) -> Self {
        Self { light }
    }
}

impl Command for LightOff {
    fn execute(&self) -> String {
        self.light.turn_off()
    }
}

pub struct FanOn {
    fan: Rc<Fan>,
}

impl FanOn {
    pub fn new(fan: Rc<Fan>) -> Self {
        Self { fan }
    }
}

impl Command for FanOn {
    fn execute(&self) -> String {
        self.fan.on()
    }
}

pub struct FanOff {
    fan: Rc<Fan>,
}

impl FanOff {
    pub fn new(fan: Rc<Fan>) -> Self {
        Self { fan }
    }
}

impl Command for FanOff {
    fn execute(&self) -> String {
        self.fan.off()
    }
}

// =============================================================================
// The dispatch table
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The bound command ran; the string is its report line.
    Executed(String),
    /// Nothing is bound to this token.
    Unassigned(String),
}

impl fmt::Display for DispatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchOutcome::Executed(report) => write!(f, "{report}"),
            DispatchOutcome::Unassigned(_) => {
                write!(f, "{}", "No command assigned to that button".red())
            }
        }
    }
}

/// The invoker: a mapping from button token to command. Registration is the
/// only mutation; re-registering a token replaces its binding.
#[derive(Default)]
pub struct RemoteControl {
    bindings: HashMap<String, Box<dyn Command>>,
}

impl RemoteControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the binding for `token`. Last write wins.
    pub fn register(&mut self, token: impl Into<String>, command: Box<dyn Command>) {
        self.bindings.insert(token.into(), command);
    }

    /// Looks up `token` and runs its command. An unknown token yields the
    /// unassigned outcome; it never panics.
    pub fn press(&self, token: &str) -> DispatchOutcome {
        match self.bindings.get(token) {
            Some(command) => DispatchOutcome::Executed(command.execute()),
            None => DispatchOutcome::Unassigned(token.to_string()),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct CountingCommand {
        runs: Rc<Cell<usize>>,
    }

    impl Command for CountingCommand {
        fn execute(&self) -> String {
            self.runs.set(self.runs.get() + 1);
            "counted".to_string()
        }
    }

    #[test]
    fn pressing_a_bound_token_runs_the_command_once() {
        let runs = Rc::new(Cell::new(0));
        let mut remote = RemoteControl::new();
        remote.register(
            "1",
            Box::new(CountingCommand {
                runs: Rc::clone(&runs),
            }),
        );

        let outcome = remote.press("1");
        assert_eq!(outcome, DispatchOutcome::Executed("counted".to_string()));
        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn pressing_an_unbound_token_is_reported_not_fatal() {
        let remote = RemoteControl::new();
        let outcome = remote.press("9");
        assert_eq!(outcome, DispatchOutcome::Unassigned("9".to_string()));
        assert!(outcome.to_string().contains("No command assigned"));
    }

    #[test]
    fn light_on_command_turns_the_light_on() {
        let light = Rc::new(Light::new());
        let mut remote = RemoteControl::new();
        remote.register("1", Box::new(LightOn::new(Rc::clone(&light))));

        let outcome = remote.press("1");
        assert_eq!(light.power(), Power::On);
        assert!(outcome.to_string().contains("light is on"));
    }

    #[test]
    fn re_registering_a_token_replaces_the_binding() {
        let light = Rc::new(Light::new());
        let fan = Rc::new(Fan::new());
        let mut remote = RemoteControl::new();
        remote.register("1", Box::new(LightOn::new(Rc::clone(&light))));
        remote.register("1", Box::new(FanOn::new(Rc::clone(&fan))));

        remote.press("1");
        assert_eq!(fan.power(), Power::On);
        assert_eq!(light.power(), Power::Off);
    }

    #[test]
    fn redundant_presses_re_report_the_same_state() {
        let fan = Rc::new(Fan::new());
        let mut remote = RemoteControl::new();
        remote.register("3", Box::new(FanOn::new(Rc::clone(&fan))));

        let first = remote.press("3");
        let second = remote.press("3");
        assert_eq!(first, second);
        assert_eq!(fan.power(), Power::On);
    }

    #[test]
    fn commands_stay_bound_to_their_own_receiver() {
        let light = Rc::new(Light::new());
        let fan = Rc::new(Fan::new());
        let mut remote = RemoteControl::new();
        remote.register("2", Box::new(LightOff::new(Rc::clone(&light))));
        remote.register("4", Box::new(FanOff::new(Rc::clone(&fan))));

        light.turn_on();
        fan.on();
        remote.press("2");
        assert_eq!(light.power(), Power::Off);
        assert_eq!(fan.power(), Power::On);

        remote.press("4");
        assert_eq!(fan.power(), Power::Off);
    }
}
