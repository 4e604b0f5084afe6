//! Process termination for fatal and panic records
//!
//! A fatal record ends the process and a panic record unwinds the calling
//! thread. Both happen only after the record has been written and the sink
//! flushed. The action is handed to a [`TerminationHook`] so tests and
//! embedding applications can intercept it.

use super::log_level::Level;
use std::fmt;
use std::sync::Arc;

/// Exit status used for fatal records
pub const FATAL_EXIT_CODE: i32 = 1;

/// What a terminal-severity record does once it has been written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationAction {
    /// End the process with the given status
    Exit { code: i32 },
    /// Raise an unrecoverable panic carrying the record message
    Panic { message: String },
}

impl TerminationAction {
    /// The action attached to `level`, if any
    pub fn for_level(level: Level, message: &str) -> Option<Self> {
        match level {
            Level::Fatal => Some(TerminationAction::Exit {
                code: FATAL_EXIT_CODE,
            }),
            Level::Panic => Some(TerminationAction::Panic {
                message: message.to_string(),
            }),
            _ => None,
        }
    }

    /// Carry out the action
    pub fn execute(self) -> ! {
        match self {
            TerminationAction::Exit { code } => std::process::exit(code),
            TerminationAction::Panic { message } => panic!("{}", message),
        }
    }
}

impl fmt::Display for TerminationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminationAction::Exit { code } => write!(f, "exit({})", code),
            TerminationAction::Panic { message } => write!(f, "panic({})", message),
        }
    }
}

/// Callback receiving the termination action of fatal and panic records.
///
/// The default hook calls [`TerminationAction::execute`]. A custom hook that
/// returns lets the logging call return normally.
pub type TerminationHook = Arc<dyn Fn(TerminationAction) + Send + Sync>;

/// Hook that carries out every action
pub fn default_termination_hook() -> TerminationHook {
    Arc::new(|action: TerminationAction| action.execute())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_terminal_levels_have_actions() {
        for level in [Level::Trace, Level::Debug, Level::Info, Level::Warn, Level::Error] {
            assert_eq!(TerminationAction::for_level(level, "msg"), None);
        }
        assert_eq!(
            TerminationAction::for_level(Level::Fatal, "msg"),
            Some(TerminationAction::Exit { code: 1 })
        );
        assert_eq!(
            TerminationAction::for_level(Level::Panic, "msg"),
            Some(TerminationAction::Panic {
                message: "msg".to_string()
            })
        );
    }

    #[test]
    #[should_panic(expected = "out of invariants")]
    fn test_panic_action_panics_with_message() {
        TerminationAction::Panic {
            message: "out of invariants".to_string(),
        }
        .execute();
    }

    #[test]
    fn test_display() {
        assert_eq!(TerminationAction::Exit { code: 1 }.to_string(), "exit(1)");
    }
}
