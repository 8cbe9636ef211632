//! Public operations reachable by name

use std::fmt;
use std::str::FromStr;

use crate::error::RotatorError;

/// The closed set of operations a host can send to an initialized rotator
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    Advance,
    Retreat,
    Destroy,
}

impl Command {
    pub const ALL: [Command; 3] = [Command::Advance, Command::Retreat, Command::Destroy];

    pub fn name(&self) -> &'static str {
        match self {
            Command::Advance => "advance",
            Command::Retreat => "retreat",
            Command::Destroy => "destroy",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Command {
    type Err = RotatorError;

    /// Names beginning with `_` are internal and never resolve
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "advance" | "next" => Ok(Command::Advance),
            "retreat" | "prev" => Ok(Command::Retreat),
            "destroy" => Ok(Command::Destroy),
            _ => Err(RotatorError::UnknownCommand(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for command in Command::ALL {
            assert_eq!(command.name().parse::<Command>(), Ok(command));
        }
    }

    #[test]
    fn test_aliases() {
        assert_eq!("next".parse::<Command>(), Ok(Command::Advance));
        assert_eq!("prev".parse::<Command>(), Ok(Command::Retreat));
    }

    #[test]
    fn test_internal_and_unknown_names_rejected() {
        for name in ["_next", "_startRotator", "_init", "explode", "", "Destroy"] {
            assert_eq!(
                name.parse::<Command>(),
                Err(RotatorError::UnknownCommand(name.to_string()))
            );
        }
    }
}
