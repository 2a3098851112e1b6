//! Card kinds and their rule classifications.

use serde::{Deserialize, Serialize};

/// What a card does.
///
/// Kinds fall into families that the rules treat differently:
///
/// | Family       | Kinds                                  |
/// |--------------|----------------------------------------|
/// | infection    | `Virus`, `Spyware`, `Ransom`           |
/// | stack        | `Repeat` (Rx), `Variable`              |
/// | board        | `Group`, `Instruction`                 |
/// | attack       | `PowerOutage`, `Hack`                  |
/// | safety       | `Firewall`, `Antivirus`, `Generator`   |
/// | enhancement  | `BatteryBackup`                        |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Virus,
    Spyware,
    Ransom,
    Repeat,
    Variable,
    Group,
    Instruction,
    PowerOutage,
    Hack,
    Firewall,
    Antivirus,
    Generator,
    BatteryBackup,
}

impl CardKind {
    /// Safety cards protect the player who plays them.
    #[must_use]
    pub const fn is_safety(self) -> bool {
        matches!(self, Self::Firewall | Self::Antivirus | Self::Generator)
    }

    /// Attack cards put a negative status effect on another player.
    #[must_use]
    pub const fn is_attack(self) -> bool {
        matches!(self, Self::PowerOutage | Self::Hack)
    }

    #[must_use]
    pub const fn is_enhancement(self) -> bool {
        matches!(self, Self::BatteryBackup)
    }

    /// Infection cards start stacks against a target.
    #[must_use]
    pub const fn is_infection(self) -> bool {
        matches!(self, Self::Virus | Self::Spyware | Self::Ransom)
    }
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Virus => "VIRUS",
            Self::Spyware => "SPYWARE",
            Self::Ransom => "RANSOM",
            Self::Repeat => "REPEAT",
            Self::Variable => "VARIABLE",
            Self::Group => "GROUP",
            Self::Instruction => "INSTRUCTION",
            Self::PowerOutage => "POWER_OUTAGE",
            Self::Hack => "HACK",
            Self::Firewall => "FIREWALL",
            Self::Antivirus => "ANTIVIRUS",
            Self::Generator => "GENERATOR",
            Self::BatteryBackup => "BATTERY_BACKUP",
        };
        f.write_str(name)
    }
}
