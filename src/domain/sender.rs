use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Sender {
    User,
    SimulatedPatient,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "USER",
            Sender::SimulatedPatient => "SIMULATED_PATIENT",
        }
    }
}

impl FromStr for Sender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USER" => Ok(Sender::User),
            "SIMULATED_PATIENT" => Ok(Sender::SimulatedPatient),
            _ => Err(format!("Invalid sender: {}", s)),
        }
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
