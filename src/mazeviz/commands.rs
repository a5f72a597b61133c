use serde::{Deserialize, Serialize};

use super::Message;

/// A control action requested by the user, either with an on-screen button
/// or a keyboard shortcut. Both input paths publish the same command to the
/// controls channel; the solver window consumes them once per frame.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlCommand {
    Start,
    StepStart,
    Stop,
    Next,
    PauseToggle,
    Replay,
    SwitchMaze,
}

impl ControlCommand {
    pub fn to_message(self) -> Message {
        Message::new(serde_json::to_string(&self).unwrap())
    }

    pub fn from_message(msg: &Message) -> Result<Self, serde_json::Error> {
        serde_json::from_str(&msg.payload())
    }
}

#[cfg(test)]
mod commands_tests {
    use super::*;

    #[test]
    fn test_message_conversion() {
        let msg = ControlCommand::StepStart.to_message();
        assert_eq!(
            ControlCommand::from_message(&msg).unwrap(),
            ControlCommand::StepStart
        );
    }

    #[test]
    fn test_malformed_payload() {
        let msg = Message::new("not a command".to_string());
        assert!(ControlCommand::from_message(&msg).is_err());
    }
}
