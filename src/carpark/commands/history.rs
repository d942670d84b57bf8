use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::history::CommandHistory;

pub fn run(history: &CommandHistory) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if history.is_empty() {
        result.add_message(CmdMessage::info("You have not yet entered any commands."));
        return Ok(result);
    }
    result.history = history.entries().iter().rev().cloned().collect();
    result.add_message(CmdMessage::info(
        "Entered commands (from most recent to earliest):",
    ));
    Ok(result)
}
