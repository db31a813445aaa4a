use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::ViewSession;

pub const COMMAND_WORD: &str = "clear";
pub const USAGE: &str = "clear: Clears address book permanently.\n\t\
Example: clear";

pub const MESSAGE_SUCCESS: &str = "Address book has been cleared!";

pub fn run(session: &mut ViewSession) -> Result<CmdResult> {
    session.clear();
    Ok(CmdResult::from_message(CmdMessage::success(MESSAGE_SUCCESS)))
}
