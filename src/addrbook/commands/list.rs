use crate::commands::{displayed, persons_listed, CmdResult};
use crate::error::Result;
use crate::session::ViewSession;

pub const COMMAND_WORD: &str = "list";
pub const USAGE: &str = "list: Displays all persons in the address book as a list with index numbers.\n\t\
Example: list";

pub fn run(session: &mut ViewSession) -> Result<CmdResult> {
    session.set_filter(None);
    let listed = displayed(session);
    Ok(CmdResult::from_message(persons_listed(listed.len())).with_listed(listed))
}
