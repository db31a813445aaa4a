use crate::commands::{
    CmdMessage, CmdResult, MESSAGE_INVALID_PERSON_DISPLAYED_INDEX,
    MESSAGE_PERSON_NOT_IN_ADDRESSBOOK,
};
use crate::error::{AddrBookError, Result};
use crate::session::ViewSession;

pub const COMMAND_WORD: &str = "view";
pub const COMMAND_WORD_ALL: &str = "viewall";

pub const USAGE: &str = "view: Views the non-private details of the person identified by the index number in the last shown person listing.\n\t\
Parameters: INDEX\n\t\
Example: view 1";
pub const USAGE_ALL: &str = "viewall: Shows all details of the person identified by the index number in the last shown person listing. \
Private contact details are shown.\n\t\
Parameters: INDEX\n\t\
Example: viewall 1";

pub const MESSAGE_VIEW_PERSON_DETAILS: &str = "Viewing person";

/// Shows the person at `index` in the last shown list. A listed person that
/// has since been removed from the store is reported as missing.
pub fn run(session: &ViewSession, index: usize, show_private: bool) -> Result<CmdResult> {
    let target = match session.record_at(index) {
        Ok(target) => target,
        Err(AddrBookError::IndexOutOfRange { .. }) => {
            return Ok(CmdResult::from_message(CmdMessage::error(
                MESSAGE_INVALID_PERSON_DISPLAYED_INDEX,
            )))
        }
        Err(e) => return Err(e),
    };

    let contact = target.snapshot();
    if !session.contains_record(&contact) {
        return Ok(CmdResult::from_message(CmdMessage::error(
            MESSAGE_PERSON_NOT_IN_ADDRESSBOOK,
        )));
    }

    let details = if show_private {
        contact.as_text_show_all()
    } else {
        contact.as_text_hide_private()
    };
    let message = format!("{}: {}", MESSAGE_VIEW_PERSON_DETAILS, details);
    Ok(CmdResult::from_message(CmdMessage::info(message)))
}
