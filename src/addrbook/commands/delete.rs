use crate::commands::{
    CmdMessage, CmdResult, MESSAGE_INVALID_PERSON_DISPLAYED_INDEX,
    MESSAGE_PERSON_NOT_IN_ADDRESSBOOK,
};
use crate::error::{AddrBookError, Result};
use crate::index::{expand_indexes, IndexRange};
use crate::session::ViewSession;
use tracing::warn;

pub const COMMAND_WORD: &str = "delete";
pub const USAGE: &str = "delete: Deletes the persons identified by the index numbers used in the last person listing.\n\t\
Parameters: INDEX... (single indexes or ranges such as 2-4)\n\t\
Example: delete 1 3-4";

pub const MESSAGE_SUCCESS: &str = "Deleted Person";

/// Deletes the persons shown at `ranges`.
///
/// Both ends of every span are checked against the shown list before anything
/// is removed, so a bad index deletes nothing. Since removals leave the shown
/// list as it was, later indexes in the same call still refer to what the
/// user saw. A listed person that is already gone gets a warning.
pub fn run(session: &mut ViewSession, ranges: &[IndexRange]) -> Result<CmdResult> {
    for range in ranges {
        for &index in [range.start(), range.end()] {
            match session.record_at(index) {
                Ok(_) => {}
                Err(AddrBookError::IndexOutOfRange { index, len }) => {
                    warn!(index, len, "delete rejected: index out of range");
                    return Ok(CmdResult::from_message(CmdMessage::error(format!(
                        "{} ({})",
                        MESSAGE_INVALID_PERSON_DISPLAYED_INDEX, index
                    ))));
                }
                Err(e) => return Err(e),
            }
        }
    }

    let mut result = CmdResult::default();
    for index in expand_indexes(ranges) {
        match session.remove_at(index) {
            Ok(removed) => {
                let contact = removed.snapshot();
                result.add_message(CmdMessage::success(format!(
                    "{} ({}): {}",
                    MESSAGE_SUCCESS,
                    index,
                    contact.as_text_hide_private()
                )));
                result.affected.push(contact);
            }
            Err(AddrBookError::RecordNotFound) => {
                warn!(index, "delete skipped: record no longer in store");
                result.add_message(CmdMessage::warning(format!(
                    "{} ({})",
                    MESSAGE_PERSON_NOT_IN_ADDRESSBOOK, index
                )));
            }
            Err(e) => return Err(e),
        }
    }

    Ok(result)
}
