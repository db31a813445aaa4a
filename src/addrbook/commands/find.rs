use crate::commands::{displayed, persons_listed, CmdResult};
use crate::error::Result;
use crate::model::Contact;
use crate::session::ViewSession;

pub const COMMAND_WORD: &str = "find";
pub const USAGE: &str = "find: Finds all persons whose names contain any of the specified keywords (case-sensitive) \
and displays them as a list with index numbers.\n\t\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\t\
Example: find alice bob charlie";

/// Narrows the shown list to persons with a name word equal to one of the
/// keywords.
pub fn run(session: &mut ViewSession, keywords: Vec<String>) -> Result<CmdResult> {
    session.set_filter(Some(Box::new(move |contact: &Contact| {
        contact
            .name
            .words()
            .any(|word| keywords.iter().any(|k| k == word))
    })));

    let listed = displayed(session);
    Ok(CmdResult::from_message(persons_listed(listed.len())).with_listed(listed))
}
