use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AddrBookError, Result};
use crate::model::Contact;
use crate::session::ViewSession;
use tracing::warn;

pub const COMMAND_WORD: &str = "add";
pub const USAGE: &str = "add: Adds a person to the address book. \
Contact details can be marked private by prepending 'p' to the prefix.\n\t\
Parameters: NAME [p]p/PHONE [p]e/EMAIL [p]a/ADDRESS [t/TAG]...\n\t\
Example: add John Doe p/98765432 e/johnd@gmail.com a/311, Clementi Ave 2, #02-25 t/friends t/owesMoney";

pub const MESSAGE_SUCCESS: &str = "New person added";
pub const MESSAGE_DUPLICATE_PERSON: &str = "This person already exists in the address book";

pub fn run(session: &mut ViewSession, contact: Contact) -> Result<CmdResult> {
    match session.add_record(contact.clone()) {
        Ok(_) => {
            let message = format!("{}: {}", MESSAGE_SUCCESS, contact);
            Ok(CmdResult::from_message(CmdMessage::success(message)).with_affected(vec![contact]))
        }
        Err(AddrBookError::DuplicateRecord) => {
            warn!(name = %contact.name, "add rejected: duplicate");
            Ok(CmdResult::from_message(CmdMessage::error(
                MESSAGE_DUPLICATE_PERSON,
            )))
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::RecordStore;
    use crate::commands::MessageLevel;
    use crate::model::fixtures::person;

    #[test]
    fn adds_person_and_reports_it() {
        let mut session = ViewSession::new(RecordStore::new());
        let result = run(&mut session, person("Bob")).unwrap();

        assert!(session.contains_record(&person("Bob")));
        assert_eq!(result.affected, vec![person("Bob")]);
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert!(result.messages[0].content.starts_with("New person added: Bob"));
    }

    #[test]
    fn duplicate_becomes_error_message() {
        let mut session = ViewSession::new(RecordStore::new());
        run(&mut session, person("Bob")).unwrap();
        let result = run(&mut session, person("Bob")).unwrap();

        assert!(result.has_errors());
        assert_eq!(result.messages[0].content, MESSAGE_DUPLICATE_PERSON);
        assert_eq!(session.store().len(), 1);
    }
}
