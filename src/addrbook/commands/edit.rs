use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AddrBookError, Result};
use crate::model::Contact;
use crate::session::ViewSession;
use tracing::warn;

pub const COMMAND_WORD: &str = "edit";
pub const USAGE: &str = "edit: Edits the person with the given name in the address book. \
Contact details can be marked private by prepending 'p' to the prefix.\n\t\
Parameters: NAME [p]p/PHONE [p]e/EMAIL [p]a/ADDRESS [t/TAG]...\n\t\
Example: edit John Doe p/98765432 e/johnd@gmail.com a/311, Clementi Ave 2, #02-25 t/friends";

pub const MESSAGE_SUCCESS: &str = "Person edited";
pub const MESSAGE_NO_SUCH_PERSON: &str = "This person does not exist in the address book";
pub const MESSAGE_WOULD_DUPLICATE: &str =
    "Another person in the address book already has exactly these details";

/// Rewrites the details of the person with `contact`'s name. The shown list
/// is not refreshed; the new details show through it anyway.
pub fn run(session: &mut ViewSession, contact: Contact) -> Result<CmdResult> {
    match session.edit_record(&contact) {
        Ok(handle) => {
            let edited = handle.snapshot();
            let message = format!("{}: {}", MESSAGE_SUCCESS, edited);
            Ok(CmdResult::from_message(CmdMessage::success(message)).with_affected(vec![edited]))
        }
        Err(AddrBookError::NoSuchRecord) => {
            warn!(name = %contact.name, "edit rejected: no such person");
            Ok(CmdResult::from_message(CmdMessage::error(
                MESSAGE_NO_SUCH_PERSON,
            )))
        }
        Err(AddrBookError::DuplicateRecord) => {
            warn!(name = %contact.name, "edit rejected: would duplicate");
            Ok(CmdResult::from_message(CmdMessage::error(
                MESSAGE_WOULD_DUPLICATE,
            )))
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::RecordStore;
    use crate::commands::{add, list};
    use crate::model::fixtures::{person, person_with_phone};

    #[test]
    fn edits_existing_person() {
        let mut session = ViewSession::new(RecordStore::new());
        add::run(&mut session, person("Bob")).unwrap();
        list::run(&mut session).unwrap();

        let result = run(&mut session, person_with_phone("Bob", "999")).unwrap();

        assert!(!result.has_errors());
        assert_eq!(result.affected, vec![person_with_phone("Bob", "999")]);
        assert_eq!(session.shown_list()[0].borrow().phone.value(), "999");
    }

    #[test]
    fn unknown_name_reports_no_such_person() {
        let mut session = ViewSession::new(RecordStore::new());
        add::run(&mut session, person("Bob")).unwrap();

        let result = run(&mut session, person("Alice")).unwrap();

        assert_eq!(result.messages[0].content, MESSAGE_NO_SUCH_PERSON);
        assert_eq!(session.store().snapshot(), vec![person("Bob")]);
    }

    #[test]
    fn edit_matching_another_person_is_refused() {
        let store = RecordStore::from_contacts(vec![
            person_with_phone("Bob", "1"),
            person_with_phone("Bob", "2"),
        ])
        .unwrap();
        let mut session = ViewSession::new(store);

        let result = run(&mut session, person_with_phone("Bob", "1")).unwrap();

        assert!(result.has_errors());
        assert_eq!(result.messages[0].content, MESSAGE_WOULD_DUPLICATE);
        assert_eq!(
            session.store().snapshot(),
            vec![person_with_phone("Bob", "1"), person_with_phone("Bob", "2")]
        );
    }
}
