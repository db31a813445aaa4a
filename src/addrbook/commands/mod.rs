//! # Command Layer
//!
//! Each submodule implements one user command as a `run` function taking the
//! [`ViewSession`] it operates on and returning a [`CmdResult`].
//!
//! Domain failures a user can cause (duplicate person, stale index, unknown
//! name) are turned into error-level messages here, because this is the layer
//! that knows what they mean to the user. Anything else propagates.

use crate::error::Result;
use crate::index::IndexRange;
use crate::model::{Contact, ContactRef};
use crate::session::ViewSession;

pub mod add;
pub mod clear;
pub mod delete;
pub mod edit;
pub mod find;
pub mod help;
pub mod list;
pub mod view;

pub const MESSAGE_INVALID_PERSON_DISPLAYED_INDEX: &str = "The person index provided is invalid";
pub const MESSAGE_PERSON_NOT_IN_ADDRESSBOOK: &str = "Person could not be found in address book";
pub const MESSAGE_PERSONS_LISTED_OVERVIEW: &str = "persons listed!";
pub const EXIT_COMMAND_WORD: &str = "exit";
pub const MESSAGE_EXIT_ACKNOWLEDGEMENT: &str = "Exiting Address Book as requested ...";

/// A parsed, validated command ready to run against a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(Contact),
    Edit(Contact),
    Delete(Vec<IndexRange>),
    View(usize),
    ViewAll(usize),
    Find(Vec<String>),
    List,
    Clear,
    Help,
    Exit,
}

impl Command {
    pub fn word(&self) -> &'static str {
        match self {
            Command::Add(_) => add::COMMAND_WORD,
            Command::Edit(_) => edit::COMMAND_WORD,
            Command::Delete(_) => delete::COMMAND_WORD,
            Command::View(_) => view::COMMAND_WORD,
            Command::ViewAll(_) => view::COMMAND_WORD_ALL,
            Command::Find(_) => find::COMMAND_WORD,
            Command::List => list::COMMAND_WORD,
            Command::Clear => clear::COMMAND_WORD,
            Command::Help => help::COMMAND_WORD,
            Command::Exit => EXIT_COMMAND_WORD,
        }
    }

    pub fn execute(self, session: &mut ViewSession) -> Result<CmdResult> {
        match self {
            Command::Add(contact) => add::run(session, contact),
            Command::Edit(contact) => edit::run(session, contact),
            Command::Delete(indexes) => delete::run(session, &indexes),
            Command::View(index) => view::run(session, index, false),
            Command::ViewAll(index) => view::run(session, index, true),
            Command::Find(keywords) => find::run(session, keywords),
            Command::List => list::run(session),
            Command::Clear => clear::run(session),
            Command::Help => help::run(),
            Command::Exit => Ok(CmdResult::from_message(CmdMessage::info(
                MESSAGE_EXIT_ACKNOWLEDGEMENT,
            ))
            .with_exit()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A contact as it appeared in a listing, with the index it was shown under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayContact {
    pub index: usize,
    pub contact: Contact,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed: Vec<DisplayContact>,
    pub affected: Vec<Contact>,
    pub messages: Vec<CmdMessage>,
    pub exit: bool,
}

impl CmdResult {
    pub fn from_message(message: CmdMessage) -> Self {
        let mut result = Self::default();
        result.add_message(message);
        result
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed(mut self, listed: Vec<DisplayContact>) -> Self {
        self.listed = listed;
        self
    }

    pub fn with_affected(mut self, contacts: Vec<Contact>) -> Self {
        self.affected = contacts;
        self
    }

    pub fn with_exit(mut self) -> Self {
        self.exit = true;
        self
    }

    /// True when any message is error-level.
    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(|m| m.level == MessageLevel::Error)
    }
}

/// Snapshot of the session's shown list, numbered from 1.
pub(crate) fn displayed(session: &ViewSession) -> Vec<DisplayContact> {
    session
        .shown_list()
        .iter()
        .enumerate()
        .map(|(i, handle)| DisplayContact {
            index: i + crate::index::DISPLAYED_INDEX_OFFSET,
            contact: ContactRef::snapshot(handle),
        })
        .collect()
}

pub(crate) fn persons_listed(count: usize) -> CmdMessage {
    CmdMessage::info(format!("{} {}", count, MESSAGE_PERSONS_LISTED_OVERVIEW))
}
