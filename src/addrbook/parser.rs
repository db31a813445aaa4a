//! Turns a line of user input into a [`Command`].
//!
//! The first word picks the command. `add` and `edit` take a person:
//!
//! ```text
//! NAME [p]p/PHONE [p]e/EMAIL [p]a/ADDRESS [t/TAG]...
//! ```
//!
//! A leading `p` on a prefix marks that detail private. Values may contain
//! spaces; a value runs until the next prefixed word.

use crate::commands::{
    add, clear, delete, edit, find, help, list, view, Command, EXIT_COMMAND_WORD,
};
use crate::error::{AddrBookError, Result};
use crate::fields::{tag_set, Address, Email, Name, Phone};
use crate::index::{parse_index, parse_indexes};
use crate::model::Contact;

pub fn parse(input: &str) -> Result<Command> {
    let input = input.trim();
    let (word, args) = match input.split_once(char::is_whitespace) {
        Some((word, args)) => (word, args.trim()),
        None => (input, ""),
    };

    match word {
        add::COMMAND_WORD => parse_person(args, add::USAGE).map(Command::Add),
        edit::COMMAND_WORD => parse_person(args, edit::USAGE).map(Command::Edit),
        delete::COMMAND_WORD => parse_delete(args),
        view::COMMAND_WORD => parse_single_index(args, view::USAGE).map(Command::View),
        view::COMMAND_WORD_ALL => parse_single_index(args, view::USAGE_ALL).map(Command::ViewAll),
        find::COMMAND_WORD => parse_find(args),
        list::COMMAND_WORD => Ok(Command::List),
        clear::COMMAND_WORD => Ok(Command::Clear),
        help::COMMAND_WORD => Ok(Command::Help),
        EXIT_COMMAND_WORD => Ok(Command::Exit),
        _ => Err(AddrBookError::InvalidCommand(help::all_usages())),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Name,
    Phone,
    Email,
    Address,
    Tag,
}

/// Prefixes in match order: private variants first so `pp/` is not read as
/// `p/` followed by `p/`.
const PREFIXES: &[(&str, Slot, bool)] = &[
    ("pp/", Slot::Phone, true),
    ("pe/", Slot::Email, true),
    ("pa/", Slot::Address, true),
    ("p/", Slot::Phone, false),
    ("e/", Slot::Email, false),
    ("a/", Slot::Address, false),
    ("t/", Slot::Tag, false),
];

#[derive(Default)]
struct RawPerson {
    name: Vec<String>,
    phone: Option<(String, bool)>,
    email: Option<(String, bool)>,
    address: Option<(String, bool)>,
    tags: Vec<String>,
}

fn parse_person(args: &str, usage: &str) -> Result<Contact> {
    let invalid = || AddrBookError::InvalidCommand(usage.to_string());

    // Split into (slot, private, words) segments, each starting at a prefix.
    let mut segments: Vec<(Slot, bool, Vec<&str>)> = vec![(Slot::Name, false, Vec::new())];
    for token in args.split_whitespace() {
        let prefixed = PREFIXES
            .iter()
            .find_map(|(prefix, slot, private)| {
                token.strip_prefix(*prefix).map(|rest| (*slot, *private, rest))
            });
        match prefixed {
            Some((slot, private, rest)) => {
                let words = if rest.is_empty() { Vec::new() } else { vec![rest] };
                segments.push((slot, private, words));
            }
            None => {
                if let Some((_, _, words)) = segments.last_mut() {
                    words.push(token);
                }
            }
        }
    }

    let mut raw = RawPerson::default();
    for (slot, private, words) in segments {
        let value = words.join(" ");
        let field = match slot {
            Slot::Name => {
                raw.name = words.iter().map(|w| w.to_string()).collect();
                continue;
            }
            Slot::Tag => {
                raw.tags.push(value);
                continue;
            }
            Slot::Phone => &mut raw.phone,
            Slot::Email => &mut raw.email,
            Slot::Address => &mut raw.address,
        };
        if field.replace((value, private)).is_some() {
            return Err(invalid());
        }
    }

    let (phone, phone_private) = raw.phone.ok_or_else(invalid)?;
    let (email, email_private) = raw.email.ok_or_else(invalid)?;
    let (address, address_private) = raw.address.ok_or_else(invalid)?;
    if raw.name.is_empty() {
        return Err(invalid());
    }

    Ok(Contact::new(
        Name::new(&raw.name.join(" "))?,
        Phone::new(&phone, phone_private)?,
        Email::new(&email, email_private)?,
        Address::new(&address, address_private)?,
        tag_set(&raw.tags)?,
    ))
}

fn parse_delete(args: &str) -> Result<Command> {
    let parts: Vec<&str> = args.split_whitespace().collect();
    if parts.is_empty() {
        return Err(AddrBookError::InvalidCommand(delete::USAGE.to_string()));
    }
    let indexes = parse_indexes(&parts)
        .map_err(|_| AddrBookError::InvalidCommand(delete::USAGE.to_string()))?;
    Ok(Command::Delete(indexes))
}

fn parse_single_index(args: &str, usage: &str) -> Result<usize> {
    let mut parts = args.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some(arg), None) => {
            parse_index(arg).map_err(|_| AddrBookError::InvalidCommand(usage.to_string()))
        }
        _ => Err(AddrBookError::InvalidCommand(usage.to_string())),
    }
}

fn parse_find(args: &str) -> Result<Command> {
    let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(AddrBookError::InvalidCommand(find::USAGE.to_string()));
    }
    Ok(Command::Find(keywords))
}
