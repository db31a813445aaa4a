use crate::commands::{add, clear, delete, edit, find, list, view, CmdMessage, CmdResult};
use crate::error::Result;

pub const COMMAND_WORD: &str = "help";
pub const USAGE: &str = "help: Shows program usage instructions.\n\t\
Example: help";
pub const EXIT_USAGE: &str = "exit: Exits the program.\n\t\
Example: exit";

/// Usage of every command, one block per command.
pub fn all_usages() -> String {
    [
        add::USAGE,
        edit::USAGE,
        delete::USAGE,
        clear::USAGE,
        find::USAGE,
        list::USAGE,
        view::USAGE,
        view::USAGE_ALL,
        USAGE,
        EXIT_USAGE,
    ]
    .join("\n")
}

pub fn run() -> Result<CmdResult> {
    Ok(CmdResult::from_message(CmdMessage::info(all_usages())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mentions_every_command() {
        let text = all_usages();
        for word in [
            "add:", "edit:", "delete:", "clear:", "find:", "list:", "view:", "viewall:", "help:",
            "exit:",
        ] {
            assert!(text.contains(word), "missing {}", word);
        }
    }
}
