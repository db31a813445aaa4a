//! Terminal front-end: drives an [`AddressBookApi`] from `-c` arguments or an
//! interactive prompt and prints what each command returns.

mod print;

use addrbook::api::AddressBookApi;
use addrbook::error::Result;
use addrbook::storage::Storage;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::warn;

pub use print::print_config;

const MESSAGE_WELCOME: &str = "Welcome to your Address Book!";
const MESSAGE_USING_STORAGE: &str = "Using storage file";
const PROMPT: &str = "Enter command: ";

pub struct Shell<S: Storage> {
    api: AddressBookApi<S>,
    mask_private: bool,
}

impl<S: Storage> Shell<S> {
    pub fn new(api: AddressBookApi<S>, mask_private: bool) -> Self {
        Self { api, mask_private }
    }

    /// Runs each command in order. Stops early on `exit`.
    pub fn run_commands(&mut self, commands: &[String]) -> Result<()> {
        for line in commands {
            if self.execute_line(line)? {
                break;
            }
        }
        Ok(())
    }

    /// Reads commands until `exit` or end of input.
    pub fn run_interactive(&mut self, input: impl BufRead) -> Result<()> {
        println!("{}", MESSAGE_WELCOME.bold());
        println!(
            "{}",
            format!("{}: {}", MESSAGE_USING_STORAGE, self.api.location()).dimmed()
        );

        let mut lines = input.lines();
        loop {
            print!("{}", PROMPT);
            io::stdout().flush()?;

            let Some(line) = lines.next() else {
                println!();
                return Ok(());
            };
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            if self.execute_line(&line)? {
                return Ok(());
            }
        }
    }

    /// Returns true when the command asked to exit.
    fn execute_line(&mut self, line: &str) -> Result<bool> {
        match self.api.execute(line) {
            Ok(result) => {
                print::print_contacts(&result.listed, self.mask_private);
                print::print_messages(&result.messages);
                Ok(result.exit)
            }
            Err(e) if e.is_recoverable() => {
                warn!(input = line, error = %e, "command rejected");
                println!("{}", e.to_string().red());
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }
}
