use addrbook::commands::{CmdMessage, DisplayContact, MessageLevel};
use addrbook::config::AppConfig;
use colored::Colorize;
use std::path::Path;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 24;
const PHONE_WIDTH: usize = 14;
const EMAIL_WIDTH: usize = 28;
const PRIVATE_MARKER: &str = "<private>";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_contacts(contacts: &[DisplayContact], mask_private: bool) {
    if contacts.is_empty() {
        return;
    }

    let idx_width = contacts
        .iter()
        .map(|dc| format!("{}.", dc.index).width())
        .max()
        .unwrap_or(0);

    for dc in contacts {
        let contact = &dc.contact;
        let shown = |value: &str, private: bool| {
            if private && mask_private {
                PRIVATE_MARKER.to_string()
            } else {
                value.to_string()
            }
        };

        let idx_str = format!("{}.", dc.index);
        let phone = shown(contact.phone.value(), contact.phone.is_private());
        let email = shown(contact.email.value(), contact.email.is_private());
        let address = shown(contact.address.value(), contact.address.is_private());

        println!(
            "{}{} {} {} {} {} {}",
            " ".repeat(idx_width.saturating_sub(idx_str.width()) + 2),
            idx_str.yellow(),
            pad_to_width(contact.name.as_str(), NAME_WIDTH).bold(),
            pad_to_width(&phone, PHONE_WIDTH),
            pad_to_width(&email, EMAIL_WIDTH),
            address,
            contact.tags_text().cyan()
        );
    }
}

pub fn print_config(config: &AppConfig, home: &Path, data_path: &Path) {
    println!("home = {}", home.display());
    println!("data-file = {}", data_path.display());
    println!("mask-private = {}", config.mask_private);
}

/// Truncates with an ellipsis or pads with spaces to exactly `width` columns.
fn pad_to_width(s: &str, width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > width.saturating_sub(1) && s.width() > width {
            result.push('…');
            current_width += 1;
            break;
        }
        result.push(c);
        current_width += char_width;
    }

    result.push_str(&" ".repeat(width.saturating_sub(current_width)));
    result
}
