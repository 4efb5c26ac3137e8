use colored::Colorize;
use phonebook::api::{Change, CmdMessage, MessageLevel};
use phonebook::model::{Contact, NumberMatch, Outcome};
use unicode_width::UnicodeWidthStr;

pub(super) const EMPTY_BOOK: &str = "No contacts, the phone book is empty.";
pub(super) const NOTHING_FOUND: &str = "Sorry, nothing found.";

pub(super) fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    print!("{}", render_messages(messages));
}

/// Name on its own line, then one number per line, blank line between contacts.
pub(super) fn render_contacts(contacts: &[Contact], empty_text: &str) -> String {
    if contacts.is_empty() {
        return format!("{}\n", empty_text);
    }

    let mut out = String::new();
    for (i, contact) in contacts.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("{}\n", contact.name().bold()));
        for number in contact.numbers() {
            out.push_str(&format!("  {}\n", number));
        }
    }
    out
}

/// One `name  number` row per match, names padded to a common display width.
pub(super) fn render_matches(matches: &[NumberMatch]) -> String {
    if matches.is_empty() {
        return format!("{}\n", NOTHING_FOUND);
    }

    let width = matches.iter().map(|m| m.name.width()).max().unwrap_or(0);
    let mut out = String::new();
    for m in matches {
        let padding = " ".repeat(width - m.name.width());
        out.push_str(&format!("{}{}  {}\n", m.name.bold(), padding, m.number));
    }
    out
}

/// Words an outcome for the user.
pub(super) fn outcome_message(change: &Change) -> CmdMessage {
    let name = &change.name;
    let number = change.number.as_deref().unwrap_or_default();
    match change.outcome {
        Outcome::Created => CmdMessage::success(format!("Contact '{}' added.", name)),
        Outcome::NumberAdded => {
            CmdMessage::success(format!("Number {} added to '{}'.", number, name))
        }
        Outcome::DuplicateNumber => CmdMessage::warning(format!(
            "Number {} is already saved for '{}'.",
            number, name
        )),
        Outcome::Removed => {
            CmdMessage::success(format!("Number {} removed from '{}'.", number, name))
        }
        Outcome::RemovedLastNumber => CmdMessage::success(format!(
            "Number {} removed. '{}' had no numbers left and was deleted.",
            number, name
        )),
        Outcome::NumberNotFound => {
            CmdMessage::warning(format!("'{}' has no number {}.", name, number))
        }
        Outcome::Deleted => CmdMessage::success(format!("Contact '{}' deleted.", name)),
    }
}
