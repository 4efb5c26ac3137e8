//! The interactive session.
//!
//! Reads one command per line, then prompts for the fields that command
//! needs. Input is trimmed; a blank answer or end of input cancels the
//! current command. End of input at the command prompt ends the session.

use super::render::{outcome_message, render_contacts, render_matches, render_messages};
use super::render::{EMPTY_BOOK, NOTHING_FOUND};
use phonebook::api::{CmdMessage, CmdResult, PhonebookApi};
use phonebook::error::Result;
use phonebook::store::DataStore;
use phonebook::validation::{validate_name, validate_number};
use std::io::{BufRead, Write};
use tracing::debug;

const HELP: &str = "\
Commands:
  list    show all contacts
  show    show the numbers of a contact
  find    find who a number belongs to
  add     add a contact, or a number to an existing contact
  edit    add or remove a number of a contact
  delete  delete a contact with all its numbers
  help    show this help
  exit    leave the phone book
";

enum Command {
    List,
    Show,
    Find,
    Add,
    Edit,
    Delete,
    Help,
    Exit,
}

impl Command {
    fn parse(word: &str) -> Option<Self> {
        match word.to_lowercase().as_str() {
            "list" | "ls" => Some(Self::List),
            "show" => Some(Self::Show),
            "find" => Some(Self::Find),
            "add" => Some(Self::Add),
            "edit" => Some(Self::Edit),
            "delete" | "rm" => Some(Self::Delete),
            "help" | "?" => Some(Self::Help),
            "exit" | "quit" | "q" => Some(Self::Exit),
            _ => None,
        }
    }
}

enum EditAction {
    Add,
    Delete,
    Cancel,
}

impl EditAction {
    fn parse(answer: &str) -> Option<Self> {
        match answer.to_lowercase().as_str() {
            "add" | "a" => Some(Self::Add),
            "delete" | "d" => Some(Self::Delete),
            "cancel" | "c" => Some(Self::Cancel),
            _ => None,
        }
    }
}

pub(super) struct Shell<'a, S: DataStore, R: BufRead, W: Write> {
    api: &'a mut PhonebookApi<S>,
    input: R,
    output: W,
    confirm_delete: bool,
}

impl<'a, S: DataStore, R: BufRead, W: Write> Shell<'a, S, R, W> {
    pub(super) fn new(
        api: &'a mut PhonebookApi<S>,
        input: R,
        output: W,
        confirm_delete: bool,
    ) -> Self {
        Self {
            api,
            input,
            output,
            confirm_delete,
        }
    }

    pub(super) fn run(&mut self) -> Result<()> {
        writeln!(self.output, "Phone book. Type 'help' for the list of commands.")?;

        loop {
            let Some(line) = self.read_line("> ")? else {
                writeln!(self.output)?;
                break;
            };
            if line.is_empty() {
                continue;
            }

            let Some(command) = Command::parse(&line) else {
                self.say(CmdMessage::error(format!(
                    "Unknown command '{}'. Type 'help' for the list of commands.",
                    line
                )))?;
                continue;
            };

            match command {
                Command::List => self.list()?,
                Command::Show => self.show()?,
                Command::Find => self.find()?,
                Command::Add => self.add()?,
                Command::Edit => self.edit()?,
                Command::Delete => self.delete()?,
                Command::Help => write!(self.output, "{}", HELP)?,
                Command::Exit => break,
            }
        }

        debug!("shell closed");
        Ok(())
    }

    fn list(&mut self) -> Result<()> {
        let result = self.api.list();
        self.report(result, |r| render_contacts(&r.listed_contacts, EMPTY_BOOK))
    }

    fn show(&mut self) -> Result<()> {
        let Some(name) = self.ask_name()? else {
            return self.cancelled();
        };
        let result = self.api.show(&name);
        self.report(result, |r| render_contacts(&r.listed_contacts, NOTHING_FOUND))
    }

    fn find(&mut self) -> Result<()> {
        let Some(number) = self.ask_number()? else {
            return self.cancelled();
        };
        let result = self.api.find(&number);
        self.report(result, |r| render_matches(&r.number_matches))
    }

    fn add(&mut self) -> Result<()> {
        let Some(name) = self.ask_name()? else {
            return self.cancelled();
        };
        let Some(number) = self.ask_number()? else {
            return self.cancelled();
        };
        let result = self.api.add(&name, &number);
        self.report(result, |_| String::new())
    }

    fn edit(&mut self) -> Result<()> {
        let Some(name) = self.ask_name()? else {
            return self.cancelled();
        };
        let Some(contact) = self.api.book().find_by_name(&name).cloned() else {
            return self.say(CmdMessage::error(format!("Contact not found: {}", name)));
        };
        write!(
            self.output,
            "{}",
            render_contacts(std::slice::from_ref(&contact), NOTHING_FOUND)
        )?;

        let action = loop {
            let Some(answer) = self.ask("Action [add/delete/cancel]: ")? else {
                return self.cancelled();
            };
            match EditAction::parse(&answer) {
                Some(action) => break action,
                None => self.say(CmdMessage::warning(format!(
                    "Unknown action '{}'. Choose add, delete or cancel.",
                    answer
                )))?,
            }
        };

        match action {
            EditAction::Add => {
                let Some(number) = self.ask_number()? else {
                    return self.cancelled();
                };
                let result = self.api.edit_add(&name, &number);
                self.report(result, |_| String::new())
            }
            EditAction::Delete => {
                let number = loop {
                    let Some(number) = self.ask_number()? else {
                        return self.cancelled();
                    };
                    if contact.has_number(&number) {
                        break number;
                    }
                    self.say(CmdMessage::warning(format!(
                        "'{}' has no number {}. Current numbers: {}",
                        name,
                        number,
                        contact.numbers().join(", ")
                    )))?;
                };
                let result = self.api.edit_delete(&name, &number);
                self.report(result, |_| String::new())
            }
            EditAction::Cancel => self.cancelled(),
        }
    }

    fn delete(&mut self) -> Result<()> {
        let Some(name) = self.ask_name()? else {
            return self.cancelled();
        };
        if self.api.book().find_by_name(&name).is_none() {
            return self.say(CmdMessage::error(format!("Contact not found: {}", name)));
        }

        if self.confirm_delete {
            let prompt = format!("Delete '{}' and all its numbers? [y/N] ", name);
            if !self.confirm(&prompt)? {
                return self.cancelled();
            }
        }

        let result = self.api.delete(&name);
        self.report(result, |_| String::new())
    }

    /// Prints the rendered result and its outcome, or the error, and carries on.
    fn report(
        &mut self,
        result: Result<CmdResult>,
        render: impl FnOnce(&CmdResult) -> String,
    ) -> Result<()> {
        match result {
            Ok(result) => {
                write!(self.output, "{}", render(&result))?;
                let mut messages: Vec<CmdMessage> =
                    result.change.iter().map(outcome_message).collect();
                messages.extend(result.messages);
                write!(self.output, "{}", render_messages(&messages))?;
            }
            Err(e) if e.is_recoverable_input() => {
                self.say(CmdMessage::warning(e.to_string()))?
            }
            Err(e) => self.say(CmdMessage::error(e.to_string()))?,
        }
        Ok(())
    }

    fn say(&mut self, message: CmdMessage) -> Result<()> {
        write!(self.output, "{}", render_messages(&[message]))?;
        Ok(())
    }

    fn cancelled(&mut self) -> Result<()> {
        self.say(CmdMessage::info("Cancelled."))
    }

    /// Asks until the answer is yes or no. Blank or end of input is no.
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(false);
            };
            match answer.to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.say(CmdMessage::warning("Please answer y or n."))?,
            }
        }
    }

    fn ask_name(&mut self) -> Result<Option<String>> {
        loop {
            let Some(answer) = self.ask("Name: ")? else {
                return Ok(None);
            };
            match validate_name(&answer) {
                Ok(name) => return Ok(Some(name)),
                Err(e) => self.say(CmdMessage::error(e.to_string()))?,
            }
        }
    }

    fn ask_number(&mut self) -> Result<Option<String>> {
        loop {
            let Some(answer) = self.ask("Number: ")? else {
                return Ok(None);
            };
            match validate_number(&answer) {
                Ok(number) => return Ok(Some(number)),
                Err(e) => self.say(CmdMessage::error(e.to_string()))?,
            }
        }
    }

    /// Trimmed line, `Some("")` for a blank line, `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Field prompt: a blank answer counts as cancel, same as end of input.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        Ok(self.read_line(prompt)?.filter(|answer| !answer.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phonebook::api::PhonebookPaths;
    use phonebook::store::memory::InMemoryStore;
    use std::io::Cursor;
    use std::path::PathBuf;

    fn test_paths() -> PhonebookPaths {
        PhonebookPaths {
            data_dir: PathBuf::from("/tmp/phonebook-shell"),
            data_file: PathBuf::from("/tmp/phonebook-shell/contacts.dat"),
        }
    }

    fn api_with(text: &str) -> PhonebookApi<InMemoryStore> {
        PhonebookApi::open(InMemoryStore::with_text(text), test_paths())
    }

    fn drive(api: &mut PhonebookApi<InMemoryStore>, input: &str, confirm: bool) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        Shell::new(api, Cursor::new(input.as_bytes()), &mut out, confirm)
            .run()
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn adds_and_lists() {
        let mut api = api_with("");
        let out = drive(&mut api, "add\n  Ann Lee  \n+7 999 123\nlist\nexit\n", true);

        assert!(out.contains("Contact 'Ann Lee' added."));
        assert!(out.contains("Ann Lee\n  +7 999 123\n"));
        assert_eq!(api.book().len(), 1);
    }

    #[test]
    fn reprompts_on_invalid_fields() {
        let mut api = api_with("");
        let out = drive(&mut api, "add\nA\nAnn\n12a\n123\n", true);

        assert!(out.contains("Invalid name 'A'"));
        assert!(out.contains("Invalid number '12a'"));
        assert!(api.book().find_by_name("Ann").is_some());
    }

    #[test]
    fn blank_answer_cancels() {
        let mut api = api_with("");
        let out = drive(&mut api, "add\n\nlist\n", true);

        assert!(out.contains("Cancelled."));
        assert!(out.contains(EMPTY_BOOK));
    }

    #[test]
    fn unknown_command_keeps_the_session() {
        let mut api = api_with("Ann,\"123\"\n");
        let out = drive(&mut api, "frobnicate\nfind\n123\n", true);

        assert!(out.contains("Unknown command 'frobnicate'"));
        assert!(out.contains("Ann  123"));
    }

    #[test]
    fn edit_delete_reprompts_until_number_exists() {
        let mut api = api_with("Ann,\"123, 456\"\n");
        let out = drive(&mut api, "edit\nAnn\ndelete\n999\n456\n", true);

        assert!(out.contains("'Ann' has no number 999. Current numbers: 123, 456"));
        assert!(out.contains("Number 456 removed from 'Ann'."));
        assert_eq!(api.book().find_by_name("Ann").unwrap().numbers(), ["123"]);
    }

    #[test]
    fn edit_unknown_contact_reports_error() {
        let mut api = api_with("");
        let out = drive(&mut api, "edit\nBob\n", true);
        assert!(out.contains("Contact not found: Bob"));
    }

    #[test]
    fn delete_asks_for_confirmation() {
        let mut api = api_with("Ann,\"123\"\n");
        let out = drive(&mut api, "delete\nAnn\nn\n", true);
        assert!(out.contains("[y/N]"));
        assert!(out.contains("Cancelled."));
        assert_eq!(api.book().len(), 1);

        let out = drive(&mut api, "delete\nAnn\ny\n", true);
        assert!(out.contains("Contact 'Ann' deleted."));
        assert!(api.book().is_empty());
    }

    #[test]
    fn delete_without_confirmation() {
        let mut api = api_with("Ann,\"123\"\n");
        let out = drive(&mut api, "delete\nAnn\n", false);
        assert!(!out.contains("[y/N]"));
        assert!(api.book().is_empty());
    }

    #[test]
    fn write_failure_is_reported_and_session_continues() {
        let mut store = InMemoryStore::new();
        store.set_simulate_write_error(true);
        let mut api = PhonebookApi::open(store, test_paths());
        let out = drive(&mut api, "add\nAnn\n123\nlist\n", true);

        assert!(out.contains("Could not save contacts"));
        assert!(out.contains(EMPTY_BOOK));
    }

    #[test]
    fn end_of_input_ends_session() {
        let mut api = api_with("");
        let out = drive(&mut api, "help\n", true);
        assert!(out.contains("exit    leave the phone book"));
    }

    #[test]
    fn edit_reprompts_on_unknown_action() {
        let mut api = api_with("Ann,\"123\"\n");
        let out = drive(&mut api, "edit\nAnn\nrename\nadd\n456\n", true);

        assert!(out.contains("Unknown action 'rename'"));
        assert!(out.contains("Number 456 added to 'Ann'."));
        assert_eq!(api.book().find_by_name("Ann").unwrap().numbers(), ["123", "456"]);
    }

    #[test]
    fn delete_reprompts_until_yes_or_no() {
        let mut api = api_with("Ann,\"123\"\n");
        let out = drive(&mut api, "delete\nAnn\nmaybe\ny\n", true);

        assert!(out.contains("Please answer y or n."));
        assert!(out.contains("Contact 'Ann' deleted."));
        assert!(api.book().is_empty());

        let mut api = api_with("Bob,\"456\"\n");
        let out = drive(&mut api, "delete\nBob\nsure\n\n", true);
        assert!(out.contains("Cancelled."));
        assert_eq!(api.book().len(), 1);
    }
}
