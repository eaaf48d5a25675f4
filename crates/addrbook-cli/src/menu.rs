//! Interactive numbered menu. Reads one line per prompt from `input`, writes
//! everything user-facing to `output`. Every sub-prompt accepts `0` to cancel.

use std::io::{self, BufRead, Write};

use addrbook_app::commands::{self, Reply};
use addrbook_app::BookSession;
use addrbook_core::{Address, AddressBook, DomainError, Name, Phone};
use addrbook_ports::outbound::BookStore;
use tracing::warn;

const CANCEL: &str = "0";

const HELP: &str = "Invalid choice. Available commands: 1 (Add contact), 2 (Find contact), \
3 (Delete contact), 4 (Show phone), 5 (Show address), 6 (Rename contact), \
7 (Change phone), 8 (Change address), 9 (Save and exit).";

/// How the menu loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Saved,
    InputClosed,
}

pub struct Menu<R, W> {
    input: R,
    output: W,
}

impl<R, W> Menu<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn run<S: BookStore>(&mut self, session: &mut BookSession<S>) -> io::Result<Exit> {
        writeln!(self.output, "Welcome to the address book!")?;
        loop {
            self.print_book(session.book())?;
            self.print_options()?;
            write!(self.output, "Choose an action: ")?;
            self.output.flush()?;

            let Some(choice) = self.read_line()? else {
                writeln!(self.output, "Input closed, changes were not saved.")?;
                return Ok(Exit::InputClosed);
            };

            match choice.as_str() {
                "1" => self.add(session.book_mut())?,
                "2" | "4" => self.show_phone(session.book())?,
                "3" => self.delete(session.book_mut())?,
                "5" => self.show_address(session.book())?,
                "6" => self.rename(session.book_mut())?,
                "7" => self.change_phone(session.book_mut())?,
                "8" => self.change_address(session.book_mut())?,
                "9" => match session.save() {
                    Ok(()) => {
                        writeln!(self.output, "Data saved, goodbye!")?;
                        return Ok(Exit::Saved);
                    }
                    Err(e) => {
                        warn!(error = %e, "save failed");
                        writeln!(self.output, "Could not save the address book: {e}")?;
                    }
                },
                _ => writeln!(self.output, "{HELP}")?,
            }
        }
    }

    fn print_book(&mut self, book: &AddressBook) -> io::Result<()> {
        writeln!(self.output, "\nAddress book:")?;
        for record in book {
            writeln!(self.output, "{record}")?;
        }
        Ok(())
    }

    fn print_options(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        for line in [
            "1. Add contact",
            "2. Find contact",
            "3. Delete contact",
            "4. Show phone number",
            "5. Show address",
            "6. Rename contact",
            "7. Change phone number",
            "8. Change address",
            "9. Save and exit",
        ] {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    fn add(&mut self, book: &mut AddressBook) -> io::Result<()> {
        let Some(name) = self.ask_field("Enter name (or 0 to cancel): ", Name::new)? else {
            return Ok(());
        };
        let Some(phone) =
            self.ask_field("Enter phone (10 digits, or 0 to cancel): ", Phone::new)?
        else {
            return Ok(());
        };
        let Some(address) = self.ask_field("Enter address (or 0 to cancel): ", Address::new)?
        else {
            return Ok(());
        };
        let reply = commands::add_contact(&name, &phone, &address, book);
        self.print_reply(reply)
    }

    fn show_phone(&mut self, book: &AddressBook) -> io::Result<()> {
        if let Some(name) = self.ask_existing("Enter name (or 0 to cancel): ", book)? {
            let reply = commands::get_phone(&name, book);
            writeln!(self.output, "{reply}")?;
        }
        Ok(())
    }

    fn show_address(&mut self, book: &AddressBook) -> io::Result<()> {
        if let Some(name) = self.ask_existing("Enter name (or 0 to cancel): ", book)? {
            let reply = commands::show_address(&name, book);
            writeln!(self.output, "{reply}")?;
        }
        Ok(())
    }

    fn delete(&mut self, book: &mut AddressBook) -> io::Result<()> {
        loop {
            let Some(name) = self.ask("Enter name (or 0 to cancel): ")? else {
                return Ok(());
            };
            let reply = commands::delete_contact(&name, book);
            writeln!(self.output, "{reply}")?;
            if !reply.is_not_found() {
                return Ok(());
            }
        }
    }

    fn rename(&mut self, book: &mut AddressBook) -> io::Result<()> {
        let Some(old) = self.ask_existing("Enter current name (or 0 to cancel): ", book)? else {
            return Ok(());
        };
        let Some(new) = self.ask_field("Enter new name (or 0 to cancel): ", Name::new)? else {
            return Ok(());
        };
        let reply = commands::change_name(&old, &new, book);
        self.print_reply(reply)
    }

    fn change_phone(&mut self, book: &mut AddressBook) -> io::Result<()> {
        let Some(name) = self.ask_existing("Enter name (or 0 to cancel): ", book)? else {
            return Ok(());
        };
        let Some(phone) = self.ask_field(
            "Enter new phone (10 digits, or 0 to cancel): ",
            Phone::new,
        )?
        else {
            return Ok(());
        };
        let reply = commands::change_phone(&name, &phone, book);
        self.print_reply(reply)
    }

    fn change_address(&mut self, book: &mut AddressBook) -> io::Result<()> {
        let Some(name) = self.ask_existing("Enter name (or 0 to cancel): ", book)? else {
            return Ok(());
        };
        let Some(address) =
            self.ask_field("Enter new address (or 0 to cancel): ", Address::new)?
        else {
            return Ok(());
        };
        let reply = commands::change_address(&name, &address, book);
        self.print_reply(reply)
    }

    fn print_reply(&mut self, reply: Result<Reply, DomainError>) -> io::Result<()> {
        match reply {
            Ok(reply) => writeln!(self.output, "{reply}"),
            Err(e) => writeln!(self.output, "{e}"),
        }
    }

    /// Prompts until `validate` accepts the value. `None` means cancelled.
    fn ask_field<T>(
        &mut self,
        label: &str,
        validate: impl Fn(&str) -> Result<T, DomainError>,
    ) -> io::Result<Option<String>> {
        loop {
            let Some(value) = self.ask(label)? else {
                return Ok(None);
            };
            match validate(&value) {
                Ok(_) => return Ok(Some(value)),
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }

    /// Prompts until the name belongs to a contact in `book`.
    fn ask_existing(&mut self, label: &str, book: &AddressBook) -> io::Result<Option<String>> {
        loop {
            let Some(name) = self.ask(label)? else {
                return Ok(None);
            };
            if book.find(&name).is_some() {
                return Ok(Some(name));
            }
            writeln!(self.output, "{}", Reply::NotFound)?;
        }
    }

    /// `None` on the cancel sentinel or end of input.
    fn ask(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        Ok(self.read_line()?.filter(|value| value != CANCEL))
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use addrbook_adapters::persistence::JsonFileStore;
    use addrbook_ports::error::StorageError;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn run_script<S: BookStore>(session: &mut BookSession<S>, script: &str) -> (Exit, String) {
        let mut output = Vec::new();
        let exit = Menu::new(Cursor::new(script.as_bytes()), &mut output)
            .run(session)
            .unwrap();
        (exit, String::from_utf8(output).unwrap())
    }

    #[test]
    fn add_then_save_writes_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("book.json");
        let mut session = BookSession::open(JsonFileStore::new(&path)).unwrap();

        let (exit, out) = run_script(&mut session, "1\nAnn Lee\n1234567890\n123 Main St\n9\n");

        assert_eq!(exit, Exit::Saved);
        assert!(out.contains("Contact Ann Lee added."));
        assert!(out.contains("Data saved, goodbye!"));

        let reloaded = BookSession::open(JsonFileStore::new(&path)).unwrap();
        assert!(reloaded.book().find("Ann Lee").is_some());
    }

    #[test]
    fn invalid_field_is_reprompted() {
        let dir = tempdir().unwrap();
        let mut session =
            BookSession::open(JsonFileStore::new(dir.path().join("book.json"))).unwrap();

        let (_, out) = run_script(
            &mut session,
            "1\nA\nAnn\n12345\n1234567890\nSt\n12 Elm St\n",
        );

        assert!(out.contains(&DomainError::InvalidName.to_string()));
        assert!(out.contains(&DomainError::InvalidPhone.to_string()));
        assert!(out.contains(&DomainError::InvalidAddress.to_string()));
        assert_eq!(
            session.book().find("Ann").unwrap().address().unwrap().as_str(),
            "12 Elm St"
        );
    }

    #[test]
    fn cancel_aborts_add() {
        let dir = tempdir().unwrap();
        let mut session =
            BookSession::open(JsonFileStore::new(dir.path().join("book.json"))).unwrap();

        let (exit, _) = run_script(&mut session, "1\nAnn\n0\n");

        assert_eq!(exit, Exit::InputClosed);
        assert!(session.book().is_empty());
    }

    #[test]
    fn rename_and_lookup_flow() {
        let dir = tempdir().unwrap();
        let mut session =
            BookSession::open(JsonFileStore::new(dir.path().join("book.json"))).unwrap();
        commands::add_contact("Ann Lee", "1234567890", "123 Main St", session.book_mut())
            .unwrap();

        let (_, out) = run_script(
            &mut session,
            "6\nGhost\nAnn Lee\nAnn Smith\n4\nAnn Smith\n5\nAnn Smith\n",
        );

        assert!(out.contains("Contact not found."));
        assert!(out.contains("Contact name changed to Ann Smith."));
        assert!(out.contains("Phone numbers for Ann Smith: 1234567890"));
        assert!(out.contains("Address for Ann Smith: 123 Main St"));
        assert!(session.book().find("Ann Lee").is_none());
    }

    #[test]
    fn delete_retries_until_found() {
        let dir = tempdir().unwrap();
        let mut session =
            BookSession::open(JsonFileStore::new(dir.path().join("book.json"))).unwrap();
        commands::add_contact("Ann Lee", "1234567890", "123 Main St", session.book_mut())
            .unwrap();

        let (_, out) = run_script(&mut session, "3\nBob\nAnn Lee\n");

        assert!(out.contains("Contact not found."));
        assert!(out.contains("Contact Ann Lee deleted."));
        assert!(session.book().is_empty());
    }

    #[test]
    fn change_phone_and_address_flow() {
        let dir = tempdir().unwrap();
        let mut session =
            BookSession::open(JsonFileStore::new(dir.path().join("book.json"))).unwrap();
        commands::add_contact("Ann Lee", "1234567890", "123 Main St", session.book_mut())
            .unwrap();

        let (_, out) = run_script(&mut session, "7\nAnn Lee\n0987654321\n8\nAnn Lee\n9 Oak Ave\n");

        assert!(out.contains("Phone number changed."));
        assert!(out.contains("Address changed."));
        assert!(out.contains("Contact: Ann Lee, phones: 0987654321, address: 9 Oak Ave"));
    }

    #[test]
    fn unknown_choice_prints_help() {
        let dir = tempdir().unwrap();
        let mut session =
            BookSession::open(JsonFileStore::new(dir.path().join("book.json"))).unwrap();

        let (exit, out) = run_script(&mut session, "42\n");

        assert_eq!(exit, Exit::InputClosed);
        assert!(out.contains(HELP));
    }

    struct FailingStore;

    impl BookStore for FailingStore {
        fn load(&self) -> Result<AddressBook, StorageError> {
            Ok(AddressBook::new())
        }
        fn save(&self, _book: &AddressBook) -> Result<(), StorageError> {
            Err(StorageError::Io("read-only file system".into()))
        }
    }

    #[test]
    fn failed_save_keeps_menu_running() {
        let mut session = BookSession::open(FailingStore).unwrap();

        let (exit, out) = run_script(&mut session, "9\n");

        assert_eq!(exit, Exit::InputClosed);
        assert!(out.contains("Could not save the address book"));
        assert!(out.contains("read-only file system"));
    }
}
