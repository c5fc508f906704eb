// In-memory user collection. Every operation reports its own outcome on
// the console; the returned `Result` only lets callers react if they want.

use std::io::{Stdout, Write};

use crate::console::Console;
use crate::error::{UsersError, UsersResult};
use crate::message::MessageVariant;
use crate::timing;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub age: i64,
}

impl User {
    pub fn new(name: impl Into<String>, age: i64) -> Self {
        User {
            name: name.into(),
            age,
        }
    }

    /// Checked once, on insertion.
    pub fn is_valid(&self) -> bool {
        self.age > 0 && !self.name.is_empty()
    }
}

/// Ordered list of users plus the console its feedback goes to.
pub struct UsersData<W: Write> {
    data: Vec<User>,
    console: Console<W>,
    timing: bool,
}

impl UsersData<Stdout> {
    pub fn stdout(color: bool, timing: bool) -> Self {
        UsersData::new(Console::stdout(color), timing)
    }
}

impl<W: Write> UsersData<W> {
    pub fn new(console: Console<W>, timing: bool) -> Self {
        UsersData {
            data: Vec::new(),
            console,
            timing,
        }
    }

    pub fn users(&self) -> &[User] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn console(&self) -> &Console<W> {
        &self.console
    }

    pub fn console_mut(&mut self) -> &mut Console<W> {
        &mut self.console
    }

    pub fn into_console(self) -> Console<W> {
        self.console
    }

    /// Header, then either a table of every user or "No data.".
    pub fn show_all(&mut self) -> UsersResult<()> {
        let data = &self.data;
        let shown = timing::timed(&mut self.console, "showAll", self.timing, |console| {
            console.emit(MessageVariant::Info, "Users data")?;
            if data.is_empty() {
                return console.emit(MessageVariant::Error, "No data.");
            }
            let rows = data
                .iter()
                .enumerate()
                .map(|(index, user)| vec![index.to_string(), user.name.clone(), user.age.to_string()]);
            console.table(["(index)", "name", "age"], rows)
        })?;
        shown?;
        Ok(())
    }

    /// Append `user` if it has a name and a positive age.
    pub fn add(&mut self, user: User) -> UsersResult<()> {
        let data = &mut self.data;
        timing::timed(&mut self.console, "add", self.timing, |console| {
            if !user.is_valid() {
                log::debug!("rejected user {:?}", user);
                console.emit(MessageVariant::Error, "Incorrect data.")?;
                return Err(UsersError::IncorrectData);
            }
            log::debug!("adding user {:?}", user);
            data.push(user);
            console.emit(MessageVariant::Success, "User created.")?;
            Ok(())
        })?
    }

    /// Remove the first user whose name matches exactly. Not timed.
    pub fn remove(&mut self, name: &str) -> UsersResult<()> {
        match self.data.iter().position(|user| user.name == name) {
            Some(index) => {
                let removed = self.data.remove(index);
                log::debug!("removed user {:?} at {}", removed, index);
                self.console.emit(MessageVariant::Success, "User deleted.")?;
                Ok(())
            }
            None => {
                log::debug!("no user named {:?}", name);
                self.console.emit(MessageVariant::Error, "User not found.")?;
                Err(UsersError::NotFound(name.to_string()))
            }
        }
    }
}
