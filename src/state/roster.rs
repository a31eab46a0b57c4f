#[cfg(test)]
#[path = "roster_test.rs"]
mod roster_test;

use crate::net::types::User;

/// Local-only roster of chat identities plus the current selection.
///
/// The roster never round-trips through the relay; it exists so the person at
/// this keyboard can pick which identity outbound messages are attributed to.
#[derive(Clone, Debug)]
pub struct RosterState {
    pub users: Vec<User>,
    /// Identity attached to outbound messages. The all-empty placeholder user
    /// means "nothing selected" and send is refused while it is active.
    pub selected: User,
}

impl Default for RosterState {
    fn default() -> Self {
        Self {
            users: vec![
                User {
                    name: "Matt".to_owned(),
                    color: "red".to_owned(),
                },
                User {
                    name: "John".to_owned(),
                    color: "blue".to_owned(),
                },
            ],
            selected: User::default(),
        }
    }
}

impl RosterState {
    /// Append a new identity to the roster. Names are not deduplicated; a
    /// later delete by name removes every entry that shares it.
    pub fn create_user(&mut self, name: &str, color: &str) {
        self.users.push(User {
            name: name.to_owned(),
            color: color.to_owned(),
        });
    }

    /// Remove every roster entry named `name`. If the current selection is
    /// one of them the selection resets to the placeholder, so stale
    /// identities can never author new messages.
    pub fn delete_user(&mut self, name: &str) {
        self.users.retain(|user| user.name != name);
        if self.selected.name == name {
            self.selected = User::default();
        }
    }

    pub fn select(&mut self, user: User) {
        self.selected = user;
    }

    pub fn clear_selection(&mut self) {
        self.selected = User::default();
    }

    #[must_use]
    pub fn has_selection(&self) -> bool {
        !self.selected.is_empty()
    }
}
