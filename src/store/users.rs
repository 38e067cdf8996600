use crate::error::{AppError, AppResult};
use crate::store::models::User;
use parking_lot::RwLock;

#[derive(Debug, Default)]
pub struct UserStore {
    users: RwLock<Vec<User>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: RwLock::new(users.into_iter().collect()),
        }
    }

    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    /// Exact, case-sensitive match on both fields. Empty credentials never match.
    pub fn is_user_valid(&self, username: &str, password: &str) -> bool {
        if username.is_empty() || password.is_empty() {
            return false;
        }

        self.users
            .read()
            .iter()
            .any(|u| u.username == username && u.password == password)
    }

    pub fn is_username_available(&self, username: &str) -> bool {
        username_available(&self.users.read(), username)
    }

    /// Availability check and insert happen under one write lock, so two
    /// concurrent registrations of the same name cannot both succeed.
    pub fn register_new_user(&self, username: &str, password: &str) -> AppResult<User> {
        if password.trim().is_empty() {
            return Err(AppError::Validation(
                "The password can't be empty".to_string(),
            ));
        }
        if username.trim().is_empty() {
            return Err(AppError::Validation(
                "The username can't be empty".to_string(),
            ));
        }

        let mut users = self.users.write();
        if !username_available(&users, username) {
            return Err(AppError::Validation(
                "The username isn't available".to_string(),
            ));
        }

        let user = User::new(username, password);
        users.push(user.clone());

        Ok(user)
    }
}

fn username_available(users: &[User], username: &str) -> bool {
    !users.iter().any(|u| u.username == username)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::models::demo_users;

    fn seeded() -> UserStore {
        UserStore::with_users(demo_users())
    }

    #[test]
    fn user_validity_combinations() {
        let store = seeded();

        assert!(store.is_user_valid("user1", "pass1"));
        assert!(!store.is_user_valid("user2", "pass1"));
        assert!(!store.is_user_valid("user1", ""));
        assert!(!store.is_user_valid("", "pass1"));
        assert!(!store.is_user_valid("User1", "pass1"));
    }

    #[test]
    fn valid_registration_returns_user() {
        let store = seeded();

        let user = store.register_new_user("newuser", "newpass").unwrap();
        assert_eq!(user.username, "newuser");
        assert_eq!(store.len(), 4);
        assert!(store.is_user_valid("newuser", "newpass"));
    }

    #[test]
    fn invalid_registration_leaves_store_untouched() {
        let store = seeded();

        let taken = store.register_new_user("user1", "pass1").unwrap_err();
        assert!(matches!(taken, AppError::Validation(ref m) if m == "The username isn't available"));

        let blank = store.register_new_user("newuser", "").unwrap_err();
        assert!(matches!(blank, AppError::Validation(ref m) if m == "The password can't be empty"));

        let whitespace = store.register_new_user("newuser", "   ").unwrap_err();
        assert!(matches!(whitespace, AppError::Validation(_)));

        let no_name = store.register_new_user("  ", "secret").unwrap_err();
        assert!(matches!(no_name, AppError::Validation(ref m) if m == "The username can't be empty"));

        assert_eq!(store.len(), 3);
        assert!(store.is_username_available("newuser"));
    }

    #[test]
    fn username_availability() {
        let store = seeded();

        assert!(store.is_username_available("newuser"));
        assert!(!store.is_username_available("user1"));

        store.register_new_user("newuser", "newpass").unwrap();
        assert!(!store.is_username_available("newuser"));
    }

    #[test]
    fn usernames_are_case_sensitive() {
        let store = UserStore::new();

        store.register_new_user("alice", "pw1").unwrap();

        assert!(store.is_user_valid("alice", "pw1"));
        assert!(!store.is_user_valid("Alice", "pw1"));
        assert!(store.is_username_available("Alice"));
    }

    #[test]
    fn concurrent_registrations_of_one_name_admit_a_single_winner() {
        let store = std::sync::Arc::new(UserStore::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = store.clone();
                std::thread::spawn(move || store.register_new_user("racer", "pw").is_ok())
            })
            .collect();

        let winners = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|won| *won)
            .count();

        assert_eq!(winners, 1);
        assert_eq!(store.len(), 1);
    }
}
