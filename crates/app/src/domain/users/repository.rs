//! Users Repository

use crate::domain::{
    pagination::Page,
    users::{
        data::{NewUser, UserFilter, UserPatch, UserSearch},
        models::{User, UserId},
    },
};

#[derive(Debug, Clone)]
pub(crate) struct InMemoryUsersRepository {
    users: Vec<User>,
    next_id: UserId,
}

impl InMemoryUsersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            users: Vec::new(),
            next_id: 1,
        }
    }

    #[must_use]
    pub(crate) fn with_seed_data() -> Self {
        let mut repository = Self::new();

        for user in seed_users() {
            repository.create_user(user);
        }

        repository
    }

    pub(crate) fn list_users(&self, filter: &UserFilter, page: Page) -> Vec<User> {
        page.apply(self.users.iter().filter(|user| filter.matches(user)))
            .cloned()
            .collect()
    }

    pub(crate) fn search_users(&self, search: &UserSearch) -> Vec<User> {
        self.users
            .iter()
            .filter(|user| search.matches(user))
            .cloned()
            .collect()
    }

    pub(crate) fn get_user(&self, user: UserId) -> Option<User> {
        self.users.iter().find(|u| u.id == user).cloned()
    }

    pub(crate) fn create_user(&mut self, user: NewUser) -> User {
        let created = User {
            id: self.next_id,
            name: user.name,
            email: user.email,
            role: user.role,
            active: user.active,
        };

        self.next_id += 1;
        self.users.push(created.clone());

        created
    }

    pub(crate) fn replace_user(&mut self, user: UserId, data: NewUser) -> Option<User> {
        let existing = self.find_mut(user)?;

        existing.name = data.name;
        existing.email = data.email;
        existing.role = data.role;
        existing.active = data.active;

        Some(existing.clone())
    }

    pub(crate) fn patch_user(&mut self, user: UserId, patch: UserPatch) -> Option<User> {
        let existing = self.find_mut(user)?;

        if patch.name.is_some() {
            existing.name = patch.name;
        }

        if patch.email.is_some() {
            existing.email = patch.email;
        }

        if patch.role.is_some() {
            existing.role = patch.role;
        }

        Some(existing.clone())
    }

    pub(crate) fn delete_user(&mut self, user: UserId) -> bool {
        let Some(index) = self.users.iter().position(|u| u.id == user) else {
            return false;
        };

        self.users.remove(index);

        true
    }

    fn find_mut(&mut self, user: UserId) -> Option<&mut User> {
        self.users.iter_mut().find(|u| u.id == user)
    }
}

fn seed_users() -> [NewUser; 3] {
    let user = |name: &str, email: &str, role: &str, active: bool| NewUser {
        name: Some(name.to_string()),
        email: Some(email.to_string()),
        role: Some(role.to_string()),
        active,
    };

    [
        user("John Doe", "john.doe@example.com", "admin", true),
        user("Jane Smith", "jane.smith@example.com", "user", true),
        user("Bob Johnson", "bob.johnson@example.com", "user", false),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_users_start_at_one() {
        let mut repository = InMemoryUsersRepository::with_seed_data();

        assert_eq!(
            repository.get_user(1).and_then(|u| u.name),
            Some("John Doe".to_string())
        );
        assert_eq!(repository.create_user(NewUser::default()).id, 4);
    }

    #[test]
    fn patch_keeps_fields_left_out() {
        let mut repository = InMemoryUsersRepository::with_seed_data();

        let patched = repository.patch_user(
            2,
            UserPatch {
                role: Some("admin".to_string()),
                ..UserPatch::default()
            },
        );

        assert_eq!(
            patched,
            Some(User {
                id: 2,
                name: Some("Jane Smith".to_string()),
                email: Some("jane.smith@example.com".to_string()),
                role: Some("admin".to_string()),
                active: true,
            })
        );
    }

    #[test]
    fn delete_only_removes_matching_user() {
        let mut repository = InMemoryUsersRepository::with_seed_data();

        assert!(repository.delete_user(2));
        assert!(!repository.delete_user(2));
        assert!(repository.get_user(1).is_some());
        assert!(repository.get_user(3).is_some());
    }
}
