use std::sync::Arc;

use chrono::Utc;
use modkit::PageQuery;
use tracing::{debug, info, instrument};

use super::{
    validate_email, validate_optional_max_len, validate_required, Service, PERSON_NAME_MAX_LEN,
    USERNAME_MAX_LEN,
};
use crate::contract::model::{NewUser, User, UserPatch};
use crate::domain::error::DomainError;
use crate::domain::repo::UserDraft;

impl Service {
    #[instrument(
        name = "task_manager.service.create_user",
        skip(self, new_user),
        fields(username = %new_user.username, email = %new_user.email)
    )]
    pub async fn create_user(&self, new_user: NewUser) -> Result<User, DomainError> {
        info!("Creating new user");

        validate_required("username", &new_user.username, USERNAME_MAX_LEN)?;
        validate_email(&new_user.email)?;
        validate_optional_max_len("first_name", new_user.first_name.as_ref(), PERSON_NAME_MAX_LEN)?;
        validate_optional_max_len("last_name", new_user.last_name.as_ref(), PERSON_NAME_MAX_LEN)?;
        self.validate_password(&new_user.password)?;

        if self.users.find_by_username(&new_user.username).await?.is_some() {
            return Err(DomainError::username_taken(new_user.username));
        }
        if self.users.find_by_email(&new_user.email).await?.is_some() {
            return Err(DomainError::email_taken(new_user.email));
        }

        // Argon2 is CPU-bound; keep it off the async workers.
        let hasher = Arc::clone(&self.hasher);
        let password = new_user.password;
        let password_hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| DomainError::PasswordHash {
                message: e.to_string(),
            })?
            .map_err(|e| DomainError::PasswordHash {
                message: e.to_string(),
            })?;

        let now = Utc::now();
        let user = self
            .users
            .insert(UserDraft {
                username: new_user.username,
                email: new_user.email,
                password_hash,
                first_name: new_user.first_name,
                last_name: new_user.last_name,
                created_at: now,
                updated_at: now,
            })
            .await?;

        info!(user_id = user.id, "Successfully created user");
        Ok(user)
    }

    #[instrument(name = "task_manager.service.get_user", skip(self), fields(user_id = %id))]
    pub async fn get_user(&self, id: i32) -> Result<User, DomainError> {
        debug!("Getting user by id");
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::user_not_found(id))
    }

    #[instrument(name = "task_manager.service.list_users", skip(self))]
    pub async fn list_users(&self, query: PageQuery) -> Result<Vec<User>, DomainError> {
        let users = self.users.list(self.page(query)).await?;
        debug!("Listed {} users", users.len());
        Ok(users)
    }

    #[instrument(name = "task_manager.service.update_user", skip(self), fields(user_id = %id))]
    pub async fn update_user(&self, id: i32, patch: UserPatch) -> Result<User, DomainError> {
        info!("Updating user");

        if let Some(ref username) = patch.username {
            validate_required("username", username, USERNAME_MAX_LEN)?;
        }
        if let Some(ref email) = patch.email {
            validate_email(email)?;
        }
        validate_optional_max_len("first_name", patch.first_name.as_ref(), PERSON_NAME_MAX_LEN)?;
        validate_optional_max_len("last_name", patch.last_name.as_ref(), PERSON_NAME_MAX_LEN)?;

        let mut current = self.get_user(id).await?;

        // Uniqueness for changed identifiers
        if let Some(ref username) = patch.username {
            if username != &current.username
                && self.users.find_by_username(username).await?.is_some()
            {
                return Err(DomainError::username_taken(username.clone()));
            }
        }
        if let Some(ref email) = patch.email {
            if email != &current.email && self.users.find_by_email(email).await?.is_some() {
                return Err(DomainError::email_taken(email.clone()));
            }
        }

        if let Some(username) = patch.username {
            current.username = username;
        }
        if let Some(email) = patch.email {
            current.email = email;
        }
        if let Some(first_name) = patch.first_name {
            current.first_name = Some(first_name);
        }
        if let Some(last_name) = patch.last_name {
            current.last_name = Some(last_name);
        }
        current.updated_at = Utc::now();

        let updated = self
            .users
            .update(current)
            .await?
            .ok_or_else(|| DomainError::user_not_found(id))?;

        info!("Successfully updated user");
        Ok(updated)
    }

    /// Deleting a user removes their projects and tasks as well.
    #[instrument(name = "task_manager.service.delete_user", skip(self), fields(user_id = %id))]
    pub async fn delete_user(&self, id: i32) -> Result<(), DomainError> {
        info!("Deleting user");

        if !self.users.delete(id).await? {
            return Err(DomainError::user_not_found(id));
        }

        info!("Successfully deleted user");
        Ok(())
    }

    fn validate_password(&self, password: &str) -> Result<(), DomainError> {
        let min = self.config.min_password_length.max(1);
        if password.chars().count() < min {
            return Err(DomainError::validation(
                "password",
                format!("must be at least {min} characters long"),
            ));
        }
        Ok(())
    }
}
