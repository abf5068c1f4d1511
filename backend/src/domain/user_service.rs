use tracing::{info, warn};

use crate::domain::error::{DomainError, FieldErrors};
use crate::domain::models::user::User;
use crate::storage::sqlite::repositories::UserRepository;
use crate::storage::sqlite::DbConnection;
use shared::{CreateUserRequest, UpdateUserRequest};

const MAX_NAME_LENGTH: usize = 50;
const MAX_ADDRESS_LENGTH: usize = 200;
const MAX_EMAIL_LENGTH: usize = 200;

/// Service for managing user accounts
#[derive(Clone)]
pub struct UserService {
    users: UserRepository,
}

impl UserService {
    /// Create a new UserService
    pub fn new(db: DbConnection) -> Self {
        Self {
            users: UserRepository::new(db),
        }
    }

    /// Create a new user
    pub async fn create_user(&self, request: CreateUserRequest) -> Result<User, DomainError> {
        info!("Creating user: email={:?}", request.email);

        // Validate the request
        let (name, email, address) = self.validate_create_request(&request)?;

        // Reject emails that are already registered
        if self.users.find_user_by_email(&email).await?.is_some() {
            warn!("Email already in use: {}", email);
            return Err(DomainError::Conflict("Email is already in use.".to_string()));
        }

        let user = self.users.create_user(&name, &email, &address).await?;

        info!("Created user: {} with ID: {}", user.email, user.id);

        Ok(user)
    }

    /// Get a user by ID
    pub async fn get_user(&self, user_id: i64) -> Result<User, DomainError> {
        info!("Getting user: {}", user_id);

        match self.users.get_user(user_id).await? {
            Some(user) => Ok(user),
            None => {
                warn!("User not found: {}", user_id);
                Err(DomainError::not_found("User", user_id))
            }
        }
    }

    /// List all users
    pub async fn list_users(&self) -> Result<Vec<User>, DomainError> {
        info!("Listing all users");

        let users = self.users.list_users().await?;

        info!("Found {} users", users.len());

        Ok(users)
    }

    /// Update an existing user's name and email
    pub async fn update_user(
        &self,
        user_id: i64,
        request: UpdateUserRequest,
    ) -> Result<User, DomainError> {
        info!("Updating user: {}", user_id);

        // Get the existing user
        let mut user = self
            .users
            .get_user(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User", user_id))?;

        // Validate the update request
        let (name, email) = self.validate_update_request(&request)?;

        // The new email must not belong to another account
        if email != user.email && self.users.find_user_by_email(&email).await?.is_some() {
            warn!("Email already in use: {}", email);
            return Err(DomainError::Conflict("Email is already in use.".to_string()));
        }

        user.name = name;
        user.email = email;
        self.users.update_user(&user).await?;

        info!("Updated user: {} with ID: {}", user.email, user.id);

        Ok(user)
    }

    /// Delete a user along with their orders
    pub async fn delete_user(&self, user_id: i64) -> Result<(), DomainError> {
        info!("Deleting user: {}", user_id);

        // Orders and their product links cascade at the schema level
        let deleted = self.users.delete_user(user_id).await?;
        if !deleted {
            warn!("User not found: {}", user_id);
            return Err(DomainError::not_found("User", user_id));
        }

        info!("Deleted user: {}", user_id);

        Ok(())
    }

    /// Validate create user request
    fn validate_create_request(
        &self,
        request: &CreateUserRequest,
    ) -> Result<(String, String, String), DomainError> {
        let mut errors = FieldErrors::new();

        let name = match request.name.as_deref().map(str::trim) {
            None | Some("") => {
                errors.add("name", "Missing data for required field.");
                String::new()
            }
            Some(name) => {
                if name.len() > MAX_NAME_LENGTH {
                    errors.add(
                        "name",
                        format!("Longer than maximum length {}.", MAX_NAME_LENGTH),
                    );
                }
                name.to_string()
            }
        };

        let email = match request.email.as_deref().map(str::trim) {
            None | Some("") => {
                errors.add("email", "Missing data for required field.");
                String::new()
            }
            Some(email) => {
                if email.len() > MAX_EMAIL_LENGTH {
                    errors.add(
                        "email",
                        format!("Longer than maximum length {}.", MAX_EMAIL_LENGTH),
                    );
                }
                if !email.contains('@') {
                    errors.add("email", "Not a valid email address.");
                }
                email.to_string()
            }
        };

        // Address is optional and defaults to an empty string
        let address = request.address.clone().unwrap_or_default();
        if address.len() > MAX_ADDRESS_LENGTH {
            errors.add(
                "address",
                format!("Longer than maximum length {}.", MAX_ADDRESS_LENGTH),
            );
        }

        if !errors.is_empty() {
            return Err(DomainError::Validation(errors));
        }

        Ok((name, email, address))
    }

    /// Validate update user request; both fields are required
    fn validate_update_request(
        &self,
        request: &UpdateUserRequest,
    ) -> Result<(String, String), DomainError> {
        let (name, email, _) = self.validate_create_request(&CreateUserRequest {
            name: request.name.clone(),
            email: request.email.clone(),
            address: None,
        })?;

        Ok((name, email))
    }
}
