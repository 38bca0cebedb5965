use std::fmt;

use serde::{Deserialize, Serialize};

use super::FieldErrors;

const PASSWORD_MIN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginField {
    Username,
    Password,
}

impl fmt::Display for LoginField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LoginField::Username => "username",
            LoginField::Password => "password",
        })
    }
}

/// Raw login form input.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Login input that passed validation; this is the `/auth/login` request body.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Validate the login form. The username is the account's e-mail address.
pub fn validate_credentials(form: &LoginForm) -> Result<Credentials, FieldErrors<LoginField>> {
    let mut errors = FieldErrors::new();

    if form.username.is_empty() {
        errors.insert(LoginField::Username, "Email is required");
    } else if !looks_like_email(&form.username) {
        errors.insert(LoginField::Username, "Email is invalid");
    }

    if form.password.is_empty() {
        errors.insert(LoginField::Password, "Password is required");
    } else if form.password.chars().count() < PASSWORD_MIN {
        errors.insert(LoginField::Password, "Password must be at least 4 characters");
    }

    errors.into_result(Credentials {
        username: form.username.clone(),
        password: form.password.clone(),
    })
}

fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}
