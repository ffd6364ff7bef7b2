//! Login and signup form validation.
//!
//! There is no account backend: a form that validates just says where to go
//! next.

use lazy_static::lazy_static;
use regex::Regex;
use snafu::ensure;

use crate::error::{Error, ValidationSnafu};

lazy_static!{
    static ref EMAIL_RE: Regex = Regex::new(r#"^[^\s@]+@[^\s@]+\.[^\s@]+$"#).unwrap();
}

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Search,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
            Route::Search => "/search",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

impl LoginForm {
    pub fn submit(&self) -> Result<Route, Error> {
        ensure!(
            EMAIL_RE.is_match(&self.email),
            ValidationSnafu { field: "email", msg: "Please enter a valid email address" }
        );
        ensure!(
            self.password.chars().count() >= MIN_PASSWORD_LEN,
            ValidationSnafu { field: "password", msg: "Password must be at least 6 characters" }
        );
        Ok(Route::Home)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    pub fn submit(&self) -> Result<Route, Error> {
        let missing = [&self.name, &self.email, &self.password, &self.confirm_password]
            .iter()
            .any(|f| f.is_empty());
        ensure!(!missing, ValidationSnafu { field: "form", msg: "Please fill all fields" });
        ensure!(
            self.password == self.confirm_password,
            ValidationSnafu { field: "confirm_password", msg: "Passwords do not match" }
        );
        Ok(Route::Search)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login(email: &str, password: &str) -> LoginForm {
        LoginForm { email: email.into(), password: password.into(), remember_me: false }
    }

    #[test]
    fn login_goes_home() {
        assert_eq!(login("ada@example.com", "secret").submit().unwrap(), Route::Home);
        assert_eq!(Route::Home.path(), "/");
    }

    #[test]
    fn login_checks_email_then_password() {
        let err = login("not-an-email", "short").submit().unwrap_err();
        assert_eq!(err.field_message(), Some(("email", "Please enter a valid email address")));

        let err = login("ada@example.com", "12345").submit().unwrap_err();
        assert_eq!(err.field_message(), Some(("password", "Password must be at least 6 characters")));
    }

    #[test]
    fn signup_requires_all_fields_and_matching_passwords() {
        let mut form = SignupForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            password: "hunter22".into(),
            confirm_password: "".into(),
        };
        assert_eq!(form.submit().unwrap_err().to_string(), "Please fill all fields");

        form.confirm_password = "hunter23".into();
        assert_eq!(form.submit().unwrap_err().to_string(), "Passwords do not match");

        form.confirm_password = "hunter22".into();
        assert_eq!(form.submit().unwrap().path(), "/search");
    }
}
