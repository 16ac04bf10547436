//! Login form state.

use gate_core::users::User;

use super::text_field::TextField;

/// Controls that can hold focus, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Username,
    Password,
    Submit,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Username => Focus::Password,
            Focus::Password => Focus::Submit,
            Focus::Submit => Focus::Username,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Username => Focus::Submit,
            Focus::Password => Focus::Username,
            Focus::Submit => Focus::Password,
        }
    }
}

/// State of the login form.
///
/// Created when the form is mounted and dropped with it. Only input events
/// and the outcome of the user lookup mutate it.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub username: TextField,
    pub password: TextField,
    pub focus: Focus,
    /// A lookup is in flight.
    pub loading: bool,
    /// The last lookup failed; reveals the error indicator.
    pub error: bool,
    /// Last successfully fetched user.
    pub user: Option<User>,
}

impl FormState {
    pub const PLACEHOLDER_USERNAME: &str = "username";
    pub const PLACEHOLDER_PASSWORD: &str = "password";
    pub const LABEL_IDLE: &str = "Login";
    pub const LABEL_LOADING: &str = "Please wait...";
    pub const ERROR_MESSAGE: &str = "Something went wrong!";

    pub fn new() -> Self {
        Self::default()
    }

    /// Submit is enabled iff both fields are non-empty.
    pub fn can_submit(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }

    pub fn button_label(&self) -> &'static str {
        if self.loading {
            Self::LABEL_LOADING
        } else {
            Self::LABEL_IDLE
        }
    }

    /// The focused text field, if focus is on one.
    pub fn focused_field_mut(&mut self) -> Option<&mut TextField> {
        match self.focus {
            Focus::Username => Some(&mut self.username),
            Focus::Password => Some(&mut self.password),
            Focus::Submit => None,
        }
    }
}
