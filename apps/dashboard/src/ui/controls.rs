//! Signup role cards and the password visibility toggle.

use serde::{Deserialize, Serialize};

/// Role cards on the signup form. At most one is selected, and its role
/// value is what the form submits.
#[derive(Debug, Clone, Default)]
pub struct RolePicker {
    roles: Vec<String>,
    selected: Option<usize>,
}

impl RolePicker {
    pub fn new<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            roles: roles.into_iter().map(Into::into).collect(),
            selected: None,
        }
    }

    /// Selects the card for `role`, clearing any other. Returns false,
    /// keeping the current selection, if no card carries that role.
    pub fn select(&mut self, role: &str) -> bool {
        match self.roles.iter().position(|r| r == role) {
            Some(i) => {
                self.selected = Some(i);
                true
            }
            None => false,
        }
    }

    /// Value of the hidden role input.
    pub fn selected(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.roles.get(i))
            .map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordVisibility {
    #[default]
    Hidden,
    Shown,
}

impl PasswordVisibility {
    pub fn toggle(self) -> Self {
        match self {
            PasswordVisibility::Hidden => PasswordVisibility::Shown,
            PasswordVisibility::Shown => PasswordVisibility::Hidden,
        }
    }

    /// `type` attribute of the password input.
    pub fn input_type(self) -> &'static str {
        match self {
            PasswordVisibility::Hidden => "password",
            PasswordVisibility::Shown => "text",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            PasswordVisibility::Hidden => "bi-eye",
            PasswordVisibility::Shown => "bi-eye-slash",
        }
    }
}
