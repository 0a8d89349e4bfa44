use serde::{Deserialize, Serialize};

/// Database user model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub first_surname: String,
    pub second_surname: Option<String>,
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

impl User {
    pub fn full_name(&self) -> String {
        full_name(&self.name, &self.first_surname, self.second_surname.as_deref())
    }
}

/// Registration form as collected from the sign-up screen.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistrationForm {
    pub name: String,
    pub first_surname: String,
    #[serde(default)]
    pub second_surname: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

/// A user row about to be written. The password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub first_surname: String,
    pub second_surname: Option<String>,
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
    pub password_hash: String,
}

pub(crate) fn full_name(name: &str, first_surname: &str, second_surname: Option<&str>) -> String {
    match second_surname.filter(|s| !s.is_empty()) {
        Some(second) => format!("{} {} {}", name, first_surname, second),
        None => format!("{} {}", name, first_surname),
    }
}
