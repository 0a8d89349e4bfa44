use serde::{Deserialize, Serialize};

use crate::models::user::full_name;

/// Address-book entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: i64,
    #[serde(flatten)]
    pub details: ContactForm,
}

impl Contact {
    pub fn full_name(&self) -> String {
        let second = &self.details.second_surname;
        full_name(
            &self.details.name,
            &self.details.first_surname,
            Some(second.as_str()),
        )
    }
}

/// Editable contact fields. Used for both create and update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub first_surname: String,
    pub second_surname: String,
    pub phone: String,
    pub mobile: String,
    pub email: String,
    pub address: String,
    pub activity: String,
    pub note: String,
    pub company: String,
    pub website: String,
    pub skill_level: String,
    pub participation: String,
}

impl ContactForm {
    /// Trims every field the way the form inputs are read.
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            first_surname: self.first_surname.trim().to_string(),
            second_surname: self.second_surname.trim().to_string(),
            phone: self.phone.trim().to_string(),
            mobile: self.mobile.trim().to_string(),
            email: self.email.trim().to_string(),
            address: self.address.trim().to_string(),
            activity: self.activity.trim().to_string(),
            note: self.note.trim().to_string(),
            company: self.company.trim().to_string(),
            website: self.website.trim().to_string(),
            skill_level: self.skill_level.trim().to_string(),
            participation: self.participation.trim().to_string(),
        }
    }
}
