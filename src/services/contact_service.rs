use crate::error::Result;
use crate::local_storage::contact::ContactLocalStorage;
use crate::models::{Contact, ContactForm, Outcome};
use crate::services::{search_service, validation};

pub struct ContactService {
    storage: ContactLocalStorage,
}

impl ContactService {
    pub fn new(storage: ContactLocalStorage) -> Self {
        Self { storage }
    }

    pub fn create(&self, form: &ContactForm) -> Outcome {
        let result = validation::validate_contact(form)
            .map_err(Into::into)
            .and_then(|form| self.storage.create_contact(&form));

        Outcome::from_result(result, |_| "Contact saved successfully.".to_string())
    }

    pub fn get(&self, id: i64) -> Result<Option<Contact>> {
        self.storage.get_contact_by_id(id)
    }

    pub fn list(&self) -> Result<Vec<Contact>> {
        self.storage.get_all_contacts()
    }

    pub fn update(&self, id: i64, form: &ContactForm) -> Outcome {
        let result = validation::validate_contact(form)
            .map_err(Into::into)
            .and_then(|form| self.storage.update_contact(id, &form));

        Outcome::from_result(result, |_| "Contact updated successfully.".to_string())
    }

    pub fn delete(&self, id: i64) -> Outcome {
        Outcome::from_result(self.storage.delete_contact(id), |_| {
            "Contact deleted successfully.".to_string()
        })
    }

    /// Matches name, surnames, phone, mobile, activity and participation.
    pub fn search(&self, query: &str) -> Result<Vec<Contact>> {
        let contacts = self.storage.get_all_contacts()?;
        Ok(search_service::filter_records(contacts, query))
    }
}
