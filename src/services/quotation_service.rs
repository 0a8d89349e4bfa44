use crate::error::Result;
use crate::local_storage::quotation::{QuotationLocalStorage, QuotationSequence};
use crate::models::{Outcome, Quotation, QuotationForm};
use crate::services::{search_service, validation};

pub struct QuotationService {
    storage: QuotationLocalStorage,
    sequence: QuotationSequence,
    staff_members: Vec<String>,
    payment_accounts: Vec<String>,
}

impl QuotationService {
    pub fn new(
        storage: QuotationLocalStorage,
        sequence: QuotationSequence,
        staff_members: Vec<String>,
        payment_accounts: Vec<String>,
    ) -> Self {
        Self {
            storage,
            sequence,
            staff_members,
            payment_accounts,
        }
    }

    /// Number shown on an empty form. Not reserved.
    pub fn peek_next_number(&self) -> Result<String> {
        self.sequence.peek_next()
    }

    pub fn create(&self, form: &QuotationForm) -> Outcome {
        Outcome::from_result(self.save(form), |quotation| {
            format!(
                "Quotation {} saved. Total: {:.2}",
                quotation.number,
                quotation.total()
            )
        })
    }

    /// Validates and stores a new quotation, returning it with its number.
    pub fn save(&self, form: &QuotationForm) -> Result<Quotation> {
        let draft =
            validation::validate_quotation(form, &self.staff_members, &self.payment_accounts)?;
        self.storage.create_quotation(&draft)
    }

    pub fn get(&self, id: i64) -> Result<Option<Quotation>> {
        self.storage.get_quotation_by_id(id)
    }

    pub fn list(&self) -> Result<Vec<Quotation>> {
        self.storage.get_all_quotations()
    }

    /// Edits every field except the number.
    pub fn update(&self, id: i64, form: &QuotationForm) -> Outcome {
        Outcome::from_result(self.try_update(id, form), |total| {
            format!("Quotation updated. Total: {:.2}", total)
        })
    }

    fn try_update(&self, id: i64, form: &QuotationForm) -> Result<f64> {
        let draft =
            validation::validate_quotation(form, &self.staff_members, &self.payment_accounts)?;
        self.storage.update_quotation(id, &draft)?;
        Ok(draft.total())
    }

    pub fn delete(&self, id: i64) -> Outcome {
        Outcome::from_result(self.storage.delete_quotation(id), |_| {
            "Quotation deleted successfully.".to_string()
        })
    }

    /// Matches number, activity, item name and recipient.
    pub fn search(&self, query: &str) -> Result<Vec<Quotation>> {
        let quotations = self.storage.get_all_quotations()?;
        Ok(search_service::filter_records(quotations, query))
    }
}
