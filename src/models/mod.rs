pub mod contact;
pub mod options;
pub mod outcome;
pub mod quotation;
pub mod rule;
pub mod session;
pub mod user;

pub use contact::{Contact, ContactForm};
pub use outcome::Outcome;
pub use quotation::{Quotation, QuotationDraft, QuotationForm};
pub use rule::Rule;
pub use session::{SessionState, SessionUser};
pub use user::{NewUser, RegistrationForm, User};
