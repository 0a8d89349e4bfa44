pub mod contact;
pub mod core_local_storage;
pub mod quotation;
pub mod rule;
pub mod settings;
pub mod user;

pub use core_local_storage::CoreLocalStorage;
