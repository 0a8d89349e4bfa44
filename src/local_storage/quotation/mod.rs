pub mod quotation_local_storage;
pub mod quotation_sequence;
pub mod quotation_tables;

pub use quotation_local_storage::QuotationLocalStorage;
pub use quotation_sequence::QuotationSequence;
pub use quotation_tables::QuotationTable;
