pub mod contact_local_storage;
pub mod contact_tables;

pub use contact_local_storage::ContactLocalStorage;
pub use contact_tables::ContactTable;
