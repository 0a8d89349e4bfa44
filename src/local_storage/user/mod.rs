pub mod user_local_storage;
pub mod user_tables;

pub use user_local_storage::UserLocalStorage;
pub use user_tables::UserTable;
