use crate::error::{Result, StoreError, ValidationError};
use crate::local_storage::contact::ContactLocalStorage;
use crate::local_storage::core_local_storage::CoreLocalStorage;
use crate::local_storage::quotation::{QuotationLocalStorage, QuotationSequence, QuotationTable};
use crate::local_storage::rule::{RuleLocalStorage, RuleTable};
use crate::local_storage::settings::{SettingKey, SettingsLocalStorage, SettingsTable};
use crate::local_storage::user::{UserLocalStorage, UserTable};
use crate::models::{ContactForm, QuotationForm, RegistrationForm, SessionState};
use crate::services::{AuthService, ContactService, QuotationService, RuleService};

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use uuid::Uuid;

// Every test gets its own database file
fn setup_test_db() -> (PathBuf, Arc<CoreLocalStorage>) {
    let db_path = std::env::temp_dir().join(format!("tribu_test_{}.db", Uuid::new_v4()));

    crate::initialize_database(&db_path).expect("Failed to initialize database");
    let core_storage = Arc::new(CoreLocalStorage::new(&db_path));

    (db_path, core_storage)
}

fn teardown_test_db(db_path: &Path) {
    if db_path.exists() {
        fs::remove_file(db_path).expect("Failed to remove test database");
    }
}

fn auth_service(core_storage: &Arc<CoreLocalStorage>) -> AuthService {
    AuthService::new(
        UserLocalStorage::new(core_storage.clone()),
        SettingsLocalStorage::new(core_storage.clone()),
    )
}

fn quotation_service(core_storage: &Arc<CoreLocalStorage>) -> QuotationService {
    QuotationService::new(
        QuotationLocalStorage::new(core_storage.clone()),
        QuotationSequence::new(core_storage.clone()),
        vec!["Ana".to_string(), "Luis".to_string()],
        vec!["SINPE 8888-0000".to_string()],
    )
}

fn contact_form(name: &str, first_surname: &str, activity: &str) -> ContactForm {
    ContactForm {
        name: name.to_string(),
        first_surname: first_surname.to_string(),
        phone: "2222-3333".to_string(),
        activity: activity.to_string(),
        ..ContactForm::default()
    }
}

fn quotation_form(quantity: &str, price: &str) -> QuotationForm {
    QuotationForm {
        author: "Ana".to_string(),
        recipient: "Colegio San José".to_string(),
        recipient_phone: "8888-1111".to_string(),
        activity: "Rappel".to_string(),
        item_name: "Salida de rappel".to_string(),
        activity_date: "2026-11-20".to_string(),
        quantity: quantity.to_string(),
        price: price.to_string(),
        payment_account: "SINPE 8888-0000".to_string(),
        note: String::new(),
    }
}

fn registration_form(username: &str, email: &str) -> RegistrationForm {
    RegistrationForm {
        name: "María".to_string(),
        first_surname: "Rojas".to_string(),
        second_surname: String::new(),
        username: username.to_string(),
        email: email.to_string(),
        phone: String::new(),
        password: "secreto1".to_string(),
        confirm_password: "secreto1".to_string(),
    }
}

#[cfg(test)]
mod core_storage_tests {
    use super::*;

    #[test]
    fn test_initialize_creates_parent_directory() -> Result<()> {
        let dir = std::env::temp_dir().join(format!("tribu_dir_{}", Uuid::new_v4()));
        let db_path = dir.join("nested").join("tribu.db");

        crate::initialize_database(&db_path)?;
        assert!(db_path.exists());

        // A second run leaves existing tables alone
        crate::initialize_database(&db_path)?;

        fs::remove_dir_all(&dir)?;
        Ok(())
    }

    #[test]
    fn test_count_and_delete() -> Result<()> {
        let (db_path, core_storage) = setup_test_db();
        let rules = RuleLocalStorage::new(core_storage.clone());

        let rule = rules.create_rule("Casco obligatorio")?;
        assert_eq!(core_storage.count(RuleTable::TABLE_NAME)?, 1);

        assert_eq!(core_storage.delete(RuleTable::TABLE_NAME, rule.id)?, 1);
        assert_eq!(core_storage.delete(RuleTable::TABLE_NAME, rule.id)?, 0);
        assert_eq!(core_storage.count(RuleTable::TABLE_NAME)?, 0);

        teardown_test_db(&db_path);
        Ok(())
    }
}

#[cfg(test)]
mod settings_tests {
    use super::*;

    #[test]
    fn test_missing_key_is_none() -> Result<()> {
        let (db_path, core_storage) = setup_test_db();
        let settings = SettingsLocalStorage::new(core_storage);

        assert_eq!(settings.get("does_not_exist")?, None);
        assert!(!settings.get_flag(SettingKey::REMEMBER_ME)?);

        teardown_test_db(&db_path);
        Ok(())
    }

    #[test]
    fn test_set_overwrites_existing_value() -> Result<()> {
        let (db_path, core_storage) = setup_test_db();
        let settings = SettingsLocalStorage::new(core_storage.clone());

        settings.set("theme", "dark")?;
        settings.set("theme", "light")?;

        assert_eq!(settings.get("theme")?.as_deref(), Some("light"));
        assert_eq!(core_storage.count(SettingsTable::TABLE_NAME)?, 1);

        teardown_test_db(&db_path);
        Ok(())
    }

    #[test]
    fn test_flags_and_delete() -> Result<()> {
        let (db_path, core_storage) = setup_test_db();
        let settings = SettingsLocalStorage::new(core_storage);

        settings.set_flag(SettingKey::REMEMBER_ME, true)?;
        assert_eq!(settings.get(SettingKey::REMEMBER_ME)?.as_deref(), Some("True"));
        assert!(settings.get_flag(SettingKey::REMEMBER_ME)?);

        settings.set_flag(SettingKey::REMEMBER_ME, false)?;
        assert!(!settings.get_flag(SettingKey::REMEMBER_ME)?);

        assert!(settings.delete(SettingKey::REMEMBER_ME)?);
        assert!(!settings.delete(SettingKey::REMEMBER_ME)?);

        teardown_test_db(&db_path);
        Ok(())
    }
}

#[cfg(test)]
mod sequence_tests {
    use super::*;
    use crate::local_storage::quotation::quotation_sequence::format_number;

    #[test]
    fn test_format_number_pads_to_six_digits() {
        assert_eq!(format_number(150), "000150");
        assert_eq!(format_number(7), "000007");
        assert_eq!(format_number(999_999), "999999");
    }

    #[test]
    fn test_fresh_store_starts_at_150() -> Result<()> {
        let (db_path, core_storage) = setup_test_db();
        let sequence = QuotationSequence::new(core_storage);

        assert_eq!(sequence.peek_next()?, "000150");
        assert_eq!(sequence.increment_and_get()?, "000150");
        assert_eq!(sequence.increment_and_get()?, "000151");

        teardown_test_db(&db_path);
        Ok(())
    }

    #[test]
    fn test_increments_are_strictly_increasing() -> Result<()> {
        let (db_path, core_storage) = setup_test_db();
        let sequence = QuotationSequence::new(core_storage);

        let issued = (0..25)
            .map(|_| sequence.increment_and_get())
            .collect::<Result<Vec<_>>>()?;

        for pair in issued.windows(2) {
            assert!(pair[0] < pair[1], "{} not before {}", pair[0], pair[1]);
        }

        let mut unique = issued.clone();
        unique.dedup();
        assert_eq!(unique.len(), issued.len());
        assert_eq!(issued.last().map(String::as_str), Some("000174"));

        teardown_test_db(&db_path);
        Ok(())
    }

    #[test]
    fn test_peek_does_not_advance() -> Result<()> {
        let (db_path, core_storage) = setup_test_db();
        let sequence = QuotationSequence::new(core_storage);

        sequence.increment_and_get()?;

        let first = sequence.peek_next()?;
        for _ in 0..5 {
            assert_eq!(sequence.peek_next()?, first);
        }
        assert_eq!(sequence.increment_and_get()?, first);

        teardown_test_db(&db_path);
        Ok(())
    }

    #[test]
    fn test_existing_counter_is_continued() -> Result<()> {
        let (db_path, core_storage) = setup_test_db();
        let settings = SettingsLocalStorage::new(core_storage.clone());
        settings.set(SettingKey::QUOTATION_COUNTER, "420")?;

        let sequence = QuotationSequence::new(core_storage);
        assert_eq!(sequence.peek_next()?, "000421");
        assert_eq!(sequence.increment_and_get()?, "000421");
        assert_eq!(settings.get(SettingKey::QUOTATION_COUNTER)?.as_deref(), Some("421"));

        teardown_test_db(&db_path);
        Ok(())
    }

    #[test]
    fn test_corrupt_counter_is_reported() -> Result<()> {
        let (db_path, core_storage) = setup_test_db();
        SettingsLocalStorage::new(core_storage.clone())
            .set(SettingKey::QUOTATION_COUNTER, "abc")?;

        let sequence = QuotationSequence::new(core_storage);
        assert!(matches!(
            sequence.increment_and_get(),
            Err(StoreError::CorruptSetting { .. })
        ));

        teardown_test_db(&db_path);
        Ok(())
    }

    #[test]
    fn test_exhausted_sequence_is_reported() -> Result<()> {
        let (db_path, core_storage) = setup_test_db();
        let settings = SettingsLocalStorage::new(core_storage.clone());
        settings.set(SettingKey::QUOTATION_COUNTER, "999999")?;

        let sequence = QuotationSequence::new(core_storage);
        assert!(matches!(
            sequence.increment_and_get(),
            Err(StoreError::SequenceExhausted(999_999))
        ));
        assert_eq!(
            settings.get(SettingKey::QUOTATION_COUNTER)?.as_deref(),
            Some("999999")
        );

        teardown_test_db(&db_path);
        Ok(())
    }
}

#[cfg(test)]
mod user_tests {
    use super::*;
    use crate::services::auth_service::{hash_password, verify_password};

    #[test]
    fn test_register_and_login_by_username_or_email() -> Result<()> {
        let (db_path, core_storage) = setup_test_db();
        let auth = auth_service(&core_storage);

        let outcome = auth.register(&registration_form("maria", "maria@example.com"));
        assert!(outcome.success, "{}", outcome.message);

        let mut session = SessionState::default();
        let outcome = auth.login(&mut session, "maria", "secreto1", false);
        assert!(outcome.success);
        assert_eq!(outcome.message, "Welcome, María!");
        assert_eq!(session.user().map(|u| u.username.as_str()), Some("maria"));

        let mut session = SessionState::default();
        assert!(auth.login(&mut session, "maria@example.com", "secreto1", false).success);
        assert!(session.is_authenticated());

        teardown_test_db(&db_path);
        Ok(())
    }

    #[test]
    fn test_get_user_by_id() -> Result<()> {
        let (db_path, core_storage) = setup_test_db();
        let auth = auth_service(&core_storage);
        assert!(auth.register(&registration_form("maria", "maria@example.com")).success);

        let users = UserLocalStorage::new(core_storage.clone());
        let registered = users
            .get_user_by_identifier("maria")?
            .expect("user should exist");

        let by_id = users.get_user_by_id(registered.id)?.expect("user should exist");
        assert_eq!(by_id, registered);
        assert_eq!(by_id.email, "maria@example.com");
        assert_eq!(by_id.second_surname, None);
        assert_eq!(by_id.full_name(), "María Rojas");

        assert_eq!(users.get_user_by_id(registered.id + 100)?, None);

        teardown_test_db(&db_path);
        Ok(())
    }

    #[test]
    fn test_unsaved_remember_me_is_reported() -> Result<()> {
        let (db_path, core_storage) = setup_test_db();
        let auth = auth_service(&core_storage);
        auth.register(&registration_form("maria", "maria@example.com"));

        let conn = core_storage.get_connection()?;
        conn.execute_batch(&format!("DROP TABLE {};", SettingsTable::TABLE_NAME))?;

        let mut session = SessionState::default();
        let remembered = auth.login(&mut session, "maria", "secreto1", true);
        assert!(remembered.success);
        assert!(session.is_authenticated());
        assert!(
            remembered.message.contains("could not be remembered"),
            "{}",
            remembered.message
        );

        let plain = auth.login(&mut session, "maria", "secreto1", false);
        assert_eq!(plain.message, "Welcome, María!");

        teardown_test_db(&db_path);
        Ok(())
    }

    #[test]
    fn test_password_is_stored_hashed() -> Result<()> {
        let (db_path, core_storage) = setup_test_db();
        let auth = auth_service(&core_storage);
        auth.register(&registration_form("maria", "maria@example.com"));

        let user = UserLocalStorage::new(core_storage)
            .get_user_by_identifier("maria")?
            .expect("user should exist");

        assert_ne!(user.password_hash, "secreto1");
        assert!(user.password_hash.starts_with("$argon2"));
        assert!(verify_password("secreto1", &user.password_hash));
        assert!(!verify_password("secreto2", &user.password_hash));

        teardown_test_db(&db_path);
        Ok(())
    }

    #[test]
    fn test_duplicate_username_and_email() -> Result<()> {
        let (db_path, core_storage) = setup_test_db();
        let auth = auth_service(&core_storage);

        assert!(auth.register(&registration_form("maria", "maria@example.com")).success);

        let same_username = auth.register(&registration_form("maria", "otra@example.com"));
        assert!(!same_username.success);
        assert!(same_username.message.contains("Username"), "{}", same_username.message);

        let same_email = auth.register(&registration_form("otra", "maria@example.com"));
        assert!(!same_email.success);
        assert!(same_email.message.contains("Email"), "{}", same_email.message);

        assert_eq!(core_storage.count(UserTable::TABLE_NAME)?, 1);

        teardown_test_db(&db_path);
        Ok(())
    }

    #[test]
    fn test_registration_validation() {
        let (db_path, core_storage) = setup_test_db();
        let auth = auth_service(&core_storage);

        let mut mismatch = registration_form("maria", "maria@example.com");
        mismatch.confirm_password = "otra cosa".to_string();
        assert!(!auth.register(&mismatch).success);

        let mut short = registration_form("maria", "maria@example.com");
        short.password = "abc".to_string();
        short.confirm_password = "abc".to_string();
        assert!(!auth.register(&short).success);

        let bad_email = registration_form("maria", "maria.example.com");
        assert!(!auth.register(&bad_email).success);

        let mut missing = registration_form("maria", "maria@example.com");
        missing.first_surname = "  ".to_string();
        let outcome = auth.register(&missing);
        assert!(outcome.message.contains("first surname"), "{}", outcome.message);

        teardown_test_db(&db_path);
    }

    #[test]
    fn test_wrong_password_leaves_session_anonymous() {
        let (db_path, core_storage) = setup_test_db();
        let auth = auth_service(&core_storage);
        auth.register(&registration_form("maria", "maria@example.com"));

        let mut session = SessionState::default();
        let wrong = auth.login(&mut session, "maria", "incorrecta", true);
        assert!(!wrong.success);
        assert_eq!(wrong.message, "Invalid username or password.");

        let unknown = auth.login(&mut session, "nadie", "secreto1", false);
        assert_eq!(unknown.message, wrong.message);
        assert_eq!(session, SessionState::Anonymous);

        teardown_test_db(&db_path);
    }

    #[test]
    fn test_remembered_login_is_restored() -> Result<()> {
        let (db_path, core_storage) = setup_test_db();
        let auth = auth_service(&core_storage);
        auth.register(&registration_form("maria", "maria@example.com"));

        let mut session = SessionState::default();
        assert!(auth.login(&mut session, "maria", "secreto1", true).success);

        let settings = SettingsLocalStorage::new(core_storage.clone());
        assert!(settings.get_flag(SettingKey::REMEMBER_ME)?);

        let restored = auth_service(&core_storage).restore_session();
        assert_eq!(restored, session);

        teardown_test_db(&db_path);
        Ok(())
    }

    #[test]
    fn test_login_without_remember_is_not_restored() {
        let (db_path, core_storage) = setup_test_db();
        let auth = auth_service(&core_storage);
        auth.register(&registration_form("maria", "maria@example.com"));

        let mut session = SessionState::default();
        auth.login(&mut session, "maria", "secreto1", false);

        assert_eq!(auth.restore_session(), SessionState::Anonymous);

        teardown_test_db(&db_path);
    }

    #[test]
    fn test_changed_password_blocks_auto_login() -> Result<()> {
        let (db_path, core_storage) = setup_test_db();
        let auth = auth_service(&core_storage);
        auth.register(&registration_form("maria", "maria@example.com"));

        let mut session = SessionState::default();
        assert!(auth.login(&mut session, "maria", "secreto1", true).success);

        let conn = core_storage.get_connection()?;
        conn.execute(
            &format!(
                "UPDATE {} SET {} = ?1 WHERE {} = ?2",
                UserTable::TABLE_NAME,
                UserTable::COLUMN_PASSWORD_HASH,
                UserTable::COLUMN_USERNAME
            ),
            rusqlite::params![hash_password("nueva-clave")?, "maria"],
        )?;

        assert_eq!(auth.restore_session(), SessionState::Anonymous);

        let settings = SettingsLocalStorage::new(core_storage.clone());
        assert!(!settings.get_flag(SettingKey::REMEMBER_ME)?);
        assert_eq!(settings.get(SettingKey::REMEMBERED_CREDENTIAL)?, None);

        teardown_test_db(&db_path);
        Ok(())
    }

    #[test]
    fn test_logout_clears_remember_me() -> Result<()> {
        let (db_path, core_storage) = setup_test_db();
        let auth = auth_service(&core_storage);
        auth.register(&registration_form("maria", "maria@example.com"));

        let mut session = SessionState::default();
        auth.login(&mut session, "maria", "secreto1", true);

        assert!(auth.logout(&mut session).success);
        assert_eq!(session, SessionState::Anonymous);

        let settings = SettingsLocalStorage::new(core_storage.clone());
        assert!(!settings.get_flag(SettingKey::REMEMBER_ME)?);
        assert_eq!(auth.restore_session(), SessionState::Anonymous);

        teardown_test_db(&db_path);
        Ok(())
    }
}

#[cfg(test)]
mod contact_tests {
    use super::*;

    fn contact_service(core_storage: &Arc<CoreLocalStorage>) -> ContactService {
        ContactService::new(ContactLocalStorage::new(core_storage.clone()))
    }

    #[test]
    fn test_create_and_read_back() -> Result<()> {
        let (db_path, core_storage) = setup_test_db();
        let contacts = contact_service(&core_storage);

        let mut form = contact_form("  Carlos ", "Mora", "Escalada");
        form.email = "carlos@example.com".to_string();
        assert!(contacts.create(&form).success);

        let all = contacts.list()?;
        assert_eq!(all.len(), 1);

        let stored = contacts.get(all[0].id)?.expect("contact should exist");
        assert_eq!(stored.details.name, "Carlos");
        assert_eq!(stored.details.second_surname, "");
        assert_eq!(stored.details.email, "carlos@example.com");
        assert_eq!(stored.full_name(), "Carlos Mora");

        teardown_test_db(&db_path);
        Ok(())
    }

    #[test]
    fn test_missing_first_surname_writes_nothing() -> Result<()> {
        let (db_path, core_storage) = setup_test_db();
        let contacts = contact_service(&core_storage);
        contacts.create(&contact_form("Carlos", "Mora", "Escalada"));

        let outcome = contacts.create(&contact_form("Laura", "", "Rappel"));
        assert!(!outcome.success);
        assert!(outcome.message.contains("first surname"), "{}", outcome.message);
        assert_eq!(contacts.list()?.len(), 1);

        teardown_test_db(&db_path);
        Ok(())
    }

    #[test]
    fn test_invalid_email_is_rejected() -> Result<()> {
        let (db_path, core_storage) = setup_test_db();
        let contacts = contact_service(&core_storage);

        let mut form = contact_form("Carlos", "Mora", "Escalada");
        form.email = "carlos@".to_string();
        assert!(!contacts.create(&form).success);
        assert!(contacts.list()?.is_empty());

        teardown_test_db(&db_path);
        Ok(())
    }

    #[test]
    fn test_update_replaces_fields() -> Result<()> {
        let (db_path, core_storage) = setup_test_db();
        let contacts = contact_service(&core_storage);
        contacts.create(&contact_form("Carlos", "Mora", "Escalada"));
        let id = contacts.list()?[0].id;

        let mut form = contact_form("Carlos", "Mora", "Canyoning");
        form.second_surname = "Solís".to_string();
        assert!(contacts.update(id, &form).success);

        let stored = contacts.get(id)?.expect("contact should exist");
        assert_eq!(stored.details.activity, "Canyoning");
        assert_eq!(stored.full_name(), "Carlos Mora Solís");

        teardown_test_db(&db_path);
        Ok(())
    }

    #[test]
    fn test_missing_id_reports_not_found() {
        let (db_path, core_storage) = setup_test_db();
        let contacts = contact_service(&core_storage);

        let deleted = contacts.delete(4242);
        assert!(!deleted.success);
        assert!(deleted.message.contains("not found"), "{}", deleted.message);

        let updated = contacts.update(4242, &contact_form("Carlos", "Mora", "Escalada"));
        assert!(!updated.success);
        assert!(updated.message.contains("not found"), "{}", updated.message);

        teardown_test_db(&db_path);
    }

    #[test]
    fn test_delete_removes_contact() -> Result<()> {
        let (db_path, core_storage) = setup_test_db();
        let contacts = contact_service(&core_storage);
        contacts.create(&contact_form("Carlos", "Mora", "Escalada"));
        let id = contacts.list()?[0].id;

        assert!(contacts.delete(id).success);
        assert_eq!(contacts.get(id)?, None);

        teardown_test_db(&db_path);
        Ok(())
    }

    #[test]
    fn test_list_is_ordered_by_name_then_surname() -> Result<()> {
        let (db_path, core_storage) = setup_test_db();
        let contacts = contact_service(&core_storage);
        contacts.create(&contact_form("Laura", "Vargas", "Rappel"));
        contacts.create(&contact_form("Carlos", "Mora", "Escalada"));
        contacts.create(&contact_form("Carlos", "Araya", "Senderista"));

        let names: Vec<String> = contacts.list()?.iter().map(|c| c.full_name()).collect();
        assert_eq!(names, vec!["Carlos Araya", "Carlos Mora", "Laura Vargas"]);

        teardown_test_db(&db_path);
        Ok(())
    }

    #[test]
    fn test_search_by_activity_is_case_insensitive() -> Result<()> {
        let (db_path, core_storage) = setup_test_db();
        let contacts = contact_service(&core_storage);
        contacts.create(&contact_form("Carlos", "Mora", "Espeleología"));
        contacts.create(&contact_form("Laura", "Vargas", "Rappel"));
        contacts.create(&contact_form("Pedro", "Castro", "espeleología"));

        let found = contacts.search("ESPELEOLOGÍA")?;
        let names: Vec<&str> = found.iter().map(|c| c.details.name.as_str()).collect();
        assert_eq!(names, vec!["Carlos", "Pedro"]);

        assert_eq!(contacts.search("")?.len(), 3);
        assert_eq!(contacts.search("   ")?.len(), 3);
        assert!(contacts.search("buceo")?.is_empty());

        teardown_test_db(&db_path);
        Ok(())
    }
}

#[cfg(test)]
mod quotation_tests {
    use super::*;

    #[test]
    fn test_create_assigns_number_and_total() -> Result<()> {
        let (db_path, core_storage) = setup_test_db();
        let quotations = quotation_service(&core_storage);

        assert_eq!(quotations.peek_next_number()?, "000150");

        let outcome = quotations.create(&quotation_form("3", "100.00"));
        assert!(outcome.success, "{}", outcome.message);
        assert_eq!(outcome.message, "Quotation 000150 saved. Total: 300.00");

        let stored = &quotations.list()?[0];
        assert_eq!(stored.number, "000150");
        assert_eq!(stored.quantity, 3);
        assert_eq!(stored.total(), 300.0);
        assert_eq!(stored.recipient_phone.as_deref(), Some("8888-1111"));
        assert_eq!(quotations.peek_next_number()?, "000151");

        teardown_test_db(&db_path);
        Ok(())
    }

    #[test]
    fn test_update_recomputes_total_and_keeps_number() -> Result<()> {
        let (db_path, core_storage) = setup_test_db();
        let quotations = quotation_service(&core_storage);

        let created = quotations.save(&quotation_form("3", "100.00"))?;
        assert_eq!(created.total(), 300.0);

        let outcome = quotations.update(created.id, &quotation_form("5", "100.00"));
        assert!(outcome.success, "{}", outcome.message);
        assert_eq!(outcome.message, "Quotation updated. Total: 500.00");

        let stored = quotations.get(created.id)?.expect("quotation should exist");
        assert_eq!(stored.total(), 500.0);
        assert_eq!(stored.number, created.number);
        assert_eq!(stored.created_at, created.created_at);

        teardown_test_db(&db_path);
        Ok(())
    }

    #[test]
    fn test_comma_decimal_price_is_accepted() -> Result<()> {
        let (db_path, core_storage) = setup_test_db();
        let quotations = quotation_service(&core_storage);

        let created = quotations.save(&quotation_form("2", "12,50"))?;
        assert_eq!(created.price, 12.5);
        assert_eq!(created.total(), 25.0);

        teardown_test_db(&db_path);
        Ok(())
    }

    #[test]
    fn test_invalid_numbers_do_not_consume_a_number() -> Result<()> {
        let (db_path, core_storage) = setup_test_db();
        let quotations = quotation_service(&core_storage);

        let bad_quantity = quotations.create(&quotation_form("tres", "100"));
        assert!(!bad_quantity.success);
        assert!(bad_quantity.message.contains("quantity"), "{}", bad_quantity.message);

        let bad_price = quotations.create(&quotation_form("3", "cien"));
        assert!(!bad_price.success);
        assert!(bad_price.message.contains("price"), "{}", bad_price.message);
        assert_ne!(bad_quantity.message, bad_price.message);

        let mut missing = quotation_form("3", "100");
        missing.recipient = String::new();
        assert!(!quotations.create(&missing).success);

        assert!(quotations.list()?.is_empty());
        assert_eq!(quotations.peek_next_number()?, "000150");

        teardown_test_db(&db_path);
        Ok(())
    }

    #[test]
    fn test_failed_insert_rolls_back_counter() -> Result<()> {
        let (db_path, core_storage) = setup_test_db();
        let quotations = quotation_service(&core_storage);

        let conn = core_storage.get_connection()?;
        conn.execute_batch(&format!(
            "CREATE TRIGGER block_insert BEFORE INSERT ON {} \
             BEGIN SELECT RAISE(ABORT, 'insert blocked'); END;",
            QuotationTable::TABLE_NAME
        ))?;

        let result = quotations.save(&quotation_form("3", "100"));
        assert!(matches!(result, Err(StoreError::Database(_))));
        assert_eq!(quotations.peek_next_number()?, "000150");

        let settings = SettingsLocalStorage::new(core_storage.clone());
        assert_eq!(settings.get(SettingKey::QUOTATION_COUNTER)?, None);

        conn.execute_batch("DROP TRIGGER block_insert;")?;
        assert_eq!(quotations.save(&quotation_form("3", "100"))?.number, "000150");

        teardown_test_db(&db_path);
        Ok(())
    }

    #[test]
    fn test_lost_counter_resumes_after_highest_number() -> Result<()> {
        let (db_path, core_storage) = setup_test_db();
        let quotations = quotation_service(&core_storage);

        quotations.save(&quotation_form("1", "10"))?;
        quotations.save(&quotation_form("1", "10"))?;

        let settings = SettingsLocalStorage::new(core_storage.clone());
        assert!(settings.delete(SettingKey::QUOTATION_COUNTER)?);

        assert_eq!(quotations.peek_next_number()?, "000152");
        assert_eq!(quotations.save(&quotation_form("1", "10"))?.number, "000152");
        assert_eq!(
            settings.get(SettingKey::QUOTATION_COUNTER)?.as_deref(),
            Some("152")
        );

        teardown_test_db(&db_path);
        Ok(())
    }

    #[test]
    fn test_update_missing_id_reports_not_found() -> Result<()> {
        let (db_path, core_storage) = setup_test_db();
        let quotations = quotation_service(&core_storage);

        let outcome = quotations.update(4242, &quotation_form("5", "100"));
        assert!(!outcome.success);
        assert!(outcome.message.contains("not found"), "{}", outcome.message);
        assert_eq!(quotations.peek_next_number()?, "000150");

        teardown_test_db(&db_path);
        Ok(())
    }

    #[test]
    fn test_list_is_newest_first() -> Result<()> {
        let (db_path, core_storage) = setup_test_db();
        let quotations = quotation_service(&core_storage);

        let oldest = quotations.save(&quotation_form("1", "10"))?;
        let newest = quotations.save(&quotation_form("1", "10"))?;
        let middle = quotations.save(&quotation_form("1", "10"))?;

        let conn = core_storage.get_connection()?;
        let stamp = format!(
            "UPDATE {} SET {} = ?1 WHERE {} = ?2",
            QuotationTable::TABLE_NAME,
            QuotationTable::COLUMN_CREATED_AT,
            QuotationTable::COLUMN_ID
        );
        conn.execute(&stamp, rusqlite::params!["2026-01-05 09:00:00", oldest.id])?;
        conn.execute(&stamp, rusqlite::params!["2026-03-01 18:30:00", newest.id])?;
        conn.execute(&stamp, rusqlite::params!["2026-02-14 12:00:00", middle.id])?;

        let ids: Vec<i64> = quotations.list()?.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![newest.id, middle.id, oldest.id]);

        teardown_test_db(&db_path);
        Ok(())
    }

    #[test]
    fn test_deleted_number_is_not_reused() -> Result<()> {
        let (db_path, core_storage) = setup_test_db();
        let quotations = quotation_service(&core_storage);

        let first = quotations.save(&quotation_form("1", "10"))?;
        assert!(quotations.delete(first.id).success);

        let second = quotations.save(&quotation_form("1", "10"))?;
        assert_eq!(first.number, "000150");
        assert_eq!(second.number, "000151");

        let missing = quotations.delete(first.id);
        assert!(!missing.success);
        assert!(missing.message.contains("not found"), "{}", missing.message);

        teardown_test_db(&db_path);
        Ok(())
    }

    #[test]
    fn test_search_matches_number_and_recipient() -> Result<()> {
        let (db_path, core_storage) = setup_test_db();
        let quotations = quotation_service(&core_storage);

        quotations.save(&quotation_form("1", "10"))?;
        let mut other = quotation_form("1", "10");
        other.recipient = "Empresa Verde".to_string();
        other.activity = "Canyoning".to_string();
        quotations.save(&other)?;

        let by_number = quotations.search("000151")?;
        assert_eq!(by_number.len(), 1);
        assert_eq!(by_number[0].recipient, "Empresa Verde");

        assert_eq!(quotations.search("colegio")?.len(), 1);
        assert_eq!(quotations.search("")?.len(), 2);

        teardown_test_db(&db_path);
        Ok(())
    }
}

#[cfg(test)]
mod rule_tests {
    use super::*;

    fn rule_service(core_storage: &Arc<CoreLocalStorage>) -> RuleService {
        RuleService::new(RuleLocalStorage::new(core_storage.clone()))
    }

    #[test]
    fn test_rules_are_listed_in_creation_order() -> Result<()> {
        let (db_path, core_storage) = setup_test_db();
        let rules = rule_service(&core_storage);

        assert!(rules.create("Casco obligatorio").success);
        assert!(rules.create("Llegar 15 minutos antes").success);

        let all = rules.list()?;
        let contents: Vec<&str> = all.iter().map(|r| r.content.as_str()).collect();
        assert_eq!(contents, vec!["Casco obligatorio", "Llegar 15 minutos antes"]);
        assert_eq!(all[0].updated_on.len(), "2026-01-01".len());

        teardown_test_db(&db_path);
        Ok(())
    }

    #[test]
    fn test_update_and_delete() -> Result<()> {
        let (db_path, core_storage) = setup_test_db();
        let rules = rule_service(&core_storage);
        rules.create("Casco obligatorio");
        let id = rules.list()?[0].id;

        assert!(rules.update(id, "Casco y guantes obligatorios").success);
        let stored = rules.get(id)?.expect("rule should exist");
        assert_eq!(stored.content, "Casco y guantes obligatorios");

        assert!(rules.delete(id).success);
        assert!(!rules.delete(id).success);
        assert!(rules.list()?.is_empty());

        teardown_test_db(&db_path);
        Ok(())
    }

    #[test]
    fn test_update_missing_id_reports_not_found() -> Result<()> {
        let (db_path, core_storage) = setup_test_db();
        let rules = rule_service(&core_storage);

        let outcome = rules.update(4242, "Casco obligatorio");
        assert!(!outcome.success);
        assert!(outcome.message.contains("not found"), "{}", outcome.message);
        assert!(rules.list()?.is_empty());

        teardown_test_db(&db_path);
        Ok(())
    }

    #[test]
    fn test_blank_content_is_rejected() -> Result<()> {
        let (db_path, core_storage) = setup_test_db();
        let rules = rule_service(&core_storage);

        assert!(!rules.create("   ").success);
        assert!(rules.list()?.is_empty());

        teardown_test_db(&db_path);
        Ok(())
    }
}

#[cfg(test)]
mod validation_tests {
    use super::*;
    use crate::services::validation::{is_valid_email, parse_price, parse_quantity, require};

    #[test]
    fn test_require_lists_every_blank_field() {
        let err = require(&[("name", ""), ("email", "a@b.co"), ("phone", "  ")]);
        assert_eq!(
            err,
            Err(ValidationError::MissingFields(vec!["name", "phone"]))
        );
        assert_eq!(
            err.unwrap_err().to_string(),
            "Missing required fields: name, phone"
        );
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("ana@example.com"));
        assert!(is_valid_email("ana.rojas@mail.example.cr"));
        assert!(!is_valid_email("ana@example"));
        assert!(!is_valid_email("ana@.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ana @example.com"));
        assert!(!is_valid_email("ana@@example.com"));
    }

    #[test]
    fn test_quantity_parsing() {
        assert_eq!(parse_quantity(" 4 "), Ok(4));
        assert!(matches!(
            parse_quantity("4.5"),
            Err(ValidationError::NotAnInteger { .. })
        ));
        assert!(matches!(parse_quantity("-1"), Err(ValidationError::Negative { .. })));
        assert!(matches!(parse_quantity("0"), Err(ValidationError::NotPositive { .. })));
    }

    #[test]
    fn test_price_parsing() {
        assert_eq!(parse_price("100"), Ok(100.0));
        assert_eq!(parse_price("99.95"), Ok(99.95));
        assert_eq!(parse_price("99,95"), Ok(99.95));
        assert_eq!(parse_price("0"), Ok(0.0));
        assert!(matches!(parse_price("1.000,50"), Err(ValidationError::NotADecimal { .. })));
        assert!(matches!(parse_price("NaN"), Err(ValidationError::NotADecimal { .. })));
        assert!(matches!(parse_price("-5"), Err(ValidationError::Negative { .. })));
    }

    #[test]
    fn test_option_lists_are_advisory() {
        use crate::models::options::{ACTIVITIES, SKILL_LEVELS, is_known_option};

        assert!(is_known_option(ACTIVITIES, "Guía"));
        assert!(is_known_option(SKILL_LEVELS, ""));
        assert!(!is_known_option(SKILL_LEVELS, "Experto"));

        let no_staff: Vec<String> = Vec::new();
        assert!(is_known_option(&no_staff, "Cualquiera"));
    }
}
