use crate::error::{Result, StoreError};
use crate::local_storage::settings::{SettingKey, SettingsLocalStorage};
use crate::local_storage::user::UserLocalStorage;
use crate::models::{NewUser, Outcome, RegistrationForm, SessionState, SessionUser, User};
use crate::services::validation;
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};

/// Registration, login and "remember me" handling.
///
/// The logged-in user is never stored here. Callers own a [`SessionState`]
/// and pass it in; only the remembered login survives in the settings table.
pub struct AuthService {
    users: UserLocalStorage,
    settings: SettingsLocalStorage,
}

impl AuthService {
    pub fn new(users: UserLocalStorage, settings: SettingsLocalStorage) -> Self {
        Self { users, settings }
    }

    pub fn register(&self, form: &RegistrationForm) -> Outcome {
        Outcome::from_result(self.try_register(form), |_| {
            "Registration successful. You can now log in.".to_string()
        })
    }

    fn try_register(&self, form: &RegistrationForm) -> Result<i64> {
        validation::validate_registration(form)?;

        let optional = |value: &str| Some(value.trim().to_string()).filter(|v| !v.is_empty());

        // The plaintext goes no further than this call.
        let password_hash = hash_password(form.password.trim())?;

        let user = NewUser {
            name: form.name.trim().to_string(),
            first_surname: form.first_surname.trim().to_string(),
            second_surname: optional(&form.second_surname),
            username: form.username.trim().to_string(),
            email: form.email.trim().to_string(),
            phone: optional(&form.phone),
            password_hash,
        };

        self.users.create_user(&user)
    }

    /// Verifies the credentials and, on success, binds `session` to the user.
    pub fn login(
        &self,
        session: &mut SessionState,
        identifier: &str,
        password: &str,
        remember: bool,
    ) -> Outcome {
        let identifier = identifier.trim();
        let password = password.trim();

        let required = [("identifier", identifier), ("password", password)];
        if let Err(err) = validation::require(&required) {
            return Outcome::from_error(err);
        }

        let user = match self.users.get_user_by_identifier(identifier) {
            Ok(Some(user)) if verify_password(password, &user.password_hash) => user,
            Ok(_) => {
                tracing::warn!(identifier, "login rejected");
                return Outcome::failure("Invalid username or password.");
            }
            Err(err) => return Outcome::from_error(err),
        };

        let remembered = match self.remember(&user, remember) {
            Ok(()) => true,
            Err(err) => {
                tracing::error!(error = %err, "could not persist remember-me state");
                false
            }
        };

        *session = SessionState::Authenticated(SessionUser::from(&user));
        tracing::info!(username = %user.username, remember, "user logged in");

        let mut message = format!("Welcome, {}!", user.name);
        if remember && !remembered {
            message.push_str(" This login could not be remembered.");
        }
        Outcome::success(message)
    }

    pub fn logout(&self, session: &mut SessionState) -> Outcome {
        if let Err(err) = self.forget() {
            tracing::error!(error = %err, "could not clear remember-me state");
        }

        if let Some(user) = session.user() {
            tracing::info!(username = %user.username, "user logged out");
        }
        *session = SessionState::Anonymous;

        Outcome::success("Logged out.")
    }

    /// Startup check for a remembered login. The remembered credential must
    /// still match the stored password hash; otherwise the remembered state is
    /// cleared and the session starts anonymous.
    pub fn restore_session(&self) -> SessionState {
        match self.try_restore() {
            Ok(Some(user)) => {
                tracing::info!(username = %user.username, "remembered session restored");
                SessionState::Authenticated(user)
            }
            Ok(None) => SessionState::Anonymous,
            Err(err) => {
                tracing::error!(error = %err, "could not restore remembered session");
                SessionState::Anonymous
            }
        }
    }

    fn try_restore(&self) -> Result<Option<SessionUser>> {
        if !self.settings.get_flag(SettingKey::REMEMBER_ME)? {
            return Ok(None);
        }

        let identifier = self.settings.get(SettingKey::REMEMBERED_IDENTIFIER)?;
        let credential = self.settings.get(SettingKey::REMEMBERED_CREDENTIAL)?;

        let (Some(identifier), Some(credential)) = (identifier, credential) else {
            return Ok(None);
        };

        match self.users.get_user_by_identifier(&identifier)? {
            Some(user) if user.password_hash == credential => Ok(Some(SessionUser::from(&user))),
            Some(_) | None => {
                tracing::warn!(identifier = %identifier, "remembered credential no longer valid");
                self.forget()?;
                Ok(None)
            }
        }
    }

    fn remember(&self, user: &User, remember: bool) -> Result<()> {
        if !remember {
            return self.forget();
        }

        self.settings.set(SettingKey::REMEMBERED_IDENTIFIER, &user.username)?;
        self.settings.set(SettingKey::REMEMBERED_CREDENTIAL, &user.password_hash)?;
        self.settings.set_flag(SettingKey::REMEMBER_ME, true)
    }

    /// The identifier may stay behind; it is ignored while the flag is off.
    fn forget(&self) -> Result<()> {
        self.settings.set_flag(SettingKey::REMEMBER_ME, false)?;
        self.settings.delete(SettingKey::REMEMBERED_CREDENTIAL)?;
        Ok(())
    }
}

/// Hashes a password into a PHC string with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String> {
    let salt_bytes: [u8; 16] = rand::random();
    let salt = SaltString::encode_b64(&salt_bytes)
        .map_err(|e| StoreError::PasswordHash(e.to_string()))?;

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| StoreError::PasswordHash(e.to_string()))?;

    Ok(hash.to_string())
}

/// A malformed stored hash never verifies.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    match PasswordHash::new(stored_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(err) => {
            tracing::warn!(error = %err, "stored password hash is malformed");
            false
        }
    }
}
