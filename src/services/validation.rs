//! Field checks run before anything touches the database.

use crate::error::ValidationError;
use crate::models::options::{self, ACTIVITIES, PARTICIPATIONS, SKILL_LEVELS};
use crate::models::{ContactForm, QuotationDraft, QuotationForm, RegistrationForm};

pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Fails with every label whose value is blank.
pub fn require(fields: &[(&'static str, &str)]) -> Result<(), ValidationError> {
    let missing: Vec<&'static str> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| *label)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingFields(missing))
    }
}

/// Shape check only: `local@domain.tld`. Stricter than a bare
/// `x@y.z` match: any whitespace anywhere rejects the address.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    match domain.rfind('.') {
        Some(dot) => dot > 0 && dot + 1 < domain.len(),
        None => false,
    }
}

fn check_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() || is_valid_email(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail(email.to_string()))
    }
}

pub fn parse_quantity(raw: &str) -> Result<i64, ValidationError> {
    let raw = raw.trim();
    let quantity = raw
        .parse::<i64>()
        .map_err(|_| ValidationError::NotAnInteger {
            field: "quantity",
            value: raw.to_string(),
        })?;

    match quantity {
        q if q < 0 => Err(ValidationError::Negative { field: "quantity" }),
        0 => Err(ValidationError::NotPositive { field: "quantity" }),
        q => Ok(q),
    }
}

/// Accepts a dot or, when no dot is present, a comma as decimal separator.
pub fn parse_price(raw: &str) -> Result<f64, ValidationError> {
    let raw = raw.trim();
    let normalized = if raw.contains('.') {
        raw.to_string()
    } else {
        raw.replace(',', ".")
    };

    let price = normalized
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite())
        .ok_or_else(|| ValidationError::NotADecimal {
            field: "price",
            value: raw.to_string(),
        })?;

    if price < 0.0 {
        return Err(ValidationError::Negative { field: "price" });
    }

    Ok(price)
}

pub fn validate_contact(form: &ContactForm) -> Result<ContactForm, ValidationError> {
    let form = form.normalized();

    require(&[
        ("name", form.name.as_str()),
        ("first surname", form.first_surname.as_str()),
    ])?;
    check_email(&form.email)?;

    options::check_option("activity", ACTIVITIES, &form.activity);
    options::check_option("skill level", SKILL_LEVELS, &form.skill_level);
    options::check_option("participation", PARTICIPATIONS, &form.participation);

    Ok(form)
}

pub fn validate_quotation(
    form: &QuotationForm,
    staff_members: &[String],
    payment_accounts: &[String],
) -> Result<QuotationDraft, ValidationError> {
    require(&[
        ("author", form.author.as_str()),
        ("recipient", form.recipient.as_str()),
        ("activity", form.activity.as_str()),
        ("item name", form.item_name.as_str()),
        ("activity date", form.activity_date.as_str()),
        ("quantity", form.quantity.as_str()),
        ("price", form.price.as_str()),
    ])?;

    let quantity = parse_quantity(&form.quantity)?;
    let price = parse_price(&form.price)?;

    let author = form.author.trim().to_string();
    let activity = form.activity.trim().to_string();
    let payment_account = form.payment_account.trim().to_string();

    options::check_option("author", staff_members, &author);
    options::check_option("activity", ACTIVITIES, &activity);
    options::check_option("payment account", payment_accounts, &payment_account);

    let recipient_phone = Some(form.recipient_phone.trim().to_string()).filter(|p| !p.is_empty());

    Ok(QuotationDraft {
        author,
        recipient: form.recipient.trim().to_string(),
        recipient_phone,
        activity,
        item_name: form.item_name.trim().to_string(),
        activity_date: form.activity_date.trim().to_string(),
        quantity,
        price,
        payment_account,
        note: form.note.trim().to_string(),
    })
}

/// Checks a sign-up form. Passwords are compared after trimming, the same
/// way they are read at login.
pub fn validate_registration(form: &RegistrationForm) -> Result<(), ValidationError> {
    require(&[
        ("name", form.name.as_str()),
        ("first surname", form.first_surname.as_str()),
        ("username", form.username.as_str()),
        ("email", form.email.as_str()),
        ("password", form.password.as_str()),
        ("password confirmation", form.confirm_password.as_str()),
    ])?;

    let email = form.email.trim();
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail(email.to_string()));
    }

    if form.password.trim() != form.confirm_password.trim() {
        return Err(ValidationError::PasswordMismatch);
    }

    if form.password.trim().chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort(MIN_PASSWORD_LENGTH));
    }

    Ok(())
}
