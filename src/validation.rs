//! Contact payload validation.
//!
//! Turns an untyped JSON body into [`ContactFields`], reporting only the
//! first offending field. Fields are checked in the fixed order
//! name, email, phone; keys outside the schema are checked last.

use miette::Diagnostic;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::db::ContactFields;

pub const NAME_MIN: usize = 3;
pub const NAME_MAX: usize = 30;
pub const PHONE_MIN: usize = 10;
pub const PHONE_MAX: usize = 20;
/// Minimum number of dot-separated labels in an email domain.
pub const EMAIL_MIN_DOMAIN_SEGMENTS: usize = 2;

const EMAIL_MAX: usize = 254;
const DOMAIN_LABEL_MAX: usize = 63;
const ALLOWED_KEYS: [&str; 3] = ["name", "email", "phone"];

/// Label reported when the payload itself is not a JSON object.
const ROOT_LABEL: &str = "value";

/// The first field of a payload that failed the contact schema.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
#[error("missing required {field} field")]
#[diagnostic(code(contacts::validation::invalid_field))]
pub struct ValidationError {
    pub field: String,
}

impl ValidationError {
    fn new(field: &str) -> Self {
        Self {
            field: field.to_string(),
        }
    }
}

/// Validate a raw contact payload.
pub fn validate_contact(payload: &Value) -> Result<ContactFields, ValidationError> {
    let object = payload
        .as_object()
        .ok_or_else(|| ValidationError::new(ROOT_LABEL))?;

    let name = string_field(object, "name")
        .filter(|name| within(name, NAME_MIN, NAME_MAX))
        .ok_or_else(|| ValidationError::new("name"))?;

    let email = string_field(object, "email")
        .filter(|email| is_valid_email(email))
        .ok_or_else(|| ValidationError::new("email"))?;

    let phone = phone_field(object)
        .filter(|phone| within(phone, PHONE_MIN, PHONE_MAX))
        .ok_or_else(|| ValidationError::new("phone"))?;

    // serde_json maps iterate in key order, so the reported key is stable
    if let Some(unknown) = object.keys().find(|k| !ALLOWED_KEYS.contains(&k.as_str())) {
        return Err(ValidationError::new(unknown));
    }

    Ok(ContactFields { name, email, phone })
}

fn string_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    object.get(key)?.as_str().map(str::to_string)
}

/// Phone numbers sent as JSON numbers are stored as their decimal text.
fn phone_field(object: &Map<String, Value>) -> Option<String> {
    match object.get("phone")? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn within(value: &str, min: usize, max: usize) -> bool {
    let len = value.chars().count();
    (min..=max).contains(&len)
}

/// Check `local@domain` with at least two domain segments.
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.len() > EMAIL_MAX {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if domain.contains('@') {
        return false;
    }

    is_valid_local_part(local) && is_valid_domain(domain)
}

fn is_valid_local_part(local: &str) -> bool {
    if local.is_empty() || local.starts_with('.') || local.ends_with('.') || local.contains("..")
    {
        return false;
    }

    local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "!#$%&'*+-/=?^_`{|}~.".contains(c))
}

fn is_valid_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();

    if labels.len() < EMAIL_MIN_DOMAIN_SEGMENTS {
        return false;
    }

    let labels_ok = labels.iter().all(|label| {
        !label.is_empty()
            && label.len() <= DOMAIN_LABEL_MAX
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    });

    // A numeric TLD would make this an IP-like host, not a domain
    let tld_ok = labels
        .last()
        .is_some_and(|tld| !tld.chars().all(|c| c.is_ascii_digit()));

    labels_ok && tld_ok
}
