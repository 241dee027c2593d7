use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::secret::SecretField;
use crate::secret::SecretForm;
use crate::secret::SecretKind;

/// names must be shorter than this
pub const MAX_NAME_LENGTH: usize = 253;

pub const INVALID_NAME: &str = "Must not start or end with - and be less than 253 characters, contain only lowercase alphanumeric characters or -";
pub const NAMESPACE_REQUIRED: &str = "Namespace required.";
pub const USERNAME_REQUIRED: &str = "Username required.";
pub const PASSWORD_REQUIRED: &str = "Password or Token required.";
pub const SERVICE_ACCOUNT_REQUIRED: &str = "Service Account required.";
pub const SERVER_URL_REQUIRED: &str = "Server URL required.";

static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?$").unwrap());

/// dns-1123 label style name, shorter than 253 characters
pub fn is_valid_name(name: &str) -> bool {
    name.len() < MAX_NAME_LENGTH && NAME_REGEX.is_match(name)
}

/// error of single field, none when the field is valid
pub fn validate_field(form: &SecretForm, field: SecretField) -> Option<&'static str> {
    match field {
        SecretField::Name => (!is_valid_name(&form.name)).then_some(INVALID_NAME),
        SecretField::Namespace => form
            .namespace
            .as_deref()
            .map_or(true, str::is_empty)
            .then_some(NAMESPACE_REQUIRED),
        SecretField::Username => form.username.is_empty().then_some(USERNAME_REQUIRED),
        SecretField::Password => form.password.is_empty().then_some(PASSWORD_REQUIRED),
        SecretField::ServiceAccounts => form
            .service_accounts
            .is_empty()
            .then_some(SERVICE_ACCOUNT_REQUIRED),
        SecretField::ServerUrl => match &form.kind {
            SecretKind::DockerRegistry { server_url } if server_url.is_empty() => {
                Some(SERVER_URL_REQUIRED)
            }
            _ => None,
        },
    }
}

/// errors of all fields
pub fn validate(form: &SecretForm) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for field in SecretField::ALL {
        if let Some(message) = validate_field(form, field) {
            errors.insert(field, message);
        }
    }
    errors
}

/// invalid fields with their message, in form order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<SecretField, &'static str>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: SecretField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn contains(&self, field: SecretField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = SecretField> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SecretField, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }

    pub(crate) fn insert(&mut self, field: SecretField, message: &'static str) {
        self.0.insert(field, message);
    }

    pub(crate) fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(SecretField) -> bool,
    {
        self.0.retain(|field, _| keep(*field));
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (field, message) in self.iter() {
            writeln!(f, "{}: {}", field, message)?;
        }
        Ok(())
    }
}
