use tracing::debug;
use tracing::trace;

use crate::secret::validate;
use crate::secret::validate_field;
use crate::secret::FieldErrors;
use crate::secret::SecretForm;
use crate::secret::SecretKind;
use crate::secret::SecretKindTag;
use crate::secret::SecretRequest;

/// change of a single form input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Name(String),
    Namespace(Option<String>),
    Username(String),
    Password(String),
    ServiceAccount { name: String, selected: bool },
    ServerUrl(String),
}

/// State of an open create secret form.
///
/// Errors are only shown after the first submit; edits afterwards clear the
/// errors of fields that became valid but never add new ones.
#[derive(Debug, Clone, Default)]
pub struct SecretFormSession {
    form: SecretForm,
    errors: FieldErrors,
    submitted: bool,
}

impl SecretFormSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_form(form: SecretForm) -> Self {
        Self {
            form,
            ..Default::default()
        }
    }

    pub fn form(&self) -> &SecretForm {
        &self.form
    }

    /// errors currently shown
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn edit(&mut self, edit: FieldEdit) {
        trace!("form edit: {:?}", edit);
        match edit {
            FieldEdit::Name(name) => self.form.name = name,
            FieldEdit::Namespace(namespace) => {
                if self.form.namespace != namespace {
                    // accounts belong to the previous namespace
                    self.form.service_accounts.clear();
                    self.form.namespace = namespace;
                }
            }
            FieldEdit::Username(username) => self.form.username = username,
            FieldEdit::Password(password) => self.form.password = password,
            FieldEdit::ServiceAccount { name, selected } => {
                if selected {
                    self.form.service_accounts.insert(name);
                } else {
                    self.form.service_accounts.remove(&name);
                }
            }
            FieldEdit::ServerUrl(url) => match &mut self.form.kind {
                SecretKind::DockerRegistry { server_url } => *server_url = url,
                SecretKind::BasicAuth => debug!("server url ignored for basic auth secret"),
            },
        }
        self.clear_resolved();
    }

    pub fn set_kind(&mut self, tag: SecretKindTag) {
        if self.form.kind.tag() == tag {
            return;
        }
        debug!("secret kind changed to {:?}", tag);
        self.form.kind = tag.into();
        if self.submitted {
            self.errors = validate(&self.form);
        } else {
            self.clear_resolved();
        }
    }

    /// validate all fields, returns request to create when valid
    pub fn submit(&mut self) -> Result<SecretRequest, FieldErrors> {
        self.submitted = true;
        self.errors = validate(&self.form);
        if self.errors.is_empty() {
            Ok(SecretRequest::from_valid(&self.form))
        } else {
            debug!("secret form has {} invalid fields", self.errors.len());
            Err(self.errors.clone())
        }
    }

    fn clear_resolved(&mut self) {
        let form = &self.form;
        self.errors
            .retain(|field| validate_field(form, field).is_some());
    }
}
