use derive_more::Display;
use smallvec::SmallVec;

/// A single reason an operation failed.
///
/// `code` is the stable, machine-readable identifier of the failure, `message`
/// the human-readable explanation. Absence of an error is modelled with
/// `Option<Error>`, never with a reserved sentinel value.
#[derive(Clone, Debug, Display, Eq, Hash, PartialEq)]
#[display(fmt = "{}: {}", code, message)]
pub struct Error {
    code: String,
    message: String,
}

impl Error {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// One failed validation rule, named after the field which broke it.
#[derive(Clone, Debug, Display, Eq, Hash, PartialEq)]
#[display(fmt = "{}: {}", field, message)]
pub struct ValidationError {
    field: String,
    message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub type ValidationErrors = SmallVec<[ValidationError; 4]>;

/// Contract violations: the ways this API can be misused.
///
/// These are programming errors, not domain failures, so they are never
/// returned—each names the message of the panic raised at the misuse site.
#[derive(thiserror::Error, Debug)]
pub enum Misuse {
    #[error("cannot access the error of a successful result")]
    ErrorOfSuccess,

    #[error("cannot access the error of a validation failure")]
    ErrorOfValidationFailure,

    #[error("failure must carry an error or validation errors")]
    EmptyFailure,

    #[error("cannot access validation errors of a successful result")]
    ValidationErrorsOfSuccess,

    #[error("cannot access the value of a failed result")]
    ValueOfFailure,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn error_display() {
        let error = Error::new("not-found", "no such user");
        assert_eq!(error.code(), "not-found");
        assert_eq!(error.message(), "no such user");
        assert_eq!(error.to_string(), "not-found: no such user");
    }

    #[test]
    fn validation_error_display() {
        let validation_error = ValidationError::new("age", "must be non-negative");
        assert_eq!(validation_error.field(), "age");
        assert_eq!(validation_error.message(), "must be non-negative");
        assert_eq!(validation_error.to_string(), "age: must be non-negative");
    }

    #[test]
    fn error_equality() {
        let error = Error::new("timeout", "upstream took too long");
        assert_eq!(error, error.clone());
        assert_ne!(error, Error::new("timeout", "different message"));
        assert_ne!(error, Error::new("not-found", "upstream took too long"));
    }
}
