use smallvec::SmallVec;

use crate::error::{Error, Misuse, ValidationError, ValidationErrors};

/// The payload common to failed [`Status`](crate::Status) and
/// [`Outcome`](crate::Outcome) values.
///
/// A `Failure` always carries an [`Error`], at least one [`ValidationError`],
/// or both; a failure with neither cannot be constructed. No wrong-state
/// panic is possible here, so [`Failure::error`] returns an `Option` rather
/// than trapping.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Failure {
    error: Option<Error>,
    validation_errors: ValidationErrors,
}

impl Failure {
    pub(crate) fn from_error(error: Error) -> Self {
        Self {
            error: Some(error),
            validation_errors: SmallVec::new(),
        }
    }

    #[track_caller]
    pub(crate) fn from_validation_errors(
        validation_errors: impl IntoIterator<Item = ValidationError>,
    ) -> Self {
        let validation_errors: ValidationErrors = validation_errors.into_iter().collect();
        if validation_errors.is_empty() {
            panic!("{}", Misuse::EmptyFailure);
        }
        Self {
            error: None,
            validation_errors,
        }
    }

    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    pub fn validation_errors(&self) -> &[ValidationError] {
        &self.validation_errors
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn from_error() {
        let error = Error::new("not-found", "no such user");
        let failure = Failure::from_error(error.clone());
        assert_eq!(failure.error(), Some(&error));
        assert!(failure.validation_errors().is_empty());
    }

    #[test]
    fn from_validation_errors() {
        let validation_errors = [
            ValidationError::new("name", "must not be empty"),
            ValidationError::new("age", "must be non-negative"),
        ];
        let failure = Failure::from_validation_errors(validation_errors.clone());
        assert_eq!(failure.error(), None);
        assert_eq!(failure.validation_errors(), &validation_errors);
    }

    #[test]
    #[should_panic(expected = "failure must carry an error or validation errors")]
    fn empty_validation_errors_rejected() {
        Failure::from_validation_errors([]);
    }
}
