use crate::{
    error::{Error, Misuse, ValidationError},
    failure::Failure,
};

/// The outcome of an operation which returns nothing on success.
///
/// A `Status` is fixed at construction: it is either a success or a failure,
/// never both, and a failure always carries an [`Error`], validation errors,
/// or both. Callers must check [`is_success`](Status::is_success) or branch
/// with [`match_with`](Status::match_with) before touching failure-only
/// fields; wrong-state access panics.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[must_use]
pub enum Status {
    Success,
    Failure(Failure),
}

impl Status {
    pub fn success() -> Self {
        Self::Success
    }

    pub fn failure(error: Error) -> Self {
        Self::Failure(Failure::from_error(error))
    }

    /// Fail with the given validation errors, preserving their order.
    ///
    /// # Panics
    ///
    /// Panics if `validation_errors` is empty: a failure must carry at least
    /// one reason.
    #[track_caller]
    pub fn validation_failure(
        validation_errors: impl IntoIterator<Item = ValidationError>,
    ) -> Self {
        Self::Failure(Failure::from_validation_errors(validation_errors))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// # Panics
    ///
    /// Panics if `self` is a success or a validation-only failure, neither of
    /// which carries an error.
    #[track_caller]
    pub fn error(&self) -> &Error {
        match self {
            Self::Success => panic!("{}", Misuse::ErrorOfSuccess),
            Self::Failure(failure) => match failure.error() {
                Some(error) => error,
                None => panic!("{}", Misuse::ErrorOfValidationFailure),
            },
        }
    }

    /// # Panics
    ///
    /// Panics if `self` is a success.
    #[track_caller]
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::Success => panic!("{}", Misuse::ValidationErrorsOfSuccess),
            Self::Failure(failure) => failure.validation_errors(),
        }
    }

    /// Resolve this status to an `R`, calling exactly one of the given
    /// callbacks.
    pub fn match_with<R>(
        self,
        on_success: impl FnOnce() -> R,
        on_failure: impl FnOnce(Failure) -> R,
    ) -> R {
        match self {
            Self::Success => on_success(),
            Self::Failure(failure) => on_failure(failure),
        }
    }
}

impl From<Error> for Status {
    fn from(error: Error) -> Self {
        Self::failure(error)
    }
}

impl From<Vec<ValidationError>> for Status {
    fn from(validation_errors: Vec<ValidationError>) -> Self {
        Self::validation_failure(validation_errors)
    }
}

impl FromIterator<ValidationError> for Status {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(validation_errors: I) -> Self {
        Self::validation_failure(validation_errors)
    }
}
