use crate::{
    error::{Error, Misuse, ValidationError},
    failure::Failure,
    status::Status,
};

/// The outcome of an operation which yields a `T` on success.
///
/// Same contract as [`Status`], plus a payload: the value is only reachable
/// from a success and the failure fields only from a failure, with
/// [`match_with`](Outcome::match_with) as the panic-free way to consume
/// either side.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[must_use]
pub enum Outcome<T> {
    Success(T),
    Failure(Failure),
}

impl<T> Outcome<T> {
    pub fn success(value: T) -> Self {
        Self::Success(value)
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
        matches!(self, Self::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// # Panics
    ///
    /// Panics if `self` is a failure.
    #[track_caller]
    pub fn value(&self) -> &T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => panic!("{}", Misuse::ValueOfFailure),
        }
    }

    /// # Panics
    ///
    /// Panics if `self` is a failure.
    #[track_caller]
    pub fn into_value(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => panic!("{}", Misuse::ValueOfFailure),
        }
    }

    /// # Panics
    ///
    /// Panics if `self` is a success or a validation-only failure, neither of
    /// which carries an error.
    #[track_caller]
    pub fn error(&self) -> &Error {
        match self {
            Self::Success(_) => panic!("{}", Misuse::ErrorOfSuccess),
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
            Self::Success(_) => panic!("{}", Misuse::ValidationErrorsOfSuccess),
            Self::Failure(failure) => failure.validation_errors(),
        }
    }

    /// Resolve this outcome to an `R`, calling exactly one of the given
    /// callbacks.
    pub fn match_with<R>(
        self,
        on_success: impl FnOnce(T) -> R,
        on_failure: impl FnOnce(Failure) -> R,
    ) -> R {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(failure) => on_failure(failure),
        }
    }

    /// Discard the success payload, keeping any failure intact.
    pub fn status(self) -> Status {
        match self {
            Self::Success(_) => Status::Success,
            Self::Failure(failure) => Status::Failure(failure),
        }
    }
}

impl<T> From<Error> for Outcome<T> {
    fn from(error: Error) -> Self {
        Self::failure(error)
    }
}

impl<T> From<Vec<ValidationError>> for Outcome<T> {
    fn from(validation_errors: Vec<ValidationError>) -> Self {
        Self::validation_failure(validation_errors)
    }
}

impl<T> FromIterator<ValidationError> for Outcome<T> {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(validation_errors: I) -> Self {
        Self::validation_failure(validation_errors)
    }
}
