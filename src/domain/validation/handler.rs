use serde::Serialize;

use super::{DomainError, ValidationError};

/// Collection point for the problems an aggregate raises while checking its
/// invariants.
///
/// Two policies implement this contract: [`Notification`] accumulates every
/// error so one pass reports them all, [`FailFast`] returns on the first one.
/// Whatever the policy, the error sequence only grows, in insertion order.
pub trait ValidationHandler {
    /// Record one error. The fail-fast policy returns it immediately as a
    /// [`DomainError`].
    fn append(&mut self, error: ValidationError) -> Result<(), DomainError>;

    /// Merge another handler's errors after the ones already recorded.
    /// Merging a handler with no errors changes nothing.
    fn merge(&mut self, other: &dyn ValidationHandler) -> Result<(), DomainError>;

    /// Run a validation step, recording its failure under this handler's
    /// policy instead of letting it escape unseen.
    fn validate(
        &mut self,
        step: &mut dyn FnMut() -> Result<(), DomainError>,
    ) -> Result<(), DomainError>;

    /// Errors recorded so far, in the order they were appended.
    fn errors(&self) -> &[ValidationError];

    fn has_errors(&self) -> bool {
        !self.errors().is_empty()
    }
}

/// Accumulating handler: never interrupts, so chained validations keep
/// running after errors. This is the policy of the command path, where
/// reporting every problem at once matters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Notification {
    errors: Vec<ValidationError>,
}

impl Notification {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_error(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}

impl From<DomainError> for Notification {
    fn from(error: DomainError) -> Self {
        Self {
            errors: error.into_errors(),
        }
    }
}

impl ValidationHandler for Notification {
    fn append(&mut self, error: ValidationError) -> Result<(), DomainError> {
        self.errors.push(error);
        Ok(())
    }

    fn merge(&mut self, other: &dyn ValidationHandler) -> Result<(), DomainError> {
        self.errors.extend_from_slice(other.errors());
        Ok(())
    }

    fn validate(
        &mut self,
        step: &mut dyn FnMut() -> Result<(), DomainError>,
    ) -> Result<(), DomainError> {
        if let Err(raised) = step() {
            self.errors.extend(raised.into_errors());
        }
        Ok(())
    }

    fn errors(&self) -> &[ValidationError] {
        &self.errors
    }
}

/// Fail-fast handler: the first error, whether appended directly or raised by
/// a step, terminates validation for this handler. Reserved for internal
/// invariant checks; the command path accumulates instead.
#[derive(Debug, Default)]
pub struct FailFast {
    errors: Vec<ValidationError>,
}

impl FailFast {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ValidationHandler for FailFast {
    fn append(&mut self, error: ValidationError) -> Result<(), DomainError> {
        self.errors.push(error.clone());
        Err(DomainError::from_error(error))
    }

    fn merge(&mut self, other: &dyn ValidationHandler) -> Result<(), DomainError> {
        if other.errors().is_empty() {
            return Ok(());
        }
        self.errors.extend_from_slice(other.errors());
        Err(DomainError::with(other.errors().to_vec()))
    }

    fn validate(
        &mut self,
        step: &mut dyn FnMut() -> Result<(), DomainError>,
    ) -> Result<(), DomainError> {
        match step() {
            Ok(()) => Ok(()),
            Err(raised) => {
                self.errors.extend_from_slice(raised.errors());
                Err(raised)
            }
        }
    }

    fn errors(&self) -> &[ValidationError] {
        &self.errors
    }
}
