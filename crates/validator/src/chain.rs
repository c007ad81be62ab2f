//! Deferred validation chains
//!
//! A [`Chain`] captures a value (possibly absent) and accumulates
//! assertion and transform steps. Methods consume and return the chain,
//! so a finished chain can only be finalized once, by [`Chain::get`],
//! which executes the steps strictly in order.
//!
//! Configuration methods (`named`, `or_error`, `set_fallback`, the
//! null-allowance part of the required checks) apply immediately;
//! everything else is deferred.

use tracing::{debug, trace};
use verity_value::diff::diff;
use verity_value::{EqualityOptions, Value, equal};

use crate::error::{ChainError, ErrorOverride, ValidationError};
use crate::options::NullableOptions;
use crate::step::{Action, Step};

/// Start a chain over a present value.
pub fn validate(value: impl Into<Value>) -> Chain {
    Chain::new(Some(value.into()))
}

/// Start a chain over a possibly-absent value.
pub fn validate_optional(value: Option<Value>) -> Chain {
    Chain::new(value)
}

/// A deferred validation chain.
///
/// Built by [`validate`] or [`validate_optional`]; finalized by
/// [`Chain::get`].
#[derive(Debug)]
pub struct Chain {
    value: Option<Value>,
    name: Option<String>,
    allow_null: bool,
    steps: Vec<Step>,
    error: Option<ErrorOverride>,
    misused: bool,
}

impl Chain {
    fn new(value: Option<Value>) -> Self {
        Self {
            value,
            name: None,
            allow_null: false,
            steps: Vec::new(),
            error: None,
            misused: false,
        }
    }

    // ==================== Configuration ====================

    /// Name the subject; failure messages use it as their prefix.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set a pipeline-wide error override, used when a failing step has
    /// no override of its own.
    #[must_use]
    pub fn or_error(mut self, error: impl Into<ErrorOverride>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Replace the value with `fallback` if it is currently missing.
    /// Applies immediately; appends no step.
    #[must_use]
    pub fn set_fallback(mut self, fallback: impl Into<Value>, options: NullableOptions) -> Self {
        self.allow_null = options.allow_null;
        if self.is_value_missing() {
            self.value = Some(fallback.into());
        }
        self
    }

    // ==================== Deferred steps ====================

    /// Assert the value is present (`null` counts as absent unless
    /// `allow_null` is set).
    #[must_use]
    pub fn is_required(mut self, options: NullableOptions) -> Self {
        self.allow_null = options.allow_null;
        self.push(Action::NotMissing)
    }

    /// Mark the value as explicitly optional. Always succeeds.
    #[must_use]
    pub fn not_required(self) -> Self {
        self.push(Action::NotRequired)
    }

    /// Assert the value is missing.
    #[must_use]
    pub fn is_missing(mut self, options: NullableOptions) -> Self {
        self.allow_null = options.allow_null;
        self.push(Action::Missing)
    }

    /// Assert the value is present. Identical to [`Chain::is_required`].
    #[must_use]
    pub fn not_missing(mut self, options: NullableOptions) -> Self {
        self.allow_null = options.allow_null;
        self.push(Action::NotMissing)
    }

    /// Assert the value equals `expected`.
    #[must_use]
    pub fn is_equal(self, expected: impl Into<Value>, options: EqualityOptions) -> Self {
        self.push(Action::Equal {
            expected: expected.into(),
            options,
        })
    }

    /// Assert the value does not equal `expected`.
    #[must_use]
    pub fn not_equal(self, expected: impl Into<Value>, options: EqualityOptions) -> Self {
        self.push(Action::NotEqual {
            expected: expected.into(),
            options,
        })
    }

    /// Assert the value equals one of `allowed`.
    #[must_use]
    pub fn is_in(
        self,
        allowed: impl IntoIterator<Item = impl Into<Value>>,
        options: EqualityOptions,
    ) -> Self {
        self.push(Action::In {
            allowed: allowed.into_iter().map(Into::into).collect(),
            options,
        })
    }

    /// Assert the value equals none of `forbidden`.
    #[must_use]
    pub fn not_in(
        self,
        forbidden: impl IntoIterator<Item = impl Into<Value>>,
        options: EqualityOptions,
    ) -> Self {
        self.push(Action::NotIn {
            forbidden: forbidden.into_iter().map(Into::into).collect(),
            options,
        })
    }

    /// Apply a custom transform or assertion. The callback receives the
    /// current value (`None` when absent) and yields the replacement
    /// value; rejecting fails the chain at this step.
    #[must_use]
    pub fn custom<F, Fut>(self, callback: F) -> Self
    where
        F: FnOnce(Option<Value>) -> Fut + Send + 'static,
        Fut: Future<Output = Result<Value, crate::error::BoxError>> + Send + 'static,
    {
        self.push(Action::Custom(Box::new(move |value| {
            Box::pin(callback(value))
        })))
    }

    /// Attach an error override to the most recent step, replacing any
    /// prior attachment. With no prior step the chain is poisoned and
    /// finalization reports the misuse.
    #[must_use]
    pub fn with_error(mut self, error: impl Into<ErrorOverride>) -> Self {
        match self.steps.last_mut() {
            Some(step) => step.error = Some(error.into()),
            None => self.misused = true,
        }
        self
    }

    // ==================== Finalization ====================

    /// Execute all steps in order and return the final value.
    ///
    /// Each step settles before the next one starts. On a step failure
    /// the override resolution order is: step override, pipeline
    /// override, the step's own failure; later steps do not run.
    pub async fn get(mut self) -> Result<Option<Value>, ChainError> {
        if self.misused {
            return Err(ChainError::Misuse);
        }
        let steps = std::mem::take(&mut self.steps);
        for (index, step) in steps.into_iter().enumerate() {
            trace!(step = index, "executing validation step");
            if let Err(failure) = self.run(step.action).await {
                let resolved = match step.error {
                    Some(override_) => override_.resolve(self.value.as_ref()),
                    None => match self.error.take() {
                        Some(override_) => override_.resolve(self.value.as_ref()),
                        None => failure,
                    },
                };
                debug!(step = index, error = %resolved, "validation chain failed");
                return Err(resolved);
            }
        }
        Ok(self.value)
    }

    async fn run(&mut self, action: Action) -> Result<(), ChainError> {
        match action {
            Action::NotRequired => Ok(()),
            Action::NotMissing => {
                if self.is_value_missing() {
                    Err(self.fail(format!("value is required but was {}", self.rendering())))
                } else {
                    Ok(())
                }
            }
            Action::Missing => {
                if self.is_value_missing() {
                    Ok(())
                } else {
                    Err(self.fail(format!("value must be missing but was {}", self.rendering())))
                }
            }
            Action::Equal { expected, options } => {
                if self.value_equals(&expected, options) {
                    Ok(())
                } else {
                    Err(self.fail(format!(
                        "values are not equal:\n{}",
                        diff(&expected.inspect(), &self.rendering())
                    )))
                }
            }
            Action::NotEqual { expected, options } => {
                if self.value_equals(&expected, options) {
                    Err(self.fail(format!("value must not equal {}", expected.inspect())))
                } else {
                    Ok(())
                }
            }
            Action::In { allowed, options } => {
                if allowed.iter().any(|candidate| self.value_equals(candidate, options)) {
                    Ok(())
                } else {
                    let mut message =
                        String::from("value does not match any of the allowed values:");
                    for (index, candidate) in allowed.iter().enumerate() {
                        message.push_str(&format!(
                            "\n[{index}]\n{}",
                            diff(&candidate.inspect(), &self.rendering())
                        ));
                    }
                    Err(self.fail(message))
                }
            }
            Action::NotIn { forbidden, options } => {
                if forbidden.iter().any(|candidate| self.value_equals(candidate, options)) {
                    let mut message = String::from("value matches a forbidden value:");
                    for candidate in &forbidden {
                        if self.value_equals(candidate, options) {
                            message.push_str(&format!("\n-> {}", candidate.inspect()));
                        } else {
                            message.push_str(&format!("\n   {}", candidate.inspect()));
                        }
                    }
                    Err(self.fail(message))
                } else {
                    Ok(())
                }
            }
            Action::Custom(callback) => match callback(self.value.clone()).await {
                Ok(next) => {
                    self.value = Some(next);
                    Ok(())
                }
                Err(error) => Err(ChainError::Custom(error)),
            },
        }
    }

    // ==================== Helpers ====================

    fn push(mut self, action: Action) -> Self {
        self.steps.push(Step::new(action));
        self
    }

    /// Missing means absent, or `null` while nulls are not allowed.
    fn is_value_missing(&self) -> bool {
        match &self.value {
            None => true,
            Some(Value::Null) => !self.allow_null,
            Some(_) => false,
        }
    }

    fn value_equals(&self, expected: &Value, options: EqualityOptions) -> bool {
        match &self.value {
            Some(actual) => equal(actual, expected, options),
            None => false,
        }
    }

    /// Render the current value for messages; absent values read as
    /// `absent`.
    fn rendering(&self) -> String {
        self.value.as_ref().map_or_else(|| "absent".to_string(), Value::inspect)
    }

    fn fail(&self, message: String) -> ChainError {
        let full = match &self.name {
            Some(name) => format!("Validation failed for '{name}': {message}"),
            None => format!("Validation failed: {message}"),
        };
        ChainError::Validation(ValidationError::new(full))
    }
}
