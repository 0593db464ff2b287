//! Builder for assembling state machines.

use crate::builder::error::BuildError;
use crate::core::{State, StateDefinition};
use crate::machine::{Fsm, FsmConfig};
use std::collections::BTreeSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for constructing a [`Fsm`] with a fluent API.
///
/// Unlike chaining [`Fsm::add_state`], the builder defers every check to
/// [`validate`](Self::validate)/[`build`](Self::build) and reports all
/// problems at once.
///
/// # Example
///
/// ```rust
/// use waystate::{goto, FsmBuilder, StateBuilder};
///
/// let machine = FsmBuilder::new()
///     .initial(0u8)
///     .state(StateBuilder::new(0u8).add_event("next", goto(1)))
///     .state(StateBuilder::new(1u8).add_event("next", goto(0)))
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.current_state(), 0);
/// ```
pub struct FsmBuilder<S: State> {
    initial: Option<S>,
    states: Vec<StateDefinition<S>>,
    config: FsmConfig,
}

impl<S: State> FsmBuilder<S> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            states: Vec::new(),
            config: FsmConfig::default(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Add a state definition or a finished [`StateBuilder`](crate::StateBuilder).
    pub fn state(mut self, definition: impl Into<StateDefinition<S>>) -> Self {
        self.states.push(definition.into());
        self
    }

    /// Add multiple state definitions at once.
    pub fn states<I>(mut self, definitions: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<StateDefinition<S>>,
    {
        self.states.extend(definitions.into_iter().map(Into::into));
        self
    }

    /// Replace the machine configuration.
    pub fn config(mut self, config: FsmConfig) -> Self {
        self.config = config;
        self
    }

    /// Check the assembly, accumulating every problem found.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<BuildError>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<BuildError>>> = Vec::new();

        checks.push(match self.initial {
            Some(_) => Validation::success(()),
            None => Validation::fail(BuildError::MissingInitialState),
        });

        let mut seen = BTreeSet::new();
        for definition in &self.states {
            let check = if seen.insert(definition.id()) {
                Validation::success(())
            } else {
                Validation::fail(BuildError::DuplicateState {
                    state: definition.id().name().into_owned(),
                })
            };
            checks.push(check);
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Build the state machine.
    ///
    /// A single problem is returned as is; several are wrapped in
    /// [`BuildError::Invalid`].
    pub fn build(self) -> Result<Fsm<S>, BuildError> {
        if let Validation::Failure(errors) = self.validate() {
            let mut errors: Vec<BuildError> = errors.iter().cloned().collect();
            return Err(if errors.len() == 1 {
                errors.remove(0)
            } else {
                BuildError::Invalid(errors)
            });
        }

        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        let mut machine = Fsm::new(initial).with_config(self.config);
        for definition in self.states {
            machine.insert_state(definition)?;
        }

        Ok(machine)
    }
}

impl<S: State> Default for FsmBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{goto, StateBuilder};

    #[test]
    fn builder_validates_required_fields() {
        let result = FsmBuilder::<u8>::new().build();

        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }

    #[test]
    fn machine_without_states_is_allowed() {
        let machine = FsmBuilder::new().initial(4u8).build().unwrap();

        assert_eq!(machine.current_state(), 4);
        assert!(!machine.contains_state(4));
    }

    #[test]
    fn duplicate_states_are_rejected() {
        let result = FsmBuilder::new()
            .initial(0u8)
            .state(StateBuilder::new(0u8))
            .state(StateBuilder::new(0u8))
            .build();

        assert_eq!(
            result.unwrap_err(),
            BuildError::DuplicateState {
                state: "0".to_string()
            }
        );
    }

    #[test]
    fn validation_accumulates_all_problems() {
        let builder = FsmBuilder::<u8>::new().states(vec![
            StateBuilder::new(1u8),
            StateBuilder::new(1u8),
            StateBuilder::new(2u8),
            StateBuilder::new(2u8),
        ]);

        match builder.validate() {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 3);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, BuildError::MissingInitialState)));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }

        match builder.build() {
            Err(BuildError::Invalid(errors)) => assert_eq!(errors.len(), 3),
            other => panic!("Expected Invalid, got {:?}", other.map(|m| m.current_state())),
        }
    }

    #[test]
    fn fluent_api_builds_machine() {
        let mut machine = FsmBuilder::new()
            .initial(0u8)
            .state(StateBuilder::new(0u8).add_event("next", goto(1)))
            .state(StateBuilder::new(1u8).build())
            .config(FsmConfig {
                history_limit: Some(1),
                ..FsmConfig::default()
            })
            .build()
            .unwrap();

        assert!(machine.contains_state(0));
        assert!(machine.contains_state(1));
        assert_eq!(machine.config().history_limit, Some(1));

        machine.event("next");
        assert_eq!(machine.current_state(), 1);
    }
}
