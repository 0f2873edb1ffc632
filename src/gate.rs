//! Constraint gate and predicate-driven selection
//!
//! [`enable_if`] exposes a payload only when its condition holds; otherwise the
//! gate itself is ill-formed, which disqualifies whatever candidate used it.
//! [`Selector`] evaluates a set of candidates eagerly and picks the single
//! viable one, the way overload resolution discards candidates whose
//! constraints fail.

use crate::probe::probe;
use crate::types::{IllFormed, Type};
use thiserror::Error;

/// conditionally exposes `payload`
pub fn enable_if<T>(condition: bool, payload: T) -> Result<T, IllFormed> {
    if condition {
        Ok(payload)
    } else {
        Err(IllFormed::Disabled)
    }
}

/// [`enable_if`] with the default `void` payload
pub fn enable_if_void(condition: bool) -> Result<Type, IllFormed> {
    enable_if(condition, Type::void())
}

/// Selection failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("no viable candidate among {}", .0.join(", "))]
    NoViableCandidate(Vec<String>),

    #[error("ambiguous selection between {}", .0.join(", "))]
    Ambiguous(Vec<String>),
}

/// Candidate picked by a [`Selector`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selected<'s, T> {
    pub name: &'s str,
    pub value: T,
}

type CandidateFn<'f, C, T> = Box<dyn Fn(&C) -> Result<T, IllFormed> + Send + Sync + 'f>;

/// Set of competing implementations guarded by constraints
pub struct Selector<'f, C: ?Sized, T> {
    candidates: Vec<(String, CandidateFn<'f, C, T>)>,
}

impl<'f, C: ?Sized, T> Default for Selector<'f, C, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'f, C: ?Sized, T> Selector<'f, C, T> {
    pub fn new() -> Self {
        Self {
            candidates: Vec::new(),
        }
    }

    /// Add a candidate. It disqualifies itself by failing, typically through
    /// [`enable_if`].
    pub fn candidate(
        mut self,
        name: impl Into<String>,
        implementation: impl Fn(&C) -> Result<T, IllFormed> + Send + Sync + 'f,
    ) -> Self {
        self.candidates.push((name.into(), Box::new(implementation)));
        self
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Run every candidate against `subject` and return the only viable one
    pub fn select(&self, subject: &C) -> Result<Selected<'_, T>, SelectionError> {
        let mut viable: Vec<(&str, T)> = self
            .candidates
            .iter()
            .filter_map(|(name, implementation)| {
                probe(|| implementation(subject))
                    .resolve()
                    .map(|value| (name.as_str(), value))
            })
            .collect();

        match viable.len() {
            0 => Err(SelectionError::NoViableCandidate(
                self.candidates.iter().map(|(name, _)| name.clone()).collect(),
            )),
            1 => {
                let (name, value) = viable.remove(0);
                tracing::debug!(candidate = name, "constraint selection");
                Ok(Selected { name, value })
            }
            _ => Err(SelectionError::Ambiguous(
                viable.into_iter().map(|(name, _)| name.to_string()).collect(),
            )),
        }
    }
}
