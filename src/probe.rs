//! Validity probe
//!
//! A probe wraps an attempt that the host type system may reject. Nothing runs
//! until the probe is consumed; a rejected attempt disqualifies itself and the
//! designated fallback is used instead. Failures never reach the caller.

use crate::types::{IllFormed, Type};

/// Lazily evaluated, fallible attempt
#[must_use = "a probe does nothing until it is resolved"]
pub struct Probe<F> {
    attempt: F,
}

/// Wrap `attempt` in a probe
pub fn probe<T, F>(attempt: F) -> Probe<F>
where
    F: FnOnce() -> Result<T, IllFormed>,
{
    Probe { attempt }
}

impl<T, F> Probe<F>
where
    F: FnOnce() -> Result<T, IllFormed>,
{
    /// Run the attempt, `None` if it was disqualified
    pub fn resolve(self) -> Option<T> {
        match (self.attempt)() {
            Ok(value) => Some(value),
            Err(reason) => {
                tracing::trace!(%reason, "probe disqualified attempt");
                None
            }
        }
    }

    /// Whether the attempt is well-formed
    pub fn is_viable(self) -> bool {
        self.resolve().is_some()
    }

    pub fn or(self, fallback: T) -> T {
        self.resolve().unwrap_or(fallback)
    }

    pub fn or_else(self, fallback: impl FnOnce() -> T) -> T {
        self.resolve().unwrap_or_else(fallback)
    }
}

impl<F> Probe<F>
where
    F: FnOnce() -> Result<Type, IllFormed>,
{
    /// Fall back to the unchanged input descriptor
    pub fn or_identity(self, input: &Type) -> Type {
        self.or_else(|| input.clone())
    }
}

/// Boolean probe: an ill-formed question answers `false`
pub fn holds(attempt: impl FnOnce() -> Result<bool, IllFormed>) -> bool {
    probe(attempt).or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_identity_fallback() {
        let void = Type::void();
        assert_eq!(probe(|| void.lvalue_ref_to()).or_identity(&void), void);

        let int = Type::int();
        let lref = probe(|| int.lvalue_ref_to()).or_identity(&int);
        assert_ne!(lref, int);
    }

    #[test]
    fn test_probe_is_lazy() {
        let runs = Cell::new(0);
        let pending = probe(|| {
            runs.set(runs.get() + 1);
            Ok::<_, IllFormed>(1)
        });
        assert_eq!(runs.get(), 0);
        assert_eq!(pending.or(0), 1);
        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn test_boolean_fallback() {
        assert!(!holds(|| Err(IllFormed::Disabled)));
        assert!(holds(|| Ok(true)));
    }

    #[test]
    fn test_viability() {
        let int = Type::int();
        let lref = int.lvalue_ref_to().unwrap();
        assert!(probe(|| int.pointer_to()).is_viable());
        assert!(!probe(|| lref.pointer_to()).is_viable());
    }
}
