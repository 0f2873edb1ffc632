//! Logical operator combinators
//!
//! `conjunction` and `disjunction` run their operands left to right and stop at
//! the first decisive one. The result is that operand itself (its position and
//! full value), not just a boolean, so payload-carrying results survive being
//! combined. Operands after the deciding one are never run.

/// Anything that can decide a logical combinator
pub trait Truth {
    fn truth(&self) -> bool;
}

impl Truth for bool {
    fn truth(&self) -> bool {
        *self
    }
}

impl<T: Truth + ?Sized> Truth for &T {
    fn truth(&self) -> bool {
        (**self).truth()
    }
}

/// Outcome of a combinator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision<V> {
    /// The operand at `index` decided the result (or was the last one)
    Operand { index: usize, value: V },
    /// There were no operands: `true` for conjunction, `false` for disjunction
    Vacuous(bool),
}

impl<V: Truth> Decision<V> {
    pub fn value(&self) -> bool {
        self.truth()
    }
}

impl<V> Decision<V> {
    /// Position of the deciding operand
    pub fn index(&self) -> Option<usize> {
        match self {
            Decision::Operand { index, .. } => Some(*index),
            Decision::Vacuous(_) => None,
        }
    }

    pub fn operand(&self) -> Option<&V> {
        match self {
            Decision::Operand { value, .. } => Some(value),
            Decision::Vacuous(_) => None,
        }
    }

    pub fn into_operand(self) -> Option<V> {
        match self {
            Decision::Operand { value, .. } => Some(value),
            Decision::Vacuous(_) => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(V) -> U) -> Decision<U> {
        match self {
            Decision::Operand { index, value } => Decision::Operand {
                index,
                value: f(value),
            },
            Decision::Vacuous(b) => Decision::Vacuous(b),
        }
    }
}

impl<V: Truth> Truth for Decision<V> {
    fn truth(&self) -> bool {
        match self {
            Decision::Operand { value, .. } => value.truth(),
            Decision::Vacuous(b) => *b,
        }
    }
}

/// variadic logical AND: the first false operand, else the last operand
pub fn conjunction<V, F, I>(operands: I) -> Decision<V>
where
    V: Truth,
    F: FnOnce() -> V,
    I: IntoIterator<Item = F>,
{
    let infallible = operands
        .into_iter()
        .map(|op| move || Ok::<V, std::convert::Infallible>(op()));
    match decide(infallible, false, true) {
        Ok(decision) => decision,
        Err(never) => match never {},
    }
}

/// variadic logical OR: the first true operand, else the last operand
pub fn disjunction<V, F, I>(operands: I) -> Decision<V>
where
    V: Truth,
    F: FnOnce() -> V,
    I: IntoIterator<Item = F>,
{
    let infallible = operands
        .into_iter()
        .map(|op| move || Ok::<V, std::convert::Infallible>(op()));
    match decide(infallible, true, false) {
        Ok(decision) => decision,
        Err(never) => match never {},
    }
}

/// [`conjunction`] over operands that may fail; only operands that run can fail
pub fn try_conjunction<V, E, F, I>(operands: I) -> Result<Decision<V>, E>
where
    V: Truth,
    F: FnOnce() -> Result<V, E>,
    I: IntoIterator<Item = F>,
{
    decide(operands, false, true)
}

/// [`disjunction`] over operands that may fail; only operands that run can fail
pub fn try_disjunction<V, E, F, I>(operands: I) -> Result<Decision<V>, E>
where
    V: Truth,
    F: FnOnce() -> Result<V, E>,
    I: IntoIterator<Item = F>,
{
    decide(operands, true, false)
}

/// logical NOT
pub fn negation<V: Truth + ?Sized>(operand: &V) -> bool {
    !operand.truth()
}

fn decide<V, E, F, I>(operands: I, decisive: bool, vacuous: bool) -> Result<Decision<V>, E>
where
    V: Truth,
    F: FnOnce() -> Result<V, E>,
    I: IntoIterator<Item = F>,
{
    let mut last = None;
    for (index, operand) in operands.into_iter().enumerate() {
        let value = operand()?;
        if value.truth() == decisive {
            return Ok(Decision::Operand { index, value });
        }
        last = Some((index, value));
    }
    Ok(match last {
        Some((index, value)) => Decision::Operand { index, value },
        None => Decision::Vacuous(vacuous),
    })
}
