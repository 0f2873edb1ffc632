//! Layered predicate catalog
//!
//! Every unary predicate is registered together with the predicates its
//! formula references. Building a [`Catalog`] validates the layering: a
//! predicate may only reference predicates declared before it, so the graph is
//! acyclic by construction. Violations are design errors reported while the
//! catalog is built, never while a predicate is evaluated.

use super::{composite, primary, properties};
use crate::types::Type;
use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use rustc_hash::FxHashMap;
use thiserror::Error;

pub type PredicateFn = fn(&Type) -> bool;

/// Grouping used when listing predicates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Primary,
    Composite,
    Property,
}

/// Static description of a predicate
#[derive(Debug, Clone, Copy)]
pub struct PredicateDef {
    pub name: &'static str,
    pub category: Category,
    /// Predicates referenced by the formula
    pub deps: &'static [&'static str],
    pub eval: PredicateFn,
}

/// Layering violation found while building a catalog
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayeringError {
    #[error("predicate `{0}` is defined more than once")]
    Duplicate(String),

    #[error("predicate `{predicate}` references undefined predicate `{dependency}`")]
    Undefined {
        predicate: String,
        dependency: String,
    },

    #[error("predicate `{predicate}` references `{dependency}`, which is not at a lower layer")]
    NotLower {
        predicate: String,
        dependency: String,
    },

    #[error("predicate `{0}` is part of a dependency cycle")]
    Cycle(String),
}

/// Validated predicate entry
#[derive(Debug, Clone, Copy)]
pub struct Predicate {
    pub name: &'static str,
    pub category: Category,
    pub deps: &'static [&'static str],
    /// 0 for predicates without dependencies, else one above the highest dependency
    pub layer: usize,
    eval: PredicateFn,
}

impl Predicate {
    pub fn evaluate(&self, ty: &Type) -> bool {
        (self.eval)(ty)
    }
}

macro_rules! def {
    ($category:ident, $module:ident :: $name:ident, [$($dep:ident),* $(,)?]) => {
        PredicateDef {
            name: stringify!($name),
            category: Category::$category,
            deps: &[$(stringify!($dep)),*],
            eval: $module::$name,
        }
    };
}

/// The predicates shipped with the crate, in declaration order
pub const STANDARD: &[PredicateDef] = &[
    def!(Primary, primary::is_void, []),
    def!(Primary, primary::is_null_pointer, []),
    def!(Primary, primary::is_integral, []),
    def!(Primary, primary::is_floating_point, []),
    def!(Primary, primary::is_array, []),
    def!(Primary, primary::is_pointer, []),
    def!(Primary, primary::is_lvalue_reference, []),
    def!(Primary, primary::is_rvalue_reference, []),
    def!(Primary, primary::is_enum, []),
    def!(Primary, primary::is_union, []),
    def!(Primary, primary::is_class, []),
    def!(Primary, primary::is_member_pointer, []),
    def!(Property, properties::is_const, []),
    def!(Property, properties::is_volatile, []),
    def!(
        Primary,
        primary::is_function,
        [is_const, is_lvalue_reference, is_rvalue_reference]
    ),
    def!(
        Primary,
        primary::is_member_function_pointer,
        [is_member_pointer, is_function]
    ),
    def!(
        Primary,
        primary::is_member_object_pointer,
        [is_member_pointer, is_member_function_pointer]
    ),
    def!(
        Composite,
        composite::is_reference,
        [is_lvalue_reference, is_rvalue_reference]
    ),
    def!(
        Composite,
        composite::is_arithmetic,
        [is_integral, is_floating_point]
    ),
    def!(
        Composite,
        composite::is_fundamental,
        [is_arithmetic, is_void, is_null_pointer]
    ),
    def!(
        Composite,
        composite::is_scalar,
        [is_arithmetic, is_enum, is_pointer, is_member_pointer, is_null_pointer]
    ),
    def!(
        Composite,
        composite::is_object,
        [is_scalar, is_array, is_union, is_class]
    ),
    def!(Composite, composite::is_compound, [is_fundamental]),
    def!(Property, properties::is_signed, [is_arithmetic]),
    def!(Property, properties::is_unsigned, [is_arithmetic, is_signed]),
    def!(Property, properties::is_bounded_array, [is_array]),
    def!(Property, properties::is_unbounded_array, [is_array]),
    def!(Property, properties::is_scoped_enum, [is_enum]),
    def!(Property, properties::is_referenceable, []),
];

/// Validated, layered set of predicates
#[derive(Debug, Clone)]
pub struct Catalog {
    predicates: Vec<Predicate>,
    index: FxHashMap<&'static str, usize>,
}

impl Catalog {
    /// Validate `defs` and compute their layers
    pub fn new(defs: &[PredicateDef]) -> Result<Self, LayeringError> {
        let mut positions: FxHashMap<&'static str, usize> = FxHashMap::default();
        for (pos, def) in defs.iter().enumerate() {
            if positions.insert(def.name, pos).is_some() {
                return Err(LayeringError::Duplicate(def.name.to_string()));
            }
        }

        let mut graph: DiGraph<usize, ()> = DiGraph::new();
        let nodes: Vec<NodeIndex> = (0..defs.len()).map(|pos| graph.add_node(pos)).collect();
        for (pos, def) in defs.iter().enumerate() {
            for dep in def.deps {
                let Some(&dep_pos) = positions.get(dep) else {
                    return Err(LayeringError::Undefined {
                        predicate: def.name.to_string(),
                        dependency: dep.to_string(),
                    });
                };
                if dep_pos >= pos {
                    return Err(LayeringError::NotLower {
                        predicate: def.name.to_string(),
                        dependency: dep.to_string(),
                    });
                }
                graph.add_edge(nodes[dep_pos], nodes[pos], ());
            }
        }

        let order = toposort(&graph, None)
            .map_err(|cycle| LayeringError::Cycle(defs[graph[cycle.node_id()]].name.to_string()))?;

        let mut layers = vec![0usize; defs.len()];
        for node in order {
            let pos = graph[node];
            layers[pos] = defs[pos]
                .deps
                .iter()
                .map(|dep| layers[positions[dep]] + 1)
                .max()
                .unwrap_or(0);
        }

        let predicates: Vec<Predicate> = defs
            .iter()
            .zip(layers)
            .map(|(def, layer)| Predicate {
                name: def.name,
                category: def.category,
                deps: def.deps,
                layer,
                eval: def.eval,
            })
            .collect();
        tracing::debug!(count = predicates.len(), "predicate catalog built");

        Ok(Self {
            predicates,
            index: positions,
        })
    }

    /// Catalog of the predicates shipped with the crate
    pub fn standard() -> Result<Self, LayeringError> {
        Self::new(STANDARD)
    }

    pub fn get(&self, name: &str) -> Option<&Predicate> {
        self.index.get(name).map(|&pos| &self.predicates[pos])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Predicate> {
        self.predicates.iter()
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Predicates grouped by layer, lowest first
    pub fn layers(&self) -> Vec<Vec<&Predicate>> {
        let depth = self.predicates.iter().map(|p| p.layer + 1).max().unwrap_or(0);
        let mut layers = vec![Vec::new(); depth];
        for predicate in &self.predicates {
            layers[predicate.layer].push(predicate);
        }
        layers
    }

    /// Evaluate every predicate against `ty`
    pub fn classify<'a>(&'a self, ty: &'a Type) -> impl Iterator<Item = (&'a Predicate, bool)> + 'a {
        self.predicates.iter().map(move |p| (p, p.evaluate(ty)))
    }
}
