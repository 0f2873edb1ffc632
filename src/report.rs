//! Classification reports
//!
//! A report holds rendered strings only, never descriptors, so it can be
//! printed or serialized as JSON without exposing the type model.

use crate::traits::{Catalog, Category};
use crate::transform::{self, TRANSFORMS};
use crate::types::Type;
use serde::Serialize;
use std::fmt::Write as _;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredicateEntry {
    pub name: &'static str,
    pub category: Category,
    pub layer: usize,
    pub value: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransformEntry {
    pub name: &'static str,
    pub result: String,
}

/// Every catalog predicate and transformation applied to one type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    #[serde(rename = "type")]
    pub ty: String,
    pub predicates: Vec<PredicateEntry>,
    pub rank: usize,
    pub extents: Vec<usize>,
    pub transforms: Vec<TransformEntry>,
}

impl Classification {
    pub fn of(ty: &Type, catalog: &Catalog) -> Self {
        let predicates = catalog
            .classify(ty)
            .map(|(predicate, value)| PredicateEntry {
                name: predicate.name,
                category: predicate.category,
                layer: predicate.layer,
                value,
            })
            .collect();
        let rank = transform::rank(ty);
        let transforms = TRANSFORMS
            .iter()
            .map(|&(name, rewrite)| TransformEntry {
                name,
                result: rewrite(ty).to_string(),
            })
            .collect();

        Self {
            ty: ty.to_string(),
            predicates,
            rank,
            extents: (0..rank).map(|dim| transform::extent(ty, dim)).collect(),
            transforms,
        }
    }

    /// Names of the predicates that hold
    pub fn holding(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.predicates.iter().filter(|p| p.value).map(|p| p.name)
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "type: {}", self.ty);
        let _ = writeln!(out, "holds: {}", self.holding().collect::<Vec<_>>().join(", "));
        if self.rank > 0 {
            let extents: Vec<String> = self.extents.iter().map(ToString::to_string).collect();
            let _ = writeln!(out, "rank: {} [{}]", self.rank, extents.join(", "));
        }
        for entry in &self.transforms {
            if entry.result != self.ty {
                let _ = writeln!(out, "{:>22}: {}", entry.name, entry.result);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Qualifiers;

    #[test]
    fn test_classification_of_const_array() {
        let catalog = Catalog::standard().unwrap();
        let ty = Type::int()
            .qualified(Qualifiers::CONST)
            .array_of(Some(4))
            .unwrap()
            .array_of(Some(2))
            .unwrap();
        let report = Classification::of(&ty, &catalog);

        assert_eq!(report.ty, "const int[2][4]");
        assert_eq!(report.rank, 2);
        assert_eq!(report.extents, vec![2, 4]);
        let holding: Vec<&str> = report.holding().collect();
        assert!(holding.contains(&"is_array"));
        assert!(holding.contains(&"is_object"));
        assert!(holding.contains(&"is_const"));
        assert!(!holding.contains(&"is_scalar"));

        let decay = report.transforms.iter().find(|t| t.name == "decay").unwrap();
        assert_eq!(decay.result, "const int(*)[4]");
    }

    #[test]
    fn test_json_shape() {
        let catalog = Catalog::standard().unwrap();
        let report = Classification::of(&Type::void(), &catalog);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["type"], "void");
        assert_eq!(json["predicates"][0]["name"], "is_void");
        assert_eq!(json["predicates"][0]["category"], "primary");
        assert_eq!(json["predicates"][0]["value"], true);
    }
}
