//! Anatomy normalization.
//!
//! Turns any accepted anatomy shape into one canonical, ordered list of
//! [`ElementRecord`]s in which every ancestor precedes its descendants.
//!
//! - Flat mappings carry no order of their own, so records are sorted by
//!   path segments (a parent's segments are a prefix of its children's, and
//!   shorter prefixes sort first).
//! - Explicit sequences already encode document order and are kept verbatim.

use crate::anatomy::{Anatomy, ElementRecord, FlatElement};
use crate::path::{join_segments, split_path, Segments};
use indexmap::IndexMap;
use serde_json::Value;
use smallvec::smallvec;
use std::collections::HashSet;

/// Canonical element sequence for a single-shape anatomy.
///
/// Returns an empty sequence for absent, rendered or multi-variant anatomy;
/// use [`normalize_variants`] for the latter.
pub fn normalize(anatomy: &Anatomy) -> Vec<ElementRecord> {
    match anatomy {
        Anatomy::Flat(entries) => normalize_flat(entries),
        Anatomy::Sequence(records) => records.clone(),
        Anatomy::Empty | Anatomy::Variants(_) | Anatomy::Rendered(_) => Vec::new(),
    }
}

/// Canonical element sequence straight from raw JSON.
///
/// Absent or non-object-like input yields an empty sequence.
pub fn normalize_value(value: &Value) -> Vec<ElementRecord> {
    normalize(&Anatomy::from_value(value))
}

/// Canonical element sequence per variant, in variant order.
///
/// A single-shape anatomy is returned as one unnamed variant so callers can
/// treat both cases alike; absent anatomy yields an empty map.
pub fn normalize_variants(anatomy: &Anatomy) -> IndexMap<String, Vec<ElementRecord>> {
    match anatomy {
        Anatomy::Variants(variants) => variants
            .iter()
            .map(|(name, shape)| (name.clone(), normalize(shape)))
            .collect(),
        Anatomy::Flat(_) | Anatomy::Sequence(_) => {
            let mut single = IndexMap::new();
            single.insert(String::new(), normalize(anatomy));
            single
        }
        Anatomy::Empty | Anatomy::Rendered(_) => IndexMap::new(),
    }
}

/// Every distinct element across all variants, first occurrence of each path
/// kept, in variant order then canonical order.
pub fn merged_elements(anatomy: &Anatomy) -> Vec<ElementRecord> {
    let mut seen = HashSet::new();
    normalize_variants(anatomy)
        .into_values()
        .flatten()
        .filter(|record| seen.insert(record.path.clone()))
        .collect()
}

fn normalize_flat(entries: &IndexMap<String, FlatElement>) -> Vec<ElementRecord> {
    let mut keyed: Vec<(Segments, ElementRecord)> = entries
        .iter()
        .map(|(name, entry)| {
            let mut segments = split_path(&entry.path);
            if segments.is_empty() {
                segments = smallvec![name.clone()];
            }
            let parent = &segments[..segments.len() - 1];
            let record = ElementRecord {
                name: name.clone(),
                element_type: entry.element_type.clone(),
                path: join_segments(segments.as_slice()),
                parent_path: join_segments(parent),
                extra: entry.extra.clone(),
            };
            (segments, record)
        })
        .collect();

    // Stable: identical paths keep their mapping order.
    keyed.sort_by(|(a, _), (b, _)| a.cmp(b));
    keyed.into_iter().map(|(_, record)| record).collect()
}
