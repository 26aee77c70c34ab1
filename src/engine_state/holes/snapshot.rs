//! # Hole Snapshot
//!
//! The complete result of one scan: every hole volume with its color tag.

use std::collections::BTreeMap;

use serde::{Serialize, Serializer};

use super::geometry::{BlockBox, ClassifiedHole, ColorTag};
use crate::error::HoleResult;

/// Every hole found in one pass, keyed by volume.
///
/// Built once and never modified. Iteration follows `BlockBox` ordering, so two
/// snapshots of the same world compare and serialize identically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HoleSnapshot {
    holes: BTreeMap<BlockBox, ColorTag>,
}

impl HoleSnapshot {
    /// A snapshot with no holes.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Collects holes into a snapshot.
    ///
    /// When several holes share a volume the highest-priority tag wins, whatever
    /// order they arrive in.
    pub fn from_holes(holes: impl IntoIterator<Item = ClassifiedHole>) -> Self {
        let mut map = BTreeMap::new();
        for hole in holes {
            map.entry(hole.bounds)
                .and_modify(|color: &mut ColorTag| *color = color.upgrade(hole.color))
                .or_insert(hole.color);
        }
        HoleSnapshot { holes: map }
    }

    /// The tag of the hole occupying exactly `bounds`.
    pub fn get(&self, bounds: &BlockBox) -> Option<ColorTag> {
        self.holes.get(bounds).copied()
    }

    /// Number of holes.
    pub fn len(&self) -> usize {
        self.holes.len()
    }

    /// Whether no hole was found.
    pub fn is_empty(&self) -> bool {
        self.holes.is_empty()
    }

    /// Holes in volume order.
    pub fn iter(&self) -> impl Iterator<Item = ClassifiedHole> + '_ {
        self.holes
            .iter()
            .map(|(bounds, color)| ClassifiedHole::new(*bounds, *color))
    }

    /// Serializes the snapshot as a JSON array of holes.
    pub fn to_json(&self) -> HoleResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Serialize for HoleSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use cgmath::Point3;

    use super::*;

    #[test]
    fn duplicate_volumes_keep_the_highest_tag() {
        let bounds = BlockBox::spanning(Point3::new(0, 64, 0), Point3::new(1, 64, 0));
        let forwards = HoleSnapshot::from_holes([
            ClassifiedHole::new(bounds, ColorTag::Weak),
            ClassifiedHole::new(bounds, ColorTag::Resistant),
        ]);
        let backwards = HoleSnapshot::from_holes([
            ClassifiedHole::new(bounds, ColorTag::Resistant),
            ClassifiedHole::new(bounds, ColorTag::Weak),
        ]);

        assert_eq!(forwards.len(), 1);
        assert_eq!(forwards.get(&bounds), Some(ColorTag::Weak));
        assert_eq!(forwards, backwards);
    }

    #[test]
    fn serializes_in_volume_order() {
        let snapshot = HoleSnapshot::from_holes([
            ClassifiedHole::full(Point3::new(5, 64, 0), ColorTag::Resistant),
            ClassifiedHole::full(Point3::new(-5, 64, 0), ColorTag::Weak),
        ]);
        let json = snapshot.to_json().unwrap();

        let first = json.find("\"min_x\":-5").unwrap();
        let second = json.find("\"min_x\":5").unwrap();
        assert!(first < second);
        assert!(json.contains("\"color\":\"Weak\""));
    }

    #[test]
    fn empty_snapshot() {
        let snapshot = HoleSnapshot::empty();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.to_json().unwrap(), "[]");
    }
}
