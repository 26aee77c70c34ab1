//! # Hole Classifier
//!
//! Turns sampled floor cells into classified holes.
//!
//! ## Passes
//!
//! 1. Every candidate is judged on its own. A breakable floor disqualifies it.
//!    Breakable walls are discounted but mark the hole weak. No open side left makes
//!    a full hole; exactly one makes a wide candidate; more is dropped.
//! 2. With pairing enabled, each wide candidate is matched with the cell across its
//!    open side. That cell may have at most one open side of its own (the one facing
//!    back). Its floor must be blast-proof, except in custom mode, where a weak or
//!    missing floor is tolerated and the pair gets the custom tag.

use cgmath::Point3;
use log::trace;

use super::{
    geometry::{ClassifiedHole, ColorTag},
    safety::{Safety, SafetyMap},
};
use crate::{
    config::HoleShowMode,
    engine_state::voxels::{block::offset::Offset, world_query::WorldQuery},
};

/// Why a cell or a pairing was left out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The floor below the cell could be blown away, or is missing.
    UnstableFloor,
    /// More open sides than the hole shape allows.
    TooManyOpenSides(usize),
}

/// The verdict for a single floor cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellVerdict {
    /// A one-cell hole.
    Full(ColorTag),
    /// Open on exactly one side; may become half of a two-wide hole.
    WideCandidate {
        /// The open side.
        open_side: Offset,
        /// Tag earned by this cell's own walls.
        color: ColorTag,
    },
    /// Not a hole.
    Rejected(Rejection),
}

/// A cell waiting for its partner to be checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WideCandidate {
    /// The floor cell.
    pub position: Point3<i32>,
    /// The side the partner lies across.
    pub open_side: Offset,
    /// Tag earned by this cell's own walls.
    pub color: ColorTag,
}

/// Judges a floor cell from its unprotected sides.
pub fn classify_floor_cell(sides: &SafetyMap) -> CellVerdict {
    if sides.get(Offset::Down) == Some(Safety::Breakable) {
        return CellVerdict::Rejected(Rejection::UnstableFloor);
    }

    let discount = sides.discount_weak();
    let color = if discount.removed_weak() {
        ColorTag::Weak
    } else {
        ColorTag::Resistant
    };

    let mut open = discount.remaining.iter().map(|(offset, _)| offset);
    match (open.next(), open.next()) {
        (None, _) => CellVerdict::Full(color),
        (Some(open_side), None) => CellVerdict::WideCandidate { open_side, color },
        _ => CellVerdict::Rejected(Rejection::TooManyOpenSides(discount.remaining.len())),
    }
}

/// Judges the partner cell of a wide candidate.
///
/// # Arguments
/// * `color` - Tag already earned by the candidate cell
/// * `sides` - Unprotected sides of the partner cell
/// * `mode` - Which hole shapes are enabled
///
/// # Returns
/// The tag of the merged hole, or why the pairing was refused.
pub fn classify_partner(
    color: ColorTag,
    sides: &SafetyMap,
    mode: HoleShowMode,
) -> Result<ColorTag, Rejection> {
    let mut color = color;
    let mut sides = *sides;

    if sides.contains(Offset::Down) {
        if !mode.allows_floor_gap() {
            return Err(Rejection::UnstableFloor);
        }
        color = color.upgrade(ColorTag::Custom);
        sides = sides.without(Offset::Down);
    }

    let discount = sides.discount_weak();
    if discount.removed_weak() {
        color = color.upgrade(ColorTag::Weak);
    }

    match discount.remaining.len() {
        0 | 1 => Ok(color),
        open => Err(Rejection::TooManyOpenSides(open)),
    }
}

/// Counters for one classification pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Floor cells handed to the classifier.
    pub sampled: usize,
    /// One-cell holes emitted.
    pub full: usize,
    /// Two-cell pairings emitted with a resistant or weak tag.
    pub wide: usize,
    /// Two-cell pairings emitted with the custom tag.
    pub custom: usize,
    /// Cells and pairings left out.
    pub rejected: usize,
}

/// The holes found in one pass, in discovery order, with pass statistics.
///
/// Two pairings can describe the same volume (each cell of a wide hole finds the
/// other), so `holes` may repeat a volume; the snapshot collapses them.
#[derive(Debug, Clone, Default)]
pub struct Classification {
    /// Every emitted hole.
    pub holes: Vec<ClassifiedHole>,
    /// What happened along the way.
    pub stats: ScanStats,
}

/// Classifies sampled floor cells according to a show mode.
#[derive(Debug, Clone, Copy)]
pub struct HoleClassifier {
    mode: HoleShowMode,
}

impl HoleClassifier {
    /// Creates a classifier for the given show mode.
    pub fn new(mode: HoleShowMode) -> Self {
        HoleClassifier { mode }
    }

    /// Classifies every candidate position against `world`.
    pub fn classify<W, I>(&self, world: &W, candidates: I) -> Classification
    where
        W: WorldQuery + ?Sized,
        I: IntoIterator<Item = Point3<i32>>,
    {
        let mut result = Classification::default();
        let mut wide_candidates = Vec::new();

        for position in candidates {
            result.stats.sampled += 1;
            let sides = SafetyMap::classify(world, position);

            match classify_floor_cell(&sides) {
                CellVerdict::Full(color) => {
                    result.holes.push(ClassifiedHole::full(position, color));
                    result.stats.full += 1;
                }
                CellVerdict::WideCandidate { open_side, color } => {
                    wide_candidates.push(WideCandidate {
                        position,
                        open_side,
                        color,
                    });
                }
                CellVerdict::Rejected(reason) => {
                    trace!("Rejected floor cell {:?}: {:?}", position, reason);
                    result.stats.rejected += 1;
                }
            }
        }

        if !self.mode.pairs_wide_holes() {
            result.stats.rejected += wide_candidates.len();
            return result;
        }

        for candidate in wide_candidates {
            let partner = candidate.open_side.offset(candidate.position);
            let sides = SafetyMap::classify(world, partner);

            match classify_partner(candidate.color, &sides, self.mode) {
                Ok(color) => {
                    result.holes.push(ClassifiedHole::wide(
                        candidate.position,
                        candidate.open_side,
                        color,
                    ));
                    if color == ColorTag::Custom {
                        result.stats.custom += 1;
                    } else {
                        result.stats.wide += 1;
                    }
                }
                Err(reason) => {
                    trace!(
                        "Rejected pairing {:?} -> {:?}: {:?}",
                        candidate.position,
                        partner,
                        reason
                    );
                    result.stats.rejected += 1;
                }
            }
        }

        result
    }
}
