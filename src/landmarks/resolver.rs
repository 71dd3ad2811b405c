//! Resolution of relative landmark placements into absolute centers
//!
//! Absolute landmarks are fixed immediately. Relative landmarks are settled
//! by bounded fixed-point relaxation: each round places every landmark whose
//! parent already has a center, and rounds stop once nothing changes.
//! Landmarks still unplaced afterwards are reported as errors rather than
//! left at the origin.

use std::collections::{HashMap, HashSet};

use log::{debug, info};

use crate::geometry::shapes::{Aabb, Point};
use crate::io::configuration::{DEFAULT_GAP_M, RESOLUTION_ROUNDS};
use crate::io::error::{LayoutError, Result, UnresolvedCause};
use crate::landmarks::model::{Axis, Direction, Landmark, Location};

/// Parameters of the relaxation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolverConfig {
    /// Clearance between a landmark and its parent
    pub gap: f64,
    /// Maximum number of relaxation rounds
    pub rounds: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            gap: DEFAULT_GAP_M,
            rounds: RESOLUTION_ROUNDS,
        }
    }
}

/// A landmark together with its absolute center in world meters
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLandmark {
    /// Source record
    pub landmark: Landmark,
    /// Absolute center, y grows north
    pub center: Point,
}

impl ResolvedLandmark {
    /// Identifier of the underlying landmark
    pub fn id(&self) -> &str {
        &self.landmark.id
    }

    /// Bounding box of the landmark grown by `padding`
    pub fn bounds(&self, padding: f64) -> Aabb {
        bounds(self, padding)
    }
}

/// Bounding box `(min_x, min_y, max_x, max_y)` of a resolved landmark plus padding
pub fn bounds(resolved: &ResolvedLandmark, padding: f64) -> Aabb {
    let landmark = &resolved.landmark;
    let half_w = landmark.dimensions.half_extent(Axis::X, landmark.shape);
    let half_l = landmark.dimensions.half_extent(Axis::Y, landmark.shape);
    Aabb::new(
        resolved.center.x - half_w,
        resolved.center.y - half_l,
        resolved.center.x + half_w,
        resolved.center.y + half_l,
    )
    .padded(padding)
}

/// Center of `child` placed beside `parent`
///
/// The distance between centers is the parent's half extent plus the child's
/// half extent along the direction's axis plus `gap`. Offsets are added on
/// top of that position.
pub fn relative_center(
    parent: &Landmark,
    parent_center: Point,
    child: &Landmark,
    direction: Direction,
    offset: Point,
    gap: f64,
) -> Point {
    let axis = direction.axis();
    let distance = parent.dimensions.half_extent(axis, parent.shape)
        + child.dimensions.half_extent(axis, child.shape)
        + gap;

    let mut center = parent_center;
    match axis {
        Axis::X => center.x += direction.sign() * distance,
        Axis::Y => center.y += direction.sign() * distance,
    }
    center.x += offset.x;
    center.y += offset.y;
    center
}

/// Landmarks indexed by id, every one with an absolute center
#[derive(Debug, Clone, Default)]
pub struct LandmarkRegistry {
    landmarks: Vec<ResolvedLandmark>,
    index: HashMap<String, usize>,
}

impl LandmarkRegistry {
    /// Resolve landmarks with the default gap and round limit
    ///
    /// # Errors
    ///
    /// See [`resolve_landmarks`]
    pub fn resolve(landmarks: Vec<Landmark>) -> Result<Self> {
        resolve_landmarks(landmarks, &ResolverConfig::default())
    }

    /// Look up a landmark by id
    pub fn get(&self, id: &str) -> Option<&ResolvedLandmark> {
        self.index.get(id).and_then(|&i| self.landmarks.get(i))
    }

    /// Look up a landmark by id, failing when it does not exist
    ///
    /// # Errors
    ///
    /// Returns `UnknownLandmark` if no landmark has this id
    pub fn require(&self, id: &str) -> Result<&ResolvedLandmark> {
        self.get(id).ok_or_else(|| LayoutError::UnknownLandmark { id: id.to_string() })
    }

    /// Bounding box of the landmark with the given id
    ///
    /// # Errors
    ///
    /// Returns `UnknownLandmark` if no landmark has this id
    pub fn bounds(&self, id: &str, padding: f64) -> Result<Aabb> {
        self.require(id).map(|resolved| resolved.bounds(padding))
    }

    /// Landmarks in their original order
    pub fn iter(&self) -> impl Iterator<Item = &ResolvedLandmark> {
        self.landmarks.iter()
    }

    /// Number of landmarks
    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    /// True when the registry holds no landmarks
    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }
}

/// Compute an absolute center for every landmark
///
/// # Errors
///
/// Returns an error if:
/// - Two landmarks share an id (`DuplicateLandmark`)
/// - A relative landmark names a parent that does not exist, sits on a
///   cyclic parent chain, or needs more rounds than `config.rounds`
///   (`UnresolvedLandmark`)
pub fn resolve_landmarks(landmarks: Vec<Landmark>, config: &ResolverConfig) -> Result<LandmarkRegistry> {
    let mut index = HashMap::with_capacity(landmarks.len());
    for (i, landmark) in landmarks.iter().enumerate() {
        if index.insert(landmark.id.clone(), i).is_some() {
            return Err(LayoutError::DuplicateLandmark {
                id: landmark.id.clone(),
            });
        }
    }

    let mut centers: Vec<Option<Point>> = landmarks
        .iter()
        .map(|landmark| match landmark.location {
            Location::Absolute { grid_x, grid_y } => Some(Point::new(grid_x, grid_y)),
            Location::Relative { .. } => None,
        })
        .collect();

    for round in 1..=config.rounds {
        let mut changed = 0;
        for (i, landmark) in landmarks.iter().enumerate() {
            if centers.get(i).copied().flatten().is_some() {
                continue;
            }
            let Location::Relative {
                relative_to,
                direction,
                offset_x,
                offset_y,
            } = &landmark.location
            else {
                continue;
            };
            let Some(&parent_index) = index.get(relative_to) else {
                continue;
            };
            let (Some(parent), Some(parent_center)) = (
                landmarks.get(parent_index),
                centers.get(parent_index).copied().flatten(),
            ) else {
                continue;
            };

            let center = relative_center(
                parent,
                parent_center,
                landmark,
                *direction,
                Point::new(*offset_x, *offset_y),
                config.gap,
            );
            if let Some(slot) = centers.get_mut(i) {
                *slot = Some(center);
                changed += 1;
            }
        }

        debug!("Resolution round {round}: {changed} landmarks placed");
        if changed == 0 {
            break;
        }
    }

    if let Some(error) = diagnose_unresolved(&landmarks, &centers, &index) {
        return Err(error);
    }

    let resolved: Vec<ResolvedLandmark> = landmarks
        .into_iter()
        .zip(centers)
        .filter_map(|(landmark, center)| center.map(|center| ResolvedLandmark { landmark, center }))
        .collect();

    info!("Resolved {} landmarks", resolved.len());

    Ok(LandmarkRegistry {
        landmarks: resolved,
        index,
    })
}

// Dangling references are reported first since they also strand every
// descendant, then cycles, then chains that simply ran out of rounds.
fn diagnose_unresolved(
    landmarks: &[Landmark],
    centers: &[Option<Point>],
    index: &HashMap<String, usize>,
) -> Option<LayoutError> {
    let unresolved: Vec<(usize, &Landmark, &str)> = landmarks
        .iter()
        .enumerate()
        .filter(|(i, _)| centers.get(*i).copied().flatten().is_none())
        .filter_map(|(i, landmark)| landmark.location.parent().map(|parent| (i, landmark, parent)))
        .collect();

    if let Some(&(_, landmark, parent)) = unresolved
        .iter()
        .find(|(_, _, parent)| !index.contains_key(*parent))
    {
        return Some(unresolved_error(landmark, parent, UnresolvedCause::DanglingReference));
    }

    if let Some(&(_, landmark, parent)) = unresolved
        .iter()
        .find(|(i, _, _)| on_cycle(*i, landmarks, index))
    {
        return Some(unresolved_error(landmark, parent, UnresolvedCause::Cycle));
    }

    unresolved.first().map(|&(_, landmark, parent)| {
        unresolved_error(landmark, parent, UnresolvedCause::RoundLimitExceeded)
    })
}

fn unresolved_error(landmark: &Landmark, parent: &str, cause: UnresolvedCause) -> LayoutError {
    LayoutError::UnresolvedLandmark {
        id: landmark.id.clone(),
        parent: parent.to_string(),
        cause,
    }
}

// Walks parent links from `start` and reports whether they loop.
fn on_cycle(start: usize, landmarks: &[Landmark], index: &HashMap<String, usize>) -> bool {
    let mut visited = HashSet::new();
    let mut current = start;
    loop {
        if !visited.insert(current) {
            return true;
        }
        let next = landmarks
            .get(current)
            .and_then(|landmark| landmark.location.parent())
            .and_then(|parent| index.get(parent));
        match next {
            Some(&parent_index) => current = parent_index,
            None => return false,
        }
    }
}
