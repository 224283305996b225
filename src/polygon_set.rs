use std::sync::Arc;

use anyhow::Result;
use log::{debug, warn};
use parking_lot::RwLock;

use crate::classifier::PointClassifier;
use crate::config::ClassifierConfig;
use crate::coordinate::Coordinate;
use crate::error::GeometryError;
use crate::polygon::Polygon;

/// An immutable state of a [`PolygonSet`].
///
/// Queries made through the same snapshot always see the same polygons, whatever happens to the
/// set in the meantime.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    polygons: Vec<Polygon>,
    tolerance: f64,
}

impl Snapshot {
    fn empty(tolerance: f64) -> Self {
        Self {
            polygons: Vec::new(),
            tolerance,
        }
    }

    /// The polygons, in load order.
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// Number of polygons.
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    /// Returns `true` if there is no polygon.
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Returns `true` if at least one polygon contains `point`.
    ///
    /// Polygons are tried in load order and the search stops at the first match.
    pub fn contains_any(&self, point: &Coordinate) -> bool {
        self.containing(point).is_some()
    }

    /// Index of the first polygon, in load order, that contains `point`.
    pub fn containing(&self, point: &Coordinate) -> Option<usize> {
        self.polygons
            .iter()
            .position(|polygon| polygon.contains_with_tolerance(point, self.tolerance))
    }

    /// The rings of the polygons as plain coordinate lists, in load order.
    pub fn rings(&self) -> Vec<Vec<Coordinate>> {
        self.polygons
            .iter()
            .map(|polygon| polygon.vertices().to_vec())
            .collect()
    }
}

impl PointClassifier for Snapshot {
    fn contains_point(&self, point: &[f64; 2]) -> bool {
        self.contains_any(&point.into())
    }
}

/// A set of possibly overlapping polygons, replaced as a whole and queried for containment.
///
/// The set can be shared between threads. [`PolygonSet::load`] builds the new polygons aside and
/// then swaps them in, so a query sees either all the old polygons or all the new ones.
#[derive(Debug)]
pub struct PolygonSet {
    current: RwLock<Arc<Snapshot>>,
    config: ClassifierConfig,
}

impl Default for PolygonSet {
    fn default() -> Self {
        Self::new()
    }
}

impl PolygonSet {
    /// Creates an empty set with the default configuration.
    pub fn new() -> Self {
        Self::from_valid_config(ClassifierConfig::default())
    }

    /// Creates an empty set with the given configuration.
    ///
    /// Fails if the configuration does not validate.
    pub fn with_config(config: ClassifierConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: ClassifierConfig) -> Self {
        Self {
            current: RwLock::new(Arc::new(Snapshot::empty(config.tolerance))),
            config,
        }
    }

    /// The configuration the set was created with.
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Replaces all the polygons of the set.
    ///
    /// Every ring is normalized then validated. If any of them is invalid, the error names its
    /// position in `rings` and the set keeps its previous polygons.
    pub fn load<R, I>(&self, rings: R) -> Result<(), GeometryError>
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator,
        <I as IntoIterator>::Item: Into<Coordinate>,
    {
        self.load_with(rings, Polygon::new)
    }

    /// Same as [`PolygonSet::load`], for rings whose last vertex may repeat the first one.
    pub fn load_closed_rings<R, I>(&self, rings: R) -> Result<(), GeometryError>
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator,
        <I as IntoIterator>::Item: Into<Coordinate>,
    {
        self.load_with(rings, Polygon::from_closed_ring)
    }

    fn load_with<R, I, F>(&self, rings: R, build: F) -> Result<(), GeometryError>
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator,
        <I as IntoIterator>::Item: Into<Coordinate>,
        F: Fn(Vec<Coordinate>) -> Result<Polygon, GeometryError>,
    {
        let normalization = self.config.normalization;
        let polygons = rings
            .into_iter()
            .enumerate()
            .map(|(index, ring)| {
                let ring = normalization.apply_ring(ring);
                let count = ring.len();
                build(ring).map_err(|err| {
                    let err = err.at_index(index);
                    warn!(
                        "Polygon set left unchanged: ring #{} with {} vertices refused ({})",
                        index, count, err
                    );
                    err
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            "Loaded {} polygons with {} vertices in total",
            polygons.len(),
            polygons.iter().map(Polygon::len).sum::<usize>()
        );
        let snapshot = Arc::new(Snapshot {
            polygons,
            tolerance: self.config.tolerance,
        });
        let previous = std::mem::replace(&mut *self.current.write(), snapshot);
        // Freed outside of the lock
        drop(previous);
        Ok(())
    }

    /// The current state of the set.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.current.read())
    }

    /// Number of polygons currently in the set.
    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    /// Returns `true` if the set currently holds no polygon.
    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }

    /// Returns `true` if at least one polygon of the set contains `point`.
    pub fn contains_any(&self, point: &Coordinate) -> bool {
        self.snapshot().contains_any(point)
    }

    /// The rings currently in the set, as they were stored by the last successful load.
    pub fn polygons(&self) -> Vec<Vec<Coordinate>> {
        self.snapshot().rings()
    }
}

impl PointClassifier for PolygonSet {
    fn contains_point(&self, point: &[f64; 2]) -> bool {
        self.contains_any(&point.into())
    }

    fn classify_many(&self, points: &[[f64; 2]]) -> Vec<bool> {
        self.snapshot().classify_many(points)
    }

    fn par_classify_many(&self, points: &[[f64; 2]]) -> Vec<bool> {
        self.snapshot().par_classify_many(points)
    }
}
