//! Annotations and coordinate-keyed set operations on annotation lists.

use std::collections::HashSet;
use std::rc::Rc;
use std::sync::Arc;

use crate::geo::Coordinate;

/// Anything placed on a map at a geographic coordinate.
pub trait Annotation {
    /// Returns the annotation's position.
    fn coordinate(&self) -> Coordinate;
}

impl Annotation for Coordinate {
    fn coordinate(&self) -> Coordinate {
        *self
    }
}

impl<T: Annotation + ?Sized> Annotation for &T {
    fn coordinate(&self) -> Coordinate {
        (**self).coordinate()
    }
}

impl<T: Annotation + ?Sized> Annotation for Box<T> {
    fn coordinate(&self) -> Coordinate {
        (**self).coordinate()
    }
}

impl<T: Annotation + ?Sized> Annotation for Rc<T> {
    fn coordinate(&self) -> Coordinate {
        (**self).coordinate()
    }
}

impl<T: Annotation + ?Sized> Annotation for Arc<T> {
    fn coordinate(&self) -> Coordinate {
        (**self).coordinate()
    }
}

/// A plain annotation with an optional title and subtitle.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PointAnnotation {
    pub coordinate: Coordinate,
    pub title: Option<String>,
    pub subtitle: Option<String>,
}

impl PointAnnotation {
    #[must_use]
    pub fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }
}

impl Annotation for PointAnnotation {
    fn coordinate(&self) -> Coordinate {
        self.coordinate
    }
}

/// Set operations on annotation lists, keyed on coordinate equality rather
/// than identity.
///
/// Two annotations match when their coordinates are exactly equal. Neither
/// operation deduplicates, and both keep the original order.
pub trait AnnotationVecExt<A> {
    /// Returns the elements whose coordinate matches no coordinate in `other`.
    #[must_use]
    fn subtracted<B: Annotation>(&self, other: &[B]) -> Vec<A>
    where
        A: Clone;

    /// Removes the elements whose coordinate matches a coordinate in `other`.
    fn subtract<B: Annotation>(&mut self, other: &[B]);

    /// Appends `other` to the end.
    fn add<I: IntoIterator<Item = A>>(&mut self, other: I);
}

impl<A: Annotation> AnnotationVecExt<A> for Vec<A> {
    fn subtracted<B: Annotation>(&self, other: &[B]) -> Vec<A>
    where
        A: Clone,
    {
        let excluded = coordinates_of(other);
        let kept: Vec<A> = self
            .iter()
            .filter(|item| !excluded.contains(&item.coordinate()))
            .cloned()
            .collect();
        tracing::trace!(
            kept = kept.len(),
            removed = self.len() - kept.len(),
            "subtracted annotations"
        );
        kept
    }

    fn subtract<B: Annotation>(&mut self, other: &[B]) {
        let excluded = coordinates_of(other);
        let before = self.len();
        self.retain(|item| !excluded.contains(&item.coordinate()));
        tracing::trace!(
            kept = self.len(),
            removed = before - self.len(),
            "subtracted annotations in place"
        );
    }

    fn add<I: IntoIterator<Item = A>>(&mut self, other: I) {
        self.extend(other);
    }
}

fn coordinates_of<B: Annotation>(annotations: &[B]) -> HashSet<Coordinate> {
    annotations.iter().map(Annotation::coordinate).collect()
}
