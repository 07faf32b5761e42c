use slotmap::SecondaryMap;

use crate::math::UnitVector3;
use crate::topology::{FaceId, SolidId};

/// A confirmed haunch: two faces of one solid, offset along a shared normal.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedPair {
    /// The solid both faces belong to.
    pub solid: SolidId,
    /// The earlier face in the solid's face order.
    pub first: FaceId,
    /// The later face in the solid's face order.
    pub second: FaceId,
    /// Measured separation between the faces.
    pub distance: f64,
    /// Normal of `first`, along which the separation was checked.
    pub normal: UnitVector3,
}

/// Receives confirmed pairs as a detection pass finds them.
pub trait MatchSink {
    /// Called once per confirmed pair.
    fn report(&mut self, pair: &MatchedPair);
}

impl<F> MatchSink for F
where
    F: FnMut(&MatchedPair),
{
    fn report(&mut self, pair: &MatchedPair) {
        self(pair);
    }
}

/// An RGB color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const RED: Self = Self {
        r: 1.0,
        g: 0.0,
        b: 0.0,
    };
}

/// How a presentation layer should draw a highlighted face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Highlight {
    /// Fill color.
    pub color: Rgb,
    /// Draw the face filled rather than as wireframe.
    pub shaded: bool,
    /// Draw the face's boundary edges.
    pub draw_boundary: bool,
}

impl Default for Highlight {
    fn default() -> Self {
        Self {
            color: Rgb::RED,
            shaded: true,
            draw_boundary: false,
        }
    }
}

/// A sink that records a highlight for both faces of every reported pair.
///
/// Nothing is drawn here; a viewer reads [`Highlighter::highlights`] and
/// applies them. A face reported more than once keeps a single entry.
#[derive(Debug, Default)]
pub struct Highlighter {
    style: Highlight,
    faces: SecondaryMap<FaceId, Highlight>,
}

impl Highlighter {
    /// Creates a highlighter using the default style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a highlighter using the given style.
    #[must_use]
    pub fn with_style(style: Highlight) -> Self {
        Self {
            style,
            faces: SecondaryMap::new(),
        }
    }

    /// Returns the highlight recorded for a face, if any.
    #[must_use]
    pub fn get(&self, face: FaceId) -> Option<&Highlight> {
        self.faces.get(face)
    }

    /// Iterates over all highlighted faces.
    pub fn highlights(&self) -> impl Iterator<Item = (FaceId, &Highlight)> {
        self.faces.iter()
    }

    /// Number of highlighted faces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Returns `true` if nothing has been highlighted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Drops all highlights.
    pub fn clear(&mut self) {
        self.faces.clear();
    }
}

impl MatchSink for Highlighter {
    fn report(&mut self, pair: &MatchedPair) {
        for face in [pair.first, pair.second] {
            self.faces.insert(face, self.style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vector3;
    use slotmap::SlotMap;

    fn pair(first: FaceId, second: FaceId) -> MatchedPair {
        MatchedPair {
            solid: SolidId::default(),
            first,
            second,
            distance: 1.0,
            normal: UnitVector3::new_normalize(Vector3::z()),
        }
    }

    #[test]
    fn closures_are_sinks() {
        let mut faces: SlotMap<FaceId, ()> = SlotMap::with_key();
        let (a, b) = (faces.insert(()), faces.insert(()));

        let mut seen = Vec::new();
        let mut sink = |found: &MatchedPair| seen.push((found.first, found.second));
        sink.report(&pair(a, b));
        assert_eq!(seen, vec![(a, b)]);
    }

    #[test]
    fn highlighter_marks_both_faces_once() {
        let mut faces: SlotMap<FaceId, ()> = SlotMap::with_key();
        let (a, b, c) = (faces.insert(()), faces.insert(()), faces.insert(()));

        let mut highlighter = Highlighter::new();
        highlighter.report(&pair(a, b));
        highlighter.report(&pair(b, c));
        assert_eq!(highlighter.len(), 3);

        let style = highlighter.get(b).copied().unwrap_or_default();
        assert_eq!(style.color, Rgb::RED);
        assert!(style.shaded);
        assert!(!style.draw_boundary);

        highlighter.clear();
        assert!(highlighter.is_empty());
    }

    #[test]
    fn custom_style() {
        let mut faces: SlotMap<FaceId, ()> = SlotMap::with_key();
        let (a, b) = (faces.insert(()), faces.insert(()));
        let style = Highlight {
            color: Rgb { r: 0.0, g: 0.5, b: 1.0 },
            shaded: false,
            draw_boundary: true,
        };

        let mut highlighter = Highlighter::with_style(style);
        highlighter.report(&pair(a, b));
        assert_eq!(highlighter.highlights().count(), 2);
        assert!(highlighter.highlights().all(|(_, h)| *h == style));
    }
}
