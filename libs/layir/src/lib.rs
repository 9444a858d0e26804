//! A minimal layout intermediate representation.
//!
//! A [`Cell`] is a named, ordered collection of [`Shape`]s,
//! each of which pairs a layer with a piece of geometry.
//! The layer type `L` is supplied by the process technology.

use std::hash::Hash;

use arcstr::ArcStr;
use geometry::prelude::*;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};


/// A layout cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell<L> {
    name: ArcStr,
    shapes: Vec<Shape<L>>,
}

/// A primitive layout shape consisting of a layer and a geometric shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape<L> {
    layer: L,
    shape: geometry::shape::Shape,
}

/// Per-layer totals for the shapes in a [`Cell`].
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerSummary {
    /// The number of shapes on the layer.
    pub count: usize,
    /// The summed area of the shapes on the layer, in square micrometers.
    ///
    /// Overlapping shapes are counted more than once.
    pub area: f64,
}

impl<L> Cell<L> {
    pub fn new(name: impl Into<ArcStr>) -> Self {
        Self {
            name: name.into(),
            shapes: Vec::new(),
        }
    }

    /// The name of the cell.
    #[inline]
    pub fn name(&self) -> &ArcStr {
        &self.name
    }

    pub fn add_shape(&mut self, shape: Shape<L>) {
        self.shapes.push(shape);
    }

    /// Draws `shape` on `layer`.
    pub fn draw(&mut self, layer: L, shape: impl Into<geometry::shape::Shape>) {
        self.add_shape(Shape::new(layer, shape.into()));
    }

    /// Iterates over the shapes in the order they were drawn.
    pub fn shapes(&self) -> impl Iterator<Item = &Shape<L>> {
        self.shapes.iter()
    }

    /// The number of shapes in the cell.
    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns `true` if the cell contains no shapes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

impl<L: PartialEq> Cell<L> {
    /// Iterates over the shapes drawn on `layer`.
    pub fn shapes_on<'a>(&'a self, layer: &'a L) -> impl Iterator<Item = &'a Shape<L>> + 'a {
        self.shapes.iter().filter(move |s| &s.layer == layer)
    }
}

impl<L: Clone + Hash + Eq> Cell<L> {
    /// Shape counts and areas, keyed by layer in order of first appearance.
    pub fn layer_summary(&self) -> IndexMap<L, LayerSummary> {
        let mut summary: IndexMap<L, LayerSummary> = IndexMap::new();
        for shape in self.shapes.iter() {
            let entry = summary.entry(shape.layer.clone()).or_default();
            entry.count += 1;
            entry.area += shape.shape.area();
        }
        tracing::trace!(cell = %self.name, layers = summary.len(), "summarized cell");
        summary
    }
}

impl<L: Clone> Cell<L> {
    /// Returns a copy of the cell with every shape reflected across `y = x`.
    pub fn transposed(&self) -> Self {
        Self {
            name: self.name.clone(),
            shapes: self.shapes.transpose(),
        }
    }
}

impl<L> Bbox for Cell<L> {
    fn bbox(&self) -> Option<Rect> {
        self.shapes.bbox()
    }
}

impl<L> Shape<L> {
    #[inline]
    pub fn new(layer: L, shape: geometry::shape::Shape) -> Self {
        Self { layer, shape }
    }

    #[inline]
    pub fn layer(&self) -> &L {
        &self.layer
    }

    #[inline]
    pub fn shape(&self) -> &geometry::shape::Shape {
        &self.shape
    }
}

impl<L> Bbox for Shape<L> {
    fn bbox(&self) -> Option<Rect> {
        self.shape.bbox()
    }
}

impl<L: Clone> Transpose for Shape<L> {
    fn transpose(&self) -> Self {
        Self {
            layer: self.layer.clone(),
            shape: self.shape.transpose(),
        }
    }
}
