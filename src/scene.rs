//! Scene snapshot handed to routing calls.
//!
//! The store is read-only from this crate's point of view. A caller builds
//! (or borrows) one snapshot per routing call so every lookup inside that
//! call sees the same elements.

use std::collections::HashMap;

use crate::element::{Element, ElementId};

/// Ordered element list with an id index
#[derive(Debug, Clone, Default)]
pub struct Scene {
    /// All elements in z-order, deleted ones included
    elements: Vec<Element>,
    /// Element id -> position in `elements`
    index: HashMap<ElementId, usize>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_elements(elements: impl IntoIterator<Item = Element>) -> Self {
        let mut scene = Self::new();
        for element in elements {
            scene.insert(element);
        }
        scene
    }

    /// Insert an element, replacing any element with the same id in place.
    pub fn insert(&mut self, element: Element) {
        match self.index.get(&element.id) {
            Some(&idx) => self.elements[idx] = element,
            None => {
                self.index.insert(element.id.clone(), self.elements.len());
                self.elements.push(element);
            }
        }
    }

    /// Non-deleted elements in z-order
    pub fn non_deleted_elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter().filter(|el| !el.is_deleted)
    }

    /// Lookup by id; deleted elements are invisible
    pub fn non_deleted_element(&self, id: &ElementId) -> Option<&Element> {
        self.index
            .get(id)
            .map(|&idx| &self.elements[idx])
            .filter(|el| !el.is_deleted)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
