use std::collections::HashMap;

use vectorkit_core::ShapeId;

use crate::drawing_object::DrawingObject;
use crate::model::Shape;

/// Owns every drawing object of the document, keyed by id, in draw order.
#[derive(Debug, Clone, Default)]
pub struct ShapeStore {
    shapes: HashMap<ShapeId, DrawingObject>,
    draw_order: Vec<ShapeId>,
    next_id: u64,
}

impl ShapeStore {
    pub fn new() -> Self {
        Self {
            shapes: HashMap::new(),
            draw_order: Vec::new(),
            next_id: 1,
        }
    }

    fn generate_id(&mut self) -> ShapeId {
        let id = ShapeId(self.next_id.max(1));
        self.next_id = id.get() + 1;
        id
    }

    /// Add a shape on top of the drawing and return its id.
    pub fn insert(&mut self, shape: Shape) -> ShapeId {
        let id = self.generate_id();
        self.shapes.insert(id, DrawingObject::new(id, shape));
        self.draw_order.push(id);
        id
    }

    pub fn get(&self, id: ShapeId) -> Option<&DrawingObject> {
        self.shapes.get(&id)
    }

    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut DrawingObject> {
        self.shapes.get_mut(&id)
    }

    pub fn contains(&self, id: ShapeId) -> bool {
        self.shapes.contains_key(&id)
    }

    pub fn remove(&mut self, id: ShapeId) -> Option<DrawingObject> {
        let removed = self.shapes.remove(&id)?;
        self.draw_order.retain(|&other| other != id);
        Some(removed)
    }

    /// Swap in a whole object state; returns the previous one.
    pub fn replace(&mut self, object: DrawingObject) -> Option<DrawingObject> {
        let slot = self.shapes.get_mut(&object.id)?;
        Some(std::mem::replace(slot, object))
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Ids in draw order, bottom first.
    pub fn ids(&self) -> &[ShapeId] {
        &self.draw_order
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawingObject> {
        self.draw_order.iter().filter_map(|id| self.shapes.get(id))
    }
}
