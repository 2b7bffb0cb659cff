//! Canvas state and the drag-and-drop reorder engine.
//!
//! DESIGN
//! ======
//! `CanvasState` is a plain owned value. Every gesture handler in the view
//! layer maps onto one method here, so the whole interaction can be driven
//! and asserted without a rendering surface.
//!
//! A drag is armed by `begin_drag`. Dragging an existing item records its
//! index as the drag origin; the gesture payload itself only says whether
//! the drag is new-from-palette or a reorder. `drop` consumes the origin:
//! new components always append, existing ones are removed and re-inserted
//! at the insertion index, shifted down by one when moving past their own
//! slot.

use super::catalog::ComponentKind;
use super::model::{ComponentId, ComponentInstance};
use super::storage::{SessionStore, StorageError, STORAGE_KEY};
use std::collections::HashSet;
use tracing::{debug, info, warn};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

// =============================================================================
// GEOMETRY
// =============================================================================

/// Vertical extent of a canvas item, in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemBounds {
    pub top: f64,
    pub height: f64,
}

impl ItemBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn midpoint(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropPosition {
    Before,
    After,
}

/// Upper half of the item means "insert before", the midpoint itself and
/// below mean "insert after".
pub fn drop_position(pointer_y: f64, bounds: ItemBounds) -> DropPosition {
    if pointer_y >= bounds.midpoint() {
        DropPosition::After
    } else {
        DropPosition::Before
    }
}

/// Which item is highlighted during a drag, and on which edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoverIndicator {
    pub index: usize,
    pub position: DropPosition,
}

// =============================================================================
// GESTURES
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragSource {
    /// Dragging a palette entry.
    New(ComponentKind),
    /// Dragging the placed item at this index.
    Existing(usize),
}

/// What travels with the gesture from drag start to drop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPayload {
    New(ComponentKind),
    Reorder,
}

/// The item under the pointer when a drop happens.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DropTarget {
    pub index: usize,
    pub pointer_y: f64,
    pub bounds: ItemBounds,
}

impl DropTarget {
    pub fn position(&self) -> DropPosition {
        drop_position(self.pointer_y, self.bounds)
    }

    /// Index the dropped item should land at, before compensating for its
    /// removal from the origin.
    pub fn insertion_index(&self) -> usize {
        match self.position() {
            DropPosition::Before => self.index,
            DropPosition::After => self.index + 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    Appended(ComponentId),
    Moved { from: usize, to: usize },
    Ignored,
}

/// Move `items[origin]` so it lands where `insertion` pointed before the
/// removal. Returns the final index, or `None` if `origin` is out of range.
pub fn reorder<T>(items: &mut Vec<T>, origin: usize, insertion: usize) -> Option<usize> {
    if origin >= items.len() {
        return None;
    }
    let item = items.remove(origin);
    let mut index = if insertion > origin { insertion - 1 } else { insertion };
    index = index.min(items.len());
    items.insert(index, item);
    Some(index)
}

// =============================================================================
// STATE
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CanvasState {
    sequence: Vec<ComponentInstance>,
    selected_id: Option<ComponentId>,
    drag_origin: Option<usize>,
    hover: Option<HoverIndicator>,
    next_id: u64,
}

impl CanvasState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild state from a stored sequence. Ids must be unique and leave
    /// room for the next allocation.
    pub fn from_sequence(sequence: Vec<ComponentInstance>) -> Option<Self> {
        let mut seen = HashSet::with_capacity(sequence.len());
        if !sequence.iter().all(|c| seen.insert(c.id)) {
            return None;
        }
        let next_id = match sequence.iter().map(|c| c.id.0).max() {
            Some(max) => max.checked_add(1)?,
            None => 0,
        };
        Some(Self {
            sequence,
            next_id,
            ..Self::default()
        })
    }

    /// Rehydrate from the session store. Missing, unreadable or malformed
    /// data all give an empty canvas.
    pub fn load(store: &dyn SessionStore) -> Self {
        let raw = match store.get_item(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Self::new(),
            Err(err) => {
                warn!(%err, "could not read saved layout");
                return Self::new();
            }
        };

        let state = serde_json::from_str::<Vec<ComponentInstance>>(&raw)
            .ok()
            .and_then(Self::from_sequence);
        match state {
            Some(state) => {
                info!(components = state.len(), "restored saved layout");
                state
            }
            None => {
                warn!("saved layout is malformed, starting empty");
                Self::new()
            }
        }
    }

    pub fn sequence(&self) -> &[ComponentInstance] {
        &self.sequence
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn selected_id(&self) -> Option<ComponentId> {
        self.selected_id
    }

    /// The selected instance, if the selection points at one.
    pub fn selected(&self) -> Option<&ComponentInstance> {
        let id = self.selected_id?;
        self.get(id)
    }

    pub fn get(&self, id: ComponentId) -> Option<&ComponentInstance> {
        self.sequence.iter().find(|c| c.id == id)
    }

    pub fn drag_origin(&self) -> Option<usize> {
        self.drag_origin
    }

    pub fn hover(&self) -> Option<HoverIndicator> {
        self.hover
    }

    // -------------------------------------------------------------------------
    // drag and drop
    // -------------------------------------------------------------------------

    pub fn begin_drag(&mut self, source: DragSource) -> DragPayload {
        match source {
            DragSource::New(kind) => {
                debug!(%kind, "drag from palette");
                DragPayload::New(kind)
            }
            DragSource::Existing(index) => {
                debug!(index, "drag existing component");
                self.drag_origin = Some(index);
                DragPayload::Reorder
            }
        }
    }

    pub fn drag_over(&mut self, index: usize, pointer_y: f64, bounds: ItemBounds) -> DropPosition {
        let position = drop_position(pointer_y, bounds);
        self.hover = Some(HoverIndicator { index, position });
        position
    }

    pub fn drag_leave(&mut self, index: usize) {
        if self.hover.is_some_and(|h| h.index == index) {
            self.hover = None;
        }
    }

    pub fn drop(&mut self, payload: DragPayload, target: Option<DropTarget>) -> DropOutcome {
        let outcome = match payload {
            DragPayload::New(kind) => match self.allocate_id() {
                Some(id) => {
                    self.sequence.push(ComponentInstance::new(id, kind));
                    debug!(%id, %kind, "appended component");
                    DropOutcome::Appended(id)
                }
                None => {
                    warn!(%kind, "component ids exhausted, drop ignored");
                    DropOutcome::Ignored
                }
            },
            DragPayload::Reorder => match (self.drag_origin, target) {
                (Some(origin), Some(target)) => {
                    match reorder(&mut self.sequence, origin, target.insertion_index()) {
                        Some(to) => {
                            debug!(from = origin, to, "moved component");
                            DropOutcome::Moved { from: origin, to }
                        }
                        None => DropOutcome::Ignored,
                    }
                }
                _ => DropOutcome::Ignored,
            },
        };

        self.hover = None;
        self.drag_origin = None;
        outcome
    }

    /// Gesture ended without a drop on the canvas.
    pub fn cancel_drag(&mut self) {
        self.hover = None;
        self.drag_origin = None;
    }

    /// `None` once the counter cannot advance past the next id.
    fn allocate_id(&mut self) -> Option<ComponentId> {
        let id = self.next_id;
        self.next_id = id.checked_add(1)?;
        Some(ComponentId(id))
    }

    // -------------------------------------------------------------------------
    // selection and editing
    // -------------------------------------------------------------------------

    pub fn select(&mut self, id: ComponentId) {
        self.selected_id = Some(id);
    }

    /// Replace the instance with `id` wholesale. Unknown ids, and
    /// replacements carrying a different id, are ignored.
    pub fn update_properties(&mut self, id: ComponentId, updated: ComponentInstance) -> bool {
        if updated.id != id {
            return false;
        }
        match self.sequence.iter_mut().find(|c| c.id == id) {
            Some(slot) => {
                *slot = updated;
                true
            }
            None => false,
        }
    }

    // -------------------------------------------------------------------------
    // persistence
    // -------------------------------------------------------------------------

    pub fn save(&self, store: &mut dyn SessionStore) -> Result<(), StorageError> {
        let raw = serde_json::to_string(&self.sequence)?;
        store.set_item(STORAGE_KEY, &raw)?;
        info!(components = self.sequence.len(), "saved layout");
        Ok(())
    }

    /// Clear the canvas and drop the stored layout. In-memory state is
    /// cleared even if the store fails.
    pub fn reset(&mut self, store: &mut dyn SessionStore) -> Result<(), StorageError> {
        self.sequence.clear();
        self.selected_id = None;
        self.drag_origin = None;
        self.hover = None;
        store.remove_item(STORAGE_KEY)?;
        info!("reset layout");
        Ok(())
    }
}
