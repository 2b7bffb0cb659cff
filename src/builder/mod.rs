//! Drag-and-drop form builder.
//!
//! `catalog`, `model`, `engine`, `editor` and `storage` hold all of the
//! behavior and run without a browser. `view`, `render` and `dom` are the
//! Dioxus/web-sys layer on top.

pub mod catalog;
pub mod dom;
pub mod editor;
pub mod engine;
pub mod model;
pub mod render;
pub mod storage;
pub mod view;

pub use catalog::{CatalogEntry, ComponentKind, CATALOG};
pub use engine::{CanvasState, DragPayload, DragSource, DropOutcome, DropTarget, ItemBounds};
pub use model::{ComponentId, ComponentInstance, Properties};
pub use storage::{BrowserSessionStore, MemoryStore, SessionStore, StorageError, STORAGE_KEY};
pub use view::FormBuilder;
