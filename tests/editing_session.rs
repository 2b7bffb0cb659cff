//! Integration tests: a full builder session without a browser.
//!
//! Drives the palette → canvas → properties panel → storage flow through
//! the public API, the same calls the view layer makes per gesture.

use form_builder::builder::editor::{self, PropertyEdit};
use form_builder::builder::{
    CanvasState, ComponentId, ComponentKind, DragSource, DropOutcome, DropTarget, ItemBounds,
    MemoryStore, SessionStore, CATALOG, STORAGE_KEY,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

const ROW: f64 = 50.0;

fn target(index: usize, lower: bool) -> DropTarget {
    let top = index as f64 * ROW;
    DropTarget {
        index,
        pointer_y: if lower { top + 40.0 } else { top + 10.0 },
        bounds: ItemBounds::new(top, ROW),
    }
}

fn drop_from_palette(state: &mut CanvasState, kind: ComponentKind) -> ComponentId {
    let payload = state.begin_drag(DragSource::New(kind));
    match state.drop(payload, None) {
        DropOutcome::Appended(id) => id,
        other => panic!("expected append, got {other:?}"),
    }
}

fn edit(state: &mut CanvasState, id: ComponentId, change: PropertyEdit) {
    let merged = editor::apply(state.get(id).expect("instance present"), change);
    state.update_properties(id, merged);
}

fn kinds(state: &CanvasState) -> Vec<ComponentKind> {
    state.sequence().iter().map(|c| c.kind).collect()
}

// ─── Building a form ────────────────────────────────────────────────────

#[test]
fn whole_catalog_dropped_in_palette_order() {
    let mut state = CanvasState::new();
    for entry in CATALOG {
        drop_from_palette(&mut state, entry.kind);
    }

    assert_eq!(
        kinds(&state),
        vec![
            ComponentKind::Heading,
            ComponentKind::Input,
            ComponentKind::Dropdown,
            ComponentKind::Button,
        ]
    );
}

#[test]
fn reorder_then_edit_keeps_order() {
    let mut state = CanvasState::new();
    let heading = drop_from_palette(&mut state, ComponentKind::Heading);
    drop_from_palette(&mut state, ComponentKind::Input);
    let button = drop_from_palette(&mut state, ComponentKind::Button);

    // Move the button above the input.
    let payload = state.begin_drag(DragSource::Existing(2));
    state.drop(payload, Some(target(1, false)));
    assert_eq!(
        kinds(&state),
        vec![ComponentKind::Heading, ComponentKind::Button, ComponentKind::Input]
    );

    state.select(button);
    edit(&mut state, button, PropertyEdit::Text("Send".into()));
    edit(&mut state, button, PropertyEdit::Color("#22aa44".into()));
    edit(&mut state, heading, PropertyEdit::Text("Contact us".into()));

    assert_eq!(
        kinds(&state),
        vec![ComponentKind::Heading, ComponentKind::Button, ComponentKind::Input]
    );
    let selected = state.selected().expect("button is selected");
    assert_eq!(selected.properties.text.as_deref(), Some("Send"));
    assert_eq!(selected.properties.color.as_deref(), Some("#22aa44"));
}

// ─── Persistence ────────────────────────────────────────────────────────

#[test]
fn saved_layout_is_flat_json() {
    let mut store = MemoryStore::new();
    let mut state = CanvasState::new();
    let dropdown = drop_from_palette(&mut state, ComponentKind::Dropdown);
    edit(
        &mut state,
        dropdown,
        PropertyEdit::Option { index: 0, value: "Small".into() },
    );
    state.save(&mut store).unwrap();

    let raw = store.get_item(STORAGE_KEY).unwrap().expect("layout stored");
    let value: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        value,
        json!([{ "id": 0, "type": "dropdown", "options": ["Small", "Option 2"] }])
    );
}

#[test]
fn session_survives_reload_and_reset() {
    let mut store = MemoryStore::new();
    let mut state = CanvasState::new();
    drop_from_palette(&mut state, ComponentKind::Heading);
    let input = drop_from_palette(&mut state, ComponentKind::Input);
    edit(&mut state, input, PropertyEdit::Placeholder("Email".into()));
    state.save(&mut store).unwrap();

    let mut reloaded = CanvasState::load(&store);
    assert_eq!(reloaded.sequence(), state.sequence());

    let added = drop_from_palette(&mut reloaded, ComponentKind::Button);
    assert!(reloaded.sequence().iter().filter(|c| c.id == added).count() == 1);

    reloaded.select(added);
    reloaded.reset(&mut store).unwrap();
    assert!(reloaded.is_empty());
    assert_eq!(reloaded.selected_id(), None);
    assert!(CanvasState::load(&store).is_empty());
}

#[test]
fn unsaved_changes_are_not_persisted() {
    let mut store = MemoryStore::new();
    let mut state = CanvasState::new();
    drop_from_palette(&mut state, ComponentKind::Heading);
    state.save(&mut store).unwrap();

    drop_from_palette(&mut state, ComponentKind::Button);
    assert_eq!(CanvasState::load(&store).len(), 1);
}

#[test]
fn layout_with_unknown_kind_loads_empty() {
    let mut store = MemoryStore::new();
    store
        .set_item(STORAGE_KEY, r#"[{"id":1,"type":"checkbox"}]"#)
        .unwrap();
    assert!(CanvasState::load(&store).is_empty());
}
