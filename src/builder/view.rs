use dioxus::prelude::*;
use tracing::warn;

use super::catalog::CATALOG;
use super::dom;
use super::editor::{self, EditorBuffer, Field, PropertyEdit};
use super::engine::{
    drop_position, CanvasState, DragPayload, DragSource, DropPosition, DropTarget, HoverIndicator,
};
use super::model::{ComponentId, ComponentInstance};
use super::render::ComponentPreview;
use super::storage::BrowserSessionStore;

const INDICATOR: &str = "2px solid #4299e1";
const NO_INDICATOR: &str = "2px solid transparent";

/// Gesture payload of the drag in flight, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct ActiveDrag(Option<DragPayload>);

#[component]
pub fn FormBuilder() -> Element {
    let state = use_context_provider(|| Signal::new(CanvasState::load(&BrowserSessionStore)));
    use_context_provider(|| Signal::new(ActiveDrag::default()));
    let has_selection = state.read().selected().is_some();

    rsx! {
        div {
            class: "form-builder",
            style: "display: flex; gap: 16px; height: 100vh; padding: 16px; box-sizing: border-box; font-family: system-ui;",

            Palette {}

            div {
                style: "flex: 1; display: flex; flex-direction: column; gap: 8px;",
                Toolbar {}
                Canvas {}
            }

            if has_selection {
                div {
                    class: "properties",
                    style: "width: 256px;",
                    PropertiesPanel {}
                }
            }
        }
    }
}

#[component]
fn Palette() -> Element {
    let mut state = use_context::<Signal<CanvasState>>();
    let mut active = use_context::<Signal<ActiveDrag>>();

    rsx! {
        div {
            class: "toolbox",
            style: "width: 256px; background: #f3f4f6; padding: 16px; border-radius: 8px;",
            h2 { style: "margin: 0 0 16px 0; font-size: 18px;", "Components" }

            for entry in CATALOG {
                div {
                    key: "{entry.kind}",
                    draggable: "true",
                    style: "background: white; padding: 12px; margin-bottom: 8px; border: 1px solid #e5e7eb; border-radius: 4px; cursor: move;",
                    ondragstart: move |_| {
                        let payload = state.write().begin_drag(DragSource::New(entry.kind));
                        active.set(ActiveDrag(Some(payload)));
                    },
                    ondragend: move |_| end_drag(state, active),
                    "{entry.label}"
                }
            }
        }
    }
}

#[component]
fn Toolbar() -> Element {
    let mut state = use_context::<Signal<CanvasState>>();

    rsx! {
        div {
            class: "toolbar",
            style: "display: flex; gap: 8px;",
            button {
                onclick: move |_| {
                    if let Err(err) = state.read().save(&mut BrowserSessionStore) {
                        warn!(%err, "failed to save layout");
                    }
                },
                "Save"
            }
            button {
                onclick: move |_| {
                    if let Err(err) = state.write().reset(&mut BrowserSessionStore) {
                        warn!(%err, "failed to clear saved layout");
                    }
                },
                "Reset"
            }
        }
    }
}

#[component]
fn Canvas() -> Element {
    let mut state = use_context::<Signal<CanvasState>>();
    let mut active = use_context::<Signal<ActiveDrag>>();
    let sequence = state.read().sequence().to_vec();

    rsx! {
        div {
            class: "canvas",
            style: "flex: 1; border: 2px dashed #d1d5db; border-radius: 8px; padding: 16px; overflow-y: auto;",
            ondragover: move |e| e.prevent_default(),
            ondrop: move |e| {
                e.prevent_default();
                if let Some(payload) = active.write().0.take() {
                    state.write().drop(payload, None);
                }
            },

            if sequence.is_empty() {
                div { style: "color: #9ca3af; text-align: center; padding: 32px;", "Drag components here" }
            }

            for (index, instance) in sequence.into_iter().enumerate() {
                CanvasItem { key: "{instance.id}", index, instance }
            }
        }
    }
}

#[component]
fn CanvasItem(index: usize, instance: ComponentInstance) -> Element {
    let mut state = use_context::<Signal<CanvasState>>();
    let mut active = use_context::<Signal<ActiveDrag>>();
    let id = instance.id;

    let (hover, is_selected) = {
        let s = state.read();
        (s.hover(), s.selected_id() == Some(id))
    };
    let edge = |position| {
        if hover == Some(HoverIndicator { index, position }) {
            INDICATOR
        } else {
            NO_INDICATOR
        }
    };
    let border_top = edge(DropPosition::Before);
    let border_bottom = edge(DropPosition::After);
    let background = if is_selected { "#eff6ff" } else { "transparent" };

    rsx! {
        div {
            "data-index": "{index}",
            draggable: "true",
            style: "position: relative; padding: 8px; border-radius: 4px; cursor: move; background: {background}; border-top: {border_top}; border-bottom: {border_bottom};",
            ondragstart: move |_| {
                let payload = state.write().begin_drag(DragSource::Existing(index));
                active.set(ActiveDrag(Some(payload)));
            },
            ondragover: move |e| {
                e.prevent_default();
                let Some(bounds) = dom::item_bounds(index) else {
                    return;
                };
                let pointer_y = e.client_coordinates().y;
                let indicator = HoverIndicator { index, position: drop_position(pointer_y, bounds) };
                if state.peek().hover() != Some(indicator) {
                    state.write().drag_over(index, pointer_y, bounds);
                }
            },
            ondragleave: move |_| state.write().drag_leave(index),
            ondrop: move |e| {
                e.prevent_default();
                e.stop_propagation();
                let Some(payload) = active.write().0.take() else {
                    return;
                };
                let pointer_y = e.client_coordinates().y;
                let target = dom::item_bounds(index).map(|bounds| DropTarget { index, pointer_y, bounds });
                state.write().drop(payload, target);
            },
            ondragend: move |_| end_drag(state, active),
            onclick: move |e| {
                e.stop_propagation();
                state.write().select(id);
            },

            ComponentPreview { instance }
        }
    }
}

#[component]
fn PropertiesPanel() -> Element {
    let state = use_context::<Signal<CanvasState>>();
    let Some(instance) = state.read().selected().cloned() else {
        return rsx! {
            div { style: "color: slategray; text-align: center; padding: 32px;", "Select a component" }
        };
    };
    let buffer = EditorBuffer::from_instance(&instance);
    let kind = instance.kind;

    rsx! {
        div {
            class: "properties-panel",
            style: "background: white; padding: 16px; border-radius: 8px; box-shadow: 0 2px 8px rgba(0,0,0,0.1);",
            h3 { style: "margin: 0 0 8px 0; font-weight: bold;", "Edit {kind}" }

            for field in editor::fields_for(kind).iter().copied() {
                FieldInput { key: "{field:?}", id: instance.id, field, buffer: buffer.clone() }
            }
        }
    }
}

#[component]
fn FieldInput(id: ComponentId, field: Field, buffer: EditorBuffer) -> Element {
    let state = use_context::<Signal<CanvasState>>();
    let input_style = "width: 100%; padding: 8px; margin-bottom: 8px; border: 1px solid #d1d5db; border-radius: 4px; box-sizing: border-box;";

    match field {
        Field::Text => rsx! {
            input {
                r#type: "text",
                value: "{buffer.text}",
                placeholder: "Text",
                style: "{input_style}",
                oninput: move |e| apply_edit(state, id, PropertyEdit::Text(e.value())),
            }
        },
        Field::Color => rsx! {
            input {
                r#type: "color",
                value: "{buffer.color}",
                style: "margin-bottom: 8px;",
                oninput: move |e| apply_edit(state, id, PropertyEdit::Color(e.value())),
            }
        },
        Field::Placeholder => rsx! {
            input {
                r#type: "text",
                value: "{buffer.placeholder}",
                placeholder: "Input placeholder",
                style: "{input_style}",
                oninput: move |e| apply_edit(state, id, PropertyEdit::Placeholder(e.value())),
            }
        },
        Field::Options => rsx! {
            div {
                class: "options-editor",
                for (i, label) in buffer.options.iter().enumerate() {
                    div {
                        key: "{i}",
                        style: "display: flex; gap: 4px;",
                        input {
                            r#type: "text",
                            value: "{label}",
                            style: "{input_style}",
                            oninput: move |e| apply_edit(state, id, PropertyEdit::Option { index: i, value: e.value() }),
                        }
                        button {
                            onclick: move |_| apply_edit(state, id, PropertyEdit::RemoveOption { index: i }),
                            "X"
                        }
                    }
                }
                button {
                    onclick: move |_| apply_edit(state, id, PropertyEdit::AddOption),
                    "Add option"
                }
            }
        },
    }
}

fn apply_edit(mut state: Signal<CanvasState>, id: ComponentId, change: PropertyEdit) {
    let mut canvas = state.write();
    let Some(current) = canvas.get(id) else {
        return;
    };
    let merged = editor::apply(current, change);
    canvas.update_properties(id, merged);
}

fn end_drag(mut state: Signal<CanvasState>, mut active: Signal<ActiveDrag>) {
    active.set(ActiveDrag::default());
    if state.peek().drag_origin().is_some() || state.peek().hover().is_some() {
        state.write().cancel_drag();
    }
}
