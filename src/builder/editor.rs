//! Property editing: which fields each kind exposes and how a single field
//! edit is merged into an instance before it is written back by id.

use super::catalog::ComponentKind;
use super::model::ComponentInstance;

pub const DEFAULT_TEXT: &str = "Text";
pub const DEFAULT_COLOR: &str = "#000000";
pub const DEFAULT_PLACEHOLDER: &str = "Placeholder";
pub const DEFAULT_OPTIONS: [&str; 2] = ["Option 1", "Option 2"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Text,
    Color,
    Placeholder,
    Options,
}

pub fn fields_for(kind: ComponentKind) -> &'static [Field] {
    match kind {
        ComponentKind::Heading | ComponentKind::Button => &[Field::Text, Field::Color],
        ComponentKind::Input => &[Field::Placeholder],
        ComponentKind::Dropdown => &[Field::Options],
    }
}

/// One change made in the properties panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PropertyEdit {
    Text(String),
    Color(String),
    Placeholder(String),
    Option { index: usize, value: String },
    AddOption,
    RemoveOption { index: usize },
}

fn default_options() -> Vec<String> {
    DEFAULT_OPTIONS.iter().map(|s| s.to_string()).collect()
}

/// Return `instance` with exactly the edited field overwritten.
pub fn apply(instance: &ComponentInstance, edit: PropertyEdit) -> ComponentInstance {
    let mut updated = instance.clone();
    let props = &mut updated.properties;
    match edit {
        PropertyEdit::Text(text) => props.text = Some(text),
        PropertyEdit::Color(color) => props.color = Some(color),
        PropertyEdit::Placeholder(placeholder) => props.placeholder = Some(placeholder),
        PropertyEdit::Option { index, value } => {
            let mut options = props.options.take().unwrap_or_else(default_options);
            if let Some(slot) = options.get_mut(index) {
                *slot = value;
            }
            props.options = Some(options);
        }
        PropertyEdit::AddOption => {
            let mut options = props.options.take().unwrap_or_else(default_options);
            options.push(format!("Option {}", options.len() + 1));
            props.options = Some(options);
        }
        PropertyEdit::RemoveOption { index } => {
            let mut options = props.options.take().unwrap_or_else(default_options);
            if index < options.len() {
                options.remove(index);
            }
            props.options = Some(options);
        }
    }
    updated
}

/// Values shown in the panel inputs for the selected instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorBuffer {
    pub text: String,
    pub color: String,
    pub placeholder: String,
    pub options: Vec<String>,
}

impl EditorBuffer {
    pub fn from_instance(instance: &ComponentInstance) -> Self {
        let props = &instance.properties;
        Self {
            text: props.text.clone().unwrap_or_else(|| DEFAULT_TEXT.to_string()),
            color: props.color.clone().unwrap_or_else(|| DEFAULT_COLOR.to_string()),
            placeholder: props
                .placeholder
                .clone()
                .unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string()),
            options: props.options.clone().unwrap_or_else(default_options),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::model::{ComponentId, Properties};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn heading() -> ComponentInstance {
        ComponentInstance::new(ComponentId(1), ComponentKind::Heading)
    }

    #[test]
    fn fields_follow_kind() {
        assert_eq!(fields_for(ComponentKind::Heading), &[Field::Text, Field::Color]);
        assert_eq!(fields_for(ComponentKind::Button), &[Field::Text, Field::Color]);
        assert_eq!(fields_for(ComponentKind::Input), &[Field::Placeholder]);
        assert_eq!(fields_for(ComponentKind::Dropdown), &[Field::Options]);
    }

    #[test]
    fn text_edit_overwrites_only_text() {
        let mut original = heading();
        original.properties.color = Some("#123456".into());
        original.properties.extra.insert("align".into(), json!("center"));

        let updated = apply(&original, PropertyEdit::Text("Title".into()));

        let mut expected = original.clone();
        expected.properties.text = Some("Title".into());
        assert_eq!(updated, expected);
    }

    #[test]
    fn edits_ignore_kind() {
        let updated = apply(&heading(), PropertyEdit::Placeholder("x".into()));
        assert_eq!(updated.properties.placeholder.as_deref(), Some("x"));
        assert_eq!(updated.kind, ComponentKind::Heading);
    }

    #[test]
    fn option_edit_starts_from_defaults() {
        let dropdown = ComponentInstance::new(ComponentId(2), ComponentKind::Dropdown);
        let updated = apply(
            &dropdown,
            PropertyEdit::Option { index: 1, value: "Blue".into() },
        );
        assert_eq!(
            updated.properties.options,
            Some(vec!["Option 1".to_string(), "Blue".to_string()])
        );
    }

    #[test]
    fn option_edit_out_of_range_keeps_list() {
        let mut dropdown = ComponentInstance::new(ComponentId(2), ComponentKind::Dropdown);
        dropdown.properties.options = Some(vec!["Red".into()]);
        let updated = apply(
            &dropdown,
            PropertyEdit::Option { index: 4, value: "Blue".into() },
        );
        assert_eq!(updated, dropdown);
    }

    #[test]
    fn add_and_remove_options() {
        let dropdown = ComponentInstance::new(ComponentId(2), ComponentKind::Dropdown);
        let added = apply(&dropdown, PropertyEdit::AddOption);
        assert_eq!(
            added.properties.options.as_deref(),
            Some(&["Option 1".to_string(), "Option 2".to_string(), "Option 3".to_string()][..])
        );

        let removed = apply(&added, PropertyEdit::RemoveOption { index: 0 });
        assert_eq!(
            removed.properties.options.as_deref(),
            Some(&["Option 2".to_string(), "Option 3".to_string()][..])
        );
    }

    #[test]
    fn buffer_uses_editor_defaults() {
        let buffer = EditorBuffer::from_instance(&heading());
        assert_eq!(buffer.text, "Text");
        assert_eq!(buffer.color, "#000000");
        assert_eq!(buffer.placeholder, "Placeholder");
        assert_eq!(buffer.options, vec!["Option 1", "Option 2"]);
    }

    #[test]
    fn buffer_mirrors_stored_values() {
        let mut instance = heading();
        instance.properties = Properties {
            text: Some("Hello".into()),
            color: Some("#ff0000".into()),
            ..Properties::default()
        };
        let buffer = EditorBuffer::from_instance(&instance);
        assert_eq!(buffer.text, "Hello");
        assert_eq!(buffer.color, "#ff0000");
    }
}
