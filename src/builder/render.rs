use super::catalog::ComponentKind;
use super::model::ComponentInstance;
use dioxus::prelude::*;

/// What a placed component looks like, with preview defaults applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Preview {
    Heading { text: String, color: Option<String> },
    Input { placeholder: String },
    Dropdown { options: Vec<String> },
    Button { text: String, color: Option<String> },
}

impl Preview {
    pub fn of(instance: &ComponentInstance) -> Self {
        let props = &instance.properties;
        match instance.kind {
            ComponentKind::Heading => Preview::Heading {
                text: props.text.clone().unwrap_or_else(|| "Heading".into()),
                color: props.color.clone(),
            },
            ComponentKind::Input => Preview::Input {
                placeholder: props.placeholder.clone().unwrap_or_else(|| "Enter text".into()),
            },
            ComponentKind::Dropdown => Preview::Dropdown {
                options: props
                    .options
                    .clone()
                    .unwrap_or_else(|| vec!["Option 1".into(), "Option 2".into()]),
            },
            ComponentKind::Button => Preview::Button {
                text: props.text.clone().unwrap_or_else(|| "Button".into()),
                color: props.color.clone(),
            },
        }
    }
}

#[component]
pub fn ComponentPreview(instance: ComponentInstance) -> Element {
    match Preview::of(&instance) {
        Preview::Heading { text, color } => {
            let color = color.unwrap_or_default();
            rsx! {
                h2 { style: "color: {color}; font-size: 24px; font-weight: bold; margin: 0 0 16px 0;", "{text}" }
            }
        }
        Preview::Input { placeholder } => rsx! {
            input {
                r#type: "text",
                placeholder: "{placeholder}",
                style: "width: 100%; padding: 8px; border: 1px solid #ccc; border-radius: 4px; margin-bottom: 16px;",
            }
        },
        Preview::Dropdown { options } => rsx! {
            select { style: "width: 100%; padding: 8px; border: 1px solid #ccc; border-radius: 4px; margin-bottom: 16px;",
                for (i, label) in options.iter().enumerate() {
                    option { key: "{i}", "{label}" }
                }
            }
        },
        Preview::Button { text, color } => {
            let color = color.unwrap_or_default();
            rsx! {
                button {
                    style: "background-color: {color}; color: white; padding: 8px 16px; border: none; border-radius: 4px; margin-bottom: 16px;",
                    "{text}"
                }
            }
        }
    }
}
