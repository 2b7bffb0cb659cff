use form_builder::builder::FormBuilder;

fn main() {
    // `launch` installs the default tracing subscriber for the platform.
    dioxus::launch(FormBuilder);
}
