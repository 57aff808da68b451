//! Labeled input helpers shared by the generator panel.

use dioxus::prelude::*;

/// Render a labeled integer range slider with the current value shown
/// next to the label (e.g. `Size: 256px`).
pub(super) fn render_slider(
    id: &str,
    label: &str,
    value: u32,
    min: u32,
    max: u32,
    on_input: impl Fn(u32) + 'static,
) -> Element {
    let id = id.to_string();
    let label = label.to_string();

    rsx! {
        div { class: "space-y-2",
            label { r#for: "{id}",
                class: "block text-sm font-medium text-[var(--text-heading)]",
                "{label}: {value}px"
            }
            input {
                r#type: "range",
                id: "{id}",
                min: "{min}",
                max: "{max}",
                value: "{value}",
                class: "w-full accent-[var(--btn-primary)] cursor-pointer",
                oninput: move |e| {
                    match e.value().parse::<u32>() {
                        Ok(v) => on_input(v),
                        Err(err) => {
                            web_sys::console::warn_1(
                                &format!("slider parse failure: {err:?} from {:?}", e.value())
                                    .into(),
                            );
                        }
                    }
                },
            }
        }
    }
}

/// Render a color control: a native color picker bound to the same
/// value as a free-text field.
///
/// The text field accepts any string; the picker only understands
/// `#rrggbb`, so it shows black while the text holds anything else.
pub(super) fn render_color_field(
    id: &str,
    label: &str,
    value: &str,
    on_change: impl Fn(String) + Clone + 'static,
) -> Element {
    let id = id.to_string();
    let label = label.to_string();
    let value = value.to_string();
    let picker_value = if is_long_hex(&value) {
        value.clone()
    } else {
        "#000000".to_owned()
    };
    let on_text = on_change.clone();

    rsx! {
        div { class: "space-y-2",
            label { r#for: "{id}",
                class: "block text-sm font-medium text-[var(--text-heading)]",
                "{label}"
            }
            div { class: "flex items-center gap-3",
                input {
                    r#type: "color",
                    aria_label: "{label} picker",
                    value: "{picker_value}",
                    class: "w-12 h-10 rounded-lg border border-[var(--border)] cursor-pointer",
                    oninput: move |e| on_change(e.value()),
                }
                input {
                    r#type: "text",
                    id: "{id}",
                    value: "{value}",
                    class: "flex-1 px-3 py-2 rounded-lg border border-[var(--border)] bg-[var(--surface)] text-sm font-mono",
                    oninput: move |e| on_text(e.value()),
                }
            }
        }
    }
}

/// `<input type="color">` only accepts the `#rrggbb` form.
fn is_long_hex(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|hex| hex.len() == 6 && hex.bytes().all(|b| b.is_ascii_hexdigit()))
}
