//! The generator panel: owns the generator state and the export button.

use std::rc::Rc;

use dioxus::prelude::*;
use qrcraft_render::{Artifact, GeneratorState};

use super::controls::{render_color_field, render_slider};
use super::format_picker::FormatPicker;
use super::preview::QrPreview;
use crate::download;

/// Text input, live preview, size and color controls, format picker, and
/// download button.
///
/// All mutable state lives in one [`GeneratorState`] signal owned by this
/// component and written only by its own input handlers.  The artifact
/// is re-rendered synchronously from that state on every change.
#[component]
pub fn GeneratorPanel() -> Element {
    let mut state = use_signal(GeneratorState::default);
    let mut export_error = use_signal(|| Option::<String>::None);

    let snapshot = state();
    let rendered = qrcraft_render::render_state(&snapshot).map(Rc::new);
    let artifact: Option<Rc<Artifact>> = rendered.as_ref().ok().cloned();
    let can_export = snapshot.can_export();
    let format = snapshot.export_format;
    let format_label = format.label();

    let download_click = move |_| {
        let timestamp = qrcraft_export::timestamp::now_iso8601();
        let outcome = qrcraft_export::export(&state.peek(), artifact.as_deref(), &timestamp);
        match outcome {
            Ok(Some(file)) => match download::download_file(&file) {
                Ok(()) => export_error.set(None),
                Err(e) => export_error.set(Some(format!("Download failed: {e}"))),
            },
            // Empty content or no artifact: nothing to download.
            Ok(None) => {}
            Err(e) => export_error.set(Some(format!("Export failed: {e}"))),
        }
    };

    let preview = match rendered {
        Ok(artifact) => rsx! {
            QrPreview {
                artifact: artifact,
                background: snapshot.background_color.clone(),
            }
        },
        Err(e) => rsx! {
            div { class: "bg-(--error-bg) border border-(--error-border) rounded p-3",
                p { class: "text-(--text-error) text-sm", "{e}" }
            }
        },
    };

    let content = snapshot.content.clone();
    let placeholder = GeneratorState::DEFAULT_CONTENT;
    let enabled_class = "w-full py-4 px-6 bg-[var(--btn-primary)] hover:bg-[var(--btn-primary-hover)] text-white font-semibold rounded-xl transition-colors shadow-lg cursor-pointer";
    let disabled_class = "w-full py-4 px-6 bg-[var(--btn-disabled)] text-[var(--text-disabled)] font-semibold rounded-xl cursor-not-allowed";

    rsx! {
        div { class: "w-full max-w-2xl mx-auto",
            div { class: "bg-[var(--surface)] rounded-2xl shadow-xl p-8 space-y-8",
                // Content input
                div { class: "space-y-2",
                    label { r#for: "qr-text",
                        class: "block text-sm font-medium text-[var(--text-heading)]",
                        "Enter URL or Text"
                    }
                    input {
                        r#type: "text",
                        id: "qr-text",
                        value: "{content}",
                        placeholder: "{placeholder}",
                        class: "w-full px-4 py-3 rounded-lg border border-[var(--border)] bg-[var(--surface)] outline-none",
                        oninput: move |e| state.write().set_content(e.value()),
                    }
                }

                // Preview
                {preview}

                // Customization
                div { class: "grid grid-cols-1 sm:grid-cols-3 gap-6",
                    {render_slider(
                        "qr-size",
                        "Size",
                        snapshot.size,
                        GeneratorState::MIN_SIZE,
                        GeneratorState::MAX_SIZE,
                        move |v| {
                            let mut state = state;
                            state.write().set_size(v);
                        },
                    )}
                    {render_color_field(
                        "qr-fg",
                        "QR Color",
                        &snapshot.foreground_color,
                        move |v| {
                            let mut state = state;
                            state.write().set_foreground_color(v);
                        },
                    )}
                    {render_color_field(
                        "qr-bg",
                        "Background",
                        &snapshot.background_color,
                        move |v| {
                            let mut state = state;
                            state.write().set_background_color(v);
                        },
                    )}
                }

                FormatPicker {
                    selected: format,
                    on_select: move |f| state.write().set_export_format(f),
                }

                if let Some(ref err) = export_error() {
                    p { class: "text-[var(--text-error)] text-sm", "{err}" }
                }

                button {
                    class: if can_export { enabled_class } else { disabled_class },
                    disabled: !can_export,
                    onclick: download_click,
                    "Download as {format_label}"
                }
            }
        }
    }
}
