//! Export format selection buttons.

use dioxus::prelude::*;
use qrcraft_render::ExportFormat;

/// Props for the [`FormatPicker`] component.
#[derive(Props, Clone, PartialEq)]
pub struct FormatPickerProps {
    /// Currently selected format.
    selected: ExportFormat,
    /// Fired with the clicked format.
    on_select: EventHandler<ExportFormat>,
}

/// A row of toggle buttons, one per [`ExportFormat`], plus a hint line
/// describing what the selected format downloads.
#[component]
pub fn FormatPicker(props: FormatPickerProps) -> Element {
    let selected = props.selected;
    let on_select = props.on_select;
    let hint = selected.hint();

    rsx! {
        div { class: "space-y-3",
            label { class: "block text-sm font-medium text-[var(--text-heading)]",
                "Export Format"
            }
            div { class: "grid grid-cols-2 sm:grid-cols-4 gap-3",
                for format in ExportFormat::ALL {
                    button {
                        key: "{format}",
                        class: if format == selected {
                            "py-3 px-4 rounded-lg font-medium text-sm bg-[var(--btn-primary)] text-white shadow-md"
                        } else {
                            "py-3 px-4 rounded-lg font-medium text-sm bg-[var(--surface-muted)] text-[var(--text)] hover:bg-[var(--surface-active)]"
                        },
                        aria_pressed: format == selected,
                        onclick: move |_| on_select.call(format),
                        {format.label()}
                    }
                }
            }
            p { class: "text-xs text-[var(--muted)]", "{hint}" }
        }
    }
}
