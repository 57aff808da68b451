use dioxus::prelude::*;
use qrcraft_io::GeneratorPanel;

fn main() {
    console_error_panic_hook::set_once();
    dioxus::launch(app);
}

/// Root application component: the static page shell around the
/// generator panel.
///
/// Holds no state of its own; everything mutable lives inside
/// [`GeneratorPanel`].
fn app() -> Element {
    rsx! {
        // Tailwind CSS utilities, compiled by build.rs via npx @tailwindcss/cli
        // (empty when Node.js is unavailable at build time).
        style { dangerous_inner_html: include_str!(env!("TAILWIND_CSS_PATH")) }

        // Base theme variables and fallback layout.
        style { dangerous_inner_html: include_str!("../assets/theme.css") }

        div { class: "min-h-screen bg-(--bg) text-(--text)",
            main { class: "container mx-auto px-4 py-12",
                // Header
                header { class: "text-center mb-12",
                    h1 { class: "text-4xl sm:text-5xl font-bold mb-4",
                        "QR Code Generator"
                    }
                    p { class: "text-lg text-(--muted) max-w-md mx-auto",
                        "Create custom QR codes instantly. Enter any URL or text and download your QR code in seconds."
                    }
                }

                GeneratorPanel {}

                // Footer
                footer { class: "text-center mt-16 text-sm text-(--muted)",
                    p { "Built with Rust and Dioxus" }
                }
            }
        }
    }
}
