//! Raster preview of the rendered QR code.

use std::rc::Rc;

use dioxus::prelude::*;
use qrcraft_render::Artifact;

use crate::raster;

/// Props for the [`QrPreview`] component.
#[derive(Props, Clone)]
pub struct QrPreviewProps {
    /// The rendered artifact.  Wrapped in `Rc` so diffing compares
    /// pointers instead of pixel buffers.
    artifact: Rc<Artifact>,
    /// CSS background of the surrounding container, passed through
    /// uninterpreted like the artifact colors.
    background: String,
}

impl PartialEq for QrPreviewProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.artifact, &other.artifact) && self.background == other.background
    }
}

/// Displays the artifact as an `<img>` at its native pixel size.
///
/// The image is served from a Blob URL that is revoked once the image
/// has loaded (or failed), when it is replaced by a newer render, and
/// when the component is dropped.
#[component]
pub fn QrPreview(props: QrPreviewProps) -> Element {
    let size = props.artifact.width();
    let background = props.background.clone();

    // Track the current blob URL so we can revoke it on re-render
    // (handles rapid re-renders where onload/onerror never fires on the
    // replaced <img>) and on unmount.
    let mut prev_blob_url: Signal<Option<String>> = use_signal(|| None);

    {
        let prev_blob_url = prev_blob_url;
        use_drop(move || {
            if let Some(ref url) = *prev_blob_url.peek() {
                raster::revoke_blob_url(url);
            }
        });
    }

    // Revoke the previous blob URL before creating a new one.
    if let Some(ref prev) = prev_blob_url.take() {
        raster::revoke_blob_url(prev);
    }

    let image = match raster::artifact_to_blob_url(&props.artifact) {
        Ok(url) => {
            prev_blob_url.set(Some(url.clone()));
            let url_for_error = url.clone();
            rsx! {
                img {
                    src: "{url}",
                    width: "{size}",
                    height: "{size}",
                    alt: "QR code preview",
                    onload: move |_| raster::revoke_blob_url(&url),
                    onerror: move |_| raster::revoke_blob_url(&url_for_error),
                }
            }
        }
        Err(e) => rsx! {
            p { class: "text-[var(--text-error)] text-sm",
                "Failed to display QR code: {e}"
            }
        },
    };

    rsx! {
        div {
            class: "flex justify-center p-8 rounded-xl",
            style: "background-color: {background}",
            {image}
        }
    }
}
