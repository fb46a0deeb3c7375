//! Document fullscreen toggling.

/// Whether the document currently has a fullscreen element.
pub fn is_fullscreen() -> bool {
    gloo::utils::document().fullscreen_element().is_some()
}

/// Enters fullscreen on the whole document, or leaves it.
///
/// The resulting `fullscreenchange` event drives the viewer resize.
pub fn toggle_fullscreen() {
    let document = gloo::utils::document();
    if is_fullscreen() {
        document.exit_fullscreen();
        return;
    }
    let Some(root) = document.document_element() else {
        return;
    };
    if let Err(e) = root.request_fullscreen() {
        tracing::warn!("[fullscreen] request rejected: {:?}", e);
    }
}
