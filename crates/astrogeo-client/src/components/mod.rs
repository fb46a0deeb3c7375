//! UI components for the astrogeo client.

mod controls;
mod info_panel;
mod layer_toggles;
mod layout;
mod pickers;
mod viewer_host;

pub use controls::ViewControls;
pub use info_panel::{BodyInfoPanel, SolidInfoPanel};
pub use layer_toggles::LayerToggles;
pub use layout::Layout;
pub use pickers::{BodyPicker, SolidPicker};
pub use viewer_host::ViewerHost;
