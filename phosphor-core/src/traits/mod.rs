//! Capability contracts concrete panel drivers implement

mod panel;

pub use panel::{PanelDriver, PanelError, PanelInfo};
