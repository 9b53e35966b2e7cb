pub mod config;
pub mod error;
pub mod navigation;
pub mod navigator;
pub mod scroll;
pub mod selection;

pub use config::{AppConfig, EasingType, KeyBindingOptions, ScrollConfig};
pub use error::{Error, Result};
pub use navigation::{IndexTarget, KeyOutcome, NavKey};
pub use navigator::{ListNavigator, Reconciled};
pub use scroll::{ElementGeometry, ScrollBehavior, ScrollContainer, ScrollRequest, ScrollSynchronizer};
pub use selection::{ElementLocator, Hover, SelectionState};
