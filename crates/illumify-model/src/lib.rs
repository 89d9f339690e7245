pub mod color;
pub mod error;
pub mod settings;
pub mod theme;

pub use color::{Hsla, Hsv, Rgba};
pub use error::{ModelError, Result};
pub use settings::{CustomSiteTheme, TabInfo, UserSettings};
pub use theme::{ColorCorrectionType, ColorblindnessType, FilterConfig, FilterMode, ThemeEngine};
