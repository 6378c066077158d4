use serde::{
    Deserialize,
    Serialize,
};
use strum::{
    Display,
    EnumIter,
    EnumString,
};

/// How the received screen-share stream is fitted into the viewer window.
///
/// Persisted as the PascalCase variant name. Anything else found in a
/// stored blob falls back to [`VideoDisplayMode::FitToWindow`] during
/// normalization.
#[derive(Debug, Default, Clone, Copy, Display, EnumIter, EnumString, Serialize, Deserialize, PartialEq, Eq)]
pub enum VideoDisplayMode {
    #[default]
    FitToWindow,
    FitWidth,
    FitHeight,
    OriginalSize,
}
