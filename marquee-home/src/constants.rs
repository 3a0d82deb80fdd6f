//! Layout and timing constants shared by the home sections.

use std::time::Duration;

/// Horizontal gap between adjacent tiles, in layout units.
pub const TILE_PADDING: f64 = 24.0;

/// How long each spotlight image stays visible before rotating.
pub const SPOTLIGHT_ROTATION_INTERVAL: Duration = Duration::from_millis(8000);
