pub mod animator;
pub mod radar;
pub mod surface;

pub use animator::ChartAnimator;
pub use radar::{ChartSpec, RadarStyle, draw_radar};
pub use surface::CanvasSurface;
