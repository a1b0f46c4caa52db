//! User interface - dashboard on a 320×240 TFT.
//!
//! ## Components
//!
//! - **Canvas**: primitive drawing seam, adapted to `embedded-graphics`
//! - **Layout**: fixed pixel geometry of every screen region
//! - **Dashboard**: change-gated renderer driven by the controller's
//!   per-tick [`Redraw`](crate::controller::Redraw) request

pub mod canvas;
pub mod dashboard;
pub mod layout;

pub use canvas::{Canvas, Color, GraphicsCanvas};
pub use dashboard::Dashboard;
