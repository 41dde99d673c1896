pub mod config;
pub mod error;
pub mod geometry;
pub mod log;
pub mod model;
pub mod native;
pub mod process;
pub mod service;
pub mod window;

pub use error::{Error, NativeError, Result};
pub use geometry::{ScreenRect, WindowGeometry};
pub use model::{ProcessRecord, WindowHandle, WindowQueryResult};
pub use native::{PositionFlags, WindowApi};
pub use process::ProcessSource;
pub use service::{Engine, ProcessManager, WindowManager, WindowService};
