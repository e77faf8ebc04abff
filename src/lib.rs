//! Knot-Screensaver Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{AppCommand, AppController, AppIntent, AppState, EditorTool};
pub use core::{smoother, Bounds, ControlPoint, CurveError, PointSet};
pub use shared::{RenderScene, SaverOptions};
