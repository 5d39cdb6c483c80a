//! Application-Layer: Controller, State, Events und Handler.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod render_scene;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Engine (Szene, Session, Gesten).
pub mod state;

pub use crate::core::{ArMode, PlacedBlockStore};
pub use crate::shared::RenderScene;
pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use render_scene::build as build_render_scene;
pub use state::{AppState, GestureState, SessionPhase, SessionState};
