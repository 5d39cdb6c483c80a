/// Application State
///
/// Dieses Modul verwaltet den Zustand der Engine (Szene, Session, Gesten).
mod app_state;
mod gesture;
mod session;

pub use app_state::AppState;
pub use gesture::GestureState;
pub use session::{SessionPhase, SessionState};
