//! Hauptzustand der Engine.

use crate::app::CommandLog;
use crate::core::PlacedBlockStore;
use crate::shared::ArOptions;

use super::{GestureState, SessionState};

/// Hauptzustand der AR-Engine.
///
/// Explizit besessener Zustand, per Referenz an Controller, Handler und
/// Render-Snapshot-Builder gereicht; kein ambienter globaler Zustand.
pub struct AppState {
    /// Platzierte Blöcke samt Modus, Selektion und Hit-Position
    pub placed: PlacedBlockStore,
    /// Session-Lifecycle-Zustand
    pub session: SessionState,
    /// Zwei-Finger-Gesten-Baseline
    pub gesture: GestureState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Timing, Reticle, Farben)
    pub options: ArOptions,
}

impl AppState {
    /// Erstellt einen neuen, leeren Engine-State.
    pub fn new() -> Self {
        Self {
            placed: PlacedBlockStore::new(),
            session: SessionState::new(),
            gesture: GestureState::new(),
            command_log: CommandLog::new(),
            options: ArOptions::default(),
        }
    }

    /// Gibt die Anzahl der platzierten Blöcke zurück (für UI-Anzeige).
    pub fn placed_count(&self) -> usize {
        self.placed.len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
