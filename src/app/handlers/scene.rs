//! Handler für Szenen-Operationen (Platzierung, Selektion, Modus).

use glam::Vec3;

use crate::app::AppState;
use crate::core::ArMode;

/// Platziert einen Block auf der Hit-Position und selektiert ihn.
pub fn place_block(state: &mut AppState, definition_id: &str, position: Vec3) {
    let id = state.placed.place(definition_id, position);
    log::info!("Block platziert: id={id}, definition={definition_id}, position={position}");
}

/// Setzt die Selektion (None = deselektieren).
pub fn select(state: &mut AppState, id: Option<u64>) {
    state.placed.select(id);
}

/// Löscht einen Block; eine darauf zeigende Selektion wird geleert.
pub fn delete(state: &mut AppState, id: u64) {
    state.placed.delete(id);
    log::info!("Block gelöscht: id={id}");
}

/// Entfernt alle platzierten Blöcke.
pub fn clear_all(state: &mut AppState) {
    let count = state.placed.len();
    state.placed.clear_all();
    if count > 0 {
        log::info!("Szene geleert ({count} Blöcke entfernt)");
    }
}

/// Wechselt den Interaktionsmodus.
pub fn set_mode(state: &mut AppState, mode: ArMode) {
    state.placed.set_mode(mode);
    log::debug!("Interaktionsmodus: {mode:?}");
}

/// Schaltet einen Katalog-Eintrag für künftige Platzierungen scharf.
pub fn set_active_definition(state: &mut AppState, id: Option<String>) {
    state.placed.set_active_definition(id);
}
