//! Handler für Zwei-Finger-Gesten-Operationen.

use crate::app::AppState;
use crate::core::TouchPair;

/// Multipliziert die Skalierung des Blocks mit dem Pinch-Verhältnis.
/// Der Store klemmt das Ergebnis auf den gültigen Bereich.
pub fn scale_block(state: &mut AppState, id: u64, ratio: f32) {
    state.placed.scale_by(id, ratio);
}

/// Addiert das Rotations-Delta auf die Y-Rotation des Blocks.
pub fn rotate_block(state: &mut AppState, id: u64, delta: f32) {
    state.placed.rotate_y(id, delta);
}

/// Setzt die Zwei-Finger-Baseline auf das aktuelle Touch-Paar.
pub fn set_baseline(state: &mut AppState, touches: TouchPair) {
    state.gesture.baseline = Some(touches);
}

/// Verwirft die Zwei-Finger-Baseline.
pub fn clear_baseline(state: &mut AppState) {
    state.gesture.baseline = None;
}
