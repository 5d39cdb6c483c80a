//! Frame-übergreifender Zustand der Zwei-Finger-Gesten-Erkennung.

use crate::core::TouchPair;

/// Baseline-Tracking für Zwei-Finger-Gesten.
///
/// Die Baseline ist stets das Touch-Paar des *vorherigen* Frames, nicht
/// des Gesten-Starts: jedes Frame-Delta bleibt klein und ein Wechsel der
/// Gesten-Geschwindigkeit erzeugt keinen Sprung.
#[derive(Debug, Clone, Default)]
pub struct GestureState {
    /// Touch-Paar des vorherigen Frames; `None` solange keine
    /// Zwei-Finger-Geste läuft
    pub baseline: Option<TouchPair>,
}

impl GestureState {
    /// Erstellt den leeren Gesten-Zustand.
    pub fn new() -> Self {
        Self::default()
    }
}
