//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

use glam::{Vec2, Vec3};

use crate::core::{ArMode, TouchPair};

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus Host/Touch/Runtime ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// AR-Session starten ("Enter AR")
    EnterArRequested,
    /// AR-Session beenden ("Exit AR")
    ExitArRequested,
    /// Ein Render-Frame ist vergangen; trägt die Hit-Test-Ergebnisse
    /// dieses Frames (Welt-Positionen, erste zählt)
    FrameTicked { hits: Vec<Vec3> },
    /// Touch-Start mit allen aktuell aktiven Touch-Punkten
    TouchStarted { touches: Vec<Vec2> },
    /// Touch-Move mit allen aktuell aktiven Touch-Punkten
    TouchMoved { touches: Vec<Vec2> },
    /// Touch-Ende mit den verbleibenden aktiven Touch-Punkten
    TouchEnded { touches: Vec<Vec2> },
    /// Interaktionsmodus wechseln
    SetModeRequested { mode: ArMode },
    /// Katalog-Eintrag für künftige Platzierungen scharfschalten
    ArmDefinitionRequested { id: Option<String> },
    /// Platzierten Block per Renderer-Pick selektieren (None = deselektieren)
    PlacedPickRequested { id: Option<u64> },
    /// Selektierten Block löschen
    DeleteSelectedRequested,
    /// Alle platzierten Blöcke entfernen
    ClearAllRequested,
}

/// Mutierende Commands, vom Controller ausgeführt.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // === Session-Lifecycle ===
    /// Neuen Session-Versuch beginnen (Epoch hochzählen, Szene zurücksetzen)
    StartSession,
    /// Aktive Session beenden und Szene zurücksetzen
    EndSession,
    /// Session-Zustandsmaschine um einen Frame weiterschalten
    AdvanceSession,
    /// Hit-Test-Probe dieses Frames übernehmen (None = keine Treffer,
    /// letzte Position bleibt erhalten)
    SampleHitTest { position: Option<Vec3> },

    // === Szene ===
    /// Block auf der Hit-Position platzieren und selektieren
    PlaceBlock {
        definition_id: String,
        position: Vec3,
    },
    /// Selektion setzen (None = deselektieren)
    SelectPlaced { id: Option<u64> },
    /// Block löschen (Selektion wird ggf. geleert)
    DeletePlaced { id: u64 },
    /// Alle Blöcke entfernen
    ClearPlaced,
    /// Interaktionsmodus ersetzen
    SetMode { mode: ArMode },
    /// Scharfgeschalteten Katalog-Eintrag setzen
    SetActiveDefinition { id: Option<String> },

    // === Gesten ===
    /// Skalierung des Blocks mit dem Pinch-Verhältnis multiplizieren
    ScaleSelected { id: u64, ratio: f32 },
    /// Rotations-Delta auf die Y-Rotation des Blocks addieren
    RotateSelected { id: u64, delta: f32 },
    /// Zwei-Finger-Baseline auf das aktuelle Touch-Paar setzen
    SetGestureBaseline { touches: TouchPair },
    /// Zwei-Finger-Baseline verwerfen
    ClearGestureBaseline,
}
