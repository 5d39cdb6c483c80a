//! Zentrale Konfiguration der AR-Engine.
//!
//! `ArOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Session ─────────────────────────────────────────────────────────

/// Frames Wartezeit auf den Surface-Remount, bevor die Session-Anfrage
/// abgeschickt wird. Best-Effort-Fallback, falls die Runtime kein
/// `SurfaceReady`-Ereignis liefert (Double-Frame-Yield).
pub const REMOUNT_WAIT_FRAMES: u32 = 2;
/// Frame-Intervall des Liveness-Polls (Fallback zur Push-Benachrichtigung).
pub const LIVENESS_POLL_INTERVAL_FRAMES: u32 = 30;

// ── Reticle ─────────────────────────────────────────────────────────

/// Innenradius des Platzierungs-Reticles in Welteinheiten.
pub const RETICLE_INNER_RADIUS: f32 = 0.08;
/// Außenradius des Platzierungs-Reticles in Welteinheiten.
pub const RETICLE_OUTER_RADIUS: f32 = 0.1;
/// Farbe des Platzierungs-Reticles (RGBA: Grün, halbtransparent).
pub const RETICLE_COLOR: [f32; 4] = [0.13, 0.77, 0.37, 0.6];

// ── Selektion ───────────────────────────────────────────────────────

/// Farbe für den selektierten Block (RGBA: Magenta).
pub const SELECTION_HIGHLIGHT_COLOR: [f32; 4] = [1.0, 0.0, 1.0, 1.0];

/// Alle zur Laufzeit änderbaren Engine-Optionen.
/// Wird als `ar_block_editor.toml` neben der Host-Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArOptions {
    // ── Session ─────────────────────────────────────────────────
    /// Frames Remount-Wartezeit vor der Session-Anfrage (Fallback)
    pub remount_wait_frames: u32,
    /// Frame-Intervall des Liveness-Polls
    pub liveness_poll_interval_frames: u32,

    // ── Reticle ─────────────────────────────────────────────────
    /// Innenradius des Reticles in Welteinheiten
    pub reticle_inner_radius: f32,
    /// Außenradius des Reticles in Welteinheiten
    pub reticle_outer_radius: f32,
    /// Farbe des Reticles
    pub reticle_color: [f32; 4],

    // ── Selektion ───────────────────────────────────────────────
    /// Hervorhebungsfarbe für den selektierten Block
    #[serde(default = "default_selection_highlight_color")]
    pub selection_highlight_color: [f32; 4],
}

impl Default for ArOptions {
    fn default() -> Self {
        Self {
            remount_wait_frames: REMOUNT_WAIT_FRAMES,
            liveness_poll_interval_frames: LIVENESS_POLL_INTERVAL_FRAMES,

            reticle_inner_radius: RETICLE_INNER_RADIUS,
            reticle_outer_radius: RETICLE_OUTER_RADIUS,
            reticle_color: RETICLE_COLOR,

            selection_highlight_color: SELECTION_HIGHLIGHT_COLOR,
        }
    }
}

/// Serde-Default für `selection_highlight_color` (Abwärtskompatibilität
/// bestehender TOML-Dateien).
fn default_selection_highlight_color() -> [f32; 4] {
    SELECTION_HIGHLIGHT_COLOR
}

impl ArOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Host-Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("ar_block_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("ar_block_editor.toml")
    }
}
