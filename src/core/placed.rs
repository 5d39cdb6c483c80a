//! Platzierte Blöcke: der session-lokale Zustand der AR-Szene.
//!
//! `PlacedBlockStore` besitzt die platzierten Blöcke exklusiv und ist die
//! einzige Quelle der Wahrheit für Modus, Selektion, scharfgeschalteten
//! Katalog-Eintrag und letzte Hit-Test-Position. Mutationen laufen
//! ausschließlich über die Kommando-Methoden; UI-Schichten lesen nur.

use glam::Vec3;
use indexmap::IndexMap;

/// Interaktionsmodus innerhalb der AR-Session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArMode {
    /// Tap platziert den aktiven Block auf der Hit-Position
    #[default]
    Place,
    /// Reserviert: Verschieben (derzeit ohne Touch-Belegung)
    Move,
    /// Zwei-Finger-Pinch skaliert den selektierten Block
    Scale,
    /// Zwei-Finger-Drehung rotiert den selektierten Block um Y
    Rotate,
}

/// Ein in der Szene platzierter Block.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedBlock {
    /// Eindeutige Id (pro Store monoton vergeben)
    pub id: u64,
    /// Schwache Referenz auf die Block-Definition; kann dangeln, wenn der
    /// Katalog-Eintrag gelöscht wurde (dann nicht renderbar, nie ein Fehler)
    pub definition_id: String,
    /// Welt-Position (Hit-Test-Position zum Platzierungszeitpunkt)
    pub position: Vec3,
    /// Euler-Rotation in Radiant; nur die Y-Komponente wird mutiert
    pub rotation: Vec3,
    /// Uniformer Skalierungsfaktor, stets in `[SCALE_MIN, SCALE_MAX]`
    pub scale: f32,
}

impl PlacedBlock {
    /// Minimaler uniformer Skalierungsfaktor.
    pub const SCALE_MIN: f32 = 0.1;
    /// Maximaler uniformer Skalierungsfaktor.
    pub const SCALE_MAX: f32 = 5.0;
}

/// Partielles Update eines platzierten Blocks.
///
/// Nicht gesetzte Felder bleiben unverändert; `scale` wird beim Schreiben
/// auf `[SCALE_MIN, SCALE_MAX]` geklemmt.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlacedBlockUpdate {
    pub position: Option<Vec3>,
    pub rotation: Option<Vec3>,
    pub scale: Option<f32>,
}

/// Besitzt die platzierten Blöcke samt Modus, Selektion, aktivem
/// Katalog-Eintrag und letzter Hit-Test-Position.
///
/// Alle Kommandos sind total: unbekannte Ids sind No-ops, kein Kommando
/// schlägt fehl.
#[derive(Debug, Default)]
pub struct PlacedBlockStore {
    /// Geordnete Map für deterministische Render-Reihenfolge
    blocks: IndexMap<u64, PlacedBlock>,
    selected_id: Option<u64>,
    mode: ArMode,
    active_definition_id: Option<String>,
    hit_position: Option<Vec3>,
    next_id: u64,
}

impl PlacedBlockStore {
    /// Erstellt einen leeren Store (Modus: Place).
    pub fn new() -> Self {
        Self::default()
    }

    // ── Lese-Zugriffe (Snapshot-Reads für Rendering/UI) ─────────────

    /// Iterator über alle platzierten Blöcke in Platzierungs-Reihenfolge.
    pub fn blocks(&self) -> impl Iterator<Item = &PlacedBlock> {
        self.blocks.values()
    }

    /// Lookup eines platzierten Blocks per Id.
    pub fn get(&self, id: u64) -> Option<&PlacedBlock> {
        self.blocks.get(&id)
    }

    /// Anzahl der platzierten Blöcke.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Ob keine Blöcke platziert sind.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Id des aktuell selektierten Blocks (höchstens einer).
    pub fn selected_id(&self) -> Option<u64> {
        self.selected_id
    }

    /// Der aktuell selektierte Block.
    pub fn selected(&self) -> Option<&PlacedBlock> {
        self.selected_id.and_then(|id| self.blocks.get(&id))
    }

    /// Aktiver Interaktionsmodus.
    pub fn mode(&self) -> ArMode {
        self.mode
    }

    /// Für die nächste Platzierung scharfgeschalteter Katalog-Eintrag.
    pub fn active_definition_id(&self) -> Option<&str> {
        self.active_definition_id.as_deref()
    }

    /// Letzte Hit-Test-Position (pro Frame extern geschrieben).
    pub fn hit_position(&self) -> Option<Vec3> {
        self.hit_position
    }

    // ── Kommandos ───────────────────────────────────────────────────

    /// Ersetzt den Interaktionsmodus bedingungslos.
    pub fn set_mode(&mut self, mode: ArMode) {
        self.mode = mode;
    }

    /// Schaltet einen Katalog-Eintrag für künftige Platzierungen scharf.
    pub fn set_active_definition(&mut self, id: Option<String>) {
        self.active_definition_id = id;
    }

    /// Setzt die Selektion. Existenz wird nicht geprüft; veraltete
    /// Selektionen gelöschter Blöcke räumt `delete` ab.
    pub fn select(&mut self, id: Option<u64>) {
        self.selected_id = id;
    }

    /// Schreibt die aktuelle Hit-Test-Position.
    pub fn set_hit_position(&mut self, position: Option<Vec3>) {
        self.hit_position = position;
    }

    /// Platziert einen neuen Block und macht ihn zur Selektion.
    ///
    /// Rotation startet bei Null, Skalierung bei 1. Ob `definition_id`
    /// im Katalog auflösbar ist, wird nicht geprüft (Rendering überspringt
    /// dangelnde Referenzen).
    pub fn place(&mut self, definition_id: &str, position: Vec3) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.blocks.insert(
            id,
            PlacedBlock {
                id,
                definition_id: definition_id.to_string(),
                position,
                rotation: Vec3::ZERO,
                scale: 1.0,
            },
        );
        self.selected_id = Some(id);
        id
    }

    /// Merged ein partielles Update in den passenden Block.
    /// No-op bei unbekannter Id; `scale` wird geklemmt.
    pub fn update(&mut self, id: u64, update: PlacedBlockUpdate) {
        let Some(block) = self.blocks.get_mut(&id) else {
            return;
        };
        if let Some(position) = update.position {
            block.position = position;
        }
        if let Some(rotation) = update.rotation {
            block.rotation = rotation;
        }
        if let Some(scale) = update.scale {
            block.scale = scale.clamp(PlacedBlock::SCALE_MIN, PlacedBlock::SCALE_MAX);
        }
    }

    /// Multipliziert die Skalierung des Blocks mit `ratio` (geklemmt).
    pub fn scale_by(&mut self, id: u64, ratio: f32) {
        let Some(block) = self.blocks.get_mut(&id) else {
            return;
        };
        block.scale = (block.scale * ratio).clamp(PlacedBlock::SCALE_MIN, PlacedBlock::SCALE_MAX);
    }

    /// Addiert `delta` auf die Y-Rotation des Blocks (unbeschränkt).
    pub fn rotate_y(&mut self, id: u64, delta: f32) {
        let Some(block) = self.blocks.get_mut(&id) else {
            return;
        };
        block.rotation.y += delta;
    }

    /// Entfernt einen Block; war er selektiert, wird die Selektion geleert.
    pub fn delete(&mut self, id: u64) {
        self.blocks.shift_remove(&id);
        if self.selected_id == Some(id) {
            self.selected_id = None;
        }
    }

    /// Leert Blöcke, Selektion und Hit-Position (idempotent).
    /// Wird an jeder Session-Grenze aufgerufen.
    pub fn clear_all(&mut self) {
        self.blocks.clear();
        self.selected_id = None;
        self.hit_position = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn place_creates_selected_block_with_defaults() {
        let mut store = PlacedBlockStore::new();

        let id = store.place("seed-red-cube", Vec3::new(0.0, 1.0, 0.0));

        assert_eq!(store.len(), 1);
        let block = store.get(id).expect("Block sollte existieren");
        assert_eq!(block.definition_id, "seed-red-cube");
        assert_eq!(block.position, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(block.rotation, Vec3::ZERO);
        assert_eq!(block.scale, 1.0);
        assert_eq!(store.selected_id(), Some(id));
    }

    #[test]
    fn placed_ids_stay_unique_after_delete() {
        let mut store = PlacedBlockStore::new();

        let first = store.place("a", Vec3::ZERO);
        store.delete(first);
        let second = store.place("a", Vec3::ZERO);

        assert_ne!(first, second);
    }

    #[test]
    fn update_merges_partial_fields() {
        let mut store = PlacedBlockStore::new();
        let id = store.place("a", Vec3::ZERO);

        store.update(
            id,
            PlacedBlockUpdate {
                position: Some(Vec3::new(1.0, 2.0, 3.0)),
                ..Default::default()
            },
        );

        let block = store.get(id).unwrap();
        assert_eq!(block.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(block.rotation, Vec3::ZERO);
        assert_eq!(block.scale, 1.0);
    }

    #[test]
    fn update_clamps_scale_to_bounds() {
        let mut store = PlacedBlockStore::new();
        let id = store.place("a", Vec3::ZERO);

        store.update(
            id,
            PlacedBlockUpdate {
                scale: Some(100.0),
                ..Default::default()
            },
        );
        assert_eq!(store.get(id).unwrap().scale, PlacedBlock::SCALE_MAX);

        store.update(
            id,
            PlacedBlockUpdate {
                scale: Some(0.0001),
                ..Default::default()
            },
        );
        assert_eq!(store.get(id).unwrap().scale, PlacedBlock::SCALE_MIN);
    }

    #[test]
    fn update_with_unknown_id_is_noop() {
        let mut store = PlacedBlockStore::new();
        store.place("a", Vec3::ZERO);

        store.update(
            9999,
            PlacedBlockUpdate {
                scale: Some(3.0),
                ..Default::default()
            },
        );

        assert_eq!(store.blocks().next().unwrap().scale, 1.0);
    }

    #[test]
    fn scale_by_accumulates_and_clamps() {
        let mut store = PlacedBlockStore::new();
        let id = store.place("a", Vec3::ZERO);

        store.scale_by(id, 2.0);
        assert_eq!(store.get(id).unwrap().scale, 2.0);

        store.scale_by(id, 10.0);
        assert_eq!(store.get(id).unwrap().scale, PlacedBlock::SCALE_MAX);

        store.scale_by(id, 0.001);
        assert_eq!(store.get(id).unwrap().scale, PlacedBlock::SCALE_MIN);
    }

    #[test]
    fn rotate_y_accumulates_without_wrapping() {
        let mut store = PlacedBlockStore::new();
        let id = store.place("a", Vec3::ZERO);

        store.rotate_y(id, 4.0);
        store.rotate_y(id, 4.0);

        // Bewusst unnormalisiert: freie Rotation über 2π hinaus
        assert_eq!(store.get(id).unwrap().rotation.y, 8.0);
    }

    #[test]
    fn delete_selected_clears_selection() {
        let mut store = PlacedBlockStore::new();
        let id = store.place("a", Vec3::ZERO);

        store.delete(id);

        assert!(store.is_empty());
        assert_eq!(store.selected_id(), None);
    }

    #[test]
    fn delete_other_keeps_selection() {
        let mut store = PlacedBlockStore::new();
        let first = store.place("a", Vec3::ZERO);
        let second = store.place("b", Vec3::ZERO);

        // place selektiert den zuletzt platzierten Block
        assert_eq!(store.selected_id(), Some(second));

        store.delete(first);

        assert_eq!(store.selected_id(), Some(second));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn clear_all_is_idempotent_and_clears_hit_position() {
        let mut store = PlacedBlockStore::new();
        store.place("a", Vec3::ZERO);
        store.set_hit_position(Some(Vec3::ONE));

        store.clear_all();
        store.clear_all();

        assert!(store.is_empty());
        assert_eq!(store.selected_id(), None);
        assert_eq!(store.hit_position(), None);
    }

    #[test]
    fn selection_persists_across_mode_switches() {
        let mut store = PlacedBlockStore::new();
        let id = store.place("a", Vec3::ZERO);

        store.set_mode(ArMode::Scale);
        store.set_mode(ArMode::Rotate);

        assert_eq!(store.selected_id(), Some(id));
    }
}
