//! Block-Katalog: benannte Definitionen aus Form, Farbe und Größe.
//!
//! Der Katalog ist aus Sicht der Engine ein read-only Kollaborateur.
//! CRUD und Persistenz der Definitionen liegen außerhalb dieses Crates;
//! die Engine referenziert Definitionen nur per Id.

use serde::{Deserialize, Serialize};

/// Grundform eines Blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockShape {
    Cube,
    Sphere,
    Cylinder,
}

/// Abmessungen eines Blocks in Metern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockSize {
    /// X-Achse
    pub width: f32,
    /// Y-Achse
    pub height: f32,
    /// Z-Achse
    pub depth: f32,
}

/// Eine Block-Definition (im Einstellungs-Screen des Hosts erstellt).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockDefinition {
    /// Eindeutige Id
    pub id: String,
    /// Anzeigename
    pub name: String,
    /// Grundform
    pub shape: BlockShape,
    /// Farbe als RGBA
    pub color: [f32; 4],
    /// Abmessungen
    pub size: BlockSize,
}

/// Read-only Zugriff auf den Block-Katalog.
pub trait BlockCatalog {
    /// Geordnete Liste aller Definitionen.
    fn blocks(&self) -> &[BlockDefinition];

    /// Lookup einer Definition per Id.
    fn get(&self, id: &str) -> Option<&BlockDefinition> {
        self.blocks().iter().find(|b| b.id == id)
    }
}

/// Einfacher In-Memory-Katalog für Tests und Host-Einbettung.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    blocks: Vec<BlockDefinition>,
}

impl InMemoryCatalog {
    /// Erstellt einen Katalog aus den übergebenen Definitionen.
    pub fn new(blocks: Vec<BlockDefinition>) -> Self {
        Self { blocks }
    }

    /// Erstellt den Standard-Katalog mit drei Seed-Blöcken.
    pub fn with_seed_blocks() -> Self {
        Self::new(vec![
            BlockDefinition {
                id: "seed-red-cube".to_string(),
                name: "Red Cube".to_string(),
                shape: BlockShape::Cube,
                color: [0.94, 0.27, 0.27, 1.0],
                size: BlockSize {
                    width: 0.2,
                    height: 0.2,
                    depth: 0.2,
                },
            },
            BlockDefinition {
                id: "seed-blue-cylinder".to_string(),
                name: "Blue Cylinder".to_string(),
                shape: BlockShape::Cylinder,
                color: [0.23, 0.51, 0.96, 1.0],
                size: BlockSize {
                    width: 0.15,
                    height: 0.3,
                    depth: 0.15,
                },
            },
            BlockDefinition {
                id: "seed-green-sphere".to_string(),
                name: "Green Sphere".to_string(),
                shape: BlockShape::Sphere,
                color: [0.13, 0.77, 0.37, 1.0],
                size: BlockSize {
                    width: 0.25,
                    height: 0.25,
                    depth: 0.25,
                },
            },
        ])
    }
}

impl BlockCatalog for InMemoryCatalog {
    fn blocks(&self) -> &[BlockDefinition] {
        &self.blocks
    }
}
