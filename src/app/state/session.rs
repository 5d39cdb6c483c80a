//! Session-Lifecycle-Zustand (Idle → Starting → Active) mit Epoch-Guard.

use crate::runtime::{SessionEpoch, SessionId};

/// Phase der AR-Session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Keine Session aktiv oder angefragt
    Idle,
    /// Session angefordert; wartet auf Surface-Remount bzw. Runtime-Antwort
    Starting {
        /// Verbleibende Frames bis zum Ablauf der Remount-Wartezeit
        remount_frames_left: u32,
        /// Ob die Anfrage bereits an die Runtime abgeschickt wurde
        request_sent: bool,
    },
    /// Session läuft; Hit-Tests und Touch-Events fließen
    Active {
        /// Die geöffnete Runtime-Session
        session: SessionId,
        /// Frames seit dem letzten Liveness-Poll
        frames_since_liveness_poll: u32,
    },
}

/// Zustand des Session-Lifecycle-Managers.
#[derive(Debug)]
pub struct SessionState {
    /// Aktuelle Phase
    pub phase: SessionPhase,
    /// Epoch des aktuellen (bzw. letzten) Session-Versuchs.
    /// Ergebnisse und Timer eines überholten Epochs bleiben wirkungslos.
    pub epoch: SessionEpoch,
    /// Letzter Session-Start-Fehler (Runtime-Begründung) für die UI
    pub last_error: Option<String>,
}

impl SessionState {
    /// Erstellt den Ausgangszustand (Idle, Epoch 0).
    pub fn new() -> Self {
        Self {
            phase: SessionPhase::Idle,
            epoch: 0,
            last_error: None,
        }
    }

    /// Ob aktuell eine Session aktiv ist.
    pub fn is_active(&self) -> bool {
        matches!(self.phase, SessionPhase::Active { .. })
    }

    /// Die aktive Runtime-Session, falls vorhanden.
    pub fn active_session(&self) -> Option<SessionId> {
        match self.phase {
            SessionPhase::Active { session, .. } => Some(session),
            _ => None,
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
