//! Boundary zur externen AR-Runtime (Session-Objekt, Surface, Hit-Test).
//!
//! Die Engine pollt die Runtime einmal pro Frame über den
//! `AdvanceSession`-Command. Push-Benachrichtigungen (`drain_events`)
//! sind nicht über alle Runtime-Implementierungen hinweg zuverlässig;
//! als Fallback existiert deshalb der periodische Liveness-Poll über
//! `is_session_live`.

/// Monoton steigender Zähler zur Unterscheidung aufeinanderfolgender
/// Session-Versuche. Ergebnisse eines überholten Epochs sind wirkungslos.
pub type SessionEpoch = u64;

/// Id einer von der Runtime geöffneten Session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(pub u64);

/// Ereignisse, die die Runtime von sich aus liefert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEvent {
    /// Die Rendering-Surface ist nach einem Remount fertig gebunden.
    /// Verkürzt die Remount-Wartezeit vor der Session-Anfrage.
    SurfaceReady,
    /// Die Runtime hat die Session von sich aus beendet
    /// (System-UI-Exit, Geräte-Interrupt).
    SessionEnded {
        /// Die beendete Session
        session: SessionId,
    },
}

/// Abstraktion über die externe AR-Runtime.
///
/// Die Hit-Test-Ergebnisse laufen nicht über dieses Trait: der Host
/// sampelt sein Hit-Test-Subsystem pro Frame und liefert die Positionen
/// über `AppIntent::FrameTicked` an.
pub trait ArRuntime {
    /// Startet asynchron eine Session-Anfrage für den gegebenen Epoch.
    fn begin_session_request(&mut self, epoch: SessionEpoch);

    /// Pollt das Ergebnis einer laufenden Anfrage.
    ///
    /// `None` solange die Anfrage aussteht. Der zurückgegebene Epoch
    /// identifiziert den Versuch, zu dem das Ergebnis gehört; der Fehlerfall
    /// trägt die Begründung der Runtime (Hardware, Berechtigung).
    fn poll_session_request(&mut self) -> Option<(SessionEpoch, anyhow::Result<SessionId>)>;

    /// Beendet eine geöffnete Session.
    fn end_session(&mut self, session: SessionId);

    /// Ob die Session aus Runtime-Sicht noch lebt.
    fn is_session_live(&self, session: SessionId) -> bool;

    /// Liefert angefallene Runtime-Ereignisse aus und leert den Puffer.
    fn drain_events(&mut self) -> Vec<RuntimeEvent>;
}
