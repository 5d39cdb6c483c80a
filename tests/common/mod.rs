//! Gemeinsame Test-Fixtures: skriptbare Mock-Runtime und Frame-Helfer.

#![allow(dead_code)]

use std::collections::{HashSet, VecDeque};

use ar_block_editor::{
    AppController, AppIntent, AppState, ArRuntime, BlockCatalog, RuntimeEvent, SessionEpoch,
    SessionId,
};
use glam::Vec3;

/// Skriptbare Mock-Runtime für Lifecycle-Tests.
///
/// Anfragen werden entweder automatisch (`auto_resolve`) oder explizit
/// per `resolve_ok`/`resolve_err` beantwortet; externe Beendigungen
/// lassen sich mit und ohne Push-Benachrichtigung simulieren.
pub struct MockArRuntime {
    /// Epochs aller begonnenen Session-Anfragen, in Reihenfolge
    pub begun_requests: Vec<SessionEpoch>,
    pending_results: VecDeque<(SessionEpoch, anyhow::Result<SessionId>)>,
    events: VecDeque<RuntimeEvent>,
    live_sessions: HashSet<SessionId>,
    /// Über `end_session` geschlossene Sessions, in Reihenfolge
    pub ended_sessions: Vec<SessionId>,
    next_session_id: u64,
    /// Beantwortet jede begonnene Anfrage sofort mit Ok
    pub auto_resolve: bool,
}

impl MockArRuntime {
    /// Runtime, die jede Anfrage sofort erfolgreich beantwortet.
    pub fn new() -> Self {
        Self {
            begun_requests: Vec::new(),
            pending_results: VecDeque::new(),
            events: VecDeque::new(),
            live_sessions: HashSet::new(),
            ended_sessions: Vec::new(),
            next_session_id: 0,
            auto_resolve: true,
        }
    }

    /// Runtime, deren Anfragen explizit beantwortet werden müssen.
    pub fn manual() -> Self {
        Self {
            auto_resolve: false,
            ..Self::new()
        }
    }

    /// Beantwortet eine Anfrage des Epochs mit einer neuen, lebenden Session.
    pub fn resolve_ok(&mut self, epoch: SessionEpoch) -> SessionId {
        self.next_session_id += 1;
        let session = SessionId(self.next_session_id);
        self.live_sessions.insert(session);
        self.pending_results.push_back((epoch, Ok(session)));
        session
    }

    /// Beantwortet eine Anfrage des Epochs mit einem Fehler.
    pub fn resolve_err(&mut self, epoch: SessionEpoch, reason: &str) {
        self.pending_results
            .push_back((epoch, Err(anyhow::anyhow!(reason.to_string()))));
    }

    /// Stellt ein Runtime-Ereignis für den nächsten `drain_events` ein.
    pub fn push_event(&mut self, event: RuntimeEvent) {
        self.events.push_back(event);
    }

    /// Simuliert eine externe Beendigung ohne Push-Benachrichtigung.
    pub fn kill_session(&mut self, session: SessionId) {
        self.live_sessions.remove(&session);
    }

    /// Ob die Session über `end_session` geschlossen wurde.
    pub fn was_ended(&self, session: SessionId) -> bool {
        self.ended_sessions.contains(&session)
    }
}

impl ArRuntime for MockArRuntime {
    fn begin_session_request(&mut self, epoch: SessionEpoch) {
        self.begun_requests.push(epoch);
        if self.auto_resolve {
            self.resolve_ok(epoch);
        }
    }

    fn poll_session_request(&mut self) -> Option<(SessionEpoch, anyhow::Result<SessionId>)> {
        self.pending_results.pop_front()
    }

    fn end_session(&mut self, session: SessionId) {
        self.live_sessions.remove(&session);
        self.ended_sessions.push(session);
    }

    fn is_session_live(&self, session: SessionId) -> bool {
        self.live_sessions.contains(&session)
    }

    fn drain_events(&mut self) -> Vec<RuntimeEvent> {
        self.events.drain(..).collect()
    }
}

/// Treibt einen Frame ohne Hit-Test-Treffer.
pub fn frame(
    controller: &mut AppController,
    state: &mut AppState,
    runtime: &mut MockArRuntime,
    catalog: &dyn BlockCatalog,
) {
    controller
        .handle_intent(state, runtime, catalog, AppIntent::FrameTicked { hits: vec![] })
        .expect("FrameTicked sollte ohne Fehler durchlaufen");
}

/// Treibt einen Frame mit genau einem Hit-Test-Treffer.
pub fn frame_with_hit(
    controller: &mut AppController,
    state: &mut AppState,
    runtime: &mut MockArRuntime,
    catalog: &dyn BlockCatalog,
    hit: Vec3,
) {
    controller
        .handle_intent(
            state,
            runtime,
            catalog,
            AppIntent::FrameTicked { hits: vec![hit] },
        )
        .expect("FrameTicked sollte ohne Fehler durchlaufen");
}

/// Startet eine Session und treibt Frames, bis sie aktiv ist.
pub fn enter_and_activate(
    controller: &mut AppController,
    state: &mut AppState,
    runtime: &mut MockArRuntime,
    catalog: &dyn BlockCatalog,
) {
    controller
        .handle_intent(state, runtime, catalog, AppIntent::EnterArRequested)
        .expect("EnterArRequested sollte ohne Fehler durchlaufen");

    for _ in 0..10 {
        if state.session.is_active() {
            return;
        }
        frame(controller, state, runtime, catalog);
    }
    assert!(
        state.session.is_active(),
        "Session sollte nach wenigen Frames aktiv sein"
    );
}
