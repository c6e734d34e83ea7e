use crate::foundation::core::Millis;
use crate::render::animator::RenderEvent;
use crate::render::surface::DrawSurface;
use crate::session::opts::SketchOpts;
use crate::session::sketch_session::{FetchOutcome, SessionId, SketchSession};

/// Owner of the single active [`SketchSession`].
///
/// Every category assignment gets a fresh [`SessionId`]; fetch results and frame ticks are keyed
/// by that id, so work scheduled for a replaced session never reaches the new one.
#[derive(Debug)]
pub struct SessionHost<S> {
    opts: SketchOpts,
    next_id: u64,
    active: Option<SketchSession<S>>,
}

impl<S: DrawSurface> SessionHost<S> {
    /// Host creating sessions with `opts`.
    pub fn new(opts: SketchOpts) -> Self {
        Self {
            opts,
            next_id: 1,
            active: None,
        }
    }

    /// Replace the active session with a new, idle one for `category`.
    pub fn assign(&mut self, category: impl Into<String>, surface: S) -> SessionId {
        let id = SessionId(self.next_id);
        self.next_id += 1;
        if let Some(old) = self.active.take() {
            tracing::debug!(old = old.id().0, new = id.0, "discarding session");
        }
        self.active = Some(SketchSession::new(id, category, surface, self.opts));
        id
    }

    /// Active session, if any.
    pub fn session(&self) -> Option<&SketchSession<S>> {
        self.active.as_ref()
    }

    /// Mutable access to the active session, if any.
    pub fn session_mut(&mut self) -> Option<&mut SketchSession<S>> {
        self.active.as_mut()
    }

    /// Drop the active session.
    pub fn discard(&mut self) -> Option<SketchSession<S>> {
        self.active.take()
    }

    /// Deliver a fetch result to session `id`; ignored when `id` is stale.
    pub fn deliver(&mut self, id: SessionId, outcome: FetchOutcome, now: Millis) -> Vec<RenderEvent> {
        match self.current(id) {
            Some(session) => session.deliver(outcome, now),
            None => Vec::new(),
        }
    }

    /// Advance session `id` to `now`; ignored when `id` is stale.
    pub fn tick(&mut self, id: SessionId, now: Millis) -> Vec<RenderEvent> {
        match self.current(id) {
            Some(session) => session.tick(now),
            None => Vec::new(),
        }
    }

    fn current(&mut self, id: SessionId) -> Option<&mut SketchSession<S>> {
        match self.active.as_mut() {
            Some(session) if session.id() == id => Some(session),
            _ => {
                tracing::trace!(id = id.0, "stale session callback ignored");
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/host.rs"]
mod tests;
