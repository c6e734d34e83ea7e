use crate::animation::pen::PenPosition;
use crate::foundation::core::{Millis, Point};
use crate::foundation::error::{CharadeError, CharadeResult};
use crate::instructions::grammar::ShapeGrammar;
use crate::instructions::parse::{CleanedInstruction, parse_instructions};
use crate::layout::bounds::centering_offset;
use crate::render::animator::{RenderEvent, SketchAnimator};
use crate::render::surface::DrawSurface;
use crate::scene::shape::ShapeDescriptor;
use crate::session::clock::FrameClock;
use crate::session::opts::SketchOpts;
use crate::source::InstructionSource;

/// Identity of one category assignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(pub u64);

/// Lifecycle of a [`SketchSession`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// Created, not started.
    Idle,
    /// Instructions requested, not yet delivered.
    Loading,
    /// Pen animation in progress.
    Rendering,
    /// Rendering complete; one guess may be submitted.
    AwaitingGuess,
    /// Guess submitted.
    Done,
    /// Instruction fetch failed; nothing was drawn, but one guess may still be submitted.
    Failed,
}

/// Result of the instruction fetch handed back to a loading session.
#[derive(Debug)]
pub enum FetchOutcome {
    /// Raw instruction lines.
    Instructions(Vec<String>),
    /// The collaborator errored.
    Failed(CharadeError),
}

impl From<CharadeResult<Vec<String>>> for FetchOutcome {
    fn from(r: CharadeResult<Vec<String>>) -> Self {
        match r {
            Ok(lines) => Self::Instructions(lines),
            Err(e) => Self::Failed(e),
        }
    }
}

/// One complete cycle of loading, rendering and guessing a single category.
///
/// A session renders at most once: [`SketchSession::start`] is a no-op after the first call.
#[derive(Debug)]
pub struct SketchSession<S> {
    id: SessionId,
    category: String,
    surface: S,
    opts: SketchOpts,
    state: SessionState,
    instructions: Vec<CleanedInstruction>,
    steps: Vec<Option<ShapeDescriptor>>,
    animator: Option<SketchAnimator>,
    failure: Option<String>,
    guess: Option<String>,
}

impl<S: DrawSurface> SketchSession<S> {
    /// Create an idle session for `category` drawing onto `surface`.
    pub fn new(id: SessionId, category: impl Into<String>, surface: S, opts: SketchOpts) -> Self {
        Self {
            id,
            category: category.into(),
            surface,
            opts,
            state: SessionState::Idle,
            instructions: Vec::new(),
            steps: Vec::new(),
            animator: None,
            failure: None,
            guess: None,
        }
    }

    /// Assignment this session belongs to.
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Category being drawn.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Options the session was created with.
    pub fn opts(&self) -> &SketchOpts {
        &self.opts
    }

    /// Whether the instruction fetch is still outstanding.
    pub fn is_loading(&self) -> bool {
        self.state == SessionState::Loading
    }

    /// Whether a guess may be submitted now.
    pub fn accepts_guess(&self) -> bool {
        matches!(self.state, SessionState::AwaitingGuess | SessionState::Failed)
    }

    /// Cleaned instructions from the delivered fetch.
    pub fn instructions(&self) -> &[CleanedInstruction] {
        &self.instructions
    }

    /// Extracted shape per instruction; `None` where the line did not parse.
    pub fn steps(&self) -> &[Option<ShapeDescriptor>] {
        &self.steps
    }

    /// Fetch error message when the session failed.
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    /// Submitted guess, once [`SessionState::Done`].
    pub fn guess(&self) -> Option<&str> {
        self.guess.as_deref()
    }

    /// Drawing surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Consume the session, returning its surface.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Current pen position; [`PenPosition::ORIGIN`] outside rendering.
    pub fn pen(&self) -> PenPosition {
        self.animator
            .as_ref()
            .map_or(PenPosition::ORIGIN, SketchAnimator::pen)
    }

    /// Pen position when the cursor indicator should be shown.
    pub fn cursor(&self) -> Option<Point> {
        let pen = self.pen();
        pen.is_visible().then(|| pen.point())
    }

    /// Number of outlines committed to the surface.
    pub fn stroke_count(&self) -> usize {
        self.animator
            .as_ref()
            .map_or(0, SketchAnimator::stroke_count)
    }

    /// Next time at which [`SketchSession::tick`] will make progress.
    pub fn next_deadline(&self) -> Option<Millis> {
        match self.state {
            SessionState::Rendering => self
                .animator
                .as_ref()
                .and_then(SketchAnimator::next_deadline),
            _ => None,
        }
    }

    /// Request instructions. Returns `false` and does nothing if the session already started.
    pub fn start(&mut self) -> bool {
        if self.state != SessionState::Idle {
            tracing::debug!(session = self.id.0, state = ?self.state, "session already started");
            return false;
        }
        self.state = SessionState::Loading;
        true
    }

    /// Hand the fetch result to a loading session and begin rendering at `now`.
    ///
    /// Outcomes delivered outside [`SessionState::Loading`] are ignored.
    #[tracing::instrument(
        skip(self, outcome),
        fields(session = self.id.0, category = %self.category)
    )]
    pub fn deliver(&mut self, outcome: FetchOutcome, now: Millis) -> Vec<RenderEvent> {
        if self.state != SessionState::Loading {
            tracing::debug!(state = ?self.state, "fetch outcome delivered outside loading; ignoring");
            return Vec::new();
        }

        let lines = match outcome {
            FetchOutcome::Instructions(lines) => lines,
            FetchOutcome::Failed(e) => {
                tracing::warn!(error = %e, "instruction fetch failed");
                self.failure = Some(e.to_string());
                self.state = SessionState::Failed;
                return Vec::new();
            }
        };

        self.instructions = parse_instructions(&lines);
        let grammar = ShapeGrammar::new(self.opts.shape_defaults);
        self.steps = self
            .instructions
            .iter()
            .map(|i| grammar.extract(i))
            .collect();
        let offset = centering_offset(&self.instructions, self.surface.canvas());
        tracing::debug!(
            instructions = self.instructions.len(),
            shapes = self.steps.iter().flatten().count(),
            dx = offset.x,
            dy = offset.y,
            "sketch prepared"
        );

        let mut animator = SketchAnimator::new(self.steps.clone(), offset, self.opts.animator);
        let events = animator.start(now, &mut self.surface).unwrap_or_default();
        self.animator = Some(animator);
        self.state = SessionState::Rendering;
        self.settle();
        events
    }

    /// Fetch from `source` and deliver the result; no-op if already started.
    pub fn run<I: InstructionSource + ?Sized>(&mut self, source: &I, now: Millis) -> Vec<RenderEvent> {
        if !self.start() {
            return Vec::new();
        }
        let outcome = FetchOutcome::from(source.fetch(&self.category));
        self.deliver(outcome, now)
    }

    /// Advance the pen animation to `now`.
    pub fn tick(&mut self, now: Millis) -> Vec<RenderEvent> {
        if self.state != SessionState::Rendering {
            return Vec::new();
        }
        let events = match self.animator.as_mut() {
            Some(animator) => animator.advance(now, &mut self.surface),
            None => Vec::new(),
        };
        self.settle();
        events
    }

    /// [`SketchSession::tick`] using the current time of `clock`.
    pub fn tick_with(&mut self, clock: &dyn FrameClock) -> Vec<RenderEvent> {
        self.tick(clock.now())
    }

    /// Accept the player's guess, returning it trimmed.
    #[tracing::instrument(skip(self, text), fields(session = self.id.0))]
    pub fn submit_guess(&mut self, text: &str) -> CharadeResult<String> {
        if !self.accepts_guess() {
            return Err(CharadeError::validation(format!(
                "session is not accepting guesses (state {:?})",
                self.state
            )));
        }
        let guess = text.trim();
        if guess.is_empty() {
            return Err(CharadeError::validation("guess must not be empty"));
        }
        self.guess = Some(guess.to_owned());
        self.state = SessionState::Done;
        tracing::debug!(guess, "guess submitted");
        Ok(guess.to_owned())
    }

    /// Case-insensitive comparison of `guess` against the session category.
    pub fn is_correct(&self, guess: &str) -> bool {
        guess.trim().eq_ignore_ascii_case(self.category.trim())
    }

    fn settle(&mut self) {
        if self.state == SessionState::Rendering
            && self.animator.as_ref().is_some_and(SketchAnimator::is_done)
        {
            tracing::debug!(strokes = self.stroke_count(), "sketch rendered; awaiting guess");
            self.state = SessionState::AwaitingGuess;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/sketch_session.rs"]
mod tests;
