//! Stroke-by-stroke pen animation.
//!
//! [`SketchAnimator`] is a pure state machine driven by [`SketchAnimator::advance`] with an
//! externally supplied clock value. Each shape is reached through one or more eased
//! [`MotionLeg`]s; the outline is committed to the surface only after the shape's final leg
//! completes, and the next shape never starts before that.

use kurbo::Shape as _;

use crate::animation::ease::Ease;
use crate::animation::pen::{MotionLeg, PenPosition};
use crate::foundation::core::{BezPath, Millis, Point, Vec2};
use crate::render::surface::{DrawSurface, StrokeStyle};
use crate::scene::shape::{ShapeDescriptor, ShapeKind};

const PATH_TOLERANCE: f64 = 0.1;

/// Timing and appearance of the animation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AnimatorOpts {
    /// Pause between the end of one step and the start of the next.
    pub step_delay: Millis,
    /// Duration of one pen motion leg.
    pub leg_duration: Millis,
    /// Progress curve for pen legs.
    pub ease: Ease,
    /// Stroke appearance.
    pub stroke: StrokeStyle,
}

impl Default for AnimatorOpts {
    fn default() -> Self {
        Self {
            step_delay: Millis(200),
            leg_duration: Millis(500),
            ease: Ease::OutQuad,
            stroke: StrokeStyle::default(),
        }
    }
}

/// Observable progress reported by [`SketchAnimator::advance`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderEvent {
    /// Step `index` had no drawable shape and was skipped.
    Skipped {
        /// Step index.
        index: usize,
    },
    /// The pen started moving toward step `index`'s first point.
    ShapeStarted {
        /// Step index.
        index: usize,
        /// Shape being drawn.
        kind: ShapeKind,
    },
    /// Step `index`'s outline was committed to the surface.
    Stroked {
        /// Step index.
        index: usize,
        /// Shape that was stroked.
        kind: ShapeKind,
    },
    /// Every step was processed.
    Finished,
}

#[derive(Clone, Debug)]
enum Phase {
    NotStarted,
    /// Step `index` begins at `at`.
    Waiting { index: usize, at: Millis },
    Drawing(Box<ActiveShape>),
    Done,
}

#[derive(Clone, Debug)]
struct ActiveShape {
    index: usize,
    shape: ShapeDescriptor,
    targets: Vec<Point>,
    leg_index: usize,
    leg: MotionLeg,
    path: BezPath,
}

/// Sequential renderer of one sketch.
#[derive(Clone, Debug)]
pub struct SketchAnimator {
    steps: Vec<Option<ShapeDescriptor>>,
    offset: Vec2,
    opts: AnimatorOpts,
    pen: PenPosition,
    phase: Phase,
    strokes: usize,
}

impl SketchAnimator {
    /// Create an animator over ordered steps; `None` steps are parse misses that only advance
    /// the index.
    pub fn new(steps: Vec<Option<ShapeDescriptor>>, offset: Vec2, opts: AnimatorOpts) -> Self {
        Self {
            steps,
            offset,
            opts,
            pen: PenPosition::ORIGIN,
            phase: Phase::NotStarted,
            strokes: 0,
        }
    }

    /// Current pen position.
    pub fn pen(&self) -> PenPosition {
        self.pen
    }

    /// Number of outlines committed so far.
    pub fn stroke_count(&self) -> usize {
        self.strokes
    }

    /// Whether [`SketchAnimator::start`] has been called.
    pub fn is_started(&self) -> bool {
        !matches!(self.phase, Phase::NotStarted)
    }

    /// Whether every step has been processed.
    pub fn is_done(&self) -> bool {
        matches!(self.phase, Phase::Done)
    }

    /// Next clock time at which the animator changes phase without further input.
    pub fn next_deadline(&self) -> Option<Millis> {
        match &self.phase {
            Phase::Waiting { at, .. } => Some(*at),
            Phase::Drawing(active) => Some(active.leg.end()),
            Phase::NotStarted | Phase::Done => None,
        }
    }

    /// Clear the surface and begin the first step at `now`.
    ///
    /// Returns `None` without touching anything if the animator was already started.
    pub fn start(
        &mut self,
        now: Millis,
        surface: &mut dyn DrawSurface,
    ) -> Option<Vec<RenderEvent>> {
        if self.is_started() {
            tracing::debug!("animator already started; ignoring");
            return None;
        }
        surface.clear(self.opts.stroke);
        self.pen = PenPosition::ORIGIN;
        self.phase = Phase::Waiting { index: 0, at: now };
        Some(self.advance(now, surface))
    }

    /// Run the state machine up to `now`, committing any strokes that completed.
    pub fn advance(&mut self, now: Millis, surface: &mut dyn DrawSurface) -> Vec<RenderEvent> {
        let mut events = Vec::new();
        loop {
            let phase = std::mem::replace(&mut self.phase, Phase::Done);
            self.phase = match phase {
                Phase::NotStarted => {
                    self.phase = Phase::NotStarted;
                    break;
                }
                Phase::Done => break,
                Phase::Waiting { index, at } => {
                    if now < at {
                        self.phase = Phase::Waiting { index, at };
                        break;
                    }
                    self.begin_step(index, at, &mut events)
                }
                Phase::Drawing(active) => {
                    if !active.leg.is_complete(now) {
                        self.pen = PenPosition(active.leg.position_at(now));
                        self.phase = Phase::Drawing(active);
                        break;
                    }
                    self.pen = PenPosition(active.leg.to);
                    self.finish_leg(active, surface, &mut events)
                }
            };
        }
        events
    }

    fn begin_step(&mut self, index: usize, at: Millis, events: &mut Vec<RenderEvent>) -> Phase {
        let Some(step) = self.steps.get(index) else {
            self.pen = PenPosition::ORIGIN;
            tracing::debug!(strokes = self.strokes, "sketch rendering finished");
            events.push(RenderEvent::Finished);
            return Phase::Done;
        };

        let Some(shape) = *step else {
            tracing::trace!(index, "step has no shape; skipping");
            events.push(RenderEvent::Skipped { index });
            return Phase::Waiting {
                index: index + 1,
                at: at.saturating_add(self.opts.step_delay),
            };
        };

        let targets: Vec<Point> = shape
            .pen_targets()
            .into_iter()
            .map(|c| c.translated(self.offset))
            .collect();
        let leg = MotionLeg {
            from: self.pen.point(),
            to: targets[0],
            start: at,
            duration: self.opts.leg_duration,
            ease: self.opts.ease,
        };
        events.push(RenderEvent::ShapeStarted {
            index,
            kind: shape.kind(),
        });
        Phase::Drawing(Box::new(ActiveShape {
            index,
            shape,
            targets,
            leg_index: 0,
            leg,
            path: BezPath::new(),
        }))
    }

    fn finish_leg(
        &mut self,
        mut active: Box<ActiveShape>,
        surface: &mut dyn DrawSurface,
        events: &mut Vec<RenderEvent>,
    ) -> Phase {
        let arrived = active.leg.to;
        if active.leg_index == 0 {
            active.path.move_to(arrived);
        } else {
            active.path.line_to(arrived);
        }

        let next = active.leg_index + 1;
        if let Some(&target) = active.targets.get(next) {
            active.leg = MotionLeg {
                from: arrived,
                to: target,
                start: active.leg.end(),
                duration: self.opts.leg_duration,
                ease: self.opts.ease,
            };
            active.leg_index = next;
            return Phase::Drawing(active);
        }

        let kind = active.shape.kind();
        let outline = self.outline(&active.shape, &active.path);
        surface.stroke(kind, &outline);
        self.strokes += 1;
        events.push(RenderEvent::Stroked {
            index: active.index,
            kind,
        });
        Phase::Waiting {
            index: active.index + 1,
            at: active.leg.end().saturating_add(self.opts.step_delay),
        }
    }

    fn outline(&self, shape: &ShapeDescriptor, traced: &BezPath) -> BezPath {
        match *shape {
            ShapeDescriptor::Rectangle {
                anchor,
                width,
                height,
            } => {
                let origin = anchor.translated(self.offset);
                kurbo::Rect::from_origin_size(origin, (f64::from(width), f64::from(height)))
                    .to_path(PATH_TOLERANCE)
            }
            ShapeDescriptor::Circle { anchor, radius } => {
                kurbo::Circle::new(anchor.translated(self.offset), f64::from(radius))
                    .to_path(PATH_TOLERANCE)
            }
            ShapeDescriptor::Oval {
                anchor,
                width,
                height,
            } => kurbo::Ellipse::new(
                anchor.translated(self.offset),
                (f64::from(width) / 2.0, f64::from(height) / 2.0),
                0.0,
            )
            .to_path(PATH_TOLERANCE),
            ShapeDescriptor::Triangle { .. } => {
                let mut closed = traced.clone();
                closed.close_path();
                closed
            }
            ShapeDescriptor::Line { .. } => traced.clone(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/animator.rs"]
mod tests;
