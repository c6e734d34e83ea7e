//! Charade is the sketch engine of a human-vs-AI drawing and guessing game.
//!
//! The AI "draws" a word by emitting natural-language drawing instructions. This crate turns
//! those instructions into a pen-animated sketch:
//!
//! - Clean the raw lines ([`parse_instructions`])
//! - Extract one [`ShapeDescriptor`] per line ([`ShapeGrammar`])
//! - Center the drawing on the canvas ([`centering_offset`])
//! - Animate the pen shape by shape onto a [`DrawSurface`] ([`SketchAnimator`])
//! - Drive the whole cycle, including the player's guess, with a [`SketchSession`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Pen easing and motion legs.
pub mod animation;
/// Instruction cleaning and shape extraction.
pub mod instructions;
/// Canvas centering of instruction coordinates.
pub mod layout;
/// Drawing surfaces and the pen animator.
pub mod render;
/// Shape descriptors.
pub mod scene;
/// Session orchestration, clocks and options.
pub mod session;
/// Instruction collaborators.
pub mod source;

pub use crate::animation::ease::Ease;
pub use crate::animation::pen::{MotionLeg, PenPosition};
pub use crate::foundation::core::{BezPath, Canvas, Millis, Point, Rgba8, Vec2};
pub use crate::foundation::error::{CharadeError, CharadeResult};
pub use crate::instructions::defaults::ShapeDefaults;
pub use crate::instructions::grammar::{RULES, Rule, ShapeGrammar};
pub use crate::instructions::parse::{CleanedInstruction, parse_instructions};
pub use crate::layout::bounds::{CoordBounds, centering_offset, instruction_bounds};
pub use crate::render::animator::{AnimatorOpts, RenderEvent, SketchAnimator};
pub use crate::render::cpu::{CpuSurface, CursorStyle};
pub use crate::render::frame::FrameRGBA;
pub use crate::render::surface::{DrawSurface, RecordedStroke, RecordingSurface, StrokeStyle};
pub use crate::scene::shape::{Coord, LineSpan, ShapeDescriptor, ShapeKind};
pub use crate::session::clock::{FrameClock, ManualClock, SystemClock};
pub use crate::session::host::SessionHost;
pub use crate::session::opts::SketchOpts;
pub use crate::session::sketch_session::{FetchOutcome, SessionId, SessionState, SketchSession};
pub use crate::source::{
    CATEGORIES, FallbackSource, InstructionSource, LinesSource, pick_category,
};
