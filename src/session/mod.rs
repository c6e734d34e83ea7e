/// Animation clocks.
pub mod clock;
/// Session replacement and stale-callback filtering.
pub mod host;
/// Session options.
pub mod opts;
/// The sketch session state machine.
pub mod sketch_session;
