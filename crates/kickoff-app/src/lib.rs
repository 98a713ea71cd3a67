// Library root: the draft runtime around the kickoff-draft engine. Exposed
// as a library so integration tests can drive the event loop directly.

pub mod app;
pub mod config;
pub mod protocol;
pub mod recorder;
pub mod roster;
