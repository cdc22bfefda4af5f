//! Pure game model and logic for the firefighter side-scroller.
//!
//! Everything in the library is free of engine types so the simulation can
//! be exercised headless.  Windowing, rendering, audio, and input sampling
//! live in the binary.

pub mod compute;
pub mod entities;
