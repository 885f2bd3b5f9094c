//! Pointer input for the orbit camera
//!
//! Left drag orbits, scroll zooms, and a press released in place is reported
//! as a click so the scene can place an object.

mod orbit_controller;

pub use orbit_controller::{OrbitControl, OrbitController, PointerGesture};
