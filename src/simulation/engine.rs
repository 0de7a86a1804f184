//! High-level runtime playback settings
//!
//! Controls how the viewer paces a finished trajectory; the integrator
//! never sees these

#[derive(Debug, Clone)]
pub struct Engine {
    pub fps: f64, // playback rate in trajectory samples per second
    pub loop_playback: bool, // restart from sample 0 after the last frame
}
