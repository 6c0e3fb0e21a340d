//! Animation state owned by the rendering side.
//!
//! Rays are revealed progressively: the visible prefix grows linearly over the
//! first 80% of the frames and the full path is shown for the remainder.

use photonsphere_core::AnimationConfig;
use serde::{Deserialize, Serialize};

/// Fraction of the playback over which rays are drawn in.
pub const REVEAL_FRACTION: f64 = 0.8;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    #[default]
    Idle,
    Playing,
    Paused,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AutoRotate {
    On,
    #[default]
    Off,
}

impl AutoRotate {
    pub fn toggled(self) -> Self {
        match self {
            AutoRotate::On => AutoRotate::Off,
            AutoRotate::Off => AutoRotate::On,
        }
    }
}

/// Camera angles in degrees plus zoom factor.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewAngles {
    pub azimuth: f64,
    pub elevation: f64,
    pub zoom: f64,
}

impl ViewAngles {
    pub const AZIMUTH_RANGE: (f64, f64) = (0.0, 360.0);
    pub const ELEVATION_RANGE: (f64, f64) = (-90.0, 90.0);
    pub const ZOOM_RANGE: (f64, f64) = (0.5, 2.0);

    pub fn new(azimuth: f64, elevation: f64, zoom: f64) -> Self {
        Self {
            azimuth: azimuth.clamp(Self::AZIMUTH_RANGE.0, Self::AZIMUTH_RANGE.1),
            elevation: elevation.clamp(Self::ELEVATION_RANGE.0, Self::ELEVATION_RANGE.1),
            zoom: zoom.clamp(Self::ZOOM_RANGE.0, Self::ZOOM_RANGE.1),
        }
    }

    /// Half-width of each axis at the current zoom.
    pub fn axis_limit(&self, plot_limit: f64) -> f64 {
        plot_limit / self.zoom
    }
}

impl Default for ViewAngles {
    fn default() -> Self {
        Self {
            azimuth: 45.0,
            elevation: 25.0,
            zoom: 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Playback {
    pub state: PlaybackState,
    pub auto_rotate: AutoRotate,
    pub frame: u32,
    frames: u32,
    pub view: ViewAngles,
}

impl Playback {
    pub fn new(animation: &AnimationConfig) -> Self {
        Self {
            state: PlaybackState::Idle,
            auto_rotate: AutoRotate::Off,
            frame: 0,
            frames: animation.frames.max(1),
            view: ViewAngles::default(),
        }
    }

    /// Frames per loop; never zero, even for a deserialized state.
    pub fn frames(&self) -> u32 {
        self.frames.max(1)
    }

    pub fn play(&mut self) {
        self.state = PlaybackState::Playing;
    }

    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Paused;
        }
    }

    pub fn toggle_auto_rotate(&mut self) {
        self.auto_rotate = self.auto_rotate.toggled();
    }

    pub fn auto_rotate_label(&self) -> &'static str {
        match self.auto_rotate {
            AutoRotate::On => "Auto-Rotate: ON",
            AutoRotate::Off => "Auto-Rotate: OFF",
        }
    }

    /// Manual camera change. Ignored while auto-rotating.
    pub fn set_view(&mut self, azimuth: f64, elevation: f64, zoom: f64) -> bool {
        if self.auto_rotate == AutoRotate::On {
            return false;
        }
        self.view = ViewAngles::new(azimuth, elevation, zoom);
        true
    }

    /// Advance one frame. Returns false when nothing changed.
    pub fn tick(&mut self) -> bool {
        if self.state != PlaybackState::Playing {
            return false;
        }
        self.frame = self.frame.saturating_add(1) % self.frames();
        if self.auto_rotate == AutoRotate::On {
            self.view.azimuth = (self.view.azimuth + 1.0) % 360.0;
        }
        true
    }

    /// Fraction of the playback elapsed, in [0, 1).
    pub fn progress(&self) -> f64 {
        let frames = self.frames();
        (self.frame % frames) as f64 / frames as f64
    }

    /// Number of leading points of a `total`-point path to draw this frame.
    pub fn reveal_count(&self, total: usize) -> usize {
        reveal_count(self.progress(), total)
    }

    /// Index of the moving head marker, if enough of the path is visible.
    pub fn marker_index(&self, total: usize) -> Option<usize> {
        let count = self.reveal_count(total);
        (count > 1).then(|| (count - 1).min(total - 1))
    }
}

/// Visible prefix length for `progress` in [0, 1].
pub fn reveal_count(progress: f64, total: usize) -> usize {
    if progress < REVEAL_FRACTION {
        ((progress * total as f64 / REVEAL_FRACTION) as usize).min(total)
    } else {
        total
    }
}
