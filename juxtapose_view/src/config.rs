// Copyright 2025 the Juxtapose Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::slider::SliderPosition;

/// Tunable parameters of a [`crate::Comparator`].
///
/// The defaults are a maximum scale of `20`, a per-wheel-event scale step of
/// `0.2` (20%) and the slider starting in the middle of the container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComparatorConfig {
    max_scale: f64,
    scale_step: f64,
    initial_slider: SliderPosition,
}

impl ComparatorConfig {
    /// Default upper bound on the zoom factor.
    pub const MAX_SCALE: f64 = 20.0;
    /// Default multiplicative zoom step applied per wheel event.
    pub const SCALE_STEP: f64 = 0.2;
    /// Lower bound on the zoom factor. Images are never shown smaller than
    /// their laid-out size.
    pub const MIN_SCALE: f64 = 1.0;

    /// Creates the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_scale: Self::MAX_SCALE,
            scale_step: Self::SCALE_STEP,
            initial_slider: SliderPosition::CENTER,
        }
    }

    /// Sets the maximum zoom factor.
    ///
    /// Values below [`Self::MIN_SCALE`] (and NaN) are raised to it, which
    /// disables zooming.
    #[must_use]
    pub fn with_max_scale(mut self, max_scale: f64) -> Self {
        self.max_scale = if max_scale >= Self::MIN_SCALE {
            max_scale
        } else {
            Self::MIN_SCALE
        };
        self
    }

    /// Sets the zoom step.
    ///
    /// The step must lie strictly between `0` and `1` so that zooming out
    /// stays positive; values outside that range keep the previous step.
    #[must_use]
    pub fn with_scale_step(mut self, step: f64) -> Self {
        if step > 0.0 && step < 1.0 {
            self.scale_step = step;
        }
        self
    }

    /// Sets where the slider starts.
    #[must_use]
    pub fn with_initial_slider(mut self, position: SliderPosition) -> Self {
        self.initial_slider = position;
        self
    }

    /// Maximum zoom factor.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    /// Zoom step applied per wheel event.
    #[must_use]
    pub fn scale_step(&self) -> f64 {
        self.scale_step
    }

    /// Initial slider position.
    #[must_use]
    pub fn initial_slider(&self) -> SliderPosition {
        self.initial_slider
    }

    /// Clamps `scale` into `[MIN_SCALE, max_scale]`.
    #[must_use]
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        if scale.is_nan() {
            return Self::MIN_SCALE;
        }
        scale.clamp(Self::MIN_SCALE, self.max_scale)
    }
}

impl Default for ComparatorConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::ComparatorConfig;
    use crate::SliderPosition;

    #[test]
    fn defaults_match_constants() {
        let config = ComparatorConfig::default();
        assert_eq!(config.max_scale(), 20.0);
        assert_eq!(config.scale_step(), 0.2);
        assert_eq!(config.initial_slider(), SliderPosition::CENTER);
    }

    #[test]
    fn max_scale_never_drops_below_one() {
        assert_eq!(ComparatorConfig::new().with_max_scale(0.5).max_scale(), 1.0);
        assert_eq!(ComparatorConfig::new().with_max_scale(f64::NAN).max_scale(), 1.0);
        assert_eq!(ComparatorConfig::new().with_max_scale(8.0).max_scale(), 8.0);
    }

    #[test]
    fn invalid_steps_are_ignored() {
        let config = ComparatorConfig::new().with_scale_step(0.5);
        assert_eq!(config.scale_step(), 0.5);
        assert_eq!(config.with_scale_step(0.0).scale_step(), 0.5);
        assert_eq!(config.with_scale_step(1.0).scale_step(), 0.5);
        assert_eq!(config.with_scale_step(-0.1).scale_step(), 0.5);
    }

    #[test]
    fn clamp_scale_respects_limits() {
        let config = ComparatorConfig::new();
        assert_eq!(config.clamp_scale(0.3), 1.0);
        assert_eq!(config.clamp_scale(7.5), 7.5);
        assert_eq!(config.clamp_scale(40.0), 20.0);
        assert_eq!(config.clamp_scale(f64::NAN), 1.0);
    }
}
