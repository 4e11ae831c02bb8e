use hoop_trajectory::core::config::{ANGLE_RATE_SLIDER, FrameInput, SCALE_SLIDER, SceneConfig};
use hoop_trajectory::core::error::AimError;

pub(crate) struct AppRuntime {
    pub(crate) scene: SceneConfig,
    pub(crate) scale: f32,
    pub(crate) angle_rate: f32,
    pub(crate) aim_degenerate: bool,
}

impl AppRuntime {
    pub(crate) fn new() -> Self {
        Self {
            scene: SceneConfig::default(),
            scale: SCALE_SLIDER.default as f32,
            angle_rate: ANGLE_RATE_SLIDER.default as f32,
            aim_degenerate: false,
        }
    }

    /// Snaps both sliders to their steps and freezes them with the pointer into this frame's input.
    pub(crate) fn frame_input(&mut self, pointer_x: f32) -> FrameInput {
        let input = FrameInput::from_sliders(
            f64::from(pointer_x),
            f64::from(self.scale),
            f64::from(self.angle_rate),
        );
        self.scale = input.scale as f32;
        self.angle_rate = input.angle_rate as f32;
        input
    }

    /// Logs only when the shot flips between solvable and degenerate.
    pub(crate) fn note_aim(&mut self, aim_error: Option<AimError>) -> bool {
        let degenerate = aim_error.is_some();
        if degenerate == self.aim_degenerate {
            return false;
        }
        self.aim_degenerate = degenerate;
        match aim_error {
            Some(err) => log::warn!("{err}"),
            None => log::info!("launch speed is finite again"),
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_from_slider_defaults() {
        let state = AppRuntime::new();
        assert_eq!(state.scale, 100.0);
        assert_eq!(state.angle_rate, 0.5);
    }

    #[test]
    fn frame_input_snaps_the_sliders() {
        let mut state = AppRuntime::new();
        state.scale = 123.0;
        state.angle_rate = 2.0;
        let input = state.frame_input(50.0);
        assert_eq!(input.pointer_x, 50.0);
        assert_eq!(input.scale, 120.0);
        assert_eq!(state.scale, 120.0);
        assert_eq!(state.angle_rate, 1.5);
    }

    #[test]
    fn aim_changes_are_reported_once() {
        let mut state = AppRuntime::new();
        let err = AimError::ZeroDenominator { theta_deg: 45.0 };
        assert!(!state.note_aim(None));
        assert!(state.note_aim(Some(err)));
        assert!(!state.note_aim(Some(err)));
        assert!(state.note_aim(None));
    }
}
