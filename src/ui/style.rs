use serde::Serialize;

/// Animation durations handed to consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MotionTokens {
    pub motion_standard_ms: u32,
    pub motion_hover_ms: u32,
    pub motion_press_ms: u32,
    /// How long a toast stays on screen; not an animation, so never zeroed.
    pub toast_duration_ms: u32,
}

pub const STANDARD_MOTION: MotionTokens = MotionTokens {
    motion_standard_ms: 220,
    motion_hover_ms: 160,
    motion_press_ms: 90,
    toast_duration_ms: 2_000,
};

pub const REDUCED_MOTION: MotionTokens = MotionTokens {
    motion_standard_ms: 0,
    motion_hover_ms: 0,
    motion_press_ms: 0,
    toast_duration_ms: STANDARD_MOTION.toast_duration_ms,
};

pub fn motion_tokens_for(reduced_motion: bool) -> MotionTokens {
    if reduced_motion {
        REDUCED_MOTION
    } else {
        STANDARD_MOTION
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

impl FontWeight {
    pub fn for_bold_text(bold_text: bool) -> Self {
        if bold_text {
            FontWeight::Bold
        } else {
            FontWeight::Regular
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_motion_keeps_expected_durations() {
        let tokens = motion_tokens_for(false);
        assert_eq!(tokens.motion_standard_ms, 220);
        assert_eq!(tokens.motion_hover_ms, 160);
        assert_eq!(tokens.motion_press_ms, 90);
        assert_eq!(tokens.toast_duration_ms, 2_000);
    }

    #[test]
    fn reduced_motion_zeroes_animations_but_keeps_toast_duration() {
        let tokens = motion_tokens_for(true);
        assert_eq!(tokens.motion_standard_ms, 0);
        assert_eq!(tokens.motion_hover_ms, 0);
        assert_eq!(tokens.motion_press_ms, 0);
        assert_eq!(tokens.toast_duration_ms, 2_000);
    }

    #[test]
    fn bold_text_maps_to_font_weight() {
        assert_eq!(FontWeight::for_bold_text(true), FontWeight::Bold);
        assert_eq!(FontWeight::for_bold_text(false), FontWeight::Regular);
        assert_eq!(FontWeight::default(), FontWeight::Regular);
    }
}
