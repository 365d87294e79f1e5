//! Proctoring sensitivity profile (`SPEC_FULL.md` §4.8 sensitivity table).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SensitivityProfile {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensitivityConfig {
    #[serde(default)]
    pub profile: SensitivityProfile,
    pub face_confidence: f32,
    pub head_pose_threshold_deg: f32,
    pub gaze_threshold_deg: f32,
    pub no_face_frames: u64,
    pub looking_away_frames: u64,
    pub verification_threshold: f32,
}

impl SensitivityConfig {
    pub fn for_profile(profile: SensitivityProfile) -> Self {
        match profile {
            SensitivityProfile::Low => Self {
                profile,
                face_confidence: 0.7,
                head_pose_threshold_deg: 40.0,
                gaze_threshold_deg: 35.0,
                no_face_frames: 60,
                looking_away_frames: 45,
                verification_threshold: 0.5,
            },
            SensitivityProfile::Medium => Self {
                profile,
                face_confidence: 0.6,
                head_pose_threshold_deg: 30.0,
                gaze_threshold_deg: 25.0,
                no_face_frames: 30,
                looking_away_frames: 20,
                verification_threshold: 0.6,
            },
            SensitivityProfile::High => Self {
                profile,
                face_confidence: 0.5,
                head_pose_threshold_deg: 25.0,
                gaze_threshold_deg: 20.0,
                no_face_frames: 15,
                looking_away_frames: 10,
                verification_threshold: 0.7,
            },
        }
    }
}

impl Default for SensitivityConfig {
    fn default() -> Self {
        Self::for_profile(SensitivityProfile::Medium)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_match_spec_table() {
        let high = SensitivityConfig::for_profile(SensitivityProfile::High);
        assert_eq!(high.no_face_frames, 15);
        assert_eq!(high.looking_away_frames, 10);
        let low = SensitivityConfig::for_profile(SensitivityProfile::Low);
        assert_eq!(low.no_face_frames, 60);
    }
}
