//! Head-pose/gaze detection and the per-frame proctoring pipeline
//! (`SPEC_FULL.md` §4.8), grounded on `ai_modules/proctoring/__init__.py`.

pub mod detect;
pub mod session;

pub use detect::{estimate_gaze, estimate_head_pose, is_looking_away, Gaze, GazeDirection, HeadPose};
pub use session::{analyze_frame, end, tab_switch};
