// src/playground/view.rs — Display-ready projections of a scoring result
//
// Pure functions from (snapshot, result) to the points the charts draw.
// The widgets and the `compare` command both consume these.

use serde::Serialize;

use super::types::{Item, PcaPoint, ScoringResult, SimilarityMethod, ViewMode};

/// One point of the similarity scatter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScorePoint {
    pub id: String,
    pub text: String,
    pub color: String,
    pub score: f64,
    /// Position in the snapshot. Only separates points vertically.
    pub index: usize,
    pub is_anchor: bool,
}

/// One point of the PCA scatter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PcaItem {
    pub id: String,
    pub text: String,
    pub color: String,
    pub point: PcaPoint,
}

/// What the results pane should show.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultView {
    /// Nothing scored yet.
    Placeholder,
    Similarity {
        method: SimilarityMethod,
        points: Vec<ScorePoint>,
    },
    Pca {
        points: Vec<PcaItem>,
    },
}

impl ResultView {
    pub fn build(
        snapshot: &[Item],
        result: Option<&ScoringResult>,
        mode: ViewMode,
        method: SimilarityMethod,
    ) -> Self {
        let Some(result) = result else {
            return ResultView::Placeholder;
        };
        match mode {
            ViewMode::Similarity => ResultView::Similarity {
                method,
                points: similarity_points(snapshot, result, method),
            },
            ViewMode::Pca => ResultView::Pca {
                points: pca_points(snapshot, result),
            },
        }
    }
}

/// Scores of every snapshot item against the first one (the anchor).
///
/// The anchor scores 0. Items the result has no score for are skipped.
pub fn similarity_points(
    snapshot: &[Item],
    result: &ScoringResult,
    method: SimilarityMethod,
) -> Vec<ScorePoint> {
    let Some(anchor) = snapshot.first() else {
        return Vec::new();
    };

    snapshot
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            let is_anchor = index == 0;
            let score = if is_anchor {
                0.0
            } else {
                match result.similarity.score(method, &anchor.id, &item.id) {
                    Some(s) => s,
                    None => {
                        tracing::debug!(id = %item.id, method = method.label(), "no score for item");
                        return None;
                    }
                }
            };
            Some(ScorePoint {
                id: item.id.clone(),
                text: item.text.clone(),
                color: item.color.clone(),
                score,
                index,
                is_anchor,
            })
        })
        .collect()
}

/// Snapshot items paired with their PCA coordinates, in snapshot order.
pub fn pca_points(snapshot: &[Item], result: &ScoringResult) -> Vec<PcaItem> {
    snapshot
        .iter()
        .filter_map(|item| {
            result.pca.get(&item.id).map(|p| PcaItem {
                id: item.id.clone(),
                text: item.text.clone(),
                color: item.color.clone(),
                point: *p,
            })
        })
        .collect()
}

/// Smallest and largest score, padded so single-valued ranges still have width.
pub fn score_bounds(points: &[ScorePoint]) -> [f64; 2] {
    let (lo, hi) = points
        .iter()
        .map(|p| p.score)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), s| {
            (lo.min(s), hi.max(s))
        });
    if !lo.is_finite() || !hi.is_finite() {
        return [0.0, 1.0];
    }
    let pad = ((hi - lo) * 0.05).max(1e-3);
    [lo - pad, hi + pad]
}

/// Orbit camera for the PCA view. Angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub yaw: f64,
    pub pitch: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            yaw: 35.0,
            pitch: 25.0,
        }
    }
}

impl Camera {
    pub fn rotate(&mut self, d_yaw: f64, d_pitch: f64) {
        self.yaw = (self.yaw + d_yaw).rem_euclid(360.0);
        self.pitch = (self.pitch + d_pitch).clamp(-89.0, 89.0);
    }

    /// Orthographic projection onto the screen plane: (horizontal, vertical).
    pub fn project(&self, p: PcaPoint) -> (f64, f64) {
        let (sy, cy) = self.yaw.to_radians().sin_cos();
        let (sp, cp) = self.pitch.to_radians().sin_cos();
        // yaw around the vertical (z) axis, then pitch around the new x axis
        let x1 = p.x * cy - p.y * sy;
        let y1 = p.x * sy + p.y * cy;
        let v = p.z * cp - y1 * sp;
        (x1, v)
    }
}

/// Largest absolute coordinate across all points; the cube the axes span.
pub fn pca_extent(points: &[PcaItem]) -> f64 {
    let m = points
        .iter()
        .flat_map(|p| [p.point.x.abs(), p.point.y.abs(), p.point.z.abs()])
        .fold(0.0_f64, f64::max);
    if m > 0.0 {
        m * 1.1
    } else {
        1.0
    }
}
