// src/cli/compare.rs — One-shot scoring from the command line

use std::fmt::Write as _;
use std::sync::Arc;

use crate::client::{self, ScoringBackend};
use crate::infra::config::Config;
use crate::playground::view::{pca_points, similarity_points};
use crate::playground::{color, Controller, Item, ItemStore, ScoringResult, SimilarityMethod};

/// Score `texts` (the first one is the anchor) and print the result.
pub async fn run_compare(
    backend: Arc<dyn ScoringBackend>,
    config: &Config,
    texts: &[String],
    method: SimilarityMethod,
    json: bool,
) -> anyhow::Result<()> {
    let (snapshot, result) = score_texts(backend, config, texts).await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", format_report(&snapshot, &result, method));
    }
    Ok(())
}

/// Push `texts` through the same store and controller the TUI uses.
pub async fn score_texts(
    backend: Arc<dyn ScoringBackend>,
    config: &Config,
    texts: &[String],
) -> anyhow::Result<(Vec<Item>, ScoringResult)> {
    let mut store = ItemStore::new();
    for (i, text) in texts.iter().enumerate() {
        let id = store.add();
        store.edit_color(&id, color::PRESETS[i % color::PRESETS.len()]);
        store.edit_text(&id, text.as_str());
    }

    let items = store
        .submit()
        .ok_or_else(|| anyhow::anyhow!("nothing to compare"))?;

    let mut controller = Controller::new(config.models.default.clone(), config.limits.clone());
    let Some(request) = controller.compare(items) else {
        let reason = controller
            .last_error()
            .map(|e| e.message.clone())
            .unwrap_or_else(|| "all texts are blank".into());
        anyhow::bail!("{reason}");
    };

    let outcome = client::run_request(backend, request).await;
    controller.complete(outcome.seq, outcome.result);
    if let Some(err) = controller.last_error() {
        anyhow::bail!("{}", err.message);
    }

    let result = controller
        .result()
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("scoring finished without a result"))?;
    Ok((controller.snapshot().to_vec(), result))
}

/// Plain-text report: scores against the anchor, then PCA coordinates.
pub fn format_report(snapshot: &[Item], result: &ScoringResult, method: SimilarityMethod) -> String {
    let mut out = String::new();
    let width = snapshot
        .iter()
        .map(|i| i.text.chars().count())
        .max()
        .unwrap_or(0)
        .clamp(4, 40);

    let _ = writeln!(out, "model: {}", result.model);
    let _ = writeln!(out);
    let anchor = snapshot.first().map(|i| i.text.as_str()).unwrap_or("-");
    let _ = writeln!(out, "{} (anchor: {anchor})", method.axis_title());
    for p in similarity_points(snapshot, result, method) {
        let marker = if p.is_anchor { "*" } else { " " };
        let _ = writeln!(out, " {marker} {:<width$}  {:>10.6}", p.text, p.score);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "pca");
    for p in pca_points(snapshot, result) {
        let _ = writeln!(
            out,
            "   {:<width$}  {:>9.4} {:>9.4} {:>9.4}",
            p.text, p.point.x, p.point.y, p.point.z
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playground::types::{PcaPoint, Similarity};
    use std::collections::HashMap;

    #[test]
    fn test_format_report() {
        let snapshot = vec![
            Item::new("a", "red", "cat"),
            Item::new("b", "blue", "kitten"),
        ];
        let result = ScoringResult {
            model: "openai/text-embedding-3-small".into(),
            similarity: Similarity {
                cosine: HashMap::from([(
                    "a".to_string(),
                    HashMap::from([("b".to_string(), 0.123456)]),
                )]),
                ..Similarity::default()
            },
            pca: HashMap::from([
                ("a".to_string(), PcaPoint { x: 1.0, y: 0.0, z: 0.0 }),
                ("b".to_string(), PcaPoint { x: -1.0, y: 0.5, z: 0.25 }),
            ]),
        };
        let report = format_report(&snapshot, &result, SimilarityMethod::Cosine);
        assert!(report.starts_with("model: openai/text-embedding-3-small\n"));
        assert!(report.contains("cosine distance (anchor: cat)"));
        assert!(report.contains(" * cat       0.000000"));
        assert!(report.contains("kitten    0.123456"));
        assert!(report.contains("-1.0000"));
    }
}
