use async_trait::async_trait;
use verrocchio::{
    render_report, Generation, ModelDriver, NullObserver, PipelineRunner, Stage, TokenUsage,
    VerrocchioResult,
};

/// Mock driver that echoes a canned document per call.
struct ScriptedDriver {
    responses: Vec<&'static str>,
    cursor: std::sync::Mutex<usize>,
}

impl ScriptedDriver {
    fn new(responses: Vec<&'static str>) -> Self {
        Self {
            responses,
            cursor: std::sync::Mutex::new(0),
        }
    }
}

#[async_trait]
impl ModelDriver for ScriptedDriver {
    async fn generate(&self, _prompt: &str) -> VerrocchioResult<Generation> {
        let mut cursor = self.cursor.lock().unwrap();
        let text = self.responses[*cursor];
        *cursor += 1;
        Ok(Generation::new(text, TokenUsage::new(500, 250)))
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "scripted-v1"
    }
}

#[tokio::test]
async fn test_run_and_export_report() {
    let driver = ScriptedDriver::new(vec![
        "The market looks viable.",
        "Build a minimal MVP.",
        "One persona, three screens.",
        "Static site plus local storage.",
        "--- index.html ---\n<html></html>",
        "A promising product overall.",
    ]);
    let runner = PipelineRunner::new(driver);
    let mut observer = NullObserver;

    let outcome = runner
        .run("a plant care reminder app", &mut observer)
        .await
        .expect("run succeeded");

    assert_eq!(outcome.results().len(), 6);
    assert_eq!(
        outcome.results().get(Stage::Summary),
        Some("A promising product overall.")
    );

    let report = render_report(outcome.results(), outcome.total_cost());
    assert!(report.starts_with("PRODUCT DEVELOPMENT RESULTS\n"));
    assert!(report.contains("The market looks viable."));
    assert!(report.contains("--- index.html ---"));

    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("report.txt");
    std::fs::write(&path, &report).expect("write report");
    let written = std::fs::read_to_string(&path).expect("read report");
    assert_eq!(written, report);
}

#[tokio::test]
async fn test_total_cost_matches_scripted_usage() {
    let driver = ScriptedDriver::new(vec!["a", "b", "c", "d", "e", "f"]);
    let runner = PipelineRunner::new(driver);
    let mut observer = NullObserver;

    let outcome = runner
        .run("an idea", &mut observer)
        .await
        .expect("run succeeded");

    // Six calls at 500 input / 250 output tokens each.
    let per_call = TokenUsage::new(500, 250).cost();
    assert!((outcome.total_cost() - per_call * 6.0).abs() < 1e-12);
}
