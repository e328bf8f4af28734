mod support;

use std::thread;
use std::time::{Duration, Instant};

use netpredict::config::{self, AppConfig, CONFIG_FILE_NAME};
use netpredict::egui_app::controller::{EguiController, HealthStatus, PredictionOutcome};
use netpredict::telemetry::{IssueKind, SampleField};
use support::netpredict_env::NetpredictEnvGuard;
use support::service::FakeService;
use tempfile::tempdir;

fn wait_until(
    controller: &mut EguiController,
    mut done: impl FnMut(&EguiController) -> bool,
) {
    let now = Instant::now();
    for _ in 0..600 {
        controller.tick(now);
        if done(controller) {
            return;
        }
        thread::sleep(Duration::from_millis(10));
    }
    panic!("controller did not reach expected state");
}

#[test]
fn predicts_against_http_service() {
    let service = FakeService::start("200 OK", "latency_spike");
    let config = AppConfig::with_base_url(&service.base_url).unwrap();
    let mut controller = EguiController::new(config);
    controller.start(Instant::now());
    wait_until(&mut controller, |c| c.health_status() == HealthStatus::Healthy);

    controller.update_field(SampleField::LatencyMs, "250.5");
    controller.update_field(SampleField::Protocol, "UDP");
    assert!(controller.submit_prediction());
    wait_until(&mut controller, |c| !c.is_pending());

    let classification = controller.classification().unwrap();
    assert_eq!(classification.kind, IssueKind::LatencySpike);
    assert_eq!(classification.label, "LATENCY SPIKE");

    let seen: Vec<_> = service.requests.try_iter().collect();
    let predict = seen
        .iter()
        .find(|request| request.path == "/predict")
        .expect("predict request");
    assert_eq!(predict.method, "POST");
    let body: serde_json::Value = serde_json::from_str(&predict.body).unwrap();
    assert_eq!(body["latency_ms"], 250.5);
    assert_eq!(body["protocol"], "UDP");
    assert_eq!(body["device_type"], "router");
    assert!(
        seen.iter()
            .any(|request| request.method == "GET" && request.path == "/health")
    );
}

#[test]
fn unhealthy_service_blocks_submission() {
    let service = FakeService::start("503 Service Unavailable", "none");
    let config = AppConfig::with_base_url(&service.base_url).unwrap();
    let mut controller = EguiController::new(config);
    controller.start(Instant::now());
    wait_until(&mut controller, |c| c.health_status() == HealthStatus::Unhealthy);

    assert!(!controller.can_submit());
    assert!(!controller.submit_prediction());
    assert_eq!(controller.outcome(), &PredictionOutcome::Idle);
    thread::sleep(Duration::from_millis(50));
    assert!(
        service
            .requests
            .try_iter()
            .all(|request| request.path != "/predict")
    );
}

#[test]
fn load_or_default_reads_config_file_and_env_override() {
    let dir = tempdir().unwrap();
    let root = dir.path().join(".netpredict");
    std::fs::create_dir_all(&root).unwrap();
    std::fs::write(
        root.join(CONFIG_FILE_NAME),
        "api_base_url = \"http://127.0.0.1:9000/\"\nhealth_interval_ms = 5000\n",
    )
    .unwrap();

    {
        let _env = NetpredictEnvGuard::set_config_home(dir.path().to_path_buf());
        let config = config::load_or_default().unwrap();
        assert_eq!(config.api_base_url, "http://127.0.0.1:9000");
        assert_eq!(config.health_interval, Duration::from_secs(5));
        assert_eq!(config.health_timeout, Duration::from_secs(10));
    }

    let _env = NetpredictEnvGuard::set(dir.path().to_path_buf(), Some("https://api.example.test"));
    let config = config::load_or_default().unwrap();
    assert_eq!(config.api_base_url, "https://api.example.test");
    assert_eq!(config.health_interval, Duration::from_secs(5));
}

#[test]
fn missing_config_file_uses_defaults() {
    let dir = tempdir().unwrap();
    let _env = NetpredictEnvGuard::set_config_home(dir.path().to_path_buf());
    let config = config::load_or_default().unwrap();
    assert_eq!(config, AppConfig::default());
    assert!(dir.path().join(".netpredict").is_dir());
}
