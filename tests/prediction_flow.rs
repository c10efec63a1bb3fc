mod support;

use std::time::{Duration, Instant};

use oncoform::config::Settings;
use oncoform::egui_app::controller::FormController;
use oncoform::egui_app::state::SubmissionLifecycle;
use oncoform::egui_app::view_model::prediction_summary;
use oncoform::features::LABEL_ARTIFACT_FIELD;
use oncoform::prediction::GENERIC_FAILURE_MESSAGE;
use support::http::StubService;

fn controller_for(stub: &StubService) -> FormController {
    FormController::with_settings(Settings {
        service_url: stub.base_url.clone(),
    })
}

fn wait_until_settled(controller: &mut FormController) {
    let deadline = Instant::now() + Duration::from_secs(10);
    loop {
        controller.poll_background_jobs();
        if !controller.ui.form.lifecycle.is_pending() {
            return;
        }
        assert!(Instant::now() < deadline, "submission never settled");
        std::thread::sleep(Duration::from_millis(5));
    }
}

#[test]
fn submit_sends_every_measurement_field() {
    let stub = StubService::start("HTTP/1.1 200 OK", r#"{"predicted_class":0}"#);
    let mut controller = controller_for(&stub);

    controller.submit();
    wait_until_settled(&mut controller);

    let bodies = stub.request_bodies();
    assert_eq!(bodies.len(), 1);
    let payload: serde_json::Value = serde_json::from_str(&bodies[0]).unwrap();
    let object = payload.as_object().unwrap();
    assert_eq!(object.len(), 31);
    assert_eq!(object["mean radius"], serde_json::json!(14.5));
    assert_eq!(object["worst fractal dimension"], serde_json::json!(0.092));
    assert_eq!(object[LABEL_ARTIFACT_FIELD], serde_json::json!(0.0));
}

#[test]
fn edited_values_reach_the_wire() {
    let stub = StubService::start("HTTP/1.1 200 OK", r#"{"predicted_class":0}"#);
    let mut controller = controller_for(&stub);

    controller.update_field("mean radius", "17.25");
    controller.update_field("mean texture", "not a number");
    controller.submit();
    wait_until_settled(&mut controller);

    let payload: serde_json::Value = serde_json::from_str(&stub.request_bodies()[0]).unwrap();
    assert_eq!(payload["mean radius"], serde_json::json!(17.25));
    // Unparseable input is forwarded verbatim for the service to reject.
    assert_eq!(payload["mean texture"], serde_json::json!("not a number"));
}

#[test]
fn pending_submission_swallows_a_second_submit() {
    let stub = StubService::start_with_delay(
        "HTTP/1.1 200 OK",
        r#"{"predicted_class":0}"#,
        Duration::from_millis(300),
    );
    let mut controller = controller_for(&stub);

    controller.submit();
    assert!(controller.ui.form.lifecycle.is_pending());
    controller.submit();
    wait_until_settled(&mut controller);

    assert_eq!(stub.hit_count(), 1);
    assert!(matches!(
        controller.ui.form.lifecycle,
        SubmissionLifecycle::Succeeded(_)
    ));
}

#[test]
fn service_error_field_is_shown_verbatim() {
    let stub = StubService::start(
        "HTTP/1.1 400 BAD REQUEST",
        r#"{"error":"No input data provided"}"#,
    );
    let mut controller = controller_for(&stub);

    controller.submit();
    wait_until_settled(&mut controller);

    assert_eq!(
        controller.ui.form.lifecycle.error_message(),
        Some("No input data provided")
    );
    assert!(!controller.is_predict_in_progress());
}

#[test]
fn error_status_without_detail_reports_the_code() {
    let stub = StubService::start("HTTP/1.1 500 INTERNAL SERVER ERROR", "{}");
    let mut controller = controller_for(&stub);

    controller.submit();
    wait_until_settled(&mut controller);

    assert_eq!(
        controller.ui.form.lifecycle.error_message(),
        Some("HTTP 500")
    );
}

#[test]
fn malformed_success_body_falls_back_to_the_generic_message() {
    let stub = StubService::start("HTTP/1.1 200 OK", r#"{"confidence":0.9}"#);
    let mut controller = controller_for(&stub);

    controller.submit();
    wait_until_settled(&mut controller);

    assert_eq!(
        controller.ui.form.lifecycle.error_message(),
        Some(GENERIC_FAILURE_MESSAGE)
    );
}

#[test]
fn successful_prediction_feeds_the_result_panel() {
    let stub = StubService::start(
        "HTTP/1.1 200 OK",
        r#"{"predicted_class":1,"probability_default":0.873,"probability_repaid":0.127}"#,
    );
    let mut controller = controller_for(&stub);

    controller.submit();
    wait_until_settled(&mut controller);

    let result = controller.ui.form.lifecycle.result().unwrap();
    let summary = prediction_summary(result).unwrap();
    assert_eq!(summary.class_label, "Malignant (1)");
    assert!(summary.malignant);
    let probabilities = summary.probabilities.unwrap();
    assert_eq!(probabilities.default_percent, "87.30%");
    assert_eq!(probabilities.repaid_percent, "12.70%");
}

#[test]
fn probabilities_are_omitted_when_either_side_is_missing() {
    let stub = StubService::start(
        "HTTP/1.1 200 OK",
        r#"{"predicted_class":0,"probability_default":0.2}"#,
    );
    let mut controller = controller_for(&stub);

    controller.submit();
    wait_until_settled(&mut controller);

    let result = controller.ui.form.lifecycle.result().unwrap();
    let summary = prediction_summary(result).unwrap();
    assert_eq!(summary.class_label, "Benign (0)");
    assert!(summary.probabilities.is_none());
}
