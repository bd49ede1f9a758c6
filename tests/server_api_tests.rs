use fairway::server::routes::route_request;

const FIELD: &str = r#"{
  "pool_id": "open-2026",
  "golfers": [
    {"id": "a", "name": "Ames", "tier": 1, "score": -2, "thru": 18, "position": "T4"},
    {"id": "b", "name": "Baker", "tier": 1, "score": -1},
    {"id": "c", "name": "Cole", "tier": 2, "score": 0},
    {"id": "d", "name": "Diaz", "tier": 3, "score": 1},
    {"id": "e", "name": "Ellis", "tier": 4, "score": 2},
    {"id": "f", "name": "Fox", "tier": 5, "score": 3},
    {"id": "g", "name": "Grant", "tier": 6, "score": 4}
  ]
}"#;

fn json(body: &str) -> serde_json::Value {
    serde_json::from_str(body).expect("response should be valid json")
}

#[test]
fn health_endpoint_returns_ok_json() {
    let response = route_request("GET", "/api/health", "", 21);
    assert_eq!(response.status_code, 200);
    assert_eq!(response.content_type, "application/json");
    assert_eq!(json(&response.body)["status"], "ok");
}

#[test]
fn unicorn_endpoint_returns_winning_roster() {
    let response = route_request("POST", "/api/unicorn", FIELD, 21);
    assert_eq!(response.status_code, 200);

    let payload = json(&response.body);
    assert_eq!(payload["status"], "ok");
    assert_eq!(payload["pool_id"], "open-2026");
    assert_eq!(payload["min_points"], 21);
    assert!(payload["computed_at"].as_str().is_some());
    assert!(payload.get("message").is_none());

    let result = &payload["result"];
    assert_eq!(result["total_score"], 1);
    assert_eq!(result["total_points"], 21);
    assert_eq!(result["alternative_count"], 0);
    assert_eq!(result["multiset"], serde_json::json!([1, 2, 3, 4, 5, 6]));

    let golfers = result["golfers"].as_array().expect("golfers should be an array");
    assert_eq!(golfers.len(), 6);
    assert_eq!(golfers[0]["golfer_id"], "a");
    assert_eq!(golfers[0]["counted"], true);
    assert_eq!(golfers[0]["position"], "T4");
    assert_eq!(golfers[0]["progress"], "F");
    assert_eq!(golfers[5]["counted"], false);

    assert_eq!(payload["stats"]["buildable"], 1);
}

#[test]
fn unicorn_endpoint_reports_no_valid_team_as_success() {
    let body = FIELD.replace("\"pool_id\": \"open-2026\",", "\"pool_id\": \"open-2026\", \"min_points\": 30,");
    let response = route_request("POST", "/api/unicorn", &body, 21);
    assert_eq!(response.status_code, 200);

    let payload = json(&response.body);
    assert_eq!(payload["min_points"], 30);
    assert!(payload["result"].is_null());
    assert!(payload["message"].as_str().is_some_and(|m| m.starts_with("no valid team")));
}

#[test]
fn unicorn_endpoint_rejects_bad_bodies() {
    let response = route_request("POST", "/api/unicorn", "{not json", 21);
    assert_eq!(response.status_code, 400);
    assert!(json(&response.body)["message"]
        .as_str()
        .is_some_and(|m| m.starts_with("Invalid request body")));

    let invalid = r#"{"pool_id":"p","golfers":[{"id":"x","name":"X","tier":7,"score":0}]}"#;
    let response = route_request("POST", "/api/unicorn", invalid, 21);
    assert_eq!(response.status_code, 400);
    let payload = json(&response.body);
    assert_eq!(payload["message"], "Validation failed");
    assert_eq!(payload["errors"].as_array().map(Vec::len), Some(1));
    assert_eq!(payload["errors"][0]["severity"], "error");
}

#[test]
fn multisets_endpoint_counts_for_requested_minimum() {
    let response = route_request("GET", "/api/multisets?min_points=0", "", 21);
    assert_eq!(response.status_code, 200);
    assert_eq!(json(&response.body)["count"], 924);

    let response = route_request("GET", "/api/multisets?min_points=37", "", 21);
    assert_eq!(json(&response.body)["count"], 0);

    let response = route_request("GET", "/api/multisets", "", 36);
    let payload = json(&response.body);
    assert_eq!(payload["min_points"], 36);
    assert_eq!(payload["multisets"], serde_json::json!([[6, 6, 6, 6, 6, 6]]));

    let response = route_request("GET", "/api/multisets?min_points=lots", "", 21);
    assert_eq!(response.status_code, 400);
}

#[test]
fn validate_endpoint_reports_diagnostics() {
    let response = route_request("POST", "/api/validate", FIELD, 21);
    assert_eq!(response.status_code, 200);
    let payload = json(&response.body);
    assert_eq!(payload["valid"], true);
    // Tier 0 is empty.
    assert_eq!(payload["report"]["diagnostics"][0]["severity"], "info");
}

#[test]
fn unknown_routes_and_methods_are_rejected() {
    assert_eq!(route_request("GET", "/api/nope", "", 21).status_code, 404);
    assert_eq!(route_request("GET", "/api/unicorn", "", 21).status_code, 405);
}

#[test]
fn implausible_scores_are_rejected_before_searching() {
    let golfers: Vec<String> = (1..=6)
        .map(|tier| {
            format!(r#"{{"id":"g{tier}","name":"G{tier}","tier":{tier},"score":1000000000}}"#)
        })
        .collect();
    let body = format!(r#"{{"pool_id":"p","golfers":[{}]}}"#, golfers.join(","));

    let response = route_request("POST", "/api/unicorn", &body, 21);
    assert_eq!(response.status_code, 400);
    let payload = json(&response.body);
    assert_eq!(payload["message"], "Validation failed");
    assert_eq!(payload["errors"].as_array().map(Vec::len), Some(6));

    let response = route_request("POST", "/api/validate", &body, 21);
    assert_eq!(response.status_code, 200);
    assert_eq!(json(&response.body)["valid"], false);
}
