use actix_web::{web, HttpResponse, Result as ActixResult};
use shared_types::{ErrorResponse, ReelBrief};
use uuid::Uuid;

/// POST /api/generate
///
/// Takes the raw body rather than `web::Json` so that the two failure
/// classes stay distinct on the wire: a body that does not parse is an
/// unclassified error (generic 500, detail stays in the server log),
/// while a parsed body with a missing or non-string field is a 400
/// naming the first bad field in brief order.
pub async fn generate_blueprint(body: web::Bytes) -> ActixResult<HttpResponse> {
    let request_id = Uuid::new_v4();

    let value: serde_json::Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(e) => {
            tracing::error!("Agent generation failed [{}]: {}", request_id, e);
            return Ok(HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Internal Server Error")));
        }
    };

    let brief = match ReelBrief::from_value(&value) {
        Ok(brief) => brief,
        Err(e) => {
            tracing::info!("Rejected brief [{}]: {}", request_id, e);
            return Ok(HttpResponse::BadRequest().json(ErrorResponse::new(e.to_string())));
        }
    };

    tracing::info!(
        "Generating blueprint [{}]: tone={:?} platform={:?}",
        request_id,
        brief.tone,
        brief.platform
    );

    let blueprint = reelcraft_agents::generate_blueprint(&brief);

    Ok(HttpResponse::Ok().json(blueprint))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::json;

    fn full_body() -> serde_json::Value {
        json!({
            "topic": "Launch-ready workout app growth",
            "goal": "Triple top-of-funnel signups this month",
            "audience": "busy professionals reclaiming their time",
            "tone": "bold",
            "offer": "14-day results accelerator",
            "platform": "Instagram Reels"
        })
    }

    #[actix_web::test]
    async fn test_each_missing_field_returns_400() {
        let app = test::init_service(
            App::new().route("/api/generate", web::post().to(generate_blueprint)),
        )
        .await;

        for field in shared_types::BRIEF_FIELDS {
            let mut body = full_body();
            body.as_object_mut().unwrap().remove(field);

            let req = test::TestRequest::post()
                .uri("/api/generate")
                .set_json(&body)
                .to_request();
            let resp = test::call_service(&app, req).await;

            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "field {}", field);
            let error: ErrorResponse = test::read_body_json(resp).await;
            assert_eq!(error.error, format!("Missing or invalid field: {}", field));
        }
    }

    #[actix_web::test]
    async fn test_non_string_field_returns_400() {
        let app = test::init_service(
            App::new().route("/api/generate", web::post().to(generate_blueprint)),
        )
        .await;

        let mut body = full_body();
        body["offer"] = json!(14);

        let req = test::TestRequest::post()
            .uri("/api/generate")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let error: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(error.error, "Missing or invalid field: offer");
    }

    #[actix_web::test]
    async fn test_valid_brief_returns_full_blueprint() {
        let app = test::init_service(
            App::new().route("/api/generate", web::post().to(generate_blueprint)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/generate")
            .set_json(&full_body())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let blueprint: serde_json::Value = test::read_body_json(resp).await;

        assert!(blueprint["summary"].is_string());
        assert!(blueprint["hook"].is_string());
        assert!(blueprint["callToAction"].is_string());
        assert!(blueprint["caption"].is_string());

        let beats = blueprint["scriptBeats"].as_array().unwrap();
        assert!(!beats.is_empty());
        for beat in beats {
            assert!(beat["title"].is_string());
            assert!(beat["content"].is_string());
        }

        for list in [
            "hashtags",
            "productionChecklist",
            "metricsDashboard",
            "distributionPlan",
        ] {
            let items = blueprint[list].as_array().unwrap();
            assert!(!items.is_empty(), "{} is empty", list);
            assert!(items.iter().all(serde_json::Value::is_string));
        }
    }

    #[actix_web::test]
    async fn test_empty_string_fields_are_accepted() {
        let app = test::init_service(
            App::new().route("/api/generate", web::post().to(generate_blueprint)),
        )
        .await;

        let mut body = full_body();
        body["topic"] = json!("");
        body["offer"] = json!("");

        let req = test::TestRequest::post()
            .uri("/api/generate")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_unparseable_body_returns_generic_500() {
        let app = test::init_service(
            App::new().route("/api/generate", web::post().to(generate_blueprint)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/generate")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let error: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(error, json!({ "error": "Internal Server Error" }));
    }

    #[actix_web::test]
    async fn test_minimal_brief_end_to_end() {
        let app = test::init_service(
            App::new().route("/api/generate", web::post().to(generate_blueprint)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/generate")
            .set_json(json!({
                "topic": "A", "goal": "B", "audience": "C",
                "tone": "bold", "offer": "D", "platform": "TikTok"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let blueprint: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(blueprint.as_object().unwrap().len(), 9);
    }

    #[actix_web::test]
    async fn test_truncated_brief_names_first_missing_field() {
        let app = test::init_service(
            App::new().route("/api/generate", web::post().to(generate_blueprint)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/generate")
            .set_json(json!({ "topic": "A", "goal": "B" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let error: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(error, json!({ "error": "Missing or invalid field: audience" }));
    }
}
