use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::SearchPipeline;
use crate::models::{ErrorResponse, HealthResponse, SearchRequest, SearchResponse};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub pipeline: SearchPipeline,
    /// Upper bound applied on top of request validation
    pub max_limit: u16,
}

/// Configure all search-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/stats", web::get().to(get_stats))
        .route("/search", web::post().to(search_influencers));
}

/// Service description
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "service": "Influencer Search API",
        "status": "active",
        "endpoints": {
            "POST /api/v1/search": "Search influencers with natural language",
            "GET /api/v1/stats": "Get dataset statistics",
            "GET /api/v1/health": "Service health",
        }
    }))
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let loaded = state.pipeline.catalog().len();
    let status = if loaded > 0 { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        influencers_loaded: loaded,
        timestamp: chrono::Utc::now(),
    })
}

/// Dataset statistics endpoint
///
/// GET /api/v1/stats
async fn get_stats(state: web::Data<AppState>) -> impl Responder {
    match state.pipeline.catalog().stats() {
        Some(stats) => HttpResponse::Ok().json(stats),
        None => HttpResponse::ServiceUnavailable().json(ErrorResponse {
            error: "Data not loaded".to_string(),
            message: "The influencer catalog is empty".to_string(),
            status_code: 503,
        }),
    }
}

/// Search endpoint
///
/// POST /api/v1/search?prompt={text}&limit={1..20}
///
/// Example prompts:
/// - "Female fitness influencers on Instagram under 30"
/// - "Tech YouTubers with 50k-200k followers"
/// - "Affordable travel bloggers"
async fn search_influencers(
    state: web::Data<AppState>,
    req: web::Query<SearchRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for search request: field_errors={:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let request_id = uuid::Uuid::new_v4();
    let limit = req.limit.min(state.max_limit) as usize;

    tracing::info!("[{}] Searching: {:?}, limit: {}", request_id, req.prompt, limit);

    let outcome = match state.pipeline.resolve_and_search(&req.prompt, limit).await {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!("[{}] Search failed: {}", request_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Search processing error".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let response = SearchResponse {
        prompt: req.prompt.clone(),
        interpreted_criteria: outcome.criteria,
        filters_applied: outcome.filter_report,
        total_matches: outcome.total_matches,
        results_returned: outcome.returned_results.len(),
        influencers: outcome.returned_results,
    };

    tracing::info!(
        "[{}] Returning {} of {} matches ({})",
        request_id,
        response.results_returned,
        response.total_matches,
        response.filters_applied
    );

    HttpResponse::Ok().json(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Catalog, SearchPipeline};
    use crate::models::InfluencerRecord;
    use crate::services::DisabledExtractor;
    use actix_web::{test, App};
    use std::sync::Arc;

    fn create_record(name: &str, gender: &str, engagement: f64) -> InfluencerRecord {
        InfluencerRecord {
            name: name.to_string(),
            category: "fitness".to_string(),
            content_type: "reels".to_string(),
            platform: "ig".to_string(),
            total_followers: 40_000,
            overall_engagement: engagement,
            rate: 4000.0,
            age: 26,
            gender: gender.to_string(),
            email: format!("{}@example.com", name),
            phone: "555-0100".to_string(),
        }
    }

    fn state_with(records: Vec<InfluencerRecord>) -> AppState {
        AppState {
            pipeline: SearchPipeline::new(Arc::new(Catalog::new(records)), Arc::new(DisabledExtractor)),
            max_limit: 20,
        }
    }

    #[actix_web::test]
    async fn test_search_endpoint() {
        let state = state_with(vec![
            create_record("ana", "female", 4.0),
            create_record("raj", "male", 7.0),
            create_record("mia", "female", 6.0),
        ]);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/search?prompt=female%20fitness%20creators&limit=1")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["total_matches"], 2);
        assert_eq!(body["results_returned"], 1);
        assert_eq!(body["influencers"][0]["name"], "mia");
        assert_eq!(body["filters_applied"], "category: fitness, gender: female");
        assert_eq!(body["interpreted_criteria"]["gender"], "female");
    }

    #[actix_web::test]
    async fn test_search_rejects_out_of_range_limit() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with(vec![])))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/search?prompt=tech&limit=50")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_stats_unavailable_for_empty_catalog() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with(vec![])))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/stats").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::SERVICE_UNAVAILABLE);
    }

    #[actix_web::test]
    async fn test_health_reports_catalog_size() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with(vec![create_record("ana", "female", 4.0)])))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: HealthResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.status, "healthy");
        assert_eq!(body.influencers_loaded, 1);
    }
}
