use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::errors::PlanError;
use crate::models::plan::{FilterOptions, GeneratedItineraryItem, PlanFilter};
use crate::services::plan_service::PlanService;

#[derive(Debug, Serialize)]
pub struct GeneratedPlanResponse {
    pub plan: Vec<GeneratedItineraryItem>,
}

/*
    /api/options
*/
pub async fn get_options() -> HttpResponse {
    HttpResponse::Ok().json(FilterOptions::default())
}

/*
    /api/plans/generate
*/
pub async fn generate(
    service: web::Data<PlanService>,
    input: web::Json<PlanFilter>,
) -> Result<HttpResponse, PlanError> {
    let filter = input.into_inner();
    let plan = service.generate(&filter).await?;

    Ok(HttpResponse::Ok().json(GeneratedPlanResponse { plan }))
}
