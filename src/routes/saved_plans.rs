use actix_web::{web, HttpResponse};
use bson::oid::ObjectId;

use crate::errors::PlanError;
use crate::middleware::auth_context::AuthenticatedUser;
use crate::models::plan::{PlanFilterOverrides, PlanSubmission, SavedPlan};
use crate::routes::plan::GeneratedPlanResponse;
use crate::services::{plan_service::PlanService, plan_store::PlanStore};

fn parse_plan_id(raw: &str) -> Result<ObjectId, PlanError> {
    ObjectId::parse_str(raw).map_err(|_| PlanError::InvalidId)
}

/*
    POST /api/plans
*/
pub async fn save(
    user: AuthenticatedUser,
    store: web::Data<dyn PlanStore>,
    input: web::Json<PlanSubmission>,
) -> Result<HttpResponse, PlanError> {
    let plan = SavedPlan::new(&user.user_id, input.into_inner());
    let saved = store.insert(plan).await?;

    Ok(HttpResponse::Created().json(saved))
}

/*
    GET /api/plans
*/
pub async fn list(
    user: AuthenticatedUser,
    store: web::Data<dyn PlanStore>,
) -> Result<HttpResponse, PlanError> {
    let plans = store.list_for_owner(&user.user_id).await?;
    Ok(HttpResponse::Ok().json(plans))
}

/*
    GET /api/plans/{id}
*/
pub async fn get_by_id(
    user: AuthenticatedUser,
    store: web::Data<dyn PlanStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, PlanError> {
    let id = parse_plan_id(&path)?;
    let plan = store
        .find_for_owner(id, &user.user_id)
        .await?
        .ok_or(PlanError::NotFound)?;

    Ok(HttpResponse::Ok().json(plan))
}

/*
    PUT /api/plans/{id}
*/
pub async fn update(
    user: AuthenticatedUser,
    store: web::Data<dyn PlanStore>,
    path: web::Path<String>,
    input: web::Json<PlanSubmission>,
) -> Result<HttpResponse, PlanError> {
    let id = parse_plan_id(&path)?;
    let plan = store
        .update_for_owner(id, &user.user_id, input.into_inner())
        .await?
        .ok_or(PlanError::NotFound)?;

    Ok(HttpResponse::Ok().json(plan))
}

/*
    POST /api/plans/{id}/regenerate
    Builds a fresh plan from the saved filters. Nothing is persisted; the
    client saves the result with PUT when the user accepts it.
*/
pub async fn regenerate(
    user: AuthenticatedUser,
    store: web::Data<dyn PlanStore>,
    service: web::Data<PlanService>,
    path: web::Path<String>,
    input: Option<web::Json<PlanFilterOverrides>>,
) -> Result<HttpResponse, PlanError> {
    let id = parse_plan_id(&path)?;
    let saved = store
        .find_for_owner(id, &user.user_id)
        .await?
        .ok_or(PlanError::NotFound)?;

    let overrides = input.map(web::Json::into_inner).unwrap_or_default();
    let filter = overrides.apply_to(&saved);
    let plan = service.generate(&filter).await?;

    Ok(HttpResponse::Ok().json(GeneratedPlanResponse { plan }))
}

/*
    DELETE /api/plans/{id}
*/
pub async fn delete(
    user: AuthenticatedUser,
    store: web::Data<dyn PlanStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, PlanError> {
    let id = parse_plan_id(&path)?;
    if store.delete_for_owner(id, &user.user_id).await? {
        log::info!("Deleted plan {} for user {}", id, user.user_id);
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(PlanError::NotFound)
    }
}
