#![allow(dead_code)]

use actix_web::{
    dev::{Service, ServiceResponse},
    http::StatusCode,
    web, App,
};
use async_trait::async_trait;
use bson::oid::ObjectId;
use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex,
};
use std::time::Duration;

use planago_api::{
    config::{AppConfig, PlacesConfig},
    errors::PlanError,
    middleware::auth::Claims,
    models::{
        place::{LocalizedText, PlaceRecord},
        plan::{plan_title, PlanSubmission, SavedPlan},
    },
    routes,
    services::{places_search_service::PlaceSearch, plan_service::PlanService, plan_store::PlanStore},
};

pub const TEST_SECRET: &str = "test_secret";

/// Canned provider behaviour for [`StubPlaceSearch`].
#[derive(Clone)]
pub enum StubResponse {
    Places(Vec<PlaceRecord>),
    Status(u16),
}

pub struct StubPlaceSearch {
    response: Mutex<StubResponse>,
    queries: Mutex<Vec<String>>,
}

impl StubPlaceSearch {
    pub fn new(response: StubResponse) -> Self {
        Self {
            response: Mutex::new(response),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn respond_with(&self, response: StubResponse) {
        *self.response.lock().unwrap() = response;
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlaceSearch for StubPlaceSearch {
    async fn search_text(&self, query: &str) -> Result<Vec<PlaceRecord>, PlanError> {
        self.queries.lock().unwrap().push(query.to_string());
        match self.response.lock().unwrap().clone() {
            StubResponse::Places(places) => Ok(places),
            StubResponse::Status(400) => Err(PlanError::SearchRejected),
            StubResponse::Status(429) => Err(PlanError::RateLimited),
            StubResponse::Status(code) => Err(PlanError::UpstreamStatus(code)),
        }
    }
}

#[derive(Default)]
pub struct InMemoryPlanStore {
    plans: Mutex<Vec<SavedPlan>>,
    offline: AtomicBool,
}

impl InMemoryPlanStore {
    pub fn len(&self) -> usize {
        self.plans.lock().unwrap().len()
    }

    /// Makes `ping` fail, as an unreachable database would.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }
}

#[async_trait]
impl PlanStore for InMemoryPlanStore {
    async fn ping(&self) -> Result<(), PlanError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(PlanError::Config("storage offline".to_string()));
        }
        Ok(())
    }

    async fn insert(&self, mut plan: SavedPlan) -> Result<SavedPlan, PlanError> {
        plan.id = Some(ObjectId::new());
        self.plans.lock().unwrap().push(plan.clone());
        Ok(plan)
    }

    async fn list_for_owner(&self, owner_id: &str) -> Result<Vec<SavedPlan>, PlanError> {
        let mut plans: Vec<SavedPlan> = self
            .plans
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.owner_id == owner_id)
            .cloned()
            .collect();
        plans.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(plans)
    }

    async fn find_for_owner(
        &self,
        id: ObjectId,
        owner_id: &str,
    ) -> Result<Option<SavedPlan>, PlanError> {
        Ok(self
            .plans
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == Some(id) && p.owner_id == owner_id)
            .cloned())
    }

    async fn update_for_owner(
        &self,
        id: ObjectId,
        owner_id: &str,
        submission: PlanSubmission,
    ) -> Result<Option<SavedPlan>, PlanError> {
        let mut plans = self.plans.lock().unwrap();
        let Some(plan) = plans
            .iter_mut()
            .find(|p| p.id == Some(id) && p.owner_id == owner_id)
        else {
            return Ok(None);
        };

        plan.title = plan_title(&submission.location);
        plan.location = submission.location;
        plan.activity_types = submission.activity_types;
        plan.time_frame = submission.time_frame;
        plan.activities = submission.activities;
        plan.updated_at = Some(Utc::now());
        Ok(Some(plan.clone()))
    }

    async fn delete_for_owner(&self, id: ObjectId, owner_id: &str) -> Result<bool, PlanError> {
        let mut plans = self.plans.lock().unwrap();
        let before = plans.len();
        plans.retain(|p| !(p.id == Some(id) && p.owner_id == owner_id));
        Ok(plans.len() < before)
    }
}

pub struct TestApp {
    pub config: AppConfig,
    pub search: Arc<StubPlaceSearch>,
    pub store: Arc<InMemoryPlanStore>,
}

impl TestApp {
    pub fn new(places: Vec<PlaceRecord>) -> Self {
        Self::with_response(StubResponse::Places(places))
    }

    pub fn with_response(response: StubResponse) -> Self {
        Self {
            config: test_config(),
            search: Arc::new(StubPlaceSearch::new(response)),
            store: Arc::new(InMemoryPlanStore::default()),
        }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let search: Arc<dyn PlaceSearch> = self.search.clone();
        let store: Arc<dyn PlanStore> = self.store.clone();

        App::new()
            .app_data(web::Data::new(self.config.clone()))
            .app_data(web::Data::new(PlanService::new(search)))
            .app_data(web::Data::from(store))
            .configure(routes::configure)
    }
}

pub fn test_config() -> AppConfig {
    AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        mongo_uri: "mongodb://localhost:27017".into(),
        database: "PlanagoTest".to_string(),
        jwt_secret: TEST_SECRET.into(),
        places: PlacesConfig {
            api_key: "test-key".into(),
            base_url: "http://127.0.0.1:1".to_string(),
            timeout: Duration::from_secs(2),
        },
    }
}

pub fn bearer_token(user_id: &str) -> String {
    let now = Utc::now().timestamp() as usize;
    let claims = Claims {
        sub: format!("{}@example.com", user_id),
        iat: now,
        exp: now + 3600,
        user_id: user_id.to_string(),
    };
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap();
    format!("Bearer {}", token)
}

pub fn place(id: &str, types: &[&str]) -> PlaceRecord {
    PlaceRecord {
        id: Some(id.to_string()),
        display_name: Some(LocalizedText {
            text: Some(format!("Place {}", id)),
            language_code: Some("sv".to_string()),
        }),
        formatted_address: Some(format!("Storgatan {}", id)),
        google_maps_uri: Some(format!("https://maps.google.com/?cid={}", id)),
        types: Some(types.iter().map(|t| t.to_string()).collect()),
    }
}

/// `food` restaurants followed by `activity` museums.
pub fn sample_places(food: usize, activity: usize) -> Vec<PlaceRecord> {
    (0..food)
        .map(|i| place(&format!("food{}", i), &["restaurant", "food"]))
        .chain((0..activity).map(|i| place(&format!("act{}", i), &["museum"])))
        .collect()
}

/// Status of a request, including requests rejected by middleware before they
/// reach a handler.
pub async fn status_of<S, R, B>(app: &S, req: R) -> StatusCode
where
    S: Service<R, Response = ServiceResponse<B>, Error = actix_web::Error>,
{
    match app.call(req).await {
        Ok(resp) => resp.status(),
        Err(err) => err.as_response_error().status_code(),
    }
}
