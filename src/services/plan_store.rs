use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Document};
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::{options::ReturnDocument, Client, Collection, Database};

use crate::errors::PlanError;
use crate::models::plan::{plan_title, PlanSubmission, SavedPlan};

const PLAN_COLLECTION: &str = "Plans";

// Document keys, as serialized from `SavedPlan`.
const ID: &str = "_id";
const OWNER_ID: &str = "ownerId";
const TITLE: &str = "title";
const LOCATION: &str = "location";
const ACTIVITY_TYPES: &str = "activityTypes";
const TIME_FRAME: &str = "timeFrame";
const ACTIVITIES: &str = "activities";
const CREATED_AT: &str = "createdAt";
const UPDATED_AT: &str = "updatedAt";

fn owned_plan(id: ObjectId, owner_id: &str) -> Document {
    doc! { ID: id, OWNER_ID: owner_id }
}

fn update_document(submission: &PlanSubmission) -> Result<Document, PlanError> {
    Ok(doc! {
        "$set": {
            TITLE: plan_title(&submission.location),
            LOCATION: submission.location.as_str(),
            ACTIVITY_TYPES: bson::to_bson(&submission.activity_types)?,
            TIME_FRAME: bson::to_bson(&submission.time_frame)?,
            ACTIVITIES: bson::to_bson(&submission.activities)?,
            UPDATED_AT: bson::to_bson(&Utc::now())?,
        }
    })
}

/// Persistence for saved plans. Every lookup is scoped to the owning user.
#[async_trait]
pub trait PlanStore: Send + Sync {
    async fn ping(&self) -> Result<(), PlanError>;

    async fn insert(&self, plan: SavedPlan) -> Result<SavedPlan, PlanError>;

    /// Plans owned by `owner_id`, newest first.
    async fn list_for_owner(&self, owner_id: &str) -> Result<Vec<SavedPlan>, PlanError>;

    async fn find_for_owner(
        &self,
        id: ObjectId,
        owner_id: &str,
    ) -> Result<Option<SavedPlan>, PlanError>;

    /// Replaces the plan's filters and activities. `None` if no such plan.
    async fn update_for_owner(
        &self,
        id: ObjectId,
        owner_id: &str,
        submission: PlanSubmission,
    ) -> Result<Option<SavedPlan>, PlanError>;

    /// Returns whether a plan was deleted.
    async fn delete_for_owner(&self, id: ObjectId, owner_id: &str) -> Result<bool, PlanError>;
}

pub struct MongoPlanStore {
    database: Database,
    collection: Collection<SavedPlan>,
}

impl MongoPlanStore {
    pub fn new(client: &Client, database: &str) -> Self {
        let database = client.database(database);
        let collection = database.collection(PLAN_COLLECTION);
        Self {
            database,
            collection,
        }
    }
}

#[async_trait]
impl PlanStore for MongoPlanStore {
    async fn ping(&self) -> Result<(), PlanError> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    async fn insert(&self, mut plan: SavedPlan) -> Result<SavedPlan, PlanError> {
        let result = self.collection.insert_one(&plan).await?;
        plan.id = result.inserted_id.as_object_id();
        log::info!("Saved plan {:?} for user {}", plan.id, plan.owner_id);
        Ok(plan)
    }

    async fn list_for_owner(&self, owner_id: &str) -> Result<Vec<SavedPlan>, PlanError> {
        let cursor = self
            .collection
            .find(doc! { OWNER_ID: owner_id })
            .sort(doc! { CREATED_AT: -1 })
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_for_owner(
        &self,
        id: ObjectId,
        owner_id: &str,
    ) -> Result<Option<SavedPlan>, PlanError> {
        Ok(self
            .collection
            .find_one(owned_plan(id, owner_id))
            .await?)
    }

    async fn update_for_owner(
        &self,
        id: ObjectId,
        owner_id: &str,
        submission: PlanSubmission,
    ) -> Result<Option<SavedPlan>, PlanError> {
        let update = update_document(&submission)?;

        Ok(self
            .collection
            .find_one_and_update(owned_plan(id, owner_id), update)
            .return_document(ReturnDocument::After)
            .await?)
    }

    async fn delete_for_owner(&self, id: ObjectId, owner_id: &str) -> Result<bool, PlanError> {
        let result = self
            .collection
            .delete_one(owned_plan(id, owner_id))
            .await?;
        Ok(result.deleted_count > 0)
    }
}
