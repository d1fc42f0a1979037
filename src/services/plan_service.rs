use std::sync::Arc;

use crate::errors::PlanError;
use crate::models::plan::{GeneratedItineraryItem, PlanFilter, SlotCategory};
use crate::services::{
    category_mapping::CategoryMapping,
    place_classifier::classify,
    places_search_service::{build_text_query, PlaceSearch},
    plan_generation_service::generate_plan,
    time_frame_templates::TimeFrameTemplates,
};

/// Turns a user's filter into a generated day plan.
pub struct PlanService {
    categories: CategoryMapping,
    templates: TimeFrameTemplates,
    search: Arc<dyn PlaceSearch>,
}

impl PlanService {
    pub fn new(search: Arc<dyn PlaceSearch>) -> Self {
        Self::with_tables(search, CategoryMapping::default(), TimeFrameTemplates::default())
    }

    pub fn with_tables(
        search: Arc<dyn PlaceSearch>,
        categories: CategoryMapping,
        templates: TimeFrameTemplates,
    ) -> Self {
        Self {
            categories,
            templates,
            search,
        }
    }

    pub fn categories(&self) -> &CategoryMapping {
        &self.categories
    }

    pub fn templates(&self) -> &TimeFrameTemplates {
        &self.templates
    }

    pub async fn generate(
        &self,
        filter: &PlanFilter,
    ) -> Result<Vec<GeneratedItineraryItem>, PlanError> {
        filter.validate()?;

        let keywords = self
            .categories
            .map_interest_categories(&filter.selected_activity_types());
        let query = build_text_query(&keywords, filter.location.trim());

        let places = self.search.search_text(&query).await?;
        if places.is_empty() {
            return Err(PlanError::NoPlacesMatched);
        }

        let time_frame = filter.time_frame();
        let plan = generate_plan(
            &places,
            self.templates.slots(time_frame),
            &mut rand::thread_rng(),
        );

        if plan.is_empty() {
            log::warn!(
                "No plan for {:?} from {} places ({} food)",
                time_frame,
                places.len(),
                places
                    .iter()
                    .filter(|p| classify(p) == SlotCategory::Food)
                    .count()
            );
            return Err(PlanError::NoResults);
        }

        Ok(plan)
    }
}
