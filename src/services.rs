pub mod category_mapping;
pub mod place_classifier;
pub mod places_search_service;
pub mod plan_generation_service;
pub mod plan_service;
pub mod plan_store;
pub mod time_frame_templates;
