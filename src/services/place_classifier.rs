use crate::models::{place::PlaceRecord, plan::SlotCategory};

/// Provider type tags that mark a place as somewhere to eat or drink.
pub const FOOD_TYPE_TAGS: [&str; 3] = ["restaurant", "cafe", "bar"];

/// Food if any type tag is a food tag, otherwise Activity.
pub fn classify(place: &PlaceRecord) -> SlotCategory {
    let is_food = place
        .type_tags()
        .iter()
        .any(|tag| FOOD_TYPE_TAGS.contains(&tag.as_str()));

    if is_food {
        SlotCategory::Food
    } else {
        SlotCategory::Activity
    }
}
