//! Day plan generation.
//!
//! Places are split into a food bucket and an activity bucket, each bucket is
//! shuffled, and the time-frame template is walked in order taking one place
//! from the matching bucket per slot. A slot whose bucket is empty is left out
//! of the plan; a place is never used twice.

use rand::{seq::SliceRandom, Rng};

use crate::models::{
    place::PlaceRecord,
    plan::{GeneratedItineraryItem, Slot, SlotCategory, SlotFill},
};
use crate::services::place_classifier::classify;

/// Result of a generation run: the compacted plan plus per-slot fill status.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReport {
    pub items: Vec<GeneratedItineraryItem>,
    pub slots: Vec<SlotFill>,
}

impl GenerationReport {
    pub fn unfilled_slots(&self) -> impl Iterator<Item = &SlotFill> {
        self.slots.iter().filter(|slot| !slot.filled)
    }
}

struct Buckets<'p> {
    food: std::vec::IntoIter<&'p PlaceRecord>,
    activity: std::vec::IntoIter<&'p PlaceRecord>,
}

impl<'p> Buckets<'p> {
    fn shuffled<R: Rng + ?Sized>(places: &'p [PlaceRecord], rng: &mut R) -> Self {
        let (mut food, mut activity): (Vec<&PlaceRecord>, Vec<&PlaceRecord>) = places
            .iter()
            .partition(|place| classify(place) == SlotCategory::Food);

        log::debug!(
            "Bucketed {} places: {} food, {} activity",
            places.len(),
            food.len(),
            activity.len()
        );

        food.shuffle(rng);
        activity.shuffle(rng);

        Self {
            food: food.into_iter(),
            activity: activity.into_iter(),
        }
    }

    fn take(&mut self, category: SlotCategory) -> Option<&'p PlaceRecord> {
        match category {
            SlotCategory::Food => self.food.next(),
            SlotCategory::Activity => self.activity.next(),
        }
    }
}

/// Builds a day plan from `places` following `template`.
pub fn generate_plan<R: Rng + ?Sized>(
    places: &[PlaceRecord],
    template: &[Slot],
    rng: &mut R,
) -> Vec<GeneratedItineraryItem> {
    generate_plan_with_report(places, template, rng).items
}

/// Same as [`generate_plan`], also reporting which template slots were filled.
pub fn generate_plan_with_report<R: Rng + ?Sized>(
    places: &[PlaceRecord],
    template: &[Slot],
    rng: &mut R,
) -> GenerationReport {
    let mut buckets = Buckets::shuffled(places, rng);
    let mut items = Vec::with_capacity(template.len());
    let mut slots = Vec::with_capacity(template.len());

    for slot in template {
        let place = buckets.take(slot.required_category);
        if let Some(place) = place {
            items.push(GeneratedItineraryItem::from_slot(slot, place));
        }
        slots.push(SlotFill {
            time: slot.time.clone(),
            category: slot.required_category,
            filled: place.is_some(),
        });
    }

    if items.len() < template.len() {
        log::info!(
            "Plan has {} of {} slots filled",
            items.len(),
            template.len()
        );
    }

    GenerationReport { items, slots }
}
