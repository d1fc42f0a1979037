use std::fmt;

use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::PlanError;
use crate::models::place::PlaceRecord;

pub const SUPPORTED_LOCATIONS: [&str; 5] =
    ["Eskilstuna", "Linköping", "Stockholm", "Uppsala", "Örebro"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InterestCategory {
    #[serde(rename = "Museum")]
    Museum,
    #[serde(rename = "Natur")]
    Nature,
    #[serde(rename = "Mat & Dryck")]
    FoodAndDrink,
    #[serde(rename = "Barnvänligt")]
    FamilyFriendly,
    #[serde(rename = "Shopping")]
    Shopping,
    #[serde(rename = "Sport")]
    Sport,
    #[serde(rename = "Kultur")]
    Culture,
}

impl InterestCategory {
    pub const ALL: [InterestCategory; 7] = [
        InterestCategory::Museum,
        InterestCategory::Nature,
        InterestCategory::FoodAndDrink,
        InterestCategory::FamilyFriendly,
        InterestCategory::Shopping,
        InterestCategory::Sport,
        InterestCategory::Culture,
    ];

    /// Label shown to users and sent by clients.
    pub fn label(self) -> &'static str {
        match self {
            InterestCategory::Museum => "Museum",
            InterestCategory::Nature => "Natur",
            InterestCategory::FoodAndDrink => "Mat & Dryck",
            InterestCategory::FamilyFriendly => "Barnvänligt",
            InterestCategory::Shopping => "Shopping",
            InterestCategory::Sport => "Sport",
            InterestCategory::Culture => "Kultur",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.label() == label)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeFrame {
    #[default]
    #[serde(rename = "Heldag")]
    FullDay,
    #[serde(rename = "Halvdag (förmiddag)")]
    HalfDayMorning,
    #[serde(rename = "Halvdag (eftermiddag)")]
    HalfDayAfternoon,
}

impl TimeFrame {
    pub const ALL: [TimeFrame; 3] = [
        TimeFrame::FullDay,
        TimeFrame::HalfDayMorning,
        TimeFrame::HalfDayAfternoon,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TimeFrame::FullDay => "Heldag",
            TimeFrame::HalfDayMorning => "Halvdag (förmiddag)",
            TimeFrame::HalfDayAfternoon => "Halvdag (eftermiddag)",
        }
    }

    /// Lenient parse used for filter input: anything unrecognised is a full day.
    pub fn from_label(label: Option<&str>) -> Self {
        label
            .and_then(|label| Self::ALL.into_iter().find(|frame| frame.label() == label))
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotCategory {
    Food,
    Activity,
}

impl fmt::Display for SlotCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotCategory::Food => write!(f, "food"),
            SlotCategory::Activity => write!(f, "activity"),
        }
    }
}

/// One scheduled position in a time-frame template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    /// Wall-clock time, "HH:MM".
    pub time: String,
    pub required_category: SlotCategory,
}

impl Slot {
    pub fn new(time: &str, required_category: SlotCategory) -> Self {
        Self {
            time: time.to_string(),
            required_category,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedItineraryItem {
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub category: SlotCategory,
}

impl GeneratedItineraryItem {
    pub fn from_slot(slot: &Slot, place: &PlaceRecord) -> Self {
        Self {
            time: slot.time.clone(),
            name: place.name().map(str::to_string),
            address: place.formatted_address.clone(),
            link: place.google_maps_uri.clone(),
            category: slot.required_category,
        }
    }
}

/// Whether a template slot received a place during generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotFill {
    pub time: String,
    pub category: SlotCategory,
    pub filled: bool,
}

/// User input for generating a plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanFilter {
    pub location: String,
    #[serde(default)]
    pub activity_types: Vec<String>,
    #[serde(default)]
    pub time_frame: Option<String>,
}

impl PlanFilter {
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.location.trim().is_empty() {
            return Err(PlanError::InvalidFilter("a location is required".to_string()));
        }
        if self.selected_activity_types().is_empty() {
            return Err(PlanError::InvalidFilter(
                "select at least one activity type".to_string(),
            ));
        }
        Ok(())
    }

    /// Activity types with blank entries dropped.
    pub fn selected_activity_types(&self) -> Vec<&str> {
        self.activity_types
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .collect()
    }

    pub fn time_frame(&self) -> TimeFrame {
        TimeFrame::from_label(self.time_frame.as_deref())
    }
}

/// Partial filter sent when regenerating a saved plan. Missing fields keep the
/// saved plan's values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanFilterOverrides {
    pub location: Option<String>,
    pub activity_types: Option<Vec<String>>,
    pub time_frame: Option<String>,
}

impl PlanFilterOverrides {
    pub fn apply_to(self, plan: &SavedPlan) -> PlanFilter {
        PlanFilter {
            location: self
                .location
                .filter(|location| !location.trim().is_empty())
                .unwrap_or_else(|| plan.location.clone()),
            activity_types: self
                .activity_types
                .filter(|types| !types.is_empty())
                .unwrap_or_else(|| plan.activity_types.clone()),
            time_frame: Some(
                self.time_frame
                    .unwrap_or_else(|| plan.time_frame.label().to_string()),
            ),
        }
    }
}

/// Body for saving a new plan or replacing an existing one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSubmission {
    pub location: String,
    pub activity_types: Vec<String>,
    #[serde(default)]
    pub time_frame: TimeFrame,
    pub activities: Vec<GeneratedItineraryItem>,
}

/// A plan as stored and as returned to clients. Field names match
/// [`PlanSubmission`] so a fetched plan can be sent back with PUT.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPlan {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub owner_id: String,
    pub title: String,
    pub location: String,
    pub activity_types: Vec<String>,
    pub time_frame: TimeFrame,
    pub activities: Vec<GeneratedItineraryItem>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl SavedPlan {
    pub fn new(owner_id: &str, submission: PlanSubmission) -> Self {
        Self {
            id: None,
            owner_id: owner_id.to_string(),
            title: plan_title(&submission.location),
            location: submission.location,
            activity_types: submission.activity_types,
            time_frame: submission.time_frame,
            activities: submission.activities,
            created_at: Some(Utc::now()),
            updated_at: None,
        }
    }
}

pub fn plan_title(location: &str) -> String {
    format!("Resplan för utflykt till {}", location)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub locations: Vec<&'static str>,
    pub activity_types: Vec<&'static str>,
    pub time_frames: Vec<&'static str>,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            locations: SUPPORTED_LOCATIONS.to_vec(),
            activity_types: InterestCategory::ALL.iter().map(|c| c.label()).collect(),
            time_frames: TimeFrame::ALL.iter().map(|t| t.label()).collect(),
        }
    }
}
