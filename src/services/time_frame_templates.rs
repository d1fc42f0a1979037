use std::collections::HashMap;

use crate::models::plan::{Slot, SlotCategory, TimeFrame};

/// Ordered slot templates for each time frame.
#[derive(Debug, Clone)]
pub struct TimeFrameTemplates {
    templates: HashMap<TimeFrame, Vec<Slot>>,
}

impl Default for TimeFrameTemplates {
    fn default() -> Self {
        use SlotCategory::{Activity, Food};

        Self::new([
            (
                TimeFrame::FullDay,
                vec![
                    Slot::new("10:00", Activity),
                    Slot::new("12:30", Food),
                    Slot::new("14:00", Activity),
                    Slot::new("18:00", Food),
                ],
            ),
            (
                TimeFrame::HalfDayMorning,
                vec![Slot::new("10:00", Activity), Slot::new("12:00", Food)],
            ),
            (
                TimeFrame::HalfDayAfternoon,
                vec![Slot::new("14:00", Activity), Slot::new("17:00", Food)],
            ),
        ])
    }
}

impl TimeFrameTemplates {
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (TimeFrame, Vec<Slot>)>,
    {
        Self {
            templates: entries.into_iter().collect(),
        }
    }

    pub fn slots(&self, time_frame: TimeFrame) -> &[Slot] {
        self.templates
            .get(&time_frame)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
