//! Groups a flat list of punches by local calendar day.

use crate::models::day_group::DayGroup;
use crate::models::punch::PunchEvent;
use chrono::NaiveDate;
use std::collections::BTreeMap;

#[derive(Debug, Default, Clone)]
pub struct GroupedPunches {
    pub days: BTreeMap<NaiveDate, DayGroup>,
    /// Punches whose timestamp could not be read; they belong to no day.
    pub undated: usize,
}

impl GroupedPunches {
    pub fn get(&self, date: &NaiveDate) -> Option<&DayGroup> {
        self.days.get(date)
    }
}

pub fn group_by_day(events: &[PunchEvent]) -> GroupedPunches {
    let mut out = GroupedPunches::default();

    for ev in events {
        let Some(date) = ev.date() else {
            out.undated += 1;
            continue;
        };

        out.days
            .entry(date)
            .or_insert_with(|| DayGroup {
                date,
                events: Vec::new(),
            })
            .events
            .push(ev.clone());
    }

    // stable: same-minute punches keep their arrival order
    for group in out.days.values_mut() {
        group.events.sort_by_key(|e| e.timestamp);
    }

    out
}
