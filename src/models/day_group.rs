use super::punch::PunchEvent;
use super::punch_role::PunchRole;
use chrono::NaiveDate;
use serde::Serialize;

/// Punches of one local calendar day, sorted by timestamp ascending.
#[derive(Debug, Clone, Serialize)]
pub struct DayGroup {
    pub date: NaiveDate,
    pub events: Vec<PunchEvent>,
}

/// Positional reading of a day: 1st entry, 2nd pause, 3rd return, 4th exit.
/// `None` reads as "not recorded".
#[derive(Debug, Clone, Copy)]
pub struct DaySlots<'a> {
    pub entry: Option<&'a PunchEvent>,
    pub pause: Option<&'a PunchEvent>,
    pub return_: Option<&'a PunchEvent>,
    pub exit: Option<&'a PunchEvent>,
    pub extra: &'a [PunchEvent],
}

/// An event whose own role disagrees with the slot its position gives it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleMismatch {
    pub event_id: i64,
    pub position: usize,
    pub positional: Option<PunchRole>,
    pub declared: PunchRole,
}

impl DayGroup {
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn slots(&self) -> DaySlots<'_> {
        let ev = &self.events;
        DaySlots {
            entry: ev.first(),
            pause: ev.get(1),
            return_: ev.get(2),
            exit: ev.get(3),
            extra: ev.get(4..).unwrap_or(&[]),
        }
    }

    /// Events whose declared role (explicit tag or label keyword) contradicts
    /// their positional slot. Events without a declared role never mismatch.
    ///
    /// A bare "saida" label reads as an exit, but the lunch-out punch is
    /// commonly labelled the same way: on the pause slot it is accepted.
    /// An explicit `exit` tag there still mismatches.
    pub fn role_mismatches(&self) -> Vec<RoleMismatch> {
        self.events
            .iter()
            .enumerate()
            .filter_map(|(i, ev)| {
                let declared = ev.declared_role()?;
                let positional = PunchRole::from_position(i);
                let lunch_out = ev.role.is_none()
                    && declared == PunchRole::Exit
                    && positional == Some(PunchRole::Pause);
                (positional != Some(declared) && !lunch_out).then(|| RoleMismatch {
                    event_id: ev.id,
                    position: i + 1,
                    positional,
                    declared,
                })
            })
            .collect()
    }
}
