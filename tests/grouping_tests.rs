mod common;
use chrono::NaiveDate;
use common::{at, punch};
use rtimebank::core::calculator::grouping::group_by_day;
use rtimebank::models::punch::PunchEvent;
use rtimebank::models::punch_role::PunchRole;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn test_group_by_day_sorts_within_each_day() {
    let events = vec![
        punch(3, at(2025, 9, 2, 17, 0), ""),
        punch(1, at(2025, 9, 1, 12, 0), ""),
        punch(2, at(2025, 9, 1, 8, 0), ""),
        punch(4, at(2025, 9, 2, 9, 0), ""),
    ];

    let grouped = group_by_day(&events);
    assert_eq!(grouped.days.len(), 2);
    assert_eq!(grouped.undated, 0);

    let dates: Vec<NaiveDate> = grouped.days.keys().copied().collect();
    assert_eq!(dates, vec![d(2025, 9, 1), d(2025, 9, 2)]);

    let ids: Vec<i64> = grouped.get(&d(2025, 9, 1)).unwrap().events.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![2, 1]);
    let ids: Vec<i64> = grouped.get(&d(2025, 9, 2)).unwrap().events.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![4, 3]);
}

#[test]
fn test_days_without_punches_are_absent() {
    let events = vec![punch(1, at(2025, 9, 1, 8, 0), "")];
    let grouped = group_by_day(&events);
    assert!(grouped.get(&d(2025, 9, 2)).is_none());
    assert!(group_by_day(&[]).days.is_empty());
}

#[test]
fn test_undated_punches_belong_to_no_day() {
    let mut broken = punch(9, at(2025, 9, 1, 8, 0), "entrada");
    broken.timestamp = None;
    let events = vec![broken, punch(1, at(2025, 9, 1, 12, 0), "")];

    let grouped = group_by_day(&events);
    assert_eq!(grouped.undated, 1);
    assert_eq!(grouped.get(&d(2025, 9, 1)).unwrap().len(), 1);
}

#[test]
fn test_slots_are_positional() {
    let events: Vec<PunchEvent> = [(8, 0), (12, 0), (13, 0), (17, 30), (18, 0)]
        .iter()
        .enumerate()
        .map(|(i, (h, m))| punch(i as i64 + 1, at(2025, 9, 1, *h, *m), ""))
        .collect();
    let grouped = group_by_day(&events);
    let group = grouped.get(&d(2025, 9, 1)).unwrap();
    let slots = group.slots();

    assert_eq!(slots.entry.unwrap().time_str(), "08:00");
    assert_eq!(slots.pause.unwrap().time_str(), "12:00");
    assert_eq!(slots.return_.unwrap().time_str(), "13:00");
    assert_eq!(slots.exit.unwrap().time_str(), "17:30");
    assert_eq!(slots.extra.len(), 1);
    assert_eq!(slots.extra[0].id, 5);
}

#[test]
fn test_slots_of_a_short_day() {
    let events = vec![punch(1, at(2025, 9, 1, 8, 0), "")];
    let grouped = group_by_day(&events);
    let slots = grouped.get(&d(2025, 9, 1)).unwrap().slots();
    assert!(slots.entry.is_some());
    assert!(slots.pause.is_none());
    assert!(slots.exit.is_none());
    assert!(slots.extra.is_empty());
}

#[test]
fn test_role_mismatch_from_explicit_role() {
    let events = vec![
        punch(1, at(2025, 9, 1, 8, 0), "").with_role(PunchRole::Entry),
        punch(2, at(2025, 9, 1, 8, 5), "").with_role(PunchRole::Entry),
    ];
    let grouped = group_by_day(&events);
    let mismatches = grouped.get(&d(2025, 9, 1)).unwrap().role_mismatches();

    assert_eq!(mismatches.len(), 1);
    assert_eq!(mismatches[0].event_id, 2);
    assert_eq!(mismatches[0].position, 2);
    assert_eq!(mismatches[0].positional, Some(PunchRole::Pause));
    assert_eq!(mismatches[0].declared, PunchRole::Entry);
}

#[test]
fn test_role_mismatch_from_label_keywords() {
    let events = vec![
        punch(1, at(2025, 9, 1, 8, 0), "entrada"),
        punch(2, at(2025, 9, 1, 12, 0), "saida almoco"),
        punch(3, at(2025, 9, 1, 13, 0), "retorno almoco"),
        punch(4, at(2025, 9, 1, 17, 0), "saida"),
        punch(5, at(2025, 9, 1, 18, 0), "saida"),
    ];
    let grouped = group_by_day(&events);
    let mismatches = grouped.get(&d(2025, 9, 1)).unwrap().role_mismatches();

    // only the fifth punch has no slot
    assert_eq!(mismatches.len(), 1);
    assert_eq!(mismatches[0].event_id, 5);
    assert_eq!(mismatches[0].positional, None);
}

#[test]
fn test_plain_saida_on_lunch_out_is_accepted() {
    let events = vec![
        punch(1, at(2025, 9, 1, 8, 0), "entrada"),
        punch(2, at(2025, 9, 1, 12, 0), "saida"),
        punch(3, at(2025, 9, 1, 13, 0), "retorno"),
        punch(4, at(2025, 9, 1, 17, 0), "saida"),
    ];
    let grouped = group_by_day(&events);
    assert!(grouped.get(&d(2025, 9, 1)).unwrap().role_mismatches().is_empty());
}

#[test]
fn test_explicit_exit_on_lunch_out_mismatches() {
    let events = vec![
        punch(1, at(2025, 9, 1, 8, 0), "").with_role(PunchRole::Entry),
        punch(2, at(2025, 9, 1, 12, 0), "saida").with_role(PunchRole::Exit),
    ];
    let grouped = group_by_day(&events);
    let mismatches = grouped.get(&d(2025, 9, 1)).unwrap().role_mismatches();
    assert_eq!(mismatches.len(), 1);
    assert_eq!(mismatches[0].event_id, 2);
    assert_eq!(mismatches[0].declared, PunchRole::Exit);
}

#[test]
fn test_unlabelled_punches_never_mismatch() {
    let events = vec![
        punch(1, at(2025, 9, 1, 8, 0), ""),
        punch(2, at(2025, 9, 1, 12, 0), "ponto"),
    ];
    let grouped = group_by_day(&events);
    assert!(grouped.get(&d(2025, 9, 1)).unwrap().role_mismatches().is_empty());
}

#[test]
fn test_role_from_label() {
    assert_eq!(PunchRole::from_label("Entrada"), Some(PunchRole::Entry));
    assert_eq!(PunchRole::from_label("saída almoço"), Some(PunchRole::Pause));
    assert_eq!(PunchRole::from_label("volta do intervalo"), Some(PunchRole::Return));
    assert_eq!(PunchRole::from_label("Saida"), Some(PunchRole::Exit));
    assert_eq!(PunchRole::from_label("reuniao"), None);
    assert_eq!(PunchRole::from_code("OUT"), Some(PunchRole::Exit));
    assert_eq!(PunchRole::from_code("lunchbreak"), None);
}
