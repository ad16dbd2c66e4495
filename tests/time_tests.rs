use rtimebank::utils::time::{
    format_minutes, format_signed_minutes, parse_hhmm, parse_signed_hhmm, try_parse_hhmm,
};

#[test]
fn test_hhmm_round_trip() {
    for s in ["00:00", "00:05", "08:00", "12:30", "23:59", "160:30"] {
        assert_eq!(format_minutes(parse_hhmm(s)), s, "round trip of {}", s);
    }
}

#[test]
fn test_parse_hhmm_values() {
    assert_eq!(parse_hhmm("08:00"), 480);
    assert_eq!(parse_hhmm("01:30"), 90);
    assert_eq!(parse_hhmm(" 07:15 "), 435);
    assert_eq!(parse_hhmm("176:00"), 10560);
}

#[test]
fn test_parse_hhmm_malformed_is_zero() {
    for s in ["", "8:00", "ab:cd", "08:60", "08-00", "0800", "-01:00", "+01:00"] {
        assert_eq!(parse_hhmm(s), 0, "{:?} should parse to 0", s);
    }
    assert_eq!(try_parse_hhmm("8:00"), None);
    assert_eq!(try_parse_hhmm("00:00"), Some(0));
}

#[test]
fn test_parse_signed_hhmm() {
    assert_eq!(parse_signed_hhmm("-01:30"), -90);
    assert_eq!(parse_signed_hhmm("+00:30"), 30);
    assert_eq!(parse_signed_hhmm("02:00"), 120);
    assert_eq!(parse_signed_hhmm("--01:00"), 0);
    assert_eq!(parse_signed_hhmm(""), 0);
}

#[test]
fn test_format_minutes_truncates_on_absolute_value() {
    assert_eq!(format_minutes(0), "00:00");
    assert_eq!(format_minutes(59), "00:59");
    assert_eq!(format_minutes(61), "01:01");
    assert_eq!(format_minutes(-90), "01:30");
    assert_eq!(format_minutes(-59), "00:59");
}

#[test]
fn test_format_signed_minutes() {
    assert_eq!(format_signed_minutes(-90), "-01:30");
    assert_eq!(format_signed_minutes(30), "+00:30");
    assert_eq!(format_signed_minutes(0), "00:00");
    assert_eq!(format_signed_minutes(-10050), "-167:30");
}
