use serde::{Deserialize, Serialize};
use weekmask_core::{dump, load, WeekMask};

#[test]
fn dump_then_load_round_trips_every_mask() {
    for value in 0..=127 {
        let mask = WeekMask::new(value);
        assert_eq!(load(&dump(Some(&mask))), mask);
    }
}

#[test]
fn load_of_garbage_is_empty() {
    assert_eq!(load("garbage").to_integer(), 0);
    assert_eq!(load("").to_integer(), 0);
    assert_eq!(load("12abc").to_integer(), 0);
    assert_eq!(load(" 7 ").to_integer(), 7);
}

#[test]
fn load_clamps_out_of_range_text() {
    assert_eq!(load("500").to_integer(), 127);
    assert_eq!(load("-1").to_integer(), 0);
}

#[test]
fn from_str_never_fails() {
    let mask: WeekMask = "31".parse().unwrap();
    assert_eq!(mask, 31);
    let mask: WeekMask = "???".parse().unwrap();
    assert!(mask.is_empty());
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Schedule {
    title: String,
    days: WeekMask,
}

#[test]
fn serializes_as_integer_inside_a_record() {
    let schedule = Schedule {
        title: "standup".to_string(),
        days: WeekMask::new(62),
    };
    let json = serde_json::to_value(&schedule).unwrap();
    assert_eq!(json["days"], 62);

    let decoded: Schedule = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, schedule);
}

#[test]
fn deserialization_is_lenient() {
    let from_text: Schedule =
        serde_json::from_str(r#"{"title":"a","days":"42"}"#).unwrap();
    assert_eq!(from_text.days, 42);

    let clamped: Schedule = serde_json::from_str(r#"{"title":"b","days":900}"#).unwrap();
    assert!(clamped.days.is_full());

    let negative: Schedule = serde_json::from_str(r#"{"title":"c","days":-4}"#).unwrap();
    assert!(negative.days.is_empty());

    let null: Schedule = serde_json::from_str(r#"{"title":"d","days":null}"#).unwrap();
    assert!(null.days.is_empty());

    assert!(serde_json::from_str::<Schedule>(r#"{"title":"e","days":[1]}"#).is_err());
}

#[test]
fn weekday_tokens_serialize_lowercase() {
    let map = WeekMask::new(1).to_day_map();
    let json = serde_json::to_value(&map).unwrap();
    assert_eq!(json["sunday"], true);
    assert_eq!(json["monday"], false);
}
