use chrono::{Duration, TimeZone, Utc};

use super::*;

#[test]
fn initials_use_first_and_last_word() {
    assert_eq!(initials("ana maria souza"), "AS");
    assert_eq!(initials("Bia"), "B");
    assert_eq!(initials("   "), "U");
    assert_eq!(initials("élida costa"), "ÉC");
}

#[test]
fn relative_time_buckets() {
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    assert_eq!(relative_time(now - Duration::seconds(30), now), "agora");
    assert_eq!(relative_time(now - Duration::minutes(1), now), "há 1 minuto");
    assert_eq!(relative_time(now - Duration::minutes(5), now), "há 5 minutos");
    assert_eq!(relative_time(now - Duration::hours(3), now), "há 3 horas");
    assert_eq!(relative_time(now - Duration::days(2), now), "há 2 dias");
    assert_eq!(relative_time(now - Duration::days(65), now), "há 2 meses");
    assert_eq!(relative_time(now - Duration::days(400), now), "há 1 ano");
}

#[test]
fn future_timestamps_read_as_now() {
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    assert_eq!(relative_time(now + Duration::minutes(3), now), "agora");
}

#[test]
fn short_date_and_rating() {
    let at = Utc.with_ymd_and_hms(2024, 3, 9, 23, 0, 0).unwrap();
    assert_eq!(short_date(at), "09/03/2024");
    assert_eq!(format_rating(4.26), "4.3");
    assert_eq!(format_rating(0.0), "0.0");
}
