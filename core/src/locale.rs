//! Spanish (es-ES) date and time rendering.

use chrono::{DateTime, Datelike, TimeZone, Timelike};

pub const UNKNOWN_DATE: &str = "Fecha desconocida";

const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

// indexed by days from monday
const WEEKDAYS: [&str; 7] = [
    "lunes",
    "martes",
    "miércoles",
    "jueves",
    "viernes",
    "sábado",
    "domingo",
];

/// long date with short time, e.g. "19 de octubre de 2026, 9:05"
pub fn long_date_time<Tz: TimeZone>(at: &DateTime<Tz>) -> String {
    format!(
        "{} de {} de {}, {}:{:02}",
        at.day(),
        MONTHS[at.month0() as usize],
        at.year(),
        at.hour(),
        at.minute()
    )
}

/// weekday with a two digit 24h time, e.g. "Lunes, 09:05"
pub fn weekday_time<Tz: TimeZone>(at: &DateTime<Tz>) -> String {
    capitalize_first(&format!(
        "{}, {:02}:{:02}",
        WEEKDAYS[at.weekday().num_days_from_monday() as usize],
        at.hour(),
        at.minute()
    ))
}

/// parse an RFC 3339 timestamp and render it in `tz`
pub fn timestamp_in<Tz: TimeZone>(timestamp: &str, tz: &Tz) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(at) => long_date_time(&at.with_timezone(tz)),
        Err(_) => UNKNOWN_DATE.to_string(),
    }
}

pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn long_form() {
        let at = Utc.with_ymd_and_hms(2026, 10, 19, 9, 5, 0).unwrap();
        assert_eq!(long_date_time(&at), "19 de octubre de 2026, 9:05");

        let at = Utc.with_ymd_and_hms(2025, 1, 1, 23, 59, 0).unwrap();
        assert_eq!(long_date_time(&at), "1 de enero de 2025, 23:59");
    }

    #[test]
    fn weekday_is_capitalised() {
        let monday = Utc.with_ymd_and_hms(2026, 10, 19, 9, 5, 0).unwrap();
        assert_eq!(weekday_time(&monday), "Lunes, 09:05");

        let saturday = Utc.with_ymd_and_hms(2026, 10, 24, 18, 30, 0).unwrap();
        assert_eq!(weekday_time(&saturday), "Sábado, 18:30");

        let wednesday = Utc.with_ymd_and_hms(2026, 10, 21, 0, 0, 0).unwrap();
        assert_eq!(weekday_time(&wednesday), "Miércoles, 00:00");
    }

    #[test]
    fn timestamps_follow_the_timezone() {
        let madrid = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(
            timestamp_in("2026-10-19T22:30:00.000Z", &madrid),
            "20 de octubre de 2026, 0:30"
        );
    }

    #[test]
    fn invalid_timestamp() {
        assert_eq!(timestamp_in("yesterday", &Utc), UNKNOWN_DATE);
        assert_eq!(timestamp_in("", &Utc), UNKNOWN_DATE);
    }

    #[test]
    fn capitalize() {
        assert_eq!(capitalize_first("ñandú"), "Ñandú");
        assert_eq!(capitalize_first(""), "");
    }
}
