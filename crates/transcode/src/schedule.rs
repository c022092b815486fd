use super::{codecs, Diagnostics, Error, Scope};
use chrono::{Duration, FixedOffset, NaiveTime, Offset, Timelike, Utc};
use proto_alerts::alerts as proto;

const UTC: &str = "+0000";

/// Expand a schedule into its wire form, where times of day are in UTC.
///
/// Start and end times are interpreted in the schedule's offset, and the end
/// may not precede the start. Days of the week are sent as given:
/// the wire form carries no offset, and days are not shifted across midnight.
pub fn expand_schedule(
    schedule: &models::Schedule,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> proto::ActivitySchedule {
    let scope = scope.push_prop("active_on");
    let models::ActiveOn {
        days_of_week,
        start_time,
        end_time,
        utc_offset,
    } = &schedule.active_on;

    let mut day_of_week = codecs::DAY_OF_WEEK.expand_set(
        days_of_week.iter().map(String::as_str),
        scope.push_prop("days_of_week"),
        diagnostics,
    );
    day_of_week.sort();
    day_of_week.dedup();

    let offset = parse_offset(utc_offset);
    if offset.is_none() {
        Error::Pattern {
            what: "UTC offset",
            value: utc_offset.clone(),
            pattern: "+HHMM or -HHMM",
        }
        .push(scope.push_prop("utc_offset"), diagnostics);
    }
    let start = parse_time_of_day(start_time, scope.push_prop("start_time"), diagnostics);
    let end = parse_time_of_day(end_time, scope.push_prop("end_time"), diagnostics);

    if let (Some(start), Some(end)) = (start, end) {
        if end < start {
            Error::ScheduleEndBeforeStart {
                start: start_time.clone(),
                end: end_time.clone(),
            }
            .push(scope.push_prop("end_time"), diagnostics);
        }
    }

    let to_utc = |time: Option<NaiveTime>| {
        let (time, offset) = (time?, offset?);
        let (utc, _) =
            time.overflowing_sub_signed(Duration::seconds(offset.local_minus_utc().into()));
        Some(proto::TimeOfDay {
            hours: utc.hour() as i32,
            minutes: utc.minute() as i32,
        })
    };

    proto::ActivitySchedule {
        day_of_week,
        start_time: to_utc(start),
        end_time: to_utc(end),
    }
}

/// Flatten a wire schedule, presenting its times in the offset of
/// `prior` or, if there's no prior schedule, in UTC.
/// The wire form doesn't carry an offset, so it can't be recovered otherwise.
pub fn flatten_schedule(
    schedule: &proto::ActivitySchedule,
    prior: Option<&models::Schedule>,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> models::Schedule {
    let scope = scope.push_prop("active_on");
    let proto::ActivitySchedule {
        day_of_week,
        start_time,
        end_time,
    } = schedule;

    let (utc_offset, offset) = match prior
        .map(|p| p.active_on.utc_offset.as_str())
        .and_then(|o| Some((o, parse_offset(o)?)))
    {
        Some((text, offset)) => (text.to_string(), offset),
        None => (UTC.to_string(), Utc.fix()),
    };

    let days_of_week = {
        let scope = scope.push_prop("days_of_week");
        day_of_week
            .iter()
            .enumerate()
            .map(|(index, code)| codecs::DAY_OF_WEEK.flatten(*code, scope.push_item(index), diagnostics))
            .collect()
    };

    let mut to_local = |time: Option<&proto::TimeOfDay>, field: &'static str| -> String {
        let scope = scope.push_prop(field);

        let Some(&proto::TimeOfDay { hours, minutes }) = time else {
            Error::MissingField { field }.push(scope, diagnostics);
            return String::new();
        };
        let Some(utc) = u32::try_from(hours)
            .ok()
            .zip(u32::try_from(minutes).ok())
            .and_then(|(h, m)| NaiveTime::from_hms_opt(h, m, 0))
        else {
            Error::InvalidTimeOfDay { hours, minutes }.push(scope, diagnostics);
            return String::new();
        };

        let (local, _) =
            utc.overflowing_add_signed(Duration::seconds(offset.local_minus_utc().into()));
        local.format("%H:%M").to_string()
    };

    let start_time = to_local(start_time.as_ref(), "start_time");
    let end_time = to_local(end_time.as_ref(), "end_time");

    models::Schedule {
        active_on: models::ActiveOn {
            days_of_week,
            start_time,
            end_time,
            utc_offset,
        },
    }
}

/// Parse a "+HHMM" or "-HHMM" offset.
fn parse_offset(offset: &str) -> Option<FixedOffset> {
    if !models::UTC_OFFSET_RE.is_match(offset) {
        return None;
    }
    let (sign, digits) = offset.split_at(1);
    let hours: i32 = digits[..2].parse().ok()?;
    let minutes: i32 = digits[2..].parse().ok()?;

    let seconds = (hours * 60 + minutes) * 60;
    if sign == "-" {
        FixedOffset::west_opt(seconds)
    } else {
        FixedOffset::east_opt(seconds)
    }
}

fn parse_time_of_day(
    time: &str,
    scope: Scope,
    diagnostics: &mut Diagnostics,
) -> Option<NaiveTime> {
    if models::TIME_OF_DAY_RE.is_match(time) {
        if let Ok(parsed) = NaiveTime::parse_from_str(time, "%H:%M") {
            return Some(parsed);
        }
    }
    Error::Pattern {
        what: "time of day",
        value: time.to_string(),
        pattern: "HH:MM",
    }
    .push(scope, diagnostics);
    None
}

#[cfg(test)]
mod test {
    use super::*;

    fn active_on(start: &str, end: &str, offset: &str) -> models::Schedule {
        models::Schedule {
            active_on: models::ActiveOn {
                days_of_week: ["Friday".to_string(), "Monday".to_string()].into(),
                start_time: start.to_string(),
                end_time: end.to_string(),
                utc_offset: offset.to_string(),
            },
        }
    }

    #[test]
    fn test_times_are_sent_in_utc() {
        let root = Scope::Root;
        let mut diagnostics = Diagnostics::new();

        let schedule = models::Schedule::example();
        let wire = expand_schedule(&schedule, root, &mut diagnostics);

        assert_eq!(
            wire,
            proto::ActivitySchedule {
                day_of_week: vec![0, 1, 2, 3, 4],
                start_time: Some(proto::TimeOfDay {
                    hours: 6,
                    minutes: 30
                }),
                end_time: Some(proto::TimeOfDay {
                    hours: 16,
                    minutes: 0
                }),
            }
        );
        assert!(diagnostics.is_empty());

        // With the prior schedule, its offset is restored.
        assert_eq!(
            flatten_schedule(&wire, Some(&schedule), root, &mut diagnostics),
            schedule
        );
        // Without, times are presented in UTC.
        let utc = flatten_schedule(&wire, None, root, &mut diagnostics);
        assert_eq!(utc.active_on.start_time, "06:30");
        assert_eq!(utc.active_on.utc_offset, "+0000");
    }

    #[test]
    fn test_overnight_window_is_rejected() {
        let root = Scope::Root;
        let mut diagnostics = Diagnostics::new();

        expand_schedule(
            &active_on("23:00", "01:00", "+0000"),
            root.push_prop("schedule"),
            &mut diagnostics,
        );
        insta::assert_snapshot!(diagnostics.to_string(), @r"error: /schedule/active_on/end_time: schedule end time 01:00 precedes its start time 23:00");

        // An equal start and end is allowed.
        let mut diagnostics = Diagnostics::new();
        expand_schedule(&active_on("12:00", "12:00", "+0000"), root, &mut diagnostics);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_unknown_days_are_located_at_their_set() {
        let root = Scope::Root;
        let mut diagnostics = Diagnostics::new();

        let mut schedule = active_on("08:00", "17:00", "+0000");
        schedule.active_on.days_of_week =
            ["Monday".to_string(), "Thursday".to_string(), "Tuesdy".to_string()].into();

        let wire = expand_schedule(&schedule, root.push_prop("schedule"), &mut diagnostics);

        insta::assert_snapshot!(diagnostics.to_string(), @r#"error: /schedule/active_on/days_of_week: "Tuesdy" is not a valid day of week (expected one of "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday")"#);
        assert!(wire.day_of_week.contains(&(proto::DayOfWeek::Thursday as i32)));
    }

    #[test]
    fn test_local_window_may_wrap_in_utc() {
        let root = Scope::Root;
        let mut diagnostics = Diagnostics::new();

        let schedule = active_on("08:00", "18:00", "+1000");
        let wire = expand_schedule(&schedule, root, &mut diagnostics);

        assert_eq!(wire.start_time, Some(proto::TimeOfDay { hours: 22, minutes: 0 }));
        assert_eq!(wire.end_time, Some(proto::TimeOfDay { hours: 8, minutes: 0 }));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_invalid_wire_times() {
        let root = Scope::Root;
        let mut diagnostics = Diagnostics::new();

        let wire = proto::ActivitySchedule {
            day_of_week: vec![9],
            start_time: Some(proto::TimeOfDay {
                hours: 25,
                minutes: 0,
            }),
            end_time: None,
        };
        flatten_schedule(&wire, None, root, &mut diagnostics);

        insta::assert_snapshot!(diagnostics.to_string(), @r"
        error: /active_on/days_of_week/0: alerts service returned day of week code 9, which this client does not recognize
        error: /active_on/start_time: alerts service returned invalid time of day 25:0
        error: /active_on/end_time: alerts service response is missing required field end_time
        ");
    }

    #[derive(Clone, Debug)]
    struct Window {
        start: (u32, u32),
        end: (u32, u32),
        offset_minutes: i32,
    }

    impl quickcheck::Arbitrary for Window {
        fn arbitrary(g: &mut quickcheck::Gen) -> Self {
            let gen_time = |g: &mut quickcheck::Gen| {
                (
                    <u32 as quickcheck::Arbitrary>::arbitrary(g) % 24,
                    <u32 as quickcheck::Arbitrary>::arbitrary(g) % 60,
                )
            };
            let (a, b) = (gen_time(g), gen_time(g));
            // Offsets range over -14:59 to +14:59.
            let offset_minutes = (<i32 as quickcheck::Arbitrary>::arbitrary(g) % (15 * 60)).abs()
                * if <bool as quickcheck::Arbitrary>::arbitrary(g) { 1 } else { -1 };

            Window {
                start: a.min(b),
                end: a.max(b),
                offset_minutes,
            }
        }
    }

    #[test]
    fn test_schedule_round_trips_through_utc() {
        fn prop(window: Window) -> bool {
            let abs = window.offset_minutes.abs();
            let offset = format!(
                "{}{:02}{:02}",
                if window.offset_minutes < 0 { '-' } else { '+' },
                abs / 60,
                abs % 60
            );
            let schedule = active_on(
                &format!("{:02}:{:02}", window.start.0, window.start.1),
                &format!("{:02}:{:02}", window.end.0, window.end.1),
                &offset,
            );

            let mut diagnostics = Diagnostics::new();
            let wire = expand_schedule(&schedule, Scope::Root, &mut diagnostics);
            let back = flatten_schedule(&wire, Some(&schedule), Scope::Root, &mut diagnostics);

            diagnostics.is_empty() && back == schedule
        }

        quickcheck::QuickCheck::new()
            .tests(500)
            .quickcheck(prop as fn(Window) -> bool);
    }
}
