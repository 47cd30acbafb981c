use chrono::{NaiveDate, TimeDelta};
use icalgen::{Component, Emitter, Property, Value};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut daylight = Component::new("daylight");
    daylight.add(
        "dtstart",
        NaiveDate::from_ymd_opt(1970, 3, 8)
            .unwrap()
            .and_hms_opt(2, 0, 0)
            .unwrap(),
    );
    daylight.add("tzoffsetfrom", Value::UtcOffset(-6 * 3600));
    daylight.add("tzoffsetto", Value::UtcOffset(-5 * 3600));
    daylight.add(
        "rrule",
        Value::enum_list()
            .with_value("freq", "YEARLY")
            .with_value("bymonth", 3)
            .with_value("byday", "2SU"),
    );
    daylight.add("tzname", "CDT");

    let mut timezone = Component::new("vtimezone");
    timezone.add("tzid", "America/Chicago");
    timezone.add_component(&daylight);

    let start = NaiveDate::from_ymd_opt(2024, 6, 3)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap();
    let mut event = Component::new("vevent");
    event.add("uid", "demo-1@icalgen");
    event.add_property(Property::new("dtstart", start).with_parameter("tzid", "America/Chicago"));
    event.add("duration", TimeDelta::minutes(45));
    event.add("summary", "Planning; quarterly, with snacks");
    event.add(
        "description",
        "Agenda:\n1. Review last quarter\n2. Plan the next one\n3. Anything else that comes up",
    );

    let mut alarm = Component::new("valarm");
    alarm.add("action", "DISPLAY");
    alarm.add("trigger", TimeDelta::minutes(-10));
    event.add_component(&alarm);

    let mut calendar = Component::new("vcalendar");
    calendar.add("version", "2.0");
    calendar.add("prodid", "-//icalgen//demo//EN");
    calendar.add_component(&timezone);
    calendar.add_component(&event);

    print!("{}", calendar.generate());
}
