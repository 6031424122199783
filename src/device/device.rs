/// ISO-8601 UTC with millisecond precision, e.g. `2020-04-13T04:57:56.000Z`.
pub const ISO_8601_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

pub fn iso_8601(time: chrono::DateTime<chrono::Utc>) -> String {
    time.format(ISO_8601_FORMAT).to_string()
}

pub fn iso_8601_now() -> String {
    iso_8601(chrono::Utc::now())
}
