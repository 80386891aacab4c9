use sqlx::SqlitePool;

use crate::database::events_repo;
use crate::models::EventRow;

pub const PLACEHOLDER_IMAGE: &str = "/assets/placeholder.svg";

pub struct EventCardView {
    pub event_id: String,
    pub title: String,
    pub location_label: String,
    pub image_url: String,
    pub date_label: String,
    pub description: String,
}

/// Full events page: every event, ascending by start date.
pub async fn list_event_cards(pool: &SqlitePool) -> sqlx::Result<Vec<EventCardView>> {
    let rows = events_repo::list_events(pool, -1).await?;
    Ok(rows.into_iter().map(card_view).collect())
}

/// Home page teaser: the first `limit` events by start date.
pub async fn list_upcoming_event_cards(
    pool: &SqlitePool,
    limit: i64,
) -> sqlx::Result<Vec<EventCardView>> {
    let rows = events_repo::list_events(pool, limit).await?;
    Ok(rows.into_iter().map(card_view).collect())
}

fn card_view(row: EventRow) -> EventCardView {
    let (date_label, _time) = format_start_labels(&row.start_date);
    EventCardView {
        event_id: row.id,
        title: row.title,
        location_label: row.location.unwrap_or_default(),
        image_url: image_or_placeholder(row.image_url),
        date_label,
        description: row.description.unwrap_or_default(),
    }
}

pub fn image_or_placeholder(image_url: Option<String>) -> String {
    match image_url {
        Some(url) if !url.trim().is_empty() => url,
        _ => PLACEHOLDER_IMAGE.to_string(),
    }
}

/// Splits an ISO-ish timestamp ("2025-01-01T19:30:00") into a short date
/// label and an HH:MM time label.
pub fn format_start_labels(start_date: &str) -> (String, String) {
    let date = start_date.get(0..10).unwrap_or(start_date);
    let time = start_date.get(11..16).unwrap_or("");
    (format_date_short(date), time.to_string())
}

fn format_date_short(date: &str) -> String {
    let (y, m, d) = match parse_ymd(date) {
        Some(v) => v,
        None => return date.to_string(),
    };

    let wd_name = match weekday_sun0(y, m, d) {
        0 => "Sun",
        1 => "Mon",
        2 => "Tue",
        3 => "Wed",
        4 => "Thu",
        5 => "Fri",
        6 => "Sat",
        _ => "",
    };

    let month = match m {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "",
    };

    format!("{} {} {} {}", wd_name, d, month, y)
}

fn parse_ymd(date: &str) -> Option<(i32, i32, i32)> {
    let mut parts = date.split('-');
    let y: i32 = parts.next()?.parse().ok()?;
    let m: i32 = parts.next()?.parse().ok()?;
    let d: i32 = parts.next()?.parse().ok()?;
    // Out-of-range months would index past the weekday table; treat them
    // like any other unparseable date and echo the raw string instead.
    if !(1..=12).contains(&m) || !(1..=31).contains(&d) {
        return None;
    }
    Some((y, m, d))
}

// Returns weekday with Sunday=0..Saturday=6 (Sakamoto algorithm).
fn weekday_sun0(y: i32, m: i32, d: i32) -> i32 {
    const T: [i32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
    let y = if m < 3 { y - 1 } else { y };
    (y + y / 4 - y / 100 + y / 400 + T[(m - 1) as usize] + d).rem_euclid(7)
}
