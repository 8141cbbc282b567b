//! Vendor calendar page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::Query, response::IntoResponse};
use chrono::{Datelike, NaiveDate, Utc};
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::RequireVendor;
use crate::models::CurrentVendor;

/// Query parameters for the calendar page.
#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    /// Month to show, as `YYYY-MM`. Defaults to the current month.
    pub month: Option<String>,
}

/// A day cell in the calendar grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    /// Day of month, starting at 1.
    pub day: u32,
    /// Whether this is today's date.
    pub is_today: bool,
}

/// One month laid out Monday-first in full weeks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    /// Heading, e.g. "October 2026".
    pub title: String,
    /// Weeks of seven cells; `None` pads days outside the month.
    pub weeks: Vec<Vec<Option<CalendarDay>>>,
    /// Day of month to highlight, if today falls in this month.
    pub today: Option<u32>,
    /// `YYYY-MM` of the previous month.
    pub prev: String,
    /// `YYYY-MM` of the next month.
    pub next: String,
}

impl MonthGrid {
    /// Lay out `year`-`month`. Returns `None` for an invalid month.
    #[must_use]
    pub fn new(year: i32, month: u32, today: NaiveDate) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let next_first = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)?
        };
        let days = u32::try_from((next_first - first).num_days()).ok()?;
        let offset = first.weekday().num_days_from_monday() as usize;

        let today = (today.year() == year && today.month() == month).then(|| today.day());

        let mut cells: Vec<Option<CalendarDay>> = vec![None; offset];
        cells.extend((1..=days).map(|day| {
            Some(CalendarDay {
                day,
                is_today: today == Some(day),
            })
        }));
        while cells.len() % 7 != 0 {
            cells.push(None);
        }

        Some(Self {
            title: first.format("%B %Y").to_string(),
            weeks: cells.chunks(7).map(<[_]>::to_vec).collect(),
            today,
            prev: first.pred_opt()?.format("%Y-%m").to_string(),
            next: next_first.format("%Y-%m").to_string(),
        })
    }
}

/// Parse a `YYYY-MM` month.
fn parse_month(raw: &str) -> Option<(i32, u32)> {
    let (year, month) = raw.trim().split_once('-')?;
    let year = year.parse().ok()?;
    let month = month.parse().ok()?;
    (1..=12).contains(&month).then_some((year, month))
}

/// Calendar page template.
#[derive(Template, WebTemplate)]
#[template(path = "calendar.html")]
pub struct CalendarTemplate {
    pub current: CurrentVendor,
    pub grid: MonthGrid,
}

/// Display a month calendar.
///
/// # Errors
///
/// Returns `AppError::BadRequest` for a malformed `month` parameter.
pub async fn show(
    RequireVendor(current): RequireVendor,
    Query(query): Query<CalendarQuery>,
) -> Result<impl IntoResponse> {
    let today = Utc::now().date_naive();
    let (year, month) = match query.month.as_deref() {
        Some(raw) => parse_month(raw)
            .ok_or_else(|| AppError::BadRequest(format!("invalid month: {raw}")))?,
        None => (today.year(), today.month()),
    };

    let grid = MonthGrid::new(year, month, today)
        .ok_or_else(|| AppError::BadRequest(format!("month out of range: {year}-{month}")))?;

    Ok(CalendarTemplate { current, grid })
}
