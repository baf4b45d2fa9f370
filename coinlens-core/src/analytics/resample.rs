use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Days, NaiveDate, Utc};
use coinlens_types::{CoinlensError, Frequency};

use super::validate::validate_numeric;
use crate::table::{Column, TIMESTAMP_COLUMN, TimeSeriesTable};

/// Column added by weekly resampling: ISO week of the bucket label.
pub const WEEK_NUMBER_COLUMN: &str = "week_number";

/// Resample `column` to `frequency`, returning a new table.
///
/// Each bucket keeps its last non-missing value and is labeled at 00:00 UTC
/// of its closing day (the day itself, the week's Sunday, the month's last
/// day, December 31). Every bucket between the first and the last is present;
/// empty ones carry the previous value forward. The output holds
/// `timestamp`, `column` and, for weekly buckets, `week_number`, sorted by
/// timestamp.
///
/// # Errors
/// Timestamp coercion failures (`ColumnNotFound`, `Data`) and
/// [`validate_numeric`] failures.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "coinlens::analytics::resample_price_series",
        skip(table),
        fields(rows = table.row_count(), frequency = %frequency),
        err,
    )
)]
pub fn resample_price_series(
    table: &TimeSeriesTable,
    column: &str,
    frequency: Frequency,
) -> Result<TimeSeriesTable, CoinlensError> {
    let timestamps = table.timestamps()?;
    let values = validate_numeric(table, column)?;

    let mut order: Vec<usize> = (0..timestamps.len()).collect();
    order.sort_by_key(|&i| timestamps[i]);

    let mut buckets: BTreeMap<NaiveDate, Option<f64>> = BTreeMap::new();
    for i in order {
        let day = timestamps[i].date_naive();
        let label = bucket_label(frequency, day).ok_or_else(|| out_of_range("containing", day))?;
        let slot = buckets.entry(label).or_insert(None);
        if values[i].is_some() {
            *slot = values[i];
        }
    }

    let (Some(&first), Some(&last)) = (buckets.keys().next(), buckets.keys().next_back()) else {
        return Err(CoinlensError::EmptyTable);
    };

    let mut labels = Vec::new();
    let mut filled = Vec::new();
    let mut carry: Option<f64> = None;
    let mut label = first;
    loop {
        if let Some(Some(v)) = buckets.get(&label) {
            carry = Some(*v);
        }
        labels.push(label);
        filled.push(carry);
        if label >= last {
            break;
        }
        label = next_label(frequency, label).ok_or_else(|| out_of_range("after", label))?;
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(buckets = labels.len(), "resampled series");

    let mut columns = vec![
        (
            TIMESTAMP_COLUMN.to_string(),
            Column::Timestamp(labels.iter().map(|d| midnight(*d)).collect()),
        ),
        (column.to_string(), Column::Float(filled)),
    ];
    if frequency == Frequency::Weekly {
        columns.push((
            WEEK_NUMBER_COLUMN.to_string(),
            Column::Int(
                labels
                    .iter()
                    .map(|d| Some(i64::from(d.iso_week().week())))
                    .collect(),
            ),
        ));
    }
    TimeSeriesTable::new(columns)
}

fn out_of_range(relation: &str, day: NaiveDate) -> CoinlensError {
    CoinlensError::Data(format!("resample bucket {relation} {day} is out of range"))
}

/// Closing day of the bucket containing `day`; `None` past the calendar's end.
fn bucket_label(frequency: Frequency, day: NaiveDate) -> Option<NaiveDate> {
    match frequency {
        Frequency::Daily => Some(day),
        Frequency::Weekly => {
            let to_sunday = 6 - u64::from(day.weekday().num_days_from_monday());
            day.checked_add_days(Days::new(to_sunday))
        }
        Frequency::Monthly => month_end(day.year(), day.month()),
        Frequency::Yearly => NaiveDate::from_ymd_opt(day.year(), 12, 31),
    }
}

/// Label of the bucket after the one labeled `label`.
fn next_label(frequency: Frequency, label: NaiveDate) -> Option<NaiveDate> {
    match frequency {
        Frequency::Daily => label.checked_add_days(Days::new(1)),
        Frequency::Weekly => label.checked_add_days(Days::new(7)),
        Frequency::Monthly => {
            let next = label.checked_add_days(Days::new(1))?;
            month_end(next.year(), next.month())
        }
        Frequency::Yearly => NaiveDate::from_ymd_opt(label.year() + 1, 12, 31),
    }
}

fn month_end(year: i32, month: u32) -> Option<NaiveDate> {
    let (ny, nm) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(ny, nm, 1)?.pred_opt()
}

fn midnight(day: NaiveDate) -> DateTime<Utc> {
    day.and_time(chrono::NaiveTime::MIN).and_utc()
}
