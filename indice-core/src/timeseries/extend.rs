//! Synthetic future rows for target series.

use chrono::{Months, NaiveDate};

use crate::IndiceError;
use crate::frame::SeriesFrame;
use crate::types::ExtendMethod;

/// Append `periods` synthetic rows to `frame`, each dated one calendar
/// month after the previous last row (end-of-month dates clamp, so Jan 31
/// extends to Feb 28/29).
///
/// - [`ExtendMethod::Constant`] replicates the values observed at the last
///   real date.
/// - [`ExtendMethod::Project`] continues each column one first-difference
///   step using the frame's last two row positions. A column missing an
///   observation at either anchor stays missing in the synthetic row.
///
/// Synthetic rows feed back into the next step, so `periods = 2` under
/// `Project` compounds the projection.
///
/// # Errors
/// Returns `IndiceError::InsufficientHistory` when the frame holds fewer
/// rows than the method needs (`Project` needs two, `Constant` one), and
/// `IndiceError::Data` on calendar overflow.
pub fn extend_frame(
    frame: &SeriesFrame,
    periods: u32,
    method: ExtendMethod,
) -> Result<SeriesFrame, IndiceError> {
    let mut out = frame.clone();
    if periods == 0 {
        return Ok(out);
    }
    let needed = match method {
        ExtendMethod::Constant => 1,
        ExtendMethod::Project => 2,
    };
    let have = out.row_count();
    if have < needed {
        return Err(IndiceError::insufficient_history(needed, have));
    }
    for _ in 0..periods {
        let dates: Vec<NaiveDate> = out.dates().into_iter().collect();
        let last = dates[dates.len() - 1];
        let prev = (needed == 2).then(|| dates[dates.len() - 2]);
        let next = last
            .checked_add_months(Months::new(1))
            .ok_or_else(|| IndiceError::Data(format!("date overflow extending past {last}")))?;
        for (_, values) in out.columns_mut() {
            let synthetic = match method {
                ExtendMethod::Constant => values.get(&last).copied(),
                ExtendMethod::Project => {
                    match (values.get(&last), prev.and_then(|p| values.get(&p))) {
                        (Some(&l), Some(&p)) => Some(l + (l - p)),
                        _ => None,
                    }
                }
            };
            if let Some(value) = synthetic {
                values.insert(next, value);
            }
        }
    }
    Ok(out)
}
