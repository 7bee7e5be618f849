use std::collections::{BTreeSet, HashMap};

use chrono::{Duration, NaiveDate};

use shelfwise_catalog::SalesRecord;
use shelfwise_core::ProductId;

/// Per-product average daily demand over a lookback window.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DemandProfile {
    rates: HashMap<ProductId, f64>,
}

impl DemandProfile {
    /// Average units/day for a product.
    ///
    /// Products absent from the ledger window get 0.0, never a missing value.
    pub fn daily_rate(&self, id: &ProductId) -> f64 {
        self.rates.get(id).copied().unwrap_or(0.0)
    }

    /// Number of products that sold at least once inside the window.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

/// Derive per-product velocity from the ledger.
///
/// Records dated inside the inclusive window `[reference - window_days,
/// reference]` count. The divisor is the number of *distinct calendar days*
/// with at least one sale for that product, not the window length, so
/// intermittently-selling items are not understated. Zero distinct sale days
/// yields 0.0 rather than a division by zero.
pub fn velocity_over_window(
    sales: &[SalesRecord],
    window_days: i64,
    reference: NaiveDate,
) -> DemandProfile {
    let window_start = reference - Duration::days(window_days);

    let mut tallies: HashMap<ProductId, (u64, BTreeSet<NaiveDate>)> = HashMap::new();
    for record in sales {
        if record.date < window_start || record.date > reference {
            continue;
        }
        let tally = tallies.entry(record.product_id.clone()).or_default();
        tally.0 += u64::from(record.quantity);
        tally.1.insert(record.date);
    }

    let rates = tallies
        .into_iter()
        .map(|(id, (total_units, sale_days))| {
            let rate = if sale_days.is_empty() {
                0.0
            } else {
                total_units as f64 / sale_days.len() as f64
            };
            (id, rate)
        })
        .collect();

    DemandProfile { rates }
}
