//! # Commission Module
//!
//! Tiered commission policy and the per-salesperson report.
//!
//! ## Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 Commission Tiers (per single sale)                      │
//! │                                                                         │
//! │   amount < 100                →  0%   (0 bps)                           │
//! │   100 ≤ amount < 500          →  1%   (100 bps)                         │
//! │   amount ≥ 500                →  5%   (500 bps)                         │
//! │                                                                         │
//! │  The tier depends on the exact amount of the individual sale (99.999   │
//! │  earns nothing), never on the salesperson's running total. The         │
//! │  commission itself is exact: 1% of 123.45 is 1.2345.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Report Aggregation
//! ```text
//! sales (dataset order)
//!      │
//!      ▼  group by salesperson (exact match), keep dataset order per group
//! BTreeMap<String, CommissionReport>
//!      │
//!      ▼  BTreeMap iteration = ascending name order
//! Vec<CommissionReport>
//! ```

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Sale;

/// Sales below this amount (major units) earn nothing.
pub const LOW_TIER_THRESHOLD: i64 = 100;

/// Sales at or above this amount (major units) earn the top rate.
pub const HIGH_TIER_THRESHOLD: i64 = 500;

// =============================================================================
// Commission Rate
// =============================================================================

/// Commission rate in basis points (100 bps = 1%).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommissionRate(u32);

impl CommissionRate {
    pub const NONE: CommissionRate = CommissionRate(0);
    pub const STANDARD: CommissionRate = CommissionRate(100);
    pub const PREMIUM: CommissionRate = CommissionRate(500);

    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        CommissionRate(bps)
    }

    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// The rate as a multiplier (`100 bps` → `0.0100`).
    pub fn as_fraction(&self) -> Decimal {
        Decimal::new(i64::from(self.0), 4)
    }

    /// Picks the tier for a single sale amount.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::commission::CommissionRate;
    /// use tally_core::Money;
    ///
    /// assert_eq!(CommissionRate::for_amount(Money::new(99_999, 3)), CommissionRate::NONE);
    /// assert_eq!(CommissionRate::for_amount(Money::new(100, 0)), CommissionRate::STANDARD);
    /// assert_eq!(CommissionRate::for_amount(Money::new(500, 0)), CommissionRate::PREMIUM);
    /// ```
    pub fn for_amount(amount: Money) -> Self {
        if amount < Money::new(LOW_TIER_THRESHOLD, 0) {
            CommissionRate::NONE
        } else if amount < Money::new(HIGH_TIER_THRESHOLD, 0) {
            CommissionRate::STANDARD
        } else {
            CommissionRate::PREMIUM
        }
    }

    /// Human label shown next to each sale, e.g. `"1%"`.
    ///
    /// Fractional rates keep their decimals (`"2.5%"`); the built-in tiers
    /// are whole percentages.
    pub fn label(&self) -> String {
        if self.0 % 100 == 0 {
            format!("{}%", self.0 / 100)
        } else {
            let pct = format!("{:.2}", self.0 as f64 / 100.0);
            format!("{}%", pct.trim_end_matches('0'))
        }
    }
}

// =============================================================================
// Report Types
// =============================================================================

/// One sale inside a salesperson's report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleDetail {
    pub amount: Money,
    pub commission: Money,
    pub rate: CommissionRate,
}

impl SaleDetail {
    /// Prices one sale, or `None` if the commission overflows.
    pub fn for_amount(amount: Money) -> Option<Self> {
        let rate = CommissionRate::for_amount(amount);
        Some(SaleDetail {
            amount,
            commission: amount.calculate_commission(rate)?,
            rate,
        })
    }

    pub fn rate_label(&self) -> String {
        self.rate.label()
    }
}

/// Commission totals for one salesperson.
///
/// ## Invariants
/// - `total_commission` = sum of `details[..].commission`
/// - `total_sales` = sum of `details[..].amount`
/// - `sale_count` = `details.len()`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommissionReport {
    pub salesperson: String,
    pub total_sales: Money,
    pub total_commission: Money,
    pub sale_count: usize,
    /// Per-sale breakdown in dataset order.
    pub details: Vec<SaleDetail>,
}

impl CommissionReport {
    fn new(salesperson: &str) -> Self {
        CommissionReport {
            salesperson: salesperson.to_string(),
            total_sales: Money::zero(),
            total_commission: Money::zero(),
            sale_count: 0,
            details: Vec::new(),
        }
    }

    fn out_of_range(&self) -> CoreError {
        CoreError::AmountOutOfRange {
            salesperson: self.salesperson.clone(),
        }
    }

    /// Adds one sale. Totals are left untouched if either sum overflows.
    fn push(&mut self, amount: Money) -> CoreResult<()> {
        let detail = SaleDetail::for_amount(amount).ok_or_else(|| self.out_of_range())?;
        let total_sales = self
            .total_sales
            .checked_add(detail.amount)
            .ok_or_else(|| self.out_of_range())?;
        let total_commission = self
            .total_commission
            .checked_add(detail.commission)
            .ok_or_else(|| self.out_of_range())?;

        self.total_sales = total_sales;
        self.total_commission = total_commission;
        self.sale_count += 1;
        self.details.push(detail);
        Ok(())
    }
}

// =============================================================================
// Aggregation
// =============================================================================

/// Builds the commission report for a sales dataset.
///
/// Pure: the same input always yields the same output, and the result is
/// sorted by salesperson name ascending. Fails only when a salesperson's
/// totals overflow.
///
/// ## Example
/// ```rust
/// use tally_core::commission::build_report;
/// use tally_core::{Money, Sale};
///
/// let report = build_report(&[
///     Sale::new("B", Money::new(600, 0)),
///     Sale::new("A", Money::new(150, 0)),
/// ])
/// .unwrap();
/// assert_eq!(report[0].salesperson, "A");
/// assert_eq!(report[1].total_commission, Money::new(30, 0));
/// ```
pub fn build_report(sales: &[Sale]) -> CoreResult<Vec<CommissionReport>> {
    let mut by_salesperson: BTreeMap<&str, CommissionReport> = BTreeMap::new();

    for sale in sales {
        by_salesperson
            .entry(sale.salesperson.as_str())
            .or_insert_with(|| CommissionReport::new(&sale.salesperson))
            .push(sale.amount)?;
    }

    Ok(by_salesperson.into_values().collect())
}

// =============================================================================
// Unit Tests
// =============================================================================
