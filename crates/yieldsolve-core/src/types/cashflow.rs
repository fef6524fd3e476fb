//! Cash flow types for discounted valuation.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Frequency;
use crate::error::{CoreError, CoreResult};

/// Type of cash flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CashFlowType {
    /// Initial outlay or price paid at offset 0
    Initial,
    /// Generic periodic flow (IRR schedules)
    #[default]
    Flow,
    /// Regular coupon payment
    Coupon,
    /// Combined coupon and principal (final payment)
    CouponAndPrincipal,
}

impl fmt::Display for CashFlowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CashFlowType::Initial => "Initial",
            CashFlowType::Flow => "Flow",
            CashFlowType::Coupon => "Coupon",
            CashFlowType::CouponAndPrincipal => "Coupon+Principal",
        };
        write!(f, "{name}")
    }
}

/// A cash flow at a whole-period offset.
///
/// Offset 0 is the valuation date and carries the initial outlay or
/// price. The sign convention is chosen by the caller and must be
/// consistent across a schedule.
///
/// # Example
///
/// ```rust
/// use yieldsolve_core::types::{CashFlow, CashFlowType};
///
/// let cf = CashFlow::coupon(3, 2.5);
/// assert_eq!(cf.offset(), 3);
/// assert_eq!(cf.cf_type(), CashFlowType::Coupon);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    /// Period index from the valuation date
    offset: u32,
    /// Signed amount
    amount: f64,
    /// Type of cash flow
    #[serde(default)]
    cf_type: CashFlowType,
}

impl CashFlow {
    /// Creates a new cash flow.
    #[must_use]
    pub fn new(offset: u32, amount: f64, cf_type: CashFlowType) -> Self {
        Self {
            offset,
            amount,
            cf_type,
        }
    }

    /// Creates the offset-0 initial flow.
    #[must_use]
    pub fn initial(amount: f64) -> Self {
        Self::new(0, amount, CashFlowType::Initial)
    }

    /// Creates a generic periodic flow.
    #[must_use]
    pub fn flow(offset: u32, amount: f64) -> Self {
        Self::new(offset, amount, CashFlowType::Flow)
    }

    /// Creates a coupon flow.
    #[must_use]
    pub fn coupon(offset: u32, amount: f64) -> Self {
        Self::new(offset, amount, CashFlowType::Coupon)
    }

    /// Creates the final coupon-plus-principal flow.
    #[must_use]
    pub fn final_payment(offset: u32, coupon: f64, principal: f64) -> Self {
        Self::new(offset, coupon + principal, CashFlowType::CouponAndPrincipal)
    }

    /// Returns the period offset.
    #[must_use]
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Returns the signed amount.
    #[must_use]
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Returns the cash flow type.
    #[must_use]
    pub fn cf_type(&self) -> CashFlowType {
        self.cf_type
    }

    /// Returns true if this flow sits on the valuation date.
    #[must_use]
    pub fn is_initial(&self) -> bool {
        self.offset == 0
    }
}

impl fmt::Display for CashFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={} {} {:.6}", self.offset, self.cf_type, self.amount)
    }
}

/// An immutable, validated sequence of cash flows.
///
/// Flows are held in ascending offset order and offsets are unique.
/// The [`Frequency`] states how many offsets make up one year, so the
/// rate a caller discounts with is always the per-period rate.
///
/// # Example
///
/// ```rust
/// use yieldsolve_core::types::{CashFlowSchedule, Frequency};
///
/// // 95 paid today for a 10 period, 2.5 per period coupon bond
/// let schedule = CashFlowSchedule::bond(95.0, 2.5, 100.0, 10, Frequency::SemiAnnual).unwrap();
/// assert_eq!(schedule.len(), 11);
/// assert_eq!(schedule.horizon(), 10);
/// assert!((schedule.total() - 30.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ScheduleData")]
pub struct CashFlowSchedule {
    /// Cash flows in ascending offset order
    cash_flows: Vec<CashFlow>,
    /// Compounding frequency
    frequency: Frequency,
}

impl CashFlowSchedule {
    /// Creates a schedule from arbitrary flows.
    ///
    /// Flows are sorted by offset.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DegenerateSchedule` if `cash_flows` is empty
    /// or two flows share an offset.
    pub fn new(mut cash_flows: Vec<CashFlow>, frequency: Frequency) -> CoreResult<Self> {
        if cash_flows.is_empty() {
            return Err(CoreError::degenerate_schedule("no cash flows"));
        }

        cash_flows.sort_by_key(CashFlow::offset);

        if let Some(pair) = cash_flows
            .windows(2)
            .find(|pair| pair[0].offset() == pair[1].offset())
        {
            return Err(CoreError::degenerate_schedule(format!(
                "duplicate offset {}",
                pair[0].offset()
            )));
        }

        Ok(Self {
            cash_flows,
            frequency,
        })
    }

    /// Creates a schedule with `initial` at offset 0 and `amounts[i]` at
    /// offset `i + 1`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DegenerateSchedule` if `amounts` is empty.
    pub fn from_initial_and_flows(
        initial: f64,
        amounts: &[f64],
        frequency: Frequency,
    ) -> CoreResult<Self> {
        if amounts.is_empty() {
            return Err(CoreError::degenerate_schedule(
                "no cash flows after the initial amount",
            ));
        }

        let mut cash_flows = Vec::with_capacity(amounts.len() + 1);
        cash_flows.push(CashFlow::initial(initial));
        for (offset, amount) in (1u32..).zip(amounts) {
            cash_flows.push(CashFlow::flow(offset, *amount));
        }

        Self::new(cash_flows, frequency)
    }

    /// Creates the schedule of buying a level-coupon bond at `price`.
    ///
    /// Offset 0 carries `-price`, offsets `1..tenor` the coupon, and
    /// offset `tenor` the coupon plus `face_value`. The per-period rate
    /// that zeroes this schedule is the bond's periodic yield.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::DegenerateSchedule` if `tenor` is 0.
    pub fn bond(
        price: f64,
        coupon_per_period: f64,
        face_value: f64,
        tenor: u32,
        frequency: Frequency,
    ) -> CoreResult<Self> {
        if tenor == 0 {
            return Err(CoreError::degenerate_schedule("tenor is 0 periods"));
        }

        let mut cash_flows = Vec::with_capacity(tenor as usize + 1);
        cash_flows.push(CashFlow::initial(-price));
        for t in 1..tenor {
            cash_flows.push(CashFlow::coupon(t, coupon_per_period));
        }
        cash_flows.push(CashFlow::final_payment(tenor, coupon_per_period, face_value));

        Self::new(cash_flows, frequency)
    }

    /// Returns the cash flows as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[CashFlow] {
        &self.cash_flows
    }

    /// Returns an iterator over the cash flows.
    pub fn iter(&self) -> impl Iterator<Item = &CashFlow> {
        self.cash_flows.iter()
    }

    /// Returns the number of cash flows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cash_flows.len()
    }

    /// Always false: construction rejects empty schedules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cash_flows.is_empty()
    }

    /// Returns the compounding frequency.
    #[must_use]
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Returns the amount at offset 0, or 0 if there is none.
    #[must_use]
    pub fn initial_amount(&self) -> f64 {
        self.cash_flows
            .first()
            .filter(|cf| cf.is_initial())
            .map_or(0.0, CashFlow::amount)
    }

    /// Returns the largest offset in the schedule.
    #[must_use]
    pub fn horizon(&self) -> u32 {
        self.cash_flows.last().map_or(0, CashFlow::offset)
    }

    /// Returns the undiscounted sum of all amounts.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.cash_flows.iter().map(CashFlow::amount).sum()
    }
}

impl<'a> IntoIterator for &'a CashFlowSchedule {
    type Item = &'a CashFlow;
    type IntoIter = std::slice::Iter<'a, CashFlow>;

    fn into_iter(self) -> Self::IntoIter {
        self.cash_flows.iter()
    }
}

/// Unvalidated wire form of a schedule.
#[derive(Deserialize)]
struct ScheduleData {
    cash_flows: Vec<CashFlow>,
    #[serde(default)]
    frequency: Frequency,
}

impl TryFrom<ScheduleData> for CashFlowSchedule {
    type Error = CoreError;

    fn try_from(data: ScheduleData) -> CoreResult<Self> {
        Self::new(data.cash_flows, data.frequency)
    }
}
