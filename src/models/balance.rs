//! Leave balance model.
//!
//! This module defines the [`LeaveBalance`] sub-resource holding the days
//! remaining per paid leave type for one employee. Balances are owned by the
//! workflow engine and mutated only inside its transaction boundary.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::LeaveType;

/// Days of leave remaining per paid leave type for one employee.
///
/// Loss-of-pay leave does not draw from this record; it is unlimited but
/// unpaid. Fields support .5 increments. An approval decrement is applied
/// without re-validation and may drive a field negative if the balance
/// changed between submission and approval.
///
/// # Example
///
/// ```
/// use leave_engine::models::{LeaveBalance, LeaveType};
/// use rust_decimal::Decimal;
///
/// let balance = LeaveBalance {
///     casual: Decimal::from(8),
///     sick: Decimal::from(10),
///     earned: Decimal::from(15),
/// };
/// assert_eq!(balance.available(LeaveType::Sick), Some(Decimal::from(10)));
/// assert_eq!(balance.available(LeaveType::LossOfPay), None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveBalance {
    /// Casual leave days remaining.
    pub casual: Decimal,
    /// Sick leave days remaining.
    pub sick: Decimal,
    /// Earned leave days remaining.
    pub earned: Decimal,
}

impl LeaveBalance {
    /// Returns the days remaining for a leave type.
    ///
    /// Returns `None` for [`LeaveType::LossOfPay`], which has no balance.
    pub fn available(&self, leave_type: LeaveType) -> Option<Decimal> {
        match leave_type {
            LeaveType::Casual => Some(self.casual),
            LeaveType::Sick => Some(self.sick),
            LeaveType::Earned => Some(self.earned),
            LeaveType::LossOfPay => None,
        }
    }

    /// Deducts approved days from the matching balance field.
    ///
    /// A no-op for [`LeaveType::LossOfPay`]. The deduction is not validated
    /// against the current balance.
    pub fn deduct(&mut self, leave_type: LeaveType, days: Decimal) {
        match leave_type {
            LeaveType::Casual => self.casual -= days,
            LeaveType::Sick => self.sick -= days,
            LeaveType::Earned => self.earned -= days,
            LeaveType::LossOfPay => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_balance() -> LeaveBalance {
        LeaveBalance {
            casual: Decimal::from(8),
            sick: Decimal::from(10),
            earned: Decimal::from(15),
        }
    }

    #[test]
    fn test_available_per_leave_type() {
        let balance = make_balance();
        assert_eq!(balance.available(LeaveType::Casual), Some(Decimal::from(8)));
        assert_eq!(balance.available(LeaveType::Sick), Some(Decimal::from(10)));
        assert_eq!(
            balance.available(LeaveType::Earned),
            Some(Decimal::from(15))
        );
        assert_eq!(balance.available(LeaveType::LossOfPay), None);
    }

    #[test]
    fn test_deduct_casual() {
        let mut balance = make_balance();
        balance.deduct(LeaveType::Casual, Decimal::from(2));
        assert_eq!(balance.casual, Decimal::from(6));
        assert_eq!(balance.sick, Decimal::from(10));
    }

    #[test]
    fn test_deduct_half_day() {
        let mut balance = make_balance();
        balance.deduct(LeaveType::Sick, Decimal::new(5, 1));
        assert_eq!(balance.sick, Decimal::new(95, 1));
    }

    #[test]
    fn test_deduct_loss_of_pay_is_noop() {
        let mut balance = make_balance();
        balance.deduct(LeaveType::LossOfPay, Decimal::from(5));
        assert_eq!(balance, make_balance());
    }

    #[test]
    fn test_deduct_is_not_guarded_and_may_go_negative() {
        let mut balance = LeaveBalance::default();
        balance.deduct(LeaveType::Earned, Decimal::from(3));
        assert_eq!(balance.earned, Decimal::from(-3));
    }

    #[test]
    fn test_serialize_balance() {
        let json = serde_json::to_string(&make_balance()).unwrap();
        assert!(json.contains("\"casual\":\"8\""));
        assert!(json.contains("\"sick\":\"10\""));
        assert!(json.contains("\"earned\":\"15\""));
    }
}
