//! Double-booking rules for rentals.
//!
//! A candidate rental is admitted only if its period is well formed and it
//! does not overlap any existing rental of the same car. Everything here is a
//! pure function of its inputs; callers fetch the existing rentals and act on
//! the returned [`RentalDecision`].
//!
//! # Overlap
//!
//! Two periods overlap when `a.end >= b.start && b.end >= a.start`, where an
//! absent end counts as [`OPEN_END`]. Both boundaries are inclusive, so a
//! rental starting at the exact instant another one ends is a conflict, and an
//! open-ended rental blocks its car for every later period.

use chrono::{DateTime, Utc};

use crate::domain::entities::Rental;

/// Effective end of a rental with no recorded return.
pub const OPEN_END: DateTime<Utc> = DateTime::<Utc>::MAX_UTC;

/// Start and optional end of a rental.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RentalPeriod {
    pub start: DateTime<Utc>,
    pub end: Option<DateTime<Utc>>,
}

impl RentalPeriod {
    pub fn new(start: DateTime<Utc>, end: Option<DateTime<Utc>>) -> Self {
        Self { start, end }
    }

    /// A period with an end must start strictly before it.
    pub fn is_valid(&self) -> bool {
        self.end.is_none_or(|end| self.start < end)
    }

    pub fn effective_end(&self) -> DateTime<Utc> {
        self.end.unwrap_or(OPEN_END)
    }

    /// Boundary-inclusive intersection test.
    pub fn overlaps(&self, other: &RentalPeriod) -> bool {
        self.effective_end() >= other.start && other.effective_end() >= self.start
    }
}

/// A rental that has not been stored yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RentalCandidate {
    pub customer_id: i64,
    pub car_id: i64,
    pub period: RentalPeriod,
}

/// Outcome of checking a [`RentalCandidate`] against existing rentals.
///
/// Rejections caused by an overlap carry the id of the first conflicting
/// rental found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RentalDecision {
    Accepted,
    RejectedInvalidInterval,
    RejectedSameCustomerOverlap { rental_id: i64 },
    RejectedCarInUse { rental_id: i64 },
}

impl RentalDecision {
    pub fn is_accepted(&self) -> bool {
        matches!(self, RentalDecision::Accepted)
    }
}

/// Returns the first rental satisfying `predicate`.
pub fn find_conflict<'a, I, P>(rentals: I, predicate: P) -> Option<&'a Rental>
where
    I: IntoIterator<Item = &'a Rental>,
    P: Fn(&Rental) -> bool,
{
    rentals.into_iter().find(|rental| predicate(rental))
}

/// Decides whether `candidate` may be stored alongside `existing`.
///
/// Checks run in a fixed order and the first failure wins:
///
/// 1. the candidate period is well formed
/// 2. no overlapping rental of the same car by the same customer
/// 3. no overlapping rental of the same car by another customer
///
/// `existing` may contain rentals of other cars; they are ignored. When
/// re-checking an update, the caller leaves the record being replaced out of
/// `existing`.
pub fn evaluate<'a, I>(candidate: &RentalCandidate, existing: I) -> RentalDecision
where
    I: IntoIterator<Item = &'a Rental>,
    I::IntoIter: Clone,
{
    if !candidate.period.is_valid() {
        return RentalDecision::RejectedInvalidInterval;
    }

    let existing = existing.into_iter();
    let overlaps_candidate =
        |r: &Rental| r.car_id == candidate.car_id && r.period().overlaps(&candidate.period);

    if let Some(rental) = find_conflict(existing.clone(), |r| {
        r.customer_id == candidate.customer_id && overlaps_candidate(r)
    }) {
        return RentalDecision::RejectedSameCustomerOverlap {
            rental_id: rental.id,
        };
    }

    if let Some(rental) = find_conflict(existing, |r| {
        r.customer_id != candidate.customer_id && overlaps_candidate(r)
    }) {
        return RentalDecision::RejectedCarInUse {
            rental_id: rental.id,
        };
    }

    RentalDecision::Accepted
}
