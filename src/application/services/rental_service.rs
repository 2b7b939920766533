//! Rental booking service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::domain::entities::{NewRental, Rental};
use crate::domain::overlap::{self, RentalCandidate, RentalDecision};
use crate::domain::repositories::RentalRepository;
use crate::error::AppError;

const INVALID_INTERVAL_MESSAGE: &str = "RentalStart must be earlier than RentalEnd.";
const SAME_CUSTOMER_MESSAGE: &str =
    "The same customer already has this car in an overlapping period.";
const CAR_IN_USE_MESSAGE: &str =
    "The car is already rented to another customer in the given period.";

/// Service for booking cars and maintaining rental records.
///
/// Every write is checked with [`overlap::evaluate`] against the other
/// rentals of the target car before it reaches the repository.
pub struct RentalService {
    repository: Arc<dyn RentalRepository>,
}

impl RentalService {
    pub fn new(repository: Arc<dyn RentalRepository>) -> Self {
        Self { repository }
    }

    /// Books a car for a customer.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] with reason `invalid_interval` if the end is
    ///   not after the start
    /// - [`AppError::Conflict`] with reason `same_customer_overlap` or
    ///   `car_in_use` if the car is already booked in an overlapping period
    pub async fn create_rental(&self, new_rental: NewRental) -> Result<Rental, AppError> {
        let new_rental = new_rental.at_store_precision();
        let candidate = candidate_for(&new_rental);

        // Period first, before any query.
        if !candidate.period.is_valid() {
            return Err(decision_error(RentalDecision::RejectedInvalidInterval, &candidate));
        }

        let existing = self.repository.list_for_car(new_rental.car_id).await?;
        let decision = overlap::evaluate(&candidate, &existing);
        if !decision.is_accepted() {
            return Err(decision_error(decision, &candidate));
        }

        let rental = match self.repository.create(new_rental).await {
            Ok(rental) => rental,
            Err(e) => return Err(self.explain_store_conflict(e, &candidate, None).await),
        };

        tracing::info!(
            rental_id = rental.id,
            car_id = rental.car_id,
            customer_id = rental.customer_id,
            open_ended = rental.is_open_ended(),
            "Rental created"
        );
        Ok(rental)
    }

    pub async fn list_rentals(&self) -> Result<Vec<Rental>, AppError> {
        self.repository.list().await
    }

    /// Lists rentals in progress at `at`, including open-ended ones.
    ///
    /// The store preselects candidates; [`Rental::is_active_at`] has the final say.
    pub async fn list_active_rentals(&self, at: DateTime<Utc>) -> Result<Vec<Rental>, AppError> {
        let rentals = self.repository.list_active_at(at).await?;

        Ok(rentals
            .into_iter()
            .filter(|rental| rental.is_active_at(at))
            .collect())
    }

    /// Replaces every field of a rental.
    ///
    /// The replacement is checked like a new booking against the other
    /// rentals of its car; the record being replaced is left out of the check.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if no rental has this id
    /// - otherwise the same as [`Self::create_rental`]
    pub async fn update_rental(&self, id: i64, rental: NewRental) -> Result<Rental, AppError> {
        let rental = rental.at_store_precision();

        if self.repository.find_by_id(id).await?.is_none() {
            return Err(not_found(id));
        }

        let candidate = candidate_for(&rental);
        if !candidate.period.is_valid() {
            return Err(decision_error(RentalDecision::RejectedInvalidInterval, &candidate));
        }

        let existing = self.repository.list_for_car(rental.car_id).await?;
        let decision = overlap::evaluate(&candidate, existing.iter().filter(|r| r.id != id));
        if !decision.is_accepted() {
            return Err(decision_error(decision, &candidate));
        }

        let updated = match self.repository.update(id, rental).await {
            Ok(updated) => updated.ok_or_else(|| not_found(id))?,
            Err(e) => return Err(self.explain_store_conflict(e, &candidate, Some(id)).await),
        };

        tracing::info!(rental_id = id, car_id = updated.car_id, "Rental updated");
        Ok(updated)
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no rental has this id.
    pub async fn delete_rental(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(not_found(id));
        }

        tracing::info!(rental_id = id, "Rental deleted");
        Ok(())
    }

    /// Gives a store-side double-booking rejection the reason the overlap
    /// rules assign to it.
    ///
    /// A write that raced past [`overlap::evaluate`] is reported by the store
    /// as `car_in_use` whoever holds the conflicting rental. Re-reading the
    /// car's rentals tells a same-customer overlap apart. Any other error, or
    /// a conflict that no longer shows up, is returned unchanged.
    async fn explain_store_conflict(
        &self,
        error: AppError,
        candidate: &RentalCandidate,
        replacing: Option<i64>,
    ) -> AppError {
        if !matches!(error, AppError::Conflict { .. }) || error.reason() != Some("car_in_use") {
            return error;
        }

        let Ok(existing) = self.repository.list_for_car(candidate.car_id).await else {
            return error;
        };

        let others = existing.iter().filter(|r| Some(r.id) != replacing);
        match overlap::evaluate(candidate, others) {
            RentalDecision::Accepted => error,
            decision => decision_error(decision, candidate),
        }
    }
}

fn candidate_for(rental: &NewRental) -> RentalCandidate {
    RentalCandidate {
        customer_id: rental.customer_id,
        car_id: rental.car_id,
        period: rental.period(),
    }
}

/// Maps a rejecting decision onto the error returned to the client.
fn decision_error(decision: RentalDecision, candidate: &RentalCandidate) -> AppError {
    match decision {
        RentalDecision::RejectedInvalidInterval => AppError::bad_request(
            INVALID_INTERVAL_MESSAGE,
            json!({
                "reason": "invalid_interval",
                "rental_start": candidate.period.start,
                "rental_end": candidate.period.end,
            }),
        ),
        RentalDecision::RejectedSameCustomerOverlap { rental_id } => {
            tracing::warn!(
                car_id = candidate.car_id,
                customer_id = candidate.customer_id,
                conflicting_rental_id = rental_id,
                "Rental rejected: same customer overlap"
            );
            AppError::conflict(
                SAME_CUSTOMER_MESSAGE,
                json!({
                    "reason": "same_customer_overlap",
                    "conflicting_rental_id": rental_id,
                }),
            )
        }
        RentalDecision::RejectedCarInUse { rental_id } => {
            tracing::warn!(
                car_id = candidate.car_id,
                customer_id = candidate.customer_id,
                conflicting_rental_id = rental_id,
                "Rental rejected: car in use"
            );
            AppError::conflict(
                CAR_IN_USE_MESSAGE,
                json!({
                    "reason": "car_in_use",
                    "conflicting_rental_id": rental_id,
                }),
            )
        }
        RentalDecision::Accepted => {
            AppError::internal("Accepted rental reported as rejected", json!({}))
        }
    }
}

fn not_found(id: i64) -> AppError {
    AppError::not_found("Rental not found", json!({ "id": id }))
}
