//! # Application Events
//!
//! Event types for async task communication between background tasks and the
//! main thread. Tasks send one of these when they finish; `on_tick` drains
//! the channel and folds the results into [`crate::app::state::AppState`].

use crate::core::error::ApiError;
use crate::session::SessionSnapshot;
use shared::{
    AnalyticsOverview, Appointment, BloodBank, BloodRequest, Delivery, DeliveryMetric,
    DonorAvailabilitySummary, DonorPerformance, HealthMetric, NearbyDonor, Notification,
    Paginated, RecipientInsight, User,
};

/// Async task results sent to the main thread.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Session store state changed; carries a fresh snapshot for rendering.
    SessionChanged(SessionSnapshot),
    /// Login attempt finished (the store is already updated on success).
    LoginResult(Result<(), ApiError>),
    /// Registration finished; `Ok` carries the demo OTP hint when present.
    RegisterResult(Result<Option<String>, ApiError>),
    /// OTP resend finished; `Ok` carries the backend's confirmation message.
    OtpSendResult(Result<String, ApiError>),
    /// OTP verification finished.
    OtpVerifyResult(Result<(), ApiError>),
    /// Profile update finished.
    ProfileSaved(Result<User, ApiError>),

    /// Blood request list fetched.
    RequestsLoaded(Result<Paginated<BloodRequest>, ApiError>),
    /// A request was created or moved through its lifecycle; carries the
    /// updated record to fold into the list.
    RequestSaved(Result<BloodRequest, ApiError>),
    /// Nearby donors fetched for the recipient side panel.
    NearbyDonorsLoaded(Result<Vec<NearbyDonor>, ApiError>),

    /// Delivery list fetched.
    DeliveriesLoaded(Result<Paginated<Delivery>, ApiError>),
    /// A delivery was created, advanced, or annotated.
    DeliverySaved(Result<Delivery, ApiError>),

    /// Appointment list fetched.
    AppointmentsLoaded(Result<Paginated<Appointment>, ApiError>),
    /// An appointment was booked or updated.
    AppointmentSaved(Result<Appointment, ApiError>),

    /// Blood bank directory fetched.
    BloodBanksLoaded(Result<Vec<BloodBank>, ApiError>),
    /// A blood bank was created or updated.
    BloodBankSaved(Result<BloodBank, ApiError>),

    /// Notification feed fetched.
    NotificationsLoaded(Result<Paginated<Notification>, ApiError>),
    /// One notification was marked read.
    NotificationUpdated(Result<Notification, ApiError>),
    /// All notifications were marked read.
    NotificationsAllRead(Result<(), ApiError>),

    /// Overview aggregates fetched.
    OverviewLoaded(Result<AnalyticsOverview, ApiError>),
    /// Donor availability summary fetched.
    AvailabilityLoaded(Result<DonorAvailabilitySummary, ApiError>),
    /// Donor performance series fetched.
    DonorPerformanceLoaded(Result<DonorPerformance, ApiError>),
    /// Recipient insight rows fetched.
    RecipientInsightsLoaded(Result<Vec<RecipientInsight>, ApiError>),
    /// Delivery metric rows fetched.
    DeliveryMetricsLoaded(Result<Vec<DeliveryMetric>, ApiError>),
    /// Admin user directory fetched.
    UsersLoaded(Result<Paginated<User>, ApiError>),

    /// Donor health journal fetched.
    HealthMetricsLoaded(Result<Vec<HealthMetric>, ApiError>),
    /// A health journal entry was recorded.
    HealthMetricSaved(Result<HealthMetric, ApiError>),
}
