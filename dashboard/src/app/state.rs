//! # Application State
//!
//! All state shared between the UI thread and async tasks, behind a single
//! `Arc<RwLock<AppState>>`. Locks are held briefly; rendering clones the
//! small pieces it needs per frame.
//!
//! Server data lives here as plain snapshots of the last fetch. Nothing in
//! this module talks to the network; tasks overwrite these fields through
//! events processed in `on_tick`.

use crate::session::{SessionSnapshot, SessionStatus};
use shared::{
    AnalyticsOverview, Appointment, BloodBank, BloodRequest, Delivery, DeliveryMetric,
    DonorAvailabilitySummary, DonorPerformance, HealthMetric, NearbyDonor, Notification,
    PageInfo, RecipientInsight, Urgency, User, UserRole,
};
use std::time::Instant;

/// Interval after which the notification feed is refetched even without a
/// realtime invalidation signal.
pub const NOTIFICATION_FALLBACK_SECS: u64 = 60;

/// Available screens in the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Register,
    VerifyOtp,
    Overview,
    Requests,
    Deliveries,
    Appointments,
    BloodBanks,
    Analytics,
    Notifications,
    Profile,
}

impl Screen {
    /// Screens reachable from the navigation rail, in display order.
    pub fn nav_order() -> &'static [Screen] {
        &[
            Screen::Overview,
            Screen::Requests,
            Screen::Deliveries,
            Screen::Appointments,
            Screen::BloodBanks,
            Screen::Analytics,
            Screen::Notifications,
            Screen::Profile,
        ]
    }

    /// Display title for headers and the navigation rail.
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Login => "Sign in",
            Screen::Register => "Create account",
            Screen::VerifyOtp => "Verify OTP",
            Screen::Overview => "Overview",
            Screen::Requests => "Requests",
            Screen::Deliveries => "Deliveries",
            Screen::Appointments => "Appointments",
            Screen::BloodBanks => "Blood Banks",
            Screen::Analytics => "Analytics",
            Screen::Notifications => "Notifications",
            Screen::Profile => "Profile",
        }
    }

    /// Whether this screen sits behind the route guard.
    pub fn is_protected(&self) -> bool {
        !matches!(self, Screen::Login | Screen::Register | Screen::VerifyOtp)
    }

    /// Role-based navigation filter, mirroring what the backend authorizes.
    pub fn visible_for(&self, role: UserRole) -> bool {
        match self {
            Screen::Overview | Screen::Notifications | Screen::Profile => true,
            Screen::Requests | Screen::BloodBanks => {
                matches!(role, UserRole::Donor | UserRole::Recipient | UserRole::Admin)
            }
            Screen::Deliveries => matches!(role, UserRole::Delivery | UserRole::Admin),
            Screen::Appointments => matches!(role, UserRole::Donor | UserRole::Admin),
            Screen::Analytics => matches!(role, UserRole::Admin),
            Screen::Login | Screen::Register | Screen::VerifyOtp => false,
        }
    }
}

/// Login form state.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub error: Option<String>,
    pub submitting: bool,
}

/// Registration form state.
#[derive(Debug, Clone)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
    pub role: UserRole,
    pub blood_type: String,
    pub error: Option<String>,
    pub submitting: bool,
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone_number: String::new(),
            password: String::new(),
            role: UserRole::Donor,
            blood_type: String::new(),
            error: None,
            submitting: false,
        }
    }
}

/// OTP verification form state. `email` is prefilled after registration.
#[derive(Debug, Clone, Default)]
pub struct VerifyOtpForm {
    pub email: String,
    pub code: String,
    pub info: Option<String>,
    pub error: Option<String>,
    pub submitting: bool,
}

/// Form for creating a blood request.
#[derive(Debug, Clone)]
pub struct RequestForm {
    pub blood_type: String,
    pub units: String,
    pub urgency: Urgency,
    pub hospital_name: String,
    pub hospital_address: String,
    pub notes: String,
    pub error: Option<String>,
    pub submitting: bool,
}

impl Default for RequestForm {
    fn default() -> Self {
        Self {
            blood_type: String::new(),
            units: "1".to_string(),
            urgency: Urgency::Medium,
            hospital_name: String::new(),
            hospital_address: String::new(),
            notes: String::new(),
            error: None,
            submitting: false,
        }
    }
}

/// Blood request list plus the recipient's create form and nearby donors.
#[derive(Debug, Clone, Default)]
pub struct RequestsState {
    pub items: Vec<BloodRequest>,
    pub pagination: PageInfo,
    pub loading: bool,
    pub error: Option<String>,
    pub form: RequestForm,
    /// Request id with a lifecycle action (match/escalate/accept/decline)
    /// currently in flight; disables that row's buttons.
    pub busy_request: Option<String>,
    pub nearby: Vec<NearbyDonor>,
    pub nearby_loading: bool,
}

/// Form for assigning a courier to a request.
#[derive(Debug, Clone, Default)]
pub struct DeliveryForm {
    pub request_id: String,
    pub courier_id: String,
    pub error: Option<String>,
    pub submitting: bool,
}

/// Form for appending a tracking event to the selected delivery.
#[derive(Debug, Clone, Default)]
pub struct TrackingForm {
    pub status: String,
    pub notes: String,
}

/// Delivery list and courier tooling.
#[derive(Debug, Clone, Default)]
pub struct DeliveriesState {
    pub items: Vec<Delivery>,
    pub pagination: PageInfo,
    pub loading: bool,
    pub error: Option<String>,
    pub form: DeliveryForm,
    pub busy_delivery: Option<String>,
    pub selected: Option<String>,
    pub tracking: TrackingForm,
}

/// Form for booking a donation appointment.
#[derive(Debug, Clone, Default)]
pub struct AppointmentForm {
    pub blood_bank_id: String,
    /// Entered as RFC 3339 (e.g. `2026-09-14T10:30:00Z`); parsed on submit.
    pub scheduled_at: String,
    pub notes: String,
    pub error: Option<String>,
    pub submitting: bool,
}

/// Appointment list plus the donor's booking form.
#[derive(Debug, Clone, Default)]
pub struct AppointmentsState {
    pub items: Vec<Appointment>,
    pub pagination: PageInfo,
    pub loading: bool,
    pub error: Option<String>,
    pub form: AppointmentForm,
    pub busy_appointment: Option<String>,
}

/// Admin form for registering a blood bank.
#[derive(Debug, Clone, Default)]
pub struct BloodBankForm {
    pub name: String,
    pub contact_number: String,
    pub email: String,
    pub address: String,
    pub error: Option<String>,
    pub submitting: bool,
}

/// Blood bank directory state.
#[derive(Debug, Clone, Default)]
pub struct BloodBanksState {
    pub items: Vec<BloodBank>,
    pub loading: bool,
    pub error: Option<String>,
    pub search: String,
    pub form: BloodBankForm,
}

/// Notification feed cache driven by the realtime invalidation cycle.
///
/// The feed is never patched from WebSocket payloads; a signal only flips
/// `stale`, and `on_tick` refetches over REST while the session is live.
#[derive(Debug, Clone)]
pub struct NotificationsState {
    pub items: Vec<Notification>,
    pub pagination: PageInfo,
    /// Cached feed no longer matches the server; refetch on the next tick.
    pub stale: bool,
    pub fetching: bool,
    pub last_fetch: Option<Instant>,
    /// Running count of invalidation signals, visible in the status bar.
    pub invalidations: u64,
    pub error: Option<String>,
}

impl Default for NotificationsState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            pagination: PageInfo::default(),
            // Stale from the start so the first authenticated tick fetches.
            stale: true,
            fetching: false,
            last_fetch: None,
            invalidations: 0,
            error: None,
        }
    }
}

impl NotificationsState {
    /// Unread count for the badge.
    pub fn unread(&self) -> usize {
        self.items.iter().filter(|n| !n.is_read).count()
    }

    /// Whether the fallback refetch interval has elapsed.
    pub fn fallback_due(&self) -> bool {
        match self.last_fetch {
            Some(at) => at.elapsed().as_secs() >= NOTIFICATION_FALLBACK_SECS,
            None => true,
        }
    }
}

/// Overview screen: aggregate cards plus role-gated extras.
#[derive(Debug, Clone, Default)]
pub struct OverviewState {
    pub overview: Option<AnalyticsOverview>,
    pub loading: bool,
    pub error: Option<String>,
    /// Donor pool availability, shown to admins and recipients.
    pub availability: Option<DonorAvailabilitySummary>,
}

/// Admin analytics screen state.
#[derive(Debug, Clone, Default)]
pub struct AnalyticsState {
    pub donor_performance: Option<DonorPerformance>,
    pub recipient_insights: Vec<RecipientInsight>,
    pub delivery_metrics: Vec<DeliveryMetric>,
    pub users: Vec<User>,
    pub users_pagination: PageInfo,
    pub loading: bool,
    pub error: Option<String>,
}

/// Donor health journal entry form; numeric fields are free-text inputs
/// parsed on submit.
#[derive(Debug, Clone, Default)]
pub struct HealthForm {
    pub hemoglobin: String,
    pub systolic: String,
    pub diastolic: String,
    pub pulse: String,
    pub weight: String,
    pub notes: String,
    pub error: Option<String>,
    pub submitting: bool,
}

/// Profile screen: editable profile fields plus the donor health journal.
#[derive(Debug, Clone, Default)]
pub struct ProfileState {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub blood_type: String,
    pub available: bool,
    pub emergency_alerts: bool,
    pub email_updates: bool,
    pub sms_updates: bool,
    /// Set once the form has been seeded from the session user.
    pub seeded: bool,
    pub message: Option<String>,
    pub error: Option<String>,
    pub submitting: bool,
    pub health: Vec<HealthMetric>,
    pub health_loading: bool,
    pub health_form: HealthForm,
}

impl ProfileState {
    /// Seed the editable fields from the logged-in user.
    pub fn seed_from(&mut self, user: &User) {
        self.first_name = user.first_name.clone();
        self.last_name = user.last_name.clone();
        self.phone_number = user.phone_number.clone();
        self.blood_type = user.blood_type.clone().unwrap_or_default();
        self.available = user
            .availability
            .as_ref()
            .map(|a| a.is_available)
            .unwrap_or(false);
        let prefs = user.notification_preferences.clone().unwrap_or_default();
        self.emergency_alerts = prefs.emergency_alerts;
        self.email_updates = prefs.email_updates;
        self.sms_updates = prefs.sms_updates;
        self.seeded = true;
    }
}

/// Shared application state.
pub struct AppState {
    pub current_screen: Screen,
    /// Mirror of the session store, refreshed whenever an auth task lands.
    pub session: SessionSnapshot,
    /// Set once the startup session probe has been spawned; the route guard
    /// asks for initialization exactly once.
    pub initialize_started: bool,
    pub realtime_connected: bool,
    pub login: LoginForm,
    pub register: RegisterForm,
    pub verify: VerifyOtpForm,
    pub overview: OverviewState,
    pub requests: RequestsState,
    pub deliveries: DeliveriesState,
    pub appointments: AppointmentsState,
    pub blood_banks: BloodBanksState,
    pub analytics: AnalyticsState,
    pub notifications: NotificationsState,
    pub profile: ProfileState,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            current_screen: Screen::Overview,
            session: SessionSnapshot {
                status: SessionStatus::Idle,
                user: None,
                otp_hint: None,
            },
            initialize_started: false,
            realtime_connected: false,
            login: LoginForm::default(),
            register: RegisterForm::default(),
            verify: VerifyOtpForm::default(),
            overview: OverviewState::default(),
            requests: RequestsState::default(),
            deliveries: DeliveriesState::default(),
            appointments: AppointmentsState::default(),
            blood_banks: BloodBanksState::default(),
            analytics: AnalyticsState::default(),
            notifications: NotificationsState::default(),
            profile: ProfileState::default(),
        }
    }

    /// The logged-in user's role, when authenticated.
    pub fn role(&self) -> Option<UserRole> {
        self.session.user.as_ref().map(|u| u.role)
    }

    /// Reset all per-user state on logout so the next login starts clean.
    pub fn clear_user_data(&mut self) {
        self.overview = OverviewState::default();
        self.requests = RequestsState::default();
        self.deliveries = DeliveriesState::default();
        self.appointments = AppointmentsState::default();
        self.blood_banks = BloodBanksState::default();
        self.analytics = AnalyticsState::default();
        self.notifications = NotificationsState::default();
        self.profile = ProfileState::default();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_visibility_matches_role_matrix() {
        // Couriers only see Overview, Deliveries, Notifications, Profile.
        let courier: Vec<Screen> = Screen::nav_order()
            .iter()
            .copied()
            .filter(|s| s.visible_for(UserRole::Delivery))
            .collect();
        assert_eq!(
            courier,
            vec![
                Screen::Overview,
                Screen::Deliveries,
                Screen::Notifications,
                Screen::Profile
            ]
        );

        // Admins see everything in the rail.
        assert!(Screen::nav_order()
            .iter()
            .all(|s| s.visible_for(UserRole::Admin)));

        // Analytics is admin-only.
        assert!(!Screen::Analytics.visible_for(UserRole::Donor));
        assert!(!Screen::Analytics.visible_for(UserRole::Recipient));
        assert!(!Screen::Analytics.visible_for(UserRole::Delivery));
    }

    #[test]
    fn auth_screens_are_not_protected() {
        assert!(!Screen::Login.is_protected());
        assert!(!Screen::Register.is_protected());
        assert!(!Screen::VerifyOtp.is_protected());
        assert!(Screen::Overview.is_protected());
        assert!(Screen::Notifications.is_protected());
    }

    #[test]
    fn notifications_start_stale_and_count_unread() {
        let state = NotificationsState::default();
        assert!(state.stale);
        assert!(state.fallback_due());
        assert_eq!(state.unread(), 0);
    }
}
