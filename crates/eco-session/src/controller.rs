//! Session state machine.
//!
//! The controller owns the user directory and holds the single active
//! session: logged out, a regular user session, or the admin session. It
//! is the only component that writes to the directory; screens go through
//! it for every credential flow.

use crate::{RegistrationForm, Result as SessionErrorResult};

use eco_core::format::{format_cpf, format_phone};
use eco_core::UserProfile;
use eco_store::UserDirectory;

use chrono::Utc;
use log::info;

/// Placeholder contact data for guest sessions, pre-formatted.
const GUEST_PHONE_DIGITS: &str = "81999999999";
const PLACEHOLDER_CPF_DIGITS: &str = "00000000000";

/// The admin shortcut is a mock: fixed id, city-hall switchboard number.
const ADMIN_ID: i64 = 999;
const ADMIN_PHONE_DIGITS: &str = "81335500000";

/// Identity displayed by the admin session (from configuration).
#[derive(Debug, Clone)]
pub struct AdminIdentity {
    pub email: String,
    pub name: String,
}

/// The three session states. One top-level view is rendered per state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    LoggedOut,
    Regular(UserProfile),
    Admin(UserProfile),
}

/// How a login resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// The email was in the directory; the stored profile is used.
    Known(UserProfile),
    /// Unknown email: a temporary profile, never persisted.
    Guest(UserProfile),
}

pub struct SessionController<D> {
    directory: D,
    admin: AdminIdentity,
    state: SessionState,
}

impl<D: UserDirectory> SessionController<D> {
    pub fn new(directory: D, admin: AdminIdentity) -> Self {
        Self {
            directory,
            admin,
            state: SessionState::LoggedOut,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn current_user(&self) -> Option<&UserProfile> {
        match &self.state {
            SessionState::LoggedOut => None,
            SessionState::Regular(profile) | SessionState::Admin(profile) => Some(profile),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        !matches!(self.state, SessionState::LoggedOut)
    }

    pub fn is_admin(&self) -> bool {
        matches!(self.state, SessionState::Admin(_))
    }

    /// The backing directory, for the debug/admin surfaces.
    pub fn directory(&self) -> &D {
        &self.directory
    }

    pub fn directory_mut(&mut self) -> &mut D {
        &mut self.directory
    }

    /// Log in with an email. A known email resolves to the stored profile;
    /// an unknown one gets a temporary guest profile that is NOT saved to
    /// the directory - only a full registration persists anything.
    pub fn login(&mut self, email: &str) -> SessionErrorResult<LoginOutcome> {
        let outcome = match self.directory.lookup_by_email(email)? {
            Some(profile) => {
                info!("Login: known user {} ({})", profile.name, profile.email);
                LoginOutcome::Known(profile)
            }
            None => {
                let guest = guest_profile(email);
                info!("Login: unknown email {}, guest session as {}", email, guest.name);
                LoginOutcome::Guest(guest)
            }
        };

        let profile = match &outcome {
            LoginOutcome::Known(p) | LoginOutcome::Guest(p) => p.clone(),
        };
        self.state = SessionState::Regular(profile);

        Ok(outcome)
    }

    /// Register a new user and open a regular session for them.
    ///
    /// CPF and phone are normalized through the formatters before storage;
    /// a duplicate email aborts with no directory change.
    pub fn register(&mut self, form: RegistrationForm) -> SessionErrorResult<UserProfile> {
        let profile = UserProfile::new(
            Utc::now().timestamp_millis(),
            form.name,
            form.email,
            format_phone(&form.phone),
            format_cpf(&form.cpf),
        );

        self.directory.save(&profile)?;

        info!("Registered new user: {} ({})", profile.name, profile.email);
        self.state = SessionState::Regular(profile.clone());

        Ok(profile)
    }

    /// Fixed admin credential shortcut - no real authentication check.
    pub fn admin_login(&mut self) -> UserProfile {
        let profile = UserProfile::new(
            ADMIN_ID,
            self.admin.name.clone(),
            self.admin.email.clone(),
            format_phone(ADMIN_PHONE_DIGITS),
            format_cpf(PLACEHOLDER_CPF_DIGITS),
        );

        info!("Admin session opened for {}", profile.email);
        self.state = SessionState::Admin(profile.clone());

        profile
    }

    /// Clear the session unconditionally.
    pub fn logout(&mut self) {
        if let Some(profile) = self.current_user() {
            info!("Logout: {}", profile.email);
        }
        self.state = SessionState::LoggedOut;
    }
}

/// Build the temporary profile for an unknown email: the name comes from
/// the local part, first letter capitalized and `.`/`_` turned into
/// spaces, contact fields filled with formatted placeholders.
fn guest_profile(email: &str) -> UserProfile {
    UserProfile::new(
        Utc::now().timestamp_millis(),
        guest_name(email),
        email,
        format_phone(GUEST_PHONE_DIGITS),
        format_cpf(PLACEHOLDER_CPF_DIGITS),
    )
}

pub(crate) fn guest_name(email: &str) -> String {
    let local = email.split('@').next().unwrap_or(email);
    let mut chars = local.chars();

    match chars.next() {
        None => String::new(),
        Some(first) => first
            .to_uppercase()
            .chain(chars.map(|c| if c == '.' || c == '_' { ' ' } else { c }))
            .collect(),
    }
}
