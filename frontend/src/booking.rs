//! Lead capture and booking hand-off.
//!
//! Submitting a valid email fires the lead at the intake endpoint and, right
//! after, opens the scheduling widget. The two are independent: the intake
//! request is spawned and never awaited, so a slow or failing endpoint can't
//! hold up the booking.

use chrono::{DateTime, SecondsFormat, Utc};
use gloo_net::http::Request;
use log::{debug, info, warn};
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::js_sys::{Function, Reflect};
use web_sys::RequestMode;

use crate::config::{INTAKE_ENDPOINT, SCHEDULING_URL};
use crate::error::{self, BrowserError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LeadError {
    #[error("Please enter a valid email!")]
    InvalidEmail,
    #[error("booking widget already opened")]
    AlreadyBooked,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BookingState {
    #[default]
    Collecting,
    WidgetOpen,
}

/// Body posted to the intake endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadRecord {
    pub email: String,
    pub timestamp: String,
}

impl LeadRecord {
    pub fn new(email: &str, submitted_at: DateTime<Utc>) -> Self {
        Self {
            email: email.to_string(),
            timestamp: submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// How the scheduling widget ended up being shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetLaunch {
    Popup,
    NewWindow,
    /// Neither the popup nor the fallback window could be opened.
    Failed,
}

pub fn validate_email(email: &str) -> Result<(), LeadError> {
    if email.is_empty() || !email.contains('@') {
        return Err(LeadError::InvalidEmail);
    }
    Ok(())
}

pub trait LeadIntake {
    /// Hands the record off for delivery. Must return without waiting on the
    /// network; delivery failures are the implementation's to swallow.
    fn deliver(&self, record: LeadRecord);
}

pub trait Scheduler {
    fn open_popup(&self, url: &str) -> Result<(), BrowserError>;
    fn open_new_context(&self, url: &str) -> Result<(), BrowserError>;
}

/// Opens the popup, falling back to a new browsing context when the widget
/// library isn't usable.
pub fn launch_scheduler<S: Scheduler>(scheduler: &S, url: &str) -> WidgetLaunch {
    match scheduler.open_popup(url) {
        Ok(()) => WidgetLaunch::Popup,
        Err(e) => {
            debug!("popup unavailable ({}), opening {} directly", e, url);
            match scheduler.open_new_context(url) {
                Ok(()) => WidgetLaunch::NewWindow,
                Err(e) => {
                    warn!("could not open scheduling link: {}", e);
                    WidgetLaunch::Failed
                }
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadCapture {
    email: String,
    state: BookingState,
}

impl LeadCapture {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn state(&self) -> BookingState {
        self.state
    }

    pub fn set_email(&mut self, email: String) {
        self.email = email;
    }

    /// Validates the email, hands the lead to `intake`, then opens the
    /// scheduling widget. The state moves to `WidgetOpen` once and stays
    /// there; later submits are rejected without delivering anything.
    pub fn submit<I, S>(
        &mut self,
        intake: &I,
        scheduler: &S,
        submitted_at: DateTime<Utc>,
    ) -> Result<WidgetLaunch, LeadError>
    where
        I: LeadIntake,
        S: Scheduler,
    {
        if self.state == BookingState::WidgetOpen {
            return Err(LeadError::AlreadyBooked);
        }
        validate_email(&self.email)?;

        intake.deliver(LeadRecord::new(&self.email, submitted_at));

        self.state = BookingState::WidgetOpen;
        let launch = launch_scheduler(scheduler, SCHEDULING_URL);
        info!("booking opened via {:?}", launch);
        Ok(launch)
    }
}

/// Posts leads to the spreadsheet script. The request goes out in `no-cors`
/// mode, so the response is opaque and never inspected.
#[derive(Debug, Clone, Copy)]
pub struct SheetsIntake {
    endpoint: &'static str,
}

impl Default for SheetsIntake {
    fn default() -> Self {
        Self {
            endpoint: INTAKE_ENDPOINT,
        }
    }
}

async fn post_lead(endpoint: &str, record: &LeadRecord) -> Result<(), gloo_net::Error> {
    Request::post(endpoint)
        .mode(RequestMode::NoCors)
        .json(record)?
        .send()
        .await?;
    Ok(())
}

impl LeadIntake for SheetsIntake {
    fn deliver(&self, record: LeadRecord) {
        let endpoint = self.endpoint;
        spawn_local(async move {
            // Lost leads are tolerated; nothing is retried or shown to the user.
            match post_lead(endpoint, &record).await {
                Ok(()) => debug!("lead sent to intake"),
                Err(e) => debug!("lead intake failed: {}", e),
            }
        });
    }
}

#[derive(Serialize)]
struct PopupOptions<'a> {
    url: &'a str,
}

/// Drives the Calendly embed loaded from `index.html`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalendlyScheduler;

fn calendly() -> Result<JsValue, BrowserError> {
    let window = error::window()?;
    let calendly = Reflect::get(&window, &JsValue::from_str("Calendly"))?;
    if calendly.is_undefined() || calendly.is_null() {
        return Err(BrowserError::WidgetMissing);
    }
    Ok(calendly)
}

impl Scheduler for CalendlyScheduler {
    fn open_popup(&self, url: &str) -> Result<(), BrowserError> {
        let calendly = calendly()?;
        let init_popup: Function = Reflect::get(&calendly, &JsValue::from_str("initPopupWidget"))?
            .dyn_into()
            .map_err(|_| BrowserError::WidgetMissing)?;
        let options = serde_wasm_bindgen::to_value(&PopupOptions { url })
            .map_err(|e| BrowserError::Js(e.to_string()))?;
        init_popup.call1(&calendly, &options)?;
        Ok(())
    }

    fn open_new_context(&self, url: &str) -> Result<(), BrowserError> {
        error::window()?.open_with_url_and_target(url, "_blank")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct RecordingIntake {
        delivered: RefCell<Vec<LeadRecord>>,
    }

    impl LeadIntake for RecordingIntake {
        fn deliver(&self, record: LeadRecord) {
            self.delivered.borrow_mut().push(record);
        }
    }

    /// Accepts the lead and drops it, like a request that never completes.
    struct HungIntake;

    impl LeadIntake for HungIntake {
        fn deliver(&self, _record: LeadRecord) {}
    }

    #[derive(Default)]
    struct FakeScheduler {
        widget_missing: bool,
        windows_blocked: bool,
        popups: RefCell<Vec<String>>,
        windows: RefCell<Vec<String>>,
        calls: Cell<usize>,
    }

    impl Scheduler for FakeScheduler {
        fn open_popup(&self, url: &str) -> Result<(), BrowserError> {
            self.calls.set(self.calls.get() + 1);
            if self.widget_missing {
                return Err(BrowserError::WidgetMissing);
            }
            self.popups.borrow_mut().push(url.to_string());
            Ok(())
        }

        fn open_new_context(&self, url: &str) -> Result<(), BrowserError> {
            if self.windows_blocked {
                return Err(BrowserError::Js("popup blocked".into()));
            }
            self.windows.borrow_mut().push(url.to_string());
            Ok(())
        }
    }

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap()
    }

    fn capture(email: &str) -> LeadCapture {
        let mut lead = LeadCapture::default();
        lead.set_email(email.to_string());
        lead
    }

    #[test]
    fn rejects_emails_without_at_sign() {
        for email in ["", "hello", "vyvabrill.com", " "] {
            let intake = RecordingIntake::default();
            let scheduler = FakeScheduler::default();
            let mut lead = capture(email);

            let result = lead.submit(&intake, &scheduler, at());

            assert_eq!(result, Err(LeadError::InvalidEmail), "email {:?}", email);
            assert_eq!(lead.state(), BookingState::Collecting);
            assert!(intake.delivered.borrow().is_empty());
            assert_eq!(scheduler.calls.get(), 0);
        }
    }

    #[test]
    fn invalid_email_notice_text() {
        assert_eq!(LeadError::InvalidEmail.to_string(), "Please enter a valid email!");
    }

    #[test]
    fn any_string_with_at_sign_passes_validation() {
        assert_eq!(validate_email("@"), Ok(()));
        assert_eq!(validate_email("a@b"), Ok(()));
        assert_eq!(validate_email(" sam@shop.io "), Ok(()));
    }

    #[test]
    fn valid_email_delivers_lead_and_opens_popup() {
        let intake = RecordingIntake::default();
        let scheduler = FakeScheduler::default();
        let mut lead = capture("sam@shop.io");

        let launch = lead.submit(&intake, &scheduler, at());

        assert_eq!(launch, Ok(WidgetLaunch::Popup));
        assert_eq!(lead.state(), BookingState::WidgetOpen);
        assert_eq!(
            *intake.delivered.borrow(),
            vec![LeadRecord {
                email: "sam@shop.io".into(),
                timestamp: "2025-03-14T09:26:53.000Z".into(),
            }]
        );
        assert_eq!(*scheduler.popups.borrow(), vec![SCHEDULING_URL.to_string()]);
    }

    #[test]
    fn widget_opens_even_when_intake_never_answers() {
        let scheduler = FakeScheduler::default();
        let mut lead = capture("sam@shop.io");

        assert_eq!(lead.submit(&HungIntake, &scheduler, at()), Ok(WidgetLaunch::Popup));
        assert_eq!(lead.state(), BookingState::WidgetOpen);
    }

    #[test]
    fn missing_widget_falls_back_to_new_window() {
        let intake = RecordingIntake::default();
        let scheduler = FakeScheduler {
            widget_missing: true,
            ..Default::default()
        };
        let mut lead = capture("sam@shop.io");

        assert_eq!(lead.submit(&intake, &scheduler, at()), Ok(WidgetLaunch::NewWindow));
        assert_eq!(*scheduler.windows.borrow(), vec![SCHEDULING_URL.to_string()]);
        assert_eq!(lead.state(), BookingState::WidgetOpen);
    }

    #[test]
    fn blocked_fallback_still_transitions() {
        let scheduler = FakeScheduler {
            widget_missing: true,
            windows_blocked: true,
            ..Default::default()
        };
        let mut lead = capture("sam@shop.io");

        assert_eq!(lead.submit(&HungIntake, &scheduler, at()), Ok(WidgetLaunch::Failed));
        assert_eq!(lead.state(), BookingState::WidgetOpen);
    }

    #[test]
    fn transition_happens_once() {
        let intake = RecordingIntake::default();
        let scheduler = FakeScheduler::default();
        let mut lead = capture("sam@shop.io");

        lead.submit(&intake, &scheduler, at()).unwrap();
        lead.set_email("other@shop.io".into());
        let again = lead.submit(&intake, &scheduler, at());

        assert_eq!(again, Err(LeadError::AlreadyBooked));
        assert_eq!(lead.state(), BookingState::WidgetOpen);
        assert_eq!(intake.delivered.borrow().len(), 1);
        assert_eq!(scheduler.calls.get(), 1);
    }

    #[test]
    fn failed_validation_can_be_retried() {
        let intake = RecordingIntake::default();
        let scheduler = FakeScheduler::default();
        let mut lead = capture("sam");

        assert!(lead.submit(&intake, &scheduler, at()).is_err());
        lead.set_email("sam@shop.io".into());
        assert_eq!(lead.submit(&intake, &scheduler, at()), Ok(WidgetLaunch::Popup));
    }

    #[test]
    fn lead_record_serializes_as_intake_payload() {
        let submitted_at = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap()
            + chrono::Duration::milliseconds(678);
        let body = serde_json::to_value(LeadRecord::new("a@b.co", submitted_at)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "email": "a@b.co", "timestamp": "2025-01-02T03:04:05.678Z" })
        );
    }
}
