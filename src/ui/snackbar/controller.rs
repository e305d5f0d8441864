// SPDX-License-Identifier: MPL-2.0
//! Overlay lifecycle for the snack bar.
//!
//! The `Controller` owns the single overlay layer. It is in one of two
//! states: empty, or showing exactly one session. Every installed view gets
//! a fresh [`SessionId`] from a monotonically increasing counter. Auto-hide
//! timers are delayed tasks that report the id they were scheduled for, and
//! a timer only dismisses the overlay if that id is still on screen, so a
//! superseded session's timer can never hide its successor.

use super::request::Request;
use super::reveal::Reveal;
use super::view::SnackbarView;
use crate::config::{
    AutoHideDelay, RevealDuration, SnackbarConfig, ANIMATION_FRAME_MS,
};
use crate::ui::design_tokens::sizing;
use iced::widget::{text, Container};
use iced::{time, Element, Length, Subscription, Task};
use std::future::Future;
use std::time::{Duration, Instant};

/// Identity of one installed snack bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(u64);

impl SessionId {
    pub(crate) fn first() -> Self {
        Self(1)
    }

    fn next(self) -> Self {
        Self(self.0 + 1)
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Messages for snack bar state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Auto-hide timer fired for a session.
    AutoHide(SessionId),
    /// The view of a session was tapped.
    Tapped(SessionId),
    /// Hide whatever is showing.
    Dismiss,
    /// Animation frame for the slide-in.
    Frame(Instant),
}

/// A pending auto-hide timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoHide {
    pub session: SessionId,
    pub delay: Duration,
}

#[derive(Debug)]
struct Session<M> {
    id: SessionId,
    view: SnackbarView<M>,
    reveal: Reveal,
    auto_hide: Option<Duration>,
}

/// Owner of the snack bar overlay.
#[derive(Debug)]
pub struct Controller<M> {
    session: Option<Session<M>>,
    next_session: SessionId,
    auto_hide_delay: AutoHideDelay,
    reveal_duration: RevealDuration,
    safe_area_top: f32,
}

impl<M> Default for Controller<M> {
    fn default() -> Self {
        Self {
            session: None,
            next_session: SessionId::first(),
            auto_hide_delay: AutoHideDelay::default(),
            reveal_duration: RevealDuration::default(),
            safe_area_top: 0.0,
        }
    }
}

impl<M> Controller<M> {
    /// Creates an empty controller with default timings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty controller using the given settings.
    #[must_use]
    pub fn with_config(config: &SnackbarConfig) -> Self {
        Self {
            auto_hide_delay: config.auto_hide(),
            reveal_duration: config.reveal(),
            safe_area_top: config.safe_area_top(),
            ..Self::default()
        }
    }

    /// Sets the top inset reserved above the snack bar content.
    pub fn set_safe_area_top(&mut self, inset: f32) {
        self.safe_area_top = crate::config::clamp_safe_area_top(inset);
    }

    #[must_use]
    pub fn auto_hide_delay(&self) -> Duration {
        self.auto_hide_delay.as_duration()
    }

    /// Shows `request`, replacing anything currently visible.
    ///
    /// Returns the auto-hide timer task, or `Task::none()` when the request
    /// does not auto-hide.
    pub fn show(&mut self, request: Request<M>) -> Task<Message> {
        match self.install(request, Instant::now()) {
            Some(timer) => schedule(timer),
            None => Task::none(),
        }
    }

    /// Installs `request` as the overlay's sole content and starts its reveal.
    ///
    /// This is the state transition behind [`Controller::show`]; the returned
    /// timer, if any, must be delivered back as [`Message::AutoHide`] after
    /// its delay.
    pub fn install(&mut self, request: Request<M>, now: Instant) -> Option<AutoHide> {
        let (severity, text, auto_hide, on_tap) = request.into_parts();

        let mut view = SnackbarView::create_with_style(severity, text);
        if let Some(on_tap) = on_tap {
            view = view.with_tap_handler(on_tap);
        }

        let id = self.next_session;
        self.next_session = id.next();
        view.attach(id);

        let delay = auto_hide.then(|| self.auto_hide_delay.as_duration());

        if let Some(previous) = &self.session {
            tracing::debug!(
                previous = previous.id.value(),
                session = id.value(),
                "snackbar superseded"
            );
        }
        tracing::debug!(
            session = id.value(),
            ?severity,
            auto_hide,
            text = %view.text().to_plain(),
            "snackbar shown"
        );

        self.session = Some(Session {
            id,
            view,
            reveal: Reveal::start(now, self.reveal_duration.as_duration()),
            auto_hide: delay,
        });

        delay.map(|delay| AutoHide { session: id, delay })
    }

    /// Hides the overlay, whatever is showing. Does nothing when empty.
    pub fn dismiss(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::debug!(session = session.id.value(), "snackbar dismissed");
        }
    }

    /// Dismisses only if `id` is the session currently on screen.
    fn dismiss_if_current(&mut self, id: SessionId) -> bool {
        if self.current_session() == Some(id) {
            self.dismiss();
            true
        } else {
            tracing::trace!(session = id.value(), "ignoring stale snackbar dismissal");
            false
        }
    }

    /// Handles a snack bar message.
    ///
    /// Returns the tap message of a tapped session so the caller can
    /// dispatch it. It is returned at most once per session. The tapped
    /// session is already dismissed by the time the caller dispatches it, so
    /// a `show` issued from the tap handler is not hidden afterwards.
    pub fn update(&mut self, message: Message) -> Option<M> {
        match message {
            Message::AutoHide(id) => {
                self.dismiss_if_current(id);
                None
            }
            Message::Tapped(id) => {
                let session = self.session.as_mut().filter(|s| s.id == id)?;
                let on_tap = session.view.take_tap_handler();
                self.dismiss_if_current(id);
                on_tap
            }
            Message::Dismiss => {
                self.dismiss();
                None
            }
            Message::Frame(now) => {
                if let Some(session) = &mut self.session {
                    session.reveal.advance(now);
                }
                None
            }
        }
    }

    /// Frame ticks while the slide-in is running.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.is_revealing() {
            time::every(Duration::from_millis(ANIMATION_FRAME_MS)).map(Message::Frame)
        } else {
            Subscription::none()
        }
    }

    /// Renders the overlay layer, meant to sit on top of the window's stack.
    pub fn view(&self) -> Element<'_, Message> {
        match &self.session {
            Some(session) => session.view.view(self.height(), self.safe_area_top),
            // Empty container that takes no space
            None => Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into(),
        }
    }

    #[must_use]
    pub fn is_showing(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn is_revealing(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|session| session.reveal.is_running())
    }

    #[must_use]
    pub fn current_session(&self) -> Option<SessionId> {
        self.session.as_ref().map(|session| session.id)
    }

    /// The view currently on screen.
    #[must_use]
    pub fn current(&self) -> Option<&SnackbarView<M>> {
        self.session.as_ref().map(|session| &session.view)
    }

    /// Auto-hide delay scheduled for the current session, if any.
    #[must_use]
    pub fn current_auto_hide(&self) -> Option<Duration> {
        self.session.as_ref().and_then(|session| session.auto_hide)
    }

    /// Current overlay height, including the safe-area inset.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.session.as_ref().map_or(0.0, |session| {
            session.reveal.progress() * (sizing::SNACKBAR_HEIGHT + self.safe_area_top)
        })
    }
}

/// Queues `request` onto the UI loop as an application message.
///
/// `wrap` turns the request into the message whose handler calls
/// [`Controller::show`], so the request can be produced by any task and is
/// still installed from `update`.
pub fn submit<M>(request: Request<M>, wrap: fn(Box<Request<M>>) -> M) -> Task<M>
where
    M: Send + 'static,
{
    Task::done(wrap(Box::new(request)))
}

/// Delivers `Message::AutoHide` for the timer's session after its delay.
fn schedule(timer: AutoHide) -> Task<Message> {
    Task::perform(expire(timer), std::convert::identity)
}

/// Resolves to the timer's `Message::AutoHide` once its delay has elapsed.
///
/// The deadline is fixed when this is called, not when first polled.
fn expire(timer: AutoHide) -> impl Future<Output = Message> {
    let AutoHide { session, delay } = timer;
    let sleep = tokio::time::sleep(delay);
    async move {
        sleep.await;
        Message::AutoHide(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::snackbar::Severity;
    use std::task::{Context, Waker};

    #[derive(Debug, Clone, PartialEq)]
    enum AppMessage {
        Undo,
    }

    fn controller() -> Controller<AppMessage> {
        Controller::new()
    }

    #[test]
    fn new_controller_is_empty() {
        let controller = controller();
        assert!(!controller.is_showing());
        assert_eq!(controller.current_session(), None);
        assert_eq!(controller.height(), 0.0);
    }

    #[test]
    fn show_installs_view_with_severity_background() {
        for severity in Severity::ALL {
            let mut controller = controller();
            controller.install(Request::new(severity, "hello"), Instant::now());

            let view = controller.current().expect("view should be installed");
            assert_eq!(view.background(), severity.color());
            assert_eq!(view.session(), controller.current_session());
        }
    }

    #[test]
    fn auto_hide_timer_uses_default_delay() {
        let mut controller = controller();
        let timer = controller
            .install(Request::success("Saved"), Instant::now())
            .expect("auto-hide should schedule a timer");

        assert_eq!(timer.delay, Duration::from_secs(5));
        assert_eq!(Some(timer.session), controller.current_session());

        controller.update(Message::AutoHide(timer.session));
        assert!(!controller.is_showing());
    }

    #[test]
    fn stale_timer_does_not_hide_newer_session() {
        let mut controller = controller();
        let first = controller
            .install(Request::info("first"), Instant::now())
            .expect("timer");
        let second = controller
            .install(Request::info("second"), Instant::now())
            .expect("timer");
        assert_ne!(first.session, second.session);

        controller.update(Message::AutoHide(first.session));
        assert!(controller.is_showing());
        assert_eq!(controller.current_session(), Some(second.session));
        assert_eq!(
            controller.current().map(|v| v.text().to_plain()),
            Some("second".to_string())
        );

        controller.update(Message::AutoHide(second.session));
        assert!(!controller.is_showing());
    }

    #[test]
    fn dismiss_when_empty_is_noop() {
        let mut controller = controller();
        controller.dismiss();
        controller.update(Message::Dismiss);
        assert!(!controller.is_showing());
    }

    #[test]
    fn timer_after_explicit_dismiss_is_noop() {
        let mut controller = controller();
        let timer = controller
            .install(Request::warning("careful"), Instant::now())
            .expect("timer");

        controller.dismiss();
        assert!(!controller.is_showing());

        controller.update(Message::AutoHide(timer.session));
        assert!(!controller.is_showing());
    }

    #[test]
    fn no_timer_without_auto_hide() {
        let mut controller = controller();
        let timer = controller.install(Request::error("stuck").auto_hide(false), Instant::now());

        assert!(timer.is_none());
        assert_eq!(controller.current_auto_hide(), None);
        assert!(controller.is_showing());

        controller.dismiss();
        assert!(!controller.is_showing());
    }

    #[test]
    fn tap_returns_handler_once_then_dismisses() {
        let mut controller = controller();
        controller.install(
            Request::info("Deleted").on_tap(AppMessage::Undo),
            Instant::now(),
        );
        let id = controller.current_session().expect("session");

        assert_eq!(controller.update(Message::Tapped(id)), Some(AppMessage::Undo));
        assert!(!controller.is_showing());
        assert_eq!(controller.update(Message::Tapped(id)), None);
    }

    #[test]
    fn tap_without_handler_just_dismisses() {
        let mut controller = controller();
        controller.install(Request::success("Saved"), Instant::now());
        let id = controller.current_session().expect("session");

        assert_eq!(controller.update(Message::Tapped(id)), None);
        assert!(!controller.is_showing());
    }

    #[test]
    fn tap_on_superseded_session_is_ignored() {
        let mut controller = controller();
        controller.install(Request::info("old").on_tap(AppMessage::Undo), Instant::now());
        let old = controller.current_session().expect("session");
        controller.install(Request::info("new"), Instant::now());

        assert_eq!(controller.update(Message::Tapped(old)), None);
        assert!(controller.is_showing());
    }

    #[test]
    fn reveal_grows_to_natural_height_plus_inset() {
        let mut controller = controller();
        controller.set_safe_area_top(20.0);
        let start = Instant::now();
        controller.install(Request::info("sliding"), start);

        assert!(controller.is_revealing());
        assert_eq!(controller.height(), 0.0);

        controller.update(Message::Frame(start + Duration::from_millis(200)));
        assert!(!controller.is_revealing());
        assert_eq!(controller.height(), sizing::SNACKBAR_HEIGHT + 20.0);
    }

    #[test]
    fn config_controls_delay_and_reveal() {
        let config = SnackbarConfig {
            auto_hide_secs: Some(2),
            reveal_duration_ms: Some(0),
            safe_area_top: None,
        };
        let mut controller: Controller<AppMessage> = Controller::with_config(&config);
        let timer = controller
            .install(Request::info("quick"), Instant::now())
            .expect("timer");

        assert_eq!(timer.delay, Duration::from_secs(2));
        assert!(!controller.is_revealing());
        assert_eq!(controller.height(), sizing::SNACKBAR_HEIGHT);
    }

    #[tokio::test(start_paused = true)]
    async fn auto_hide_task_fires_after_delay_with_session() {
        let mut controller = controller();
        let timer = controller
            .install(Request::success("Saved"), Instant::now())
            .expect("timer");

        let mut expiry = Box::pin(expire(timer));

        tokio::time::advance(timer.delay - Duration::from_millis(1)).await;
        let mut context = Context::from_waker(Waker::noop());
        assert!(
            expiry.as_mut().poll(&mut context).is_pending(),
            "timer should still be pending just before its delay"
        );

        tokio::time::advance(Duration::from_millis(1)).await;
        let message = expiry.await;
        assert!(matches!(message, Message::AutoHide(id) if id == timer.session));

        controller.update(message);
        assert!(!controller.is_showing());
    }

    #[tokio::test]
    async fn show_schedules_task_only_when_auto_hiding() {
        let mut controller = controller();

        let sticky = controller.show(Request::error("stuck").auto_hide(false));
        assert_eq!(sticky.units(), 0);
        assert!(controller.is_showing());

        let timed = controller.show(Request::info("timed"));
        assert_eq!(timed.units(), 1);
    }

    #[derive(Debug)]
    enum HostMessage {
        Show(Box<Request<HostMessage>>),
    }

    #[test]
    fn submit_defers_without_installing() {
        let controller: Controller<HostMessage> = Controller::new();
        let task = submit(Request::warning("Low disk"), HostMessage::Show);

        assert_eq!(task.units(), 1);
        assert!(!controller.is_showing());
    }

    #[test]
    fn session_ids_increase_monotonically() {
        let mut controller = controller();
        let mut previous = None;
        for _ in 0..5 {
            controller.install(Request::info("again"), Instant::now());
            let current = controller.current_session();
            assert!(current > previous);
            previous = current;
        }
    }
}
