// SPDX-License-Identifier: MPL-2.0
//! Page controller.
//!
//! `Page` owns the toast manager and the state of every page interaction.
//! Browser events go through [`Page::handle`]; timers scheduled while
//! handling them come back as [`Message`]s through [`Page::handle_message`].
//! Everything runs on one thread: handlers never wait, they schedule.

mod message;

pub use message::{Effect, Event, Message};

use crate::config::{FORM_SEND_DELAY_MS, SCROLL_DEBOUNCE_MS, TITLE_HOLD_MS, TITLE_INTERVAL_MS};
use crate::i18n::fluent::I18n;
use crate::interactions::clipboard::{self, Clipboard};
use crate::interactions::{
    kaomoji, ContactForm, HeaderStyle, HeaderTracker, KeyPress, NavMenu, RevealTracker, Section,
    Shortcut, SubmitState, Title,
};
use crate::notifications::{Debouncer, Inbox, Kind, Manager, Scheduler, Surface, Timer, Timings};
use std::time::Duration;

const DEFAULT_TITLE: &str = "顔文字の世界";

/// Interactive state of the kaomoji page.
#[derive(Debug)]
pub struct Page<S, C> {
    i18n: I18n,
    notifications: Manager<S>,
    scheduler: Scheduler<Message>,
    clipboard: C,
    nav: NavMenu,
    header: HeaderTracker,
    reveal: RevealTracker,
    scroll_debounce: Debouncer,
    /// `(offset, viewport_height)` of the latest scroll event.
    last_scroll: (f64, f64),
    form: ContactForm,
    submit: SubmitState,
    send_timer: Option<Timer>,
    title: Title,
    title_flash: Option<Timer>,
    title_restore: Option<Timer>,
    loaded: bool,
}

impl<S: Surface, C: Clipboard> Page<S, C> {
    /// Creates a page and the inbox its timers deliver to.
    pub fn new(surface: S, clipboard: C, i18n: I18n, timings: Timings) -> (Self, Inbox<Message>) {
        let (scheduler, inbox) = Scheduler::channel();
        let notifications = Manager::new(
            surface,
            timings,
            scheduler.map(Message::Notification),
        );
        let page = Self {
            i18n,
            notifications,
            scheduler,
            clipboard,
            nav: NavMenu::new(),
            header: HeaderTracker::new(),
            reveal: RevealTracker::default(),
            scroll_debounce: Debouncer::new(),
            last_scroll: (0.0, 0.0),
            form: ContactForm::default(),
            submit: SubmitState::Idle,
            send_timer: None,
            title: Title::new(DEFAULT_TITLE),
            title_flash: None,
            title_restore: None,
            loaded: false,
        };
        (page, inbox)
    }

    /// Sets the document title the easter egg decorates.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Title::new(title);
        self
    }

    /// Sets the sections observed for animate-in.
    #[must_use]
    pub fn with_sections(mut self, sections: Vec<Section>) -> Self {
        self.reveal = RevealTracker::new(sections);
        self
    }

    /// Handles a browser event.
    pub fn handle(&mut self, event: Event) -> Effect {
        match event {
            Event::Load { viewport_height } => self.load(viewport_height),
            Event::ToggleMenu => {
                let open = self.nav.toggle();
                tracing::debug!(open, "menu toggled");
            }
            Event::FollowLink {
                section_top,
                header_height,
            } => return Effect::ScrollTo(self.nav.follow_link(section_top, header_height)),
            Event::Scroll {
                offset,
                viewport_height,
            } => self.scroll(offset, viewport_height),
            Event::CopyKaomoji(text) => self.copy_kaomoji(&text),
            Event::KeyDown(press) => self.key_down(&press),
            Event::SubmitForm(form) => self.submit_form(form),
        }
        Effect::None
    }

    /// Applies a delivered timer message.
    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::Notification(message) => self.notifications.handle_message(message),
            Message::FormSent => self.form_sent(),
            Message::TitleFlash => self.flash_title(),
            Message::TitleRestore => {
                self.title_restore = None;
                self.title.restore();
            }
            Message::ScrollSettled => {
                let (offset, viewport_height) = self.last_scroll;
                self.check_reveals(offset, viewport_height);
            }
        }
    }

    /// Handles every message already waiting in `inbox`.
    ///
    /// Returns the number of messages handled.
    pub fn pump(&mut self, inbox: &mut Inbox<Message>) -> usize {
        let mut handled = 0;
        while let Some(message) = inbox.try_recv() {
            self.handle_message(message);
            handled += 1;
        }
        handled
    }

    #[must_use]
    pub fn notifications(&self) -> &Manager<S> {
        &self.notifications
    }

    #[must_use]
    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    #[must_use]
    pub fn nav(&self) -> NavMenu {
        self.nav
    }

    #[must_use]
    pub fn header_style(&self) -> HeaderStyle {
        self.header.style()
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        self.reveal.sections()
    }

    #[must_use]
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    #[must_use]
    pub fn submit_state(&self) -> SubmitState {
        self.submit
    }

    /// Returns the current submit button label.
    #[must_use]
    pub fn submit_label(&self) -> String {
        self.i18n.tr(self.submit.label_key())
    }

    #[must_use]
    pub fn title(&self) -> &str {
        self.title.current()
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    fn load(&mut self, viewport_height: f64) {
        if self.loaded {
            return;
        }
        self.loaded = true;
        self.last_scroll = (0.0, viewport_height);
        self.check_reveals(0.0, viewport_height);
        self.title_flash = Some(
            self.scheduler
                .after(Duration::from_millis(TITLE_INTERVAL_MS), Message::TitleFlash),
        );
        tracing::info!("page loaded");
    }

    fn scroll(&mut self, offset: f64, viewport_height: f64) {
        self.header.on_scroll(offset);
        self.last_scroll = (offset, viewport_height);
        self.scroll_debounce.trigger(
            &self.scheduler,
            Duration::from_millis(SCROLL_DEBOUNCE_MS),
            Message::ScrollSettled,
        );
    }

    fn check_reveals(&mut self, offset: f64, viewport_height: f64) {
        for id in self.reveal.check(offset, viewport_height) {
            tracing::debug!(section = %id, "section animated in");
        }
    }

    fn copy_kaomoji(&mut self, text: &str) {
        // The toast is shown even when the copy fails.
        clipboard::copy_text(&mut self.clipboard, text);
        let message = self
            .i18n
            .tr_with_args("notification-copied", &[("kaomoji", text)]);
        self.notifications.show(message, Kind::Success);
    }

    fn key_down(&mut self, press: &KeyPress) {
        if let Some(Shortcut::RandomKaomoji) = Shortcut::from_key(press) {
            let text = kaomoji::random();
            clipboard::copy_text(&mut self.clipboard, text);
            let message = self
                .i18n
                .tr_with_args("notification-random-kaomoji", &[("kaomoji", text)]);
            self.notifications.show(message, Kind::Info);
        }
    }

    fn submit_form(&mut self, form: ContactForm) {
        if self.submit.is_disabled() {
            tracing::debug!("form submission already in flight");
            return;
        }
        if let Err(err) = form.validate() {
            tracing::debug!(?err, "form rejected");
            let message = self.i18n.tr(err.i18n_key());
            self.notifications.show(message, Kind::Error);
            return;
        }
        self.form = form;
        self.submit = SubmitState::Sending;
        self.send_timer = Some(
            self.scheduler
                .after(Duration::from_millis(FORM_SEND_DELAY_MS), Message::FormSent),
        );
        tracing::info!("contact form sending");
    }

    fn form_sent(&mut self) {
        self.send_timer = None;
        if self.submit != SubmitState::Sending {
            return;
        }
        let message = self.i18n.tr("form-sent");
        self.notifications.show(message, Kind::Success);
        self.form.reset();
        self.submit = SubmitState::Idle;
        tracing::info!("contact form sent");
    }

    fn flash_title(&mut self) {
        self.title.flash(kaomoji::random());
        self.title_restore = Some(
            self.scheduler
                .after(Duration::from_millis(TITLE_HOLD_MS), Message::TitleRestore),
        );
        self.title_flash = Some(
            self.scheduler
                .after(Duration::from_millis(TITLE_INTERVAL_MS), Message::TitleFlash),
        );
    }
}
