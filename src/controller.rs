//! The picker's interaction state machine.
//!
//! A [`CalendarController`] owns the view month, the selection and the
//! open/closed status of one picker. Hosts feed it one [`Event`] at a time;
//! each call runs to completion before the next event is accepted, and the
//! returned [`Response`] says what the host must do (refocus the field, show
//! or hide the grid). Committed selections are also pushed to the
//! `on_change` callback, exactly once per selection.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::{debug, trace, warn};

use crate::view::{GridInputs, field_view, grid_view, header_view};
use crate::{
    CalendarDate, ConfigError, LocaleProfile, Month, PickerConfig, PickerView, ViewMonth, Year,
};

/// Whether the grid is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PickerState {
    #[default]
    Closed,
    Open,
}

/// Keys the picker reacts to. Everything else is [`Key::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Space,
    Tab { shift: bool },
    Other,
}

/// Where a pointer press landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerTarget {
    Field,
    Grid,
    Outside,
}

/// One discrete input to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    /// The field gained focus or was otherwise asked to open.
    FieldActivated,
    /// A key pressed while the field has focus.
    FieldKey(Key),
    /// A day cell was clicked.
    DayClicked(CalendarDate),
    /// A key pressed while a day cell has focus.
    DayKey(CalendarDate, Key),
    PreviousMonth,
    NextMonth,
    MonthSelected(Month),
    YearSelected(Year),
    /// A pointer press anywhere in the document.
    PointerDown(PointerTarget),
    /// The host pushed a new value (or cleared it).
    ValueChanged(Option<CalendarDate>),
}

/// What happened in response to one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Response {
    pub before:      PickerState,
    pub after:       PickerState,
    /// The day committed by this event, if any.
    pub committed:   Option<CalendarDate>,
    /// The host should move focus back to the text field.
    pub focus_field: bool,
    /// `false` when the event did not apply in the current state.
    pub handled:     bool,
}

impl Response {
    const fn ignored(state: PickerState) -> Self {
        Self {
            before:      state,
            after:       state,
            committed:   None,
            focus_field: false,
            handled:     false,
        }
    }

    const fn handled(before: PickerState, after: PickerState) -> Self {
        Self {
            before,
            after,
            committed: None,
            focus_field: false,
            handled: true,
        }
    }

    pub fn state_changed(&self) -> bool {
        self.before != self.after
    }
}

/// Global pointer subscription provided by the host.
///
/// The controller attaches exactly while it is open and detaches as soon as
/// it closes or is dropped, so attach/detach calls always alternate.
///
/// The host is shared through a `RefCell`: it must not hold its own borrow
/// while dispatching events to the controller. If it does, the controller
/// skips the attach or detach call and logs a warning instead of panicking.
pub trait OutsidePointerHost {
    fn attach_outside_pointer(&mut self);
    fn detach_outside_pointer(&mut self);
}

/// RAII guard for the outside-pointer subscription.
#[must_use = "dropping this guard detaches the outside-pointer listener"]
struct OutsidePointerListener {
    host: Rc<RefCell<dyn OutsidePointerHost>>,
}

impl OutsidePointerListener {
    fn acquire(host: &Rc<RefCell<dyn OutsidePointerHost>>) -> Option<Self> {
        let Ok(mut borrowed) = host.try_borrow_mut() else {
            warn!("outside-pointer host already borrowed, listener not attached");
            return None;
        };
        borrowed.attach_outside_pointer();
        Some(Self {
            host: Rc::clone(host),
        })
    }
}

impl Drop for OutsidePointerListener {
    fn drop(&mut self) {
        match self.host.try_borrow_mut() {
            Ok(mut host) => host.detach_outside_pointer(),
            Err(_) => warn!("outside-pointer host already borrowed, listener not detached"),
        }
    }
}

enum Status {
    Closed,
    Open { _listener: Option<OutsidePointerListener> },
}

type ChangeCallback = Box<dyn FnMut(Option<CalendarDate>)>;

pub struct CalendarController {
    config:       PickerConfig,
    profile:      &'static LocaleProfile,
    view:         ViewMonth,
    selected:     Option<CalendarDate>,
    status:       Status,
    pointer_host: Option<Rc<RefCell<dyn OutsidePointerHost>>>,
    on_change:    Option<ChangeCallback>,
}

impl fmt::Debug for CalendarController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalendarController")
            .field("locale", &self.profile.code)
            .field("view", &self.view)
            .field("selected", &self.selected)
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

impl CalendarController {
    /// Creates a closed controller for `value`, viewing the value's month
    /// (or the current month when there is no value).
    ///
    /// # Errors
    /// Returns `ConfigError::InvertedBounds` if the configuration's bounds
    /// are crossed.
    pub fn new(config: PickerConfig, value: Option<CalendarDate>) -> Result<Self, ConfigError> {
        Self::with_today(config, value, CalendarDate::today())
    }

    /// Like [`CalendarController::new`], with an explicit current date used
    /// for the initial view month when `value` is `None`.
    ///
    /// # Errors
    /// Returns `ConfigError::InvertedBounds` if the configuration's bounds
    /// are crossed.
    pub fn with_today(
        config: PickerConfig,
        value: Option<CalendarDate>,
        today: CalendarDate,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let profile = config.profile();
        let mut controller = Self {
            config,
            profile,
            view: ViewMonth::containing(today),
            selected: None,
            status: Status::Closed,
            pointer_host: None,
            on_change: None,
        };
        controller.sync_value(value);
        Ok(controller)
    }

    /// Registers the host callback that receives committed selections.
    pub fn on_change(mut self, callback: impl FnMut(Option<CalendarDate>) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Registers the host's outside-pointer subscription.
    pub fn with_pointer_host(mut self, host: Rc<RefCell<dyn OutsidePointerHost>>) -> Self {
        self.pointer_host = Some(host);
        self
    }

    pub const fn state(&self) -> PickerState {
        match self.status {
            Status::Closed => PickerState::Closed,
            Status::Open { .. } => PickerState::Open,
        }
    }

    pub const fn is_open(&self) -> bool {
        matches!(self.status, Status::Open { .. })
    }

    pub const fn view_month(&self) -> ViewMonth {
        self.view
    }

    pub const fn selected(&self) -> Option<CalendarDate> {
        self.selected
    }

    pub const fn profile(&self) -> &'static LocaleProfile {
        self.profile
    }

    pub const fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// Applies one event and reports the outcome.
    pub fn handle(&mut self, event: Event) -> Response {
        let before = self.state();
        let response = match event {
            Event::FieldActivated => self.open(),
            Event::FieldKey(key) => self.field_key(key),
            Event::DayClicked(day) => self.commit(day),
            Event::DayKey(day, Key::Enter | Key::Space) => self.commit(day),
            Event::DayKey(_, Key::Escape) => self.dismiss(true),
            Event::DayKey(_, _) => Response::ignored(before),
            Event::PreviousMonth => self.navigate(self.view.prev()),
            Event::NextMonth => self.navigate(self.view.next()),
            Event::MonthSelected(month) => self.navigate(self.view.with_month(month)),
            Event::YearSelected(year) => self.navigate(self.view.with_year(year)),
            Event::PointerDown(PointerTarget::Outside) => self.dismiss(false),
            Event::PointerDown(_) => Response::ignored(before),
            Event::ValueChanged(value) => {
                self.sync_value(value);
                Response::handled(before, before)
            },
        };

        if !response.handled {
            trace!(?event, state = ?before, "event ignored");
        }
        response
    }

    /// Changes the locale; unknown codes use the default profile.
    pub fn set_locale(&mut self, code: &str) {
        self.config.locale = code.to_owned();
        self.profile = self.config.profile();
        debug!(locale = self.profile.code, "locale changed");
    }

    /// Replaces the selectable bounds. A selection outside the new bounds
    /// is cleared.
    ///
    /// # Errors
    /// Returns `ConfigError::InvertedBounds` and leaves the bounds unchanged
    /// if `min > max`.
    pub fn set_bounds(
        &mut self,
        min: Option<CalendarDate>,
        max: Option<CalendarDate>,
    ) -> Result<(), ConfigError> {
        let candidate = PickerConfig {
            min_date: min,
            max_date: max,
            ..PickerConfig::default()
        };
        candidate.validate()?;
        self.config.min_date = min;
        self.config.max_date = max;

        if let Some(selected) = self.selected
            && !self.config.bounds().allows(selected)
        {
            warn!(%selected, "selection outside new bounds cleared");
            self.selected = None;
        }
        Ok(())
    }

    /// Enables or disables the picker. Disabling closes an open grid.
    pub fn set_disabled(&mut self, disabled: bool) -> Response {
        let before = self.state();
        self.config.disabled = disabled;
        if disabled && self.is_open() {
            self.close();
        }
        Response::handled(before, self.state())
    }

    /// Render snapshot using the system clock for "today".
    pub fn render(&self) -> PickerView {
        self.render_at(CalendarDate::today())
    }

    /// Render snapshot with an explicit current date.
    pub fn render_at(&self, today: CalendarDate) -> PickerView {
        let open = self.is_open();
        let field = field_view(&self.config, self.profile, self.selected, open);
        if !open {
            return PickerView {
                field,
                header: None,
                grid: None,
            };
        }

        let inputs = GridInputs {
            view: self.view,
            profile: self.profile,
            selected: self.selected,
            today,
            disabled: self.config.disabled,
            bounds: self.config.bounds(),
        };
        PickerView {
            field,
            header: Some(header_view(self.view, self.profile)),
            grid: Some(grid_view(&inputs)),
        }
    }

    fn field_key(&mut self, key: Key) -> Response {
        match key {
            Key::Escape => self.dismiss(true),
            Key::Enter | Key::Space if !self.is_open() => self.open(),
            // Tab moves focus into the grid without closing it.
            _ => Response::ignored(self.state()),
        }
    }

    fn open(&mut self) -> Response {
        let before = self.state();
        if self.is_open() || self.config.disabled {
            return Response::ignored(before);
        }
        let listener = self
            .pointer_host
            .as_ref()
            .and_then(OutsidePointerListener::acquire);
        self.status = Status::Open {
            _listener: listener,
        };
        debug!(view = %self.view, "picker opened");
        Response::handled(before, self.state())
    }

    fn close(&mut self) {
        // Dropping the open status releases the outside-pointer listener.
        self.status = Status::Closed;
        debug!("picker closed");
    }

    fn dismiss(&mut self, focus_field: bool) -> Response {
        let before = self.state();
        if !self.is_open() {
            return Response::ignored(before);
        }
        self.close();
        Response {
            focus_field,
            ..Response::handled(before, self.state())
        }
    }

    fn navigate(&mut self, target: ViewMonth) -> Response {
        let before = self.state();
        if !self.is_open() {
            return Response::ignored(before);
        }
        debug!(from = %self.view, to = %target, "view month changed");
        self.view = target;
        Response::handled(before, before)
    }

    fn commit(&mut self, day: CalendarDate) -> Response {
        let before = self.state();
        if !self.is_open() || self.config.disabled || !self.config.bounds().allows(day) {
            return Response::ignored(before);
        }

        self.selected = Some(day);
        self.view = ViewMonth::containing(day);
        self.close();
        debug!(%day, "date committed");
        if let Some(callback) = self.on_change.as_mut() {
            callback(Some(day));
        }

        Response {
            committed: Some(day),
            ..Response::handled(before, self.state())
        }
    }

    fn sync_value(&mut self, value: Option<CalendarDate>) {
        let Some(date) = value else {
            self.selected = None;
            return;
        };
        self.view = ViewMonth::containing(date);
        if self.config.bounds().allows(date) {
            self.selected = Some(date);
        } else {
            warn!(%date, "external value outside bounds ignored");
            self.selected = None;
        }
    }
}
