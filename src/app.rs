//! Application state machine: which screen is up and how it reacts.
//!
//! The UI loop feeds [`App::handle`] with button events and calls
//! [`App::tick`] whenever [`App::timeout_ms`] elapses without one. Both
//! return whether the screen needs a redraw; [`App::render`] then repaints
//! it from scratch.

use crate::config::{ANIMATION_SPEED_MS, INTRO_BLINK_MS, SCENE_HOLD_MS};
use crate::game_state::GameState;
use crate::scenes::{intro, placeholder, walk};
use crate::ui::menu::{Menu, MenuAction, MENU_ITEMS};
use crate::ui::ButtonEvent;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screen {
    /// Title card waiting for a button.
    Intro,
    Menu,
    Walk,
    Hq,
    Uplink,
    Manual,
    Contact,
}

impl Screen {
    fn for_action(action: MenuAction) -> Self {
        match action {
            MenuAction::Launch => Screen::Walk,
            MenuAction::Hq => Screen::Hq,
            MenuAction::Uplink => Screen::Uplink,
            MenuAction::Manual => Screen::Manual,
            MenuAction::Contact => Screen::Contact,
        }
    }

    fn log_line(self) -> Option<&'static str> {
        match self {
            Screen::Walk => Some("Walk started"),
            Screen::Hq => Some("Entered HQ"),
            Screen::Uplink => Some("Uplink searching"),
            Screen::Manual => Some("Read manual"),
            Screen::Contact => Some("Opened contact"),
            Screen::Intro | Screen::Menu => None,
        }
    }
}

pub struct App {
    screen: Screen,
    menu: Menu,
    game: GameState,
    walk_frame: usize,
    prompt_visible: bool,
    /// When the current timeout started; `None` until the loop asks.
    armed_at_ms: Option<u64>,
}

impl App {
    pub fn new() -> Self {
        Self {
            screen: Screen::Intro,
            menu: Menu::new(MENU_ITEMS),
            game: GameState::new(),
            walk_frame: 0,
            prompt_visible: false,
            armed_at_ms: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn walk_frame(&self) -> usize {
        self.walk_frame
    }

    pub fn prompt_visible(&self) -> bool {
        self.prompt_visible
    }

    /// React to a button. Returns `true` if the screen changed.
    ///
    /// An ignored button leaves the pending timeout where it was.
    pub fn handle(&mut self, event: ButtonEvent) -> bool {
        let before = self.screen;
        let changed = match self.screen {
            Screen::Intro => {
                self.screen = Screen::Menu;
                true
            }
            Screen::Menu => {
                match event {
                    ButtonEvent::Next => self.menu.next(),
                    ButtonEvent::Prev => self.menu.prev(),
                    ButtonEvent::Select => {
                        if let Some(action) = self.menu.current_action() {
                            self.enter(Screen::for_action(action));
                        }
                    }
                }
                true
            }
            Screen::Walk | Screen::Manual | Screen::Contact => {
                self.screen = Screen::Menu;
                true
            }
            // Timed screens return on their own.
            Screen::Hq | Screen::Uplink => false,
        };
        if self.screen != before {
            self.armed_at_ms = None;
        }
        changed
    }

    /// How long the current screen waits for input before [`App::tick`].
    pub fn timeout_ms(&self) -> Option<u64> {
        match self.screen {
            Screen::Intro => Some(INTRO_BLINK_MS),
            Screen::Walk => Some(ANIMATION_SPEED_MS),
            Screen::Hq | Screen::Uplink => Some(SCENE_HOLD_MS),
            Screen::Menu | Screen::Manual | Screen::Contact => None,
        }
    }

    /// Absolute time (ms) at which [`App::tick`] is due.
    ///
    /// The timeout is armed at `now_ms` the first time this is asked after
    /// a screen change or a tick; later calls return the same deadline.
    pub fn deadline_ms(&mut self, now_ms: u64) -> Option<u64> {
        let timeout = self.timeout_ms()?;
        let armed_at = *self.armed_at_ms.get_or_insert(now_ms);
        Some(armed_at + timeout)
    }

    /// The current screen's timeout elapsed. Returns `true` if it changed.
    pub fn tick(&mut self) -> bool {
        self.armed_at_ms = None;
        match self.screen {
            Screen::Intro => {
                self.prompt_visible = !self.prompt_visible;
                true
            }
            Screen::Walk => {
                self.walk_frame = (self.walk_frame + 1) % walk::frame_count();
                true
            }
            Screen::Hq | Screen::Uplink => {
                self.screen = Screen::Menu;
                true
            }
            Screen::Menu | Screen::Manual | Screen::Contact => false,
        }
    }

    /// Full redraw of the current screen.
    pub fn render<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        match self.screen {
            Screen::Intro => intro::draw_title_card(target, self.prompt_visible),
            Screen::Menu => self.menu.draw(target),
            Screen::Walk => walk::draw_frame(target, self.walk_frame),
            Screen::Hq => placeholder::draw_hq(target, &self.game),
            Screen::Uplink => placeholder::draw_uplink(target),
            Screen::Manual => placeholder::draw_manual(target),
            Screen::Contact => placeholder::draw_contact(target),
        }
    }

    fn enter(&mut self, screen: Screen) {
        if screen == Screen::Walk {
            self.walk_frame = 0;
        }
        if let Some(line) = screen.log_line() {
            self.game.add_log_entry(line);
        }
        self.screen = screen;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
