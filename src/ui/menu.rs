//! Scrolling main menu.
//!
//! The selected row is pinned at a fixed height and the list slides
//! around it. The selected row is drawn as a lit rounded bar with dark
//! bold text and the CPU icon cut out of it; the rest are plain lit text.
//! A dotted track with a bar on the right edge shows the position in the
//! list.

use crate::assets::CPU_ICON;
use crate::config::{
    MENU_BAR_RADIUS, MENU_BAR_WIDTH, MENU_BAR_X, MENU_ICON_DY, MENU_ICON_X, MENU_ITEM_HEIGHT,
    MENU_LABEL_DY, MENU_LABEL_X, MENU_SELECTION_Y, OLED_HEIGHT, SCROLL_BAR_MIN_HEIGHT,
    SCROLL_BAR_WIDTH, SCROLL_BAR_X, SCROLL_TRACK_SPACING, SCROLL_TRACK_X,
};
use crate::gfx::font::{FONT_BOLD, FONT_REGULAR};
use crate::gfx::{fill_rect, fill_round_rect};
use crate::ui::input_logic::{select_next, select_prev};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

/// What choosing a menu row does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuAction {
    Launch,
    Hq,
    Uplink,
    Manual,
    Contact,
}

#[derive(Debug)]
pub struct MenuItem {
    pub label: &'static str,
    pub action: MenuAction,
}

/// Entries of the main menu, top to bottom.
pub const MENU_ITEMS: &[MenuItem] = &[
    MenuItem {
        label: "Launch Game",
        action: MenuAction::Launch,
    },
    MenuItem {
        label: "HQ",
        action: MenuAction::Hq,
    },
    MenuItem {
        label: "Uplink",
        action: MenuAction::Uplink,
    },
    MenuItem {
        label: "Manual",
        action: MenuAction::Manual,
    },
    MenuItem {
        label: "Contact",
        action: MenuAction::Contact,
    },
];

/// Menu cursor over a static list of items.
#[derive(Debug)]
pub struct Menu {
    items: &'static [MenuItem],
    selected: usize,
}

impl Menu {
    pub const fn new(items: &'static [MenuItem]) -> Self {
        Self { items, selected: 0 }
    }

    pub fn items(&self) -> &'static [MenuItem] {
        self.items
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn next(&mut self) {
        self.selected = select_next(self.selected, self.items.len());
    }

    pub fn prev(&mut self) {
        self.selected = select_prev(self.selected, self.items.len());
    }

    pub fn current_action(&self) -> Option<MenuAction> {
        self.items.get(self.selected).map(|item| item.action)
    }

    /// Top edge of row `index`, relative to the pinned selection row.
    pub fn item_y(&self, index: usize) -> i32 {
        MENU_SELECTION_Y + (index as i32 - self.selected as i32) * MENU_ITEM_HEIGHT
    }

    /// Rows entirely above or starting below the screen are skipped.
    pub fn is_visible(y: i32) -> bool {
        y >= -MENU_ITEM_HEIGHT && y <= OLED_HEIGHT
    }

    /// Scroll bar position and height: `(bar_y, bar_height)`.
    pub fn scroll_bar(&self) -> (i32, i32) {
        let count = self.items.len().max(1) as i32;
        let height = (OLED_HEIGHT / count).max(SCROLL_BAR_MIN_HEIGHT);
        if count == 1 {
            return (0, height);
        }
        let y = self.selected as i32 * (OLED_HEIGHT - height) / (count - 1);
        (y, height)
    }

    /// Full redraw of the menu screen.
    pub fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        target.clear(BinaryColor::Off)?;

        for (index, item) in self.items.iter().enumerate() {
            let y = self.item_y(index);
            if !Self::is_visible(y) {
                continue;
            }

            let label_at = Point::new(MENU_LABEL_X, y + MENU_LABEL_DY);
            if index == self.selected {
                fill_round_rect(
                    target,
                    MENU_BAR_X,
                    y,
                    MENU_BAR_WIDTH,
                    MENU_ITEM_HEIGHT,
                    MENU_BAR_RADIUS,
                    BinaryColor::On,
                )?;
                FONT_BOLD.draw(target, item.label, label_at, BinaryColor::Off)?;
                // Keyed on set bits: the bar shows through the icon's lines
                // and its unset pixels are cut out dark.
                CPU_ICON.blit(
                    target,
                    Point::new(MENU_ICON_X, y + MENU_ICON_DY),
                    Some(BinaryColor::On),
                    false,
                )?;
            } else {
                FONT_REGULAR.draw(target, item.label, label_at, BinaryColor::On)?;
            }
        }

        let track = (0..OLED_HEIGHT)
            .step_by(SCROLL_TRACK_SPACING as usize)
            .map(|y| Pixel(Point::new(SCROLL_TRACK_X, y), BinaryColor::On));
        target.draw_iter(track)?;

        let (bar_y, bar_height) = self.scroll_bar();
        fill_rect(
            target,
            SCROLL_BAR_X,
            bar_y,
            SCROLL_BAR_WIDTH,
            bar_height,
            BinaryColor::On,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::canvas::Canvas;

    static SINGLE: &[MenuItem] = &[MenuItem {
        label: "Only",
        action: MenuAction::Hq,
    }];

    #[test]
    fn cursor_wraps() {
        let mut menu = Menu::new(MENU_ITEMS);
        assert_eq!(menu.current_action(), Some(MenuAction::Launch));
        menu.prev();
        assert_eq!(menu.selected(), 4);
        assert_eq!(menu.current_action(), Some(MenuAction::Contact));
        menu.next();
        menu.next();
        assert_eq!(menu.current_action(), Some(MenuAction::Hq));
    }

    #[test]
    fn rows_slide_around_the_selection() {
        let mut menu = Menu::new(MENU_ITEMS);
        assert_eq!(menu.item_y(0), 22);
        assert_eq!(menu.item_y(1), 40);
        assert_eq!(menu.item_y(3), 76);
        menu.next();
        menu.next();
        assert_eq!(menu.item_y(0), -14);
        assert_eq!(menu.item_y(2), 22);
    }

    #[test]
    fn visibility_window() {
        assert!(Menu::is_visible(-18));
        assert!(!Menu::is_visible(-19));
        assert!(Menu::is_visible(64));
        assert!(!Menu::is_visible(65));
    }

    #[test]
    fn scroll_bar_tracks_selection() {
        let mut menu = Menu::new(MENU_ITEMS);
        assert_eq!(menu.scroll_bar(), (0, 12));
        menu.next();
        menu.next();
        assert_eq!(menu.scroll_bar(), (26, 12));
        menu.prev();
        menu.prev();
        menu.prev();
        assert_eq!(menu.scroll_bar(), (52, 12));
    }

    #[test]
    fn single_item_bar_sits_at_top() {
        let menu = Menu::new(SINGLE);
        assert_eq!(menu.scroll_bar(), (0, 64));
    }

    #[test]
    fn selected_row_is_dark_text_on_lit_bar() {
        let menu = Menu::new(MENU_ITEMS);
        let mut canvas = Canvas::new();
        menu.draw(&mut canvas).unwrap();

        // Bar body left of the icon is lit.
        assert!(canvas.pixel(3, 30));
        // 'L' of "Launch Game" starts at the label origin and is cut out.
        assert!(!canvas.pixel(24, 27));
        assert!(canvas.pixel(22, 27));
        // Rounded corner leaves the very corner dark.
        assert!(!canvas.pixel(2, 22));
        assert!(canvas.pixel(4, 22));
    }

    #[test]
    fn selection_icon_is_cut_out_of_the_bar() {
        let menu = Menu::new(MENU_ITEMS);
        let mut canvas = Canvas::new();
        menu.draw(&mut canvas).unwrap();

        let origin = Point::new(MENU_ICON_X, MENU_SELECTION_Y + MENU_ICON_DY);
        for y in 0..16 {
            for x in 0..16 {
                let p = origin + Point::new(x, y);
                assert_eq!(canvas.pixel(p.x, p.y), CPU_ICON.pixel(x as u32, y as u32), "({}, {})", x, y);
            }
        }
        // Unset corner pixel is dark, a set pin stays lit.
        assert!(!canvas.pixel(6, 23));
        assert!(canvas.pixel(11, 23));
    }

    #[test]
    fn other_rows_are_lit_text_on_dark() {
        let menu = Menu::new(MENU_ITEMS);
        let mut canvas = Canvas::new();
        menu.draw(&mut canvas).unwrap();

        // "HQ" on the row below: 'H' top-left pixel.
        assert!(canvas.pixel(24, 45));
        assert!(!canvas.pixel(25, 45));
        // No bar behind it.
        assert!(!canvas.pixel(3, 48));
    }

    #[test]
    fn scroll_track_and_bar_on_right_edge() {
        let menu = Menu::new(MENU_ITEMS);
        let mut canvas = Canvas::new();
        menu.draw(&mut canvas).unwrap();

        assert!(canvas.pixel(126, 60));
        assert!(!canvas.pixel(126, 61));
        for y in 0..12 {
            assert!(canvas.pixel(125, y));
            assert!(canvas.pixel(127, y));
        }
        assert!(!canvas.pixel(125, 12));
    }

    #[test]
    fn redraw_clears_previous_frame() {
        let mut menu = Menu::new(MENU_ITEMS);
        let mut canvas = Canvas::lit();
        menu.draw(&mut canvas).unwrap();
        let first = canvas.lit_count();
        menu.next();
        menu.prev();
        menu.draw(&mut canvas).unwrap();
        assert_eq!(canvas.lit_count(), first);
        assert!(!canvas.pixel(0, 0));
    }
}
