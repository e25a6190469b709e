//! GPIO button input with async debouncing.
//!
//! Two physical buttons (active-low with internal pull-up):
//!   - A (nav)    - tap = next item, hold = previous item
//!   - B (select) - open the highlighted entry / leave a scene
//!
//! Each button is handled by an async loop that waits for a GPIO edge,
//! debounces it, and sends a [`ButtonEvent`] to the UI channel. The loops
//! are generic over `embedded-hal` pins; `main.rs` wraps them in tasks.

use crate::config::{BUTTON_DEBOUNCE_MS, BUTTON_POLL_MS, BUTTON_QUEUE_DEPTH};
use crate::ui::input_logic::PressTracker;
use crate::ui::ButtonEvent;
use defmt::{info, warn};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Sender;
use embassy_time::{Duration, Instant, Timer};
use embedded_hal::digital::InputPin;
use embedded_hal_async::digital::Wait;

/// Producer end of the UI event channel.
pub type ButtonSender =
    Sender<'static, CriticalSectionRawMutex, ButtonEvent, BUTTON_QUEUE_DEPTH>;

/// Read a pull-up button; a failed read counts as released.
fn is_down<P: InputPin>(pin: &mut P) -> bool {
    pin.is_low().unwrap_or(false)
}

async fn debounce() {
    Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;
}

/// Navigation button: short and long presses.
///
/// After a debounced press the pin is sampled every [`BUTTON_POLL_MS`] so a
/// long press fires while the button is still held.
pub async fn nav_button_loop<P>(mut pin: P, tx: ButtonSender) -> !
where
    P: Wait + InputPin,
{
    let mut tracker = PressTracker::new();

    loop {
        if pin.wait_for_falling_edge().await.is_err() {
            warn!("Button A: edge wait failed");
            debounce().await;
            continue;
        }
        let pressed_at = Instant::now().as_millis();

        debounce().await;
        if !is_down(&mut pin) {
            continue;
        }

        tracker.update(true, pressed_at);
        loop {
            let down = is_down(&mut pin);
            if let Some(kind) = tracker.update(down, Instant::now().as_millis()) {
                let event = ButtonEvent::from_nav(kind);
                info!("Button: {}", event);
                tx.send(event).await;
            }
            if !tracker.is_pressed() {
                break;
            }
            Timer::after(Duration::from_millis(BUTTON_POLL_MS)).await;
        }
        debounce().await;
    }
}

/// Select button: one event per press, sent on the press itself.
pub async fn select_button_loop<P>(mut pin: P, tx: ButtonSender) -> !
where
    P: Wait + InputPin,
{
    loop {
        if pin.wait_for_falling_edge().await.is_err() {
            warn!("Button B: edge wait failed");
            debounce().await;
            continue;
        }

        debounce().await;

        if is_down(&mut pin) {
            info!("Button: {}", ButtonEvent::Select);
            tx.send(ButtonEvent::Select).await;

            // Wait for release to avoid repeat triggers.
            let _ = pin.wait_for_high().await;
            debounce().await;
        }
    }
}
