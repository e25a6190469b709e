//! nomad - handheld toy firmware for the nRF52840.
//!
//! Boots the SSD1306 OLED, starts the background melody on the buzzer,
//! plays the intro and then runs the menu/scene loop driven by two
//! buttons.
//!
//! Tasks:
//!   - `music_task`         - loops the theme on PWM0
//!   - `nav_button_task`    - button A, tap / hold classification
//!   - `select_button_task` - button B
//!   - main                 - display owner and UI loop

#![no_std]
#![no_main]

use defmt::{error, info, warn};
use embassy_executor::Spawner;
use embassy_futures::select::{select, Either};
use embassy_nrf::gpio::{Input, Pull};
use embassy_nrf::peripherals::{PWM0, TWISPI0};
use embassy_nrf::pwm::SimplePwm;
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver};
use embassy_time::{Duration, Instant, Timer};
use nomad::audio::buzzer::{self, Buzzer};
use nomad::audio::songs::ALLEY_CAT;
use nomad::audio::Sequencer;
use nomad::config::{BOOT_SETTLE_MS, BUTTON_QUEUE_DEPTH, OLED_I2C_KHZ};
use nomad::scenes::intro;
use nomad::ui::buttons::{self, ButtonSender};
use nomad::ui::display::{self, Display};
use nomad::{App, ButtonEvent, Screen};
use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct Irqs {
    TWISPI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

/// Button tasks → UI loop.
static BUTTON_EVENTS: Channel<CriticalSectionRawMutex, ButtonEvent, BUTTON_QUEUE_DEPTH> =
    Channel::new();

/// TWIM speed for the configured OLED bus clock.
const OLED_TWIM_FREQUENCY: twim::Frequency = match OLED_I2C_KHZ {
    100 => twim::Frequency::K100,
    250 => twim::Frequency::K250,
    400 => twim::Frequency::K400,
    _ => panic!("OLED_I2C_KHZ must be 100, 250 or 400"),
};

type ButtonReceiver = Receiver<'static, CriticalSectionRawMutex, ButtonEvent, BUTTON_QUEUE_DEPTH>;
type Oled = Display<Twim<'static, TWISPI0>>;

#[embassy_executor::task]
async fn music_task(mut buzzer: Buzzer<'static, PWM0>) {
    let mut sequencer = match Sequencer::new(&ALLEY_CAT) {
        Ok(s) => s,
        Err(e) => {
            error!("Music: {:?}", e);
            return;
        }
    };
    buzzer::play_loop(&mut buzzer, &mut sequencer).await
}

#[embassy_executor::task]
async fn nav_button_task(pin: Input<'static>, tx: ButtonSender) {
    buttons::nav_button_loop(pin, tx).await
}

#[embassy_executor::task]
async fn select_button_task(pin: Input<'static>, tx: ButtonSender) {
    buttons::select_button_loop(pin, tx).await
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("nomad v{} starting", env!("CARGO_PKG_VERSION"));

    // Let the OLED's charge pump come up before the first I²C transfer.
    Timer::after(Duration::from_millis(BOOT_SETTLE_MS)).await;

    // ── Audio ───────────────────────────────────────────────────────────
    let pwm = SimplePwm::new_1ch(p.PWM0, p.P0_28);
    log_spawn(spawner.spawn(music_task(Buzzer::new(pwm))), "music");

    // ── Buttons ─────────────────────────────────────────────────────────
    let nav = Input::new(p.P0_11, Pull::Up);
    let sel = Input::new(p.P0_12, Pull::Up);
    log_spawn(
        spawner.spawn(nav_button_task(nav, BUTTON_EVENTS.sender())),
        "nav button",
    );
    log_spawn(
        spawner.spawn(select_button_task(sel, BUTTON_EVENTS.sender())),
        "select button",
    );

    // ── Display ─────────────────────────────────────────────────────────
    let mut config = twim::Config::default();
    config.frequency = OLED_TWIM_FREQUENCY;
    let i2c = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, config);

    let mut oled = match display::init(i2c) {
        Ok(d) => d,
        Err(e) => {
            // Keep the music going even without a screen.
            error!("Display: init failed: {:?}", e);
            return;
        }
    };
    info!("Display: initialised");

    if let Err(e) = intro::play(&mut oled).await {
        warn!("Intro: {:?} - skipping to prompt", e);
        let _ = display::set_contrast(&mut oled, u8::MAX);
    }

    // Presses during the animation don't count as "start".
    let rx = BUTTON_EVENTS.receiver();
    while rx.try_receive().is_ok() {}

    ui_loop(&mut oled, rx).await
}

/// Render, then wait for a button or the current screen's deadline.
async fn ui_loop(oled: &mut Oled, rx: ButtonReceiver) -> ! {
    let mut app = App::new();
    let mut dirty = true;

    loop {
        if dirty {
            if let Err(e) = display::show(oled, |d| app.render(d)) {
                warn!("Display: {:?}", e);
            }
            dirty = false;
        }

        let event = match app.deadline_ms(Instant::now().as_millis()) {
            Some(at) => match select(rx.receive(), Timer::at(Instant::from_millis(at))).await {
                Either::First(event) => Some(event),
                Either::Second(()) => None,
            },
            None => Some(rx.receive().await),
        };

        let Some(event) = event else {
            dirty = app.tick();
            continue;
        };

        let before = app.screen();
        dirty = app.handle(event);
        if before != app.screen() {
            info!("UI: {:?} -> {:?}", before, app.screen());
        }
        if before == Screen::Intro && app.screen() != Screen::Intro {
            if let Err(e) = display::flash_invert(oled).await {
                warn!("Display: {:?}", e);
            }
        }
    }
}

fn log_spawn(result: Result<(), embassy_executor::SpawnError>, name: &str) {
    if let Err(e) = result {
        error!("Task {} failed to spawn: {:?}", name, e);
    }
}
