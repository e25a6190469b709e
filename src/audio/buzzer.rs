//! Piezo buzzer on one nRF52840 PWM channel.
//!
//! The melody task owns the buzzer exclusively; nothing else touches the
//! PWM peripheral, so no locking is needed.

use super::{Sequencer, ToneOutput};
use crate::config::{AUDIO_RETRY_MS, TONE_DUTY_PERCENT};
use crate::error::{Error, Result};
use defmt::{debug, error, info};
use embassy_nrf::pwm::{Instance, Prescaler, SimplePwm};
use embassy_time::{Duration, Timer};

/// PWM counter clock with [`Prescaler::Div4`].
const PWM_CLOCK_HZ: u32 = 16_000_000 / 4;

/// Largest value the 15-bit COUNTERTOP register accepts.
const MAX_COUNTERTOP: u32 = 0x7FFF;

/// Lowest and highest tone the PWM can produce at this prescaler.
pub const MIN_TONE_HZ: u32 = PWM_CLOCK_HZ / MAX_COUNTERTOP + 1;
pub const MAX_TONE_HZ: u32 = 20_000;

/// Square-wave buzzer driver.
pub struct Buzzer<'d, T: Instance> {
    pwm: SimplePwm<'d, T>,
}

impl<'d, T: Instance> Buzzer<'d, T> {
    /// Take over a single-channel PWM and make sure it starts silent.
    pub fn new(pwm: SimplePwm<'d, T>) -> Self {
        pwm.set_prescaler(Prescaler::Div4);
        pwm.disable();
        Self { pwm }
    }
}

impl<T: Instance> ToneOutput for Buzzer<'_, T> {
    fn tone(&mut self, freq_hz: u32) -> Result<()> {
        if !(MIN_TONE_HZ..=MAX_TONE_HZ).contains(&freq_hz) {
            return Err(Error::Audio);
        }
        self.pwm.enable();
        self.pwm.set_period(freq_hz);
        let duty = (self.pwm.max_duty() as u32 * TONE_DUTY_PERCENT as u32 / 100) as u16;
        self.pwm.set_duty(0, duty);
        Ok(())
    }

    fn silence(&mut self) {
        self.pwm.disable();
    }
}

/// Play `sequencer` forever on `output`.
///
/// A failed step silences the buzzer, rewinds the melody and retries after
/// a back-off instead of giving up.
pub async fn play_loop<O: ToneOutput>(output: &mut O, sequencer: &mut Sequencer) -> ! {
    info!("Music: looping \"{}\"", sequencer.song().name);

    loop {
        let step = sequencer.next_step();
        if let Err(e) = output.apply(step) {
            error!("Music: buzzer error {:?} - restarting melody", e);
            output.silence();
            sequencer.reset();
            Timer::after(Duration::from_millis(AUDIO_RETRY_MS)).await;
            continue;
        }
        if sequencer.position() == 0 {
            debug!("Music: loop complete");
        }
        Timer::after(Duration::from_millis(step.duration_ms() as u64)).await;
    }
}
