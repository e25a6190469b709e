//! SSD1306 OLED display wrapper.
//!
//! Drawing goes into the driver's RAM buffer; nothing reaches the panel
//! until [`show`] flushes it.

use crate::config::INTRO_FLASH_MS;
use crate::error::{Error, Result};
use defmt::warn;
use embassy_time::{Duration, Timer};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Pre-charge period used with every contrast setting.
const PRECHARGE: u8 = 2;

/// Initialise the SSD1306 display and clear the screen.
pub fn init<I2C>(i2c: I2C) -> Result<Display<I2C>>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    display.init().map_err(|_| Error::Display)?;
    display.clear_buffer();
    display.flush().map_err(|_| Error::Display)?;
    Ok(display)
}

/// Set panel contrast, 0 (dimmest) to 255.
pub fn set_contrast<I2C>(display: &mut Display<I2C>, level: u8) -> Result<()>
where
    I2C: embedded_hal::i2c::I2c,
{
    display
        .set_brightness(Brightness::custom(PRECHARGE, level))
        .map_err(|_| Error::Display)
}

/// Draw into the buffer with `render`, then push it to the panel.
///
/// Drawing into the buffer cannot fail; only the flush touches the bus.
pub fn show<I2C, F, E>(display: &mut Display<I2C>, render: F) -> Result<()>
where
    I2C: embedded_hal::i2c::I2c,
    F: FnOnce(&mut Display<I2C>) -> core::result::Result<(), E>,
{
    render(display).map_err(|_| Error::Display)?;
    display.flush().map_err(|_| Error::Display)
}

/// Briefly invert the whole panel.
pub async fn flash_invert<I2C>(display: &mut Display<I2C>) -> Result<()>
where
    I2C: embedded_hal::i2c::I2c,
{
    display.set_invert(true).map_err(|_| Error::Display)?;
    Timer::after(Duration::from_millis(INTRO_FLASH_MS)).await;
    display.set_invert(false).map_err(|_| {
        warn!("Display: could not restore polarity");
        Error::Display
    })
}
