#![no_std]
#![no_main]

mod utils;

use panic_rtt_target as _;
use rtt_target::{rprintln, rtt_init_print};
use cortex_m_rt::entry;
use embedded_hal::{delay::DelayNs, digital::OutputPin};
use microbit::{
    board::Board,
    hal::{
        Timer,
        gpio::{Level, Output, Pin, PushPull, p0::P0_09},
        gpiote::Gpiote,
        saadc::{self, Saadc, SaadcConfig},
        twim,
    },
    pac::{Interrupt, NVIC, TIMER1, interrupt, twim0::frequency::FREQUENCY_A},
};

use critical_section_lock_mut::LockMut;
use joystick_marker::{
    config::{ADC_MAX, LOOP_PERIOD_MS},
    control_loop::{self, ControlLoop},
    drive::OutputStage,
    input_monitor::{Button, InputMonitor, ModeChange},
    peripheral::MonotonicClock,
};

use crate::utils::joystick::{Joystick, VrxPinType, VryPinType};
use crate::utils::led_pwm::LedPwm;
use crate::utils::oled_canvas::OledCanvas;
use crate::utils::uptime::UptimeClock;

/// types
type LedPinType = Pin<Output<PushPull>>; //e16 = blue (Y), e08 = red (X)
type GreenPinType = P0_09<Output<PushPull>>; //e09, overlay indicator

/// globals
static GPIOTE_PERIPHERAL: LockMut<Gpiote> = LockMut::new();
static UPTIME: LockMut<UptimeClock<TIMER1>> = LockMut::new();
static MONITOR: LockMut<InputMonitor> = LockMut::new();
static OUTPUTS: LockMut<OutputStage<LedPwm>> = LockMut::new();
static CANVAS: LockMut<OledCanvas> = LockMut::new();
static OVERLAY_LED: LockMut<GreenPinType> = LockMut::new();

/// Buttons event handler
///
/// Channel 0 is button A (LED outputs on/off), channel 1 the joystick press
/// (border on/off). The transition runs with all shared resources locked, so
/// the foreground loop never sees half of it and a bounce queued behind it is
/// judged against the new timestamp.
#[interrupt]
fn GPIOTE() {
    let mut button = None;
    GPIOTE_PERIPHERAL.with_lock(|gpiote| {
        if gpiote.channel0().is_event_triggered() {
            gpiote.channel0().reset_events();
            button = Button::from_channel(0);
        } else if gpiote.channel1().is_event_triggered() {
            gpiote.channel1().reset_events();
            button = Button::from_channel(1);
        }
    });
    let Some(button) = button else {
        return;
    };

    let mut change = None;
    UPTIME.with_lock(|uptime| {
        let now = uptime.now_micros();
        MONITOR.with_lock(|monitor| {
            OUTPUTS.with_lock(|outputs| {
                CANVAS.with_lock(|canvas| {
                    change = monitor.handle(button, now, outputs, canvas);
                });
            });
        });
    });

    match change {
        Some(ModeChange::Overlay(on)) => {
            OVERLAY_LED.with_lock(|led| {
                if on {
                    led.set_high().ok();
                } else {
                    led.set_low().ok();
                }
            });
            rprintln!("overlay {}", if on { "on" } else { "off" });
        }
        Some(ModeChange::Outputs(on)) => {
            rprintln!("led outputs {}", if on { "on" } else { "off" });
        }
        None => {}
    }
}

#[entry]
fn main() -> ! {
    rtt_init_print!();

    let board = Board::take().unwrap();

    // setup display
    let i2c = twim::Twim::new(board.TWIM0, board.i2c_external.into(), FREQUENCY_A::K400);
    CANVAS.init(OledCanvas::new(i2c));

    // setup LED pins: both axis LEDs start on PWM0, green follows the overlay flag
    let blue: LedPinType = board.edge.e16.into_push_pull_output(Level::Low).degrade();
    let red: LedPinType = board.edge.e08.into_push_pull_output(Level::Low).degrade();
    let green: GreenPinType = board.edge.e09.into_push_pull_output(Level::Low);
    OUTPUTS.init(OutputStage::new(LedPwm::new(board.PWM0), [blue, red]));
    OVERLAY_LED.init(green);

    // setup the joystick A2D
    let vry: VryPinType = board.edge.e01.into_floating_input();
    let vrx: VrxPinType = board.edge.e02.into_floating_input();
    let adc_config = SaadcConfig {
        resolution: saadc::Resolution::_12BIT,
        time: saadc::Time::_40US,
        ..Default::default()
    };
    let mut joystick = Joystick::new(Saadc::new(board.ADC, adc_config), vry, vrx);

    // debounce clock and loop pacing
    UPTIME.init(UptimeClock::new(board.TIMER1));
    MONITOR.init(InputMonitor::new());
    let mut loop_timer = Timer::new(board.TIMER0);

    // setup gpiote interupts
    let a_btn = board.buttons.button_a.into_floating_input().degrade();
    let stick_btn = board.edge.e12.into_pullup_input().degrade();
    let gpiote = Gpiote::new(board.GPIOTE);
    let channel0 = gpiote.channel0(); //a_btn
    let channel1 = gpiote.channel1(); //stick_btn
    channel0.input_pin(&a_btn).hi_to_lo().enable_interrupt();
    channel0.reset_events();
    channel1.input_pin(&stick_btn).hi_to_lo().enable_interrupt();
    channel1.reset_events();
    GPIOTE_PERIPHERAL.init(gpiote);

    // Set up the NVIC to handle interrupts.
    unsafe {
        NVIC::unmask(Interrupt::GPIOTE);
    };
    NVIC::unpend(Interrupt::GPIOTE);

    rprintln!(
        "joystick-marker up: VRY=e01 VRX=e02 (0..={}), blue=e16 red=e08 green=e09, A + stick=e12",
        ADC_MAX
    );

    let mut control = ControlLoop::new();
    loop {
        let samples = control_loop::sample(&mut joystick);

        UPTIME.with_lock(|uptime| {
            uptime.now_micros(); // keeps the 32-bit counter's wraps accounted for
        });

        MONITOR.with_lock(|monitor| {
            let flags = monitor.flags();
            OUTPUTS.with_lock(|outputs| {
                CANVAS.with_lock(|canvas| {
                    control.step(samples, flags, outputs, canvas);
                });
            });
        });

        loop_timer.delay_ms(LOOP_PERIOD_MS);
    }
}
