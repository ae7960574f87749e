//! Motor Acoustics Main Application
//!
//! Entry point for the STM32G474 flight-controller firmware.
//! Initializes the motor timer and runs the acoustic tasks.

#![no_std]
#![no_main]

use defmt::info;
use embassy_executor::Spawner;
use embassy_stm32::exti::ExtiInput;
use embassy_stm32::gpio::{OutputType, Pull};
use embassy_stm32::peripherals::TIM2;
use embassy_stm32::time::Hertz;
use embassy_stm32::timer::simple_pwm::{PwmPin, SimplePwm};
use embassy_stm32::timer::low_level::CountingMode;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use {defmt_rtt as _, panic_probe as _};

use motor_acoustic_comms::hal::motors::{PwmMotorBank, SILENT_CARRIER_HZ};
use motor_acoustic_comms::prelude::*;

/// Ticks of the link task per sound task tick
const SOUND_DIVIDER: u32 = SOUND_TASK_PERIOD_MS / TRANSMISSION_TASK_PERIOD_MS;

/// Operator requests delivered to the acoustic task
#[derive(Clone, Copy)]
enum Command {
    /// Sound the ID beacon
    Beacon,
    /// Broadcast the chirp ID on all motors
    ChirpId,
    /// Toggle the data link
    ToggleLink,
}

static COMMANDS: Signal<CriticalSectionRawMutex, Command> = Signal::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Motor acoustics firmware v{}", env!("CARGO_PKG_VERSION"));

    let config = embassy_stm32::Config::default();
    let p = embassy_stm32::init(config);

    info!("Peripherals initialized");

    // TIM2 CH1-CH4 on PA0-PA3 drive M1-M4
    let pwm = SimplePwm::new(
        p.TIM2,
        Some(PwmPin::new_ch1(p.PA0, OutputType::PushPull)),
        Some(PwmPin::new_ch2(p.PA1, OutputType::PushPull)),
        Some(PwmPin::new_ch3(p.PA2, OutputType::PushPull)),
        Some(PwmPin::new_ch4(p.PA3, OutputType::PushPull)),
        Hertz(SILENT_CARRIER_HZ),
        CountingMode::EdgeAlignedUp,
    );
    let bank = PwmMotorBank::new(pwm);

    // User button on PC13: short press sounds the beacon
    let button = ExtiInput::new(p.PC13, p.EXTI13, Pull::Down);

    spawner.spawn(acoustic_task(bank)).unwrap();
    spawner.spawn(button_task(button)).unwrap();

    info!("Tasks spawned");
}

/// Fixed-period tick for the link, chirp ID and beacon
#[embassy_executor::task]
async fn acoustic_task(mut bank: PwmMotorBank<'static, TIM2>) {
    let mut link = MotorLink::default();
    let mut chirp_id = ChirpBroadcaster::new(SOUND_TASK_PERIOD_MS);
    let mut beacon = IdBeacon::default();

    let mut ticker = Ticker::every(Duration::from_millis(u64::from(TRANSMISSION_TASK_PERIOD_MS)));
    let mut tick: u32 = 0;

    loop {
        if let Some(command) = COMMANDS.try_take() {
            match command {
                Command::Beacon => beacon.request_broadcast(),
                Command::ChirpId => chirp_id.request_broadcast(),
                Command::ToggleLink => link.set_enabled(!link.is_enabled()),
            }
        }

        link.tick(&mut bank);

        if tick % SOUND_DIVIDER == 0 {
            chirp_id.tick(&mut bank);
            if beacon.tick(&mut bank) == BeaconOutcome::Started {
                for motor in beacon.motors_in_use().iter() {
                    debug!(
                        "{:?} sounding at {} on a {} Hz carrier",
                        motor,
                        bank.output_duty(motor),
                        bank.carrier_hz()
                    );
                }
            }
        }

        tick = tick.wrapping_add(1);
        ticker.next().await;
    }
}

/// Button handling: short press = beacon, long press = chirp ID,
/// double press = toggle the data link
#[embassy_executor::task]
async fn button_task(mut button: ExtiInput<'static>) {
    const LONG_PRESS_MS: u64 = 800;
    const DOUBLE_PRESS_MS: u64 = 300;

    loop {
        button.wait_for_rising_edge().await;
        let pressed = Instant::now();
        button.wait_for_falling_edge().await;

        if pressed.elapsed() >= Duration::from_millis(LONG_PRESS_MS) {
            info!("button: chirp id");
            COMMANDS.signal(Command::ChirpId);
            continue;
        }

        let second = embassy_time::with_timeout(
            Duration::from_millis(DOUBLE_PRESS_MS),
            button.wait_for_rising_edge(),
        )
        .await;

        if second.is_ok() {
            button.wait_for_falling_edge().await;
            info!("button: toggle link");
            COMMANDS.signal(Command::ToggleLink);
        } else {
            info!("button: beacon");
            COMMANDS.signal(Command::Beacon);
        }
    }
}
