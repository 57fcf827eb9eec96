#![no_std]
#![no_main]

use defmt_rtt as _;
use panic_probe as _;

use max7219::MAX7219;
use rtic::app;

use seconds_counter::counter::CounterState;
use seconds_counter::dispatch::WorkSlot;
use seconds_counter::display;

#[app(device = rp_pico::hal::pac, peripherals = true, dispatchers = [I2C0_IRQ])]
mod app {
    use super::*;
    use rp_pico::hal::{
        clocks::{init_clocks_and_plls, Clock},
        gpio::{
            bank0::{Gpio13, Gpio14, Gpio15},
            FunctionSio, Interrupt as GpioInterrupt, Pin, PullUp, SioInput,
        },
        sio::Sio,
        spi::Spi,
        timer::{Alarm, Alarm0, Timer},
        watchdog::Watchdog,
        fugit::{RateExtU32, ExtU32},
    };
    use embedded_hal::digital::v2::ToggleableOutputPin;

    /// Tick period of the counter, in microseconds.
    const TICK_PERIOD_US: u32 = 1_000_000;

    // Type definition for the MAX7219 display
    type Spi0 = Spi<rp_pico::hal::spi::Enabled, rp_pico::hal::pac::SPI0, (
        Pin<rp_pico::hal::gpio::bank0::Gpio19, rp_pico::hal::gpio::FunctionSpi, rp_pico::hal::gpio::PullDown>,
        Pin<rp_pico::hal::gpio::bank0::Gpio16, rp_pico::hal::gpio::FunctionSpi, rp_pico::hal::gpio::PullDown>,
        Pin<rp_pico::hal::gpio::bank0::Gpio18, rp_pico::hal::gpio::FunctionSpi, rp_pico::hal::gpio::PullDown>
    )>;
    type CsPin = Pin<rp_pico::hal::gpio::bank0::Gpio17, rp_pico::hal::gpio::FunctionSio<rp_pico::hal::gpio::SioOutput>, rp_pico::hal::gpio::PullDown>;
    type DisplayType = MAX7219<max7219::connectors::SpiConnectorSW<Spi0, CsPin>>;

    type ButtonPin<I> = Pin<I, FunctionSio<SioInput>, PullUp>;

    // Shared resources (accessed by both interrupt and worker contexts)
    #[shared]
    struct Shared {
        counter: CounterState,
        work: WorkSlot,
        btn_direction: ButtonPin<Gpio13>,
        btn_run: ButtonPin<Gpio14>,
        btn_reset: ButtonPin<Gpio15>,
    }

    // Local resources (accessed by single tasks)
    #[local]
    struct Local {
        display: DisplayType,
        led: rp_pico::hal::gpio::Pin<rp_pico::hal::gpio::bank0::Gpio25, rp_pico::hal::gpio::FunctionSio<rp_pico::hal::gpio::SioOutput>, rp_pico::hal::gpio::PullDown>,
        alarm: Alarm0,
    }

    #[init]
    fn init(ctx: init::Context) -> (Shared, Local, init::Monotonics) {
        defmt::info!("seconds counter starting");

        let mut pac = ctx.device;
        let mut watchdog = Watchdog::new(pac.WATCHDOG);
        let sio = Sio::new(pac.SIO);

        let external_xtal_freq_hz = 12_000_000u32;
        let clocks = init_clocks_and_plls(
            external_xtal_freq_hz,
            pac.XOSC,
            pac.CLOCKS,
            pac.PLL_SYS,
            pac.PLL_USB,
            &mut pac.RESETS,
            &mut watchdog,
        )
        .ok()
        .unwrap();

        let mut timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);
        let mut alarm = timer.alarm_0().unwrap();
        // First tick in 1 second
        alarm.schedule(TICK_PERIOD_US.micros()).unwrap();
        alarm.enable_interrupt();

        let pins = rp_pico::Pins::new(
            pac.IO_BANK0,
            pac.PADS_BANK0,
            sio.gpio_bank0,
            &mut pac.RESETS,
        );

        let led = pins.led.into_push_pull_output();

        // Buttons fire on the falling edge (pressed against pull-up)
        let btn_direction = pins.gpio13.into_pull_up_input();
        btn_direction.set_interrupt_enabled(GpioInterrupt::EdgeLow, true);
        defmt::info!("direction button on gpio13");

        let btn_run = pins.gpio14.into_pull_up_input();
        btn_run.set_interrupt_enabled(GpioInterrupt::EdgeLow, true);
        defmt::info!("run button on gpio14");

        let btn_reset = pins.gpio15.into_pull_up_input();
        btn_reset.set_interrupt_enabled(GpioInterrupt::EdgeLow, true);
        defmt::info!("reset button on gpio15");

        let mosi = pins.gpio19.into_function::<rp_pico::hal::gpio::FunctionSpi>();
        let sck = pins.gpio18.into_function::<rp_pico::hal::gpio::FunctionSpi>();
        let miso = pins.gpio16.into_function::<rp_pico::hal::gpio::FunctionSpi>();
        let cs = pins.gpio17.into_push_pull_output();

        let spi = Spi::<_, _, _, 8>::new(pac.SPI0, (mosi, miso, sck));
        let spi = spi.init(
            &mut pac.RESETS,
            clocks.peripheral_clock.freq(),
            2_000_000u32.Hz(),
            &embedded_hal::spi::MODE_0,
        );

        let mut display = match MAX7219::from_spi_cs(1, spi, cs) {
            Ok(d) => d,
            Err(_) => defmt::panic!("display configuration rejected"),
        };
        display.power_on().unwrap();
        display.set_intensity(0, 0x0).unwrap();
        display.clear_display(0).unwrap();

        (
            Shared {
                counter: CounterState::new(),
                work: WorkSlot::new(),
                btn_direction,
                btn_run,
                btn_reset,
            },
            Local {
                display,
                led,
                alarm,
            },
            init::Monotonics(),
        )
    }

    // Hardware Task: Timer Interrupt (1Hz)
    //
    // Fires regardless of the running flag; the flag only gates whether
    // a fire submits work.
    #[task(binds = TIMER_IRQ_0, priority = 1, shared = [counter, work], local = [alarm, led])]
    fn timer_tick(ctx: timer_tick::Context) {
        // Clear interrupt and schedule next
        ctx.local.alarm.clear_interrupt();
        ctx.local.alarm.schedule(TICK_PERIOD_US.micros()).unwrap();

        ctx.local.led.toggle().unwrap();

        (ctx.shared.counter, ctx.shared.work).lock(|counter, work| {
            // submit() is false while a request is still pending, so
            // back-to-back fires coalesce into one refresh.
            if counter.running && work.submit() {
                refresh::spawn().ok();
            }
        });
    }

    // Hardware Task: GPIO Interrupt (Button Press)
    #[task(binds = IO_IRQ_BANK0, priority = 1, shared = [counter, btn_direction, btn_run, btn_reset])]
    fn button_press(mut ctx: button_press::Context) {
        let direction_pressed = ctx.shared.btn_direction.lock(|b| {
            let hit = b.interrupt_status(GpioInterrupt::EdgeLow);
            if hit {
                b.clear_interrupt(GpioInterrupt::EdgeLow);
            }
            hit
        });
        let run_pressed = ctx.shared.btn_run.lock(|b| {
            let hit = b.interrupt_status(GpioInterrupt::EdgeLow);
            if hit {
                b.clear_interrupt(GpioInterrupt::EdgeLow);
            }
            hit
        });
        let reset_pressed = ctx.shared.btn_reset.lock(|b| {
            let hit = b.interrupt_status(GpioInterrupt::EdgeLow);
            if hit {
                b.clear_interrupt(GpioInterrupt::EdgeLow);
            }
            hit
        });

        if direction_pressed {
            let mode = ctx.shared.counter.lock(|c| c.toggle_direction());
            defmt::info!("mode changed to {}", mode);
        }

        if run_pressed {
            let running = ctx.shared.counter.lock(|c| c.toggle_running());
            defmt::info!("timer {}", if running { "started" } else { "stopped" });
        }

        if reset_pressed {
            ctx.shared.counter.lock(|c| c.reset());
            defmt::info!("seconds reset");
        }
    }

    // Software Task: render the current value, then advance the count.
    // The displayed value is always the pre-advance one.
    #[task(shared = [counter, work], local = [display])]
    fn refresh(mut ctx: refresh::Context) {
        if !ctx.shared.work.lock(|w| w.drain()) {
            return;
        }

        let (secs, frame) = ctx.shared.counter.lock(|c| {
            let frame = display::prepare_buffer(c.seconds);
            let secs = c.seconds;
            c.advance();
            (secs, frame)
        });

        defmt::info!("time: {}", secs);
        ctx.local.display.write_raw(0, &frame).unwrap();
    }
}
