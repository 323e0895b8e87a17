//! Task wiring
//!
//! Metadata for the six periodic tasks (periods and tags match the deployed
//! configuration) plus the Embassy task wrappers for everything that does
//! not touch a peripheral: the two load generators and the CPU-load
//! monitor. The button monitors, transmitter and reporter are generic over
//! the platform traits, and `#[embassy_executor::task]` does not admit
//! generic functions, so a platform binary wraps their `run()` loops in its
//! own task fns with its concrete pin and UART types.

use embassy_executor::{SpawnError, Spawner};
use embassy_time::{Duration, Instant, Ticker};

use crate::app::context::AppContext;
use crate::app::load::{LoadGenerator, SpinWorkload};
use crate::core::scheduler::TaskMetadata;
use crate::platform::EmbassyClock;
use crate::{log_info, log_warn};

pub const BUTTON_1_MONITOR: TaskMetadata = TaskMetadata {
    name: "button_1_monitor",
    period_ms: 50,
    priority: 1,
    tag: 1,
};

pub const BUTTON_2_MONITOR: TaskMetadata = TaskMetadata {
    name: "button_2_monitor",
    period_ms: 50,
    priority: 1,
    tag: 2,
};

pub const STATUS_TRANSMITTER: TaskMetadata = TaskMetadata {
    name: "status_transmitter",
    period_ms: 100,
    priority: 1,
    tag: 3,
};

pub const STATUS_REPORTER: TaskMetadata = TaskMetadata {
    name: "status_reporter",
    period_ms: 20,
    priority: 1,
    tag: 4,
};

pub const LOAD_SIM_1: TaskMetadata = TaskMetadata {
    name: "load_sim_1",
    period_ms: 10,
    priority: 1,
    tag: 5,
};

pub const LOAD_SIM_2: TaskMetadata = TaskMetadata {
    name: "load_sim_2",
    period_ms: 100,
    priority: 1,
    tag: 6,
};

/// CPU burst of the lighter load generator
pub const LOAD_1_BURN_US: u64 = 5_000;

/// CPU burst of the heavier load generator
pub const LOAD_2_BURN_US: u64 = 12_000;

/// Observation window of the CPU-load monitor
pub const LOAD_SAMPLE_PERIOD: Duration = Duration::from_secs(1);

/// Lighter load generator: 5 ms burst every 10 ms
#[embassy_executor::task]
pub async fn load_sim_1_task(ctx: &'static AppContext) {
    let generator = LoadGenerator::new(SpinWorkload::new(EmbassyClock, LOAD_1_BURN_US));
    generator.run(&ctx.timings, LOAD_SIM_1).await
}

/// Heavier load generator: 12 ms burst every 100 ms
#[embassy_executor::task]
pub async fn load_sim_2_task(ctx: &'static AppContext) {
    let generator = LoadGenerator::new(SpinWorkload::new(EmbassyClock, LOAD_2_BURN_US));
    generator.run(&ctx.timings, LOAD_SIM_2).await
}

/// CPU-load monitor: closes the observation window once per second and logs
/// the derived load, plus the stream drop counter when it is moving.
#[embassy_executor::task]
pub async fn cpu_load_monitor_task(ctx: &'static AppContext) {
    ctx.timings.reset_window(Instant::now().as_micros());
    let mut ticker = Ticker::every(LOAD_SAMPLE_PERIOD);
    let mut last_dropped = 0;
    loop {
        ticker.next().await;
        let load = ctx.timings.sample(Instant::now().as_micros());
        log_info!(
            "cpu load {}% ({} tasks, {}us busy / {}us window)",
            load.percent,
            ctx.timings.task_count(),
            load.busy_us,
            load.window_us
        );

        let dropped = ctx.stream.dropped();
        if dropped != last_dropped {
            log_warn!("stream dropped {} bytes total", dropped);
            last_dropped = dropped;
        }
    }
}

/// Spawn the hardware-independent tasks.
///
/// The platform binary spawns its own wrappers for the button monitors,
/// transmitter and reporter alongside these.
pub fn spawn_builtin(spawner: &Spawner, ctx: &'static AppContext) -> Result<(), SpawnError> {
    spawner.spawn(load_sim_1_task(ctx))?;
    spawner.spawn(load_sim_2_task(ctx))?;
    spawner.spawn(cpu_load_monitor_task(ctx))?;
    Ok(())
}
