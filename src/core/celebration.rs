// Celebration schedules: a fixed three-wave burst and a sustained two-sided
// stream that fades out over a few seconds.

use rand::Rng;
use smallvec::smallvec;

use super::confetti::{palette, BurstConfig, Origin, Shape};
use super::constants::{
    ONE_SHOT_SECOND_WAVE_MS, ONE_SHOT_THIRD_WAVE_MS, STREAM_DURATION_MS, STREAM_PEAK_PARTICLES,
    STREAM_PERIOD_MS,
};

/// A burst to fire `delay_ms` after the trigger.
#[derive(Clone, Debug, PartialEq)]
pub struct ScheduledBurst {
    pub delay_ms: u32,
    pub config: BurstConfig,
}

/// The three waves fired when the celebration control is pressed.
pub fn one_shot_sequence() -> Vec<ScheduledBurst> {
    let warm = palette(&["#ff0000", "#ff69b4", "#ff1493", "#ffc0cb"]);
    let hearts = palette(&["#ff0000", "#ff69b4"]);
    vec![
        ScheduledBurst {
            delay_ms: 0,
            config: BurstConfig {
                particle_count: 150,
                spread: 70.0,
                origin: Origin { x: 0.5, y: 0.6 },
                colors: warm,
                ..Default::default()
            },
        },
        ScheduledBurst {
            delay_ms: ONE_SHOT_SECOND_WAVE_MS,
            config: BurstConfig {
                particle_count: 30,
                spread: 60.0,
                origin: Origin { x: 0.5, y: 0.5 },
                shapes: smallvec![Shape::Heart],
                colors: hearts.clone(),
                ..Default::default()
            },
        },
        ScheduledBurst {
            delay_ms: ONE_SHOT_THIRD_WAVE_MS,
            config: BurstConfig {
                particle_count: 20,
                angle: 60.0,
                spread: 55.0,
                origin: Origin { x: 0.0, y: 0.5 },
                shapes: smallvec![Shape::Heart],
                colors: hearts.clone(),
                ..Default::default()
            },
        },
        ScheduledBurst {
            delay_ms: ONE_SHOT_THIRD_WAVE_MS,
            config: BurstConfig {
                particle_count: 20,
                angle: 120.0,
                spread: 55.0,
                origin: Origin { x: 1.0, y: 0.5 },
                shapes: smallvec![Shape::Heart],
                colors: hearts,
                ..Default::default()
            },
        },
    ]
}

/// Distinct delays of a sequence, in firing order.
pub fn wave_delays(seq: &[ScheduledBurst]) -> Vec<u32> {
    let mut delays: Vec<u32> = seq.iter().map(|b| b.delay_ms).collect();
    delays.sort_unstable();
    delays.dedup();
    delays
}

#[derive(Clone, Debug, PartialEq)]
pub enum StreamTick {
    Fire {
        time_left_ms: f64,
        bursts: [BurstConfig; 2],
    },
    Finished,
}

/// Repeating task that emits two mirrored bursts every period until its
/// duration has elapsed. Particle count decays linearly with time left.
#[derive(Clone, Debug)]
pub struct SustainedBurst {
    started_at_ms: f64,
    period_ms: f64,
    duration_ms: f64,
    fired: u32,
    finished: bool,
}

impl SustainedBurst {
    pub fn new(started_at_ms: f64) -> Self {
        Self::with_timing(started_at_ms, STREAM_PERIOD_MS, STREAM_DURATION_MS)
    }

    pub fn with_timing(started_at_ms: f64, period_ms: f64, duration_ms: f64) -> Self {
        Self {
            started_at_ms,
            period_ms,
            duration_ms,
            fired: 0,
            finished: false,
        }
    }

    pub fn period_ms(&self) -> f64 {
        self.period_ms
    }

    pub fn ends_at_ms(&self) -> f64 {
        self.started_at_ms + self.duration_ms
    }

    pub fn fired(&self) -> u32 {
        self.fired
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Handle one timer callback at wall-clock `now_ms`.
    ///
    /// Once `Finished` is returned the task stays finished and the caller
    /// should clear its timer.
    pub fn on_tick<R: Rng + ?Sized>(&mut self, now_ms: f64, rng: &mut R) -> StreamTick {
        if self.finished {
            return StreamTick::Finished;
        }
        let time_left_ms = self.ends_at_ms() - now_ms;
        if time_left_ms <= 0.0 {
            self.finished = true;
            return StreamTick::Finished;
        }
        let count = (STREAM_PEAK_PARTICLES * (time_left_ms / self.duration_ms)).floor() as u32;
        let left = stream_burst(count, rng.gen_range(0.1..0.3), rng.gen::<f32>() - 0.2);
        let right = stream_burst(count, rng.gen_range(0.7..0.9), rng.gen::<f32>() - 0.2);
        self.fired += 1;
        StreamTick::Fire {
            time_left_ms,
            bursts: [left, right],
        }
    }

    pub fn cancel(&mut self) {
        self.finished = true;
    }
}

fn stream_burst(particle_count: u32, x: f32, y: f32) -> BurstConfig {
    BurstConfig {
        particle_count,
        start_velocity: 30.0,
        spread: 360.0,
        ticks: 60,
        z_index: 100,
        origin: Origin { x, y },
        colors: palette(&["#ec4899", "#f43f5e", "#f9a8d4", "#ffffff"]),
        ..Default::default()
    }
}
