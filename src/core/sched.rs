//! Task scheduling metadata
//!
//! The launcher spawns four perpetual tasks. Their relative priority ordering
//! is a design invariant: connectivity bring-up precedes every other task's
//! assumptions about the network, the producer side of the pipeline must not
//! be starved by the consumer, and the averaging task runs whenever samples
//! are queued. The Embassy executor is cooperative, so priorities are carried
//! as declared metadata (spawn order plus the typed ordering below) rather
//! than enforced preemption levels.

use embassy_time::Duration;

use crate::config;

/// Relative task priority. The ordering between variants is the invariant;
/// the numeric levels exist for diagnostics only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "pico_w", derive(defmt::Format))]
pub enum TaskPriority {
    /// Consumer end of the pipeline; paced entirely by deliveries.
    Averaging = 1,
    /// Indicator blink; periodic, independent of the pipeline.
    Heartbeat = 2,
    /// Producer end of the pipeline; its cadence must never slip because the
    /// consumer is busy.
    Sampling = 3,
    /// One-shot network bring-up; must come up before anything assumes the
    /// network exists, then stays dormant.
    Connectivity = 4,
}

impl TaskPriority {
    /// Numeric level for logs and monitoring. Higher means more important.
    pub const fn level(self) -> u8 {
        self as u8
    }
}

/// Static description of one application task.
#[derive(Debug, Clone, Copy)]
pub struct TaskSpec {
    /// Task name for logging and debugging
    pub name: &'static str,

    /// Relative priority (see [`TaskPriority`])
    pub priority: TaskPriority,

    /// Wake-up period in milliseconds; `None` for event-driven tasks that
    /// block on the transport instead of a timer
    pub period_ms: Option<u64>,

    /// Stack budget hint in bytes
    ///
    /// Embassy tasks share the executor arena rather than owning stacks, so
    /// this figure sizes the arena and documents each task's relative weight.
    pub stack_bytes: usize,
}

impl TaskSpec {
    /// Wake-up period as a [`Duration`], when the task is period-driven.
    pub fn period(&self) -> Option<Duration> {
        self.period_ms.map(Duration::from_millis)
    }
}

pub const CONNECTIVITY_TASK: TaskSpec = TaskSpec {
    name: "connectivity",
    priority: TaskPriority::Connectivity,
    period_ms: Some(config::LINK_IDLE_PERIOD_MS),
    stack_bytes: 4096,
};

pub const SAMPLING_TASK: TaskSpec = TaskSpec {
    name: "sampling",
    priority: TaskPriority::Sampling,
    period_ms: Some(config::SAMPLE_PERIOD_MS),
    stack_bytes: 2048,
};

pub const HEARTBEAT_TASK: TaskSpec = TaskSpec {
    name: "heartbeat",
    priority: TaskPriority::Heartbeat,
    period_ms: Some(config::HEARTBEAT_HALF_PERIOD_MS),
    stack_bytes: 1024,
};

pub const AVERAGING_TASK: TaskSpec = TaskSpec {
    name: "averaging",
    priority: TaskPriority::Averaging,
    period_ms: None,
    stack_bytes: 2048,
};

/// All application tasks, highest priority first. The launcher spawns them in
/// this order.
pub const TASKS: [TaskSpec; 4] = [
    CONNECTIVITY_TASK,
    SAMPLING_TASK,
    HEARTBEAT_TASK,
    AVERAGING_TASK,
];

/// Log the task table at boot.
pub fn log_task_table() {
    crate::log_info!("task table ({} tasks):", TASKS.len());
    for task in &TASKS {
        match task.period_ms {
            Some(period) => crate::log_info!(
                "  {} prio={} period={}ms stack={}B",
                task.name,
                task.priority.level(),
                period,
                task.stack_bytes
            ),
            None => crate::log_info!(
                "  {} prio={} event-driven stack={}B",
                task.name,
                task.priority.level(),
                task.stack_bytes
            ),
        }
    }
}
