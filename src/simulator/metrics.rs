//! Latency bookkeeping for simulated actions.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;
use tokio::runtime::Handle;
use tracing::info;

/// The kinds of action a simulated user performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum SimAction {
    Post,
    Comment,
    Vote,
}

impl fmt::Display for SimAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SimAction::Post => "Post",
            SimAction::Comment => "Comment",
            SimAction::Vote => "Vote",
        };
        f.write_str(name)
    }
}

/// Counters owned by a single simulated user. The driver merges them once the user is done.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metrics {
    pub total_actions: u64,
    pub total_latency: Duration,
    pub action_counts: BTreeMap<SimAction, u64>,
}

impl Metrics {
    pub fn record(&mut self, action: SimAction, latency: Duration) {
        self.total_actions += 1;
        self.total_latency += latency;
        *self.action_counts.entry(action).or_default() += 1;
    }

    pub fn merge(&mut self, other: Metrics) {
        self.total_actions += other.total_actions;
        self.total_latency += other.total_latency;
        for (action, count) in other.action_counts {
            *self.action_counts.entry(action).or_default() += count;
        }
    }

    /// Mean enqueue latency, or zero if nothing was recorded.
    pub fn average_latency(&self) -> Duration {
        if self.total_actions == 0 {
            return Duration::ZERO;
        }
        match u32::try_from(self.total_actions) {
            Ok(n) => self.total_latency / n,
            Err(_) => Duration::from_secs_f64(
                self.total_latency.as_secs_f64() / self.total_actions as f64,
            ),
        }
    }
}

/// Process resources at one instant.
///
/// Memory figures are not sampled: nothing in the dependency stack reads process memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResourceReport {
    pub available_parallelism: usize,
    pub runtime_workers: usize,
    pub alive_tasks: usize,
}

impl ResourceReport {
    /// Samples the host and the current Tokio runtime. Runtime figures are zero outside one.
    pub fn sample() -> Self {
        let available_parallelism = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        let (runtime_workers, alive_tasks) = match Handle::try_current() {
            Ok(handle) => {
                let metrics = handle.metrics();
                (metrics.num_workers(), metrics.num_alive_tasks())
            }
            Err(_) => (0, 0),
        };
        Self {
            available_parallelism,
            runtime_workers,
            alive_tasks,
        }
    }

    pub fn log(&self, when: &str) {
        info!(
            when,
            available_parallelism = self.available_parallelism,
            runtime_workers = self.runtime_workers,
            alive_tasks = self.alive_tasks,
            "Resource utilization"
        );
    }
}

/// Outcome of a simulation run.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub users: u32,
    pub total_actions: u64,
    pub total_latency: Duration,
    pub average_latency: Duration,
    pub action_counts: BTreeMap<SimAction, u64>,
    pub elapsed: Duration,
    pub resources_before: ResourceReport,
    pub resources_after: ResourceReport,
}

impl SimulationReport {
    pub fn new(
        users: u32,
        metrics: Metrics,
        elapsed: Duration,
        resources_before: ResourceReport,
        resources_after: ResourceReport,
    ) -> Self {
        Self {
            users,
            total_actions: metrics.total_actions,
            total_latency: metrics.total_latency,
            average_latency: metrics.average_latency(),
            action_counts: metrics.action_counts,
            elapsed,
            resources_before,
            resources_after,
        }
    }

    pub fn log(&self) {
        info!(
            users = self.users,
            total_actions = self.total_actions,
            average_latency = ?self.average_latency,
            elapsed = ?self.elapsed,
            "Simulation finished"
        );
        for (action, count) in &self.action_counts {
            info!(%action, count, "Action count");
        }
        self.resources_before.log("before");
        self.resources_after.log("after");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_adds_counts_and_latency() {
        let mut first = Metrics::default();
        first.record(SimAction::Post, Duration::from_micros(10));
        first.record(SimAction::Vote, Duration::from_micros(30));

        let mut second = Metrics::default();
        second.record(SimAction::Vote, Duration::from_micros(20));

        first.merge(second);

        assert_eq!(first.total_actions, 3);
        assert_eq!(first.total_latency, Duration::from_micros(60));
        assert_eq!(first.average_latency(), Duration::from_micros(20));
        assert_eq!(first.action_counts[&SimAction::Vote], 2);
        assert_eq!(first.action_counts.get(&SimAction::Comment), None);
    }

    #[test]
    fn test_average_of_nothing_is_zero() {
        assert_eq!(Metrics::default().average_latency(), Duration::ZERO);
    }

    #[test]
    fn test_resource_sample_outside_runtime() {
        let sample = ResourceReport::sample();
        assert!(sample.available_parallelism >= 1);
        assert_eq!((sample.runtime_workers, sample.alive_tasks), (0, 0));
    }

    #[tokio::test]
    async fn test_report_carries_both_resource_samples() {
        let before = ResourceReport::sample();

        let (release, wait) = tokio::sync::oneshot::channel::<()>();
        let task = tokio::spawn(async move {
            let _ = wait.await;
        });
        let after = ResourceReport::sample();

        let mut metrics = Metrics::default();
        metrics.record(SimAction::Comment, Duration::from_micros(5));
        let report = SimulationReport::new(1, metrics, Duration::from_millis(1), before, after);

        assert_eq!(report.resources_before, before);
        assert_eq!(report.resources_after, after);
        assert_eq!(report.resources_before.runtime_workers, 1);
        assert_eq!(
            report.resources_after.alive_tasks,
            report.resources_before.alive_tasks + 1
        );
        assert!(report.resources_after.available_parallelism >= 1);
        report.log();

        release.send(()).unwrap();
        task.await.unwrap();
    }
}
