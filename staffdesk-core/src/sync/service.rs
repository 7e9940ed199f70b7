// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Sync Service
//!
//! Owns the recurring schedule and runs sync passes.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::Deserialize;
use serde_json::json;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, error, info, warn};

use crate::api::{require_user_id, EventDispatcher, StaffdeskEvent, StaffdeskResult};
use crate::backend::{DataClient, Filter, Query, Table};
use crate::config::{DEFAULT_SYNC_INTERVAL, MIN_SYNC_INTERVAL};
use crate::records::iso_timestamp;

use super::state::{AutoSyncStarted, SyncReport, SyncState};

/// Counts a pass as in flight until dropped.
struct PassGuard {
    in_flight: Arc<AtomicUsize>,
}

impl PassGuard {
    fn enter(in_flight: &Arc<AtomicUsize>) -> Self {
        in_flight.fetch_add(1, Ordering::SeqCst);
        PassGuard {
            in_flight: Arc::clone(in_flight),
        }
    }
}

impl Drop for PassGuard {
    fn drop(&mut self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

/// State shared between the service and its scheduling task.
pub(super) struct Shared {
    pub(super) client: Arc<dyn DataClient>,
    pub(super) events: Arc<EventDispatcher>,
    in_flight: Arc<AtomicUsize>,
}

impl Shared {
    fn begin_pass(&self) -> PassGuard {
        PassGuard::enter(&self.in_flight)
    }

    fn pass_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Marks every file of `user_id` synchronized. All-or-nothing: one bulk
    /// update, no retry.
    async fn pass(&self, user_id: &str, _guard: PassGuard) -> StaffdeskResult<SyncReport> {
        require_user_id(user_id)?;

        let synced_at = Utc::now();
        let result = self
            .client
            .update(
                Table::Files,
                json!({ "synced_at": iso_timestamp(synced_at) }),
                &[Filter::eq("user_id", user_id)],
            )
            .await;

        match result {
            Ok(rows) => {
                debug!("Synced {} files for {}", rows.len(), user_id);
                self.events.dispatch(StaffdeskEvent::SyncCompleted {
                    user_id: user_id.to_string(),
                    synced_at,
                });
                Ok(SyncReport {
                    user_id: user_id.to_string(),
                    synced_at,
                    files_synced: rows.len(),
                })
            }
            Err(e) => {
                self.events.dispatch(StaffdeskEvent::SyncFailed {
                    user_id: user_id.to_string(),
                    error: e.to_string(),
                });
                Err(e.into())
            }
        }
    }

    async fn pass_quietly(&self, user_id: &str, guard: PassGuard) -> bool {
        match self.pass(user_id, guard).await {
            Ok(_) => true,
            Err(e) => {
                error!("Sync failed for {}: {}", user_id, e);
                false
            }
        }
    }
}

struct Schedule {
    user_id: String,
    task: JoinHandle<()>,
}

/// Periodic and manual synchronization for one signed-in user at a time.
///
/// Holds at most one recurring schedule. Passes run to completion once
/// started: stopping the schedule only cancels future ticks.
///
/// # Example
///
/// ```ignore
/// let sync = SyncService::new(client, events, Duration::from_secs(900));
///
/// let started = sync.start_auto_sync("u1").await?;
/// if let Err(e) = &started.initial_pass {
///     eprintln!("first pass failed: {e}");
/// }
///
/// let snapshot = sync.create_backup("u1").await?;
/// sync.stop_auto_sync();
/// ```
pub struct SyncService {
    pub(super) shared: Arc<Shared>,
    interval: Duration,
    schedule: Mutex<Option<Schedule>>,
}

#[derive(Deserialize)]
struct SyncedAt {
    synced_at: Option<DateTime<Utc>>,
}

impl SyncService {
    /// Creates a service ticking every `interval`.
    ///
    /// Intervals shorter than [`MIN_SYNC_INTERVAL`] (including zero) are
    /// raised to it.
    pub fn new(
        client: Arc<dyn DataClient>,
        events: Arc<EventDispatcher>,
        interval: Duration,
    ) -> Self {
        if interval < MIN_SYNC_INTERVAL {
            warn!(
                "Sync interval {:?} too short, using {:?}",
                interval, MIN_SYNC_INTERVAL
            );
        }

        SyncService {
            shared: Arc::new(Shared {
                client,
                events,
                in_flight: Arc::new(AtomicUsize::new(0)),
            }),
            interval: interval.max(MIN_SYNC_INTERVAL),
            schedule: Mutex::new(None),
        }
    }

    /// Creates a service with the default 15 minute interval.
    pub fn with_default_interval(
        client: Arc<dyn DataClient>,
        events: Arc<EventDispatcher>,
    ) -> Self {
        Self::new(client, events, DEFAULT_SYNC_INTERVAL)
    }

    /// Interval between scheduled passes.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Current schedule state.
    pub fn state(&self) -> SyncState {
        match &*self.schedule.lock() {
            Some(schedule) => SyncState::Scheduled {
                user_id: schedule.user_id.clone(),
            },
            None => SyncState::Idle,
        }
    }

    /// Returns true while any pass (manual or scheduled) is running.
    pub fn is_syncing(&self) -> bool {
        self.shared.pass_in_flight()
    }

    /// Replaces any schedule with one bound to `user_id`.
    ///
    /// Runs one pass immediately and awaits it, then ticks every interval
    /// (first tick one interval from now). The first pass outcome is
    /// reported in [`AutoSyncStarted::initial_pass`]; only an empty user id
    /// is an error, and then no schedule is created.
    pub async fn start_auto_sync(&self, user_id: &str) -> StaffdeskResult<AutoSyncStarted> {
        require_user_id(user_id)?;

        if let Some(previous) = self.take_schedule() {
            info!("Replacing auto-sync schedule for {}", previous.user_id);
            previous.task.abort();
        }

        let initial_pass = self.sync_now(user_id).await;
        if let Err(e) = &initial_pass {
            warn!("Initial sync failed for {}: {}", user_id, e);
        }

        let task = spawn_schedule(Arc::clone(&self.shared), user_id.to_string(), self.interval);
        let replaced = self.schedule.lock().replace(Schedule {
            user_id: user_id.to_string(),
            task,
        });
        // A concurrent start may have installed a schedule meanwhile.
        if let Some(replaced) = replaced {
            replaced.task.abort();
        }

        info!(
            "Auto-sync started for {} every {:?}",
            user_id, self.interval
        );
        self.shared.events.dispatch(StaffdeskEvent::AutoSyncStarted {
            user_id: user_id.to_string(),
        });

        Ok(AutoSyncStarted {
            user_id: user_id.to_string(),
            initial_pass,
        })
    }

    /// Cancels future ticks. Idempotent; returns whether a schedule was active.
    pub fn stop_auto_sync(&self) -> bool {
        let Some(schedule) = self.take_schedule() else {
            return false;
        };

        schedule.task.abort();
        info!("Auto-sync stopped for {}", schedule.user_id);
        self.shared.events.dispatch(StaffdeskEvent::AutoSyncStopped {
            user_id: schedule.user_id,
        });
        true
    }

    /// Runs one pass now. Never refused, even while another pass runs.
    pub async fn sync_now(&self, user_id: &str) -> StaffdeskResult<SyncReport> {
        let guard = self.shared.begin_pass();
        self.shared.pass(user_id, guard).await
    }

    /// [`sync_now`](Self::sync_now) that logs failures and returns `false`.
    pub async fn sync_quietly(&self, user_id: &str) -> bool {
        let guard = self.shared.begin_pass();
        self.shared.pass_quietly(user_id, guard).await
    }

    /// Most recent `synced_at` across the user's files.
    pub async fn last_synced_at(&self, user_id: &str) -> StaffdeskResult<Option<DateTime<Utc>>> {
        require_user_id(user_id)?;

        let query = Query::owned_by(user_id)
            .columns(&["synced_at"])
            .newest_first("synced_at")
            .limit(1);
        let rows = self
            .shared
            .client
            .select(Table::Files, &query)
            .await?
            .decode::<SyncedAt>()?;

        Ok(rows.into_iter().next().and_then(|r| r.synced_at))
    }

    fn take_schedule(&self) -> Option<Schedule> {
        self.schedule.lock().take()
    }
}

impl Drop for SyncService {
    fn drop(&mut self) {
        if let Some(schedule) = self.schedule.get_mut().take() {
            schedule.task.abort();
        }
    }
}

/// Ticks every `period`, skipping a tick while a pass is in flight.
///
/// Each pass runs in its own task, so aborting the schedule never
/// interrupts a running pass.
fn spawn_schedule(shared: Arc<Shared>, user_id: String, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;

            if shared.pass_in_flight() {
                debug!("Sync pass still running, skipping tick for {}", user_id);
                shared.events.dispatch(StaffdeskEvent::SyncSkipped {
                    user_id: user_id.clone(),
                });
                continue;
            }

            let guard = shared.begin_pass();
            let pass_shared = Arc::clone(&shared);
            let pass_user = user_id.clone();
            tokio::spawn(async move {
                pass_shared.pass_quietly(&pass_user, guard).await;
            });
        }
    })
}
