//! Ticker timers
//!
//! One worker thread serves the timers of every ticker in the process. It is
//! spawned on first use. On expiry the worker does not touch the graph, it
//! posts a tick into the inbox of the graph owning the ticker, and the
//! thread driving that graph delivers it.

use core::cell::RefCell;
use core::sync::atomic::{AtomicU64, Ordering};
use std::thread;

use crossbeam::channel::{self, Receiver, RecvTimeoutError, Sender};
use critical_section::Mutex;
use embassy_time::{Duration, Instant};

use crate::error::SlabError;
use crate::graph::{InboxSender, Inbound, SlabId};

/// Name of the shared ticker worker thread
pub const TICKER_THREAD_NAME: &str = "slab-ticker";

static COMMANDS: Mutex<RefCell<Option<Sender<Command>>>> = Mutex::new(RefCell::new(None));
static NEXT_TIMER_ID: AtomicU64 = AtomicU64::new(0);

/// Milliseconds since the time driver started, wrapping at `u32::MAX`
#[allow(clippy::cast_possible_truncation)]
pub fn uptime_ms() -> u32 {
    Instant::now().as_millis() as u32
}

pub(crate) fn to_std(duration: Duration) -> std::time::Duration {
    std::time::Duration::from_micros(duration.as_micros())
}

/// Where a timer delivers its ticks
pub(crate) struct TickTarget {
    pub(crate) inbox: InboxSender,
    pub(crate) ticker: SlabId,
}

enum Command {
    Start {
        id: u64,
        period: Duration,
        target: TickTarget,
    },
    Suspend {
        id: u64,
    },
    Restart {
        id: u64,
        epoch: u32,
    },
    Stop {
        id: u64,
    },
}

struct Timer {
    id: u64,
    period: Duration,
    /// Next expiry, `None` while suspended
    deadline: Option<Instant>,
    epoch: u32,
    target: TickTarget,
}

impl Timer {
    /// Post a tick and schedule the next expiry
    fn fire(&mut self, now: Instant, deadline: Instant) {
        let tick = Inbound::Tick {
            ticker: self.target.ticker,
            epoch: self.epoch,
            time: uptime_ms(),
        };
        if self.target.inbox.try_send(tick).is_err() {
            log::warn!("inbox full, dropping tick of {:?}", self.target.ticker);
        }

        // Skip the backlog instead of catching up after a long stall
        let base = if now > deadline + self.period * 2 {
            now
        } else {
            deadline
        };
        self.deadline = Some(base + self.period);
    }
}

/// Handle to a running timer, cancels it when dropped
#[derive(Debug)]
pub(crate) struct TimerHandle {
    id: u64,
    epoch: u32,
    suspended: bool,
    commands: Sender<Command>,
}

impl TimerHandle {
    /// Start a periodic timer, spawning the worker if needed
    pub(crate) fn start(period: Duration, target: TickTarget) -> Result<Self, SlabError> {
        let commands = worker()?;
        let id = NEXT_TIMER_ID.fetch_add(1, Ordering::Relaxed);
        commands
            .send(Command::Start { id, period, target })
            .map_err(|_| SlabError::WorkerUnavailable("worker stopped".into()))?;
        log::debug!("timer {id} started, period {period:?}");

        Ok(Self {
            id,
            epoch: 0,
            suspended: false,
            commands,
        })
    }

    /// Stop ticking until [`TimerHandle::resume`].
    ///
    /// Ticks already queued by the previous run become stale.
    pub(crate) fn suspend(&mut self) {
        self.epoch = self.epoch.wrapping_add(1);
        self.suspended = true;
        self.send(Command::Suspend { id: self.id });
    }

    /// Restart a suspended timer, the next tick lands one period from now
    pub(crate) fn resume(&mut self) {
        if !self.suspended {
            return;
        }
        self.suspended = false;
        self.send(Command::Restart {
            id: self.id,
            epoch: self.epoch,
        });
    }

    pub(crate) const fn is_suspended(&self) -> bool {
        self.suspended
    }

    fn send(&self, command: Command) {
        if self.commands.send(command).is_err() {
            log::warn!("timer {} lost its worker", self.id);
        }
    }

    pub(crate) const fn epoch(&self) -> u32 {
        self.epoch
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        let _ = self.commands.send(Command::Stop { id: self.id });
        log::debug!("timer {} stopped", self.id);
    }
}

/// Get the command queue of the worker, spawning it on first use
fn worker() -> Result<Sender<Command>, SlabError> {
    critical_section::with(|cs| {
        let mut commands = COMMANDS.borrow(cs).borrow_mut();
        if let Some(sender) = commands.as_ref() {
            return Ok(sender.clone());
        }

        let (sender, receiver) = channel::unbounded();
        thread::Builder::new()
            .name(TICKER_THREAD_NAME.into())
            .spawn(move || run(&receiver))
            .map_err(|err| SlabError::WorkerUnavailable(err.to_string()))?;
        log::debug!("{TICKER_THREAD_NAME} worker spawned");

        *commands = Some(sender.clone());
        Ok(sender)
    })
}

fn run(commands: &Receiver<Command>) {
    let mut timers: Vec<Timer> = Vec::new();

    loop {
        let command = match timers.iter().filter_map(|timer| timer.deadline).min() {
            Some(deadline) => {
                let wait = deadline.saturating_duration_since(Instant::now());
                match commands.recv_timeout(to_std(wait)) {
                    Ok(command) => Some(command),
                    Err(RecvTimeoutError::Timeout) => None,
                    Err(RecvTimeoutError::Disconnected) => return,
                }
            }
            None => match commands.recv() {
                Ok(command) => Some(command),
                Err(_) => return,
            },
        };

        match command {
            Some(command) => apply(&mut timers, command),
            None => {
                let now = Instant::now();
                for timer in &mut timers {
                    if let Some(deadline) = timer.deadline.filter(|&deadline| deadline <= now) {
                        timer.fire(now, deadline);
                    }
                }
            }
        }
    }
}

fn apply(timers: &mut Vec<Timer>, command: Command) {
    match command {
        Command::Start { id, period, target } => timers.push(Timer {
            id,
            period,
            deadline: Some(Instant::now() + period),
            epoch: 0,
            target,
        }),
        Command::Suspend { id } => {
            if let Some(timer) = timers.iter_mut().find(|timer| timer.id == id) {
                timer.deadline = None;
            }
        }
        Command::Restart { id, epoch } => {
            if let Some(timer) = timers.iter_mut().find(|timer| timer.id == id) {
                timer.epoch = epoch;
                timer.deadline = Some(Instant::now() + timer.period);
            }
        }
        Command::Stop { id } => timers.retain(|timer| timer.id != id),
    }
}
