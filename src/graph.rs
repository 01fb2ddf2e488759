//! Slab graph
//!
//! Slabs live in an arena and are addressed by generational [`SlabId`]s.
//! Edges are ordered fan-out lists of child ids. A slab never owns its
//! children: connecting and disconnecting only changes edges, and
//! destroying a slab removes it together with every edge that points at it.
//!
//! Stimulation is synchronous and depth-first. Every call moves exactly one
//! event reference in, and every path out of a slab either parks it, drops
//! it or propagates it, so an event lives exactly as long as some slab is
//! still working on it.
//!
//! Ticks from the shared timer worker and stimuli posted from other threads
//! arrive through the graph inbox and are delivered by
//! [`SlabGraph::process_pending`] on the thread owning the graph.

use embassy_time::{Duration, Instant};

use crate::channel::{self, Receiver, Sender, TrySendError};
use crate::error::SlabError;
use crate::event::Event;
use crate::slab::{Emit, Slab, SlabSlot};
use crate::timer::{TickTarget, to_std};

/// Capacity of the graph inbox
pub const INBOX_SIZE: usize = 64;

/// Sleep between inbox polls in [`SlabGraph::run_for`]
pub const POLL_INTERVAL: Duration = Duration::from_millis(1);

pub(crate) type InboxSender = Sender<Inbound, INBOX_SIZE>;

/// Handle to a slab inside a [`SlabGraph`]
///
/// Ids are never reused: once a slab is destroyed its id stays stale even
/// if the arena slot is recycled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SlabId {
    index: u32,
    generation: u32,
}

impl SlabId {
    pub const fn index(self) -> u32 {
        self.index
    }

    pub const fn generation(self) -> u32 {
        self.generation
    }
}

/// Message delivered through the graph inbox
#[derive(Debug)]
pub enum Inbound {
    /// Timer expiry of a ticker
    Tick { ticker: SlabId, epoch: u32, time: u32 },
    /// Event posted from another thread
    Stimulus { target: SlabId, event: Event },
}

#[derive(Debug)]
struct Node {
    slab: SlabSlot,
    children: Vec<SlabId>,
}

#[derive(Debug)]
struct Entry {
    generation: u32,
    node: Option<Node>,
}

/// Arena of slabs and the edges between them
#[derive(Debug)]
pub struct SlabGraph {
    entries: Vec<Entry>,
    free: Vec<u32>,
    len: usize,
    inbox: Receiver<Inbound, INBOX_SIZE>,
}

impl Default for SlabGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl SlabGraph {
    pub fn new() -> Self {
        let (_, inbox) = channel::channel();
        Self {
            entries: Vec::new(),
            free: Vec::new(),
            len: 0,
            inbox,
        }
    }

    /// Number of live slabs
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn contains(&self, id: SlabId) -> bool {
        self.node(id).is_some()
    }

    pub fn get(&self, id: SlabId) -> Option<&SlabSlot> {
        self.node(id).map(|node| &node.slab)
    }

    pub fn get_mut(&mut self, id: SlabId) -> Option<&mut SlabSlot> {
        self.node_mut(id).map(|node| &mut node.slab)
    }

    /// Children of `id` in stimulation order
    pub fn children(&self, id: SlabId) -> &[SlabId] {
        self.node(id).map_or(&[], |node| node.children.as_slice())
    }

    /// Add a slab with an empty fan-out list.
    ///
    /// Tickers start their timer here.
    pub fn insert(&mut self, slab: impl Into<SlabSlot>) -> Result<SlabId, SlabError> {
        let mut slab = slab.into();
        let id = self.next_id();

        if let SlabSlot::Ticker(ticker) = &mut slab {
            ticker.arm(TickTarget {
                inbox: self.inbox.sender(),
                ticker: id,
            })?;
        }

        log::debug!("insert {} slab {:?}", slab.kind().as_str(), id);
        let index = id.index as usize;
        if index == self.entries.len() {
            self.entries.push(Entry {
                generation: id.generation,
                node: None,
            });
        } else {
            self.free.pop();
        }
        self.entries[index].node = Some(Node {
            slab,
            children: Vec::new(),
        });
        self.len += 1;

        Ok(id)
    }

    /// Remove a slab from the graph.
    ///
    /// Edges from and to the slab are removed, its neighbors stay untouched.
    /// A ticker stops its timer. Returns the removed slab, or `None` for a
    /// stale id.
    pub fn destroy(&mut self, id: SlabId) -> Option<SlabSlot> {
        self.node(id)?;
        let entry = &mut self.entries[id.index as usize];
        let mut node = entry.node.take()?;
        entry.generation = entry.generation.wrapping_add(1);
        self.free.push(id.index);
        self.len -= 1;

        for parent in self.entries.iter_mut().filter_map(|entry| entry.node.as_mut()) {
            parent.children.retain(|&child| child != id);
        }

        if let SlabSlot::Ticker(ticker) = &mut node.slab {
            ticker.disarm();
        }

        log::debug!("destroy {} slab {:?}", node.slab.kind().as_str(), id);
        Some(node.slab)
    }

    /// Append `child` to the fan-out of `parent`.
    ///
    /// Connecting twice keeps a single edge. Stale ids are ignored.
    pub fn connect(&mut self, child: SlabId, parent: SlabId) {
        if !self.contains(child) {
            log::trace!("connect: stale child {child:?}");
            return;
        }
        let Some(node) = self.node_mut(parent) else {
            log::trace!("connect: stale parent {parent:?}");
            return;
        };
        if !node.children.contains(&child) {
            node.children.push(child);
        }
    }

    /// Remove the edge from `parent` to `child` if present
    pub fn disconnect(&mut self, child: SlabId, parent: SlabId) {
        let Some(node) = self.node_mut(parent) else {
            return;
        };
        if let Some(position) = node.children.iter().position(|&c| c == child) {
            node.children.remove(position);
        }
    }

    /// Feed one event into a slab.
    ///
    /// The event handed in is consumed: by the time this returns, the graph
    /// holds only the references slabs chose to keep. An event sent to a
    /// stale id is released right away.
    pub fn stimulate(&mut self, id: SlabId, event: Event) {
        let Some(node) = self.node_mut(id) else {
            log::trace!("stimulate: stale slab {id:?}");
            return;
        };

        match node.slab.stimulate(event) {
            Emit::None => {}
            Emit::One(event) => self.propagate(id, event),
            Emit::Two(first, second) => {
                self.propagate(id, first);
                self.propagate(id, second);
            }
        }

        // A reset suspends a ticker, its period starts over once the reset is through
        if let Some(SlabSlot::Ticker(ticker)) = self.get_mut(id) {
            ticker.resume();
        }
    }

    /// Stimulate every child of `id` in insertion order, then release `event`.
    ///
    /// The fan-out list is detached while it is being walked, so a cycle
    /// back into `id` ends at `id`.
    pub fn propagate(&mut self, id: SlabId, event: Event) {
        let Some(node) = self.node_mut(id) else {
            return;
        };
        let children = core::mem::take(&mut node.children);

        for &child in &children {
            self.stimulate(child, event.clone());
        }

        if let Some(node) = self.node_mut(id) {
            node.children = children;
        }
    }

    /// Get a handle for stimulating this graph from other threads
    pub fn stimulator(&self) -> Stimulator {
        Stimulator {
            inbox: self.inbox.sender(),
        }
    }

    /// Number of messages waiting in the inbox
    pub fn pending(&self) -> usize {
        self.inbox.len()
    }

    /// Deliver every queued tick and stimulus (non-blocking).
    ///
    /// Returns the number of delivered messages. Ticks of destroyed tickers
    /// and ticks queued before a ticker reset are dropped.
    pub fn process_pending(&mut self) -> usize {
        let mut delivered = 0;

        while let Ok(inbound) = self.inbox.try_receive() {
            match inbound {
                Inbound::Tick {
                    ticker,
                    epoch,
                    time,
                } => {
                    let current =
                        matches!(self.get(ticker), Some(SlabSlot::Ticker(t)) if t.accepts(epoch));
                    if !current {
                        log::trace!("dropping stale tick of {ticker:?}");
                        continue;
                    }
                    self.propagate(ticker, Event::tick(time));
                }
                Inbound::Stimulus { target, event } => self.stimulate(target, event),
            }
            delivered += 1;
        }

        delivered
    }

    /// Keep delivering inbox messages for `duration`.
    ///
    /// Returns the number of delivered messages.
    pub fn run_for(&mut self, duration: Duration) -> usize {
        let deadline = Instant::now() + duration;
        let mut delivered = 0;

        loop {
            delivered += self.process_pending();
            let now = Instant::now();
            if now >= deadline {
                return delivered;
            }
            std::thread::sleep(to_std(POLL_INTERVAL.min(deadline - now)));
        }
    }

    fn node(&self, id: SlabId) -> Option<&Node> {
        self.entries
            .get(id.index as usize)
            .filter(|entry| entry.generation == id.generation)
            .and_then(|entry| entry.node.as_ref())
    }

    fn node_mut(&mut self, id: SlabId) -> Option<&mut Node> {
        self.entries
            .get_mut(id.index as usize)
            .filter(|entry| entry.generation == id.generation)
            .and_then(|entry| entry.node.as_mut())
    }

    /// Id the next inserted slab will get
    #[allow(clippy::cast_possible_truncation)]
    fn next_id(&self) -> SlabId {
        match self.free.last() {
            Some(&index) => SlabId {
                index,
                generation: self.entries[index as usize].generation,
            },
            None => SlabId {
                index: self.entries.len() as u32,
                generation: 0,
            },
        }
    }
}

/// Cloneable handle posting stimuli into a [`SlabGraph`] inbox
///
/// The events are delivered on the next [`SlabGraph::process_pending`].
#[derive(Clone)]
pub struct Stimulator {
    inbox: InboxSender,
}

impl core::fmt::Debug for Stimulator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Stimulator").finish_non_exhaustive()
    }
}

impl Stimulator {
    /// Queue `event` for `target`.
    ///
    /// Returns the message back if the inbox is full.
    pub fn try_stimulate(&self, target: SlabId, event: Event) -> Result<(), TrySendError<Inbound>> {
        self.inbox.try_send(Inbound::Stimulus { target, event })
    }
}
