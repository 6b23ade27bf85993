//! Threaded host handoff
//!
//! ```text
//!   host thread ──ControlFlags──►  logic thread (owns engine)
//!   host thread ◄──Snapshot──────  one per completed tick
//! ```
//!
//! Both directions are bounded channels. Dropping the input side stops the
//! logic thread; snapshots are whole copies so readers never see a tick in
//! progress.

use std::io;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, RecvError, SendError, Sender, bounded};
use log::{error, info};

use crate::sim::{ControlFlags, GameState, SignSource, SimulationEngine, Snapshot};

pub struct SimThread {
    input_tx: Sender<ControlFlags>,
    snapshot_rx: Receiver<Snapshot>,
    handle: JoinHandle<GameState>,
}

impl SimThread {
    /// Move `engine` onto a new logic thread
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn spawn<S>(
        mut engine: SimulationEngine<S>,
        dt_tick: f32,
        capacity: usize,
    ) -> io::Result<Self>
    where
        S: SignSource + Send + 'static,
    {
        assert!(capacity > 0, "Channel capacity must be positive");
        let (input_tx, input_rx) = bounded::<ControlFlags>(capacity);
        let (snapshot_tx, snapshot_rx) = bounded::<Snapshot>(capacity);

        let handle = thread::Builder::new()
            .name("sim-logic".into())
            .spawn(move || {
                info!("Logic thread started (dt {dt_tick:.4}s)");
                for flags in input_rx {
                    let snapshot = engine.step(&flags, dt_tick);
                    if snapshot_tx.send(snapshot).is_err() {
                        break;
                    }
                }
                info!("Logic thread stopping after {} ticks", engine.state().time_ticks);
                engine.state().clone()
            })?;

        Ok(Self {
            input_tx,
            snapshot_rx,
            handle,
        })
    }

    /// Queue the flags for the next tick; blocks while the queue is full
    pub fn send(&self, flags: ControlFlags) -> Result<(), SendError<ControlFlags>> {
        self.input_tx.send(flags)
    }

    /// Wait for the next completed tick
    pub fn recv(&self) -> Result<Snapshot, RecvError> {
        self.snapshot_rx.recv()
    }

    /// Newest snapshot already published, discarding older ones
    pub fn latest(&self) -> Option<Snapshot> {
        self.snapshot_rx.try_iter().last()
    }

    /// Stop the logic thread and return the final state, `None` if it panicked
    pub fn shutdown(self) -> Option<GameState> {
        let Self {
            input_tx,
            snapshot_rx,
            handle,
        } = self;
        drop(input_tx);
        drop(snapshot_rx);

        match handle.join() {
            Ok(state) => {
                info!("Logic thread joined");
                Some(state)
            }
            Err(e) => {
                error!("Logic thread panicked: {:?}", e);
                None
            }
        }
    }
}
