use std::sync::{Condvar, Mutex};

use anyhow::Result;
use log::trace;

use crate::pixel::Pixel;

/// Destination for completed rows. Rows arrive in strict index order, one
/// call per row.
pub trait RowSink {
    fn write_row(&mut self, row: &[Pixel]) -> Result<()>;
}

struct State<S> {
    cursor: usize,
    sink: S,
    error: Option<anyhow::Error>,
}

/// Serialization gate in front of a [`RowSink`].
///
/// Workers finish rows in any order, but a row is transmitted only once every
/// lower-indexed row has been. The cursor and the sink live under one mutex,
/// so the turn check and the transmission are atomic with respect to cursor
/// advances; every advance notifies all waiters, which guarantees the worker
/// holding the lowest pending index eventually runs.
pub struct OrderedWriter<S> {
    state: Mutex<State<S>>,
    turn: Condvar,
}

impl<S: RowSink> OrderedWriter<S> {
    pub fn new(sink: S) -> Self {
        Self {
            state: Mutex::new(State {
                cursor: 0,
                sink,
                error: None,
            }),
            turn: Condvar::new(),
        }
    }

    /// Block until it is row `y`'s turn, then transmit it and advance the
    /// cursor.
    ///
    /// If an earlier transmission failed, the row is dropped but the cursor
    /// still advances so waiting workers drain instead of deadlocking; the
    /// first error is surfaced by [`OrderedWriter::finish`].
    pub fn write(&self, y: usize, row: &[Pixel]) {
        let mut state = self.state.lock().unwrap();
        while state.cursor != y {
            state = self.turn.wait(state).unwrap();
        }

        if state.error.is_none() {
            if let Err(error) = state.sink.write_row(row) {
                state.error = Some(error);
            }
        }

        state.cursor += 1;
        trace!("row {} written", y);

        self.turn.notify_all();
    }

    /// Tear down the gate, handing back the sink or the first error recorded
    /// while writing.
    pub fn finish(self) -> Result<S> {
        let state = self.state.into_inner().unwrap();
        match state.error {
            Some(error) => Err(error),
            None => Ok(state.sink),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use anyhow::{bail, Result};

    use super::RowSink;
    use crate::pixel::Pixel;

    /// Records every row it receives.
    #[derive(Default)]
    pub struct VecSink {
        pub rows: Vec<Vec<Pixel>>,
    }

    impl RowSink for VecSink {
        fn write_row(&mut self, row: &[Pixel]) -> Result<()> {
            self.rows.push(row.to_vec());
            Ok(())
        }
    }

    /// Fails every write.
    pub struct FailingSink;

    impl RowSink for FailingSink {
        fn write_row(&mut self, _row: &[Pixel]) -> Result<()> {
            bail!("sink failure")
        }
    }
}
