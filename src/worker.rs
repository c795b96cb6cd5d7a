use anyhow::Result;
use log::debug;

use crate::render::Settings;
use crate::scheduler::RowScheduler;
use crate::writer::{OrderedWriter, RowSink};

/// Render every row of the frame using a fixed pool of `workers` threads,
/// streaming rows into `sink` in strictly increasing index order.
///
/// Each worker loops claim → render → ordered write until the scheduler is
/// exhausted. Rendering happens outside any lock; a worker whose row is not
/// yet due blocks in [`OrderedWriter::write`] while earlier rows are still
/// being rendered by other threads. That wait is expected load imbalance,
/// not an error.
pub fn render_image<S>(settings: &Settings, workers: usize, sink: S) -> Result<S>
where
    S: RowSink + Send,
{
    let scheduler = RowScheduler::new(settings.size.height as usize);
    let writer = OrderedWriter::new(sink);

    crossbeam::scope(|scope| {
        for id in 0..workers {
            let scheduler = &scheduler;
            let writer = &writer;
            scope.spawn(move |_| {
                let mut rendered = 0;
                while let Some(y) = scheduler.claim() {
                    let row = settings.render_row(y as u32);
                    writer.write(y, &row);
                    rendered += 1;
                }
                debug!("worker {} done after {} rows", id, rendered);
            });
        }
    })
    .expect("worker thread panicked");

    writer.finish()
}
