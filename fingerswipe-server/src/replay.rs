//! Replay of recorded observation streams (JSON lines)

use std::io::BufRead;

use crate::dispatch::ActionSink;
use crate::driver::FrameDriver;
use crate::error::DriverError;
use crate::frame::ObservationFrame;

/// Totals for one replay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayStats {
    pub frames: usize,
    pub skipped: usize,
    pub swipes: usize,
}

/// Feed every line of `reader` through the driver.
///
/// Blank lines are ignored; malformed lines are logged and skipped. Only
/// read and sink errors stop the replay.
pub fn replay<R, S>(
    mut reader: R,
    driver: &mut FrameDriver,
    sink: &mut S,
) -> Result<ReplayStats, DriverError>
where
    R: BufRead,
    S: ActionSink,
{
    let mut stats = ReplayStats::default();
    let mut buf = Vec::new();
    let mut line = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line += 1;

        // Raw bytes, so a line that is not UTF-8 is skipped like any other
        let trimmed = buf.trim_ascii();
        if trimmed.is_empty() {
            continue;
        }

        let frame = match ObservationFrame::parse(trimmed) {
            Ok(frame) => frame,
            Err(source) => {
                let e = DriverError::Frame { line, source };
                log::warn!("skipping {}", e);
                stats.skipped += 1;
                continue;
            }
        };

        stats.frames += 1;
        stats.swipes += driver.drive(&frame, sink)?;
    }

    log::info!(
        "replayed {} frames ({} skipped), {} swipes",
        stats.frames,
        stats.skipped,
        stats.swipes
    );
    Ok(stats)
}
