//! UDP observation listener
//!
//! Receives one [`ObservationFrame`] per datagram, typically from a landmark
//! detector running in another process, and drives the engine as frames
//! arrive. Stops on Ctrl-C.

use std::net::SocketAddr;

use tokio::net::UdpSocket;

use crate::dispatch::ActionSink;
use crate::driver::FrameDriver;
use crate::error::DriverError;
use crate::frame::ObservationFrame;

/// Largest datagram accepted; a frame of 21 hand landmarks is well under 2 KiB
const MAX_DATAGRAM: usize = 65536;

pub async fn bind(addr: SocketAddr) -> Result<UdpSocket, DriverError> {
    let socket = UdpSocket::bind(addr).await?;
    log::info!("listening for observation frames on {}", socket.local_addr()?);
    Ok(socket)
}

/// Drive the engine from datagrams until Ctrl-C.
pub async fn listen<S: ActionSink>(
    socket: UdpSocket,
    driver: &mut FrameDriver,
    sink: &mut S,
) -> Result<(), DriverError> {
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);
    let mut buf = vec![0u8; MAX_DATAGRAM];

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                log::info!(
                    "shutting down after {} frames, {} swipes",
                    driver.frames(),
                    driver.swipes()
                );
                return Ok(());
            }
            result = receive_frame(&socket, &mut buf) => {
                if let Some(frame) = result? {
                    driver.drive(&frame, sink)?;
                }
            }
        }
    }
}

/// Receive one datagram. Malformed frames are logged and yield `None`.
pub async fn receive_frame(
    socket: &UdpSocket,
    buf: &mut [u8],
) -> Result<Option<ObservationFrame>, DriverError> {
    let (len, from) = socket.recv_from(buf).await?;

    match ObservationFrame::parse(&buf[..len]) {
        Ok(frame) => {
            log::trace!("{}: frame with {} points", from, frame.points.len());
            Ok(Some(frame))
        }
        Err(e) => {
            log::warn!("{}: malformed observation frame: {}", from, e);
            Ok(None)
        }
    }
}
