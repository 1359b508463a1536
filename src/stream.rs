//! Byte sinks and the streaming producer/consumer pair.
//!
//! A conversion pushes its output through [`ByteSink`] one byte at a time.
//! Buffered mode appends to an in-memory buffer; streaming mode feeds a
//! bounded channel drained by a [`ByteStream`] on the calling side while a
//! worker thread runs the conversion.

use std::io::{self, Read};
use std::sync::mpsc::{self, Receiver, SyncSender, TryRecvError};
use std::thread;

use tracing::debug;

/// Bound on bytes in flight between producer and consumer. A full queue
/// blocks the worker, keeping memory use independent of input size.
const QUEUE_CAPACITY: usize = 100;

/// Push interface consuming the converted output byte by byte.
pub(crate) trait ByteSink {
    fn put(&mut self, b: u8);

    /// Signal that the conversion is complete. Called exactly once, by the
    /// engine, after the final byte.
    fn finish(&mut self);

    fn put_str(&mut self, s: &str) {
        for &b in s.as_bytes() {
            self.put(b);
        }
    }

    fn put_char(&mut self, c: char) {
        let mut buf = [0u8; 4];
        self.put_str(c.encode_utf8(&mut buf));
    }
}

/// Direct in-memory sink for buffered conversions.
#[derive(Default)]
pub(crate) struct BufSink {
    bytes: Vec<u8>,
}

impl BufSink {
    pub(crate) fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl ByteSink for BufSink {
    fn put(&mut self, b: u8) {
        self.bytes.push(b);
    }

    fn finish(&mut self) {
        debug!(bytes = self.bytes.len(), "buffered conversion complete");
    }
}

/// Producer side of a streaming conversion. Closing happens once, in
/// `finish`, by dropping the sender; the paired [`ByteStream`] then reports
/// end of stream as soon as it has drained the queue.
pub(crate) struct QueueSink {
    tx: Option<SyncSender<u8>>,
}

impl ByteSink for QueueSink {
    fn put(&mut self, b: u8) {
        let tx = self.tx.as_ref().expect("byte stream written after close");
        // Blocks while the queue is full. If the consumer dropped its
        // ByteStream the channel is disconnected and the remaining output
        // has nowhere to go; the conversion just runs out quietly.
        let _ = tx.send(b);
    }

    fn finish(&mut self) {
        self.tx.take().expect("byte stream closed twice");
    }
}

/// Consumer side of a streaming conversion. Implements [`Read`]: bytes
/// arrive in production order, and `Ok(0)` means the producer has finished
/// and the queue is drained.
pub struct ByteStream {
    rx: Receiver<u8>,
    done: bool,
}

impl Read for ByteStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() || self.done {
            return Ok(0);
        }
        // Block for the first byte, then take whatever else is ready.
        match self.rx.recv() {
            Ok(b) => buf[0] = b,
            Err(_) => {
                self.done = true;
                return Ok(0);
            }
        }
        let mut n = 1;
        while n < buf.len() {
            match self.rx.try_recv() {
                Ok(b) => {
                    buf[n] = b;
                    n += 1;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.done = true;
                    break;
                }
            }
        }
        Ok(n)
    }
}

/// Launch a conversion on its own worker thread and hand back the read end.
pub(crate) fn spawn_producer<F>(produce: F) -> ByteStream
where
    F: FnOnce(&mut QueueSink) + Send + 'static,
{
    let (tx, rx) = mpsc::sync_channel(QUEUE_CAPACITY);
    thread::Builder::new()
        .name("romakana-worker".into())
        .spawn(move || {
            let mut sink = QueueSink { tx: Some(tx) };
            produce(&mut sink);
        })
        .expect("failed to spawn transliteration worker");
    ByteStream { rx, done: false }
}
