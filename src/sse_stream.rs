//! Stream adapter that splits a streamed response body into newline-delimited frames.

use crate::Error;
use futures_util::{Stream, StreamExt};
use std::collections::VecDeque;
use std::pin::Pin;
use std::task::{ready, Context, Poll};

/// Upper bound on a single buffered frame.
const MAX_FRAME_BYTES: usize = 8 * 1024 * 1024;

/// A stream adapter that yields one `String` per line of the byte stream.
///
/// Raw bytes are buffered until a `\n` arrives, so both multi-byte UTF-8
/// sequences and whole frames that straddle chunk boundaries are reassembled
/// before decoding. Invalid UTF-8 is replaced with U+FFFD rather than failing.
pub struct FrameStream<S> {
    /// The underlying byte stream
    inner: S,
    /// Bytes of the frame currently being received
    buffer: Vec<u8>,
    /// Decoded frames ready to be yielded
    frames: VecDeque<String>,
    finished: bool,
}

impl<S> FrameStream<S> {
    pub fn new(stream: S) -> Self {
        Self {
            inner: stream,
            buffer: Vec::new(),
            frames: VecDeque::new(),
            finished: false,
        }
    }

    /// Move every complete line out of the buffer.
    fn split_buffer(&mut self) {
        let mut start = 0;

        while let Some(pos) = memchr::memchr(b'\n', &self.buffer[start..]) {
            let end = start + pos;
            self.frames.push_back(Self::decode(&self.buffer[start..end]));
            start = end + 1;
        }

        if start > 0 {
            self.buffer.drain(..start);
        }
    }

    fn decode(line: &[u8]) -> String {
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        String::from_utf8_lossy(line).into_owned()
    }
}

impl<S, E> Stream for FrameStream<S>
where
    S: Stream<Item = Result<bytes::Bytes, E>> + Unpin,
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    type Item = Result<String, Error>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        loop {
            if let Some(frame) = self.frames.pop_front() {
                return Poll::Ready(Some(Ok(frame)));
            }
            if self.finished {
                return Poll::Ready(None);
            }

            let chunk = match ready!(self.inner.poll_next_unpin(cx)) {
                Some(Ok(chunk)) => chunk,
                Some(Err(e)) => {
                    self.finished = true;
                    self.buffer.clear();
                    return Poll::Ready(Some(Err(Error::streaming(format!(
                        "Stream error: {}",
                        e.into()
                    )))));
                }
                None => {
                    // The last frame may arrive without a trailing newline.
                    self.finished = true;
                    if !self.buffer.is_empty() {
                        let rest = std::mem::take(&mut self.buffer);
                        let frame = Self::decode(&rest);
                        return Poll::Ready(Some(Ok(frame)));
                    }
                    return Poll::Ready(None);
                }
            };

            self.buffer.extend_from_slice(&chunk);
            self.split_buffer();

            if self.buffer.len() > MAX_FRAME_BYTES {
                self.finished = true;
                self.buffer.clear();
                return Poll::Ready(Some(Err(Error::streaming(
                    "frame exceeded maximum size",
                ))));
            }
        }
    }
}

/// Extension trait to add frame splitting to byte streams.
pub trait FrameStreamExt: Stream {
    /// Split this byte stream into newline-delimited frames.
    fn frames(self) -> FrameStream<Self>
    where
        Self: Sized,
    {
        FrameStream::new(self)
    }
}

impl<S: Stream> FrameStreamExt for S {}
