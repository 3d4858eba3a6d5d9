use bytes::{BufMut, Bytes, BytesMut};
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::HTTP_VERSION;
use crate::http::response::Response;

/// Serializes a response to HTTP/1.1 wire format.
pub fn serialize_response(resp: &Response) -> Bytes {
    let mut buf = BytesMut::with_capacity(128 + resp.body.len());

    // Status line
    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase()
    );
    buf.put_slice(status_line.as_bytes());

    // Headers
    for (k, v) in &resp.headers {
        buf.put_slice(k.as_bytes());
        buf.put_slice(b": ");
        buf.put_slice(v.as_bytes());
        buf.put_slice(b"\r\n");
    }

    // Header/body separator
    buf.put_slice(b"\r\n");

    // Body
    buf.put_slice(&resp.body);

    buf.freeze()
}

/// Writes one serialized response to a sink, resuming after partial writes.
pub struct ResponseWriter {
    buffer: Bytes,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self {
            buffer: serialize_response(response),
            written: 0,
        }
    }

    /// The full wire bytes, including what was already written.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub fn is_done(&self) -> bool {
        self.written >= self.buffer.len()
    }

    pub async fn write_to<W>(&mut self, sink: &mut W) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        while self.written < self.buffer.len() {
            let n = sink.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("sink closed while writing response"));
            }

            self.written += n;
        }

        sink.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::response::Status;

    #[test]
    fn status_line_comes_first() {
        let resp = Response::builder(Status::new(404, "Gone")).build();
        let bytes = serialize_response(&resp);
        assert!(bytes.starts_with(b"HTTP/1.1 404 Gone\r\n"));
        assert!(bytes.ends_with(b"Content-Length: 0\r\n\r\n"));
    }
}
