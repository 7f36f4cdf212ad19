#![forbid(unsafe_code)]

use serde_json::Value;
use std::io::{BufRead, Write};

const MAX_CONTENT_LENGTH_BYTES: usize = 16 * 1024 * 1024;

/// How messages are delimited on the transport. Fixed by the first message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum StdioMode {
    NewlineJson,
    ContentLength,
}

pub(super) fn detect_mode_from_first_line(line: &str) -> Option<StdioMode> {
    let trimmed = line.trim_start();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return Some(StdioMode::NewlineJson);
    }

    // Some clients send Content-Type before Content-Length.
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("content-length:") || lower.starts_with("content-type:") {
        return Some(StdioMode::ContentLength);
    }

    None
}

/// Headers of one `Content-Length` frame. Only the length is kept.
#[derive(Debug, Default)]
struct FrameHeaders {
    content_length: Option<usize>,
}

impl FrameHeaders {
    /// Records one header line. Returns `false` on the blank line that ends
    /// the block.
    fn accept(&mut self, line: &str) -> bool {
        let line = line.trim();
        if line.is_empty() {
            return false;
        }
        if self.content_length.is_none() {
            self.content_length = line
                .split_once(':')
                .filter(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
                .and_then(|(_, value)| value.trim().parse().ok());
        }
        true
    }

    fn body_len(&self) -> std::io::Result<usize> {
        match self.content_length {
            None => Err(invalid_frame("frame has no Content-Length header")),
            Some(len) if len > MAX_CONTENT_LENGTH_BYTES => Err(invalid_frame(&format!(
                "Content-Length {len} is above the {MAX_CONTENT_LENGTH_BYTES} byte limit"
            ))),
            Some(len) => Ok(len),
        }
    }
}

fn invalid_frame(message: &str) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::InvalidData, message.to_string())
}

/// Reads the rest of a header block whose first line is `first_header`, then
/// the body. `Ok(None)` means the peer closed mid-frame.
pub(super) fn read_content_length_frame(
    reader: &mut impl BufRead,
    first_header: String,
) -> std::io::Result<Option<Vec<u8>>> {
    let mut headers = FrameHeaders::default();
    let mut line = first_header;
    while headers.accept(&line) {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
    }

    let mut body = vec![0u8; headers.body_len()?];
    reader.read_exact(&mut body)?;
    Ok(Some(body))
}

pub(super) fn write_message(
    writer: &mut impl Write,
    mode: StdioMode,
    resp: &Value,
) -> std::io::Result<()> {
    let body = serde_json::to_vec(resp)?;
    match mode {
        StdioMode::NewlineJson => {
            writer.write_all(&body)?;
            writer.write_all(b"\n")?;
        }
        StdioMode::ContentLength => {
            write!(writer, "Content-Length: {}\r\n\r\n", body.len())?;
            writer.write_all(&body)?;
        }
    }
    writer.flush()
}
