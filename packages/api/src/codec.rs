//! # gRPC-web framing
//!
//! Unary gRPC-web bodies are a sequence of length-prefixed frames:
//!
//! ```text
//! +------+----------------+-----------------+
//! | flag | length (u32 BE)| payload         |
//! +------+----------------+-----------------+
//!   1 B        4 B          length bytes
//! ```
//!
//! | Flag | Frame |
//! |------|-------|
//! | `0x00` | Data frame: one encoded protobuf message |
//! | `0x80` | Trailer frame: HTTP/1-style `name: value\r\n` lines |
//!
//! A request carries exactly one data frame. A response carries at most one
//! data frame followed by a trailer frame holding `grpc-status` and, on
//! failure, a percent-encoded `grpc-message`. Servers may also answer
//! "trailers-only", putting the status in the HTTP headers and sending no
//! frames; [`check_status`] handles both places.
//!
//! Compressed frames (flag bit `0x01`) are never requested and are rejected.

use percent_encoding::percent_decode_str;

use crate::error::{ClientError, Result};

pub const DATA_FLAG: u8 = 0x00;
pub const TRAILER_FLAG: u8 = 0x80;
const COMPRESSED_FLAG: u8 = 0x01;
const HEADER_LEN: usize = 5;

/// Wrap a message in a data frame.
pub fn encode_frame(payload: &[u8]) -> Vec<u8> {
    encode_frame_with_flag(DATA_FLAG, payload)
}

pub fn encode_frame_with_flag(flag: u8, payload: &[u8]) -> Vec<u8> {
    let mut frame = Vec::with_capacity(HEADER_LEN + payload.len());
    frame.push(flag);
    frame.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    frame.extend_from_slice(payload);
    frame
}

/// Trailer metadata from a trailer frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trailers {
    entries: Vec<(String, String)>,
}

impl Trailers {
    pub fn parse(payload: &[u8]) -> Self {
        let text = String::from_utf8_lossy(payload);
        let entries = text
            .split("\r\n")
            .filter_map(|line| {
                let (name, value) = line.split_once(':')?;
                Some((name.trim().to_ascii_lowercase(), value.trim().to_string()))
            })
            .collect();
        Self { entries }
    }

    /// Case-insensitive lookup.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Fail when the trailers carry a non-zero `grpc-status`.
    pub fn check(&self) -> Result<()> {
        check_status(self.get("grpc-status"), self.get("grpc-message"))
    }
}

/// Decoded frames of a unary response.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frames {
    pub message: Option<Vec<u8>>,
    pub trailers: Trailers,
}

/// Split a response body into its data and trailer frames.
pub fn decode_frames(mut body: &[u8]) -> Result<Frames> {
    let mut frames = Frames::default();

    while !body.is_empty() {
        if body.len() < HEADER_LEN {
            return Err(ClientError::Protocol(format!(
                "truncated frame header ({} bytes)",
                body.len()
            )));
        }
        let flag = body[0];
        let len = u32::from_be_bytes([body[1], body[2], body[3], body[4]]) as usize;
        let rest = &body[HEADER_LEN..];
        if rest.len() < len {
            return Err(ClientError::Protocol(format!(
                "truncated frame: expected {len} bytes, got {}",
                rest.len()
            )));
        }
        let (payload, next) = rest.split_at(len);

        if flag & COMPRESSED_FLAG != 0 {
            return Err(ClientError::Protocol("compressed frames are not supported".to_string()));
        }
        if flag & TRAILER_FLAG != 0 {
            frames.trailers = Trailers::parse(payload);
        } else if frames.message.is_none() {
            frames.message = Some(payload.to_vec());
        } else {
            return Err(ClientError::Protocol("more than one message in a unary response".to_string()));
        }

        body = next;
    }

    Ok(frames)
}

/// Turn a `grpc-status` / `grpc-message` pair into a result.
///
/// A missing status is treated as success; an unparseable one as a protocol error.
pub fn check_status(status: Option<&str>, message: Option<&str>) -> Result<()> {
    let Some(status) = status else {
        return Ok(());
    };
    let code: i32 = status
        .trim()
        .parse()
        .map_err(|_| ClientError::Protocol(format!("invalid grpc-status {status:?}")))?;
    if code == 0 {
        return Ok(());
    }
    let message = message
        .map(|m| percent_decode_str(m).decode_utf8_lossy().into_owned())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("remote call failed with status {code}"));
    Err(ClientError::Status { code, message })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trailer_frame(text: &str) -> Vec<u8> {
        encode_frame_with_flag(TRAILER_FLAG, text.as_bytes())
    }

    #[test]
    fn test_encode_frame_header() {
        let frame = encode_frame(&[1, 2, 3]);
        assert_eq!(frame, vec![0, 0, 0, 0, 3, 1, 2, 3]);
    }

    #[test]
    fn test_decode_message_and_trailers() {
        let mut body = encode_frame(b"payload");
        body.extend(trailer_frame("grpc-status: 0\r\ngrpc-message: \r\n"));

        let frames = decode_frames(&body).unwrap();
        assert_eq!(frames.message.as_deref(), Some(&b"payload"[..]));
        assert_eq!(frames.trailers.get("GRPC-STATUS"), Some("0"));
        assert!(frames.trailers.check().is_ok());
    }

    #[test]
    fn test_empty_message_frame() {
        let mut body = encode_frame(&[]);
        body.extend(trailer_frame("grpc-status:0\r\n"));

        let frames = decode_frames(&body).unwrap();
        assert_eq!(frames.message, Some(Vec::new()));
    }

    #[test]
    fn test_error_status_in_trailers() {
        let body = trailer_frame("grpc-status: 16\r\ngrpc-message: invalid%20token\r\n");

        let frames = decode_frames(&body).unwrap();
        assert!(frames.message.is_none());
        let err = frames.trailers.check().unwrap_err();
        assert_eq!(err.status_code(), Some(16));
        assert_eq!(err.to_string(), "invalid token");
    }

    #[test]
    fn test_status_without_message() {
        let err = check_status(Some("14"), None).unwrap_err();
        assert_eq!(err.to_string(), "remote call failed with status 14");
    }

    #[test]
    fn test_missing_status_is_ok() {
        assert!(check_status(None, Some("ignored")).is_ok());
    }

    #[test]
    fn test_invalid_status() {
        let err = check_status(Some("abc"), None).unwrap_err();
        assert!(matches!(err, ClientError::Protocol(_)));
    }

    #[test]
    fn test_truncated_frames() {
        assert!(matches!(decode_frames(&[0, 0, 0]), Err(ClientError::Protocol(_))));

        let mut body = encode_frame(b"abcdef");
        body.truncate(8);
        assert!(matches!(decode_frames(&body), Err(ClientError::Protocol(_))));
    }

    #[test]
    fn test_compressed_frame_rejected() {
        let body = encode_frame_with_flag(COMPRESSED_FLAG, b"zz");
        assert!(matches!(decode_frames(&body), Err(ClientError::Protocol(_))));
    }

    #[test]
    fn test_two_messages_rejected() {
        let mut body = encode_frame(b"a");
        body.extend(encode_frame(b"b"));
        assert!(matches!(decode_frames(&body), Err(ClientError::Protocol(_))));
    }
}
