//! Legacy Japanese text encodings used by the portal.

use encoding_rs::{EUC_JP, SHIFT_JIS};
use tracing::warn;

/// Decodes an HTML page served as EUC-JP.
///
/// Malformed sequences become U+FFFD rather than failing the page.
#[must_use]
pub fn decode_page(bytes: &[u8]) -> String {
    let (text, _, had_errors) = EUC_JP.decode(bytes);
    if had_errors {
        warn!(len = bytes.len(), "page contained invalid EUC-JP sequences");
    }
    text.into_owned()
}

/// Re-encodes a Shift_JIS data file as UTF-8 bytes.
///
/// Malformed sequences become U+FFFD rather than dropping the file.
#[must_use]
pub fn normalize_payload(bytes: &[u8]) -> Vec<u8> {
    let (text, _, had_errors) = SHIFT_JIS.decode(bytes);
    if had_errors {
        warn!(len = bytes.len(), "payload contained invalid Shift_JIS sequences");
    }
    text.into_owned().into_bytes()
}
