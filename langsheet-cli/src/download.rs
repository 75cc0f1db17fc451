//! Remote workbook retrieval.
//!
//! Downloads are fully buffered and signature-checked before any file is
//! written, so a failed transfer never leaves a partial artifact behind.
//! Redirects are followed (up to 10); failed transfers are not retried.

use std::io::Read;
use std::time::Duration;

use langsheet::{Error, workbook};

const MAX_REDIRECTS: u32 = 10;
const TIMEOUT: Duration = Duration::from_secs(30);
const MAX_PAYLOAD_BYTES: u64 = 64 * 1024 * 1024;

/// Whether an import source should be treated as a URL rather than a path.
pub fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Fetches a workbook payload from `url` and validates it.
///
/// Fails with [`Error::Download`] on transport errors, non-2xx responses and
/// redirect loops, with [`Error::GotHtmlInsteadOfFile`] when the server serves
/// a markup document, and with [`Error::InvalidFileSignature`] when the
/// payload is not an XLSX workbook.
pub fn fetch_workbook(url: &str) -> Result<Vec<u8>, Error> {
    let agent = ureq::AgentBuilder::new()
        .redirects(MAX_REDIRECTS)
        .timeout(TIMEOUT)
        .build();

    let response = agent.get(url).call().map_err(|error| match error {
        ureq::Error::Status(code, _) => {
            Error::download_error(format!("HTTP {code} from `{url}`"))
        }
        ureq::Error::Transport(transport) => Error::download_error(transport.to_string()),
    })?;

    let content_type = response.content_type().to_ascii_lowercase();
    if content_type.contains("text/html") || content_type.contains("application/xhtml") {
        return Err(Error::GotHtmlInsteadOfFile);
    }

    let mut payload = Vec::new();
    response
        .into_reader()
        .take(MAX_PAYLOAD_BYTES)
        .read_to_end(&mut payload)
        .map_err(Error::Io)?;

    workbook::verify_xlsx_signature(&payload)?;
    Ok(payload)
}
