//! File download through curl

use std::path::Path;

use super::Invocation;

/// `curl --silent --location --continue-at - --output <dest> <url>`
///
/// `--continue-at -` resumes a partially downloaded file left by an earlier run.
pub fn curl_download(curl: &str, url: &str, dest: &Path) -> Invocation {
	Invocation::new(
		curl,
		[
			"--silent".to_string(),
			"--location".to_string(),
			"--continue-at".to_string(),
			"-".to_string(),
			"--output".to_string(),
			dest.to_string_lossy().into_owned(),
			url.to_string(),
		],
	)
}
