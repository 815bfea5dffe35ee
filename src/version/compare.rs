// modver-rs: Starsector mod metadata and update checker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Segment-wise version comparison used by the update check.
//!
//! ```text
//! "0.65.2a-RC1"
//!   release = "0.65.2a"   rc = "RC1" -> 1
//!
//! release equal?  --yes-->  remote.rc > local.rc
//!       | no
//!       v
//! walk "." segments while equal
//!   first difference: pad both to 3 chars with '0', compare as strings
//!                     "6" -> "600" < "650" <- "65"
//!   all equal:        more segments wins ("1.2.3" > "1.2")
//! ```
//!
//! This is not semver and not a total order. Known limitations:
//! - segments longer than [`SEGMENT_WIDTH`] are not truncated, so `"1000"`
//!   sorts below `"999"`;
//! - segments that pad to the same text (`"6"` and `"60"`) are "not newer"
//!   in both directions;
//! - malformed inputs can produce non-transitive results.
//!
//! Existing published mod versions rely on this ordering.

/// Width each differing segment is right-padded to before comparison.
pub const SEGMENT_WIDTH: usize = 3;

/// Whether `remote` is a newer version than `local`.
///
/// Returns `false` when either side is empty: missing information never
/// reports an update.
#[must_use]
pub fn is_newer(local: &str, remote: &str) -> bool {
    let (local, remote) = (local.trim(), remote.trim());
    if local.is_empty() || remote.is_empty() {
        return false;
    }

    let (local_release, local_rc) = split_release(local);
    let (remote_release, remote_rc) = split_release(remote);

    if local_release == remote_release {
        return release_candidate(remote_rc) > release_candidate(local_rc);
    }

    let local_segments: Vec<&str> = local_release.split('.').collect();
    let remote_segments: Vec<&str> = remote_release.split('.').collect();

    for (local_segment, remote_segment) in local_segments.iter().zip(&remote_segments) {
        if local_segment != remote_segment {
            return pad_segment(remote_segment) > pad_segment(local_segment);
        }
    }

    remote_segments.len() > local_segments.len()
}

/// Split on the first `-` into release part and release-candidate part.
pub(super) fn split_release(version: &str) -> (&str, &str) {
    version.split_once('-').unwrap_or((version, "0"))
}

/// Digits of the release-candidate part as an integer, `0` if there are none.
pub(super) fn release_candidate(part: &str) -> u64 {
    let digits: String = part.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        0
    } else {
        digits.parse().unwrap_or(u64::MAX)
    }
}

pub(super) fn pad_segment(segment: &str) -> String {
    format!("{segment:0<width$}", width = SEGMENT_WIDTH)
}
