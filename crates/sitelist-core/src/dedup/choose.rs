//! Representative selection when two raw entries share a canonical key.

/// True if `candidate` should replace the current representative `current`.
///
/// A `.com` entry beats a non-`.com` one; with equal `.com` status the strictly
/// shorter entry wins, otherwise the current one stays. The `.com` check looks
/// at the raw line, path and query included, not at the canonical key.
pub fn prefer_candidate(candidate: &str, current: &str) -> bool {
    let candidate_com = candidate.ends_with(".com");
    let current_com = current.ends_with(".com");

    if candidate_com && !current_com {
        return true;
    }
    candidate_com == current_com && candidate.len() < current.len()
}
