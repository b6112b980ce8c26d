//! Ordering and selection of generated puns for display.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::types::{PunCandidate, Quality};

/// Sort key: higher quality first, then shorter text.
fn sort_key(pun: &PunCandidate) -> i64 {
    -10_000 * pun.quality.as_u8() as i64 + pun.text.chars().count() as i64
}

/// Best puns first. Stable, so equal keys keep generation order.
pub fn sort_puns(puns: &mut [PunCandidate]) {
    puns.sort_by_key(sort_key);
}

/// Drop candidates below `min`.
pub fn filter_min_quality(puns: Vec<PunCandidate>, min: Quality) -> Vec<PunCandidate> {
    puns.into_iter().filter(|p| p.quality >= min).collect()
}

/// Shuffle into a random order. A seed gives a reproducible order.
pub fn shuffle_puns(puns: &mut [PunCandidate], seed: Option<u64>) {
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    puns.shuffle(&mut rng);
}

/// Keep at most `max` candidates; 0 means no limit.
pub fn truncate_puns(puns: &mut Vec<PunCandidate>, max: usize) {
    if max > 0 {
        puns.truncate(max);
    }
}
