//! Candidate tile spacings
//!
//! Spacings are proposed around `dimension / divisor`, ranked by the mean score of
//! the cut lines they imply and then thinned: neighbouring candidates collapse onto
//! their middle value and multiples of a smaller survivor are dropped.

use std::collections::BTreeSet;

/// A spacing and the mean score of its cut lines
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpacingCandidate {
    /// Distance between cut lines
    pub spacing: usize,
    /// Mean cut score
    pub score: f64,
}

/// Spacings worth judging for an image side of length `dimension`
///
/// For each divisor from 2 while `dimension / divisor >= min_tile`, the rounded
/// quotient and its neighbours within `halo` are proposed if they lie in
/// `[2, dimension - 1)`.
pub fn possible_spacings(dimension: usize, min_tile: usize, halo: usize) -> BTreeSet<usize> {
    let mut spacings = BTreeSet::new();
    let halo = halo as i64;
    let mut divisor = 2;
    while divisor <= dimension && dimension / divisor >= min_tile.max(1) {
        let center = (2 * dimension + divisor) / (2 * divisor);
        for delta in -halo..=halo {
            let Ok(candidate) = usize::try_from(center as i64 + delta) else {
                continue;
            };
            if candidate >= 2 && candidate < dimension.saturating_sub(1) {
                spacings.insert(candidate);
            }
        }
        divisor += 1;
    }
    spacings
}

/// Score every spacing, best first; ties keep the smaller spacing first
pub fn rank_spacings(
    spacings: &BTreeSet<usize>,
    mut score: impl FnMut(usize) -> f64,
) -> Vec<SpacingCandidate> {
    let mut ranked: Vec<SpacingCandidate> = spacings
        .iter()
        .map(|&spacing| SpacingCandidate {
            spacing,
            score: score(spacing),
        })
        .collect();
    ranked.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.spacing.cmp(&b.spacing))
    });
    ranked
}

/// Spacings scoring within `fraction` of the best finite score
///
/// For a positive best score this keeps scores `>= fraction * best`; the same
/// margin `(1 - fraction) * |best|` applies below a negative best.
pub fn retain_best(ranked: &[SpacingCandidate], fraction: f64) -> BTreeSet<usize> {
    let Some(best) = ranked
        .iter()
        .map(|candidate| candidate.score)
        .filter(|score| score.is_finite())
        .max_by(f64::total_cmp)
    else {
        return BTreeSet::new();
    };
    let threshold = (1.0 - fraction).mul_add(-best.abs(), best);
    ranked
        .iter()
        .filter(|candidate| candidate.score.is_finite() && candidate.score >= threshold)
        .map(|candidate| candidate.spacing)
        .collect()
}

/// Collapse runs of spacings closer than `halo + 1` onto their middle and drop multiples
pub fn thin_out(spacings: &BTreeSet<usize>, halo: usize) -> BTreeSet<usize> {
    let mut runs: Vec<Vec<usize>> = Vec::new();
    for &spacing in spacings {
        match runs.last_mut() {
            Some(run) if run.last().is_some_and(|&last| spacing - last <= halo + 1) => {
                run.push(spacing);
            }
            _ => runs.push(vec![spacing]),
        }
    }

    let mut kept = BTreeSet::new();
    for run in runs {
        let Some(&middle) = run.get(run.len() / 2).filter(|&&middle| middle > 0) else {
            continue;
        };
        if kept.iter().all(|&smaller: &usize| middle % smaller != 0) {
            kept.insert(middle);
        }
    }
    kept
}
