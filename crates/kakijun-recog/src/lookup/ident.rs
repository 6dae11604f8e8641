//! Reference identification

use kakijun_core::{ChunkSignature, Drawing, normalize};

use super::set::ReferenceSet;
use super::types::BestMatch;
use crate::compare::{CompareOptions, compare_normalized};
use crate::error::{RecogError, RecogResult};

/// Score every reference of the candidate's stroke-count group
///
/// Results are in group (insertion) order.
fn score_group<'a>(
    candidate: &Drawing,
    references: &'a ReferenceSet,
    options: &CompareOptions,
) -> RecogResult<Vec<BestMatch<'a>>> {
    options.validate()?;
    if candidate.is_empty() {
        return Err(RecogError::EmptyDrawing);
    }
    let norm_opts = options.normalize_options();
    let candidate_norm = normalize(candidate, &norm_opts)?;
    let group = references.group(candidate.stroke_count());
    tracing::debug!(
        stroke_count = candidate.stroke_count(),
        group_size = group.len(),
        "scanning reference group"
    );

    group
        .iter()
        .map(|reference| -> RecogResult<BestMatch<'a>> {
            let reference_norm = normalize(&reference.drawing, &norm_opts)?;
            let score = compare_normalized(&reference_norm, &candidate_norm, options)?;
            tracing::trace!(label = %reference.label, score, "scored reference");
            Ok(BestMatch { reference, score })
        })
        .collect()
}

/// Find the reference closest to a candidate drawing
///
/// Only references with the candidate's stroke count are considered. The
/// lowest [`compare`](crate::compare::compare) score wins; on a tie the
/// reference inserted first is kept.
///
/// # Returns
///
/// `None` if no reference has the candidate's stroke count.
///
/// # Errors
///
/// Returns [`RecogError::EmptyDrawing`] for a candidate without strokes
/// and a core error for a malformed candidate.
pub fn find_best_match<'a>(
    candidate: &Drawing,
    references: &'a ReferenceSet,
    options: &CompareOptions,
) -> RecogResult<Option<BestMatch<'a>>> {
    let scored = score_group(candidate, references, options)?;
    let mut best: Option<BestMatch<'a>> = None;
    for m in scored {
        if best.is_none_or(|b| m.score < b.score) {
            best = Some(m);
        }
    }
    if let Some(b) = &best {
        tracing::debug!(label = %b.reference.label, score = b.score, "best match");
    }
    Ok(best)
}

/// Rank the references of the candidate's stroke-count group
///
/// # Arguments
///
/// * `candidate` - The drawing to identify
/// * `references` - Reference set to search
/// * `options` - Comparison options
/// * `limit` - Maximum number of results
///
/// # Returns
///
/// Up to `limit` matches, closest first. Equal scores keep insertion
/// order, so the first entry is the one [`find_best_match`] returns.
pub fn rank_matches<'a>(
    candidate: &Drawing,
    references: &'a ReferenceSet,
    options: &CompareOptions,
    limit: usize,
) -> RecogResult<Vec<BestMatch<'a>>> {
    let mut scored = score_group(candidate, references, options)?;
    scored.sort_by(|a, b| a.score.total_cmp(&b.score));
    scored.truncate(limit);
    Ok(scored)
}

/// Find the closest reference by chunk signature
///
/// The coarse alternative to [`find_best_match`]: drawings are reduced to
/// [`ChunkSignature`]s with `chunk_count` chunks per stroke and compared
/// by mean absolute difference. References with a stroke shorter than
/// `chunk_count` points are skipped.
///
/// # Errors
///
/// Returns [`RecogError::EmptyDrawing`] for a candidate without strokes
/// and a core error if the candidate cannot be chunked.
pub fn find_best_match_by_signature<'a>(
    candidate: &Drawing,
    references: &'a ReferenceSet,
    chunk_count: usize,
) -> RecogResult<Option<BestMatch<'a>>> {
    if candidate.is_empty() {
        return Err(RecogError::EmptyDrawing);
    }
    let signature = ChunkSignature::from_drawing(candidate, chunk_count)?;
    let group = references.group(candidate.stroke_count());
    tracing::debug!(
        stroke_count = candidate.stroke_count(),
        group_size = group.len(),
        chunk_count,
        "scanning reference group by signature"
    );

    let mut best: Option<BestMatch<'a>> = None;
    for reference in group {
        let other = match ChunkSignature::from_drawing(&reference.drawing, chunk_count) {
            Ok(sig) => sig,
            Err(e) => {
                tracing::warn!(label = %reference.label, error = %e, "skipping reference");
                continue;
            }
        };
        let score = signature.mean_abs_difference(&other)?;
        if best.is_none_or(|b| score < b.score) {
            best = Some(BestMatch { reference, score });
        }
    }
    Ok(best)
}
