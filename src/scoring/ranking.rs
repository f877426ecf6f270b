//! Deterministic top-K selection.

/// Returns the indices of the `k` highest scores, in descending score order.
///
/// Repeated-max scan: each round picks the lowest index achieving the maximum
/// among not-yet-picked indices, so equal scores rank in input order
/// (leftmost tie-break). `k` is clamped to the number of scores. O(K·N),
/// which is fine for the small result sets this engine handles.
pub fn select_top(scores: &[f64], k: usize) -> Vec<usize> {
    let k = k.min(scores.len());
    let mut picked = vec![false; scores.len()];
    let mut ranked = Vec::with_capacity(k);

    for _ in 0..k {
        let mut best: Option<usize> = None;
        for (index, &score) in scores.iter().enumerate() {
            if picked[index] {
                continue;
            }
            match best {
                Some(current) if scores[current] >= score => {}
                _ => best = Some(index),
            }
        }
        if let Some(index) = best {
            picked[index] = true;
            ranked.push(index);
        }
    }

    ranked
}
