/// Indices of the `k` highest probabilities, highest first
///
/// Equal probabilities keep class order. When there are fewer than `k`
/// classes every index is returned.
pub fn top_k_indices(probabilities: &[f64], k: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..probabilities.len()).collect();

    // Stable sort keeps the classifier's order for ties
    indices.sort_by(|&a, &b| probabilities[b].total_cmp(&probabilities[a]));

    indices.truncate(k);
    indices
}
