use super::embedding::TextEncoder;

/// Semantic similarity between two strings via their embeddings.
///
/// Encodes both inputs with the shared encoder and returns their cosine
/// similarity in [-1, 1]. An empty or otherwise degenerate input whose
/// embedding has zero magnitude scores 0.0 rather than NaN.
pub fn similarity(encoder: &dyn TextEncoder, text_a: &str, text_b: &str) -> f32 {
    let a = encoder.encode(text_a);
    let b = encoder.encode(text_b);
    cosine_similarity(&a, &b)
}

/// Cosine similarity between two f32 vectors.
/// Returns 0.0 if either vector has zero magnitude.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let mag_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let mag_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }

    (dot / (mag_a * mag_b)).clamp(-1.0, 1.0)
}
