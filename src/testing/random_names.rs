use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

// Mixes one-, two- and three-byte characters plus line-ending bytes.
const ALPHABET: &[char] = &['a', 'z', 'Q', '0', ' ', '_', '\r', '\t', 'é', 'ß', '日', 'ж'];

/// A name of up to `max_chars` characters drawn from a small mixed alphabet.
pub fn random_name(rng: &mut StdRng, max_chars: usize) -> String {
    let n = rng.random_range(0..=max_chars);
    (0..n)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())])
        .collect()
}

pub fn random_names(count: usize, max_chars: usize, seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| random_name(&mut rng, max_chars)).collect()
}
