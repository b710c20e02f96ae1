fn normalize(value: &str) -> Vec<char> {
    value
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

fn edit_distance(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

fn distance(input: &[char], candidate: &[char]) -> usize {
    if input == candidate {
        return 0;
    }
    let contains = |hay: &[char], needle: &[char]| {
        needle.len() <= hay.len() && hay.windows(needle.len()).any(|w| w == needle)
    };
    if contains(input, candidate) || contains(candidate, input) {
        return 1;
    }
    edit_distance(input, candidate)
}

fn tolerance(len: usize) -> usize {
    match len {
        0 => 0,
        1..=4 => 1,
        5..=8 => 2,
        _ => ((len as f32) * 0.35).floor().max(3.0) as usize,
    }
}

/// Closest candidates to `input`, best first, at most `limit` of them.
pub fn suggest(input: &str, candidates: &[String], limit: usize) -> Vec<String> {
    let needle = normalize(input);
    if needle.is_empty() {
        return Vec::new();
    }
    let allowed = tolerance(needle.len());

    let mut scored: Vec<(usize, &String)> = candidates
        .iter()
        .filter_map(|candidate| {
            let normalized = normalize(candidate);
            if normalized.is_empty() {
                return None;
            }
            let score = distance(&needle, &normalized);
            (score <= allowed).then_some((score, candidate))
        })
        .collect();
    scored.sort_by(|a, b| {
        a.0.cmp(&b.0)
            .then_with(|| a.1.len().cmp(&b.1.len()))
            .then_with(|| a.1.cmp(b.1))
    });
    scored.dedup_by(|a, b| a.1 == b.1);
    scored
        .into_iter()
        .take(limit.max(1))
        .map(|(_, candidate)| candidate.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engines() -> Vec<String> {
        ["postgresql", "mariadb", "mysql", "mongodb", "redis", "valkey"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn prefix_matches_rank_first() {
        assert_eq!(suggest("postgres", &engines(), 3), vec!["postgresql"]);
    }

    #[test]
    fn typos_within_tolerance_are_suggested() {
        assert_eq!(suggest("mongo-db", &engines(), 3), vec!["mongodb"]);
        assert_eq!(suggest("reddis", &engines(), 3), vec!["redis"]);
    }

    #[test]
    fn unrelated_input_yields_nothing() {
        assert!(suggest("oracle", &engines(), 3).is_empty());
        assert!(suggest("   ", &engines(), 3).is_empty());
    }
}
