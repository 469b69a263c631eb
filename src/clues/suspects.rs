use std::collections::HashMap;

pub const DEFAULT_BUCKETS: usize = 16;

struct Link {
    clue: String,
    suspect: String,
}

/// Clue -> suspect table. Fixed bucket array, keys hashed by the sum of
/// their bytes, collisions chained inside the bucket.
pub struct SuspectTable {
    buckets: Vec<Vec<Link>>,
}

impl Default for SuspectTable {
    fn default() -> Self {
        Self::with_buckets(DEFAULT_BUCKETS)
    }
}

impl SuspectTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// `count` is clamped to at least one bucket.
    pub fn with_buckets(count: usize) -> Self {
        let mut buckets = Vec::new();
        buckets.resize_with(count.max(1), Vec::new);
        SuspectTable { buckets }
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn bucket_of(&self, clue: &str) -> usize {
        let sum = clue
            .bytes()
            .fold(0usize, |acc, b| acc.wrapping_add(usize::from(b)));
        sum % self.buckets.len()
    }

    /// Records that `clue` points to `suspect`. Returns the suspect it used to
    /// point to, if that was someone else.
    pub fn link(&mut self, clue: &str, suspect: &str) -> Option<String> {
        let index = self.bucket_of(clue);
        let chain = &mut self.buckets[index];

        if let Some(existing) = chain.iter_mut().find(|l| l.clue == clue) {
            if existing.suspect == suspect {
                return None;
            }
            return Some(std::mem::replace(&mut existing.suspect, suspect.to_string()));
        }

        chain.push(Link {
            clue: clue.to_string(),
            suspect: suspect.to_string(),
        });
        None
    }

    pub fn suspect_for(&self, clue: &str) -> Option<&str> {
        self.buckets[self.bucket_of(clue)]
            .iter()
            .find(|l| l.clue == clue)
            .map(|l| l.suspect.as_str())
    }

    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every suspect with the clues pointing to them, both sorted.
    pub fn associations(&self) -> Vec<(&str, Vec<&str>)> {
        let mut by_suspect: HashMap<&str, Vec<&str>> = HashMap::new();
        for link in self.buckets.iter().flatten() {
            by_suspect
                .entry(link.suspect.as_str())
                .or_default()
                .push(link.clue.as_str());
        }

        let mut listed: Vec<(&str, Vec<&str>)> = by_suspect.into_iter().collect();
        for (_, clues) in &mut listed {
            clues.sort();
        }
        listed.sort();
        listed
    }

    /// The suspect named by the most `collected` clues, with that count.
    /// Ties go to the alphabetically first name.
    pub fn most_likely<'a, I>(&self, collected: I) -> Option<(&str, usize)>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut tally: HashMap<&str, usize> = HashMap::new();
        for clue in collected {
            if let Some(suspect) = self.suspect_for(clue) {
                *tally.entry(suspect).or_default() += 1;
            }
        }

        tally
            .into_iter()
            .max_by(|(a_name, a_count), (b_name, b_count)| {
                a_count.cmp(b_count).then_with(|| b_name.cmp(a_name))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_and_looks_up() {
        let mut table = SuspectTable::new();
        assert_eq!(table.link("Faca", "Cozinheira"), None);
        assert_eq!(table.link("Luva", "Mordomo"), None);

        assert_eq!(table.suspect_for("Faca"), Some("Cozinheira"));
        assert_eq!(table.suspect_for("Luva"), Some("Mordomo"));
        assert_eq!(table.suspect_for("Veneno"), None);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn colliding_keys_share_a_bucket() {
        let mut table = SuspectTable::new();
        assert_eq!(table.bucket_of("ab"), table.bucket_of("ba"));

        table.link("ab", "Mordomo");
        table.link("ba", "Jardineiro");
        assert_eq!(table.suspect_for("ab"), Some("Mordomo"));
        assert_eq!(table.suspect_for("ba"), Some("Jardineiro"));
    }

    #[test]
    fn single_bucket_still_works() {
        let mut table = SuspectTable::with_buckets(0);
        assert_eq!(table.bucket_count(), 1);
        for (clue, suspect) in [("a", "X"), ("b", "Y"), ("c", "X")] {
            table.link(clue, suspect);
        }
        assert_eq!(table.suspect_for("c"), Some("X"));
        assert_eq!(table.associations(), vec![("X", vec!["a", "c"]), ("Y", vec!["b"])]);
    }

    #[test]
    fn relinking() {
        let mut table = SuspectTable::new();
        table.link("Faca", "Cozinheira");
        assert_eq!(table.link("Faca", "Cozinheira"), None);
        assert_eq!(table.link("Faca", "Mordomo"), Some("Cozinheira".to_string()));
        assert_eq!(table.suspect_for("Faca"), Some("Mordomo"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn most_likely_counts_collected_clues() {
        let mut table = SuspectTable::new();
        table.link("Faca", "Cozinheira");
        table.link("Avental", "Cozinheira");
        table.link("Luva", "Mordomo");
        table.link("Chave", "Mordomo");
        table.link("Tesoura", "Jardineiro");

        assert_eq!(
            table.most_likely(["Faca", "Avental", "Luva"]),
            Some(("Cozinheira", 2))
        );
        // tie: alphabetical first wins
        assert_eq!(table.most_likely(["Faca", "Luva"]), Some(("Cozinheira", 1)));
        assert_eq!(table.most_likely(["Pegada"]), None);
        assert_eq!(table.most_likely(Vec::<&str>::new()), None);
    }
}
