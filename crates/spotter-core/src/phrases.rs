//! Random phrase fragments for announcements.

use rand::Rng;
use std::collections::HashMap;

/// Named phrase categories an announcement draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhraseGroup {
    /// Opening exclamation.
    Intro,
    /// Leads into the aircraft description.
    Sighting,
}

/// A table of phrase variants per group. Picks go through an injected RNG so
/// announcement text is reproducible under test.
#[derive(Debug, Clone)]
pub struct Phrasebook {
    groups: HashMap<PhraseGroup, Vec<String>>,
}

impl Default for Phrasebook {
    fn default() -> Self {
        let mut groups = HashMap::new();
        groups.insert(
            PhraseGroup::Intro,
            vec![
                "Oh no.".to_string(),
                "Oh shit.".to_string(),
                "Bummer.".to_string(),
                "Damn.".to_string(),
            ],
        );
        groups.insert(
            PhraseGroup::Sighting,
            vec!["There is another".to_string(), "I can see a".to_string()],
        );
        Self { groups }
    }
}

impl Phrasebook {
    /// One random phrase from the group, or the empty string for an empty
    /// or unknown group.
    pub fn pick<R: Rng>(&self, group: PhraseGroup, rng: &mut R) -> &str {
        match self.groups.get(&group) {
            Some(variants) if !variants.is_empty() => {
                &variants[rng.random_range(0..variants.len())]
            }
            _ => "",
        }
    }
}
