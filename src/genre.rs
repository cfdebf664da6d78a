use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The four narrative phases a genre's story moves through.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct GenreStructure {
    pub intro: String,
    pub middle: String,
    pub climax: String,
    pub end: String,
}

impl GenreStructure {
    fn new(intro: &str, middle: &str, climax: &str, end: &str) -> Self {
        Self {
            intro: intro.to_string(),
            middle: middle.to_string(),
            climax: climax.to_string(),
            end: end.to_string(),
        }
    }
}

/// Genre name → arc structure. Built once at startup and only read afterwards.
#[derive(Debug, Clone)]
pub struct GenreTable {
    genres: BTreeMap<String, GenreStructure>,
}

/// "fANTasy" → "Fantasy". Whitespace is significant.
pub fn normalize_genre(genre: &str) -> String {
    let mut chars = genre.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

impl GenreTable {
    pub fn builtin() -> Self {
        let mut genres = BTreeMap::new();
        genres.insert(
            "Romance".to_string(),
            GenreStructure::new(
                "Rencontre, tension légère",
                "Premiers obstacles, moments de rapprochement",
                "Rupture / obstacle / rival inattendu",
                "Résolution et amour scellé ou tragédie",
            ),
        );
        genres.insert(
            "Fantasy".to_string(),
            GenreStructure::new(
                "Monde réel → téléportation ou révélation de pouvoir, Introduction du monde et des règles",
                "Apprentissage, Entrainement, exploration, montée en puissance",
                "Guerre, complot, trahison ou révélation de pouvoir",
                "Combat final, retour au monde réel ou nouveau statut",
            ),
        );
        genres.insert(
            "Action".to_string(),
            GenreStructure::new(
                "Conflit ou crime initial",
                "Investigation, Chasse, énigmes, tensions",
                "Trahison, tension maximale, twist majeur",
                "Vérité révélée, twist final, victoire amère ou tragique",
            ),
        );
        genres.insert(
            "Horreur".to_string(),
            GenreStructure::new(
                "Atmosphère étrange, premiers signes de danger léger",
                "Découverte de secrets, meurtres ou phénomènes ou de mal profonds",
                "Vérité choquante, perte mentale",
                "Soit résolution flou, soit fin ouverte flippante",
            ),
        );
        Self { genres }
    }

    /// Config-supplied genres win over built-in ones with the same normalized name.
    pub fn with_overrides(mut self, overrides: &BTreeMap<String, GenreStructure>) -> Self {
        for (name, structure) in overrides {
            let key = normalize_genre(name);
            if key.is_empty() {
                continue;
            }
            self.genres.insert(key, structure.clone());
        }
        self
    }

    pub fn lookup(&self, genre: &str) -> Option<(String, &GenreStructure)> {
        let key = normalize_genre(genre);
        self.genres.get(&key).map(|structure| (key, structure))
    }

    pub fn names(&self) -> Vec<&str> {
        self.genres.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_genre() {
        assert_eq!(normalize_genre("fantasy"), "Fantasy");
        assert_eq!(normalize_genre("FANTASY"), "Fantasy");
        assert_eq!(normalize_genre("hOrReUr"), "Horreur");
        assert_eq!(normalize_genre(" fantasy "), " fantasy ");
        assert_eq!(normalize_genre(""), "");
        assert_eq!(normalize_genre("élan"), "Élan");
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let table = GenreTable::builtin();
        for name in ["romance", "FANTASY", "Action", "horreur"] {
            assert!(table.lookup(name).is_some(), "{name} should be supported");
        }
        let (key, structure) = table.lookup("fantasy").unwrap();
        assert_eq!(key, "Fantasy");
        assert_eq!(structure.middle, "Apprentissage, Entrainement, exploration, montée en puissance");
    }

    #[test]
    fn test_unknown_genre() {
        let table = GenreTable::builtin();
        assert!(table.lookup("western").is_none());
        assert!(table.lookup("").is_none());
        assert!(table.lookup(" fantasy ").is_none());
        // English spelling is not an alias.
        assert!(table.lookup("horror").is_none());
    }

    #[test]
    fn test_names_sorted() {
        let table = GenreTable::builtin();
        assert_eq!(table.names(), vec!["Action", "Fantasy", "Horreur", "Romance"]);
    }

    #[test]
    fn test_overrides_are_normalized() {
        let mut overrides = BTreeMap::new();
        overrides.insert(
            "mystery".to_string(),
            GenreStructure::new("a", "b", "c", "d"),
        );
        overrides.insert(
            "ROMANCE".to_string(),
            GenreStructure::new("w", "x", "y", "z"),
        );

        let table = GenreTable::builtin().with_overrides(&overrides);
        assert_eq!(table.lookup("Mystery").unwrap().1.end, "d");
        assert_eq!(table.lookup("romance").unwrap().1.intro, "w");
        assert_eq!(table.names().len(), 5);
    }
}
