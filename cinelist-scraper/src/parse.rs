//! Strict-or-drop parsing of raw products into [`FilmEntry`] values.
//!
//! The listing is a best-effort scrape, not a schema: anything missing a
//! title, a runtime, or a usable product type is dropped and counted, and
//! nothing in here panics or returns an error past this boundary.
//!
//! Older catalog entries carry no structured director/year and instead
//! embed them in the title as `"Title" de Director (Year)`; those are
//! decomposed with regexes. Titles also accumulate marketing suffixes
//! ("Version restaurée" and friends) that are stripped so identity stays
//! stable across re-listings.

use once_cell::sync::Lazy;
use regex::Regex;

use cinelist_catalog::FilmEntry;

use crate::types::RawProduct;

/// `"Title" de Director (Year)` or `"Title" d'Director (Year)`.
static TITLE_DIRECTOR_YEAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""(.*?)" d(?:'|e )(.*?) \((\d+)\)"#).expect("invalid decompose regex")
});

/// `"Title" de ` with no closing year.
static TITLE_DIRECTOR_ONLY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""(.*?)" de "#).expect("invalid decompose regex"));

/// Season markers in titles: the listing files whole seasons under the
/// film category from time to time.
static SEASON_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[sS]aison \d").expect("invalid season regex"));

/// Re-release suffixes appended to titles: "Version restaurée",
/// "- Version longue", "(Version cinéma)".
static VERSION_SUFFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"-*\(*\s*[Vv]ersion (?:restaurée|longue|cinéma)\)*")
        .expect("invalid version regex")
});

/// Why a product was dropped instead of parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// Missing title or runtime.
    MissingField,
    /// Not a standalone film (series, pack, or has seasons).
    NotAFilm,
    /// Title names a season of a series.
    SeasonTitle,
}

/// Tally of one parsing pass, for the end-of-run summary line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    pub parsed: usize,
    pub missing_field: usize,
    pub not_a_film: usize,
    pub season_title: usize,
}

impl ParseStats {
    pub fn dropped(&self) -> usize {
        self.missing_field + self.not_a_film + self.season_title
    }

    fn record(&mut self, reason: DropReason) {
        match reason {
            DropReason::MissingField => self.missing_field += 1,
            DropReason::NotAFilm => self.not_a_film += 1,
            DropReason::SeasonTitle => self.season_title += 1,
        }
    }
}

/// Parses raw products into film entries, stamping each with the category
/// the fetch was scoped to.
#[derive(Debug, Clone)]
pub struct EntryParser {
    category: String,
}

impl EntryParser {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
        }
    }

    /// Parse every product, tallying drops into `stats`.
    pub fn parse_all(&self, products: &[RawProduct], stats: &mut ParseStats) -> Vec<FilmEntry> {
        let mut entries = Vec::with_capacity(products.len());
        for product in products {
            match self.parse(product) {
                Ok(entry) => {
                    stats.parsed += 1;
                    entries.push(entry);
                }
                Err(reason) => {
                    log::debug!(
                        "dropping product {:?} ({:?}): {:?}",
                        product.id,
                        product.title,
                        reason
                    );
                    stats.record(reason);
                }
            }
        }
        entries
    }

    /// Parse one product, or say why it was dropped.
    pub fn parse(&self, product: &RawProduct) -> Result<FilmEntry, DropReason> {
        if product.product_type.as_deref() != Some("PROGRAM") {
            return Err(DropReason::NotAFilm);
        }
        if product.seasons_count.unwrap_or(0) != 0 {
            return Err(DropReason::NotAFilm);
        }

        let raw_title = match product.title.as_deref() {
            Some(t) if !t.trim().is_empty() => t,
            _ => return Err(DropReason::MissingField),
        };
        let duration = match product.duration {
            Some(secs) => secs,
            None => return Err(DropReason::MissingField),
        };

        let (title, director, year) = decompose(raw_title, product);
        if SEASON_MARKER.is_match(&title) {
            return Err(DropReason::SeasonTitle);
        }

        Ok(FilmEntry {
            title: clean_title(&title),
            director,
            year,
            // Round up: a film a few seconds over the N-minute bar must not
            // be floored back onto it and lost to the strictly-greater filter.
            runtime_minutes: duration.div_ceil(60),
            category: self.category.clone(),
        })
    }
}

/// Split a listing title into (title, director, year).
///
/// When the product carries a structured production year the title is taken
/// as-is and directors come from the `directors` array. Otherwise the
/// `"Title" de Director (Year)` embedding is unpacked from the title itself.
fn decompose(raw_title: &str, product: &RawProduct) -> (String, String, Option<u16>) {
    if let Some(year) = product.production_year {
        let director = product
            .directors
            .as_deref()
            .map(|d| d.join(","))
            .unwrap_or_default();
        return (raw_title.to_string(), director, Some(year));
    }

    if let Some(caps) = TITLE_DIRECTOR_YEAR.captures(raw_title) {
        let year = caps[3].parse::<u16>().ok();
        return (caps[1].to_string(), caps[2].to_string(), year);
    }

    if let Some(caps) = TITLE_DIRECTOR_ONLY.captures(raw_title) {
        return (caps[1].to_string(), String::new(), None);
    }

    (raw_title.to_string(), String::new(), None)
}

/// Strip re-release suffixes and normalize stray apostrophe spacing.
fn clean_title(title: &str) -> String {
    let stripped = VERSION_SUFFIX.replace_all(title, "");
    stripped.replace("' ", "'").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program(title: &str) -> RawProduct {
        RawProduct {
            id: Some("42".to_string()),
            title: Some(title.to_string()),
            product_type: Some("PROGRAM".to_string()),
            seasons_count: Some(0),
            duration: Some(5400),
            ..RawProduct::default()
        }
    }

    fn parser() -> EntryParser {
        EntryParser::new("Cinema")
    }

    #[test]
    fn parses_structured_product() {
        let mut product = program("Cléo de 5 à 7");
        product.directors = Some(vec!["Agnès Varda".to_string()]);
        product.production_year = Some(1962);

        let entry = parser().parse(&product).unwrap();
        assert_eq!(entry.title, "Cléo de 5 à 7");
        assert_eq!(entry.director, "Agnès Varda");
        assert_eq!(entry.year, Some(1962));
        assert_eq!(entry.runtime_minutes, 90);
        assert_eq!(entry.category, "Cinema");
    }

    #[test]
    fn runtime_just_over_the_filter_bar_rounds_up() {
        let mut product = program("Un film de 50 minutes et quelques");
        product.duration = Some(3050);

        let entry = parser().parse(&product).unwrap();
        assert_eq!(entry.runtime_minutes, 51);
        assert!(cinelist_catalog::FilmFilter::default().keep(&entry));

        // Exactly 50 minutes stays at 50 and is filtered out
        product.duration = Some(3000);
        let entry = parser().parse(&product).unwrap();
        assert_eq!(entry.runtime_minutes, 50);
        assert!(!cinelist_catalog::FilmFilter::default().keep(&entry));
    }

    #[test]
    fn joins_multiple_directors() {
        let mut product = program("Le Mépris");
        product.directors = Some(vec!["A".to_string(), "B".to_string()]);
        product.production_year = Some(1963);

        let entry = parser().parse(&product).unwrap();
        assert_eq!(entry.director, "A,B");
    }

    #[test]
    fn decomposes_title_with_director_and_year() {
        let entry = parser()
            .parse(&program("\"La Jetée\" de Chris Marker (1962)"))
            .unwrap();
        assert_eq!(entry.title, "La Jetée");
        assert_eq!(entry.director, "Chris Marker");
        assert_eq!(entry.year, Some(1962));
    }

    #[test]
    fn decomposes_title_with_elided_de() {
        let entry = parser()
            .parse(&program("\"Vivre sa vie\" d'Anna Karina (1962)"))
            .unwrap();
        assert_eq!(entry.title, "Vivre sa vie");
        assert_eq!(entry.director, "Anna Karina");
    }

    #[test]
    fn title_without_year_keeps_director_unset() {
        let entry = parser()
            .parse(&program("\"Sans Soleil\" de Chris Marker"))
            .unwrap();
        assert_eq!(entry.title, "Sans Soleil");
        assert_eq!(entry.director, "");
        assert_eq!(entry.year, None);
    }

    #[test]
    fn plain_title_passes_through() {
        let entry = parser().parse(&program("Playtime")).unwrap();
        assert_eq!(entry.title, "Playtime");
        assert_eq!(entry.director, "");
        assert_eq!(entry.year, None);
    }

    #[test]
    fn strips_version_suffix() {
        let entry = parser()
            .parse(&program("Le Samouraï - Version restaurée"))
            .unwrap();
        assert_eq!(entry.title, "Le Samouraï");

        let entry = parser()
            .parse(&program("Nostalghia (Version longue)"))
            .unwrap();
        assert_eq!(entry.title, "Nostalghia");
    }

    #[test]
    fn normalizes_apostrophe_spacing() {
        let entry = parser().parse(&program("L' Atalante")).unwrap();
        assert_eq!(entry.title, "L'Atalante");
    }

    #[test]
    fn drops_season_titles() {
        let err = parser()
            .parse(&program("Les Petits Meurtres - Saison 2"))
            .unwrap_err();
        assert_eq!(err, DropReason::SeasonTitle);
    }

    #[test]
    fn drops_series_and_packs() {
        let mut product = program("Une série");
        product.product_type = Some("SERIE".to_string());
        assert_eq!(parser().parse(&product).unwrap_err(), DropReason::NotAFilm);

        let mut product = program("Un programme à saisons");
        product.seasons_count = Some(3);
        assert_eq!(parser().parse(&product).unwrap_err(), DropReason::NotAFilm);
    }

    #[test]
    fn drops_missing_title_or_duration() {
        let mut product = program("ignored");
        product.title = None;
        assert_eq!(
            parser().parse(&product).unwrap_err(),
            DropReason::MissingField
        );

        let mut product = program("Sans durée");
        product.duration = None;
        assert_eq!(
            parser().parse(&product).unwrap_err(),
            DropReason::MissingField
        );
    }

    #[test]
    fn parse_all_tallies_drops() {
        let products = vec![
            program("Bon film"),
            RawProduct::default(),
            program("Truc - Saison 1"),
        ];

        let mut stats = ParseStats::default();
        let entries = parser().parse_all(&products, &mut stats);

        assert_eq!(entries.len(), 1);
        assert_eq!(stats.parsed, 1);
        assert_eq!(stats.not_a_film, 1);
        assert_eq!(stats.season_title, 1);
        assert_eq!(stats.dropped(), 2);
    }
}
