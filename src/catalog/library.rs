use std::cmp::Ordering;

use super::volume::Volume;

/// Alphabetical browse hierarchy: letter, then series, then volumes. A pure
/// projection of `(volumes, search_query)`, rebuilt whenever either changes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LibraryIndex {
    pub groups: Vec<LetterGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterGroup {
    pub letter: char,
    pub series: Vec<SeriesGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesGroup {
    pub title: String,
    pub volumes: Vec<Volume>,
}

impl LibraryIndex {
    pub fn build(volumes: &[Volume], search_query: &str) -> LibraryIndex {
        let query = search_query.to_lowercase();

        let mut filtered: Vec<&Volume> = volumes
            .iter()
            .filter(|volume| volume.series_title.to_lowercase().contains(&query))
            .collect();
        filtered.sort_by(|a, b| a.series_title.cmp(&b.series_title));

        let mut groups: Vec<LetterGroup> = Vec::new();
        for volume in filtered {
            let letter = group_letter(&volume.series_title);

            let group_position = match groups.iter().position(|group| group.letter == letter) {
                Some(position) => position,
                None => {
                    groups.push(LetterGroup {
                        letter,
                        series: Vec::new(),
                    });
                    groups.len() - 1
                }
            };
            let group = &mut groups[group_position];

            // Series appear in insertion order, which is lexicographic
            // because the filtered list was sorted above.
            let series_position = match group
                .series
                .iter()
                .position(|series| series.title == volume.series_title)
            {
                Some(position) => position,
                None => {
                    group.series.push(SeriesGroup {
                        title: volume.series_title.clone(),
                        volumes: Vec::new(),
                    });
                    group.series.len() - 1
                }
            };

            group.series[series_position].volumes.push(volume.clone());
        }

        for group in &mut groups {
            for series in &mut group.series {
                series
                    .volumes
                    .sort_by(|a, b| a.volume_number.cmp(&b.volume_number));
            }
        }

        groups.sort_by(|a, b| compare_letters(a.letter, b.letter));

        LibraryIndex { groups }
    }

    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.groups.iter().map(|group| group.letter)
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// A–Z initials group under their upper-cased letter, everything else under
/// the catch-all `#` bucket.
pub fn group_letter(series_title: &str) -> char {
    match series_title.chars().next() {
        Some(first) if first.is_ascii_alphabetic() => first.to_ascii_uppercase(),
        _ => '#',
    }
}

// `#` sorts last in the letter list no matter what else is present.
fn compare_letters(a: char, b: char) -> Ordering {
    match (a, b) {
        ('#', '#') => Ordering::Equal,
        ('#', _) => Ordering::Greater,
        (_, '#') => Ordering::Less,
        (a, b) => a.cmp(&b),
    }
}

/// Plain-text snapshot of the first `limit` volumes, the read-only context
/// handed to the librarian assistant.
pub fn assistant_context(volumes: &[Volume], limit: usize) -> String {
    volumes
        .iter()
        .take(limit)
        .map(|volume| format!("- {} ({})", volume.series_title, volume.volume_number))
        .collect::<Vec<String>>()
        .join("\n")
}
