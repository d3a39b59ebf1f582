use serde::{Deserialize, Serialize};

use super::page::ComicPage;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    pub id: String,
    pub series_title: String,
    pub volume_number: String,
    pub cover_url: String,
    pub pages: Vec<ComicPage>,
}

/// One loosely-typed catalog record as it arrives off the wire. Every field
/// is optional; normalization fills the gaps.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct RawVolume {
    pub id: Option<String>,
    pub series: Option<String>,
    pub title: Option<String>,
    pub volume: Option<String>,
    pub cover_url: Option<String>,
    pub pages: Option<Vec<String>>,
}

/// The remote catalog is either a single record or an array of them.
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum CatalogDocument {
    Many(Vec<RawVolume>),
    One(RawVolume),
}

/// Turns a raw catalog document into validated volumes. Total: malformed
/// records degrade through field defaults rather than failing the batch.
pub fn normalize(document: CatalogDocument) -> Vec<Volume> {
    let records = match document {
        CatalogDocument::Many(records) => records,
        CatalogDocument::One(record) => vec![record],
    };

    records.into_iter().map(Volume::from_raw).collect()
}

impl Volume {
    pub fn from_raw(raw: RawVolume) -> Volume {
        let mut pages: Vec<ComicPage> = raw
            .pages
            .unwrap_or_default()
            .iter()
            .enumerate()
            .map(|(position, url)| ComicPage::from_url(url, position))
            .collect();
        pages.sort_by_key(|page| page.page_number);

        let series_title = raw
            .series
            .or(raw.title)
            .unwrap_or_else(|| "Unknown Series".to_owned());
        let volume_number = raw.volume.unwrap_or_else(|| "One Shot".to_owned());

        // Synthesized ids must be stable across syncs or bookmarks keyed on
        // them go stale.
        let id = raw
            .id
            .unwrap_or_else(|| derive_id(&series_title, &volume_number));

        let cover_url = raw
            .cover_url
            .or_else(|| pages.first().map(|page| page.url.clone()))
            .unwrap_or_default();

        Volume {
            id,
            series_title,
            volume_number,
            cover_url,
            pages,
        }
    }
}

fn derive_id(series_title: &str, volume_number: &str) -> String {
    let mut slug = String::new();
    for character in format!("{} {}", series_title, volume_number).chars() {
        match character.to_lowercase().next() {
            Some(lower) if lower.is_alphanumeric() => slug.push(lower),
            _ if slug.ends_with('-') || slug.is_empty() => {}
            _ => slug.push('-'),
        }
    }

    format!("vol_{}", slug.trim_end_matches('-'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(pages: &[&str]) -> RawVolume {
        RawVolume {
            pages: Some(pages.iter().map(|url| url.to_string()).collect()),
            ..RawVolume::default()
        }
    }

    #[test]
    fn pages_sorted_by_page_number() {
        let volume = Volume::from_raw(raw(&[
            "https://cdn.example/s_03.jpg",
            "https://cdn.example/s_01.jpg",
            "https://cdn.example/s_02.jpg",
        ]));

        let numbers: Vec<u32> = volume.pages.iter().map(|page| page.page_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn pages_without_tokens_keep_source_order() {
        let volume = Volume::from_raw(raw(&[
            "https://cdn.example/front.jpg",
            "https://cdn.example/middle.jpg",
            "https://cdn.example/back.jpg",
        ]));

        let names: Vec<&str> = volume
            .pages
            .iter()
            .map(|page| page.file_name.as_str())
            .collect();
        assert_eq!(names, vec!["front.jpg", "middle.jpg", "back.jpg"]);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let volume = Volume::from_raw(RawVolume::default());

        assert_eq!(volume.series_title, "Unknown Series");
        assert_eq!(volume.volume_number, "One Shot");
        assert_eq!(volume.cover_url, "");
        assert!(volume.pages.is_empty());
    }

    #[test]
    fn title_backs_up_series() {
        let volume = Volume::from_raw(RawVolume {
            title: Some("Amazing Fantasy".to_owned()),
            ..RawVolume::default()
        });

        assert_eq!(volume.series_title, "Amazing Fantasy");
    }

    #[test]
    fn cover_defaults_to_first_sorted_page() {
        let volume = Volume::from_raw(raw(&[
            "https://cdn.example/s_02.jpg",
            "https://cdn.example/s_01.jpg",
        ]));

        assert_eq!(volume.cover_url, "https://cdn.example/s_01.jpg");
    }

    #[test]
    fn derived_ids_are_stable_across_syncs() {
        let record = RawVolume {
            series: Some("Amazing Spider-Man".to_owned()),
            volume: Some("Vol 1".to_owned()),
            ..RawVolume::default()
        };

        let first = Volume::from_raw(record.clone());
        let second = Volume::from_raw(record);

        assert_eq!(first.id, second.id);
        assert_eq!(first.id, "vol_amazing-spider-man-vol-1");
    }

    #[test]
    fn single_record_document_normalizes_like_a_list() {
        let document: CatalogDocument =
            serde_json::from_str(r#"{"series": "1602", "pages": []}"#).unwrap();

        let volumes = normalize(document);
        assert_eq!(volumes.len(), 1);
        assert_eq!(volumes[0].series_title, "1602");
    }

    #[test]
    fn list_document_tolerates_sparse_records() {
        let document: CatalogDocument = serde_json::from_str(
            r#"[
                {"series": "Amazing", "volume": "Vol 1", "pages": ["https://c/a_1.jpg"]},
                {}
            ]"#,
        )
        .unwrap();

        let volumes = normalize(document);
        assert_eq!(volumes.len(), 2);
        assert_eq!(volumes[1].series_title, "Unknown Series");
    }
}
