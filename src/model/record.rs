//! Wire types for the catalog search payload.
//!
//! These are pass-through: the controller never interprets result items
//! beyond handing them to the view, so the fields mirror what the Discogs
//! `/database/search` endpoint returns. Unknown wire fields are ignored.

use serde::Deserialize;

use super::types::PaginationPatch;

/// One page of search results as returned by the catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchPage {
    pub pagination: PageInfo,
    pub results: Vec<Record>,
}

/// Pagination counters from the response envelope.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageInfo {
    pub page: u32,
    pub pages: u32,
    pub items: u64,
    pub per_page: u32,
}

impl From<PageInfo> for PaginationPatch {
    fn from(info: PageInfo) -> Self {
        PaginationPatch {
            page: Some(info.page),
            pages: Some(info.pages),
            items: Some(info.items),
            per_page: Some(info.per_page),
        }
    }
}

/// A catalog record from search results.
#[derive(Debug, Clone, Deserialize)]
pub struct Record {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub artist: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default, rename = "genre")]
    pub genres: Vec<String>,
    #[serde(default, rename = "style")]
    pub styles: Vec<String>,
    // The wire sends either one label or a list; only the primary one is kept.
    #[serde(default, deserialize_with = "string_or_first")]
    pub label: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default, rename = "cover_image")]
    pub image_url: Option<String>,
    #[serde(default, rename = "format")]
    pub formats: Vec<String>,
    #[serde(default)]
    pub tracklist: Option<Vec<TracklistEntry>>,
    #[serde(default)]
    pub resource_url: String,
    #[serde(default)]
    pub community: Option<Community>,
}

/// One tracklist entry, present on detail payloads only.
#[derive(Debug, Clone, Deserialize)]
pub struct TracklistEntry {
    pub title: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub position: Option<String>,
}

/// Wantlist/collection counters attached to a record.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Community {
    #[serde(default)]
    pub want: Option<u64>,
    #[serde(default)]
    pub have: Option<u64>,
}

fn string_or_first<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrList {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<StringOrList>::deserialize(deserializer)? {
        None => None,
        Some(StringOrList::One(label)) => Some(label),
        Some(StringOrList::Many(labels)) => labels.into_iter().next(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "pagination": {"page": 2, "pages": 5, "per_page": 50, "items": 240},
        "results": [
            {
                "id": 249504,
                "title": "Nirvana - Nevermind",
                "year": "1991",
                "genre": ["Rock"],
                "style": ["Grunge", "Alternative Rock"],
                "label": ["DGC", "Sub Pop"],
                "country": "US",
                "format": ["Vinyl", "LP", "Album"],
                "cover_image": "https://img.discogs.com/nevermind.jpg",
                "resource_url": "https://api.discogs.com/releases/249504",
                "community": {"want": 15224, "have": 39049},
                "barcode": ["720642442517"]
            },
            {
                "id": 1,
                "title": "Stockholm",
                "label": "Svek",
                "resource_url": "https://api.discogs.com/releases/1"
            }
        ]
    }"#;

    #[test]
    fn deserializes_search_payload() {
        let page: SearchPage = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(page.results.len(), 2);

        let record = &page.results[0];
        assert_eq!(record.id, 249504);
        assert_eq!(record.genres, vec!["Rock"]);
        assert_eq!(record.styles.len(), 2);
        assert_eq!(record.label.as_deref(), Some("DGC"));
        assert_eq!(record.formats, vec!["Vinyl", "LP", "Album"]);
        assert_eq!(
            record.image_url.as_deref(),
            Some("https://img.discogs.com/nevermind.jpg")
        );
        assert_eq!(record.community.unwrap().want, Some(15224));
        assert!(record.tracklist.is_none());
    }

    #[test]
    fn label_accepts_single_string() {
        let page: SearchPage = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(page.results[1].label.as_deref(), Some("Svek"));
        assert!(page.results[1].genres.is_empty());
    }

    #[test]
    fn page_info_converts_to_full_patch() {
        let page: SearchPage = serde_json::from_str(SAMPLE).unwrap();
        let patch = PaginationPatch::from(page.pagination);
        assert_eq!(patch.page, Some(2));
        assert_eq!(patch.pages, Some(5));
        assert_eq!(patch.items, Some(240));
        assert_eq!(patch.per_page, Some(50));
    }
}
