use serde::{Deserialize, Serialize};

/// Flat record of the SEO-relevant tags found on one page.
///
/// Every field is always present: a tag missing from the markup is the empty
/// string (or `false` for `has_structured_data`), never omitted. Values are kept
/// exactly as extracted, surrounding whitespace included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagRecord {
    pub url: String,
    pub title: String,
    pub description: String,
    pub canonical: String,
    pub robots: String,
    pub viewport: String,
    pub language: String,

    // Open Graph
    pub og_title: String,
    pub og_description: String,
    pub og_image: String,
    pub og_url: String,
    pub og_type: String,

    // Twitter Cards
    pub twitter_card: String,
    pub twitter_title: String,
    pub twitter_description: String,
    pub twitter_image: String,
    pub twitter_site: String,

    pub keywords: String,
    pub author: String,

    pub has_structured_data: bool,
}

/// Names one string-valued tag of a [`TagRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagField {
    Title,
    Description,
    Canonical,
    Robots,
    Viewport,
    Language,
    OgTitle,
    OgDescription,
    OgImage,
    OgUrl,
    OgType,
    TwitterCard,
    TwitterTitle,
    TwitterDescription,
    TwitterImage,
    TwitterSite,
    Keywords,
    Author,
}

impl TagRecord {
    /// An all-sentinel record for `url`: every tag absent.
    pub fn empty(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn get(&self, field: TagField) -> &str {
        match field {
            TagField::Title => &self.title,
            TagField::Description => &self.description,
            TagField::Canonical => &self.canonical,
            TagField::Robots => &self.robots,
            TagField::Viewport => &self.viewport,
            TagField::Language => &self.language,
            TagField::OgTitle => &self.og_title,
            TagField::OgDescription => &self.og_description,
            TagField::OgImage => &self.og_image,
            TagField::OgUrl => &self.og_url,
            TagField::OgType => &self.og_type,
            TagField::TwitterCard => &self.twitter_card,
            TagField::TwitterTitle => &self.twitter_title,
            TagField::TwitterDescription => &self.twitter_description,
            TagField::TwitterImage => &self.twitter_image,
            TagField::TwitterSite => &self.twitter_site,
            TagField::Keywords => &self.keywords,
            TagField::Author => &self.author,
        }
    }

    pub fn get_mut(&mut self, field: TagField) -> &mut String {
        match field {
            TagField::Title => &mut self.title,
            TagField::Description => &mut self.description,
            TagField::Canonical => &mut self.canonical,
            TagField::Robots => &mut self.robots,
            TagField::Viewport => &mut self.viewport,
            TagField::Language => &mut self.language,
            TagField::OgTitle => &mut self.og_title,
            TagField::OgDescription => &mut self.og_description,
            TagField::OgImage => &mut self.og_image,
            TagField::OgUrl => &mut self.og_url,
            TagField::OgType => &mut self.og_type,
            TagField::TwitterCard => &mut self.twitter_card,
            TagField::TwitterTitle => &mut self.twitter_title,
            TagField::TwitterDescription => &mut self.twitter_description,
            TagField::TwitterImage => &mut self.twitter_image,
            TagField::TwitterSite => &mut self.twitter_site,
            TagField::Keywords => &mut self.keywords,
            TagField::Author => &mut self.author,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_camel_case_names() {
        let record = TagRecord {
            og_title: "Hello".to_string(),
            has_structured_data: true,
            ..TagRecord::empty("https://example.com")
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["url"], "https://example.com");
        assert_eq!(value["ogTitle"], "Hello");
        assert_eq!(value["hasStructuredData"], true);
        assert_eq!(value["twitterDescription"], "");
    }

    #[test]
    fn test_empty_record_has_all_fields_present() {
        let value = serde_json::to_value(TagRecord::empty("https://a.dev")).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 20);
        assert!(object
            .iter()
            .filter(|(k, _)| k.as_str() != "url" && k.as_str() != "hasStructuredData")
            .all(|(_, v)| v == ""));
    }
}
