use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::models::tag_record::{TagField, TagRecord};

/// `(field, css selector, attribute)` for every tag read from an attribute.
/// The first matching element wins.
const ATTRIBUTE_TAGS: &[(TagField, &str, &str)] = &[
    (TagField::Description, r#"meta[name="description"]"#, "content"),
    (TagField::Canonical, r#"link[rel="canonical"]"#, "href"),
    (TagField::Robots, r#"meta[name="robots"]"#, "content"),
    (TagField::Viewport, r#"meta[name="viewport"]"#, "content"),
    (TagField::Language, "html", "lang"),
    (TagField::OgTitle, r#"meta[property="og:title"]"#, "content"),
    (TagField::OgDescription, r#"meta[property="og:description"]"#, "content"),
    (TagField::OgImage, r#"meta[property="og:image"]"#, "content"),
    (TagField::OgUrl, r#"meta[property="og:url"]"#, "content"),
    (TagField::OgType, r#"meta[property="og:type"]"#, "content"),
    (TagField::TwitterCard, r#"meta[name="twitter:card"]"#, "content"),
    (TagField::TwitterTitle, r#"meta[name="twitter:title"]"#, "content"),
    (TagField::TwitterDescription, r#"meta[name="twitter:description"]"#, "content"),
    (TagField::TwitterImage, r#"meta[name="twitter:image"]"#, "content"),
    (TagField::TwitterSite, r#"meta[name="twitter:site"]"#, "content"),
    (TagField::Keywords, r#"meta[name="keywords"]"#, "content"),
    (TagField::Author, r#"meta[name="author"]"#, "content"),
];

static TITLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("title").expect("Failed to parse title selector - this is a bug")
});

static JSON_LD_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"script[type="application/ld+json"]"#)
        .expect("Failed to parse JSON-LD selector - this is a bug")
});

static ATTRIBUTE_SELECTORS: LazyLock<Vec<(TagField, Selector, &'static str)>> =
    LazyLock::new(|| {
        ATTRIBUTE_TAGS
            .iter()
            .map(|(field, css, attr)| {
                let selector = Selector::parse(css)
                    .unwrap_or_else(|e| panic!("Invalid selector {css}: {e:?} - this is a bug"));
                (*field, selector, *attr)
            })
            .collect()
    });

/// Extracts the SEO tag record for `url` from raw page markup.
///
/// Total over any input: malformed markup is parsed leniently and anything not
/// found becomes the empty string. Values are returned untrimmed.
pub fn extract_tags(url: &str, html: &str) -> TagRecord {
    let document = Html::parse_document(html);
    let mut record = TagRecord::empty(url);

    // Text of every <title> in document order, inline SVG titles included.
    record.title = document
        .select(&TITLE_SELECTOR)
        .flat_map(|element| element.text())
        .collect();

    for (field, selector, attr) in ATTRIBUTE_SELECTORS.iter() {
        if let Some(value) = document
            .select(selector)
            .next()
            .and_then(|element| element.value().attr(attr))
        {
            *record.get_mut(*field) = value.to_string();
        }
    }

    record.has_structured_data = document.select(&JSON_LD_SELECTOR).next().is_some();

    record
}
