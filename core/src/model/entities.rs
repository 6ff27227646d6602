//! Entities: spans of a tweet's text that refer to hashtags, links,
//! mentions and media, plus rendering of those spans into markup.

use serde::Deserialize;

use super::null_default;

/// `[start, end)` offsets into the text, counted in Unicode code points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "[usize; 2]")]
pub struct Indices {
    pub start: usize,
    pub end: usize,
}

impl From<[usize; 2]> for Indices {
    fn from([start, end]: [usize; 2]) -> Self {
        Self { start, end }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HashtagEntity {
    pub text: String,
    pub indices: Indices,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UrlEntity {
    pub url: String,
    #[serde(default, deserialize_with = "null_default")]
    pub expanded_url: String,
    #[serde(default, deserialize_with = "null_default")]
    pub display_url: String,
    pub indices: Indices,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MentionEntity {
    pub id: i64,
    pub screen_name: String,
    #[serde(default, deserialize_with = "null_default")]
    pub name: String,
    pub indices: Indices,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MediaEntity {
    pub id: i64,
    #[serde(rename = "type", default, deserialize_with = "null_default")]
    pub media_type: String,
    #[serde(default, deserialize_with = "null_default")]
    pub media_url_https: String,
    pub url: String,
    #[serde(default, deserialize_with = "null_default")]
    pub display_url: String,
    #[serde(default, deserialize_with = "null_default")]
    pub expanded_url: String,
    pub indices: Indices,
}

/// The `entities` object of a status message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Entities {
    #[serde(default, deserialize_with = "null_default")]
    pub hashtags: Vec<HashtagEntity>,
    #[serde(default, deserialize_with = "null_default")]
    pub urls: Vec<UrlEntity>,
    #[serde(default, deserialize_with = "null_default")]
    pub user_mentions: Vec<MentionEntity>,
    #[serde(default, deserialize_with = "null_default")]
    pub media: Vec<MediaEntity>,
}

/// Any one entity, borrowed from its `Entities` collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity<'a> {
    Hashtag(&'a HashtagEntity),
    Url(&'a UrlEntity),
    Mention(&'a MentionEntity),
    Media(&'a MediaEntity),
}

impl Entity<'_> {
    pub fn indices(&self) -> Indices {
        match self {
            Entity::Hashtag(e) => e.indices,
            Entity::Url(e) => e.indices,
            Entity::Mention(e) => e.indices,
            Entity::Media(e) => e.indices,
        }
    }
}

impl Entities {
    /// All entities ordered by start index.
    pub fn all(&self) -> Vec<Entity<'_>> {
        let mut all: Vec<Entity<'_>> = self
            .hashtags
            .iter()
            .map(Entity::Hashtag)
            .chain(self.urls.iter().map(Entity::Url))
            .chain(self.user_mentions.iter().map(Entity::Mention))
            .chain(self.media.iter().map(Entity::Media))
            .collect();
        all.sort_by_key(|e| e.indices().start);
        all
    }

    /// All entities ordered by start index, last first.
    pub fn all_reversed(&self) -> Vec<Entity<'_>> {
        let mut all = self.all();
        all.reverse();
        all
    }

    pub fn is_empty(&self) -> bool {
        self.hashtags.is_empty() && self.urls.is_empty() && self.user_mentions.is_empty() && self.media.is_empty()
    }
}

/// Renders the text covered by an entity. `current` is the original span.
pub trait EntityFormatter {
    fn format_hashtag(&self, current: &str, entity: &HashtagEntity) -> String;
    fn format_url(&self, current: &str, entity: &UrlEntity) -> String;
    fn format_mention(&self, current: &str, entity: &MentionEntity) -> String;
    fn format_media(&self, current: &str, entity: &MediaEntity) -> String;
}

/// Renders entities as HTML links to twitter.com. Entity fields are
/// escaped for the attribute or text position they land in.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultEntityFormatter;

fn link(href: &str, text: &str) -> String {
    format!(
        "<a href=\"{}\">{}</a>",
        html_escape::encode_double_quoted_attribute(href),
        html_escape::encode_text(text)
    )
}

fn display_or_url<'a>(display_url: &'a str, url: &'a str) -> &'a str {
    if display_url.is_empty() {
        url
    } else {
        display_url
    }
}

impl EntityFormatter for DefaultEntityFormatter {
    fn format_hashtag(&self, current: &str, entity: &HashtagEntity) -> String {
        link(&format!("https://twitter.com/hashtag/{}", entity.text), current)
    }

    fn format_url(&self, _current: &str, entity: &UrlEntity) -> String {
        link(&entity.url, display_or_url(&entity.display_url, &entity.url))
    }

    fn format_mention(&self, current: &str, entity: &MentionEntity) -> String {
        link(&format!("https://twitter.com/{}", entity.screen_name), current)
    }

    fn format_media(&self, _current: &str, entity: &MediaEntity) -> String {
        link(&entity.url, display_or_url(&entity.display_url, &entity.url))
    }
}

/// Replace every entity span in `text` with the formatter's rendering.
///
/// Spans are processed from the end of the text backwards so earlier
/// offsets stay valid. Spans that fall outside the text are left alone.
pub fn format_entities(text: &str, entities: &[Entity<'_>], formatter: &dyn EntityFormatter) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }

    let mut ordered = entities.to_vec();
    ordered.sort_by_key(|e| std::cmp::Reverse(e.indices().start));

    let mut chars: Vec<char> = text.chars().collect();
    let mut last_start = usize::MAX;
    for entity in ordered {
        let Indices { start, end } = entity.indices();
        // Overlapping spans would splice into already formatted output.
        if start > end || end > chars.len() || end > last_start {
            continue;
        }
        let current: String = chars[start..end].iter().collect();
        let formatted = match entity {
            Entity::Hashtag(e) => formatter.format_hashtag(&current, e),
            Entity::Url(e) => formatter.format_url(&current, e),
            Entity::Mention(e) => formatter.format_mention(&current, e),
            Entity::Media(e) => formatter.format_media(&current, e),
        };
        chars.splice(start..end, formatted.chars());
        last_start = start;
    }
    chars.into_iter().collect()
}
