//! Client for the api.biblia.com reference services.
//!
//! Free text goes in, text with embedded reference links comes out. You
//! need your own API key; see <https://api.biblia.com/docs>. Responses are
//! cached in memory per request, so repeated taggings of the same text hit
//! the network once.

use std::collections::HashMap;

use anyhow::{anyhow, Context, Result};
use parking_lot::Mutex;
use serde_json::Value;

use crate::logger;

const BASE_URL: &str = "https://api.biblia.com/v1/bible";

// Markdown links with ref.ly URLs.
const MARKDOWN_TAG_FORMAT: &str = "[{text}](https://ref.ly/logosref/bible.{query})";

/// Anything that can mark up Bible references in free text. The network
/// client implements this; tests substitute their own.
pub trait Tagger {
    /// Return TEXT with every recognized reference wrapped in a link.
    fn tag(&self, text: &str) -> Result<String>;
}

pub struct BibliaClient {
    api_key: String,
    cache: Mutex<HashMap<String, Value>>,
}

impl BibliaClient {
    pub fn new(api_key: impl Into<String>) -> BibliaClient {
        BibliaClient {
            api_key: api_key.into(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// The text of PASSAGE in the edition BIBLE, like ("LEB", "Mark 4:9").
    pub fn content(&self, bible: &str, passage: &str) -> Result<String> {
        let form = format!("content/{}.txt.json", bible);
        let response = self.get(&form, &[("passage", passage), ("style", "fullyFormatted")])?;
        response
            .get("text")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| anyhow!("No text in content response for '{}'", passage))
    }

    /// Tag references in TEXT with the service's default HTML links.
    pub fn tag_with_format(&self, text: &str, tag_format: Option<&str>) -> Result<String> {
        let mut args = vec![("text", text)];
        if let Some(f) = tag_format {
            args.push(("tagFormat", f));
        }
        let response = self.get("tag", &args)?;
        response
            .get("text")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| anyhow!("No text in tag response"))
    }

    /// Tag references in TEXT as Markdown links to ref.ly.
    pub fn tag_markdown(&self, text: &str) -> Result<String> {
        self.tag_with_format(text, Some(MARKDOWN_TAG_FORMAT))
    }

    fn get(&self, form: &str, args: &[(&str, &str)]) -> Result<Value> {
        let cache_key = format!("{}?{:?}", form, args);
        if let Some(cached) = self.cache.lock().get(&cache_key) {
            return Ok(cached.clone());
        }
        let url = format!("{}/{}", BASE_URL, form);
        logger::info(&format!("biblia request: {}", url));
        let mut request = ureq::get(&url).query("key", &self.api_key);
        for (name, value) in args {
            request = request.query(name, value);
        }
        let body = request
            .call()
            .with_context(|| format!("biblia request failed: {}", form))?
            .body_mut()
            .read_to_string()
            .context("Failed to read biblia response body")?;
        let parsed: Value =
            serde_json::from_str(&body).context("Biblia response was not JSON")?;
        self.cache.lock().insert(cache_key, parsed.clone());
        Ok(parsed)
    }
}

impl Tagger for BibliaClient {
    fn tag(&self, text: &str) -> Result<String> {
        self.tag_with_format(text, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Stand-in tagger that wraps nothing, for exercising callers without
    // the network.
    struct NullTagger;

    impl Tagger for NullTagger {
        fn tag(&self, text: &str) -> Result<String> {
            Ok(text.to_string())
        }
    }

    struct RecordingTagger {
        calls: Mutex<Vec<String>>,
    }

    impl Tagger for RecordingTagger {
        fn tag(&self, text: &str) -> Result<String> {
            self.calls.lock().push(text.to_string());
            Ok(format!("[{}]", text))
        }
    }

    #[test]
    fn test_null_tagger_roundtrip() {
        let tagger = NullTagger;
        let text = "Does Mark 4:9 occur in here??";
        assert_eq!(tagger.tag(text).unwrap(), text);
    }

    #[test]
    fn test_tagger_as_trait_object() {
        let tagger = RecordingTagger {
            calls: Mutex::new(Vec::new()),
        };
        let dyn_tagger: &dyn Tagger = &tagger;
        assert_eq!(dyn_tagger.tag("See Mark 4:1-9.").unwrap(), "[See Mark 4:1-9.]");
        assert_eq!(tagger.calls.lock().len(), 1);
    }
}
