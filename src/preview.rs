//! Preview-page handoff through URL query parameters (`template`, `title`).

use url::Url;

use crate::registry;
use crate::{Error, Result};

const TEMPLATE_PARAM: &str = "template";
const TITLE_PARAM: &str = "title";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewLink {
    pub template: String,
    pub title: String,
}

impl PreviewLink {
    pub fn new(template: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            title: title.into(),
        }
    }

    /// `base` with the query replaced by `template` and `title`
    pub fn to_url(&self, base: &str) -> Result<Url> {
        let mut url = Url::parse(base)?;
        url.query_pairs_mut()
            .clear()
            .append_pair(TEMPLATE_PARAM, &self.template)
            .append_pair(TITLE_PARAM, &self.title);
        Ok(url)
    }

    /// A missing template selects the registry default; a missing or
    /// blank title is an error.
    pub fn from_url(url: &Url) -> Result<Self> {
        let mut template = None;
        let mut title = None;
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                TEMPLATE_PARAM => template = Some(value.into_owned()),
                TITLE_PARAM => title = Some(value.into_owned()),
                _ => {}
            }
        }
        let title = title
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| Error::Preview(format!("missing '{}' in {}", TITLE_PARAM, url)))?;
        let template = template
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| registry::default_style().id.to_string());
        Ok(Self { template, title })
    }

    pub fn parse(link: &str) -> Result<Self> {
        Self::from_url(&Url::parse(link)?)
    }
}
