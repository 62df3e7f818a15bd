use ph_core::{PageFetcher, Result, TargetConfig, Teaser};
use scraper::Selector;
use tracing::{debug, info};

/// Scrapes the teaser texts of one listing page.
pub struct TeaserScraper {
    fetcher: Box<dyn PageFetcher>,
    config: TargetConfig,
    selector: Selector,
}

impl TeaserScraper {
    /// Compiles the configured selector up front so a bad expression fails
    /// before any network traffic.
    pub fn new(fetcher: Box<dyn PageFetcher>, config: TargetConfig) -> Result<Self> {
        let selector = utils::compile_selector(&config.selector)?;
        Ok(Self {
            fetcher,
            config,
            selector,
        })
    }

    pub fn config(&self) -> &TargetConfig {
        &self.config
    }

    pub async fn get_teasers(&self) -> Result<Vec<Teaser>> {
        info!("📡 Fetching {}", self.config.url);
        let html = self.fetcher.fetch(&self.config.url).await?;
        debug!("Received {} bytes", html.len());

        let teasers = utils::extract_teasers(&html, &self.selector);
        info!("📰 Found {} teasers matching '{}'", teasers.len(), self.config.selector);
        Ok(teasers)
    }
}

/// Parsing and selection helpers built on `scraper`
pub mod utils {
    use ph_core::{Error, Result, Teaser};
    use scraper::{ElementRef, Html, Selector};

    /// Elements that separate words in rendered text.
    const BLOCK_ELEMENTS: &[&str] = &[
        "address", "applet", "article", "aside", "audio", "blockquote", "body", "br",
        "canvas", "caption", "center", "col", "colgroup", "dd", "del", "details", "dir",
        "div", "dl", "dt", "fieldset", "figcaption", "figure", "footer", "form", "frame",
        "frameset", "h1", "h2", "h3", "h4", "h5", "h6", "head", "header", "hgroup", "hr",
        "html", "ins", "li", "listing", "main", "marquee", "math", "menu", "nav",
        "noframes", "noscript", "ol", "p", "plaintext", "pre", "section", "summary",
        "svg", "table", "tbody", "td", "template", "tfoot", "th", "thead", "tr", "ul",
        "video",
    ];

    const HIDDEN_ELEMENTS: &[&str] = &["script", "style"];

    /// Lenient HTML5 parse; malformed input still yields a tree.
    pub fn parse_document(html: &str) -> Html {
        Html::parse_document(html)
    }

    pub fn compile_selector(selector: &str) -> Result<Selector> {
        Selector::parse(selector).map_err(|e| Error::Selector(format!("{}: {}", selector, e)))
    }

    /// All matches in document order, duplicates included.
    pub fn select_teasers(document: &Html, selector: &Selector) -> Vec<Teaser> {
        document
            .select(selector)
            .map(|el| Teaser::new(element_text(el)))
            .collect()
    }

    pub fn extract_teasers(html: &str, selector: &Selector) -> Vec<Teaser> {
        let document = parse_document(html);
        select_teasers(&document, selector)
    }

    /// Visible text of an element: descendant text with a word break on both
    /// sides of each block element, whitespace collapsed and trimmed.
    pub fn element_text(element: ElementRef) -> String {
        let mut raw = String::new();
        collect_text(element, &mut raw);
        normalize_whitespace(&raw)
    }

    fn collect_text(element: ElementRef, out: &mut String) {
        let name = element.value().name();
        if HIDDEN_ELEMENTS.contains(&name) {
            return;
        }
        let block = BLOCK_ELEMENTS.contains(&name);
        if block {
            out.push(' ');
        }
        for child in element.children() {
            if let Some(child) = ElementRef::wrap(child) {
                collect_text(child, out);
            } else if let Some(text) = child.value().as_text() {
                if name == "noscript" {
                    // Scripting is on while parsing, so noscript holds raw markup.
                    let fragment = Html::parse_fragment(text);
                    collect_text(fragment.root_element(), out);
                } else {
                    out.push_str(text);
                }
            }
        }
        if block {
            out.push(' ');
        }
    }

    pub fn normalize_whitespace(text: &str) -> String {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}
