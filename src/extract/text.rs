use scraper::Html;

/// Flattened text of one fetched page.
///
/// The raw form keeps the source line structure for the positional heuristic;
/// `normalized` collapses all whitespace runs for the monolithic regex pass.
#[derive(Debug, Clone)]
pub struct PageText {
    raw: String,
}

impl PageText {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// Flatten an HTML document to its text nodes, one per line
    pub fn from_html(html: &str) -> Self {
        let document = Html::parse_document(html);
        let text = document
            .root_element()
            .text()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join("\n");
        Self { raw: text }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn is_blank(&self) -> bool {
        self.raw.trim().is_empty()
    }

    /// Whole text with every whitespace run collapsed to a single space
    pub fn normalized(&self) -> String {
        self.raw.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Trimmed source lines, in document order
    pub fn lines(&self) -> Vec<&str> {
        self.raw.lines().map(str::trim).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_collapses_whitespace() {
        let page = PageText::new("1   Jane Doe\n\tExample Team\n 250 ");
        assert_eq!(page.normalized(), "1 Jane Doe Example Team 250");
    }

    #[test]
    fn lines_are_trimmed_in_order() {
        let page = PageText::new("  Jane Doe \nExample Team\n 10");
        assert_eq!(page.lines(), vec!["Jane Doe", "Example Team", "10"]);
    }

    #[test]
    fn html_flattening_keeps_cell_texts_as_lines() {
        let html = "<html><body><div>Jane Doe</div><span>Example Team</span><p>10</p></body></html>";
        let page = PageText::from_html(html);
        assert_eq!(page.lines(), vec!["Jane Doe", "Example Team", "10"]);
    }

    #[test]
    fn blank_detection() {
        assert!(PageText::new("  \n ").is_blank());
        assert!(!PageText::new("x").is_blank());
    }
}
