use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PreviewTab {
    Html,
    Css,
    Js,
}

impl PreviewTab {
    pub fn template(self) -> &'static str {
        match self {
            PreviewTab::Html => HTML_TEMPLATE,
            PreviewTab::Css => CSS_TEMPLATE,
            PreviewTab::Js => JS_TEMPLATE,
        }
    }
}

const HTML_TEMPLATE: &str = r#"<div class="container">
    <h1>Hello World!</h1>
    <p>Start coding here...</p>
</div>"#;

const CSS_TEMPLATE: &str = r#"/* Add your CSS here */
.container {
    padding: 20px;
    text-align: center;
}

h1 {
    color: #00ff9d;
}"#;

const JS_TEMPLATE: &str = r#"// Add your JavaScript here
console.log('Hello from JavaScript!');"#;

/// Editor contents for the three preview tabs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewSources {
    pub html: String,
    pub css: String,
    pub js: String,
}

impl Default for PreviewSources {
    fn default() -> Self {
        Self {
            html: HTML_TEMPLATE.to_string(),
            css: CSS_TEMPLATE.to_string(),
            js: JS_TEMPLATE.to_string(),
        }
    }
}

impl PreviewSources {
    fn slot(&mut self, tab: PreviewTab) -> &mut String {
        match tab {
            PreviewTab::Html => &mut self.html,
            PreviewTab::Css => &mut self.css,
            PreviewTab::Js => &mut self.js,
        }
    }

    pub fn set(&mut self, tab: PreviewTab, source: impl Into<String>) {
        *self.slot(tab) = source.into();
    }

    /// Restores one tab to its starter template.
    pub fn reset(&mut self, tab: PreviewTab) {
        self.set(tab, tab.template());
    }

    /// Full document: styles in the head, markup then script in the body.
    pub fn compose(&self) -> String {
        format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<style>{css}</style>\n</head>\n<body>\n{html}\n<script>{js}</script>\n</body>\n</html>\n",
            css = self.css,
            html = self.html,
            js = self.js,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_order() {
        let sources = PreviewSources {
            html: "<p>hi</p>".to_string(),
            css: "p{}".to_string(),
            js: "go()".to_string(),
        };
        let doc = sources.compose();
        assert!(doc.starts_with("<!DOCTYPE html>"));
        let style = doc.find("<style>p{}</style>").unwrap();
        let body = doc.find("<p>hi</p>").unwrap();
        let script = doc.find("<script>go()</script>").unwrap();
        assert!(style < body && body < script);
    }

    #[test]
    fn test_reset_single_tab() {
        let mut sources = PreviewSources::default();
        sources.set(PreviewTab::Css, "");
        sources.set(PreviewTab::Js, "alert(1)");
        sources.reset(PreviewTab::Css);
        assert_eq!(sources.css, CSS_TEMPLATE);
        assert_eq!(sources.js, "alert(1)");
    }

    #[test]
    fn test_tab_names() {
        assert_eq!("JS".parse::<PreviewTab>().unwrap(), PreviewTab::Js);
        assert_eq!(PreviewTab::Html.to_string(), "html");
    }
}
