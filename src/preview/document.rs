//! Rendered notice document and its HTML serialization

use std::fmt::Write;

/// Label/value row under the subtitle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub label: String,
    pub value: String,
}

/// Status line at the bottom of the detail box
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    /// Full class attribute, e.g. `fstz-tips status success`
    pub class: String,
    /// Full icon class attribute, e.g. `ch-icon ch-icon-close-fill`
    pub icon_class: String,
    pub message: String,
}

/// The preview as a document fragment, one field per visual block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeDocument {
    pub breadcrumb: Vec<String>,
    pub title: String,
    pub candidate: String,
    pub school: String,
    /// `None` when the snapshot has no time
    pub time: Option<String>,
    pub notice_text: String,
    pub status: StatusLine,
    pub subtitle: String,
    pub rows: Vec<DetailRow>,
    pub notes_heading: String,
    pub notes: Vec<String>,
}

impl NoticeDocument {
    /// Serialize as an HTML fragment using the notice page's class names
    pub fn to_html(&self) -> String {
        let mut html = String::new();

        html.push_str("<div class=\"ivu-breadcrumb\">");
        for crumb in &self.breadcrumb {
            let _ = write!(
                html,
                "<span><span class=\"ivu-breadcrumb-item-link\">{}</span>\
                 <span class=\"ivu-breadcrumb-item-separator\">/</span></span>",
                escape(crumb)
            );
        }
        html.push_str("</div>");

        html.push_str("<div class=\"main-content fstz-detail\"><div class=\"fstz-detail-box\">");
        let _ = write!(
            html,
            "<div class=\"title-box\">{}</div><div class=\"xm\">{}</div>",
            escape(&self.title),
            escape(&self.candidate)
        );
        let _ = write!(
            html,
            "<div class=\"content\"><div class=\"dwmc\">{} <span class=\"time\">{}</span></div>\
             <div class=\"tz-text\">{}</div></div>",
            escape(&self.school),
            escape(self.time.as_deref().unwrap_or_default()),
            escape(&self.notice_text)
        );
        let _ = write!(
            html,
            "<div class=\"fstz-footer\"><div class=\"{}\"><i class=\"{}\"></i>{}</div></div></div>",
            escape(&self.status.class),
            escape(&self.status.icon_class),
            escape(&self.status.message)
        );

        let _ = write!(
            html,
            "<div class=\"sub-title\">{}</div><div class=\"bmxx-detail\">",
            escape(&self.subtitle)
        );
        for row in &self.rows {
            let _ = write!(
                html,
                "<div class=\"bmxx-item\"><div class=\"bmxx-label\">{}</div>\
                 <div class=\"bmxx-value\">{}</div></div>",
                escape(&row.label),
                escape(&row.value)
            );
        }
        html.push_str("</div>");

        let _ = write!(
            html,
            "<div class=\"instructions\"><strong>{}</strong>",
            escape(&self.notes_heading)
        );
        for note in &self.notes {
            let _ = write!(html, "<br />{}", escape(note));
        }
        html.push_str("</div></div>");

        html
    }
}

/// Escape text for use in element content and quoted attributes
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document() -> NoticeDocument {
        NoticeDocument {
            breadcrumb: vec!["我的通知".into(), "通知详情".into()],
            title: "通知".into(),
            candidate: "张三\u{2003}100".into(),
            school: "School".into(),
            time: None,
            notice_text: "msg-dept".into(),
            status: StatusLine {
                class: "fstz-tips status ".into(),
                icon_class: "ch-icon ch-icon-close-fill".into(),
                message: "done".into(),
            },
            subtitle: "Info".into(),
            rows: vec![DetailRow {
                label: "A".into(),
                value: "1".into(),
            }],
            notes_heading: "Notes".into(),
            notes: vec!["a".into(), "b".into()],
        }
    }

    #[test]
    fn test_escape() {
        assert_eq!(
            escape("<b>\"Tom\" & 'Jerry'</b>"),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_html_contains_status_classes_verbatim() {
        let html = document().to_html();
        assert!(html.contains("<div class=\"fstz-tips status \">"));
        assert!(html.contains("<i class=\"ch-icon ch-icon-close-fill\"></i>done"));
    }

    #[test]
    fn test_html_rows_and_notes() {
        let html = document().to_html();
        assert!(html.contains(
            "<div class=\"bmxx-item\"><div class=\"bmxx-label\">A</div><div class=\"bmxx-value\">1</div></div>"
        ));
        assert!(html.contains("<strong>Notes</strong><br />a<br />b</div>"));
    }

    #[test]
    fn test_html_empty_time_renders_empty_span() {
        let html = document().to_html();
        assert!(html.contains("School <span class=\"time\"></span>"));
    }

    #[test]
    fn test_html_escapes_user_text() {
        let mut doc = document();
        doc.title = "<script>".into();
        let html = doc.to_html();
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
