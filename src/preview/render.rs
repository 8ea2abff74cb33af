//! Projection of a form snapshot into the notice document

use super::document::{DetailRow, NoticeDocument, StatusLine};
use crate::state::FormSnapshot;

/// Time format shown next to the school name
pub const PREVIEW_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Separator between the candidate's name and score
const EM_SPACE: char = '\u{2003}';

/// Render the notice page for a snapshot. Pure and total.
pub fn render(snapshot: &FormSnapshot) -> NoticeDocument {
    let header = &snapshot.section_header1;

    let rows = snapshot
        .infos
        .iter()
        .map(|row| DetailRow {
            label: row.key.clone(),
            value: row.value.clone(),
        })
        .collect();

    let notes = if snapshot.tips.is_empty() {
        Vec::new()
    } else {
        snapshot.tips.split('\n').map(str::to_string).collect()
    };

    NoticeDocument {
        breadcrumb: vec![format!("我的{header}"), format!("{header}详情")],
        title: header.clone(),
        candidate: format!(
            "{}{EM_SPACE}{}",
            snapshot.section_hint1_name, snapshot.section_hint1_score
        ),
        school: snapshot.school.clone(),
        time: snapshot
            .time
            .map(|t| t.format(PREVIEW_TIME_FORMAT).to_string()),
        notice_text: format!("{}-{}", snapshot.message, snapshot.department),
        status: StatusLine {
            class: format!("fstz-tips status {}", snapshot.resp_color.class_token()),
            icon_class: format!("ch-icon ch-icon-{}", snapshot.resp_icon.as_str()),
            message: snapshot.resp_message.clone(),
        },
        subtitle: snapshot.section_header2.clone(),
        rows,
        notes_heading: snapshot.section_header3.clone(),
        notes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{InfoRow, RespColor, RespIcon};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn snapshot() -> FormSnapshot {
        let time = NaiveDate::from_ymd_opt(2025, 9, 25).and_then(|d| d.and_hms_opt(14, 5, 59));
        FormSnapshot::with_time(time)
    }

    fn blank() -> FormSnapshot {
        FormSnapshot {
            section_header1: String::new(),
            section_hint1_name: String::new(),
            section_hint1_score: String::new(),
            section_header2: String::new(),
            section_header3: String::new(),
            infos: Vec::new(),
            school: String::new(),
            department: String::new(),
            time: None,
            message: String::new(),
            resp_icon: RespIcon::CheckmarkCircleFill,
            resp_color: RespColor::Success,
            resp_message: String::new(),
            tips: String::new(),
        }
    }

    #[test]
    fn test_render_is_pure() {
        let snapshot = snapshot();
        assert_eq!(render(&snapshot), render(&snapshot));
    }

    #[test]
    fn test_render_default_snapshot() {
        let doc = render(&snapshot());
        assert_eq!(doc.breadcrumb, vec!["我的待录取通知", "待录取通知详情"]);
        assert_eq!(doc.title, "待录取通知");
        assert_eq!(doc.candidate, "张三\u{2003}复试总成绩：114514");
        assert_eq!(doc.school, "清华大学");
        assert_eq!(doc.time.as_deref(), Some("2025-09-25 14:05"));
        assert_eq!(doc.notice_text, "请及时接受待录取通知-招生办");
        assert_eq!(doc.status.class, "fstz-tips status success");
        assert_eq!(doc.status.icon_class, "ch-icon ch-icon-checkmark-circle-fill");
        assert_eq!(doc.rows.len(), 9);
        assert_eq!(doc.notes.len(), 4);
    }

    #[test]
    fn test_render_blank_snapshot_is_total() {
        let doc = render(&blank());
        assert_eq!(doc.breadcrumb, vec!["我的", "详情"]);
        assert_eq!(doc.candidate, "\u{2003}");
        assert_eq!(doc.time, None);
        assert_eq!(doc.notice_text, "-");
        assert!(doc.rows.is_empty());
        assert!(doc.notes.is_empty());
    }

    #[test]
    fn test_two_line_tips_render_two_notes() {
        let mut snapshot = snapshot();
        snapshot.tips = "line1\nline2".to_string();
        assert_eq!(render(&snapshot).notes, vec!["line1", "line2"]);
    }

    #[test]
    fn test_rows_render_in_stored_order() {
        let mut snapshot = snapshot();
        snapshot.infos = vec![InfoRow::new("A", "1"), InfoRow::new("B", "2")];
        let doc = render(&snapshot);
        assert_eq!(
            doc.rows,
            vec![
                DetailRow {
                    label: "A".into(),
                    value: "1".into()
                },
                DetailRow {
                    label: "B".into(),
                    value: "2".into()
                },
            ]
        );
    }

    #[test]
    fn test_empty_rows_and_tips_keep_headings() {
        let mut snapshot = snapshot();
        snapshot.infos.clear();
        snapshot.tips.clear();
        let doc = render(&snapshot);
        assert_eq!(doc.subtitle, "志愿信息");
        assert_eq!(doc.notes_heading, "注意事项");
        assert!(doc.rows.is_empty());
        assert!(doc.notes.is_empty());
    }

    #[test]
    fn test_invalid_rows_still_render_as_empty_cells() {
        let mut snapshot = snapshot();
        snapshot.infos = vec![InfoRow::default(), InfoRow::new("", "only value")];
        let doc = render(&snapshot);
        assert_eq!(doc.rows.len(), 2);
        assert_eq!(doc.rows[0].label, "");
        assert_eq!(doc.rows[0].value, "");
        assert_eq!(doc.rows[1].value, "only value");
    }

    #[test]
    fn test_alternate_color_and_close_icon_are_raw() {
        let mut snapshot = snapshot();
        snapshot.resp_color = RespColor::Alternate;
        snapshot.resp_icon = RespIcon::CloseFill;
        let status = render(&snapshot).status;
        assert_eq!(status.class, "fstz-tips status ");
        assert_eq!(status.icon_class, "ch-icon ch-icon-close-fill");
    }

    #[test]
    fn test_trailing_newline_yields_empty_last_note() {
        let mut snapshot = snapshot();
        snapshot.tips = "only\n".to_string();
        assert_eq!(render(&snapshot).notes, vec!["only", ""]);
    }
}
