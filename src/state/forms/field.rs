//! Form field identifiers and their editing metadata

/// How a field is edited in the form panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    MultilineText,
    /// Free text coerced into a timestamp
    Time,
    Icon,
    Color,
}

impl FieldKind {
    pub fn is_multiline(self) -> bool {
        matches!(self, FieldKind::MultilineText)
    }

    pub fn is_selector(self) -> bool {
        matches!(self, FieldKind::Icon | FieldKind::Color)
    }
}

/// Every scalar field of the notice form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    SectionHeader1,
    SectionHint1Name,
    SectionHint1Score,
    SectionHeader2,
    SectionHeader3,
    School,
    Department,
    Time,
    Message,
    RespIcon,
    RespColor,
    RespMessage,
    Tips,
}

impl Field {
    pub const ALL: [Field; 13] = [
        Field::SectionHeader1,
        Field::SectionHint1Name,
        Field::SectionHint1Score,
        Field::SectionHeader2,
        Field::SectionHeader3,
        Field::School,
        Field::Department,
        Field::Time,
        Field::Message,
        Field::RespIcon,
        Field::RespColor,
        Field::RespMessage,
        Field::Tips,
    ];

    /// Serialized name, matching the snapshot's JSON keys
    pub fn name(self) -> &'static str {
        match self {
            Field::SectionHeader1 => "sectionHeader1",
            Field::SectionHint1Name => "sectionHint1Name",
            Field::SectionHint1Score => "sectionHint1Score",
            Field::SectionHeader2 => "sectionHeader2",
            Field::SectionHeader3 => "sectionHeader3",
            Field::School => "school",
            Field::Department => "department",
            Field::Time => "time",
            Field::Message => "message",
            Field::RespIcon => "respIcon",
            Field::RespColor => "respColor",
            Field::RespMessage => "respMessage",
            Field::Tips => "tips",
        }
    }

    /// Label shown above the field in the form panel
    pub fn label(self) -> &'static str {
        match self {
            Field::SectionHeader1 => "Section Header 1",
            Field::SectionHint1Name => "Candidate Name",
            Field::SectionHint1Score => "Candidate Score",
            Field::SectionHeader2 => "Section Header 2",
            Field::SectionHeader3 => "Section Header 3",
            Field::School => "School",
            Field::Department => "Department",
            Field::Time => "Notice Time",
            Field::Message => "Notice Message",
            Field::RespIcon => "Icon",
            Field::RespColor => "Color",
            Field::RespMessage => "Response Text",
            Field::Tips => "Notes",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Field::Time => FieldKind::Time,
            Field::RespIcon => FieldKind::Icon,
            Field::RespColor => FieldKind::Color,
            Field::Message | Field::Tips => FieldKind::MultilineText,
            _ => FieldKind::Text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = Field::ALL.iter().map(|f| f.name()).collect();
        assert_eq!(names.len(), Field::ALL.len());
    }

    #[test]
    fn test_multiline_fields() {
        let multiline: Vec<_> = Field::ALL
            .iter()
            .filter(|f| f.kind().is_multiline())
            .collect();
        assert_eq!(multiline, vec![&Field::Message, &Field::Tips]);
    }

    #[test]
    fn test_selector_fields() {
        assert!(Field::RespIcon.kind().is_selector());
        assert!(Field::RespColor.kind().is_selector());
        assert!(!Field::Time.kind().is_selector());
        assert!(!Field::School.kind().is_selector());
    }
}
