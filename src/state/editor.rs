//! Editor panel state: open section, focused slot, and text buffers

use super::forms::{parse_time, Field, FormSnapshot, RowSide};

/// Collapsible group of fields in the editor panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Headers,
    Infos,
    Notice,
    Response,
    Tips,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Headers,
        Section::Infos,
        Section::Notice,
        Section::Response,
        Section::Tips,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::Headers => "Section Headers",
            Section::Infos => "Voluntary Info",
            Section::Notice => "Notice Details",
            Section::Response => "Response",
            Section::Tips => "Notes",
        }
    }

    /// Scalar fields edited in this section (the info rows are not fields)
    pub fn fields(self) -> &'static [Field] {
        match self {
            Section::Headers => &[
                Field::SectionHeader1,
                Field::SectionHint1Name,
                Field::SectionHint1Score,
                Field::SectionHeader2,
                Field::SectionHeader3,
            ],
            Section::Infos => &[],
            Section::Notice => &[
                Field::School,
                Field::Department,
                Field::Time,
                Field::Message,
            ],
            Section::Response => &[Field::RespIcon, Field::RespColor, Field::RespMessage],
            Section::Tips => &[Field::Tips],
        }
    }

    /// Parse the config file's section key
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "headers" => Some(Section::Headers),
            "infos" => Some(Section::Infos),
            "notice" => Some(Section::Notice),
            "response" => Some(Section::Response),
            "tips" => Some(Section::Tips),
            _ => None,
        }
    }

    fn index(self) -> usize {
        Section::ALL
            .iter()
            .position(|s| *s == self)
            .unwrap_or_default()
    }

    pub fn next(self) -> Self {
        Section::ALL[(self.index() + 1) % Section::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let count = Section::ALL.len();
        Section::ALL[(self.index() + count - 1) % count]
    }
}

/// Something in the editor that can hold focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusSlot {
    Field(Field),
    Row(usize, RowSide),
    AddRow,
}

/// Focus and buffer state of the editor panel
#[derive(Debug, Clone)]
pub struct EditorState {
    pub section: Section,
    pub active_slot: usize,
    /// Raw text of the time field; the store only holds the parsed value
    pub time_input: String,
}

impl EditorState {
    pub fn new(section: Section, snapshot: &FormSnapshot) -> Self {
        Self {
            section,
            active_slot: 0,
            time_input: snapshot.time_input(),
        }
    }

    /// Focus slots of the open section, in Tab order
    pub fn slots(&self, row_count: usize) -> Vec<FocusSlot> {
        if self.section == Section::Infos {
            let mut slots: Vec<FocusSlot> = (0..row_count)
                .flat_map(|i| [FocusSlot::Row(i, RowSide::Key), FocusSlot::Row(i, RowSide::Value)])
                .collect();
            slots.push(FocusSlot::AddRow);
            slots
        } else {
            self.section
                .fields()
                .iter()
                .copied()
                .map(FocusSlot::Field)
                .collect()
        }
    }

    pub fn slot_count(&self, row_count: usize) -> usize {
        if self.section == Section::Infos {
            row_count * 2 + 1
        } else {
            self.section.fields().len()
        }
    }

    pub fn focused(&self, row_count: usize) -> FocusSlot {
        let slots = self.slots(row_count);
        let index = self.active_slot.min(slots.len().saturating_sub(1));
        slots.get(index).copied().unwrap_or(FocusSlot::AddRow)
    }

    pub fn next_slot(&mut self, row_count: usize) {
        let count = self.slot_count(row_count);
        self.active_slot = (self.active_slot + 1) % count;
    }

    pub fn prev_slot(&mut self, row_count: usize) {
        let count = self.slot_count(row_count);
        if self.active_slot == 0 {
            self.active_slot = count - 1;
        } else {
            self.active_slot -= 1;
        }
    }

    pub fn next_section(&mut self) {
        self.open(self.section.next());
    }

    pub fn prev_section(&mut self) {
        self.open(self.section.prev());
    }

    pub fn open(&mut self, section: Section) {
        self.section = section;
        self.active_slot = 0;
    }

    /// Move focus onto one side of a row
    pub fn focus_row(&mut self, index: usize, side: RowSide) {
        self.section = Section::Infos;
        self.active_slot = index * 2
            + match side {
                RowSide::Key => 0,
                RowSide::Value => 1,
            };
    }

    /// Keep focus in range after rows were removed
    pub fn clamp(&mut self, row_count: usize) {
        let count = self.slot_count(row_count);
        self.active_slot = self.active_slot.min(count.saturating_sub(1));
    }

    /// Hint shown under the time field when its text does not parse
    pub fn time_hint(&self) -> Option<&'static str> {
        if !self.time_input.trim().is_empty() && parse_time(&self.time_input).is_none() {
            Some("Invalid time, expected YYYY-MM-DD HH:mm:ss")
        } else {
            None
        }
    }
}
