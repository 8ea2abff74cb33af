//! The notice form snapshot and its value types

use super::field::Field;
use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Format used when the time field is edited as text
pub const TIME_INPUT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Raised when a selector token names no known variant
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} `{token}`")]
pub struct UnknownToken {
    pub kind: &'static str,
    pub token: String,
}

/// Icon shown in front of the response message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RespIcon {
    #[default]
    #[serde(rename = "checkmark-circle-fill")]
    CheckmarkCircleFill,
    #[serde(rename = "close-fill")]
    CloseFill,
}

impl RespIcon {
    pub const ALL: [RespIcon; 2] = [RespIcon::CheckmarkCircleFill, RespIcon::CloseFill];

    /// Raw icon name, interpolated into the icon class
    pub fn as_str(self) -> &'static str {
        match self {
            RespIcon::CheckmarkCircleFill => "checkmark-circle-fill",
            RespIcon::CloseFill => "close-fill",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            RespIcon::CheckmarkCircleFill => "✅",
            RespIcon::CloseFill => "❌",
        }
    }

    pub fn next(self) -> Self {
        match self {
            RespIcon::CheckmarkCircleFill => RespIcon::CloseFill,
            RespIcon::CloseFill => RespIcon::CheckmarkCircleFill,
        }
    }
}

impl FromStr for RespIcon {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "checkmark-circle-fill" => Ok(RespIcon::CheckmarkCircleFill),
            "close-fill" => Ok(RespIcon::CloseFill),
            other => Err(UnknownToken {
                kind: "icon",
                token: other.to_string(),
            }),
        }
    }
}

/// Style of the response status line.
///
/// The page's stylesheet only knows `success`; an empty class token
/// selects the red alternate style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RespColor {
    #[default]
    #[serde(rename = "success")]
    Success,
    #[serde(rename = "")]
    Alternate,
}

impl RespColor {
    pub const ALL: [RespColor; 2] = [RespColor::Success, RespColor::Alternate];

    /// Raw class token, interpolated into the status class
    pub fn class_token(self) -> &'static str {
        match self {
            RespColor::Success => "success",
            RespColor::Alternate => "",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RespColor::Success => "Green",
            RespColor::Alternate => "Red",
        }
    }

    pub fn next(self) -> Self {
        match self {
            RespColor::Success => RespColor::Alternate,
            RespColor::Alternate => RespColor::Success,
        }
    }
}

impl FromStr for RespColor {
    type Err = UnknownToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "success" => Ok(RespColor::Success),
            "" | "red" | "alternate" => Ok(RespColor::Alternate),
            other => Err(UnknownToken {
                kind: "color",
                token: other.to_string(),
            }),
        }
    }
}

/// Side of a key/value row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowSide {
    Key,
    Value,
}

/// Non-blocking required-field hint for a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationHint {
    MissingKey,
    MissingValue,
}

impl ValidationHint {
    pub fn message(self) -> &'static str {
        match self {
            ValidationHint::MissingKey => "Key is required",
            ValidationHint::MissingValue => "Value is required",
        }
    }
}

/// One row of the voluntary info list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoRow {
    pub key: String,
    pub value: String,
}

impl InfoRow {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.hint().is_none()
    }

    /// First failing required check, key before value
    pub fn hint(&self) -> Option<ValidationHint> {
        if self.key.is_empty() {
            Some(ValidationHint::MissingKey)
        } else if self.value.is_empty() {
            Some(ValidationHint::MissingValue)
        } else {
            None
        }
    }

    /// Required check for one side, independent of the other
    pub fn side_hint(&self, side: RowSide) -> Option<ValidationHint> {
        if !self.side(side).is_empty() {
            return None;
        }
        Some(match side {
            RowSide::Key => ValidationHint::MissingKey,
            RowSide::Value => ValidationHint::MissingValue,
        })
    }

    pub fn side(&self, side: RowSide) -> &str {
        match side {
            RowSide::Key => &self.key,
            RowSide::Value => &self.value,
        }
    }

    pub fn side_mut(&mut self, side: RowSide) -> &mut String {
        match side {
            RowSide::Key => &mut self.key,
            RowSide::Value => &mut self.value,
        }
    }
}

/// Complete value of every editable field at one instant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSnapshot {
    pub section_header1: String,
    pub section_hint1_name: String,
    pub section_hint1_score: String,
    pub section_header2: String,
    pub section_header3: String,
    #[serde(default)]
    pub infos: Vec<InfoRow>,
    pub school: String,
    pub department: String,
    pub time: Option<NaiveDateTime>,
    pub message: String,
    pub resp_icon: RespIcon,
    pub resp_color: RespColor,
    pub resp_message: String,
    #[serde(default)]
    pub tips: String,
}

impl Default for FormSnapshot {
    fn default() -> Self {
        let now = Local::now().naive_local();
        Self::with_time(Some(now.with_nanosecond(0).unwrap_or(now)))
    }
}

impl FormSnapshot {
    /// Startup placeholders with an explicit notice time
    pub fn with_time(time: Option<NaiveDateTime>) -> Self {
        let infos = [
            ("招生单位", "清华大学"),
            ("层次", "硕士"),
            ("院系所", "计算机学院"),
            ("专业", "计算机科学与技术"),
            ("学习方式", "全日制"),
            ("研究方向", "人工智能"),
            ("导师", "不区分导师"),
            ("专项计划", "普通计划"),
            ("就业类型", "非定向就业"),
        ]
        .into_iter()
        .map(|(key, value)| InfoRow::new(key, value))
        .collect();

        let tips = [
            "1. 请在招生单位规定的时间内通过系统确认是否接受录取通知，未按时回复，招生单位可取消待录取通知。未通过系统接受待录取通知的立功表彰退役军人免试生不能被招生单位录取。",
            "2. 只能接受一个待录取通知。",
            "3. 招生单位取消待录取通知后，考生方可登录系统进行确认。确认取消待录取后，可接受其他单位的待录取通知。",
            "4. 请及时登录系统查看并处理相关通知。",
        ]
        .join("\n");

        Self {
            section_header1: "待录取通知".to_string(),
            section_hint1_name: "张三".to_string(),
            section_hint1_score: "复试总成绩：114514".to_string(),
            section_header2: "志愿信息".to_string(),
            section_header3: "注意事项".to_string(),
            infos,
            school: "清华大学".to_string(),
            department: "招生办".to_string(),
            time,
            message: "请及时接受待录取通知".to_string(),
            resp_icon: RespIcon::default(),
            resp_color: RespColor::default(),
            resp_message: "你于2025-09-25 14:00接受了清华大学的待录取通知".to_string(),
            tips,
        }
    }

    /// Text value of a free-text field; `None` for time and selectors
    pub fn text(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::SectionHeader1 => &self.section_header1,
            Field::SectionHint1Name => &self.section_hint1_name,
            Field::SectionHint1Score => &self.section_hint1_score,
            Field::SectionHeader2 => &self.section_header2,
            Field::SectionHeader3 => &self.section_header3,
            Field::School => &self.school,
            Field::Department => &self.department,
            Field::Message => &self.message,
            Field::RespMessage => &self.resp_message,
            Field::Tips => &self.tips,
            Field::Time | Field::RespIcon | Field::RespColor => return None,
        };
        Some(value)
    }

    pub(super) fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        let value = match field {
            Field::SectionHeader1 => &mut self.section_header1,
            Field::SectionHint1Name => &mut self.section_hint1_name,
            Field::SectionHint1Score => &mut self.section_hint1_score,
            Field::SectionHeader2 => &mut self.section_header2,
            Field::SectionHeader3 => &mut self.section_header3,
            Field::School => &mut self.school,
            Field::Department => &mut self.department,
            Field::Message => &mut self.message,
            Field::RespMessage => &mut self.resp_message,
            Field::Tips => &mut self.tips,
            Field::Time | Field::RespIcon | Field::RespColor => return None,
        };
        Some(value)
    }

    /// Time formatted for the text editor; empty when unset
    pub fn time_input(&self) -> String {
        self.time
            .map(|t| t.format(TIME_INPUT_FORMAT).to_string())
            .unwrap_or_default()
    }
}

/// Coerce free text into a notice time.
///
/// Accepts seconds, minutes, or a bare date (midnight). Anything else,
/// including blank input, yields `None`.
pub fn parse_time(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    NaiveDateTime::parse_from_str(input, TIME_INPUT_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(input, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}
