use chrono::{Datelike, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::form::PickerOutcome;
use crate::models::MIN_BIRTH_YEAR;
use crate::tui::widgets::common;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSegment {
    Year,
    Month,
    Day,
}

impl DateSegment {
    fn next(self) -> Self {
        match self {
            Self::Year => Self::Month,
            Self::Month => Self::Day,
            Self::Day => Self::Year,
        }
    }

    fn previous(self) -> Self {
        match self {
            Self::Year => Self::Day,
            Self::Month => Self::Year,
            Self::Day => Self::Month,
        }
    }
}

/// Number of days in the given month
pub fn days_in_month(year: i32, month: u32) -> u32 {
    (28..=31)
        .rev()
        .find(|&day| NaiveDate::from_ymd_opt(year, month, day).is_some())
        .unwrap_or(28)
}

/// Popup date picker editing year, month and day segments
///
/// The picked date never goes past `max` (today, for a date of birth) or
/// before January 1st of [`MIN_BIRTH_YEAR`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePicker {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub segment: DateSegment,
    pub max: NaiveDate,
}

impl DatePicker {
    /// Open on `initial`, or on `max` when there is no current value
    pub fn new(initial: Option<NaiveDate>, max: NaiveDate) -> Self {
        let start = initial.unwrap_or(max).min(max);
        let mut picker = Self {
            year: start.year(),
            month: start.month(),
            day: start.day(),
            segment: DateSegment::Year,
            max,
        };
        picker.normalize();
        picker
    }

    /// The date currently shown
    pub fn date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day).unwrap_or(self.max)
    }

    fn normalize(&mut self) {
        self.year = self.year.clamp(MIN_BIRTH_YEAR, self.max.year());
        self.month = self.month.clamp(1, 12);
        self.day = self.day.clamp(1, days_in_month(self.year, self.month));

        let date = self.date();
        if date > self.max {
            self.year = self.max.year();
            self.month = self.max.month();
            self.day = self.max.day();
        }
    }

    fn adjust(&mut self, delta: i32) {
        match self.segment {
            DateSegment::Year => self.year += delta,
            DateSegment::Month => {
                // Months wrap within the year
                self.month = ((self.month as i32 - 1 + delta).rem_euclid(12) + 1) as u32;
            }
            DateSegment::Day => {
                let days = days_in_month(self.year, self.month) as i32;
                self.day = ((self.day as i32 - 1 + delta).rem_euclid(days) + 1) as u32;
            }
        }
        self.normalize();
    }

    /// Handle keyboard input
    ///
    /// Returns `None` while the picker stays open.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<PickerOutcome<NaiveDate>> {
        match key.code {
            KeyCode::Left | KeyCode::BackTab => self.segment = self.segment.previous(),
            KeyCode::Right | KeyCode::Tab => self.segment = self.segment.next(),
            KeyCode::Up => self.adjust(1),
            KeyCode::Down => self.adjust(-1),
            KeyCode::PageUp => self.adjust(10),
            KeyCode::PageDown => self.adjust(-10),
            KeyCode::Enter => return Some(PickerOutcome::Selected(self.date())),
            KeyCode::Esc => return Some(PickerOutcome::Cancelled),
            _ => {}
        }
        None
    }

    pub fn render_as_popup(&self, frame: &mut Frame, area: Rect) {
        let popup_area = common::centered_rect(40, 30, area);

        frame.render_widget(Clear, popup_area);

        let segment_span = |text: String, segment: DateSegment| {
            if segment == self.segment {
                Span::styled(
                    text,
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::raw(text)
            }
        };

        let date_line = Line::from(vec![
            segment_span(format!("{:04}", self.year), DateSegment::Year),
            Span::raw(" - "),
            segment_span(format!("{:02}", self.month), DateSegment::Month),
            Span::raw(" - "),
            segment_span(format!("{:02}", self.day), DateSegment::Day),
        ])
        .alignment(Alignment::Center);

        let content = vec![
            Line::from(""),
            date_line,
            Line::from(""),
            Line::from("[←/→] Segment  [↑/↓] Change").alignment(Alignment::Center),
            Line::from("[Enter] Select  [Esc] Cancel").alignment(Alignment::Center),
        ];

        let widget = Paragraph::new(content).block(
            Block::default()
                .title("Date of Birth")
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Cyan)),
        );

        frame.render_widget(widget, popup_area);
    }
}
