#[cfg(test)]
#[path = "attendance_test.rs"]
mod attendance_test;

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceKind {
    ClockIn,
    ClockOut,
}

impl fmt::Display for AttendanceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ClockIn => write!(f, "出勤"),
            Self::ClockOut => write!(f, "退勤"),
        }
    }
}

/// One punch of the clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceTime {
    /// ISO-8601 timestamp as produced by the browser clock.
    pub pushed_at: String,
    #[serde(default)]
    pub remark: String,
}

impl AttendanceTime {
    #[must_use]
    pub fn at(pushed_at: impl Into<String>) -> Self {
        Self {
            pushed_at: pushed_at.into(),
            remark: String::new(),
        }
    }
}

/// A working day: at most one effective clock-in and one effective clock-out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendance {
    /// `YYYY-MM-DD` of the day the record belongs to.
    pub day: String,
    pub clocked_in: Option<AttendanceTime>,
    pub clocked_out: Option<AttendanceTime>,
}

impl Attendance {
    #[must_use]
    pub fn new(day: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            clocked_in: None,
            clocked_out: None,
        }
    }

    #[must_use]
    pub const fn is_clocked_out(&self) -> bool {
        self.clocked_out.is_some()
    }

    /// Clock-in until one is recorded; every later punch is a clock-out that
    /// replaces the previous one.
    #[must_use]
    pub const fn next_kind(&self) -> AttendanceKind {
        if self.clocked_in.is_none() {
            AttendanceKind::ClockIn
        } else {
            AttendanceKind::ClockOut
        }
    }

    /// Records `time` as the next punch and returns its kind.
    pub fn punch(&mut self, time: AttendanceTime) -> AttendanceKind {
        let kind = self.next_kind();
        match kind {
            AttendanceKind::ClockIn => self.clocked_in = Some(time),
            AttendanceKind::ClockOut => {
                if self.is_clocked_out() {
                    log::debug!("replacing clock-out of {}", self.day);
                }
                self.clocked_out = Some(time);
            }
        }
        kind
    }
}

/// The record to punch on `today`: the latest one if it belongs to today,
/// otherwise a fresh day.
#[must_use]
pub fn attendance_for_day(latest: Option<Attendance>, today: &str) -> Attendance {
    match latest {
        Some(attendance) if attendance.day == today => attendance,
        _ => Attendance::new(today),
    }
}
