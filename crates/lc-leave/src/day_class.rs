//! Day classes and their precedence table.
//!
//! Each visual state a calendar cell can be in is a [`DayClass`].  The enum
//! order *is* the precedence order, so a [`ClassSet`] always renders its
//! classes highest-precedence first, independent of insertion order.

use serde::{Serialize, Serializer};

/// One visual/semantic state of a calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum DayClass {
    /// At least one holiday falls on the day.
    Holiday = 0,
    /// Two or more holidays coincide (merged indicator).
    HolidayMultiple,
    /// Full-day leave.
    LeaveFullDay,
    /// Morning half-day leave.
    LeaveMorningHalf,
    /// Evening half-day leave.
    LeaveEveningHalf,
    /// One-day selection.
    RangeSingle,
    /// First day of a selection.
    RangeStart,
    /// Last day of a selection.
    RangeEnd,
    /// Strictly between the selection endpoints.
    InRange,
    /// Inside the selection but not a working weekday.
    NonWorkingInRange,
}

impl DayClass {
    /// Every class, highest precedence first.
    pub const PRECEDENCE: [DayClass; 10] = [
        DayClass::Holiday,
        DayClass::HolidayMultiple,
        DayClass::LeaveFullDay,
        DayClass::LeaveMorningHalf,
        DayClass::LeaveEveningHalf,
        DayClass::RangeSingle,
        DayClass::RangeStart,
        DayClass::RangeEnd,
        DayClass::InRange,
        DayClass::NonWorkingInRange,
    ];

    /// CSS class name handed to the renderer.
    pub fn css_name(self) -> &'static str {
        match self {
            DayClass::Holiday => "holiday",
            DayClass::HolidayMultiple => "holiday-multiple",
            DayClass::LeaveFullDay => "leave-full-day",
            DayClass::LeaveMorningHalf => "leave-morning-half",
            DayClass::LeaveEveningHalf => "leave-evening-half",
            DayClass::RangeSingle => "range-single",
            DayClass::RangeStart => "range-start",
            DayClass::RangeEnd => "range-end",
            DayClass::InRange => "in-range",
            DayClass::NonWorkingInRange => "non-working-in-range",
        }
    }

    fn bit(self) -> u16 {
        1 << self as u8
    }
}

impl std::fmt::Display for DayClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.css_name())
    }
}

/// The set of classes applying to one day.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ClassSet(u16);

impl ClassSet {
    /// The empty set.
    pub const fn new() -> Self {
        ClassSet(0)
    }

    /// Add a class.
    pub fn insert(&mut self, class: DayClass) {
        self.0 |= class.bit();
    }

    /// Return `true` if `class` is present.
    pub fn contains(&self, class: DayClass) -> bool {
        self.0 & class.bit() != 0
    }

    /// Return `true` if no class applies.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Number of classes.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Classes in precedence order.
    pub fn iter(&self) -> impl Iterator<Item = DayClass> + '_ {
        DayClass::PRECEDENCE
            .into_iter()
            .filter(|c| self.contains(*c))
    }

    /// CSS names in precedence order.
    pub fn names(&self) -> Vec<&'static str> {
        self.iter().map(DayClass::css_name).collect()
    }

    /// Space-joined CSS names, e.g. `"holiday in-range"`.
    pub fn to_class_string(&self) -> String {
        self.names().join(" ")
    }
}

impl FromIterator<DayClass> for ClassSet {
    fn from_iter<T: IntoIterator<Item = DayClass>>(iter: T) -> Self {
        let mut set = ClassSet::new();
        for c in iter {
            set.insert(c);
        }
        set
    }
}

impl std::fmt::Debug for ClassSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

impl std::fmt::Display for ClassSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_class_string())
    }
}

impl Serialize for ClassSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter().map(DayClass::css_name))
    }
}
