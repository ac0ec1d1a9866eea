//! Pure, stateless read transformations over a snapshot of the menu. Nothing in
//! here mutates the store or keeps hidden state.

use crate::core::{Course, MenuItem};
use crate::utils::error::MenuError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Course selection for the filter view; `All` passes every item through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseFilter {
    All,
    Only(Course),
}

impl fmt::Display for CourseFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CourseFilter::All => f.write_str("All"),
            CourseFilter::Only(course) => write!(f, "{}", course),
        }
    }
}

impl FromStr for CourseFilter {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(CourseFilter::All)
        } else {
            s.parse::<Course>().map(CourseFilter::Only)
        }
    }
}

/// Returns the items matching the filter, relative order preserved.
/// `All` returns every item unchanged.
pub fn filter_by_course(items: &[MenuItem], filter: CourseFilter) -> Vec<MenuItem> {
    match filter {
        CourseFilter::All => items.to_vec(),
        CourseFilter::Only(course) => items
            .iter()
            .filter(|item| item.course == course)
            .cloned()
            .collect(),
    }
}

/// Mean price per course over one snapshot. An empty subgroup averages to 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CourseAverages {
    pub starter: f64,
    pub main: f64,
    pub dessert: f64,
}

impl CourseAverages {
    pub fn get(&self, course: Course) -> f64 {
        match course {
            Course::Starter => self.starter,
            Course::Main => self.main,
            Course::Dessert => self.dessert,
        }
    }
}

/// Arithmetic mean of `price` for each course. Sum then divide, no rounding;
/// presentation rounding is the caller's concern.
pub fn average_by_course(items: &[MenuItem]) -> CourseAverages {
    let mut sums = [0.0f64; 3];
    let mut counts = [0usize; 3];

    for item in items {
        let idx = match item.course {
            Course::Starter => 0,
            Course::Main => 1,
            Course::Dessert => 2,
        };
        sums[idx] += item.price;
        counts[idx] += 1;
    }

    let mean = |idx: usize| {
        if counts[idx] == 0 {
            0.0
        } else {
            sums[idx] / counts[idx] as f64
        }
    };

    CourseAverages {
        starter: mean(0),
        main: mean(1),
        dessert: mean(2),
    }
}
