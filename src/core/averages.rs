use crate::domain::model::{Course, MenuItem};

/// Mean price per course over a snapshot of the menu.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CourseAverages {
    pub starters: f64,
    pub mains: f64,
    pub dessert: f64,
}

impl CourseAverages {
    /// One aggregation routine applied uniformly to all three courses.
    pub fn calculate(items: &[MenuItem]) -> Self {
        Self {
            starters: course_average(items, Course::Starters),
            mains: course_average(items, Course::Mains),
            dessert: course_average(items, Course::Dessert),
        }
    }

    pub fn get(&self, course: Course) -> f64 {
        match course {
            Course::Starters => self.starters,
            Course::Mains => self.mains,
            Course::Dessert => self.dessert,
        }
    }

    /// Two-decimal rendering; a course with no items reads "0.00".
    pub fn formatted(&self, course: Course) -> String {
        format!("{:.2}", self.get(course))
    }
}

fn course_average(items: &[MenuItem], course: Course) -> f64 {
    let mut total = 0.0;
    let mut count = 0usize;
    for item in items.iter().filter(|item| item.course == course) {
        total += item.price;
        count += 1;
    }
    if count == 0 {
        0.0
    } else {
        total / count as f64
    }
}
