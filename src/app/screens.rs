use crate::config::AppConfig;
use crate::core::averages::CourseAverages;
use crate::core::filter::by_course;
use crate::core::store::MenuStore;
use crate::domain::model::{Course, MenuItem, MenuItemId};

/// One menu entry rendered for a list widget.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuLine {
    pub id: MenuItemId,
    pub heading: String,
    pub description: String,
    pub price: String,
}

impl MenuLine {
    fn build(config: &AppConfig, item: &MenuItem) -> Self {
        Self {
            id: item.id,
            heading: format!("{} ({})", item.name, item.course),
            description: item.description.clone(),
            price: format!("{}{:.2}", config.menu.currency, item.price),
        }
    }
}

/// Data backing the home screen: totals, per-course averages and the
/// full list in insertion order.
#[derive(Debug, Clone)]
pub struct HomeView {
    pub title: String,
    pub total_items: usize,
    pub average_lines: Vec<String>,
    pub entries: Vec<MenuLine>,
}

impl HomeView {
    pub fn build(config: &AppConfig, store: &MenuStore) -> Self {
        tracing::debug!("Building home view with {} items", store.len());

        let averages = CourseAverages::calculate(store.items());
        let average_lines = Course::ALL
            .iter()
            .map(|&course| {
                format!(
                    "Avg {} Price: {}{}",
                    course,
                    config.menu.currency,
                    averages.formatted(course)
                )
            })
            .collect();

        Self {
            title: config.menu.title.clone(),
            total_items: store.len(),
            average_lines,
            entries: store
                .items()
                .iter()
                .map(|item| MenuLine::build(config, item))
                .collect(),
        }
    }
}

/// Data backing the filter screen for one selected course.
#[derive(Debug, Clone)]
pub struct FilterView {
    pub title: String,
    pub selected: Course,
    pub entries: Vec<MenuLine>,
}

impl FilterView {
    pub fn build(config: &AppConfig, store: &MenuStore, course: Course) -> Self {
        tracing::debug!("Building filter view for {}", course);

        Self {
            title: config.menu.title.clone(),
            selected: course,
            entries: by_course(store.items(), course)
                .into_iter()
                .map(|item| MenuLine::build(config, item))
                .collect(),
        }
    }
}
