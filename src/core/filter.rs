use crate::domain::model::{Course, MenuItem};

/// Items belonging to `course`, in their original relative order.
/// Pure function, no side effects.
pub fn by_course(items: &[MenuItem], course: Course) -> Vec<&MenuItem> {
    items.iter().filter(|item| item.course == course).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::MenuStore;
    use crate::domain::model::NewMenuItem;

    fn sample_menu() -> MenuStore {
        let mut store = MenuStore::new();
        for (name, course, price) in [
            ("Soup", Course::Starters, "25.5"),
            ("Steak", Course::Mains, "120"),
            ("Salad", Course::Starters, "30"),
            ("Cake", Course::Dessert, "45"),
        ] {
            store
                .add(NewMenuItem {
                    name: name.to_string(),
                    description: format!("{} description", name),
                    course,
                    price: price.to_string(),
                })
                .unwrap();
        }
        store
    }

    #[test]
    fn test_only_matching_course_is_returned() {
        let store = sample_menu();
        let mains = by_course(store.items(), Course::Mains);

        assert_eq!(mains.len(), 1);
        assert!(mains.iter().all(|item| item.course == Course::Mains));
        assert_eq!(mains[0].name, "Steak");
    }

    #[test]
    fn test_relative_order_is_preserved() {
        let store = sample_menu();
        let starters = by_course(store.items(), Course::Starters);

        let names: Vec<&str> = starters.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, ["Soup", "Salad"]);
    }

    #[test]
    fn test_empty_input_yields_empty_subset() {
        assert!(by_course(&[], Course::Dessert).is_empty());
    }
}
