use chefs_menu::{
    average_by_course, filter_by_course, Course, CourseFilter, MenuEvent, MenuItemId, MenuStore,
    NewMenuItem,
};
use std::cell::RefCell;
use std::rc::Rc;

fn dish(name: &str, course: Course, price: f64) -> NewMenuItem {
    NewMenuItem {
        name: name.to_string(),
        description: String::new(),
        course,
        price,
    }
}

#[test]
fn test_full_chef_session() {
    // Session starts with the sample menu, like the app's home screen
    let mut store = MenuStore::seeded();
    assert_eq!(store.len(), 3);

    let averages = average_by_course(store.list());
    assert_eq!(averages.starter, 50.0);
    assert_eq!(averages.main, 120.0);
    assert_eq!(averages.dessert, 60.0);

    // Chef adds a dish through the full form
    let added = store
        .add(NewMenuItem {
            name: "Pad Thai".to_string(),
            description: "Rice noodles with peanuts".to_string(),
            course: Course::Main,
            price: 80.0,
        })
        .unwrap();
    assert_eq!(store.len(), 4);
    assert_eq!(store.list()[0].id, added.id);

    // Main average now covers two dishes
    let averages = average_by_course(store.list());
    assert_eq!(averages.main, 100.0);

    // Filter screen: only mains, order preserved
    let mains = filter_by_course(store.list(), CourseFilter::Only(Course::Main));
    let names: Vec<&str> = mains.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Pad Thai", "Grilled Chicken"]);

    // Chef deletes the new dish again
    store.remove(added.id);
    assert_eq!(store.len(), 3);
    let averages = average_by_course(store.list());
    assert_eq!(averages.main, 120.0);
}

#[test]
fn test_add_then_list_contains_submitted_fields() {
    let mut store = MenuStore::new();
    let item = store
        .add(NewMenuItem {
            name: "Soup".to_string(),
            description: "Tomato soup".to_string(),
            course: Course::Starter,
            price: 30.0,
        })
        .unwrap();

    let listed: Vec<_> = store.list().iter().filter(|i| i.id == item.id).collect();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "Soup");
    assert_eq!(listed[0].description, "Tomato soup");
    assert_eq!(listed[0].course, Course::Starter);
    assert_eq!(listed[0].price, 30.0);
}

#[test]
fn test_rejected_add_leaves_store_and_ids_untouched() {
    let mut store = MenuStore::seeded();
    let ids_before: Vec<MenuItemId> = store.list().iter().map(|i| i.id).collect();

    assert!(store.add(dish("", Course::Main, 10.0)).is_err());
    assert!(store.add(dish("Soup", Course::Starter, -5.0)).is_err());

    let ids_after: Vec<MenuItemId> = store.list().iter().map(|i| i.id).collect();
    assert_eq!(ids_before, ids_after);
}

#[test]
fn test_subscribers_observe_mutations_in_order() {
    let log: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
    let observer_log = Rc::clone(&log);

    let mut store = MenuStore::seeded();
    store.subscribe(move |event: &MenuEvent| {
        let entry = match event {
            MenuEvent::Added(item) => format!("added:{}", item.name),
            MenuEvent::Removed(id) => format!("removed:{}", id),
        };
        observer_log.borrow_mut().push(entry);
    });

    let item = store.add(dish("Soup", Course::Starter, 30.0)).unwrap();
    store.remove(item.id);

    // rejected add and no-op remove fire no events
    assert!(store.add(dish("", Course::Main, 1.0)).is_err());
    store.remove(MenuItemId(9999));

    let entries = log.borrow();
    assert_eq!(
        *entries,
        vec!["added:Soup".to_string(), format!("removed:{}", item.id)]
    );
}

#[test]
fn test_filter_all_matches_list_snapshot() {
    let mut store = MenuStore::seeded();
    store.add(dish("Cheesecake", Course::Dessert, 70.0)).unwrap();

    let all = filter_by_course(store.list(), CourseFilter::All);
    assert_eq!(all, store.list().to_vec());
}

#[test]
fn test_averages_on_empty_store() {
    let store = MenuStore::new();
    let averages = average_by_course(store.list());
    for course in Course::ALL {
        assert_eq!(averages.get(course), 0.0);
    }
}
