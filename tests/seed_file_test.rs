use chefs_menu::domain::ports::SeedSource;
use chefs_menu::{average_by_course, Course, CourseFilter, filter_by_course, MenuFile, MenuStore};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_store_seeded_from_toml_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[[items]]
name = "Bruschetta"
description = "Toasted bread with tomatoes and basil"
course = "starter"
price = 50.0

[[items]]
name = "Grilled Chicken"
description = "Succulent grilled chicken breast"
course = "main"
price = 120.0

[[items]]
name = "Tiramisu"
description = "Classic Italian dessert"
course = "dessert"
price = 60.0
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();

    let menu_file = MenuFile::from_file(temp_file.path()).unwrap();
    let store = MenuStore::from_seed(menu_file.seed_items().unwrap()).unwrap();

    assert_eq!(store.len(), 3);
    let names: Vec<&str> = store.list().iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Bruschetta", "Grilled Chicken", "Tiramisu"]);

    let averages = average_by_course(store.list());
    assert_eq!(averages.starter, 50.0);
    assert_eq!(averages.main, 120.0);
    assert_eq!(averages.dessert, 60.0);

    let desserts = filter_by_course(store.list(), CourseFilter::Only(Course::Dessert));
    assert_eq!(desserts.len(), 1);
    assert_eq!(desserts[0].name, "Tiramisu");
}

#[test]
fn test_invalid_seed_rows_never_reach_the_store() {
    let toml_content = r#"
[[items]]
name = "Soup"
course = "starter"
price = 30.0

[[items]]
name = ""
course = "main"
price = 10.0
"#;
    let menu_file = MenuFile::from_toml_str(toml_content).unwrap();
    let err = menu_file.seed_items().unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn test_empty_seed_file_yields_empty_store() {
    let menu_file = MenuFile::from_toml_str("").unwrap();
    let store = MenuStore::from_seed(menu_file.seed_items().unwrap()).unwrap();
    assert!(store.is_empty());
    assert_eq!(average_by_course(store.list()).starter, 0.0);
}
