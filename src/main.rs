use chefs_menu::domain::ports::SeedSource;
use chefs_menu::utils::logger;
use chefs_menu::utils::validation::{parse_price, Validate};
use chefs_menu::{
    average_by_course, filter_by_course, CliConfig, CourseAverages, CourseFilter, MenuEvent,
    MenuFile, MenuItem, MenuItemId, MenuStore, NewMenuItem,
};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting chefs-menu CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // 建立菜單存放區
    let mut store = build_store(&config)?;

    store.subscribe(|event: &MenuEvent| match event {
        MenuEvent::Added(item) => {
            tracing::info!("Menu changed: added '{}' ({})", item.name, item.course);
        }
        MenuEvent::Removed(id) => {
            tracing::info!("Menu changed: removed item {}", id);
        }
    });

    if let Err(e) = apply_mutations(&mut store, &config) {
        tracing::error!("❌ Menu update failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let filter: CourseFilter = config.course.parse()?;
    let items = filter_by_course(store.list(), filter);
    let averages = average_by_course(store.list());

    match config.format.as_str() {
        "json" => print_json(&items, store.len(), &averages)?,
        _ => print_text(&items, store.len(), filter, &averages),
    }

    Ok(())
}

fn build_store(config: &CliConfig) -> chefs_menu::Result<MenuStore> {
    if let Some(path) = &config.seed_file {
        tracing::info!("Seeding menu from {}", path);
        let menu_file = MenuFile::from_file(path)?;
        MenuStore::from_seed(menu_file.seed_items()?)
    } else if config.no_seed {
        Ok(MenuStore::new())
    } else {
        Ok(MenuStore::seeded())
    }
}

fn apply_mutations(store: &mut MenuStore, config: &CliConfig) -> chefs_menu::Result<()> {
    if config.templates {
        let added = store.add_templates()?;
        println!("✅ Added {} template dishes", added.len());
    }

    if let Some(name) = &config.add_name {
        let raw_price = config.add_price.as_deref().unwrap_or_default();
        let price = parse_price("add_price", raw_price)?;
        let course = config.add_course.parse()?;
        let item = store.add(NewMenuItem {
            name: name.clone(),
            description: config.add_description.clone(),
            course,
            price,
        })?;
        println!("✅ Added '{}' with id {}", item.name, item.id);
    }

    if let Some(id) = config.remove_id {
        store.remove(MenuItemId(id));
    }

    Ok(())
}

fn print_text(items: &[MenuItem], total: usize, filter: CourseFilter, averages: &CourseAverages) {
    println!("Chef's Menu ({} items total)", total);

    if items.is_empty() {
        println!("No items for {}. Try a different course.", filter);
    } else {
        println!("Showing {} item(s) for {}:", items.len(), filter);
        for item in items {
            if item.description.is_empty() {
                println!("  [{}] {} ({}) {:.2}", item.id, item.name, item.course, item.price);
            } else {
                println!(
                    "  [{}] {} ({}) {:.2} - {}",
                    item.id, item.name, item.course, item.price, item.description
                );
            }
        }
    }

    println!();
    println!("Average price per course:");
    println!("  Starter: {:.2}", averages.starter);
    println!("  Main:    {:.2}", averages.main);
    println!("  Dessert: {:.2}", averages.dessert);
}

fn print_json(items: &[MenuItem], total: usize, averages: &CourseAverages) -> chefs_menu::Result<()> {
    let payload = serde_json::json!({
        "total": total,
        "items": items,
        "averages": averages,
    });
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}
