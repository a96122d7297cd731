use attachment_core::{
    AdjustmentConfig, AttributeKind, Category, Item, ItemCatalog, ItemProperties, OverrideReport,
    Reporter, SpecificOverride, StatSetting, WalkSummary, WriteError, parent_ids, run,
};

/// Reporter that keeps everything it is told.
#[derive(Default)]
struct Recorder {
    lines: Vec<String>,
    rejected: Vec<(String, WriteError)>,
    finished: Option<WalkSummary>,
}

impl Reporter for Recorder {
    fn override_applied(&mut self, report: &OverrideReport) {
        self.lines.push(report.to_string());
    }

    fn write_rejected(&mut self, item_id: &str, error: &WriteError) {
        self.rejected.push((item_id.to_string(), error.clone()));
    }

    fn finished(&mut self, summary: &WalkSummary) {
        self.finished = Some(summary.clone());
    }
}

fn props(catalog: &ItemCatalog, id: &str) -> ItemProperties {
    catalog
        .get(id)
        .and_then(|item| item.properties.clone())
        .expect("item should carry properties")
}

#[test]
fn stock_multipliers_divide_negative_ergonomics() {
    let config = AdjustmentConfig::default()
        .with_rule(Category::Stock, AttributeKind::Ergonomics, StatSetting::multiplier(2.0))
        .with_rule(Category::Stock, AttributeKind::Recoil, StatSetting::multiplier(1.1));
    let mut catalog: ItemCatalog = [Item::attachment(
        "stock",
        "Buffer tube stock",
        parent_ids::STOCK,
        ItemProperties::new()
            .with(AttributeKind::Ergonomics, -20.0)
            .with(AttributeKind::Recoil, 30.0),
    )]
    .into_iter()
    .collect();

    let mut recorder = Recorder::default();
    let summary = run(&mut catalog, &config, &mut recorder);

    let stock = props(&catalog, "stock");
    assert_eq!(stock.ergonomics, Some(-10.0));
    assert_eq!(stock.recoil, Some(33.0));
    assert_eq!(summary.modified_count, 1);
    assert_eq!(recorder.finished, Some(summary));
}

#[test]
fn suppressor_durability_hard_set() {
    let config = AdjustmentConfig::default().with_rule(
        Category::MuzzleDevice,
        AttributeKind::DurabilityBurn,
        StatSetting::new().hard_set(0.05),
    );
    let mut catalog: ItemCatalog = [Item::attachment(
        "can",
        "Suppressor",
        parent_ids::SUPPRESSOR,
        ItemProperties::new().with(AttributeKind::DurabilityBurn, 0.2),
    )]
    .into_iter()
    .collect();

    let summary = run(&mut catalog, &config, &mut Recorder::default());

    assert_eq!(props(&catalog, "can").durability_burn_modificator, Some(0.05));
    assert_eq!(summary.modified_count, 1);
}

#[test]
fn override_ignores_category_multiplier() {
    let config = AdjustmentConfig::default()
        .with_rule(
            Category::Foregrip,
            AttributeKind::Ergonomics,
            StatSetting::multiplier(3.0),
        )
        .with_override(
            SpecificOverride::new("grip")
                .with_name("Custom grip")
                .with_value(AttributeKind::Ergonomics, 60.0),
        );
    let mut catalog: ItemCatalog = [Item::attachment(
        "grip",
        "Vertical grip",
        parent_ids::FOREGRIP,
        ItemProperties::new()
            .with(AttributeKind::Ergonomics, 45.0)
            .with(AttributeKind::Recoil, -2.0),
    )]
    .into_iter()
    .collect();

    let mut recorder = Recorder::default();
    let summary = run(&mut catalog, &config, &mut recorder);

    assert_eq!(props(&catalog, "grip").ergonomics, Some(60.0));
    assert_eq!(summary.modified_count, 1);
    assert_eq!(recorder.lines, vec!["Overriding Custom grip ergonomics to 60"]);
}

#[test]
fn absent_attributes_are_never_fabricated() {
    let config = AdjustmentConfig::default()
        .with_rule(
            Category::MuzzleDevice,
            AttributeKind::Recoil,
            StatSetting::new().hard_set(-10.0),
        )
        .with_rule(
            Category::MuzzleDevice,
            AttributeKind::DurabilityBurn,
            StatSetting::new().hard_set(0.1),
        );
    let mut catalog: ItemCatalog = [Item::attachment(
        "adapter",
        "Thread adapter",
        parent_ids::MUZZLE_ADAPTER,
        ItemProperties::new().with(AttributeKind::Ergonomics, -1.0),
    )]
    .into_iter()
    .collect();

    let summary = run(&mut catalog, &config, &mut Recorder::default());

    let adapter = props(&catalog, "adapter");
    assert_eq!(adapter.recoil, None);
    assert_eq!(adapter.durability_burn_modificator, None);
    assert_eq!(summary.modified_count, 0);
}

#[test]
fn unknown_parents_are_left_alone() {
    let config = AdjustmentConfig::default().with_rule(
        Category::Stock,
        AttributeKind::Ergonomics,
        StatSetting::new().additive(10.0),
    );
    let mut catalog: ItemCatalog = [Item::attachment(
        "scope",
        "Scope",
        "55818ae44bdc2dde698b456c",
        ItemProperties::new().with(AttributeKind::Ergonomics, -3.0),
    )]
    .into_iter()
    .collect();

    let summary = run(&mut catalog, &config, &mut Recorder::default());

    assert_eq!(props(&catalog, "scope").ergonomics, Some(-3.0));
    assert_eq!(summary.visited, 1);
    assert_eq!(summary.modified_count, 0);
}

#[test]
fn pistol_grip_recoil_is_out_of_scope() {
    let config = AdjustmentConfig::default()
        .with_rule(
            Category::PistolGrip,
            AttributeKind::Ergonomics,
            StatSetting::new().additive(2.4),
        )
        .with_rule(
            Category::PistolGrip,
            AttributeKind::Recoil,
            StatSetting::new().hard_set(-50.0),
        );
    let mut catalog: ItemCatalog = [Item::attachment(
        "pg",
        "Pistol grip",
        parent_ids::PISTOL_GRIP,
        ItemProperties::new()
            .with(AttributeKind::Ergonomics, 8.0)
            .with(AttributeKind::Recoil, 0.0),
    )]
    .into_iter()
    .collect();

    run(&mut catalog, &config, &mut Recorder::default());

    let grip = props(&catalog, "pg");
    assert_eq!(grip.ergonomics, Some(10.0));
    assert_eq!(grip.recoil, Some(0.0));
}

#[test]
fn hard_set_walk_is_idempotent() {
    let config = AdjustmentConfig::default().with_rule(
        Category::Foregrip,
        AttributeKind::Recoil,
        StatSetting::new().hard_set(-4.0),
    );
    let mut catalog: ItemCatalog = [Item::attachment(
        "grip",
        "Grip",
        parent_ids::FOREGRIP,
        ItemProperties::new().with(AttributeKind::Recoil, -1.0),
    )]
    .into_iter()
    .collect();

    run(&mut catalog, &config, &mut Recorder::default());
    let once = catalog.clone();
    run(&mut catalog, &config, &mut Recorder::default());

    assert_eq!(catalog, once);
}

#[test]
fn rejected_values_reach_the_reporter() {
    let config = AdjustmentConfig::default().with_rule(
        Category::Foregrip,
        AttributeKind::Ergonomics,
        StatSetting::new().hard_set(f64::NAN),
    );
    let mut catalog: ItemCatalog = [Item::attachment(
        "grip",
        "Grip",
        parent_ids::FOREGRIP,
        ItemProperties::new().with(AttributeKind::Ergonomics, 5.0),
    )]
    .into_iter()
    .collect();

    let mut recorder = Recorder::default();
    let summary = run(&mut catalog, &config, &mut recorder);

    assert_eq!(summary.rejected_writes, 1);
    assert_eq!(recorder.rejected.len(), 1);
    assert_eq!(recorder.rejected[0].0, "grip");
    assert_eq!(props(&catalog, "grip").ergonomics, Some(5.0));
}
