use bluebell_invoker::{InvokeOutcome, InvokerPanel, ParamKey};
use bluebell_reflect::{ArgValue, MethodCatalog, ReflectMethods, reflect_methods};

#[derive(Default)]
struct Health {
    current: i64,
    label: String,
}

#[reflect_methods]
impl Health {
    pub fn heal(&mut self, amount: i64) -> i64 {
        self.current += amount;
        self.current
    }

    pub fn rename(&mut self, label: String) {
        self.label = label;
    }

    pub fn mix(&mut self, count: i64, label: String) -> i64 {
        self.label = label;
        self.current += count;
        self.current
    }

    pub fn merge(&mut self, samples: Vec<i64>) {
        self.current += samples.len() as i64;
    }
}

#[derive(Default)]
struct Mana {
    points: f64,
}

#[reflect_methods]
impl Mana {
    pub fn restore(&mut self, amount: f64) -> f64 {
        self.points += amount;
        self.points
    }
}

fn method(catalog: &MethodCatalog, name: &str) -> &'static bluebell_reflect::MethodInfo {
    catalog
        .methods()
        .iter()
        .find(|m| m.name == name)
        .expect("method should be discovered")
}

/// Run one headless redraw of the panel against the given target.
fn redraw(panel: &mut InvokerPanel, target: &mut dyn ReflectMethods) {
    let ctx = egui::Context::default();
    let _ = ctx.run(egui::RawInput::default(), |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            panel.show(ui, Some(&mut *target));
        });
    });
}

// ---------------------------------------------------------------------------
// Cached-argument invocation
// ---------------------------------------------------------------------------

#[test]
fn heal_scenario() {
    let mut health = Health::default();
    let mut panel = InvokerPanel::new();
    let catalog = MethodCatalog::discover(Some(&health));
    panel.cache_mut().sync(catalog.type_name());

    // Freshly-seen parameter starts at the kind default.
    let heal = method(&catalog, "heal");
    assert_eq!(panel.collect_args(heal), Some(vec![ArgValue::Int(0)]));

    // User sets 25, invokes: heal(25) runs and returns the new total.
    panel
        .cache_mut()
        .set(ParamKey::new("heal", 0), ArgValue::Int(25));
    panel.invoke_with_cached(&catalog, &mut health, heal);

    assert_eq!(health.current, 25);
    assert_eq!(
        panel.last_outcome(),
        Some(&InvokeOutcome::Returned {
            method: "heal",
            value: ArgValue::Int(25),
        })
    );

    // The cached value survives the invocation.
    assert_eq!(
        panel.cache().get(ParamKey::new("heal", 0)),
        Some(&ArgValue::Int(25))
    );
}

#[test]
fn collect_args_in_declaration_order() {
    let mut panel = InvokerPanel::new();
    let health = Health::default();
    let catalog = MethodCatalog::discover(Some(&health));
    panel.cache_mut().sync(catalog.type_name());

    let mix = method(&catalog, "mix");
    assert_eq!(
        panel.collect_args(mix),
        Some(vec![ArgValue::Int(0), ArgValue::Text(String::new())])
    );

    panel
        .cache_mut()
        .set(ParamKey::new("mix", 1), ArgValue::Text("mp".into()));
    assert_eq!(
        panel.collect_args(mix),
        Some(vec![ArgValue::Int(0), ArgValue::Text("mp".into())])
    );
}

#[test]
fn unit_return_reports_completed() {
    let mut health = Health::default();
    let mut panel = InvokerPanel::new();
    let catalog = MethodCatalog::discover(Some(&health));
    panel.cache_mut().sync(catalog.type_name());

    let rename = method(&catalog, "rename");
    panel
        .cache_mut()
        .set(ParamKey::new("rename", 0), ArgValue::Text("hp".into()));
    panel.invoke_with_cached(&catalog, &mut health, rename);

    assert_eq!(health.label, "hp");
    assert_eq!(
        panel.last_outcome(),
        Some(&InvokeOutcome::Completed { method: "rename" })
    );
}

#[test]
fn unsupported_parameter_blocks_invocation() {
    let mut health = Health::default();
    let mut panel = InvokerPanel::new();
    let catalog = MethodCatalog::discover(Some(&health));
    panel.cache_mut().sync(catalog.type_name());

    let merge = method(&catalog, "merge");
    assert_eq!(panel.collect_args(merge), None);

    panel.invoke_with_cached(&catalog, &mut health, merge);
    assert_eq!(health.current, 0);
    assert_eq!(
        panel.last_outcome(),
        Some(&InvokeOutcome::NoMatch { method: "merge" })
    );

    // The method itself is untouched by the macro and stays callable.
    health.merge(vec![1, 2]);
    assert_eq!(health.current, 2);
}

// ---------------------------------------------------------------------------
// Redraw behavior
// ---------------------------------------------------------------------------

#[test]
fn expanded_entry_seeds_defaults_on_redraw() {
    let mut health = Health::default();
    let mut panel = InvokerPanel::new();

    // First redraw binds the panel; nothing is expanded yet.
    redraw(&mut panel, &mut health);
    assert!(panel.cache().is_empty());
    assert!(!panel.is_expanded(0));

    panel.toggle_expanded(0);
    redraw(&mut panel, &mut health);

    assert!(panel.is_expanded(0));
    assert_eq!(
        panel.cache().get(ParamKey::new("heal", 0)),
        Some(&ArgValue::Int(0))
    );
}

#[test]
fn cached_values_survive_redraws() {
    let mut health = Health::default();
    let mut panel = InvokerPanel::new();

    redraw(&mut panel, &mut health);
    panel.toggle_expanded(0);
    redraw(&mut panel, &mut health);

    panel
        .cache_mut()
        .set(ParamKey::new("heal", 0), ArgValue::Int(25));
    redraw(&mut panel, &mut health);
    redraw(&mut panel, &mut health);

    assert_eq!(
        panel.cache().get(ParamKey::new("heal", 0)),
        Some(&ArgValue::Int(25))
    );
}

#[test]
fn expand_flags_are_independent_and_stable() {
    let mut health = Health::default();
    let mut panel = InvokerPanel::new();

    redraw(&mut panel, &mut health);
    panel.toggle_expanded(0);
    panel.toggle_expanded(2);
    redraw(&mut panel, &mut health);

    assert!(panel.is_expanded(0));
    assert!(!panel.is_expanded(1));
    assert!(panel.is_expanded(2));

    panel.toggle_expanded(2);
    redraw(&mut panel, &mut health);
    assert!(panel.is_expanded(0));
    assert!(!panel.is_expanded(2));
}

#[test]
fn switching_target_invalidates_state() {
    let mut health = Health::default();
    let mut mana = Mana::default();
    let mut panel = InvokerPanel::new();

    redraw(&mut panel, &mut health);
    panel.toggle_expanded(0);
    redraw(&mut panel, &mut health);
    panel
        .cache_mut()
        .set(ParamKey::new("heal", 0), ArgValue::Int(25));

    let catalog = MethodCatalog::discover(Some(&health));
    panel.invoke_with_cached(&catalog, &mut health, method(&catalog, "heal"));
    assert!(panel.last_outcome().is_some());

    redraw(&mut panel, &mut mana);

    assert!(panel.cache().is_empty());
    assert!(!panel.is_expanded(0));
    assert!(panel.last_outcome().is_none());
}

#[test]
fn empty_selection_renders_placeholder() {
    let mut panel = InvokerPanel::new();
    let ctx = egui::Context::default();
    let _ = ctx.run(egui::RawInput::default(), |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            panel.show(ui, None);
        });
    });
    assert!(panel.cache().is_empty());
}
