use aula_fields::{
    html, ChangePayload, ChangeTarget, FieldConfig, FieldKind, FieldRenderer, FieldsConfig,
    FormState, MultiSelectOption, SelectItem,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

fn subjects() -> Vec<MultiSelectOption> {
    vec![
        MultiSelectOption::new("mat", "Matemática"),
        MultiSelectOption::new("fis", "Física"),
        MultiSelectOption::new("qui", "Química"),
        MultiSelectOption::new("bio", "Biología"),
        MultiSelectOption::new("his", "Historia"),
    ]
}

fn teacher_fields() -> Vec<FieldConfig> {
    serde_json::from_value(json!([
        { "fieldKind": "plain-input", "name": "name", "label": "Nombre" },
        { "fieldKind": "phone-input", "name": "phone", "label": "Teléfono" },
        { "fieldKind": "date-picker", "name": "dob", "label": "Fecha de nacimiento" },
        { "fieldKind": "checkbox", "name": "active", "label": "Activo", "description": "Puede iniciar sesión" },
        { "fieldKind": "multi-select", "name": "knownSubjects", "label": "Materias",
          "options": [{ "label": "Matemática", "value": "mat" }] }
    ]))
    .unwrap()
}

#[test]
fn test_checkbox_has_no_outer_label() {
    let renderer = FieldRenderer::default();
    let field = FieldConfig::checkbox("active").label("Activo");

    let html = renderer.form_field(&FormState::new(), &field).into_string();

    assert!(!html.contains("form-label"));
    assert!(html.contains(r#"<label class="checkbox-label" for="active">Activo</label>"#));
    assert!(html.contains(r#"data-field-kind="checkbox""#));
}

#[test]
fn test_form_field_label_and_message() {
    let renderer = FieldRenderer::default();
    let field = FieldConfig::input("name").label("Nombre").class("col-span-2");
    let mut state = FormState::from_json(json!({ "name": "" }));
    state.set_errors(vec![("name".to_string(), "El nombre es requerido.".to_string())]);

    let html = renderer.form_field(&state, &field).into_string();

    assert!(html.starts_with(r#"<div class="form-item col-span-2" data-field-kind="plain-input">"#));
    assert!(html.contains(r#"<label class="form-label form-label-error" for="name">Nombre</label>"#));
    assert!(html.contains(r#"<p class="form-message" id="name-message">El nombre es requerido.</p>"#));
    assert!(html.contains(r#"aria-invalid="true""#));
}

#[test]
fn test_form_field_without_label() {
    let renderer = FieldRenderer::default();
    let html = renderer
        .form_field(&FormState::new(), &FieldConfig::textarea("description"))
        .into_string();

    assert!(!html.contains("<label"));
    assert!(html.contains(r#"<p class="form-message" id="description-message"></p>"#));
}

#[rstest]
#[case(0, None)]
#[case(3, None)]
#[case(4, Some("+ 1 más"))]
#[case(5, Some("+ 2 más"))]
fn test_multi_select_collapses_extra_badges(#[case] chosen: usize, #[case] more: Option<&str>) {
    let renderer = FieldRenderer::default();
    let field = FieldConfig::multi_select("knownSubjects", subjects());
    let options = subjects();
    let values: Vec<&str> = options.iter().take(chosen).map(|o| o.value.as_str()).collect();
    let state = FormState::from_json(json!({ "knownSubjects": values }));

    let html = renderer.form_field(&state, &field).into_string();

    assert_eq!(html.matches("badge badge-default").count(), chosen.min(3));
    match more {
        Some(text) => assert!(html.contains(text)),
        None => assert!(!html.contains("badge-more")),
    }
    if chosen == 0 {
        assert!(html.contains("Selecciona opciones"));
    }
}

#[test]
fn test_multi_select_popover() {
    let renderer = FieldRenderer::default();
    let state = FormState::from_json(json!({ "knownSubjects": ["fis"] }))
        .with_change_target(ChangeTarget::new("/teachers/change"));
    let field = FieldConfig::multi_select("knownSubjects", subjects());

    let html = renderer.form_field(&state, &field).into_string();

    assert!(html.contains(r#"role="dialog" aria-modal="true""#));
    assert!(html.contains(r#"hx-include="this""#));
    assert!(html.contains(r#"<input type="checkbox" name="knownSubjects" value="fis" checked>"#));
    assert!(html.contains(r#"<input type="checkbox" name="knownSubjects" value="mat">"#));
}

#[test]
fn test_time_picker_uses_configured_interval() {
    let mut config = FieldsConfig::default();
    config.time_picker.interval = 60;
    config.time_picker.caption = "Hora".to_string();
    let renderer = FieldRenderer::new(config);

    let html = renderer
        .form_field(&FormState::new(), &FieldConfig::time("time"))
        .into_string();

    // 24 slots plus the empty option
    assert_eq!(html.matches("<option").count(), 25);
    assert!(html.contains(r#"<optgroup label="Hora">"#));
    assert!(html.contains("11:00 PM"));
}

#[test]
fn test_default_time_slots_are_45_minutes_apart() {
    let html = FieldRenderer::default()
        .form_field(&FormState::new(), &FieldConfig::time("time"))
        .into_string();

    assert!(html.contains(r#"value="00:45""#));
    assert!(html.contains(r#"value="01:30""#));
    assert!(!html.contains(r#"value="01:00""#));
}

#[test]
fn test_select_placeholder_and_disabled_item() {
    let renderer = FieldRenderer::default();
    let mut closed = SelectItem::new("3", "Tercero");
    closed.disabled = true;
    let field = FieldConfig::select("grade", vec![SelectItem::new("1", "Primero"), closed])
        .placeholder("Selecciona un grado");

    let html = renderer.form_field(&FormState::new(), &field).into_string();

    assert!(html.contains("Selecciona un grado"));
    assert!(html.contains(r#"<option value="3" disabled>Tercero</option>"#));
}

#[test]
fn test_date_picker_custom_format() {
    let renderer = FieldRenderer::default();
    let field = FieldConfig::new(
        "date",
        FieldKind::DatePicker {
            date_format: Some("%d/%m/%Y".to_string()),
            show_time_select: false,
        },
    );
    let state = FormState::from_json(json!({ "date": "2024-03-15" }));

    let html = renderer.form_field(&state, &field).into_string();

    assert!(html.contains("15/03/2024"));
    assert!(html.contains(r#"type="date""#));
}

#[test]
fn test_date_picker_with_time() {
    let renderer = FieldRenderer::default();
    let field = FieldConfig::new(
        "date",
        FieldKind::DatePicker {
            date_format: None,
            show_time_select: true,
        },
    );
    let state = FormState::from_json(json!({ "date": "2024-03-15T14:30" }));

    let html = renderer.form_field(&state, &field).into_string();

    assert!(html.contains("15 de marzo de 2024, 2:30 PM"));
    assert!(html.contains(r#"type="datetime-local""#));
    assert!(html.contains(r#"value="2024-03-15T14:30:00""#));
}

#[test]
fn test_custom_render_receives_binding() {
    let renderer = FieldRenderer::default();
    let field = FieldConfig::custom("score", |binding| {
        html! { output name=(binding.name) { (binding.text().unwrap_or_default()) } }
    })
    .label("Puntuación");
    let state = FormState::from_json(json!({ "score": 87 }));

    let html = renderer.form_field(&state, &field).into_string();

    assert!(html.contains(r#"<output name="score">87</output>"#));
    assert!(html.contains("Puntuación"));
}

#[test]
fn test_unknown_kind_renders_only_the_wrapper() {
    let renderer = FieldRenderer::default();
    let field: FieldConfig =
        serde_json::from_value(json!({ "fieldKind": "color-picker", "name": "color" })).unwrap();

    let control = renderer
        .render(&FormState::new().binding("color"), &field)
        .into_string();

    assert_eq!(control, "");
}

#[test]
fn test_no_htmx_without_change_target() {
    let renderer = FieldRenderer::default();
    let html = renderer
        .form_fields(&FormState::new(), &teacher_fields())
        .into_string();

    assert!(!html.contains("hx-"));
    assert_eq!(html.matches(r#"class="form-item""#).count(), 5);
}

#[test]
fn test_every_control_posts_changes() {
    let renderer = FieldRenderer::default();
    let state = FormState::new().with_change_target(ChangeTarget::new("/teachers/change"));

    for field in teacher_fields() {
        let html = renderer.form_field(&state, &field).into_string();
        assert!(
            html.contains(r#"hx-post="/teachers/change""#),
            "{} does not post changes",
            field.name
        );
    }
}

#[test]
fn test_change_then_render_round() {
    let renderer = FieldRenderer::default();
    let fields = teacher_fields();
    let mut state = FormState::new();

    renderer
        .apply_change(&mut state, &fields[1], &ChangePayload::single("809-555-1234"))
        .unwrap();
    renderer
        .apply_change(&mut state, &fields[3], &ChangePayload::single("on"))
        .unwrap();

    assert_eq!(state.value("phone"), Some(&json!("+18095551234")));
    let html = renderer.form_fields(&state, &fields).into_string();
    assert!(html.contains(r#"value="+1 809 555 1234""#));
    assert!(html.contains(r#"value="true" checked"#));
}
