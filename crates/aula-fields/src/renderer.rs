// File: src/renderer.rs
// Purpose: Field-kind dispatcher and the labelled form-field wrapper

use maud::{html, Markup};
use tracing::{debug, warn};

use crate::change::{ChangeError, ChangePayload};
use crate::config::FieldsConfig;
use crate::datetime;
use crate::kind::{Bound, FieldConfig, FieldKind, MultiSelectOption, MultiSelectVariant, RenderFn, SelectItem};
use crate::phone;
use crate::state::{FieldBinding, FormState};

/// Typed controls post on every keystroke, pickers on commit
const ON_KEYSTROKE: &str = "input changed";
const ON_CHANGE: &str = "change";

/// HTMX attributes forwarding a control's changes to the form's endpoint
struct Notify<'a> {
    url: Option<&'a str>,
    target: Option<&'a str>,
    trigger: &'static str,
}

impl<'a> Notify<'a> {
    fn new(binding: &FieldBinding<'a>, trigger: &'static str) -> Self {
        Self {
            url: binding.change.map(|c| c.url.as_str()),
            target: binding.change.and_then(|c| c.target.as_deref()),
            trigger,
        }
    }

    fn trigger(&self) -> Option<&'static str> {
        self.url.map(|_| self.trigger)
    }
}

/// Renders form controls with the configured widget defaults
#[derive(Debug, Clone, Default)]
pub struct FieldRenderer {
    config: FieldsConfig,
}

impl FieldRenderer {
    pub fn new(config: FieldsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FieldsConfig {
        &self.config
    }

    /// Render the control for one field. Exactly one control per call; an
    /// unknown kind renders nothing.
    pub fn render(&self, binding: &FieldBinding<'_>, field: &FieldConfig) -> Markup {
        debug!(field = %field.name, kind = field.kind.tag(), "rendering field control");

        match &field.kind {
            FieldKind::PlainInput {
                input_type,
                placeholder,
                min,
                max,
                readonly,
            } => self.plain_input(
                binding,
                field,
                input_type.as_deref(),
                placeholder.as_deref(),
                (min.as_ref(), max.as_ref()),
                *readonly,
            ),
            FieldKind::MultilineInput { placeholder } => {
                self.multiline_input(binding, field, placeholder.as_deref())
            }
            FieldKind::PhoneInput { placeholder } => {
                self.phone_input(binding, field, placeholder.as_deref())
            }
            FieldKind::Checkbox { description } => {
                self.checkbox(binding, field, description.as_deref())
            }
            FieldKind::DatePicker {
                date_format,
                show_time_select,
            } => self.date_picker(binding, field, date_format.as_deref(), *show_time_select),
            FieldKind::TimePicker { interval } => {
                self.time_picker(binding, field, interval.unwrap_or(self.config.time_picker.interval))
            }
            FieldKind::SingleSelect {
                placeholder,
                options,
            } => self.single_select(binding, field, placeholder.as_deref(), options),
            FieldKind::MultiSelect {
                placeholder,
                options,
                max_count,
                animation,
                variant,
            } => self.multi_select(
                binding,
                field,
                MultiSelectProps {
                    placeholder: placeholder
                        .as_deref()
                        .unwrap_or(&self.config.multi_select.placeholder),
                    options,
                    max_count: max_count.unwrap_or(self.config.multi_select.max_count),
                    animation: *animation,
                    variant: variant.unwrap_or(self.config.multi_select.variant),
                },
            ),
            FieldKind::CustomRender { render } => custom_render(binding, render.as_ref()),
            FieldKind::Unknown => {
                warn!("Field {} has an unknown kind, rendering nothing", field.name);
                html! {}
            }
        }
    }

    /// Label, control and validation-message slot for one field of `state`.
    ///
    /// Checkboxes carry their own inline label, so the outer one is left out.
    pub fn form_field(&self, state: &FormState, field: &FieldConfig) -> Markup {
        let binding = state.binding(&field.name);
        let class = match &field.class {
            Some(extra) => format!("form-item {}", extra),
            None => "form-item".to_string(),
        };
        let label_class = if binding.has_error() {
            "form-label form-label-error"
        } else {
            "form-label"
        };
        let outer_label = field.label.as_deref().filter(|_| !field.kind.is_checkbox());

        html! {
            div class=(class) data-field-kind=(field.kind.tag()) {
                @if let Some(label) = outer_label {
                    label class=(label_class) for=(field.name) { (label) }
                }
                (self.render(&binding, field))
                p class="form-message" id=(format!("{}-message", field.name)) {
                    @if let Some(error) = binding.error { (error) }
                }
            }
        }
    }

    /// Several fields in declaration order
    pub fn form_fields(&self, state: &FormState, fields: &[FieldConfig]) -> Markup {
        html! {
            @for field in fields {
                (self.form_field(state, field))
            }
        }
    }

    /// Store a control's change in `state` using this renderer's phone rules
    pub fn apply_change(
        &self,
        state: &mut FormState,
        field: &FieldConfig,
        payload: &ChangePayload,
    ) -> Result<(), ChangeError> {
        state.apply_change(field, payload, &self.config)
    }

    fn plain_input(
        &self,
        binding: &FieldBinding<'_>,
        field: &FieldConfig,
        input_type: Option<&str>,
        placeholder: Option<&str>,
        (min, max): (Option<&Bound>, Option<&Bound>),
        readonly: bool,
    ) -> Markup {
        let notify = Notify::new(binding, ON_KEYSTROKE);

        html! {
            div class="input-wrapper" {
                input class="input"
                    type=(input_type.unwrap_or("text"))
                    id=(field.name)
                    name=(field.name)
                    value=[binding.text()]
                    placeholder=[placeholder]
                    min=[min.map(ToString::to_string)]
                    max=[max.map(ToString::to_string)]
                    readonly[readonly]
                    disabled[field.disabled]
                    aria-invalid=[binding.error.map(|_| "true")]
                    hx-post=[notify.url]
                    hx-trigger=[notify.trigger()]
                    hx-target=[notify.target];
            }
        }
    }

    fn multiline_input(
        &self,
        binding: &FieldBinding<'_>,
        field: &FieldConfig,
        placeholder: Option<&str>,
    ) -> Markup {
        let notify = Notify::new(binding, ON_KEYSTROKE);

        html! {
            textarea class="textarea"
                id=(field.name)
                name=(field.name)
                placeholder=[placeholder]
                disabled[field.disabled]
                aria-invalid=[binding.error.map(|_| "true")]
                hx-post=[notify.url]
                hx-trigger=[notify.trigger()]
                hx-target=[notify.target] {
                (binding.text().unwrap_or_default())
            }
        }
    }

    /// Fixed to the configured country: no country picker, calling code shown
    fn phone_input(
        &self,
        binding: &FieldBinding<'_>,
        field: &FieldConfig,
        placeholder: Option<&str>,
    ) -> Markup {
        let phone = &self.config.phone;
        let notify = Notify::new(binding, ON_KEYSTROKE);
        let shown = binding.text().map(|value| phone::display(&value, phone));

        html! {
            div class="input-phone" data-country=(phone.country) {
                span class="phone-country" {
                    (phone.country) " +" (phone.calling_code)
                }
                input class="input-phone-input"
                    type="tel"
                    autocomplete="tel"
                    id=(field.name)
                    name=(field.name)
                    value=[shown]
                    placeholder=[placeholder]
                    disabled[field.disabled]
                    hx-post=[notify.url]
                    hx-trigger=[notify.trigger()]
                    hx-target=[notify.target];
            }
        }
    }

    fn checkbox(
        &self,
        binding: &FieldBinding<'_>,
        field: &FieldConfig,
        description: Option<&str>,
    ) -> Markup {
        let notify = Notify::new(binding, ON_CHANGE);

        html! {
            div class="checkbox-row" {
                input class="checkbox"
                    type="checkbox"
                    id=(field.name)
                    name=(field.name)
                    value="true"
                    checked[binding.is_checked()]
                    disabled[field.disabled]
                    hx-post=[notify.url]
                    hx-trigger=[notify.trigger()]
                    hx-target=[notify.target];
                label class="checkbox-label" for=(field.name) {
                    @if let Some(label) = &field.label { (label) }
                }
                @if let Some(description) = description {
                    p class="checkbox-description" { (description) }
                }
            }
        }
    }

    /// Trigger button showing the formatted date, calendar input in a popover
    fn date_picker(
        &self,
        binding: &FieldBinding<'_>,
        field: &FieldConfig,
        date_format: Option<&str>,
        show_time_select: bool,
    ) -> Markup {
        let notify = Notify::new(binding, ON_CHANGE);
        let popover_id = format!("{}-calendar", field.name);
        let raw = binding.text().filter(|s| !s.is_empty());
        let pattern = date_format.or(self.config.date_picker.format.as_deref());

        let shown = raw.as_deref().map(|raw| {
            let local = datetime::parse_local_datetime(raw).filter(|_| show_time_select);
            match (local, datetime::parse_date(raw)) {
                (Some(dt), _) => format!(
                    "{}, {}",
                    datetime::format_date_with(dt.date(), pattern),
                    datetime::format_time(dt.time())
                ),
                (None, Some(date)) => datetime::format_date_with(date, pattern),
                (None, None) => raw.to_string(),
            }
        });
        let input_value = raw
            .as_deref()
            .and_then(|raw| datetime::normalize_date(raw, show_time_select));
        let trigger_class = if shown.is_some() {
            "date-trigger"
        } else {
            "date-trigger text-muted"
        };

        html! {
            div class="date-picker" {
                button type="button"
                    class=(trigger_class)
                    popovertarget=(popover_id)
                    disabled[field.disabled] {
                    @if let Some(text) = &shown {
                        span { (text) }
                    } @else {
                        span { (self.config.date_picker.placeholder) }
                    }
                    span class="calendar-icon" aria-hidden="true" {}
                }
                div class="date-popover" id=(popover_id) popover {
                    input class="calendar"
                        type=(if show_time_select { "datetime-local" } else { "date" })
                        id=(field.name)
                        name=(field.name)
                        value=[input_value]
                        disabled[field.disabled]
                        hx-post=[notify.url]
                        hx-trigger=[notify.trigger()]
                        hx-target=[notify.target];
                }
            }
        }
    }

    /// Time-only list, `interval` minutes apart, labelled `h:mm AM/PM`
    fn time_picker(&self, binding: &FieldBinding<'_>, field: &FieldConfig, interval: u32) -> Markup {
        let notify = Notify::new(binding, ON_CHANGE);
        let slots = datetime::time_slots(interval);
        let selected = binding.text().as_deref().and_then(datetime::parse_time);
        let selected_value = selected.map(datetime::slot_value);
        // a bound time between slots stays selectable
        let off_slot = selected.filter(|_| {
            !slots
                .iter()
                .any(|slot| Some(datetime::slot_value(*slot)) == selected_value)
        });

        html! {
            div class="input-wrapper" {
                select class="time-picker"
                    id=(field.name)
                    name=(field.name)
                    data-interval=(interval)
                    disabled[field.disabled]
                    hx-post=[notify.url]
                    hx-trigger=[notify.trigger()]
                    hx-target=[notify.target] {
                    option value="" selected[selected.is_none()] {}
                    optgroup label=(self.config.time_picker.caption) {
                        @if let Some(time) = off_slot {
                            option value=(datetime::slot_value(time)) selected { (datetime::format_time(time)) }
                        }
                        @for slot in &slots {
                            @let value = datetime::slot_value(*slot);
                            option value=(value) selected[selected_value.as_deref() == Some(value.as_str())] {
                                (datetime::format_time(*slot))
                            }
                        }
                    }
                }
            }
        }
    }

    fn single_select(
        &self,
        binding: &FieldBinding<'_>,
        field: &FieldConfig,
        placeholder: Option<&str>,
        options: &[SelectItem],
    ) -> Markup {
        let notify = Notify::new(binding, ON_CHANGE);
        let current = binding.text().filter(|s| !s.is_empty());

        html! {
            select class="select"
                id=(field.name)
                name=(field.name)
                disabled[field.disabled]
                hx-post=[notify.url]
                hx-trigger=[notify.trigger()]
                hx-target=[notify.target] {
                option value="" disabled hidden selected[current.is_none()] {
                    (placeholder.unwrap_or_default())
                }
                @for item in options {
                    option value=(item.value)
                        selected[current.as_deref() == Some(item.value.as_str())]
                        disabled[item.disabled] {
                        (item.label)
                    }
                }
            }
        }
    }

    /// Badges for the first `max_count` selections, checkbox list in a modal popover
    fn multi_select(
        &self,
        binding: &FieldBinding<'_>,
        field: &FieldConfig,
        props: MultiSelectProps<'_>,
    ) -> Markup {
        let notify = Notify::new(binding, ON_CHANGE);
        let popover_id = format!("{}-options", field.name);
        let chosen = binding.list();
        let selected: Vec<&MultiSelectOption> = props
            .options
            .iter()
            .filter(|option| chosen.contains(&option.value.as_str()))
            .collect();
        let collapsed = selected.len().saturating_sub(props.max_count);
        let badge_class = format!("badge badge-{}", props.variant.as_str());

        html! {
            div class="multi-select"
                data-variant=(props.variant.as_str())
                data-max-count=(props.max_count)
                data-animation=[props.animation.map(|a| a.to_string())] {
                button type="button"
                    class="multi-select-trigger"
                    popovertarget=(popover_id)
                    disabled[field.disabled] {
                    @if selected.is_empty() {
                        span class="placeholder" { (props.placeholder) }
                    } @else {
                        @for option in selected.iter().take(props.max_count) {
                            span class=(badge_class) {
                                @if let Some(icon) = &option.icon {
                                    span class=(icon) aria-hidden="true" {}
                                }
                                (option.label)
                            }
                        }
                        @if collapsed > 0 {
                            span class="badge badge-more" { "+ " (collapsed) " más" }
                        }
                    }
                }
                div class="multi-select-popover" id=(popover_id) popover role="dialog" aria-modal="true" {
                    fieldset class="multi-select-options"
                        disabled[field.disabled]
                        hx-post=[notify.url]
                        hx-trigger=[notify.trigger()]
                        hx-target=[notify.target]
                        hx-include=[notify.url.map(|_| "this")] {
                        @for option in props.options {
                            label class="multi-select-option" {
                                input type="checkbox"
                                    name=(field.name)
                                    value=(option.value)
                                    checked[chosen.contains(&option.value.as_str())];
                                (option.label)
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Multi-select attributes with config defaults applied
struct MultiSelectProps<'a> {
    placeholder: &'a str,
    options: &'a [MultiSelectOption],
    max_count: usize,
    animation: Option<f32>,
    variant: MultiSelectVariant,
}

fn custom_render(binding: &FieldBinding<'_>, render: Option<&RenderFn>) -> Markup {
    match render {
        Some(render) => render.call(binding),
        None => html! {},
    }
}
