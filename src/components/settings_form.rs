//! Settings Form
//!
//! Generates an HTML form from a settings mapping. Each field gets a
//! widget matching its value type, and the form POSTs its URL-encoded
//! fields straight back to the API; the response is not consumed.

use leptos::*;

use crate::api::{SettingValue, Settings};

/// Form generated from a settings mapping
#[component]
pub fn SettingsForm(data: Settings, action: String) -> impl IntoView {
    view! {
        <form method="post" action=action class="space-y-4 max-w-xl">
            {data.into_iter().map(|(name, value)| view! {
                <div class="bg-gray-800 rounded-lg p-4">
                    <SettingField name=name value=value />
                </div>
            }).collect_view()}

            <input
                type="submit"
                value="Save"
                class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium
                       transition-colors cursor-pointer"
            />
        </form>
    }
}

/// One field, dispatched exhaustively on the value type
#[component]
fn SettingField(name: String, value: SettingValue) -> impl IntoView {
    match value {
        SettingValue::Text(current) => {
            view! { <TextField name=name current=current /> }.into_view()
        }
        SettingValue::Number(current) => {
            view! { <NumberField name=name current=current /> }.into_view()
        }
        SettingValue::Toggle(current) => {
            view! { <ToggleField name=name current=current /> }.into_view()
        }
    }
}

/// Text input pre-filled with the current value
#[component]
fn TextField(name: String, current: String) -> impl IntoView {
    view! {
        <label class="block text-sm text-gray-400">
            {format!("{}: ", name)}
            <input
                type="text"
                name=name.clone()
                value=current
                class="ml-2 bg-gray-700 rounded px-3 py-2 border border-gray-600
                       focus:border-primary-500 focus:outline-none"
            />
        </label>
    }
}

/// Number input pre-filled with the current value
#[component]
fn NumberField(name: String, current: f64) -> impl IntoView {
    view! {
        <label class="block text-sm text-gray-400">
            {format!("{}: ", name)}
            <input
                type="number"
                name=name.clone()
                value=number_value(current)
                class="ml-2 bg-gray-700 rounded px-3 py-2 border border-gray-600
                       focus:border-primary-500 focus:outline-none"
            />
        </label>
    }
}

/// Radio pair with the current boolean pre-selected
#[component]
fn ToggleField(name: String, current: bool) -> impl IntoView {
    let true_id = format!("{}-true", name);
    let false_id = format!("{}-false", name);
    let unchecked = !current;

    view! {
        <span class="block text-sm text-gray-400">
            {format!("{}: ", name)}
            <input
                type="radio"
                name=name.clone()
                id=true_id.clone()
                value="true"
                checked=current
                class="ml-2"
            />
            <label for=true_id class="ml-1">"true"</label>
            <input
                type="radio"
                name=name
                id=false_id.clone()
                value="false"
                checked=unchecked
                class="ml-3"
            />
            <label for=false_id class="ml-1">"false"</label>
        </span>
    }
}

/// Pre-fill string for a number input. Integral values lose the `.0` the
/// float type would otherwise print.
fn number_value(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_value_integral() {
        assert_eq!(number_value(10.0), "10");
        assert_eq!(number_value(0.0), "0");
        assert_eq!(number_value(-3.0), "-3");
    }

    #[test]
    fn test_number_value_fractional() {
        assert_eq!(number_value(2.5), "2.5");
    }

    #[test]
    fn test_settings_map_orders_fields_deterministically() {
        let json = r#"{"limit": 10, "enabled": true, "label": "x"}"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        let names: Vec<_> = settings.keys().cloned().collect();
        assert_eq!(names, vec!["enabled", "label", "limit"]);
    }
}
