//! Medicine Card Component
//!
//! A single medicine in the dashboard list with edit/delete actions.

use leptos::*;

use crate::state::global::{Medicine, MedicineType};

/// Icon for a medicine kind
fn type_icon(kind: MedicineType) -> &'static str {
    match kind {
        MedicineType::Tablet => "💊",
        MedicineType::Capsule => "💊",
        MedicineType::Syrup => "🍯",
        MedicineType::Injection => "💉",
        MedicineType::Drops => "💧",
        MedicineType::Inhaler => "🌬️",
        MedicineType::Cream => "🧴",
        MedicineType::Other => "🩺",
    }
}

/// Short human date from the backend's ISO-8601 timestamp
fn format_created_at(created_at: &str) -> Option<String> {
    chrono::DateTime::parse_from_rfc3339(created_at)
        .ok()
        .map(|dt| dt.format("%b %d, %Y").to_string())
}

/// Medicine card component
#[component]
pub fn MedicineCard(
    medicine: Medicine,
    /// True while this card's delete call is in flight
    #[prop(into)]
    deleting: Signal<bool>,
    on_edit: Callback<Medicine>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let for_edit = medicine.clone();
    let id_for_delete = medicine.id.clone();

    let created = medicine
        .created_at
        .as_deref()
        .and_then(format_created_at);

    view! {
        <div class="bg-white dark:bg-gray-800 rounded-lg shadow p-4 border border-gray-200
                    dark:border-gray-700 hover:border-gray-300 dark:hover:border-gray-600
                    transition">
            <div class="flex items-start justify-between">
                <div class="flex items-center space-x-3">
                    <span class="text-2xl">{type_icon(medicine.kind)}</span>
                    <div>
                        <h3 class="font-semibold">{medicine.name.clone()}</h3>
                        <span class="text-xs text-gray-400 bg-gray-100 dark:bg-gray-700
                                     rounded px-2 py-0.5">
                            {medicine.kind.as_str()}
                        </span>
                    </div>
                </div>
            </div>

            <div class="mt-3 text-sm text-gray-500 dark:text-gray-400 space-y-1">
                <p>"Dosage: " {medicine.dosage.clone()}</p>
                <p>"Frequency: " {medicine.frequency.clone()}</p>
                {created.map(|date| view! {
                    <p class="text-xs">"Added " {date}</p>
                })}
            </div>

            <div class="mt-4 flex space-x-2">
                <button
                    on:click=move |_| on_edit.call(for_edit.clone())
                    class="flex-1 px-3 py-2 text-sm rounded-lg bg-gray-100 dark:bg-gray-700
                           hover:bg-gray-200 dark:hover:bg-gray-600 transition-colors"
                >
                    "Edit"
                </button>
                <button
                    on:click=move |_| on_delete.call(id_for_delete.clone())
                    disabled=move || deleting.get()
                    class="flex-1 px-3 py-2 text-sm rounded-lg bg-red-500/10 text-red-500
                           hover:bg-red-500/20 disabled:opacity-50 transition-colors"
                >
                    {move || if deleting.get() { "Deleting..." } else { "Delete" }}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_created_at() {
        assert_eq!(
            format_created_at("2024-03-01T10:00:00Z").as_deref(),
            Some("Mar 01, 2024")
        );
        assert!(format_created_at("yesterday").is_none());
    }

    #[test]
    fn test_every_kind_has_an_icon() {
        for kind in MedicineType::ALL {
            assert!(!type_icon(kind).is_empty());
        }
    }
}
