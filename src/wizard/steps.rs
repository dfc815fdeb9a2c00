//! What each wizard step lets the user do, expressed as patches.

use serde::Deserialize;

use crate::catalog::{DEFAULT_NEW_COLOR, MAX_BRAND_COLORS};
use crate::models::briefings::ProjectType;
use crate::models::draft::BriefingDraft;

/// A single gesture inside one of the step forms. Plain field edits go
/// through `update_form_data` directly; these are the gestures that depend
/// on the current value of a list field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum StepAction {
    AddProduct { name: String },
    RemoveProduct { name: String },
    /// Backspace in an empty product input.
    RemoveLastProduct,
    AddColor {
        #[serde(default)]
        color: Option<String>,
    },
    RemoveColor { index: usize },
    UpdateColor { index: usize, color: String },
    TogglePage { id: String },
    ToggleFunctionality { id: String },
    AddCustomFunctionality { name: String },
    RemoveCustomFunctionality { index: usize },
}

impl StepAction {
    /// The patch this gesture produces against `current`, or `None` when the
    /// gesture changes nothing.
    pub fn patch_for(self, current: &BriefingDraft) -> Option<BriefingDraft> {
        match self {
            StepAction::AddProduct { name } => {
                let products = list(&current.products);
                let name = name.trim();
                if name.is_empty() || products.iter().any(|p| p == name) {
                    return None;
                }
                Some(products_patch(appended(products, name.to_string())))
            }
            StepAction::RemoveProduct { name } => {
                let products = list(&current.products);
                if !products.contains(&name) {
                    return None;
                }
                let remaining = products.iter().filter(|p| **p != name).cloned().collect();
                Some(products_patch(remaining))
            }
            StepAction::RemoveLastProduct => {
                let products = list(&current.products);
                let (_, rest) = products.split_last()?;
                Some(products_patch(rest.to_vec()))
            }
            StepAction::AddColor { color } => {
                let colors = list(&current.brand_colors);
                if colors.len() >= MAX_BRAND_COLORS {
                    return None;
                }
                let color = color.unwrap_or_else(|| DEFAULT_NEW_COLOR.to_string());
                Some(colors_patch(appended(colors, color)))
            }
            StepAction::RemoveColor { index } => {
                Some(colors_patch(without_index(list(&current.brand_colors), index)?))
            }
            StepAction::UpdateColor { index, color } => {
                let mut colors = list(&current.brand_colors).to_vec();
                let slot = colors.get_mut(index)?;
                if *slot == color {
                    return None;
                }
                *slot = color;
                Some(colors_patch(colors))
            }
            StepAction::TogglePage { id } => Some(BriefingDraft {
                pages_needed: Some(toggled(list(&current.pages_needed), id)),
                ..Default::default()
            }),
            StepAction::ToggleFunctionality { id } => Some(BriefingDraft {
                functionalities: Some(toggled(list(&current.functionalities), id)),
                ..Default::default()
            }),
            StepAction::AddCustomFunctionality { name } => {
                let name = name.trim();
                if name.is_empty() {
                    return None;
                }
                let custom = appended(list(&current.custom_functionalities), name.to_string());
                Some(custom_functionalities_patch(custom))
            }
            StepAction::RemoveCustomFunctionality { index } => {
                let custom = without_index(list(&current.custom_functionalities), index)?;
                Some(custom_functionalities_patch(custom))
            }
        }
    }
}

/// Fields marked as required on a step that are still blank. Informational
/// only: navigation is never blocked on it.
pub fn missing_required(step: u8, draft: &BriefingDraft) -> Vec<&'static str> {
    let mut missing = Vec::new();
    let mut check = |name: &'static str, present: bool| {
        if !present {
            missing.push(name);
        }
    };

    match step {
        1 => {
            check("contactName", filled(&draft.contact_name));
            check("contactPhone", filled(&draft.contact_phone));
            check("contactEmail", filled(&draft.contact_email));
            check("projectName", filled(&draft.project_name));
            check("projectType", draft.project_type.is_some());
            if draft.project_type == Some(ProjectType::Ecommerce) {
                check("products", !list(&draft.products).is_empty());
            }
            check("projectDescription", filled(&draft.project_description));
        }
        3 => check("pagesNeeded", !list(&draft.pages_needed).is_empty()),
        4 => check(
            "functionalities",
            !list(&draft.functionalities).is_empty()
                || !list(&draft.custom_functionalities).is_empty(),
        ),
        _ => {}
    }

    missing
}

fn filled(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

fn list(values: &Option<Vec<String>>) -> &[String] {
    values.as_deref().unwrap_or_default()
}

fn appended(values: &[String], value: String) -> Vec<String> {
    let mut updated = values.to_vec();
    updated.push(value);
    updated
}

fn without_index(values: &[String], index: usize) -> Option<Vec<String>> {
    if index >= values.len() {
        return None;
    }
    let mut updated = values.to_vec();
    updated.remove(index);
    Some(updated)
}

fn toggled(values: &[String], id: String) -> Vec<String> {
    if values.contains(&id) {
        values.iter().filter(|v| **v != id).cloned().collect()
    } else {
        appended(values, id)
    }
}

fn products_patch(products: Vec<String>) -> BriefingDraft {
    BriefingDraft {
        products: Some(products),
        ..Default::default()
    }
}

fn colors_patch(brand_colors: Vec<String>) -> BriefingDraft {
    BriefingDraft {
        brand_colors: Some(brand_colors),
        ..Default::default()
    }
}

fn custom_functionalities_patch(custom_functionalities: Vec<String>) -> BriefingDraft {
    BriefingDraft {
        custom_functionalities: Some(custom_functionalities),
        ..Default::default()
    }
}
