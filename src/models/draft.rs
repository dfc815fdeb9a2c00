use std::fmt;

use chrono::NaiveDate;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use super::briefings::{Budget, ContentStatus, Maintenance, ProjectType, SiteManager};

/// The wizard's in-progress answers. Every field is optional until submit.
/// Converting one into a [`BriefingPatch`] sets exactly its `Some` fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BriefingDraft {
    // Step 1: contact & project basics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_type: Option<ProjectType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_domain: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<String>>,

    // Step 2: visual identity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_logo: Option<bool>,
    /// Binary asset waiting to be uploaded on submit. Never persisted.
    #[serde(skip)]
    pub logo_file: Option<LogoFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_colors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visual_references: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub design_style: Option<String>,

    // Step 3: site structure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages_needed: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_pages: Option<String>,

    // Step 4: functionalities
    #[serde(skip_serializing_if = "Option::is_none")]
    pub functionalities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_functionalities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_functionalities: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub integrations: Option<String>,

    // Step 5: final logistics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_deadline: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<Budget>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_content: Option<ContentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub needs_maintenance: Option<Maintenance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub who_manages: Option<SiteManager>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
}

/// A change to the answers. Per field: absent leaves the value alone,
/// `null` clears it, anything else replaces it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BriefingPatch {
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub contact_name: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub contact_phone: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub contact_email: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub project_name: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub project_type: Option<Option<ProjectType>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub project_description: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub has_domain: Option<Option<bool>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub domain_name: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub products: Option<Option<Vec<String>>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub has_logo: Option<Option<bool>>,
    #[serde(skip)]
    pub logo_file: Option<Option<LogoFile>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub logo_url: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub brand_colors: Option<Option<Vec<String>>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub visual_references: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub design_style: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub pages_needed: Option<Option<Vec<String>>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub other_pages: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub functionalities: Option<Option<Vec<String>>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub custom_functionalities: Option<Option<Vec<String>>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub other_functionalities: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub integrations: Option<Option<String>>,
    /// The date input sends `""` when cleared.
    #[serde(default, deserialize_with = "blank_or_date")]
    pub launch_deadline: Option<Option<NaiveDate>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub budget: Option<Option<Budget>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub has_content: Option<Option<ContentStatus>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub needs_maintenance: Option<Option<Maintenance>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub who_manages: Option<Option<SiteManager>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub additional_info: Option<Option<String>>,
}

macro_rules! for_each_field {
    ($apply:ident) => {
        $apply!(
            contact_name,
            contact_phone,
            contact_email,
            project_name,
            project_type,
            project_description,
            has_domain,
            domain_name,
            products,
            has_logo,
            logo_file,
            logo_url,
            brand_colors,
            visual_references,
            design_style,
            pages_needed,
            other_pages,
            functionalities,
            custom_functionalities,
            other_functionalities,
            integrations,
            launch_deadline,
            budget,
            has_content,
            needs_maintenance,
            who_manages,
            additional_info
        )
    };
}

impl BriefingPatch {
    /// A patch that turns any draft into a copy of `draft`.
    pub fn replacing(draft: &BriefingDraft) -> Self {
        macro_rules! every {
            ($($field:ident),+) => {
                BriefingPatch {
                    $($field: Some(draft.$field.clone()),)+
                }
            };
        }
        for_each_field!(every)
    }
}

/// Only the fields that are set become part of the patch.
impl From<BriefingDraft> for BriefingPatch {
    fn from(draft: BriefingDraft) -> Self {
        macro_rules! present {
            ($($field:ident),+) => {
                BriefingPatch {
                    $($field: draft.$field.map(Some),)+
                }
            };
        }
        for_each_field!(present)
    }
}

impl From<&BriefingDraft> for BriefingPatch {
    fn from(draft: &BriefingDraft) -> Self {
        draft.clone().into()
    }
}

fn blank_or_date<'de, D>(deserializer: D) -> Result<Option<Option<NaiveDate>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(Some(None)),
        Some(text) if text.trim().is_empty() => Ok(Some(None)),
        Some(text) => NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
            .map(|date| Some(Some(date)))
            .map_err(de::Error::custom),
    }
}

impl BriefingDraft {
    /// Shallow merge: every field named in `patch` is overwritten (or
    /// cleared), everything else is kept.
    pub fn merge(&mut self, patch: impl Into<BriefingPatch>) {
        let patch = patch.into();
        macro_rules! overwrite {
            ($($field:ident),+) => {{
                $(
                    if let Some(value) = patch.$field {
                        self.$field = value;
                    }
                )+
            }};
        }
        for_each_field!(overwrite)
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// An uploaded logo held in memory until the briefing is submitted.
#[derive(Clone, PartialEq)]
pub struct LogoFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl LogoFile {
    /// Text after the last `.` of the file name, or the whole name when
    /// there is no dot.
    pub fn extension(&self) -> &str {
        self.file_name.rsplit('.').next().unwrap_or_default()
    }
}

impl fmt::Debug for LogoFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogoFile")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}
