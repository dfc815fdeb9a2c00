//! Admin presentation of stored briefings: list cards and sectioned detail.

use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};
use uuid::Uuid;

use crate::catalog::{self, hex_to_rgb};
use crate::models::briefings::{Model as Briefing, ProjectType};

const MONTHS_PT: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

/// Products shown on a card before collapsing into a `+N` badge.
const CARD_PRODUCTS: usize = 3;

/// `14 de novembro de 2023`
pub fn long_date(at: DateTime<Utc>) -> String {
    format!(
        "{:02} de {} de {}",
        at.day(),
        MONTHS_PT[at.month0() as usize],
        at.year()
    )
}

/// `14 de novembro de 2023 às 22:13`
pub fn long_date_time(at: DateTime<Utc>) -> String {
    format!("{} às {:02}:{:02}", long_date(at), at.hour(), at.minute())
}

pub fn short_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// File name offered when downloading a briefing's logo.
pub fn logo_download_name(project_name: &str) -> String {
    let slug = project_name
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    format!("logo-{slug}.png")
}

/// Summary shown for each briefing in the admin list.
#[derive(Debug, Clone, PartialEq)]
pub struct BriefingCard {
    pub id: Uuid,
    pub project_name: String,
    pub type_label: &'static str,
    pub description: String,
    pub logo_url: Option<String>,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub created_on: String,
    pub products: Vec<String>,
    pub more_products: usize,
    pub deadline: Option<String>,
    pub budget: Option<&'static str>,
}

impl From<&Briefing> for BriefingCard {
    fn from(b: &Briefing) -> Self {
        let products = b.products.as_deref().unwrap_or_default();

        Self {
            id: b.id,
            project_name: b.project_name.clone(),
            type_label: b.project_type.label(),
            description: b.project_description.clone(),
            logo_url: b.logo_url.clone(),
            contact_name: non_blank(&b.contact_name),
            contact_email: non_blank(&b.contact_email),
            contact_phone: non_blank(&b.contact_phone),
            created_on: long_date(b.created_at),
            products: products.iter().take(CARD_PRODUCTS).cloned().collect(),
            more_products: products.len().saturating_sub(CARD_PRODUCTS),
            deadline: b.launch_deadline.map(short_date),
            budget: b.budget.map(|budget| budget.label()),
        }
    }
}

/// "1 briefing no total" / "3 briefings no total"
pub fn count_label(total: usize) -> String {
    let noun = if total == 1 { "briefing" } else { "briefings" };
    format!("{total} {noun} no total")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Swatch {
    pub hex: String,
    pub rgb: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EntryValue {
    Text(String),
    Tags(Vec<String>),
    Colors(Vec<Swatch>),
    Image(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub label: &'static str,
    pub value: EntryValue,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: &'static str,
    pub entries: Vec<Entry>,
}

/// Collects the non-empty entries of one section.
struct SectionBuilder {
    title: &'static str,
    entries: Vec<Entry>,
}

impl SectionBuilder {
    fn new(title: &'static str) -> Self {
        Self {
            title,
            entries: Vec::new(),
        }
    }

    fn text(mut self, label: &'static str, value: Option<String>) -> Self {
        if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
            self.entries.push(Entry {
                label,
                value: EntryValue::Text(value),
            });
        }
        self
    }

    fn tags(mut self, label: &'static str, values: Vec<String>) -> Self {
        if !values.is_empty() {
            self.entries.push(Entry {
                label,
                value: EntryValue::Tags(values),
            });
        }
        self
    }

    fn colors(mut self, label: &'static str, colors: &[String]) -> Self {
        if !colors.is_empty() {
            let swatches = colors
                .iter()
                .map(|hex| Swatch {
                    hex: hex.to_uppercase(),
                    rgb: hex_to_rgb(hex),
                })
                .collect();
            self.entries.push(Entry {
                label,
                value: EntryValue::Colors(swatches),
            });
        }
        self
    }

    fn image(mut self, label: &'static str, url: Option<&str>) -> Self {
        if let Some(url) = url.filter(|u| !u.is_empty()) {
            self.entries.push(Entry {
                label,
                value: EntryValue::Image(url.to_string()),
            });
        }
        self
    }

    fn build(self) -> Option<Section> {
        (!self.entries.is_empty()).then_some(Section {
            title: self.title,
            entries: self.entries,
        })
    }
}

/// Everything the detail page shows for one briefing.
#[derive(Debug, Clone, PartialEq)]
pub struct BriefingDetail {
    pub id: Uuid,
    pub project_name: String,
    pub received_at: String,
    pub has_logo_file: bool,
    pub sections: Vec<Section>,
}

impl From<&Briefing> for BriefingDetail {
    fn from(b: &Briefing) -> Self {
        let project_type = Some(b.project_type);

        let domain = match (b.has_domain, non_blank(&b.domain_name)) {
            (true, Some(name)) => name,
            (true, None) => "Sim, possui".to_string(),
            (false, _) => "Não possui".to_string(),
        };

        let sections = [
            SectionBuilder::new("Informações de Contato")
                .text("Nome", b.contact_name.clone())
                .text("E-mail", b.contact_email.clone())
                .text("Telefone", b.contact_phone.clone())
                .build(),
            SectionBuilder::new("Sobre o Projeto")
                .text("Tipo", Some(b.project_type.label().to_string()))
                .text("Descrição", Some(b.project_description.clone()))
                .tags("Produtos", list(&b.products).to_vec())
                .text("Domínio", Some(domain))
                .build(),
            SectionBuilder::new("Visual e Identidade")
                .image("Logo", b.logo_url.as_deref())
                .colors("Cores da marca", list(&b.brand_colors))
                .text(
                    "Estilo de design",
                    b.design_style
                        .as_deref()
                        .map(|id| labelled(catalog::design_style_label(project_type, id), id)),
                )
                .text("Referências visuais", b.visual_references.clone())
                .build(),
            SectionBuilder::new("Estrutura do Site")
                .tags(
                    "Páginas",
                    list(&b.pages_needed)
                        .iter()
                        .map(|id| labelled(catalog::page_label(id), id))
                        .collect(),
                )
                .text("Outras páginas", b.other_pages.clone())
                .build(),
            SectionBuilder::new("Funcionalidades")
                .tags("Funcionalidades", functionality_labels(project_type, &b.functionalities))
                .tags(
                    "Funcionalidades personalizadas",
                    list(&b.custom_functionalities).to_vec(),
                )
                .text("Detalhes adicionais", b.other_functionalities.clone())
                .text("Integrações", b.integrations.clone())
                .build(),
            SectionBuilder::new("Detalhes Finais")
                .text("Prazo de lançamento", b.launch_deadline.map(short_date))
                .text("Orçamento", b.budget.map(|v| v.label().to_string()))
                .text("Conteúdo", b.has_content.map(|v| v.label().to_string()))
                .text("Manutenção", b.needs_maintenance.map(|v| v.label().to_string()))
                .text("Quem vai gerenciar", b.who_manages.map(|v| v.label().to_string()))
                .text("Observações", b.additional_info.clone())
                .build(),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self {
            id: b.id,
            project_name: b.project_name.clone(),
            received_at: long_date_time(b.created_at),
            has_logo_file: b.logo_url.is_some(),
            sections,
        }
    }
}

/// Functionality ids carry meaning only together with the project type.
fn functionality_labels(project_type: Option<ProjectType>, ids: &Option<Vec<String>>) -> Vec<String> {
    list(ids)
        .iter()
        .map(|id| labelled(catalog::functionality_label(project_type, id), id))
        .collect()
}

fn labelled(label: Option<&str>, id: &str) -> String {
    label.unwrap_or(id).to_string()
}

fn list(values: &Option<Vec<String>>) -> &[String] {
    values.as_deref().unwrap_or_default()
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value.clone().filter(|v| !v.trim().is_empty())
}
