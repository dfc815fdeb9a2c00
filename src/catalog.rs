//! Fixed vocabularies shown by the wizard steps and reused by the admin views.
//!
//! Design styles and functionalities depend on the project type: the same
//! identifier (for example `newsletter`) appears under several types, so a
//! label lookup always needs the type as well as the id.

use serde::Serialize;

use crate::models::briefings::{Budget, ContentStatus, Maintenance, ProjectType, SiteManager};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepInfo {
    pub id: u8,
    pub title: &'static str,
    pub description: &'static str,
}

pub const STEPS: [StepInfo; 5] = [
    StepInfo {
        id: 1,
        title: "Sobre o Projeto",
        description: "Informações básicas",
    },
    StepInfo {
        id: 2,
        title: "Visual e Identidade",
        description: "Marca e design",
    },
    StepInfo {
        id: 3,
        title: "Estrutura do Site",
        description: "Páginas necessárias",
    },
    StepInfo {
        id: 4,
        title: "Funcionalidades",
        description: "Recursos e integrações",
    },
    StepInfo {
        id: 5,
        title: "Detalhes Finais",
        description: "Prazos e informações práticas",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DesignStyle {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OptionItem {
    pub id: &'static str,
    pub label: &'static str,
}

const fn item(id: &'static str, label: &'static str) -> OptionItem {
    OptionItem { id, label }
}

const fn style(
    id: &'static str,
    label: &'static str,
    description: &'static str,
    image: &'static str,
) -> DesignStyle {
    DesignStyle {
        id,
        label,
        description,
        image,
    }
}

pub const PAGE_OPTIONS: [OptionItem; 8] = [
    item("home", "Página Inicial (Home)"),
    item("sobre", "Sobre Nós / Quem Somos"),
    item("servicos", "Serviços / Produtos"),
    item("portfolio", "Portfólio / Galeria"),
    item("blog", "Blog / Notícias"),
    item("contato", "Contato"),
    item("depoimentos", "Depoimentos / Avaliações"),
    item("faq", "FAQ / Perguntas Frequentes"),
];

/// Brand colours the picker accepts at most.
pub const MAX_BRAND_COLORS: usize = 10;

/// Colour preselected in the picker's "add" slot.
pub const DEFAULT_NEW_COLOR: &str = "#3b82f6";

const ECOMMERCE_STYLES: [DesignStyle; 4] = [
    style(
        "moderno-ecommerce",
        "Moderno e Clean",
        "Layout limpo, foco nos produtos, navegação intuitiva",
        "/modern-ecommerce-clean-product-focus-intuitive-nav.jpg",
    ),
    style(
        "luxo-ecommerce",
        "Luxo e Sofisticação",
        "Elegante, premium, cores escuras, detalhes refinados",
        "/luxury-sophisticated-ecommerce-elegant-premium-dark.jpg",
    ),
    style(
        "vibrante-ecommerce",
        "Vibrante e Jovem",
        "Colorido, dinâmico, apelo jovem, energético",
        "/vibrant-young-ecommerce-colorful-dynamic-energetic.jpg",
    ),
    style(
        "minimalista-ecommerce",
        "Minimalista",
        "Simples, essencial, muito espaço branco, tipografia forte",
        "/minimalist-ecommerce-simple-white-space-typography.jpg",
    ),
];

const LANDING_STYLES: [DesignStyle; 4] = [
    style(
        "conversao-landing",
        "Foco em Conversão",
        "CTAs destacados, prova social, design persuasivo",
        "/conversion-focused-landing-cta-social-proof-persuas.jpg",
    ),
    style(
        "moderno-landing",
        "Moderno e Impactante",
        "Visual forte, animações, hero section marcante",
        "/modern-impactful-landing-strong-visual-animations.jpg",
    ),
    style(
        "profissional-landing",
        "Profissional e Confiável",
        "Corporativo, sério, transmite credibilidade",
        "/professional-trustworthy-landing-corporate-credible.jpg",
    ),
    style(
        "criativo-landing",
        "Criativo e Diferente",
        "Ousado, único, quebra padrões, memorável",
        "/creative-unique-landing-bold-memorable-different.jpg",
    ),
];

const INSTITUTIONAL_STYLES: [DesignStyle; 4] = [
    style(
        "corporativo-institucional",
        "Corporativo e Profissional",
        "Formal, confiável, cores neutras, estruturado",
        "/corporate-professional-institutional-formal-neutral.jpg",
    ),
    style(
        "moderno-institucional",
        "Moderno e Acessível",
        "Contemporâneo, amigável, clean, acolhedor",
        "/modern-accessible-institutional-contemporary-friend.jpg",
    ),
    style(
        "inovador-institucional",
        "Inovador e Tech",
        "Tecnológico, futurista, dinâmico, inovador",
        "/innovative-tech-institutional-futuristic-dynamic.jpg",
    ),
    style(
        "humanizado-institucional",
        "Humanizado e Próximo",
        "Pessoal, caloroso, fotos reais, conexão emocional",
        "/humanized-personal-institutional-warm-emotional.jpg",
    ),
];

const BLOG_STYLES: [DesignStyle; 4] = [
    style(
        "editorial-blog",
        "Editorial e Limpo",
        "Foco na leitura, tipografia clara, espaçamento generoso",
        "/editorial-clean-blog-reading-focus-typography.jpg",
    ),
    style(
        "magazine-blog",
        "Estilo Magazine",
        "Grid de artigos, imagens grandes, visual rico",
        "/magazine-style-blog-article-grid-rich-visual.jpg",
    ),
    style(
        "minimalista-blog",
        "Minimalista",
        "Simples, sem distrações, foco total no conteúdo",
        "/minimalist-blog-simple-distraction-free-content.jpg",
    ),
    style(
        "moderno-blog",
        "Moderno e Dinâmico",
        "Layouts variados, cards, interativo, visual atraente",
        "/modern-dynamic-blog-varied-layouts-interactive.jpg",
    ),
];

const PORTFOLIO_STYLES: [DesignStyle; 4] = [
    style(
        "minimalista-portfolio",
        "Minimalista",
        "Trabalhos em destaque, muito espaço branco, elegante",
        "/minimalist-portfolio-work-showcase-white-space.jpg",
    ),
    style(
        "criativo-portfolio",
        "Criativo e Ousado",
        "Layouts únicos, animações, personalidade forte",
        "/creative-bold-portfolio-unique-layouts-personality.jpg",
    ),
    style(
        "grid-portfolio",
        "Grid Organizado",
        "Galeria estruturada, fácil navegação, profissional",
        "/organized-grid-portfolio-structured-gallery-profes.jpg",
    ),
    style(
        "storytelling-portfolio",
        "Storytelling",
        "Narrativo, imersivo, conta histórias dos projetos",
        "/storytelling-portfolio-narrative-immersive-project.jpg",
    ),
];

const ECOMMERCE_FUNCTIONALITIES: [OptionItem; 10] = [
    item("carrinho", "Carrinho de compras"),
    item("pagamento", "Sistema de pagamento online"),
    item("cadastro-produtos", "Cadastro de produtos"),
    item("busca-produtos", "Busca e filtros de produtos"),
    item("wishlist", "Lista de desejos"),
    item("avaliacoes", "Sistema de avaliações"),
    item("cupons", "Cupons de desconto"),
    item("rastreamento", "Rastreamento de pedidos"),
    item("area-cliente", "Área do cliente"),
    item("newsletter", "Newsletter"),
];

const LANDING_FUNCTIONALITIES: [OptionItem; 9] = [
    item("formulario-lead", "Formulário de captura de leads"),
    item("cta-whatsapp", "Botão de WhatsApp"),
    item("popup", "Pop-up de conversão"),
    item("countdown", "Contador regressivo"),
    item("depoimentos", "Seção de depoimentos"),
    item("faq", "FAQ / Perguntas frequentes"),
    item("video", "Vídeo de apresentação"),
    item("chat", "Chat online"),
    item("integracao-email", "Integração com e-mail marketing"),
];

const INSTITUTIONAL_FUNCTIONALITIES: [OptionItem; 10] = [
    item("formulario-contato", "Formulário de contato"),
    item("mapa", "Mapa de localização"),
    item("chat", "Chat online / WhatsApp"),
    item("newsletter", "Newsletter"),
    item("multiidioma", "Múltiplos idiomas"),
    item("area-cliente", "Área do cliente / Login"),
    item("busca", "Sistema de busca"),
    item("galeria", "Galeria de fotos/vídeos"),
    item("depoimentos", "Depoimentos de clientes"),
    item("equipe", "Página da equipe"),
];

const BLOG_FUNCTIONALITIES: [OptionItem; 9] = [
    item("comentarios", "Sistema de comentários"),
    item("busca", "Busca de artigos"),
    item("categorias", "Categorias e tags"),
    item("newsletter", "Newsletter"),
    item("compartilhamento", "Botões de compartilhamento social"),
    item("autor", "Perfis de autores"),
    item("relacionados", "Artigos relacionados"),
    item("rss", "Feed RSS"),
    item("area-autor", "Área do autor"),
];

const PORTFOLIO_FUNCTIONALITIES: [OptionItem; 8] = [
    item("galeria", "Galeria de projetos"),
    item("filtros", "Filtros por categoria"),
    item("lightbox", "Visualização em lightbox"),
    item("formulario-contato", "Formulário de contato"),
    item("depoimentos", "Depoimentos de clientes"),
    item("sobre", "Página sobre mim/empresa"),
    item("blog", "Blog integrado"),
    item("download-cv", "Download de CV/portfólio"),
];

/// Design styles offered for a project type. Unset and `outro` fall back to
/// the institutional set.
pub fn design_styles(project_type: Option<ProjectType>) -> &'static [DesignStyle] {
    match project_type {
        Some(ProjectType::Ecommerce) => &ECOMMERCE_STYLES,
        Some(ProjectType::Landing) => &LANDING_STYLES,
        Some(ProjectType::Blog) => &BLOG_STYLES,
        Some(ProjectType::Portfolio) => &PORTFOLIO_STYLES,
        Some(ProjectType::Institucional | ProjectType::Outro) | None => &INSTITUTIONAL_STYLES,
    }
}

/// Functionalities offered for a project type, with the same fallback as
/// [`design_styles`].
pub fn functionalities(project_type: Option<ProjectType>) -> &'static [OptionItem] {
    match project_type {
        Some(ProjectType::Ecommerce) => &ECOMMERCE_FUNCTIONALITIES,
        Some(ProjectType::Landing) => &LANDING_FUNCTIONALITIES,
        Some(ProjectType::Blog) => &BLOG_FUNCTIONALITIES,
        Some(ProjectType::Portfolio) => &PORTFOLIO_FUNCTIONALITIES,
        Some(ProjectType::Institucional | ProjectType::Outro) | None => {
            &INSTITUTIONAL_FUNCTIONALITIES
        }
    }
}

pub fn design_style_label(project_type: Option<ProjectType>, id: &str) -> Option<&'static str> {
    design_styles(project_type)
        .iter()
        .find(|s| s.id == id)
        .map(|s| s.label)
}

pub fn functionality_label(project_type: Option<ProjectType>, id: &str) -> Option<&'static str> {
    functionalities(project_type)
        .iter()
        .find(|f| f.id == id)
        .map(|f| f.label)
}

pub fn page_label(id: &str) -> Option<&'static str> {
    PAGE_OPTIONS.iter().find(|p| p.id == id).map(|p| p.label)
}

/// How steps 2 and 4 refer to the site being built.
pub fn site_noun(project_type: Option<ProjectType>) -> &'static str {
    match project_type {
        Some(ProjectType::Ecommerce) => "e-commerce",
        Some(ProjectType::Landing) => "landing page",
        Some(ProjectType::Blog) => "blog",
        Some(ProjectType::Portfolio) => "portfólio",
        _ => "site",
    }
}

/// `#rrggbb` → `RGB(r, g, b)`; anything unparsable renders as black.
pub fn hex_to_rgb(hex: &str) -> String {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return "RGB(0, 0, 0)".to_string();
    }
    let channel = |at: usize| u8::from_str_radix(&digits[at..at + 2], 16).unwrap_or_default();
    format!("RGB({}, {}, {})", channel(0), channel(2), channel(4))
}

impl ProjectType {
    pub fn label(self) -> &'static str {
        match self {
            ProjectType::Institucional => "Site Institucional",
            ProjectType::Ecommerce => "E-commerce",
            ProjectType::Landing => "Landing Page",
            ProjectType::Blog => "Blog/Portal",
            ProjectType::Portfolio => "Portfólio",
            ProjectType::Outro => "Outro",
        }
    }
}

impl Budget {
    pub fn label(self) -> &'static str {
        match self {
            Budget::UpTo5k => "Até R$ 5.000",
            Budget::From5kTo15k => "R$ 5.000 - R$ 15.000",
            Budget::From15kTo30k => "R$ 15.000 - R$ 30.000",
            Budget::Above30k => "Acima de R$ 30.000",
            Budget::Undefined => "Ainda não defini",
        }
    }
}

impl ContentStatus {
    pub fn label(self) -> &'static str {
        match self {
            ContentStatus::Complete => "Sim, tenho textos e imagens prontos",
            ContentStatus::Partial => "Tenho parte do conteúdo",
            ContentStatus::Missing => "Não, preciso de ajuda com o conteúdo",
        }
    }
}

impl Maintenance {
    pub fn label(self) -> &'static str {
        match self {
            Maintenance::Monthly => "Sim, manutenção mensal",
            Maintenance::OnDemand => "Sim, apenas quando necessário",
            Maintenance::No => "Não, vou gerenciar sozinho",
            Maintenance::Unsure => "Não sei ainda",
        }
    }
}

impl SiteManager {
    pub fn label(self) -> &'static str {
        match self {
            SiteManager::Myself => "Eu mesmo vou atualizar",
            SiteManager::InternalTeam => "Minha equipe interna",
            SiteManager::Outsourced => "Quero contratar alguém",
            SiteManager::Undecided => "Ainda não decidi",
        }
    }
}
