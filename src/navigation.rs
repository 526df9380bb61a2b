use serde::{Deserialize, Serialize};

/// The closed set of top-level views.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Home,
    About,
    Internships,
    Events,
    Gallery,
    Testimonials,
    Blog,
    Contact,
    Faq,
    Admin,
}

impl View {
    /// Navbar order.
    pub const MENU: [View; 9] = [
        Self::Home,
        Self::About,
        Self::Internships,
        Self::Events,
        Self::Gallery,
        Self::Testimonials,
        Self::Blog,
        Self::Contact,
        Self::Faq,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Internships => "internships",
            Self::Events => "events",
            Self::Gallery => "gallery",
            Self::Testimonials => "testimonials",
            Self::Blog => "blog",
            Self::Contact => "contact",
            Self::Faq => "faq",
            Self::Admin => "admin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Faq => "FAQ",
            Self::Home => "Home",
            Self::About => "About",
            Self::Internships => "Internships",
            Self::Events => "Events",
            Self::Gallery => "Gallery",
            Self::Testimonials => "Testimonials",
            Self::Blog => "Blog",
            Self::Contact => "Contact",
            Self::Admin => "Admin",
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            other => format!("/{}", other.as_str()),
        }
    }

    /// The admin view renders without the navbar and footer.
    pub fn shows_shell(&self) -> bool {
        *self != Self::Admin
    }

    /// Unknown names fall back to the home view.
    pub fn parse_or_home(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().trim_start_matches('/').to_lowercase();
        if name.is_empty() {
            return Ok(Self::Home);
        }

        Self::MENU
            .into_iter()
            .chain(std::iter::once(Self::Admin))
            .find(|view| view.as_str() == name)
            .ok_or_else(|| format!("invalid view: {}", s))
    }
}

/// One navbar entry as rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: String,
    pub active: bool,
}

pub fn nav_items(current: View) -> Vec<NavItem> {
    View::MENU
        .into_iter()
        .map(|view| NavItem {
            label: view.label(),
            path: view.path(),
            active: view == current,
        })
        .collect()
}
